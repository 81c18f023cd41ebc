//! Field classification and the presentation tree.
//!
//! The classifier decides how a normalized field renders; the
//! formatter produces [`Node`]s for everything that does not need a
//! secondary fetch. Cross-reference fields classify as links here and
//! are turned into link nodes by the resolver in `holotable-fetch`.

pub mod table;

use crate::models::{FieldValue, LinkTable};

/// Fields holding free-form narrative text, rendered without any
/// capitalization or list splitting.
const NARRATIVE_FIELDS: &[&str] = &["opening_crawl"];

// ============================================================================
// Render Mode
// ============================================================================

/// How a field's value should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// A single hyperlink resolved from one locator.
    Link,
    /// A bulleted list of hyperlinks resolved from many locators.
    LinkList,
    /// A bulleted list of capitalized items.
    BulletList,
    /// Free-form narrative text, unmodified.
    Narrative,
    /// Plain text with each word capitalized.
    TitleText,
    /// A number in its text form, uncapitalized.
    NumberText,
}

/// Classifies a field into its render mode.
///
/// Classification is pure and deterministic: the same (field name,
/// value) pair always yields the same mode.
pub fn classify(field: &str, value: &FieldValue, links: &LinkTable) -> RenderMode {
    match value {
        FieldValue::Reference(_) => RenderMode::Link,
        FieldValue::ReferenceList(_) => RenderMode::LinkList,
        FieldValue::Sequence(_) => RenderMode::BulletList,
        FieldValue::Number(_) => RenderMode::NumberText,
        FieldValue::Text(text) => {
            // Normalization routes link fields to the reference
            // variants, so a Text here in a link field only happens
            // for hand-built records; treat it as a lone locator.
            if links.is_link_field(field) {
                RenderMode::Link
            } else if NARRATIVE_FIELDS.contains(&field) {
                RenderMode::Narrative
            } else if text.split(',').count() > 1 {
                RenderMode::BulletList
            } else {
                RenderMode::TitleText
            }
        }
    }
}

// ============================================================================
// Presentation Nodes
// ============================================================================

/// A rendered value: the presentation tree a value cell holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A text node.
    Text(String),
    /// A bulleted list of child nodes.
    List(Vec<Node>),
    /// A hyperlink with a resolved label.
    Link {
        /// Target locator.
        href: String,
        /// Resolved display label.
        label: String,
    },
}

impl Node {
    /// Creates a link node.
    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Link {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Formats a non-reference field value into its node.
///
/// Reference values need a secondary fetch and are resolved in
/// `holotable-fetch`; calling this on one returns its locator text
/// unresolved.
pub fn format_plain_value(field: &str, value: &FieldValue, links: &LinkTable) -> Node {
    match classify(field, value, links) {
        RenderMode::Narrative => match value {
            FieldValue::Text(text) => Node::Text(text.clone()),
            _ => Node::Text(String::new()),
        },
        RenderMode::NumberText => match value {
            FieldValue::Number(n) => Node::Text(FieldValue::number_text(*n)),
            _ => Node::Text(String::new()),
        },
        RenderMode::BulletList => {
            let items: Vec<String> = match value {
                FieldValue::Sequence(items) => items.clone(),
                FieldValue::Text(text) => text.split(',').map(str::to_string).collect(),
                _ => Vec::new(),
            };
            Node::List(
                items
                    .iter()
                    .map(|item| Node::Text(capitalize_word(item)))
                    .collect(),
            )
        }
        RenderMode::TitleText => match value {
            FieldValue::Text(text) => Node::Text(title_case(text)),
            _ => Node::Text(String::new()),
        },
        // Unresolved references degrade to their locator text.
        RenderMode::Link | RenderMode::LinkList => match value {
            FieldValue::Reference(url) | FieldValue::Text(url) => Node::Text(url.clone()),
            FieldValue::ReferenceList(urls) => Node::Text(urls.join(", ")),
            _ => Node::Text(String::new()),
        },
    }
}

// ============================================================================
// Capitalization
// ============================================================================

/// Trims a word and capitalizes its first letter.
pub fn capitalize_word(word: &str) -> String {
    let word = word.trim();
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalizes the first letter of each whitespace-separated word.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the Category cell label for a field name: underscores
/// become spaces and each word is capitalized.
pub fn display_label(field: &str) -> String {
    field
        .split('_')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Tests
// ============================================================================
