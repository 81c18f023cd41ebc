//! Text output formatting with colors.

use holotable_core::{Category, Node, ResourceTable};
use holotable_fetch::CharacterView;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";

/// Bullet used for list items.
const BULLET: &str = "•";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats a rendered table as aligned two-column text.
    pub fn format_table(&self, table: &ResourceTable) -> String {
        let width = table
            .rows()
            .iter()
            .map(|row| row.category.chars().count())
            .chain(table.header().iter().map(|h| h.chars().count()))
            .max()
            .unwrap_or(8);

        let mut lines = Vec::new();

        if let [category, value] = table.header() {
            lines.push(format!(
                "{}  {}",
                self.bold(&pad(category, width)),
                self.bold(value)
            ));
            lines.push("─".repeat(width + 20));
        }

        for row in table.rows() {
            let value_lines = self.node_lines(&row.value);
            let indent = " ".repeat(width + 2);

            match value_lines.split_first() {
                Some((first, rest)) => {
                    lines.push(format!("{}  {}", pad(&row.category, width), first));
                    for line in rest {
                        lines.push(format!("{indent}{line}"));
                    }
                }
                None => lines.push(pad(&row.category, width)),
            }
        }

        lines.join("\n")
    }

    /// Formats a character view.
    pub fn format_character(&self, view: &CharacterView) -> String {
        let mut lines = vec![self.bold(&view.name)];

        match (&view.portrait, &view.portrait_alt) {
            (Some(url), _) => lines.push(format!("Portrait: {}", self.cyan(url))),
            (None, Some(alt)) => lines.push(self.dim(alt)),
            (None, None) => {}
        }

        lines.join("\n")
    }

    /// Formats the categories list header.
    pub fn format_categories_header(&self) -> String {
        format!(
            "{:<12} {:<12} {}",
            self.bold("Category"),
            self.bold("API name"),
            self.bold("Max id")
        )
    }

    /// Formats a single category line.
    pub fn format_category_line(&self, category: Category) -> String {
        format!(
            "{:<12} {:<12} {}",
            category.display_name(),
            category.api_name(),
            category.config().max_resource
        )
    }

    /// Renders a node into display lines.
    fn node_lines(&self, node: &Node) -> Vec<String> {
        match node {
            Node::Text(text) => text.lines().map(str::to_string).collect(),
            Node::Link { href, label } => {
                vec![format!("{} {}", self.cyan(label), self.dim(&format!("({href})")))]
            }
            Node::List(items) => items
                .iter()
                .flat_map(|item| {
                    let mut lines = self.node_lines(item);
                    if let Some(first) = lines.first_mut() {
                        *first = format!("{BULLET} {first}");
                    }
                    lines
                })
                .collect(),
        }
    }

    // ========================================================================
    // Color/style helpers
    // ========================================================================

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn cyan(&self, text: &str) -> String {
        if self.use_colors {
            format!("{CYAN}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Pads text to a display width before any color codes are applied.
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    padded
}
