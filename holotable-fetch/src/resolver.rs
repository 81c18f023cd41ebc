//! Cross-reference resolution.
//!
//! A cross-reference field holds one or more locators into sibling
//! collections. Resolution fetches each referenced record through the
//! [`RecordSource`] seam and extracts its display-label field to build
//! hyperlink nodes. List resolution dispatches the fetches
//! concurrently, but the output nodes always follow the input locator
//! order.

use futures::future::try_join_all;
use tracing::debug;

use holotable_core::{capitalize_word, Node};

use crate::error::FetchError;
use crate::source::RecordSource;

/// Literal rendered for an empty cross-reference list.
const EMPTY_LIST_TEXT: &str = "None";

/// Resolves a single locator into a hyperlink node.
///
/// The referenced record is fetched (normalized and stripped like any
/// other record) and `label_field` supplies the link label, which is
/// capitalized for display.
///
/// # Errors
///
/// Propagates the secondary fetch failure, or
/// [`FetchError::MissingField`] when the record lacks the label field.
pub async fn resolve_reference<S: RecordSource + ?Sized>(
    source: &S,
    url: &str,
    label_field: &str,
) -> Result<Node, FetchError> {
    let record = source.record_by_url(url).await?;
    let label = record
        .text(label_field)
        .ok_or_else(|| FetchError::MissingField {
            field: label_field.to_string(),
            url: url.to_string(),
        })?;

    debug!(url = %url, label = %label, "Resolved cross-reference");
    Ok(Node::link(url, capitalize_word(label)))
}

/// Resolves a list of locators into link nodes.
///
/// - Empty list: the literal text "None".
/// - One locator: a bare hyperlink node.
/// - Several: a bulleted list of hyperlink nodes.
///
/// Fetches for a list run concurrently; the resulting nodes are
/// assembled in input order regardless of completion order.
pub async fn resolve_reference_list<S: RecordSource + ?Sized>(
    source: &S,
    urls: &[String],
    label_field: &str,
) -> Result<Node, FetchError> {
    match urls {
        [] => Ok(Node::Text(EMPTY_LIST_TEXT.to_string())),
        [url] => resolve_reference(source, url, label_field).await,
        _ => {
            let futures: Vec<_> = urls
                .iter()
                .map(|url| resolve_reference(source, url, label_field))
                .collect();
            // try_join_all yields results in future order, which is
            // the input locator order.
            let nodes = try_join_all(futures).await?;
            Ok(Node::List(nodes))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
