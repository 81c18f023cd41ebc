//! HTML fragment output.
//!
//! Produces the markup the original browser widgets built in the DOM:
//! a `<table>` with a Category/Value header, `<ul>` lists, and
//! `<a target="_blank">` links for resolved cross-references.

use holotable_core::{Node, ResourceTable};
use holotable_fetch::CharacterView;

/// HTML formatter.
#[derive(Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Creates a new HTML formatter.
    pub fn new() -> Self {
        Self
    }

    /// Formats a rendered table as an HTML `<table>` fragment.
    pub fn format_table(&self, table: &ResourceTable) -> String {
        let mut out = String::from("<table>\n");

        if !table.header().is_empty() {
            out.push_str("  <thead>\n    <tr>");
            for cell in table.header() {
                out.push_str(&format!("<th>{}</th>", escape(cell)));
            }
            out.push_str("</tr>\n  </thead>\n");
        }

        out.push_str("  <tbody>\n");
        for row in table.rows() {
            out.push_str(&format!(
                "    <tr><td>{}</td><td>{}</td></tr>\n",
                escape(&row.category),
                self.node_html(&row.value)
            ));
        }
        out.push_str("  </tbody>\n</table>");

        out
    }

    /// Formats a character view as heading plus image markup.
    ///
    /// When the portrait probe failed the `<img>` carries no `src`,
    /// only the alternate text.
    pub fn format_character(&self, view: &CharacterView) -> String {
        let heading = format!("<h1>{}</h1>", escape(&view.name));

        let img = match (&view.portrait, &view.portrait_alt) {
            (Some(url), _) => format!("<img src=\"{}\">", escape(url)),
            (None, Some(alt)) => format!("<img alt=\"{}\">", escape(alt)),
            (None, None) => "<img>".to_string(),
        };

        format!("{heading}\n{img}")
    }

    /// Renders a node to its markup.
    fn node_html(&self, node: &Node) -> String {
        match node {
            Node::Text(text) => escape(text),
            Node::Link { href, label } => format!(
                "<a href=\"{}\" target=\"_blank\">{}</a>",
                escape(href),
                escape(label)
            ),
            Node::List(items) => {
                let mut out = String::from("<ul>");
                for item in items {
                    out.push_str(&format!("<li>{}</li>", self.node_html(item)));
                }
                out.push_str("</ul>");
                out
            }
        }
    }
}

/// Escapes text for HTML element and attribute contexts.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
