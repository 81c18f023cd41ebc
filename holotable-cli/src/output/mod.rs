//! Output formatting for CLI.

mod html;
mod text;

pub use html::HtmlFormatter;
pub use text::TextFormatter;
#[cfg(test)]
mod tests;
