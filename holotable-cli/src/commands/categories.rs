//! The `categories` command: lists the archive categories.

use anyhow::Result;

use holotable_core::Category;

use crate::output::TextFormatter;
use crate::{Cli, OutputFormat};

/// Runs the categories command.
pub fn run(cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_categories_header());
            for category in Category::all() {
                println!("{}", formatter.format_category_line(*category));
            }
        }
        OutputFormat::Html => {
            println!("<ul>");
            for category in Category::all() {
                println!("  <li>{}</li>", category.display_name());
            }
            println!("</ul>");
        }
    }

    Ok(())
}
