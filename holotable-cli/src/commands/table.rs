//! The `table` command: the Resource Table Viewer trigger.

use anyhow::Result;
use clap::Args;
use tracing::info;

use holotable_core::Category;
use holotable_fetch::{SwapiClient, TableViewer};

use crate::output::{HtmlFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the table command.
#[derive(Args)]
pub struct TableArgs {
    /// Archive category (people, species, planets, films, starships,
    /// vehicles).
    pub category: String,

    /// Specific record id; a random one is drawn when omitted.
    #[arg(long)]
    pub id: Option<u32>,
}

/// Runs the table command.
pub async fn run(args: &TableArgs, cli: &Cli) -> Result<()> {
    let category: Category = args.category.parse()?;
    info!(category = %category, id = ?args.id, "Rendering record table");

    let viewer = TableViewer::new(SwapiClient::new()?);
    let table = match args.id {
        Some(id) => viewer.show(category, id).await?,
        None => viewer.trigger(category).await?,
    };

    let rendered = match cli.format {
        OutputFormat::Text => TextFormatter::new(!cli.no_color).format_table(&table),
        OutputFormat::Html => HtmlFormatter::new().format_table(&table),
    };
    println!("{rendered}");

    Ok(())
}
