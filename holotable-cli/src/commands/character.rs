//! The `character` command: the Character Viewer trigger.

use anyhow::Result;
use clap::Args;
use tracing::info;

use holotable_fetch::CharacterViewer;

use crate::output::{HtmlFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the character command.
#[derive(Args)]
pub struct CharacterArgs {
    /// Specific character id; a random one is drawn when omitted.
    pub id: Option<u32>,
}

/// Runs the character command.
pub async fn run(args: &CharacterArgs, cli: &Cli) -> Result<()> {
    info!(id = ?args.id, "Showing character");

    let viewer = CharacterViewer::new()?;
    let view = match args.id {
        Some(id) => viewer.show(id).await?,
        None => viewer.show_random().await?,
    };

    let rendered = match cli.format {
        OutputFormat::Text => TextFormatter::new(!cli.no_color).format_character(&view),
        OutputFormat::Html => HtmlFormatter::new().format_character(&view),
    };
    println!("{rendered}");

    Ok(())
}
