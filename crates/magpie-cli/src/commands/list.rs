use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::PathBuf;
use tracing::debug;

use magpie_core::Callout;
use magpie_pipeline::filter_by_type;

use crate::cli::OutputFormat;
use crate::config::CliConfig;

/// Preview the callouts in a folder without writing anywhere.
pub async fn execute(
    config: CliConfig,
    folder: Option<PathBuf>,
    callout_type: Option<String>,
    format: OutputFormat,
    raw: bool,
) -> Result<()> {
    let folder = folder.unwrap_or_default();
    debug!(folder = %folder.display(), ?callout_type, "running list command");

    let collector = super::build_collector(&config, raw)?;
    let mut callouts = collector
        .collect_preview(&folder)
        .await
        .context("Failed to collect callouts")?;

    if let Some(ty) = callout_type {
        callouts = filter_by_type(&callouts, &ty);
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&callouts)?),
        OutputFormat::Table => print_table(&callouts),
    }

    Ok(())
}

fn print_table(callouts: &[Callout]) {
    if callouts.is_empty() {
        println!("No callouts found");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Type", "Title", "Content", "File"]);
    for callout in callouts {
        table.add_row(vec![
            callout.callout_type.clone(),
            callout.title.clone(),
            preview(&callout.content, 60),
            callout.file_name.clone(),
        ]);
    }

    println!("{table}");
}

fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        content.to_string()
    } else {
        let prefix: String = content.chars().take(max_chars).collect();
        format!("{prefix}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_previews_unchanged() {
        assert_eq!(preview("short", 60), "short");
    }

    #[test]
    fn long_content_is_truncated_on_char_boundaries() {
        let long = "ä".repeat(100);
        let shown = preview(&long, 60);

        assert_eq!(shown.chars().count(), 61);
        assert!(shown.ends_with('…'));
    }
}
