use anyhow::{Context, Result};
use tracing::debug;

use magpie_core::NoteSource;
use magpie_pipeline::CollectOutcome;

use crate::config::CliConfig;
use crate::picker::TermPicker;

/// Collect callouts of one type into the target's frontmatter, prompting
/// over the observed types unless one was given on the command line.
pub async fn execute(
    config: CliConfig,
    target: String,
    callout_type: Option<String>,
    raw: bool,
) -> Result<()> {
    debug!(%target, ?callout_type, raw, "running filter command");

    let collector = super::build_collector(&config, raw)?;
    let source = NoteSource::reference(&target);

    let outcome = match callout_type {
        Some(ty) => collector.collect_type(&source, &ty).await,
        None => collector.collect_filtered(&source, &TermPicker).await,
    }
    .context("Failed to collect callouts")?;

    match outcome {
        CollectOutcome::Written(count) => {
            println!("Collected {count} callout(s) into '{target}'");
        }
        CollectOutcome::Skipped => {
            println!("Nothing collected");
        }
    }

    Ok(())
}
