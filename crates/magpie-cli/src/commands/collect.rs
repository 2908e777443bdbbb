use anyhow::{Context, Result};
use tracing::debug;

use magpie_core::NoteSource;
use magpie_pipeline::CollectOutcome;

use crate::config::CliConfig;

/// Collect every callout in the target's folder into its frontmatter.
pub async fn execute(config: CliConfig, target: String, raw: bool) -> Result<()> {
    debug!(%target, raw, "running collect command");

    let collector = super::build_collector(&config, raw)?;
    let outcome = collector
        .collect_all(&NoteSource::reference(&target))
        .await
        .context("Failed to collect callouts")?;

    match outcome {
        CollectOutcome::Written(count) => {
            println!("Collected {count} callout(s) into '{target}'");
        }
        CollectOutcome::Skipped => {
            println!("Nothing collected: target note '{target}' was not found");
        }
    }

    Ok(())
}
