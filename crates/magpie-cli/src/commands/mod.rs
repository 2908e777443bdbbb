pub mod collect;
pub mod filter;
pub mod list;

use std::sync::Arc;

use anyhow::Result;
use magpie_pipeline::{Collector, ExtractorConfig};

use crate::config::CliConfig;
use crate::vault::FsVault;

/// Build a collector over the configured vault.
///
/// The `raw` flag disables flattening for one run regardless of config.
pub(crate) fn build_collector(config: &CliConfig, raw: bool) -> Result<Collector> {
    let vault = Arc::new(FsVault::open(&config.vault.path)?);

    let collector = Collector::builder()
        .with_vault(vault.clone())
        .with_store(vault)
        .with_config(ExtractorConfig {
            flatten: config.collect.flatten && !raw,
        })
        .build()?;

    Ok(collector)
}
