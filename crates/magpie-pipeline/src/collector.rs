//! The collection facade
//!
//! [`Collector`] is the explicit context object frontends hold to run
//! collection commands programmatically: collaborators are injected at
//! construction and the handle is dropped by its owner when done, rather
//! than registering a live instance in any process-wide slot.

use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use magpie_core::{Callout, ChoicePrompt, FrontmatterStore, NoteSource, VaultReader, VaultResult};

use crate::collect::collect_folder;
use crate::extract::{resolve_source, CalloutExtractor, ExtractorConfig};
use crate::select::{distinct_types, filter_by_type};
use crate::write::write_callouts;

/// Outcome of a collection command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectOutcome {
    /// Records written to the target's frontmatter
    Written(usize),
    /// Nothing written: absent target, cancelled/empty selection, or no
    /// types to choose from
    Skipped,
}

/// Error building a [`Collector`]
#[derive(Debug, Error)]
pub enum CollectorBuilderError {
    #[error("missing vault reader")]
    MissingVault,

    #[error("missing frontmatter store")]
    MissingStore,
}

/// Runs the collection commands against injected collaborators.
///
/// Every operation resolves its target first; an absent target is a silent
/// no-op. Collection reads are contained per note, so the only error a
/// command surfaces is a failed frontmatter transaction (or a failed folder
/// listing, which happens before collection starts).
pub struct Collector {
    vault: Arc<dyn VaultReader>,
    store: Arc<dyn FrontmatterStore>,
    extractor: CalloutExtractor,
}

impl Collector {
    /// Start building a collector.
    pub fn builder() -> CollectorBuilder {
        CollectorBuilder::default()
    }

    /// Collect every callout in the target's containing folder and write
    /// the full set to the target's frontmatter.
    pub async fn collect_all(&self, target: &NoteSource) -> VaultResult<CollectOutcome> {
        let Some(target) = resolve_source(self.vault.as_ref(), target).await else {
            debug!("no target note, nothing to collect");
            return Ok(CollectOutcome::Skipped);
        };

        let callouts =
            collect_folder(self.vault.as_ref(), &self.extractor, target.folder()).await?;
        info!(target = %target.path.display(), count = callouts.len(), "collected callouts");

        write_callouts(self.store.as_ref(), &target, &callouts).await?;
        Ok(CollectOutcome::Written(callouts.len()))
    }

    /// Collect the folder, prompt for one of the observed types, and write
    /// only the matching records. A cancelled or empty selection writes
    /// nothing, as does a folder with no callouts at all.
    pub async fn collect_filtered(
        &self,
        target: &NoteSource,
        prompt: &dyn ChoicePrompt,
    ) -> VaultResult<CollectOutcome> {
        let Some(target) = resolve_source(self.vault.as_ref(), target).await else {
            debug!("no target note, nothing to collect");
            return Ok(CollectOutcome::Skipped);
        };

        let callouts =
            collect_folder(self.vault.as_ref(), &self.extractor, target.folder()).await?;
        let types = distinct_types(&callouts);
        if types.is_empty() {
            debug!("no callout types observed, nothing to choose");
            return Ok(CollectOutcome::Skipped);
        }

        let chosen = match prompt.choose_one(&types).await? {
            Some(choice) if !choice.is_empty() => choice,
            _ => {
                debug!("selection cancelled");
                return Ok(CollectOutcome::Skipped);
            }
        };

        let filtered = filter_by_type(&callouts, &chosen);
        info!(target = %target.path.display(), r#type = %chosen, count = filtered.len(), "collected filtered callouts");

        write_callouts(self.store.as_ref(), &target, &filtered).await?;
        Ok(CollectOutcome::Written(filtered.len()))
    }

    /// Collect the folder and write only records of `callout_type`, without
    /// prompting. An empty type is a no-op by the selection convention.
    pub async fn collect_type(
        &self,
        target: &NoteSource,
        callout_type: &str,
    ) -> VaultResult<CollectOutcome> {
        if callout_type.is_empty() {
            debug!("empty type selection, nothing to write");
            return Ok(CollectOutcome::Skipped);
        }

        let Some(target) = resolve_source(self.vault.as_ref(), target).await else {
            debug!("no target note, nothing to collect");
            return Ok(CollectOutcome::Skipped);
        };

        let callouts =
            collect_folder(self.vault.as_ref(), &self.extractor, target.folder()).await?;
        let filtered = filter_by_type(&callouts, callout_type);
        info!(target = %target.path.display(), r#type = callout_type, count = filtered.len(), "collected filtered callouts");

        write_callouts(self.store.as_ref(), &target, &filtered).await?;
        Ok(CollectOutcome::Written(filtered.len()))
    }

    /// Collect a folder without writing anywhere.
    pub async fn collect_preview(&self, folder: &Path) -> VaultResult<Vec<Callout>> {
        collect_folder(self.vault.as_ref(), &self.extractor, folder).await
    }
}

/// Builder for [`Collector`]
#[derive(Default)]
pub struct CollectorBuilder {
    vault: Option<Arc<dyn VaultReader>>,
    store: Option<Arc<dyn FrontmatterStore>>,
    config: ExtractorConfig,
}

impl CollectorBuilder {
    /// Set the vault reader.
    pub fn with_vault(mut self, vault: Arc<dyn VaultReader>) -> Self {
        self.vault = Some(vault);
        self
    }

    /// Set the frontmatter store.
    pub fn with_store(mut self, store: Arc<dyn FrontmatterStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the extraction configuration.
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the collector.
    pub fn build(self) -> Result<Collector, CollectorBuilderError> {
        Ok(Collector {
            vault: self.vault.ok_or(CollectorBuilderError::MissingVault)?,
            store: self.store.ok_or(CollectorBuilderError::MissingStore)?,
            extractor: CalloutExtractor::with_config(self.config),
        })
    }
}
