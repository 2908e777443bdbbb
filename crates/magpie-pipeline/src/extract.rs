//! Per-note callout extraction

use tracing::debug;

use magpie_core::{Callout, NoteHandle, NoteSource, VaultReader};
use magpie_parser::{find_callouts, normalize};

/// Configuration for extraction behavior
#[derive(Debug, Clone, Copy)]
pub struct ExtractorConfig {
    /// Flatten callout bodies to a single line (default on)
    pub flatten: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self { flatten: true }
    }
}

/// Extracts tagged callout records from single notes.
///
/// Reads go through the injected [`VaultReader`]; an absent or unreadable
/// note contributes zero records and is never an error here, so one bad
/// note cannot abort a folder collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalloutExtractor {
    config: ExtractorConfig,
}

impl CalloutExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom configuration.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extract every callout in `note`, tagged with the note's identity.
    pub async fn extract_note(&self, vault: &dyn VaultReader, note: &NoteHandle) -> Vec<Callout> {
        let text = match vault.read_note(note).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!(path = %note.path.display(), "note absent, skipping");
                return Vec::new();
            }
            Err(err) => {
                debug!(path = %note.path.display(), error = %err, "note unreadable, skipping");
                return Vec::new();
            }
        };

        let found = find_callouts(&text);
        debug!(path = %note.path.display(), count = found.len(), "extracted callouts");

        found
            .into_iter()
            .map(|raw| {
                Callout::new(
                    raw.callout_type,
                    raw.title,
                    normalize(&raw.content, self.config.flatten),
                    note.path_str(),
                    note.name.clone(),
                )
            })
            .collect()
    }

    /// Extract from a [`NoteSource`], resolving references first. A source
    /// that resolves to nothing contributes zero records.
    pub async fn extract_source(&self, vault: &dyn VaultReader, source: &NoteSource) -> Vec<Callout> {
        match resolve_source(vault, source).await {
            Some(note) => self.extract_note(vault, &note).await,
            None => Vec::new(),
        }
    }
}

/// Resolve a [`NoteSource`] to a concrete handle.
///
/// Unresolvable references and resolution failures both come back as
/// `None`; callers treat them like absent notes.
pub async fn resolve_source(vault: &dyn VaultReader, source: &NoteSource) -> Option<NoteHandle> {
    match source {
        NoteSource::Note(handle) => Some(handle.clone()),
        NoteSource::Reference(reference) => match vault.resolve_reference(reference).await {
            Ok(Some(handle)) => Some(handle),
            Ok(None) => {
                debug!(%reference, "reference did not resolve");
                None
            }
            Err(err) => {
                debug!(%reference, error = %err, "reference resolution failed");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magpie_core::test_support::MemoryVault;

    #[tokio::test]
    async fn extracts_and_flattens_by_default() {
        let vault = MemoryVault::new();
        let note = vault.insert_note("notes/a.md", "> [!note] Hi\n> line one\n> line two\n");

        let callouts = CalloutExtractor::new().extract_note(&vault, &note).await;

        assert_eq!(callouts.len(), 1);
        assert_eq!(callouts[0].callout_type, "note");
        assert_eq!(callouts[0].title, "Hi");
        assert_eq!(callouts[0].content, "line one line two");
        assert_eq!(callouts[0].file_path, "notes/a.md");
        assert_eq!(callouts[0].file_name, "a.md");
    }

    #[tokio::test]
    async fn raw_mode_keeps_markers() {
        let vault = MemoryVault::new();
        let note = vault.insert_note("a.md", "> [!tip] T\n> body\n");

        let extractor = CalloutExtractor::with_config(ExtractorConfig { flatten: false });
        let callouts = extractor.extract_note(&vault, &note).await;

        assert_eq!(callouts[0].content, "> body\n");
    }

    #[tokio::test]
    async fn note_without_callouts_extracts_nothing() {
        let vault = MemoryVault::new();
        let note = vault.insert_note("plain.md", "# Title\n\nprose only\n");

        assert!(CalloutExtractor::new()
            .extract_note(&vault, &note)
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn absent_and_unreadable_notes_are_silent_skips() {
        let vault = MemoryVault::new();
        let unreadable = vault.insert_unreadable("bad.md");
        let missing = magpie_core::NoteHandle::new("missing.md");

        let extractor = CalloutExtractor::new();
        assert!(extractor.extract_note(&vault, &unreadable).await.is_empty());
        assert!(extractor.extract_note(&vault, &missing).await.is_empty());
    }

    #[tokio::test]
    async fn reference_source_resolves_before_extraction() {
        let vault = MemoryVault::new();
        vault.insert_note("deep/target.md", "> [!note] n\n> x\n");

        let extractor = CalloutExtractor::new();
        let found = extractor
            .extract_source(&vault, &NoteSource::reference("target"))
            .await;
        assert_eq!(found.len(), 1);

        let nothing = extractor
            .extract_source(&vault, &NoteSource::reference("ghost"))
            .await;
        assert!(nothing.is_empty());
    }
}
