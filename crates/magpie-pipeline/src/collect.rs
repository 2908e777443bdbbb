//! Folder-scoped collection

use std::path::Path;
use tracing::debug;

use magpie_core::{Callout, VaultReader, VaultResult};

use crate::extract::CalloutExtractor;

/// Collect every callout from the notes directly inside `folder`.
///
/// Notes are processed one at a time in listing order and their records
/// concatenated. Unreadable notes contribute nothing (handled inside the
/// extractor); a listing failure propagates, since it happens before any
/// per-note recovery can apply.
pub async fn collect_folder(
    vault: &dyn VaultReader,
    extractor: &CalloutExtractor,
    folder: &Path,
) -> VaultResult<Vec<Callout>> {
    let notes = vault.list_notes(folder).await?;
    debug!(folder = %folder.display(), notes = notes.len(), "collecting folder");

    let mut callouts = Vec::new();
    for note in &notes {
        callouts.extend(extractor.extract_note(vault, note).await);
    }

    debug!(folder = %folder.display(), count = callouts.len(), "collected callouts");
    Ok(callouts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use magpie_core::test_support::MemoryVault;

    #[tokio::test]
    async fn concatenates_in_listing_order() {
        let vault = MemoryVault::new();
        vault.insert_note("v/one.md", "> [!note] first\n> a\n");
        vault.insert_note("v/two.md", "> [!tip] second\n> b\n\n> [!note] third\n> c\n");

        let found = collect_folder(&vault, &CalloutExtractor::new(), Path::new("v"))
            .await
            .unwrap();

        let titles: Vec<&str> = found.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn unreadable_note_is_skipped_not_fatal() {
        let vault = MemoryVault::new();
        vault.insert_note("v/a.md", "> [!note] A\n> x\n");
        vault.insert_unreadable("v/broken.md");
        vault.insert_note("v/c.md", "> [!note] C\n> y\n");

        let found = collect_folder(&vault, &CalloutExtractor::new(), Path::new("v"))
            .await
            .unwrap();

        let titles: Vec<&str> = found.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["A", "C"]);
    }

    #[tokio::test]
    async fn empty_folder_collects_nothing() {
        let vault = MemoryVault::new();
        vault.insert_note("elsewhere/x.md", "> [!note] n\n");

        let found = collect_folder(&vault, &CalloutExtractor::new(), Path::new("empty"))
            .await
            .unwrap();

        assert!(found.is_empty());
    }
}
