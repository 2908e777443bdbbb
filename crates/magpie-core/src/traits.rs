//! Collaborator traits
//!
//! Host boundaries the pipeline orchestrates against. All three are
//! object-safe and consumed as `Arc<dyn T>` so frontends can inject their
//! own implementations: the CLI provides a filesystem vault and a terminal
//! picker, tests provide the in-memory doubles from
//! [`test_support`](crate::test_support).

use async_trait::async_trait;
use std::path::Path;

use crate::error::VaultResult;
use crate::note::NoteHandle;

/// A frontmatter edit applied inside one read-modify-write transaction.
pub type MetadataMutator = Box<dyn FnOnce(&mut serde_yaml::Mapping) + Send>;

/// Read access to the vault's notes.
#[async_trait]
pub trait VaultReader: Send + Sync {
    /// List the notes directly inside `folder`, non-recursive, in whatever
    /// order the host supplies.
    async fn list_notes(&self, folder: &Path) -> VaultResult<Vec<NoteHandle>>;

    /// Read a note's full text. `Ok(None)` means the note is absent; an
    /// `Err` means it exists but could not be read. The pipeline treats
    /// both as "no callouts from this note".
    async fn read_note(&self, note: &NoteHandle) -> VaultResult<Option<String>>;

    /// Resolve a loose reference (a bare note name or vault-relative path)
    /// to a concrete note, if one exists.
    async fn resolve_reference(&self, reference: &str) -> VaultResult<Option<NoteHandle>>;
}

/// Transactional access to a note's frontmatter.
#[async_trait]
pub trait FrontmatterStore: Send + Sync {
    /// Run one read-modify-write transaction against `note`'s frontmatter
    /// mapping. Failures propagate to the caller; this is the only host
    /// operation whose errors are not contained by the pipeline.
    async fn transact(&self, note: &NoteHandle, mutate: MetadataMutator) -> VaultResult<()>;
}

/// A single-selection prompt.
#[async_trait]
pub trait ChoicePrompt: Send + Sync {
    /// Ask the user to pick one of `options`. `Ok(None)` means the prompt
    /// was cancelled, which callers must treat as a no-op.
    async fn choose_one(&self, options: &[String]) -> VaultResult<Option<String>>;
}
