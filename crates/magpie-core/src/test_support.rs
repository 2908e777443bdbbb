//! In-Memory Test Doubles
//!
//! Deterministic implementations of the collaborator traits for tests:
//! no I/O, insertion-order listings, and injectable failures so error
//! containment can be exercised.

use async_trait::async_trait;
use serde_yaml::Mapping;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::error::{VaultError, VaultResult};
use crate::note::NoteHandle;
use crate::traits::{ChoicePrompt, FrontmatterStore, MetadataMutator, VaultReader};

enum NoteBody {
    Text(String),
    Unreadable,
}

/// An in-memory vault doubling as reader and frontmatter store.
///
/// Listing order is insertion order. Notes can be registered as unreadable
/// to exercise the per-note skip path, and transactions can be forced to
/// fail to exercise the one propagating error.
#[derive(Default)]
pub struct MemoryVault {
    notes: Mutex<Vec<(NoteHandle, NoteBody)>>,
    frontmatter: Mutex<HashMap<PathBuf, Mapping>>,
    fail_transactions: AtomicBool,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a readable note.
    pub fn insert_note(&self, path: impl Into<PathBuf>, text: impl Into<String>) -> NoteHandle {
        let handle = NoteHandle::new(path);
        self.notes
            .lock()
            .unwrap()
            .push((handle.clone(), NoteBody::Text(text.into())));
        handle
    }

    /// Register a note whose reads fail.
    pub fn insert_unreadable(&self, path: impl Into<PathBuf>) -> NoteHandle {
        let handle = NoteHandle::new(path);
        self.notes
            .lock()
            .unwrap()
            .push((handle.clone(), NoteBody::Unreadable));
        handle
    }

    /// Make every subsequent transaction fail.
    pub fn fail_transactions(&self) {
        self.fail_transactions.store(true, Ordering::SeqCst);
    }

    /// Snapshot a note's stored frontmatter mapping, if any.
    pub fn metadata(&self, path: impl AsRef<Path>) -> Option<Mapping> {
        self.frontmatter
            .lock()
            .unwrap()
            .get(path.as_ref())
            .cloned()
    }
}

#[async_trait]
impl VaultReader for MemoryVault {
    async fn list_notes(&self, folder: &Path) -> VaultResult<Vec<NoteHandle>> {
        let notes = self.notes.lock().unwrap();
        Ok(notes
            .iter()
            .filter(|(handle, _)| handle.folder() == folder)
            .map(|(handle, _)| handle.clone())
            .collect())
    }

    async fn read_note(&self, note: &NoteHandle) -> VaultResult<Option<String>> {
        let notes = self.notes.lock().unwrap();
        match notes.iter().find(|(handle, _)| handle.path == note.path) {
            Some((_, NoteBody::Text(text))) => Ok(Some(text.clone())),
            Some((_, NoteBody::Unreadable)) => Err(VaultError::io("unreadable note")),
            None => Ok(None),
        }
    }

    async fn resolve_reference(&self, reference: &str) -> VaultResult<Option<NoteHandle>> {
        let notes = self.notes.lock().unwrap();
        let found = notes.iter().map(|(handle, _)| handle).find(|handle| {
            handle.path == Path::new(reference)
                || handle.path.file_stem().is_some_and(|stem| stem == reference)
        });
        Ok(found.cloned())
    }
}

#[async_trait]
impl FrontmatterStore for MemoryVault {
    async fn transact(&self, note: &NoteHandle, mutate: MetadataMutator) -> VaultResult<()> {
        if self.fail_transactions.load(Ordering::SeqCst) {
            return Err(VaultError::io("transaction failed"));
        }
        let mut store = self.frontmatter.lock().unwrap();
        let mapping = store.entry(note.path.clone()).or_default();
        mutate(mapping);
        Ok(())
    }
}

/// A prompt that always returns a preset answer.
pub struct ScriptedPrompt {
    answer: Option<String>,
}

impl ScriptedPrompt {
    /// Always choose `answer`.
    pub fn chooses(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
        }
    }

    /// Always cancel.
    pub fn cancels() -> Self {
        Self { answer: None }
    }
}

#[async_trait]
impl ChoicePrompt for ScriptedPrompt {
    async fn choose_one(&self, _options: &[String]) -> VaultResult<Option<String>> {
        Ok(self.answer.clone())
    }
}
