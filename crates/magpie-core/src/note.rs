//! Note identity types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A resolved note inside the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteHandle {
    /// Vault-relative path
    pub path: PathBuf,

    /// Display name
    pub name: String,
}

impl NoteHandle {
    /// Create a handle, deriving the display name from the file name.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    /// Create a handle with an explicit display name.
    pub fn with_name(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    /// The folder containing this note.
    pub fn folder(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// The path as a string, for record tagging.
    pub fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// The two shapes a note can arrive in.
///
/// Commands take either a concrete handle or a loose reference (a bare note
/// name, as in a wikilink). References go through one explicit resolution
/// step producing a [`NoteHandle`] before any extraction begins; a reference
/// that resolves to nothing is treated the same as an absent note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSource {
    /// An already-resolved note
    Note(NoteHandle),
    /// A loose reference still to be resolved against the vault
    Reference(String),
}

impl NoteSource {
    /// Wrap a resolved handle.
    pub fn note(handle: NoteHandle) -> Self {
        Self::Note(handle)
    }

    /// Wrap a loose reference.
    pub fn reference(reference: impl Into<String>) -> Self {
        Self::Reference(reference.into())
    }
}
