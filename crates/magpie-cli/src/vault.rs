//! Filesystem vault
//!
//! Implements the vault collaborator traits over a directory of markdown
//! files. Note handles carry vault-relative paths; all I/O happens under
//! the vault root. Frontmatter edits rewrite the note in place from one
//! read-modify-write pass.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use magpie_core::{
    FrontmatterStore, MetadataMutator, NoteHandle, VaultError, VaultReader, VaultResult,
};
use magpie_parser::frontmatter;

/// A vault rooted at a directory on disk.
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    /// Open a vault at `root`. The directory must exist.
    pub fn open(root: impl AsRef<Path>) -> VaultResult<Self> {
        let root = root.as_ref();
        let root = root
            .canonicalize()
            .map_err(|err| VaultError::io(format!("vault root '{}': {}", root.display(), err)))?;
        Ok(Self { root })
    }

    /// The canonicalized vault root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn relative_to_root<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

#[async_trait]
impl VaultReader for FsVault {
    async fn list_notes(&self, folder: &Path) -> VaultResult<Vec<NoteHandle>> {
        let dir = self.root.join(folder);
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|err| VaultError::io(format!("listing '{}': {}", dir.display(), err)))?;

        let mut notes = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "md") {
                continue;
            }
            if !entry.file_type().await?.is_file() {
                continue;
            }
            notes.push(NoteHandle::new(self.relative_to_root(&path)));
        }

        debug!(folder = %dir.display(), count = notes.len(), "listed notes");
        Ok(notes)
    }

    async fn read_note(&self, note: &NoteHandle) -> VaultResult<Option<String>> {
        match tokio::fs::read_to_string(self.root.join(&note.path)).await {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn resolve_reference(&self, reference: &str) -> VaultResult<Option<NoteHandle>> {
        // A path under the root wins, with or without the .md extension.
        let direct = Path::new(reference);
        for candidate in [direct.to_path_buf(), direct.with_extension("md")] {
            if self.root.join(&candidate).is_file() {
                return Ok(Some(NoteHandle::new(candidate)));
            }
        }

        // Otherwise the first note anywhere in the vault whose stem matches.
        let pattern = self.root.join("**/*.md").to_string_lossy().into_owned();
        let paths = glob::glob(&pattern).map_err(|err| VaultError::io(err.to_string()))?;
        for path in paths.flatten() {
            if path.file_stem().is_some_and(|stem| stem == reference) {
                return Ok(Some(NoteHandle::new(self.relative_to_root(&path))));
            }
        }

        Ok(None)
    }
}

#[async_trait]
impl FrontmatterStore for FsVault {
    async fn transact(&self, note: &NoteHandle, mutate: MetadataMutator) -> VaultResult<()> {
        let path = self.root.join(&note.path);
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            // A fresh target gets created with an empty body.
            Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err.into()),
        };

        let (raw, body) = frontmatter::split(&text);
        // Malformed frontmatter starts over rather than failing the write.
        let mut mapping = raw
            .and_then(|raw| serde_yaml::from_str::<serde_yaml::Value>(raw).ok())
            .and_then(|value| value.as_mapping().cloned())
            .unwrap_or_default();

        mutate(&mut mapping);

        let yaml = serde_yaml::to_string(&mapping)?;
        tokio::fs::write(&path, frontmatter::compose(&yaml, body)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_note(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[tokio::test]
    async fn lists_only_markdown_files_in_one_folder() {
        let dir = TempDir::new().unwrap();
        write_note(dir.path(), "a.md", "");
        write_note(dir.path(), "b.txt", "");
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        write_note(&dir.path().join("sub"), "nested.md", "");

        let vault = FsVault::open(dir.path()).unwrap();
        let mut names: Vec<String> = vault
            .list_notes(Path::new(""))
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.name)
            .collect();
        names.sort();

        assert_eq!(names, ["a.md"]);
    }

    #[tokio::test]
    async fn listing_a_missing_folder_fails() {
        let dir = TempDir::new().unwrap();
        let vault = FsVault::open(dir.path()).unwrap();

        assert!(vault.list_notes(Path::new("nope")).await.is_err());
    }

    #[tokio::test]
    async fn missing_note_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let vault = FsVault::open(dir.path()).unwrap();

        let missing = NoteHandle::new("ghost.md");
        assert_eq!(vault.read_note(&missing).await.unwrap(), None);
    }

    #[tokio::test]
    async fn resolves_path_name_and_stem() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("deep")).unwrap();
        write_note(&dir.path().join("deep"), "target.md", "");

        let vault = FsVault::open(dir.path()).unwrap();

        let by_path = vault.resolve_reference("deep/target.md").await.unwrap();
        assert_eq!(by_path.unwrap().path, Path::new("deep/target.md"));

        let by_name = vault.resolve_reference("deep/target").await.unwrap();
        assert_eq!(by_name.unwrap().path, Path::new("deep/target.md"));

        let by_stem = vault.resolve_reference("target").await.unwrap();
        assert_eq!(by_stem.unwrap().path, Path::new("deep/target.md"));

        assert!(vault.resolve_reference("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn transact_adds_frontmatter_preserving_body_and_keys() {
        let dir = TempDir::new().unwrap();
        write_note(
            dir.path(),
            "t.md",
            "---\ntitle: Keep Me\n---\n# Body stays\n",
        );

        let vault = FsVault::open(dir.path()).unwrap();
        let note = NoteHandle::new("t.md");
        vault
            .transact(
                &note,
                Box::new(|mapping| {
                    mapping.insert("added".into(), "later".into());
                }),
            )
            .await
            .unwrap();

        let text = std::fs::read_to_string(dir.path().join("t.md")).unwrap();
        assert!(text.starts_with("---\n"));
        assert!(text.contains("title: Keep Me"));
        assert!(text.contains("added: later"));
        assert!(text.ends_with("# Body stays\n"));
    }

    #[tokio::test]
    async fn transact_on_plain_note_adds_a_fence() {
        let dir = TempDir::new().unwrap();
        write_note(dir.path(), "plain.md", "no frontmatter here\n");

        let vault = FsVault::open(dir.path()).unwrap();
        vault
            .transact(
                &NoteHandle::new("plain.md"),
                Box::new(|mapping| {
                    mapping.insert("k".into(), "v".into());
                }),
            )
            .await
            .unwrap();

        let text = std::fs::read_to_string(dir.path().join("plain.md")).unwrap();
        assert!(text.starts_with("---\nk: v\n---\n"));
        assert!(text.ends_with("no frontmatter here\n"));
    }

    #[tokio::test]
    async fn transact_creates_a_missing_target() {
        let dir = TempDir::new().unwrap();
        let vault = FsVault::open(dir.path()).unwrap();

        vault
            .transact(
                &NoteHandle::new("new.md"),
                Box::new(|mapping| {
                    mapping.insert("k".into(), "v".into());
                }),
            )
            .await
            .unwrap();

        assert!(dir.path().join("new.md").is_file());
    }
}
