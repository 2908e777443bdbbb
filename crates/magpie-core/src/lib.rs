//! Magpie Core
//!
//! Domain types and collaborator traits shared across the magpie workspace:
//! - [`Callout`], the immutable extracted record
//! - [`NoteHandle`] / [`NoteSource`], note identity and its two reference shapes
//! - [`VaultReader`] / [`FrontmatterStore`] / [`ChoicePrompt`], the host boundaries
//! - [`VaultError`], the error taxonomy for host interactions
//!
//! The pipeline crate orchestrates against these abstractions; concrete
//! implementations (filesystem vault, terminal picker) live with the CLI.

pub mod callout;
pub mod error;
pub mod note;
pub mod test_support;
pub mod traits;

pub use callout::Callout;
pub use error::{VaultError, VaultResult};
pub use note::{NoteHandle, NoteSource};
pub use traits::{ChoicePrompt, FrontmatterStore, MetadataMutator, VaultReader};
