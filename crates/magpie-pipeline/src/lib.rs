//! Magpie Extraction Pipeline
//!
//! Orchestrates callout collection over a vault:
//!
//! 1. **Extract**: read one note, match callout blocks, normalize bodies
//! 2. **Collect**: fan out over a folder's notes in listing order
//! 3. **Select**: derive distinct types, filter to one chosen type
//! 4. **Write**: replace the target note's `callouts` frontmatter key
//!
//! This crate coordinates against the collaborator traits in `magpie-core`;
//! it does no I/O of its own. Per-note read failures are contained here and
//! never escape; only the final frontmatter transaction may fail visibly.

pub mod collect;
pub mod collector;
pub mod extract;
pub mod select;
pub mod write;

pub use collect::collect_folder;
pub use collector::{CollectOutcome, Collector, CollectorBuilder, CollectorBuilderError};
pub use extract::{resolve_source, CalloutExtractor, ExtractorConfig};
pub use select::{distinct_types, filter_by_type};
pub use write::{write_callouts, CALLOUTS_KEY};
