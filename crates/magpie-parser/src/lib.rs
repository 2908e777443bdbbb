//! Magpie Markdown Parsing
//!
//! Text-level parsing for the magpie pipeline:
//! - Obsidian-style callout block matching (`> [!type] Title` + continuation lines)
//! - Callout body normalization (flattening to a single line)
//! - YAML frontmatter splitting and reassembly
//!
//! Everything in this crate is a pure function of its input. Matching the same
//! text twice yields the same records; no scan state survives a call.

pub mod frontmatter;
pub mod matcher;
pub mod normalize;

// Re-export main types for convenience
pub use matcher::{find_callouts, RawCallout};
pub use normalize::{flatten_content, normalize};
