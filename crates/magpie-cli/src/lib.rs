//! Magpie CLI
//!
//! The `mag` binary: command surface over the extraction pipeline plus the
//! host-side implementations the pipeline orchestrates against (filesystem
//! vault, YAML frontmatter transaction, terminal type picker).

pub mod cli;
pub mod commands;
pub mod config;
pub mod picker;
pub mod vault;
