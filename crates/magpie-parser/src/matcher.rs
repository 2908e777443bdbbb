//! Callout block matcher
//!
//! Recognizes Obsidian-style callouts:
//! - `> [!note] Optional title`
//! - `> [!warning] Title\n> continuation line\n> another line`
//!
//! A block opens at a header line and its body is the maximal run of
//! immediately following quote-prefixed lines. A blank or unprefixed line
//! ends the block.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A callout block as it appears in the source text.
///
/// All fields are always present; a missing title captures as an empty
/// string, and a header with no continuation lines captures empty content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCallout {
    /// Tag inside the `[!...]` marker, verbatim (case and whitespace kept)
    pub callout_type: String,

    /// Trailing text on the header line, empty if absent
    pub title: String,

    /// Body lines with their quote markers intact, one `\n` per line
    pub content: String,
}

/// Header line: `> [!type] title`. The first `]` closes the type marker.
fn header_pattern() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| {
        Regex::new(r"^>[ \t]+\[!([^\]]+)\][ \t]*(.*)$").expect("valid callout header pattern")
    })
}

/// A continuation line keeps the quote prefix followed by whitespace.
fn is_body_line(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('>') && matches!(chars.next(), Some(' ') | Some('\t'))
}

/// Find every callout block in `text`, in source order.
///
/// Matching is non-overlapping and left-to-right: once a header's body run
/// is consumed, scanning resumes on the line after it, so callout-like
/// headers inside a body are captured as opaque body text rather than
/// starting a new block.
///
/// This is a pure function. Calling it twice on the same input returns the
/// same records; there is no cursor or other scan state between calls.
pub fn find_callouts(text: &str) -> Vec<RawCallout> {
    let mut found = Vec::new();
    let mut lines = text.lines().peekable();

    while let Some(line) = lines.next() {
        let Some(caps) = header_pattern().captures(line) else {
            continue;
        };

        let mut content = String::new();
        while let Some(next) = lines.peek() {
            if !is_body_line(next) {
                break;
            }
            content.push_str(next);
            content.push('\n');
            lines.next();
        }

        found.push(RawCallout {
            callout_type: caps[1].to_string(),
            title: caps[2].to_string(),
            content,
        });
    }

    found
}
