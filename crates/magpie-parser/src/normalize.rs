//! Callout body normalization
//!
//! Flattens a multi-line callout body into a single whitespace-joined line
//! with quote markers stripped. Raw bodies keep their markers and line
//! structure untouched.

/// Normalize a callout body.
///
/// With `flatten` false the body is returned unchanged. With `flatten` true
/// it is collapsed via [`flatten_content`].
pub fn normalize(body: &str, flatten: bool) -> String {
    if flatten {
        flatten_content(body)
    } else {
        body.to_string()
    }
}

/// Collapse a body to one line: per line, drop the first `>` occurrence,
/// trim, discard lines left empty, join the rest with single spaces.
pub fn flatten_content(body: &str) -> String {
    body.lines()
        .map(|line| line.replacen('>', "", 1))
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
