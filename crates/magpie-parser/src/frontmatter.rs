//! Frontmatter text handling
//!
//! Splits a note into its `---`-fenced YAML frontmatter block and body, and
//! reassembles the two after the metadata has been edited. Parsing the YAML
//! itself is left to the caller; this module only deals in text.

/// Split a note into `(frontmatter, body)`.
///
/// The frontmatter is the text between an opening `---` on the first line
/// and the next fence line, without the fences. Notes with no leading fence
/// (or an unterminated one) have no frontmatter and the whole text is body.
pub fn split(text: &str) -> (Option<&str>, &str) {
    let Some(rest) = text.strip_prefix("---\n") else {
        return (None, text);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    (None, text)
}

/// Reassemble a note from serialized frontmatter and body.
pub fn compose(yaml: &str, body: &str) -> String {
    let mut out = String::with_capacity(yaml.len() + body.len() + 8);
    out.push_str("---\n");
    out.push_str(yaml);
    if !yaml.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("---\n");
    out.push_str(body);
    out
}
