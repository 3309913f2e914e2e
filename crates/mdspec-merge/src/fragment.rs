//! Title/description splitting for Markdown fragments.

/// A Markdown fragment split into its first line and the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// First line, with one leading `#` and surrounding whitespace removed.
    pub title: String,
    /// Everything after the first newline, verbatim.
    pub description: String,
}

impl Fragment {
    pub fn parse(text: &str) -> Self {
        let (first, rest) = text.split_once('\n').unwrap_or((text, ""));
        Self {
            title: strip_heading(first).to_string(),
            description: rest.to_string(),
        }
    }
}

/// Strip surrounding whitespace and a single leading `#` from a heading line.
pub fn strip_heading(line: &str) -> &str {
    let line = line.trim();
    match line.strip_prefix('#') {
        Some(rest) => rest.trim(),
        None => line,
    }
}
