use std::path::{Path, PathBuf};

/// A rendered file waiting to be emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Normalize generated source text.
///
/// Trailing whitespace is stripped from every line, runs of blank lines are
/// collapsed to one, leading blank lines are dropped, and the result ends
/// with exactly one newline. Applying it twice gives the same text.
pub fn normalize_source(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_blank = false;

    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }
        out.push_str(line);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_whitespace() {
        assert_eq!(normalize_source("a  \nb\t\n"), "a\nb\n");
    }

    #[test]
    fn test_normalize_collapses_blank_runs() {
        assert_eq!(normalize_source("a\n\n\n\nb\n"), "a\n\nb\n");
        assert_eq!(normalize_source("a\n  \n\t\nb"), "a\n\nb\n");
    }

    #[test]
    fn test_normalize_trims_edges() {
        assert_eq!(normalize_source("\n\npackage x\n\n\n"), "package x\n");
        assert_eq!(normalize_source(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let text = "// header\n\n\npackage x  \n\nimport \"fmt\"\n\n\n";
        let once = normalize_source(text);
        assert_eq!(normalize_source(&once), once);
    }

    #[test]
    fn test_normalize_keeps_indentation() {
        assert_eq!(
            normalize_source("func f() {\n\treturn\n}\n"),
            "func f() {\n\treturn\n}\n"
        );
    }
}
