//! Shared string and path helpers for Go code generation.

use std::{
    fmt::Write,
    path::{Component, Path, PathBuf},
};

/// Reserved words that can never name a Go package or identifier.
const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Uppercase the first character (e.g., "json" -> "Json", "compilationUnit" -> "CompilationUnit")
///
/// This is how the ANTLR Go target names rule methods and contexts.
pub fn title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Quote a string as a Go interpreted string literal, the way `%q` does.
pub fn quote_go_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Check whether `s` can be used as a Go identifier.
///
/// Keywords are rejected. Digits are limited to ASCII `0-9`.
pub fn is_go_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let valid = match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphabetic() || c.is_ascii_digit())
        }
        _ => false,
    };
    valid && !GO_KEYWORDS.contains(&s)
}

/// Lexically resolve `.` and `..` components without touching the filesystem.
fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

/// Express `path` relative to the directory `base`, `/` separated.
///
/// Both paths must be anchored the same way (both absolute, or both
/// relative to the same directory). Returns `None` when they share no root,
/// e.g. different drives on Windows.
pub fn relative_path(path: &Path, base: &Path) -> Option<String> {
    let path = normalize_path(path);
    let base = normalize_path(base);
    if path.has_root() != base.has_root() {
        return None;
    }

    let path: Vec<_> = path.components().collect();
    let base: Vec<_> = base.components().collect();
    let common = path.iter().zip(&base).take_while(|(a, b)| a == b).count();
    // A base that climbs above the shared prefix cannot be walked back down
    if matches!(
        base.get(common),
        Some(Component::ParentDir | Component::Prefix(_) | Component::RootDir)
    ) {
        return None;
    }

    let parts: Vec<String> = std::iter::repeat_n("..".to_string(), base.len() - common)
        .chain(
            path[common..]
                .iter()
                .map(|c| c.as_os_str().to_string_lossy().into_owned()),
        )
        .collect();

    if parts.is_empty() {
        Some(".".to_string())
    } else {
        Some(parts.join("/"))
    }
}
