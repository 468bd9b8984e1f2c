//! The in-memory model of one grammar-derived Go package.

use std::{fmt, path::Path};

use g4make_core::relative_path;

/// Which direction, if any, input text is case-folded before lexing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaseFolding {
    /// The grammar is case sensitive; input is used as is.
    #[default]
    None,
    /// The grammar expects upper-cased input (`UPPER`).
    Upper,
    /// The grammar expects lower-cased input (`lower`).
    Lower,
}

impl CaseFolding {
    /// Interpret a `caseInsensitiveType` value.
    ///
    /// Only `UPPER` and `lower` are recognized. Anything else means no case
    /// transformation; non-empty unknown values are logged.
    pub fn from_value(value: &str) -> Self {
        match value.trim() {
            "UPPER" => Self::Upper,
            "lower" => Self::Lower,
            "" => Self::None,
            other => {
                log::warn!(
                    "unknown caseInsensitiveType {other:?}, expected \"UPPER\" or \"lower\"; \
                     input will not be case-folded"
                );
                Self::None
            }
        }
    }

    /// The descriptor spelling of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Upper => "UPPER",
            Self::Lower => "lower",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::None
    }
}

impl fmt::Display for CaseFolding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generation metadata for one grammar-derived package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    /// Go package the grammar is generated into
    pub package_name: String,

    /// Display name used in generated comments
    pub long_name: String,

    pub lexer_name: String,
    pub parser_name: String,
    pub listener_name: String,

    /// Top-level rule invoked by the test harness
    pub entry_point: String,

    pub case_insensitive: CaseFolding,

    /// False for lexer-only grammars
    pub has_parser: bool,

    /// Example input files, in test iteration order
    pub examples: Vec<String>,

    /// Inherited grammar files
    pub includes: Vec<String>,

    /// The package's own top-level grammar files
    pub grammars: Vec<String>,
}

/// Explicit changes applied on top of a loaded project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectOverrides {
    /// Discard the descriptor's includes and grammars before adding ours
    pub replace_grammars: bool,
    pub grammars: Vec<String>,
}

impl ProjectOverrides {
    /// Overrides that replace every inherited grammar with `grammars`.
    pub fn replace_grammars(grammars: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            replace_grammars: true,
            grammars: grammars.into_iter().map(Into::into).collect(),
        }
    }
}

impl Project {
    /// Create an empty project for the given package.
    ///
    /// Type names follow the ANTLR Go target convention of
    /// `<grammar>Lexer`, `<grammar>Parser` and `<grammar>Listener`.
    pub fn new(package_name: impl Into<String>, grammar_name: &str) -> Self {
        Self {
            package_name: package_name.into(),
            long_name: grammar_name.to_string(),
            lexer_name: format!("{grammar_name}Lexer"),
            parser_name: format!("{grammar_name}Parser"),
            listener_name: format!("{grammar_name}Listener"),
            ..Self::default()
        }
    }

    /// Append a grammar file. Duplicates are kept.
    pub fn add_grammar(&mut self, path: impl Into<String>) {
        self.grammars.push(path.into());
    }

    /// Forget all includes and grammars. Examples and metadata are untouched.
    pub fn clear_grammars(&mut self) {
        self.includes.clear();
        self.grammars.clear();
    }

    /// Re-express every example path relative to `base`.
    ///
    /// Relative examples and `base` are both anchored at `cwd` first.
    /// Examples with no path from `base` are kept as is.
    pub fn rebase_examples(&mut self, cwd: &Path, base: &Path) {
        let base = cwd.join(base);
        for example in &mut self.examples {
            match relative_path(&cwd.join(&*example), &base) {
                Some(relative) => *example = relative,
                None => log::warn!(
                    "example {example} is not reachable from {}",
                    base.display()
                ),
            }
        }
    }

    /// Merge metadata from another project into this one.
    ///
    /// Non-empty names from `other` win, a parser on either side means a
    /// parser, a case mode other than `None` wins, and every list is
    /// appended.
    pub fn merge(&mut self, other: Project) {
        fn take(ours: &mut String, theirs: String) {
            if !theirs.is_empty() {
                *ours = theirs;
            }
        }

        take(&mut self.package_name, other.package_name);
        take(&mut self.long_name, other.long_name);
        take(&mut self.lexer_name, other.lexer_name);
        take(&mut self.parser_name, other.parser_name);
        take(&mut self.listener_name, other.listener_name);
        take(&mut self.entry_point, other.entry_point);

        if !other.case_insensitive.is_none() {
            self.case_insensitive = other.case_insensitive;
        }
        self.has_parser |= other.has_parser;

        self.examples.extend(other.examples);
        self.includes.extend(other.includes);
        self.grammars.extend(other.grammars);
    }

    /// Apply command line overrides.
    pub fn apply(&mut self, overrides: ProjectOverrides) {
        if overrides.replace_grammars {
            log::debug!(
                "discarding {} inherited grammar files",
                self.includes.len() + self.grammars.len()
            );
            self.clear_grammars();
        }
        for grammar in overrides.grammars {
            self.add_grammar(grammar);
        }
    }
}
