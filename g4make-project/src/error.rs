use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for descriptor operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the descriptor content and filename together so errors can point
/// back into the file.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Span of the first occurrence of `needle`, if any.
    pub fn find(&self, needle: &str) -> Option<SourceSpan> {
        if needle.is_empty() {
            return None;
        }
        self.src
            .find(needle)
            .map(|offset| SourceSpan::from((offset, needle.len())))
    }

    /// Create a parse error from an XML deserialization error.
    pub fn parse_error(&self, source: quick_xml::de::DeError) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            source,
        })
    }

    pub fn missing_grammar_name_error(&self) -> Box<Error> {
        Box::new(Error::MissingGrammarName {
            src: self.named_source(),
            span: self.find(crate::pom::TEST_PLUGIN),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        field: &'static str,
    ) -> Box<Error> {
        let name = name.into();
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span: self.find(&name),
            name,
            field,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(g4make::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse descriptor")]
    #[diagnostic(code(g4make::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[source]
        source: quick_xml::de::DeError,
    },

    #[error("descriptor does not declare a grammarName")]
    #[diagnostic(
        code(g4make::missing_grammar_name),
        help("add <grammarName> to the antlr4test-maven-plugin <configuration>")
    )]
    MissingGrammarName {
        #[source_code]
        src: NamedSource<String>,
        #[label("no grammarName in this plugin")]
        span: Option<SourceSpan>,
    },

    #[error("invalid {field} '{name}'")]
    #[diagnostic(
        code(g4make::invalid_identifier),
        help("{field} is used to build Go identifiers; use only letters, digits and underscores")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a valid identifier")]
        span: Option<SourceSpan>,
        name: String,
        field: &'static str,
    },
}
