//! GoFile abstraction for structured Go file generation.
//!
//! Provides a high-level API for generating Go files with a header, a
//! package clause, grouped imports and body declarations.

use std::collections::BTreeSet;

use g4make_codegen::{CodeBuilder, CodeFragment, Renderable};
use g4make_core::quote_go_string;

/// The import paths of a Go file.
///
/// Standard library packages are listed first, then everything else, each
/// group sorted, so the block is already in `gofmt`/`goimports` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    std: BTreeSet<String>,
    other: BTreeSet<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import path.
    pub fn add(&mut self, path: impl Into<String>) -> &mut Self {
        let path = path.into();
        if is_std(&path) {
            self.std.insert(path);
        } else {
            self.other.insert(path);
        }
        self
    }

    /// Add an import path only when `condition` holds.
    pub fn add_if(&mut self, condition: bool, path: impl Into<String>) -> &mut Self {
        if condition {
            self.add(path);
        }
        self
    }

    pub fn contains(&self, path: &str) -> bool {
        self.std.contains(path) || self.other.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.std.is_empty() && self.other.is_empty()
    }

    pub fn len(&self) -> usize {
        self.std.len() + self.other.len()
    }

    /// All paths in rendering order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.std.iter().chain(&self.other).map(String::as_str)
    }
}

/// Standard library paths have no dot in their first element.
fn is_std(path: &str) -> bool {
    !path.split('/').next().unwrap_or_default().contains('.')
}

impl Renderable for ImportSet {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self.len() {
            0 => Vec::new(),
            1 => self
                .paths()
                .map(|p| CodeFragment::line(format!("import {}", quote_go_string(p))))
                .collect(),
            _ => {
                let mut body: Vec<CodeFragment> = self
                    .std
                    .iter()
                    .map(|p| CodeFragment::line(quote_go_string(p)))
                    .collect();
                if !self.std.is_empty() && !self.other.is_empty() {
                    body.push(CodeFragment::blank());
                }
                body.extend(
                    self.other
                        .iter()
                        .map(|p| CodeFragment::line(quote_go_string(p))),
                );
                vec![CodeFragment::block("import (", body, Some(")".to_string()))]
            }
        }
    }
}

/// A structured representation of a Go file.
///
/// # Example
///
/// ```
/// use g4make_codegen_go::GoFile;
///
/// let code = GoFile::new("json")
///     .import("fmt")
///     .render();
/// assert_eq!(code, "package json\n\nimport \"fmt\"\n");
/// ```
#[derive(Debug, Clone)]
pub struct GoFile {
    header: Option<String>,
    package_doc: Vec<String>,
    package: String,
    package_comment: Option<String>,
    imports: ImportSet,
    body: Vec<Vec<CodeFragment>>,
}

impl GoFile {
    /// Create a new file in the given package.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            header: None,
            package_doc: Vec::new(),
            package: package.into(),
            package_comment: None,
            imports: ImportSet::new(),
            body: Vec::new(),
        }
    }

    /// Text placed above everything else, separated by a blank line so it
    /// is not taken for the package documentation.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add a line of package documentation (an empty line renders as `//`).
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.package_doc.push(line.into());
        self
    }

    /// Trailing comment on the package clause.
    pub fn package_comment(mut self, comment: impl Into<String>) -> Self {
        self.package_comment = Some(comment.into());
        self
    }

    /// Add a single import.
    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.imports.add(path);
        self
    }

    /// Replace the imports.
    pub fn imports(mut self, imports: ImportSet) -> Self {
        self.imports = imports;
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add a body element only when `condition` holds.
    pub fn add_if<R: Renderable>(self, condition: bool, node: impl FnOnce() -> R) -> Self {
        if condition { self.add(node()) } else { self }
    }

    /// Render the file with tab indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::go();

        if let Some(header) = &self.header {
            builder.push_raw(header.trim_end()).push_raw("\n").push_blank();
        }

        for line in &self.package_doc {
            builder.push_comment(line);
        }
        match &self.package_comment {
            Some(comment) => builder.push_line(&format!("package {} // {}", self.package, comment)),
            None => builder.push_line(&format!("package {}", self.package)),
        };

        if !self.imports.is_empty() {
            builder.push_blank();
            builder.emit(&self.imports);
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
