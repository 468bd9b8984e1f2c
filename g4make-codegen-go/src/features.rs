//! Feature flags derived from a project, and the imports they require.

use g4make_project::{CaseFolding, Project};

use crate::go_file::ImportSet;

/// Go import path of the ANTLR runtime.
pub const ANTLR_RUNTIME: &str = "github.com/antlr/antlr4/runtime/Go/antlr";

/// The parts of a project that change the shape of the generated test file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    /// The grammar has a parser, not only a lexer.
    pub parser: bool,
    /// How example input is case-folded before lexing.
    pub case: CaseFolding,
}

impl Features {
    pub fn of(project: &Project) -> Self {
        Self {
            parser: project.has_parser,
            case: project.case_insensitive,
        }
    }

    pub fn folds_case(&self) -> bool {
        !self.case.is_none()
    }

    /// The internal helper package provides the testing error listener and
    /// the case-changing stream.
    pub fn needs_internal(&self) -> bool {
        self.parser || self.folds_case()
    }

    /// Imports of the `<pkg>_test` file for these features.
    pub fn test_imports(&self, module: &str, package_name: &str) -> ImportSet {
        let mut imports = ImportSet::new();
        imports
            .add_if(self.parser, "fmt")
            .add_if(self.folds_case(), "strings")
            .add("path/filepath")
            .add("testing")
            .add(format!("{module}/{package_name}"))
            .add_if(self.needs_internal(), format!("{module}/internal"))
            .add(ANTLR_RUNTIME);
        imports
    }
}
