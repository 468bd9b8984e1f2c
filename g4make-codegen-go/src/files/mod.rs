//! The Go files g4make generates.

mod copyright;
mod doc_go;
mod listener_go;
mod test_go;

use std::path::{Path, PathBuf};

use g4make_core::File;
use g4make_project::Project;

pub use copyright::COPYRIGHT;
pub use doc_go::DocGo;
pub use listener_go::{BaseListenerGo, ListenerGo};
pub use test_go::TestGo;

use crate::RenderError;

/// Go import path prefix of the generated packages.
pub const DEFAULT_MODULE: &str = "bramp.net/antlr4";

/// A generated Go file.
pub trait GoTemplate {
    /// Get the file path relative to the output directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> Result<String, RenderError>;

    /// Render into a file ready to be emitted.
    fn file(&self, base: &Path) -> Result<File, RenderError> {
        Ok(File::new(self.path(base), self.render()?))
    }
}

/// The data a template is executed against.
#[derive(Debug, Clone)]
pub struct TemplateData<'a> {
    /// Go package the file belongs to
    pub package_name: String,
    /// Project metadata; only the test template needs it
    pub project: Option<&'a Project>,
    /// Import path prefix, `<module>/<package_name>` is the package itself
    pub module: String,
}

impl<'a> TemplateData<'a> {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            project: None,
            module: DEFAULT_MODULE.to_string(),
        }
    }

    pub fn with_project(mut self, project: &'a Project) -> Self {
        self.project = Some(project);
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    /// The import path of the generated package.
    pub fn import_path(&self) -> String {
        format!("{}/{}", self.module, self.package_name)
    }
}

/// The templates selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// `doc.go`
    Doc,
    /// `<pkg>_test.go`
    Test,
}

impl Template {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Doc => "doc",
            Self::Test => "test",
        }
    }

    /// Name of the generated file for the given package.
    pub fn file_name(&self, package_name: &str) -> String {
        match self {
            Self::Doc => "doc.go".to_string(),
            Self::Test => format!("{package_name}_test.go"),
        }
    }
}

/// Execute `template` against `data`.
pub fn render(template: Template, data: &TemplateData<'_>) -> Result<String, RenderError> {
    match template {
        Template::Doc => DocGo::new(data).render(),
        Template::Test => TestGo::new(data)?.render(),
    }
}

/// Execute `template` against `data`, placing the result under `base`.
pub fn render_file(
    template: Template,
    data: &TemplateData<'_>,
    base: &Path,
) -> Result<File, RenderError> {
    match template {
        Template::Doc => DocGo::new(data).file(base),
        Template::Test => TestGo::new(data)?.file(base),
    }
}
