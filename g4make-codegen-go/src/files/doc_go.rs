use std::path::{Path, PathBuf};

use g4make_core::quote_go_string;

use super::{COPYRIGHT, GoTemplate, TemplateData};
use crate::{GoFile, RenderError, error::require_identifier};

/// The `doc.go` file declaring the package and its canonical import path.
#[derive(Debug, Clone)]
pub struct DocGo {
    package_name: String,
    import_path: String,
}

impl DocGo {
    pub fn new(data: &TemplateData<'_>) -> Self {
        Self {
            package_name: data.package_name.clone(),
            import_path: data.import_path(),
        }
    }
}

impl GoTemplate for DocGo {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("doc.go")
    }

    fn render(&self) -> Result<String, RenderError> {
        require_identifier("doc", "package name", &self.package_name)?;

        Ok(GoFile::new(&self.package_name)
            .header(COPYRIGHT)
            .package_comment(format!("import {}", quote_go_string(&self.import_path)))
            .render())
    }
}
