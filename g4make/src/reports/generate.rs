//! Generate report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from generating files.
#[derive(Debug)]
pub struct GenerateReport {
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written {
        files: Vec<PathBuf>,
        /// Formatter command run on each file, if any.
        formatter: Option<String>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written { files, formatter } => {
                for file in files {
                    out.added_item(&file.display().to_string());
                }
                if let Some(formatter) = formatter {
                    out.key_value("Formatted with", formatter);
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(file.content.trim_end());
                }
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} file{} would be generated",
                    files.len(),
                    if files.len() == 1 { "" } else { "s" }
                ));
            }
        }
    }
}
