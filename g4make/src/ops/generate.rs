//! Generate operation - writing rendered files or previewing them.

use eyre::{Context, Result};
use g4make_core::{Emitter, File, normalize_source};

use crate::reports::{GenerateReport, GenerationResult, PreviewFile};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Writes and formats each file.
    pub emitter: Emitter,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Files are emitted in order and the first failure aborts the rest.
pub fn generate(files: Vec<File>, opts: &GenerateOptions) -> Result<GenerateReport> {
    if opts.dry_run {
        let files = files
            .iter()
            .map(|f| PreviewFile {
                path: f.path().display().to_string(),
                content: normalize_source(f.content()),
            })
            .collect();
        return Ok(GenerateReport {
            result: GenerationResult::Preview(files),
        });
    }

    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        opts.emitter
            .emit(file)
            .wrap_err_with(|| format!("failed to generate {}", file.path().display()))?;
        written.push(file.path().to_path_buf());
    }

    Ok(GenerateReport {
        result: GenerationResult::Written {
            files: written,
            formatter: opts.emitter.formatter().map(|f| f.command_line()),
        },
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("json/doc.go");
        let opts = GenerateOptions {
            emitter: Emitter::without_formatter(),
            dry_run: true,
        };

        let report = generate(vec![File::new(&path, "package json  \n\n\n")], &opts).unwrap();

        assert!(!path.exists());
        match report.result {
            GenerationResult::Preview(files) => {
                assert_eq!(files.len(), 1);
                assert_eq!(files[0].content, "package json\n");
            }
            GenerationResult::Written { .. } => panic!("expected a preview"),
        }
    }

    #[test]
    fn test_writes_every_file() {
        let dir = TempDir::new().unwrap();
        let opts = GenerateOptions {
            emitter: Emitter::without_formatter(),
            dry_run: false,
        };
        let files = vec![
            File::new(dir.path().join("a.go"), "package a\n"),
            File::new(dir.path().join("b.go"), "package b\n"),
        ];

        let report = generate(files, &opts).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("a.go")).unwrap(), "package a\n");
        assert_eq!(fs::read_to_string(dir.path().join("b.go")).unwrap(), "package b\n");
        match report.result {
            GenerationResult::Written { files, formatter } => {
                assert_eq!(files.len(), 2);
                assert!(formatter.is_none());
            }
            GenerationResult::Preview(_) => panic!("expected written files"),
        }
    }
}
