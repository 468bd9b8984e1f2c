//! Writing rendered files to disk and running the source formatter on them.

use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

use thiserror::Error;

use crate::File;

/// Failure while emitting a file. Every variant names the stage and path.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to create directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create {path:?}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to close file {path:?}")]
    Close {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run `{command}` on {path:?}")]
    Format {
        path: PathBuf,
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed on {path:?} ({status}): {stderr}")]
    FormatterFailed {
        path: PathBuf,
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// External source formatter invoked as `<program> <args>... <path>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    program: String,
    args: Vec<String>,
}

impl Formatter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Parse a whitespace separated command line such as `gofmt -w`.
    ///
    /// Returns `None` for an empty command.
    pub fn parse(command: &str) -> Option<Self> {
        let mut words = command.split_whitespace();
        let program = words.next()?;
        Some(words.fold(Self::new(program), |fmt, word| fmt.arg(word)))
    }

    /// The command as it would be typed, without the target path.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the formatter on `path`, waiting for it to finish.
    pub fn run(&self, path: &Path) -> Result<(), EmitError> {
        log::debug!("running `{} {}`", self.command_line(), path.display());

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .output()
            .map_err(|e| EmitError::Format {
                path: path.to_path_buf(),
                command: self.command_line(),
                source: e,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(EmitError::FormatterFailed {
                path: path.to_path_buf(),
                command: self.command_line(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl Default for Formatter {
    /// `go fmt <path>`
    fn default() -> Self {
        Self::new("go").arg("fmt")
    }
}

/// Writes files and formats them afterwards.
#[derive(Debug, Clone)]
pub struct Emitter {
    formatter: Option<Formatter>,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(Formatter::default())
    }
}

impl Emitter {
    pub fn new(formatter: Formatter) -> Self {
        Self {
            formatter: Some(formatter),
        }
    }

    /// An emitter that only writes, leaving the output unformatted.
    pub fn without_formatter() -> Self {
        Self { formatter: None }
    }

    pub fn formatter(&self) -> Option<&Formatter> {
        self.formatter.as_ref()
    }

    /// Normalize, write and format a file.
    ///
    /// The file is created or truncated. Any failure aborts the emission and
    /// is reported with the stage that failed.
    pub fn emit(&self, file: &File) -> Result<(), EmitError> {
        let path = file.path();
        let content = crate::normalize_source(file.content());

        write_file(path, &content)?;
        log::info!("wrote {}", path.display());

        if let Some(formatter) = &self.formatter {
            formatter.run(path)?;
        }

        Ok(())
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), EmitError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| EmitError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut out = std::fs::File::create(path).map_err(|e| EmitError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;

    out.write_all(content.as_bytes())
        .map_err(|e| EmitError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    out.sync_all().map_err(|e| EmitError::Close {
        path: path.to_path_buf(),
        source: e,
    })
}
