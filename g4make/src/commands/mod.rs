mod doc;
mod listener;
mod test;

use std::path::Path;

use clap::{Args, Parser, Subcommand};
use doc::DocCommand;
use eyre::{OptionExt, Result};
use g4make_codegen_go::DEFAULT_MODULE;
use g4make_core::{Emitter, Formatter};
use listener::ListenerCommand;

use self::test::TestCommand;

use crate::ops::GenerateOptions;

/// Extension trait for exiting on descriptor errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for g4make_project::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "g4make")]
#[command(version)]
#[command(about = "Generate Go doc and test files for ANTLR grammar packages")]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Doc(cmd) => cmd.run(&self.global),
            Commands::Test(cmd) => cmd.run(&self.global),
            Commands::Listener(cmd) => cmd.run(&self.global),
        }
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.global.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate <output>/doc.go
    Doc(DocCommand),

    /// Generate <output>/<output>_test.go from a pom.xml
    Test(TestCommand),

    /// Generate the listener interface and base listener for a grammar
    Listener(ListenerCommand),
}

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Go import path prefix of the generated packages
    #[arg(long, global = true, default_value = DEFAULT_MODULE)]
    pub module: String,

    /// Formatter run on every written file, e.g. "gofmt -w"
    #[arg(long, global = true, default_value = "go fmt")]
    pub formatter: String,

    /// Write files without running the formatter
    #[arg(long, global = true)]
    pub no_format: bool,

    /// Print generated files instead of writing them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Log more (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    pub fn emitter(&self) -> Result<Emitter> {
        if self.no_format {
            return Ok(Emitter::without_formatter());
        }
        let formatter =
            Formatter::parse(&self.formatter).ok_or_eyre("--formatter must not be empty")?;
        Ok(Emitter::new(formatter))
    }

    pub fn generate_options(&self) -> Result<GenerateOptions> {
        Ok(GenerateOptions {
            emitter: self.emitter()?,
            dry_run: self.dry_run,
        })
    }
}

/// The Go package name of an output directory: its last path component.
pub(crate) fn package_name(output: &Path) -> Result<String> {
    output
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_eyre(format!(
            "cannot derive a package name from {}",
            output.display()
        ))
}
