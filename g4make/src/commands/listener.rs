use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use g4make_codegen_go::{GoTemplate, ListenerGo};

use super::{GlobalArgs, package_name};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListenerCommand {
    /// Package directory; its name is the Go package name
    pub output: PathBuf,

    /// Grammar name, as in `grammar <name>;`
    pub grammar: String,

    /// Parser rules, in declaration order
    #[arg(required = true)]
    pub rules: Vec<String>,
}

impl ListenerCommand {
    /// Run the listener command
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let package = package_name(&self.output)?;
        let listener = ListenerGo::new(package, &self.grammar, &self.rules);

        let files = vec![
            listener
                .file(&self.output)
                .wrap_err("Failed to render listener")?,
            listener
                .base()
                .file(&self.output)
                .wrap_err("Failed to render base listener")?,
        ];

        let report = ops::generate(files, &global.generate_options()?)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
