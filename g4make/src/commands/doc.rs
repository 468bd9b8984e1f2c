use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use g4make_codegen_go::{Template, TemplateData, render_file};

use super::{GlobalArgs, package_name};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct DocCommand {
    /// Package directory; its name is the Go package name
    pub output: PathBuf,
}

impl DocCommand {
    /// Run the doc command
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let package = package_name(&self.output)?;
        let data = TemplateData::new(package).with_module(&global.module);

        let file = render_file(Template::Doc, &data, &self.output)
            .wrap_err("Failed to render doc.go")?;

        let report = ops::generate(vec![file], &global.generate_options()?)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
