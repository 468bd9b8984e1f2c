use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use g4make_codegen_go::{Template, TemplateData, render_file};
use g4make_project::{Pom, ProjectOverrides};

use super::{GlobalArgs, UnwrapOrExit, package_name};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TestCommand {
    /// Package directory; its name is the Go package name
    pub output: PathBuf,

    /// Path to the grammar's pom.xml
    pub descriptor: PathBuf,

    /// Grammar files of this package; replaces those declared in pom.xml
    pub grammars: Vec<String>,
}

impl TestCommand {
    /// Run the test command
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let package = package_name(&self.output)?;

        let pom = Pom::open(&self.descriptor).unwrap_or_exit();
        log::info!("generating tests for grammar {}", pom.grammar_name());
        let mut project = pom.project();
        // A single descriptor may span several grammar packages
        project.apply(ProjectOverrides::replace_grammars(self.grammars.iter().cloned()));

        // Generated tests open examples relative to the package's parent
        let cwd = std::env::current_dir().wrap_err("Failed to read the working directory")?;
        project.rebase_examples(&cwd, self.output.parent().unwrap_or(Path::new("")));

        if project.examples.is_empty() {
            log::warn!(
                "{} declares no example files (looked in {})",
                self.descriptor.display(),
                pom.example_files()
            );
        }

        let data = TemplateData::new(package)
            .with_module(&global.module)
            .with_project(&project);
        let file = render_file(Template::Test, &data, &self.output)
            .wrap_err_with(|| format!("Failed to render test for {}", self.descriptor.display()))?;

        let report = ops::generate(vec![file], &global.generate_options()?)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
