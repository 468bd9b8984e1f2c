mod commands;
mod ops;
mod reports;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors exit with 1; --help and --version still exit with 0
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    env_logger::try_init_from_env(
        env_logger::Env::default().default_filter_or(cli.log_level()),
    )?;

    cli.run()
}
