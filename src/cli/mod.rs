pub mod args;
pub mod runner;

pub use args::{get_cli, get_log_level_from_verbose, Cli, Commands, InstallArgs, NewArgs};
pub use runner::Runner;

use crate::{config::Config, error::Result};

/// Main entry point for CLI execution
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref(), ".")?;
    let mut runner = Runner::new(config, std::io::stdout());

    match cli.command {
        Commands::New(args) => runner.new_project(args).map(|_| ()),
        Commands::Install(args) => runner.install(args),
    }
}
