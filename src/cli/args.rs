use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// este - scaffolds a new project and installs its dependencies.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        global = true,
        long_help = "Increase logging verbosity (-v info, -vv debug, -vvv trace).\n\
                     This only affects este's own log messages. To see npm's output \
                     while creating a project, use `este new --show-npm-log`."
    )]
    pub verbose: u8,

    /// Configuration file (defaults to `este.json`, `este.yaml` or `este.yml`
    /// in the current directory).
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project from the template repository.
    #[command(visible_alias = "n")]
    New(NewArgs),

    /// Install dependencies of an existing project with a progress bar.
    Install(InstallArgs),
}

#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Name of the new project.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Destination directory (defaults to `./NAME`).
    #[arg(value_name = "DEST")]
    pub dest: Option<PathBuf>,

    /// Keep the template's git history instead of starting a new repository.
    #[arg(short, long = "keep-git")]
    pub keep_git: bool,

    /// Print npm's own output instead of the progress bar.
    #[arg(
        long = "show-npm-log",
        long_help = "Print npm's own output, prefixed with [NPM], instead of the progress bar.\n\
                     Earlier releases did this with `new --verbose`; `-v` now sets the log level."
    )]
    pub show_npm_log: bool,

    /// Template repository to clone.
    #[arg(long, value_name = "URL")]
    pub repo: Option<String>,

    /// Width of the progress bar.
    #[arg(long = "bar-length", value_name = "N")]
    pub bar_length: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct InstallArgs {
    /// Project directory.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Width of the progress bar.
    #[arg(long = "bar-length", value_name = "N")]
    pub bar_length: Option<usize>,
}

/// Parse command line arguments, printing the full help when a required
/// argument is missing.
pub fn get_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if matches!(
            e.kind(),
            ErrorKind::MissingRequiredArgument
                | ErrorKind::MissingSubcommand
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ) {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
