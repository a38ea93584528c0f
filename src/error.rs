use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON config file. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML config file. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Git operation failed. Original error: {0}")]
    Git2Error(#[from] git2::Error),

    #[error("Configuration validation failed: {0}.")]
    ConfigValidation(String),

    #[error("Cannot proceed: template repository '{template}' does not exist.")]
    TemplateDoesNotExistsError { template: String },

    #[error("Folder '{dest}' already exists. Please choose a different one.")]
    DestinationExistsError { dest: String },

    #[error("Failed to start '{command}'. Original error: {source}")]
    CommandSpawnError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The package manager ran but finished with an error.
    #[error("Dependency installation failed with status: {status}\n{output}")]
    InstallError { status: ExitStatus, output: String },

    #[error("Command '{command}' failed with status: {status}")]
    CommandError { command: String, status: ExitStatus },
}

/// Convenience type alias for Results with the crate error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
