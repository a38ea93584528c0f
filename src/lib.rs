/// Handles argument parsing and the `new` / `install` workflows.
pub mod cli;

/// Configuration file loading.
pub mod config;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Dependency installation with a live progress bar.
pub mod install;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Cloning of the template repository.
pub mod loader;

/// Git repository reinitialization.
pub mod vcs;
