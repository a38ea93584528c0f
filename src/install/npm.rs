use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::install::listing::{parse_dependency_listing, Dependencies};

/// Builds and runs the package manager commands used during scaffolding.
#[derive(Debug, Clone)]
pub struct Npm {
    program: String,
    project_dir: PathBuf,
}

impl Npm {
    pub fn new<S: Into<String>, P: AsRef<Path>>(program: S, project_dir: P) -> Self {
        Self { program: program.into(), project_dir: project_dir.as_ref().to_path_buf() }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    fn command<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.program);
        command.args(args).current_dir(&self.project_dir);
        command
    }

    /// `npm ls` restricted to top-level packages, one path per line.
    pub fn list_command(&self) -> Command {
        self.command(["ls", "--depth=0", "--parseable", "--loglevel=silent"])
    }

    /// `npm install` logging every postinstall step on stderr.
    pub fn install_command(&self) -> Command {
        self.command(["install", "--loglevel=info"])
    }

    /// `npm install` with npm's own output level.
    pub fn plain_install_command(&self) -> Command {
        self.command(["install"])
    }

    pub fn dedupe_command<S: AsRef<str>>(&self, packages: &[S]) -> Command {
        let mut command = self.command(["dedupe"]);
        command.args(packages.iter().map(|pkg| pkg.as_ref()));
        command
    }

    /// Lists the top-level dependencies that can be resolved right now.
    ///
    /// npm exits non-zero while packages are still missing, which is the
    /// normal state before the first install, so the status is only logged.
    pub fn list_dependencies(&self) -> Result<Dependencies> {
        let mut command = self.list_command();
        let output = command
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| spawn_error(&command, source))?;

        if !output.status.success() {
            log::debug!("'{}' exited with {}, ignoring", describe(&command), output.status);
        }

        let dependencies = parse_dependency_listing(&String::from_utf8_lossy(&output.stdout));
        log::debug!("Found {} top-level dependencies", dependencies.len());
        Ok(dependencies)
    }

    /// Runs `npm dedupe` for the given packages; does nothing for an empty list.
    pub fn dedupe<S: AsRef<str>>(&self, packages: &[S]) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        let mut command = self.dedupe_command(packages);
        log::debug!("Running '{}'", describe(&command));
        let status = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| spawn_error(&command, source))?;

        if !status.success() {
            return Err(Error::CommandError { command: describe(&command), status });
        }
        Ok(())
    }
}

/// Renders a command as the shell line it corresponds to, for messages.
pub fn describe(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn spawn_error(command: &Command, source: std::io::Error) -> Error {
    Error::CommandSpawnError { command: describe(command), source }
}
