//! Dependency installation with live progress
//!
//! The installer's stderr is read chunk by chunk; every chunk goes through
//! the line assembler, the postinstall extractor and the progress calculator
//! before the bar is redrawn:
//! - `buffer`: chunk to line assembly
//! - `extract`: `npm info postinstall <name>@<version>` matching
//! - `progress`: bar level calculation and bar text fragments
//! - `listing`: expected dependencies from `npm ls --parseable`
//! - `tracker`: the per-run state tying the above together
//! - `npm`: package manager command construction

pub mod buffer;
pub mod extract;
pub mod listing;
pub mod npm;
pub mod progress;
pub mod tracker;

pub use listing::Dependencies;
pub use npm::Npm;
pub use tracker::{InstallOptions, InstallTracker, Steps};

use std::io::{ErrorKind, Read, Write};
use std::process::{Child, Command, Stdio};

use crate::config::Theme;
use crate::error::{Error, Result};
use crate::install::buffer::LineBuffer;
use crate::install::npm::{describe, spawn_error};

const READ_CHUNK: usize = 8 * 1024;

/// Runs `command` and renders its postinstall events against `expected`.
///
/// Succeeds only when the command exits with status 0; otherwise the error
/// carries everything the command wrote to stderr.
pub fn run_install<W: Write>(
    mut command: Command,
    expected: &Dependencies,
    options: &InstallOptions,
    out: &mut W,
) -> Result<()> {
    log::debug!("Running '{}'", describe(&command));

    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| spawn_error(&command, source))?;

    let mut tracker = InstallTracker::new(options, expected);
    if let Err(e) = track_stderr(&mut child, &mut tracker, out) {
        reap(&mut child);
        return Err(e);
    }
    log::debug!("{} of {} dependencies finished", tracker.finished().len(), expected.len());

    let status = child.wait()?;
    if !status.success() {
        return Err(Error::InstallError { status, output: tracker.into_output() });
    }
    Ok(())
}

fn track_stderr<W: Write>(
    child: &mut Child,
    tracker: &mut InstallTracker<'_>,
    out: &mut W,
) -> Result<()> {
    tracker.start(out)?;

    if let Some(mut stderr) = child.stderr.take() {
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            match stderr.read(&mut chunk) {
                Ok(0) => break,
                Ok(read) => tracker.feed(&chunk[..read], out)?,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    tracker.finish(out)?;
    Ok(())
}

/// Stops a child whose output can no longer be handled and collects its status.
fn reap(child: &mut Child) {
    if let Err(e) = child.kill() {
        log::debug!("Failed to kill process {}: {e}", child.id());
    }
    match child.wait() {
        Ok(status) => log::debug!("Process {} stopped with {status}", child.id()),
        Err(e) => log::warn!("Failed to wait for process {}: {e}", child.id()),
    }
}

/// Lists the expected dependencies, then installs them with a progress bar.
pub fn install_with_progress<W: Write>(
    npm: &Npm,
    options: &InstallOptions,
    out: &mut W,
) -> Result<Dependencies> {
    let theme = &options.theme;
    writeln!(
        out,
        "{}",
        theme.text.apply_to(format!("{}{}", options.steps.label(0), options.messages.read))
    )?;

    let expected = npm.list_dependencies()?;
    run_install(npm.install_command(), &expected, options, out)?;
    Ok(expected)
}

/// Installs while echoing npm's stdout line by line behind an `[NPM]` tag.
///
/// npm's stderr goes straight to the terminal, so a failure carries no
/// collected output.
pub fn install_with_log<W: Write>(
    npm: &Npm,
    options: &InstallOptions,
    out: &mut W,
) -> Result<Dependencies> {
    let theme = &options.theme;
    writeln!(
        out,
        "{}",
        theme.text.apply_to(format!("{}{}", options.steps.label(0), options.messages.read))
    )?;
    let expected = npm.list_dependencies()?;

    writeln!(
        out,
        "{}",
        theme.text.apply_to(format!("{}{}", options.steps.label(1), options.messages.install))
    )?;

    let mut command = npm.plain_install_command();
    log::debug!("Running '{}'", describe(&command));

    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| spawn_error(&command, source))?;

    if let Err(e) = echo_stdout(&mut child, theme, out) {
        reap(&mut child);
        return Err(e);
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(Error::InstallError { status, output: String::new() });
    }
    Ok(expected)
}

fn echo_stdout<W: Write>(child: &mut Child, theme: &Theme, out: &mut W) -> Result<()> {
    let mut buffer = LineBuffer::new();
    let echo = |lines: Vec<String>, out: &mut W| -> std::io::Result<()> {
        for line in lines {
            writeln!(out, "{}{}", theme.processed.apply_to("[NPM] "), console::style(line).dim())?;
        }
        out.flush()
    };

    if let Some(mut stdout) = child.stdout.take() {
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            match stdout.read(&mut chunk) {
                Ok(0) => break,
                Ok(read) => {
                    if let Some(lines) = buffer.append_bytes(&chunk[..read]) {
                        echo(lines, out)?;
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
    if let Some(rest) = buffer.finish() {
        echo(vec![rest], out)?;
    }
    Ok(())
}
