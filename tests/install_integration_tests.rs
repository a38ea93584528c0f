#![cfg(unix)]

mod utils;

use este::config::Config;
use este::error::Error;
use este::install::{
    install_with_log, install_with_progress, run_install, Dependencies, InstallOptions, Npm,
    Steps,
};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;
use utils::{output_string, plain_config, write_script, FAKE_NPM};

const BACKSPACE: char = '\u{8}';

fn sh(script: &str) -> Command {
    let mut command = Command::new("sh");
    command.args(["-c", script]);
    command
}

fn plain_options(bar_length: usize, steps: Steps) -> InstallOptions {
    let mut config: Config = plain_config(Path::new("npm"));
    config.bar_length = bar_length;
    InstallOptions::from_config(&config).with_steps(steps)
}

fn deps(names: &[&str]) -> Dependencies {
    names.iter().map(|name| name.to_string()).collect()
}

#[test_log::test]
fn renders_progress_from_stderr_stream() {
    let options = plain_options(30, Steps::default());
    let expected = deps(&["a", "b", "c", "d"]);
    let mut out = Vec::new();

    run_install(
        sh("for d in a b c d; do echo \"npm info postinstall $d@1.0.0\" >&2; sleep 0.05; done"),
        &expected,
        &options,
        &mut out,
    )
    .unwrap();

    let text = output_string(out);
    assert!(text.starts_with(&format!("Installing npm dependencies: {}", "░".repeat(30))));
    let erase = BACKSPACE.to_string().repeat(30);
    // Lines read in one chunk share a redraw, so at most one per dependency.
    let redraws = text.matches(&erase).count();
    assert!((1..=4).contains(&redraws), "{redraws} redraws");
    assert!(text.ends_with(&format!("{erase}{}\n", "▒".repeat(30))));
}

#[test_log::test]
fn reassembles_lines_written_in_pieces() {
    let options = plain_options(10, Steps::default());
    let expected = deps(&["a", "b"]);
    let mut out = Vec::new();

    run_install(
        sh("printf 'npm info postinstall a@1.0.0\\nnpm info post' >&2; sleep 0.1; printf 'install b@1.0.0\\n' >&2"),
        &expected,
        &options,
        &mut out,
    )
    .unwrap();

    let text = output_string(out);
    assert!(text.ends_with(&format!("{}\n", "▒".repeat(10))));
}

#[test_log::test]
fn announces_postinstall_of_app_module() {
    let options = plain_options(10, Steps::new(4, 6));
    let expected = deps(&["foo", "este-app"]);
    let mut out = Vec::new();

    run_install(
        sh("echo 'npm info postinstall foo@1.0.0' >&2; echo 'garbage line' >&2; echo 'npm info postinstall este-app@2.0.0' >&2"),
        &expected,
        &options,
        &mut out,
    )
    .unwrap();

    let text = output_string(out);
    assert!(text.starts_with("5/6. Installing npm dependencies: "));
    assert!(text.ends_with("\n6/6. Running Este.js postinstall...\n"));
}

#[test_log::test]
fn empty_dependency_set_prints_plain_message() {
    let options = plain_options(10, Steps::default());
    let expected = Dependencies::new();
    let mut out = Vec::new();

    run_install(sh("echo 'npm info postinstall a@1.0.0' >&2"), &expected, &options, &mut out)
        .unwrap();

    let text = output_string(out);
    assert_eq!(text, "Installing npm dependencies:\n");
}

#[test_log::test]
fn failure_carries_collected_stderr() {
    let options = plain_options(10, Steps::default());
    let expected = deps(&["a"]);
    let mut out = Vec::new();

    let err = run_install(
        sh("echo 'npm info postinstall a@1.0.0' >&2; echo 'npm ERR! code ELIFECYCLE' >&2; exit 3"),
        &expected,
        &options,
        &mut out,
    )
    .unwrap_err();

    match err {
        Error::InstallError { status, output } => {
            assert_eq!(status.code(), Some(3));
            assert!(output.contains("npm ERR! code ELIFECYCLE"));
            assert!(output.contains("npm info postinstall a@1.0.0"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test_log::test]
fn missing_program_fails_to_spawn() {
    let options = plain_options(10, Steps::default());
    let expected = deps(&["a"]);
    let mut out = Vec::new();

    let err = run_install(
        Command::new("definitely-not-a-real-installer"),
        &expected,
        &options,
        &mut out,
    )
    .unwrap_err();
    assert!(matches!(err, Error::CommandSpawnError { .. }));
}

#[test_log::test]
fn install_with_progress_lists_then_installs() {
    let dir = TempDir::new().unwrap();
    let npm_program = write_script(dir.path(), "npm", FAKE_NPM);
    let project = dir.path().join("project");
    std::fs::create_dir(&project).unwrap();

    let mut config = plain_config(&npm_program);
    config.bar_length = 4;
    let options = InstallOptions::from_config(&config);
    let npm = Npm::new(config.npm.program.as_str(), &project);
    let mut out = Vec::new();

    let expected = install_with_progress(&npm, &options, &mut out).unwrap();
    assert_eq!(expected.iter().collect::<Vec<_>>(), vec!["react", "gulp"]);

    let text = output_string(out);
    assert!(text.starts_with("Reading list of dependencies...\nInstalling npm dependencies: ░░░░"));
    assert!(text.contains("▒▒▒▒"));
    assert!(text.ends_with("\nRunning Este.js postinstall...\n"));
}

#[test_log::test]
fn install_with_log_prefixes_npm_output() {
    let dir = TempDir::new().unwrap();
    let npm_program = write_script(dir.path(), "npm", FAKE_NPM);

    let config = plain_config(&npm_program);
    let options = InstallOptions::from_config(&config).with_steps(Steps::new(4, 6));
    let npm = Npm::new(config.npm.program.as_str(), dir.path());
    let mut out = Vec::new();

    let expected = install_with_log(&npm, &options, &mut out).unwrap();
    assert_eq!(expected.len(), 2);

    let text = output_string(out);
    assert_eq!(
        text,
        "4/6. Reading list of dependencies...\n5/6. Installing npm dependencies:\n[NPM] added 3 packages\n"
    );
}

/// Writer that refuses anything containing a backspace, i.e. the first redraw.
#[cfg(target_os = "linux")]
struct FailOnRedraw;

#[cfg(target_os = "linux")]
impl std::io::Write for FailOnRedraw {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if buf.contains(&0x08) {
            return Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "terminal closed"));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(target_os = "linux")]
#[test_log::test]
fn output_failure_stops_the_installer() {
    use std::time::{Duration, Instant};

    let dir = TempDir::new().unwrap();
    let pid_file = dir.path().join("pid");
    let options = plain_options(10, Steps::default());
    let expected = deps(&["a", "b"]);

    let started = Instant::now();
    let err = run_install(
        sh(&format!(
            "echo $$ > '{}'; echo 'npm info postinstall a@1.0.0' >&2; exec sleep 30",
            pid_file.display()
        )),
        &expected,
        &options,
        &mut FailOnRedraw,
    )
    .unwrap_err();

    assert!(matches!(err, Error::IoError(_)));
    assert!(started.elapsed() < Duration::from_secs(20));
    let pid = std::fs::read_to_string(&pid_file).unwrap();
    assert!(!Path::new(&format!("/proc/{}", pid.trim())).exists());
}
