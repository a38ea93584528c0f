#![allow(dead_code)]

use este::config::{Config, Styles};
use este::vcs::initial_commit;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stand-in for npm: `ls` lists two packages (and fails, as npm does before
/// the first install), `install` reports their postinstall steps on stderr
/// and `dedupe` records its arguments in the project.
pub const FAKE_NPM: &str = r#"#!/bin/sh
case "$1" in
  ls)
    echo "$PWD"
    echo "$PWD/node_modules/react"
    echo "$PWD/node_modules/gulp"
    exit 1
    ;;
  install)
    echo "npm info it worked if it ends with ok" >&2
    echo "npm info postinstall react@0.14.0" >&2
    echo "npm info postinstall gulp@3.9.0" >&2
    echo "npm info postinstall este-app@1.0.0" >&2
    echo "added 3 packages"
    ;;
  dedupe)
    shift
    echo "$@" > dedupe.log
    ;;
esac
"#;

/// Writes an executable shell script and returns its path.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Default configuration without styling so output can be compared verbatim.
pub fn plain_config(npm_program: &Path) -> Config {
    console::set_colors_enabled(false);
    let mut config = Config::default();
    config.styles =
        Styles { bar: String::new(), processed: String::new(), text: String::new() };
    config.npm.program = npm_program.display().to_string();
    config
}

/// Creates a git repository with a single commit to act as the template.
pub fn create_template_repo(dir: &Path) -> PathBuf {
    let repo_dir = dir.join("template");
    fs::create_dir_all(repo_dir.join("src")).unwrap();
    fs::write(repo_dir.join("package.json"), r#"{"name": "este-app"}"#).unwrap();
    fs::write(repo_dir.join("src/main.js"), "console.log('hello');\n").unwrap();

    let repo = git2::Repository::init(&repo_dir).unwrap();
    initial_commit(&repo).unwrap();
    repo_dir
}

pub fn output_string(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}
