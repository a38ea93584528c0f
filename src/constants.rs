//! Constants used throughout the este application

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["este.json", "este.yaml", "este.yml"];

/// Template repository cloned by `este new` unless overridden
pub const DEFAULT_REPO: &str = "https://github.com/steida/este";

/// Package whose postinstall step always runs last during installation
pub const DEFAULT_APP_MODULE: &str = "este-app";

/// Width of the install progress bar in characters
pub const DEFAULT_BAR_LENGTH: usize = 40;

/// Widest progress bar accepted from config or the command line
pub const MAX_BAR_LENGTH: usize = 1000;

/// Package manager executable
#[cfg(windows)]
pub const DEFAULT_NPM_PROGRAM: &str = "npm.cmd";
#[cfg(not(windows))]
pub const DEFAULT_NPM_PROGRAM: &str = "npm";

/// Packages passed to `npm dedupe` after installation
pub const DEFAULT_DEDUPE: &[&str] = &["react"];

/// Progress bar glyphs and control characters
pub mod bar {
    pub const FILLED: char = '▒';
    pub const EMPTY: char = '░';
    pub const BACKSPACE: char = '\u{8}';
}

/// Default style strings, in `console::Style::from_dotted_str` syntax
pub mod styles {
    pub const BAR: &str = "white";
    pub const PROCESSED: &str = "bold.green";
    pub const TEXT: &str = "bold.white";
}

/// Default status messages
pub mod messages {
    pub const READ: &str = "Reading list of dependencies...";
    pub const INSTALL: &str = "Installing npm dependencies:";
    pub const POST_INSTALL: &str = "Running Este.js postinstall...";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
