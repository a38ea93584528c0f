//! Sections of the configuration file

use crate::constants::{messages, styles, DEFAULT_DEDUPE, DEFAULT_NPM_PROGRAM};
use console::Style;
use serde::Deserialize;

/// Style strings for the progress output, in `console`'s dotted syntax
/// (for example `"bold.green"` or `"white.on_blue"`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Styles {
    /// Empty part of the bar
    #[serde(default = "get_default_bar_style")]
    pub bar: String,
    /// Filled part of the bar
    #[serde(default = "get_default_processed_style")]
    pub processed: String,
    /// Status messages
    #[serde(default = "get_default_text_style")]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Messages {
    #[serde(default = "get_default_read_message")]
    pub read: String,
    #[serde(default = "get_default_install_message")]
    pub install: String,
    #[serde(default = "get_default_post_install_message")]
    pub post_install: String,
}

/// Package manager settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NpmConfig {
    /// Executable used for `ls`, `install` and `dedupe`
    #[serde(default = "get_default_npm_program")]
    pub program: String,
    /// Packages deduplicated after a fresh install
    #[serde(default = "get_default_dedupe")]
    pub dedupe: Vec<String>,
}

/// Resolved styles applied to terminal output.
#[derive(Debug, Clone)]
pub struct Theme {
    pub bar: Style,
    pub processed: Style,
    pub text: Style,
}

impl Theme {
    /// A theme that leaves every fragment unstyled.
    pub fn plain() -> Self {
        Self { bar: Style::new(), processed: Style::new(), text: Style::new() }
    }
}

impl From<&Styles> for Theme {
    fn from(styles: &Styles) -> Self {
        Self {
            bar: Style::from_dotted_str(&styles.bar),
            processed: Style::from_dotted_str(&styles.processed),
            text: Style::from_dotted_str(&styles.text),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            bar: get_default_bar_style(),
            processed: get_default_processed_style(),
            text: get_default_text_style(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            read: get_default_read_message(),
            install: get_default_install_message(),
            post_install: get_default_post_install_message(),
        }
    }
}

impl Default for NpmConfig {
    fn default() -> Self {
        Self { program: get_default_npm_program(), dedupe: get_default_dedupe() }
    }
}

fn get_default_bar_style() -> String {
    styles::BAR.to_string()
}

fn get_default_processed_style() -> String {
    styles::PROCESSED.to_string()
}

fn get_default_text_style() -> String {
    styles::TEXT.to_string()
}

fn get_default_read_message() -> String {
    messages::READ.to_string()
}

fn get_default_install_message() -> String {
    messages::INSTALL.to_string()
}

fn get_default_post_install_message() -> String {
    messages::POST_INSTALL.to_string()
}

fn get_default_npm_program() -> String {
    DEFAULT_NPM_PROGRAM.to_string()
}

fn get_default_dedupe() -> Vec<String> {
    DEFAULT_DEDUPE.iter().map(|pkg| pkg.to_string()).collect()
}
