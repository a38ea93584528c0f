//! Configuration management for este
//!
//! - `types`: styles, messages and package manager sections
//! - `loader`: configuration file discovery and parsing

pub mod loader;
pub mod types;


pub use loader::Config;
pub use types::{Messages, NpmConfig, Styles, Theme};
