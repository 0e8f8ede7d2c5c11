//! # menumaker
//!
//! Command-line front end for [`navmenu`]: reads a JSON menu document,
//! validates it and prints the `<nav>` markup.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line arguments
//! - [`config`] - `menumaker.toml` settings
//! - [`run`] - The load, validate and render pipeline

/// Command-line arguments.
pub mod cli;

/// Tool configuration read from `menumaker.toml`.
pub mod config;

/// The load, validate and render pipeline.
pub mod run;

#[macro_use]
extern crate log;

pub use cli::Cli;
pub use config::MenuMakerConfig;
pub use run::{Outcome, run};
