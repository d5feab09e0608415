//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the pictune binary.

mod analyze;
mod commands;
mod tui_handler;

pub use analyze::analyze_photo;
pub use commands::{Cli, Commands, OutputFormat};
pub use tui_handler::launch_tui;
