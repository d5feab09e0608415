//! Terminal user interface for PicTune.
//!
//! Lets a user pick or drop a photo, send it for mood analysis and browse the
//! recommended songs by language. Built with ratatui for terminal rendering.
//! Terminals deliver drag and drop as a bracketed paste of the file path,
//! which is handled as a drop onto the upload area.

mod app;
mod events;
mod runner;
mod ui;

pub use app::{App, InputMode, parse_dropped_path};
pub use events::{Event, EventHandler};
pub use pictune_error::{TuiError, TuiErrorKind, TuiResult};
pub use runner::run_tui;
pub use ui::draw;
