//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pictune_core::{LanguageFilter, PhotoFile};
use pictune_session::{Command, Session, SessionEvent};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::debug;

/// Where key presses go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputMode {
    /// Keys act on the session
    #[default]
    Browse,
    /// Keys edit the path of the photo to pick
    PathPrompt,
}

/// Main application state.
pub struct App {
    /// The analysis session behind the screen
    pub session: Session,
    /// Current input mode
    pub mode: InputMode,
    /// Path typed into the picker prompt
    pub path_input: String,
    /// Informational message in the status bar
    pub status_message: String,
    /// Endpoint shown in the footer
    pub endpoint: String,
    /// First visible song row
    pub scroll: usize,
    /// Animation frame counter, advanced on every tick
    pub ticks: usize,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create a new App for the given analysis endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            session: Session::default(),
            mode: InputMode::Browse,
            path_input: String::new(),
            status_message: String::from("Press o to choose a photo, or paste its path"),
            endpoint: endpoint.into(),
            scroll: 0,
            ticks: 0,
            should_quit: false,
        }
    }

    /// Feed an event to the session, resetting scroll when the song list changes.
    pub fn apply(&mut self, event: SessionEvent) -> Option<Command> {
        if matches!(
            event,
            SessionEvent::AnalysisSettled(_) | SessionEvent::LanguageSelected(_)
        ) {
            self.scroll = 0;
        }
        let command = self.session.update(event);
        if command.is_some() {
            self.status_message = String::from("Analyzing your photo...");
        } else if !self.session.is_busy() && self.status_message.starts_with("Analyzing") {
            self.status_message = self.settled_message();
        }
        command
    }

    fn settled_message(&self) -> String {
        match self.session.result() {
            Some(result) => format!("Mood detected: {}", result.mood()),
            None => String::from("Ready"),
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        match self.mode {
            InputMode::Browse => self.handle_browse_key(key),
            InputMode::PathPrompt => self.handle_prompt_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                None
            }
            KeyCode::Char('o') => {
                self.open_prompt();
                None
            }
            KeyCode::Enter | KeyCode::Char('d') => self.apply(SessionEvent::SubmitRequested),
            KeyCode::Tab | KeyCode::Right => {
                self.apply(SessionEvent::LanguageSelected(self.session.language().cycle_next()))
            }
            KeyCode::BackTab | KeyCode::Left => self.apply(SessionEvent::LanguageSelected(
                self.session.language().cycle_previous(),
            )),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                LanguageFilter::iter()
                    .nth(index)
                    .and_then(|language| self.apply(SessionEvent::LanguageSelected(language)))
            }
            KeyCode::Esc => self.apply(SessionEvent::NoticeDismissed),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.scroll + 1 < self.session.filtered_songs().len() {
                    self.scroll += 1;
                }
                None
            }
            _ => None,
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Esc => {
                self.mode = InputMode::Browse;
                self.path_input.clear();
                self.status_message = String::from("Selection cancelled");
            }
            KeyCode::Enter => self.confirm_prompt(),
            KeyCode::Backspace => {
                self.path_input.pop();
            }
            KeyCode::Char(c) => self.path_input.push(c),
            _ => {}
        }
        None
    }

    /// Open the picker prompt.
    pub fn open_prompt(&mut self) {
        self.mode = InputMode::PathPrompt;
        self.path_input.clear();
        self.status_message = String::from("Type the path to a photo and press Enter");
    }

    fn confirm_prompt(&mut self) {
        let Some(path) = parse_dropped_path(&self.path_input) else {
            self.status_message = String::from("No path entered");
            return;
        };
        self.mode = InputMode::Browse;
        self.path_input.clear();
        self.pick(path);
    }

    /// Pick a photo from disk, as the file picker would.
    ///
    /// The picker only offers images, so anything else is refused with a
    /// status message and the held photo is kept.
    pub fn pick(&mut self, path: PathBuf) {
        match PhotoFile::open_image(&path) {
            Ok(photo) => {
                self.status_message = format!("Selected {}", photo.file_name());
                self.apply(SessionEvent::FilePicked(photo));
            }
            Err(e) => {
                self.status_message = e.kind.to_string();
            }
        }
    }

    /// Handle bracketed paste.
    ///
    /// In the picker prompt pasted text is inserted into the path. Otherwise
    /// the paste is treated as a file dropped onto the upload area. A drop
    /// that cannot be read or is not an image leaves the held photo alone.
    pub fn handle_paste(&mut self, text: &str) -> Option<Command> {
        if self.mode == InputMode::PathPrompt {
            self.path_input.push_str(text.trim_end_matches(['\r', '\n']));
            return None;
        }

        let path = parse_dropped_path(text)?;
        match PhotoFile::open(&path) {
            Ok(photo) => {
                let accepted = photo.is_image();
                let name = photo.file_name().clone();
                let command = self.apply(SessionEvent::FileDropped(photo));
                if accepted {
                    self.status_message = format!("Selected {}", name);
                }
                command
            }
            Err(e) => {
                debug!(error = %e, "Ignoring paste that is not a readable file");
                None
            }
        }
    }

    /// Advance the animation.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Extracts a file path from text a terminal inserted for a drag and drop.
///
/// Only the first line is used, so dropping several files keeps the first.
/// Surrounding quotes, a `file://` scheme and backslash-escaped spaces are
/// removed.
///
/// # Examples
///
/// ```
/// use pictune_tui::parse_dropped_path;
/// use std::path::PathBuf;
///
/// assert_eq!(
///     parse_dropped_path("'/home/me/My Photos/beach.png'\n"),
///     Some(PathBuf::from("/home/me/My Photos/beach.png"))
/// );
/// assert_eq!(
///     parse_dropped_path("/home/me/My\\ Photos/beach.png"),
///     Some(PathBuf::from("/home/me/My Photos/beach.png"))
/// );
/// assert_eq!(parse_dropped_path("   "), None);
/// ```
pub fn parse_dropped_path(text: &str) -> Option<PathBuf> {
    let line = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    let unquoted = ['\'', '"']
        .iter()
        .find_map(|q| line.strip_prefix(*q).and_then(|l| l.strip_suffix(*q)))
        .unwrap_or(line);
    let path = unquoted.strip_prefix("file://").unwrap_or(unquoted);
    let path = path.replace("\\ ", " ");
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}
