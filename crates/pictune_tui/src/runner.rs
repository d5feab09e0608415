//! TUI runner - main loop and request dispatch.
//!
//! Analysis requests run on the tokio runtime behind `handle` while the
//! terminal loop keeps drawing. Their outcome comes back over a channel and
//! is fed to the session as an ordinary event.

use crate::{App, Event, EventHandler, TuiError, TuiErrorKind, TuiResult};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pictune_error::{AnalysisError, AnalysisErrorKind};
use pictune_interface::PhotoAnalyzer;
use pictune_session::{Command, SessionEvent};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI until the user quits.
///
/// # Arguments
///
/// * `analyzer` - Where photos are sent for analysis
/// * `runtime` - Runtime that executes analysis requests
/// * `initial_photo` - Photo to pick on startup, if any
pub fn run_tui(
    analyzer: Arc<dyn PhotoAnalyzer>,
    runtime: Handle,
    initial_photo: Option<PathBuf>,
) -> TuiResult<()> {
    let mut terminal = setup_terminal()?;

    let mut app = App::new(analyzer.endpoint());
    if let Some(path) = initial_photo {
        app.pick(path);
    }

    let mut dispatcher = Dispatcher::new(analyzer, runtime);
    let outcome = run_loop(&mut terminal, &mut app, &mut dispatcher);

    dispatcher.abort();
    app.session.end();
    restore_terminal(&mut terminal)?;
    info!("TUI closed");
    outcome
}

fn setup_terminal() -> TuiResult<CrosstermTerminal> {
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {}",
            e
        )))
    })?;

    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })
}

fn restore_terminal(terminal: &mut CrosstermTerminal) -> TuiResult<()> {
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )
    .map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })
}

fn run_loop(
    terminal: &mut CrosstermTerminal,
    app: &mut App,
    dispatcher: &mut Dispatcher,
) -> TuiResult<()> {
    let events = EventHandler::new(100);

    while !app.should_quit {
        terminal
            .draw(|f| crate::ui::draw(f, app))
            .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))?;

        let command = match events.next()? {
            Some(Event::Key(key)) => app.handle_key(key),
            Some(Event::Paste(text)) => app.handle_paste(&text),
            Some(Event::Tick) => {
                app.tick();
                None
            }
            Some(Event::Resize) | None => None,
        };
        if let Some(command) = command {
            dispatcher.spawn(command);
        }

        while let Some(settled) = dispatcher.try_settled() {
            if let Some(command) = app.apply(settled) {
                dispatcher.spawn(command);
            }
        }
    }

    Ok(())
}

/// Runs commands on the runtime and collects their outcomes.
struct Dispatcher {
    analyzer: Arc<dyn PhotoAnalyzer>,
    runtime: Handle,
    tx: UnboundedSender<SessionEvent>,
    rx: UnboundedReceiver<SessionEvent>,
    in_flight: Option<JoinHandle<()>>,
}

impl Dispatcher {
    fn new(analyzer: Arc<dyn PhotoAnalyzer>, runtime: Handle) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            analyzer,
            runtime,
            tx,
            rx,
            in_flight: None,
        }
    }

    fn spawn(&mut self, command: Command) {
        let analyzer = self.analyzer.clone();
        let tx = self.tx.clone();
        debug!(?command, "Dispatching command");
        self.in_flight = Some(self.runtime.spawn(async move {
            let settled = pictune_session::execute(analyzer.as_ref(), command).await;
            // Receiver is gone once the UI has shut down.
            let _ = tx.send(settled);
        }));
    }

    /// Next outcome, if one is ready.
    ///
    /// A task that finished without sending anything panicked or was
    /// cancelled. Its request is settled as failed so the session does not
    /// stay busy forever.
    fn try_settled(&mut self) -> Option<SessionEvent> {
        if let Ok(settled) = self.rx.try_recv() {
            return Some(settled);
        }

        let finished = self
            .in_flight
            .as_ref()
            .is_some_and(|task| task.is_finished());
        if !finished {
            return None;
        }
        self.in_flight = None;

        // Tasks send before they finish, so anything sent is queued by now.
        if let Ok(settled) = self.rx.try_recv() {
            return Some(settled);
        }

        let err = TuiError::new(TuiErrorKind::Dispatch(String::from(
            "analysis task ended without a result",
        )));
        error!(error = %err, "Analysis task lost");
        Some(SessionEvent::AnalysisSettled(Err(AnalysisError::new(
            AnalysisErrorKind::NetworkError(err.kind.to_string()),
        ))))
    }

    fn abort(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}
