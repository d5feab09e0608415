//! UI rendering for TUI.

use crate::app::{App, InputMode};
use pictune_core::{LanguageFilter, Song};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Tabs, Wrap},
};
use strum::IntoEnumIterator;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(5), // Upload panel
            Constraint::Length(3), // Language selector and detect button
            Constraint::Min(0),    // Results
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0]);
    draw_upload_panel(f, app, chunks[1]);
    draw_controls(f, app, chunks[2]);
    draw_results(f, app, chunks[3]);
    draw_status_bar(f, app, chunks[4]);
}

#[tracing::instrument(skip_all)]
fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "PicTune",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Discover music that matches your photo's mood"),
    ])
    .block(Block::default().borders(Borders::BOTTOM))
    .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Draw the drop zone, or the path prompt when picking.
#[tracing::instrument(skip_all)]
fn draw_upload_panel(f: &mut Frame, app: &App, area: Rect) {
    if app.mode == InputMode::PathPrompt {
        let prompt = Paragraph::new(format!("{}_", app.path_input))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Choose a photo (Enter: Select | Esc: Cancel)"),
            )
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(prompt, area);
        return;
    }

    let lines = match app.session.preview() {
        Some(preview) => vec![
            Line::from(Span::styled(
                preview.file_name().clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "{} | {}",
                preview.media_type(),
                format_size(*preview.byte_len())
            )),
            Line::from("Drop or press o to choose another photo"),
        ],
        None => vec![
            Line::from("Drop a photo here"),
            Line::from("(paste or drag its path into the terminal, or press o to choose one)"),
        ],
    };

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Photo"))
        .alignment(Alignment::Center);
    f.render_widget(panel, area);
}

#[tracing::instrument(skip_all)]
fn draw_controls(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(area);

    let selected = LanguageFilter::iter()
        .position(|l| l == app.session.language())
        .unwrap_or(0);
    let tabs = Tabs::new(LanguageFilter::iter().map(|l| l.label()))
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title("Language"))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, chunks[0]);

    let (label, style) = if app.session.is_busy() {
        (
            format!("{} Analyzing...", SPINNER[app.ticks % SPINNER.len()]),
            Style::default().fg(Color::Yellow),
        )
    } else if app.session.can_submit() {
        (
            String::from("Detect Mood"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            String::from("Detect Mood"),
            Style::default().fg(Color::DarkGray),
        )
    };
    let button = Paragraph::new(label)
        .block(Block::default().borders(Borders::ALL))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(button, chunks[1]);
}

/// Draw the mood and the filtered song list.
#[tracing::instrument(skip_all)]
fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let Some(result) = app.session.result() else {
        let invitation = Paragraph::new(vec![
            Line::from(""),
            Line::from("Upload a photo and press Enter to detect its mood."),
            Line::from("PicTune will recommend Hindi and English songs to match it."),
        ])
        .block(Block::default().borders(Borders::ALL).title("Recommendations"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        f.render_widget(invitation, area);
        return;
    };

    let songs = app.session.filtered_songs();
    let title = format!(
        "Detected Mood: {} | {} song{}",
        result.mood(),
        songs.len(),
        if songs.len() == 1 { "" } else { "s" }
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));

    if songs.is_empty() {
        let empty = Paragraph::new("No songs found for this language")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        "Title", "Artist", "Language", "Genre", "Tempo", "Energy", "Valence", "Match",
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let rows: Vec<Row> = songs.iter().skip(app.scroll).map(|s| song_row(s)).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Min(16),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}

fn song_row(song: &Song) -> Row<'static> {
    let genre = song.genre().clone().unwrap_or_default();
    let features = match song.audio_features() {
        Some(features) => vec![
            format!("{} BPM", features.tempo_bpm()),
            format!("{}%", features.energy_percent()),
            format!("{}%", features.valence_percent()),
            format!("{}%", features.match_percent()),
        ],
        None => vec![String::new(); 4],
    };

    let mut cells = vec![
        song.title().clone(),
        song.artist().clone(),
        song.language().clone(),
        genre,
    ];
    cells.extend(features);
    Row::new(cells)
}

/// Draw the notice or status message, help text and endpoint.
#[tracing::instrument(skip_all)]
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let message = match app.session.notice_message() {
        Some(notice) => Line::from(Span::styled(
            format!("{} (Esc: Dismiss)", notice),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(app.status_message.as_str()),
    };

    let help_text = match app.mode {
        InputMode::Browse => {
            "o: Choose Photo | Enter: Detect Mood | Tab/1-3: Language | ↑↓: Scroll | Q: Quit"
        }
        InputMode::PathPrompt => "Enter: Select | Esc: Cancel",
    };

    let status = Paragraph::new(vec![
        message,
        Line::from(Span::styled(help_text, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            format!("API: {}", app.endpoint),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}

/// Human readable byte count.
pub(crate) fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let bytes = bytes as f64;
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < KIB * KIB {
        format!("{:.1} KB", bytes / KIB)
    } else {
        format!("{:.1} MB", bytes / (KIB * KIB))
    }
}
