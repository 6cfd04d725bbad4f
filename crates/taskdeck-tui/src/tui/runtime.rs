/*
[INPUT]:  Shared task store, feed client, log buffer, crossterm input
[OUTPUT]: Ratatui-based TUI run loop, rendering, and log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::fmt::MakeWriter;

use taskdeck_feed::{BlogPost, FeedClient};

use crate::store::SharedTaskStore;

use super::app::{AppState, Panel};
use super::events::handle_key_event;
use super::feed::spawn_feed_fetch;
use super::terminal::TerminalGuard;
use super::ui::modal::draw_modal;
use super::ui::*;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

/// Routes tracing output into the Logs panel buffer
#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let chunk = String::from_utf8_lossy(buf);
        self.partial.push_str(&chunk);
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial = self.partial[pos + 1..].to_string();
            let buffer = self.buffer.clone();
            let mut guard = buffer.lock().expect("log buffer lock");
            guard.push_line(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            let buffer = self.buffer.clone();
            let mut guard = buffer.lock().expect("log buffer lock");
            guard.push_line(line);
        }
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

pub(super) enum UiEvent {
    Input(CrosstermEvent),
    FeedLoaded(Vec<BlogPost>),
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Green)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

pub(super) fn draw_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line1 = Line::from(vec![
        Span::styled("[a]", key_style),
        Span::raw(" Add  "),
        Span::styled("[Space/Enter]", key_style),
        Span::raw(" Toggle done  "),
        Span::styled("[d]", key_style),
        Span::raw(" Delete  "),
        Span::styled("[Up/Down]", key_style),
        Span::raw(" Select"),
    ]);
    let line2 = Line::from(vec![
        Span::styled("[b]", key_style),
        Span::raw(" Blogs/Tasks  "),
        Span::styled("[Tab]", key_style),
        Span::raw(" Switch  "),
        Span::styled("[1/2/3]", key_style),
        Span::raw(" Panels  "),
        Span::styled("[q]", key_style),
        Span::raw(" Quit  "),
        Span::raw(format!("Status: {}", app.status_message)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![line1, line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

/// Run the task-manager TUI until quit.
///
/// The store handle is injected by the application root; `feed_client` being
/// `None` skips the startup feed fetch (`--no-feed`).
pub async fn run_tui(
    store: SharedTaskStore,
    feed_client: Option<FeedClient>,
    log_buffer: LogBufferHandle,
) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    let input_tx = event_tx.clone();
    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = input_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    // The fetch lives exactly as long as the view
    let feed_cancel = CancellationToken::new();
    if let Some(client) = feed_client {
        spawn_feed_fetch(client, event_tx.clone(), feed_cancel.clone());
    }
    drop(event_tx);

    let mut app = AppState::new(store, log_buffer);
    app.refresh_tasks();

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key))) => {
                        if handle_key_event(&mut app, key.code) {
                            should_quit = true;
                        }
                    }
                    Some(UiEvent::FeedLoaded(posts)) => app.set_blogs(posts),
                    Some(UiEvent::Input(_)) | None => {}
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;
    }

    feed_cancel.cancel();
    input_shutdown.cancel();
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    draw_tabs(frame, layout[1], app.current_panel);

    match app.current_panel {
        Panel::Tasks => draw_task_list(frame, layout[0], app),
        Panel::Blogs => draw_blog_list(frame, layout[0], app),
        Panel::Logs => draw_logs(frame, layout[0], &app.log_buffer),
    }

    draw_footer(frame, layout[2], app);

    if let Some(active_modal) = app.active_modal.as_ref() {
        let modal = active_modal.to_modal();
        let modal_area = centered_rect(area, 50, 30);
        draw_modal(frame, modal_area, &modal);
    }
}

fn centered_rect(
    area: ratatui::layout::Rect,
    percent_x: u16,
    percent_y: u16,
) -> ratatui::layout::Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
