/*
[INPUT]:  AppState task snapshot and selection state
[OUTPUT]: Task list rendered into Ratatui frame
[POS]:    TUI UI task list rendering
[UPDATE]: When row format or completion styling changes
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::task::Task;
use crate::tui::app::AppState;
use crate::tui::runtime::border_style;

/// One row per task, in store order. Completed tasks render struck through
/// and greyed, mirroring the completed-task treatment of the home screen.
pub(in crate::tui) fn task_lines(tasks: &[Task]) -> Vec<Line<'static>> {
    tasks
        .iter()
        .map(|task| {
            if task.completed {
                Line::from(Span::styled(
                    format!("[x] {}", task.name),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                ))
            } else {
                Line::from(Span::raw(format!("[ ] {}", task.name)))
            }
        })
        .collect()
}

pub(in crate::tui) fn draw_task_list(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &mut AppState,
) {
    let items = if app.tasks.is_empty() {
        vec![ListItem::new("No tasks yet - press [a] to add one")]
    } else {
        task_lines(&app.tasks).into_iter().map(ListItem::new).collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Tasks"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.list_state);
}
