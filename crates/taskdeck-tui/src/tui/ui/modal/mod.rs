/*
[INPUT]:  Modal state, fields, and key events
[OUTPUT]: Modal rendering output and modal action results
[POS]:    TUI UI modal module root
[UPDATE]: When modal fields or key handling change
*/

mod add_task;

pub(in crate::tui) use add_task::AddTaskModal;

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub(in crate::tui) struct Modal {
    pub(super) title: String,
    pub(super) focus_index: usize,
    pub(super) fields: Vec<Field>,
}

pub(in crate::tui) enum Field {
    TextInput {
        label: String,
        value: String,
    },
    Button {
        label: String,
        action: ModalAction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui) enum ModalAction {
    Submit,
    Cancel,
    None,
}

pub(in crate::tui) fn draw_modal(frame: &mut ratatui::Frame, area: Rect, modal: &Modal) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal.title.as_str());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = modal
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let content = match field {
                Field::TextInput { label, value } => format!("{label}: {value}"),
                Field::Button { label, .. } => format!("[{label}]"),
            };
            let style = if index == modal.focus_index {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(Span::styled(content, style))
        })
        .collect();

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

pub(in crate::tui) fn handle_modal_key(modal: &mut Modal, key: KeyCode) -> ModalAction {
    match key {
        KeyCode::Esc => ModalAction::Cancel,
        KeyCode::Tab => {
            if !modal.fields.is_empty() {
                modal.focus_index = (modal.focus_index + 1) % modal.fields.len();
            }
            ModalAction::None
        }
        KeyCode::Backspace => {
            if let Some(Field::TextInput { value, .. }) = modal.fields.get_mut(modal.focus_index) {
                value.pop();
            }
            ModalAction::None
        }
        KeyCode::Char(ch) => {
            if let Some(Field::TextInput { value, .. }) = modal.fields.get_mut(modal.focus_index) {
                value.push(ch);
            }
            ModalAction::None
        }
        KeyCode::Enter => match modal.fields.get(modal.focus_index) {
            Some(Field::Button { action, .. }) => *action,
            // Enter inside a text field acts as the submit button
            Some(Field::TextInput { .. }) => ModalAction::Submit,
            None => ModalAction::None,
        },
        _ => ModalAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_modal() -> Modal {
        Modal {
            title: "Sample".to_string(),
            focus_index: 0,
            fields: vec![
                Field::TextInput {
                    label: "Name".to_string(),
                    value: String::new(),
                },
                Field::Button {
                    label: "Ok".to_string(),
                    action: ModalAction::Submit,
                },
                Field::Button {
                    label: "Cancel".to_string(),
                    action: ModalAction::Cancel,
                },
            ],
        }
    }

    #[test]
    fn test_chars_edit_focused_text_input() {
        let mut modal = sample_modal();
        assert_eq!(handle_modal_key(&mut modal, KeyCode::Char('h')), ModalAction::None);
        assert_eq!(handle_modal_key(&mut modal, KeyCode::Char('i')), ModalAction::None);
        assert_eq!(handle_modal_key(&mut modal, KeyCode::Backspace), ModalAction::None);
        match &modal.fields[0] {
            Field::TextInput { value, .. } => assert_eq!(value, "h"),
            _ => panic!("expected text input"),
        }
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut modal = sample_modal();
        handle_modal_key(&mut modal, KeyCode::Tab);
        assert_eq!(modal.focus_index, 1);
        handle_modal_key(&mut modal, KeyCode::Tab);
        handle_modal_key(&mut modal, KeyCode::Tab);
        assert_eq!(modal.focus_index, 0);
    }

    #[test]
    fn test_enter_on_text_input_submits() {
        let mut modal = sample_modal();
        assert_eq!(handle_modal_key(&mut modal, KeyCode::Enter), ModalAction::Submit);
    }

    #[test]
    fn test_enter_on_button_returns_its_action() {
        let mut modal = sample_modal();
        modal.focus_index = 2;
        assert_eq!(handle_modal_key(&mut modal, KeyCode::Enter), ModalAction::Cancel);
    }

    #[test]
    fn test_esc_cancels() {
        let mut modal = sample_modal();
        assert_eq!(handle_modal_key(&mut modal, KeyCode::Esc), ModalAction::Cancel);
    }
}
