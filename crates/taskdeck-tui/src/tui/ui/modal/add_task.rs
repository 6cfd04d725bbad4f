/*
[INPUT]:  Task name entry and key events
[OUTPUT]: Add-task modal state and submit/cancel actions
[POS]:    TUI UI modal for creating a task
[UPDATE]: When the add-task form changes
*/

use crossterm::event::KeyCode;

use super::{Field, Modal, ModalAction, handle_modal_key};

/// The "input box + Add Task button" of the home screen, rendered as a modal.
pub(in crate::tui) struct AddTaskModal {
    name: String,
    focus_index: usize,
}

impl AddTaskModal {
    pub(in crate::tui) fn new() -> Self {
        Self {
            name: String::new(),
            focus_index: 0,
        }
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        Modal {
            title: String::from("Add Task"),
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("Task name"),
                    value: self.name.clone(),
                },
                Field::Button {
                    label: String::from("Add"),
                    action: ModalAction::Submit,
                },
                Field::Button {
                    label: String::from("Cancel"),
                    action: ModalAction::Cancel,
                },
            ],
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        let mut modal = self.to_modal();
        let action = handle_modal_key(&mut modal, key);
        self.apply_modal_state(&modal);
        action
    }

    /// Raw task name as typed; validation happens at submit time
    pub(in crate::tui) fn name(&self) -> &str {
        self.name.as_str()
    }

    fn apply_modal_state(&mut self, modal: &Modal) {
        self.focus_index = modal.focus_index;
        if let Some(Field::TextInput { value, .. }) = modal.fields.first() {
            self.name = value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_builds_name() {
        let mut modal = AddTaskModal::new();
        for ch in "Buy milk".chars() {
            assert_eq!(modal.handle_key(KeyCode::Char(ch)), ModalAction::None);
        }
        assert_eq!(modal.name(), "Buy milk");
    }

    #[test]
    fn test_enter_in_name_field_submits() {
        let mut modal = AddTaskModal::new();
        modal.handle_key(KeyCode::Char('x'));
        assert_eq!(modal.handle_key(KeyCode::Enter), ModalAction::Submit);
        assert_eq!(modal.name(), "x");
    }

    #[test]
    fn test_escape_cancels() {
        let mut modal = AddTaskModal::new();
        assert_eq!(modal.handle_key(KeyCode::Esc), ModalAction::Cancel);
    }
}
