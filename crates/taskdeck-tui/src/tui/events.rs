/*
[INPUT]:  Crossterm key events and modal state
[OUTPUT]: TUI event routing and intent dispatch
[POS]:    TUI key handling
[UPDATE]: When hotkeys or modal submission flows change
*/

use crossterm::event::KeyCode;

use super::app::{AppState, Panel};
use super::ui::modal::ModalAction;

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    if app.active_modal.is_some() {
        return handle_modal_key_event(app, key);
    }

    match key {
        KeyCode::Char('q') => true,
        KeyCode::Char('a') => {
            app.open_add_task();
            false
        }
        KeyCode::Char('d') => {
            if app.current_panel == Panel::Tasks {
                app.delete_selected_task();
            }
            false
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if app.current_panel == Panel::Tasks {
                app.toggle_selected_task();
            }
            false
        }
        KeyCode::Char('b') => {
            app.toggle_blog_panel();
            false
        }
        KeyCode::Tab => {
            app.next_panel();
            false
        }
        KeyCode::Char('1') => {
            app.set_panel(Panel::Tasks);
            false
        }
        KeyCode::Char('2') => {
            app.set_panel(Panel::Blogs);
            false
        }
        KeyCode::Char('3') => {
            app.set_panel(Panel::Logs);
            false
        }
        KeyCode::Up => {
            app.move_selection(-1);
            false
        }
        KeyCode::Down => {
            app.move_selection(1);
            false
        }
        _ => false,
    }
}

fn handle_modal_key_event(app: &mut AppState, key: KeyCode) -> bool {
    let (action, name) = match app.active_modal_mut() {
        Some(modal) => {
            let action = modal.handle_key(key);
            (action, modal.name().to_string())
        }
        None => return false,
    };

    match action {
        ModalAction::Cancel => app.close_modal(),
        ModalAction::Submit => match app.submit_add_task(&name) {
            Ok(()) => app.close_modal(),
            // Modal stays open so the name can be corrected
            Err(err) => app.status_message = err.to_string(),
        },
        ModalAction::None => {}
    }

    false
}
