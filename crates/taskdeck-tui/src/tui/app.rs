/*
[INPUT]:  Injected task store handle, log buffer, feed results
[OUTPUT]: AppState helpers for TUI rendering and intent dispatch
[POS]:    TUI app state and selection management
[UPDATE]: When panels, selection rules, or intent flows change
*/

use ratatui::widgets::ListState;
use taskdeck_feed::BlogPost;

use crate::store::{SharedTaskStore, TaskIntent};
use crate::task::{self, IdGenerator, NameError, Task};
use crate::tui::LogBufferHandle;
use crate::tui::ui::modal::AddTaskModal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Panel {
    Tasks,
    Blogs,
    Logs,
}

pub(super) struct AppState {
    store: SharedTaskStore,
    ids: IdGenerator,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) tasks: Vec<Task>,
    pub(super) list_state: ListState,
    pub(super) blogs: Vec<BlogPost>,
    pub(super) blog_state: ListState,
    pub(super) current_panel: Panel,
    pub(super) status_message: String,
    pub(super) active_modal: Option<AddTaskModal>,
}

impl AppState {
    pub(super) fn new(store: SharedTaskStore, log_buffer: LogBufferHandle) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            store,
            ids: IdGenerator::new(),
            log_buffer,
            tasks: Vec::new(),
            list_state,
            blogs: Vec::new(),
            blog_state: ListState::default(),
            current_panel: Panel::Tasks,
            status_message: "Ready".to_string(),
            active_modal: None,
        }
    }

    /// Re-derive the render snapshot from the store and clamp the selection
    pub(super) fn refresh_tasks(&mut self) {
        let tasks = {
            let store = self.store.lock().expect("task store lock");
            store.tasks().to_vec()
        };
        self.tasks = tasks;
        if self.tasks.is_empty() {
            self.list_state.select(None);
        } else if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        } else if let Some(selected) = self.list_state.selected() {
            if selected >= self.tasks.len() {
                self.list_state.select(Some(self.tasks.len().saturating_sub(1)));
            }
        }
    }

    pub(super) fn open_add_task(&mut self) {
        self.active_modal = Some(AddTaskModal::new());
    }

    pub(super) fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub(super) fn active_modal_mut(&mut self) -> Option<&mut AddTaskModal> {
        self.active_modal.as_mut()
    }

    pub(super) fn selected_task(&self) -> Option<&Task> {
        let idx = self.list_state.selected()?;
        self.tasks.get(idx)
    }

    /// Validate the typed name and dispatch an add intent.
    ///
    /// Returns the validation failure to the caller, which decides how to
    /// surface it; nothing is dispatched and the list is unchanged on error.
    pub(super) fn submit_add_task(&mut self, raw_name: &str) -> Result<(), NameError> {
        let name = task::validate_name(raw_name)?;
        let id = self.ids.next_id();
        {
            let mut store = self.store.lock().expect("task store lock");
            store.dispatch(TaskIntent::Add(Task::new(id, name.clone())));
        }
        self.refresh_tasks();
        self.status_message = format!("task added: {name}");
        Ok(())
    }

    pub(super) fn toggle_selected_task(&mut self) {
        let Some(task) = self.selected_task() else {
            self.status_message = "no task selected".to_string();
            return;
        };
        let id = task.id.clone();
        {
            let mut store = self.store.lock().expect("task store lock");
            store.dispatch(TaskIntent::Toggle(id));
        }
        self.refresh_tasks();
    }

    pub(super) fn delete_selected_task(&mut self) {
        let Some(task) = self.selected_task() else {
            self.status_message = "no task selected".to_string();
            return;
        };
        let (id, name) = (task.id.clone(), task.name.clone());
        {
            let mut store = self.store.lock().expect("task store lock");
            store.dispatch(TaskIntent::Delete(id));
        }
        self.refresh_tasks();
        self.status_message = format!("task deleted: {name}");
    }

    /// Store the one-shot feed result; rendering stays independent of when
    /// (or whether) this arrives.
    pub(super) fn set_blogs(&mut self, posts: Vec<BlogPost>) {
        if !posts.is_empty() && self.blog_state.selected().is_none() {
            self.blog_state.select(Some(0));
        }
        self.blogs = posts;
    }

    /// Toggle between the task list and the feed panel
    pub(super) fn toggle_blog_panel(&mut self) {
        self.current_panel = match self.current_panel {
            Panel::Blogs => Panel::Tasks,
            Panel::Tasks | Panel::Logs => Panel::Blogs,
        };
    }

    pub(super) fn next_panel(&mut self) {
        self.current_panel = match self.current_panel {
            Panel::Tasks => Panel::Blogs,
            Panel::Blogs => Panel::Logs,
            Panel::Logs => Panel::Tasks,
        };
    }

    pub(super) fn set_panel(&mut self, panel: Panel) {
        self.current_panel = panel;
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let (state, len) = match self.current_panel {
            Panel::Blogs => (&mut self.blog_state, self.blogs.len()),
            Panel::Tasks | Panel::Logs => (&mut self.list_state, self.tasks.len()),
        };
        if len == 0 {
            state.select(None);
            return;
        }
        let current = state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        state.select(Some(next));
    }
}
