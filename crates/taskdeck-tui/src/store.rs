/*
[INPUT]:  Task records and task intents from the view layer
[OUTPUT]: Canonical ordered task list after each state transition
[POS]:    State layer - in-memory task store
[UPDATE]: When adding new intents or changing transition semantics
*/

use std::sync::{Arc, Mutex};

use crate::task::Task;

/// Handle used to inject the process-wide store into the view.
///
/// The store is created by the application root and passed down; it is never
/// an ambient singleton. All mutation happens on the event-loop task, so a
/// plain std mutex is enough.
pub type SharedTaskStore = Arc<Mutex<TaskStore>>;

/// A state-change intent submitted to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIntent {
    Add(Task),
    Delete(String),
    Toggle(String),
}

/// Canonical ordered list of tasks.
///
/// Holds insertion order (newest appended). Every operation is a synchronous,
/// infallible transition: missing-id delete/toggle are silent no-ops, and
/// validation is the caller's job before an `Add` is dispatched.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current task list in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Route an intent to the matching transition
    pub fn dispatch(&mut self, intent: TaskIntent) {
        match intent {
            TaskIntent::Add(task) => self.add_task(task),
            TaskIntent::Delete(id) => self.delete_task(&id),
            TaskIntent::Toggle(id) => self.toggle_task_completion(&id),
        }
    }

    /// Append a fully-formed task record to the end of the list
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove the record with the given id; no-op if absent
    pub fn delete_task(&mut self, id: &str) {
        self.tasks.retain(|task| task.id != id);
    }

    /// Flip the `completed` flag on the matching record; no-op if absent
    pub fn toggle_task_completion(&mut self, id: &str) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.completed = !task.completed;
        }
    }
}

/// Create a shared store handle for injection into the view
pub fn shared_store() -> SharedTaskStore {
    Arc::new(Mutex::new(TaskStore::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, name: &str) -> Task {
        Task::new(id, name)
    }

    #[test]
    fn test_add_tasks_preserves_call_order() {
        let mut store = TaskStore::new();
        store.add_task(task("1", "one"));
        store.add_task(task("2", "two"));
        store.add_task(task("3", "three"));

        assert_eq!(store.len(), 3);
        let names: Vec<_> = store.tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_delete_removes_only_matching_record() {
        let mut store = TaskStore::new();
        store.add_task(task("1", "one"));
        store.add_task(task("2", "two"));
        store.add_task(task("3", "three"));

        store.delete_task("2");

        let ids: Vec<_> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = TaskStore::new();
        store.add_task(task("1", "one"));

        store.delete_task("missing");

        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].id, "1");
    }

    #[test]
    fn test_toggle_flips_only_targeted_record() {
        let mut store = TaskStore::new();
        store.add_task(task("1", "one"));
        store.add_task(task("2", "two"));

        store.toggle_task_completion("2");

        assert!(!store.tasks()[0].completed);
        assert!(store.tasks()[1].completed);
    }

    #[test]
    fn test_toggle_twice_is_idempotent() {
        let mut store = TaskStore::new();
        store.add_task(task("1", "one"));

        store.toggle_task_completion("1");
        store.toggle_task_completion("1");

        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let mut store = TaskStore::new();
        store.add_task(task("1", "one"));

        store.toggle_task_completion("missing");

        assert!(!store.tasks()[0].completed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_dispatch_routes_intents() {
        let mut store = TaskStore::new();
        store.dispatch(TaskIntent::Add(task("1", "one")));
        store.dispatch(TaskIntent::Toggle("1".to_string()));
        assert!(store.tasks()[0].completed);

        store.dispatch(TaskIntent::Delete("1".to_string()));
        assert!(store.is_empty());
    }
}
