/*
[INPUT]:  Raw task names and the system clock
[OUTPUT]: Task records, validated names, and unique timestamp-derived ids
[POS]:    Data layer - task record and caller-side validation
[UPDATE]: When the task shape or id scheme changes
*/

use std::sync::atomic::{AtomicI64, Ordering};

use thiserror::Error;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

impl Task {
    /// Create a new, not-yet-completed task.
    ///
    /// Callers are expected to pass a unique id and a name already validated
    /// by [`validate_name`]; the store performs no validation of its own.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed: false,
        }
    }
}

/// Task name validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("task name cannot be empty")]
    Empty,
}

/// Validate a raw task name, returning the trimmed name on success.
///
/// The view layer decides how to surface a failure; nothing here touches
/// UI state.
pub fn validate_name(raw: &str) -> Result<String, NameError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    Ok(trimmed.to_string())
}

/// Issues unique, timestamp-derived task ids.
///
/// Ids are epoch milliseconds rendered as strings. Two adds inside the same
/// millisecond would collide, so the generator keeps a monotonic floor and
/// bumps past it.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_issued: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let mut prev = self.last_issued.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self.last_issued.compare_exchange_weak(
                prev,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate.to_string(),
                Err(actual) => prev = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("  Buy milk  ").unwrap(), "Buy milk");
    }

    #[test]
    fn test_validate_name_rejects_empty() {
        assert_eq!(validate_name(""), Err(NameError::Empty));
    }

    #[test]
    fn test_validate_name_rejects_whitespace_only() {
        assert_eq!(validate_name("  "), Err(NameError::Empty));
    }

    #[test]
    fn test_id_generator_unique_within_millisecond() {
        let ids = IdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(a.parse::<i64>().unwrap() < b.parse::<i64>().unwrap());
    }

    #[test]
    fn test_new_task_starts_incomplete() {
        let task = Task::new("1", "Buy milk");
        assert!(!task.completed);
    }
}
