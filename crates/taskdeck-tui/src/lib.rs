/*
[INPUT]:  Public API exports for taskdeck-tui crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod store;
pub mod task;
pub mod tui;

// Re-export main types for convenience
pub use store::{SharedTaskStore, TaskIntent, TaskStore};
pub use task::{IdGenerator, NameError, Task};
