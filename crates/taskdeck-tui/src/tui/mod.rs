/*
[INPUT]:  Shared task store, feed client, and log buffer
[OUTPUT]: Ratatui-based TUI for tasks, blog feed, and logs
[POS]:    TUI module root
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod feed;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui};
