/*
[INPUT]:  TUI app state and rendering snapshots for UI components
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding or renaming panel renderers
*/

mod blogs;
mod layout;
mod logs;
mod task_list;

pub mod modal;

pub(in crate::tui) use blogs::draw_blog_list;
pub(in crate::tui) use layout::draw_tabs;
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use task_list::draw_task_list;
