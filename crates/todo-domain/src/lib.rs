pub mod commands;
pub mod task;
pub mod theme;

pub use task::{next_task_id, sort_newest_first, Task, TaskId};
pub use theme::{ColorScheme, Palette, Rgb, Theme, ThemeStore};
