pub mod app;
pub mod components;
pub mod dialog;
pub mod events;
pub mod router;
pub mod selection;
pub mod theme;
pub mod ui;

pub use app::{App, AppMode, EditScreen};
pub use router::{Route, Router};
