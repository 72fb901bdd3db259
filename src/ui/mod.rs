pub mod backend;
pub mod input;
pub mod rat_compat;
pub mod theme;
pub mod widgets;

pub use backend::RatatuiBackend;
pub use input::{AppEvent, InputEvent, KeyCode};
