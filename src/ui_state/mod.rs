pub mod animation;
mod screen;
mod theme;
mod ui_state;

pub use screen::{Route, Router};
pub use theme::Theme;
pub(crate) use theme::blend;
pub use ui_state::UiState;
