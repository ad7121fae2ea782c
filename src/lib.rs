pub mod app_core;
pub mod domain;
pub mod key_handler;
pub mod player;
pub mod tui;
pub mod ui_state;

pub use player::PlaybackSim;
pub use ui_state::UiState;

// ~30fps
pub const REFRESH_RATE: u64 = 33;
