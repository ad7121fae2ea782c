mod action;

pub use action::handle_key_event;
pub use action::spawn_input_thread;
use ratatui::crossterm::event::KeyModifiers;

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

const SCROLL_MID: usize = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    // Audio Card
    TogglePause,

    // Changing Screens
    SeeMatch,
    Continue,
    CloseProfile,
    FindNewMatch,

    // Profile Body
    Scroll(Director),

    QUIT,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Director {
    Up(usize),
    Down(usize),
    Top,
    Bottom,
}
