use crate::{
    app_core::Attune,
    key_handler::*,
    ui_state::{Route, UiState},
};
use crossbeam_channel::{Receiver, unbounded};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::thread;

use KeyCode::*;

pub fn handle_key_event(key_event: KeyEvent, state: &UiState) -> Option<Action> {
    if let Some(action) = global_commands(&key_event) {
        return Some(action);
    }

    match state.current_route() {
        // The matching screen moves along on its own
        Route::Matching => None,
        Route::MentorIntro => handle_intro(&key_event),
        Route::MentorProfile => handle_profile(&key_event),
    }
}

fn global_commands(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) => Some(Action::QUIT),
        (X, Char('q')) => Some(Action::QUIT),
        _ => None,
    }
}

fn handle_intro(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Enter) | (X, Char(' ')) => Some(Action::SeeMatch),
        _ => None,
    }
}

fn handle_profile(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Char(' ')) => Some(Action::TogglePause),
        (X, Enter) => Some(Action::Continue),
        (X, Esc) | (X, Char('x')) => Some(Action::CloseProfile),
        (X, Char('f')) => Some(Action::FindNewMatch),

        // SCROLLING
        (X, Char('j')) | (X, Down) => Some(Action::Scroll(Director::Down(1))),
        (X, Char('k')) | (X, Up) => Some(Action::Scroll(Director::Up(1))),
        (X, Char('d')) => Some(Action::Scroll(Director::Down(SCROLL_MID))),
        (X, Char('u')) => Some(Action::Scroll(Director::Up(SCROLL_MID))),
        (X, Char('g')) => Some(Action::Scroll(Director::Top)),
        (S, Char('G')) => Some(Action::Scroll(Director::Bottom)),

        _ => None,
    }
}

/// Blocking reader on its own thread so the main loop can park in
/// `select!` instead of polling the terminal.
pub fn spawn_input_thread() -> Receiver<KeyEvent> {
    let (key_tx, key_rx) = unbounded();

    thread::spawn(move || {
        while let Ok(event) = event::read() {
            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press && key_tx.send(key).is_err() {
                    break;
                }
            }
        }
    });

    key_rx
}

impl Attune {
    #[rustfmt::skip]
    pub(crate) fn handle_action(&mut self, action: Action) {
        match action {
            // Audio Card
            Action::TogglePause  => self.ui.toggle_playback(),

            // Changing Screens
            Action::SeeMatch     => self.ui.navigate(Route::MentorProfile),
            Action::Continue     => self.ui.navigate(Route::Matching),
            Action::CloseProfile => self.ui.navigate(Route::Matching),
            Action::FindNewMatch => self.ui.navigate(Route::Matching),

            // Profile Body
            Action::Scroll(s)    => self.ui.scroll(s),

            Action::QUIT         => self.ui.request_quit(),
        }
    }
}
