use crossbeam_channel::{Receiver, select};
use ratatui::crossterm::event::KeyEvent;
use std::time::Duration;

use crate::{REFRESH_RATE, app_core::Attune, key_handler};

impl Attune {
    /// Park until the next tick or key press, or fall through at the
    /// refresh rate so animations keep moving.
    #[inline]
    pub(crate) fn select_shortcut(&mut self, key_rx: &Receiver<KeyEvent>) {
        select! {
            recv(self.ui.tick_receiver().unwrap_or(&never())) -> tick => {
                if let Ok(tick) = tick {
                    self.ui.handle_tick(tick);
                }
            }

            recv(key_rx) -> key => {
                if let Ok(key) = key {
                    if let Some(action) = key_handler::handle_key_event(key, &self.ui) {
                        self.handle_action(action);
                    }
                }
            }

            default(Duration::from_millis(REFRESH_RATE)) => {}
        }
    }
}

// No player state mounted means no tick channel; a channel that never
// delivers keeps the select arm legal either way.
fn never<T>() -> Receiver<T> {
    crossbeam_channel::never()
}
