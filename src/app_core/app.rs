use crate::{key_handler, tui, ui_state::UiState};
use anyhow::Result;
use log::info;
use std::time::Instant;

pub struct Attune {
    pub(crate) ui: UiState,
}

impl Attune {
    pub fn new() -> Self {
        Attune { ui: UiState::new() }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        info!("terminal ready, starting on the matching screen");
        let key_rx = key_handler::spawn_input_thread();

        // MAIN ROUTINE
        loop {
            self.select_shortcut(&key_rx);
            self.ui.poll_auto_advance(Instant::now());

            terminal.draw(|f| tui::render(f, &mut self.ui))?;

            if self.ui.quit_requested() {
                break;
            }
        }

        ratatui::restore();

        Ok(())
    }
}
