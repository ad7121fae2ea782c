use super::{
    layout::stage,
    widgets::{IntroScreen, MatchingScreen, ProfileScreen},
};
use crate::ui_state::{Route, UiState};
use ratatui::{
    Frame,
    style::Stylize,
    widgets::{Block, StatefulWidget, Widget},
};

pub fn render(f: &mut Frame, state: &mut UiState) {
    Block::new()
        .bg(state.theme.bg)
        .render(f.area(), f.buffer_mut());

    let stage = stage(f.area());

    match state.current_route() {
        Route::Matching => MatchingScreen.render(stage, f.buffer_mut(), state),
        Route::MentorIntro => IntroScreen.render(stage, f.buffer_mut(), state),
        Route::MentorProfile => ProfileScreen.render(stage, f.buffer_mut(), state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    // Sizing mistakes panic inside the buffer, so draw each screen
    // once for real.
    #[test]
    fn test_every_screen_draws_without_panicking() {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut ui = UiState::new();

        terminal.draw(|f| render(f, &mut ui)).unwrap();

        ui.navigate(Route::MentorIntro);
        terminal.draw(|f| render(f, &mut ui)).unwrap();

        ui.navigate(Route::MentorProfile);
        terminal.draw(|f| render(f, &mut ui)).unwrap();
    }

    #[test]
    fn test_profile_survives_tiny_windows() {
        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut ui = UiState::new();
        ui.navigate(Route::MentorProfile);

        terminal.draw(|f| render(f, &mut ui)).unwrap();
    }
}
