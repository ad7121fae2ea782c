use super::doodle::{Doodle, DoodleKind};
use crate::ui_state::{
    UiState,
    animation::{INTRO_BUTTON, INTRO_DOODLE, INTRO_SUBTITLE, INTRO_TITLE},
    blend,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use std::time::Instant;

pub struct IntroScreen;
impl StatefulWidget for IntroScreen {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let now = Instant::now();
        let theme = &state.theme;

        let [_, title, subtitle, _, doodle, _, button, _] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(8),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(area);

        // The title springs down into its resting row as it fades in
        let v = state.entrance.value(INTRO_TITLE, now);
        if title.height > 0 {
            let drop = ((1.0 - v.min(1.0)) * 2.0).round() as u16;
            let title_row = Rect {
                y: title.y + drop.min(title.height - 1),
                height: 1,
                ..title
            };

            Paragraph::new(format!("Meet {}", state.mentor.name))
                .fg(blend(theme.bg, theme.text, v.min(1.0)))
                .bold()
                .centered()
                .render(title_row, buf);
        }

        let v = state.entrance.value(INTRO_SUBTITLE, now).min(1.0);
        Paragraph::new(state.mentor.tagline)
            .fg(blend(theme.bg, theme.text_soft, v))
            .centered()
            .render(subtitle, buf);

        let v = state.entrance.value(INTRO_DOODLE, now).min(1.0);
        Doodle {
            kind: DoodleKind::Burst,
            color: blend(theme.bg, theme.doodle_green, v),
        }
        .render(center_rect(doodle, 28), buf);

        let v = state.entrance.value(INTRO_BUTTON, now).min(1.0);
        Paragraph::new(Line::from(
            Span::from("  See your match →  ")
                .fg(theme.bg)
                .bg(blend(theme.bg, theme.accent, v))
                .bold(),
        ))
        .centered()
        .render(button, buf);
    }
}

fn center_rect(area: Rect, width: u16) -> Rect {
    let w = width.min(area.width);
    Rect::new(area.x + (area.width - w) / 2, area.y, w, area.height)
}
