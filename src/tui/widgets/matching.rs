use super::doodle::{Doodle, DoodleKind};
use crate::ui_state::{
    UiState,
    animation::{MATCH_DOODLE, MATCH_HEADING, MATCH_TAG_FIRST, dot_bounce},
    blend,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span, Text},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use std::time::Instant;

const MATCHING_TAGS: [&str; 5] = [
    "I love music & art",
    "I struggle with anxiety",
    "Night owl life",
    "Family can be complicated",
    "I find comfort in nature",
];

const DOT_COUNT: usize = 3;

pub struct MatchingScreen;
impl StatefulWidget for MatchingScreen {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let now = Instant::now();
        let theme = &state.theme;

        let [_, heading, _, tags, _, dots, doodle] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(5),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Fill(1),
            ])
            .areas(area);

        let v = state.entrance.value(MATCH_HEADING, now).min(1.0);
        Paragraph::new(Text::from_iter([
            Line::from("Just a moment while"),
            Line::from("we find your match..."),
        ]))
        .fg(blend(theme.bg, theme.text, v))
        .bold()
        .centered()
        .render(heading, buf);

        let tag_lines = MATCHING_TAGS.iter().enumerate().map(|(i, tag)| {
            let v = state.entrance.value(MATCH_TAG_FIRST + i, now).min(1.0);
            Line::from(
                Span::from(format!("  {tag}  "))
                    .fg(blend(theme.bg, theme.text_soft, v))
                    .bg(blend(theme.bg, theme.tag_bg, v)),
            )
            .centered()
        });
        Paragraph::new(Text::from_iter(tag_lines)).render(tags, buf);

        render_dots(dots, buf, state, now);

        let v = state.entrance.value(MATCH_DOODLE, now).min(1.0);
        Doodle {
            kind: DoodleKind::Squiggle,
            color: blend(theme.bg, theme.doodle_blue, v),
        }
        .render(corner_rect(doodle), buf);
    }
}

fn render_dots(area: Rect, buf: &mut Buffer, state: &UiState, now: Instant) {
    if area.height == 0 || area.width < 12 {
        return;
    }

    let origin = state.entrance.origin();
    let mid = area.x + area.width / 2;

    for i in 0..DOT_COUNT {
        let bounce = dot_bounce(i, origin, now);
        let rise = (bounce * (area.height - 1) as f32).round() as u16;

        let x = mid - 4 + (i as u16 * 4);
        let y = area.bottom() - 1 - rise;

        Text::from("●")
            .fg(state.theme.accent)
            .render(Rect::new(x, y, 1, 1), buf);
    }
}

// Squiggle sits in the bottom-right corner, like the mockup margin art
fn corner_rect(area: Rect) -> Rect {
    let w = area.width.min(24);
    let h = area.height.min(6);
    Rect::new(area.right() - w, area.bottom() - h, w, h)
}
