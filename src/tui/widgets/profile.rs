use super::audio_player::AudioCard;
use crate::{
    domain::MentorProfile,
    tui::layout::ProfileLayout,
    ui_state::{Theme, UiState, animation::PROFILE_ENTER, blend},
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Stylize},
    text::{Line, Span, Text},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use std::time::Instant;

pub struct ProfileScreen;
impl StatefulWidget for ProfileScreen {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let now = Instant::now();
        let enter = state.entrance.value(PROFILE_ENTER, now).min(1.0);

        // The whole card slides up from four rows down as it fades in
        let dy = ((1.0 - enter) * 4.0).round() as u16;
        let area = Rect {
            y: area.y + dy,
            height: area.height.saturating_sub(dy),
            ..area
        };

        let theme = state.theme.clone();
        let fade = |c: Color| blend(theme.bg, c, enter);
        let layout = ProfileLayout::new(area);

        render_header(layout.header, buf, state.mentor, &theme, &fade);
        render_body(layout.body, buf, state, &theme, &fade);
        render_footer(layout.footer, buf, &theme, &fade);

        AudioCard.render(layout.audio, buf, state);
    }
}

fn render_header(
    area: Rect,
    buf: &mut Buffer,
    mentor: &MentorProfile,
    theme: &Theme,
    fade: &impl Fn(Color) -> Color,
) {
    Paragraph::new(Text::from_iter([
        Line::from(Span::from("✕ esc").fg(fade(theme.text_soft))).right_aligned(),
        Line::default(),
        Line::from_iter([
            Span::from("󰀉 ").fg(fade(theme.accent)),
            Span::from(mentor.name).fg(fade(theme.text)).bold(),
        ])
        .centered(),
        Line::from(mentor.tagline)
            .fg(fade(theme.text_soft))
            .centered(),
    ]))
    .render(area, buf);
}

fn render_body(
    area: Rect,
    buf: &mut Buffer,
    state: &mut UiState,
    theme: &Theme,
    fade: &impl Fn(Color) -> Color,
) {
    let width = area.width.saturating_sub(2) as usize;
    if width < 8 {
        return;
    }

    let mentor = state.mentor;
    let heading = |text: &'static str| Line::from(Span::from(text).fg(fade(theme.text)).bold());
    let mut lines: Vec<Line> = Vec::new();

    lines.push(heading("We both..."));
    lines.push(Line::default());
    for t in &mentor.shared_traits {
        for (i, piece) in wrap(t.label, width.saturating_sub(3)).into_iter().enumerate() {
            let lead = match i == 0 {
                true => format!("{} ", t.icon),
                false => "  ".to_string(),
            };
            lines.push(Line::from_iter([
                Span::from(lead).fg(fade(theme.accent)),
                Span::from(piece).fg(fade(theme.text_soft)),
            ]));
        }
    }

    lines.push(Line::default());
    lines.push(heading("What I'm working on..."));
    lines.push(Line::default());
    push_wrapped(&mut lines, mentor.working_on, width, fade(theme.text_soft));

    lines.push(Line::default());
    lines.push(heading("Things we can talk about..."));
    lines.push(Line::default());
    let cell = (width / 2).saturating_sub(3);
    for pair in mentor.topics.chunks(2) {
        let spans = pair.iter().flat_map(|t| {
            [
                Span::from(format!("{} ", t.icon)).fg(fade(theme.accent)),
                Span::from(format!("{:<cell$}", t.label)).fg(fade(theme.text_soft)),
            ]
        });
        lines.push(Line::from_iter(spans));
    }

    lines.push(Line::default());
    lines.push(heading("Advice to my younger self"));
    lines.push(Line::default());
    for piece in wrap(mentor.advice, width.saturating_sub(2)) {
        lines.push(Line::from_iter([
            Span::from("▎ ").fg(fade(theme.accent)),
            Span::from(piece).fg(fade(theme.text)).italic(),
        ]));
    }

    lines.push(Line::default());
    lines.push(heading("What I'm listening to..."));
    lines.push(Line::default());
    let card = width.min(40);
    lines.push(card_line(
        format!(" 󰝚  {}", mentor.listening.song),
        fade(theme.listen_accent),
        fade(theme.listen_bg),
        card,
    ));
    lines.push(card_line(
        format!("     {}", mentor.listening.artist),
        fade(theme.text_soft),
        fade(theme.listen_bg),
        card,
    ));

    lines.push(Line::default());
    lines.push(heading("What I'm up to..."));
    lines.push(Line::default());
    push_wrapped(&mut lines, mentor.whats_up, width, fade(theme.text_soft));

    lines.push(Line::default());
    lines.push(heading("My weekends look like"));
    lines.push(Line::default());
    for _ in 0..4 {
        lines.push(Line::from(
            Span::from("▒".repeat(width.min(40))).fg(fade(theme.border)),
        ));
    }
    push_wrapped(&mut lines, mentor.weekend, width, fade(theme.text_soft));

    lines.push(Line::default());
    lines.push(
        Line::from(Span::from("Not the right match?").fg(fade(theme.text_soft))).centered(),
    );
    lines.push(
        Line::from(
            Span::from(" Find new match (f) ")
                .fg(fade(theme.text))
                .bg(fade(theme.tag_bg)),
        )
        .centered(),
    );

    // The body owns the scroll bounds; report them back before drawing
    let max_scroll = lines.len().saturating_sub(area.height as usize);
    state.set_profile_scroll_bounds(max_scroll);

    Paragraph::new(Text::from_iter(lines))
        .scroll((state.profile_scroll as u16, 0))
        .render(area, buf);
}

fn render_footer(area: Rect, buf: &mut Buffer, theme: &Theme, fade: &impl Fn(Color) -> Color) {
    Paragraph::new(Text::from_iter([
        Line::default(),
        Line::from(
            Span::from("          Continue ↵          ")
                .fg(theme.bg)
                .bg(fade(theme.accent))
                .bold(),
        )
        .centered(),
    ]))
    .render(area, buf);
}

fn card_line(text: String, fg: Color, bg: Color, width: usize) -> Line<'static> {
    Line::from(Span::from(format!("{text:<width$}")).fg(fg).bg(bg))
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, fg: Color) {
    for piece in wrap(text, width) {
        lines.push(Line::from(Span::from(piece).fg(fg)));
    }
}

/// Greedy word wrap. A word longer than the width gets a row of its
/// own rather than being split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + word.chars().count() + 1 > width {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let rows = wrap("learning how to ask for help when I need it", 16);

        assert!(rows.iter().all(|r| r.chars().count() <= 16));
        assert_eq!(rows.concat().replace(' ', ""), "learninghowtoaskforhelpwhenIneedit");
    }

    #[test]
    fn test_wrap_keeps_long_words_whole() {
        let rows = wrap("extraordinarily so", 6);
        assert_eq!(rows[0], "extraordinarily");
        assert_eq!(rows[1], "so");
    }

    #[test]
    fn test_wrap_of_empty_text_is_empty() {
        assert!(wrap("", 10).is_empty());
    }
}
