use super::{PAUSE_ICON, PLAY_ICON};
use crate::{
    player::PlayerState,
    ui_state::{Theme, UiState},
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span, Text},
    widgets::{
        Block, BorderType, Padding, Paragraph, StatefulWidget, Widget,
        canvas::{Canvas, Circle, Rectangle},
    },
};
use std::time::Instant;

const WAVEFORM_BARS: usize = 28;
const BAR_WIDGET_HEIGHT: f64 = 50.0;

// Fixed silhouette; the clip is simulated, so there is nothing to
// sample these from.
#[rustfmt::skip]
const BAR_HEIGHTS: [f64; WAVEFORM_BARS] = [
    0.30, 0.50, 0.80, 0.60, 0.90, 0.70, 0.40, 0.85, 0.60, 0.75,
    0.50, 0.90, 0.65, 0.40, 0.70, 0.55, 0.80, 0.45, 0.90, 0.60,
    0.35, 0.70, 0.50, 0.85, 0.65, 0.40, 0.75, 0.50,
];

pub struct AudioCard;
impl StatefulWidget for AudioCard {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let Some(player) = &state.player else {
            return;
        };
        let theme = &state.theme;

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .fg(theme.border);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 4 || inner.width < 20 {
            return;
        }

        let [title_row, wave_row] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Fill(1)])
            .areas(inner);

        Paragraph::new(Line::from_iter([
            Span::from(" "),
            Span::from(state.mentor.audio_title).fg(theme.text).bold(),
        ]))
        .render(title_row, buf);

        // The printed length is a label from the card data, not a
        // measurement of the simulated clip
        Text::from(state.mentor.audio_duration)
            .fg(theme.text_soft)
            .right_aligned()
            .render(title_row, buf);

        let [button, wave] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(7), Constraint::Fill(1)])
            .areas(wave_row);

        render_play_button(button, buf, player, theme, Instant::now());
        render_bars(wave, buf, player, theme);
    }
}

fn render_play_button(
    area: Rect,
    buf: &mut Buffer,
    player: &PlayerState,
    theme: &Theme,
    now: Instant,
) {
    // Radius breathes with the pulse while a clip is playing
    let scale = player.pulse_scale(now) as f64;

    Canvas::default()
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: 0.72 * scale,
                color: theme.accent,
            });
        })
        .render(area, buf);

    let icon = match player.is_playing() {
        true => PAUSE_ICON,
        false => PLAY_ICON,
    };

    let centre = Rect::new(area.x + area.width / 2, area.y + area.height / 2, 1, 1);
    Text::from(icon).fg(theme.accent).render(centre, buf);
}

fn render_bars(area: Rect, buf: &mut Buffer, player: &PlayerState, theme: &Theme) {
    Canvas::default()
        .x_bounds([0.0, WAVEFORM_BARS as f64])
        .y_bounds([BAR_WIDGET_HEIGHT * -1.0, BAR_WIDGET_HEIGHT])
        .paint(|ctx| {
            for (idx, amp) in BAR_HEIGHTS.iter().enumerate() {
                let hgt = (amp * BAR_WIDGET_HEIGHT).round();
                let color = match player.segment_active(idx, WAVEFORM_BARS) {
                    true => theme.accent,
                    false => theme.border,
                };

                ctx.draw(&Rectangle {
                    x: idx as f64,
                    y: hgt * -1.0,
                    width: 0.5,
                    height: hgt * 2.0,
                    color,
                });
            }
        })
        .block(Block::new().padding(Padding {
            left: 1,
            right: 1,
            top: 0,
            bottom: 0,
        }))
        .render(area, buf);
}
