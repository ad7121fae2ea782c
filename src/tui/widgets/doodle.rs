use ratatui::{
    style::Color,
    widgets::{
        Widget,
        canvas::{Canvas, Context, Line},
    },
};

/// Hand-drawn accents sprinkled around the onboarding screens.
pub enum DoodleKind {
    Squiggle,
    Burst,
}

pub struct Doodle {
    pub kind: DoodleKind,
    pub color: Color,
}

impl Widget for Doodle {
    fn render(self, area: ratatui::prelude::Rect, buf: &mut ratatui::prelude::Buffer) {
        Canvas::default()
            .x_bounds([0.0, 100.0])
            .y_bounds([0.0, 100.0])
            .paint(|ctx| match self.kind {
                DoodleKind::Squiggle => squiggle(ctx, self.color),
                DoodleKind::Burst => burst(ctx, self.color),
            })
            .render(area, buf);
    }
}

fn squiggle(ctx: &mut Context, color: Color) {
    let mut prev = (0.0, 50.0);
    for i in 1..=40 {
        let x = i as f64 * 2.5;
        let y = 50.0 + (x / 9.0).sin() * 35.0;
        ctx.draw(&Line {
            x1: prev.0,
            y1: prev.1,
            x2: x,
            y2: y,
            color,
        });
        prev = (x, y);
    }
}

fn burst(ctx: &mut Context, color: Color) {
    for i in 0..12 {
        let angle = i as f64 * std::f64::consts::TAU / 12.0;
        ctx.draw(&Line {
            x1: 50.0 + angle.cos() * 12.0,
            y1: 50.0 + angle.sin() * 12.0,
            x2: 50.0 + angle.cos() * 42.0,
            y2: 50.0 + angle.sin() * 42.0,
            color,
        });
    }
}
