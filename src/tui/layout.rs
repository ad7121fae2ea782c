use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Every screen draws inside a phone-shaped column this wide.
const STAGE_WIDTH: u16 = 64;

// Vertical inset pairs (top, bottom). Tall windows get the roomier
// pair, everything else the tight one.
const INSETS_TALL: (u16, u16) = (3, 2);
const INSETS_SHORT: (u16, u16) = (1, 1);

pub fn stage(area: Rect) -> Rect {
    let (top, bottom) = match area.height > 40 {
        true => INSETS_TALL,
        false => INSETS_SHORT,
    };

    let [_, middle, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top),
            Constraint::Fill(1),
            Constraint::Length(bottom),
        ])
        .areas(area);

    let [_, stage, _] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(STAGE_WIDTH.min(area.width)),
            Constraint::Fill(1),
        ])
        .areas(middle);

    stage
}

pub struct ProfileLayout {
    pub header: Rect,
    pub audio: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl ProfileLayout {
    pub fn new(area: Rect) -> Self {
        let [header, audio, body, footer] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(7),
                Constraint::Fill(1),
                Constraint::Length(2),
            ])
            .areas(area);

        ProfileLayout {
            header,
            audio,
            body,
            footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tall_windows_get_deeper_insets() {
        let tall = stage(Rect::new(0, 0, 100, 50));
        let short = stage(Rect::new(0, 0, 100, 30));

        assert_eq!(tall.y, 3);
        assert_eq!(short.y, 1);
        assert_eq!(tall.height, 50 - 3 - 2);
        assert_eq!(short.height, 30 - 1 - 1);
    }

    #[test]
    fn test_stage_is_centered_and_capped() {
        let wide = stage(Rect::new(0, 0, 100, 30));
        assert_eq!(wide.width, STAGE_WIDTH);
        assert_eq!(wide.x, (100 - STAGE_WIDTH) / 2);

        let narrow = stage(Rect::new(0, 0, 40, 30));
        assert_eq!(narrow.width, 40);
    }

    #[test]
    fn test_profile_regions_partition_the_stage() {
        let area = Rect::new(0, 0, 64, 40);
        let layout = ProfileLayout::new(area);

        assert_eq!(layout.header.height, 5);
        assert_eq!(layout.audio.height, 7);
        assert_eq!(layout.footer.height, 2);
        assert_eq!(
            layout.body.height,
            area.height - layout.header.height - layout.audio.height - layout.footer.height
        );
    }
}
