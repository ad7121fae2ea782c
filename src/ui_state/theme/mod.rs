mod theme_import;
mod theme_utils;

pub(crate) use theme_utils::blend;

use crate::ui_state::theme::{theme_import::ThemeImport, theme_utils::parse_color};
use anyhow::Result;
use log::warn;
use ratatui::style::Color;
use std::path::{Path, PathBuf};

// Ivory palette, lifted from the mobile mockups
const PAPER: Color = Color::Rgb(255, 255, 255);
const INK: Color = Color::Rgb(26, 26, 26);
const INK_SOFT: Color = Color::Rgb(107, 107, 107);
const ACCENT: Color = Color::Rgb(255, 101, 52);
const MIST: Color = Color::Rgb(235, 235, 235);
const TAG_BG: Color = Color::Rgb(242, 242, 242);
const SKY: Color = Color::Rgb(125, 216, 248);
const MOSS: Color = Color::Rgb(114, 196, 114);
const LISTEN_DARK: Color = Color::Rgb(25, 20, 20);
const LISTEN_GREEN: Color = Color::Rgb(29, 185, 84);

#[derive(Clone)]
pub struct Theme {
    pub bg: Color,
    pub text: Color,
    pub text_soft: Color,
    pub accent: Color,
    pub border: Color,
    pub tag_bg: Color,
    pub doodle_blue: Color,
    pub doodle_green: Color,
    pub listen_bg: Color,
    pub listen_accent: Color,
}

impl Theme {
    pub fn ivory() -> Theme {
        Theme {
            bg: PAPER,
            text: INK,
            text_soft: INK_SOFT,
            accent: ACCENT,
            border: MIST,
            tag_bg: TAG_BG,
            doodle_blue: SKY,
            doodle_green: MOSS,
            listen_bg: LISTEN_DARK,
            listen_accent: LISTEN_GREEN,
        }
    }

    /// Optional override from `<config>/attune/theme.toml`. A missing
    /// file is the normal case; a malformed one is logged and skipped
    /// so startup never fails over colors.
    pub fn load() -> Theme {
        let Some(path) = Self::config_path() else {
            return Theme::ivory();
        };

        match Self::load_from_file(&path) {
            Ok(theme) => theme,
            Err(e) => {
                warn!("ignoring theme at {}: {e:#}", path.display());
                Theme::ivory()
            }
        }
    }

    fn config_path() -> Option<PathBuf> {
        let path = dirs::config_dir()?.join("attune").join("theme.toml");
        path.exists().then_some(path)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Theme> {
        let file_str = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str::<ThemeImport>(&file_str)?;
        Theme::try_from(&config)
    }
}

impl TryFrom<&ThemeImport> for Theme {
    type Error = anyhow::Error;

    fn try_from(config: &ThemeImport) -> Result<Self> {
        let colors = &config.colors;

        Ok(Theme {
            bg: parse_color(&colors.background)?,
            text: parse_color(&colors.text)?,
            text_soft: parse_color(&colors.text_secondary)?,
            accent: parse_color(&colors.accent)?,
            border: parse_color(&colors.border)?,
            tag_bg: parse_color(&colors.tag)?,
            doodle_blue: parse_color(&colors.doodle_blue)?,
            doodle_green: parse_color(&colors.doodle_green)?,
            listen_bg: parse_color(&colors.listening_bg)?,
            listen_accent: parse_color(&colors.listening_accent)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_import_round_trip() {
        let raw = r##"
            [colors]
            background = "#FFFFFF"
            text = "#1A1A1A"
            text_secondary = "gray"
            accent = "rgb(255, 101, 52)"
            border = "#EBEBEB"
            tag = "#F2F2F2"
            doodle_blue = "#7DD8F8"
            doodle_green = "#72C472"
            listening_bg = "#191414"
            listening_accent = "#1DB954"
        "##;

        let import = toml::from_str::<ThemeImport>(raw).unwrap();
        let theme = Theme::try_from(&import).unwrap();

        assert_eq!(theme.accent, Color::Rgb(255, 101, 52));
        assert_eq!(theme.text_soft, Color::Gray);
    }

    #[test]
    fn test_bad_color_rejects_the_file() {
        let raw = r##"
            [colors]
            background = "#FFFFFF"
            text = "not-a-color"
            text_secondary = "gray"
            accent = "#FF6534"
            border = "#EBEBEB"
            tag = "#F2F2F2"
            doodle_blue = "#7DD8F8"
            doodle_green = "#72C472"
            listening_bg = "#191414"
            listening_accent = "#1DB954"
        "##;

        let import = toml::from_str::<ThemeImport>(raw).unwrap();
        assert!(Theme::try_from(&import).is_err());
    }
}
