use anyhow::{Ok, Result, anyhow, bail};
use ratatui::style::Color;

pub(super) fn parse_color(s: &str) -> Result<Color> {
    match s {
        s if s.starts_with('#') => parse_hex(s),
        s if s.starts_with("rgb(") => parse_rgb(s),
        _ => try_from_str(s.trim()),
    }
}

pub(super) fn parse_hex(s: &str) -> Result<Color> {
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 {
        bail!("Invalid hex input: {s}\nExpected format \"#FF6534\"");
    }

    let r = u8::from_str_radix(&hex[0..2], 16)?;
    let g = u8::from_str_radix(&hex[2..4], 16)?;
    let b = u8::from_str_radix(&hex[4..], 16)?;

    Ok(Color::Rgb(r, g, b))
}

pub(super) fn parse_rgb(s: &str) -> Result<Color> {
    if s.ends_with(')') {
        let inner = &s[4..s.len() - 1];
        let parts = inner.split(',').collect::<Vec<&str>>();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>()?;
            let g = parts[1].trim().parse::<u8>()?;
            let b = parts[2].trim().parse::<u8>()?;
            return Ok(Color::Rgb(r, g, b));
        }
    }
    Err(anyhow!(
        "Invalid rgb input: {s}\nExpected ex: \"rgb(255, 101, 52)\""
    ))
}

pub(super) fn try_from_str(s: &str) -> Result<Color> {
    match s.to_lowercase().as_str() {
        "" | "none" => Ok(Color::default()),
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "white" => Ok(Color::White),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "lightred" => Ok(Color::LightRed),
        "lightgreen" => Ok(Color::LightGreen),
        "lightyellow" => Ok(Color::LightYellow),
        "lightblue" => Ok(Color::LightBlue),
        "lightmagenta" => Ok(Color::LightMagenta),
        "lightcyan" => Ok(Color::LightCyan),
        _ => Err(anyhow!("Invalid input: {}", s)),
    }
}

/// Mix `from` toward `to` by `t`, clamped to `0.0..=1.0`. Entrance
/// fades run text colors from the background up to full strength.
pub(crate) fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);

    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => Color::Rgb(
            lerp_channel(r1, r2, t),
            lerp_channel(g1, g2, t),
            lerp_channel(b1, b2, t),
        ),
        _ => match t < 0.5 {
            true => from,
            false => to,
        },
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#FF6534").unwrap(), Color::Rgb(255, 101, 52));
        assert!(parse_hex("#FF65").is_err());
        assert!(parse_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(
            parse_rgb("rgb(125, 216, 248)").unwrap(),
            Color::Rgb(125, 216, 248)
        );
        assert!(parse_rgb("rgb(1, 2)").is_err());
        assert!(parse_rgb("rgb(300, 0, 0)").is_err());
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(parse_color("white").unwrap(), Color::White);
        assert_eq!(parse_color(" DarkGray ").unwrap(), Color::DarkGray);
        assert!(parse_color("cerulean").is_err());
    }

    #[test]
    fn test_blend_endpoints_and_midpoint() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);

        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_blend_clamps_overshoot() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(100, 100, 100);

        assert_eq!(blend(a, b, 1.2), b);
        assert_eq!(blend(a, b, -0.5), a);
    }
}
