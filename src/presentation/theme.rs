//! Colors derived from the configured accent.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Styles shared by every screen.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent for focus, tabs and the dialog border.
    pub accent: Color,
    /// Highlighted list row.
    pub selection_style: Style,
    /// Secondary text.
    pub dimmed_style: Style,
    /// Error sentences.
    pub error_style: Style,
    /// Plain text.
    pub base_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Yellow")
    }
}

impl Theme {
    /// Builds the theme from a color name or `#rrggbb` value.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Builds the theme around an accent color.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            selection_style: Style::default()
                .fg(accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            dimmed_style: Style::default().fg(Color::DarkGray),
            error_style: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            base_style: Style::default().fg(Color::Reset),
        }
    }

    /// Border style of a focusable element.
    #[must_use]
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Some((r, g, b)) = parse_short_hex(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Yellow,
    }
}

fn parse_short_hex(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');
    if s.len() != 3 || !s.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&s[i..=i].repeat(2), 16).ok();
    Some((channel(0)?, channel(1)?, channel(2)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Orange"), Color::Indexed(208));
        assert_eq!(parse_color("Invalid"), Color::Yellow);
    }
}
