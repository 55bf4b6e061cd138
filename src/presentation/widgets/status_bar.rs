//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// One-line bar with a message on the left and key hints on the right.
#[derive(Debug, Clone)]
pub struct StatusBar {
    left: String,
    right: String,
    level: StatusLevel,
}

impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            level: StatusLevel::Info,
        }
    }

    /// Sets left content.
    #[must_use]
    pub fn left(mut self, content: impl Into<String>) -> Self {
        self.left = content.into();
        self
    }

    /// Sets right content.
    #[must_use]
    pub fn right(mut self, content: impl Into<String>) -> Self {
        self.right = content.into();
        self
    }

    /// Sets right content from `(key, label)` pairs.
    #[must_use]
    pub fn hints<'a>(self, hints: impl IntoIterator<Item = (String, &'a str)>) -> Self {
        let text = hints
            .into_iter()
            .map(|(key, label)| format!("{key} {label}"))
            .collect::<Vec<_>>()
            .join(" · ");
        self.right(text)
    }

    /// Sets status level.
    #[must_use]
    pub const fn level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }

    /// Returns the left-hand message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.left
    }

    /// Returns the severity the message is drawn with.
    #[must_use]
    pub const fn severity(&self) -> StatusLevel {
        self.level
    }

    /// Creates info status bar.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new().left(message).level(StatusLevel::Info)
    }

    /// Creates error status bar.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new().left(message).level(StatusLevel::Error)
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);
        let hint_style = Style::default().fg(Color::DarkGray);

        let width = area.width as usize;
        let left_len = self.left.width();
        let right_len = self.right.width();

        let mut spans = vec![Span::styled(self.left.as_str(), style)];

        // Hints give way to the message on narrow terminals.
        if !self.right.is_empty() && left_len + 1 + right_len <= width {
            let padding = width - left_len - right_len;
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(self.right.as_str(), hint_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(bar: &StatusBar, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_hints_are_joined() {
        let bar = StatusBar::new().hints([
            ("Enter".to_string(), "Save"),
            ("Esc".to_string(), "Clear form"),
        ]);
        assert_eq!(bar.right, "Enter Save · Esc Clear form");
    }

    #[test]
    fn test_hints_are_right_aligned() {
        let bar = StatusBar::info("Loading").right("q Quit");
        let line = rendered(&bar, 20);
        assert!(line.starts_with("Loading"));
        assert!(line.ends_with("q Quit"));
    }

    #[test]
    fn test_hints_dropped_when_too_narrow() {
        let bar = StatusBar::error("Error fetching authors.").right("q Quit");
        let line = rendered(&bar, 26);
        assert!(line.starts_with("Error fetching authors."));
        assert!(!line.contains("Quit"));
    }
}
