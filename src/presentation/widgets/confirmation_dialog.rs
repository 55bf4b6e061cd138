//! Modal confirmation shown after a successful write.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

const MAX_WIDTH: u16 = 60;
const MIN_WIDTH: u16 = 24;

/// Title, message and a single dismiss button.
///
/// Holds no state of its own: visibility and text come from the caller, and
/// dismissing runs the caller's callback.
pub struct ConfirmationDialog<'a> {
    visible: bool,
    title: &'a str,
    message: &'a str,
    accent: Color,
    on_close: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a> ConfirmationDialog<'a> {
    /// Creates a dialog, drawn only when `visible`.
    #[must_use]
    pub fn new(visible: bool, title: &'a str, message: &'a str) -> Self {
        Self {
            visible,
            title,
            message,
            accent: Color::Cyan,
            on_close: None,
        }
    }

    /// Sets the border and button color.
    #[must_use]
    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    /// Sets the callback run on dismiss.
    #[must_use]
    pub fn on_close(mut self, callback: impl FnOnce() + 'a) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// Runs the dismiss callback. Returns whether the dialog was shown.
    pub fn dismiss(self) -> bool {
        if !self.visible {
            return false;
        }
        if let Some(callback) = self.on_close {
            callback();
        }
        true
    }

    fn popup_area(&self, area: Rect) -> Rect {
        let content = u16::try_from(self.message.width().max(self.title.width() + 2))
            .unwrap_or(u16::MAX);
        let width = content
            .saturating_add(4)
            .clamp(MIN_WIDTH, MAX_WIDTH)
            .min(area.width);

        let inner_width = width.saturating_sub(2).max(1);
        let message_lines = u16::try_from(self.message.width())
            .unwrap_or(u16::MAX)
            .div_ceil(inner_width)
            .max(1);
        // Borders, blank separator and button row.
        let height = message_lines.saturating_add(4).min(area.height);

        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl Widget for ConfirmationDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.visible || area.area() == 0 {
            return;
        }

        let popup = self.popup_area(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);

        let lines = vec![
            Line::from(self.message),
            Line::from(""),
            Line::from(Span::styled(
                "[ OK ]",
                Style::default()
                    .fg(Color::Black)
                    .bg(self.accent)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn render(dialog: ConfirmationDialog<'_>) -> String {
        let area = Rect::new(0, 0, 70, 12);
        let mut buf = Buffer::empty(area);
        dialog.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_hidden_dialog_renders_nothing() {
        let output = render(ConfirmationDialog::new(false, "Added", "The book was added."));
        assert!(output.chars().all(|c| c == ' ' || c == '\n'));
    }

    #[test]
    fn test_visible_dialog_shows_title_message_and_button() {
        let output = render(ConfirmationDialog::new(
            true,
            "Deleted",
            "The category has been successfully deleted.",
        ));
        assert!(output.contains(" Deleted "));
        assert!(output.contains("The category has been successfully deleted."));
        assert!(output.contains("[ OK ]"));
    }

    #[test]
    fn test_dismiss_invokes_callback_once_when_visible() {
        let closed = Cell::new(0);
        let shown = ConfirmationDialog::new(true, "Added", "ok")
            .on_close(|| closed.set(closed.get() + 1))
            .dismiss();
        assert!(shown);
        assert_eq!(closed.get(), 1);

        let shown = ConfirmationDialog::new(false, "Added", "ok")
            .on_close(|| closed.set(closed.get() + 1))
            .dismiss();
        assert!(!shown);
        assert_eq!(closed.get(), 1);
    }
}
