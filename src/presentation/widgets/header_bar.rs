//! Header bar with one tab per route.

use crate::domain::route::Route;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Styles of the header bar.
#[allow(missing_docs)]
pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub tab: Style,
    pub tab_active: Style,
}

impl HeaderBarStyle {
    /// Derives the header styles from the theme accent.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            tab_active: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            tab: Style::default().fg(Color::Gray),
            tab_active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        }
    }
}

/// Persistent header: app name, version and one tab per route.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    active: Route,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    /// Creates a header with the home tab active.
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            active: Route::Home,
            style: HeaderBarStyle::default(),
        }
    }

    /// Sets the highlighted tab.
    #[must_use]
    pub const fn active(mut self, route: Route) -> Self {
        self.active = route;
        self
    }

    /// Sets the styles.
    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn tab_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (index, route) in Route::ALL.into_iter().enumerate() {
            let style = if route == self.active {
                self.style.tab_active
            } else {
                self.style.tab
            };
            spans.push(Span::styled(format!(" F{} {} ", index + 1, route.label()), style));
        }
        spans
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::raw(" "),
            Span::styled(format!("v{}", self.version), self.style.version),
            Span::raw("  "),
        ];
        spans.extend(self.tab_spans());

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resource::ResourceKind;

    fn rendered(header: HeaderBar<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        header.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_header_lists_every_route() {
        let line = rendered(HeaderBar::new("bookvault", "0.1.0"), 140);

        assert!(line.starts_with(" BOOKVAULT  v0.1.0"));
        for label in ["Home", "Books", "Authors", "Publishers", "Categories", "Borrowing"] {
            assert!(line.contains(label), "missing {label} in {line}");
        }
        assert!(line.contains("F6 Borrowing"));
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let style = HeaderBarStyle::default();
        let header = HeaderBar::new("bookvault", "0.1.0")
            .active(Route::Resource(ResourceKind::Author));
        let spans = header.tab_spans();

        assert_eq!(spans[2].content, " F3 Authors ");
        assert_eq!(spans[2].style, style.tab_active);
        assert_eq!(spans[0].style, style.tab);
    }
}
