//! Landing view.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crossterm::event::KeyEvent;
use ratatui::Frame;

use super::screen::Screen;
use crate::domain::keybinding::{Action, KeyContext};
use crate::domain::route::Route;
use crate::presentation::events::EventResult;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::StatusBar;

const FEATURES: [(&str, &str); 3] = [
    (
        "Personal Library",
        "Organize your favorite books in a single place, accessible anytime.",
    ),
    (
        "Find & Categorize",
        "Tag books with categories and find what you need in seconds.",
    ),
    (
        "Track Reading Status",
        "Mark books as \"Read\", \"Currently Reading\" or \"Want to Read\".",
    ),
];

/// Welcome text with the feature blurbs and a hint to open the book list.
pub struct HomeScreen {
    theme: Theme,
}

impl HomeScreen {
    /// Creates the landing screen.
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Screen for HomeScreen {
    fn route(&self) -> Route {
        Route::Home
    }

    fn key_context(&self) -> KeyContext {
        KeyContext::Home
    }

    fn handle_action(&mut self, _action: Action) -> EventResult {
        EventResult::Ignored
    }

    fn handle_input(&mut self, _key: &KeyEvent) -> EventResult {
        EventResult::Ignored
    }

    fn poll(&mut self) -> bool {
        false
    }

    fn status(&self) -> StatusBar {
        StatusBar::info("Ready")
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&*self, area);
    }
}

impl Widget for &HomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent));
        let inner = block.inner(area);
        block.render(area, buf);

        let [_, content, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(14),
            Constraint::Fill(1),
        ])
        .areas(inner);
        let [_, content, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(76),
            Constraint::Fill(1),
        ])
        .areas(content);

        let heading = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled("Welcome to BookVault", heading)),
            Line::from(Span::styled(
                "Your personal space to store, manage, and explore books effortlessly.",
                self.theme.dimmed_style,
            )),
            Line::from(""),
        ];
        for (title, blurb) in FEATURES {
            lines.push(Line::from(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(blurb, self.theme.dimmed_style)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", Style::default().fg(Color::Black).bg(self.theme.accent)),
            Span::raw(" to view the book list, or "),
            Span::styled("1", heading),
            Span::raw("-"),
            Span::styled("5", heading),
            Span::raw(" to open a screen."),
        ]));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(content, buf);
    }
}
