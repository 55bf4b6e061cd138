//! Record list with selection.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

use crate::domain::resource::ListEntry;

/// Per-row annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMarker {
    /// No annotation.
    #[default]
    None,
    /// Loaded into the form.
    Editing,
    /// An operation on the record is in flight.
    Busy,
}

impl RowMarker {
    const fn symbol(self) -> &'static str {
        match self {
            Self::None => "  ",
            Self::Editing => "✎ ",
            Self::Busy => "… ",
        }
    }
}

/// Bordered list of rendered records, highlighting the selected row.
pub struct EntityListView<'a> {
    title: &'a str,
    rows: Vec<(ListEntry, RowMarker)>,
    focused: bool,
    accent: Color,
    empty_text: &'a str,
}

impl<'a> EntityListView<'a> {
    /// Creates an unfocused list.
    #[must_use]
    pub fn new(title: &'a str, rows: Vec<(ListEntry, RowMarker)>) -> Self {
        Self {
            title,
            rows,
            focused: false,
            accent: Color::Cyan,
            empty_text: "No records",
        }
    }

    /// Sets focus state.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Sets the border color used while focused.
    #[must_use]
    pub const fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    /// Sets the placeholder shown when there are no rows.
    #[must_use]
    pub const fn empty_text(mut self, text: &'a str) -> Self {
        self.empty_text = text;
        self
    }

    fn item(entry: ListEntry, marker: RowMarker) -> ListItem<'static> {
        let mut lines = vec![Line::from(vec![
            Span::raw(marker.symbol()),
            Span::styled(entry.title, Style::default().add_modifier(Modifier::BOLD)),
        ])];
        lines.extend(entry.details.into_iter().map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("    {label}: "), Style::default().fg(Color::DarkGray)),
                Span::raw(value),
            ])
        }));
        ListItem::new(lines)
    }
}

impl StatefulWidget for EntityListView<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border_style = if self.focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ({}) ", self.title, self.rows.len()));

        let items: Vec<ListItem<'static>> = if self.rows.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                format!("  {}", self.empty_text),
                Style::default().fg(Color::DarkGray),
            )))]
        } else {
            self.rows
                .into_iter()
                .map(|(entry, marker)| Self::item(entry, marker))
                .collect()
        };

        let highlight = if self.focused {
            Style::default().fg(self.accent).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        StatefulWidget::render(
            List::new(items).block(block).highlight_style(highlight),
            area,
            buf,
            state,
        );
    }
}
