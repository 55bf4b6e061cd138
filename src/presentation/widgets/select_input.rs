//! Selection field for reference values.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::{EntityId, NamedRef};

/// Cycles through `{id, name}` options of another collection.
#[derive(Debug, Clone)]
pub struct SelectInput {
    label: String,
    options: Vec<NamedRef>,
    selected: Option<usize>,
    focused: bool,
    required: bool,
    accent: Color,
}

impl SelectInput {
    /// Creates an empty selection field.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            options: Vec::new(),
            selected: None,
            focused: false,
            required: false,
            accent: Color::Cyan,
        }
    }

    /// Marks the label as required.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the focus color.
    #[must_use]
    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    /// Replaces the options, keeping the selection when its id survives.
    pub fn set_options(&mut self, options: Vec<NamedRef>) {
        let current = self.selected_id();
        self.options = options;
        self.selected = None;
        if let Some(id) = current {
            self.select_id(id);
        }
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Selects the option with this id, or clears the selection.
    pub fn select_id(&mut self, id: EntityId) {
        self.selected = self.options.iter().position(|o| o.id == id);
    }

    /// Selects from the textual form value. Blank or unknown values clear it.
    pub fn select_value(&mut self, value: &str) {
        match EntityId::parse(value) {
            Some(id) => self.select_id(id),
            None => self.selected = None,
        }
    }

    /// Moves to the next option, wrapping around.
    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
    }

    /// Moves to the previous option, wrapping around.
    pub fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() - 1;
        self.selected = Some(match self.selected {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    /// Returns the selected option.
    #[must_use]
    pub fn selected(&self) -> Option<&NamedRef> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Returns the identifier of the selected option.
    #[must_use]
    pub fn selected_id(&self) -> Option<EntityId> {
        self.selected().map(|o| o.id)
    }

    /// Returns the value stored in the form: the id as text, or empty.
    #[must_use]
    pub fn value(&self) -> String {
        self.selected_id().map(|id| id.to_string()).unwrap_or_default()
    }
}

impl Widget for &SelectInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::Gray)
        };

        let title = if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);

        let content = match self.selected() {
            Some(option) => Span::styled(
                option.name.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            None if self.options.is_empty() => {
                Span::styled("No options", Style::default().fg(Color::DarkGray))
            }
            None => Span::styled(
                format!("Select {}", self.label),
                Style::default().fg(Color::DarkGray),
            ),
        };

        let mut spans = Vec::with_capacity(3);
        if self.focused {
            spans.push(Span::styled("◀ ", Style::default().fg(self.accent)));
        }
        spans.push(content);
        if self.focused {
            spans.push(Span::styled(" ▶", Style::default().fg(self.accent)));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authors() -> SelectInput {
        let mut select = SelectInput::new("Author");
        select.set_options(vec![
            NamedRef::new(4, "Orhan Pamuk"),
            NamedRef::new(9, "Elif Shafak"),
        ]);
        select
    }

    #[test]
    fn test_cycles_through_options() {
        let mut select = authors();
        assert_eq!(select.value(), "");

        select.select_next();
        assert_eq!(select.selected_id(), Some(EntityId(4)));
        select.select_next();
        select.select_next();
        assert_eq!(select.selected_id(), Some(EntityId(4)));

        select.select_previous();
        assert_eq!(select.value(), "9");
    }

    #[test]
    fn test_select_from_form_value() {
        let mut select = authors();
        select.select_value("9");
        assert_eq!(select.selected().map(|o| o.name.as_str()), Some("Elif Shafak"));

        select.select_value("");
        assert_eq!(select.selected(), None);
    }

    #[test]
    fn test_new_options_keep_surviving_selection() {
        let mut select = authors();
        select.select_id(EntityId(9));

        select.set_options(vec![NamedRef::new(9, "Elif Shafak")]);
        assert_eq!(select.selected_id(), Some(EntityId(9)));

        select.set_options(vec![NamedRef::new(1, "Yaşar Kemal")]);
        assert_eq!(select.selected_id(), None);
    }

    #[test]
    fn test_empty_options_do_nothing() {
        let mut select = SelectInput::new("Book");
        select.select_next();
        select.select_previous();
        assert_eq!(select.selected(), None);
    }
}
