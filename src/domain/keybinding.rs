//! Actions, key contexts and the configurable keymap.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

/// Command a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Action {
    Quit,

    // Navigation shell
    GoHome,
    GoBooks,
    GoAuthors,
    GoPublishers,
    GoCategories,
    GoBorrowing,
    NextScreen,
    PreviousScreen,

    // Focus
    FocusNext,
    FocusPrevious,
    NavigateUp,
    NavigateDown,

    // Form
    Submit,
    OptionPrevious,
    OptionNext,
    InsertToday,
    Cancel,

    // List
    EditSelected,
    DeleteSelected,

    // Dialog
    CloseDialog,
}

/// Where a binding applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum KeyContext {
    Global,
    Home,
    Form,
    List,
    Dialog,
}

impl Action {
    /// Context a user-configured binding for this action is installed in.
    #[must_use]
    pub const fn default_context(self) -> KeyContext {
        match self {
            Self::Quit
            | Self::GoHome
            | Self::GoBooks
            | Self::GoAuthors
            | Self::GoPublishers
            | Self::GoCategories
            | Self::GoBorrowing
            | Self::NextScreen
            | Self::PreviousScreen => KeyContext::Global,
            Self::FocusNext
            | Self::FocusPrevious
            | Self::Submit
            | Self::OptionPrevious
            | Self::OptionNext
            | Self::InsertToday
            | Self::Cancel => KeyContext::Form,
            Self::NavigateUp | Self::NavigateDown | Self::EditSelected | Self::DeleteSelected => {
                KeyContext::List
            }
            Self::CloseDialog => KeyContext::Dialog,
        }
    }
}

/// A key bound to an action within one context.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub context: KeyContext,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    /// Creates a binding shown in the hint bar.
    pub fn new(
        key: KeyEvent,
        action: Action,
        context: KeyContext,
        label: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            key,
            action,
            context,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    /// Hides the binding from the hint bar.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Returns whether this binding matches a pressed key.
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        normalize(&self.key) == normalize(key)
    }
}

fn normalize(key: &KeyEvent) -> (KeyCode, KeyModifiers) {
    match key.code {
        // Shift is already folded into the character itself.
        KeyCode::Char(c) => (
            KeyCode::Char(c),
            key.modifiers.difference(KeyModifiers::SHIFT),
        ),
        code => (code, key.modifiers),
    }
}

const fn plain(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

const fn ctrl(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::CONTROL)
}

/// Ordered set of bindings, resolved per context.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<Keybind>,
}

impl Keymap {
    /// Returns the built-in bindings.
    #[must_use]
    pub fn defaults() -> Self {
        use Action as A;
        use KeyContext as C;

        let bindings = vec![
            Keybind::new(ctrl(KeyCode::Char('c')), A::Quit, C::Global, "Quit"),
            Keybind::new(plain(KeyCode::F(1)), A::GoHome, C::Global, "Home").hidden(),
            Keybind::new(plain(KeyCode::F(2)), A::GoBooks, C::Global, "Books").hidden(),
            Keybind::new(plain(KeyCode::F(3)), A::GoAuthors, C::Global, "Authors").hidden(),
            Keybind::new(plain(KeyCode::F(4)), A::GoPublishers, C::Global, "Publishers").hidden(),
            Keybind::new(plain(KeyCode::F(5)), A::GoCategories, C::Global, "Categories").hidden(),
            Keybind::new(plain(KeyCode::F(6)), A::GoBorrowing, C::Global, "Borrowing").hidden(),
            Keybind::new(ctrl(KeyCode::Right), A::NextScreen, C::Global, "Next screen"),
            Keybind::new(ctrl(KeyCode::Left), A::PreviousScreen, C::Global, "Prev screen").hidden(),
            Keybind::new(plain(KeyCode::Char('q')), A::Quit, C::Home, "Quit"),
            Keybind::new(plain(KeyCode::Enter), A::GoBooks, C::Home, "Book list"),
            Keybind::new(plain(KeyCode::Char('1')), A::GoBooks, C::Home, "Books").hidden(),
            Keybind::new(plain(KeyCode::Char('2')), A::GoAuthors, C::Home, "Authors").hidden(),
            Keybind::new(plain(KeyCode::Char('3')), A::GoPublishers, C::Home, "Publishers").hidden(),
            Keybind::new(plain(KeyCode::Char('4')), A::GoCategories, C::Home, "Categories").hidden(),
            Keybind::new(plain(KeyCode::Char('5')), A::GoBorrowing, C::Home, "Borrowing").hidden(),
            Keybind::new(plain(KeyCode::Enter), A::Submit, C::Form, "Save"),
            Keybind::new(plain(KeyCode::Tab), A::FocusNext, C::Form, "Next field"),
            Keybind::new(plain(KeyCode::Down), A::FocusNext, C::Form, "Next field").hidden(),
            Keybind::new(
                KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
                A::FocusPrevious,
                C::Form,
                "Prev field",
            )
            .hidden(),
            Keybind::new(plain(KeyCode::Up), A::FocusPrevious, C::Form, "Prev field").hidden(),
            Keybind::new(plain(KeyCode::Left), A::OptionPrevious, C::Form, "Option").hidden(),
            Keybind::new(plain(KeyCode::Right), A::OptionNext, C::Form, "Option").hidden(),
            Keybind::new(ctrl(KeyCode::Char('t')), A::InsertToday, C::Form, "Today"),
            Keybind::new(plain(KeyCode::Esc), A::Cancel, C::Form, "Clear form"),
            Keybind::new(plain(KeyCode::Tab), A::FocusNext, C::List, "Form"),
            Keybind::new(
                KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
                A::FocusPrevious,
                C::List,
                "Form",
            )
            .hidden(),
            Keybind::new(plain(KeyCode::Up), A::NavigateUp, C::List, "Up").hidden(),
            Keybind::new(plain(KeyCode::Char('k')), A::NavigateUp, C::List, "Up").hidden(),
            Keybind::new(plain(KeyCode::Down), A::NavigateDown, C::List, "Down").hidden(),
            Keybind::new(plain(KeyCode::Char('j')), A::NavigateDown, C::List, "Down").hidden(),
            Keybind::new(plain(KeyCode::Char('e')), A::EditSelected, C::List, "Edit"),
            Keybind::new(plain(KeyCode::Enter), A::EditSelected, C::List, "Edit").hidden(),
            Keybind::new(plain(KeyCode::Char('d')), A::DeleteSelected, C::List, "Delete"),
            Keybind::new(plain(KeyCode::Delete), A::DeleteSelected, C::List, "Delete").hidden(),
            Keybind::new(plain(KeyCode::Esc), A::Cancel, C::List, "Cancel edit").hidden(),
            Keybind::new(plain(KeyCode::Enter), A::CloseDialog, C::Dialog, "Close"),
            Keybind::new(plain(KeyCode::Esc), A::CloseDialog, C::Dialog, "Close").hidden(),
        ];

        Self { bindings }
    }

    /// Applies user overrides on top of the defaults.
    ///
    /// Each override is installed ahead of the built-in bindings of its
    /// action's context, so it wins over a default on the same key.
    /// Unparseable keys are returned so the caller can report them.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &HashMap<String, Action>) -> (Self, Vec<String>) {
        let mut rejected = Vec::new();
        let mut custom = Vec::new();

        let mut entries: Vec<_> = overrides.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (key_text, action) in entries {
            match parse_key(key_text) {
                Some(key) => custom.push(Keybind::new(
                    key,
                    *action,
                    action.default_context(),
                    key_text.clone(),
                )),
                None => rejected.push(key_text.clone()),
            }
        }

        custom.append(&mut self.bindings);
        self.bindings = custom;
        (self, rejected)
    }

    /// Resolves a key within a context.
    #[must_use]
    pub fn resolve(&self, context: KeyContext, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|b| b.context == context && b.matches(key))
            .map(|b| b.action)
    }

    /// Returns the hints shown in the status bar for a context.
    pub fn hints(&self, context: KeyContext) -> impl Iterator<Item = (String, &str)> + '_ {
        self.bindings
            .iter()
            .filter(move |b| b.context == context && b.visible_in_bar)
            .map(|b| (format_key(&b.key), b.label.as_ref()))
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Parses a key description such as `"Ctrl+s"`, `"Alt+Enter"` or `"F5"`.
#[must_use]
pub fn parse_key(text: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut parts: Vec<&str> = text.split('+').map(str::trim).collect();

    // "Ctrl++" binds the plus key itself.
    if text.ends_with("++") {
        parts.truncate(parts.len().saturating_sub(2));
        parts.push("+");
    }

    let (key_part, modifier_parts) = parts.split_last()?;
    for modifier in modifier_parts {
        match modifier.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match key_part.to_ascii_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        lower => {
            let mut chars = key_part.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => {
                    let number = lower.strip_prefix('f')?.parse::<u8>().ok()?;
                    if (1..=12).contains(&number) {
                        KeyCode::F(number)
                    } else {
                        return None;
                    }
                }
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

/// Formats a key for display in hints.
#[must_use]
pub fn format_key(key: &KeyEvent) -> String {
    let mut text = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        text.push_str("Ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        text.push_str("Alt+");
    }
    let code = match key.code {
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        other => format!("{other:?}"),
    };
    text.push_str(&code);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Ctrl+s", Some(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)) ; "ctrl_char")]
    #[test_case("Alt+Enter", Some(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)) ; "alt_enter")]
    #[test_case("F5", Some(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)) ; "function_key")]
    #[test_case("x", Some(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)) ; "bare_char")]
    #[test_case("Ctrl++", Some(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::CONTROL)) ; "plus_key")]
    #[test_case("Hyper+x", None ; "unknown_modifier")]
    #[test_case("F13", None ; "function_key_out_of_range")]
    #[test_case("", None ; "empty")]
    fn test_parse_key(text: &str, expected: Option<KeyEvent>) {
        assert_eq!(parse_key(text), expected);
    }

    #[test]
    fn test_context_resolution() {
        let keymap = Keymap::defaults();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(keymap.resolve(KeyContext::Form, &enter), Some(Action::Submit));
        assert_eq!(keymap.resolve(KeyContext::List, &enter), Some(Action::EditSelected));
        assert_eq!(keymap.resolve(KeyContext::Dialog, &enter), Some(Action::CloseDialog));
        assert_eq!(keymap.resolve(KeyContext::Global, &enter), None);
    }

    #[test]
    fn test_typing_letters_in_form_is_not_bound() {
        let keymap = Keymap::defaults();
        let d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);

        assert_eq!(keymap.resolve(KeyContext::Form, &d), None);
        assert_eq!(keymap.resolve(KeyContext::List, &d), Some(Action::DeleteSelected));
    }

    #[test]
    fn test_shifted_chars_match() {
        let keymap = Keymap::defaults();
        let shifted = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::SHIFT);
        assert_eq!(keymap.resolve(KeyContext::List, &shifted), Some(Action::EditSelected));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = HashMap::from([
            ("Ctrl+s".to_string(), Action::Submit),
            ("Enter".to_string(), Action::FocusNext),
            ("Meta+z".to_string(), Action::Quit),
        ]);

        let (keymap, rejected) = Keymap::defaults().with_overrides(&overrides);

        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(keymap.resolve(KeyContext::Form, &ctrl_s), Some(Action::Submit));
        assert_eq!(keymap.resolve(KeyContext::Form, &enter), Some(Action::FocusNext));
        assert_eq!(rejected, vec!["Meta+z".to_string()]);
    }

    #[test]
    fn test_format_key() {
        assert_eq!(format_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)), "Ctrl+c");
        assert_eq!(format_key(&KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)), "F2");
    }
}
