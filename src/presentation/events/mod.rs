//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::domain::route::Route;

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was not handled.
    Ignored,
    /// Event was consumed.
    Consumed,
    /// Switch to another screen.
    Navigate(Route),
    /// Exit application.
    Exit,
}

impl EventResult {
    /// Returns whether the event was handled.
    #[must_use]
    pub const fn is_handled(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Returns whether the key event is a press (not a release or repeat on
/// terminals that report them).
#[must_use]
pub fn is_press(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Returns the character typed by a key, ignoring control chords.
#[must_use]
pub fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}
