//! Common interface of the screens mounted by the navigation shell.

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::domain::keybinding::{Action, KeyContext};
use crate::domain::route::Route;
use crate::presentation::events::EventResult;
use crate::presentation::widgets::StatusBar;

/// Notification sent to the event loop from background work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A screen received new data and should be polled and redrawn.
    ScreenUpdated(Route),
}

/// A mounted view.
pub trait Screen: Send {
    /// Route the screen is mounted at.
    fn route(&self) -> Route;

    /// Keymap context for the current focus.
    fn key_context(&self) -> KeyContext;

    /// Handles a resolved key action.
    fn handle_action(&mut self, action: Action) -> EventResult;

    /// Handles a key that no binding claimed (typing into a field).
    fn handle_input(&mut self, key: &KeyEvent) -> EventResult;

    /// Applies results delivered since the last poll. Returns whether
    /// anything changed.
    fn poll(&mut self) -> bool;

    /// Returns whether a load or write is outstanding.
    fn is_working(&self) -> bool {
        false
    }

    /// Status line content, without key hints.
    fn status(&self) -> StatusBar;

    /// Draws the screen body.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
