//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info};

use super::home_screen::HomeScreen;
use super::resource_screen::ResourceScreen;
use super::screen::{AppEvent, Screen};
use crate::domain::entities::{Authors, Books, Borrowings, Categories, Publishers};
use crate::domain::keybinding::{Action, KeyContext, Keymap};
use crate::domain::ports::{CatalogPort, ReferencePort};
use crate::domain::resource::ResourceKind;
use crate::domain::route::Route;
use crate::presentation::events::{EventResult, is_press};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{HeaderBar, HeaderBarStyle, StatusBar};

const SPINNER_TICK_RATE: Duration = Duration::from_millis(120);
const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Startup settings of the navigation shell.
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Screen shown first.
    pub start_route: Route,
    /// Effective key bindings.
    pub keymap: Keymap,
    /// Shared styles.
    pub theme: Theme,
    /// Whether the hint bar lists key bindings.
    pub show_key_hints: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            start_route: Route::Home,
            keymap: Keymap::defaults(),
            theme: Theme::default(),
            show_key_hints: true,
        }
    }
}

/// Navigation shell: owns the mounted screen, routes keys and background
/// results to it, and draws the header and status lines around it.
///
/// Switching routes builds a fresh screen, so every visit starts with an
/// empty form and reloads its lists.
pub struct App<B: CatalogPort> {
    backend: Arc<B>,
    route: Route,
    screen: Box<dyn Screen>,
    keymap: Keymap,
    theme: Theme,
    show_key_hints: bool,
    running: bool,
    spinner: usize,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl<B: CatalogPort> App<B> {
    /// Creates the shell and mounts the start route. Must be called inside a
    /// Tokio runtime, since resource screens start loading immediately.
    #[must_use]
    pub fn new(backend: Arc<B>, options: AppOptions) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let screen = Self::build_screen(&backend, options.start_route, options.theme, &event_tx);

        Self {
            backend,
            route: options.start_route,
            screen,
            keymap: options.keymap,
            theme: options.theme,
            show_key_hints: options.show_key_hints,
            running: true,
            spinner: 0,
            event_tx,
            event_rx,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(route = %self.route, "Entering event loop");

        let mut terminal_events = EventStream::new();
        let mut spinner_interval = interval(SPINNER_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            let working = self.screen.is_working();

            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if let Event::Key(key) = event {
                        self.handle_key(&key);
                    }
                }

                _ = spinner_interval.tick(), if working => {
                    self.spinner = self.spinner.wrapping_add(1);
                }

                else => break,
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn build_screen(
        backend: &Arc<B>,
        route: Route,
        theme: Theme,
        events: &mpsc::UnboundedSender<AppEvent>,
    ) -> Box<dyn Screen> {
        let references: Arc<dyn ReferencePort> = backend.clone();
        let events = events.clone();
        match route {
            Route::Home => Box::new(HomeScreen::new(theme)),
            Route::Resource(ResourceKind::Author) => Box::new(ResourceScreen::<Authors>::new(
                backend.clone(),
                references,
                theme,
                events,
            )),
            Route::Resource(ResourceKind::Book) => Box::new(ResourceScreen::<Books>::new(
                backend.clone(),
                references,
                theme,
                events,
            )),
            Route::Resource(ResourceKind::Publisher) => Box::new(
                ResourceScreen::<Publishers>::new(backend.clone(), references, theme, events),
            ),
            Route::Resource(ResourceKind::Category) => Box::new(
                ResourceScreen::<Categories>::new(backend.clone(), references, theme, events),
            ),
            Route::Resource(ResourceKind::Borrowing) => Box::new(
                ResourceScreen::<Borrowings>::new(backend.clone(), references, theme, events),
            ),
        }
    }

    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        info!(from = %self.route, to = %route, "Navigating");
        self.route = route;
        self.screen = Self::build_screen(&self.backend, route, self.theme, &self.event_tx);
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ScreenUpdated(route) if route == self.route => {
                self.screen.poll();
            }
            AppEvent::ScreenUpdated(route) => {
                debug!(route = %route, "Ignoring update for unmounted screen");
            }
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        if !is_press(key) {
            return;
        }

        let context = self.screen.key_context();
        let result = match self
            .keymap
            .resolve(context, key)
            .or_else(|| self.keymap.resolve(KeyContext::Global, key))
        {
            Some(action) => self.handle_action(action),
            None => self.screen.handle_input(key),
        };

        match result {
            EventResult::Navigate(route) => self.navigate(route),
            EventResult::Exit => {
                info!("Quit requested");
                self.running = false;
            }
            EventResult::Consumed | EventResult::Ignored => {}
        }
    }

    fn handle_action(&mut self, action: Action) -> EventResult {
        match action {
            Action::Quit => EventResult::Exit,
            Action::GoHome => EventResult::Navigate(Route::Home),
            Action::GoBooks => EventResult::Navigate(Route::Resource(ResourceKind::Book)),
            Action::GoAuthors => EventResult::Navigate(Route::Resource(ResourceKind::Author)),
            Action::GoPublishers => {
                EventResult::Navigate(Route::Resource(ResourceKind::Publisher))
            }
            Action::GoCategories => EventResult::Navigate(Route::Resource(ResourceKind::Category)),
            Action::GoBorrowing => EventResult::Navigate(Route::Resource(ResourceKind::Borrowing)),
            Action::NextScreen => EventResult::Navigate(self.route.next()),
            Action::PreviousScreen => EventResult::Navigate(self.route.previous()),
            other => self.screen.handle_action(other),
        }
    }

    fn status_bar(&self) -> StatusBar {
        let mut bar = self.screen.status();
        if self.screen.is_working() {
            let frame = SPINNER_FRAMES[self.spinner % SPINNER_FRAMES.len()];
            bar = StatusBar::new()
                .left(format!("{frame} {}", bar.message()))
                .level(bar.severity());
        }
        if self.show_key_hints {
            let context = self.screen.key_context();
            bar = bar.hints(
                self.keymap
                    .hints(context)
                    .chain(self.keymap.hints(KeyContext::Global)),
            );
        }
        bar
    }

    fn render(&mut self, frame: &mut Frame) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            HeaderBar::new(crate::NAME, crate::VERSION)
                .active(self.route)
                .style(HeaderBarStyle::from_theme(&self.theme)),
            header,
        );
        self.screen.render(frame, body);
        frame.render_widget(&self.status_bar(), footer);
    }
}
