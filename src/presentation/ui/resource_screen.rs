//! List-and-form screen shared by every catalog collection.

use std::sync::Arc;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Color,
    text::Span,
    widgets::{Block, Borders, ListState, Paragraph},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::screen::{AppEvent, Screen};
use crate::application::dto::{LoadedData, Operation, OperationOutcome, OperationTarget};
use crate::application::screen_state::ResourceScreenState;
use crate::application::use_cases::ResourceUseCase;
use crate::domain::entities::{EntityId, Identified};
use crate::domain::errors::{ApiError, ScreenError};
use crate::domain::form::{FieldKind, FieldSpec};
use crate::domain::keybinding::{Action, KeyContext};
use crate::domain::ports::{ReferencePort, ResourcePort};
use crate::domain::resource::Resource;
use crate::domain::route::Route;
use crate::presentation::events::{EventResult, typed_char};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    ConfirmationDialog, EntityListView, RowMarker, SelectInput, StatusBar, StatusLevel, TextInput,
};

const BUSY_NOTICE: &str = "That record is still being saved, try again in a moment.";
const FIELD_HEIGHT: u16 = 3;

enum Message<R: Resource> {
    Loaded(Result<LoadedData<R>, ApiError>),
    Completed(OperationOutcome<R>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Field(usize),
    List,
}

enum FieldInput {
    Text(TextInput),
    Select(SelectInput),
}

impl FieldInput {
    fn new(field: &FieldSpec, accent: Color) -> Self {
        let text = |placeholder: &str| {
            Self::Text(
                TextInput::new(field.label)
                    .required(field.required)
                    .placeholder(placeholder)
                    .accent(accent),
            )
        };
        match field.kind {
            FieldKind::Reference(_) => Self::Select(
                SelectInput::new(field.label)
                    .required(field.required)
                    .accent(accent),
            ),
            FieldKind::Date => text("YYYY-MM-DD"),
            FieldKind::Email => text("name@example.com"),
            FieldKind::Number => text("0"),
            FieldKind::Text => text(""),
        }
    }

    fn set_focused(&mut self, focused: bool) {
        match self {
            Self::Text(input) => input.set_focused(focused),
            Self::Select(input) => input.set_focused(focused),
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Text(input) => input.value().to_string(),
            Self::Select(input) => input.value(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Self::Text(input) => frame.render_widget(input, area),
            Self::Select(input) => frame.render_widget(input, area),
        }
    }
}

/// Screen for one collection: a form on the left, the record list on the
/// right, and the confirmation dialog on top.
///
/// Requests run as spawned tasks. Their results come back through a channel
/// owned by the screen, so results arriving after the screen is closed are
/// dropped.
pub struct ResourceScreen<R: Resource> {
    state: ResourceScreenState<R>,
    use_case: ResourceUseCase<R>,
    inputs: Vec<FieldInput>,
    focus: Focus,
    list_state: ListState,
    notice: Option<&'static str>,
    theme: Theme,
    tx: mpsc::UnboundedSender<Message<R>>,
    rx: mpsc::UnboundedReceiver<Message<R>>,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl<R: Resource> ResourceScreen<R> {
    /// Creates the screen and starts its initial load.
    #[must_use]
    pub fn new(
        port: Arc<dyn ResourcePort<R>>,
        references: Arc<dyn ReferencePort>,
        theme: Theme,
        events: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let inputs = R::fields()
            .iter()
            .map(|field| FieldInput::new(field, theme.accent))
            .collect();

        let mut screen = Self {
            state: ResourceScreenState::new(),
            use_case: ResourceUseCase::new(port, references),
            inputs,
            focus: Focus::Field(0),
            list_state: ListState::default(),
            notice: None,
            theme,
            tx,
            rx,
            events,
        };
        screen.set_focus(Focus::Field(0));
        screen.load();
        screen
    }

    fn load(&mut self) {
        info!(resource = %R::KIND, "Opening screen");
        self.state.begin_load();

        let use_case = self.use_case.clone();
        let tx = self.tx.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = use_case.load().await;
            Self::deliver(&tx, &events, Message::Loaded(result));
        });
    }

    fn dispatch(&self, operation: Operation<R>) {
        let use_case = self.use_case.clone();
        let tx = self.tx.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = use_case.execute(operation).await;
            Self::deliver(&tx, &events, Message::Completed(outcome));
        });
    }

    fn deliver(
        tx: &mpsc::UnboundedSender<Message<R>>,
        events: &mpsc::UnboundedSender<AppEvent>,
        message: Message<R>,
    ) {
        if tx.send(message).is_err() {
            debug!(resource = %R::KIND, "Screen closed, discarding result");
            return;
        }
        let _ = events.send(AppEvent::ScreenUpdated(Route::Resource(R::KIND)));
    }

    fn apply(&mut self, message: Message<R>) {
        match message {
            Message::Loaded(result) => {
                self.state.apply_loaded(result);
                self.refresh_options();
            }
            Message::Completed(outcome) => {
                if outcome.result.is_ok() {
                    self.notice = None;
                }
                self.state.apply_outcome(outcome);
            }
        }
        self.sync_from_form();
        self.clamp_selection();
    }

    fn refresh_options(&mut self) {
        let references = self.state.references();
        for (field, input) in R::fields().iter().zip(&mut self.inputs) {
            if let (FieldKind::Reference(kind), FieldInput::Select(select)) = (field.kind, input) {
                select.set_options(references.get(kind).to_vec());
            }
        }
    }

    fn sync_from_form(&mut self) {
        let form = self.state.form();
        for (index, input) in self.inputs.iter_mut().enumerate() {
            let value = form.value_at(index);
            match input {
                FieldInput::Text(text) => {
                    if text.value() != value {
                        text.set_value(value);
                    }
                }
                FieldInput::Select(select) => select.select_value(value),
            }
        }
    }

    fn store_input(&mut self, index: usize) {
        if let Some(input) = self.inputs.get(index) {
            let value = input.value();
            self.state.form_mut().set_at(index, value);
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        for (index, input) in self.inputs.iter_mut().enumerate() {
            input.set_focused(focus == Focus::Field(index));
        }
        if focus == Focus::List && self.list_state.selected().is_none() {
            self.clamp_selection();
        }
    }

    fn focus_next(&mut self) {
        let next = match self.focus {
            Focus::Field(i) if i + 1 < self.inputs.len() => Focus::Field(i + 1),
            Focus::Field(_) => Focus::List,
            Focus::List => Focus::Field(0),
        };
        self.set_focus(next);
    }

    fn focus_previous(&mut self) {
        let previous = match self.focus {
            Focus::Field(0) => Focus::List,
            Focus::Field(i) => Focus::Field(i - 1),
            Focus::List => Focus::Field(self.inputs.len().saturating_sub(1)),
        };
        self.set_focus(previous);
    }

    fn clamp_selection(&mut self) {
        let len = self.state.records().len();
        let selected = match self.list_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    fn selected_id(&self) -> Option<EntityId> {
        self.list_state
            .selected()
            .and_then(|index| self.state.records().get_index(index))
            .map(Identified::id)
    }

    fn submit(&mut self) {
        match self.state.prepare_submit() {
            Ok(operation) => {
                self.notice = None;
                self.dispatch(operation);
            }
            Err(ScreenError::Busy) => self.notice = Some(BUSY_NOTICE),
            Err(e) => {
                debug!(resource = %R::KIND, error = %e, "Submit rejected");
                self.notice = None;
            }
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        match self.state.prepare_delete(id) {
            Ok(operation) => {
                self.notice = None;
                self.dispatch(operation);
            }
            Err(ScreenError::Busy) => self.notice = Some(BUSY_NOTICE),
            Err(e) => debug!(resource = %R::KIND, error = %e, "Delete rejected"),
        }
    }

    fn edit_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.state.begin_edit(id).is_ok() {
            self.sync_from_form();
            self.set_focus(Focus::Field(0));
        }
    }

    fn cancel_edit(&mut self) {
        self.state.cancel_edit();
        self.notice = None;
        self.sync_from_form();
    }

    fn close_dialog(&mut self) {
        let visible = self.state.is_dialog_visible();
        let confirmation = self.state.confirmation();
        let (title, message) = confirmation
            .as_ref()
            .map_or(("", ""), |c| (c.title.as_str(), c.message.as_str()));
        let state = &mut self.state;
        ConfirmationDialog::new(visible, title, message)
            .on_close(|| state.close_dialog())
            .dismiss();
    }

    fn cycle_option(&mut self, forward: bool) {
        let Focus::Field(index) = self.focus else {
            return;
        };
        match self.inputs.get_mut(index) {
            Some(FieldInput::Select(select)) if forward => select.select_next(),
            Some(FieldInput::Select(select)) => select.select_previous(),
            Some(FieldInput::Text(text)) if forward => text.move_right(),
            Some(FieldInput::Text(text)) => text.move_left(),
            None => return,
        }
        self.store_input(index);
    }

    fn insert_today(&mut self) {
        let Focus::Field(index) = self.focus else {
            return;
        };
        let is_date = R::fields()
            .get(index)
            .is_some_and(|field| field.kind == FieldKind::Date);
        if let (true, Some(FieldInput::Text(text))) = (is_date, self.inputs.get_mut(index)) {
            text.set_value(Local::now().date_naive().format("%Y-%m-%d").to_string());
            self.store_input(index);
        }
    }

    fn handle_form_action(&mut self, action: Action) -> EventResult {
        match action {
            Action::Submit => self.submit(),
            Action::FocusNext => self.focus_next(),
            Action::FocusPrevious => self.focus_previous(),
            Action::OptionNext => self.cycle_option(true),
            Action::OptionPrevious => self.cycle_option(false),
            Action::InsertToday => self.insert_today(),
            Action::Cancel => self.cancel_edit(),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn handle_list_action(&mut self, action: Action) -> EventResult {
        match action {
            Action::NavigateUp => {
                if let Some(i) = self.list_state.selected() {
                    self.list_state.select(Some(i.saturating_sub(1)));
                }
            }
            Action::NavigateDown => {
                let len = self.state.records().len();
                match self.list_state.selected() {
                    Some(i) if i + 1 < len => self.list_state.select(Some(i + 1)),
                    _ => {}
                }
            }
            Action::EditSelected => self.edit_selected(),
            Action::DeleteSelected => self.delete_selected(),
            Action::Cancel => self.cancel_edit(),
            Action::FocusNext => self.set_focus(Focus::Field(0)),
            Action::FocusPrevious => self.focus_previous(),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let title = match self.state.editing() {
            Some(id) => format!(" Edit {} #{id} ", R::KIND.noun()),
            None => format!(" New {} ", R::KIND.noun()),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(matches!(self.focus, Focus::Field(_))))
            .title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(self.inputs.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Fill(1));
        let rows = Layout::vertical(constraints).split(inner);

        if let Some(error) = self.state.error() {
            frame.render_widget(
                Paragraph::new(Span::styled(error, self.theme.error_style)),
                rows[0],
            );
        }
        for (input, area) in self.inputs.iter().zip(rows.iter().skip(1)) {
            input.render(frame, *area);
        }
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let rows = self
            .state
            .records()
            .iter()
            .map(|record| {
                let id = record.id();
                let marker = if self.state.is_busy(OperationTarget::Entity(id)) {
                    RowMarker::Busy
                } else if self.state.editing() == Some(id) {
                    RowMarker::Editing
                } else {
                    RowMarker::None
                };
                (R::render(record), marker)
            })
            .collect();

        let empty_text = if self.state.is_loading() {
            "Loading…"
        } else {
            "No records"
        };

        frame.render_stateful_widget(
            EntityListView::new(R::KIND.title(), rows)
                .focused(self.focus == Focus::List)
                .accent(self.theme.accent)
                .empty_text(empty_text),
            area,
            &mut self.list_state,
        );
    }

    #[cfg(test)]
    async fn settle(&mut self) {
        if let Some(message) = self.rx.recv().await {
            self.apply(message);
        }
    }
}

impl<R: Resource> Screen for ResourceScreen<R> {
    fn route(&self) -> Route {
        Route::Resource(R::KIND)
    }

    fn key_context(&self) -> KeyContext {
        if self.state.is_dialog_visible() {
            KeyContext::Dialog
        } else if self.focus == Focus::List {
            KeyContext::List
        } else {
            KeyContext::Form
        }
    }

    fn handle_action(&mut self, action: Action) -> EventResult {
        match self.key_context() {
            KeyContext::Dialog if action == Action::CloseDialog => {
                self.close_dialog();
                EventResult::Consumed
            }
            KeyContext::List => self.handle_list_action(action),
            KeyContext::Form => self.handle_form_action(action),
            _ => EventResult::Ignored,
        }
    }

    fn handle_input(&mut self, key: &KeyEvent) -> EventResult {
        if self.key_context() != KeyContext::Form {
            return EventResult::Ignored;
        }
        let Focus::Field(index) = self.focus else {
            return EventResult::Ignored;
        };
        let Some(FieldInput::Text(text)) = self.inputs.get_mut(index) else {
            return EventResult::Ignored;
        };

        match key.code {
            KeyCode::Backspace => text.backspace(),
            KeyCode::Delete => text.delete(),
            KeyCode::Home => text.move_start(),
            KeyCode::End => text.move_end(),
            _ => match typed_char(key) {
                Some(c) => text.input_char(c),
                None => return EventResult::Ignored,
            },
        }
        self.store_input(index);
        EventResult::Consumed
    }

    fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(message) = self.rx.try_recv() {
            self.apply(message);
            changed = true;
        }
        changed
    }

    fn is_working(&self) -> bool {
        self.state.is_loading() || self.state.pending() > 0
    }

    fn status(&self) -> StatusBar {
        if let Some(error) = self.state.error() {
            StatusBar::error(error)
        } else if let Some(notice) = self.notice {
            StatusBar::new().left(notice).level(StatusLevel::Warning)
        } else if self.state.is_loading() {
            StatusBar::info(format!("Loading {}…", R::KIND.title().to_lowercase()))
        } else if self.state.pending() > 0 {
            StatusBar::info(format!("Saving {}…", R::KIND.noun()))
        } else if let Some(id) = self.state.editing() {
            StatusBar::info(format!("Editing {} #{id}", R::KIND.noun()))
        } else {
            StatusBar::new()
                .left(format!("{} {}", self.state.records().len(), R::KIND.title().to_lowercase()))
                .level(StatusLevel::Success)
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [form_area, list_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(area);

        self.render_form(frame, form_area);
        self.render_list(frame, list_area);

        if let Some(confirmation) = self.state.confirmation() {
            frame.render_widget(
                ConfirmationDialog::new(true, &confirmation.title, &confirmation.message)
                    .accent(self.theme.accent),
                area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Author, Authors, Book, Books, NamedRef};
    use crate::domain::ports::mocks::{Call, MockReferencePort, MockResourcePort};
    use crate::domain::resource::ResourceKind;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    fn author(id: u64, name: &str) -> Author {
        Author {
            id: EntityId(id),
            name: name.to_string(),
            birth_date: "1952-06-07".to_string(),
            country: "TR".to_string(),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text<R: Resource>(screen: &mut ResourceScreen<R>, text: &str) {
        for c in text.chars() {
            screen.handle_input(&key(KeyCode::Char(c)));
        }
    }

    async fn authors_screen(
        port: Arc<MockResourcePort<Authors>>,
    ) -> (ResourceScreen<Authors>, mpsc::UnboundedReceiver<AppEvent>) {
        let (events, events_rx) = mpsc::unbounded_channel();
        let mut screen =
            ResourceScreen::new(port, Arc::new(MockReferencePort::new()), Theme::default(), events);
        screen.settle().await;
        (screen, events_rx)
    }

    #[tokio::test]
    async fn test_mount_loads_and_wakes_loop() {
        let port = Arc::new(MockResourcePort::<Authors>::new(vec![author(1, "Orhan Pamuk")]));
        let (screen, mut events) = authors_screen(port).await;

        assert_eq!(screen.state.records().len(), 1);
        assert_eq!(
            events.recv().await,
            Some(AppEvent::ScreenUpdated(Route::Resource(ResourceKind::Author)))
        );
        assert_eq!(screen.status().severity(), StatusLevel::Success);
    }

    #[tokio::test]
    async fn test_load_failure_shows_error() {
        let port = Arc::new(MockResourcePort::<Authors>::failing_list(ApiError::Timeout));
        let (screen, _events) = authors_screen(port).await;

        assert_eq!(screen.state.error(), Some("Error fetching authors."));
        assert_eq!(screen.status().severity(), StatusLevel::Error);
    }

    #[tokio::test]
    async fn test_typed_form_creates_record_and_shows_dialog() {
        let port = Arc::new(MockResourcePort::<Authors>::new(Vec::new()));
        port.respond_with(Ok(Author {
            id: EntityId(7),
            name: "Jane Doe".to_string(),
            birth_date: "1975-03-02".to_string(),
            country: "UK".to_string(),
        }));
        let (mut screen, _events) = authors_screen(port.clone()).await;

        type_text(&mut screen, "Jane Doe");
        screen.handle_action(Action::FocusNext);
        type_text(&mut screen, "1975-03-02");
        screen.handle_action(Action::FocusNext);
        type_text(&mut screen, "UK");
        assert_eq!(screen.handle_action(Action::Submit), EventResult::Consumed);
        screen.settle().await;

        assert!(matches!(
            port.calls().as_slice(),
            [Call::List, Call::Create(p)] if p.name == "Jane Doe" && p.country == "UK"
        ));
        assert_eq!(screen.state.records().len(), 1);
        assert_eq!(screen.key_context(), KeyContext::Dialog);
        assert!(screen.inputs.iter().all(|input| input.value().is_empty()));

        screen.handle_action(Action::CloseDialog);
        assert_eq!(screen.key_context(), KeyContext::Form);
        assert!(screen.state.confirmation().is_none());
    }

    #[tokio::test]
    async fn test_incomplete_form_is_not_sent() {
        let port = Arc::new(MockResourcePort::<Authors>::new(Vec::new()));
        let (mut screen, _events) = authors_screen(port.clone()).await;

        type_text(&mut screen, "Jane Doe");
        screen.handle_action(Action::Submit);

        assert_eq!(port.calls().len(), 1);
        assert_eq!(
            screen.state.error(),
            Some("An error occurred while saving the author.")
        );
    }

    #[tokio::test]
    async fn test_edit_from_list_then_cancel_sends_nothing() {
        let port = Arc::new(MockResourcePort::<Authors>::new(vec![
            author(1, "Orhan Pamuk"),
            author(2, "Elif Shafak"),
        ]));
        let (mut screen, _events) = authors_screen(port.clone()).await;

        screen.handle_action(Action::FocusPrevious);
        assert_eq!(screen.key_context(), KeyContext::List);
        screen.handle_action(Action::NavigateDown);
        screen.handle_action(Action::EditSelected);

        assert_eq!(screen.state.editing(), Some(EntityId(2)));
        assert_eq!(screen.inputs[0].value(), "Elif Shafak");
        assert_eq!(screen.key_context(), KeyContext::Form);

        screen.handle_action(Action::Cancel);
        assert_eq!(screen.state.editing(), None);
        assert_eq!(screen.inputs[0].value(), "");
        assert_eq!(port.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_repeated_delete_is_sent_once() {
        let port = Arc::new(MockResourcePort::<Authors>::new(vec![author(1, "Orhan Pamuk")]));
        let (mut screen, _events) = authors_screen(port.clone()).await;

        screen.handle_action(Action::FocusPrevious);
        screen.handle_action(Action::DeleteSelected);
        screen.handle_action(Action::DeleteSelected);
        assert_eq!(screen.notice, Some(BUSY_NOTICE));

        screen.settle().await;

        let deletes = port
            .calls()
            .iter()
            .filter(|call| matches!(call, Call::Delete(_)))
            .count();
        assert_eq!(deletes, 1);
        assert!(screen.state.records().is_empty());
        assert_eq!(screen.notice, None);
        assert_eq!(screen.list_state.selected(), None);
    }

    #[tokio::test]
    async fn test_book_form_selects_reference_options() {
        let port = Arc::new(MockResourcePort::<Books>::new(Vec::<Book>::new()));
        let references = Arc::new(
            MockReferencePort::new()
                .with_options(
                    ResourceKind::Author,
                    vec![NamedRef::new(4, "Orhan Pamuk"), NamedRef::new(5, "Elif Shafak")],
                )
                .with_options(ResourceKind::Publisher, vec![NamedRef::new(2, "Faber")])
                .with_options(ResourceKind::Category, vec![NamedRef::new(9, "Novel")]),
        );
        let (events, _events_rx) = mpsc::unbounded_channel();
        let mut screen = ResourceScreen::<Books>::new(port, references, Theme::default(), events);
        screen.settle().await;

        for _ in 0..3 {
            screen.handle_action(Action::FocusNext);
        }
        screen.handle_action(Action::OptionPrevious);

        assert_eq!(screen.state.form().get("authorId"), "5");
        // Typing does nothing on a selection field.
        assert_eq!(
            screen.handle_input(&key(KeyCode::Char('x'))),
            EventResult::Ignored
        );
    }

    #[tokio::test]
    async fn test_insert_today_only_on_date_fields() {
        let port = Arc::new(MockResourcePort::<Authors>::new(Vec::new()));
        let (mut screen, _events) = authors_screen(port).await;

        screen.handle_action(Action::InsertToday);
        assert_eq!(screen.state.form().get("name"), "");

        screen.handle_action(Action::FocusNext);
        screen.handle_action(Action::InsertToday);
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(screen.state.form().get("birthDate"), today);
    }

    #[tokio::test]
    async fn test_render_shows_form_list_and_dialog() {
        let port = Arc::new(MockResourcePort::<Authors>::new(vec![author(1, "Orhan Pamuk")]));
        port.respond_to_delete(Ok(()));
        let (mut screen, _events) = authors_screen(port).await;
        screen.handle_action(Action::FocusPrevious);
        screen.handle_action(Action::DeleteSelected);
        screen.settle().await;

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| screen.render(frame, frame.area()))
            .unwrap();
        let output: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(output.contains("New author"));
        assert!(output.contains("Author Name *"));
        assert!(output.contains("Authors (0)"));
        assert!(output.contains("The author has been successfully deleted."));
    }
}
