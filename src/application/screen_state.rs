//! Generic state machine behind every resource screen.

use std::collections::HashSet;

use tracing::debug;

use crate::application::dto::{
    Completed, LoadPart, LoadedData, Operation, OperationOutcome, OperationTarget,
    ReferenceOptions,
};
use crate::domain::collection::EntityList;
use crate::domain::confirmation::{ActionKind, Confirmation};
use crate::domain::entities::{EntityId, Identified};
use crate::domain::errors::{ApiError, FormError, ScreenError};
use crate::domain::form::FormState;
use crate::domain::resource::Resource;

/// Everything one resource screen holds between renders.
///
/// The state never performs I/O. Operations are prepared here, executed
/// elsewhere, and their outcomes fed back through [`Self::apply_outcome`].
/// Dialog and error are mutually exclusive overlays: a success shows the
/// dialog, a failure shows the error, and starting a new operation hides both.
#[derive(Debug)]
pub struct ResourceScreenState<R: Resource> {
    records: EntityList<R::Entity>,
    references: ReferenceOptions,
    form: FormState,
    editing: Option<EntityId>,
    last_action: Option<ActionKind>,
    error: Option<&'static str>,
    dialog_visible: bool,
    loading: bool,
    in_flight: HashSet<OperationTarget>,
}

impl<R: Resource> Default for ResourceScreenState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ResourceScreenState<R> {
    /// Creates an empty screen in create mode.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: EntityList::new(),
            references: ReferenceOptions::new(),
            form: R::empty_form(),
            editing: None,
            last_action: None,
            error: None,
            dialog_visible: false,
            loading: false,
            in_flight: HashSet::new(),
        }
    }

    /// Marks the initial load as outstanding.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Applies the result of the initial load.
    ///
    /// A failed load leaves every list empty and is not retried. A partly
    /// failed load keeps what arrived and shows the message of the failed side.
    pub fn apply_loaded(&mut self, result: Result<LoadedData<R>, ApiError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.records.replace_all(data.records);
                self.references = data.references;
                let messages = R::KIND.messages();
                self.error = data.failed.map(|part| match part {
                    LoadPart::Records => messages.load_failed,
                    LoadPart::References => messages.references_failed,
                });
            }
            Err(e) => {
                debug!(resource = %R::KIND, error = %e, "Load failed");
                self.records.clear();
                self.references.clear();
                self.error = Some(R::KIND.messages().load_failed);
            }
        }
    }

    /// Turns the form into a create or update request.
    ///
    /// # Errors
    /// Returns error if the target is busy, the form is incomplete, or a
    /// reference field names a record missing from its option list. A
    /// rejected form also shows the screen's save error.
    pub fn prepare_submit(&mut self) -> Result<Operation<R>, ScreenError> {
        let target = self
            .editing
            .map_or(OperationTarget::New, OperationTarget::Entity);
        self.ensure_idle(target)?;
        self.begin_operation();

        let payload = self
            .form
            .check_required()
            .and_then(|()| R::to_payload(&self.form))
            .and_then(|payload| self.check_references().map(|()| payload))
            .map_err(|e| {
                debug!(resource = %R::KIND, field = e.field(), "Form rejected");
                self.error = Some(R::KIND.messages().save_failed);
                ScreenError::from(e)
            })?;

        self.in_flight.insert(target);
        Ok(match self.editing {
            Some(id) => Operation::Update(id, payload),
            None => Operation::Create(payload),
        })
    }

    /// Turns a delete of a listed record into a request.
    ///
    /// # Errors
    /// Returns error if the record is not listed or is busy.
    pub fn prepare_delete(&mut self, id: EntityId) -> Result<Operation<R>, ScreenError> {
        if !self.records.contains(id) {
            return Err(ScreenError::UnknownEntity(id));
        }
        let target = OperationTarget::Entity(id);
        self.ensure_idle(target)?;
        self.begin_operation();
        self.in_flight.insert(target);
        Ok(Operation::Delete(id))
    }

    /// Loads a listed record into the form. No request is sent.
    ///
    /// # Errors
    /// Returns error if the record is not listed.
    pub fn begin_edit(&mut self, id: EntityId) -> Result<(), ScreenError> {
        let record = self.records.get(id).ok_or(ScreenError::UnknownEntity(id))?;
        self.form = R::to_form(record);
        self.editing = Some(id);
        Ok(())
    }

    /// Leaves edit mode and empties the form. No request is sent.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form.clear();
    }

    /// Merges the outcome of an operation into the screen and releases its
    /// in-flight guard.
    pub fn apply_outcome(&mut self, outcome: OperationOutcome<R>) {
        self.in_flight.remove(&outcome.target);

        let completed = match outcome.result {
            Ok(completed) => completed,
            Err(e) => {
                debug!(resource = %R::KIND, target = %outcome.target, error = %e, "Operation failed");
                let messages = R::KIND.messages();
                self.error = Some(match outcome.action {
                    ActionKind::Delete => messages.delete_failed,
                    ActionKind::Add | ActionKind::Update => messages.save_failed,
                });
                self.dialog_visible = false;
                self.last_action = None;
                return;
            }
        };

        match completed {
            Completed::Created(record) => {
                self.records.upsert(record);
                // An edit started while the create was in flight keeps its form.
                if self.editing.is_none() {
                    self.form.clear();
                }
            }
            Completed::Updated(record) => {
                let id = record.id();
                if !self.records.replace_existing(record) {
                    debug!(resource = %R::KIND, id = %id, "Updated record is no longer listed");
                }
                self.finish_editing(id);
            }
            Completed::Deleted(id) => {
                self.records.remove(id);
                self.finish_editing(id);
            }
        }

        self.last_action = Some(outcome.action);
        self.error = None;
        self.dialog_visible = true;
    }

    /// Hides the dialog and clears both overlays.
    pub fn close_dialog(&mut self) {
        self.dialog_visible = false;
        self.error = None;
        self.last_action = None;
    }

    /// Returns the dialog content while the dialog is shown.
    #[must_use]
    pub fn confirmation(&self) -> Option<Confirmation> {
        if !self.dialog_visible {
            return None;
        }
        self.last_action
            .map(|action| Confirmation::for_action(action, R::KIND))
    }

    /// Returns the listed records.
    #[must_use]
    pub const fn records(&self) -> &EntityList<R::Entity> {
        &self.records
    }

    /// Returns the options of every reference field.
    #[must_use]
    pub const fn references(&self) -> &ReferenceOptions {
        &self.references
    }

    /// Returns the form being edited.
    #[must_use]
    pub const fn form(&self) -> &FormState {
        &self.form
    }

    /// Returns the form for input.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Returns the record being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<EntityId> {
        self.editing
    }

    /// Returns the last action that succeeded.
    #[must_use]
    pub const fn last_action(&self) -> Option<ActionKind> {
        self.last_action
    }

    /// Returns the error sentence currently shown.
    #[must_use]
    pub const fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Returns whether the confirmation dialog is shown.
    #[must_use]
    pub const fn is_dialog_visible(&self) -> bool {
        self.dialog_visible
    }

    /// Returns whether the initial load is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns whether an operation on the target is outstanding.
    #[must_use]
    pub fn is_busy(&self, target: OperationTarget) -> bool {
        self.in_flight.contains(&target)
    }

    /// Returns the number of outstanding operations.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    fn check_references(&self) -> Result<(), FormError> {
        for (index, field) in self.form.fields().iter().enumerate() {
            let Some(kind) = field.kind.referenced_kind() else {
                continue;
            };
            let value = self.form.value_at(index).trim();
            if value.is_empty() {
                continue;
            }
            let listed = EntityId::parse(value).is_some_and(|id| self.references.contains(kind, id));
            if !listed {
                return Err(FormError::invalid_reference(field.key, value));
            }
        }
        Ok(())
    }

    fn ensure_idle(&self, target: OperationTarget) -> Result<(), ScreenError> {
        if self.is_busy(target) {
            debug!(resource = %R::KIND, target = %target, "Operation rejected, target busy");
            return Err(ScreenError::Busy);
        }
        Ok(())
    }

    fn begin_operation(&mut self) {
        self.error = None;
        self.dialog_visible = false;
    }

    fn finish_editing(&mut self, id: EntityId) {
        if self.editing == Some(id) {
            self.cancel_edit();
        }
    }
}
