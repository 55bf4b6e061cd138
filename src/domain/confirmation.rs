//! Confirmation dialog content for completed writes.

use crate::domain::resource::ResourceKind;

/// Kind of a successfully completed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ActionKind {
    Add,
    Update,
    Delete,
}

impl ActionKind {
    /// Dialog title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Add => "Added",
            Self::Update => "Updated",
            Self::Delete => "Deleted",
        }
    }

    /// Verb used in the dialog message.
    #[must_use]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Add => "added",
            Self::Update => "updated",
            Self::Delete => "deleted",
        }
    }
}

/// Title and message pair shown by the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// Short heading.
    pub title: String,
    /// Sentence naming what happened.
    pub message: String,
}

impl Confirmation {
    /// Creates a confirmation from its parts.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Builds the confirmation shown after an action on a collection.
    #[must_use]
    pub fn for_action(action: ActionKind, kind: ResourceKind) -> Self {
        Self::new(
            action.title(),
            format!(
                "The {} has been successfully {}.",
                kind.noun(),
                action.past_tense()
            ),
        )
    }
}
