//! Resource kinds and the generic resource definition used by every screen.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::entities::Identified;
use crate::domain::errors::FormError;
use crate::domain::form::{FieldSpec, FormState};

/// One of the five independent catalog collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum ResourceKind {
    Author,
    Book,
    Publisher,
    Category,
    Borrowing,
}

/// Error sentences shown by a screen, one per failing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenMessages {
    /// The record list could not be fetched.
    pub load_failed: &'static str,
    /// Only the reference lists failed during an independent load.
    pub references_failed: &'static str,
    /// A create or update was rejected.
    pub save_failed: &'static str,
    /// A delete was rejected.
    pub delete_failed: &'static str,
}

/// How a screen's record list and reference lists are fetched together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceLoad {
    /// One failure fails the whole load.
    Joint,
    /// Each side succeeds or fails on its own.
    Independent,
}

impl ResourceKind {
    /// All kinds in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Book,
        Self::Author,
        Self::Publisher,
        Self::Category,
        Self::Borrowing,
    ];

    /// Collection segment under the API prefix.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Author => "authors",
            Self::Book => "books",
            Self::Publisher => "publishers",
            Self::Category => "categories",
            Self::Borrowing => "borrows",
        }
    }

    /// Screen heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Author => "Authors",
            Self::Book => "Books",
            Self::Publisher => "Publishers",
            Self::Category => "Categories",
            Self::Borrowing => "Borrowing",
        }
    }

    /// Singular noun used in confirmation messages.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Book => "book",
            Self::Publisher => "publisher",
            Self::Category => "category",
            Self::Borrowing => "borrowing record",
        }
    }

    /// Error sentences for this collection's screen.
    #[must_use]
    pub const fn messages(self) -> ScreenMessages {
        match self {
            Self::Author => ScreenMessages {
                load_failed: "Error fetching authors.",
                references_failed: "Error fetching authors.",
                save_failed: "An error occurred while saving the author.",
                delete_failed: "An error occurred while deleting the author.",
            },
            Self::Book => ScreenMessages {
                load_failed: "An error occurred while loading data.",
                references_failed: "An error occurred while loading data.",
                save_failed: "An error occurred while saving the book.",
                delete_failed: "An error occurred while deleting the book.",
            },
            Self::Publisher => ScreenMessages {
                load_failed: "Error fetching publishers.",
                references_failed: "Error fetching publishers.",
                save_failed: "An error occurred while registering a publisher.",
                delete_failed: "An error occurred while deleting the publisher.",
            },
            Self::Category => ScreenMessages {
                load_failed: "Error fetching categories.",
                references_failed: "Error fetching categories.",
                save_failed: "An error occurred while registering a category.",
                delete_failed: "An error occurred while deleting the category.",
            },
            Self::Borrowing => ScreenMessages {
                load_failed: "Error loading borrow records",
                references_failed: "Error loading books",
                save_failed: "Error processing borrowing",
                delete_failed: "Error deleting record",
            },
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// Rendered list row: a primary line plus labelled detail lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Primary line.
    pub title: String,
    /// `(label, value)` pairs shown under the title.
    pub details: Vec<(&'static str, String)>,
}

impl ListEntry {
    /// Creates a row with no details.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: Vec::new(),
        }
    }

    /// Appends a labelled detail line.
    #[must_use]
    pub fn detail(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.details.push((label, value.into()));
        self
    }
}

/// Everything a generic resource screen needs to know about one collection:
/// its records, write payload, form schema, and how to move between them.
pub trait Resource: Send + Sync + 'static {
    /// Read representation returned by the backend.
    type Entity: Identified + Clone + fmt::Debug + DeserializeOwned + Send + Sync + 'static;
    /// Write representation sent on create and update.
    type Payload: Serialize + Clone + fmt::Debug + Send + Sync + 'static;

    /// Collection this resource maps to.
    const KIND: ResourceKind;

    /// How the record list and reference lists are fetched together.
    const REFERENCE_LOAD: ReferenceLoad = ReferenceLoad::Joint;

    /// Form schema, in display order.
    fn fields() -> &'static [FieldSpec];

    /// Translates form text into the wire payload.
    ///
    /// # Errors
    /// Returns error if a field cannot be translated.
    fn to_payload(form: &FormState) -> Result<Self::Payload, FormError>;

    /// Projects a record back into form text for editing.
    fn to_form(entity: &Self::Entity) -> FormState;

    /// Renders a record for the list view.
    fn render(entity: &Self::Entity) -> ListEntry;

    /// Returns an empty form for this resource.
    #[must_use]
    fn empty_form() -> FormState {
        FormState::new(Self::fields())
    }

    /// Other collections whose records populate reference fields.
    #[must_use]
    fn references() -> Vec<ResourceKind> {
        let mut kinds: Vec<ResourceKind> = Self::fields()
            .iter()
            .filter_map(|field| field.kind.referenced_kind())
            .collect();
        kinds.dedup();
        kinds
    }
}
