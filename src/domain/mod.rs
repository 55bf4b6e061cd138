//! Domain layer with catalog entities, form schemas and port definitions.

/// Keyed in-memory record lists.
pub mod collection;
/// Confirmation dialog content.
pub mod confirmation;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Form schema and state.
pub mod form;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;
/// Resource kinds and the generic resource definition.
pub mod resource;
/// Navigation routes.
pub mod route;
/// Serde utilities.
pub mod serde_utils;

pub use collection::EntityList;
pub use confirmation::{ActionKind, Confirmation};
pub use entities::{EntityId, Identified};
pub use errors::{ApiError, FormError, ScreenError};
pub use form::{FieldKind, FieldSpec, FormState};
pub use ports::{ReferencePort, ResourcePort};
pub use resource::{ListEntry, ReferenceLoad, Resource, ResourceKind};
pub use route::Route;
