//! Application layer with use cases, screen state and DTOs.

/// Data transfer objects.
pub mod dto;
/// Per-screen state machine.
pub mod screen_state;
/// Use case implementations.
pub mod use_cases;

pub use dto::{Completed, LoadPart, LoadedData, Operation, OperationOutcome, OperationTarget, ReferenceOptions};
pub use screen_state::ResourceScreenState;
pub use use_cases::ResourceUseCase;
