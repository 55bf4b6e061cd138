//! Use case implementations.

mod resource_use_case;

pub use resource_use_case::ResourceUseCase;
