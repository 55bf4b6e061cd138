//! Backend ports and their test doubles.

mod resource_port;

pub use resource_port::{CatalogPort, ReferencePort, ResourcePort};
