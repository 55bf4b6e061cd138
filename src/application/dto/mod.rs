//! Data transfer objects for the application layer.

mod operation;

pub use operation::{
    Completed, LoadPart, LoadedData, Operation, OperationOutcome, OperationTarget, ReferenceOptions,
};
