//! Local rejections raised by a resource screen before any request is sent.

use thiserror::Error;

use super::FormError;
use crate::domain::entities::EntityId;

/// Reason a screen operation was not started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ScreenError {
    #[error("form is incomplete: {0}")]
    Form(#[from] FormError),

    #[error("another operation on this record is still in flight")]
    Busy,

    #[error("record {0} is not in the current list")]
    UnknownEntity(EntityId),
}
