use insights_core::{Insight, ValidationError, FAILED_TO_DELETE_INSIGHT, INSIGHT_NOT_FOUND};

/// Result of a create request that reached the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Row persisted and read back.
    Created(Insight),
    /// Payload rejected before touching the store.
    Invalid(ValidationError),
}

/// Terminal state of a delete request.
///
/// `Start -> Exists? -> {NotFound | Deleted | RaceLost}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Nothing with that id existed when checked.
    NotFound,
    /// The row existed at check time but the delete removed nothing, most
    /// likely because a concurrent request deleted it first.
    RaceLost,
}

impl DeleteOutcome {
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Deleted)
    }

    #[must_use]
    pub fn is_not_found(self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Message for failed outcomes, `None` on success.
    #[must_use]
    pub fn error_message(self) -> Option<&'static str> {
        match self {
            Self::Deleted => None,
            Self::NotFound => Some(INSIGHT_NOT_FOUND),
            Self::RaceLost => Some(FAILED_TO_DELETE_INSIGHT),
        }
    }
}
