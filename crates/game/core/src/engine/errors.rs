//! Error types for the host-facing turn engine.

use crate::action::CatalogError;
use crate::error::{CoreError, ErrorContext, ErrorSeverity};
use crate::scheduler::TurnError;
use crate::state::TimerError;

/// Errors surfaced while serving a host request through [`TurnEngine`](super::TurnEngine).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ExecuteError {
    #[error("scheduling failed: {0}")]
    Turn(#[from] TurnError),

    #[error("cost resolution failed: {0}")]
    Catalog(#[from] CatalogError),
}

impl From<TimerError> for ExecuteError {
    fn from(error: TimerError) -> Self {
        Self::Turn(TurnError::Timer(error))
    }
}

impl ExecuteError {
    /// True when the caller should simply re-query the ready actor and retry.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::Turn(TurnError::ActorNotReady { .. }))
    }
}

impl CoreError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Turn(inner) => inner.severity(),
            Self::Catalog(inner) => inner.severity(),
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::Turn(inner) => inner.context(),
            Self::Catalog(inner) => inner.context(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Turn(inner) => inner.error_code(),
            Self::Catalog(inner) => inner.error_code(),
        }
    }
}
