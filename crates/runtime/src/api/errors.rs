//! Unified error types surfaced by the runtime API.
//!
//! Wraps engine rejections and worker coordination failures so clients can
//! bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use aim_core::{ActorId, ExecuteError, TurnError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error("runtime requires an action catalog before building")]
    MissingCatalog,

    #[error("action provider not set")]
    ProviderNotSet,

    #[error("action provider failed: {message}")]
    Provider { message: String },

    #[error("provider chose an action for {provided} while {expected} is ready")]
    InvalidActionActor {
        expected: ActorId,
        provided: ActorId,
    },

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

impl From<TurnError> for RuntimeError {
    fn from(error: TurnError) -> Self {
        Self::Execute(error.into())
    }
}

impl RuntimeError {
    /// True when the request raced another caller and can simply be retried.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::Execute(inner) if inner.is_not_ready())
    }
}
