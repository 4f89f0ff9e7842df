//! Errors surfaced by turn scheduling operations.

use crate::error::{CoreError, ErrorContext, ErrorSeverity};
use crate::state::{ActorId, Tick, Timer, TimerError};

/// Errors that can occur during turn operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TurnError {
    /// Timer store rejected the operation (duplicate, unknown, bad speed).
    #[error(transparent)]
    Timer(#[from] TimerError),

    /// The actor's timer is still positive; only ready actors may act.
    #[error("actor {actor} is not ready to act (timer {timer} > 0)")]
    ActorNotReady {
        actor: ActorId,
        timer: Timer,
        context: ErrorContext,
    },

    /// Every identifier `spawn` could allocate has been handed out.
    #[error("actor identifier space is exhausted")]
    IdsExhausted { context: ErrorContext },

    /// No actors are registered, so nobody can ever become ready.
    #[error("no actors are registered with the scheduler")]
    NoActors { context: ErrorContext },
}

impl TurnError {
    pub fn actor_not_ready(actor: ActorId, timer: Timer, tick: Tick) -> Self {
        Self::ActorNotReady {
            actor,
            timer,
            context: ErrorContext::new(tick)
                .with_actor(actor)
                .with_message("action requested before timer reached zero"),
        }
    }

    pub fn ids_exhausted(tick: Tick) -> Self {
        Self::IdsExhausted {
            context: ErrorContext::new(tick)
                .with_message("no identifier follows the highest one issued"),
        }
    }

    pub fn no_actors(tick: Tick) -> Self {
        Self::NoActors {
            context: ErrorContext::new(tick).with_message("timer store is empty"),
        }
    }
}

impl CoreError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Timer(inner) => inner.severity(),
            Self::ActorNotReady { .. } => ErrorSeverity::Recoverable,
            Self::IdsExhausted { .. } | Self::NoActors { .. } => ErrorSeverity::Validation,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::Timer(_) => None,
            Self::ActorNotReady { context, .. }
            | Self::IdsExhausted { context }
            | Self::NoActors { context } => Some(context),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Timer(inner) => inner.error_code(),
            Self::ActorNotReady { .. } => "TURN_ACTOR_NOT_READY",
            Self::IdsExhausted { .. } => "TURN_IDS_EXHAUSTED",
            Self::NoActors { .. } => "TURN_NO_ACTORS",
        }
    }
}
