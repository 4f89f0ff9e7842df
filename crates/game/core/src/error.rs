//! Common error infrastructure for aim-core.
//!
//! Component-specific errors (`TimerError`, `TurnError`, `CatalogError`) live
//! next to the component they guard. This module provides the pieces they
//! share: a severity classification, a small debugging context, and the
//! [`CoreError`] trait that ties them together.

use crate::state::{ActorId, Tick};

/// Severity level of an error, used for logging priority and recovery.
///
/// - **Recoverable**: expected during interactive play, retry with another choice
/// - **Validation**: invalid input, reject without retry
/// - **Internal**: state inconsistency that points at a bug
/// - **Fatal**: scheduler state can no longer be trusted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - caller can re-query and pick a different actor.
    ///
    /// Examples: acting for an actor whose timer is still positive
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: duplicate actor id, non-positive speed, unknown action
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - scheduler state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Contextual information captured where an error is created.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorContext {
    /// Actor that triggered the error (if applicable).
    pub actor: Option<ActorId>,

    /// Scheduler clock at the time of error.
    pub tick: Tick,

    /// Optional static message providing additional context.
    pub message: Option<&'static str>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(tick: Tick) -> Self {
        Self {
            actor: None,
            tick,
            message: None,
        }
    }

    #[must_use]
    pub const fn with_actor(mut self, actor: ActorId) -> Self {
        self.actor = Some(actor);
        self
    }

    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

/// Common trait for all aim-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Include `ErrorContext` in variants raised from inside the scheduler
/// - Classify severity based on recoverability, not impact
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the context information for this error, if available.
    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Returns a stable string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
