//! Event types for different topics.

use aim_core::{ActionRequest, ActorId, AdvanceReport, ExecutionOutcome, Speed, Tick, Timer};
use serde::{Deserialize, Serialize};

/// Actors joining or leaving the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RosterEvent {
    ActorRegistered {
        actor: ActorId,
        speed: Speed,
        timer: Timer,
        tick: Tick,
    },
    ActorRemoved {
        actor: ActorId,
        /// Timer the actor held when it was removed.
        timer: Timer,
        tick: Tick,
    },
}

/// Outcomes of action requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionEvent {
    /// The cost was resolved and charged.
    ActionApplied {
        request: ActionRequest,
        execution: ExecutionOutcome,
        tick: Tick,
    },

    /// The request was rejected; scheduler state is unchanged.
    ActionRejected {
        request: ActionRequest,
        /// Stable code from [`aim_core::CoreError::error_code`].
        code: String,
        message: String,
        tick: Tick,
    },
}

/// Simulated time moving forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeEvent {
    TickAdvanced(AdvanceReport),
}
