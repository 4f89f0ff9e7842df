//! Deterministic turn scheduling for "Alien in the Machine".
//!
//! `aim-core` decides who acts next among actors with independent countdown
//! timers and variable-cost actions. It is a pure, synchronous library:
//! - [`state`] holds per-actor timers and the global clock
//! - [`scheduler`] is the turn-order state machine and the only state writer
//! - [`action`] maps action kinds plus modifiers to tick costs
//! - [`engine`] is the host-facing facade combining the two
//!
//! All state lives in an explicitly owned [`SchedulerState`]; there is no
//! global state, and every failure is returned to the caller as a typed error.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod scheduler;
pub mod snapshot;
pub mod state;

pub use action::{
    ActionCatalog, ActionCategory, ActionKind, ActionProfile, ActionRequest, CatalogError,
    CostModifiers, Situation,
};
pub use config::{CostRules, GameConfig, SkillDivisors};
pub use engine::{ExecuteError, ExecutionOutcome, TurnEngine};
pub use error::{CoreError, ErrorContext, ErrorSeverity};
pub use scheduler::{ActionOutcome, AdvanceReport, Scheduler, SchedulerPhase, TurnError};
pub use snapshot::{ActorSnapshot, SchedulerSnapshot};
pub use state::{
    ActorId, ActorTimer, SchedulerState, Speed, Tick, Timer, TimerError, TimerStore,
};
