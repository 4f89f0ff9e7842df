//! Authoritative scheduler state representation.
//!
//! [`SchedulerState`] is plain data owned by the host loop. It is mutated
//! exclusively through [`crate::Scheduler`], which borrows it for the
//! duration of each operation.
mod common;
mod timers;

pub use common::{ActorId, Speed, Tick, Timer};
pub use timers::{ActorTimer, TimerError, TimerStore};

/// Canonical in-memory state for one simulation session.
///
/// Deserializing rebuilds the state through the same checks as live
/// registration: the store rejects bad entries, the active actor is
/// recomputed, and the id counter is moved past every registered id.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "StateRecord"))]
pub struct SchedulerState {
    /// Per-actor timers in registration order.
    pub(crate) timers: TimerStore,

    /// Global clock; advances by exactly one per time-advance step.
    pub(crate) tick: Tick,

    /// Actor currently designated to act. When set, its timer is `<= 0`.
    pub(crate) active: Option<ActorId>,

    /// Sequential actor id allocator (monotonically increasing, never reused).
    /// `None` once the identifier space is exhausted.
    pub(crate) next_actor_id: Option<ActorId>,
}

impl SchedulerState {
    /// Creates an empty state at tick zero.
    pub fn new() -> Self {
        Self {
            timers: TimerStore::new(),
            tick: Tick::ZERO,
            active: None,
            next_actor_id: Some(ActorId(0)),
        }
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn active_actor(&self) -> Option<ActorId> {
        self.active
    }

    pub fn timers(&self) -> &TimerStore {
        &self.timers
    }

    /// The identifier `spawn` will hand out next, if any remain.
    pub fn peek_next_actor_id(&self) -> Option<ActorId> {
        self.next_actor_id
    }
}

impl Default for SchedulerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire form of [`SchedulerState`]. Derived fields are not trusted.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StateRecord {
    timers: TimerStore,
    tick: Tick,
    next_actor_id: Option<ActorId>,
}

#[cfg(feature = "serde")]
impl From<StateRecord> for SchedulerState {
    fn from(record: StateRecord) -> Self {
        let mut next_actor_id = record.next_actor_id;
        for id in record.timers.all_actor_ids() {
            if next_actor_id.is_some_and(|next| id >= next) {
                next_actor_id = id.checked_next();
            }
        }

        Self {
            active: crate::scheduler::select_next_ready(&record.timers),
            timers: record.timers,
            tick: record.tick,
            next_actor_id,
        }
    }
}
