//! Read-only views of scheduler state for presentation and logging layers.
//!
//! Snapshots are detached copies: they never alias the live state, so they
//! go stale after the next scheduler operation and must be re-taken.

use crate::scheduler::SchedulerPhase;
use crate::state::{ActorId, SchedulerState, Speed, Tick, Timer};

/// Per-actor row of a [`SchedulerSnapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorSnapshot {
    pub id: ActorId,
    pub timer: Timer,
    pub speed: Speed,
    pub is_active: bool,
}

impl ActorSnapshot {
    pub const fn is_ready(&self) -> bool {
        self.timer <= 0
    }
}

/// Immutable copy of everything the presentation layer may display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulerSnapshot {
    pub tick: Tick,
    pub phase: SchedulerPhase,
    pub active: Option<ActorId>,
    /// Actors in registration order.
    pub actors: Vec<ActorSnapshot>,
}

impl SchedulerSnapshot {
    pub fn from_state(state: &SchedulerState) -> Self {
        let active = state.active_actor();
        let actors = state
            .timers()
            .iter()
            .map(|entry| ActorSnapshot {
                id: entry.id,
                timer: entry.timer,
                speed: entry.speed,
                is_active: active == Some(entry.id),
            })
            .collect();

        Self {
            tick: state.tick(),
            phase: SchedulerPhase::from_active(active),
            active,
            actors,
        }
    }

    pub fn actor(&self, id: ActorId) -> Option<&ActorSnapshot> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    /// Actors whose timer is currently `<= 0`, in registration order.
    pub fn ready_actors(&self) -> impl Iterator<Item = &ActorSnapshot> {
        self.actors.iter().filter(|actor| actor.is_ready())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scheduler;

    #[test]
    fn snapshot_marks_only_active_actor() {
        let mut state = SchedulerState::new();
        let mut scheduler = Scheduler::new(&mut state);
        scheduler.register_with_timer(ActorId(1), 2, 3).unwrap();
        scheduler.register_with_timer(ActorId(2), 2, -1).unwrap();
        scheduler.register_with_timer(ActorId(3), 2, 0).unwrap();

        let snapshot = scheduler.snapshot();
        assert_eq!(snapshot.phase, SchedulerPhase::AwaitingActor);
        assert_eq!(snapshot.active, Some(ActorId(2)));
        assert_eq!(
            snapshot
                .actors
                .iter()
                .filter(|actor| actor.is_active)
                .map(|actor| actor.id)
                .collect::<Vec<_>>(),
            vec![ActorId(2)]
        );
        assert_eq!(
            snapshot.ready_actors().map(|a| a.id).collect::<Vec<_>>(),
            vec![ActorId(2), ActorId(3)]
        );
        assert_eq!(snapshot.actor(ActorId(1)).map(|a| a.timer), Some(3));
    }

    #[test]
    fn snapshot_is_detached_from_live_state() {
        let mut state = SchedulerState::new();
        let mut scheduler = Scheduler::new(&mut state);
        scheduler.register(ActorId(1), 4).unwrap();

        let before = scheduler.snapshot();
        scheduler.apply_action(ActorId(1), 9).unwrap();

        assert_eq!(before.actor(ActorId(1)).map(|a| a.timer), Some(0));
        assert_eq!(scheduler.snapshot().actor(ActorId(1)).map(|a| a.timer), Some(9));
        assert_eq!(scheduler.snapshot().phase, SchedulerPhase::NoOneReady);
    }
}
