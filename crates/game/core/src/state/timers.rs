//! Per-actor timer/speed storage.
//!
//! The store is a leaf data structure: it validates registration input and
//! keeps entries in registration order, which the scheduler relies on for
//! deterministic tie-breaking. Only the scheduler writes timers.

use super::{ActorId, Speed, Timer};
use crate::error::{CoreError, ErrorSeverity};

/// Countdown state tracked for a single actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTimer {
    pub id: ActorId,
    /// Remaining delay before the actor may act. `<= 0` means ready.
    pub timer: Timer,
    /// Amount subtracted from `timer` on every advance step.
    pub speed: Speed,
}

impl ActorTimer {
    #[inline]
    pub const fn is_ready(&self) -> bool {
        self.timer <= 0
    }
}

/// Registration-ordered collection of actor timers.
///
/// Serialized as a plain list. Deserializing registers each entry in turn,
/// so a list with a duplicate id or a non-positive speed is rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<ActorTimer>", into = "Vec<ActorTimer>")
)]
pub struct TimerStore {
    entries: Vec<ActorTimer>,
}

impl TimerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an actor with the given speed and starting timer.
    ///
    /// Rejects duplicate identifiers and non-positive speeds; on failure the
    /// store is left untouched.
    pub fn register(
        &mut self,
        id: ActorId,
        speed: Speed,
        initial_timer: Timer,
    ) -> Result<(), TimerError> {
        if speed <= 0 {
            return Err(TimerError::InvalidSpeed { actor: id, speed });
        }
        if self.contains(id) {
            return Err(TimerError::DuplicateActor { actor: id });
        }

        self.entries.push(ActorTimer {
            id,
            timer: initial_timer,
            speed,
        });
        Ok(())
    }

    /// Removes an actor, returning its final timer state.
    ///
    /// The relative order of the remaining actors is preserved.
    pub fn unregister(&mut self, id: ActorId) -> Result<ActorTimer, TimerError> {
        let index = self.position(id)?;
        Ok(self.entries.remove(index))
    }

    /// Returns `(timer, speed)` for a registered actor.
    pub fn get(&self, id: ActorId) -> Result<(Timer, Speed), TimerError> {
        self.entry(id).map(|entry| (entry.timer, entry.speed))
    }

    /// Returns the full entry for a registered actor.
    pub fn entry(&self, id: ActorId) -> Result<&ActorTimer, TimerError> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .ok_or(TimerError::UnknownActor { actor: id })
    }

    /// Overwrites an actor's timer. Reserved for the scheduler.
    pub(crate) fn set_timer(&mut self, id: ActorId, timer: Timer) -> Result<(), TimerError> {
        let index = self.position(id)?;
        self.entries[index].timer = timer;
        Ok(())
    }

    /// Identifiers of all registered actors, in registration order.
    ///
    /// The iterator is `Clone`, so a consumer can restart it without
    /// re-borrowing the store.
    pub fn all_actor_ids(&self) -> impl Iterator<Item = ActorId> + Clone + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ActorTimer> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, ActorTimer> {
        self.entries.iter_mut()
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: ActorId) -> Result<usize, TimerError> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(TimerError::UnknownActor { actor: id })
    }
}

impl<'a> IntoIterator for &'a TimerStore {
    type Item = &'a ActorTimer;
    type IntoIter = std::slice::Iter<'a, ActorTimer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<ActorTimer>> for TimerStore {
    type Error = TimerError;

    fn try_from(entries: Vec<ActorTimer>) -> Result<Self, Self::Error> {
        let mut store = Self::new();
        for entry in entries {
            store.register(entry.id, entry.speed, entry.timer)?;
        }
        Ok(store)
    }
}

impl From<TimerStore> for Vec<ActorTimer> {
    fn from(store: TimerStore) -> Self {
        store.entries
    }
}

/// Errors raised by [`TimerStore`] operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerError {
    #[error("actor {actor} is already registered")]
    DuplicateActor { actor: ActorId },

    #[error("actor {actor} is not registered")]
    UnknownActor { actor: ActorId },

    #[error("actor {actor} has invalid speed {speed} (must be positive)")]
    InvalidSpeed { actor: ActorId, speed: Speed },
}

impl TimerError {
    /// The actor the failed operation referred to.
    pub fn actor(&self) -> ActorId {
        match self {
            Self::DuplicateActor { actor }
            | Self::UnknownActor { actor }
            | Self::InvalidSpeed { actor, .. } => *actor,
        }
    }
}

impl CoreError for TimerError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateActor { .. } => "TIMER_DUPLICATE_ACTOR",
            Self::UnknownActor { .. } => "TIMER_UNKNOWN_ACTOR",
            Self::InvalidSpeed { .. } => "TIMER_INVALID_SPEED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(ids: &[u32]) -> TimerStore {
        let mut store = TimerStore::new();
        for &id in ids {
            store.register(ActorId(id), 1, 0).unwrap();
        }
        store
    }

    #[test]
    fn register_rejects_duplicates_without_mutation() {
        let mut store = TimerStore::new();
        store.register(ActorId(1), 4, 3).unwrap();

        let err = store.register(ActorId(1), 9, 0).unwrap_err();
        assert_eq!(err, TimerError::DuplicateActor { actor: ActorId(1) });
        assert_eq!(store.get(ActorId(1)), Ok((3, 4)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn register_rejects_non_positive_speed() {
        let mut store = TimerStore::new();

        for speed in [0, -1, -40] {
            let err = store.register(ActorId(7), speed, 0).unwrap_err();
            assert_eq!(err, TimerError::InvalidSpeed {
                actor: ActorId(7),
                speed
            });
        }
        assert!(store.is_empty());
    }

    #[test]
    fn unregister_preserves_registration_order() {
        let mut store = store_with(&[5, 2, 9, 1]);

        let removed = store.unregister(ActorId(2)).unwrap();
        assert_eq!(removed.id, ActorId(2));

        let ids: Vec<_> = store.all_actor_ids().collect();
        assert_eq!(ids, vec![ActorId(5), ActorId(9), ActorId(1)]);
    }

    #[test]
    fn unknown_actor_is_reported() {
        let mut store = store_with(&[1]);

        assert_eq!(
            store.get(ActorId(3)),
            Err(TimerError::UnknownActor { actor: ActorId(3) })
        );
        assert_eq!(
            store.unregister(ActorId(3)),
            Err(TimerError::UnknownActor { actor: ActorId(3) })
        );
        assert_eq!(
            store.set_timer(ActorId(3), 10),
            Err(TimerError::UnknownActor { actor: ActorId(3) })
        );
    }

    #[test]
    fn actor_id_iterator_is_restartable() {
        let store = store_with(&[3, 1, 2]);
        let ids = store.all_actor_ids();

        let first: Vec<_> = ids.clone().collect();
        let second: Vec<_> = ids.collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![ActorId(3), ActorId(1), ActorId(2)]);
    }
}
