//! Tick-based turn scheduling.
//!
//! The [`Scheduler`] is the only writer of [`SchedulerState`]. Each actor
//! carries a countdown timer and a speed. Actors whose timer is `<= 0` are
//! ready; among them the most overdue (lowest timer) acts first, with exact
//! ties going to the earliest-registered actor. When nobody is ready the
//! caller advances time by one tick, which subtracts every actor's speed
//! from its timer. Acting adds the action's cost on top of the current
//! timer, so an overdue actor keeps the readiness it banked.

mod errors;

pub use errors::TurnError;

use tracing::{debug, trace, warn};

use crate::snapshot::SchedulerSnapshot;
use crate::state::{
    ActorId, ActorTimer, SchedulerState, Speed, Tick, Timer, TimerError, TimerStore,
};

/// Coarse state of the turn-order machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchedulerPhase {
    /// Someone is ready and has been designated active.
    AwaitingActor,
    /// Every actor's timer is positive; time must advance.
    NoOneReady,
}

impl SchedulerPhase {
    /// Phase implied by the designated active actor.
    pub const fn from_active(active: Option<ActorId>) -> Self {
        match active {
            Some(_) => Self::AwaitingActor,
            None => Self::NoOneReady,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingActor => "awaiting_actor",
            Self::NoOneReady => "no_one_ready",
        }
    }
}

/// Result of a single [`Scheduler::advance_tick`] step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvanceReport {
    /// Clock value after the step.
    pub tick: Tick,
    /// Actors whose timer crossed from `> 0` to `<= 0` during this step,
    /// in registration order. Informational only.
    pub newly_ready: Vec<ActorId>,
    /// Active actor after the step.
    pub active: Option<ActorId>,
}

/// Result of [`Scheduler::apply_action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub actor: ActorId,
    pub cost: u32,
    pub timer_before: Timer,
    pub timer_after: Timer,
    /// Active actor after the cost was applied.
    pub next_active: Option<ActorId>,
}

/// Turn-order state machine operating on a borrowed [`SchedulerState`].
pub struct Scheduler<'a> {
    state: &'a mut SchedulerState,
}

impl<'a> Scheduler<'a> {
    pub fn new(state: &'a mut SchedulerState) -> Self {
        Self { state }
    }

    /// Returns the current clock value.
    pub fn tick(&self) -> Tick {
        self.state.tick
    }

    /// Returns the currently designated actor, if any.
    pub fn active_actor(&self) -> Option<ActorId> {
        self.state.active
    }

    pub fn phase(&self) -> SchedulerPhase {
        SchedulerPhase::from_active(self.state.active)
    }

    pub fn timers(&self) -> &TimerStore {
        &self.state.timers
    }

    /// Registers an actor that is immediately ready (timer 0).
    pub fn register(&mut self, actor: ActorId, speed: Speed) -> Result<(), TurnError> {
        self.register_with_timer(actor, speed, 0)
    }

    /// Registers an actor with an explicit starting timer (stagger).
    pub fn register_with_timer(
        &mut self,
        actor: ActorId,
        speed: Speed,
        initial_timer: Timer,
    ) -> Result<(), TurnError> {
        self.state.timers.register(actor, speed, initial_timer)?;

        if self.state.next_actor_id.is_some_and(|next| actor >= next) {
            self.state.next_actor_id = actor.checked_next();
        }

        debug!(%actor, speed, timer = initial_timer, "actor registered");
        self.refresh_active();
        Ok(())
    }

    /// Registers an actor under a freshly allocated identifier.
    ///
    /// Identifiers come from a monotonic counter and are never reused within
    /// the session, including after the actor is removed.
    pub fn spawn(&mut self, speed: Speed, stagger: Option<Timer>) -> Result<ActorId, TurnError> {
        let actor = self
            .state
            .next_actor_id
            .ok_or_else(|| TurnError::ids_exhausted(self.state.tick))?;
        self.register_with_timer(actor, speed, stagger.unwrap_or(0))?;
        Ok(actor)
    }

    /// Removes an actor from all future eligibility checks.
    pub fn unregister(&mut self, actor: ActorId) -> Result<ActorTimer, TurnError> {
        let removed = self
            .state
            .timers
            .unregister(actor)
            .map_err(|e| self.report_timer_error(e))?;

        debug!(%actor, timer = removed.timer, "actor unregistered");
        if self.state.active == Some(actor) {
            self.refresh_active();
        }
        Ok(removed)
    }

    /// Selects the most overdue ready actor and designates it active.
    ///
    /// Returns `None` when no actor has a timer `<= 0`; the caller should
    /// then call [`Scheduler::advance_tick`].
    pub fn find_next_eligible_actor(&mut self) -> Option<ActorId> {
        self.refresh_active()
    }

    /// Advances the clock by exactly one tick.
    ///
    /// Every registered actor's timer decreases by its speed. The returned
    /// report lists the actors that became ready during this step.
    pub fn advance_tick(&mut self) -> AdvanceReport {
        let mut newly_ready = Vec::new();

        for entry in self.state.timers.iter_mut() {
            let before = entry.timer;
            entry.timer = before.saturating_sub(entry.speed);
            if before > 0 && entry.timer <= 0 {
                newly_ready.push(entry.id);
            }
        }

        self.state.tick = self.state.tick.succ();
        let active = self.refresh_active();

        debug!(
            tick = self.state.tick.0,
            newly_ready = newly_ready.len(),
            active = ?active,
            "tick advanced"
        );

        AdvanceReport {
            tick: self.state.tick,
            newly_ready,
            active,
        }
    }

    /// Repeatedly advances one tick at a time until someone is ready.
    ///
    /// Each step is a full [`Scheduler::advance_tick`] call. Stops after
    /// `limit` steps even if nobody became ready. Returns the per-step
    /// reports (empty when an actor was already ready).
    pub fn advance_until_ready(&mut self, limit: u64) -> Result<Vec<AdvanceReport>, TurnError> {
        if self.state.timers.is_empty() {
            return Err(TurnError::no_actors(self.state.tick));
        }

        let mut reports = Vec::new();
        if self.refresh_active().is_some() {
            return Ok(reports);
        }

        for _ in 0..limit {
            let report = self.advance_tick();
            let ready = report.active.is_some();
            reports.push(report);
            if ready {
                break;
            }
        }
        Ok(reports)
    }

    /// Applies the tick cost of an action taken by a ready actor.
    ///
    /// The cost is added to the actor's current timer rather than replacing
    /// it. Fails without mutating state when the actor is unknown or its
    /// timer is still positive.
    pub fn apply_action(&mut self, actor: ActorId, cost: u32) -> Result<ActionOutcome, TurnError> {
        let (timer_before, _) = self
            .state
            .timers
            .get(actor)
            .map_err(|e| self.report_timer_error(e))?;

        if timer_before > 0 {
            debug!(%actor, timer = timer_before, "action rejected: actor not ready");
            return Err(TurnError::actor_not_ready(
                actor,
                timer_before,
                self.state.tick,
            ));
        }

        let timer_after = timer_before.saturating_add(i64::from(cost));
        self.state.timers.set_timer(actor, timer_after)?;
        let next_active = self.refresh_active();

        debug!(
            %actor,
            cost,
            timer_before,
            timer_after,
            next = ?next_active,
            "action cost applied"
        );

        Ok(ActionOutcome {
            actor,
            cost,
            timer_before,
            timer_after,
            next_active,
        })
    }

    /// Read-only view of the current state for presentation layers.
    pub fn snapshot(&self) -> SchedulerSnapshot {
        SchedulerSnapshot::from_state(&*self.state)
    }

    /// Recomputes the active actor from the current timers.
    fn refresh_active(&mut self) -> Option<ActorId> {
        let next = select_next_ready(&self.state.timers);
        if next != self.state.active {
            trace!(previous = ?self.state.active, next = ?next, "active actor changed");
        }
        self.state.active = next;
        next
    }

    fn report_timer_error(&self, error: TimerError) -> TurnError {
        if let TimerError::UnknownActor { actor } = error {
            warn!(%actor, tick = self.state.tick.0, "operation on unknown actor (stale id?)");
        }
        TurnError::Timer(error)
    }
}

/// Picks the ready actor with the lowest timer; ties go to registration order.
pub(crate) fn select_next_ready(timers: &TimerStore) -> Option<ActorId> {
    timers
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_ready())
        .min_by_key(|(order, entry)| (entry.timer, *order))
        .map(|(_, entry)| entry.id)
}
