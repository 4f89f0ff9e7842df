//! Host-facing turn engine.
//!
//! [`TurnEngine`] bundles the scheduler state with the action catalog and
//! implements the requests a UI or game loop issues: register actors, ask who
//! acts next, request an action by kind, and advance time. Cost resolution
//! always happens before any mutation, so a rejected request leaves the state
//! untouched.

mod errors;

pub use errors::ExecuteError;

use tracing::debug;

use crate::action::{ActionCatalog, ActionKind, ActionRequest};
use crate::scheduler::{ActionOutcome, AdvanceReport, Scheduler, SchedulerPhase};
use crate::snapshot::SchedulerSnapshot;
use crate::state::{ActorId, ActorTimer, SchedulerState, Speed, Tick, Timer};

/// Complete outcome of a successful action request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// The action that was charged.
    pub action: ActionKind,
    /// Scheduler-level result (cost, timers, next active actor).
    pub outcome: ActionOutcome,
}

/// Turn engine that prices actions and drives the scheduler.
pub struct TurnEngine<'a> {
    state: &'a mut SchedulerState,
    catalog: &'a ActionCatalog,
}

impl<'a> TurnEngine<'a> {
    pub fn new(state: &'a mut SchedulerState, catalog: &'a ActionCatalog) -> Self {
        Self { state, catalog }
    }

    fn scheduler(&mut self) -> Scheduler<'_> {
        Scheduler::new(self.state)
    }

    pub fn tick(&self) -> Tick {
        self.state.tick()
    }

    pub fn active_actor(&self) -> Option<ActorId> {
        self.state.active_actor()
    }

    pub fn phase(&self) -> SchedulerPhase {
        SchedulerPhase::from_active(self.state.active_actor())
    }

    pub fn catalog(&self) -> &ActionCatalog {
        self.catalog
    }

    pub fn register(&mut self, actor: ActorId, speed: Speed) -> Result<(), ExecuteError> {
        Ok(self.scheduler().register(actor, speed)?)
    }

    pub fn register_with_timer(
        &mut self,
        actor: ActorId,
        speed: Speed,
        initial_timer: Timer,
    ) -> Result<(), ExecuteError> {
        Ok(self
            .scheduler()
            .register_with_timer(actor, speed, initial_timer)?)
    }

    pub fn spawn(&mut self, speed: Speed, stagger: Option<Timer>) -> Result<ActorId, ExecuteError> {
        Ok(self.scheduler().spawn(speed, stagger)?)
    }

    pub fn unregister(&mut self, actor: ActorId) -> Result<ActorTimer, ExecuteError> {
        Ok(self.scheduler().unregister(actor)?)
    }

    /// Returns the actor that should act now, or `None` if time must advance.
    pub fn next_actor(&mut self) -> Option<ActorId> {
        self.scheduler().find_next_eligible_actor()
    }

    /// Prices the requested action and charges it to the actor.
    pub fn request_action(
        &mut self,
        request: &ActionRequest,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let cost = self
            .catalog
            .modified_cost(request.action, &request.modifiers)?;

        debug!(
            actor = %request.actor,
            action = %request.action,
            skill = request.modifiers.skill_level,
            cost,
            "resolved action cost"
        );

        let outcome = self.scheduler().apply_action(request.actor, cost)?;
        Ok(ExecutionOutcome {
            action: request.action,
            outcome,
        })
    }

    /// Advances simulated time by exactly one tick.
    pub fn request_advance_time(&mut self) -> AdvanceReport {
        self.scheduler().advance_tick()
    }

    pub fn snapshot(&self) -> SchedulerSnapshot {
        SchedulerSnapshot::from_state(&*self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionCategory, ActionProfile, CostModifiers, Situation};
    use crate::config::CostRules;
    use crate::scheduler::TurnError;

    fn catalog() -> ActionCatalog {
        ActionCatalog::new(
            [
                ActionProfile::new(ActionKind::Move, ActionCategory::Movement, 3),
                ActionProfile::new(ActionKind::Repair, ActionCategory::Technical, 8),
            ],
            CostRules::default(),
        )
        .unwrap()
    }

    #[test]
    fn request_action_charges_modified_cost() {
        let catalog = catalog();
        let mut state = SchedulerState::new();
        let mut engine = TurnEngine::new(&mut state, &catalog);
        engine.register(ActorId(1), 2).unwrap();

        let request = ActionRequest::new(ActorId(1), ActionKind::Repair).with_modifiers(
            CostModifiers::with_skill(4).situation(Situation::PROPER_TOOLS),
        );
        let result = engine.request_action(&request).unwrap();

        // 8 - 4/2 = 6, then -2 for tools
        assert_eq!(result.outcome.cost, 4);
        assert_eq!(result.outcome.timer_after, 4);
        assert_eq!(engine.phase(), SchedulerPhase::NoOneReady);
    }

    #[test]
    fn unknown_action_leaves_state_untouched() {
        let catalog = catalog();
        let mut state = SchedulerState::new();
        let mut engine = TurnEngine::new(&mut state, &catalog);
        engine.register(ActorId(1), 2).unwrap();
        let before = engine.snapshot();

        let err = engine
            .request_action(&ActionRequest::new(ActorId(1), ActionKind::Hack))
            .unwrap_err();
        assert!(matches!(err, ExecuteError::Catalog(_)));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn not_ready_request_is_recoverable() {
        let catalog = catalog();
        let mut state = SchedulerState::new();
        let mut engine = TurnEngine::new(&mut state, &catalog);
        engine.register(ActorId(1), 1).unwrap();
        engine.register_with_timer(ActorId(2), 1, 5).unwrap();

        let err = engine
            .request_action(&ActionRequest::new(ActorId(2), ActionKind::Move))
            .unwrap_err();
        assert!(err.is_not_ready());
        assert!(matches!(
            err,
            ExecuteError::Turn(TurnError::ActorNotReady { timer: 5, .. })
        ));

        // Re-query and retry with the right actor.
        let ready = engine.next_actor().unwrap();
        assert_eq!(ready, ActorId(1));
        engine
            .request_action(&ActionRequest::new(ready, ActionKind::Move))
            .unwrap();
    }
}
