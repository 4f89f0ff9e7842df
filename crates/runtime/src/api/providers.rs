//! Asynchronous abstraction for sourcing actor intent.
//!
//! Runtime users plug in [`ActionProvider`] implementations so the
//! simulation can run with human input, scripted fixtures, or roster
//! defaults.
use async_trait::async_trait;

use aim_content::RosterBinding;
use aim_core::{ActionKind, ActionRequest, ActorId, SchedulerSnapshot};

use super::errors::Result;

/// Trait for choosing what the ready actor does.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - Scripted/replayed actions
/// - Testing fixtures
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Provide an action for `actor`, which the scheduler has just selected.
    ///
    /// The returned request must name `actor`.
    async fn provide_action(
        &self,
        actor: ActorId,
        snapshot: &SchedulerSnapshot,
    ) -> Result<ActionRequest>;
}

/// A simple action provider that always returns Wait action.
/// Useful for testing or as a fallback.
pub struct WaitActionProvider;

#[async_trait]
impl ActionProvider for WaitActionProvider {
    async fn provide_action(
        &self,
        actor: ActorId,
        _snapshot: &SchedulerSnapshot,
    ) -> Result<ActionRequest> {
        Ok(ActionRequest::new(actor, ActionKind::Wait))
    }
}

/// Plays every actor with the default action and modifiers from its roster
/// entry. Actors that are not in the roster wait.
pub struct RosterActionProvider {
    binding: RosterBinding,
}

impl RosterActionProvider {
    pub fn new(binding: RosterBinding) -> Self {
        Self { binding }
    }

    pub fn binding(&self) -> &RosterBinding {
        &self.binding
    }
}

#[async_trait]
impl ActionProvider for RosterActionProvider {
    async fn provide_action(
        &self,
        actor: ActorId,
        _snapshot: &SchedulerSnapshot,
    ) -> Result<ActionRequest> {
        let request = match self.binding.get(actor) {
            Some(entry) => entry.default_request(actor),
            None => {
                tracing::debug!(%actor, "actor missing from roster, waiting");
                ActionRequest::new(actor, ActionKind::Wait)
            }
        };
        Ok(request)
    }
}
