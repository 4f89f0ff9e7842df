//! Actor roster definitions.
//!
//! A roster is static session-setup data: who takes part, how fast each actor
//! is, and what each one does by default when a host loop auto-plays them.
//! Roster entries never appear in scheduler state; registering a roster
//! returns the mapping from allocated [`ActorId`]s back to entries.

use aim_core::{
    ActionKind, ActionRequest, ActorId, CostModifiers, Scheduler, Speed, Timer, TurnError,
};
use serde::{Deserialize, Serialize};

/// One actor as described in roster data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub speed: Speed,
    /// Starting timer. Falls back to the configured default stagger.
    #[serde(default)]
    pub stagger: Option<Timer>,
    /// Action taken when nobody supplies an explicit choice.
    pub default_action: ActionKind,
    #[serde(default)]
    pub modifiers: CostModifiers,
}

impl RosterEntry {
    /// The request this actor issues when left to its defaults.
    pub fn default_request(&self, actor: ActorId) -> ActionRequest {
        ActionRequest::new(actor, self.default_action).with_modifiers(self.modifiers)
    }
}

/// Ordered list of actors for a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers every entry in roster order, allocating fresh identifiers.
    ///
    /// Stops at the first rejected entry (e.g. a non-positive speed), so a
    /// bad roster never enters the simulation half-registered beyond that
    /// point.
    pub fn register_all(
        &self,
        scheduler: &mut Scheduler<'_>,
        default_stagger: Timer,
    ) -> Result<RosterBinding, TurnError> {
        let mut bound = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let stagger = entry.stagger.unwrap_or(default_stagger);
            let id = scheduler.spawn(entry.speed, Some(stagger))?;
            tracing::debug!(actor = %id, name = %entry.name, "roster entry registered");
            bound.push((id, entry.clone()));
        }
        Ok(RosterBinding { bound })
    }
}

/// Mapping from scheduler identifiers back to roster entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterBinding {
    bound: Vec<(ActorId, RosterEntry)>,
}

impl RosterBinding {
    pub fn get(&self, actor: ActorId) -> Option<&RosterEntry> {
        self.bound
            .iter()
            .find(|(id, _)| *id == actor)
            .map(|(_, entry)| entry)
    }

    pub fn name_of(&self, actor: ActorId) -> Option<&str> {
        self.get(actor).map(|entry| entry.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &RosterEntry)> {
        self.bound.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.bound.iter().map(|(id, _)| *id)
    }
}
