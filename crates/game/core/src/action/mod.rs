//! Action identifiers, cost modifiers, and the catalog that prices them.
//!
//! Callers describe what an actor wants to do with an [`ActionRequest`]; the
//! [`ActionCatalog`] turns kind + modifiers into a tick cost, which the
//! scheduler then charges to the actor.
mod catalog;
mod kind;
mod modifiers;

pub use catalog::{ActionCatalog, ActionProfile, CatalogError, calculate_modified_cost};
pub use kind::{ActionCategory, ActionKind};
pub use modifiers::{CostModifiers, Situation};

use crate::state::ActorId;

/// A caller-supplied instruction naming an actor and what it does.
///
/// Consumed immediately by the engine and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRequest {
    pub actor: ActorId,
    pub action: ActionKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: CostModifiers,
}

impl ActionRequest {
    pub fn new(actor: ActorId, action: ActionKind) -> Self {
        Self {
            actor,
            action,
            modifiers: CostModifiers::NONE,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: CostModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
