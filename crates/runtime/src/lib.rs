//! Single-writer async runtime for the turn scheduler.
//!
//! The scheduler core is synchronous and assumes one logical caller. This
//! crate provides that caller: a worker task owns the [`aim_core::SchedulerState`]
//! and the action catalog, and every [`RuntimeHandle`] clone funnels its
//! requests through one command channel, so concurrent callers are applied
//! strictly in arrival order.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus for observers
//! - [`workers`] keeps the background task internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{
    ActionProvider, Result, RosterActionProvider, RuntimeError, RuntimeHandle,
    WaitActionProvider,
};
pub use events::{ActionEvent, Event, EventBus, RosterEvent, TimeEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig, StepOutcome};
