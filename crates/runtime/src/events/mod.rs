//! Topic-based event bus for runtime events.
//!
//! The simulation worker publishes one event per state change; observers
//! (UI, logging, tests) subscribe only to the topics they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{ActionEvent, RosterEvent, TimeEvent};
