//! Public API surface for runtime consumers.

mod errors;
mod handle;
mod providers;

pub use errors::{Result, RuntimeError};
pub use handle::RuntimeHandle;
pub use providers::{ActionProvider, RosterActionProvider, WaitActionProvider};
