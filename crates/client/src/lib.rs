//! Composition root for the `aim` binary.
//!
//! Loads content, registers the roster, starts the runtime, and auto-plays
//! every actor with its roster default action, rendering each step.

pub mod config;
pub mod logging;
pub mod render;
pub mod session;

pub use config::ClientConfig;
pub use render::Renderer;
pub use session::{PlaySummary, Session, load_content};
