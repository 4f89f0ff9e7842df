//! Data-driven content definitions and loaders.
//!
//! This crate houses static session content and provides loaders for
//! RON/TOML data files:
//! - Action catalog (data-driven via RON, one file per category)
//! - Actor roster (data-driven via RON)
//! - Game configuration and cost rules (data-driven via TOML)
//!
//! Content is consumed by hosts at session setup and never appears in
//! scheduler state. Defaults are embedded from `data/` at compile time.

pub mod loaders;
pub mod roster;

pub use loaders::{
    ActionCatalogLoader, ConfigLoader, Content, ContentFactory, LoadResult, RosterLoader,
};
pub use roster::{Roster, RosterBinding, RosterEntry};
