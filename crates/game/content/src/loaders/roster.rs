//! Actor roster loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::roster::{Roster, RosterEntry};

const EMBEDDED_ROSTER: &str = include_str!("../../data/roster/crew.ron");

/// Loader for actor rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `Vec<RosterEntry>`
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse roster RON at {}: {}", path.display(), e)
        })
    }

    /// Load the default crew bundled with the crate.
    pub fn embedded() -> LoadResult<Roster> {
        Self::parse(EMBEDDED_ROSTER)
    }

    /// Parses and validates a roster.
    ///
    /// Names must be unique and non-empty so hosts can address actors by name.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let entries: Vec<RosterEntry> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                anyhow::bail!("Roster entry {} has an empty name", index);
            }
            if entries[..index].iter().any(|other| other.name == entry.name) {
                anyhow::bail!("Roster entry '{}' appears more than once", entry.name);
            }
        }

        Ok(Roster::new(entries))
    }
}
