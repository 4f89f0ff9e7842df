//! Content factory for assembling session content from data files.

use std::path::PathBuf;

use aim_core::{ActionCatalog, GameConfig};

use crate::loaders::{ActionCatalogLoader, ConfigLoader, LoadResult, RosterLoader};
use crate::roster::Roster;

/// Everything a host needs to start a session.
#[derive(Clone, Debug)]
pub struct Content {
    pub config: GameConfig,
    pub catalog: ActionCatalog,
    pub roster: Roster,
}

impl Content {
    /// Content compiled into the crate.
    pub fn embedded() -> LoadResult<Self> {
        let config = ConfigLoader::embedded()?;
        let catalog = ActionCatalogLoader::embedded(config.cost_rules)?;
        let roster = RosterLoader::embedded()?;
        Ok(Self {
            config,
            catalog,
            roster,
        })
    }
}

/// Content factory that loads all session content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── actions/
/// │   ├── basic.ron
/// │   └── movement.ron
/// └── roster/
///     └── crew.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the action catalog from `actions/*.ron`.
    pub fn load_catalog(&self, config: &GameConfig) -> LoadResult<ActionCatalog> {
        ActionCatalogLoader::load_dir(&self.data_dir.join("actions"), config.cost_rules)
    }

    /// Load the roster from `roster/crew.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        RosterLoader::load(&self.data_dir.join("roster").join("crew.ron"))
    }

    pub fn load_all(&self) -> LoadResult<Content> {
        let config = self.load_config()?;
        let catalog = self.load_catalog(&config)?;
        let roster = self.load_roster()?;
        Ok(Content {
            config,
            catalog,
            roster,
        })
    }
}
