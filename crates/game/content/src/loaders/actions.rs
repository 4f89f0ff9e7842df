//! Action catalog loader.
//!
//! Loads action profiles from RON data files and pairs them with the
//! configured cost rules.

use std::path::Path;

use aim_core::{ActionCatalog, ActionProfile, CostRules};

use crate::loaders::{LoadResult, read_file};

/// Embedded profile files, grouped by category.
const EMBEDDED_PROFILES: [(&str, &str); 5] = [
    ("basic.ron", include_str!("../../data/actions/basic.ron")),
    ("movement.ron", include_str!("../../data/actions/movement.ron")),
    ("combat.ron", include_str!("../../data/actions/combat.ron")),
    ("technical.ron", include_str!("../../data/actions/technical.ron")),
    ("medical.ron", include_str!("../../data/actions/medical.ron")),
];

/// Loader for the action catalog.
pub struct ActionCatalogLoader;

impl ActionCatalogLoader {
    /// Loads the catalog bundled with the crate.
    pub fn embedded(rules: CostRules) -> LoadResult<ActionCatalog> {
        let mut profiles = Vec::new();
        for (name, content) in EMBEDDED_PROFILES {
            let parsed = Self::parse(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", name, e))?;
            profiles.extend(parsed);
        }
        Self::build(profiles, rules)
    }

    /// Loads every `*.ron` file in a directory as one catalog.
    ///
    /// Files are read in name order so duplicate detection is deterministic.
    pub fn load_dir(dir: &Path, rules: CostRules) -> LoadResult<ActionCatalog> {
        let mut paths = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                anyhow::anyhow!("Failed to list entries of {}: {}", dir.display(), e)
            })?;
        paths.retain(|path| path.extension().is_some_and(|ext| ext == "ron"));
        paths.sort();

        let mut profiles = Vec::new();
        for path in &paths {
            profiles.extend(Self::load_profiles(path)?);
        }
        Self::build(profiles, rules)
    }

    /// Loads a single RON file as a catalog.
    pub fn load(path: &Path, rules: CostRules) -> LoadResult<ActionCatalog> {
        Self::build(Self::load_profiles(path)?, rules)
    }

    /// Reads the raw profiles from one RON file.
    ///
    /// RON format: `Vec<ActionProfile>`
    pub fn load_profiles(path: &Path) -> LoadResult<Vec<ActionProfile>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse action RON at {}: {}", path.display(), e)
        })
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ActionProfile>> {
        let profiles: Vec<ActionProfile> = ron::from_str(content)?;
        Ok(profiles)
    }

    fn build(profiles: Vec<ActionProfile>, rules: CostRules) -> LoadResult<ActionCatalog> {
        ActionCatalog::new(profiles, rules)
            .map_err(|e| anyhow::anyhow!("Invalid action catalog: {}", e))
    }
}
