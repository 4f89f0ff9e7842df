//! Game configuration loader.

use std::path::Path;

use aim_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_CONFIG: &str = include_str!("../../data/config.toml");

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config TOML at {}: {}", path.display(), e)
        })
    }

    /// Load the configuration bundled with the crate.
    pub fn embedded() -> LoadResult<GameConfig> {
        Self::parse(EMBEDDED_CONFIG)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use aim_core::CostRules;

    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = ConfigLoader::embedded().expect("embedded config should parse");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_keys() {
        let config = ConfigLoader::parse(
            r#"
            default_stagger = 3

            [cost_rules.skill_divisors]
            technical = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.default_stagger, 3);
        assert_eq!(config.cost_rules.skill_divisors.technical, 5);
        assert_eq!(config.cost_rules.skill_divisors.movement, 4);
        assert_eq!(
            config.cost_rules.impaired_penalty,
            CostRules::DEFAULT_IMPAIRED_PENALTY
        );
    }
}
