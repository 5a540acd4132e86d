//! Targeting configuration loader.

use std::path::Path;

use spell_core::TargetingConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for targeting configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys left out of the file keep their [`TargetingConfig::default`] value.
    pub fn load(path: &Path) -> LoadResult<TargetingConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| e.context(format!("Failed to parse config {}", path.display())))
    }

    /// Parse config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<TargetingConfig> {
        let config: TargetingConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.resistance_roll_sides <= 0 {
            anyhow::bail!(
                "resistance_roll_sides must be positive, got {}",
                config.resistance_roll_sides
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ConfigLoader::parse("max_units_per_map_cell = 6\n").unwrap();

        assert_eq!(config.max_units_per_map_cell, 6);
        assert_eq!(
            config.resistance_roll_sides,
            TargetingConfig::DEFAULT_RESISTANCE_ROLL_SIDES
        );
    }

    #[test]
    fn rejects_non_positive_roll() {
        let err = ConfigLoader::parse("resistance_roll_sides = 0\n").unwrap_err();
        assert!(err.to_string().contains("resistance_roll_sides"));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(ConfigLoader::parse("max_units_per_map_cell = \"nine\"").is_err());
    }
}
