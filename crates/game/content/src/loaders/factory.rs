//! Content factory for building snapshots from data files.

use std::path::{Path, PathBuf};

use spell_core::TargetingConfig;
use spell_core::env::{DatabaseSnapshot, MovementRuleTable};

use crate::loaders::{ConfigLoader, DatabaseLoader, LoadResult};

/// Content factory that loads all spell content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── spells.ron
/// └── targeting.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CATALOG_FILE: &'static str = "spells.ron";
    pub const CONFIG_FILE: &'static str = "targeting.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the spell database from `spells.ron`.
    pub fn load_database(&self) -> LoadResult<DatabaseSnapshot> {
        DatabaseLoader::load(&self.catalog_path())
    }

    /// Load the movement rules from `spells.ron`.
    pub fn load_movement_rules(&self) -> LoadResult<MovementRuleTable> {
        let catalog = DatabaseLoader::load_catalog(&self.catalog_path())?;
        Ok(catalog.movement_rules)
    }

    /// Load targeting configuration from `targeting.toml`.
    ///
    /// A data directory without the file runs on default rules.
    pub fn load_config(&self) -> LoadResult<TargetingConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no targeting config, using defaults");
            return Ok(TargetingConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(Self::CATALOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.catalog_path(), Path::new("/tmp/data/spells.ron"));
    }

    #[test]
    fn missing_catalog_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load_database().unwrap_err();
        assert!(format!("{err:#}").contains("spells.ron"));
    }

    #[test]
    fn missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ContentFactory::new(dir.path()).load_config().unwrap();
        assert_eq!(config, TargetingConfig::default());
    }
}
