//! Content loaders for reading spell data from files.
//!
//! Each loader turns one RON or TOML file into the snapshot or config type
//! spell-core evaluates against.

pub mod catalog;
pub mod config;
pub mod factory;

pub use catalog::{DatabaseLoader, SpellCatalog};
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))
}
