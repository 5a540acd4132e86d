//! Content directory resolution
//!
//! Commands read `spells.ron` and `targeting.toml` from one directory. The
//! first of these that applies wins:
//! 1. `--data-dir` on the command line
//! 2. `SPELL_DATA_DIR` in the environment (or `.env`)
//! 3. The platform config directory, if it holds a `spells.ron`
//! 4. The data shipped with the `spell-content` crate

use std::path::{Path, PathBuf};

use anyhow::Result;
use spell_content::ContentFactory;

pub const DATA_DIR_ENV: &str = "SPELL_DATA_DIR";

/// Get the platform-specific config directory for spell content
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/spell-targeting`
/// - Linux: `~/.config/spell-targeting` (or `$XDG_CONFIG_HOME/spell-targeting`)
/// - Windows: `%APPDATA%\spell-targeting\config`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "spell-targeting")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Data directory bundled with the workspace.
pub fn shipped_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../game/content/data")
}

/// Resolve the content directory, honouring an explicit override.
pub fn data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return checked(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return checked(PathBuf::from(dir));
    }
    if let Some(dir) = config_dir()
        && dir.join(ContentFactory::CATALOG_FILE).exists()
    {
        return Ok(dir);
    }
    Ok(shipped_data_dir())
}

fn checked(dir: PathBuf) -> Result<PathBuf> {
    if !dir.is_dir() {
        anyhow::bail!("Data directory not found: {}", dir.display());
    }
    Ok(dir)
}
