//! Check the spell catalog and targeting config
//!
//! Loads both files the way the engine would and reports every dangling
//! reference. Exits non-zero when anything is wrong, so it can gate CI.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use spell_content::{ContentFactory, validate_catalog};

use crate::dirs;

/// Check the catalog for dangling references
#[derive(Parser)]
pub struct Validate {
    /// Custom data directory (defaults to SPELL_DATA_DIR or the shipped data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Validate {
    pub fn execute(self) -> Result<()> {
        let data_dir = dirs::data_dir(self.data_dir)?;
        let factory = ContentFactory::new(&data_dir);

        let database = factory
            .load_database()
            .with_context(|| format!("Failed to load catalog from {}", data_dir.display()))?;
        let rules = factory.load_movement_rules()?;
        let config = factory.load_config()?;

        println!("{} {}", style("Data:").bold().cyan(), data_dir.display());
        println!(
            "{} {} spells, {} units, {} movement rules",
            style("Catalog:").bold().cyan(),
            database.spells.len(),
            database.units.len(),
            rules.rules().len()
        );
        println!("{} {:?}", style("Config:").bold().cyan(), config);
        println!();

        let issues = validate_catalog(&database);
        if issues.is_empty() {
            println!("{}", style("Catalog is consistent").bold().green());
            return Ok(());
        }

        for issue in &issues {
            println!("  {} {}", style("✗").red(), issue);
        }
        anyhow::bail!("{} catalog issue(s) found", issues.len())
    }
}
