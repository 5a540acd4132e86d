//! List catalog spells with their section and kind
//!
//! Handy when adding spells: shows which targeting rules a new definition
//! will be checked against.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde::Serialize;
use spell_content::ContentFactory;
use spell_core::{KindOfSpell, SpellBookSection};

use crate::dirs;

/// List every spell in the catalog with its kind
#[derive(Parser)]
pub struct Classify {
    /// Custom data directory (defaults to SPELL_DATA_DIR or the shipped data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Only list spells of this kind (e.g. UNIT_CURSES)
    #[arg(short, long, value_name = "KIND")]
    kind: Option<KindOfSpell>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Aligned columns
    Table,
    /// JSON array
    Json,
}

#[derive(Serialize)]
struct SpellRow {
    spell_id: String,
    section: SpellBookSection,
    kind: KindOfSpell,
}

impl Classify {
    pub fn execute(self) -> Result<()> {
        let data_dir = dirs::data_dir(self.data_dir)?;
        let database = ContentFactory::new(&data_dir)
            .load_database()
            .with_context(|| format!("Failed to load catalog from {}", data_dir.display()))?;

        let rows: Vec<SpellRow> = database
            .spells
            .values()
            .map(|spell| SpellRow {
                spell_id: spell.spell_id.to_string(),
                section: spell.section,
                kind: spell.kind(),
            })
            .filter(|row| self.kind.is_none_or(|kind| row.kind == kind))
            .collect();

        match self.format {
            OutputFormat::Table => print_table(&rows),
            OutputFormat::Json => print_json(&rows)?,
        }

        Ok(())
    }
}

fn print_table(rows: &[SpellRow]) {
    println!(
        "{:<8} {:<26} {}",
        style("SPELL").bold().cyan(),
        style("SECTION").bold().cyan(),
        style("KIND").bold().cyan()
    );
    for row in rows {
        println!("{:<8} {:<26} {}", row.spell_id, row.section, row.kind);
    }
    println!();
    println!("{} {}", style("Total:").bold().yellow(), rows.len());
}

fn print_json(rows: &[SpellRow]) -> Result<()> {
    let json = serde_json::to_string_pretty(rows).context("Failed to serialize spells to JSON")?;
    println!("{}", json);
    Ok(())
}
