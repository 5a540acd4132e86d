//! Spell catalog loader.
//!
//! The catalog is a single RON file listing every record the targeting engine
//! looks up by id. Records are written as lists, so a repeated id is caught
//! here instead of silently overwriting an earlier entry.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use spell_core::SpellDefinition;
use spell_core::env::{
    BuildingDefinition, CitySpellEffectDefinition, CombatTileTypeDefinition, DamageTypeDefinition,
    DatabaseSnapshot, MagicRealmDefinition, MovementRuleTable, RangedAttackTypeDefinition,
    TileTypeDefinition, UnitDefinition,
};
use spell_core::state::UnitId;

use crate::loaders::{LoadResult, read_file};

/// On-disk layout of `spells.ron`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellCatalog {
    pub spells: Vec<SpellDefinition>,
    pub units: Vec<UnitDefinition>,
    pub tile_types: Vec<TileTypeDefinition>,
    pub combat_tile_types: Vec<CombatTileTypeDefinition>,
    pub damage_types: Vec<DamageTypeDefinition>,
    pub magic_realms: Vec<MagicRealmDefinition>,
    pub ranged_attack_types: Vec<RangedAttackTypeDefinition>,
    pub city_spell_effects: Vec<CitySpellEffectDefinition>,
    pub buildings: Vec<BuildingDefinition>,
    pub vortex_units: Vec<UnitId>,
    pub movement_rules: MovementRuleTable,
}

impl SpellCatalog {
    /// Parse a catalog from a RON string.
    pub fn parse(content: &str) -> LoadResult<Self> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell catalog RON: {}", e))
    }

    /// Index every record list by id, failing on the first repeated id.
    pub fn into_database(self) -> LoadResult<DatabaseSnapshot> {
        let database = DatabaseSnapshot {
            spells: index("spell", self.spells, |s| s.spell_id.clone())?,
            units: index("unit", self.units, |u| u.unit_id.clone())?,
            tile_types: index("tile type", self.tile_types, |t| t.tile_type_id.clone())?,
            combat_tile_types: index("combat tile type", self.combat_tile_types, |t| {
                t.combat_tile_type_id.clone()
            })?,
            damage_types: index(
                "damage type",
                self.damage_types,
                |d| d.damage_type_id.clone(),
            )?,
            magic_realms: index(
                "magic realm",
                self.magic_realms,
                |r| r.magic_realm_id.clone(),
            )?,
            ranged_attack_types: index("ranged attack type", self.ranged_attack_types, |r| {
                r.ranged_attack_type_id.clone()
            })?,
            city_spell_effects: index("city spell effect", self.city_spell_effects, |e| {
                e.city_spell_effect_id.clone()
            })?,
            buildings: index("building", self.buildings, |b| b.building_id.clone())?,
            vortex_units: self.vortex_units,
        };

        tracing::info!(
            spells = database.spells.len(),
            units = database.units.len(),
            tile_types = database.tile_types.len(),
            city_spell_effects = database.city_spell_effects.len(),
            "spell catalog indexed"
        );

        Ok(database)
    }
}

fn index<K, V>(
    record: &str,
    items: Vec<V>,
    key: impl Fn(&V) -> K,
) -> LoadResult<BTreeMap<K, V>>
where
    K: Ord + core::fmt::Display,
{
    let mut map = BTreeMap::new();
    for item in items {
        let id = key(&item);
        if map.contains_key(&id) {
            anyhow::bail!("Duplicate {} id {} in spell catalog", record, id);
        }
        map.insert(id, item);
    }
    Ok(map)
}

/// Loader for the spell catalog from RON files.
pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Load the raw catalog, movement rules included.
    pub fn load_catalog(path: &Path) -> LoadResult<SpellCatalog> {
        let content = read_file(path)?;
        SpellCatalog::parse(&content)
            .map_err(|e| e.context(format!("Failed to load catalog {}", path.display())))
    }

    /// Load the catalog and index it into a [`DatabaseSnapshot`].
    pub fn load(path: &Path) -> LoadResult<DatabaseSnapshot> {
        tracing::debug!(path = %path.display(), "loading spell catalog");
        Self::load_catalog(path)?.into_database()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spell_core::SpellBookSection;
    use spell_core::state::{SpellId, UnitSkillId};

    const SMALL_CATALOG: &str = r#"
SpellCatalog(
    spells: [
        (spell_id: "SP083", section: UNIT_CURSES, spell_realm: Some("MB02"), combat_base_damage: Some(2)),
    ],
    units: [
        (unit_id: "UN001", magic_realm: "LTN", skills: {"UA06": 4}),
    ],
    magic_realms: [
        (magic_realm_id: "LTN", heal_each_turn: true),
    ],
    movement_rules: [
        (tile_type_id: Some("TT12")),
        (double_movement: Some(2)),
    ],
)
"#;

    #[test]
    fn parses_partial_catalog() {
        let catalog = SpellCatalog::parse(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.movement_rules.rules().len(), 2);

        let database = catalog.into_database().unwrap();
        let spell = &database.spells[&SpellId::from("SP083")];
        assert_eq!(spell.section, SpellBookSection::UnitCurses);
        assert_eq!(spell.combat_base_damage, Some(2));
        let unit = &database.units[&UnitId::from("UN001")];
        assert_eq!(unit.skills[&UnitSkillId::from("UA06")], 4);
        assert!(database.tile_types.is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let catalog = SpellCatalog {
            spells: vec![
                SpellDefinition::new("SP001", SpellBookSection::Summoning),
                SpellDefinition::new("SP001", SpellBookSection::CityCurses),
            ],
            ..SpellCatalog::default()
        };

        let err = catalog.into_database().unwrap_err();
        assert!(err.to_string().contains("Duplicate spell id SP001"));
    }

    #[test]
    fn rejects_unknown_section() {
        let err = SpellCatalog::parse(r#"(spells: [(spell_id: "SP001", section: NECROMANCY)])"#)
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to parse spell catalog RON"));
    }
}
