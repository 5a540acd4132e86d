//! Cross-reference checks over a loaded spell database.
//!
//! Loading only proves each record parses. A spell that names a summoned unit
//! or a city effect the database lacks still loads, and then fails with
//! [`OracleError`](spell_core::OracleError) the first time a query follows
//! that reference. [`validate_catalog`] finds those references up front.

use spell_core::env::DatabaseSnapshot;
use spell_core::state::{RangedAttackTypeId, SpellId, UnitId};

/// One dangling reference in the spell database.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogIssue {
    #[error("spell {spell} summons unknown unit {unit}")]
    UnknownSummonedUnit { spell: SpellId, unit: UnitId },

    #[error("spell {spell} creates unknown building {building}")]
    UnknownBuilding { spell: SpellId, building: String },

    #[error("spell {spell} grants unknown city spell effect {effect}")]
    UnknownCitySpellEffect { spell: SpellId, effect: String },

    #[error("spell {spell} refers to unknown tile type {tile_type}")]
    UnknownTileType { spell: SpellId, tile_type: String },

    #[error("spell {spell} deals unknown damage type {damage_type}")]
    UnknownDamageType { spell: SpellId, damage_type: String },

    #[error("spell {spell} targets unknown magic realm {realm}")]
    UnknownTargetRealm { spell: SpellId, realm: String },

    #[error("unit {unit} belongs to unknown magic realm {realm}")]
    UnknownUnitRealm { unit: UnitId, realm: String },

    #[error("unit {unit} fires unknown ranged attack type {ranged_attack_type}")]
    UnknownRangedAttackType {
        unit: UnitId,
        ranged_attack_type: RangedAttackTypeId,
    },

    #[error("vortex unit {unit} is not defined")]
    UnknownVortexUnit { unit: UnitId },
}

/// Lists every reference in `database` that points at a missing record.
///
/// Issues are reported in id order; an empty list means every lookup a
/// targeting query can make from these definitions will succeed.
pub fn validate_catalog(database: &DatabaseSnapshot) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    for spell in database.spells.values() {
        let id = &spell.spell_id;

        for unit in &spell.summoned_unit {
            if !database.units.contains_key(unit) {
                issues.push(CatalogIssue::UnknownSummonedUnit {
                    spell: id.clone(),
                    unit: unit.clone(),
                });
            }
        }

        if let Some(building) = spell
            .building_id
            .as_ref()
            .filter(|building| !database.buildings.contains_key(*building))
        {
            issues.push(CatalogIssue::UnknownBuilding {
                spell: id.clone(),
                building: building.to_string(),
            });
        }

        for effect in &spell.city_spell_effect {
            if !database.city_spell_effects.contains_key(effect) {
                issues.push(CatalogIssue::UnknownCitySpellEffect {
                    spell: id.clone(),
                    effect: effect.to_string(),
                });
            }
        }

        let tile_types = spell
            .spell_valid_tile_type_target
            .iter()
            .flat_map(|target| {
                core::iter::once(&target.tile_type_id)
                    .chain(&target.change_to_tile_type_id)
            })
            .chain(&spell.tile_type_id);
        for tile_type in tile_types {
            if !database.tile_types.contains_key(tile_type) {
                issues.push(CatalogIssue::UnknownTileType {
                    spell: id.clone(),
                    tile_type: tile_type.to_string(),
                });
            }
        }

        if let Some(damage_type) = spell
            .attack_spell_damage_type
            .as_ref()
            .filter(|damage_type| !database.damage_types.contains_key(*damage_type))
        {
            issues.push(CatalogIssue::UnknownDamageType {
                spell: id.clone(),
                damage_type: damage_type.to_string(),
            });
        }

        for target in &spell.spell_valid_unit_target {
            if !database
                .magic_realms
                .contains_key(&target.target_magic_realm_id)
            {
                issues.push(CatalogIssue::UnknownTargetRealm {
                    spell: id.clone(),
                    realm: target.target_magic_realm_id.to_string(),
                });
            }
        }
    }

    for unit in database.units.values() {
        if !database.magic_realms.contains_key(&unit.magic_realm) {
            issues.push(CatalogIssue::UnknownUnitRealm {
                unit: unit.unit_id.clone(),
                realm: unit.magic_realm.to_string(),
            });
        }
        if let Some(rat) = unit
            .ranged_attack_type
            .as_ref()
            .filter(|rat| !database.ranged_attack_types.contains_key(*rat))
        {
            issues.push(CatalogIssue::UnknownRangedAttackType {
                unit: unit.unit_id.clone(),
                ranged_attack_type: rat.clone(),
            });
        }
    }

    for unit in &database.vortex_units {
        if !database.units.contains_key(unit) {
            issues.push(CatalogIssue::UnknownVortexUnit { unit: unit.clone() });
        }
    }

    if !issues.is_empty() {
        tracing::warn!(
            count = issues.len(),
            "spell catalog has dangling references"
        );
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use spell_core::env::{MagicRealmDefinition, UnitDefinition};
    use spell_core::spell::SpellValidTileTypeTarget;
    use spell_core::{SpellBookSection, SpellDefinition};

    fn realm(id: &str) -> MagicRealmDefinition {
        MagicRealmDefinition {
            magic_realm_id: id.into(),
            heal_each_turn: true,
        }
    }

    #[test]
    fn consistent_database_has_no_issues() {
        let mut spell = SpellDefinition::new("SP027", SpellBookSection::Summoning);
        spell.summoned_unit.push("UN154".into());
        let database = DatabaseSnapshot::new()
            .with_spell(spell)
            .with_unit(UnitDefinition::new("UN154", "LTN"))
            .with_magic_realm(realm("LTN"));

        assert!(validate_catalog(&database).is_empty());
    }

    #[test]
    fn reports_each_dangling_reference() {
        let mut change_terrain =
            SpellDefinition::new("SP009", SpellBookSection::SpecialOverlandSpells);
        change_terrain
            .spell_valid_tile_type_target
            .push(SpellValidTileTypeTarget {
                tile_type_id: "TT04".into(),
                change_to_tile_type_id: Some("TT01".into()),
            });
        let database = DatabaseSnapshot::new()
            .with_spell(change_terrain)
            .with_unit(UnitDefinition::new("UN001", "LTX"))
            .with_vortex_unit("UN156");

        let issues = validate_catalog(&database);

        assert_eq!(
            issues,
            vec![
                CatalogIssue::UnknownTileType {
                    spell: "SP009".into(),
                    tile_type: "TT04".into(),
                },
                CatalogIssue::UnknownTileType {
                    spell: "SP009".into(),
                    tile_type: "TT01".into(),
                },
                CatalogIssue::UnknownUnitRealm {
                    unit: "UN001".into(),
                    realm: "LTX".into(),
                },
                CatalogIssue::UnknownVortexUnit {
                    unit: "UN156".into(),
                },
            ]
        );
        assert_eq!(
            issues[2].to_string(),
            "unit UN001 belongs to unknown magic realm LTX"
        );
    }
}
