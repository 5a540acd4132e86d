//! Semantic classification of spells.
//!
//! A spell's book section is too coarse to decide which targeting rules apply:
//! "special overland spells" covers Earth Lore, Enchant Road, terraforming,
//! Warp Node and Corruption, which target in completely different ways.
//! [`KindOfSpell::classify`] refines section + declarative fields into one of
//! thirty kinds. It never touches game state and never fails; data that fits
//! no specific branch falls through to the section's default kind.

use super::definition::{AttackSpellTarget, SpellBookSection, SpellDefinition};
use crate::constants::{
    DISPEL_OVERLAND_ENCHANTMENTS_MIN_DAMAGE, SPELL_ID_PLANE_SHIFT, SPELL_ID_SPELL_BLAST,
};

/// Fine-grained kind of a spell, driving which eligibility rules apply.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum KindOfSpell {
    RaiseDead,
    CreateArtifact,
    Summoning,
    OverlandEnchantments,
    CityEnchantments,
    UnitEnchantments,
    ChangeUnitId,
    CombatEnchantments,
    CityCurses,
    UnitCurses,
    AttackUnits,
    AttackUnitsAndWalls,
    AttackUnitsAndBuildings,
    PlaneShift,
    Healing,
    Recall,
    EnchantRoad,
    EarthLore,
    ChangeTileType,
    ChangeMapFeature,
    WarpNode,
    Corruption,
    AttackWalls,
    EarthToMud,
    SpellBinding,
    DispelOverlandEnchantments,
    DispelUnitCityCombatSpells,
    SpecialSpells,
    SpellBlast,
    EnemyWizardSpells,
}

impl KindOfSpell {
    /// Classifies a spell filed under `section`.
    ///
    /// `section` is passed separately from the definition because callers may
    /// reclassify a spell under a different section (a spell that is both a
    /// unit enchantment and castable on the combat as a whole).
    pub fn classify(spell: &SpellDefinition, section: SpellBookSection) -> Self {
        match section {
            SpellBookSection::Summoning => {
                if spell.resurrected_health_percentage.is_some() {
                    Self::RaiseDead
                } else if spell.hero_item_bonus_maximum_crafting_cost.is_some() {
                    Self::CreateArtifact
                } else {
                    Self::Summoning
                }
            }

            SpellBookSection::OverlandEnchantments => Self::OverlandEnchantments,
            SpellBookSection::CityEnchantments => Self::CityEnchantments,
            SpellBookSection::CombatEnchantments => Self::CombatEnchantments,
            SpellBookSection::CityCurses => Self::CityCurses,
            SpellBookSection::UnitCurses => Self::UnitCurses,
            SpellBookSection::SpecialSpells => Self::SpecialSpells,

            SpellBookSection::UnitEnchantments => {
                if spell.summoned_unit.is_empty() {
                    Self::UnitEnchantments
                } else {
                    Self::ChangeUnitId
                }
            }

            SpellBookSection::AttackSpells => {
                if !spell.spell_valid_border_target.is_empty() {
                    Self::AttackUnitsAndWalls
                } else if spell.attack_spell_overland_target
                    == Some(AttackSpellTarget::AllUnitsAndBuildings)
                {
                    Self::AttackUnitsAndBuildings
                } else {
                    Self::AttackUnits
                }
            }

            SpellBookSection::SpecialUnitSpells => {
                if spell.is(SPELL_ID_PLANE_SHIFT) {
                    Self::PlaneShift
                } else if spell.combat_base_damage.is_some()
                    || (spell.overland_casting_cost.is_some()
                        && spell.attack_spell_overland_target.is_some())
                {
                    Self::Healing
                } else {
                    Self::Recall
                }
            }

            SpellBookSection::SpecialOverlandSpells => Self::classify_special_overland(spell),

            SpellBookSection::SpecialCombatSpells => {
                if spell.spell_valid_border_target.is_empty() {
                    Self::EarthToMud
                } else {
                    Self::AttackWalls
                }
            }

            SpellBookSection::DispelSpells => match spell.overland_max_damage {
                Some(damage) if damage >= DISPEL_OVERLAND_ENCHANTMENTS_MIN_DAMAGE => {
                    Self::DispelOverlandEnchantments
                }
                Some(_) => Self::DispelUnitCityCombatSpells,
                None => Self::SpellBinding,
            },

            SpellBookSection::EnemyWizardSpells => {
                if spell.is(SPELL_ID_SPELL_BLAST) {
                    Self::SpellBlast
                } else {
                    Self::EnemyWizardSpells
                }
            }
        }
    }

    // TODO: give Warp Node and Corruption an explicit discriminator in the
    // spell data; counting valid tile types is a proxy.
    fn classify_special_overland(spell: &SpellDefinition) -> Self {
        if spell.tile_type_id.is_some() && spell.spell_radius.is_some() {
            Self::EnchantRoad
        } else if spell.spell_radius.is_some() {
            Self::EarthLore
        } else if spell
            .spell_valid_tile_type_target
            .iter()
            .any(|target| target.change_to_tile_type_id.is_some())
        {
            Self::ChangeTileType
        } else if spell
            .spell_valid_map_feature_target
            .iter()
            .any(|target| target.change_to_map_feature_id.is_some())
        {
            Self::ChangeMapFeature
        } else if spell.spell_valid_tile_type_target.len() == 3 {
            Self::WarpNode
        } else {
            Self::Corruption
        }
    }

    /// Kinds that help the target and so may only be aimed at your own units.
    pub fn is_beneficial_to_unit(self) -> bool {
        matches!(
            self,
            Self::UnitEnchantments
                | Self::ChangeUnitId
                | Self::Healing
                | Self::Recall
                | Self::PlaneShift
        )
    }

    /// Kinds that harm the target and so may only be aimed at enemy units.
    pub fn is_harmful_to_unit(self) -> bool {
        matches!(
            self,
            Self::UnitCurses
                | Self::AttackUnits
                | Self::AttackUnitsAndWalls
                | Self::AttackUnitsAndBuildings
        )
    }

    /// Kinds that work by attaching skills to the target unit.
    pub fn grants_unit_effects(self) -> bool {
        matches!(self, Self::UnitEnchantments | Self::UnitCurses)
    }

    /// Kinds that attack units through damage or resistance rolls.
    pub fn attacks_units(self) -> bool {
        matches!(
            self,
            Self::UnitCurses
                | Self::AttackUnits
                | Self::AttackUnitsAndWalls
                | Self::AttackUnitsAndBuildings
        )
    }

    /// Kinds that remove spells rather than cast them.
    pub fn is_dispel(self) -> bool {
        matches!(
            self,
            Self::DispelUnitCityCombatSpells | Self::DispelOverlandEnchantments | Self::SpellBinding
        )
    }

    /// Kinds aimed at the whole area around a location rather than at one tile.
    pub fn targets_radius(self) -> bool {
        matches!(self, Self::EarthLore | Self::EnchantRoad)
    }
}

impl SpellDefinition {
    /// Classifies this spell under its own section.
    pub fn kind(&self) -> KindOfSpell {
        KindOfSpell::classify(self, self.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spell::{SpellValidMapFeatureTarget, SpellValidTileTypeTarget};
    use strum::IntoEnumIterator;

    fn spell(section: SpellBookSection) -> SpellDefinition {
        SpellDefinition::new("SP999", section)
    }

    fn tile_targets(count: usize) -> Vec<SpellValidTileTypeTarget> {
        (0..count)
            .map(|n| SpellValidTileTypeTarget {
                tile_type_id: format!("TT{n:02}").as_str().into(),
                change_to_tile_type_id: None,
            })
            .collect()
    }

    #[test]
    fn summoning_section_splits_into_raise_dead_artifacts_and_summons() {
        let raise = SpellDefinition {
            resurrected_health_percentage: Some(50),
            ..spell(SpellBookSection::Summoning)
        };
        assert_eq!(raise.kind(), KindOfSpell::RaiseDead);

        let artifact = SpellDefinition {
            hero_item_bonus_maximum_crafting_cost: Some(200),
            ..spell(SpellBookSection::Summoning)
        };
        assert_eq!(artifact.kind(), KindOfSpell::CreateArtifact);

        // Raise dead wins when both are present
        let both = SpellDefinition {
            resurrected_health_percentage: Some(50),
            hero_item_bonus_maximum_crafting_cost: Some(200),
            ..spell(SpellBookSection::Summoning)
        };
        assert_eq!(both.kind(), KindOfSpell::RaiseDead);

        assert_eq!(
            spell(SpellBookSection::Summoning).kind(),
            KindOfSpell::Summoning
        );
    }

    #[test]
    fn one_to_one_sections() {
        let cases = [
            (
                SpellBookSection::OverlandEnchantments,
                KindOfSpell::OverlandEnchantments,
            ),
            (
                SpellBookSection::CityEnchantments,
                KindOfSpell::CityEnchantments,
            ),
            (
                SpellBookSection::CombatEnchantments,
                KindOfSpell::CombatEnchantments,
            ),
            (SpellBookSection::CityCurses, KindOfSpell::CityCurses),
            (SpellBookSection::UnitCurses, KindOfSpell::UnitCurses),
            (SpellBookSection::SpecialSpells, KindOfSpell::SpecialSpells),
        ];
        for (section, expected) in cases {
            assert_eq!(spell(section).kind(), expected, "section {section}");
        }
    }

    #[test]
    fn unit_enchantment_with_summoned_unit_changes_unit_id() {
        let lycanthropy = SpellDefinition {
            summoned_unit: vec!["UN001".into()],
            ..spell(SpellBookSection::UnitEnchantments)
        };
        assert_eq!(lycanthropy.kind(), KindOfSpell::ChangeUnitId);
        assert_eq!(
            spell(SpellBookSection::UnitEnchantments).kind(),
            KindOfSpell::UnitEnchantments
        );
    }

    #[test]
    fn attack_spells_by_walls_then_buildings() {
        let walls = SpellDefinition {
            spell_valid_border_target: vec!["CTB01".into()],
            attack_spell_overland_target: Some(AttackSpellTarget::AllUnitsAndBuildings),
            ..spell(SpellBookSection::AttackSpells)
        };
        assert_eq!(walls.kind(), KindOfSpell::AttackUnitsAndWalls);

        let earthquake = SpellDefinition {
            attack_spell_overland_target: Some(AttackSpellTarget::AllUnitsAndBuildings),
            ..spell(SpellBookSection::AttackSpells)
        };
        assert_eq!(earthquake.kind(), KindOfSpell::AttackUnitsAndBuildings);

        let fire_bolt = SpellDefinition {
            attack_spell_combat_target: Some(AttackSpellTarget::SingleUnit),
            ..spell(SpellBookSection::AttackSpells)
        };
        assert_eq!(fire_bolt.kind(), KindOfSpell::AttackUnits);
    }

    #[test]
    fn special_unit_spells() {
        let plane_shift =
            SpellDefinition::new(SPELL_ID_PLANE_SHIFT, SpellBookSection::SpecialUnitSpells);
        assert_eq!(plane_shift.kind(), KindOfSpell::PlaneShift);

        let healing = SpellDefinition {
            combat_base_damage: Some(5),
            ..spell(SpellBookSection::SpecialUnitSpells)
        };
        assert_eq!(healing.kind(), KindOfSpell::Healing);

        let overland_healing = SpellDefinition {
            overland_casting_cost: Some(50),
            attack_spell_overland_target: Some(AttackSpellTarget::AllUnits),
            ..spell(SpellBookSection::SpecialUnitSpells)
        };
        assert_eq!(overland_healing.kind(), KindOfSpell::Healing);

        // Overland cost alone is just Recall Hero
        let recall = SpellDefinition {
            overland_casting_cost: Some(50),
            ..spell(SpellBookSection::SpecialUnitSpells)
        };
        assert_eq!(recall.kind(), KindOfSpell::Recall);
    }

    #[test]
    fn special_overland_spells_in_priority_order() {
        let enchant_road = SpellDefinition {
            tile_type_id: Some("TT99".into()),
            spell_radius: Some(2),
            ..spell(SpellBookSection::SpecialOverlandSpells)
        };
        assert_eq!(enchant_road.kind(), KindOfSpell::EnchantRoad);

        let earth_lore = SpellDefinition {
            spell_radius: Some(6),
            ..spell(SpellBookSection::SpecialOverlandSpells)
        };
        assert_eq!(earth_lore.kind(), KindOfSpell::EarthLore);

        let mut targets = tile_targets(4);
        targets[2].change_to_tile_type_id = Some("TT12".into());
        let raise_volcano = SpellDefinition {
            spell_valid_tile_type_target: targets,
            ..spell(SpellBookSection::SpecialOverlandSpells)
        };
        assert_eq!(raise_volcano.kind(), KindOfSpell::ChangeTileType);

        let transmute = SpellDefinition {
            spell_valid_map_feature_target: vec![SpellValidMapFeatureTarget {
                map_feature_id: "MF01".into(),
                change_to_map_feature_id: Some("MF02".into()),
            }],
            ..spell(SpellBookSection::SpecialOverlandSpells)
        };
        assert_eq!(transmute.kind(), KindOfSpell::ChangeMapFeature);

        let warp_node = SpellDefinition {
            spell_valid_tile_type_target: tile_targets(3),
            ..spell(SpellBookSection::SpecialOverlandSpells)
        };
        assert_eq!(warp_node.kind(), KindOfSpell::WarpNode);

        let corruption = SpellDefinition {
            spell_valid_tile_type_target: tile_targets(4),
            ..spell(SpellBookSection::SpecialOverlandSpells)
        };
        assert_eq!(corruption.kind(), KindOfSpell::Corruption);
    }

    #[test]
    fn special_combat_spells() {
        let wall_crusher = SpellDefinition {
            spell_valid_border_target: vec!["CTB01".into()],
            ..spell(SpellBookSection::SpecialCombatSpells)
        };
        assert_eq!(wall_crusher.kind(), KindOfSpell::AttackWalls);
        assert_eq!(
            spell(SpellBookSection::SpecialCombatSpells).kind(),
            KindOfSpell::EarthToMud
        );
    }

    #[test]
    fn dispel_spells_split_on_overland_max_damage() {
        let disjunction = SpellDefinition {
            overland_max_damage: Some(DISPEL_OVERLAND_ENCHANTMENTS_MIN_DAMAGE),
            ..spell(SpellBookSection::DispelSpells)
        };
        assert_eq!(disjunction.kind(), KindOfSpell::DispelOverlandEnchantments);

        let disenchant_area = SpellDefinition {
            overland_max_damage: Some(100),
            ..spell(SpellBookSection::DispelSpells)
        };
        assert_eq!(
            disenchant_area.kind(),
            KindOfSpell::DispelUnitCityCombatSpells
        );

        let just_below = SpellDefinition {
            overland_max_damage: Some(DISPEL_OVERLAND_ENCHANTMENTS_MIN_DAMAGE - 1),
            ..spell(SpellBookSection::DispelSpells)
        };
        assert_eq!(just_below.kind(), KindOfSpell::DispelUnitCityCombatSpells);

        assert_eq!(
            spell(SpellBookSection::DispelSpells).kind(),
            KindOfSpell::SpellBinding
        );
    }

    #[test]
    fn enemy_wizard_spells() {
        let spell_blast =
            SpellDefinition::new(SPELL_ID_SPELL_BLAST, SpellBookSection::EnemyWizardSpells);
        assert_eq!(spell_blast.kind(), KindOfSpell::SpellBlast);
        assert_eq!(
            spell(SpellBookSection::EnemyWizardSpells).kind(),
            KindOfSpell::EnemyWizardSpells
        );
    }

    #[test]
    fn section_override_reclassifies() {
        let definition = SpellDefinition {
            resurrected_health_percentage: Some(50),
            ..spell(SpellBookSection::UnitEnchantments)
        };
        assert_eq!(definition.kind(), KindOfSpell::UnitEnchantments);
        assert_eq!(
            KindOfSpell::classify(&definition, SpellBookSection::Summoning),
            KindOfSpell::RaiseDead
        );
    }

    #[test]
    fn every_section_classifies_empty_definitions() {
        for section in SpellBookSection::iter() {
            let first = KindOfSpell::classify(&spell(section), section);
            let second = KindOfSpell::classify(&spell(section), section);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn kinds_render_in_screaming_snake_case() {
        assert_eq!(
            KindOfSpell::DispelUnitCityCombatSpells.as_ref(),
            "DISPEL_UNIT_CITY_COMBAT_SPELLS"
        );
        assert_eq!(
            "raise_dead".parse::<KindOfSpell>(),
            Ok(KindOfSpell::RaiseDead)
        );
        assert_eq!(KindOfSpell::iter().count(), 30);
    }
}
