//! Declarative spell definitions as loaded from the spell database.
//!
//! Definitions are immutable and shared. Most fields are optional: a spell only
//! sets the ones its section needs, and [`KindOfSpell`](super::KindOfSpell)
//! reads which of them are present to work out what the spell does.

use crate::state::{
    BuildingId, CitySpellEffectId, CombatTileBorderId, DamageTypeId, MagicRealmId, MapFeatureId,
    PickId, SpellId, TileTypeId, UnitId, UnitSkillId,
};

/// Top-level spell book section a spell is filed under.
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
pub enum SpellBookSection {
    Summoning,
    OverlandEnchantments,
    CityEnchantments,
    UnitEnchantments,
    CombatEnchantments,
    CityCurses,
    UnitCurses,
    AttackSpells,
    SpecialUnitSpells,
    SpecialOverlandSpells,
    SpecialCombatSpells,
    DispelSpells,
    EnemyWizardSpells,
    SpecialSpells,
}

/// What an attack spell hits when it goes off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum AttackSpellTarget {
    SingleUnit,
    AllUnits,
    AllUnitsAndBuildings,
}

/// How damage from an attack spell or curse is resolved against its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum DamageResolutionType {
    SingleFigure,
    ArmourPiercing,
    Illusionary,
    MultiFigure,
    Doom,
    /// Fixed chance to kill outright; used by Cracks Call.
    ChanceOfDeath,
    EachFigureResistOrDie,
    SingleFigureResistOrDie,
    ResistOrTakeDamage,
    ResistanceRolls,
    Disintegrate,
    FearFigureRoll,
    /// Empties the target's ranged ammunition; used by Warp Wood.
    ZeroesAmmo,
}

impl DamageResolutionType {
    /// Resolution types where the target survives by passing resistance rolls.
    pub fn is_resistance_roll(self) -> bool {
        matches!(
            self,
            Self::EachFigureResistOrDie
                | Self::SingleFigureResistOrDie
                | Self::ResistOrTakeDamage
                | Self::ResistanceRolls
                | Self::Disintegrate
                | Self::FearFigureRoll
        )
    }
}

/// Tile type a spell may be aimed at, optionally turning it into another.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellValidTileTypeTarget {
    pub tile_type_id: TileTypeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub change_to_tile_type_id: Option<TileTypeId>,
}

/// Map feature a spell may be aimed at, optionally turning it into another.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellValidMapFeatureTarget {
    pub map_feature_id: MapFeatureId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub change_to_map_feature_id: Option<MapFeatureId>,
}

/// Lifeform type a unit spell may affect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellValidUnitTarget {
    pub target_magic_realm_id: MagicRealmId,
    /// Extra saving throw penalty against this lifeform (Dispel Evil on undead).
    #[cfg_attr(feature = "serde", serde(default))]
    pub magic_realm_additional_saving_throw_modifier: Option<i32>,
}

/// Skill granted to a unit by an enchantment or curse.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitSpellEffect {
    pub unit_skill_id: UnitSkillId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit_skill_value: Option<i32>,
}

impl UnitSpellEffect {
    pub fn new(unit_skill_id: impl Into<UnitSkillId>) -> Self {
        Self {
            unit_skill_id: unit_skill_id.into(),
            unit_skill_value: None,
        }
    }
}

/// Immutable spell definition.
///
/// Only `spell_id` and `section` are mandatory; everything else is absent
/// unless the spell needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellDefinition {
    pub spell_id: SpellId,
    pub section: SpellBookSection,

    /// Spell book realm this spell belongs to (`MB01`..`MB05`, or arcane).
    #[cfg_attr(feature = "serde", serde(default))]
    pub spell_realm: Option<PickId>,

    // ===== summoning =====
    #[cfg_attr(feature = "serde", serde(default))]
    pub resurrected_health_percentage: Option<u32>,
    /// Animate Dead style spells may raise the enemy's dead for the caster.
    #[cfg_attr(feature = "serde", serde(default))]
    pub resurrect_enemy_units: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hero_item_bonus_maximum_crafting_cost: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub summoned_unit: Vec<UnitId>,

    // ===== attack spells =====
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_spell_overland_target: Option<AttackSpellTarget>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_spell_combat_target: Option<AttackSpellTarget>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_spell_damage_resolution_type: Option<DamageResolutionType>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_spell_damage_type: Option<DamageTypeId>,

    // ===== targeting filters =====
    #[cfg_attr(feature = "serde", serde(default))]
    pub spell_valid_border_target: Vec<CombatTileBorderId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spell_valid_tile_type_target: Vec<SpellValidTileTypeTarget>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spell_valid_map_feature_target: Vec<SpellValidMapFeatureTarget>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spell_valid_unit_target: Vec<SpellValidUnitTarget>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spell_radius: Option<u32>,
    /// Tile type laid down by the spell (roads for Enchant Road).
    #[cfg_attr(feature = "serde", serde(default))]
    pub tile_type_id: Option<TileTypeId>,

    // ===== costs and damage =====
    #[cfg_attr(feature = "serde", serde(default))]
    pub overland_casting_cost: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat_casting_cost: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overland_base_damage: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overland_max_damage: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat_base_damage: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat_max_damage: Option<i32>,

    // ===== effects =====
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit_spell_effect: Vec<UnitSpellEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub city_spell_effect: Vec<CitySpellEffectId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub building_id: Option<BuildingId>,
}

impl SpellDefinition {
    /// Creates a definition with only the mandatory fields set.
    pub fn new(spell_id: impl Into<SpellId>, section: SpellBookSection) -> Self {
        Self {
            spell_id: spell_id.into(),
            section,
            spell_realm: None,
            resurrected_health_percentage: None,
            resurrect_enemy_units: false,
            hero_item_bonus_maximum_crafting_cost: None,
            summoned_unit: Vec::new(),
            attack_spell_overland_target: None,
            attack_spell_combat_target: None,
            attack_spell_damage_resolution_type: None,
            attack_spell_damage_type: None,
            spell_valid_border_target: Vec::new(),
            spell_valid_tile_type_target: Vec::new(),
            spell_valid_map_feature_target: Vec::new(),
            spell_valid_unit_target: Vec::new(),
            spell_radius: None,
            tile_type_id: None,
            overland_casting_cost: None,
            combat_casting_cost: None,
            overland_base_damage: None,
            overland_max_damage: None,
            combat_base_damage: None,
            combat_max_damage: None,
            unit_spell_effect: Vec::new(),
            city_spell_effect: Vec::new(),
            building_id: None,
        }
    }

    /// Returns true if this is the spell with the given hard-coded id.
    pub fn is(&self, spell_id: &str) -> bool {
        self.spell_id == spell_id
    }

    /// Checks a lifeform type against the spell's valid-unit-target list.
    pub fn lifeform_filter(&self, magic_realm: &MagicRealmId) -> LifeformFilter<'_> {
        if self.spell_valid_unit_target.is_empty() {
            return LifeformFilter::Unrestricted;
        }
        match self
            .spell_valid_unit_target
            .iter()
            .find(|target| &target.target_magic_realm_id == magic_realm)
        {
            Some(target) => LifeformFilter::Allowed(target),
            None => LifeformFilter::Excluded,
        }
    }
}

/// Outcome of matching a unit's lifeform type against a spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifeformFilter<'a> {
    /// The spell has no lifeform filter.
    Unrestricted,
    /// The lifeform is listed; the entry may carry a saving throw modifier.
    Allowed(&'a SpellValidUnitTarget),
    Excluded,
}

impl LifeformFilter<'_> {
    pub fn is_excluded(&self) -> bool {
        matches!(self, LifeformFilter::Excluded)
    }

    /// Extra saving throw penalty for this lifeform, zero if none.
    pub fn saving_throw_modifier(&self) -> i32 {
        match self {
            LifeformFilter::Allowed(target) => target
                .magic_realm_additional_saving_throw_modifier
                .unwrap_or(0),
            _ => 0,
        }
    }
}
