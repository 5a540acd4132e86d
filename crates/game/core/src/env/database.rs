//! Spell database: id-keyed lookups of static game data.

use std::collections::BTreeMap;

use super::OracleError;
use crate::spell::SpellDefinition;
use crate::state::{
    BuildingId, CitySpellEffectId, CombatTileTypeId, DamageTypeId, MagicRealmId, PickId,
    RangedAttackTypeId, SpellId, TileTypeId, UnitId, UnitSkillId,
};

/// Read-only access to the static game database.
///
/// Lookups fail with a `*NotFound` [`OracleError`] when the id is unknown,
/// which always indicates malformed or mismatched game data.
pub trait SpellDatabase: Send + Sync {
    fn spell(&self, id: &SpellId) -> Result<&SpellDefinition, OracleError>;
    fn unit(&self, id: &UnitId) -> Result<&UnitDefinition, OracleError>;
    fn tile_type(&self, id: &TileTypeId) -> Result<&TileTypeDefinition, OracleError>;
    fn combat_tile_type(
        &self,
        id: &CombatTileTypeId,
    ) -> Result<&CombatTileTypeDefinition, OracleError>;
    fn damage_type(&self, id: &DamageTypeId) -> Result<&DamageTypeDefinition, OracleError>;
    fn magic_realm(&self, id: &MagicRealmId) -> Result<&MagicRealmDefinition, OracleError>;
    fn ranged_attack_type(
        &self,
        id: &RangedAttackTypeId,
    ) -> Result<&RangedAttackTypeDefinition, OracleError>;
    fn city_spell_effect(
        &self,
        id: &CitySpellEffectId,
    ) -> Result<&CitySpellEffectDefinition, OracleError>;
    fn building(&self, id: &BuildingId) -> Result<&BuildingDefinition, OracleError>;

    /// Units that are dispelled directly rather than via a spell on them.
    fn vortex_unit_ids(&self) -> &[UnitId];

    fn is_vortex_unit(&self, id: &UnitId) -> bool {
        self.vortex_unit_ids().contains(id)
    }
}

/// Unit type, with enough data to build a hypothetical sample of it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitDefinition {
    pub unit_id: UnitId,
    pub magic_realm: MagicRealmId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: BTreeMap<UnitSkillId, i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ranged_attack_type: Option<RangedAttackTypeId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ranged_attack_ammo: u32,
}

impl UnitDefinition {
    pub fn new(unit_id: impl Into<UnitId>, magic_realm: impl Into<MagicRealmId>) -> Self {
        Self {
            unit_id: unit_id.into(),
            magic_realm: magic_realm.into(),
            skills: BTreeMap::new(),
            ranged_attack_type: None,
            ranged_attack_ammo: 0,
        }
    }

    pub fn with_skill(mut self, skill: impl Into<UnitSkillId>, value: i32) -> Self {
        self.skills.insert(skill.into(), value);
        self
    }
}

/// Overland tile type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileTypeDefinition {
    pub tile_type_id: TileTypeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub land: bool,
}

/// Combat map tile type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatTileTypeDefinition {
    pub combat_tile_type_id: CombatTileTypeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub land: bool,
}

/// Damage type, with the skills that grant immunity to it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageTypeDefinition {
    pub damage_type_id: DamageTypeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub immunity_skills: Vec<UnitSkillId>,
}

/// Magic realm / lifeform type of units.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagicRealmDefinition {
    pub magic_realm_id: MagicRealmId,
    /// Whether units of this type recover damage naturally, and so can be healed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub heal_each_turn: bool,
}

/// Ranged attack type (arrows, sling stones, magic bolts).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangedAttackTypeDefinition {
    pub ranged_attack_type_id: RangedAttackTypeId,
    /// Wooden missiles can be warped.
    #[cfg_attr(feature = "serde", serde(default))]
    pub wooden: bool,
}

/// City spell effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CitySpellEffectDefinition {
    pub city_spell_effect_id: CitySpellEffectId,
    /// Spell realms this effect shields the city from (Spell Ward, Consecration).
    #[cfg_attr(feature = "serde", serde(default))]
    pub protect_against_spell_realm: Vec<PickId>,
}

impl CitySpellEffectDefinition {
    pub fn protects_against(&self, realm: &PickId) -> bool {
        self.protect_against_spell_realm.contains(realm)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingDefinition {
    pub building_id: BuildingId,
}
