//! In-memory oracle implementations.
//!
//! Each snapshot owns a copy of the data one oracle exposes. The content
//! loaders build [`DatabaseSnapshot`] from data files; the game (or a test)
//! fills in the per-player snapshots before running a query.

use std::collections::{BTreeMap, BTreeSet};

use super::{
    BuildingDefinition, CitySpellEffectDefinition, CombatMapOracle, CombatTileTypeDefinition,
    DamageTypeDefinition, MagicRealmDefinition, MemoryOracle, MovementOracle, OracleError,
    RangedAttackTypeDefinition, SampleUnitFactory, SpellDatabase, TerrainOracle,
    TileTypeDefinition, UnitDefinition, UnitView, VisibilityOracle, WizardOracle,
};
use crate::spell::SpellDefinition;
use crate::state::{
    ActiveSpell, BuildingId, BuildingRecord, CastingProgress, CitySpellEffectId, CombatMapTile,
    CombatPosition, CombatTileTypeId, DamageTypeId, KnownWizard, MagicRealmId, MapCoordinates3D,
    OverlandTile, PickId, PlayerId, RangedAttackTypeId, SpellId, TileTypeId, UnitId, UnitRecord,
    UnitSkillId, UnitStatus, UnitUrn,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Database
// ============================================================================

/// Static game database keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DatabaseSnapshot {
    pub spells: BTreeMap<SpellId, SpellDefinition>,
    pub units: BTreeMap<UnitId, UnitDefinition>,
    pub tile_types: BTreeMap<TileTypeId, TileTypeDefinition>,
    pub combat_tile_types: BTreeMap<CombatTileTypeId, CombatTileTypeDefinition>,
    pub damage_types: BTreeMap<DamageTypeId, DamageTypeDefinition>,
    pub magic_realms: BTreeMap<MagicRealmId, MagicRealmDefinition>,
    pub ranged_attack_types: BTreeMap<RangedAttackTypeId, RangedAttackTypeDefinition>,
    pub city_spell_effects: BTreeMap<CitySpellEffectId, CitySpellEffectDefinition>,
    pub buildings: BTreeMap<BuildingId, BuildingDefinition>,
    pub vortex_units: Vec<UnitId>,
}

impl DatabaseSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spell(mut self, spell: SpellDefinition) -> Self {
        self.spells.insert(spell.spell_id.clone(), spell);
        self
    }

    pub fn with_unit(mut self, unit: UnitDefinition) -> Self {
        self.units.insert(unit.unit_id.clone(), unit);
        self
    }

    pub fn with_tile_type(mut self, tile_type: TileTypeDefinition) -> Self {
        self.tile_types
            .insert(tile_type.tile_type_id.clone(), tile_type);
        self
    }

    pub fn with_combat_tile_type(mut self, tile_type: CombatTileTypeDefinition) -> Self {
        self.combat_tile_types
            .insert(tile_type.combat_tile_type_id.clone(), tile_type);
        self
    }

    pub fn with_damage_type(mut self, damage_type: DamageTypeDefinition) -> Self {
        self.damage_types
            .insert(damage_type.damage_type_id.clone(), damage_type);
        self
    }

    pub fn with_magic_realm(mut self, realm: MagicRealmDefinition) -> Self {
        self.magic_realms
            .insert(realm.magic_realm_id.clone(), realm);
        self
    }

    pub fn with_ranged_attack_type(mut self, rat: RangedAttackTypeDefinition) -> Self {
        self.ranged_attack_types
            .insert(rat.ranged_attack_type_id.clone(), rat);
        self
    }

    pub fn with_city_spell_effect(mut self, effect: CitySpellEffectDefinition) -> Self {
        self.city_spell_effects
            .insert(effect.city_spell_effect_id.clone(), effect);
        self
    }

    pub fn with_building(mut self, building: BuildingDefinition) -> Self {
        self.buildings
            .insert(building.building_id.clone(), building);
        self
    }

    pub fn with_vortex_unit(mut self, unit_id: impl Into<UnitId>) -> Self {
        self.vortex_units.push(unit_id.into());
        self
    }
}

impl SpellDatabase for DatabaseSnapshot {
    fn spell(&self, id: &SpellId) -> Result<&SpellDefinition, OracleError> {
        self.spells
            .get(id)
            .ok_or_else(|| OracleError::SpellNotFound(id.clone()))
    }

    fn unit(&self, id: &UnitId) -> Result<&UnitDefinition, OracleError> {
        self.units
            .get(id)
            .ok_or_else(|| OracleError::UnitNotFound(id.clone()))
    }

    fn tile_type(&self, id: &TileTypeId) -> Result<&TileTypeDefinition, OracleError> {
        self.tile_types
            .get(id)
            .ok_or_else(|| OracleError::TileTypeNotFound(id.clone()))
    }

    fn combat_tile_type(
        &self,
        id: &CombatTileTypeId,
    ) -> Result<&CombatTileTypeDefinition, OracleError> {
        self.combat_tile_types
            .get(id)
            .ok_or_else(|| OracleError::CombatTileTypeNotFound(id.clone()))
    }

    fn damage_type(&self, id: &DamageTypeId) -> Result<&DamageTypeDefinition, OracleError> {
        self.damage_types
            .get(id)
            .ok_or_else(|| OracleError::DamageTypeNotFound(id.clone()))
    }

    fn magic_realm(&self, id: &MagicRealmId) -> Result<&MagicRealmDefinition, OracleError> {
        self.magic_realms
            .get(id)
            .ok_or_else(|| OracleError::MagicRealmNotFound(id.clone()))
    }

    fn ranged_attack_type(
        &self,
        id: &RangedAttackTypeId,
    ) -> Result<&RangedAttackTypeDefinition, OracleError> {
        self.ranged_attack_types
            .get(id)
            .ok_or_else(|| OracleError::RangedAttackTypeNotFound(id.clone()))
    }

    fn city_spell_effect(
        &self,
        id: &CitySpellEffectId,
    ) -> Result<&CitySpellEffectDefinition, OracleError> {
        self.city_spell_effects
            .get(id)
            .ok_or_else(|| OracleError::CitySpellEffectNotFound(id.clone()))
    }

    fn building(&self, id: &BuildingId) -> Result<&BuildingDefinition, OracleError> {
        self.buildings
            .get(id)
            .ok_or_else(|| OracleError::BuildingNotFound(id.clone()))
    }

    fn vortex_unit_ids(&self) -> &[UnitId] {
        &self.vortex_units
    }
}

// ============================================================================
// Terrain
// ============================================================================

/// Overland terrain, sparse. Cells never set are outside the map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TerrainSnapshot {
    tiles: BTreeMap<MapCoordinates3D, OverlandTile>,
}

impl TerrainSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tile(mut self, location: MapCoordinates3D, tile: OverlandTile) -> Self {
        self.tiles.insert(location, tile);
        self
    }

    pub fn insert(&mut self, location: MapCoordinates3D, tile: OverlandTile) {
        self.tiles.insert(location, tile);
    }
}

impl TerrainOracle for TerrainSnapshot {
    fn overland_tile(&self, location: MapCoordinates3D) -> Option<&OverlandTile> {
        self.tiles.get(&location)
    }
}

/// Combat map, sparse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombatMapSnapshot {
    tiles: BTreeMap<CombatPosition, CombatMapTile>,
}

impl CombatMapSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tile(mut self, position: CombatPosition, tile: CombatMapTile) -> Self {
        self.tiles.insert(position, tile);
        self
    }
}

impl CombatMapOracle for CombatMapSnapshot {
    fn combat_tile(&self, position: CombatPosition) -> Option<&CombatMapTile> {
        self.tiles.get(&position)
    }
}

// ============================================================================
// Visibility
// ============================================================================

/// Explicit list of visible cells, plus units each player cannot see.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilitySnapshot {
    visible: BTreeSet<(PlayerId, MapCoordinates3D)>,
    hidden_units: BTreeSet<(PlayerId, UnitUrn)>,
}

impl VisibilitySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_visible(mut self, player: PlayerId, location: MapCoordinates3D) -> Self {
        self.visible.insert((player, location));
        self
    }

    /// Marks a unit as invisible to the player, wherever it stands.
    pub fn with_hidden_unit(mut self, player: PlayerId, unit: UnitUrn) -> Self {
        self.hidden_units.insert((player, unit));
        self
    }
}

impl VisibilityOracle for VisibilitySnapshot {
    fn can_see_location(&self, player: PlayerId, location: MapCoordinates3D) -> bool {
        self.visible.contains(&(player, location))
    }

    fn can_see_unit(&self, player: PlayerId, unit: &dyn UnitView) -> bool {
        !self.hidden_units.contains(&(player, unit.urn()))
    }
}

// ============================================================================
// Memory
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MemorySnapshot {
    pub active_spells: Vec<ActiveSpell>,
    pub units: Vec<UnitRecord>,
    pub buildings: Vec<BuildingRecord>,
}

impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spell(mut self, spell: ActiveSpell) -> Self {
        self.active_spells.push(spell);
        self
    }

    pub fn with_unit(mut self, unit: UnitRecord) -> Self {
        self.units.push(unit);
        self
    }

    pub fn with_building(mut self, location: MapCoordinates3D, building: BuildingId) -> Self {
        self.buildings.push(BuildingRecord {
            city_location: location,
            building_id: building,
        });
        self
    }
}

impl MemoryOracle for MemorySnapshot {
    fn active_spells(&self) -> &[ActiveSpell] {
        &self.active_spells
    }

    fn units(&self) -> &[UnitRecord] {
        &self.units
    }

    fn buildings(&self) -> &[BuildingRecord] {
        &self.buildings
    }
}

// ============================================================================
// Wizards
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardSnapshot {
    known: BTreeMap<(PlayerId, PlayerId), KnownWizard>,
    casting: BTreeMap<PlayerId, CastingProgress>,
    stored_mana: BTreeMap<PlayerId, u32>,
    picks: BTreeMap<(PlayerId, PickId), u32>,
}

impl WizardSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `knower` has met `wizard`.
    pub fn with_known(mut self, knower: PlayerId, wizard: KnownWizard) -> Self {
        self.known.insert((knower, wizard.player), wizard);
        self
    }

    pub fn with_casting(mut self, player: PlayerId, progress: CastingProgress) -> Self {
        self.casting.insert(player, progress);
        self
    }

    pub fn with_stored_mana(mut self, player: PlayerId, mana: u32) -> Self {
        self.stored_mana.insert(player, mana);
        self
    }

    pub fn with_picks(mut self, player: PlayerId, pick: impl Into<PickId>, count: u32) -> Self {
        self.picks.insert((player, pick.into()), count);
        self
    }
}

impl WizardOracle for WizardSnapshot {
    fn known_wizard(&self, knower: PlayerId, wizard: PlayerId) -> Option<&KnownWizard> {
        self.known.get(&(knower, wizard))
    }

    fn casting_progress(&self, player: PlayerId) -> Option<&CastingProgress> {
        self.casting.get(&player)
    }

    fn stored_mana(&self, player: PlayerId) -> u32 {
        self.stored_mana.get(&player).copied().unwrap_or(0)
    }

    fn pick_count(&self, player: PlayerId, pick: &str) -> u32 {
        self.picks
            .iter()
            .find(|((owner, id), _)| *owner == player && id == pick)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

// ============================================================================
// Units
// ============================================================================

/// Concrete unit view with skills already modified.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitSnapshot {
    pub urn: UnitUrn,
    pub unit_id: UnitId,
    pub owner: PlayerId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: UnitStatus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit_location: Option<MapCoordinates3D>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat_location: Option<MapCoordinates3D>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat_position: Option<CombatPosition>,
    pub magic_realm: MagicRealmId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: BTreeMap<UnitSkillId, i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ranged_attack_type: Option<RangedAttackTypeId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ammo_remaining: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_damage_taken: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub healable_damage_taken: u32,
}

impl UnitSnapshot {
    pub fn new(
        urn: UnitUrn,
        unit_id: impl Into<UnitId>,
        owner: PlayerId,
        magic_realm: impl Into<MagicRealmId>,
    ) -> Self {
        Self {
            urn,
            unit_id: unit_id.into(),
            owner,
            status: UnitStatus::Alive,
            unit_location: None,
            combat_location: None,
            combat_position: None,
            magic_realm: magic_realm.into(),
            skills: BTreeMap::new(),
            ranged_attack_type: None,
            ammo_remaining: 0,
            total_damage_taken: 0,
            healable_damage_taken: 0,
        }
    }

    /// A fresh unit of the given type, with the type's base skills.
    pub fn from_definition(
        urn: UnitUrn,
        definition: &UnitDefinition,
        owner: PlayerId,
        location: MapCoordinates3D,
    ) -> Self {
        Self {
            unit_location: Some(location),
            skills: definition.skills.clone(),
            ranged_attack_type: definition.ranged_attack_type.clone(),
            ammo_remaining: definition.ranged_attack_ammo,
            ..Self::new(
                urn,
                definition.unit_id.clone(),
                owner,
                definition.magic_realm.clone(),
            )
        }
    }

    pub fn at(mut self, location: MapCoordinates3D) -> Self {
        self.unit_location = Some(location);
        self
    }

    pub fn in_combat(mut self, location: MapCoordinates3D, position: CombatPosition) -> Self {
        self.combat_location = Some(location);
        self.combat_position = Some(position);
        self
    }

    pub fn with_status(mut self, status: UnitStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_skill(mut self, skill: impl Into<UnitSkillId>, value: i32) -> Self {
        self.skills.insert(skill.into(), value);
        self
    }

    pub fn with_ranged_attack(mut self, rat: impl Into<RangedAttackTypeId>, ammo: u32) -> Self {
        self.ranged_attack_type = Some(rat.into());
        self.ammo_remaining = ammo;
        self
    }

    pub fn with_damage(mut self, total: u32, healable: u32) -> Self {
        self.total_damage_taken = total;
        self.healable_damage_taken = healable;
        self
    }

    /// The memory record other players hold for this unit.
    pub fn record(&self) -> UnitRecord {
        UnitRecord {
            urn: self.urn,
            unit_id: self.unit_id.clone(),
            owner: self.owner,
            location: self.unit_location,
            status: self.status,
        }
    }
}

impl UnitView for UnitSnapshot {
    fn urn(&self) -> UnitUrn {
        self.urn
    }

    fn unit_id(&self) -> &UnitId {
        &self.unit_id
    }

    fn owner(&self) -> PlayerId {
        self.owner
    }

    fn status(&self) -> UnitStatus {
        self.status
    }

    fn unit_location(&self) -> Option<MapCoordinates3D> {
        self.unit_location
    }

    fn combat_location(&self) -> Option<MapCoordinates3D> {
        self.combat_location
    }

    fn combat_position(&self) -> Option<CombatPosition> {
        self.combat_position
    }

    fn magic_realm_lifeform(&self) -> &MagicRealmId {
        &self.magic_realm
    }

    fn modified_skill_value(&self, skill: &str) -> Option<i32> {
        self.skills
            .iter()
            .find(|(id, _)| *id == skill)
            .map(|(_, value)| *value)
    }

    fn ranged_attack_type(&self) -> Option<&RangedAttackTypeId> {
        self.ranged_attack_type.as_ref()
    }

    fn ammo_remaining(&self) -> u32 {
        self.ammo_remaining
    }

    fn total_damage_taken(&self) -> u32 {
        self.total_damage_taken
    }

    fn healable_damage_taken(&self) -> u32 {
        self.healable_damage_taken
    }
}

/// Urn given to every sample unit; samples never enter the game.
pub const SAMPLE_UNIT_URN: UnitUrn = UnitUrn(0);

fn sample_from_database(
    database: &dyn SpellDatabase,
    unit_id: &UnitId,
    owner: PlayerId,
    location: MapCoordinates3D,
) -> Result<UnitSnapshot, OracleError> {
    let definition = database.unit(unit_id)?;
    let unit = UnitSnapshot::from_definition(SAMPLE_UNIT_URN, definition, owner, location);
    Ok(unit)
}

impl SampleUnitFactory for DatabaseSnapshot {
    fn sample_unit(
        &self,
        unit_id: &UnitId,
        owner: PlayerId,
        location: MapCoordinates3D,
    ) -> Result<Box<dyn UnitView + '_>, OracleError> {
        let unit = sample_from_database(self, unit_id, owner, location)?;
        Ok(Box::new(unit))
    }
}

/// Builds sample units from any database implementation.
#[derive(Clone, Copy)]
pub struct DatabaseUnitFactory<'a> {
    database: &'a dyn SpellDatabase,
}

impl<'a> DatabaseUnitFactory<'a> {
    pub fn new(database: &'a dyn SpellDatabase) -> Self {
        Self { database }
    }
}

impl SampleUnitFactory for DatabaseUnitFactory<'_> {
    fn sample_unit(
        &self,
        unit_id: &UnitId,
        owner: PlayerId,
        location: MapCoordinates3D,
    ) -> Result<Box<dyn UnitView + '_>, OracleError> {
        let unit = sample_from_database(self.database, unit_id, owner, location)?;
        Ok(Box::new(unit))
    }
}

// ============================================================================
// Movement
// ============================================================================

/// One movement rule: a unit with `unit_skill_id` (or any unit) entering
/// `tile_type_id` (or any tile) pays `double_movement`, or cannot enter at
/// all when that is `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MovementRateRule {
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit_skill_id: Option<UnitSkillId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tile_type_id: Option<TileTypeId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub double_movement: Option<u32>,
}

impl MovementRateRule {
    fn matches(&self, unit: &dyn UnitView, tile_type: &TileTypeId) -> bool {
        let skill_ok = self
            .unit_skill_id
            .as_ref()
            .is_none_or(|skill| unit.has_skill(skill.as_str()));
        let tile_ok = self
            .tile_type_id
            .as_ref()
            .is_none_or(|id| id == tile_type);
        skill_ok && tile_ok
    }
}

/// Ordered movement rules. The first matching rule decides; no match means
/// the unit cannot enter the tile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MovementRuleTable {
    rules: Vec<MovementRateRule>,
}

impl MovementRuleTable {
    pub fn new(rules: Vec<MovementRateRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[MovementRateRule] {
        &self.rules
    }
}

impl MovementOracle for MovementRuleTable {
    fn movement_cost(&self, unit: &dyn UnitView, tile_type: &TileTypeId) -> Option<u32> {
        self.rules
            .iter()
            .find(|rule| rule.matches(unit, tile_type))
            .and_then(|rule| rule.double_movement)
    }
}
