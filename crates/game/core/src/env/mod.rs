//! Traits describing the read-only world a spell is cast into.
//!
//! Oracles expose the static spell database, the terrain and fog of war the
//! caster knows about, spells and units in play, other wizards and movement
//! rules. The [`TargetingEnv`] aggregate bundles them so evaluators can reach
//! everything they need without coupling to concrete implementations.
mod database;
mod error;
mod memory;
mod movement;
mod snapshot;
mod terrain;
mod units;
mod visibility;
mod wizards;

pub use database::{
    BuildingDefinition, CitySpellEffectDefinition, CombatTileTypeDefinition, DamageTypeDefinition,
    MagicRealmDefinition, RangedAttackTypeDefinition, SpellDatabase, TileTypeDefinition,
    UnitDefinition,
};
pub use error::OracleError;
pub use memory::MemoryOracle;
pub use movement::MovementOracle;
pub use snapshot::{
    CombatMapSnapshot, DatabaseSnapshot, DatabaseUnitFactory, MemorySnapshot, MovementRateRule,
    MovementRuleTable, SAMPLE_UNIT_URN, TerrainSnapshot, UnitSnapshot, VisibilitySnapshot,
    WizardSnapshot,
};
pub use terrain::{CombatMapOracle, TerrainOracle};
pub use units::{SampleUnitFactory, UnitView};
pub use visibility::VisibilityOracle;
pub use wizards::WizardOracle;

use crate::config::TargetingConfig;

/// Aggregates the read-only oracles a target query may consult.
///
/// Only the database is mandatory. Every other oracle is attached with a
/// `with_*` method; a query that needs one that was not attached fails with
/// the matching `*NotAvailable` [`OracleError`].
#[derive(Clone, Copy)]
pub struct TargetingEnv<'a> {
    database: &'a dyn SpellDatabase,
    terrain: Option<&'a dyn TerrainOracle>,
    combat_map: Option<&'a dyn CombatMapOracle>,
    visibility: Option<&'a dyn VisibilityOracle>,
    memory: Option<&'a dyn MemoryOracle>,
    wizards: Option<&'a dyn WizardOracle>,
    movement: Option<&'a dyn MovementOracle>,
    unit_factory: Option<&'a dyn SampleUnitFactory>,
    config: TargetingConfig,
}

impl<'a> TargetingEnv<'a> {
    pub fn new(database: &'a dyn SpellDatabase) -> Self {
        Self {
            database,
            terrain: None,
            combat_map: None,
            visibility: None,
            memory: None,
            wizards: None,
            movement: None,
            unit_factory: None,
            config: TargetingConfig::default(),
        }
    }

    pub fn with_terrain(mut self, terrain: &'a dyn TerrainOracle) -> Self {
        self.terrain = Some(terrain);
        self
    }

    pub fn with_combat_map(mut self, combat_map: &'a dyn CombatMapOracle) -> Self {
        self.combat_map = Some(combat_map);
        self
    }

    pub fn with_visibility(mut self, visibility: &'a dyn VisibilityOracle) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_memory(mut self, memory: &'a dyn MemoryOracle) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn with_wizards(mut self, wizards: &'a dyn WizardOracle) -> Self {
        self.wizards = Some(wizards);
        self
    }

    pub fn with_movement(mut self, movement: &'a dyn MovementOracle) -> Self {
        self.movement = Some(movement);
        self
    }

    pub fn with_unit_factory(mut self, unit_factory: &'a dyn SampleUnitFactory) -> Self {
        self.unit_factory = Some(unit_factory);
        self
    }

    pub fn with_config(mut self, config: TargetingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn database(&self) -> &'a dyn SpellDatabase {
        self.database
    }

    /// Returns the TerrainOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TerrainNotAvailable` if no terrain oracle was provided.
    pub fn terrain(&self) -> Result<&'a dyn TerrainOracle, OracleError> {
        self.terrain.ok_or(OracleError::TerrainNotAvailable)
    }

    /// Returns the CombatMapOracle, or an error if not available.
    pub fn combat_map(&self) -> Result<&'a dyn CombatMapOracle, OracleError> {
        self.combat_map.ok_or(OracleError::CombatMapNotAvailable)
    }

    /// Returns the VisibilityOracle, or an error if not available.
    pub fn visibility(&self) -> Result<&'a dyn VisibilityOracle, OracleError> {
        self.visibility.ok_or(OracleError::VisibilityNotAvailable)
    }

    /// Returns the MemoryOracle, or an error if not available.
    pub fn memory(&self) -> Result<&'a dyn MemoryOracle, OracleError> {
        self.memory.ok_or(OracleError::MemoryNotAvailable)
    }

    pub fn wizards(&self) -> Result<&'a dyn WizardOracle, OracleError> {
        self.wizards.ok_or(OracleError::WizardsNotAvailable)
    }

    pub fn movement(&self) -> Result<&'a dyn MovementOracle, OracleError> {
        self.movement.ok_or(OracleError::MovementNotAvailable)
    }

    pub fn unit_factory(&self) -> Result<&'a dyn SampleUnitFactory, OracleError> {
        self.unit_factory
            .ok_or(OracleError::UnitFactoryNotAvailable)
    }

    pub fn config(&self) -> &TargetingConfig {
        &self.config
    }
}

impl core::fmt::Debug for TargetingEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TargetingEnv")
            .field("terrain", &self.terrain.is_some())
            .field("combat_map", &self.combat_map.is_some())
            .field("visibility", &self.visibility.is_some())
            .field("memory", &self.memory.is_some())
            .field("wizards", &self.wizards.is_some())
            .field("movement", &self.movement.is_some())
            .field("unit_factory", &self.unit_factory.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
