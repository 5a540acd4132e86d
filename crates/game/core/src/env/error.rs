//! Oracle access errors.
//!
//! Errors related to collaborator availability and database lookups.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{
    BuildingId, CitySpellEffectId, CombatTileTypeId, DamageTypeId, MagicRealmId,
    RangedAttackTypeId, SpellId, TileTypeId, UnitId,
};

/// Errors that occur when accessing oracle data.
///
/// A missing oracle means the caller wired the query incorrectly. A missing
/// record means the game data is malformed or does not match the state being
/// evaluated. Neither is recovered from inside spell-core.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// TerrainOracle is not available in the environment.
    #[error("TerrainOracle not available")]
    TerrainNotAvailable,

    /// VisibilityOracle is not available in the environment.
    #[error("VisibilityOracle not available")]
    VisibilityNotAvailable,

    /// MemoryOracle is not available in the environment.
    #[error("MemoryOracle not available")]
    MemoryNotAvailable,

    /// WizardOracle is not available in the environment.
    #[error("WizardOracle not available")]
    WizardsNotAvailable,

    /// MovementOracle is not available in the environment.
    #[error("MovementOracle not available")]
    MovementNotAvailable,

    /// SampleUnitFactory is not available in the environment.
    #[error("SampleUnitFactory not available")]
    UnitFactoryNotAvailable,

    /// Combat map was not supplied for a query that needs it.
    #[error("CombatMapOracle not available")]
    CombatMapNotAvailable,

    #[error("spell '{0}' not found")]
    SpellNotFound(SpellId),

    #[error("unit '{0}' not found")]
    UnitNotFound(UnitId),

    #[error("tile type '{0}' not found")]
    TileTypeNotFound(TileTypeId),

    #[error("combat tile type '{0}' not found")]
    CombatTileTypeNotFound(CombatTileTypeId),

    #[error("damage type '{0}' not found")]
    DamageTypeNotFound(DamageTypeId),

    #[error("magic realm '{0}' not found")]
    MagicRealmNotFound(MagicRealmId),

    #[error("ranged attack type '{0}' not found")]
    RangedAttackTypeNotFound(RangedAttackTypeId),

    #[error("city spell effect '{0}' not found")]
    CitySpellEffectNotFound(CitySpellEffectId),

    #[error("building '{0}' not found")]
    BuildingNotFound(BuildingId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Missing oracles are fatal - the query cannot be answered
            TerrainNotAvailable | VisibilityNotAvailable | MemoryNotAvailable
            | WizardsNotAvailable | MovementNotAvailable | UnitFactoryNotAvailable
            | CombatMapNotAvailable => ErrorSeverity::Fatal,

            // Not found errors are validation errors - invalid references
            SpellNotFound(_)
            | UnitNotFound(_)
            | TileTypeNotFound(_)
            | CombatTileTypeNotFound(_)
            | DamageTypeNotFound(_)
            | MagicRealmNotFound(_)
            | RangedAttackTypeNotFound(_)
            | CitySpellEffectNotFound(_)
            | BuildingNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            TerrainNotAvailable => "ORACLE_TERRAIN_NOT_AVAILABLE",
            VisibilityNotAvailable => "ORACLE_VISIBILITY_NOT_AVAILABLE",
            MemoryNotAvailable => "ORACLE_MEMORY_NOT_AVAILABLE",
            WizardsNotAvailable => "ORACLE_WIZARDS_NOT_AVAILABLE",
            MovementNotAvailable => "ORACLE_MOVEMENT_NOT_AVAILABLE",
            UnitFactoryNotAvailable => "ORACLE_UNIT_FACTORY_NOT_AVAILABLE",
            CombatMapNotAvailable => "ORACLE_COMBAT_MAP_NOT_AVAILABLE",
            SpellNotFound(_) => "ORACLE_SPELL_NOT_FOUND",
            UnitNotFound(_) => "ORACLE_UNIT_NOT_FOUND",
            TileTypeNotFound(_) => "ORACLE_TILE_TYPE_NOT_FOUND",
            CombatTileTypeNotFound(_) => "ORACLE_COMBAT_TILE_TYPE_NOT_FOUND",
            DamageTypeNotFound(_) => "ORACLE_DAMAGE_TYPE_NOT_FOUND",
            MagicRealmNotFound(_) => "ORACLE_MAGIC_REALM_NOT_FOUND",
            RangedAttackTypeNotFound(_) => "ORACLE_RANGED_ATTACK_TYPE_NOT_FOUND",
            CitySpellEffectNotFound(_) => "ORACLE_CITY_SPELL_EFFECT_NOT_FOUND",
            BuildingNotFound(_) => "ORACLE_BUILDING_NOT_FOUND",
        }
    }
}
