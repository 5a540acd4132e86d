//! Spell classification and target eligibility rules.
//!
//! `spell-core` answers two questions for the casting flow, AI target search
//! and UI highlighting: what kind of spell is this ([`KindOfSpell`]), and may
//! it be cast at this target ([`TargetSpellResult`]). Everything is a pure
//! query over read-only oracles bundled in [`TargetingEnv`]; nothing in this
//! crate mutates game state.
pub mod config;
pub mod constants;
pub mod env;
pub mod error;
pub mod spell;
pub mod state;
pub mod targeting;

pub use config::TargetingConfig;
pub use env::{
    CombatMapOracle, MemoryOracle, MovementOracle, OracleError, SampleUnitFactory, SpellDatabase,
    TargetingEnv, TerrainOracle, UnitView, VisibilityOracle, WizardOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use spell::{KindOfSpell, SpellBookSection, SpellDefinition};
pub use state::{MapCoordinates3D, PlayerId, UnitUrn};
pub use targeting::{
    CityTargetQuery, CombatLocationQuery, OverlandLocationQuery, SpellTargetQuery,
    TargetSpellResult, TargetingError, UnitTargetQuery, WizardTargetQuery,
};
