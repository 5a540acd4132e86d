//! Identifiers and read-only game-state records consumed by the evaluators.
//!
//! Nothing in here is mutated by spell-core. The surrounding game owns these
//! records and hands out snapshots through the [`env`](crate::env) oracles.
mod coordinates;
mod ids;
mod memory;
mod terrain;
mod wizard;

pub use coordinates::{CombatPosition, MapCoordinates3D};
pub use ids::{
    BuildingId, CitySpellEffectId, CombatTileBorderId, CombatTileTypeId, DamageTypeId,
    MagicRealmId, MapFeatureId, PickId, PlayerId, RangedAttackTypeId, SpellId, TileTypeId, UnitId,
    UnitSkillId, UnitUrn,
};
pub use memory::{ActiveSpell, ActiveSpellTarget, BuildingRecord, UnitRecord, UnitStatus};
pub use terrain::{CombatMapTile, OverlandCity, OverlandTile};
pub use wizard::{CastingProgress, KnownWizard, WizardKind, WizardState};
