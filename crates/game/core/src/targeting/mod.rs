//! Target eligibility evaluators.
//!
//! One query type per kind of target. Each builds the context for one cast,
//! classifies the spell unless told its kind, then runs an ordered guard chain
//! that stops at the first rule the target breaks. Queries only read the
//! [`TargetingEnv`](crate::env::TargetingEnv); they never change game state.
mod city;
mod combat;
mod effects;
mod error;
mod guard;
mod overland;
mod resistance;
mod result;
mod spell;
mod unit;
mod wizard;

#[cfg(test)]
pub(crate) mod fixtures;

pub use city::CityTargetQuery;
pub use combat::CombatLocationQuery;
pub use effects::{city_effects_not_yet_cast, unit_effects_not_yet_cast};
pub use error::TargetingError;
pub use overland::OverlandLocationQuery;
pub use resistance::SavingThrowModifier;
pub use result::TargetSpellResult;
pub use spell::SpellTargetQuery;
pub use unit::UnitTargetQuery;
pub use wizard::WizardTargetQuery;

use crate::spell::{KindOfSpell, SpellBookSection, SpellDefinition};

fn resolve_kind(
    spell: &SpellDefinition,
    kind: Option<KindOfSpell>,
    section: Option<SpellBookSection>,
) -> KindOfSpell {
    kind.unwrap_or_else(|| KindOfSpell::classify(spell, section.unwrap_or(spell.section)))
}
