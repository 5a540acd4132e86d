//! Spell definitions and their classification.
mod definition;
mod kind;

pub use definition::{
    AttackSpellTarget, DamageResolutionType, LifeformFilter, SpellBookSection, SpellDefinition,
    SpellValidMapFeatureTarget, SpellValidTileTypeTarget, SpellValidUnitTarget, UnitSpellEffect,
};
pub use kind::KindOfSpell;
