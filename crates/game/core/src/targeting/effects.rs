//! Which of a spell's effects are still missing from a target.
//!
//! A unit or city may carry the same spell several times only if each copy
//! grants a different effect, so a spell is pointless once every effect it can
//! grant is already present from this spell and this caster.

use crate::env::{MemoryOracle, SpellDatabase, TargetingEnv};
use crate::spell::{SpellDefinition, UnitSpellEffect};
use crate::state::{ActiveSpellTarget, CitySpellEffectId, MapCoordinates3D, PlayerId, UnitUrn};

use super::TargetingError;

/// Unit effects of `spell` that `caster` has not already put on `unit`.
pub fn unit_effects_not_yet_cast<'s>(
    spell: &'s SpellDefinition,
    caster: PlayerId,
    unit: UnitUrn,
    memory: &dyn MemoryOracle,
) -> Vec<&'s UnitSpellEffect> {
    spell
        .unit_spell_effect
        .iter()
        .filter(|effect| {
            !memory.spells_on_unit(unit).any(|active| {
                active.spell_id == spell.spell_id
                    && active.casting_player == caster
                    && matches!(
                        &active.target,
                        ActiveSpellTarget::Unit { unit_skill, .. }
                            if *unit_skill == effect.unit_skill_id
                    )
            })
        })
        .collect()
}

/// City effects of `spell` that `caster` has not already put on the city.
pub fn city_effects_not_yet_cast<'s>(
    spell: &'s SpellDefinition,
    caster: PlayerId,
    location: MapCoordinates3D,
    memory: &dyn MemoryOracle,
) -> Vec<&'s CitySpellEffectId> {
    spell
        .city_spell_effect
        .iter()
        .filter(|effect| {
            !memory.spells_on_city(location).any(|active| {
                active.spell_id == spell.spell_id
                    && active.casting_player == caster
                    && matches!(
                        &active.target,
                        ActiveSpellTarget::City { effect: existing, .. } if existing == *effect
                    )
            })
        })
        .collect()
}

/// Whether a city effect at `location`, maintained by someone other than
/// `caster`, shields it from the realm of `spell`.
pub(crate) fn is_protected_against_realm(
    spell: &SpellDefinition,
    caster: PlayerId,
    location: MapCoordinates3D,
    env: &TargetingEnv<'_>,
) -> Result<bool, TargetingError> {
    let Some(realm) = spell.spell_realm.as_ref() else {
        return Ok(false);
    };
    let database: &dyn SpellDatabase = env.database();

    for active in env.memory()?.spells_on_city(location) {
        if active.casting_player == caster {
            continue;
        }
        if let ActiveSpellTarget::City { effect, .. } = &active.target
            && database.city_spell_effect(effect)?.protects_against(realm)
        {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether another player has a spell on `unit` that could be dispelled.
pub(crate) fn has_dispellable_spell(
    caster: PlayerId,
    unit: UnitUrn,
    memory: &dyn MemoryOracle,
) -> bool {
    memory
        .spells_on_unit(unit)
        .any(|active| active.casting_player != caster)
}
