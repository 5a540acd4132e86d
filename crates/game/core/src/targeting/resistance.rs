//! Resistance rolls.
//!
//! A unit resists a spell by rolling under its resistance on a d10. Saving
//! throw modifiers lower the effective resistance; once it reaches the die
//! size, the roll can never fail and the spell is wasted.

use crate::config::TargetingConfig;
use crate::constants::UNIT_SKILL_ID_SAVING_THROW_PENALTY;
use crate::env::UnitView;
use crate::spell::{LifeformFilter, SpellDefinition};

/// Everything that worsens the target's saving throw against one cast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SavingThrowModifier {
    pub base_damage: i32,
    pub variable_damage: i32,
    pub casting_unit_penalty: i32,
    pub lifeform: i32,
}

impl SavingThrowModifier {
    pub fn new(
        spell: &SpellDefinition,
        in_combat: bool,
        variable_damage: Option<i32>,
        casting_unit: Option<&dyn UnitView>,
        lifeform: LifeformFilter<'_>,
    ) -> Self {
        let base_damage = if in_combat {
            spell.combat_base_damage
        } else {
            spell.overland_base_damage
        };
        Self {
            base_damage: base_damage.unwrap_or(0),
            variable_damage: variable_damage.unwrap_or(0),
            casting_unit_penalty: casting_unit
                .and_then(|unit| unit.modified_skill_value(UNIT_SKILL_ID_SAVING_THROW_PENALTY))
                .unwrap_or(0),
            lifeform: lifeform.saving_throw_modifier(),
        }
    }

    pub fn total(&self) -> i32 {
        self.base_damage + self.variable_damage + self.casting_unit_penalty + self.lifeform
    }

    /// Whether a unit with `resistance` passes every possible roll.
    pub fn always_resisted(&self, resistance: i32, config: &TargetingConfig) -> bool {
        resistance - self.total() >= config.resistance_roll_sides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spell::SpellBookSection;

    #[test]
    fn combat_and_overland_use_their_own_base_damage() {
        let mut spell = SpellDefinition::new("SP001", SpellBookSection::UnitCurses);
        spell.combat_base_damage = Some(4);
        spell.overland_base_damage = Some(1);

        let combat =
            SavingThrowModifier::new(&spell, true, None, None, LifeformFilter::Unrestricted);
        let overland =
            SavingThrowModifier::new(&spell, false, Some(2), None, LifeformFilter::Unrestricted);
        assert_eq!(combat.total(), 4);
        assert_eq!(overland.total(), 3);
    }

    #[test]
    fn resistance_threshold_is_the_die_size() {
        let config = TargetingConfig::default();
        let none = SavingThrowModifier::default();
        assert!(none.always_resisted(10, &config));
        assert!(!none.always_resisted(9, &config));

        let four = SavingThrowModifier {
            base_damage: 4,
            ..SavingThrowModifier::default()
        };
        assert!(!four.always_resisted(12, &config));
        assert!(four.always_resisted(14, &config));
    }
}
