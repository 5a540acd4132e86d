//! Unit views and hypothetical sample units.

use super::{DamageTypeDefinition, OracleError};
use crate::constants::{UNIT_ATTRIBUTE_ID_RESISTANCE, UNIT_SKILL_ID_EXPERIENCE};
use crate::state::{
    CombatPosition, MagicRealmId, MapCoordinates3D, PlayerId, RangedAttackTypeId, UnitId,
    UnitStatus, UnitUrn,
};

/// Read-only view of one unit with all modifiers already applied.
///
/// Skill values are "modified" values: hero items, enchantments, curses and
/// experience bonuses have been folded in by whoever produced the view.
pub trait UnitView: Send + Sync {
    fn urn(&self) -> UnitUrn;
    fn unit_id(&self) -> &UnitId;
    fn owner(&self) -> PlayerId;
    fn status(&self) -> UnitStatus;

    /// Overland cell the unit stands on.
    fn unit_location(&self) -> Option<MapCoordinates3D>;

    /// Combat the unit is taking part in, identified by its overland cell.
    fn combat_location(&self) -> Option<MapCoordinates3D>;
    fn combat_position(&self) -> Option<CombatPosition>;

    /// Lifeform type, after effects such as Chaos Channels or undeath.
    fn magic_realm_lifeform(&self) -> &MagicRealmId;

    /// Modified value of a skill or attribute, `None` if the unit lacks it.
    fn modified_skill_value(&self, skill: &str) -> Option<i32>;

    fn ranged_attack_type(&self) -> Option<&RangedAttackTypeId>;
    fn ammo_remaining(&self) -> u32;

    /// All damage taken, of any kind.
    fn total_damage_taken(&self) -> u32;

    /// Damage that healing spells can restore (excludes permanent and life-stealing damage).
    fn healable_damage_taken(&self) -> u32;

    fn has_skill(&self, skill: &str) -> bool {
        self.modified_skill_value(skill).is_some()
    }

    fn is_immune_to(&self, damage_type: &DamageTypeDefinition) -> bool {
        damage_type
            .immunity_skills
            .iter()
            .any(|skill| self.has_skill(skill.as_str()))
    }

    fn resistance(&self) -> i32 {
        self.modified_skill_value(UNIT_ATTRIBUTE_ID_RESISTANCE)
            .unwrap_or(0)
    }

    fn experience(&self) -> i32 {
        self.modified_skill_value(UNIT_SKILL_ID_EXPERIENCE)
            .unwrap_or(0)
    }
}

/// Builds throwaway units used to ask "could this unit stand here?".
///
/// Summoning and Floating Island checks test the units the spell would
/// create before they exist.
pub trait SampleUnitFactory: Send + Sync {
    fn sample_unit(
        &self,
        unit_id: &UnitId,
        owner: PlayerId,
        location: MapCoordinates3D,
    ) -> Result<Box<dyn UnitView + '_>, OracleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync + ?Sized>() {}

    #[test]
    fn units_can_be_shared_across_threads() {
        assert_send_sync::<dyn UnitView>();
        assert_send_sync::<dyn SampleUnitFactory>();
        assert_send_sync::<Box<dyn UnitView + 'static>>();
    }
}
