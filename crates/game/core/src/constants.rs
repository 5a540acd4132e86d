//! Ids the rules single out by name.
//!
//! These match the reference content shipped in `spell-content/data`. Any
//! database used with this crate must use the same ids for these records.

/// Moves a unit stack to the other plane.
pub const SPELL_ID_PLANE_SHIFT: &str = "SP170";

/// Steals the mana a wizard has already put into the spell being cast.
pub const SPELL_ID_SPELL_BLAST: &str = "SP126";

/// Overland enchantment that blocks all plane shifting while in effect.
pub const SPELL_ID_PLANAR_SEAL: &str = "SP165";

/// Experience points, stored as a unit skill.
pub const UNIT_SKILL_ID_EXPERIENCE: &str = "UX01";

/// Modified resistance attribute.
pub const UNIT_ATTRIBUTE_ID_RESISTANCE: &str = "UA06";

/// Skill (typically from a hero item) that worsens the target's saving throws.
pub const UNIT_SKILL_ID_SAVING_THROW_PENALTY: &str = "US209";

/// Map features of a Tower of Wizardry, before and after it is cleared.
pub const FEATURE_UNCLEARED_TOWER_OF_WIZARDRY: &str = "MF12A";
pub const FEATURE_CLEARED_TOWER_OF_WIZARDRY: &str = "MF12B";

/// City effect of Evil Presence; pointless against owners with Death books.
pub const CITY_SPELL_EFFECT_ID_EVIL_PRESENCE: &str = "SE183";

/// Death spell book pick.
pub const PICK_ID_DEATH_BOOK: &str = "MB02";

/// Dispel spells whose overland maximum damage reaches this value strip
/// overland enchantments (Disjunction); below it they dispel unit, city and
/// combat spells.
pub const DISPEL_OVERLAND_ENCHANTMENTS_MIN_DAMAGE: i32 = 1000;

/// Returns true if the map feature is a Tower of Wizardry in either state.
pub fn is_tower_of_wizardry(map_feature: &str) -> bool {
    map_feature == FEATURE_UNCLEARED_TOWER_OF_WIZARDRY
        || map_feature == FEATURE_CLEARED_TOWER_OF_WIZARDRY
}
