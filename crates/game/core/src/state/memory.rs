//! Records of what a player knows about the game: spells in effect, units and
//! buildings.
//!
//! These are read-only snapshot entries. They are owned and mutated by the
//! surrounding game; evaluators only borrow them for the duration of one query.

use super::{
    BuildingId, CitySpellEffectId, MapCoordinates3D, PlayerId, SpellId, UnitId, UnitSkillId,
    UnitUrn,
};

/// Lifecycle status of a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitStatus {
    #[default]
    Alive,
    Dead,
    /// Heroes that have not been summoned yet.
    NotGenerated,
}

/// A spell currently in effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveSpell {
    pub spell_id: SpellId,
    pub casting_player: PlayerId,
    pub target: ActiveSpellTarget,
}

impl ActiveSpell {
    pub fn overland(spell_id: SpellId, casting_player: PlayerId) -> Self {
        Self {
            spell_id,
            casting_player,
            target: ActiveSpellTarget::Overland,
        }
    }

    pub fn on_unit(
        spell_id: SpellId,
        casting_player: PlayerId,
        unit: UnitUrn,
        unit_skill: UnitSkillId,
    ) -> Self {
        Self {
            spell_id,
            casting_player,
            target: ActiveSpellTarget::Unit { unit, unit_skill },
        }
    }

    pub fn on_city(
        spell_id: SpellId,
        casting_player: PlayerId,
        location: MapCoordinates3D,
        effect: CitySpellEffectId,
    ) -> Self {
        Self {
            spell_id,
            casting_player,
            target: ActiveSpellTarget::City { location, effect },
        }
    }

    /// Returns the unit this spell is attached to, if any.
    pub fn unit(&self) -> Option<UnitUrn> {
        match &self.target {
            ActiveSpellTarget::Unit { unit, .. } => Some(*unit),
            _ => None,
        }
    }

    /// Returns the city location this spell is attached to, if any.
    pub fn city_location(&self) -> Option<MapCoordinates3D> {
        match &self.target {
            ActiveSpellTarget::City { location, .. } => Some(*location),
            _ => None,
        }
    }
}

/// What an active spell is attached to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActiveSpellTarget {
    /// Overland enchantment, attached to nothing.
    Overland,
    /// Unit enchantment or curse granting one skill.
    Unit { unit: UnitUrn, unit_skill: UnitSkillId },
    /// City enchantment or curse granting one effect.
    City {
        location: MapCoordinates3D,
        effect: CitySpellEffectId,
    },
}

/// Memory view of a unit, as used for stacking and enemy-presence checks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitRecord {
    pub urn: UnitUrn,
    pub unit_id: UnitId,
    pub owner: PlayerId,
    pub location: Option<MapCoordinates3D>,
    pub status: UnitStatus,
}

impl UnitRecord {
    pub fn is_alive_at(&self, location: MapCoordinates3D) -> bool {
        self.status == UnitStatus::Alive && self.location == Some(location)
    }
}

/// A building standing in a city.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingRecord {
    pub city_location: MapCoordinates3D,
    pub building_id: BuildingId,
}
