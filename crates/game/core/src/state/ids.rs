//! Identifier newtypes.
//!
//! Database records are keyed by short string ids (`"SP001"`, `"UN106"`) that
//! come straight from the content files. Each record kind gets its own newtype
//! so a tile type id can never be passed where a spell id is expected.

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Spell definition id.
    SpellId
);
string_id!(
    /// Unit definition id (the unit type, not an individual unit).
    UnitId
);
string_id!(
    /// Unit skill id; also used for unit attributes such as resistance.
    UnitSkillId
);
string_id!(
    /// City spell effect id (granted by city enchantments and curses).
    CitySpellEffectId
);
string_id!(BuildingId);
string_id!(TileTypeId);
string_id!(MapFeatureId);
string_id!(
    /// Magic realm / lifeform type id (e.g. normal, undead, chaos creature).
    MagicRealmId
);
string_id!(DamageTypeId);
string_id!(CombatTileTypeId);
string_id!(CombatTileBorderId);
string_id!(RangedAttackTypeId);
string_id!(
    /// Wizard pick id; spell books of a realm are picks.
    PickId
);

/// Player identifier. AI, raider and monster players may be negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub i32);

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

/// Unique reference number of an individual unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitUrn(pub u32);

impl core::fmt::Display for UnitUrn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}
