//! What a player knows about other wizards.

use super::{PlayerId, SpellId};

/// Kind of player behind a wizard record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WizardKind {
    #[default]
    Wizard,
    Raiders,
    Monsters,
}

impl WizardKind {
    /// Raiders and monsters own units but are not wizards.
    pub fn is_wizard(self) -> bool {
        matches!(self, WizardKind::Wizard)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WizardState {
    #[default]
    Active,
    Banished,
    Defeated,
}

/// A wizard as known by another player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnownWizard {
    pub player: PlayerId,
    pub kind: WizardKind,
    pub state: WizardState,
}

impl KnownWizard {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            kind: WizardKind::Wizard,
            state: WizardState::Active,
        }
    }
}

/// The overland spell a wizard is part-way through casting.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastingProgress {
    pub spell: SpellId,
    pub mana_spent: u32,
}
