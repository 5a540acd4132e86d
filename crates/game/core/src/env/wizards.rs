use crate::state::{CastingProgress, KnownWizard, PlayerId};

/// What the casting player knows about other players.
pub trait WizardOracle: Send + Sync {
    /// The record `knower` holds about `wizard`, if they have met.
    fn known_wizard(&self, knower: PlayerId, wizard: PlayerId) -> Option<&KnownWizard>;

    /// The overland spell `player` is currently casting, if any.
    fn casting_progress(&self, player: PlayerId) -> Option<&CastingProgress>;

    fn stored_mana(&self, player: PlayerId) -> u32;

    /// Number of picks of a kind (spell books of a realm, retorts) the player has.
    fn pick_count(&self, player: PlayerId, pick: &str) -> u32;
}
