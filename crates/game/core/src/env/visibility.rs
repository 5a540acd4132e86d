use super::UnitView;
use crate::state::{MapCoordinates3D, PlayerId};

/// Fog of war for the casting player.
pub trait VisibilityOracle: Send + Sync {
    /// Whether the player can currently see this overland cell.
    fn can_see_location(&self, player: PlayerId, location: MapCoordinates3D) -> bool;

    /// Whether the player can see the unit itself, which may be invisible
    /// even on a visible cell.
    fn can_see_unit(&self, player: PlayerId, unit: &dyn UnitView) -> bool;
}
