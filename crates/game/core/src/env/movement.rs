use super::UnitView;
use crate::state::TileTypeId;

/// Movement rules: whether a unit can enter a tile type.
pub trait MovementOracle: Send + Sync {
    /// Doubled movement points to enter the tile type, `None` if impassable.
    fn movement_cost(&self, unit: &dyn UnitView, tile_type: &TileTypeId) -> Option<u32>;

    fn is_passable(&self, unit: &dyn UnitView, tile_type: &TileTypeId) -> bool {
        self.movement_cost(unit, tile_type).is_some()
    }
}
