use crate::state::{CombatMapTile, CombatPosition, MapCoordinates3D, OverlandTile};

/// Overland terrain as the casting player remembers it.
pub trait TerrainOracle: Send + Sync {
    /// Returns `None` for cells outside the map.
    fn overland_tile(&self, location: MapCoordinates3D) -> Option<&OverlandTile>;
}

/// Map of the combat currently being fought.
pub trait CombatMapOracle: Send + Sync {
    /// Returns `None` for cells outside the combat map grid.
    fn combat_tile(&self, position: CombatPosition) -> Option<&CombatMapTile>;
}
