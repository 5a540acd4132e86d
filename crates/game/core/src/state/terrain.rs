//! Terrain as known to a player: overland tiles and combat map tiles.

use super::{CombatTileBorderId, CombatTileTypeId, MapFeatureId, PlayerId, TileTypeId};

/// One overland map cell as last seen by the player.
///
/// Every field is optional because fog of war may hide any of it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlandTile {
    pub tile_type: Option<TileTypeId>,
    pub map_feature: Option<MapFeatureId>,
    pub city: Option<OverlandCity>,
    /// Owner of the magic node on this tile, if it is a node and captured.
    pub node_owner: Option<PlayerId>,
    /// Turns of corruption remaining; `Some` means corrupted.
    pub corrupted: Option<u32>,
    pub warped: bool,
}

impl OverlandTile {
    pub fn with_tile_type(tile_type: TileTypeId) -> Self {
        Self {
            tile_type: Some(tile_type),
            ..Self::default()
        }
    }

    pub fn is_corrupted(&self) -> bool {
        self.corrupted.is_some()
    }
}

/// City standing on an overland tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlandCity {
    pub owner: PlayerId,
    pub population: u32,
}

/// One cell of a combat map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatMapTile {
    /// Cells outside the playable diamond of the combat map.
    pub off_map_edge: bool,
    pub terrain_layer: Option<CombatTileTypeId>,
    /// City wall segments and similar edges drawn on this cell.
    pub borders: Vec<CombatTileBorderId>,
    /// Set once the wall on this cell has been knocked down.
    pub wrecked: bool,
}
