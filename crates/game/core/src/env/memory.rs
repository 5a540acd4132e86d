use crate::state::{
    ActiveSpell, BuildingId, BuildingRecord, MapCoordinates3D, PlayerId, UnitRecord, UnitUrn,
};

/// Everything the casting player knows is in play: spells, units, buildings.
pub trait MemoryOracle: Send + Sync {
    fn active_spells(&self) -> &[ActiveSpell];
    fn units(&self) -> &[UnitRecord];
    fn buildings(&self) -> &[BuildingRecord];
}

impl dyn MemoryOracle + '_ {
    pub fn spells_on_unit(&self, urn: UnitUrn) -> impl Iterator<Item = &ActiveSpell> {
        self.active_spells()
            .iter()
            .filter(move |spell| spell.unit() == Some(urn))
    }

    pub fn spells_on_city(
        &self,
        location: MapCoordinates3D,
    ) -> impl Iterator<Item = &ActiveSpell> {
        self.active_spells()
            .iter()
            .filter(move |spell| spell.city_location() == Some(location))
    }

    /// Living units standing on an overland cell.
    pub fn units_at(&self, location: MapCoordinates3D) -> impl Iterator<Item = &UnitRecord> {
        self.units()
            .iter()
            .filter(move |unit| unit.is_alive_at(location))
    }

    pub fn has_enemy_units_at(&self, location: MapCoordinates3D, player: PlayerId) -> bool {
        self.units_at(location).any(|unit| unit.owner != player)
    }

    pub fn has_building(&self, location: MapCoordinates3D, building: &BuildingId) -> bool {
        self.buildings().iter().any(|record| {
            record.city_location == location && &record.building_id == building
        })
    }
}
