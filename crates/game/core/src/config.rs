/// Rules constants and tunable parameters used by the target evaluators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TargetingConfig {
    /// Most units that may stand in one overland map cell.
    pub max_units_per_map_cell: u32,

    /// Cities smaller than this are outposts and cannot gain buildings.
    pub min_city_population_for_buildings: u32,

    /// Sides on the die rolled against resistance. A unit whose resistance,
    /// after saving throw penalties, reaches this value can never fail.
    pub resistance_roll_sides: i32,

    /// Highest experience a spell may grant a unit.
    pub max_experience: i32,
}

impl TargetingConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_UNITS_PER_MAP_CELL: u32 = 9;
    pub const DEFAULT_MIN_CITY_POPULATION_FOR_BUILDINGS: u32 = 1000;
    pub const DEFAULT_RESISTANCE_ROLL_SIDES: i32 = 10;
    pub const DEFAULT_MAX_EXPERIENCE: i32 = 120;

    pub const fn new() -> Self {
        Self {
            max_units_per_map_cell: Self::DEFAULT_MAX_UNITS_PER_MAP_CELL,
            min_city_population_for_buildings: Self::DEFAULT_MIN_CITY_POPULATION_FOR_BUILDINGS,
            resistance_roll_sides: Self::DEFAULT_RESISTANCE_ROLL_SIDES,
            max_experience: Self::DEFAULT_MAX_EXPERIENCE,
        }
    }

    pub const fn with_max_units_per_map_cell(mut self, max_units_per_map_cell: u32) -> Self {
        self.max_units_per_map_cell = max_units_per_map_cell;
        self
    }
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self::new()
    }
}
