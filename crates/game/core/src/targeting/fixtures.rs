//! Small world used by the evaluator tests.

use crate::config::TargetingConfig;
use crate::env::{
    BuildingDefinition, CitySpellEffectDefinition, CombatMapSnapshot, CombatTileTypeDefinition,
    DamageTypeDefinition, DatabaseSnapshot, MagicRealmDefinition, MemorySnapshot, MovementRateRule,
    MovementRuleTable, RangedAttackTypeDefinition, TargetingEnv, TerrainSnapshot,
    TileTypeDefinition, UnitDefinition, UnitSnapshot, VisibilitySnapshot, WizardSnapshot,
};
use crate::spell::{SpellBookSection, SpellDefinition};
use crate::state::{
    ActiveSpell, BuildingId, CombatMapTile, CombatPosition, CombatTileTypeId, MapCoordinates3D,
    OverlandCity, OverlandTile, PickId, PlayerId, TileTypeId, UnitSkillId, UnitUrn,
};

pub const ME: PlayerId = PlayerId(1);
pub const ENEMY: PlayerId = PlayerId(2);
pub const HERE: MapCoordinates3D = MapCoordinates3D::new(20, 10, 0);
pub const OCEAN_CELL: MapCoordinates3D = MapCoordinates3D::new(21, 10, 0);

pub const NORMAL: &str = "LTN";
pub const UNDEAD: &str = "LTU";
pub const GRASSLAND: &str = "TT01";
pub const OCEAN: &str = "TT12";
pub const FLYING: &str = "USX01";
pub const SPEARMEN: &str = "UN001";
pub const TRIREME: &str = "UN002";
pub const VORTEX: &str = "UN156";
pub const FIRE: &str = "DT01";
pub const FIRE_IMMUNITY: &str = "US029";
pub const BOW: &str = "RAT01";
pub const MAGIC_BOLT: &str = "RAT10";
pub const SPELL_WARD_VS_DEATH: &str = "SE002";

pub struct World {
    pub db: DatabaseSnapshot,
    pub terrain: TerrainSnapshot,
    pub combat_map: CombatMapSnapshot,
    pub visibility: VisibilitySnapshot,
    pub memory: MemorySnapshot,
    pub wizards: WizardSnapshot,
    pub movement: MovementRuleTable,
    pub config: TargetingConfig,
}

impl World {
    pub fn new() -> Self {
        let db = DatabaseSnapshot::new()
            .with_magic_realm(MagicRealmDefinition {
                magic_realm_id: NORMAL.into(),
                heal_each_turn: true,
            })
            .with_magic_realm(MagicRealmDefinition {
                magic_realm_id: UNDEAD.into(),
                heal_each_turn: false,
            })
            .with_tile_type(TileTypeDefinition {
                tile_type_id: GRASSLAND.into(),
                land: true,
            })
            .with_tile_type(TileTypeDefinition {
                tile_type_id: OCEAN.into(),
                land: false,
            })
            .with_combat_tile_type(CombatTileTypeDefinition {
                combat_tile_type_id: "CTL01".into(),
                land: true,
            })
            .with_combat_tile_type(CombatTileTypeDefinition {
                combat_tile_type_id: "CTL05".into(),
                land: false,
            })
            .with_damage_type(DamageTypeDefinition {
                damage_type_id: FIRE.into(),
                immunity_skills: vec![UnitSkillId::from(FIRE_IMMUNITY)],
            })
            .with_ranged_attack_type(RangedAttackTypeDefinition {
                ranged_attack_type_id: BOW.into(),
                wooden: true,
            })
            .with_ranged_attack_type(RangedAttackTypeDefinition {
                ranged_attack_type_id: MAGIC_BOLT.into(),
                wooden: false,
            })
            .with_city_spell_effect(CitySpellEffectDefinition {
                city_spell_effect_id: SPELL_WARD_VS_DEATH.into(),
                protect_against_spell_realm: vec![PickId::from("MB02")],
            })
            .with_building(BuildingDefinition {
                building_id: BuildingId::from("BL40"),
            })
            .with_unit(UnitDefinition::new(SPEARMEN, NORMAL))
            .with_unit(UnitDefinition::new(TRIREME, NORMAL).with_skill("USX04", 0))
            .with_unit(UnitDefinition::new(VORTEX, "LTCH").with_skill(FLYING, 0))
            .with_vortex_unit(VORTEX);

        let terrain = TerrainSnapshot::new()
            .with_tile(HERE, OverlandTile::with_tile_type(GRASSLAND.into()))
            .with_tile(OCEAN_CELL, OverlandTile::with_tile_type(OCEAN.into()));

        let visibility = VisibilitySnapshot::new()
            .with_visible(ME, HERE)
            .with_visible(ME, OCEAN_CELL);

        // Flyers and ships cross water; nothing else does.
        let movement = MovementRuleTable::new(vec![
            MovementRateRule {
                unit_skill_id: Some(FLYING.into()),
                tile_type_id: None,
                double_movement: Some(2),
            },
            MovementRateRule {
                unit_skill_id: Some("USX04".into()),
                tile_type_id: Some(OCEAN.into()),
                double_movement: Some(2),
            },
            MovementRateRule {
                unit_skill_id: None,
                tile_type_id: Some(OCEAN.into()),
                double_movement: None,
            },
            MovementRateRule {
                unit_skill_id: None,
                tile_type_id: None,
                double_movement: Some(2),
            },
        ]);

        Self {
            db,
            terrain,
            combat_map: CombatMapSnapshot::new(),
            visibility,
            memory: MemorySnapshot::new(),
            wizards: WizardSnapshot::new(),
            movement,
            config: TargetingConfig::default(),
        }
    }

    pub fn env(&self) -> TargetingEnv<'_> {
        TargetingEnv::new(&self.db)
            .with_terrain(&self.terrain)
            .with_combat_map(&self.combat_map)
            .with_visibility(&self.visibility)
            .with_memory(&self.memory)
            .with_wizards(&self.wizards)
            .with_movement(&self.movement)
            .with_unit_factory(&self.db)
            .with_config(self.config)
    }

    pub fn with_city(mut self, owner: PlayerId, population: u32) -> Self {
        let tile = OverlandTile {
            city: Some(OverlandCity { owner, population }),
            ..OverlandTile::with_tile_type(TileTypeId::from(GRASSLAND))
        };
        self.terrain.insert(HERE, tile);
        self
    }

    pub fn with_combat_tile(mut self, position: CombatPosition, layer: &str) -> Self {
        self.combat_map = self.combat_map.with_tile(
            position,
            CombatMapTile {
                terrain_layer: Some(CombatTileTypeId::from(layer)),
                ..Default::default()
            },
        );
        self
    }
}

/// A living unit of a normal lifeform standing `HERE`.
pub fn unit(urn: u32, owner: PlayerId) -> UnitSnapshot {
    UnitSnapshot::new(UnitUrn(urn), SPEARMEN, owner, NORMAL).at(HERE)
}

pub fn spell(id: &str, section: SpellBookSection) -> SpellDefinition {
    SpellDefinition::new(id, section)
}

/// A Spell Ward against Death kept up by `caster` over the city `HERE`.
pub fn death_ward(caster: PlayerId) -> ActiveSpell {
    ActiveSpell::on_city("SP030".into(), caster, HERE, SPELL_WARD_VS_DEATH.into())
}
