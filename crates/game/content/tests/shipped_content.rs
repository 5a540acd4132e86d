//! Checks over the catalog and config shipped in `data/`.

use std::collections::HashSet;
use std::path::PathBuf;

use spell_content::{ContentFactory, validate_catalog};
use spell_core::env::{
    MemorySnapshot, MovementOracle, SpellDatabase, TerrainSnapshot, UnitSnapshot,
    VisibilitySnapshot,
};
use spell_core::state::{OverlandTile, SpellId, UnitId};
use spell_core::{
    KindOfSpell, MapCoordinates3D, OverlandLocationQuery, PlayerId, TargetSpellResult,
    TargetingConfig, TargetingEnv, UnitUrn,
};
use strum::IntoEnumIterator;

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

#[test]
fn shipped_catalog_has_no_dangling_references() {
    let database = factory().load_database().expect("catalog should load");
    let issues = validate_catalog(&database);
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn shipped_catalog_covers_every_kind_of_spell() {
    let database = factory().load_database().expect("catalog should load");

    let kinds: HashSet<KindOfSpell> = database.spells.values().map(|spell| spell.kind()).collect();
    let missing: Vec<KindOfSpell> = KindOfSpell::iter()
        .filter(|kind| !kinds.contains(kind))
        .collect();

    assert!(missing.is_empty(), "no spell classifies as {missing:?}");
}

#[test]
fn shipped_catalog_classifies_known_spells() {
    let database = factory().load_database().expect("catalog should load");
    let kind_of = |id: &str| {
        database
            .spell(&SpellId::from(id))
            .map(|spell| spell.kind())
            .expect("spell should exist")
    };

    assert_eq!(kind_of("SP121"), KindOfSpell::DispelOverlandEnchantments);
    assert_eq!(kind_of("SP122"), KindOfSpell::DispelUnitCityCombatSpells);
    assert_eq!(kind_of("SP057"), KindOfSpell::WarpNode);
    assert_eq!(kind_of("SP060"), KindOfSpell::Corruption);
    assert_eq!(kind_of("SP175"), KindOfSpell::EnchantRoad);
    assert!(database.is_vortex_unit(&UnitId::from("UN156")));
}

#[test]
fn shipped_config_matches_defaults() {
    let config = factory().load_config().expect("config should load");
    assert_eq!(config, TargetingConfig::default());
}

#[test]
fn shipped_movement_rules_keep_walkers_off_the_ocean() {
    let database = factory().load_database().expect("catalog should load");
    let rules = factory().load_movement_rules().expect("rules should load");
    let here = MapCoordinates3D::new(10, 10, 0);
    let sample = |id: &str| {
        let definition = database.unit(&UnitId::from(id)).expect("unit should exist");
        UnitSnapshot::from_definition(UnitUrn(1), definition, PlayerId(1), here)
    };
    let ocean = "TT12".into();
    let hills = "TT03".into();

    assert!(!rules.is_passable(&sample("UN001"), &ocean));
    assert!(rules.is_passable(&sample("UN154"), &ocean));
    assert!(rules.is_passable(&sample("UN156"), &ocean));
    assert_eq!(rules.movement_cost(&sample("UN001"), &hills), Some(4));
    assert!(!rules.is_passable(&sample("UN154"), &hills));
}

#[test]
fn floating_island_lands_only_on_water() {
    let factory = factory();
    let database = factory.load_database().expect("catalog should load");
    let rules = factory.load_movement_rules().expect("rules should load");
    let config = factory.load_config().expect("config should load");

    let me = PlayerId(1);
    let sea = MapCoordinates3D::new(4, 4, 0);
    let shore = MapCoordinates3D::new(5, 4, 0);
    let terrain = TerrainSnapshot::new()
        .with_tile(sea, OverlandTile::with_tile_type("TT12".into()))
        .with_tile(shore, OverlandTile::with_tile_type("TT01".into()));
    let visibility = VisibilitySnapshot::new()
        .with_visible(me, sea)
        .with_visible(me, shore);
    let memory = MemorySnapshot::new();
    let env = TargetingEnv::new(&database)
        .with_terrain(&terrain)
        .with_visibility(&visibility)
        .with_memory(&memory)
        .with_movement(&rules)
        .with_unit_factory(&database)
        .with_config(config);

    let island = database
        .spell(&SpellId::from("SP027"))
        .expect("spell should exist");
    let at = |location| {
        OverlandLocationQuery::new(island, me, location)
            .evaluate(&env)
            .expect("query should evaluate")
    };

    assert_eq!(at(sea), TargetSpellResult::ValidTarget);
    assert_eq!(at(shore), TargetSpellResult::TerrainImpassable);
}
