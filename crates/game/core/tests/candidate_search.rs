use spell_core::env::{
    DatabaseSnapshot, MagicRealmDefinition, MemorySnapshot, TerrainSnapshot, UnitSnapshot,
    VisibilitySnapshot,
};
use spell_core::spell::{DamageResolutionType, UnitSpellEffect};
use spell_core::state::{CombatPosition, OverlandCity, OverlandTile, TileTypeId};
use spell_core::{
    CityTargetQuery, ErrorSeverity, GameError, KindOfSpell, MapCoordinates3D, OracleError,
    PlayerId, SpellBookSection, SpellDefinition, TargetSpellResult, TargetingEnv, TargetingError,
    UnitTargetQuery, UnitUrn,
};

const CASTER: PlayerId = PlayerId(1);
const RIVAL: PlayerId = PlayerId(2);
const CAPITAL: MapCoordinates3D = MapCoordinates3D::new(12, 7, 0);

fn database() -> DatabaseSnapshot {
    let mut black_sleep = SpellDefinition::new("SP130", SpellBookSection::UnitCurses);
    black_sleep.unit_spell_effect = vec![UnitSpellEffect::new("SS130")];
    black_sleep.attack_spell_damage_resolution_type = Some(DamageResolutionType::ResistanceRolls);
    black_sleep.combat_base_damage = Some(2);

    DatabaseSnapshot::new()
        .with_spell(black_sleep)
        .with_magic_realm(MagicRealmDefinition {
            magic_realm_id: "LTN".into(),
            heal_each_turn: true,
        })
}

fn army() -> Vec<UnitSnapshot> {
    [(1, CASTER, 4), (2, RIVAL, 4), (3, RIVAL, 9), (4, RIVAL, 12)]
        .into_iter()
        .map(|(urn, owner, resistance)| {
            UnitSnapshot::new(UnitUrn(urn), "UN001", owner, "LTN")
                .at(CAPITAL)
                .in_combat(CAPITAL, CombatPosition::new(urn as i32, 0))
                .with_skill("UA06", resistance)
        })
        .collect()
}

#[test]
fn ai_picks_only_enemies_that_can_fail_the_roll() {
    let db = database();
    let memory = MemorySnapshot::new();
    let env = TargetingEnv::new(&db).with_memory(&memory);
    let spell = db.spells.values().next().expect("one spell");
    let kind = spell.kind();
    assert_eq!(kind, KindOfSpell::UnitCurses);

    let units = army();
    let results: Vec<_> = units
        .iter()
        .map(|unit| {
            UnitTargetQuery::new(spell, CASTER, unit)
                .with_kind(kind)
                .in_combat(CAPITAL)
                .evaluate(&env)
                .expect("query should evaluate")
        })
        .collect();

    assert_eq!(
        results,
        vec![
            TargetSpellResult::CursingOrAttackingOwn,
            TargetSpellResult::ValidTarget,
            TargetSpellResult::ValidTarget,
            TargetSpellResult::TooHighResistance,
        ]
    );
}

#[test]
fn results_render_as_tooltip_keys() {
    assert_eq!(
        TargetSpellResult::TooHighResistance.to_string(),
        "TOO_HIGH_RESISTANCE"
    );
    assert_eq!(
        TargetSpellResult::CantCreateBuildingsInOutposts.as_ref(),
        "CANT_CREATE_BUILDINGS_IN_OUTPOSTS"
    );
    assert!(TargetSpellResult::ValidTarget.is_valid());
    assert!(!TargetSpellResult::NotAWizard.is_valid());
}

#[test]
fn missing_collaborators_are_fatal() {
    let db = database();
    let mut wall = SpellDefinition::new("SP131", SpellBookSection::CityEnchantments);
    wall.building_id = Some("BL40".into());

    let terrain = TerrainSnapshot::new().with_tile(
        CAPITAL,
        OverlandTile {
            city: Some(OverlandCity {
                owner: CASTER,
                population: 5000,
            }),
            ..OverlandTile::with_tile_type(TileTypeId::from("TT01"))
        },
    );
    let visibility = VisibilitySnapshot::new().with_visible(CASTER, CAPITAL);

    let no_visibility = TargetingEnv::new(&db).with_terrain(&terrain);
    let error = CityTargetQuery::new(&wall, CASTER, CAPITAL)
        .evaluate(&no_visibility)
        .expect_err("visibility is required");
    assert_eq!(
        error,
        TargetingError::Oracle(OracleError::VisibilityNotAvailable)
    );
    assert_eq!(error.severity(), ErrorSeverity::Fatal);

    // The building is not in this database
    let env = no_visibility.with_visibility(&visibility);
    let error = CityTargetQuery::new(&wall, CASTER, CAPITAL)
        .evaluate(&env)
        .expect_err("unknown building");
    assert_eq!(error.severity(), ErrorSeverity::Validation);
    assert_eq!(error.error_code(), "ORACLE_BUILDING_NOT_FOUND");
}
