//! Can this city be targeted by this spell?

use crate::constants::{CITY_SPELL_EFFECT_ID_EVIL_PRESENCE, PICK_ID_DEATH_BOOK};
use crate::env::TargetingEnv;
use crate::spell::{KindOfSpell, SpellBookSection, SpellDefinition};
use crate::state::{MapCoordinates3D, OverlandCity, PlayerId};

use super::effects::{city_effects_not_yet_cast, is_protected_against_realm};
use super::guard::{Guard, GuardResult, Verdict, run_guards};
use super::{TargetSpellResult, TargetingError, resolve_kind};

/// Eligibility query for the city at an overland location.
#[derive(Clone, Copy, Debug)]
pub struct CityTargetQuery<'q> {
    spell: &'q SpellDefinition,
    casting_player: PlayerId,
    location: MapCoordinates3D,
    kind: Option<KindOfSpell>,
    section: Option<SpellBookSection>,
}

impl<'q> CityTargetQuery<'q> {
    pub fn new(
        spell: &'q SpellDefinition,
        casting_player: PlayerId,
        location: MapCoordinates3D,
    ) -> Self {
        Self {
            spell,
            casting_player,
            location,
            kind: None,
            section: None,
        }
    }

    pub fn with_kind(mut self, kind: KindOfSpell) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_section(mut self, section: SpellBookSection) -> Self {
        self.section = Some(section);
        self
    }

    pub fn evaluate(&self, env: &TargetingEnv<'_>) -> Result<TargetSpellResult, TargetingError> {
        let kind = resolve_kind(self.spell, self.kind, self.section);
        let _span = tracing::debug_span!(
            "city_target",
            spell = %self.spell.spell_id,
            %kind,
            location = %self.location,
        )
        .entered();

        let city = env
            .terrain()?
            .overland_tile(self.location)
            .and_then(|tile| tile.city.as_ref());
        let check = CityCheck {
            query: self,
            env,
            kind,
            city,
        };
        let guards = [
            Guard::new("visibility", check_visibility),
            Guard::new("city_present", check_city_present),
            Guard::new("ownership", check_ownership),
            Guard::new("realm_protection", check_realm_protection),
            Guard::new("building", check_building),
            Guard::new("city_effects", check_city_effects),
        ];
        run_guards("city", &check, &guards)
    }
}

struct CityCheck<'q, 'e> {
    query: &'q CityTargetQuery<'q>,
    env: &'q TargetingEnv<'e>,
    kind: KindOfSpell,
    city: Option<&'q OverlandCity>,
}

fn check_visibility(c: &CityCheck<'_, '_>) -> GuardResult {
    let visible = c
        .env
        .visibility()?
        .can_see_location(c.query.casting_player, c.query.location);
    Ok(Verdict::reject_if(!visible, TargetSpellResult::CannotSeeTarget))
}

fn check_city_present(c: &CityCheck<'_, '_>) -> GuardResult {
    Ok(Verdict::reject_if(c.city.is_none(), TargetSpellResult::NoCityHere))
}

fn check_ownership(c: &CityCheck<'_, '_>) -> GuardResult {
    let Some(city) = c.city else {
        return Ok(Verdict::Continue);
    };
    let own = city.owner == c.query.casting_player;
    Ok(match c.kind {
        KindOfSpell::CityEnchantments => {
            Verdict::reject_if(!own, TargetSpellResult::EnchantingOrHealingEnemy)
        }
        KindOfSpell::CityCurses | KindOfSpell::AttackUnitsAndBuildings => {
            Verdict::reject_if(own, TargetSpellResult::CursingOrAttackingOwn)
        }
        _ => Verdict::Continue,
    })
}

fn check_realm_protection(c: &CityCheck<'_, '_>) -> GuardResult {
    let protected = is_protected_against_realm(
        c.query.spell,
        c.query.casting_player,
        c.query.location,
        c.env,
    )?;
    Ok(Verdict::reject_if(protected, TargetSpellResult::ProtectedAgainstSpellRealm))
}

/// Spells that raise a building (Wall of Stone) need a real city without it.
fn check_building(c: &CityCheck<'_, '_>) -> GuardResult {
    let (Some(building_id), Some(city)) = (c.query.spell.building_id.as_ref(), c.city) else {
        return Ok(Verdict::Continue);
    };
    c.env.database().building(building_id)?;

    if city.population < c.env.config().min_city_population_for_buildings {
        return Ok(Verdict::Reject(TargetSpellResult::CantCreateBuildingsInOutposts));
    }
    if c.env.memory()?.has_building(c.query.location, building_id) {
        return Ok(Verdict::Reject(TargetSpellResult::CityAlreadyHasBuilding));
    }
    Ok(Verdict::Accept)
}

fn check_city_effects(c: &CityCheck<'_, '_>) -> GuardResult {
    if !matches!(
        c.kind,
        KindOfSpell::CityEnchantments | KindOfSpell::CityCurses
    ) {
        return Ok(Verdict::Continue);
    }
    let spell = c.query.spell;
    if spell.city_spell_effect.is_empty() {
        return Ok(Verdict::Reject(TargetSpellResult::NoSpellEffectIdsDefined));
    }

    let remaining = city_effects_not_yet_cast(
        spell,
        c.query.casting_player,
        c.query.location,
        c.env.memory()?,
    );
    match remaining.as_slice() {
        [] => Ok(Verdict::Reject(TargetSpellResult::AlreadyHasAllPossibleSpellEffects)),
        [only] if **only == CITY_SPELL_EFFECT_ID_EVIL_PRESENCE => {
            let Some(city) = c.city else {
                return Ok(Verdict::Continue);
            };
            let death_books = c.env.wizards()?.pick_count(city.owner, PICK_ID_DEATH_BOOK);
            Ok(Verdict::reject_if(death_books > 0, TargetSpellResult::WizardHasDeathBooks))
        }
        _ => Ok(Verdict::Continue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActiveSpell, BuildingId, PickId};
    use crate::targeting::fixtures::*;

    fn check(world: &World, spell: &SpellDefinition) -> TargetSpellResult {
        CityTargetQuery::new(spell, ME, HERE)
            .evaluate(&world.env())
            .expect("query should evaluate")
    }

    fn wall_of_stone() -> SpellDefinition {
        let mut wall = spell("SP020", SpellBookSection::CityEnchantments);
        wall.building_id = Some(BuildingId::from("BL40"));
        wall
    }

    fn city_curse(effect: &str) -> SpellDefinition {
        let mut curse = spell("SP021", SpellBookSection::CityCurses);
        curse.spell_realm = Some(PickId::from("MB02"));
        curse.city_spell_effect = vec![effect.into()];
        curse
    }

    #[test]
    fn city_must_be_visible_and_present() {
        let world = World::new();
        let spell = wall_of_stone();
        let hidden = MapCoordinates3D::new(50, 30, 0);

        let result = CityTargetQuery::new(&spell, ME, hidden)
            .evaluate(&world.env())
            .expect("query should evaluate");
        assert_eq!(result, TargetSpellResult::CannotSeeTarget);
        assert_eq!(check(&world, &spell), TargetSpellResult::NoCityHere);
    }

    #[test]
    fn buildings_need_a_real_city_without_one() {
        let spell = wall_of_stone();
        assert_eq!(
            check(&World::new().with_city(ME, 999), &spell),
            TargetSpellResult::CantCreateBuildingsInOutposts
        );
        assert_eq!(
            check(&World::new().with_city(ME, 1000), &spell),
            TargetSpellResult::ValidTarget
        );

        let mut walled = World::new().with_city(ME, 1000);
        walled.memory = walled
            .memory
            .clone()
            .with_building(HERE, BuildingId::from("BL40"));
        assert_eq!(
            check(&walled, &spell),
            TargetSpellResult::CityAlreadyHasBuilding
        );
    }

    #[test]
    fn enchantments_for_friends_curses_for_enemies() {
        let mut enchantment = spell("SP022", SpellBookSection::CityEnchantments);
        enchantment.city_spell_effect = vec!["SE010".into()];
        let curse = city_curse("SE050");

        let enemy_city = World::new().with_city(ENEMY, 4000);
        let own_city = World::new().with_city(ME, 4000);
        assert_eq!(
            check(&enemy_city, &enchantment),
            TargetSpellResult::EnchantingOrHealingEnemy
        );
        assert_eq!(
            check(&own_city, &curse),
            TargetSpellResult::CursingOrAttackingOwn
        );
        assert_eq!(
            check(&own_city, &enchantment),
            TargetSpellResult::ValidTarget
        );
        assert_eq!(check(&enemy_city, &curse), TargetSpellResult::ValidTarget);
    }

    #[test]
    fn spell_ward_blocks_its_realm_unless_cast_by_the_caster() {
        let curse = city_curse("SE050");
        let mut warded = World::new().with_city(ENEMY, 4000);
        warded.memory = warded.memory.clone().with_spell(death_ward(ENEMY));
        assert_eq!(
            check(&warded, &curse),
            TargetSpellResult::ProtectedAgainstSpellRealm
        );

        let mut own_ward = World::new().with_city(ENEMY, 4000);
        own_ward.memory = own_ward.memory.clone().with_spell(death_ward(ME));
        assert_eq!(check(&own_ward, &curse), TargetSpellResult::ValidTarget);
    }

    #[test]
    fn city_effects_run_out() {
        let no_effects = spell("SP023", SpellBookSection::CityCurses);
        let curse = city_curse("SE050");
        let mut world = World::new().with_city(ENEMY, 4000);

        assert_eq!(
            check(&world, &no_effects),
            TargetSpellResult::NoSpellEffectIdsDefined
        );

        let cast = ActiveSpell::on_city("SP021".into(), ME, HERE, "SE050".into());
        world.memory = world.memory.clone().with_spell(cast);
        assert_eq!(
            check(&world, &curse),
            TargetSpellResult::AlreadyHasAllPossibleSpellEffects
        );
    }

    #[test]
    fn evil_presence_is_pointless_against_death_wizards() {
        let evil_presence = city_curse(CITY_SPELL_EFFECT_ID_EVIL_PRESENCE);
        let mut world = World::new().with_city(ENEMY, 4000);
        assert_eq!(
            check(&world, &evil_presence),
            TargetSpellResult::ValidTarget
        );

        world.wizards = world
            .wizards
            .clone()
            .with_picks(ENEMY, PICK_ID_DEATH_BOOK, 3);
        assert_eq!(
            check(&world, &evil_presence),
            TargetSpellResult::WizardHasDeathBooks
        );
    }

    #[test]
    fn evil_presence_among_other_effects_is_still_worth_casting() {
        let mut curse = city_curse(CITY_SPELL_EFFECT_ID_EVIL_PRESENCE);
        curse.city_spell_effect.push("SE050".into());
        let mut world = World::new().with_city(ENEMY, 4000);
        world.wizards = world
            .wizards
            .clone()
            .with_picks(ENEMY, PICK_ID_DEATH_BOOK, 3);
        assert_eq!(check(&world, &curse), TargetSpellResult::ValidTarget);

        // Once the other effect is in place only Evil Presence is left
        let cast = ActiveSpell::on_city("SP021".into(), ME, HERE, "SE050".into());
        world.memory = world.memory.clone().with_spell(cast);
        assert_eq!(
            check(&world, &curse),
            TargetSpellResult::WizardHasDeathBooks
        );
    }
}
