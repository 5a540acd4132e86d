//! Can this unit be targeted by this spell?

use crate::constants::{SPELL_ID_PLANAR_SEAL, UNIT_SKILL_ID_EXPERIENCE, is_tower_of_wizardry};
use crate::env::{TargetingEnv, UnitView};
use crate::spell::{DamageResolutionType, KindOfSpell, SpellBookSection, SpellDefinition};
use crate::state::{MapCoordinates3D, OverlandTile, PlayerId, UnitStatus};

use super::effects::{has_dispellable_spell, unit_effects_not_yet_cast};
use super::guard::{Guard, GuardResult, Verdict, run_guards};
use super::resistance::SavingThrowModifier;
use super::{TargetSpellResult, TargetingError, resolve_kind};

/// Eligibility query for a single unit.
///
/// ```ignore
/// let result = UnitTargetQuery::new(&spell, caster, &unit)
///     .in_combat(combat_location)
///     .evaluate(&env)?;
/// ```
#[derive(Clone, Copy)]
pub struct UnitTargetQuery<'q> {
    spell: &'q SpellDefinition,
    casting_player: PlayerId,
    target: &'q dyn UnitView,
    kind: Option<KindOfSpell>,
    section: Option<SpellBookSection>,
    expected_combat_location: Option<MapCoordinates3D>,
    casting_unit: Option<&'q dyn UnitView>,
    variable_damage: Option<i32>,
    targeting_from_overland: bool,
}

impl<'q> UnitTargetQuery<'q> {
    pub fn new(
        spell: &'q SpellDefinition,
        casting_player: PlayerId,
        target: &'q dyn UnitView,
    ) -> Self {
        Self {
            spell,
            casting_player,
            target,
            kind: None,
            section: None,
            expected_combat_location: None,
            casting_unit: None,
            variable_damage: None,
            targeting_from_overland: false,
        }
    }

    /// Uses an already computed classification instead of classifying again.
    pub fn with_kind(mut self, kind: KindOfSpell) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Classifies the spell as if it were filed under `section`.
    pub fn with_section(mut self, section: SpellBookSection) -> Self {
        self.section = Some(section);
        self
    }

    /// The spell is being cast in the combat at `location`; the target must
    /// be taking part in it.
    pub fn in_combat(mut self, location: MapCoordinates3D) -> Self {
        self.expected_combat_location = Some(location);
        self
    }

    /// The spell is cast by a unit (a hero or a unit with a caster skill).
    pub fn cast_by_unit(mut self, unit: &'q dyn UnitView) -> Self {
        self.casting_unit = Some(unit);
        self
    }

    /// Extra mana pumped into a variable-strength spell.
    pub fn with_variable_damage(mut self, variable_damage: i32) -> Self {
        self.variable_damage = Some(variable_damage);
        self
    }

    /// The target was picked on the overland map, so fog of war applies.
    pub fn from_overland(mut self) -> Self {
        self.targeting_from_overland = true;
        self
    }

    pub fn evaluate(&self, env: &TargetingEnv<'_>) -> Result<TargetSpellResult, TargetingError> {
        let kind = resolve_kind(self.spell, self.kind, self.section);
        let _span = tracing::debug_span!(
            "unit_target",
            spell = %self.spell.spell_id,
            %kind,
            unit = %self.target.urn(),
        )
        .entered();

        let check = UnitCheck {
            query: self,
            env,
            kind,
        };
        let guards = [
            Guard::new("combat_context", check_combat_context),
            Guard::new("liveness", check_liveness),
            Guard::new("overland_visibility", check_overland_visibility),
            Guard::new("ownership", check_ownership),
            Guard::new("lifeform", check_lifeform),
            Guard::new("combat_tile_type", check_combat_tile_type),
            Guard::new("ranged_attack", check_ranged_attack),
            Guard::new("replacement_unit_terrain", check_replacement_unit_terrain),
            Guard::new("plane_shift", check_plane_shift),
            Guard::new("remaining_effects", check_remaining_effects),
            Guard::new("healing", check_healing),
            Guard::new("immunity", check_immunity),
            Guard::new("resistance", check_resistance),
            Guard::new("dispel", check_dispel),
        ];
        run_guards("unit", &check, &guards)
    }
}

struct UnitCheck<'q, 'e> {
    query: &'q UnitTargetQuery<'q>,
    env: &'q TargetingEnv<'e>,
    kind: KindOfSpell,
}

impl UnitCheck<'_, '_> {
    fn spell(&self) -> &SpellDefinition {
        self.query.spell
    }

    fn target(&self) -> &dyn UnitView {
        self.query.target
    }

    fn is_own_unit(&self) -> bool {
        self.target().owner() == self.query.casting_player
    }

    fn in_combat(&self) -> bool {
        self.query.expected_combat_location.is_some()
    }

    /// Overland tile the target stands on, as known to the caster.
    fn overland_tile(&self) -> Result<Option<&OverlandTile>, TargetingError> {
        let target = self.target();
        let location = target
            .unit_location()
            .ok_or(TargetingError::UnitNotOnMap(target.urn()))?;
        Ok(self.env.terrain()?.overland_tile(location))
    }
}

fn check_combat_context(c: &UnitCheck<'_, '_>) -> GuardResult {
    Ok(match c.query.expected_combat_location {
        Some(expected) => Verdict::reject_if(
            c.target().combat_location() != Some(expected),
            TargetSpellResult::UnitNotInExpectedCombat,
        ),
        None => Verdict::Continue,
    })
}

fn check_liveness(c: &UnitCheck<'_, '_>) -> GuardResult {
    let status = c.target().status();
    Ok(if c.kind == KindOfSpell::RaiseDead {
        Verdict::reject_if(status != UnitStatus::Dead, TargetSpellResult::UnitNotDead)
    } else {
        Verdict::reject_if(status != UnitStatus::Alive, TargetSpellResult::UnitDead)
    })
}

fn check_overland_visibility(c: &UnitCheck<'_, '_>) -> GuardResult {
    if !c.query.targeting_from_overland {
        return Ok(Verdict::Continue);
    }

    let visibility = c.env.visibility()?;
    let player = c.query.casting_player;
    let visible_cell = c
        .target()
        .unit_location()
        .is_some_and(|location| visibility.can_see_location(player, location));

    Ok(if !visible_cell {
        Verdict::Reject(TargetSpellResult::CannotSeeTarget)
    } else {
        Verdict::reject_if(
            !visibility.can_see_unit(player, c.target()),
            TargetSpellResult::Invisible,
        )
    })
}

fn check_ownership(c: &UnitCheck<'_, '_>) -> GuardResult {
    let own = c.is_own_unit();
    Ok(match c.kind {
        // Dispels are judged against the caster of each spell on the unit
        kind if kind.is_dispel() => Verdict::Continue,
        KindOfSpell::RaiseDead => Verdict::reject_if(
            !own && !c.spell().resurrect_enemy_units,
            TargetSpellResult::RaisingEnemy,
        ),
        kind if kind.is_beneficial_to_unit() => {
            Verdict::reject_if(!own, TargetSpellResult::EnchantingOrHealingEnemy)
        }
        kind if kind.is_harmful_to_unit() => {
            Verdict::reject_if(own, TargetSpellResult::CursingOrAttackingOwn)
        }
        _ => Verdict::Continue,
    })
}

fn check_lifeform(c: &UnitCheck<'_, '_>) -> GuardResult {
    if c.kind.is_dispel() {
        return Ok(Verdict::Continue);
    }
    let lifeform = c.target().magic_realm_lifeform();
    let filter = c.spell().lifeform_filter(lifeform);
    Ok(Verdict::reject_if(
        filter.is_excluded(),
        TargetSpellResult::UnitInvalidMagicRealmLifeformType,
    ))
}

/// Cracks Call opens the ground under the target, so it must stand on land.
fn check_combat_tile_type(c: &UnitCheck<'_, '_>) -> GuardResult {
    if !c.kind.attacks_units()
        || c.spell().attack_spell_damage_resolution_type
            != Some(DamageResolutionType::ChanceOfDeath)
        || !c.in_combat()
    {
        return Ok(Verdict::Continue);
    }

    let target = c.target();
    let position = target
        .combat_position()
        .ok_or(TargetingError::MissingCombatPosition(target.urn()))?;
    let Some(layer) = c
        .env
        .combat_map()?
        .combat_tile(position)
        .and_then(|tile| tile.terrain_layer.as_ref())
    else {
        return Ok(Verdict::Reject(TargetSpellResult::InvalidTileType));
    };

    let land = c.env.database().combat_tile_type(layer)?.land;
    Ok(Verdict::reject_if(!land, TargetSpellResult::InvalidTileType))
}

/// Warp Wood needs wooden missiles left to warp.
fn check_ranged_attack(c: &UnitCheck<'_, '_>) -> GuardResult {
    if c.spell().attack_spell_damage_resolution_type != Some(DamageResolutionType::ZeroesAmmo) {
        return Ok(Verdict::Continue);
    }

    let target = c.target();
    let Some(ranged_attack_type) = target.ranged_attack_type() else {
        return Ok(Verdict::Reject(TargetSpellResult::NoRangedAttack));
    };
    if !c
        .env
        .database()
        .ranged_attack_type(ranged_attack_type)?
        .wooden
    {
        return Ok(Verdict::Reject(TargetSpellResult::InvalidRangedAttackType));
    }
    Ok(Verdict::reject_if(
        target.ammo_remaining() == 0,
        TargetSpellResult::NoAmmunition,
    ))
}

/// The unit the target turns into must be able to stand where it is.
fn check_replacement_unit_terrain(c: &UnitCheck<'_, '_>) -> GuardResult {
    if c.kind != KindOfSpell::ChangeUnitId {
        return Ok(Verdict::Continue);
    }
    let Some(replacement_id) = c.spell().summoned_unit.first() else {
        return Ok(Verdict::Continue);
    };

    let target = c.target();
    let location = target
        .unit_location()
        .ok_or(TargetingError::UnitNotOnMap(target.urn()))?;
    let Some(tile_type) = c
        .env
        .terrain()?
        .overland_tile(location)
        .and_then(|tile| tile.tile_type.as_ref())
    else {
        return Ok(Verdict::Reject(TargetSpellResult::TerrainImpassable));
    };

    let replacement = c
        .env
        .unit_factory()?
        .sample_unit(replacement_id, target.owner(), location)?;
    let passable = c
        .env
        .movement()?
        .is_passable(replacement.as_ref(), tile_type);
    Ok(Verdict::reject_if(!passable, TargetSpellResult::TerrainImpassable))
}

fn check_plane_shift(c: &UnitCheck<'_, '_>) -> GuardResult {
    if c.kind != KindOfSpell::PlaneShift {
        return Ok(Verdict::Continue);
    }

    let sealed = c
        .env
        .memory()?
        .active_spells()
        .iter()
        .any(|active| active.spell_id == SPELL_ID_PLANAR_SEAL);
    if sealed {
        return Ok(Verdict::Reject(TargetSpellResult::PlanarSeal));
    }

    let in_tower = c
        .overland_tile()?
        .and_then(|tile| tile.map_feature.as_ref())
        .is_some_and(|feature| is_tower_of_wizardry(feature.as_str()));
    Ok(Verdict::reject_if(in_tower, TargetSpellResult::InvalidMapFeature))
}

fn check_remaining_effects(c: &UnitCheck<'_, '_>) -> GuardResult {
    if !c.kind.grants_unit_effects() {
        return Ok(Verdict::Continue);
    }
    let spell = c.spell();
    if spell.unit_spell_effect.is_empty() {
        return Ok(Verdict::Reject(TargetSpellResult::NoSpellEffectIdsDefined));
    }

    let target = c.target();
    let remaining =
        unit_effects_not_yet_cast(spell, c.query.casting_player, target.urn(), c.env.memory()?);
    if remaining.is_empty() {
        return Ok(Verdict::Reject(TargetSpellResult::AlreadyHasAllPossibleSpellEffects));
    }

    if c.kind == KindOfSpell::UnitEnchantments {
        let max_experience = c.env.config().max_experience;
        let too_experienced = remaining
            .iter()
            .filter(|effect| effect.unit_skill_id == UNIT_SKILL_ID_EXPERIENCE)
            .any(|effect| {
                let granted = effect
                    .unit_skill_value
                    .unwrap_or(max_experience)
                    .min(max_experience);
                target.experience() >= granted
            });
        if too_experienced {
            return Ok(Verdict::Reject(TargetSpellResult::TooMuchExperience));
        }
    }
    Ok(Verdict::Continue)
}

fn check_healing(c: &UnitCheck<'_, '_>) -> GuardResult {
    if c.kind != KindOfSpell::Healing {
        return Ok(Verdict::Continue);
    }

    let target = c.target();
    let lifeform = target.magic_realm_lifeform();
    let realm = c.env.database().magic_realm(lifeform)?;
    Ok(if !realm.heal_each_turn {
        Verdict::Reject(TargetSpellResult::UnhealableLifeformType)
    } else if target.total_damage_taken() == 0 {
        Verdict::Reject(TargetSpellResult::Undamaged)
    } else {
        Verdict::reject_if(
            target.healable_damage_taken() == 0,
            TargetSpellResult::PermanentlyDamaged,
        )
    })
}

fn check_immunity(c: &UnitCheck<'_, '_>) -> GuardResult {
    if !c.kind.attacks_units() {
        return Ok(Verdict::Continue);
    }
    let Some(damage_type_id) = c.spell().attack_spell_damage_type.as_ref() else {
        return Ok(Verdict::Continue);
    };

    let damage_type = c.env.database().damage_type(damage_type_id)?;
    Ok(Verdict::reject_if(
        c.target().is_immune_to(damage_type),
        TargetSpellResult::Immune,
    ))
}

fn check_resistance(c: &UnitCheck<'_, '_>) -> GuardResult {
    let spell = c.spell();
    let rolls_resistance = spell
        .attack_spell_damage_resolution_type
        .is_some_and(DamageResolutionType::is_resistance_roll);
    if !c.kind.attacks_units() || !rolls_resistance {
        return Ok(Verdict::Continue);
    }

    let target = c.target();
    let modifier = SavingThrowModifier::new(
        spell,
        c.in_combat(),
        c.query.variable_damage,
        c.query.casting_unit,
        spell.lifeform_filter(target.magic_realm_lifeform()),
    );
    Ok(Verdict::reject_if(
        modifier.always_resisted(target.resistance(), c.env.config()),
        TargetSpellResult::TooHighResistance,
    ))
}

fn check_dispel(c: &UnitCheck<'_, '_>) -> GuardResult {
    if c.kind != KindOfSpell::DispelUnitCityCombatSpells {
        return Ok(Verdict::Continue);
    }

    let target = c.target();
    // Vortexes are magic themselves and get dispelled outright
    if c.env.database().is_vortex_unit(target.unit_id()) {
        return Ok(Verdict::Accept);
    }
    Ok(Verdict::reject_if(
        !has_dispellable_spell(c.query.casting_player, target.urn(), c.env.memory()?),
        TargetSpellResult::NothingToDispel,
    ))
}
