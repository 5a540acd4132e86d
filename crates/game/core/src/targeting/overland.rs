//! Can this overland map cell be targeted by this spell?
//!
//! Covers terraforming, node spells, area dispels and summons that pick
//! where the new units appear (Floating Island).

use crate::env::{MemoryOracle, TargetingEnv};
use crate::spell::{KindOfSpell, SpellBookSection, SpellDefinition};
use crate::state::{ActiveSpell, MapCoordinates3D, OverlandTile, PlayerId};

use super::effects::is_protected_against_realm;
use super::guard::{Guard, GuardResult, Verdict, run_guards};
use super::{TargetSpellResult, TargetingError, resolve_kind};

#[derive(Clone, Copy, Debug)]
pub struct OverlandLocationQuery<'q> {
    spell: &'q SpellDefinition,
    casting_player: PlayerId,
    location: MapCoordinates3D,
    kind: Option<KindOfSpell>,
    section: Option<SpellBookSection>,
}

impl<'q> OverlandLocationQuery<'q> {
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
            "overland_target",
            spell = %self.spell.spell_id,
            %kind,
            location = %self.location,
        )
        .entered();

        let check = LocationCheck {
            query: self,
            env,
            kind,
        };
        let guards = [
            Guard::new("radius", check_radius),
            Guard::new("visibility", check_visibility),
            Guard::new("terrain_filters", check_terrain_filters),
            Guard::new("realm_protection", check_realm_protection),
            Guard::new("dispel", check_dispel),
            Guard::new("summon", check_summon),
            Guard::new("warp_node", check_warp_node),
        ];
        run_guards("overland_location", &check, &guards)
    }
}

struct LocationCheck<'q, 'e> {
    query: &'q OverlandLocationQuery<'q>,
    env: &'q TargetingEnv<'e>,
    kind: KindOfSpell,
}

impl<'e> LocationCheck<'_, 'e> {
    fn tile(&self) -> Result<Option<&'e OverlandTile>, TargetingError> {
        Ok(self.env.terrain()?.overland_tile(self.query.location))
    }

    fn changes_terrain(&self) -> bool {
        matches!(
            self.kind,
            KindOfSpell::ChangeTileType
                | KindOfSpell::ChangeMapFeature
                | KindOfSpell::WarpNode
                | KindOfSpell::Corruption
        )
    }

    fn summons_here(&self) -> bool {
        self.kind == KindOfSpell::Summoning && !self.query.spell.summoned_unit.is_empty()
    }
}

/// Earth Lore and Enchant Road affect an area and may be aimed anywhere.
fn check_radius(c: &LocationCheck<'_, '_>) -> GuardResult {
    Ok(if c.kind.targets_radius() {
        Verdict::Accept
    } else {
        Verdict::Continue
    })
}

fn check_visibility(c: &LocationCheck<'_, '_>) -> GuardResult {
    let visible = c
        .env
        .visibility()?
        .can_see_location(c.query.casting_player, c.query.location);
    Ok(Verdict::reject_if(!visible, TargetSpellResult::CannotSeeTarget))
}

fn check_terrain_filters(c: &LocationCheck<'_, '_>) -> GuardResult {
    if !c.changes_terrain() {
        return Ok(Verdict::Continue);
    }
    let Some(tile) = c.tile()? else {
        return Ok(Verdict::Reject(TargetSpellResult::InvalidTileType));
    };
    let Some(tile_type) = tile.tile_type.as_ref() else {
        return Ok(Verdict::Reject(TargetSpellResult::InvalidTileType));
    };

    let spell = c.query.spell;
    let tile_types = &spell.spell_valid_tile_type_target;
    if !tile_types.is_empty() && !tile_types.iter().any(|t| &t.tile_type_id == tile_type) {
        return Ok(Verdict::Reject(TargetSpellResult::InvalidTileType));
    }

    let features = &spell.spell_valid_map_feature_target;
    if !features.is_empty() {
        let matches_feature = tile
            .map_feature
            .as_ref()
            .is_some_and(|feature| features.iter().any(|f| &f.map_feature_id == feature));
        if !matches_feature {
            return Ok(Verdict::Reject(TargetSpellResult::InvalidMapFeature));
        }
    }

    Ok(Verdict::reject_if(
        c.kind == KindOfSpell::Corruption && tile.is_corrupted(),
        TargetSpellResult::AlreadyHasAllPossibleSpellEffects,
    ))
}

fn check_realm_protection(c: &LocationCheck<'_, '_>) -> GuardResult {
    let protected = is_protected_against_realm(
        c.query.spell,
        c.query.casting_player,
        c.query.location,
        c.env,
    )?;
    Ok(Verdict::reject_if(protected, TargetSpellResult::ProtectedAgainstSpellRealm))
}

/// Disenchant Area needs some other player's spell on the city or on a unit
/// standing here.
fn check_dispel(c: &LocationCheck<'_, '_>) -> GuardResult {
    if c.kind != KindOfSpell::DispelUnitCityCombatSpells {
        return Ok(Verdict::Continue);
    }

    let memory = c.env.memory()?;
    let location = c.query.location;
    let caster = c.query.casting_player;
    let dispellable = memory
        .active_spells()
        .iter()
        .filter(|active| active.casting_player != caster)
        .any(|active| is_spell_at(memory, active, location));

    Ok(if dispellable {
        Verdict::Accept
    } else {
        Verdict::Reject(TargetSpellResult::NothingToDispel)
    })
}

fn is_spell_at(
    memory: &dyn MemoryOracle,
    active: &ActiveSpell,
    location: MapCoordinates3D,
) -> bool {
    if active.city_location() == Some(location) {
        return true;
    }
    active
        .unit()
        .is_some_and(|urn| memory.units_at(location).any(|unit| unit.urn == urn))
}

fn check_summon(c: &LocationCheck<'_, '_>) -> GuardResult {
    if !c.summons_here() {
        return Ok(Verdict::Continue);
    }

    let memory = c.env.memory()?;
    let location = c.query.location;
    let caster = c.query.casting_player;
    if memory.has_enemy_units_at(location, caster) {
        return Ok(Verdict::Reject(TargetSpellResult::EnemiesHere));
    }

    let max_units = c.env.config().max_units_per_map_cell as usize;
    if memory.units_at(location).count() >= max_units {
        return Ok(Verdict::Reject(TargetSpellResult::CellFull));
    }

    let Some(tile_type) = c.tile()?.and_then(|tile| tile.tile_type.as_ref()) else {
        return Ok(Verdict::Reject(TargetSpellResult::TerrainImpassable));
    };
    let factory = c.env.unit_factory()?;
    let movement = c.env.movement()?;
    for unit_id in &c.query.spell.summoned_unit {
        let sample = factory.sample_unit(unit_id, caster, location)?;
        if !movement.is_passable(sample.as_ref(), tile_type) {
            return Ok(Verdict::Reject(TargetSpellResult::TerrainImpassable));
        }
    }
    Ok(Verdict::Accept)
}

fn check_warp_node(c: &LocationCheck<'_, '_>) -> GuardResult {
    if c.kind != KindOfSpell::WarpNode {
        return Ok(Verdict::Continue);
    }
    let Some(tile) = c.tile()? else {
        return Ok(Verdict::Reject(TargetSpellResult::UnownedNode));
    };

    Ok(match tile.node_owner {
        None => Verdict::Reject(TargetSpellResult::UnownedNode),
        Some(owner) if owner == c.query.casting_player => {
            Verdict::Reject(TargetSpellResult::CursingOrAttackingOwn)
        }
        Some(_) => Verdict::reject_if(
            tile.warped,
            TargetSpellResult::AlreadyHasAllPossibleSpellEffects,
        ),
    })
}
