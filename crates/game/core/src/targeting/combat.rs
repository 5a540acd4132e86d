//! Can this combat map cell be targeted by this spell?

use crate::env::TargetingEnv;
use crate::spell::{KindOfSpell, SpellBookSection, SpellDefinition};
use crate::state::{CombatMapTile, CombatPosition};

use super::guard::{Guard, GuardResult, Verdict, run_guards};
use super::{TargetSpellResult, TargetingError, resolve_kind};

/// Eligibility query for one cell of the current combat map.
///
/// Wall-breaking spells (Disrupt Wall, Fireball on a wall) need an intact
/// wall segment they are allowed to hit. Everything else (Earth to Mud) needs
/// a land cell inside the playable area.
#[derive(Clone, Copy, Debug)]
pub struct CombatLocationQuery<'q> {
    spell: &'q SpellDefinition,
    position: CombatPosition,
    kind: Option<KindOfSpell>,
    section: Option<SpellBookSection>,
}

impl<'q> CombatLocationQuery<'q> {
    pub fn new(spell: &'q SpellDefinition, position: CombatPosition) -> Self {
        Self {
            spell,
            position,
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
            "combat_location_target",
            spell = %self.spell.spell_id,
            %kind,
            position = %self.position,
        )
        .entered();

        let check = CombatCheck {
            query: self,
            env,
            tile: env.combat_map()?.combat_tile(self.position),
        };
        let guards = [
            Guard::new("on_grid", check_on_grid),
            Guard::new("walls", check_walls),
            Guard::new("map_edge", check_map_edge),
            Guard::new("land", check_land),
        ];
        run_guards("combat_location", &check, &guards)
    }
}

struct CombatCheck<'q, 'e> {
    query: &'q CombatLocationQuery<'q>,
    env: &'q TargetingEnv<'e>,
    tile: Option<&'q CombatMapTile>,
}

fn check_on_grid(c: &CombatCheck<'_, '_>) -> GuardResult {
    Ok(Verdict::reject_if(c.tile.is_none(), TargetSpellResult::InvalidTileType))
}

fn check_walls(c: &CombatCheck<'_, '_>) -> GuardResult {
    let valid_borders = &c.query.spell.spell_valid_border_target;
    let Some(tile) = c.tile else {
        return Ok(Verdict::Continue);
    };
    if valid_borders.is_empty() {
        return Ok(Verdict::Continue);
    }

    if !tile
        .borders
        .iter()
        .any(|border| valid_borders.contains(border))
    {
        return Ok(Verdict::Reject(TargetSpellResult::InvalidTileType));
    }
    Ok(if tile.wrecked {
        Verdict::Reject(TargetSpellResult::AlreadyHasAllPossibleSpellEffects)
    } else {
        Verdict::Accept
    })
}

fn check_map_edge(c: &CombatCheck<'_, '_>) -> GuardResult {
    Ok(Verdict::reject_if(
        c.tile.is_some_and(|tile| tile.off_map_edge),
        TargetSpellResult::InvalidTileType,
    ))
}

fn check_land(c: &CombatCheck<'_, '_>) -> GuardResult {
    let Some(layer) = c.tile.and_then(|tile| tile.terrain_layer.as_ref()) else {
        return Ok(Verdict::Reject(TargetSpellResult::InvalidTileType));
    };
    let land = c.env.database().combat_tile_type(layer)?.land;
    Ok(Verdict::reject_if(!land, TargetSpellResult::InvalidTileType))
}
