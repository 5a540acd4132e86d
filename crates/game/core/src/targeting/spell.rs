//! Can this active spell be targeted by this spell?

use crate::env::TargetingEnv;
use crate::spell::{SpellBookSection, SpellDefinition};
use crate::state::{ActiveSpell, PlayerId};

use super::guard::{Guard, GuardResult, Verdict, run_guards};
use super::{TargetSpellResult, TargetingError};

/// Eligibility query for spells aimed at another spell in effect
/// (Spell Binding, Disjunction).
#[derive(Clone, Copy, Debug)]
pub struct SpellTargetQuery<'q> {
    spell: &'q SpellDefinition,
    casting_player: PlayerId,
    target: &'q ActiveSpell,
}

impl<'q> SpellTargetQuery<'q> {
    pub fn new(
        spell: &'q SpellDefinition,
        casting_player: PlayerId,
        target: &'q ActiveSpell,
    ) -> Self {
        Self {
            spell,
            casting_player,
            target,
        }
    }

    pub fn evaluate(&self, env: &TargetingEnv<'_>) -> Result<TargetSpellResult, TargetingError> {
        let _span = tracing::debug_span!(
            "spell_target",
            spell = %self.spell.spell_id,
            target = %self.target.spell_id,
        )
        .entered();

        let check = SpellCheck {
            query: self,
            target_section: env.database().spell(&self.target.spell_id)?.section,
        };
        let guards = [
            Guard::new("own_spell", check_own_spell),
            Guard::new("overland_only", check_overland_only),
        ];
        run_guards("spell", &check, &guards)
    }
}

struct SpellCheck<'q> {
    query: &'q SpellTargetQuery<'q>,
    target_section: SpellBookSection,
}

fn check_own_spell(c: &SpellCheck<'_>) -> GuardResult {
    Ok(Verdict::reject_if(
        c.query.target.casting_player == c.query.casting_player,
        TargetSpellResult::CursingOrAttackingOwn,
    ))
}

fn check_overland_only(c: &SpellCheck<'_>) -> GuardResult {
    Ok(Verdict::reject_if(
        c.target_section != SpellBookSection::OverlandEnchantments,
        TargetSpellResult::OverlandEnchantmentsOnly,
    ))
}
