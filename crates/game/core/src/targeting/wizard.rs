//! Can this wizard be targeted by this spell?

use crate::env::TargetingEnv;
use crate::spell::{KindOfSpell, SpellBookSection, SpellDefinition};
use crate::state::{KnownWizard, PlayerId, WizardState};

use super::guard::{Guard, GuardResult, Verdict, run_guards};
use super::{TargetSpellResult, TargetingError, resolve_kind};

/// Eligibility query for enemy wizard spells (Spell Blast, Drain Power...).
#[derive(Clone, Copy, Debug)]
pub struct WizardTargetQuery<'q> {
    spell: &'q SpellDefinition,
    casting_player: PlayerId,
    target_player: PlayerId,
    kind: Option<KindOfSpell>,
    section: Option<SpellBookSection>,
}

impl<'q> WizardTargetQuery<'q> {
    pub fn new(
        spell: &'q SpellDefinition,
        casting_player: PlayerId,
        target_player: PlayerId,
    ) -> Self {
        Self {
            spell,
            casting_player,
            target_player,
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
            "wizard_target",
            spell = %self.spell.spell_id,
            %kind,
            wizard = %self.target_player,
        )
        .entered();

        let check = WizardCheck {
            query: self,
            env,
            kind,
            known: env
                .wizards()?
                .known_wizard(self.casting_player, self.target_player),
        };
        let guards = [
            Guard::new("own_wizard", check_own_wizard),
            Guard::new("met", check_met),
            Guard::new("still_playing", check_still_playing),
            Guard::new("true_wizard", check_true_wizard),
            Guard::new("spell_blast", check_spell_blast),
        ];
        run_guards("wizard", &check, &guards)
    }
}

struct WizardCheck<'q, 'e> {
    query: &'q WizardTargetQuery<'q>,
    env: &'q TargetingEnv<'e>,
    kind: KindOfSpell,
    known: Option<&'q KnownWizard>,
}

fn check_own_wizard(c: &WizardCheck<'_, '_>) -> GuardResult {
    Ok(Verdict::reject_if(
        c.query.target_player == c.query.casting_player,
        TargetSpellResult::AttackingOwnWizard,
    ))
}

fn check_met(c: &WizardCheck<'_, '_>) -> GuardResult {
    Ok(Verdict::reject_if(c.known.is_none(), TargetSpellResult::WizardNotMet))
}

fn check_still_playing(c: &WizardCheck<'_, '_>) -> GuardResult {
    let Some(wizard) = c.known else {
        return Ok(Verdict::Continue);
    };
    Ok(Verdict::reject_if(
        wizard.state != WizardState::Active,
        TargetSpellResult::WizardBanishedOrDefeated,
    ))
}

fn check_true_wizard(c: &WizardCheck<'_, '_>) -> GuardResult {
    Ok(Verdict::reject_if(
        c.known.is_some_and(|wizard| !wizard.kind.is_wizard()),
        TargetSpellResult::NotAWizard,
    ))
}

/// Spell Blast costs the caster as much mana as the target has already spent.
fn check_spell_blast(c: &WizardCheck<'_, '_>) -> GuardResult {
    if c.kind != KindOfSpell::SpellBlast {
        return Ok(Verdict::Continue);
    }
    let wizards = c.env.wizards()?;
    let Some(progress) = wizards.casting_progress(c.query.target_player) else {
        return Ok(Verdict::Reject(TargetSpellResult::NoSpellBeingCast));
    };
    Ok(Verdict::reject_if(
        wizards.stored_mana(c.query.casting_player) < progress.mana_spent,
        TargetSpellResult::InsufficientMana,
    ))
}
