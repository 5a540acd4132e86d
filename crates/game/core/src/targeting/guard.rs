//! Ordered guard chains.
//!
//! Every evaluator is a fixed list of named guards run front to back. The
//! first guard that does not pass decides the result, so the list order is the
//! rule priority.

use super::{TargetSpellResult, TargetingError};

/// What a single guard concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// Nothing to object to; move on to the next guard.
    Continue,
    Reject(TargetSpellResult),
    /// Valid without consulting the remaining guards.
    Accept,
}

impl Verdict {
    pub(crate) fn reject_if(condition: bool, result: TargetSpellResult) -> Self {
        if condition {
            Self::Reject(result)
        } else {
            Self::Continue
        }
    }
}

pub(crate) type GuardResult = Result<Verdict, TargetingError>;

pub(crate) struct Guard<C> {
    pub(crate) name: &'static str,
    pub(crate) check: fn(&C) -> GuardResult,
}

impl<C> Guard<C> {
    pub(crate) const fn new(name: &'static str, check: fn(&C) -> GuardResult) -> Self {
        Self { name, check }
    }
}

/// Runs `guards` in order against `ctx` and returns the first rejection.
pub(crate) fn run_guards<C>(
    evaluator: &'static str,
    ctx: &C,
    guards: &[Guard<C>],
) -> Result<TargetSpellResult, TargetingError> {
    for guard in guards {
        match (guard.check)(ctx)? {
            Verdict::Continue => {}
            Verdict::Reject(result) => {
                tracing::debug!(evaluator, guard = guard.name, %result, "spell target rejected");
                return Ok(result);
            }
            Verdict::Accept => {
                tracing::trace!(evaluator, guard = guard.name, "spell target accepted early");
                return Ok(TargetSpellResult::ValidTarget);
            }
        }
    }

    tracing::trace!(evaluator, "spell target valid");
    Ok(TargetSpellResult::ValidTarget)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass(_: &u32) -> GuardResult {
        Ok(Verdict::Continue)
    }

    fn reject_odd(value: &u32) -> GuardResult {
        Ok(Verdict::reject_if(value % 2 == 1, TargetSpellResult::UnitDead))
    }

    fn accept(_: &u32) -> GuardResult {
        Ok(Verdict::Accept)
    }

    fn always_reject(_: &u32) -> GuardResult {
        Ok(Verdict::Reject(TargetSpellResult::Immune))
    }

    #[test]
    fn first_rejection_wins() {
        let guards = [
            Guard::new("pass", pass),
            Guard::new("odd", reject_odd),
            Guard::new("always", always_reject),
        ];
        assert_eq!(
            run_guards("test", &1, &guards),
            Ok(TargetSpellResult::UnitDead)
        );
        assert_eq!(
            run_guards("test", &2, &guards),
            Ok(TargetSpellResult::Immune)
        );
    }

    #[test]
    fn accept_skips_remaining_guards() {
        let guards = [Guard::new("accept", accept), Guard::new("always", always_reject)];
        assert_eq!(
            run_guards("test", &0, &guards),
            Ok(TargetSpellResult::ValidTarget)
        );
    }

    #[test]
    fn empty_chain_is_valid() {
        assert_eq!(
            run_guards::<u32>("test", &0, &[]),
            Ok(TargetSpellResult::ValidTarget)
        );
    }
}
