//! Targeting errors.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::UnitUrn;

/// Failures that prevent a target query from producing any answer.
///
/// An ineligible target is not an error; it is reported as a
/// [`TargetSpellResult`](super::TargetSpellResult).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TargetingError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// A rule needed the terrain under a unit that is not on any map.
    #[error("{0} is not on the overland map")]
    UnitNotOnMap(UnitUrn),

    #[error("{0} is in combat but has no combat position")]
    MissingCombatPosition(UnitUrn),
}

impl GameError for TargetingError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(error) => error.severity(),
            Self::UnitNotOnMap(_) | Self::MissingCombatPosition(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(error) => error.error_code(),
            Self::UnitNotOnMap(_) => "TARGETING_UNIT_NOT_ON_MAP",
            Self::MissingCombatPosition(_) => "TARGETING_MISSING_COMBAT_POSITION",
        }
    }
}
