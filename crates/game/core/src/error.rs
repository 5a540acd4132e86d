//! Common error infrastructure for spell-core.
//!
//! Eligibility outcomes are not errors: every evaluator answers with a
//! [`TargetSpellResult`](crate::targeting::TargetSpellResult). The types here
//! only describe data-integrity faults (a spell naming an id the database does
//! not contain) and wiring faults (a collaborator the query needs was not
//! supplied).
//!
//! Domain-specific errors (`OracleError`, `TargetingError`) are defined in
//! their respective modules and implement [`GameError`].

/// Severity level of an error, used for categorization.
///
/// Evaluation is a pure function of its snapshots, so no error goes away on
/// retry; each one needs either new data or new wiring.
///
/// - **Validation**: Malformed or mismatched input data
/// - **Internal**: Unexpected inconsistency inside the engine
/// - **Fatal**: The caller wired the engine incorrectly and cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: spell definition references an unknown tile type
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: a unit that is in combat has no combat position
    Internal,

    /// Fatal error - required collaborator missing.
    ///
    /// Examples: terrain oracle not supplied to an overland query
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all spell-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by what has to change to fix it, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, metrics, and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
