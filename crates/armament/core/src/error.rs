//! Common error infrastructure for armament-core.
//!
//! Domain-specific errors (`RulesError`, `RecordError`, `LoadoutError`) live
//! next to the types they validate. This module only holds the shared
//! classification used by callers to decide how to react.
//!
//! Running out of ammunition is *not* an error: [`crate::CraftWeapon::set_ammo`]
//! reports it through its boolean return value.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the simulation can keep running without the
    /// affected piece (e.g., a saved weapon whose rules were removed).
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: negative ammo capacity, duplicate weapon ids.
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all armament-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait ArmamentError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
