//! Error types for named value families
//!
//! Lookups have exactly one failure mode: nothing in the family matched.
//! Registry validation reports malformed family declarations separately so
//! that lookup callers never have to match on variants they cannot hit.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::fmt;
use thiserror::Error;

/// Result type alias for named value lookups
pub type Result<T> = std::result::Result<T, NamedValueError>;

/// Which attribute a strict lookup matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    /// Exact match on the stable identifier
    Id,
    /// Case-insensitive match on the display name
    DisplayName,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Id => f.write_str("value"),
            LookupKind::DisplayName => f.write_str("display name"),
        }
    }
}

/// Errors raised by strict lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamedValueError {
    /// No declared member of the family matched the input
    #[error("'{value}' is not a valid {kind} in {family}")]
    NotFound {
        /// The input that failed to match
        value: String,
        /// Attribute the lookup compared against
        kind: LookupKind,
        /// Type name of the family that was searched
        family: &'static str,
    },
}

impl NamedValueError {
    pub(crate) fn not_found(value: &str, kind: LookupKind, family: &'static str) -> Self {
        NamedValueError::NotFound {
            value: value.to_string(),
            kind,
            family,
        }
    }

    /// The input that failed to match
    pub fn value(&self) -> &str {
        match self {
            NamedValueError::NotFound { value, .. } => value,
        }
    }

    /// Type name of the family that was searched
    pub fn family(&self) -> &'static str {
        match self {
            NamedValueError::NotFound { family, .. } => family,
        }
    }
}

/// Errors found when validating a family declaration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The family declares no members at all
    #[error("{family} declares no members")]
    Empty {
        /// Type name of the family
        family: &'static str,
    },

    /// Two members share the same identifier
    #[error("{family} declares id '{id}' more than once")]
    DuplicateId {
        /// Type name of the family
        family: &'static str,
        /// The repeated identifier
        id: &'static str,
    },

    /// Two display names collide once case is ignored
    #[error("{family} declares display names '{first}' and '{second}' that collide ignoring case")]
    DuplicateName {
        /// Type name of the family
        family: &'static str,
        /// Display name declared first
        first: &'static str,
        /// Display name declared later
        second: &'static str,
    },
}
