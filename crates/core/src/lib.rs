//! Core types for named value families
//!
//! This crate defines the foundational pieces every family builds on:
//! - NamedValue: trait implemented by each closed family of constants
//! - Lookups: `from_id`, `from_display_name`, `from_display_name_or_default`
//! - Comparison: `compare`, `equals`, and the optional-operand ordering helpers
//! - Registry checks: `validate_family`
//! - Error: `NamedValueError` for lookups, `RegistryError` for declarations
//! - `named_values!`: declares a family and its std trait impls

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
mod macros;
pub mod named;
pub mod ordering;
pub mod registry;

pub use error::{LookupKind, NamedValueError, RegistryError, Result};
pub use named::{
    all_values, compare, display_names_match, equals, equals_opt, from_display_name,
    from_display_name_or_default, from_id, NamedValue,
};
pub use ordering::{greater_or_equal, greater_than, less_or_equal, less_than};
pub use registry::validate_family;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
