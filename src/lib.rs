//! sharedkernel - closed families of named values
//!
//! A family is a fixed set of constants, each with a stable `id` and a
//! display `name`. Families are declared with [`named_values!`] and looked up
//! by id or by display name.
//!
//! # Quick Start
//!
//! ```
//! use sharedkernel::{from_display_name_or_default, from_id, EventType};
//!
//! let historic = from_id::<EventType>("026")?;
//! assert_eq!(historic.to_string(), "Historic");
//!
//! let fallback = from_display_name_or_default("bogus", &EventType::DEFAULT_VALUE);
//! assert_eq!(*fallback, EventType::DEFAULT_VALUE);
//! # Ok::<(), sharedkernel::NamedValueError>(())
//! ```
//!
//! # Architecture
//!
//! - `sharedkernel-core`: the [`NamedValue`] trait, lookups, ordering, errors
//! - `sharedkernel-domain`: concrete families such as [`EventType`]

pub use sharedkernel_core::*;
pub use sharedkernel_domain::*;
