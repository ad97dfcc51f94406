//! Family declaration checks
//!
//! Lookups assume a well-formed family: at least one member, unique ids, and
//! display names that stay unique after case folding. Nothing enforces this
//! at compile time, so families are expected to call [`validate_family`]
//! from a unit test.

use std::collections::{HashMap, HashSet};

use crate::error::RegistryError;
use crate::named::{fold_case, NamedValue};

/// Check that family `T` declares a well-formed member set
///
/// # Errors
///
/// Returns the first problem found, scanning members in declaration order.
pub fn validate_family<T: NamedValue>() -> Result<(), RegistryError> {
    let members = T::members();
    if members.is_empty() {
        return Err(RegistryError::Empty { family: T::FAMILY });
    }

    let mut ids: HashSet<&'static str> = HashSet::with_capacity(members.len());
    let mut names: HashMap<String, &'static str> = HashMap::with_capacity(members.len());

    for member in members {
        if !ids.insert(member.id()) {
            return Err(RegistryError::DuplicateId {
                family: T::FAMILY,
                id: member.id(),
            });
        }

        if let Some(first) = names.insert(fold_case(member.name()).collect(), member.name()) {
            return Err(RegistryError::DuplicateName {
                family: T::FAMILY,
                first,
                second: member.name(),
            });
        }
    }

    Ok(())
}
