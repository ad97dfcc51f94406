//! Named value families
//!
//! A family is a closed set of `'static` constants, each carrying a stable
//! `id` and a display `name`. The family hands out its full member list
//! through [`NamedValue::members`]; every lookup below is a linear scan of
//! that slice, so nothing is discovered at runtime and nothing is cached.
//!
//! ## Matching rules
//!
//! | Operation | Compares | Rule |
//! |-----------|----------|------|
//! | [`from_id`] | `id` | exact, ordinal |
//! | [`from_display_name`] | `name` | case-insensitive |
//! | [`compare`] | `name` | ordinal |
//! | [`equals`] | family + `id` | exact, ordinal |

use std::any::TypeId;
use std::cmp::Ordering;
use std::slice;

use tracing::debug;

use crate::error::{LookupKind, NamedValueError, Result};

/// A member of a closed enumeration family
///
/// Implementors are normally generated by [`named_values!`](crate::named_values),
/// which declares the members as associated constants and wires up the
/// std comparison traits consistently with the free functions in this module.
///
/// ## Invariant
///
/// Within one family every `id` is distinct, and every `name` stays distinct
/// after case folding. [`validate_family`](crate::validate_family) checks both.
pub trait NamedValue: Sized + Send + Sync + 'static {
    /// Type name of the family, used in diagnostics
    const FAMILY: &'static str;

    /// Stable identifier, unique within the family
    fn id(&self) -> &'static str;

    /// Display label, unique within the family ignoring case
    fn name(&self) -> &'static str;

    /// Every member declared by this family, in declaration order
    fn members() -> &'static [Self];
}

/// Iterate every member declared by family `T`
///
/// Each call returns a fresh iterator; the returned iterator is also `Clone`.
/// Only `T`'s own members are yielded.
pub fn all_values<T: NamedValue>() -> slice::Iter<'static, T> {
    T::members().iter()
}

/// Find the member of `T` whose id equals `id` exactly
///
/// # Errors
///
/// Returns [`NamedValueError::NotFound`] if no member has that id.
pub fn from_id<T: NamedValue>(id: &str) -> Result<&'static T> {
    parse(id, LookupKind::Id, |member: &T| member.id() == id)
}

/// Find the member of `T` whose display name matches `name` ignoring case
///
/// # Errors
///
/// Returns [`NamedValueError::NotFound`] if no member has that display name.
pub fn from_display_name<T: NamedValue>(name: &str) -> Result<&'static T> {
    parse(name, LookupKind::DisplayName, |member: &T| {
        display_names_match(member.name(), name)
    })
}

/// Like [`from_display_name`], but returns `default` instead of failing
pub fn from_display_name_or_default<'a, T: NamedValue>(name: &str, default: &'a T) -> &'a T {
    match find(|member: &T| display_names_match(member.name(), name)) {
        Some(member) => member,
        None => {
            debug!(
                family = T::FAMILY,
                display_name = name,
                fallback = default.id(),
                "display name not declared, using fallback member"
            );
            default
        }
    }
}

/// Order `this` against `other` by display name
///
/// Names are compared ordinally, byte by byte, so every uppercase ASCII
/// letter sorts before every lowercase one ("Banana" < "apple"). A present
/// value is always greater than an absent one.
pub fn compare<T: NamedValue>(this: &T, other: Option<&T>) -> Ordering {
    match other {
        Some(other) => this.name().cmp(other.name()),
        None => Ordering::Greater,
    }
}

/// Whether `left` and `right` are the same member
///
/// Values from different families are never equal, even when their ids
/// coincide.
pub fn equals<A: NamedValue, B: NamedValue>(left: &A, right: &B) -> bool {
    TypeId::of::<A>() == TypeId::of::<B>() && left.id() == right.id()
}

/// [`equals`] lifted over optional operands
///
/// Two absent values are equal; an absent value never equals a present one.
pub fn equals_opt<A: NamedValue, B: NamedValue>(left: Option<&A>, right: Option<&B>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => equals(left, right),
        _ => false,
    }
}

/// Whether two display names are equal ignoring case
///
/// Folds with Unicode lowercase mapping, so this is not limited to ASCII.
pub fn display_names_match(left: &str, right: &str) -> bool {
    fold_case(left).eq(fold_case(right))
}

/// Per-character lowercase fold shared by lookups and registry checks
///
/// Unlike `str::to_lowercase`, a final capital sigma folds to `σ`, not `ς`.
pub(crate) fn fold_case(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

fn find<T, P>(predicate: P) -> Option<&'static T>
where
    T: NamedValue,
    P: Fn(&T) -> bool,
{
    T::members().iter().find(|&member| predicate(member))
}

fn parse<T, P>(value: &str, kind: LookupKind, predicate: P) -> Result<&'static T>
where
    T: NamedValue,
    P: Fn(&T) -> bool,
{
    find(predicate).ok_or_else(|| {
        debug!(family = T::FAMILY, value, %kind, "strict lookup found no member");
        NamedValueError::not_found(value, kind, T::FAMILY)
    })
}

// ============================================================================
// Tests
// ============================================================================
