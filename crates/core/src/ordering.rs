//! Ordering helpers over optional operands
//!
//! These mirror the relational operators of the pattern, where an absent
//! value sorts below every present one. For two present values each helper
//! agrees with [`compare`].
//!
//! | left | right | `lt` | `le` | `gt` | `ge` |
//! |------|-------|------|------|------|------|
//! | None | None | false | true | false | true |
//! | None | Some | true | true | false | false |
//! | Some | None | false | false | true | true |

use std::cmp::Ordering;

use crate::named::{compare, NamedValue};

/// `left < right`, with an absent operand as the minimum
pub fn less_than<T: NamedValue>(left: Option<&T>, right: Option<&T>) -> bool {
    match left {
        None => right.is_some(),
        Some(left) => compare(left, right) == Ordering::Less,
    }
}

/// `left <= right`, with an absent operand as the minimum
pub fn less_or_equal<T: NamedValue>(left: Option<&T>, right: Option<&T>) -> bool {
    match left {
        None => true,
        Some(left) => compare(left, right) != Ordering::Greater,
    }
}

/// `left > right`, with an absent operand as the minimum
pub fn greater_than<T: NamedValue>(left: Option<&T>, right: Option<&T>) -> bool {
    match left {
        None => false,
        Some(left) => compare(left, right) == Ordering::Greater,
    }
}

/// `left >= right`, with an absent operand as the minimum
pub fn greater_or_equal<T: NamedValue>(left: Option<&T>, right: Option<&T>) -> bool {
    match left {
        None => right.is_none(),
        Some(left) => compare(left, right) != Ordering::Less,
    }
}
