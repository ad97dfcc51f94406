//! Lookup Tests
//!
//! Every declared member must be reachable by its id and by its display name
//! in any casing; anything else is a `NotFound` or the supplied default.

use crate::common::*;
use proptest::prelude::*;

// ============================================================================
// Round trips over declared members
// ============================================================================

#[test]
fn every_event_type_resolves_by_id() {
    for member in all_values::<EventType>() {
        assert_eq!(from_id::<EventType>(member.id()).unwrap(), member);
    }
}

#[test]
fn every_event_type_resolves_by_display_name_any_case() {
    for member in all_values::<EventType>() {
        let name = member.name();
        assert_eq!(from_display_name::<EventType>(name).unwrap(), member);
        assert_eq!(
            from_display_name::<EventType>(&name.to_uppercase()).unwrap(),
            member
        );
        assert_eq!(
            from_display_name::<EventType>(&name.to_lowercase()).unwrap(),
            member
        );
    }
}

#[test]
fn event_type_all_values_exact() {
    let members: Vec<(&str, &str)> = all_values::<EventType>()
        .map(|m| (m.id(), m.name()))
        .collect();
    assert_eq!(members, vec![("026", "Historic"), ("000", "NotMapped")]);
}

#[test]
fn all_values_is_stable_across_calls() {
    let first: Vec<EventType> = all_values::<EventType>().copied().collect();
    for _ in 0..3 {
        let again: Vec<EventType> = all_values::<EventType>().copied().collect();
        assert_eq!(first, again);
    }
}

#[test]
fn families_only_enumerate_their_own_members() {
    assert_eq!(all_values::<EventType>().count(), 2);
    assert_eq!(all_values::<MediaSource>().count(), 3);
    assert!(all_values::<MediaSource>().all(|m| m.name() != "Historic"));
}

// ============================================================================
// Failures and defaults
// ============================================================================

#[test]
fn unknown_id_is_not_found() {
    init_tracing();
    let err = from_id::<EventType>("999").unwrap_err();
    assert_eq!(err.value(), "999");
    assert_eq!(err.family(), "EventType");
    assert_eq!(err.to_string(), "'999' is not a valid value in EventType");
}

#[test]
fn id_lookup_does_not_fold_case_or_trim() {
    assert!(from_id::<EventType>(" 026").is_err());
    assert!(from_id::<EventType>("26").is_err());
}

#[test]
fn unknown_display_name_is_not_found() {
    let err = from_display_name::<EventType>("Historical").unwrap_err();
    assert!(matches!(
        err,
        NamedValueError::NotFound {
            kind: LookupKind::DisplayName,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "'Historical' is not a valid display name in EventType"
    );
}

#[test]
fn display_name_lookup_is_per_family() {
    assert!(from_display_name::<EventType>("BodyCamera").is_err());
    assert_eq!(
        *from_display_name::<MediaSource>("bodycamera").unwrap(),
        MediaSource::BODY_CAMERA
    );
}

#[test]
fn or_default_matches_lowercase_input() {
    let found = from_display_name_or_default("historic", &EventType::DEFAULT_VALUE);
    assert_eq!(*found, EventType::HISTORICAL_COC_MIGRATED);
}

#[test]
fn or_default_returns_default_on_miss() {
    init_tracing();
    let fallback = EventType::DEFAULT_VALUE;
    let found = from_display_name_or_default("bogus", &fallback);
    assert!(std::ptr::eq(found, &fallback));
    assert_eq!(*found, EventType::DEFAULT_VALUE);
}

#[test]
fn parse_and_serde_use_id() {
    let parsed: EventType = "026".parse().unwrap();
    assert_eq!(parsed, EventType::HISTORICAL_COC_MIGRATED);

    let json = serde_json::to_string(&vec![EventType::DEFAULT_VALUE]).unwrap();
    assert_eq!(json, "[\"000\"]");
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn id_lookup_succeeds_only_for_declared_ids(id in "[0-9]{3}") {
        let declared = all_values::<EventType>().any(|m| m.id() == id);
        prop_assert_eq!(from_id::<EventType>(&id).is_ok(), declared);
    }

    #[test]
    fn display_name_lookup_ignores_arbitrary_casing(
        idx in 0usize..2,
        mask in prop::collection::vec(any::<bool>(), 16),
    ) {
        let member = EventType::ALL[idx];
        let mangled: String = member
            .name()
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, &upper)| if upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect();
        prop_assert_eq!(*from_display_name::<EventType>(&mangled).unwrap(), member);
    }

    #[test]
    fn or_default_never_fails(label in ".*") {
        let found = from_display_name_or_default(&label, &EventType::DEFAULT_VALUE);
        let strict = from_display_name::<EventType>(&label);
        match strict {
            Ok(member) => prop_assert_eq!(found, member),
            Err(_) => prop_assert_eq!(*found, EventType::DEFAULT_VALUE),
        }
    }
}
