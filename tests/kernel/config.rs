//! Resolver Configuration Tests
//!
//! Load `sharedkernel.toml` from a data directory and resolve labels with it.

use crate::common::*;
use sharedkernel::{ConfigError, EventLabelResolver, ResolverConfig, CONFIG_FILE_NAME};
use tempfile::TempDir;

fn open_resolver(dir: &TempDir) -> EventLabelResolver {
    let path = dir.path().join(CONFIG_FILE_NAME);
    ResolverConfig::write_default_if_missing(&path).expect("write default config");
    let config = ResolverConfig::from_file(&path).expect("load config");
    EventLabelResolver::new(&config).expect("build resolver")
}

#[test]
fn first_open_uses_not_mapped_fallback() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let resolver = open_resolver(&dir);

    assert_eq!(resolver.fallback(), EventType::DEFAULT_VALUE);
    assert_eq!(resolver.resolve("historic"), EventType::HISTORICAL_COC_MIGRATED);
    assert_eq!(resolver.resolve("unknown label"), EventType::DEFAULT_VALUE);
}

#[test]
fn edited_fallback_takes_effect_on_reopen() {
    let dir = TempDir::new().unwrap();
    let _ = open_resolver(&dir);

    let path = dir.path().join(CONFIG_FILE_NAME);
    ResolverConfig {
        fallback: "HISTORIC".to_string(),
    }
    .write_to_file(&path)
    .unwrap();

    let resolver = open_resolver(&dir);
    assert_eq!(resolver.resolve("unknown label"), EventType::HISTORICAL_COC_MIGRATED);
    assert_eq!(resolver.resolve("NotMapped"), EventType::DEFAULT_VALUE);
}

#[test]
fn bad_fallback_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "fallback = \"000\"\n").unwrap();

    match ResolverConfig::from_file(&path) {
        Err(ConfigError::UnknownFallback(NamedValueError::NotFound { value, kind, family })) => {
            assert_eq!(value, "000");
            assert_eq!(kind, LookupKind::DisplayName);
            assert_eq!(family, "EventType");
        }
        other => panic!("expected UnknownFallback, got {:?}", other),
    }
}
