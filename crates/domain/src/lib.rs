//! Domain families built on sharedkernel-core
//!
//! - EventType: event codes carried on media records
//! - ResolverConfig / EventLabelResolver: label-to-event-type mapping
//!   configured via `sharedkernel.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod event_type;

pub use config::{
    ConfigError, ConfigResult, EventLabelResolver, ResolverConfig, CONFIG_FILE_NAME,
};
pub use event_type::EventType;
