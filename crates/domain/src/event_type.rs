//! Event type family
//!
//! Maps the external event codes carried on incoming media records to
//! display labels.
//!
//! | Member | Id | Name |
//! |--------|----|------|
//! | `HISTORICAL_COC_MIGRATED` | `026` | Historic |
//! | `DEFAULT_VALUE` | `000` | NotMapped |

use sharedkernel_core::named_values;

named_values! {
    /// Kind of event attached to a media record
    ///
    /// `DEFAULT_VALUE` is the sentinel for codes that have no mapping.
    pub struct EventType {
        /// Chain-of-custody record migrated from the legacy system
        HISTORICAL_COC_MIGRATED = ("026", "Historic"),
        /// Sentinel for unmapped event codes
        DEFAULT_VALUE = ("000", "NotMapped"),
    }
}

impl EventType {
    /// Whether this is a real mapping rather than the sentinel
    pub fn is_mapped(&self) -> bool {
        *self != EventType::DEFAULT_VALUE
    }
}

impl Default for EventType {
    fn default() -> Self {
        EventType::DEFAULT_VALUE
    }
}

// ============================================================================
// Tests
// ============================================================================
