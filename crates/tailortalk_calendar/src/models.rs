// --- File: crates/tailortalk_calendar/src/models.rs ---
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single booked, non-overlapping time interval with metadata.
///
/// Events are created only by the booking engine and never mutated after
/// creation. `start`/`end` carry their timezone offset and round-trip
/// through storage as RFC 3339 strings, so precision and offset survive a
/// save/load cycle. `start < end` is required; violating it is a bug in the
/// caller, not a user-facing condition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Opaque unique identifier, generated at creation time, never reused.
    pub id: String,
    pub summary: String,
    #[serde(default)]
    pub description: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}
