// --- File: crates/tailortalk_calendar/src/logic.rs ---
use crate::models::Event;
use crate::store::{EventStore, StoreError};
use chrono::{DateTime, Duration, FixedOffset};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Calendar store error: {0}")]
    Store(#[from] StoreError),
}

/// Summary used when a booking request does not supply one.
pub const DEFAULT_SUMMARY: &str = "Meeting via TailorTalk";

/// Step by which the free-slot suggester shifts a rejected interval.
pub const SUGGESTION_STEP_MINUTES: i64 = 60;
/// Maximum number of shifts the suggester tries, i.e. it searches at most
/// 24 hours past the rejected start. Bounded to guarantee termination.
pub const SUGGESTION_MAX_SHIFTS: u32 = 24;

/// A candidate time interval, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slot {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

/// Result of a booking attempt. A conflict is a normal outcome, not an
/// error; it triggers the suggestion path at the dialog layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BookingOutcome {
    Booked { event_id: String },
    Conflict,
}

/// Half-open interval overlap test: an event ending exactly when the slot
/// starts (or vice versa) does not conflict.
pub fn overlaps(
    event: &Event,
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
) -> bool {
    event.start < end && event.end > start
}

/// The booking engine: conflict detection, atomic booking, free-slot
/// suggestion.
///
/// All access to stored events goes through the injected [`EventStore`].
/// Mutations run under a single writer lock held across the whole
/// load-check-append-save sequence, so two concurrent bookings for
/// overlapping intervals cannot both pass the conflict check.
pub struct BookingEngine {
    store: Arc<dyn EventStore>,
    default_summary: String,
    write_lock: Mutex<()>,
}

impl BookingEngine {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self::with_default_summary(store, DEFAULT_SUMMARY)
    }

    pub fn with_default_summary(store: Arc<dyn EventStore>, summary: impl Into<String>) -> Self {
        BookingEngine {
            store,
            default_summary: summary.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Reports whether `[start, end)` overlaps no stored event.
    ///
    /// O(n) scan over the stored events; at this scale no interval tree is
    /// warranted. An empty store is always free.
    pub async fn is_free(
        &self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Result<bool, CalendarError> {
        debug_assert!(start < end, "slot start must precede its end");
        let events = self.store.load().await?;
        Ok(!events.iter().any(|event| overlaps(event, start, end)))
    }

    /// Books `[start, end)` if it is free, persisting a new event.
    ///
    /// On conflict the store is left untouched. Every successful call adds
    /// exactly one event with a fresh id; nothing is ever overwritten or
    /// merged.
    pub async fn book(
        &self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        summary: Option<&str>,
    ) -> Result<BookingOutcome, CalendarError> {
        debug_assert!(start < end, "slot start must precede its end");
        let _guard = self.write_lock.lock().await;

        let mut events = self.store.load().await?;
        if events.iter().any(|event| overlaps(event, start, end)) {
            debug!("Booking {} - {} rejected: slot taken", start, end);
            return Ok(BookingOutcome::Conflict);
        }

        let event = Event {
            id: format!("evt_{}", Uuid::new_v4()),
            summary: summary.unwrap_or(&self.default_summary).to_string(),
            description: String::new(),
            start,
            end,
        };
        let event_id = event.id.clone();
        events.push(event);
        self.store.save(&events).await?;

        info!("Booked event {} for {} - {}", event_id, start, end);
        Ok(BookingOutcome::Booked { event_id })
    }

    /// Searches forward from a rejected interval for the next free slot of
    /// the same duration.
    ///
    /// Shifts both endpoints by [`SUGGESTION_STEP_MINUTES`] at most
    /// [`SUGGESTION_MAX_SHIFTS`] times and returns the first shifted
    /// interval the conflict check reports free. `None` means nothing is
    /// free within the bound, which callers treat as "no suggestion
    /// available today".
    pub async fn suggest_next(
        &self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Result<Option<Slot>, CalendarError> {
        let step = Duration::minutes(SUGGESTION_STEP_MINUTES);
        let mut try_start = start;
        let mut try_end = end;
        for _ in 0..SUGGESTION_MAX_SHIFTS {
            try_start += step;
            try_end += step;
            if self.is_free(try_start, try_end).await? {
                return Ok(Some(Slot {
                    start: try_start,
                    end: try_end,
                }));
            }
        }
        Ok(None)
    }
}
