// --- File: crates/tailortalk_calendar/src/lib.rs ---
// Declare modules within this crate
pub mod logic;
mod logic_proptest;
pub mod models;
pub mod store;
#[cfg(test)]
mod store_test;

pub use logic::{BookingEngine, BookingOutcome, CalendarError, Slot};
pub use models::Event;
pub use store::{EventStore, JsonFileStore, MemoryStore, StoreError};
