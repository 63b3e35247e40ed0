// --- File: crates/tailortalk_agent/src/lib.rs ---
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod logic;
pub mod models;
pub mod routes;

pub use handlers::AgentState;
pub use routes::routes; // State for this crate's handlers
