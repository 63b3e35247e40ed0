// --- File: crates/tailortalk_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Calendar Config ---
// Holds the event store location and booking defaults.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CalendarConfig {
    /// Path of the JSON bookings file. Defaults to "bookings.json" in the
    /// working directory when absent.
    pub bookings_file: Option<String>,
    /// Summary used for events booked without an explicit title.
    pub default_summary: Option<String>,
}

// --- Gemini Config ---
// Holds non-secret Gemini config. API key loaded directly from env var.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GeminiConfig {
    /// Model identifier, e.g. "models/gemini-2.0-flash".
    pub model: Option<String>,
    /// API base URL override, mainly for tests.
    pub api_base: Option<String>,
    // Secret loaded directly from env var: GEMINI_API_KEY
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_gemini: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub calendar: Option<CalendarConfig>,
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}
