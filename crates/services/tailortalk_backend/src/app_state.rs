// --- File: crates/services/tailortalk_backend/src/app_state.rs ---
use std::sync::Arc;
use tailortalk_calendar::{BookingEngine, JsonFileStore};
use tailortalk_common::services::{BoxedError, IntentExtractor};
use tailortalk_config::AppConfig;
use tailortalk_gemini::GeminiExtractor;
use tracing::warn;

const DEFAULT_BOOKINGS_FILE: &str = "bookings.json";

/// Application state that is shared across all routes.
///
/// Holds the loaded configuration, the booking engine (which owns the only
/// handle to the event store), and the language-understanding oracle when
/// the `use_gemini` flag is on.
#[derive(Clone)]
pub struct AppState {
    #[allow(dead_code)]
    pub config: Arc<AppConfig>,
    pub engine: Arc<BookingEngine>,
    pub extractor: Option<Arc<dyn IntentExtractor<Error = BoxedError>>>,
}

impl AppState {
    /// Create a new AppState with the given configuration.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let calendar = config.calendar.clone().unwrap_or_default();
        let store = Arc::new(JsonFileStore::new(
            calendar
                .bookings_file
                .unwrap_or_else(|| DEFAULT_BOOKINGS_FILE.to_string()),
        ));
        let engine = Arc::new(match calendar.default_summary {
            Some(summary) => BookingEngine::with_default_summary(store, summary),
            None => BookingEngine::new(store),
        });

        let extractor: Option<Arc<dyn IntentExtractor<Error = BoxedError>>> = if config.use_gemini
        {
            match GeminiExtractor::from_config(config.gemini.as_ref()) {
                Ok(gemini) => Some(Arc::new(gemini)),
                Err(err) => {
                    warn!("Gemini extractor unavailable, chat will be disabled: {}", err);
                    None
                }
            }
        } else {
            None
        };

        Self {
            config,
            engine,
            extractor,
        }
    }
}
