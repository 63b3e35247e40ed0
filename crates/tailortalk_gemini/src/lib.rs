// --- File: crates/tailortalk_gemini/src/lib.rs ---
// Declare modules within this crate
pub mod logic;
pub mod models;

pub use logic::{GeminiError, GeminiExtractor};
