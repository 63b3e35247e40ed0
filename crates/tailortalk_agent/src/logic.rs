// --- File: crates/tailortalk_agent/src/logic.rs ---
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDateTime, TimeZone};
use tailortalk_calendar::{BookingEngine, BookingOutcome, CalendarError};
use tailortalk_common::services::{ExtractedIntent, Intent};
use tracing::debug;

/// Duration applied when the extracted record carries none, or a
/// non-positive one.
pub const DEFAULT_DURATION_MINUTES: i64 = 60;

/// Generic question used when the oracle flags a clarification but supplies
/// no question of its own.
const GENERIC_CLARIFICATION: &str =
    "Sorry, I couldn't understand your request. Please try again.";

/// Help message for messages whose intent the oracle could not classify.
const HELP_MESSAGE: &str = "I'm here to help you with your calendar. Try asking to book a meeting or check availability!\n\
Example: 'Book a meeting for tomorrow afternoon' or 'Do I have any free time this Friday?'";

const PARSE_FAILURE: &str = "Sorry, I couldn't understand that date and time. \
Please use a format like '2024-07-01T14:00' or '2024-07-01 14:00'.";

// --- Date/time parsing ---

/// One strategy for turning an extracted `date` + `time` pair into a start
/// instant.
pub type StartTimeParser = fn(&str, &str) -> Option<NaiveDateTime>;

/// Ordered parser strategies, tried in order, first success wins. Strict
/// combined ISO first, then the space-separated fallback. Extend this list
/// to accept more formats without touching the resolver.
pub const START_TIME_PARSERS: &[StartTimeParser] = &[parse_iso_combined, parse_space_separated];

fn parse_iso_combined(date: &str, time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{date}T{time}"), "%Y-%m-%dT%H:%M").ok()
}

fn parse_space_separated(date: &str, time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M").ok()
}

/// Parses the extracted date and time into a start instant in the local
/// timezone. Returns `None` when every strategy fails, or when the wall
/// time does not exist locally (DST gap).
pub fn parse_start(date: &str, time: &str) -> Option<DateTime<FixedOffset>> {
    let naive = START_TIME_PARSERS
        .iter()
        .find_map(|parser| parser(date, time))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
}

// --- Message formatting ---

fn fmt_start(instant: DateTime<FixedOffset>) -> String {
    instant.format("%A, %d %B %Y at %I:%M %p").to_string()
}

fn fmt_end(instant: DateTime<FixedOffset>) -> String {
    instant.format("%I:%M %p").to_string()
}

// The two intents share field-completion logic and differ only in phrasing
// and the terminal action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Book,
    Check,
}

fn missing_both_question(action: Action) -> &'static str {
    match action {
        Action::Book => "What day and time would you like to book? (e.g., '2024-07-01 14:00')",
        Action::Check => "What day and time should I check? (e.g., '2024-07-01 14:00')",
    }
}

fn missing_date_question(action: Action) -> &'static str {
    match action {
        Action::Book => "What day would you like to book? (e.g., 'today', 'tomorrow', 'Friday')",
        Action::Check => {
            "For which day should I check your availability? (e.g., 'Friday', 'today', 'tomorrow')"
        }
    }
}

fn missing_time_question(action: Action, date: &str) -> String {
    match action {
        Action::Book => format!("What time on {date} would you like to book? (e.g., 14:00)"),
        Action::Check => {
            format!("For what time on {date} should I check your availability? (e.g., 14:00)")
        }
    }
}

// --- Dialog Intent Resolver ---

/// Turns one extracted-intent record into a response string.
///
/// A pure decision procedure evaluated per turn; no state survives across
/// turns. Every combination of present/absent fields terminates in exactly
/// one outcome: a clarifying question, a booking confirmation, a
/// conflict-plus-suggestion message, an availability answer, or the generic
/// help message. Only store failures propagate as errors; unparseable input
/// is answered with a corrective prompt.
pub async fn resolve_intent(
    record: ExtractedIntent,
    engine: &BookingEngine,
) -> Result<String, CalendarError> {
    if record.clarification_needed {
        return Ok(record
            .clarification_question
            .unwrap_or_else(|| GENERIC_CLARIFICATION.to_string()));
    }

    let action = match &record.intent {
        Intent::BookMeeting => Action::Book,
        Intent::CheckAvailability => Action::Check,
        Intent::Unknown(intent) => {
            debug!("Unknown intent '{}', answering with help text", intent);
            return Ok(HELP_MESSAGE.to_string());
        }
    };

    let (date, time) = match (record.date.as_deref(), record.time.as_deref()) {
        (None, None) => return Ok(missing_both_question(action).to_string()),
        (None, Some(_)) => return Ok(missing_date_question(action).to_string()),
        (Some(date), None) => return Ok(missing_time_question(action, date)),
        (Some(date), Some(time)) => (date, time),
    };

    let Some(start) = parse_start(date, time) else {
        return Ok(PARSE_FAILURE.to_string());
    };
    // The duration comes straight from the oracle's JSON and may be any
    // i64. Values chrono cannot represent, like the non-positive ones, are
    // normalized to the default rather than allowed to panic.
    let duration = record
        .duration
        .filter(|minutes| *minutes > 0)
        .and_then(Duration::try_minutes)
        .unwrap_or_else(|| Duration::minutes(DEFAULT_DURATION_MINUTES));
    let Some(end) = start
        .checked_add_signed(duration)
        .or_else(|| start.checked_add_signed(Duration::minutes(DEFAULT_DURATION_MINUTES)))
    else {
        return Ok(PARSE_FAILURE.to_string());
    };

    match action {
        Action::Book => match engine.book(start, end, None).await? {
            BookingOutcome::Booked { event_id } => Ok(format!(
                "Booked your meeting for {} to {}! Event ID: {}",
                fmt_start(start),
                fmt_end(end),
                event_id
            )),
            BookingOutcome::Conflict => match engine.suggest_next(start, end).await? {
                Some(slot) => Ok(format!(
                    "Could not book: that slot is already taken. Next available slot: {} to {}.",
                    fmt_start(slot.start),
                    fmt_end(slot.end)
                )),
                None => Ok(
                    "Could not book: that slot is already taken and no free slots are available today."
                        .to_string(),
                ),
            },
        },
        Action::Check => {
            if engine.is_free(start, end).await? {
                Ok(format!(
                    "You are free from {} to {}!",
                    fmt_start(start),
                    fmt_end(end)
                ))
            } else {
                match engine.suggest_next(start, end).await? {
                    Some(slot) => Ok(format!(
                        "You are busy at that time. Next available slot: {} to {}.",
                        fmt_start(slot.start),
                        fmt_end(slot.end)
                    )),
                    None => Ok(
                        "You are busy at that time and no free slots are available today."
                            .to_string(),
                    ),
                }
            }
        }
    }
}
