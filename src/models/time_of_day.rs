//! Time-of-day text handling.
//!
//! Shift times are entered as `HH` (a whole hour), `HH:mm` or `HH:mm:ss`. Parsing lives
//! at the boundary; the pricing core only ever sees [`NaiveTime`] values.

use chrono::{NaiveTime, Timelike};

use crate::error::{EngineError, EngineResult};

/// Parses a time-of-day entered as `H`, `HH`, `H:MM` or `HH:MM`, optionally
/// followed by `:SS`.
///
/// A bare hour means the start of that hour. Seconds are checked and then
/// dropped, so results are whole minutes. Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use turncal_engine::models::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time_of_day("8").unwrap(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
/// assert_eq!(parse_time_of_day("17:30").unwrap(), NaiveTime::from_hms_opt(17, 30, 0).unwrap());
/// assert_eq!(parse_time_of_day("08:30:45").unwrap(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
/// assert!(parse_time_of_day("25").is_err());
/// ```
pub fn parse_time_of_day(input: &str) -> EngineResult<NaiveTime> {
    let trimmed = input.trim();
    let invalid = || EngineError::InvalidTime {
        input: input.to_string(),
    };

    let mut parts = trimmed.splitn(3, ':');
    let hour = parts.next().unwrap_or_default();
    let minute = parts.next().unwrap_or("0");
    let second = parts.next().unwrap_or("0");

    let hour = parse_component(hour).ok_or_else(invalid)?;
    let minute = parse_component(minute).ok_or_else(invalid)?;
    let second = parse_component(second).ok_or_else(invalid)?;

    NaiveTime::from_hms_opt(hour, minute, second)
        .and_then(|_| NaiveTime::from_hms_opt(hour, minute, 0))
        .ok_or_else(invalid)
}

/// Formats a time-of-day in its canonical `HH:MM` form.
///
/// ```
/// use turncal_engine::models::format_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(format_time_of_day(NaiveTime::from_hms_opt(8, 5, 0).unwrap()), "08:05");
/// ```
pub fn format_time_of_day(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

// One or two ASCII digits; rejects signs and whitespace that `str::parse` would let through.
fn parse_component(text: &str) -> Option<u32> {
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Serde adapter storing a [`NaiveTime`] as `HH:MM` text.
pub(crate) mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time_of_day(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_time_of_day(&text).map_err(serde::de::Error::custom)
    }
}
