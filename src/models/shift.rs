//! Shift model and related types.
//!
//! This module defines [`ShiftEntry`], the caller-supplied content of a shift,
//! and [`Shift`], a recorded entry carrying its system-assigned id.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::time_of_day::hh_mm;

/// The replaceable fields of a shift, as entered by a caller.
///
/// A shift never crosses midnight: both times belong to `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEntry {
    /// Name of the employee who worked the shift.
    pub employee_name: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Start time-of-day.
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    /// End time-of-day.
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
}

impl ShiftEntry {
    /// Checks that the start time is strictly before the end time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShiftInterval` when `start_time >= end_time`.
    pub fn validate(&self) -> EngineResult<()> {
        validate_interval(self.start_time, self.end_time)
    }
}

/// Represents a recorded work shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// System-assigned identifier, stable across edits.
    pub id: u64,
    /// Name of the employee who worked the shift.
    pub employee_name: String,
    /// The calendar date of the shift (determines the day-of-week premiums).
    pub date: NaiveDate,
    /// Start time-of-day.
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    /// End time-of-day.
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
}

impl Shift {
    /// Builds a shift from an entry and an assigned id.
    pub fn from_entry(id: u64, entry: ShiftEntry) -> Self {
        Self {
            id,
            employee_name: entry.employee_name,
            date: entry.date,
            start_time: entry.start_time,
            end_time: entry.end_time,
        }
    }

    /// Checks that the start time is strictly before the end time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShiftInterval` when `start_time >= end_time`.
    pub fn validate(&self) -> EngineResult<()> {
        validate_interval(self.start_time, self.end_time)
    }

    /// Calculates the worked hours for the shift.
    ///
    /// This is plain end minus start, without any premium weighting.
    ///
    /// # Examples
    ///
    /// ```
    /// use turncal_engine::models::Shift;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift {
    ///     id: 1,
    ///     employee_name: "Alice".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
    ///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
    /// };
    /// assert_eq!(shift.worked_hours(), Decimal::new(15, 1)); // 1.5 hours
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        let seconds = (self.end_time - self.start_time).num_seconds();
        Decimal::from(seconds) / Decimal::from(3600)
    }

    /// Returns the day of the week for the shift.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }
}

fn validate_interval(start: NaiveTime, end: NaiveTime) -> EngineResult<()> {
    if start >= end {
        return Err(EngineError::InvalidShiftInterval { start, end });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn make_shift(date: &str, start: NaiveTime, end: NaiveTime) -> Shift {
        Shift {
            id: 1,
            employee_name: "Alice".to_string(),
            date: make_date(date),
            start_time: start,
            end_time: end,
        }
    }

    #[test]
    fn test_8_hour_shift() {
        let shift = make_shift("2026-01-15", make_time(9, 0), make_time(17, 0));
        assert_eq!(shift.worked_hours(), Decimal::new(80, 1));
    }

    #[test]
    fn test_quarter_hour_shift() {
        let shift = make_shift("2026-01-15", make_time(9, 0), make_time(9, 15));
        assert_eq!(shift.worked_hours(), Decimal::new(25, 2));
    }

    #[test]
    fn test_day_of_week() {
        // 2026-01-15 is a Thursday
        let thursday = make_shift("2026-01-15", make_time(9, 0), make_time(17, 0));
        assert_eq!(thursday.day_of_week(), Weekday::Thu);

        let sunday = make_shift("2026-01-18", make_time(9, 0), make_time(17, 0));
        assert_eq!(sunday.day_of_week(), Weekday::Sun);
    }

    #[test]
    fn test_validate_rejects_equal_times() {
        let shift = make_shift("2026-01-15", make_time(9, 0), make_time(9, 0));
        assert!(matches!(
            shift.validate(),
            Err(EngineError::InvalidShiftInterval { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_times() {
        let entry = ShiftEntry {
            employee_name: "Alice".to_string(),
            date: make_date("2026-01-15"),
            start_time: make_time(17, 0),
            end_time: make_time(9, 0),
        };
        match entry.validate() {
            Err(EngineError::InvalidShiftInterval { start, end }) => {
                assert_eq!(start, make_time(17, 0));
                assert_eq!(end, make_time(9, 0));
            }
            other => panic!("Expected InvalidShiftInterval, got {:?}", other),
        }
    }

    #[test]
    fn test_from_entry_keeps_fields() {
        let entry = ShiftEntry {
            employee_name: "Bob".to_string(),
            date: make_date("2026-01-17"),
            start_time: make_time(17, 30),
            end_time: make_time(19, 0),
        };
        let shift = Shift::from_entry(7, entry.clone());
        assert_eq!(shift.id, 7);
        assert_eq!(shift.employee_name, entry.employee_name);
        assert_eq!(shift.start_time, entry.start_time);
    }

    #[test]
    fn test_shift_times_serialize_as_hh_mm() {
        let shift = make_shift("2026-01-15", make_time(9, 0), make_time(17, 30));
        let json = serde_json::to_value(&shift).unwrap();
        assert_eq!(json["start_time"], "09:00");
        assert_eq!(json["end_time"], "17:30");
        assert_eq!(json["date"], "2026-01-15");
    }

    #[test]
    fn test_shift_deserialization_accepts_bare_hour() {
        let json = r#"{
            "id": 3,
            "employee_name": "Alice",
            "date": "2026-01-15",
            "start_time": "8",
            "end_time": "16:30"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.start_time, make_time(8, 0));
        assert_eq!(shift.end_time, make_time(16, 30));
    }
}
