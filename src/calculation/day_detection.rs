//! Day detection logic.
//!
//! This module provides utilities for determining the day type (weekday,
//! Saturday, Sunday) that selects which premium bands apply to a shift.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day for premium lookup.
///
/// # Example
///
/// ```
/// use turncal_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

impl From<Weekday> for DayType {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat => DayType::Saturday,
            Weekday::Sun => DayType::Sunday,
            _ => DayType::Weekday,
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use turncal_engine::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()), DayType::Saturday);
/// // 2026-01-18 is a Sunday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()), DayType::Sunday);
/// // 2026-01-12 is a Monday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    date.weekday().into()
}
