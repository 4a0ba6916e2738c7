//! Calendar month model.
//!
//! [`YearMonth`] is the aggregation period key. It matches dates by year and
//! month fields rather than by comparing formatted text.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month, written `YYYY-MM`.
///
/// # Example
///
/// ```
/// use turncal_engine::models::YearMonth;
/// use chrono::NaiveDate;
///
/// let month: YearMonth = "2026-01".parse().unwrap();
/// assert!(month.contains_date(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()));
/// assert!(!month.contains_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
/// assert_eq!(month.to_string(), "2026-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a month, or `None` when `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time.
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number, 1 through 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Checks whether `date` falls in this calendar month.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidMonth {
            input: s.to_string(),
        };

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_month() {
        let month: YearMonth = "2026-03".parse().unwrap();
        assert_eq!(month.year(), 2026);
        assert_eq!(month.month(), 3);
    }

    #[test]
    fn test_parse_rejects_bad_keys() {
        for input in ["2026-13", "2026-00", "2026-1", "26-01", "2026/01", "2026-01-15", ""] {
            assert!(
                matches!(input.parse::<YearMonth>(), Err(EngineError::InvalidMonth { .. })),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        for input in [" 2026-01 ", " 2026-01", "2026-01\n"] {
            assert!(input.parse::<YearMonth>().is_err(), "{:?} should be rejected", input);
        }
    }

    #[test]
    fn test_contains_first_and_last_day() {
        let month = YearMonth::new(2024, 2).unwrap();
        assert!(month.contains_date(date(2024, 2, 1)));
        assert!(month.contains_date(date(2024, 2, 29)));
        assert!(!month.contains_date(date(2024, 3, 1)));
        assert!(!month.contains_date(date(2024, 1, 31)));
    }

    #[test]
    fn test_same_month_other_year_excluded() {
        let month = YearMonth::new(2026, 1).unwrap();
        assert!(!month.contains_date(date(2025, 1, 15)));
    }

    #[test]
    fn test_of_date() {
        assert_eq!(YearMonth::of(date(2026, 11, 30)), YearMonth::new(2026, 11).unwrap());
    }

    #[test]
    fn test_serializes_as_string() {
        let month = YearMonth::new(2026, 7).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2026-07\"");
        let parsed: YearMonth = serde_json::from_str("\"2026-07\"").unwrap();
        assert_eq!(parsed, month);
    }
}
