//! Request types for the shift book API.
//!
//! Times arrive as text and are parsed here, at the boundary, so the roster
//! and the calculator only ever see validated `NaiveTime` values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{DEFAULT_WAGE_LEVEL, ShiftEntry, parse_time_of_day};

/// Request body for `POST /shifts` and `PUT /shifts/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Name of the employee who worked the shift.
    pub name: String,
    /// The date of the shift.
    pub date: NaiveDate,
    /// Start time as `H`, `HH`, `H:MM` or `HH:MM`.
    pub start_time: String,
    /// End time as `H`, `HH`, `H:MM` or `HH:MM`.
    pub end_time: String,
    /// Wage level used if the employee does not exist yet.
    #[serde(default = "default_wage_level")]
    pub wage_level: u32,
}

fn default_wage_level() -> u32 {
    DEFAULT_WAGE_LEVEL
}

impl TryFrom<ShiftRequest> for ShiftEntry {
    type Error = EngineError;

    fn try_from(req: ShiftRequest) -> Result<Self, Self::Error> {
        Ok(ShiftEntry {
            employee_name: req.name,
            date: req.date,
            start_time: parse_time_of_day(&req.start_time)?,
            end_time: parse_time_of_day(&req.end_time)?,
        })
    }
}

/// Query string for `GET /shifts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShiftsQuery {
    /// Only list shifts on this date.
    pub date: Option<NaiveDate>,
}

/// Query string for `GET /totals`.
///
/// The month is kept as text so a bad key maps to `INVALID_MONTH` rather
/// than a generic query rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TotalsQuery {
    /// Month key `YYYY-MM`; the current month when absent.
    pub month: Option<String>,
    /// Restrict totals to one employee.
    pub employee: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_deserialize_shift_request() {
        let json = r#"{
            "name": "Alice",
            "date": "2026-01-12",
            "start_time": "15",
            "end_time": "17:00",
            "wage_level": 2
        }"#;

        let request: ShiftRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Alice");
        assert_eq!(request.wage_level, 2);
    }

    #[test]
    fn test_wage_level_defaults_to_one() {
        let json = r#"{
            "name": "Bob",
            "date": "2026-01-12",
            "start_time": "09:00",
            "end_time": "10:00"
        }"#;

        let request: ShiftRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.wage_level, 1);
    }

    #[test]
    fn test_conversion_parses_times() {
        let request = ShiftRequest {
            name: "Alice".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
            start_time: "17:30".to_string(),
            end_time: "19".to_string(),
            wage_level: 1,
        };

        let entry = ShiftEntry::try_from(request).unwrap();
        assert_eq!(entry.start_time, NaiveTime::from_hms_opt(17, 30, 0).unwrap());
        assert_eq!(entry.end_time, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
    }

    #[test]
    fn test_conversion_rejects_bad_time() {
        let request = ShiftRequest {
            name: "Alice".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
            start_time: "25:00".to_string(),
            end_time: "19".to_string(),
            wage_level: 1,
        };

        match ShiftEntry::try_from(request) {
            Err(EngineError::InvalidTime { input }) => assert_eq!(input, "25:00"),
            other => panic!("Expected InvalidTime, got {:?}", other),
        }
    }
}
