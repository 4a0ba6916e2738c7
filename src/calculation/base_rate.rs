//! Base rate lookup functionality.
//!
//! This module resolves an employee's base hourly rate from the wage table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::WageTable;
use crate::models::Employee;

/// Where a base rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// The wage level has its own entry in the table.
    WageLevel,
    /// The wage level is not in the table; the fallback rate was used.
    Fallback,
}

/// The result of a base rate lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseRateLookupResult {
    /// The determined base hourly rate.
    pub rate: Decimal,
    /// Whether the rate came from the level's entry or the fallback.
    pub source: RateSource,
}

/// Determines an employee's base hourly rate.
///
/// An unrecognized wage level is not an error; it resolves to the table's
/// fallback rate.
///
/// # Examples
///
/// ```
/// use turncal_engine::calculation::{get_base_rate, RateSource};
/// use turncal_engine::config::WageTable;
/// use turncal_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let wages = WageTable::standard();
/// let employee = Employee::new("Carol", 3).unwrap();
/// let result = get_base_rate(&employee, &wages);
/// assert_eq!(result.rate, Decimal::new(200, 0));
/// assert_eq!(result.source, RateSource::WageLevel);
/// ```
pub fn get_base_rate(employee: &Employee, wages: &WageTable) -> BaseRateLookupResult {
    let rate = wages.base_rate(employee.wage_level);

    let source = if wages.has_level(employee.wage_level) {
        RateSource::WageLevel
    } else {
        tracing::debug!(
            employee = %employee.name,
            wage_level = employee.wage_level,
            fallback_rate = %rate,
            "Unknown wage level, using fallback rate"
        );
        RateSource::Fallback
    };

    BaseRateLookupResult { rate, source }
}
