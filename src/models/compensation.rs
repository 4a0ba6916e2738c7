//! Compensation result models.
//!
//! This module contains the outputs of pricing: [`ShiftPay`] for a single
//! shift with its [`HourBucket`] breakdown, [`MonthTotals`] for an aggregation
//! over a calendar month, and [`EmployeeHours`] for the per-employee summary.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::YearMonth;
use super::time_of_day::hh_mm;

/// One priced hour bucket of a shift.
///
/// Every bucket is billed as a full hour at the multiplier in force at its
/// start, even when the shift ends partway through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBucket {
    /// Time-of-day the bucket starts at.
    #[serde(with = "hh_mm")]
    pub start: NaiveTime,
    /// Premium multiplier looked up at `start`.
    pub multiplier: Decimal,
    /// Base rate times multiplier.
    pub amount: Decimal,
}

/// The result of pricing one shift.
///
/// # Example
///
/// ```
/// use turncal_engine::models::ShiftPay;
/// use rust_decimal::Decimal;
///
/// let pay = ShiftPay {
///     hours_worked: Decimal::new(15, 1),
///     salary: Decimal::new(350, 0),
///     base_rate: Decimal::new(175, 0),
///     buckets: vec![],
/// };
/// assert!(pay.salary > pay.base_rate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPay {
    /// End minus start in fractional hours.
    pub hours_worked: Decimal,
    /// Sum of all bucket amounts.
    pub salary: Decimal,
    /// The base hourly rate the shift was priced at.
    pub base_rate: Decimal,
    /// The buckets that were priced, in chronological order.
    pub buckets: Vec<HourBucket>,
}

/// Totals for a calendar month, optionally limited to one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotals {
    /// The month that was aggregated.
    pub month: YearMonth,
    /// The employee filter, if one was applied.
    pub employee: Option<String>,
    /// Sum of worked hours over the selected shifts.
    pub total_hours: Decimal,
    /// Sum of salaries over the selected shifts.
    pub total_salary: Decimal,
    /// Number of shifts that matched the selection.
    pub shift_count: usize,
}

impl MonthTotals {
    /// Totals with nothing accumulated yet.
    pub fn empty(month: YearMonth, employee: Option<String>) -> Self {
        Self {
            month,
            employee,
            total_hours: Decimal::ZERO,
            total_salary: Decimal::ZERO,
            shift_count: 0,
        }
    }

    /// Adds one priced shift to the running totals.
    pub fn add(&mut self, pay: &ShiftPay) {
        self.total_hours += pay.hours_worked;
        self.total_salary += pay.salary;
        self.shift_count += 1;
    }
}

/// Total unweighted hours recorded for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeHours {
    /// The employee's name.
    pub name: String,
    /// Sum of worked hours over all of the employee's shifts.
    pub total_hours: Decimal,
}
