//! Calendar-month aggregation.
//!
//! Sums shift pay over the shifts of one calendar month, optionally limited
//! to a single employee.

use crate::config::PayConfig;
use crate::error::EngineResult;
use crate::models::{Employee, MonthTotals, Shift, YearMonth};

use super::{calculate_shift_pay, get_base_rate};

/// Computes total hours and salary for a month.
///
/// Each item pairs a shift with its already-resolved employee. Shifts outside
/// `month`, or belonging to someone other than `employee_filter` when one is
/// given, do not contribute. An empty selection yields zero totals.
///
/// # Errors
///
/// Returns `InvalidShiftInterval` if a selected shift has `start >= end`.
///
/// # Examples
///
/// ```
/// use turncal_engine::calculation::calculate_month_totals;
/// use turncal_engine::config::PayConfig;
/// use turncal_engine::models::{Employee, Shift, YearMonth};
/// use rust_decimal::Decimal;
///
/// let no_shifts: Vec<(&Shift, &Employee)> = vec![];
/// let month: YearMonth = "2026-01".parse().unwrap();
/// let totals = calculate_month_totals(no_shifts, month, None, &PayConfig::standard()).unwrap();
/// assert_eq!(totals.total_hours, Decimal::ZERO);
/// assert_eq!(totals.total_salary, Decimal::ZERO);
/// ```
pub fn calculate_month_totals<'a, I>(
    assignments: I,
    month: YearMonth,
    employee_filter: Option<&str>,
    config: &PayConfig,
) -> EngineResult<MonthTotals>
where
    I: IntoIterator<Item = (&'a Shift, &'a Employee)>,
{
    let mut totals = MonthTotals::empty(month, employee_filter.map(str::to_string));

    let selected = assignments
        .into_iter()
        .filter(|(shift, _)| month.contains_date(shift.date))
        .filter(|(shift, _)| employee_filter.is_none_or(|name| shift.employee_name == name));

    for (shift, employee) in selected {
        let base_rate = get_base_rate(employee, config.wages()).rate;
        let pay = calculate_shift_pay(shift, base_rate, config.premiums())?;
        totals.add(&pay);
    }

    tracing::debug!(
        month = %month,
        employee = employee_filter.unwrap_or("*"),
        shifts = totals.shift_count,
        total_hours = %totals.total_hours,
        total_salary = %totals.total_salary,
        "Aggregated month totals"
    );

    Ok(totals)
}
