//! The pay engine: shift pricing and month aggregation over an injected
//! [`PayConfig`].

use std::sync::Arc;

use crate::calculation::{calculate_month_totals, calculate_shift_pay, get_base_rate};
use crate::config::PayConfig;
use crate::error::EngineResult;
use crate::models::{Employee, MonthTotals, Shift, ShiftPay, YearMonth};

/// Prices shifts against one immutable wage table and premium schedule.
///
/// Cloning is cheap; clones share the same configuration.
///
/// # Example
///
/// ```
/// use turncal_engine::config::PayConfig;
/// use turncal_engine::engine::PayEngine;
/// use turncal_engine::models::{Employee, Shift};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let engine = PayEngine::new(PayConfig::standard());
/// let carol = Employee::new("Carol", 3).unwrap();
/// let shift = Shift {
///     id: 1,
///     employee_name: "Carol".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(), // Saturday
///     start_time: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
/// };
///
/// let pay = engine.price(&shift, &carol).unwrap();
/// assert_eq!(pay.salary, Decimal::new(700, 0));
/// ```
#[derive(Debug, Clone)]
pub struct PayEngine {
    config: Arc<PayConfig>,
}

impl PayEngine {
    /// Creates an engine over the given configuration.
    ///
    /// A [`PayConfig`] can only exist once its rates and multipliers have been
    /// validated, so the engine never prices with a non-positive factor.
    pub fn new(config: PayConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration this engine prices with.
    pub fn config(&self) -> &PayConfig {
        &self.config
    }

    /// Prices one shift for its resolved employee.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShiftInterval` if the shift's start is not before its end.
    pub fn price(&self, shift: &Shift, employee: &Employee) -> EngineResult<ShiftPay> {
        let base_rate = get_base_rate(employee, self.config.wages()).rate;
        calculate_shift_pay(shift, base_rate, self.config.premiums())
    }

    /// Totals hours and salary for a calendar month, optionally for one employee.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShiftInterval` if a selected shift is malformed.
    pub fn month_totals<'a, I>(
        &self,
        assignments: I,
        month: YearMonth,
        employee_filter: Option<&str>,
    ) -> EngineResult<MonthTotals>
    where
        I: IntoIterator<Item = (&'a Shift, &'a Employee)>,
    {
        calculate_month_totals(assignments, month, employee_filter, &self.config)
    }
}

impl Default for PayEngine {
    fn default() -> Self {
        Self::new(PayConfig::standard())
    }
}
