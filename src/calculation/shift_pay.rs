//! Hour-bucket shift pricing.
//!
//! A shift is walked from its start time in one-hour steps. Each step is
//! billed as a full hour at the premium in force at the step's start, so a
//! trailing partial hour is billed in full and a step that straddles a band
//! boundary is billed entirely at the earlier band. Worked hours are plain
//! end minus start.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::config::PremiumSchedule;
use crate::error::EngineResult;
use crate::models::{HourBucket, Shift, ShiftPay};

use super::{get_day_type, get_premium_multiplier};

/// Prices a shift at the given base hourly rate.
///
/// # Errors
///
/// Returns `InvalidShiftInterval` if the shift's start is not before its end.
///
/// # Examples
///
/// ```
/// use turncal_engine::calculation::calculate_shift_pay;
/// use turncal_engine::config::PremiumSchedule;
/// use turncal_engine::models::Shift;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// // Monday 15:00-17:00 at 150/h: 15:00 x1.00 + 16:00 x1.25
/// let shift = Shift {
///     id: 1,
///     employee_name: "Alice".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     start_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
/// };
///
/// let pay = calculate_shift_pay(&shift, Decimal::new(150, 0), &PremiumSchedule::standard()).unwrap();
/// assert_eq!(pay.salary, Decimal::new(3375, 1));
/// assert_eq!(pay.hours_worked, Decimal::new(2, 0));
/// ```
pub fn calculate_shift_pay(
    shift: &Shift,
    base_rate: Decimal,
    schedule: &PremiumSchedule,
) -> EngineResult<ShiftPay> {
    shift.validate()?;

    let weekday = shift.day_of_week();
    let day_type = get_day_type(shift.date);
    let mut buckets = Vec::new();
    let mut cursor = shift.start_time;

    while cursor < shift.end_time {
        let multiplier = get_premium_multiplier(cursor, weekday, schedule);
        buckets.push(HourBucket {
            start: cursor,
            multiplier,
            amount: base_rate * multiplier,
        });

        let (next, wrapped_seconds) = cursor.overflowing_add_signed(Duration::hours(1));
        if wrapped_seconds != 0 {
            break;
        }
        cursor = next;
    }

    let salary: Decimal = buckets.iter().map(|b| b.amount).sum();
    let hours_worked = shift.worked_hours();

    tracing::debug!(
        shift_id = shift.id,
        employee = %shift.employee_name,
        date = %shift.date,
        day_type = %day_type,
        buckets = buckets.len(),
        hours_worked = %hours_worked,
        salary = %salary,
        "Priced shift"
    );

    Ok(ShiftPay {
        hours_worked,
        salary,
        base_rate,
        buckets,
    })
}
