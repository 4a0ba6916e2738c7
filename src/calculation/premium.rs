//! Premium multiplier lookup.
//!
//! A multiplier is looked up for a single instant: the start of the hour
//! bucket being priced, on the shift's day of the week.

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;

use crate::config::PremiumSchedule;

use super::DayType;

/// Returns the premium multiplier in force at `time` on `weekday`.
///
/// The latest band of the day kind starting at or before `time` wins; before
/// the first band the schedule's base multiplier applies.
///
/// # Examples
///
/// ```
/// use turncal_engine::calculation::get_premium_multiplier;
/// use turncal_engine::config::PremiumSchedule;
/// use chrono::{NaiveTime, Weekday};
/// use rust_decimal::Decimal;
///
/// let schedule = PremiumSchedule::standard();
/// let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// assert_eq!(get_premium_multiplier(at(15, 59), Weekday::Mon, &schedule), Decimal::new(100, 2));
/// assert_eq!(get_premium_multiplier(at(16, 0), Weekday::Mon, &schedule), Decimal::new(125, 2));
/// assert_eq!(get_premium_multiplier(at(6, 0), Weekday::Sun, &schedule), Decimal::new(200, 2));
/// ```
pub fn get_premium_multiplier(
    time: NaiveTime,
    weekday: Weekday,
    schedule: &PremiumSchedule,
) -> Decimal {
    schedule
        .bands(DayType::from(weekday))
        .iter()
        .filter(|band| band.from <= time)
        .max_by_key(|band| band.from)
        .map(|band| band.multiplier)
        .unwrap_or(schedule.base_multiplier)
}
