//! Calculation logic for the shift compensation engine.
//!
//! This module contains the pure pricing functions: day detection, base rate
//! lookup, premium multiplier lookup, hour-bucket shift pricing and
//! calendar-month aggregation.

mod base_rate;
mod day_detection;
mod month_totals;
mod premium;
mod shift_pay;

pub use base_rate::{BaseRateLookupResult, RateSource, get_base_rate};
pub use day_detection::{DayType, get_day_type};
pub use month_totals::calculate_month_totals;
pub use premium::get_premium_multiplier;
pub use shift_pay::calculate_shift_pay;
