//! Core data models for the shift compensation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod compensation;
mod employee;
mod month;
mod shift;
mod time_of_day;

pub use compensation::{EmployeeHours, HourBucket, MonthTotals, ShiftPay};
pub use employee::{DEFAULT_WAGE_LEVEL, Employee};
pub use month::YearMonth;
pub use shift::{Shift, ShiftEntry};
pub use time_of_day::{format_time_of_day, parse_time_of_day};

pub(crate) use time_of_day::hh_mm;
