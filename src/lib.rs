//! Shift compensation engine.
//!
//! This crate records work shifts per employee and prices them: each shift is
//! walked in one-hour buckets from its start, every bucket billed at the
//! employee's base rate times the time-of-day and day-of-week premium in
//! force at the bucket's start. Priced shifts are aggregated per calendar
//! month, optionally for a single employee.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod roster;
