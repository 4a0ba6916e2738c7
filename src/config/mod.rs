//! Configuration loading and management for the shift compensation engine.
//!
//! This module provides the wage table and premium schedule, either built in
//! ([`PayConfig::standard`]) or loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use turncal_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Fallback rate: {}", config.config().wages().fallback_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayConfig, PremiumBand, PremiumSchedule, WageTable};
