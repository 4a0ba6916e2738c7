//! Configuration types for shift pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the built-in
//! standard tables.

use std::collections::BTreeMap;

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DayType;
use crate::error::{EngineError, EngineResult};
use crate::models::hh_mm;

/// Maps wage levels to base hourly rates.
///
/// Levels missing from `levels` resolve to `fallback_rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageTable {
    /// Rate used for any level not listed in `levels`.
    pub fallback_rate: Decimal,
    /// Base hourly rate per wage level.
    pub levels: BTreeMap<u32, Decimal>,
}

impl WageTable {
    /// Returns the base hourly rate for a wage level.
    ///
    /// Never fails: unknown levels get the fallback rate.
    ///
    /// # Example
    ///
    /// ```
    /// use turncal_engine::config::WageTable;
    /// use rust_decimal::Decimal;
    ///
    /// let table = WageTable::standard();
    /// assert_eq!(table.base_rate(2), Decimal::new(175, 0));
    /// assert_eq!(table.base_rate(9), Decimal::new(150, 0));
    /// ```
    pub fn base_rate(&self, wage_level: u32) -> Decimal {
        self.levels
            .get(&wage_level)
            .copied()
            .unwrap_or(self.fallback_rate)
    }

    /// Returns true if the level has its own entry in the table.
    pub fn has_level(&self, wage_level: u32) -> bool {
        self.levels.contains_key(&wage_level)
    }

    /// The standard table: levels 1, 2, 3 at 150, 175, 200 with a 150 fallback.
    pub fn standard() -> Self {
        Self {
            fallback_rate: Decimal::new(150, 0),
            levels: BTreeMap::from([
                (1, Decimal::new(150, 0)),
                (2, Decimal::new(175, 0)),
                (3, Decimal::new(200, 0)),
            ]),
        }
    }

    fn validate(&self) -> EngineResult<()> {
        if self.fallback_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: format!("fallback_rate must be positive, got {}", self.fallback_rate),
            });
        }
        for (level, rate) in &self.levels {
            if *rate <= Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    message: format!("rate for wage level {} must be positive, got {}", level, rate),
                });
            }
        }
        Ok(())
    }
}

/// A premium that applies from a time-of-day until the next band of the same day kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBand {
    /// Time-of-day at which the band starts.
    #[serde(with = "hh_mm")]
    pub from: NaiveTime,
    /// Multiplier applied to the base rate.
    pub multiplier: Decimal,
}

impl PremiumBand {
    fn new(hour: u32, multiplier: Decimal) -> Self {
        Self {
            from: NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN),
            multiplier,
        }
    }
}

/// Day-of-week and time-of-day pay premiums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumSchedule {
    /// Multiplier before the first band of a day kind.
    pub base_multiplier: Decimal,
    /// Bands for Monday through Friday.
    #[serde(default)]
    pub weekday: Vec<PremiumBand>,
    /// Bands for Saturday.
    #[serde(default)]
    pub saturday: Vec<PremiumBand>,
    /// Bands for Sunday.
    #[serde(default)]
    pub sunday: Vec<PremiumBand>,
}

impl PremiumSchedule {
    /// Returns the bands configured for a day kind, in file order.
    pub fn bands(&self, day_type: DayType) -> &[PremiumBand] {
        match day_type {
            DayType::Weekday => &self.weekday,
            DayType::Saturday => &self.saturday,
            DayType::Sunday => &self.sunday,
        }
    }

    /// The standard schedule.
    ///
    /// | Day | From | Multiplier |
    /// |---|---|---|
    /// | Mon-Fri | 16:00 / 18:00 / 20:00 | 1.25 / 1.50 / 2.00 |
    /// | Saturday | 16:00 / 18:00 | 1.50 / 2.00 |
    /// | Sunday | 00:00 | 2.00 |
    pub fn standard() -> Self {
        Self {
            base_multiplier: Decimal::new(100, 2),
            weekday: vec![
                PremiumBand::new(16, Decimal::new(125, 2)),
                PremiumBand::new(18, Decimal::new(150, 2)),
                PremiumBand::new(20, Decimal::new(200, 2)),
            ],
            saturday: vec![
                PremiumBand::new(16, Decimal::new(150, 2)),
                PremiumBand::new(18, Decimal::new(200, 2)),
            ],
            sunday: vec![PremiumBand::new(0, Decimal::new(200, 2))],
        }
    }

    fn validate(&self) -> EngineResult<()> {
        if self.base_multiplier <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "base_multiplier must be positive, got {}",
                    self.base_multiplier
                ),
            });
        }
        for day_type in [DayType::Weekday, DayType::Saturday, DayType::Sunday] {
            if let Some(band) = self
                .bands(day_type)
                .iter()
                .find(|b| b.multiplier <= Decimal::ZERO)
            {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "{} band from {} must have a positive multiplier, got {}",
                        day_type, band.from, band.multiplier
                    ),
                });
            }

            let mut starts: Vec<NaiveTime> = self.bands(day_type).iter().map(|b| b.from).collect();
            starts.sort_unstable();
            if let Some(pair) = starts.windows(2).find(|pair| pair[0] == pair[1]) {
                return Err(EngineError::InvalidConfig {
                    message: format!("{} has more than one band from {}", day_type, pair[0]),
                });
            }
        }
        Ok(())
    }
}

/// The complete pricing configuration: wage table plus premium schedule.
///
/// Only constructed through [`PayConfig::new`] (which deserialization also
/// goes through) or [`PayConfig::standard`], so every instance holds positive
/// rates and multipliers. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PayConfigParts")]
pub struct PayConfig {
    wages: WageTable,
    premiums: PremiumSchedule,
}

#[derive(Deserialize)]
struct PayConfigParts {
    wages: WageTable,
    premiums: PremiumSchedule,
}

impl TryFrom<PayConfigParts> for PayConfig {
    type Error = EngineError;

    fn try_from(parts: PayConfigParts) -> EngineResult<Self> {
        Self::new(parts.wages, parts.premiums)
    }
}

impl PayConfig {
    /// Creates a configuration after validating both tables.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if any rate or multiplier is not positive, or
    /// if a day kind lists two bands starting at the same time.
    pub fn new(wages: WageTable, premiums: PremiumSchedule) -> EngineResult<Self> {
        wages.validate()?;
        premiums.validate()?;
        Ok(Self { wages, premiums })
    }

    /// Base hourly rates by wage level.
    pub fn wages(&self) -> &WageTable {
        &self.wages
    }

    /// Premium multipliers by day and time.
    pub fn premiums(&self) -> &PremiumSchedule {
        &self.premiums
    }

    /// The standard wage table and premium schedule.
    pub fn standard() -> Self {
        Self {
            wages: WageTable::standard(),
            premiums: PremiumSchedule::standard(),
        }
    }
}

impl Default for PayConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_standard_wage_levels() {
        let table = WageTable::standard();
        assert_eq!(table.base_rate(1), dec("150.0"));
        assert_eq!(table.base_rate(2), dec("175.0"));
        assert_eq!(table.base_rate(3), dec("200.0"));
    }

    #[test]
    fn test_unknown_levels_use_fallback() {
        let table = WageTable::standard();
        assert_eq!(table.base_rate(0), dec("150.0"));
        assert_eq!(table.base_rate(4), dec("150.0"));
        assert_eq!(table.base_rate(u32::MAX), dec("150.0"));
        assert!(!table.has_level(4));
    }

    #[test]
    fn test_standard_config_is_valid() {
        let standard = PayConfig::standard();
        let rebuilt =
            PayConfig::new(standard.wages().clone(), standard.premiums().clone()).unwrap();
        assert_eq!(rebuilt, standard);
        assert_eq!(PayConfig::default(), standard);
    }

    #[test]
    fn test_zero_rate_rejected() {
        let mut wages = WageTable::standard();
        wages.levels.insert(4, Decimal::ZERO);
        let result = PayConfig::new(wages, PremiumSchedule::standard());
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let mut premiums = PremiumSchedule::standard();
        premiums.saturday.push(PremiumBand {
            from: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            multiplier: dec("-1"),
        });
        match PayConfig::new(WageTable::standard(), premiums) {
            Err(EngineError::InvalidConfig { message }) => {
                assert!(message.contains("Saturday"), "unexpected message: {}", message);
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_band_start_rejected() {
        let mut premiums = PremiumSchedule::standard();
        premiums.weekday.push(PremiumBand {
            from: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            multiplier: dec("3.00"),
        });
        match PayConfig::new(WageTable::standard(), premiums) {
            Err(EngineError::InvalidConfig { message }) => {
                assert!(message.contains("18:00"), "unexpected message: {}", message);
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_same_start_on_different_days_allowed() {
        // Weekday and Saturday both start a band at 16:00.
        assert!(PayConfig::new(WageTable::standard(), PremiumSchedule::standard()).is_ok());
    }

    #[test]
    fn test_deserialization_validates() {
        let json = serde_json::json!({
            "wages": { "fallback_rate": "150", "levels": { "1": "150" } },
            "premiums": {
                "base_multiplier": "1.00",
                "weekday": [{ "from": "16:00", "multiplier": "-5" }]
            }
        });
        let result = serde_json::from_value::<PayConfig>(json);
        let error = result.unwrap_err().to_string();
        assert!(error.contains("positive multiplier"), "unexpected error: {}", error);
    }

    #[test]
    fn test_serialization_round_trips_through_validation() {
        let json = serde_json::to_value(PayConfig::standard()).unwrap();
        let config: PayConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config, PayConfig::standard());
    }

    #[test]
    fn test_deserialize_premium_schedule() {
        let yaml = r#"
base_multiplier: "1.00"
saturday:
  - { from: "18:00", multiplier: "2.00" }
  - { from: "16:00", multiplier: "1.50" }
"#;
        let schedule: PremiumSchedule = serde_yaml::from_str(yaml).unwrap();
        assert!(schedule.weekday.is_empty());
        assert_eq!(schedule.bands(DayType::Saturday).len(), 2);
        assert_eq!(
            schedule.saturday[1].from,
            NaiveTime::from_hms_opt(16, 0, 0).unwrap()
        );
    }
}
