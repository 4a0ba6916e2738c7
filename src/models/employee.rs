//! Employee model.
//!
//! An employee is identified by a case-sensitive name and carries the wage
//! level that selects its base hourly rate from the wage table.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Wage level given to employees created without an explicit level.
pub const DEFAULT_WAGE_LEVEL: u32 = 1;

/// Represents an employee whose shifts are priced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique, case-sensitive name. Used as the join key for shifts.
    pub name: String,
    /// Tier selecting the base hourly rate.
    pub wage_level: u32,
}

impl Employee {
    /// Creates an employee after trimming and validating the name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` if the trimmed name is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use turncal_engine::models::Employee;
    ///
    /// let employee = Employee::new("  Alice ", 2).unwrap();
    /// assert_eq!(employee.name, "Alice");
    /// assert!(Employee::new("   ", 1).is_err());
    /// ```
    pub fn new(name: &str, wage_level: u32) -> EngineResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            wage_level,
        })
    }
}
