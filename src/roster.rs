//! In-memory shift book.
//!
//! The roster owns employees and their recorded shifts. Employees are created
//! implicitly when a shift names someone new and are never removed; a known
//! employee keeps the wage level it was created with.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeHours, Shift, ShiftEntry};

/// Employees and shifts, keyed by name and by id.
#[derive(Debug, Clone)]
pub struct Roster {
    employees: BTreeMap<String, Employee>,
    shifts: BTreeMap<u64, Shift>,
    next_id: u64,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Creates an empty roster. The first saved shift gets id 1.
    pub fn new() -> Self {
        Self {
            employees: BTreeMap::new(),
            shifts: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Returns the employee with this name, creating it if needed.
    ///
    /// An existing employee is returned unchanged; `wage_level` only applies
    /// on creation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` if the trimmed name is empty.
    pub fn upsert_employee(&mut self, name: &str, wage_level: u32) -> EngineResult<Employee> {
        let candidate = Employee::new(name, wage_level)?;
        if let Some(existing) = self.employees.get(&candidate.name) {
            return Ok(existing.clone());
        }

        info!(
            employee = %candidate.name,
            wage_level = candidate.wage_level,
            "Created employee"
        );
        self.employees
            .insert(candidate.name.clone(), candidate.clone());
        Ok(candidate)
    }

    /// Records a new shift and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShiftInterval` for `start >= end` and `InvalidEmployee`
    /// for a blank name. Nothing is recorded on error.
    pub fn save_shift(&mut self, entry: ShiftEntry, wage_level: u32) -> EngineResult<Shift> {
        let entry = self.admit(entry, wage_level)?;

        let id = self.next_id;
        self.next_id += 1;
        let shift = Shift::from_entry(id, entry);

        info!(
            shift_id = id,
            employee = %shift.employee_name,
            date = %shift.date,
            "Saved shift"
        );
        self.shifts.insert(id, shift.clone());
        Ok(shift)
    }

    /// Replaces every field of shift `id` except the id itself.
    ///
    /// # Errors
    ///
    /// Returns `ShiftNotFound` for an unknown id, otherwise the same errors as
    /// [`Roster::save_shift`]. The stored shift is untouched on error.
    pub fn edit_shift(
        &mut self,
        id: u64,
        entry: ShiftEntry,
        wage_level: u32,
    ) -> EngineResult<Shift> {
        if !self.shifts.contains_key(&id) {
            return Err(EngineError::ShiftNotFound { id });
        }
        let entry = self.admit(entry, wage_level)?;

        let shift = Shift::from_entry(id, entry);
        info!(shift_id = id, employee = %shift.employee_name, "Edited shift");
        self.shifts.insert(id, shift.clone());
        Ok(shift)
    }

    /// Removes shift `id` and returns it. Its employee is kept.
    ///
    /// # Errors
    ///
    /// Returns `ShiftNotFound` for an unknown id.
    pub fn delete_shift(&mut self, id: u64) -> EngineResult<Shift> {
        let shift = self
            .shifts
            .remove(&id)
            .ok_or(EngineError::ShiftNotFound { id })?;
        info!(shift_id = id, "Deleted shift");
        Ok(shift)
    }

    /// Looks up one shift.
    ///
    /// # Errors
    ///
    /// Returns `ShiftNotFound` for an unknown id.
    pub fn shift(&self, id: u64) -> EngineResult<&Shift> {
        self.shifts.get(&id).ok_or(EngineError::ShiftNotFound { id })
    }

    /// All shifts, ordered by id.
    pub fn shifts(&self) -> impl Iterator<Item = &Shift> {
        self.shifts.values()
    }

    /// Shifts recorded for one date, ordered by id.
    pub fn shifts_on(&self, date: NaiveDate) -> impl Iterator<Item = &Shift> {
        self.shifts.values().filter(move |s| s.date == date)
    }

    /// Looks up one employee by exact name.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if nobody has that name.
    pub fn employee(&self, name: &str) -> EngineResult<&Employee> {
        self.employees
            .get(name)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                name: name.to_string(),
            })
    }

    /// All employees, ordered by name.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Every shift paired with the employee it belongs to.
    pub fn assignments(&self) -> impl Iterator<Item = (&Shift, &Employee)> {
        // Every shift's employee is upserted before the shift is stored.
        self.shifts
            .values()
            .filter_map(|s| self.employees.get(&s.employee_name).map(|e| (s, e)))
    }

    /// Unweighted hours per employee across all shifts, ordered by name.
    ///
    /// Employees without shifts are listed with zero hours.
    pub fn hours_by_employee(&self) -> Vec<EmployeeHours> {
        let mut totals: BTreeMap<&str, Decimal> = self
            .employees
            .keys()
            .map(|name| (name.as_str(), Decimal::ZERO))
            .collect();

        for shift in self.shifts.values() {
            *totals.entry(shift.employee_name.as_str()).or_default() += shift.worked_hours();
        }

        totals
            .into_iter()
            .map(|(name, total_hours)| EmployeeHours {
                name: name.to_string(),
                total_hours,
            })
            .collect()
    }

    /// Number of recorded shifts.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Whether no shifts are recorded.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    fn admit(&mut self, mut entry: ShiftEntry, wage_level: u32) -> EngineResult<ShiftEntry> {
        entry.validate()?;
        let employee = self.upsert_employee(&entry.employee_name, wage_level)?;
        entry.employee_name = employee.name;
        Ok(entry)
    }
}
