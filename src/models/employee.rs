//! Employee model.
//!
//! This module defines the Employee struct representing a worker registered
//! with the payroll registry, together with their accumulated work history
//! and currently assigned pay-calculation strategy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::PayStrategy;
use crate::models::WorkRecord;

/// A worker registered with the payroll registry.
///
/// The surname is the employee's identity: the registry enforces that no two
/// employees share a case-insensitively equal surname.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's surname, unique across the registry (case-insensitive).
    pub surname: String,
    /// The ordered history of work this employee has performed.
    #[serde(default)]
    pub works: Vec<WorkRecord>,
    /// The strategy currently used to compute this employee's pay.
    #[serde(default)]
    pub strategy: PayStrategy,
}

impl Employee {
    /// Creates a new employee with an empty work history and the default
    /// [`PayStrategy::Standard`] strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_registry::calculation::PayStrategy;
    /// use payroll_registry::models::Employee;
    ///
    /// let employee = Employee::new("Smith");
    /// assert!(employee.works.is_empty());
    /// assert_eq!(employee.strategy, PayStrategy::Standard);
    /// ```
    pub fn new(surname: impl Into<String>) -> Self {
        Self {
            surname: surname.into(),
            works: Vec::new(),
            strategy: PayStrategy::default(),
        }
    }

    /// Appends a work record to this employee's history.
    pub fn add_work(&mut self, work: WorkRecord) {
        self.works.push(work);
    }

    /// Computes this employee's total pay under their current strategy.
    pub fn total_pay(&self) -> Decimal {
        self.strategy.calculate(&self.works)
    }
}
