//! The in-memory payroll registry.
//!
//! This module defines [`PayrollRegistry`], the store of all employees and
//! work types for the running process, together with every operation exposed
//! to the presentation layer: registration, deletion, work recording,
//! strategy selection, and pay reporting.
//!
//! The registry is an explicit caller-owned value rather than a process-wide
//! global, so tests (and any embedding application) can hold as many
//! independent instances as they need. It is single-threaded by design;
//! callers that share one across threads must wrap it in their own
//! mutual-exclusion boundary (see [`crate::api::AppState`]).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::PayStrategy;
use crate::error::{RegistryError, RegistryResult};
use crate::models::{Employee, WorkRecord, WorkType};

/// Placeholder shown when the work type catalog is empty.
pub const NO_WORK_TYPES_MESSAGE: &str = "No work types registered";

/// Placeholder shown when no employees are registered.
pub const NO_EMPLOYEES_MESSAGE: &str = "No employees registered";

/// The result of computing one employee's pay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayComputation {
    /// The total pay amount under the employee's current strategy.
    pub amount: Decimal,
    /// The display name of the strategy that produced the amount.
    pub strategy_name: &'static str,
}

/// The in-memory store of employees and work types.
///
/// All mutation goes through the operations below, which enforce the
/// registry's uniqueness invariants: no two employees with case-insensitively
/// equal surnames, no two work types with case-insensitively equal names.
/// A failed operation never mutates the registry.
///
/// Lookups are linear scans with case-insensitive comparison; at the scale of
/// a single business's staff and work catalog this is a deliberate
/// simplicity trade-off.
///
/// # Examples
///
/// ```
/// use payroll_registry::registry::PayrollRegistry;
/// use rust_decimal::Decimal;
///
/// let mut registry = PayrollRegistry::new();
/// registry.add_work_type("Assembly", Decimal::from(50)).unwrap();
/// registry.add_employee("Smith").unwrap();
/// registry.record_work("Smith", "Assembly").unwrap();
///
/// let pay = registry.compute_employee_pay("Smith").unwrap();
/// assert_eq!(pay.amount, Decimal::from(50));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayrollRegistry {
    employees: Vec<Employee>,
    work_types: Vec<WorkType>,
}

impl PayrollRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn find_employee(&self, surname: &str) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|e| eq_ignore_case(&e.surname, surname))
    }

    fn find_employee_mut(&mut self, surname: &str) -> Option<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|e| eq_ignore_case(&e.surname, surname))
    }

    fn find_work_type(&self, name: &str) -> Option<&WorkType> {
        self.work_types
            .iter()
            .find(|w| eq_ignore_case(&w.name, name))
    }

    /// Registers a new employee.
    ///
    /// The employee starts with an empty work history and the default
    /// [`PayStrategy::Standard`] strategy. The surname keeps its original
    /// casing for display; uniqueness is checked case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `EmptyName` if the surname is blank, or `DuplicateEmployee`
    /// if an employee with the same case-insensitive surname already exists.
    pub fn add_employee(&mut self, surname: &str) -> RegistryResult<()> {
        let surname = surname.trim();
        if surname.is_empty() {
            return Err(RegistryError::EmptyName {
                field: "Surname".to_string(),
            });
        }
        if self.find_employee(surname).is_some() {
            return Err(RegistryError::DuplicateEmployee {
                surname: surname.to_string(),
            });
        }

        self.employees.push(Employee::new(surname));
        Ok(())
    }

    /// Removes the employee with the matching surname.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if no employee matches.
    pub fn delete_employee(&mut self, surname: &str) -> RegistryResult<()> {
        let position = self
            .employees
            .iter()
            .position(|e| eq_ignore_case(&e.surname, surname))
            .ok_or_else(|| RegistryError::EmployeeNotFound {
                surname: surname.to_string(),
            })?;

        self.employees.remove(position);
        Ok(())
    }

    /// Adds a new work type to the catalog.
    ///
    /// # Errors
    ///
    /// Returns `EmptyName` if the name is blank, `NegativePay` if the pay
    /// amount is negative, or `DuplicateWorkType` if a work type with the
    /// same case-insensitive name already exists.
    pub fn add_work_type(&mut self, name: &str, pay: Decimal) -> RegistryResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName {
                field: "Work type name".to_string(),
            });
        }
        if pay.is_sign_negative() {
            return Err(RegistryError::NegativePay { pay });
        }
        if self.find_work_type(name).is_some() {
            return Err(RegistryError::DuplicateWorkType {
                name: name.to_string(),
            });
        }

        self.work_types.push(WorkType::new(name, pay));
        Ok(())
    }

    /// Records that an employee performed a work type.
    ///
    /// Appends a value copy of the matched work type to the employee's
    /// history; later catalog changes never alter what was recorded.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` or `WorkTypeNotFound` if either side of
    /// the match fails (both lookups are case-insensitive).
    pub fn record_work(&mut self, surname: &str, work_type_name: &str) -> RegistryResult<()> {
        let record: WorkRecord = self
            .find_work_type(work_type_name)
            .ok_or_else(|| RegistryError::WorkTypeNotFound {
                name: work_type_name.to_string(),
            })?
            .into();

        let employee =
            self.find_employee_mut(surname)
                .ok_or_else(|| RegistryError::EmployeeNotFound {
                    surname: surname.to_string(),
                })?;

        employee.add_work(record);
        Ok(())
    }

    /// Computes an employee's total pay under their current strategy.
    ///
    /// Also returns the strategy's display name so callers can render how
    /// the amount was produced. The result is never cached: strategy
    /// switches take effect on the next computation.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if no employee matches.
    pub fn compute_employee_pay(&self, surname: &str) -> RegistryResult<PayComputation> {
        let employee =
            self.find_employee(surname)
                .ok_or_else(|| RegistryError::EmployeeNotFound {
                    surname: surname.to_string(),
                })?;

        Ok(PayComputation {
            amount: employee.total_pay(),
            strategy_name: employee.strategy.display_name(),
        })
    }

    /// Replaces an employee's pay-calculation strategy.
    ///
    /// The selector is the closed enumeration {1 = Standard, 2 = Premium,
    /// 3 = FixedBonus}. Re-selecting the current kind is valid and a no-op
    /// in effect; strategies carry no per-employee state.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if no employee matches, or
    /// `InvalidStrategySelector` for selectors outside {1, 2, 3}. On error
    /// the employee's existing strategy is left unchanged.
    pub fn set_employee_strategy(&mut self, surname: &str, selector: u8) -> RegistryResult<()> {
        let strategy = PayStrategy::from_selector(selector)
            .ok_or(RegistryError::InvalidStrategySelector { selector })?;

        let employee =
            self.find_employee_mut(surname)
                .ok_or_else(|| RegistryError::EmployeeNotFound {
                    surname: surname.to_string(),
                })?;

        employee.strategy = strategy;
        Ok(())
    }

    /// Sums the computed pay of every registered employee.
    ///
    /// Returns 0 when the registry is empty.
    pub fn total_payroll(&self) -> Decimal {
        self.employees.iter().map(Employee::total_pay).sum()
    }

    /// Computes the average pay across all registered employees.
    ///
    /// Defined as 0 for an empty registry.
    pub fn average_pay(&self) -> Decimal {
        if self.employees.is_empty() {
            return Decimal::ZERO;
        }
        self.total_payroll() / Decimal::from(self.employees.len())
    }

    /// Returns true if an employee with the given surname is registered.
    pub fn employee_exists(&self, surname: &str) -> bool {
        self.find_employee(surname).is_some()
    }

    /// Returns all registered employees in registration order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the work type catalog in insertion order.
    pub fn work_types(&self) -> &[WorkType] {
        &self.work_types
    }

    /// Renders the work type catalog as display text.
    ///
    /// With `full = false` the names are comma-joined on one line; with
    /// `full = true` each entry becomes a "name: pay" line. An empty catalog
    /// yields [`NO_WORK_TYPES_MESSAGE`].
    pub fn list_work_types(&self, full: bool) -> String {
        if self.work_types.is_empty() {
            return NO_WORK_TYPES_MESSAGE.to_string();
        }
        if full {
            self.work_types
                .iter()
                .map(|w| format!("{}: {}", w.name, w.pay))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            self.work_types
                .iter()
                .map(|w| w.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    /// Renders the employee roster as display text.
    ///
    /// Each entry is "surname (strategy name)", comma-joined; an empty
    /// roster yields [`NO_EMPLOYEES_MESSAGE`].
    pub fn list_employees(&self) -> String {
        if self.employees.is_empty() {
            return NO_EMPLOYEES_MESSAGE.to_string();
        }
        self.employees
            .iter()
            .map(|e| format!("{} ({})", e.surname, e.strategy.display_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Case-insensitive comparison used for all registry identity lookups.
///
/// Unicode-aware lowercase folding, so non-ASCII surnames compare the way
/// users expect.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
