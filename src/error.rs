//! Error types for the payroll registry.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all conditions a registry operation can fail with. None of these are
//! fatal: every operation is retryable by the caller with corrected input,
//! and a failed operation never mutates the registry.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for payroll registry operations.
///
/// All fallible operations on the registry return this error type, making it
/// easy to handle failures consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_registry::error::RegistryError;
///
/// let error = RegistryError::EmployeeNotFound {
///     surname: "Smith".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: Smith");
/// ```
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A surname or work type name was empty (or whitespace only).
    #[error("{field} must not be empty")]
    EmptyName {
        /// The field that was empty, for display (e.g. "Surname").
        field: String,
    },

    /// An employee with the same case-insensitive surname already exists.
    #[error("An employee with surname '{surname}' already exists")]
    DuplicateEmployee {
        /// The surname that collided.
        surname: String,
    },

    /// A work type with the same case-insensitive name already exists.
    #[error("A work type named '{name}' already exists")]
    DuplicateWorkType {
        /// The work type name that collided.
        name: String,
    },

    /// No employee matches the given surname.
    #[error("Employee not found: {surname}")]
    EmployeeNotFound {
        /// The surname that was looked up.
        surname: String,
    },

    /// No work type matches the given name.
    #[error("Work type not found: {name}")]
    WorkTypeNotFound {
        /// The work type name that was looked up.
        name: String,
    },

    /// A work type was given a negative pay amount.
    #[error("Pay must not be negative, got {pay}")]
    NegativePay {
        /// The rejected pay amount.
        pay: Decimal,
    },

    /// A strategy selector outside the closed set {1, 2, 3}.
    #[error("Invalid strategy selector: {selector} (expected 1, 2 or 3)")]
    InvalidStrategySelector {
        /// The rejected selector value.
        selector: u8,
    },
}

/// A type alias for Results that return RegistryError.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_empty_name_displays_field() {
        let error = RegistryError::EmptyName {
            field: "Surname".to_string(),
        };
        assert_eq!(error.to_string(), "Surname must not be empty");
    }

    #[test]
    fn test_duplicate_employee_displays_surname() {
        let error = RegistryError::DuplicateEmployee {
            surname: "Smith".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "An employee with surname 'Smith' already exists"
        );
    }

    #[test]
    fn test_duplicate_work_type_displays_name() {
        let error = RegistryError::DuplicateWorkType {
            name: "Assembly".to_string(),
        };
        assert_eq!(error.to_string(), "A work type named 'Assembly' already exists");
    }

    #[test]
    fn test_employee_not_found_displays_surname() {
        let error = RegistryError::EmployeeNotFound {
            surname: "Jones".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: Jones");
    }

    #[test]
    fn test_work_type_not_found_displays_name() {
        let error = RegistryError::WorkTypeNotFound {
            name: "Welding".to_string(),
        };
        assert_eq!(error.to_string(), "Work type not found: Welding");
    }

    #[test]
    fn test_negative_pay_displays_amount() {
        let error = RegistryError::NegativePay {
            pay: Decimal::from_str("-12.50").unwrap(),
        };
        assert_eq!(error.to_string(), "Pay must not be negative, got -12.50");
    }

    #[test]
    fn test_invalid_strategy_selector_displays_value() {
        let error = RegistryError::InvalidStrategySelector { selector: 7 };
        assert_eq!(
            error.to_string(),
            "Invalid strategy selector: 7 (expected 1, 2 or 3)"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<RegistryError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> RegistryResult<()> {
            Err(RegistryError::EmployeeNotFound {
                surname: "Smith".to_string(),
            })
        }

        fn propagates_error() -> RegistryResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
