//! Request types for the payroll registry API.
//!
//! This module defines the JSON request bodies accepted by the endpoints.
//! Parsing user-supplied values into these typed shapes is the presentation
//! layer's half of the validation contract; range checks the core also
//! enforces (non-negative pay, selector in {1, 2, 3}) are re-checked there.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddEmployeeRequest {
    /// The surname of the employee to register.
    pub surname: String,
}

/// Request body for `POST /work-types`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddWorkTypeRequest {
    /// The name of the new work type.
    pub name: String,
    /// The pay amount for one performed instance.
    pub pay: Decimal,
}

/// Request body for `POST /employees/{surname}/work`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordWorkRequest {
    /// The name of the work type that was performed.
    pub work_type: String,
}

/// Request body for `PUT /employees/{surname}/strategy`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStrategyRequest {
    /// The strategy selector: 1 = standard, 2 = premium, 3 = fixed bonus.
    pub selector: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_add_work_type_request_parses_decimal_pay() {
        let json = r#"{"name": "Assembly", "pay": "50.0"}"#;
        let request: AddWorkTypeRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.name, "Assembly");
        assert_eq!(request.pay, Decimal::from_str("50.0").unwrap());
    }

    #[test]
    fn test_set_strategy_request_rejects_non_integer_selector() {
        let json = r#"{"selector": "premium"}"#;
        assert!(serde_json::from_str::<SetStrategyRequest>(json).is_err());
    }

    #[test]
    fn test_add_employee_request_requires_surname_field() {
        assert!(serde_json::from_str::<AddEmployeeRequest>("{}").is_err());
    }
}
