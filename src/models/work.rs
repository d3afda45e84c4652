//! Work type and work record models.
//!
//! A [`WorkType`] is a catalog definition of a kind of billable work and its
//! fixed unit pay. A [`WorkRecord`] is one instance of an employee having
//! performed a work type, captured with the pay amount at record time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog entry defining a kind of billable work and its unit pay.
///
/// Work types are immutable once added to the registry. They do not track
/// who performed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkType {
    /// The work type name, unique across the catalog (case-insensitive).
    pub name: String,
    /// The pay amount for one performed instance of this work.
    pub pay: Decimal,
}

impl WorkType {
    /// Creates a new work type with the given name and pay.
    pub fn new(name: impl Into<String>, pay: Decimal) -> Self {
        Self {
            name: name.into(),
            pay,
        }
    }
}

/// One occurrence of an employee performing a work type.
///
/// The name and pay are copied from the matching [`WorkType`] at the moment
/// the work is recorded, not referenced. Later catalog changes never
/// retroactively alter an employee's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// The name of the work type that was performed.
    pub name: String,
    /// The pay amount captured at record time.
    pub pay: Decimal,
}

impl WorkRecord {
    /// The amount this record contributes to pay totals.
    pub fn total_pay(&self) -> Decimal {
        self.pay
    }
}

impl From<&WorkType> for WorkRecord {
    fn from(work_type: &WorkType) -> Self {
        Self {
            name: work_type.name.clone(),
            pay: work_type.pay,
        }
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
    fn test_work_record_copies_values_from_work_type() {
        let work_type = WorkType::new("Assembly", dec("50.00"));
        let record = WorkRecord::from(&work_type);

        assert_eq!(record.name, "Assembly");
        assert_eq!(record.pay, dec("50.00"));
    }

    #[test]
    fn test_work_record_total_pay_is_captured_pay() {
        let record = WorkRecord {
            name: "Welding".to_string(),
            pay: dec("75.25"),
        };
        assert_eq!(record.total_pay(), dec("75.25"));
    }

    #[test]
    fn test_work_record_is_a_copy_not_a_reference() {
        let work_type = WorkType::new("Painting", dec("30.00"));
        let record = WorkRecord::from(&work_type);
        drop(work_type);

        // The record keeps its own name and pay
        assert_eq!(record.pay, dec("30.00"));
    }

    #[test]
    fn test_work_type_deserializes_from_json() {
        let json = r#"{"name": "Assembly", "pay": "50.0"}"#;
        let work_type: WorkType = serde_json::from_str(json).unwrap();

        assert_eq!(work_type.name, "Assembly");
        assert_eq!(work_type.pay, dec("50.0"));
    }

    #[test]
    fn test_work_type_serde_round_trip() {
        let work_type = WorkType::new("Inspection", dec("12.40"));
        let json = serde_json::to_string(&work_type).unwrap();
        let deserialized: WorkType = serde_json::from_str(&json).unwrap();
        assert_eq!(work_type, deserialized);
    }
}
