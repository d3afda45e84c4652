//! Core data models for the payroll registry.
//!
//! This module contains all the domain entities used throughout the registry.

mod employee;
mod work;

pub use employee::Employee;
pub use work::{WorkRecord, WorkType};
