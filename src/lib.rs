//! In-Memory Payroll Registry
//!
//! This crate provides an in-memory payroll registry for a small enterprise:
//! registering employees, defining billable work types, recording which work
//! an employee performed, and computing pay under one of three selectable
//! calculation strategies (standard, premium, fixed bonus).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod registry;
