//! Pay calculation logic for the payroll registry.
//!
//! This module contains the closed family of interchangeable pay-calculation
//! strategies that turn an employee's recorded work into a total pay amount:
//! a plain sum, a sum with a percentage uplift, and a sum with a flat bonus.

mod strategy;

pub use strategy::{PayStrategy, fixed_bonus_amount, premium_multiplier};
