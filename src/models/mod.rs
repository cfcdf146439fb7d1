//! Core data models for the Salary Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;
mod hierarchy;

pub use calculation_result::SalaryBreakdown;
pub use employee::{Employee, EmployeeId, Role, default_base_salary};
pub use hierarchy::Hierarchy;
