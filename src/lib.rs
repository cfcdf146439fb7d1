//! Salary Calculation Engine
//!
//! This crate computes compensation for employees in a company hierarchy,
//! applying role-specific bonus rules (individual contributor, manager,
//! sales) over the reporting graph and memoizing per-employee results
//! within one calculation run.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
