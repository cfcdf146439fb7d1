//! Configuration loading and management for the Salary Calculation Engine.
//!
//! This module provides the bonus rule table applied by the engine and a
//! loader for replacing the built-in defaults from a YAML file.
//!
//! # Example
//!
//! ```
//! use salary_engine::config::RuleConfig;
//!
//! let config = RuleConfig::default();
//! assert_eq!(config.manager.tenure_cap_pct, rust_decimal::Decimal::from(40));
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RoleBonus, RuleConfig, UnknownRolePolicy};
