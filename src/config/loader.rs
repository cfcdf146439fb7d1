//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading bonus rule
//! tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RuleConfig;

/// Loads bonus rule configuration from disk.
///
/// # File Format
///
/// A single YAML file describing the per-role bonus table:
///
/// ```yaml
/// default_base_salary: "5000"
/// individual:
///   tenure_rate_pct: "3"
///   tenure_cap_pct: "30"
///   subordinate_rate: "0"
/// manager:
///   tenure_rate_pct: "5"
///   tenure_cap_pct: "40"
///   subordinate_rate: "0.005"
/// sales:
///   tenure_rate_pct: "1"
///   tenure_cap_pct: "35"
///   subordinate_rate: "0.003"
/// unknown_role_policy: zero_salary
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/rules.yaml").unwrap();
/// println!("Manager rate: {}%", config.manager.tenure_rate_pct);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates a rule configuration from the specified file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file cannot be read.
    /// - [`EngineError::ConfigParseError`] if the YAML is malformed or the
    ///   table contains negative rates.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<RuleConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: RuleConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }
}
