//! Configuration types for the bonus rule set.
//!
//! These types describe the per-role bonus table the engine applies. The
//! built-in [`RuleConfig::default`] matches the reference compensation
//! rules; [`ConfigLoader`] can replace it from a YAML file.
//!
//! [`ConfigLoader`]: super::ConfigLoader

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Role, default_base_salary};

/// The bonus parameters for one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleBonus {
    /// Tenure bonus percent per whole year of service.
    pub tenure_rate_pct: Decimal,
    /// Upper bound on the total tenure bonus percent.
    pub tenure_cap_pct: Decimal,
    /// Fraction of the relevant subordinate salary sum added to the figure.
    ///
    /// Zero for roles whose bonus ignores subordinates.
    pub subordinate_rate: Decimal,
}

impl RoleBonus {
    fn validate(&self, role: &str) -> EngineResult<()> {
        for (field, value) in [
            ("tenure_rate_pct", self.tenure_rate_pct),
            ("tenure_cap_pct", self.tenure_cap_pct),
            ("subordinate_rate", self.subordinate_rate),
        ] {
            if value < Decimal::ZERO {
                return Err(EngineError::ConfigParseError {
                    path: format!("{role}.{field}"),
                    message: "must not be negative".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Policy for employees whose role is outside the recognised set.
///
/// The reference behaviour maps an unknown role to a zero salary so that a
/// newly added role degrades gracefully rather than crashing a batch run.
/// `Reject` is the stricter alternative for callers that prefer to fail
/// loudly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRolePolicy {
    /// Unknown roles compute a salary of zero.
    #[default]
    ZeroSalary,
    /// Unknown roles surface an `UnknownRole` error.
    Reject,
}

/// The full bonus rule table plus engine-wide policies.
///
/// # Example
///
/// ```
/// use salary_engine::config::RuleConfig;
/// use salary_engine::models::Role;
/// use rust_decimal::Decimal;
///
/// let config = RuleConfig::default();
/// let manager = config.bonus_for(Role::Manager).unwrap();
/// assert_eq!(manager.tenure_rate_pct, Decimal::from(5));
/// assert!(config.bonus_for(Role::Unknown).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Base salary assigned to employees constructed without an override.
    #[serde(default = "default_base_salary")]
    pub default_base_salary: Decimal,
    /// Bonus parameters for individual contributors.
    pub individual: RoleBonus,
    /// Bonus parameters for managers.
    pub manager: RoleBonus,
    /// Bonus parameters for sales employees.
    pub sales: RoleBonus,
    /// How to treat roles outside the recognised set.
    #[serde(default)]
    pub unknown_role_policy: UnknownRolePolicy,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            default_base_salary: default_base_salary(),
            individual: RoleBonus {
                tenure_rate_pct: Decimal::from(3),
                tenure_cap_pct: Decimal::from(30),
                subordinate_rate: Decimal::ZERO,
            },
            manager: RoleBonus {
                tenure_rate_pct: Decimal::from(5),
                tenure_cap_pct: Decimal::from(40),
                subordinate_rate: Decimal::new(5, 3),
            },
            sales: RoleBonus {
                tenure_rate_pct: Decimal::from(1),
                tenure_cap_pct: Decimal::from(35),
                subordinate_rate: Decimal::new(3, 3),
            },
            unknown_role_policy: UnknownRolePolicy::default(),
        }
    }
}

impl RuleConfig {
    /// Returns the bonus parameters for a role, or `None` for
    /// [`Role::Unknown`], which carries no rule of its own.
    pub fn bonus_for(&self, role: Role) -> Option<&RoleBonus> {
        match role {
            Role::Individual => Some(&self.individual),
            Role::Manager => Some(&self.manager),
            Role::Sales => Some(&self.sales),
            Role::Unknown => None,
        }
    }

    /// Checks the table for negative rates or caps.
    pub fn validate(&self) -> EngineResult<()> {
        if self.default_base_salary < Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: "default_base_salary".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        self.individual.validate("individual")?;
        self.manager.validate("manager")?;
        self.sales.validate("sales")?;
        Ok(())
    }
}
