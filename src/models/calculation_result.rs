//! Calculation result models for the Salary Calculation Engine.
//!
//! This module contains the [`SalaryBreakdown`] type capturing the
//! components behind a computed salary figure, for callers that want more
//! than the single number.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmployeeId, Role};

/// The components of one employee's computed salary.
///
/// `total` is always `base_component + subordinate_bonus`, with both terms
/// held in decimal arithmetic and the total rounded to two decimal places.
///
/// # Example
///
/// ```
/// use salary_engine::models::{EmployeeId, Role, SalaryBreakdown};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = SalaryBreakdown {
///     employee_id: EmployeeId::new(),
///     name: "Alice".to_string(),
///     role: Role::Manager,
///     tenure_years: 3,
///     tenure_bonus_pct: Decimal::from_str("15").unwrap(),
///     base_component: Decimal::from_str("5750.00").unwrap(),
///     subordinate_total: Decimal::from_str("13000.00").unwrap(),
///     subordinate_bonus: Decimal::from_str("65.00").unwrap(),
///     total: Decimal::from_str("5815.00").unwrap(),
/// };
/// assert_eq!(breakdown.total, breakdown.base_component + breakdown.subordinate_bonus);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The employee this breakdown belongs to.
    pub employee_id: EmployeeId,
    /// The employee's display name.
    pub name: String,
    /// The role whose bonus rule was applied.
    pub role: Role,
    /// Whole years of tenure as of the calculation date.
    pub tenure_years: u32,
    /// The tenure bonus percentage actually applied, after the cap.
    pub tenure_bonus_pct: Decimal,
    /// Base salary scaled by the tenure bonus.
    pub base_component: Decimal,
    /// Sum of the relevant subordinate salaries (direct for managers,
    /// transitive deduplicated for sales; zero otherwise).
    pub subordinate_total: Decimal,
    /// The subordinate contribution added on top of the base component.
    pub subordinate_bonus: Decimal,
    /// The final salary figure, rounded to two decimal places.
    pub total: Decimal,
}

impl SalaryBreakdown {
    /// Returns a zero-valued breakdown, used for unrecognised roles under
    /// the zero-salary fallback policy.
    pub fn zero(employee_id: EmployeeId, name: String, role: Role) -> Self {
        Self {
            employee_id,
            name,
            role,
            tenure_years: 0,
            tenure_bonus_pct: Decimal::ZERO,
            base_component: Decimal::ZERO,
            subordinate_total: Decimal::ZERO,
            subordinate_bonus: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}
