//! Bonus rule for managers.

use rust_decimal::Decimal;

use crate::config::RoleBonus;
use crate::models::Employee;

use super::rounding::round_currency;
use super::tenure_bonus::tenure_bonus_multiplier;

/// Computes a manager's salary.
///
/// Base salary plus 5% for each year of service, capped at 40% of the base,
/// plus 0.5% of the summed salaries of the manager's direct subordinates
/// (rates from the supplied [`RoleBonus`]). The caller resolves the
/// subordinate salaries; this function only combines the figures.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_manager_salary;
/// use salary_engine::config::RuleConfig;
/// use salary_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = RuleConfig::default();
/// let bob = Employee::manager("Bob", NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(), vec![]);
///
/// // Two direct reports worth 6500.00 each: 5000 * 1.15 + 0.005 * 13000.
/// let salary = calculate_manager_salary(&bob, 3, Decimal::from(13000), &config.manager);
/// assert_eq!(salary, Decimal::from_str("5815.00").unwrap());
/// ```
pub fn calculate_manager_salary(
    employee: &Employee,
    tenure_years: u32,
    direct_subordinate_total: Decimal,
    bonus: &RoleBonus,
) -> Decimal {
    let base_component = employee.base_salary * tenure_bonus_multiplier(bonus, tenure_years);
    round_currency(base_component + bonus.subordinate_rate * direct_subordinate_total)
}
