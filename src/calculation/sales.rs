//! Bonus rule for sales employees.

use rust_decimal::Decimal;

use crate::config::RoleBonus;
use crate::models::Employee;

use super::rounding::round_currency;
use super::tenure_bonus::tenure_bonus_multiplier;

/// Computes a sales employee's salary.
///
/// Base salary plus 1% for each year of service, capped at 35% of the base,
/// plus 0.3% of the summed salaries of every transitive subordinate,
/// deduplicated by identity (rates from the supplied [`RoleBonus`]). The
/// caller resolves the transitive subordinate set and its salaries; this
/// function only combines the figures.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_sales_salary;
/// use salary_engine::config::RuleConfig;
/// use salary_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = RuleConfig::default();
/// let carol = Employee::sales("Carol", NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(), vec![]);
///
/// // 5000 * 1.11 + 0.003 * 17656.75 = 5602.97025, rounded to 5602.97.
/// let total = Decimal::from_str("17656.75").unwrap();
/// let salary = calculate_sales_salary(&carol, 11, total, &config.sales);
/// assert_eq!(salary, Decimal::from_str("5602.97").unwrap());
/// ```
pub fn calculate_sales_salary(
    employee: &Employee,
    tenure_years: u32,
    transitive_subordinate_total: Decimal,
    bonus: &RoleBonus,
) -> Decimal {
    let base_component = employee.base_salary * tenure_bonus_multiplier(bonus, tenure_years);
    round_currency(base_component + bonus.subordinate_rate * transitive_subordinate_total)
}
