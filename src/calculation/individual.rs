//! Bonus rule for individual contributors.

use rust_decimal::Decimal;

use crate::config::RoleBonus;
use crate::models::Employee;

use super::rounding::round_currency;
use super::tenure_bonus::tenure_bonus_multiplier;

/// Computes an individual contributor's salary.
///
/// Base salary plus 3% for each year of service, capped at 30% of the base
/// (rates from the supplied [`RoleBonus`]). Individuals have no subordinate
/// contribution.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_individual_salary;
/// use salary_engine::config::RuleConfig;
/// use salary_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = RuleConfig::default();
/// let alice = Employee::individual("Alice", NaiveDate::from_ymd_opt(2010, 2, 1).unwrap());
///
/// // Ten or more years of service hits the 30% cap.
/// let salary = calculate_individual_salary(&alice, 10, &config.individual);
/// assert_eq!(salary, Decimal::from_str("6500.00").unwrap());
/// ```
pub fn calculate_individual_salary(
    employee: &Employee,
    tenure_years: u32,
    bonus: &RoleBonus,
) -> Decimal {
    round_currency(employee.base_salary * tenure_bonus_multiplier(bonus, tenure_years))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn alice() -> Employee {
        Employee::individual("Alice", NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
    }

    /// IN-001: 3% per year below the cap
    #[test]
    fn test_three_pct_per_year() {
        let config = RuleConfig::default();

        assert_eq!(
            calculate_individual_salary(&alice(), 0, &config.individual),
            dec("5000.00")
        );
        assert_eq!(
            calculate_individual_salary(&alice(), 1, &config.individual),
            dec("5150.00")
        );
        assert_eq!(
            calculate_individual_salary(&alice(), 9, &config.individual),
            dec("6350.00")
        );
    }

    /// IN-002: bonus capped at 30% of base
    #[test]
    fn test_cap_at_thirty_pct() {
        let config = RuleConfig::default();

        assert_eq!(
            calculate_individual_salary(&alice(), 10, &config.individual),
            dec("6500.00")
        );
        assert_eq!(
            calculate_individual_salary(&alice(), 25, &config.individual),
            dec("6500.00")
        );
    }

    /// IN-003: non-default base salary scales the whole figure
    #[test]
    fn test_respects_base_salary_override() {
        let config = RuleConfig::default();
        let employee = alice().with_base_salary(dec("8000"));

        assert_eq!(
            calculate_individual_salary(&employee, 5, &config.individual),
            dec("9200.00")
        );
    }

    #[test]
    fn test_result_rounded_to_two_dp() {
        let config = RuleConfig::default();
        let employee = alice().with_base_salary(dec("5000.01"));

        // 5000.01 * 1.03 = 5150.0103
        assert_eq!(
            calculate_individual_salary(&employee, 1, &config.individual),
            dec("5150.01")
        );
    }
}
