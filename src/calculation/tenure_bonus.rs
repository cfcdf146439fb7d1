//! Capped tenure bonus computation shared by every bonus rule.

use rust_decimal::Decimal;

use crate::config::RoleBonus;

/// Returns the tenure bonus percentage for the given years of service,
/// capped at the role's maximum.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::tenure_bonus_pct;
/// use salary_engine::config::RuleConfig;
///
/// let config = RuleConfig::default();
/// // 3% per year, capped at 30%.
/// assert_eq!(tenure_bonus_pct(&config.individual, 5), rust_decimal::Decimal::from(15));
/// assert_eq!(tenure_bonus_pct(&config.individual, 10), rust_decimal::Decimal::from(30));
/// assert_eq!(tenure_bonus_pct(&config.individual, 40), rust_decimal::Decimal::from(30));
/// ```
pub fn tenure_bonus_pct(bonus: &RoleBonus, tenure_years: u32) -> Decimal {
    (bonus.tenure_rate_pct * Decimal::from(tenure_years)).min(bonus.tenure_cap_pct)
}

/// Returns the multiplier applied to the base salary for the given tenure,
/// `(100 + capped bonus pct) / 100`.
pub fn tenure_bonus_multiplier(bonus: &RoleBonus, tenure_years: u32) -> Decimal {
    (Decimal::ONE_HUNDRED + tenure_bonus_pct(bonus, tenure_years)) / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// TB-001: bonus grows linearly below the cap
    #[test]
    fn test_bonus_linear_below_cap() {
        let config = RuleConfig::default();

        assert_eq!(tenure_bonus_pct(&config.manager, 0), dec("0"));
        assert_eq!(tenure_bonus_pct(&config.manager, 3), dec("15"));
        assert_eq!(tenure_bonus_pct(&config.manager, 7), dec("35"));
    }

    /// TB-002: bonus saturates at the cap
    #[test]
    fn test_bonus_saturates_at_cap() {
        let config = RuleConfig::default();

        assert_eq!(tenure_bonus_pct(&config.manager, 8), dec("40"));
        assert_eq!(tenure_bonus_pct(&config.manager, 100), dec("40"));
        assert_eq!(tenure_bonus_pct(&config.sales, 35), dec("35"));
        assert_eq!(tenure_bonus_pct(&config.sales, 36), dec("35"));
    }

    /// TB-003: multiplier is 1 plus the percentage
    #[test]
    fn test_multiplier_from_pct() {
        let config = RuleConfig::default();

        assert_eq!(tenure_bonus_multiplier(&config.individual, 0), dec("1"));
        assert_eq!(tenure_bonus_multiplier(&config.individual, 5), dec("1.15"));
        assert_eq!(tenure_bonus_multiplier(&config.individual, 10), dec("1.3"));
    }

    #[test]
    fn test_sales_rate_is_one_pct_per_year() {
        let config = RuleConfig::default();
        assert_eq!(tenure_bonus_pct(&config.sales, 11), dec("11"));
    }
}
