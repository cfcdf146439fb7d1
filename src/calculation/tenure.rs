//! Tenure computation.
//!
//! Tenure is a derived value, recomputed for every calculation rather than
//! stored on the employee.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Returns the whole years of service accumulated by `as_of`.
///
/// The value is the floor of the year difference: an employee who joined on
/// 2020-06-01 has one year of tenure from 2021-06-01, not before.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] when `as_of` precedes the join date.
/// Negative tenure has no meaning in the bonus rules, so it is rejected
/// rather than clamped to zero.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::tenure_years;
/// use salary_engine::models::Employee;
/// use chrono::NaiveDate;
///
/// let employee = Employee::individual("Alice", NaiveDate::from_ymd_opt(2020, 6, 1).unwrap());
/// let as_of = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert_eq!(tenure_years(&employee, as_of).unwrap(), 5);
/// ```
pub fn tenure_years(employee: &Employee, as_of: NaiveDate) -> EngineResult<u32> {
    as_of
        .years_since(employee.date_joined)
        .ok_or(EngineError::InvalidDate {
            id: employee.id,
            date_joined: employee.date_joined,
            as_of,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(joined: NaiveDate) -> Employee {
        Employee::individual("Alice", joined)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// TE-001: whole years, floored
    #[test]
    fn test_tenure_floors_partial_years() {
        let alice = employee(date(2020, 6, 1));

        assert_eq!(tenure_years(&alice, date(2026, 5, 31)).unwrap(), 5);
        assert_eq!(tenure_years(&alice, date(2026, 6, 1)).unwrap(), 6);
        assert_eq!(tenure_years(&alice, date(2026, 6, 2)).unwrap(), 6);
    }

    /// TE-002: zero tenure within the first year
    #[test]
    fn test_tenure_zero_within_first_year() {
        let alice = employee(date(2025, 3, 1));
        assert_eq!(tenure_years(&alice, date(2025, 12, 31)).unwrap(), 0);
    }

    /// TE-003: same-day join date is zero tenure
    #[test]
    fn test_tenure_zero_on_join_date() {
        let alice = employee(date(2025, 3, 1));
        assert_eq!(tenure_years(&alice, date(2025, 3, 1)).unwrap(), 0);
    }

    /// TE-004: as-of before join date is an error, not a clamp
    #[test]
    fn test_tenure_rejects_date_before_join() {
        let alice = employee(date(2025, 3, 1));
        let result = tenure_years(&alice, date(2024, 3, 1));

        match result.unwrap_err() {
            EngineError::InvalidDate {
                id,
                date_joined,
                as_of,
            } => {
                assert_eq!(id, alice.id);
                assert_eq!(date_joined, date(2025, 3, 1));
                assert_eq!(as_of, date(2024, 3, 1));
            }
            other => panic!("Expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn test_tenure_handles_leap_year_join_date() {
        let alice = employee(date(2020, 2, 29));
        // A Feb 29 anniversary completes on Mar 1 in common years.
        assert_eq!(tenure_years(&alice, date(2021, 2, 28)).unwrap(), 0);
        assert_eq!(tenure_years(&alice, date(2021, 3, 1)).unwrap(), 1);
        assert_eq!(tenure_years(&alice, date(2024, 2, 29)).unwrap(), 4);
    }
}
