//! The salary calculation engine.
//!
//! [`SalaryCalculator`] dispatches each employee to the bonus rule for its
//! role, resolving subordinate salaries recursively through a
//! [`CalculationContext`] so that every identity is priced at most once per
//! run.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::config::{RoleBonus, RuleConfig, UnknownRolePolicy};
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeId, Hierarchy, Role, SalaryBreakdown};

use super::context::CalculationContext;
use super::individual::calculate_individual_salary;
use super::manager::calculate_manager_salary;
use super::sales::calculate_sales_salary;
use super::tenure::tenure_years;
use super::tenure_bonus::{tenure_bonus_multiplier, tenure_bonus_pct};

/// Computes salaries over a [`Hierarchy`] according to a [`RuleConfig`].
///
/// The calculator itself is immutable and reusable; all per-run state lives
/// in the [`CalculationContext`] passed to each call.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::{CalculationContext, SalaryCalculator};
/// use salary_engine::models::{Employee, Hierarchy};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let alice = Employee::individual("Alice", NaiveDate::from_ymd_opt(2010, 2, 1).unwrap());
/// let id = alice.id;
/// let hierarchy = Hierarchy::from_employees([alice])?;
///
/// let calculator = SalaryCalculator::with_default_rules();
/// let mut ctx = CalculationContext::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
/// let salary = calculator.calculate(&hierarchy, &mut ctx, id)?;
/// assert_eq!(salary, Decimal::new(650000, 2));
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SalaryCalculator {
    config: RuleConfig,
}

impl SalaryCalculator {
    /// Creates a calculator with a validated rule configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigParseError`] if the table contains
    /// negative rates or caps.
    pub fn new(config: RuleConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a calculator with the built-in reference rule table.
    pub fn with_default_rules() -> Self {
        Self {
            config: RuleConfig::default(),
        }
    }

    /// The rule configuration this calculator applies.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Computes one employee's salary, reusing any salaries already cached
    /// in the context.
    ///
    /// Within one context the call is idempotent: a second call for the
    /// same identity returns the cached figure without recomputation.
    ///
    /// # Errors
    ///
    /// - [`EngineError::EmployeeNotFound`] for unknown or dangling identities.
    /// - [`EngineError::InvalidDate`] if the context's as-of date precedes
    ///   the employee's (or any subordinate's) join date.
    /// - [`EngineError::CycleDetected`] if the reporting graph is cyclic.
    /// - [`EngineError::UnknownRole`] for unrecognised roles under the
    ///   `Reject` policy.
    pub fn calculate(
        &self,
        hierarchy: &Hierarchy,
        ctx: &mut CalculationContext,
        id: EmployeeId,
    ) -> EngineResult<Decimal> {
        if let Some(salary) = ctx.cached(id) {
            trace!(%id, %salary, "salary cache hit");
            return Ok(salary);
        }
        let breakdown = self.compute(hierarchy, ctx, id)?;
        Ok(breakdown.total)
    }

    /// Computes one employee's salary and returns its components.
    ///
    /// Subordinate salaries are resolved through the same context as
    /// [`calculate`](Self::calculate), so mixing the two entry points in one
    /// run performs no redundant work.
    pub fn calculate_breakdown(
        &self,
        hierarchy: &Hierarchy,
        ctx: &mut CalculationContext,
        id: EmployeeId,
    ) -> EngineResult<SalaryBreakdown> {
        self.compute(hierarchy, ctx, id)
    }

    /// Computes the summed salary of a batch of employees with one fresh
    /// context.
    ///
    /// Each listed employee contributes once to the total. The cache is
    /// shared across the whole batch, so employees hierarchically connected
    /// to earlier entries are not recomputed. The total does not depend on
    /// the order of `ids`.
    pub fn batch_calculate(
        &self,
        hierarchy: &Hierarchy,
        ids: &[EmployeeId],
        as_of: NaiveDate,
    ) -> EngineResult<Decimal> {
        let mut ctx = CalculationContext::new(as_of);
        let mut total = Decimal::ZERO;
        for &id in ids {
            total += self.calculate(hierarchy, &mut ctx, id)?;
        }
        debug!(employees = ids.len(), %total, "batch calculation complete");
        Ok(total)
    }

    fn compute(
        &self,
        hierarchy: &Hierarchy,
        ctx: &mut CalculationContext,
        id: EmployeeId,
    ) -> EngineResult<SalaryBreakdown> {
        let employee = hierarchy.get(id)?;
        ctx.begin(id)?;
        match self.compute_role(hierarchy, ctx, employee) {
            Ok(breakdown) => {
                debug!(%id, role = ?employee.role, total = %breakdown.total, "computed salary");
                ctx.finish(id, breakdown.total);
                Ok(breakdown)
            }
            Err(e) => {
                ctx.abort(id);
                Err(e)
            }
        }
    }

    fn compute_role(
        &self,
        hierarchy: &Hierarchy,
        ctx: &mut CalculationContext,
        employee: &Employee,
    ) -> EngineResult<SalaryBreakdown> {
        match employee.role {
            Role::Individual => {
                let years = tenure_years(employee, ctx.as_of())?;
                let bonus = &self.config.individual;
                let total = calculate_individual_salary(employee, years, bonus);
                Ok(breakdown(employee, years, bonus, Decimal::ZERO, total))
            }
            Role::Manager => {
                let years = tenure_years(employee, ctx.as_of())?;
                let subordinate_total =
                    self.sum_salaries(hierarchy, ctx, hierarchy.direct_subordinates(employee.id)?)?;
                let bonus = &self.config.manager;
                let total = calculate_manager_salary(employee, years, subordinate_total, bonus);
                Ok(breakdown(employee, years, bonus, subordinate_total, total))
            }
            Role::Sales => {
                let years = tenure_years(employee, ctx.as_of())?;
                let transitive = hierarchy.all_subordinates(employee.id)?;
                let subordinate_total = self.sum_salaries(hierarchy, ctx, &transitive)?;
                let bonus = &self.config.sales;
                let total = calculate_sales_salary(employee, years, subordinate_total, bonus);
                Ok(breakdown(employee, years, bonus, subordinate_total, total))
            }
            Role::Unknown => match self.config.unknown_role_policy {
                UnknownRolePolicy::ZeroSalary => {
                    debug!(id = %employee.id, "unknown role, applying zero-salary fallback");
                    Ok(SalaryBreakdown::zero(
                        employee.id,
                        employee.name.clone(),
                        employee.role,
                    ))
                }
                UnknownRolePolicy::Reject => Err(EngineError::UnknownRole { id: employee.id }),
            },
        }
    }

    fn sum_salaries(
        &self,
        hierarchy: &Hierarchy,
        ctx: &mut CalculationContext,
        ids: &[EmployeeId],
    ) -> EngineResult<Decimal> {
        let mut total = Decimal::ZERO;
        for &id in ids {
            total += self.calculate(hierarchy, ctx, id)?;
        }
        Ok(total)
    }
}

fn breakdown(
    employee: &Employee,
    tenure: u32,
    bonus: &RoleBonus,
    subordinate_total: Decimal,
    total: Decimal,
) -> SalaryBreakdown {
    SalaryBreakdown {
        employee_id: employee.id,
        name: employee.name.clone(),
        role: employee.role,
        tenure_years: tenure,
        tenure_bonus_pct: tenure_bonus_pct(bonus, tenure),
        base_component: employee.base_salary * tenure_bonus_multiplier(bonus, tenure),
        subordinate_total,
        subordinate_bonus: bonus.subordinate_rate * subordinate_total,
        total,
    }
}
