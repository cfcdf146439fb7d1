//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct, the [`Role`] enum and the
//! typed [`EmployeeId`] used as the identity key throughout the engine.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Returns the uniform base salary applied to newly constructed employees.
///
/// Currently 5000.00, matching the reference compensation table.
pub fn default_base_salary() -> Decimal {
    Decimal::new(5000, 0)
}

/// A typed, generated identifier for an employee.
///
/// Identity is deliberately not the display name: two distinct people may
/// share a name, and the calculation cache is keyed by this identifier.
///
/// # Example
///
/// ```
/// use salary_engine::models::EmployeeId;
///
/// let a = EmployeeId::new();
/// let b = EmployeeId::new();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Generates a fresh, unique identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Represents an employee's role in the company hierarchy.
///
/// The role decides which bonus rule applies and which subordinates count
/// towards the subordinate bonus. Any role value outside the recognised set
/// deserialises to [`Role::Unknown`], keeping the rule dispatch total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Individual contributor with no subordinates.
    Individual,
    /// Manager whose bonus includes direct subordinate salaries.
    Manager,
    /// Sales employee whose bonus includes all transitive subordinate salaries.
    Sales,
    /// Catch-all for role values the rule set does not recognise.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Returns true if employees with this role may own subordinates.
    pub fn is_hierarchical(self) -> bool {
        matches!(self, Role::Manager | Role::Sales)
    }
}

/// Represents an employee subject to salary calculation.
///
/// Employees are constructed once by the caller before a calculation run and
/// are immutable during it. Subordinates are held as identity references so
/// the same employee may report to several superiors without duplicating the
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: EmployeeId,
    /// Display name; carries no identity semantics.
    pub name: String,
    /// The date the employee joined the company.
    pub date_joined: NaiveDate,
    /// The employee's base salary before bonuses.
    pub base_salary: Decimal,
    /// The employee's role in the hierarchy.
    pub role: Role,
    /// Identities of direct subordinates, in reporting-list order.
    ///
    /// Empty for non-hierarchical roles.
    #[serde(default)]
    pub subordinates: Vec<EmployeeId>,
}

impl Employee {
    /// Creates an individual contributor with the default base salary.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::{Employee, Role};
    /// use chrono::NaiveDate;
    ///
    /// let alice = Employee::individual("Alice", NaiveDate::from_ymd_opt(2020, 3, 1).unwrap());
    /// assert_eq!(alice.role, Role::Individual);
    /// assert!(alice.subordinates.is_empty());
    /// ```
    pub fn individual(name: impl Into<String>, date_joined: NaiveDate) -> Self {
        Self {
            id: EmployeeId::new(),
            name: name.into(),
            date_joined,
            base_salary: default_base_salary(),
            role: Role::Individual,
            subordinates: Vec::new(),
        }
    }

    /// Creates a manager with the default base salary and the given direct
    /// subordinates.
    pub fn manager(
        name: impl Into<String>,
        date_joined: NaiveDate,
        subordinates: Vec<EmployeeId>,
    ) -> Self {
        Self {
            id: EmployeeId::new(),
            name: name.into(),
            date_joined,
            base_salary: default_base_salary(),
            role: Role::Manager,
            subordinates,
        }
    }

    /// Creates a sales employee with the default base salary and the given
    /// direct subordinates.
    pub fn sales(
        name: impl Into<String>,
        date_joined: NaiveDate,
        subordinates: Vec<EmployeeId>,
    ) -> Self {
        Self {
            id: EmployeeId::new(),
            name: name.into(),
            date_joined,
            base_salary: default_base_salary(),
            role: Role::Sales,
            subordinates,
        }
    }

    /// Replaces the base salary, consuming and returning the employee.
    pub fn with_base_salary(mut self, base_salary: Decimal) -> Self {
        self.base_salary = base_salary;
        self
    }
}
