//! The reporting hierarchy and its traversal operations.
//!
//! This module defines [`Hierarchy`], an identity-indexed collection of
//! employees whose subordinate edges form a directed graph. The graph is
//! expected to be acyclic but need not be a tree: the same employee may
//! report to several superiors, so traversal deduplicates by identity and
//! fails fast on cycles instead of recursing forever.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::{Employee, EmployeeId};

/// An identity-indexed employee graph.
///
/// Insertion validates the record (non-negative base salary, no duplicate
/// identity, subordinates only on hierarchical roles); traversal validates
/// the edges (no dangling references, no cycles).
///
/// # Example
///
/// ```
/// use salary_engine::models::{Employee, Hierarchy};
/// use chrono::NaiveDate;
///
/// let join = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let report = Employee::individual("Report", join);
/// let manager = Employee::manager("Manager", join, vec![report.id]);
///
/// let mut hierarchy = Hierarchy::new();
/// hierarchy.insert(report)?;
/// hierarchy.insert(manager.clone())?;
///
/// assert_eq!(hierarchy.direct_subordinates(manager.id)?.len(), 1);
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    employees: HashMap<EmployeeId, Employee>,
}

impl Hierarchy {
    /// Creates an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a hierarchy from a collection of employees.
    ///
    /// Equivalent to inserting each employee in turn; fails on the first
    /// invalid record.
    pub fn from_employees(employees: impl IntoIterator<Item = Employee>) -> EngineResult<Self> {
        let mut hierarchy = Self::new();
        for employee in employees {
            hierarchy.insert(employee)?;
        }
        Ok(hierarchy)
    }

    /// Inserts an employee into the hierarchy.
    ///
    /// # Errors
    ///
    /// - [`EngineError::DuplicateIdentity`] if an employee with the same
    ///   identity is already present. Last-write-wins resolution would make
    ///   cache behaviour ambiguous, so the conflict is reported instead.
    /// - [`EngineError::InvalidEmployee`] if the base salary is negative or
    ///   a non-hierarchical role declares subordinates.
    pub fn insert(&mut self, employee: Employee) -> EngineResult<()> {
        if employee.base_salary < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "base_salary".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        if !employee.role.is_hierarchical() && !employee.subordinates.is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "subordinates".to_string(),
                message: format!("role {:?} cannot own subordinates", employee.role),
            });
        }
        if self.employees.contains_key(&employee.id) {
            return Err(EngineError::DuplicateIdentity { id: employee.id });
        }
        self.employees.insert(employee.id, employee);
        Ok(())
    }

    /// Looks up an employee by identity.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmployeeNotFound`] for identities not present
    /// in the hierarchy, including dangling subordinate references.
    pub fn get(&self, id: EmployeeId) -> EngineResult<&Employee> {
        self.employees
            .get(&id)
            .ok_or(EngineError::EmployeeNotFound { id })
    }

    /// Returns the number of employees in the hierarchy.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the hierarchy contains no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterates over all employees in the hierarchy, in no particular order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Returns the direct subordinates of an employee, in declared order.
    ///
    /// Empty for non-hierarchical roles.
    pub fn direct_subordinates(&self, id: EmployeeId) -> EngineResult<&[EmployeeId]> {
        Ok(self.get(id)?.subordinates.as_slice())
    }

    /// Returns every distinct subordinate reachable from an employee, at any
    /// depth, excluding the employee itself.
    ///
    /// The traversal is depth-first over `direct_subordinates`, collecting
    /// each identity the first time it is encountered, so diamond reporting
    /// structures contribute each shared subordinate exactly once. The
    /// result preserves first-visit order.
    ///
    /// # Errors
    ///
    /// - [`EngineError::CycleDetected`] if the traversal revisits an
    ///   identity already on the current path.
    /// - [`EngineError::EmployeeNotFound`] for dangling subordinate edges.
    pub fn all_subordinates(&self, id: EmployeeId) -> EngineResult<Vec<EmployeeId>> {
        let root = self.get(id)?;
        let mut collected = Vec::new();
        let mut visited = HashSet::new();
        let mut on_path = HashSet::from([root.id]);
        for &subordinate in &root.subordinates {
            self.collect_subordinates(subordinate, &mut collected, &mut visited, &mut on_path)?;
        }
        Ok(collected)
    }

    fn collect_subordinates(
        &self,
        id: EmployeeId,
        collected: &mut Vec<EmployeeId>,
        visited: &mut HashSet<EmployeeId>,
        on_path: &mut HashSet<EmployeeId>,
    ) -> EngineResult<()> {
        if on_path.contains(&id) {
            return Err(EngineError::CycleDetected { id });
        }
        if !visited.insert(id) {
            // Already collected through another superior; the subtree below
            // it is complete and cycle-free.
            return Ok(());
        }
        collected.push(id);

        let employee = self.get(id)?;
        on_path.insert(id);
        for &subordinate in &employee.subordinates {
            self.collect_subordinates(subordinate, collected, visited, on_path)?;
        }
        on_path.remove(&id);
        Ok(())
    }
}
