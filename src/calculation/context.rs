//! The per-run calculation context.

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeId;

/// The transient state of one calculation run: the as-of date plus a cache
/// of salaries already computed for it.
///
/// The cache guarantees at most one computation per employee identity per
/// context, which matters when subordinate sub-graphs overlap: a shared
/// subordinate is priced once and reused, never recomputed. A context must
/// not be reused across unrelated runs; build a fresh one per request.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::CalculationContext;
/// use chrono::NaiveDate;
///
/// let ctx = CalculationContext::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
/// assert_eq!(ctx.cached_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct CalculationContext {
    as_of: NaiveDate,
    cache: HashMap<EmployeeId, Decimal>,
    in_progress: HashSet<EmployeeId>,
}

impl CalculationContext {
    /// Creates a context that computes salaries as of the given date.
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            cache: HashMap::new(),
            in_progress: HashSet::new(),
        }
    }

    /// Creates a context that computes salaries as of today (UTC).
    pub fn now() -> Self {
        Self::new(Utc::now().date_naive())
    }

    /// The date salaries are computed as of.
    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Returns the cached salary for an identity, if one was computed in
    /// this run.
    pub fn cached(&self, id: EmployeeId) -> Option<Decimal> {
        self.cache.get(&id).copied()
    }

    /// Number of distinct employees priced so far in this run.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Marks an identity as being computed.
    ///
    /// Re-entering an identity already in progress means the recursion has
    /// looped back onto itself, so this reports [`EngineError::CycleDetected`]
    /// instead of letting the stack grow without bound.
    pub(crate) fn begin(&mut self, id: EmployeeId) -> EngineResult<()> {
        if !self.in_progress.insert(id) {
            return Err(EngineError::CycleDetected { id });
        }
        Ok(())
    }

    /// Records a computed salary and clears the in-progress mark.
    pub(crate) fn finish(&mut self, id: EmployeeId, salary: Decimal) {
        self.in_progress.remove(&id);
        self.cache.insert(id, salary);
    }

    /// Clears the in-progress mark without caching, after a failed
    /// computation.
    pub(crate) fn abort(&mut self, id: EmployeeId) {
        self.in_progress.remove(&id);
    }
}
