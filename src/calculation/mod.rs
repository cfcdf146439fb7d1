//! Calculation logic for the Salary Calculation Engine.
//!
//! This module contains the per-role bonus rules, tenure computation,
//! currency rounding, the per-run calculation context and the calculator
//! that ties them together.

mod calculator;
mod context;
mod individual;
mod manager;
mod rounding;
mod sales;
mod tenure;
mod tenure_bonus;

pub use calculator::SalaryCalculator;
pub use context::CalculationContext;
pub use individual::calculate_individual_salary;
pub use manager::calculate_manager_salary;
pub use rounding::{CURRENCY_DP, round_currency};
pub use sales::calculate_sales_salary;
pub use tenure::tenure_years;
pub use tenure_bonus::{tenure_bonus_multiplier, tenure_bonus_pct};
