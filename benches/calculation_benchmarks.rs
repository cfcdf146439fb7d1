//! Performance benchmarks for the Salary Calculation Engine.
//!
//! These verify that memoization keeps batch and deep-hierarchy pricing
//! linear in the number of employees:
//! - Flat batch of independent employees
//! - Deep manager chain (each level priced once)
//! - Diamond-heavy sales graph where every level shares subordinates
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use salary_engine::calculation::{CalculationContext, SalaryCalculator};
use salary_engine::models::{Employee, EmployeeId, Hierarchy};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

fn join_date(years_ago: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026 - years_ago, 1, 1).unwrap()
}

/// A flat roster of unrelated individual contributors.
fn flat_roster(count: usize) -> (Hierarchy, Vec<EmployeeId>) {
    let employees: Vec<Employee> = (0..count)
        .map(|i| Employee::individual(format!("emp_{i:04}"), join_date((i % 20) as i32)))
        .collect();
    let ids = employees.iter().map(|e| e.id).collect();
    (Hierarchy::from_employees(employees).unwrap(), ids)
}

/// A single reporting chain of managers, `depth` levels deep.
fn manager_chain(depth: usize) -> (Hierarchy, EmployeeId) {
    let mut employees = vec![Employee::individual("leaf", join_date(5))];
    for level in 0..depth {
        let below = employees.last().expect("chain is never empty").id;
        employees.push(Employee::manager(
            format!("mgr_{level:03}"),
            join_date(3),
            vec![below],
        ));
    }
    let top = employees.last().expect("chain is never empty").id;
    (Hierarchy::from_employees(employees).unwrap(), top)
}

/// A layered sales graph where every node reports to every node one layer
/// up, so each subordinate is reachable along many paths.
fn diamond_lattice(layers: usize, width: usize) -> (Hierarchy, EmployeeId) {
    let mut employees: Vec<Employee> = (0..width)
        .map(|i| Employee::individual(format!("base_{i:02}"), join_date(8)))
        .collect();
    let mut previous: Vec<EmployeeId> = employees.iter().map(|e| e.id).collect();

    for layer in 1..layers {
        let mut current = Vec::with_capacity(width);
        for i in 0..width {
            let node = Employee::sales(format!("sales_{layer:02}_{i:02}"), join_date(4), previous.clone());
            current.push(node.id);
            employees.push(node);
        }
        previous = current;
    }

    let top = Employee::sales("top", join_date(10), previous);
    let top_id = top.id;
    employees.push(top);
    (Hierarchy::from_employees(employees).unwrap(), top_id)
}

fn bench_flat_batch(c: &mut Criterion) {
    let calculator = SalaryCalculator::with_default_rules();
    let mut group = c.benchmark_group("flat_batch");

    for count in [10, 100, 1000] {
        let (hierarchy, ids) = flat_roster(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                calculator
                    .batch_calculate(black_box(&hierarchy), black_box(&ids), as_of())
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_manager_chain(c: &mut Criterion) {
    let calculator = SalaryCalculator::with_default_rules();
    let mut group = c.benchmark_group("manager_chain");

    for depth in [10, 50, 200] {
        let (hierarchy, top) = manager_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| {
                let mut ctx = CalculationContext::new(as_of());
                calculator
                    .calculate(black_box(&hierarchy), &mut ctx, top)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_diamond_lattice(c: &mut Criterion) {
    let calculator = SalaryCalculator::with_default_rules();
    let mut group = c.benchmark_group("diamond_lattice");

    // Without memoization the path count here is width^layers.
    for (layers, width) in [(4, 4), (6, 6), (8, 8)] {
        let (hierarchy, top) = diamond_lattice(layers, width);
        let label = format!("{layers}x{width}");
        group.bench_with_input(BenchmarkId::from_parameter(label), &layers, |b, _| {
            b.iter(|| {
                let mut ctx = CalculationContext::new(as_of());
                calculator
                    .calculate(black_box(&hierarchy), &mut ctx, top)
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_flat_batch,
    bench_manager_chain,
    bench_diamond_lattice
);
criterion_main!(benches);
