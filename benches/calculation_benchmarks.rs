//! Performance benchmarks for the payroll registry.
//!
//! The registry deliberately uses linear scans over its collections, sized
//! for a single business's staff and work catalog. These benchmarks keep an
//! eye on where that assumption starts to hurt:
//! - Strategy calculation over growing work histories
//! - Full payroll aggregation over growing rosters
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_registry::calculation::PayStrategy;
use payroll_registry::models::WorkRecord;
use payroll_registry::registry::PayrollRegistry;

/// Builds a work history of the given length with varied pay amounts.
fn create_work_history(count: usize) -> Vec<WorkRecord> {
    (0..count)
        .map(|i| WorkRecord {
            name: format!("work_{}", i % 7),
            pay: Decimal::new(2500 + (i as i64 % 10) * 125, 2),
        })
        .collect()
}

/// Builds a registry with the given roster size, each employee holding a
/// short work history and a rotating strategy.
fn create_registry(employee_count: usize) -> PayrollRegistry {
    let mut registry = PayrollRegistry::new();
    for i in 0..5 {
        registry
            .add_work_type(format!("work_{}", i).as_str(), Decimal::new(5000 + i * 250, 2))
            .unwrap();
    }
    for i in 0..employee_count {
        let surname = format!("employee_{}", i);
        registry.add_employee(&surname).unwrap();
        for j in 0..8 {
            registry
                .record_work(&surname, &format!("work_{}", j % 5))
                .unwrap();
        }
        registry
            .set_employee_strategy(&surname, (i % 3 + 1) as u8)
            .unwrap();
    }
    registry
}

fn bench_strategy_calculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategy_calculation");

    for record_count in [1usize, 10, 100, 1000] {
        let works = create_work_history(record_count);
        group.throughput(Throughput::Elements(record_count as u64));

        for strategy in [
            PayStrategy::Standard,
            PayStrategy::Premium,
            PayStrategy::FixedBonus,
        ] {
            group.bench_with_input(
                BenchmarkId::new(strategy.display_name(), record_count),
                &works,
                |b, works| b.iter(|| black_box(strategy.calculate(black_box(works)))),
            );
        }
    }

    group.finish();
}

fn bench_payroll_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("payroll_aggregation");

    for employee_count in [10usize, 100, 500] {
        let registry = create_registry(employee_count);
        group.throughput(Throughput::Elements(employee_count as u64));

        group.bench_with_input(
            BenchmarkId::new("total_payroll", employee_count),
            &registry,
            |b, registry| b.iter(|| black_box(registry.total_payroll())),
        );

        group.bench_with_input(
            BenchmarkId::new("average_pay", employee_count),
            &registry,
            |b, registry| b.iter(|| black_box(registry.average_pay())),
        );
    }

    group.finish();
}

fn bench_employee_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("employee_lookup");

    for employee_count in [10usize, 100, 500] {
        let registry = create_registry(employee_count);
        // Worst case: the last registered employee
        let surname = format!("EMPLOYEE_{}", employee_count - 1);

        group.bench_with_input(
            BenchmarkId::new("compute_employee_pay", employee_count),
            &registry,
            |b, registry| {
                b.iter(|| black_box(registry.compute_employee_pay(black_box(&surname))))
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_strategy_calculation,
    bench_payroll_aggregation,
    bench_employee_lookup
);
criterion_main!(benches);
