use budgetsheet::aggregation::summarize;
use budgetsheet::extract::extract_pairs;
use budgetsheet::table::build_table;
use budgetsheet_core::types::{ItemPair, TableMode};
use budgetsheet_pricing::CostCalculator;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn create_price_list(count: usize) -> String {
    let mut lines = Vec::with_capacity(count * 2);
    for i in 0..count {
        lines.push(format!("Item number {i}"));
        if i % 3 == 0 {
            lines.push(format!("{}.{:02}", i % 500, i % 100));
        } else {
            lines.push(format!("{}", (i * 7) % 900));
        }
    }
    lines.join("\n")
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    for size in [100, 1_000, 10_000] {
        let content = create_price_list(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| extract_pairs(black_box(content)).unwrap())
        });
    }
    group.finish();
}

fn bench_table_and_summary(c: &mut Criterion) {
    let calculator = CostCalculator::default();
    let pairs: Vec<ItemPair> = extract_pairs(&create_price_list(5_000)).unwrap();
    let records = calculator.compute_costs(&pairs).unwrap();

    c.bench_function("compute_costs_5000", |b| {
        b.iter(|| calculator.compute_costs(black_box(&pairs)).unwrap())
    });

    for mode in [TableMode::Raw, TableMode::Formatted] {
        c.bench_function(&format!("build_and_summarize_{mode}"), |b| {
            b.iter(|| {
                let table = build_table(black_box(&records), mode);
                summarize(&table).unwrap()
            })
        });
    }
}

criterion_group!(benches, bench_extract, bench_table_and_summary);
criterion_main!(benches);
