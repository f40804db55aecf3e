//! Evaluation engine benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fieldcheck_bench::fixtures::{deferred_spec, generate_records, mixed_spec, sync_spec, Scale};
use fieldcheck_core::{Execution, SyncEvaluation, SyncValidator, Validator, ValidatorConfig};
use tokio::runtime::Runtime;

const SCALES: [Scale; 3] = [Scale::Tiny, Scale::Small, Scale::Medium];

fn bench_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync");

    let eager = SyncValidator::new(sync_spec());
    let short = SyncValidator::with_config(
        sync_spec(),
        ValidatorConfig::new("bench").with_sync_evaluation(SyncEvaluation::ShortCircuit),
    );

    for scale in SCALES {
        let records = generate_records(scale);
        group.throughput(Throughput::Elements(records.len() as u64));

        group.bench_with_input(BenchmarkId::new("eager", scale.name()), &records, |b, records| {
            b.iter(|| {
                for fields in records {
                    black_box(eager.validate(fields).unwrap());
                }
            });
        });

        group.bench_with_input(
            BenchmarkId::new("short_circuit", scale.name()),
            &records,
            |b, records| {
                b.iter(|| {
                    for fields in records {
                        black_box(short.validate(fields).unwrap());
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_async(c: &mut Criterion) {
    let mut group = c.benchmark_group("async");
    let runtime = Runtime::new().unwrap();

    let inline = Validator::new(deferred_spec());
    let spawned = Validator::with_config(
        deferred_spec(),
        ValidatorConfig::new("bench").with_execution(Execution::Spawn),
    );

    for scale in [Scale::Tiny, Scale::Small] {
        let records = generate_records(scale);
        group.throughput(Throughput::Elements(records.len() as u64));

        group.bench_with_input(BenchmarkId::new("inline", scale.name()), &records, |b, records| {
            b.to_async(&runtime).iter(|| async {
                for fields in records {
                    black_box(inline.validate(fields).await.unwrap());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("spawn", scale.name()), &records, |b, records| {
            b.to_async(&runtime).iter(|| async {
                for fields in records {
                    black_box(spawned.validate(fields).await.unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("mode");
    let runtime = Runtime::new().unwrap();

    let records = generate_records(Scale::Small);
    let immediate = SyncValidator::new(sync_spec());
    let mixed = Validator::new(mixed_spec());

    group.bench_function("all_immediate", |b| {
        b.iter(|| {
            for fields in &records {
                black_box(immediate.validate(fields).unwrap());
            }
        });
    });

    group.bench_function("one_deferred", |b| {
        b.to_async(&runtime).iter(|| async {
            for fields in &records {
                black_box(mixed.validate(fields).await.unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_sync, bench_async, bench_mode);
criterion_main!(benches);
