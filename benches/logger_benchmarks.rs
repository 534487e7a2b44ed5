//! Criterion benchmarks for named_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use named_logger::prelude::*;
use std::fmt::Display;
use std::sync::Arc;

fn null_output() -> SharedOutput {
    Arc::new(|_: &str, _: LogLevel, message: &dyn Display| -> Result<()> {
        black_box(message);
        Ok(())
    })
}

fn registry_with(level: LogLevel) -> Registry {
    Registry::builder()
        .default_level(level)
        .default_output(null_output())
        .build()
}

// ============================================================================
// Registry Lookup Benchmarks
// ============================================================================

fn bench_registry_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_lookup");
    group.throughput(Throughput::Elements(1));

    let registry = registry_with(LogLevel::Warn);
    registry.get_logger("existing");

    group.bench_function("existing_name", |b| {
        b.iter(|| black_box(registry.get_logger(black_box("existing"))));
    });

    group.bench_function("fresh_registry_first_lookup", |b| {
        b.iter(|| {
            let registry = Registry::new();
            black_box(registry.get_logger("new"))
        });
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

#[allow(deprecated)]
fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let registry = registry_with(LogLevel::Warn);
    let logger = registry.get_logger("filter");

    group.bench_function("disabled_lazy", |b| {
        b.iter(|| {
            logger
                .debug(|| format!("expensive {}", black_box(42)))
                .unwrap();
        });
    });

    group.bench_function("disabled_eager", |b| {
        b.iter(|| {
            logger
                .log_eager(LogLevel::Debug, format!("expensive {}", black_box(42)))
                .unwrap();
        });
    });

    group.bench_function("enabled", |b| {
        b.iter(|| {
            logger
                .warn(|| format!("expensive {}", black_box(42)))
                .unwrap();
        });
    });

    group.bench_function("is_enabled", |b| {
        b.iter(|| black_box(logger.is_enabled(black_box(LogLevel::Info))));
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let registry = Arc::new(registry_with(LogLevel::Info));

    group.bench_function("multi_thread_4", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let registry = Arc::clone(&registry);
                    std::thread::spawn(move || {
                        let logger = registry.get_logger(&format!("worker-{}", t));
                        logger.info(|| black_box("Concurrent message")).unwrap();
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_registry_lookup,
    bench_level_filtering,
    bench_concurrent_logging
);

criterion_main!(benches);
