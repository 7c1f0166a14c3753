// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, criterion_group};

// local imports
use super::{GROUP, ND, SAMPLES};

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{}{}compile", GROUP, ND));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    for &(name, pattern, _, _) in SAMPLES {
        c.bench_function(BenchmarkId::new("compile", name), |b| {
            b.iter(|| wildcard::compile(black_box(pattern), ['/']).unwrap());
        });
    }
}
