// std imports
use std::hint::black_box;

// third-party imports
use criterion::{BenchmarkId, Criterion, criterion_group};
use stats_alloc::Region;
use wildcard::Match;

// local imports
use super::{GA, GROUP, ND, SAMPLES};

criterion_group!(benches, bench);

/// Reports heap activity of matching, which should settle once the segment pool is warm.
fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{}{}alloc", GROUP, ND));

    for &(name, pattern, fixture, expected) in SAMPLES {
        let matcher = wildcard::compile(pattern, []).unwrap();
        assert_eq!(matcher.matches(fixture), expected);

        let mut n = 0;
        let mut change = None;
        c.bench_function(BenchmarkId::new("matches", name), |b| {
            let reg = Region::new(GA);
            b.iter(|| {
                black_box(matcher.matches(black_box(fixture)));
                n += 1;
            });
            change = Some(reg.change());
        });
        println!("allocations for {} ({} iterations): {:#?}", name, n, change);
    }
}
