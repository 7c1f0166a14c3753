// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group};
use wildcard::Match;

// local imports
use super::{BencherExt, GROUP, ND, SAMPLES};

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    bench_with::<wildcard::Matcher>(c, "wildcard");
    bench_with::<wildmatch::WildMatch>(c, "wildmatch");
    bench_samples(c);
}

/// Compares with `wildmatch` on patterns both understand.
fn bench_with<Pattern: Wildcard>(c: &mut Criterion, title: &str) {
    let mut c = c.benchmark_group(format!("{}{}matching", GROUP, ND));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    const P1X: (&str, &str) = ("1x", "_*");
    const P27X: (&str, &str) = ("27x", "SOME_VERY_VERY_LONG_PREFIX_*");
    const PQ: (&str, &str) = ("q", "?TEST*NAME");

    let variants = [
        ("short", "_TEST", P1X, true),
        ("short", "TEST", P1X, false),
        ("long", "_TEST_SOME_VERY_VERY_LONG_NAME", P1X, true),
        ("long", "SOME_VERY_VERY_LONG_PREFIX_AND_SOMEWHAT", P27X, true),
        ("long", "TEST_SOME_VERY_VERY_LONG_NAME", P27X, false),
        ("long", "_TEST_SOME_VERY_VERY_LONG_NAME", PQ, true),
    ];

    for (name, input, (pname, pattern), expected) in &variants {
        let function = format!("{}{}matches", title, ND);
        let param = [
            *name,
            *pname,
            if *expected { "pos" } else { "neg" },
            &input.len().to_string(),
        ]
        .join(ND);
        let pattern = Pattern::new(pattern);
        let setup = || String::from(*input);
        let routine = |input: String| black_box(&pattern).matches(&input);

        assert_eq!(routine(setup()), *expected);

        c.throughput(Throughput::Bytes(input.len() as u64));
        c.bench_function(BenchmarkId::new(function, param), |b| {
            b.iter_batched_fixed(setup, routine, BatchSize::NumIterations(16384));
        });
    }
}

/// Full pattern syntax, compiled once and matched many times.
fn bench_samples(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{}{}samples", GROUP, ND));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    for &(name, pattern, fixture, expected) in SAMPLES {
        let matcher = wildcard::compile(pattern, []).unwrap();
        assert_eq!(Match::matches(&matcher, fixture), expected, "{} on {}", matcher, fixture);

        c.throughput(Throughput::Bytes(fixture.len() as u64));
        c.bench_function(BenchmarkId::new("matches", name), |b| {
            b.iter(|| Match::matches(black_box(&matcher), black_box(fixture)));
        });
    }
}

// ---

trait Wildcard {
    fn new(pattern: &'static str) -> Self;
    fn matches(&self, what: &str) -> bool;
}

impl Wildcard for wildcard::Matcher {
    #[inline(always)]
    fn new(pattern: &'static str) -> Self {
        wildcard::compile(pattern, []).unwrap()
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        Match::matches(self, what)
    }
}

impl Wildcard for wildmatch::WildMatch {
    #[inline(always)]
    fn new(pattern: &str) -> Self {
        Self::new(pattern)
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        self.matches(what)
    }
}
