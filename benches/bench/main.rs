// std imports
use std::{
    alloc::System,
    cmp::{max, min},
    hint::black_box,
    time::{Duration, Instant},
};

// third-party imports
use criterion::{BatchSize, Bencher, criterion_main};
use stats_alloc::{INSTRUMENTED_SYSTEM, StatsAlloc};

#[global_allocator]
static GA: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

const GROUP: &str = "globber";
const ND: &str = ":"; // name delimiter

mod alloc;
mod compile;
mod matching;

criterion_main!(matching::benches, compile::benches, alloc::benches);

trait BencherExt {
    fn iter_batched_fixed<I, O, S, R>(&mut self, setup: S, routine: R, size: BatchSize)
    where
        S: FnMut() -> I,
        R: FnMut(I) -> O;
}

impl<'a> BencherExt for Bencher<'a> {
    #[inline(never)]
    fn iter_batched_fixed<I, O, S, R>(&mut self, mut setup: S, mut routine: R, size: BatchSize)
    where
        S: FnMut() -> I,
        R: FnMut(I) -> O,
    {
        self.iter_custom(|iters| {
            let mut n = iters;
            let k = iters_per_batch(size, n);
            assert!(k != 0, "batch size must not be zero");

            let mut total = Duration::from_nanos(0);

            while n > 0 {
                let k = min(k as u64, n) as usize;
                let mut inputs = black_box((0..k).map(|_| setup()).collect::<Vec<_>>());

                let start = Instant::now();
                for _ in 0..k {
                    black_box(routine(inputs.pop().unwrap()));
                }
                let elapsed = start.elapsed();

                let mut inputs = black_box((0..k).map(|_| setup()).collect::<Vec<_>>());

                let start = Instant::now();
                for _ in 0..k {
                    black_box(inputs.pop().unwrap());
                }
                let overhead = start.elapsed();

                total += elapsed - min(elapsed, overhead);

                n -= k as u64;
            }

            max(total, Duration::from_nanos(1))
        });
    }
}

fn iters_per_batch(size: BatchSize, iters: u64) -> usize {
    let size = match size {
        BatchSize::SmallInput => iters.div_ceil(10),
        BatchSize::LargeInput => iters.div_ceil(1000),
        BatchSize::PerIteration => 1,
        BatchSize::NumBatches(batches) => iters.div_ceil(batches),
        BatchSize::NumIterations(size) => size,
        BatchSize::__NonExhaustive => panic!("__NonExhaustive is not a valid BatchSize."),
    };
    usize::try_from(size).unwrap()
}

/// Glob patterns with their fixtures, the last field tells whether the fixture should match.
const SAMPLES: &[(&str, &str, &str, bool)] = &[
    ("all", "[a-z][!a-x]*cat*[h][!b]*eyes*", "my cat has very bright eyes", true),
    ("plain", "google.com", "google.com", true),
    ("multiple", "https://*.google.*", "https://account.google.com", true),
    (
        "alternatives",
        "{https://*.google.*,*yandex.*,*yahoo.*,*mail.ru}",
        "http://yahoo.com",
        true,
    ),
    (
        "alternatives-suffix",
        "{https://*gobwas.com,http://exclude.gobwas.com}",
        "https://safe.gobwas.com",
        true,
    ),
    ("combine-lite", "{abc*def,abc?def,abc[zte]def}", "abczdef", true),
    ("combine-hard", "{abc*[a-c]def,abc?[d-g]def,abc[zte]?def}", "abczqdef", true),
    ("prefix", "abc*", "abcdef", true),
    ("suffix", "*def", "abcdef", true),
    ("prefix-suffix", "ab*ef", "abcdef", true),
    ("contains", "**bright**", "my cat has very bright eyes", true),
    ("mismatch", "* ?at * eyes", "my dog has very bright ears", false),
];
