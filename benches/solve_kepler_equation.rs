use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use almagest::kepler::{solve_kepler, solve_kepler_detailed, KeplerSettings};

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

fn random_cases(rng: &mut StdRng, samples: usize, e_min: f64, e_max: f64) -> Vec<(f64, f64)> {
    (0..samples)
        .map(|_| (rand_angle(rng), rng.random_range(e_min..e_max)))
        .collect()
}

/// Planetary regime: e ∈ [0.0, 0.25)
fn bench_planetary(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("solve_kepler_equation/planetary_e<0.25", |b| {
        b.iter_batched(
            || random_cases(&mut rng, samples, 0.0, 0.25),
            |cases| {
                for (m, e) in cases {
                    black_box(solve_kepler(black_box(m), black_box(e)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// High-eccentricity (still elliptic): e ∈ [0.7, 0.95)
fn bench_high_e(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;
    let settings = KeplerSettings::default();

    c.bench_function("solve_kepler_equation/high_e_0.7..0.95", |b| {
        b.iter_batched(
            || random_cases(&mut rng, samples, 0.7, 0.95),
            |cases| {
                for (m, e) in cases {
                    black_box(solve_kepler_detailed(black_box(m), black_box(e), &settings));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Fixed case close to perihelion with a high eccentricity, where Newton needs the most steps.
fn bench_fixed_stress(c: &mut Criterion) {
    let m = 0.05_f64;
    let e = 0.95_f64;
    let settings = KeplerSettings::default();

    c.bench_function("solve_kepler_equation/fixed_stress_case", |b| {
        b.iter(|| black_box(solve_kepler_detailed(black_box(m), black_box(e), &settings)))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_planetary, bench_high_e, bench_fixed_stress
);
criterion_main!(benches);
