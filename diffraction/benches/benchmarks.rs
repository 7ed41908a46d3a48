use criterion::{criterion_group, criterion_main, Criterion};
use diffraction::{bullington, fresnel_kirchhoff, max_impingement, Hertz, Link, Meters, Profile};

/// A rolling ~9 km profile at 90 m steps.
fn rolling_terrain() -> Vec<f64> {
    (0..100)
        .map(|i| {
            let i = f64::from(i);
            250.0 + 40.0 * (i / 7.0).sin() + 15.0 * (i / 3.0).cos()
        })
        .collect()
}

fn reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reductions");
    let profile = Profile::new(310.0, 295.0, 8_910.0, rolling_terrain()).unwrap();
    let freq = Hertz::from_mhz(900.0);

    group.bench_with_input("fresnel_kirchhoff", &profile, |b, p| {
        b.iter(|| fresnel_kirchhoff(p))
    });
    group.bench_with_input("bullington", &profile, |b, p| b.iter(|| bullington(p)));
    group.bench_with_input("max_impingement", &profile, |b, p| {
        b.iter(|| max_impingement(p, freq, 10.0))
    });
}

fn analysis(c: &mut Criterion) {
    let link = Link::builder()
        .freq(Hertz::from_mhz(900.0))
        .distance(Meters::new(8_910.0))
        .terrain(rolling_terrain())
        .start_alt(30.0)
        .end_alt(20.0)
        .build()
        .unwrap();

    c.bench_function("analyze", |b| b.iter(|| link.analyze()));
}

criterion_group!(benches, reductions, analysis);
criterion_main!(benches);
