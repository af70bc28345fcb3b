use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dimensional::dynamic::DynQuantity;
use dimensional::quantities::{Energy, Length, Mass, Time, Velocity};
use dimensional::registry::UnitRegistry;
use dimensional::units::{Kilograms, Kilometers, Meters, Seconds};

fn bench_typed_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed");
    let lengths: Vec<Length> = (0..10_000).map(|i| Length::new::<Kilometers>(1.0 + f64::from(i) * 1.0e-3)).collect();
    let time = Time::new::<Seconds>(3.0);
    let mass = Mass::new::<Kilograms>(2.0);

    group.bench_function(BenchmarkId::new("kinetic_energy", lengths.len()), |b| {
        b.iter(|| {
            lengths
                .iter()
                .map(|&d| {
                    let v: Velocity = d / time;
                    0.5 * mass * v * v
                })
                .sum::<Energy>()
        });
    });
    group.finish();
}

fn bench_dynamic_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic");
    let lengths: Vec<DynQuantity> = (0..10_000)
        .map(|i| DynQuantity::from(Length::new::<Meters>(f64::from(i))))
        .collect();
    let time = DynQuantity::from(Time::new::<Seconds>(3.0));

    group.bench_function(BenchmarkId::new("checked_sum", lengths.len()), |b| {
        b.iter(|| {
            lengths
                .iter()
                .map(|&d| d.try_div(time))
                .try_fold(DynQuantity::from(Velocity::ZERO), |acc, v| acc.try_add(v?))
        });
    });
    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    group.bench_function("build_standard", |b| b.iter(UnitRegistry::standard));

    group.bench_function("parse_compound", |b| {
        b.iter_batched(
            UnitRegistry::standard,
            |units| {
                let _ = units.parse(black_box("kg*m^2/(s^3*A)"));
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_typed_arithmetic, bench_dynamic_arithmetic, bench_registry);
criterion_main!(benches);
