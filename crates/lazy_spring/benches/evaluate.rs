use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazy_spring::{ManualClock, Spring, SpringConfig, Vec3};

fn bench_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("position");

    for (name, damping) in [("underdamped", 0.4), ("critical", 1.0), ("overdamped", 2.0)] {
        let clock = ManualClock::new(0.0);
        let mut spring = Spring::from_config(0.0_f64, SpringConfig::new(damping, 8.0))
            .with_clock(clock.clone());
        spring.set_target(100.0);
        clock.set(0.37);

        group.bench_function(name, |b| b.iter(|| black_box(&spring).position()));
    }

    group.finish();
}

fn bench_vec3_retarget(c: &mut Criterion) {
    let clock = ManualClock::new(0.0);
    let mut spring =
        Spring::from_config(Vec3::ZERO, SpringConfig::wobbly()).with_clock(clock.clone());
    let mut t = 0.0_f64;

    c.bench_function("vec3_retarget", |b| {
        b.iter(|| {
            t += 1.0 / 60.0;
            clock.set(t);
            spring.set_target(black_box(Vec3::new(t.sin(), t.cos(), 0.0)));
        })
    });
}

criterion_group!(benches, bench_position, bench_vec3_retarget);
criterion_main!(benches);
