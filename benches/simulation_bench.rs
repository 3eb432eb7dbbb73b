use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rigid_physics::{BodySet, Physics, PhysicsConfig, RigidShape, Transform, Vec2};

fn ground() -> RigidShape {
    RigidShape::rectangle(Transform::new(Vec2::ZERO, 0.0, 40.0, 1.0), 40.0, 1.0).with_mass(0.0)
}

// --- Helper for creating stack benchmarks ---
fn circle_stack(num_circles: usize) -> BodySet {
    let radius = 0.5;
    let mut set = BodySet::new();
    set.add(ground());
    for i in 0..num_circles {
        let y_pos = 0.5 + radius + (i as f64 * (radius * 2.1)); // slight gap
        set.add(RigidShape::circle(Transform::new(Vec2::new(0.0, y_pos), 0.0, radius, radius), radius));
    }
    set
}

// --- Helper for a pile of mixed shapes ---
fn mixed_pile(num_bodies: usize) -> BodySet {
    let mut set = BodySet::new();
    set.add(ground());
    for i in 0..num_bodies {
        let x = (i % 10) as f64 * 2.2 - 10.0;
        let y = 2.0 + (i / 10) as f64 * 2.2;
        let body = if i % 2 == 0 {
            RigidShape::circle(Transform::new(Vec2::new(x, y), 0.0, 0.9, 0.9), 0.9)
        } else {
            RigidShape::rectangle(Transform::new(Vec2::new(x, y), 0.4, 1.6, 1.6), 1.6, 1.6)
        };
        set.add(body);
    }
    set
}

fn simulate(physics: &Physics, set: &mut BodySet, steps: usize) {
    for _ in 0..steps {
        physics.update(set);
        physics.process_set(set, None);
    }
}

// Benchmark for a stack of circles falling under gravity
fn bench_circle_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_stack");
    let config = PhysicsConfig {
        relaxation_count: 4, // fewer sweeps for benchmark speed
        ..PhysicsConfig::default()
    };
    let physics = Physics::new(config);

    for num_circles in [10, 50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_circles), num_circles, |b, &n| {
            b.iter(|| {
                let mut set = circle_stack(black_box(n));
                simulate(&physics, &mut set, 30);
            });
        });
    }
    group.finish();
}

// Benchmark for circles and boxes piling up, with and without rotation
fn bench_mixed_pile(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_pile");

    for rotational in [false, true] {
        let physics = Physics::new(PhysicsConfig {
            rotational_response: rotational,
            ..PhysicsConfig::default()
        });
        let label = if rotational { "rotational" } else { "linear" };
        group.bench_with_input(BenchmarkId::new(label, 60), &60, |b, &n| {
            b.iter(|| {
                let mut set = mixed_pile(black_box(n));
                simulate(&physics, &mut set, 30);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_circle_stack, bench_mixed_pile);
criterion_main!(benches);
