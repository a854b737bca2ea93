use aabb_physics::{PhysicsWorld, RigidBody, SimulableEntity, Vector2};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// A floor plus `count` falling crates spread along it
fn build_world(count: usize) -> PhysicsWorld {
    let mut world = PhysicsWorld::new();

    let floor = world.add_entity(SimulableEntity::new(Vector2::new(0.0, 500.0)).with_footprint(10_000.0, 20.0));
    world
        .register_body(floor, RigidBody::new_static())
        .expect("floor has a footprint");

    for i in 0..count {
        let position = Vector2::new(i as f32 * 12.0, -((i % 7) as f32) * 15.0);
        let entity = world.add_entity(SimulableEntity::new(position).with_footprint(10.0, 10.0));
        world
            .register_body(entity, RigidBody::new_dynamic(1.0).expect("positive mass"))
            .expect("crate has a footprint");
    }

    world
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for count in [16usize, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut world = build_world(count);
            b.iter(|| world.tick(black_box(1.0 / 60.0)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
