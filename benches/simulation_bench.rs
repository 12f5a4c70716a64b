use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use impulse2d::{BodyType, Material, Shape, Vec2, World};

const DT: f64 = 1.0 / 60.0;
const STEPS: usize = 30;
const SUBSTEPS: u32 = 4;

fn world_with_ground() -> World {
    let mut world = World::new();
    world.create_body(
        Shape::rect(200.0, 1.0),
        Material::default(),
        BodyType::Static,
        Vec2::new(0.0, -0.5),
        0.0,
    );
    world
}

// --- Helper for the falling circle stack ---
fn run_circle_stack(world: &mut World, num_circles: usize) {
    let radius = 0.5;
    let material = Material::new(1.0, 0.4, 0.3, 0.2);

    for i in 0..num_circles {
        let y = radius + i as f64 * (radius * 2.1); // Stack with slight gap
        world.create_body(
            Shape::circle(radius),
            material,
            BodyType::Dynamic,
            Vec2::new(0.0, y),
            0.0,
        );
    }

    for _ in 0..STEPS {
        world.step(black_box(DT), SUBSTEPS);
    }
}

// --- Helper for the box pile ---
fn run_box_pile(world: &mut World, num_boxes: usize) {
    let material = Material::new(1.0, 0.5, 0.4, 0.1);

    // Loose grid of boxes dropped together
    for i in 0..num_boxes {
        let column = (i % 10) as f64;
        let row = (i / 10) as f64;
        world.create_body(
            Shape::rect(0.9, 0.9),
            material,
            BodyType::Dynamic,
            Vec2::new(column - 5.0, 0.5 + row * 1.1),
            0.0,
        );
    }

    for _ in 0..STEPS {
        world.step(black_box(DT), SUBSTEPS);
    }
}

fn bench_circle_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_stack");

    for num_circles in [10, 50, 200] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_circles),
            &num_circles,
            |b, &n| {
                b.iter(|| {
                    let mut world = world_with_ground();
                    run_circle_stack(&mut world, black_box(n));
                });
            },
        );
    }

    group.finish();
}

fn bench_box_pile(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_pile");

    for num_boxes in [10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(num_boxes), &num_boxes, |b, &n| {
            b.iter(|| {
                let mut world = world_with_ground();
                run_box_pile(&mut world, black_box(n));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_circle_stack, bench_box_pile);
criterion_main!(benches);
