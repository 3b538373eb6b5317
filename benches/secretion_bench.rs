use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plasmacyte::animation::secretion::{antibody_state, vesicle_state, spawn_pool};
use plasmacyte::options::{AnimationOptions, Options};
use plasmacyte::scene::Cell;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn particle_state_benchmark(c: &mut Criterion) {
    let opts = AnimationOptions::default();
    let mut rng = StdRng::seed_from_u64(11);
    let paths = plasmacyte::geometry::paths::generate(&mut rng, opts.path_count);
    let pool = spawn_pool(&mut rng, paths.len(), 1);
    let particle = &pool[0];
    let path = &paths[particle.path_index];

    c.bench_function("vesicle_state", |b| {
        b.iter(|| black_box(vesicle_state(black_box(1.7), particle, path, &opts)))
    });

    c.bench_function("antibody_state", |b| {
        b.iter(|| black_box(antibody_state(black_box(5.1), particle, path, &opts)))
    });
}

fn frame_snapshot_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_snapshot");

    for path_count in [4, 8, 16].iter() {
        let mut opts = Options::default();
        opts.animation.path_count = *path_count;
        let cell = Cell::new(42, opts).unwrap();

        group.bench_function(format!("{}_paths", path_count), |b| {
            let mut t = 0.0f32;
            b.iter(|| {
                t += 1.0 / 60.0;
                black_box(cell.frame(black_box(t)))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, particle_state_benchmark, frame_snapshot_benchmark);
criterion_main!(benches);
