//! Benchmark for marching cubes extraction: grid resolution scaling,
//! sequential vs parallel, and field complexity.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use isosurface_plugin::{extract, extract_parallel, GridConfig, MetaballsField, SphereField};

/// Min-union of five overlapping spheres, evaluated as a plain closure.
fn five_spheres(x: f32, y: f32, z: f32) -> f32 {
  let spheres = [
    ([-0.4f32, 0.0, 0.0], 0.5f32),
    ([0.4, 0.0, 0.0], 0.5),
    ([0.0, -0.4, 0.0], 0.35),
    ([0.0, 0.4, 0.0], 0.35),
    ([0.0, 0.0, 0.0], 0.6),
  ];

  let mut min_dist = f32::MAX;
  for (center, radius) in &spheres {
    let dx = x - center[0];
    let dy = y - center[1];
    let dz = z - center[2];
    let dist = (dx * dx + dy * dy + dz * dz).sqrt() - radius;
    min_dist = min_dist.min(dist);
  }
  min_dist
}

/// Baseline: one sphere at the default resolution.
fn bench_sphere_extraction(c: &mut Criterion) {
  let field = SphereField::default();
  let config = GridConfig::default();

  c.bench_function("isosurface_plugin::extract (30³ sphere)", |b| {
    b.iter(|| {
      let mesh = extract(black_box(&field), &config);
      black_box(mesh)
    })
  });
}

/// Sequential vs parallel across grid resolutions.
fn bench_resolution_scaling(c: &mut Criterion) {
  let mut group = c.benchmark_group("resolution_scaling");
  let field = SphereField::default();

  for resolution in [16, 30, 64] {
    let config = GridConfig::new().with_resolution(resolution);

    group.bench_with_input(
      BenchmarkId::new("sequential", format!("n={}", resolution)),
      &resolution,
      |b, _| b.iter(|| extract(black_box(&field), &config)),
    );

    group.bench_with_input(
      BenchmarkId::new("parallel", format!("n={}", resolution)),
      &resolution,
      |b, _| b.iter(|| extract_parallel(black_box(&field), &config)),
    );
  }

  group.finish();
}

/// Costlier fields: multi-sphere union closure and a metaball cluster.
fn bench_complex_fields(c: &mut Criterion) {
  let mut group = c.benchmark_group("complex_fields");
  let config = GridConfig::default();
  let blobs = MetaballsField::random(42, 5, 0.6);

  group.bench_function("five_spheres sequential", |b| {
    b.iter(|| extract(black_box(&five_spheres), &config))
  });

  group.bench_function("five_spheres parallel", |b| {
    b.iter(|| extract_parallel(black_box(&five_spheres), &config))
  });

  group.bench_function("metaballs sequential", |b| {
    b.iter(|| extract(black_box(&blobs), &config))
  });

  group.bench_function("metaballs parallel", |b| {
    b.iter(|| extract_parallel(black_box(&blobs), &config))
  });

  group.finish();
}

criterion_group!(
  benches,
  bench_sphere_extraction,
  bench_resolution_scaling,
  bench_complex_fields
);
criterion_main!(benches);
