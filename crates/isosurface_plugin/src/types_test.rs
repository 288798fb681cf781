use glam::Vec3A;

use super::*;

// AABB tests
#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  aabb.encapsulate([1.0, 2.0, 3.0]);
  aabb.encapsulate([-1.0, -2.0, -3.0]);

  assert_eq!(aabb.min, [-1.0, -2.0, -3.0]);
  assert_eq!(aabb.max, [1.0, 2.0, 3.0]);
  assert!(aabb.is_valid());
}

#[test]
fn test_aabb_empty_is_invalid() {
  assert!(!MinMaxAABB::empty().is_valid());
}

#[test]
fn test_aabb_merge() {
  let mut a = MinMaxAABB::new([0.0; 3], [1.0; 3]);
  let b = MinMaxAABB::new([-2.0; 3], [0.5; 3]);
  a.merge(&b);

  assert_eq!(a.min, [-2.0; 3]);
  assert_eq!(a.max, [1.0; 3]);
}

#[test]
fn test_aabb_centered_cube() {
  let aabb = MinMaxAABB::centered_cube(1.0);
  assert_eq!(aabb.min, [-1.0; 3]);
  assert_eq!(aabb.max, [1.0; 3]);
}

// Mesh tests
#[test]
fn test_mesh_push_triangle() {
  let mut mesh = TriangleMesh::new();
  mesh.push_triangle([
    Vec3A::new(0.0, 0.0, 0.0),
    Vec3A::new(1.0, 0.0, 0.0),
    Vec3A::new(0.0, 1.0, 0.0),
  ]);

  assert_eq!(mesh.vertex_count(), 3);
  assert_eq!(mesh.triangle_count(), 1);
  assert_eq!(mesh.positions[1], [1.0, 0.0, 0.0]);
  assert_eq!(mesh.bounds.min, [0.0, 0.0, 0.0]);
  assert_eq!(mesh.bounds.max, [1.0, 1.0, 0.0]);
}

#[test]
fn test_mesh_clear() {
  let mut mesh = TriangleMesh::new();
  mesh.push_triangle([Vec3A::ZERO, Vec3A::X, Vec3A::Y]);
  mesh.clear();

  assert!(mesh.is_empty());
  assert_eq!(mesh.triangle_count(), 0);
  assert!(!mesh.bounds.is_valid());
}

#[test]
fn test_mesh_append_keeps_order_and_bounds() {
  let mut first = TriangleMesh::new();
  first.push_triangle([Vec3A::ZERO, Vec3A::X, Vec3A::Y]);
  let mut second = TriangleMesh::new();
  second.push_triangle([Vec3A::splat(2.0), Vec3A::splat(3.0), Vec3A::splat(4.0)]);

  first.append(&mut second);

  assert_eq!(first.triangle_count(), 2);
  assert_eq!(first.positions[3], [2.0; 3]);
  assert_eq!(first.bounds.max, [4.0; 3]);
  assert!(second.is_empty());
}

#[test]
fn test_mesh_triangles_iterator() {
  let mut mesh = TriangleMesh::new();
  mesh.push_triangle([Vec3A::ZERO, Vec3A::X, Vec3A::Y]);
  mesh.push_triangle([Vec3A::Z, Vec3A::X, Vec3A::Y]);

  let triangles: Vec<_> = mesh.triangles().collect();
  assert_eq!(triangles.len(), 2);
  assert_eq!(triangles[1][0], [0.0, 0.0, 1.0]);
}

// Grid config tests
#[test]
fn test_grid_defaults() {
  let config = GridConfig::default();

  assert_eq!(config.resolution, 30);
  assert_eq!(config.bounds.min, [-1.0; 3]);
  assert_eq!(config.bounds.max, [1.0; 3]);
  assert_eq!(config.cells_per_axis(), 29);
  assert_eq!(config.cell_count(), 29 * 29 * 29);
}

#[test]
fn test_grid_builder() {
  let config = GridConfig::new()
    .with_resolution(5)
    .with_bounds([0.0; 3], [4.0; 3]);

  assert_eq!(config.resolution, 5);
  assert_eq!(config.step(), Vec3A::splat(1.0));
  assert_eq!(config.sample_position(0, 0, 0), Vec3A::ZERO);
  assert_eq!(config.sample_position(1, 2, 3), Vec3A::new(1.0, 2.0, 3.0));
}

#[test]
fn test_grid_default_step() {
  // 30 samples over [-1, 1]: 29 cells of width 2/29
  let config = GridConfig::default();
  let step = config.step();

  assert!((step.x - 2.0 / 29.0).abs() < 1e-6);
  assert_eq!(step.x, step.y);
  assert_eq!(step.y, step.z);
}

#[test]
fn test_grid_degenerate_resolution_has_no_cells() {
  assert_eq!(GridConfig::new().with_resolution(1).cells_per_axis(), 0);
  assert_eq!(GridConfig::new().with_resolution(0).cell_count(), 0);
}

#[test]
fn test_validate_accepts_default() {
  assert_eq!(GridConfig::default().validate(), Ok(()));
}

#[test]
fn test_validate_rejects_low_resolution() {
  let err = GridConfig::new().with_resolution(1).validate();
  assert_eq!(
    err,
    Err(GridConfigError::ResolutionTooSmall { resolution: 1 })
  );
}

#[test]
fn test_validate_rejects_inverted_bounds() {
  let err = GridConfig::new().with_bounds([1.0; 3], [-1.0; 3]).validate();
  assert!(matches!(err, Err(GridConfigError::EmptyAxis { axis: 'x', .. })));
}

#[test]
fn test_validate_rejects_non_finite_bounds() {
  let err = GridConfig::new()
    .with_bounds([0.0; 3], [f32::NAN; 3])
    .validate();
  assert!(matches!(err, Err(GridConfigError::NonFiniteBounds { .. })));
}
