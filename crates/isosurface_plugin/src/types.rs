//! Core data types for marching cubes extraction.

use glam::Vec3A;
use thiserror::Error;

/// One extracted triangle, corner positions in emission order.
pub type Triangle = [Vec3A; 3];

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Cube of the given half-width centered on the origin.
  pub fn centered_cube(half_width: f32) -> Self {
    Self {
      min: [-half_width; 3],
      max: [half_width; 3],
    }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Expand AABB to include another AABB.
  #[inline]
  pub fn merge(&mut self, other: &MinMaxAABB) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(other.min[i]);
      self.max[i] = self.max[i].max(other.max[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Extraction result: a flat, non-indexed triangle soup.
///
/// Consecutive position triples form triangles; winding follows the
/// triangulation table rows that emitted them. There is no vertex
/// deduplication, so `positions.len()` is always a multiple of 3.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
  /// Vertex positions, three per triangle, in emission order.
  pub positions: Vec<[f32; 3]>,

  /// Bounding box encompassing all emitted vertices.
  pub bounds: MinMaxAABB,
}

impl TriangleMesh {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.positions.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  /// Number of emitted vertices (3 per triangle, not deduplicated).
  pub fn vertex_count(&self) -> usize {
    self.positions.len()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.positions.len() / 3
  }

  /// Append one triangle, growing the bounds.
  #[inline]
  pub fn push_triangle(&mut self, triangle: Triangle) {
    for corner in triangle {
      let position = corner.to_array();
      self.bounds.encapsulate(position);
      self.positions.push(position);
    }
  }

  /// Move all triangles of `other` onto the end of this mesh.
  pub fn append(&mut self, other: &mut TriangleMesh) {
    self.positions.append(&mut other.positions);
    self.bounds.merge(&other.bounds);
    other.bounds = MinMaxAABB::empty();
  }

  /// Iterate triangles as position triples.
  pub fn triangles(&self) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
    self
      .positions
      .chunks_exact(3)
      .map(|tri| [tri[0], tri[1], tri[2]])
  }
}

/// Invalid extraction grid description.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GridConfigError {
  /// Fewer than 2 sample points per axis leaves no cells to march.
  #[error("grid resolution must be at least 2 samples per axis, got {resolution}")]
  ResolutionTooSmall { resolution: usize },

  /// A bounds corner contains NaN or infinity.
  #[error("grid bounds must be finite: min {min:?}, max {max:?}")]
  NonFiniteBounds { min: [f32; 3], max: [f32; 3] },

  /// Bounds are inverted or collapsed on one axis.
  #[error("grid bounds are empty on axis {axis}: min {min} >= max {max}")]
  EmptyAxis { axis: char, min: f32, max: f32 },
}

/// Sampling grid for extraction.
///
/// `resolution` counts sample points per axis, so a grid has
/// `resolution - 1` cells per axis and per-axis step
/// `(max - min) / (resolution - 1)`. Defaults to 30 samples over the
/// `[-1, 1]` cube.
#[derive(Clone, Copy, Debug)]
pub struct GridConfig {
  /// Sample points per axis.
  pub resolution: usize,

  /// World-space box the grid spans. Samples sit on the faces.
  pub bounds: MinMaxAABB,
}

impl Default for GridConfig {
  fn default() -> Self {
    Self {
      resolution: 30,
      bounds: MinMaxAABB::centered_cube(1.0),
    }
  }
}

impl GridConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_resolution(mut self, resolution: usize) -> Self {
    self.resolution = resolution;
    self
  }

  pub fn with_bounds(mut self, min: [f32; 3], max: [f32; 3]) -> Self {
    self.bounds = MinMaxAABB::new(min, max);
    self
  }

  /// Cells per axis. Zero when the resolution leaves nothing to march.
  #[inline]
  pub fn cells_per_axis(&self) -> usize {
    self.resolution.saturating_sub(1)
  }

  /// Total cell count of the grid.
  #[inline]
  pub fn cell_count(&self) -> usize {
    let cells = self.cells_per_axis();
    cells * cells * cells
  }

  /// Per-axis distance between adjacent sample points.
  #[inline]
  pub fn step(&self) -> Vec3A {
    let cells = self.cells_per_axis().max(1) as f32;
    (Vec3A::from_array(self.bounds.max) - Vec3A::from_array(self.bounds.min)) / cells
  }

  /// World-space position of the sample at integer grid coordinates.
  #[inline]
  pub fn sample_position(&self, x: usize, y: usize, z: usize) -> Vec3A {
    Vec3A::from_array(self.bounds.min)
      + self.step() * Vec3A::new(x as f32, y as f32, z as f32)
  }

  /// Fail-fast check for callers that want config errors surfaced
  /// instead of an empty mesh.
  pub fn validate(&self) -> Result<(), GridConfigError> {
    let mut corners = self.bounds.min.iter().chain(self.bounds.max.iter());
    if !corners.all(|v| v.is_finite()) {
      return Err(GridConfigError::NonFiniteBounds {
        min: self.bounds.min,
        max: self.bounds.max,
      });
    }
    for axis in 0..3 {
      if self.bounds.min[axis] >= self.bounds.max[axis] {
        return Err(GridConfigError::EmptyAxis {
          axis: ['x', 'y', 'z'][axis],
          min: self.bounds.min[axis],
          max: self.bounds.max[axis],
        });
      }
    }
    if self.resolution < 2 {
      return Err(GridConfigError::ResolutionTooSmall {
        resolution: self.resolution,
      });
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
