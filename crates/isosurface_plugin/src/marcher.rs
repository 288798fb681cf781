//! Marching cubes extraction core.
//!
//! Converts the zero level set of a [`ScalarField`] into a flat triangle
//! soup by marching every cell of a regular grid and triangulating the
//! surface crossings from precomputed tables.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  field: impl ScalarField  - sampled on demand, never stored     │
//! │  config: GridConfig       - bounds + samples per axis           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                PHASE 1: Corner Classification                   │
//! │  For each (N-1)³ cell, x-major / z-innermost:                   │
//! │    Sample f at the 8 corners (enumeration order)                │
//! │    Build 8-bit configuration from strict sign (f < 0 = inside)  │
//! │    Early-out when EDGE_TABLE row is 0 (uniform cell)            │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                PHASE 2: Edge Interpolation                      │
//! │  For each active edge: linear zero crossing between the edge's  │
//! │  corner pair, t = v1 / (v1 - v2)                                │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                PHASE 3: Triangle Emission                       │
//! │  Walk TRI_TABLE row in groups of 3 edge indices until -1,       │
//! │  appending interpolated points in row order (fixes winding)     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  TriangleMesh - non-indexed position triples + bounds           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Corner and edge conventions live in [`crate::tables`]; the per-cell
//! step is the pure [`polygonize_cell`], so single-cell topologies are
//! testable without a grid.

use std::ops::Range;

use glam::Vec3A;
use smallvec::SmallVec;
use web_time::Instant;

use crate::field::ScalarField;
use crate::tables::{CORNER_OFFSETS, EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
use crate::types::{GridConfig, Triangle, TriangleMesh};

/// Workload counters and wall time for one extraction run.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtractionStats {
  /// Cells marched (`cells_per_axis³`).
  pub cell_count: usize,

  /// Cells with mixed-sign corners, i.e. cells that produced geometry.
  pub active_cells: usize,

  /// Wall time of the whole run in microseconds.
  pub total_us: u64,
}

/// Extract the zero level set of `field` over `config`'s grid.
///
/// Marches cells in x-major, z-innermost order and appends triangles in
/// that deterministic order. Corners are resampled per cell, so the
/// field is asked up to 8 times per interior sample point; fields are
/// expected to be cheap and pure. Degenerate grids (`resolution < 2`)
/// have no cells and produce an empty mesh.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "marcher::extract"))]
pub fn extract<F: ScalarField>(field: &F, config: &GridConfig) -> TriangleMesh {
  let mut mesh = TriangleMesh::new();
  extract_slab(field, config, 0..config.cells_per_axis(), &mut mesh);
  mesh
}

/// [`extract`] plus workload counters and wall time.
pub fn extract_timed<F: ScalarField>(
  field: &F,
  config: &GridConfig,
) -> (TriangleMesh, ExtractionStats) {
  let start = Instant::now();

  let mut mesh = TriangleMesh::new();
  let active_cells = extract_slab(field, config, 0..config.cells_per_axis(), &mut mesh);

  let stats = ExtractionStats {
    cell_count: config.cell_count(),
    active_cells,
    total_us: start.elapsed().as_micros() as u64,
  };
  (mesh, stats)
}

/// March the cells whose x coordinate lies in `x_cells`, appending onto
/// `mesh`. Returns the number of active cells.
///
/// The full grid is `0..cells_per_axis` in x; the parallel path hands
/// each worker a sub-range and concatenates the slabs afterwards.
pub(crate) fn extract_slab<F: ScalarField>(
  field: &F,
  config: &GridConfig,
  x_cells: Range<usize>,
  mesh: &mut TriangleMesh,
) -> usize {
  let cells = config.cells_per_axis();
  let origin = Vec3A::from_array(config.bounds.min);
  let step = config.step();

  let mut active_cells = 0;
  for x in x_cells {
    for y in 0..cells {
      for z in 0..cells {
        let mut corners = [Vec3A::ZERO; 8];
        let mut values = [0.0f32; 8];
        for (i, offset) in CORNER_OFFSETS.iter().enumerate() {
          let position = origin
            + step
              * Vec3A::new(
                (x + offset[0]) as f32,
                (y + offset[1]) as f32,
                (z + offset[2]) as f32,
              );
          corners[i] = position;
          values[i] = field.evaluate(position.x, position.y, position.z);
        }

        let triangles = polygonize_cell(&corners, &values);
        if !triangles.is_empty() {
          active_cells += 1;
        }
        for triangle in triangles {
          mesh.push_triangle(triangle);
        }
      }
    }
  }

  active_cells
}

/// Polygonize a single cell from its corner positions and samples.
///
/// The whole per-cell pipeline as a pure function: classification, edge
/// table rejection, crossing interpolation, triangulation walk. Corner
/// and value order must follow the enumeration in [`crate::tables`].
/// Returns at most 5 triangles and never touches the heap.
pub fn polygonize_cell(corners: &[Vec3A; 8], values: &[f32; 8]) -> SmallVec<[Triangle; 5]> {
  let mut triangles = SmallVec::new();

  let configuration = corner_configuration(values);
  let edge_mask = EDGE_TABLE[configuration as usize];

  // Uniform cells reject on the table row alone, the dominant case on
  // sparse surfaces
  if edge_mask == 0 {
    return triangles;
  }

  // Interpolate a crossing on every active edge
  let mut edge_points = [Vec3A::ZERO; 12];
  for (edge, pair) in EDGE_CORNERS.iter().enumerate() {
    if edge_mask & (1 << edge) == 0 {
      continue;
    }
    let c1 = pair[0] as usize;
    let c2 = pair[1] as usize;
    edge_points[edge] = zero_crossing(corners[c1], corners[c2], values[c1], values[c2]);
  }

  // Walk the triangulation row in groups of 3 until the sentinel
  for tri in TRI_TABLE[configuration as usize].chunks(3) {
    if tri[0] < 0 {
      break;
    }
    triangles.push([
      edge_points[tri[0] as usize],
      edge_points[tri[1] as usize],
      edge_points[tri[2] as usize],
    ]);
  }

  triangles
}

/// Build the 8-bit configuration index from corner samples.
///
/// Bit i is set when corner i samples strictly negative; zero counts as
/// outside, so an all-zero field stays empty.
#[inline]
pub fn corner_configuration(values: &[f32; 8]) -> u8 {
  let mut configuration = 0u8;
  for (i, &value) in values.iter().enumerate() {
    if value < 0.0 {
      configuration |= 1 << i;
    }
  }
  configuration
}

/// Linear zero crossing between two corner samples.
///
/// `t = v1 / (v1 - v2)` is where the linear interpolant vanishes.
/// Callers only pass edges whose corners classify differently, so
/// `v1 != v2` holds and the division is well defined.
#[inline]
pub fn zero_crossing(p1: Vec3A, p2: Vec3A, v1: f32, v2: f32) -> Vec3A {
  let t = v1 / (v1 - v2);
  p1 + (p2 - p1) * t
}

#[cfg(test)]
#[path = "marcher_test.rs"]
mod marcher_test;
