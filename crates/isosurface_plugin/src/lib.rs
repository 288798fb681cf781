//! isosurface_plugin - Framework/engine independent isosurface extraction
//!
//! This crate extracts triangle meshes from implicit scalar fields with the
//! marching cubes algorithm. Fields are sampled on demand over a regular
//! grid, so no volume allocation is required; any `Fn(f32, f32, f32) -> f32`
//! works as an input.
//!
//! # Features
//!
//! - **Marching Cubes**: Classic 256-configuration extraction with linear
//!   zero-crossing interpolation
//! - **Pull-based Sampling**: Fields are evaluated per cell corner, never
//!   stored, so resolution costs time rather than memory
//! - **Parallel Extraction**: rayon x-slab decomposition whose output is
//!   bit-identical to the sequential path
//! - **Built-in Fields**: Spheres, boxes, planes, and metaball clusters for
//!   testing and benchmarking
//!
//! # Example
//!
//! ```ignore
//! use isosurface_plugin::{extract, GridConfig, SphereField};
//!
//! let field = SphereField::default();
//! let config = GridConfig::new().with_resolution(30);
//!
//! let mesh = extract(&field, &config);
//!
//! println!("Extracted {} triangles", mesh.triangle_count());
//! ```

pub mod tables;
pub mod types;

// Re-export commonly used items
pub use tables::{corner_offset, CORNER_OFFSETS, EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
pub use types::{GridConfig, GridConfigError, MinMaxAABB, Triangle, TriangleMesh};

// Scalar field inputs
pub mod field;
pub use field::{BoxField, Metaball, MetaballsField, PlaneField, ScalarField, SphereField};

// Marching cubes core
pub mod marcher;
pub use marcher::{
  corner_configuration, extract, extract_timed, polygonize_cell, zero_crossing, ExtractionStats,
};

// Parallel extraction over x-slabs
pub mod parallel;
pub use parallel::extract_parallel;
