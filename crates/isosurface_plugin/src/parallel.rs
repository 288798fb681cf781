//! Parallel extraction.
//!
//! Fork-join decomposition over x-slabs using rayon. Each worker marches
//! one x column of cells into a private mesh; the slabs are concatenated
//! in x order afterwards. Because x is also the outermost sequential
//! loop, the merged soup is bit-identical to what
//! [`extract`](crate::marcher::extract) produces for the same input.

use rayon::prelude::*;

use crate::field::ScalarField;
use crate::marcher::extract_slab;
use crate::types::{GridConfig, TriangleMesh};

/// Extract the zero level set of `field` using all cores.
///
/// Fields are shared read-only across workers (`ScalarField` requires
/// `Send + Sync`), and no worker writes anywhere but its own slab mesh.
/// Output is identical to the sequential path, including emission order.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "parallel::extract_parallel")
)]
pub fn extract_parallel<F: ScalarField>(field: &F, config: &GridConfig) -> TriangleMesh {
  let cells = config.cells_per_axis();

  let slabs: Vec<TriangleMesh> = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("march_slabs").entered();
    (0..cells)
      .into_par_iter()
      .map(|x| {
        let mut slab = TriangleMesh::new();
        extract_slab(field, config, x..x + 1, &mut slab);
        slab
      })
      .collect()
  };

  {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("merge_slabs").entered();
    let mut merged = TriangleMesh::new();
    for mut slab in slabs {
      merged.append(&mut slab);
    }
    merged
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::field::{MetaballsField, SphereField};
  use crate::marcher::extract;

  #[test]
  fn test_parallel_matches_sequential() {
    let field = SphereField::default();
    let config = GridConfig::default();

    let sequential = extract(&field, &config);
    let parallel = extract_parallel(&field, &config);

    assert!(!sequential.is_empty());
    assert_eq!(parallel, sequential, "Slab merge must preserve emission order");
  }

  #[test]
  fn test_parallel_matches_sequential_on_blobs() {
    let field = MetaballsField::random(11, 5, 0.5);
    let config = GridConfig::new().with_resolution(24);

    let sequential = extract(&field, &config);
    let parallel = extract_parallel(&field, &config);

    assert_eq!(parallel, sequential);
  }

  #[test]
  fn test_parallel_uniform_field_is_empty() {
    let mesh = extract_parallel(&|_: f32, _: f32, _: f32| 1.0, &GridConfig::default());
    assert!(mesh.is_empty());
  }

  #[test]
  fn test_parallel_degenerate_resolution() {
    let field = SphereField::default();
    let config = GridConfig::new().with_resolution(1);

    assert!(extract_parallel(&field, &config).is_empty());
  }
}
