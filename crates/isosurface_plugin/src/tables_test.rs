use super::*;

// Reference derivation: an edge is active iff its corners classify
// differently under the configuration bits.
fn edge_mask_from_corner_pairs(config: usize) -> u16 {
  let mut edge_mask = 0u16;
  for (edge, corners) in EDGE_CORNERS.iter().enumerate() {
    let inside0 = (config >> corners[0]) & 1;
    let inside1 = (config >> corners[1]) & 1;
    if inside0 != inside1 {
      edge_mask |= 1 << edge;
    }
  }
  edge_mask
}

fn tri_row_len(row: &[i8; 16]) -> usize {
  row.iter().position(|&e| e == -1).unwrap_or(16)
}

#[test]
fn test_edge_table_homogeneous() {
  // All corners same sign = no crossings
  assert_eq!(EDGE_TABLE[0], 0, "All outside should have no edges");
  assert_eq!(EDGE_TABLE[255], 0, "All inside should have no edges");
}

#[test]
fn test_edge_table_single_corner() {
  // A single inside corner activates exactly its 3 incident edges
  for corner in 0..8 {
    let config = 1u8 << corner;
    let edge_count = EDGE_TABLE[config as usize].count_ones();
    assert_eq!(
      edge_count, 3,
      "Corner {} should have 3 edges, got {}",
      corner, edge_count
    );
  }
}

#[test]
fn test_edge_table_symmetry() {
  // Complementary configurations cross the same edges
  for i in 0..128 {
    assert_eq!(
      EDGE_TABLE[i],
      EDGE_TABLE[255 - i],
      "Edge masks should be symmetric for {} and {}",
      i,
      255 - i
    );
  }
}

#[test]
fn test_edge_table_is_12_bit() {
  for (config, &mask) in EDGE_TABLE.iter().enumerate() {
    assert!(mask < 1 << 12, "Config {} has out-of-range mask {:#x}", config, mask);
  }
}

#[test]
fn test_edge_table_matches_corner_pairs() {
  // The bundled rows must agree with EDGE_CORNERS for every configuration.
  // This couples the verbatim data to the corner enumeration.
  for config in 0..256 {
    assert_eq!(
      EDGE_TABLE[config],
      edge_mask_from_corner_pairs(config),
      "Mismatch for configuration {:#010b}",
      config
    );
  }
}

#[test]
fn test_edge_corners_validity() {
  for edge in &EDGE_CORNERS {
    assert!(edge[0] < 8);
    assert!(edge[1] < 8);
    assert_ne!(edge[0], edge[1]);
  }
}

#[test]
fn test_edge_corners_face_loops() {
  // Edges 0-3 loop the X=0 face, 4-7 the X=1 face, 8-11 span X.
  let expected: [[u8; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
  ];
  assert_eq!(EDGE_CORNERS, expected);
}

#[test]
fn test_corner_offset_bit_layout() {
  assert_eq!(corner_offset(0), [0, 0, 0]);
  assert_eq!(corner_offset(1), [0, 0, 1]);
  assert_eq!(corner_offset(2), [0, 1, 0]);
  assert_eq!(corner_offset(3), [0, 1, 1]);
  assert_eq!(corner_offset(4), [1, 0, 0]);
  assert_eq!(corner_offset(7), [1, 1, 1]);
}

#[test]
fn test_corner_offsets_match_bit_layout() {
  for corner in 0..8u8 {
    assert_eq!(
      CORNER_OFFSETS[corner as usize],
      corner_offset(corner),
      "Offset table disagrees with bit layout at corner {}",
      corner
    );
  }
}

#[test]
fn test_tri_table_rows_well_formed() {
  for (config, row) in TRI_TABLE.iter().enumerate() {
    let len = tri_row_len(row);
    assert!(len <= 15, "Config {} lists more than 5 triangles", config);
    assert_eq!(len % 3, 0, "Config {} has a partial triangle", config);
    for &entry in &row[..len] {
      assert!(
        (0..12).contains(&(entry as i32)),
        "Config {} lists invalid edge {}",
        config,
        entry
      );
    }
    for &entry in &row[len..] {
      assert_eq!(entry, -1, "Config {} has data after the sentinel", config);
    }
  }
}

#[test]
fn test_tri_table_edges_are_active() {
  // Every edge a row references must be active in the edge table
  for (config, row) in TRI_TABLE.iter().enumerate() {
    for &entry in &row[..tri_row_len(row)] {
      assert_ne!(
        EDGE_TABLE[config] & (1 << entry),
        0,
        "Config {} triangulates inactive edge {}",
        config,
        entry
      );
    }
  }
}

#[test]
fn test_tri_table_homogeneous_empty() {
  assert_eq!(tri_row_len(&TRI_TABLE[0]), 0);
  assert_eq!(tri_row_len(&TRI_TABLE[255]), 0);
}

#[test]
fn test_tri_table_single_corner_topology() {
  // Only corner 0 inside: one triangle over edges 0, 8, 3, in row order
  assert_eq!(TRI_TABLE[1][..4], [0, 8, 3, -1]);
  assert_eq!(EDGE_TABLE[1], 0x109);
}
