//! Flatten cloth state into buffers a renderer can upload.
//!
//! Vertices use the same `i * n + j` order as the topology index buffer.

use crate::error::ClothError;
use crate::simulation::states::NVec3;

/// Copy position (i, j) into slot `i * n + j` of a fresh buffer.
/// The state is already stored in that order, so this is a snapshot copy.
/// `positions` must hold exactly n² entries.
pub fn extract_vertices(positions: &[NVec3], n: usize) -> Result<Vec<NVec3>, ClothError> {
    let expected = n * n;
    if positions.len() != expected {
        return Err(ClothError::StateSizeMismatch { expected, found: positions.len() });
    }
    Ok(positions.to_vec())
}

/// Same layout as [`extract_vertices`], as plain `[x, y, z]` triples
pub fn vertex_buffer(positions: &[NVec3], n: usize) -> Result<Vec<[f32; 3]>, ClothError> {
    let vertices = extract_vertices(positions, n)?;
    Ok(vertices.iter().map(|p| [p.x as f32, p.y as f32, p.z as f32]).collect())
}
