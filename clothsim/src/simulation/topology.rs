//! Fixed grid topology: spring offsets, triangle indices and vertex colors.
//!
//! Springs are never materialised as edges. Every particle walks the same
//! 12 integer offsets and skips neighbours that fall outside the grid, so
//! each spring is seen once from each end.

use crate::error::ClothError;

/// Relative (di, dj) of a spring neighbour
pub type SpringOffset = [i32; 2];

/// Structural (axis, 1), shear (diagonal, 1) and bending (axis, 2) neighbours
pub const SPRING_OFFSETS: [SpringOffset; 12] = [
    // structural
    [1, 0], [-1, 0], [0, 1], [0, -1],
    // shear
    [1, 1], [1, -1], [-1, 1], [-1, -1],
    // bending
    [2, 0], [-2, 0], [0, 2], [0, -2],
];

pub const PALETTE_A: [f32; 3] = [0.22, 0.72, 0.52];
pub const PALETTE_B: [f32; 3] = [1.0, 0.334, 0.52];

/// Checkerboard block side, in particles
const CHECKER_BLOCK: usize = 4;

/// One-time setup output for an n×n grid
#[derive(Debug, Clone)]
pub struct Topology {
    pub n: usize,
    pub spring_offsets: [SpringOffset; 12],
    pub indices: Vec<u32>, // 6 per quad, two triangles
    pub colors: Vec<[f32; 3]>, // rgb, one per vertex
}

/// Build offsets, triangle indices and colors for an n×n grid.
/// Fails for n < 2, which has no quads.
pub fn build_topology(n: usize) -> Result<Topology, ClothError> {
    if n < 2 {
        return Err(ClothError::InvalidGridSize { n });
    }

    Ok(Topology {
        n,
        spring_offsets: SPRING_OFFSETS,
        indices: triangle_indices(n),
        colors: vertex_colors(n),
    })
}

/// Two triangles per quad (i, j), 0 <= i, j < n - 1, using index i * n + j.
///
/// First: (i,j) (i+1,j) (i,j+1). Second: (i+1,j+1) (i,j+1) (i+1,j).
pub fn triangle_indices(n: usize) -> Vec<u32> {
    let quads = n.saturating_sub(1);
    let mut indices = Vec::with_capacity(quads * quads * 6);
    let at = |i: usize, j: usize| (i * n + j) as u32;

    for i in 0..quads {
        for j in 0..quads {
            indices.extend_from_slice(&[
                at(i, j),
                at(i + 1, j),
                at(i, j + 1),
                at(i + 1, j + 1),
                at(i, j + 1),
                at(i + 1, j),
            ]);
        }
    }
    indices
}

/// Checkerboard of 4×4 blocks alternating between the two palette colors
pub fn vertex_colors(n: usize) -> Vec<[f32; 3]> {
    let mut colors = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let even = (i / CHECKER_BLOCK + j / CHECKER_BLOCK) % 2 == 0;
            colors.push(if even { PALETTE_A } else { PALETTE_B });
        }
    }
    colors
}

/// Neighbour index of (i, j) along `offset`, or `None` when off the grid
#[inline]
pub fn neighbour(i: usize, j: usize, offset: SpringOffset, n: usize) -> Option<usize> {
    let ni = i as i64 + offset[0] as i64;
    let nj = j as i64 + offset[1] as i64;
    let n = n as i64;
    if (0..n).contains(&ni) && (0..n).contains(&nj) {
        Some((ni * n + nj) as usize)
    } else {
        None
    }
}

/// Rest length of a spring along `offset` for the given spacing
#[inline]
pub fn rest_length(offset: SpringOffset, quad_size: f64) -> f64 {
    let (di, dj) = (offset[0] as f64, offset[1] as f64);
    quad_size * (di * di + dj * dj).sqrt()
}
