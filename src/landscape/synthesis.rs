//! Terrain synthesis: base noise field plus article-driven peaks.
//!
//! Every rebuild is wholesale: one vertex per lattice point, row-major,
//! heights from a seeded coherent noise field, with occupied cells raised
//! by `intensity * max_height` and colored from the emotion palette (or
//! the highlight color for the hovered article). There is no incremental
//! path; a batch arrival or a highlight change rebuilds everything. At the
//! default 100x100 grid that is 10 000 vertices per rebuild, which is the
//! accepted performance ceiling of this design.

use noise::{NoiseFn, Simplex};

use crate::mesh::TerrainBuffers;
use crate::util::Timed;

use super::coloring::{emotion_color, HIGHLIGHT, NEUTRAL_TERRAIN};
use super::constants::{NOISE_AMPLITUDE, NOISE_FREQUENCY};
use super::grid::{GridCell, GridSpec};
use super::placement::PlacedBatch;

/// Seeded coherent 2D noise for the base elevation.
///
/// One instance lives for a whole session so consecutive rebuilds share the
/// same base field; reseeding is an explicit host decision, never implicit.
pub struct NoiseField {
    seed: u32,
    noise: Simplex,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            noise: Simplex::new(seed),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Base elevation at normalized lattice coordinates in [-0.5, 0.5].
    pub fn sample(&self, nx: f32, nz: f32) -> f32 {
        let sample = self
            .noise
            .get([nx as f64 * NOISE_FREQUENCY, nz as f64 * NOISE_FREQUENCY]);
        sample as f32 * NOISE_AMPLITUDE
    }
}

/// Build the full geometry for one batch + highlight state.
///
/// Returned normals are +Y placeholders; the consumer recomputes them from
/// the index buffer after publish (see [`crate::mesh::compute_vertex_normals`]).
pub fn synthesize(
    grid: GridSpec,
    noise: &NoiseField,
    max_height: f32,
    batch: &PlacedBatch,
    highlight: Option<&str>,
) -> TerrainBuffers {
    let _t = Timed::debug("terrain synthesis");

    let num_vertices = grid.num_vertices();
    let mut positions = Vec::with_capacity(num_vertices * 3);
    let mut normals = Vec::with_capacity(num_vertices * 3);
    let mut colors = Vec::with_capacity(num_vertices * 3);

    for z in 0..grid.depth {
        for x in 0..grid.width {
            let nx = x as f32 / grid.width as f32 - 0.5;
            let nz = z as f32 / grid.depth as f32 - 0.5;
            let mut height = noise.sample(nx, nz);

            let mut color = NEUTRAL_TERRAIN;
            if let Some(article) = batch.article_at(GridCell { x, z }) {
                height += article.sentiment.intensity * max_height;
                color = if highlight == Some(article.id.as_str()) {
                    HIGHLIGHT
                } else {
                    emotion_color(article.sentiment.tag)
                };
            }

            positions.extend_from_slice(&[
                x as f32 - grid.width as f32 / 2.0,
                height,
                z as f32 - grid.depth as f32 / 2.0,
            ]);
            normals.extend_from_slice(&[0.0, 1.0, 0.0]);
            colors.extend_from_slice(&[color.x, color.y, color.z]);
        }
    }

    // Two triangles per cell: (a,b,d) and (b,c,d). The winding matches the
    // vertex order above and must not change, or recomputed normals flip.
    let mut indices = Vec::with_capacity(grid.num_triangles() * 3);
    for z in 0..grid.depth - 1 {
        for x in 0..grid.width - 1 {
            let a = z * grid.width + x;
            let b = (z + 1) * grid.width + x;
            let c = (z + 1) * grid.width + x + 1;
            let d = z * grid.width + x + 1;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    TerrainBuffers {
        positions,
        normals,
        colors,
        indices,
    }
}
