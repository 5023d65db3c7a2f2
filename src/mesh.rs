//! Geometry buffers and the live-mesh update protocol.
//!
//! The synthesizer emits [`TerrainBuffers`]: flat float triplets for
//! positions and colors, placeholder normals, and a `u32` triangle index
//! list. A renderer consumes them through a [`MeshSlot`], which replaces
//! positions, colors, and indices together on every publish, so a draw can
//! never pair a new index buffer with stale vertices.
//!
//! Normals are published as straight-up placeholders. After each publish
//! the consumer must recompute them from the final triangulation (see
//! [`compute_vertex_normals`]); lighting is wrong until it does.
//!
//! All publishing happens on the single event-loop thread, strictly before
//! the next draw reads the buffers. A multi-threaded port must replace
//! [`MeshSlot`] with a double buffer behind a single published-pointer
//! swap to avoid tearing.

use glam::Vec3;

/// One wholesale rebuild of the terrain geometry.
///
/// `positions` and `colors` are x/y/z and r/g/b triplets with color
/// components in [0, 1]; `indices` holds triangle corners into the vertex
/// arrays. `normals` is placeholder data (+Y per vertex) until the consumer
/// recomputes it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TerrainBuffers {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub colors: Vec<f32>,
    pub indices: Vec<u32>,
}

impl TerrainBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Structural invariants every publish must satisfy.
    fn check(&self) {
        debug_assert_eq!(self.positions.len() % 3, 0);
        debug_assert_eq!(self.normals.len(), self.positions.len());
        debug_assert_eq!(self.colors.len(), self.positions.len());
        debug_assert_eq!(self.indices.len() % 3, 0);
        let max = self.indices.iter().copied().max().unwrap_or(0);
        debug_assert!(
            (max as usize) < self.vertex_count().max(1),
            "index {} out of range for {} vertices",
            max,
            self.vertex_count()
        );
    }
}

/// The published mesh a renderer reads from.
///
/// `revision` bumps on every publish so a host can skip redundant GPU
/// uploads (hover churn) by comparing against the last revision it saw.
pub struct MeshSlot {
    buffers: TerrainBuffers,
    revision: u64,
}

impl MeshSlot {
    pub fn new(initial: TerrainBuffers) -> Self {
        initial.check();
        Self {
            buffers: initial,
            revision: 1,
        }
    }

    /// Replace the whole mesh. Positions, colors, and indices swap as one
    /// unit; partial updates are deliberately impossible.
    pub fn publish(&mut self, buffers: TerrainBuffers) {
        buffers.check();
        self.buffers = buffers;
        self.revision += 1;
        log::trace!("mesh revision {} published", self.revision);
    }

    pub fn buffers(&self) -> &TerrainBuffers {
        &self.buffers
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Recompute per-vertex normals from the final triangulation.
///
/// Face normals are accumulated unnormalized (area-weighted) onto each
/// corner vertex and normalized at the end, matching the usual
/// renderer-side `computeVertexNormals` pass. Degenerate vertices fall
/// back to +Y.
pub fn compute_vertex_normals(positions: &[f32], indices: &[u32]) -> Vec<f32> {
    let mut normals = vec![0.0f32; positions.len()];

    for tri in indices.chunks_exact(3) {
        let [ia, ib, ic] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let pa = Vec3::from_slice(&positions[ia * 3..ia * 3 + 3]);
        let pb = Vec3::from_slice(&positions[ib * 3..ib * 3 + 3]);
        let pc = Vec3::from_slice(&positions[ic * 3..ic * 3 + 3]);

        let face = (pb - pa).cross(pc - pa);
        for &i in &[ia, ib, ic] {
            normals[i * 3] += face.x;
            normals[i * 3 + 1] += face.y;
            normals[i * 3 + 2] += face.z;
        }
    }

    for v in normals.chunks_exact_mut(3) {
        let n = Vec3::new(v[0], v[1], v[2]).normalize_or(Vec3::Y);
        v.copy_from_slice(&n.to_array());
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_quad() -> TerrainBuffers {
        // Unit quad in the xz plane, same triangulation as the terrain.
        TerrainBuffers {
            positions: vec![
                0.0, 0.0, 0.0, // a
                0.0, 0.0, 1.0, // b
                1.0, 0.0, 1.0, // c
                1.0, 0.0, 0.0, // d
            ],
            normals: Vec::new(), // tests fill this in when a slot needs it
            colors: vec![0.5; 12],
            indices: vec![0, 1, 3, 1, 2, 3],
        }
    }

    #[test]
    fn test_flat_surface_normals_point_up() {
        let quad = flat_quad();
        let normals = compute_vertex_normals(&quad.positions, &quad.indices);
        for n in normals.chunks_exact(3) {
            assert!((n[0]).abs() < 1e-6);
            assert!((n[1] - 1.0).abs() < 1e-6);
            assert!((n[2]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_slope_tilts_shared_normals() {
        let mut quad = flat_quad();
        // Raise vertex d; the averaged normals must lean away from +x.
        quad.positions[10] = 2.0;
        let normals = compute_vertex_normals(&quad.positions, &quad.indices);
        let shared_b = &normals[3..6];
        assert!(shared_b[0] < 0.0);
        assert!(shared_b[1] > 0.0);
    }

    #[test]
    fn test_publish_replaces_wholesale_and_bumps_revision() {
        let mut quad = flat_quad();
        quad.normals = vec![0.0, 1.0, 0.0].repeat(4);
        let mut slot = MeshSlot::new(quad.clone());
        assert_eq!(slot.revision(), 1);

        let mut next = quad;
        next.colors = vec![0.1; 12];
        slot.publish(next.clone());
        assert_eq!(slot.revision(), 2);
        assert_eq!(slot.buffers(), &next);
    }
}
