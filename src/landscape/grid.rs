//! Fixed lattice addressing.
//!
//! The terrain is a W×D grid of unit cells. One vertex sits at each lattice
//! point, stored row-major (z rows, x within a row), and the mesh is
//! centered on the origin: lattice (x, z) maps to world (x - W/2, h, z - D/2).

use glam::Vec3;
use serde::Serialize;

use super::constants::{DEFAULT_GRID_DEPTH, DEFAULT_GRID_WIDTH};

/// One integer cell address on the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GridCell {
    pub x: u32,
    pub z: u32,
}

impl GridCell {
    pub fn new(x: u32, z: u32) -> Self {
        Self { x, z }
    }
}

/// Lattice dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    pub width: u32,
    pub depth: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            depth: DEFAULT_GRID_DEPTH,
        }
    }
}

impl GridSpec {
    pub fn new(width: u32, depth: u32) -> Self {
        assert!(
            width >= 2 && depth >= 2,
            "grid needs at least 2x2 vertices to triangulate"
        );
        Self { width, depth }
    }

    /// Vertices in the synthesized mesh (one per lattice point).
    pub fn num_vertices(self) -> usize {
        self.width as usize * self.depth as usize
    }

    /// Triangles in the synthesized mesh (two per interior cell).
    pub fn num_triangles(self) -> usize {
        (self.width as usize - 1) * (self.depth as usize - 1) * 2
    }

    pub fn contains(self, cell: GridCell) -> bool {
        cell.x < self.width && cell.z < self.depth
    }

    /// Row-major vertex index for a cell. Must stay consistent with the
    /// vertex emission order in synthesis.
    pub fn vertex_index(self, cell: GridCell) -> usize {
        cell.z as usize * self.width as usize + cell.x as usize
    }

    /// Convert a continuous world-space point to the cell containing it.
    ///
    /// Uses `floor(point.x + W/2), floor(point.z + D/2)`; anything outside
    /// the lattice resolves to `None`, never an error.
    pub fn cell_from_point(self, point: Vec3) -> Option<GridCell> {
        let gx = (point.x + self.width as f32 / 2.0).floor();
        let gz = (point.z + self.depth as f32 / 2.0).floor();
        if gx < 0.0 || gz < 0.0 || gx >= self.width as f32 || gz >= self.depth as f32 {
            return None;
        }
        Some(GridCell {
            x: gx as u32,
            z: gz as u32,
        })
    }

    /// World-space center of a cell's unit square (y = 0). Round-trips
    /// through [`GridSpec::cell_from_point`].
    pub fn cell_to_point(self, cell: GridCell) -> Vec3 {
        Vec3::new(
            cell.x as f32 - self.width as f32 / 2.0 + 0.5,
            0.0,
            cell.z as f32 - self.depth as f32 / 2.0 + 0.5,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_round_trip() {
        let grid = GridSpec::default();
        for cell in [GridCell::new(0, 0), GridCell::new(42, 17), GridCell::new(99, 99)] {
            assert_eq!(grid.cell_from_point(grid.cell_to_point(cell)), Some(cell));
        }
    }

    #[test]
    fn test_out_of_range_points_resolve_to_none() {
        let grid = GridSpec::default();
        assert_eq!(grid.cell_from_point(Vec3::new(-50.5, 0.0, 0.0)), None);
        assert_eq!(grid.cell_from_point(Vec3::new(0.0, 0.0, 50.0)), None);
        assert_eq!(grid.cell_from_point(Vec3::new(1000.0, 0.0, 1000.0)), None);
    }

    #[test]
    fn test_vertex_index_is_row_major() {
        let grid = GridSpec::new(10, 4);
        assert_eq!(grid.vertex_index(GridCell::new(0, 0)), 0);
        assert_eq!(grid.vertex_index(GridCell::new(9, 0)), 9);
        assert_eq!(grid.vertex_index(GridCell::new(0, 1)), 10);
        assert_eq!(grid.vertex_index(GridCell::new(9, 3)), 39);
    }
}
