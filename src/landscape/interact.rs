//! Pointer resolution against the placed batch.
//!
//! Both resolvers are pure: they take the intersection point the host's
//! raycast produced and return what was hit, plus the cursor affordance the
//! host should show. No environment mutation happens here, which keeps the
//! interaction path testable without a windowing system.

use glam::Vec3;

use super::article::Article;
use super::constants::CLICK_TOLERANCE;
use super::grid::{GridCell, GridSpec};
use super::placement::PlacedBatch;

/// Cursor the host should display after a hover resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    Pointer,
}

impl CursorIcon {
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pointer => "pointer",
        }
    }
}

/// Result of a hover resolution.
pub struct HoverResolution<'a> {
    pub article: Option<&'a Article>,
    pub cursor: CursorIcon,
}

/// Hover is an exact-cell lookup: no neighborhood search, no tolerance.
/// Out-of-range points resolve to nothing with the default cursor.
pub fn resolve_hover(grid: GridSpec, batch: &PlacedBatch, point: Vec3) -> HoverResolution<'_> {
    let article = grid
        .cell_from_point(point)
        .and_then(|cell| batch.article_at(cell));
    let cursor = if article.is_some() {
        CursorIcon::Pointer
    } else {
        CursorIcon::Default
    };
    HoverResolution { article, cursor }
}

/// Click resolution searches the 3x3 neighborhood of the computed cell and
/// picks the occupied neighbor closest (Euclidean cell distance) to it.
///
/// The scan is row-major and the comparison strictly less-than, so
/// equidistant candidates resolve to the first one scanned -
/// deterministic, and acceptable because ties are geometrically
/// equidistant. The match must be strictly inside [`CLICK_TOLERANCE`].
pub fn resolve_click(grid: GridSpec, batch: &PlacedBatch, point: Vec3) -> Option<&Article> {
    let center = grid.cell_from_point(point)?;

    let mut best: Option<(&Article, f32)> = None;
    for dz in -1i64..=1 {
        for dx in -1i64..=1 {
            let x = center.x as i64 + dx;
            let z = center.z as i64 + dz;
            if x < 0 || z < 0 || x >= grid.width as i64 || z >= grid.depth as i64 {
                continue;
            }
            let cell = GridCell {
                x: x as u32,
                z: z as u32,
            };
            if let Some(article) = batch.article_at(cell) {
                let dist = ((dx * dx + dz * dz) as f32).sqrt();
                if best.map_or(true, |(_, d)| dist < d) {
                    best = Some((article, dist));
                }
            }
        }
    }

    best.and_then(|(article, dist)| within_tolerance(dist).then_some(article))
}

/// The acceptance policy: strictly less-than, so a candidate at exactly the
/// tolerance distance is rejected.
fn within_tolerance(dist: f32) -> bool {
    dist < CLICK_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::Sentiment;

    fn pinned_batch(cells: &[(&str, u32, u32)]) -> PlacedBatch {
        let pinned = cells
            .iter()
            .map(|&(id, x, z)| {
                let article = Article {
                    id: id.to_string(),
                    title: String::new(),
                    summary: String::new(),
                    url: String::new(),
                    published_at: String::new(),
                    sentiment: Sentiment::neutral(),
                    grid_cell: None,
                };
                (article, GridCell::new(x, z))
            })
            .collect();
        PlacedBatch::place_at(pinned)
    }

    fn point_at(grid: GridSpec, x: u32, z: u32) -> Vec3 {
        grid.cell_to_point(GridCell::new(x, z))
    }

    #[test]
    fn test_hover_hits_exact_cell_only() {
        let grid = GridSpec::new(10, 10);
        let batch = pinned_batch(&[("a", 4, 4)]);

        let hit = resolve_hover(grid, &batch, point_at(grid, 4, 4));
        assert_eq!(hit.article.map(|a| a.id.as_str()), Some("a"));
        assert_eq!(hit.cursor, CursorIcon::Pointer);

        // The neighboring cell is a miss even though a click would accept it.
        let miss = resolve_hover(grid, &batch, point_at(grid, 5, 4));
        assert!(miss.article.is_none());
        assert_eq!(miss.cursor, CursorIcon::Default);
    }

    #[test]
    fn test_out_of_range_point_resolves_to_none() {
        let grid = GridSpec::new(10, 10);
        let batch = pinned_batch(&[("a", 0, 0)]);
        let outside = Vec3::new(400.0, 0.0, -400.0);
        assert!(resolve_hover(grid, &batch, outside).article.is_none());
        assert!(resolve_click(grid, &batch, outside).is_none());
    }

    #[test]
    fn test_click_prefers_nearest_neighbor() {
        let grid = GridSpec::new(10, 10);
        // Diagonal neighbor (dist sqrt(2)) and edge neighbor (dist 1).
        let batch = pinned_batch(&[("diag", 3, 3), ("edge", 5, 4)]);
        let hit = resolve_click(grid, &batch, point_at(grid, 4, 4));
        assert_eq!(hit.map(|a| a.id.as_str()), Some("edge"));
    }

    #[test]
    fn test_click_center_beats_neighbors() {
        let grid = GridSpec::new(10, 10);
        let batch = pinned_batch(&[("center", 4, 4), ("edge", 4, 5)]);
        let hit = resolve_click(grid, &batch, point_at(grid, 4, 4));
        assert_eq!(hit.map(|a| a.id.as_str()), Some("center"));
    }

    #[test]
    fn test_click_tie_keeps_first_in_scan_order() {
        let grid = GridSpec::new(10, 10);
        // Two edge neighbors at distance 1; the scan visits (4,3) before (3,4).
        let batch = pinned_batch(&[("west", 3, 4), ("north", 4, 3)]);
        let hit = resolve_click(grid, &batch, point_at(grid, 4, 4));
        assert_eq!(hit.map(|a| a.id.as_str()), Some("north"));
    }

    #[test]
    fn test_click_with_empty_neighborhood_resolves_to_none() {
        let grid = GridSpec::new(10, 10);
        let batch = pinned_batch(&[("far", 9, 9)]);
        assert!(resolve_click(grid, &batch, point_at(grid, 2, 2)).is_none());
    }

    #[test]
    fn test_tolerance_boundary_is_strict() {
        // The 3x3 scan caps candidate distance at sqrt(2), well inside the
        // tolerance; pin the strict-less policy so it cannot drift.
        assert!(within_tolerance((2.0f32).sqrt()));
        assert!(within_tolerance(1.999));
        assert!(!within_tolerance(CLICK_TOLERANCE));
        assert!(!within_tolerance(2.5));
    }
}
