//! Grid occupancy tracking for board generation
//!
//! Records which grid cells are covered by already-placed path segments and
//! answers clearance queries. This is the sole mechanism preventing
//! self-intersection and cross-piece overlap while a board is built.

use std::collections::HashSet;

use glam::Vec2;

/// Set of occupied grid cells, keyed by integer cell index
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    cells: HashSet<(i32, i32)>,
    step: f32,
}

impl OccupancyGrid {
    pub fn new(step: f32) -> Self {
        Self {
            cells: HashSet::new(),
            step,
        }
    }

    /// Cell index for a grid-quantized point
    #[inline]
    fn key(&self, p: Vec2) -> (i32, i32) {
        (
            (p.x / self.step).round() as i32,
            (p.y / self.step).round() as i32,
        )
    }

    /// Mark every cell on the axis-aligned line from `p1` to `p2`,
    /// inclusive of both endpoints.
    pub fn mark(&mut self, p1: Vec2, p2: Vec2) {
        let (kx1, ky1) = self.key(p1);
        let (kx2, ky2) = self.key(p2);
        for kx in kx1.min(kx2)..=kx1.max(kx2) {
            for ky in ky1.min(ky2)..=ky1.max(ky2) {
                self.cells.insert((kx, ky));
            }
        }
    }

    /// False if any cell on the inclusive line from `p1` to `p2` is marked
    pub fn is_clear(&self, p1: Vec2, p2: Vec2) -> bool {
        let (kx1, ky1) = self.key(p1);
        let (kx2, ky2) = self.key(p2);
        for kx in kx1.min(kx2)..=kx1.max(kx2) {
            for ky in ky1.min(ky2)..=ky1.max(ky2) {
                if self.cells.contains(&(kx, ky)) {
                    return false;
                }
            }
        }
        true
    }

    /// Whether a single cell is unoccupied
    #[inline]
    pub fn is_free(&self, p: Vec2) -> bool {
        !self.cells.contains(&self.key(p))
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> OccupancyGrid {
        OccupancyGrid::new(40.0)
    }

    #[test]
    fn test_mark_inclusive_of_endpoints() {
        let mut g = grid();
        g.mark(Vec2::new(40.0, 80.0), Vec2::new(160.0, 80.0));
        assert_eq!(g.occupied_count(), 4);
        assert!(!g.is_free(Vec2::new(40.0, 80.0)));
        assert!(!g.is_free(Vec2::new(160.0, 80.0)));
        assert!(g.is_free(Vec2::new(200.0, 80.0)));
        assert!(g.is_free(Vec2::new(80.0, 120.0)));
    }

    #[test]
    fn test_is_clear_detects_crossing() {
        let mut g = grid();
        // Vertical run at x=120
        g.mark(Vec2::new(120.0, 40.0), Vec2::new(120.0, 200.0));
        // Horizontal line through it is blocked
        assert!(!g.is_clear(Vec2::new(40.0, 120.0), Vec2::new(200.0, 120.0)));
        // Parallel line one cell over is clear
        assert!(g.is_clear(Vec2::new(160.0, 40.0), Vec2::new(160.0, 200.0)));
    }

    #[test]
    fn test_endpoint_order_irrelevant() {
        let mut g = grid();
        g.mark(Vec2::new(200.0, 200.0), Vec2::new(80.0, 200.0));
        assert!(!g.is_clear(Vec2::new(120.0, 200.0), Vec2::new(120.0, 200.0)));
        assert!(!g.is_clear(Vec2::new(200.0, 280.0), Vec2::new(200.0, 160.0)));
    }
}
