use crate::types::Point;
use super::points::PointSet;

/// Local density around a coordinate: share of the cells of a window that
/// hold a confirmed point. The window spans `+/- delta_x` source indices and,
/// for each source index X, `+/- delta_y` target indices around the diagonal
/// through the centre, so it follows the local diagonal direction.
///
/// Densities are evaluated on demand because the point set keeps changing
/// between stages.
#[derive(Debug, Clone, Copy)]
pub struct LocalDensityEstimator {
    delta_x: usize,
    delta_y: usize,
    source_len: usize,
    target_len: usize,
}

impl LocalDensityEstimator {
    pub fn new(delta_x: usize, delta_y: usize, source_len: usize, target_len: usize) -> Self {
        Self { delta_x, delta_y, source_len, target_len }
    }

    /// Count of (points inside, addressable cells) of the window centred on `at`.
    pub fn window(&self, at: Point, points: &PointSet) -> (usize, usize) {
        let i = at.i as i64;
        let j = at.j as i64;
        let dx = self.delta_x as i64;
        let dy = self.delta_y as i64;
        let width = self.source_len as i64;
        let height = self.target_len as i64;

        let mut cells = 0usize;
        let mut inside = 0usize;
        for x in (i - dx).max(0)..(i + dx + 1).min(width) {
            let diagonal = j - (i - x);
            let y_start = (diagonal - dy).max(0);
            let y_end = (diagonal + dy + 1).min(height);
            if y_start >= y_end {
                continue;
            }
            cells += (y_end - y_start) as usize;
            inside += points.count_in_column(x as usize, y_start as usize..y_end as usize);
        }
        (inside, cells)
    }

    pub fn density(&self, at: Point, points: &PointSet) -> f64 {
        let (inside, cells) = self.window(at, points);
        if cells == 0 {
            return 0.0;
        }
        inside as f64 / cells as f64
    }
}
