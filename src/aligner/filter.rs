use rayon::prelude::*;
use log::{debug, trace};

use crate::types::Point;
use super::density::LocalDensityEstimator;
use super::points::PointSet;

/// Removes points sitting in a sparse neighbourhood compared to the average.
///
/// All densities come from one snapshot taken before any removal, so the
/// outcome does not depend on the order points are visited in.
pub struct DensityFilter<'a> {
    estimator: &'a LocalDensityEstimator,
    min_density_ratio: f64,
}

impl<'a> DensityFilter<'a> {
    pub fn new(estimator: &'a LocalDensityEstimator, min_density_ratio: f64) -> Self {
        Self { estimator, min_density_ratio }
    }

    fn snapshot_densities(&self, points: &PointSet, parallel: bool) -> Vec<(Point, f64)> {
        let snapshot = points.to_vec();
        if parallel {
            snapshot.par_iter()
                .map(|&p| (p, self.estimator.density(p, points)))
                .collect()
        } else {
            snapshot.iter()
                .map(|&p| (p, self.estimator.density(p, points)))
                .collect()
        }
    }

    /// Returns the number of removed points and the average density of the
    /// snapshot (0 for an empty set).
    pub fn apply(&self, points: &mut PointSet, parallel: bool) -> (usize, f64) {
        let densities = self.snapshot_densities(points, parallel);
        let average = mean(&densities);
        if average <= 0.0 {
            return (0, average);
        }

        let mut removed = 0;
        for (point, density) in densities {
            let ratio = density / average;
            trace!(
                "i={} j={} local density={:.4} average density={:.4} ratio={:.2}",
                point.i, point.j, density, average, ratio
            );
            if ratio < self.min_density_ratio {
                points.remove(&point);
                removed += 1;
            }
        }

        debug!("{} points have been removed by the density filter", removed);
        (removed, average)
    }
}

fn mean(densities: &[(Point, f64)]) -> f64 {
    if densities.is_empty() {
        return 0.0;
    }
    densities.iter().map(|(_, d)| d).sum::<f64>() / densities.len() as f64
}

/// Leaves at most one target per source index, keeping the locally densest.
///
/// Unlike [`DensityFilter`], densities are recomputed against the live set,
/// which already reflects the resolutions made earlier in the pass.
pub struct ConflictResolver<'a> {
    estimator: &'a LocalDensityEstimator,
}

impl<'a> ConflictResolver<'a> {
    pub fn new(estimator: &'a LocalDensityEstimator) -> Self {
        Self { estimator }
    }

    /// Returns the number of removed points.
    pub fn apply(&self, points: &mut PointSet) -> usize {
        let mut removed = 0;
        let mut kept: Option<Point> = None;

        for point in points.to_vec() {
            let current = match kept {
                Some(current) if current.i == point.i => current,
                _ => {
                    kept = Some(point);
                    continue;
                }
            };

            let challenger = self.estimator.density(point, points);
            let incumbent = self.estimator.density(current, points);
            if challenger > incumbent {
                points.remove(&current);
                kept = Some(point);
            } else {
                points.remove(&point);
            }
            removed += 1;
        }

        debug!("{} conflicting points have been removed", removed);
        removed
    }
}
