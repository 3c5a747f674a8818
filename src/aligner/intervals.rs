use log::{debug, trace};

use crate::config::AlignerConfig;
use crate::types::{Interval, Point};
use super::density::LocalDensityEstimator;
use super::points::PointSet;

/// Running state of the scan over points in source order.
#[derive(Debug, Clone, Copy)]
struct ScanState {
    begin: Point,
    last: Point,
    last_density: f64,
    // Points close to the diagonal since `begin`
    in_interval: usize,
}

/// Groups one-to-one points into disjoint intervals that follow the
/// diagonal. A positional jump larger than `max_gap_size` closes the open
/// interval; intervals too sparse horizontally are dropped.
pub struct IntervalBuilder<'a> {
    config: &'a AlignerConfig,
    estimator: &'a LocalDensityEstimator,
}

impl<'a> IntervalBuilder<'a> {
    pub fn new(config: &'a AlignerConfig, estimator: &'a LocalDensityEstimator) -> Self {
        Self { config, estimator }
    }

    /// The interval `begin..=last` if it is worth keeping.
    fn commit(&self, state: &ScanState) -> Option<Interval> {
        let ScanState { begin, last, in_interval, .. } = *state;
        if begin.i >= last.i || begin.j >= last.j {
            return None;
        }
        let horizontal_density = in_interval as f64 / (last.i - begin.i) as f64;
        if horizontal_density >= self.config.min_horizontal_density && in_interval > 1 {
            Some(Interval::new(begin, last))
        } else {
            debug!(
                "Interval ({}, {})-({}, {}) has been discarded (density too low: {:.3})",
                begin.i, begin.j, last.i, last.j, horizontal_density
            );
            None
        }
    }

    pub fn build(&self, points: &PointSet) -> Vec<Interval> {
        let origin = Point::new(0, 0);
        let mut state = ScanState {
            begin: origin,
            last: origin,
            last_density: self.estimator.density(origin, points),
            in_interval: 0,
        };
        let mut intervals = Vec::new();

        for &point in points {
            let density = self.estimator.density(point, points);

            // Distance to the diagonal continued from the previous point
            let expected_j = state.last.j as i64 + (point.i as i64 - state.last.i as i64);
            let off_diagonal = (point.j as i64 - expected_j).unsigned_abs() as usize;

            if off_diagonal <= self.config.max_dist_to_the_diagonal {
                state.in_interval += 1;
            } else if state.last_density > 0.0
                && density / state.last_density < self.config.density_drop_ratio
            {
                trace!(
                    "Skipping off-diagonal point ({}, {}): density {:.4} after {:.4}",
                    point.i, point.j, density, state.last_density
                );
                continue;
            }

            if point.distance(&state.last) > self.config.max_gap_size {
                trace!("Gap between ({}, {}) and ({}, {})", state.last.i, state.last.j, point.i, point.j);
                intervals.extend(self.commit(&state));
                state.begin = point;
                state.in_interval = 0;
            }

            state.last = point;
            state.last_density = density;
        }

        if state.last.i != state.begin.i {
            intervals.extend(self.commit(&state));
        }

        intervals
    }
}
