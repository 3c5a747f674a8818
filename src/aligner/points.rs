use std::collections::BTreeSet;
use std::ops::Range;

use crate::types::Point;

/// Sparse set of confirmed points. Iteration is always by source index,
/// then target index, so every stage walking the set is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointSet {
    points: BTreeSet<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the point was already present.
    pub fn insert(&mut self, point: Point) -> bool {
        self.points.insert(point)
    }

    pub fn remove(&mut self, point: &Point) -> bool {
        self.points.remove(point)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    /// Snapshot of the current points, sorted.
    pub fn to_vec(&self) -> Vec<Point> {
        self.points.iter().copied().collect()
    }

    /// Number of points in column `i` whose target index lies in `targets`.
    pub fn count_in_column(&self, i: usize, targets: Range<usize>) -> usize {
        if targets.start >= targets.end {
            return 0;
        }
        self.points
            .range(Point::new(i, targets.start)..Point::new(i, targets.end))
            .count()
    }

    /// Number of distinct source indices.
    pub fn source_count(&self) -> usize {
        let mut count = 0;
        let mut last = None;
        for point in &self.points {
            if last != Some(point.i) {
                count += 1;
                last = Some(point.i);
            }
        }
        count
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::collections::btree_set::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
