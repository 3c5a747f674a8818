use std::collections::BTreeMap;
use log::debug;

use crate::types::{Candidate, Point};
use super::points::PointSet;

/// Keeps the `k` best targets of every source index and the `k` best
/// sources of every target index. A coordinate is confirmed only when each
/// side ranks the other among its own `k` best (mutual agreement).
///
/// The result is still many-to-many; conflicts are settled later.
#[derive(Debug, Clone)]
pub struct MutualKBestSelector {
    k: usize,
    // (dice, other index) in encounter order
    by_source: BTreeMap<usize, Vec<(f64, usize)>>,
    by_target: BTreeMap<usize, Vec<(f64, usize)>>,
}

impl MutualKBestSelector {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            by_source: BTreeMap::new(),
            by_target: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, candidate: Candidate) {
        self.by_source.entry(candidate.source_index)
            .or_default()
            .push((candidate.dice, candidate.target_index));
        self.by_target.entry(candidate.target_index)
            .or_default()
            .push((candidate.dice, candidate.source_index));
    }

    pub fn record_all<'c, I>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = &'c Candidate>,
    {
        for candidate in candidates {
            self.record(*candidate);
        }
    }

    /// Best-first, ties kept in encounter order, truncated to `k`.
    fn k_best(k: usize, mut scored: Vec<(f64, usize)>) -> Vec<usize> {
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.into_iter().take(k).map(|(_, index)| index).collect()
    }

    pub fn select(self) -> PointSet {
        let k = self.k;
        let best_sources: BTreeMap<usize, Vec<usize>> = self.by_target
            .into_iter()
            .map(|(j, scored)| (j, Self::k_best(k, scored)))
            .collect();

        let mut points = PointSet::new();
        for (i, scored) in self.by_source {
            for j in Self::k_best(k, scored) {
                let mutual = best_sources.get(&j)
                    .map_or(false, |sources| sources.contains(&i));
                if mutual {
                    points.insert(Point::new(i, j));
                }
            }
        }

        debug!("{} points kept by mutual {}-best selection", points.len(), k);
        points
    }
}
