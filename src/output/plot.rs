// Scatter-plot data: selected points and the kept intervals, as CSV

use std::fs;
use std::path::{Path, PathBuf};
use serde::Serialize;

use crate::aligner::PointSet;
use crate::error::Result;
use crate::types::Interval;

#[derive(Debug, Serialize)]
struct PointRow {
    i: usize,
    j: usize,
    kept: bool,
}

#[derive(Debug, Serialize)]
struct IntervalRow {
    begin_i: usize,
    begin_j: usize,
    end_i: usize,
    end_j: usize,
}

/// Write `<name>.<l1>-<l2>.points.csv` (every selected point, flagged when it
/// survived filtering) and `<name>.<l1>-<l2>.intervals.csv`.
pub fn write_plot_data(
    output_dir: &Path,
    stem: &str,
    selected: &PointSet,
    kept: &PointSet,
    intervals: &[Interval],
) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(output_dir)?;
    let points_path = output_dir.join(format!("{}.points.csv", stem));
    let intervals_path = output_dir.join(format!("{}.intervals.csv", stem));

    let mut writer = csv::Writer::from_path(&points_path)?;
    for point in selected {
        writer.serialize(PointRow { i: point.i, j: point.j, kept: kept.contains(point) })?;
    }
    writer.flush()?;

    let mut writer = csv::Writer::from_path(&intervals_path)?;
    for interval in intervals {
        writer.serialize(IntervalRow {
            begin_i: interval.begin.i,
            begin_j: interval.begin.j,
            end_i: interval.end.i,
            end_j: interval.end.j,
        })?;
    }
    writer.flush()?;

    Ok((points_path, intervals_path))
}
