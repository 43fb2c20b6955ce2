//! Trajectory utilities and statistics.

use crate::error::{Error, Result};
use crate::geo;
use crate::geom::{sq_distance, PointD, Vec2};
use crate::probe::Probe;

/// Consecutive time differences. With `match_input_len` a leading zero
/// keeps the output aligned with the input.
pub fn time_diffs(timestamps: &[f64], match_input_len: bool) -> Vec<f64> {
    let mut out = Vec::with_capacity(timestamps.len());
    if match_input_len && !timestamps.is_empty() {
        out.push(0.0);
    }
    for w in timestamps.windows(2) {
        out.push(w[1] - w[0]);
    }
    out
}

/// Consecutive Euclidean distances of a point sequence.
pub fn cartesian_distances<const D: usize>(points: &[PointD<D>], match_input_len: bool) -> Vec<f64> {
    let mut out = Vec::with_capacity(points.len());
    if match_input_len && !points.is_empty() {
        out.push(0.0);
    }
    for w in points.windows(2) {
        out.push(sq_distance(&w[0], &w[1]).sqrt());
    }
    out
}

/// Consecutive geodesic distances of a probe sequence.
pub fn geo_distances(probes: &[Probe], match_input_len: bool) -> Vec<f64> {
    let mut out = Vec::with_capacity(probes.len());
    if match_input_len && !probes.is_empty() {
        out.push(0.0);
    }
    for w in probes.windows(2) {
        out.push(geo::geodesic_distance(w[0].lat, w[0].lon, w[1].lat, w[1].lon));
    }
    out
}

/// Per-step speeds from aligned time-difference and distance sequences.
/// Zero time steps yield zero speed rather than infinity.
pub fn speeds(tdiffs: &[f64], distances: &[f64]) -> Vec<f64> {
    tdiffs
        .iter()
        .zip(distances)
        .map(|(dt, d)| if *dt == 0.0 { 0.0 } else { d / dt })
        .collect()
}

/// Great-circle headings of consecutive probe pairs, in [0, 360), with a
/// leading zero. A stationary step repeats the previous heading.
pub fn headings(probes: &[Probe]) -> Vec<f64> {
    let mut out = Vec::with_capacity(probes.len());
    if probes.is_empty() {
        return out;
    }
    out.push(0.0);
    let mut previous = 0.0f64;
    for w in probes.windows(2) {
        let current = geo::heading(w[0].lat, w[0].lon, w[1].lat, w[1].lon);
        let dist = geo::geodesic_distance(w[0].lat, w[0].lon, w[1].lat, w[1].lon);
        let heading = if current < 1e-5 && dist < 1e-5 {
            previous
        } else {
            current
        };
        out.push(heading);
        previous = heading;
    }
    out
}

/// Velocity vectors from aligned speed magnitudes and headings.
pub fn velocities(speeds: &[f64], headings: &[f64]) -> Vec<Vec2> {
    speeds
        .iter()
        .zip(headings)
        .map(|(s, h)| crate::probe::velocity(*s, *h))
        .collect()
}

/// Necessary check that the values form the index sequence 0..=last:
/// their sum must equal `last * (last + 1) / 2`.
pub fn is_sequence(values: &[usize]) -> bool {
    match values.last() {
        None => true,
        Some(&last) => values.iter().sum::<usize>() == last * (last + 1) / 2,
    }
}

/// Index of the smallest non-zero element, if any.
pub fn min_non_zero_element(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, value) in values.iter().enumerate() {
        if *value == 0.0 {
            continue;
        }
        match best {
            Some(b) if values[b] <= *value => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Coalesce overlapping `(low, high)` intervals in place.
///
/// Sorts descending by the low coordinate unless `sorted`, then sweeps
/// and merges; the vector is truncated to the merged intervals. The
/// merged set covers exactly the union of the input intervals.
pub fn merge_intervals(intervals: &mut Vec<(f64, f64)>, sorted: bool) {
    if intervals.len() < 2 {
        return;
    }
    if !sorted {
        intervals.sort_by(|a, b| b.0.total_cmp(&a.0).then(b.1.total_cmp(&a.1)));
    }
    let mut merged: Vec<(f64, f64)> = Vec::with_capacity(intervals.len());
    for &(low, high) in intervals.iter() {
        match merged.last_mut() {
            // Descending by low: the previous interval starts no earlier.
            Some(prev) if high >= prev.0 => {
                prev.0 = low;
                if high > prev.1 {
                    prev.1 = high;
                }
            }
            _ => merged.push((low, high)),
        }
    }
    *intervals = merged;
}

/// The consecutive time difference with the most neighbours within
/// `tolerance` (strictly), ties resolved towards the earlier difference.
pub fn dominant_time_difference(timestamps: &[f64], tolerance: f64) -> Option<f64> {
    if timestamps.len() < 2 {
        return None;
    }
    let diffs = time_diffs(timestamps, false);
    let mut best_idx = 0usize;
    let mut best_count = 0usize;
    for (i, a) in diffs.iter().enumerate() {
        let count = diffs.iter().filter(|b| (*a - **b).abs() < tolerance).count();
        if count > best_count {
            best_idx = i;
            best_count = count;
        }
    }
    Some(diffs[best_idx])
}

/// Total Euclidean length of a polyline.
pub fn trajectory_length<const D: usize>(points: &[PointD<D>]) -> f64 {
    points
        .windows(2)
        .map(|w| sq_distance(&w[0], &w[1]).sqrt())
        .sum()
}

/// Duration of a timestamp range (max minus min; zero below two samples).
pub fn trajectory_duration(timestamps: &[f64]) -> f64 {
    if timestamps.len() < 2 {
        return 0.0;
    }
    let min = timestamps.iter().copied().fold(f64::MAX, f64::min);
    let max = timestamps.iter().copied().fold(f64::MIN, f64::max);
    max - min
}

/// Per-suffix accumulated squared edge lengths: entry `i` is the squared
/// length sum of the polyline from vertex `i` to the end.
pub fn curve_squared_lengths<const D: usize>(points: &[PointD<D>]) -> Vec<f64> {
    if points.len() < 2 {
        return Vec::new();
    }
    let mut out = vec![0.0; points.len() - 1];
    let mut sum = 0.0;
    for i in (0..points.len() - 1).rev() {
        sum += sq_distance(&points[i], &points[i + 1]);
        out[i] = sum;
    }
    out
}

/// Statistic selector for per-segment speeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeedStatistic {
    Mean,
    Median,
    Min,
    Max,
    Variance,
}

/// Compute a statistic of the per-segment speeds of a timed polyline.
///
/// Speeds are segment length over segment duration; the variance is the
/// population variance. Inputs need at least two samples and strictly
/// increasing timestamps.
pub fn speed_statistic<const D: usize>(
    points: &[PointD<D>],
    timestamps: &[f64],
    statistic: SpeedStatistic,
) -> Result<f64> {
    if points.len() != timestamps.len() {
        return Err(Error::InvalidInput("points and timestamps must align"));
    }
    if points.len() < 2 {
        return Err(Error::InvalidInput("speed statistics need at least two samples"));
    }
    let mut segment_speeds = Vec::with_capacity(points.len() - 1);
    for i in 0..points.len() - 1 {
        let dt = timestamps[i + 1] - timestamps[i];
        if dt <= 0.0 {
            return Err(Error::NumericDegeneracy("non-increasing timestamps"));
        }
        segment_speeds.push(sq_distance(&points[i], &points[i + 1]).sqrt() / dt);
    }
    let n = segment_speeds.len() as f64;
    let value = match statistic {
        SpeedStatistic::Mean => segment_speeds.iter().sum::<f64>() / n,
        SpeedStatistic::Median => {
            segment_speeds.sort_by(f64::total_cmp);
            let mid = segment_speeds.len() / 2;
            if segment_speeds.len() % 2 == 1 {
                segment_speeds[mid]
            } else {
                (segment_speeds[mid - 1] + segment_speeds[mid]) / 2.0
            }
        }
        SpeedStatistic::Min => segment_speeds.iter().copied().fold(f64::MAX, f64::min),
        SpeedStatistic::Max => segment_speeds.iter().copied().fold(f64::MIN, f64::max),
        SpeedStatistic::Variance => {
            let mean = segment_speeds.iter().sum::<f64>() / n;
            segment_speeds.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / n
        }
    };
    Ok(value)
}
