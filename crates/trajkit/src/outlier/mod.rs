//! Outlier detection over probe sequences.
//!
//! A binary consistency predicate decides whether two probes can belong
//! to the same movement; four strategies filter a trajectory under it.
//! All strategies return ordered index sequences into the input.

use crate::error::{Error, Result};
use crate::geo;
use crate::probe::{CartesianProbe, Probe};

/// Symmetric, reflexive consistency test over probe pairs.
pub trait ConsistencyPredicate<P> {
    fn consistent(&self, a: &P, b: &P) -> Result<bool>;
}

/// Linear speed bound on projected coordinates: squared displacement
/// over squared time difference must not exceed the squared threshold.
#[derive(Clone, Copy, Debug)]
pub struct CartesianSpeedBound {
    pub max_speed: f64,
}

impl CartesianSpeedBound {
    pub fn new(max_speed: f64) -> Self {
        Self { max_speed }
    }
}

impl ConsistencyPredicate<CartesianProbe> for CartesianSpeedBound {
    fn consistent(&self, a: &CartesianProbe, b: &CartesianProbe) -> Result<bool> {
        let dt = (b.time - a.time).abs();
        if dt == 0.0 {
            return Err(Error::NumericDegeneracy("zero time difference between probes"));
        }
        let squared_speed = (b.position - a.position).norm_squared() / (dt * dt);
        Ok(squared_speed <= self.max_speed * self.max_speed)
    }
}

/// Linear speed bound on geographic coordinates via the WGS-84 geodesic.
#[derive(Clone, Copy, Debug)]
pub struct GeoSpeedBound {
    pub max_speed: f64,
}

impl GeoSpeedBound {
    pub fn new(max_speed: f64) -> Self {
        Self { max_speed }
    }
}

impl ConsistencyPredicate<Probe> for GeoSpeedBound {
    fn consistent(&self, a: &Probe, b: &Probe) -> Result<bool> {
        let dt = (b.time - a.time).abs();
        if dt == 0.0 {
            return Err(Error::NumericDegeneracy("zero time difference between probes"));
        }
        let distance = geo::geodesic_distance(a.lat, a.lon, b.lat, b.lon);
        Ok(distance / dt <= self.max_speed)
    }
}

/// Keep the first probe, then accept each probe consistent with the last
/// accepted one.
pub fn greedy<P, Q: ConsistencyPredicate<P>>(probes: &[P], predicate: &Q) -> Result<Vec<usize>> {
    let mut kept = Vec::new();
    if probes.is_empty() {
        return Ok(kept);
    }
    kept.push(0);
    for i in 1..probes.len() {
        let last = kept[kept.len() - 1];
        if predicate.consistent(&probes[last], &probes[i])? {
            kept.push(i);
        }
    }
    Ok(kept)
}

/// All maximal greedy subsequences of maximal length, earliest start
/// first.
///
/// Every probe extends each open sequence whose tail it is consistent
/// with, and opens a new sequence when none accepts it; only the longest
/// sequences survive.
pub fn smart_greedy<P, Q: ConsistencyPredicate<P>>(
    probes: &[P],
    predicate: &Q,
) -> Result<Vec<Vec<usize>>> {
    let mut sequences: Vec<Vec<usize>> = Vec::new();
    for i in 0..probes.len() {
        let mut extended = false;
        for sequence in sequences.iter_mut() {
            let last = sequence[sequence.len() - 1];
            if predicate.consistent(&probes[last], &probes[i])? {
                sequence.push(i);
                extended = true;
            }
        }
        if !extended {
            sequences.push(vec![i]);
        }
    }
    let best = sequences.iter().map(Vec::len).max().unwrap_or(0);
    sequences.retain(|s| s.len() == best);
    Ok(sequences)
}

/// Split the trajectory into maximal runs of consecutive consistent
/// probes and keep the runs of at least `min_run` probes; when nothing
/// survives, the first probe is retained.
pub fn zheng<P, Q: ConsistencyPredicate<P>>(
    probes: &[P],
    predicate: &Q,
    min_run: usize,
) -> Result<Vec<usize>> {
    if min_run == 0 {
        return Err(Error::InvalidInput("window size must be positive"));
    }
    if probes.is_empty() {
        return Ok(Vec::new());
    }
    let mut kept = Vec::new();
    let mut run_start = 0usize;
    let mut flush = |start: usize, end: usize, kept: &mut Vec<usize>| {
        if end - start >= min_run {
            kept.extend(start..end);
        }
    };
    for i in 1..probes.len() {
        if !predicate.consistent(&probes[i - 1], &probes[i])? {
            flush(run_start, i, &mut kept);
            run_start = i;
        }
    }
    flush(run_start, probes.len(), &mut kept);
    if kept.is_empty() {
        kept.push(0);
    }
    Ok(kept)
}

/// Longest chain of pairwise-consistent probes, via quadratic dynamic
/// programming; the earliest feasible predecessor wins ties.
pub fn output_sensitive<P, Q: ConsistencyPredicate<P>>(
    probes: &[P],
    predicate: &Q,
) -> Result<Vec<usize>> {
    let n = probes.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    let mut best_len = vec![1usize; n];
    let mut predecessor = vec![usize::MAX; n];
    for i in 0..n {
        for j in 0..i {
            if best_len[j] + 1 > best_len[i] && predicate.consistent(&probes[j], &probes[i])? {
                best_len[i] = best_len[j] + 1;
                predecessor[i] = j;
            }
        }
    }
    let mut end = 0usize;
    for i in 1..n {
        if best_len[i] > best_len[end] {
            end = i;
        }
    }
    let mut chain = Vec::with_capacity(best_len[end]);
    let mut current = end;
    loop {
        chain.push(current);
        if predecessor[current] == usize::MAX {
            break;
        }
        current = predecessor[current];
    }
    chain.reverse();
    Ok(chain)
}
