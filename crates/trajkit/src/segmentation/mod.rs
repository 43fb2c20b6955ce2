//! Trajectory segmentation.
//!
//! - `monotone_segmentation`: greedy doubling plus binary search over a
//!   range predicate that is monotone under prefix growth.
//! - Shipped criteria: minimum-enclosing-ball radius, max-min
//!   difference, one-sided range and max/min ratio.
//! - `ModelBasedSegmentation`: dynamic program over (parameter row x
//!   coefficient column) with an information criterion.

mod criteria;
mod model_based;

pub use criteria::{DifferenceCriterion, MinSphereCriterion, RangeCriterion, RatioCriterion};
pub use model_based::ModelBasedSegmentation;

/// Greedy segmentation of `items` under a monotone range predicate.
///
/// Returns the right endpoints of maximal prefixes satisfying `ok`; the
/// search restarts at each emitted boundary, so consecutive segments
/// share their boundary element. An input on which `ok` holds entirely
/// produces no boundaries.
///
/// The predicate must be monotone under prefix growth: once it fails on
/// a range it fails on every extension of that range.
pub fn monotone_segmentation<T, F>(items: &[T], mut ok: F) -> Vec<usize>
where
    F: FnMut(&[T]) -> bool,
{
    let n = items.len();
    let mut splits = Vec::new();
    let mut start = 0usize;
    while n - start > 1 {
        let remainder = n - start;

        // Exponential phase: largest power-of-two window still passing.
        let mut passing = 1usize;
        let mut probe = 2usize;
        while probe <= remainder && ok(&items[start..start + probe]) {
            passing = probe;
            probe *= 2;
        }

        let failing = if probe > remainder {
            if ok(&items[start..n]) {
                // The whole remainder forms the final segment.
                break;
            }
            remainder
        } else {
            probe
        };

        // Binary phase: largest passing window in [passing, failing).
        let mut lower = passing;
        let mut upper = failing;
        while upper > lower + 1 {
            let mid = (lower + upper) / 2;
            if ok(&items[start..start + mid]) {
                lower = mid;
            } else {
                upper = mid;
            }
        }
        // A window of two that fails still forms a minimal segment, to
        // guarantee progress.
        let len = lower.max(2);
        splits.push(start + len - 1);
        start += len - 1;
    }
    splits
}

/// Expand along-trajectory segment markers into one segment id per item.
///
/// `markers` holds ascending item indices, one per segment, the last
/// item included; the id increments after each marked item. Items past
/// the final marker keep the last id.
pub fn segment_ids(markers: &[usize], len: usize) -> Vec<usize> {
    let mut ids = Vec::with_capacity(len);
    let mut current = 0usize;
    let mut next_marker = markers.iter().copied().peekable();
    for index in 0..len {
        ids.push(current);
        if next_marker.peek() == Some(&index) {
            next_marker.next();
            current += 1;
        }
    }
    ids
}
