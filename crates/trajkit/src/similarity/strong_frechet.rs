//! Strong Fréchet distance: Alt-Godau decision plus parametric search.
//!
//! Every freespace cell boundary is described by a convex scalar
//! polynomial (squared distance from a moving point on one segment to a
//! fixed vertex of the other). The decision procedure propagates
//! reachable intervals over one row of cells; the distance is then found
//! by bisection against a caller-supplied upper bound or by doubling
//! until the decision flips.

use tracing::debug;

use crate::error::{Error, Result};
use crate::geom::{sq_distance, sq_distance_segment, PointD};

/// Parametric search strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// Bisect between the endpoint lower bound and a caller-supplied
    /// upper bound.
    BisectionSearch,
    /// Double the candidate distance until the decision succeeds, then
    /// bisect the last interval.
    DoubleAndSearch,
}

/// Strong Fréchet distance functor.
#[derive(Clone, Copy, Debug)]
pub struct StrongFrechet {
    pub mode: SearchMode,
    /// Output tolerance of the parametric search.
    pub tolerance: f64,
    /// Upper bound for the bisection strategy; also caps the other
    /// strategies when set.
    pub upper_bound: Option<f64>,
}

impl Default for StrongFrechet {
    fn default() -> Self {
        Self {
            mode: SearchMode::DoubleAndSearch,
            tolerance: 1e-4,
            upper_bound: None,
        }
    }
}

/// Where the perpendicular foot of the vertex lands relative to the
/// segment, in the segment's canonical direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FootKind {
    On,
    Above,
    Below,
}

/// Convex boundary polynomial of a freespace cell edge.
#[derive(Clone, Copy, Debug)]
struct BoundaryPolynomial {
    parallel_distance: f64,
    perpendicular_distance: f64,
    minimum_epsilon: f64,
    kind: FootKind,
}

impl Default for BoundaryPolynomial {
    fn default() -> Self {
        Self {
            parallel_distance: 0.0,
            perpendicular_distance: 0.0,
            minimum_epsilon: 0.0,
            kind: FootKind::On,
        }
    }
}

/// Non-normalised interval of reachable boundary coordinates.
#[derive(Clone, Copy, Debug)]
struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    const EMPTY: Interval = Interval {
        min: f64::MAX,
        max: f64::MIN,
    };
    const FULL: Interval = Interval {
        min: f64::MIN,
        max: f64::MAX,
    };

    #[inline]
    fn is_empty(&self) -> bool {
        self.max < self.min
    }

    /// Clamp the lower bound by the predecessor's lower bound.
    #[inline]
    fn assign_max_to_min(&mut self, other: &Interval) {
        if self.is_empty() {
            return;
        }
        self.min = self.min.max(other.min);
    }
}

impl BoundaryPolynomial {
    /// Squared-distance polynomial from `point` to the segment
    /// `(seg_start, seg_end)`, decomposed into parallel and
    /// perpendicular parts.
    fn compute<const D: usize>(
        point: &PointD<D>,
        seg_start: &PointD<D>,
        seg_end: &PointD<D>,
    ) -> Self {
        let dir = seg_end - seg_start;
        let seg_len = dir.norm();
        let point_len = (point - seg_start).norm();
        let parallel = if seg_len == 0.0 {
            0.0
        } else {
            (point - seg_start).dot(&dir) / seg_len
        };
        let perpendicular = (point_len * point_len - parallel * parallel).max(0.0).sqrt();
        let minimum_epsilon = sq_distance_segment(point, seg_start, seg_end).sqrt();
        let kind = if parallel > seg_len {
            FootKind::Above
        } else if parallel < 0.0 {
            FootKind::Below
        } else {
            FootKind::On
        };
        Self {
            parallel_distance: parallel,
            perpendicular_distance: perpendicular,
            minimum_epsilon,
            kind,
        }
    }

    /// Boundary coordinates free for the given `epsilon`; empty when the
    /// ball cannot reach the segment.
    fn range(&self, epsilon: f64) -> Interval {
        if epsilon < self.minimum_epsilon {
            return Interval::EMPTY;
        }
        let half = (epsilon * epsilon - self.perpendicular_distance * self.perpendicular_distance)
            .max(0.0)
            .sqrt();
        let min = match self.kind {
            FootKind::Below => 0.0,
            _ => self.parallel_distance - half,
        };
        let max = match self.kind {
            FootKind::Above => self.parallel_distance,
            _ => self.parallel_distance + half,
        };
        Interval { min, max }
    }
}

/// Left and bottom boundary polynomials of one cell.
#[derive(Clone, Copy, Debug, Default)]
struct CellPolynomials {
    /// Index 0: bottom boundary, index 1: left boundary.
    polys: [BoundaryPolynomial; 2],
}

fn precompute_polynomials<const D: usize>(
    a: &[PointD<D>],
    b: &[PointD<D>],
) -> Vec<Vec<CellPolynomials>> {
    // Top/right boundaries are never stored: by convexity a monotone
    // path through a cell always enters through the left or bottom.
    let rows = a.len() - 1;
    let cols = b.len() - 1;
    let mut table = vec![vec![CellPolynomials::default(); cols]; rows];
    for (i, row) in table.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            cell.polys[0] = BoundaryPolynomial::compute(&a[i], &b[j], &b[j + 1]);
            cell.polys[1] = BoundaryPolynomial::compute(&b[j], &a[i], &a[i + 1]);
        }
    }
    table
}

#[derive(Clone, Copy, Debug)]
struct CellIntervals {
    intervals: [Interval; 2],
}

impl CellIntervals {
    const EMPTY: CellIntervals = CellIntervals {
        intervals: [Interval::EMPTY, Interval::EMPTY],
    };

    #[inline]
    fn is_reachable(&self) -> bool {
        !self.intervals[0].is_empty() || !self.intervals[1].is_empty()
    }
}

/// Alt-Godau decision over the precomputed polynomial table.
fn decide_table(polynomials: &[Vec<CellPolynomials>], epsilon: f64) -> bool {
    let max_i = polynomials.len();
    let max_j = polynomials[0].len();
    let sizes = [max_i, max_j];

    // Keep the DP row along the smaller dimension; iterate the other.
    let dim = usize::from(max_i > max_j);
    let secondary = 1 - dim;

    let free_space = |primary: usize, sec: usize, target: usize| -> Interval {
        let (r, c) = if dim == 0 { (primary, sec) } else { (sec, primary) };
        polynomials[r][c].polys[target].range(epsilon)
    };

    let mut progress = [
        vec![CellIntervals::EMPTY; sizes[dim]],
        vec![CellIntervals::EMPTY; sizes[dim]],
    ];
    let mut current = 0usize;

    progress[current][0].intervals[secondary] = Interval::FULL;
    progress[current][0].intervals[dim] = Interval::FULL;
    for i in 1..sizes[dim] {
        if progress[current][i - 1].intervals[dim].is_empty() {
            continue;
        }
        let mut interval = free_space(i, 0, dim);
        interval.assign_max_to_min(&progress[current][i - 1].intervals[dim]);
        progress[current][i].intervals[dim] = interval;
    }

    for j in 1..sizes[secondary] {
        let prev = current;
        current = 1 - current;
        for cell in progress[current].iter_mut() {
            *cell = CellIntervals::EMPTY;
        }

        if !progress[prev][0].intervals[secondary].is_empty() {
            let mut interval = free_space(0, j, secondary);
            interval.assign_max_to_min(&progress[prev][0].intervals[secondary]);
            progress[current][0].intervals[secondary] = interval;
        }

        let mut has_reachable = progress[current][0].is_reachable();
        for i in 1..sizes[dim] {
            let mut cell = CellIntervals::EMPTY;
            if progress[prev][i].is_reachable() {
                cell.intervals[secondary] = free_space(i, j, secondary);
                if progress[prev][i].intervals[dim].is_empty()
                    && !progress[prev][i].intervals[secondary].is_empty()
                {
                    cell.intervals[secondary]
                        .assign_max_to_min(&progress[prev][i].intervals[secondary]);
                }
            }
            if progress[current][i - 1].is_reachable() {
                cell.intervals[dim] = free_space(i, j, dim);
                if progress[current][i - 1].intervals[secondary].is_empty()
                    && !progress[current][i - 1].intervals[dim].is_empty()
                {
                    cell.intervals[dim]
                        .assign_max_to_min(&progress[current][i - 1].intervals[dim]);
                }
            }
            has_reachable = cell.is_reachable() || has_reachable;
            progress[current][i] = cell;
        }
        if !has_reachable {
            return false;
        }
    }

    progress[current][sizes[dim] - 1].is_reachable()
}

impl StrongFrechet {
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_upper_bound(mut self, upper_bound: f64) -> Self {
        self.upper_bound = Some(upper_bound);
        self
    }

    /// Decide whether the strong Fréchet distance of `a` and `b` is at
    /// most `epsilon` (within the configured tolerance).
    pub fn decide<const D: usize>(&self, a: &[PointD<D>], b: &[PointD<D>], epsilon: f64) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }
        if a.len() == 1 || b.len() == 1 {
            let (point, poly) = if a.len() == 1 { (&a[0], b) } else { (&b[0], a) };
            let max_dist = poly
                .iter()
                .map(|p| sq_distance(point, p).sqrt())
                .fold(0.0f64, f64::max);
            return max_dist <= epsilon + self.tolerance;
        }
        let min_eps = self.endpoint_lower_bound(a, b);
        if a.len() == 2 && b.len() == 2 {
            return min_eps <= epsilon + self.tolerance;
        }
        if min_eps > epsilon + self.tolerance {
            return false;
        }
        if let Some(upper) = self.upper_bound {
            if min_eps > upper + self.tolerance {
                return false;
            }
        }
        let polynomials = precompute_polynomials(a, b);
        decide_table(&polynomials, epsilon)
    }

    /// Compute the strong Fréchet distance of `a` and `b`.
    ///
    /// With `BisectionSearch` an upper bound must be configured; a bound
    /// below the distance yields [`Error::NotFound`].
    pub fn distance<const D: usize>(&self, a: &[PointD<D>], b: &[PointD<D>]) -> Result<f64> {
        if a.is_empty() || b.is_empty() {
            return Err(Error::InvalidInput("strong Frechet needs non-empty polylines"));
        }
        if a.len() == 1 || b.len() == 1 {
            let (point, poly) = if a.len() == 1 { (&a[0], b) } else { (&b[0], a) };
            let max_dist = poly
                .iter()
                .map(|p| sq_distance(point, p).sqrt())
                .fold(0.0f64, f64::max);
            return self.check_upper(max_dist);
        }
        let min_eps = self.endpoint_lower_bound(a, b);
        if a.len() == 2 && b.len() == 2 {
            return self.check_upper(min_eps);
        }
        match self.mode {
            SearchMode::BisectionSearch => {
                let upper = self.upper_bound.ok_or(Error::InvalidInput(
                    "bisection search requires an upper bound",
                ))?;
                if min_eps > upper {
                    return Err(Error::NotFound);
                }
                let polynomials = precompute_polynomials(a, b);
                if decide_table(&polynomials, min_eps + self.tolerance) {
                    return Ok(min_eps);
                }
                self.bisect(&polynomials, min_eps, upper)
            }
            SearchMode::DoubleAndSearch => {
                if let Some(upper) = self.upper_bound {
                    if min_eps > upper {
                        return Err(Error::NotFound);
                    }
                }
                let polynomials = precompute_polynomials(a, b);
                if decide_table(&polynomials, min_eps + self.tolerance) {
                    return Ok(min_eps + self.tolerance);
                }
                const MAX_DOUBLINGS: usize = 128;
                let mut current = min_eps.max(self.tolerance) * 2.0;
                for _ in 0..MAX_DOUBLINGS {
                    debug!(epsilon = current, "doubling strong Frechet candidate");
                    if decide_table(&polynomials, current) {
                        return self.bisect(&polynomials, current * 0.5, current);
                    }
                    current *= 2.0;
                }
                Err(Error::NotConverged(MAX_DOUBLINGS))
            }
        }
    }

    fn endpoint_lower_bound<const D: usize>(&self, a: &[PointD<D>], b: &[PointD<D>]) -> f64 {
        sq_distance(&a[0], &b[0])
            .max(sq_distance(&a[a.len() - 1], &b[b.len() - 1]))
            .sqrt()
    }

    fn check_upper(&self, value: f64) -> Result<f64> {
        match self.upper_bound {
            Some(upper) if value > upper + self.tolerance => Err(Error::NotFound),
            _ => Ok(value),
        }
    }

    /// Bisect `[lower, upper]` down to the configured tolerance; `upper`
    /// must satisfy the decision.
    fn bisect(
        &self,
        polynomials: &[Vec<CellPolynomials>],
        lower: f64,
        upper: f64,
    ) -> Result<f64> {
        if !decide_table(polynomials, upper) {
            return Err(Error::NotFound);
        }
        let mut lo = lower;
        let mut hi = upper;
        let mut best = upper;
        while (hi - lo).abs() >= self.tolerance {
            let mid = (lo + hi) * 0.5;
            if decide_table(polynomials, mid) {
                hi = mid;
                best = mid;
            } else {
                lo = mid;
            }
        }
        debug!(distance = best, "strong Frechet search converged");
        Ok(best)
    }
}
