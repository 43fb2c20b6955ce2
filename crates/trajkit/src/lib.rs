//! Algorithms for analysing GPS-like movement trajectories.
//!
//! A trajectory is an ordered sequence of geolocated, time-stamped
//! samples. This crate provides the geometric primitives and the
//! algorithmic layers on top of them: similarity measures (discrete
//! Hausdorff/Fréchet, DTW, LCSS, weak and strong Fréchet), polyline
//! simplification (Douglas–Peucker, Imai–Iri, Agarwal), trajectory
//! segmentation (monotone criteria and model-based), Brownian-bridge
//! movement models, subtrajectory clustering, outlier rejection and
//! interpolation.
//!
//! All algorithms are stateless per call: configuration lives in small
//! immutable value types, inputs are borrowed slices, outputs are owned
//! by the caller. I/O, projections beyond the local reference frame, and
//! any CLI surface are out of scope.

pub mod bbmm;
pub mod clustering;
pub mod error;
pub mod freespace;
pub mod geo;
pub mod geom;
pub mod interp;
pub mod outlier;
pub mod probe;
pub mod segmentation;
pub mod similarity;
pub mod simplification;
pub mod stats;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use geom::{PointD, Tolerances, Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geo::LocalReference;
    pub use crate::geom::{PointD, Segment2, Sphere2, Tolerances, Vec2, Wedge};
    pub use crate::probe::{CartesianProbe, Probe};
    pub use crate::similarity::{
        discrete_frechet, discrete_hausdorff, dynamic_time_warping, Lcss, SearchMode,
        StrongFrechet,
    };
    pub use crate::simplification::{douglas_peucker, Agarwal, ChanChin, ImaiIri};
}
