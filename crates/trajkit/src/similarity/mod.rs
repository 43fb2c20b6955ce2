//! Similarity and distance measures between polylines.
//!
//! - `discrete_hausdorff`, `discrete_frechet`, `dynamic_time_warping`:
//!   O(nm) dynamic programs over polyline vertices.
//! - `weak_frechet`: min-max path over the freespace grid graph.
//! - `StrongFrechet`: Alt-Godau decision procedure plus parametric
//!   search (bisection or double-and-search).
//! - `Lcss`: epsilon-delta longest common subsequence.

mod discrete;
mod lcss;
mod strong_frechet;
mod weak_frechet;

pub use discrete::{
    discrete_frechet, discrete_frechet_matrix, discrete_hausdorff, dynamic_time_warping,
    dynamic_time_warping_banded,
};
pub use lcss::Lcss;
pub use strong_frechet::{SearchMode, StrongFrechet};
pub use weak_frechet::{weak_frechet, weak_frechet_with_matching, MatchingStep};
