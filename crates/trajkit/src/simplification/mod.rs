//! Polyline simplification.
//!
//! All simplifiers take a vertex slice and return the kept indices in
//! along-trajectory order; for inputs with at least two vertices the
//! result always contains both endpoints.

mod agarwal;
mod chan_chin;
mod douglas_peucker;
mod imai_iri;

pub use agarwal::Agarwal;
pub use chan_chin::ChanChin;
pub use douglas_peucker::douglas_peucker;
pub use imai_iri::ImaiIri;

#[cfg(test)]
mod tests;
