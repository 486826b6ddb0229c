//! Quadrupole trap stability analysis on the Mathieu (q, a) diagram.
//!
//! physics: drive/ion parameters to (q, a)
//! metrics: distances and angles to the upper boundary
//! stability: classification and suppressed/unsuppressed reports
//! analysis: end-to-end evaluation of a configured trap

pub mod analysis;
pub mod metrics;
pub mod physics;
pub mod stability;
