//! Stability-diagram geometry for quadrupole trap analysis:
//! the modeled upper boundary a(q) and the nearest-boundary search.

pub mod boundary;
pub mod search;
