// ─────────────────────────────────────────────────────────────────────
// Mathieu Trap Core — Boundary Search
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closest point on the upper boundary to an arbitrary (q, a).
//!
//! Two-phase grid search: a coarse scan over [0, Q_MAX], then a fine scan
//! of a small window around the coarse minimiser. Brute force tolerates the
//! kink at q = 0.706 where a projection/Newton step would not.
//!
//! Default resolution (0.001 coarse, 1e-5 fine, ±0.01 window) costs about
//! 2,900 curve evaluations per query. Use [`BoundaryTable`] when the same
//! search runs many times.

use crate::boundary::{upper_boundary, upper_boundary_array};
use ndarray::Array1;
use trap_types::config::SearchConfig;
use trap_types::constants::Q_MAX;
use trap_types::error::TrapResult;
use trap_types::state::BoundaryPoint;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    point: BoundaryPoint,
    distance: f64,
}

impl Candidate {
    fn new(q_b: f64, a_b: f64, q: f64, a: f64) -> Self {
        let point = BoundaryPoint { q: q_b, a: a_b };
        Candidate {
            distance: point.distance_to(q, a),
            point,
        }
    }

    /// Strict comparison: on ties the earlier (lower q) sample wins.
    fn keep_closer(&mut self, other: Candidate) {
        if other.distance < self.distance {
            *self = other;
        }
    }
}

/// i-th coarse sample. The last sample is pinned to Q_MAX.
#[inline]
fn coarse_q(i: usize, n: usize, step: f64) -> f64 {
    if i == n {
        Q_MAX
    } else {
        (i as f64 * step).min(Q_MAX)
    }
}

fn coarse_grid(config: &SearchConfig) -> Array1<f64> {
    let n = config.coarse_intervals();
    Array1::from_iter((0..=n).map(|i| coarse_q(i, n, config.coarse_step)))
}

fn refine(q: f64, a: f64, coarse_best: Candidate, config: &SearchConfig) -> BoundaryPoint {
    let lo = (coarse_best.point.q - config.fine_window).max(0.0);
    let hi = (coarse_best.point.q + config.fine_window).min(Q_MAX);
    let steps = ((hi - lo) / config.fine_step).round() as usize;

    let mut best = coarse_best;
    for j in 0..=steps {
        let q_b = (lo + j as f64 * config.fine_step).min(hi);
        best.keep_closer(Candidate::new(q_b, upper_boundary(q_b), q, a));
    }
    best.point
}

/// Nearest boundary point to `(q, a)` at the default resolution.
///
/// Accepts any real pair; the result always lies on the curve within
/// `[0, Q_MAX]`. Non-finite input degrades to the first coarse sample.
pub fn find_nearest_boundary_point(q: f64, a: f64) -> BoundaryPoint {
    search_unchecked(q, a, &SearchConfig::default())
}

/// Same search with a caller-supplied resolution.
pub fn find_nearest_boundary_point_with(
    q: f64,
    a: f64,
    config: &SearchConfig,
) -> TrapResult<BoundaryPoint> {
    config.validate()?;
    Ok(search_unchecked(q, a, config))
}

fn search_unchecked(q: f64, a: f64, config: &SearchConfig) -> BoundaryPoint {
    let n = config.coarse_intervals();
    let mut best = Candidate::new(0.0, upper_boundary(0.0), q, a);
    for i in 1..=n {
        let q_b = coarse_q(i, n, config.coarse_step);
        best.keep_closer(Candidate::new(q_b, upper_boundary(q_b), q, a));
    }
    refine(q, a, best, config)
}

/// Coarse boundary samples evaluated once and reused across queries.
///
/// `nearest` returns exactly what [`find_nearest_boundary_point_with`]
/// returns for the same config; only the coarse-phase curve evaluations
/// are skipped.
#[derive(Debug, Clone)]
pub struct BoundaryTable {
    config: SearchConfig,
    q: Array1<f64>,
    a: Array1<f64>,
}

impl BoundaryTable {
    pub fn new() -> Self {
        let config = SearchConfig::default();
        let q = coarse_grid(&config);
        let a = upper_boundary_array(&q);
        BoundaryTable { config, q, a }
    }

    pub fn with_config(config: SearchConfig) -> TrapResult<Self> {
        config.validate()?;
        let q = coarse_grid(&config);
        let a = upper_boundary_array(&q);
        Ok(BoundaryTable { config, q, a })
    }

    pub fn nearest(&self, q: f64, a: f64) -> BoundaryPoint {
        let mut best = Candidate::new(self.q[0], self.a[0], q, a);
        for (&q_b, &a_b) in self.q.iter().zip(self.a.iter()).skip(1) {
            best.keep_closer(Candidate::new(q_b, a_b, q, a));
        }
        refine(q, a, best, &self.config)
    }
}

impl Default for BoundaryTable {
    fn default() -> Self {
        Self::new()
    }
}
