// ─────────────────────────────────────────────────────────────────────
// Mathieu Trap Core — Stability
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Stable/unstable classification and the boundary-proximity report.
//!
//! A point is stable when it sits on or below a(q) at its own q. Unstable
//! points get a fully suppressed (all-NaN) report: negative margins above
//! the boundary would read as meaningful numbers, and they are not.

use crate::metrics::{
    angular_offset, normalized_stability_margin, resolution, voltage_diff,
    worst_case_boundary_proximity,
};
use crate::physics::{omega, particle_mass};
use log::{debug, warn};
use trap_math::boundary::upper_boundary;
use trap_math::search::{find_nearest_boundary_point, BoundaryTable};
use trap_types::config::{QuadrupoleParams, SearchConfig};
use trap_types::error::TrapResult;
use trap_types::state::{BoundaryPoint, OperatingPoint, StabilityReport};

/// `a <= a(q)`. NaN compares false, so NaN points are unstable.
pub fn is_stable(point: &OperatingPoint) -> bool {
    point.a <= upper_boundary(point.q)
}

/// Outcome of classifying one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityAssessment {
    pub point: OperatingPoint,
    pub stable: bool,
    /// Nearest boundary point; `None` when the report is suppressed.
    pub nearest: Option<BoundaryPoint>,
    pub report: StabilityReport,
}

/// Every metric from one shared nearest boundary point.
pub fn proximity_report(
    point: &OperatingPoint,
    nearest: &BoundaryPoint,
    params: &QuadrupoleParams,
    charge_state: i32,
) -> StabilityReport {
    let (q, a) = (point.q, point.a);
    let delta_a = nearest.a - a;
    StabilityReport {
        delta_a,
        delta_q: (nearest.q - q).abs(),
        delta_e: nearest.distance_to(q, a),
        theta_deg: angular_offset(a, nearest.a, q, nearest.q),
        s_norm: normalized_stability_margin(a, nearest.a, q, nearest.q),
        // Single stability region checked for now.
        delta_min: worst_case_boundary_proximity(&[nearest.a], a, q, nearest.q),
        voltage_diff: voltage_diff(
            delta_a,
            particle_mass(params.molar_mass),
            params.radius,
            omega(params.frequency),
            charge_state,
        ),
        resolution: resolution(delta_a, a),
    }
}

fn assess_with<F>(
    point: OperatingPoint,
    params: &QuadrupoleParams,
    charge_state: i32,
    nearest_of: F,
) -> StabilityAssessment
where
    F: Fn(f64, f64) -> BoundaryPoint,
{
    if !point.q.is_finite() || !point.a.is_finite() {
        warn!(
            "event=stability_assess module=stability status=non_finite q={} a={}",
            point.q, point.a
        );
    }

    if !is_stable(&point) {
        debug!(
            "event=stability_assess module=stability status=unstable q={:.6} a={:.6} a_boundary={:.6}",
            point.q,
            point.a,
            upper_boundary(point.q)
        );
        return StabilityAssessment {
            point,
            stable: false,
            nearest: None,
            report: StabilityReport::suppressed(),
        };
    }

    let nearest = nearest_of(point.q, point.a);
    let report = proximity_report(&point, &nearest, params, charge_state);
    debug!(
        "event=stability_assess module=stability status=stable q={:.6} a={:.6} q_b={:.6} a_b={:.6} delta_e={:.6}",
        point.q, point.a, nearest.q, nearest.a, report.delta_e
    );
    StabilityAssessment {
        point,
        stable: true,
        nearest: Some(nearest),
        report,
    }
}

/// Classify one point and, when stable, compute its proximity report.
pub fn assess(
    point: OperatingPoint,
    params: &QuadrupoleParams,
    charge_state: i32,
) -> StabilityAssessment {
    assess_with(point, params, charge_state, find_nearest_boundary_point)
}

/// Reusable assessor backed by a cached [`BoundaryTable`].
///
/// Immutable after construction; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct StabilityAnalyzer {
    table: BoundaryTable,
}

impl StabilityAnalyzer {
    pub fn new() -> Self {
        StabilityAnalyzer {
            table: BoundaryTable::new(),
        }
    }

    pub fn with_search(config: SearchConfig) -> TrapResult<Self> {
        Ok(StabilityAnalyzer {
            table: BoundaryTable::with_config(config)?,
        })
    }

    pub fn assess(
        &self,
        point: OperatingPoint,
        params: &QuadrupoleParams,
        charge_state: i32,
    ) -> StabilityAssessment {
        assess_with(point, params, charge_state, |q, a| self.table.nearest(q, a))
    }

    pub fn assess_batch(
        &self,
        points: &[OperatingPoint],
        params: &QuadrupoleParams,
        charge_state: i32,
    ) -> Vec<StabilityAssessment> {
        let assessments: Vec<_> = points
            .iter()
            .map(|&p| self.assess(p, params, charge_state))
            .collect();
        let n_stable = assessments.iter().filter(|s| s.stable).count();
        debug!(
            "event=stability_batch module=stability status=ok points={} stable={}",
            points.len(),
            n_stable
        );
        assessments
    }
}
