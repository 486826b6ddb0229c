// ─────────────────────────────────────────────────────────────────────
// Mathieu Trap Core — Stability Metrics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Proximity of an operating point to the upper stability boundary.
//!
//! Every function here is total: no panics, no errors. The only division
//! guards are in [`resolution`] and [`voltage_diff`]; everything else follows
//! plain IEEE arithmetic.
//!
//! `vertical_distance` is measured against the 2D-nearest boundary point,
//! not against a(q) at the same q. Displayed margins are calibrated to this,
//! so it is not a same-q gap unless the nearest point shares q.

use trap_math::search::find_nearest_boundary_point;
use trap_types::constants::E_CHARGE;

/// a_b − a against the nearest boundary point. Positive below the curve.
pub fn vertical_distance(a: f64, q: f64) -> f64 {
    let nearest = find_nearest_boundary_point(q, a);
    nearest.a - a
}

/// |q_b − q| against the nearest boundary point.
pub fn horizontal_distance(q: f64, a: f64) -> f64 {
    let nearest = find_nearest_boundary_point(q, a);
    (nearest.q - q).abs()
}

/// Straight-line distance to the nearest boundary point.
pub fn euclidean_distance(a: f64, q: f64) -> f64 {
    let nearest = find_nearest_boundary_point(q, a);
    nearest.distance_to(q, a)
}

/// Acute angle [deg] between the offset vector (q → q_b, a → a_b) and the q axis.
///
/// Measured on the absolute components, which folds every quadrant into
/// [0, 90] (θ > 90 becomes 180 − θ). A zero-length offset gives 0.
pub fn angular_offset(a: f64, a_boundary: f64, q: f64, q_boundary: f64) -> f64 {
    let dq = q_boundary - q;
    let da = a_boundary - a;
    da.abs().atan2(dq.abs()).to_degrees()
}

/// Euclidean distance divided by the boundary point's distance from the origin.
///
/// Unguarded: a boundary point at the origin yields +inf (or NaN for 0/0).
pub fn normalized_stability_margin(a: f64, a_boundary: f64, q: f64, q_boundary: f64) -> f64 {
    let de = (q_boundary - q).hypot(a_boundary - a);
    de / a_boundary.hypot(q_boundary)
}

/// Smallest distance from (q, a) to any of the candidate boundary values at
/// `q_boundary`. Empty input gives +inf.
pub fn worst_case_boundary_proximity(a_boundaries: &[f64], a: f64, q: f64, q_boundary: f64) -> f64 {
    a_boundaries
        .iter()
        .map(|&a_b| (q_boundary - q).hypot(a_b - a))
        .fold(f64::INFINITY, f64::min)
}

/// Δa as a DC voltage step: ΔV = Δa · m · r₀² · ω² / (2 e z).
///
/// Zero charge state returns 0.
pub fn voltage_diff(
    delta_a: f64,
    particle_mass: f64,
    radius: f64,
    omega: f64,
    charge_state: i32,
) -> f64 {
    if charge_state == 0 {
        return 0.0;
    }
    delta_a * particle_mass * radius * radius * omega * omega
        / (2.0 * E_CHARGE * charge_state as f64)
}

/// Relative margin Δa / |a|; 0 when a == 0.
pub fn resolution(delta_a: f64, a: f64) -> f64 {
    if a != 0.0 {
        delta_a / a.abs()
    } else {
        0.0
    }
}
