// ─────────────────────────────────────────────────────────────────────
// Mathieu Trap Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

/// Position of the current ion/trap configuration on the (q, a) stability diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub q: f64,
    pub a: f64,
}

impl OperatingPoint {
    pub fn new(q: f64, a: f64) -> Self {
        OperatingPoint { q, a }
    }
}

/// A point lying on the modeled upper boundary, `a == upper_boundary(q)`,
/// with `q` inside `[0, Q_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryPoint {
    pub q: f64,
    pub a: f64,
}

impl BoundaryPoint {
    /// Straight-line distance on the (q, a) plane.
    pub fn distance_to(&self, q: f64, a: f64) -> f64 {
        (q - self.q).hypot(a - self.a)
    }
}

/// Boundary-proximity metrics for one operating point.
///
/// Either every field carries a value or every field is NaN
/// (see [`StabilityReport::suppressed`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityReport {
    /// a_b − a against the nearest boundary point
    pub delta_a: f64,
    /// |q_b − q|
    pub delta_q: f64,
    /// Euclidean distance to the nearest boundary point
    pub delta_e: f64,
    /// Acute angle of the offset vector against the q axis [deg]
    pub theta_deg: f64,
    /// Euclidean distance normalised by |(q_b, a_b)|
    pub s_norm: f64,
    /// Closest distance over all checked boundaries
    pub delta_min: f64,
    /// delta_a expressed as a DC voltage [V]
    pub voltage_diff: f64,
    /// delta_a / |a|
    pub resolution: f64,
}

impl StabilityReport {
    /// Report for an unstable configuration: nothing is meaningful, so nothing is shown.
    pub fn suppressed() -> Self {
        StabilityReport {
            delta_a: f64::NAN,
            delta_q: f64::NAN,
            delta_e: f64::NAN,
            theta_deg: f64::NAN,
            s_norm: f64::NAN,
            delta_min: f64::NAN,
            voltage_diff: f64::NAN,
            resolution: f64::NAN,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        self.fields().iter().all(|v| v.is_nan())
    }

    /// Fields in display order.
    pub fn fields(&self) -> [f64; 8] {
        [
            self.delta_a,
            self.delta_q,
            self.delta_e,
            self.theta_deg,
            self.s_norm,
            self.delta_min,
            self.voltage_diff,
            self.resolution,
        ]
    }
}
