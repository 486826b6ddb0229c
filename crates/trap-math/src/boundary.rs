// ─────────────────────────────────────────────────────────────────────
// Mathieu Trap Core — Boundary Curve
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Upper edge of the first Mathieu stability region, a(q).
//!
//! Truncated perturbation series for the first characteristic value,
//! split in three regimes:
//!
//! - q ≤ 0.4: fourth order
//! - 0.4 < q ≤ 0.706: eighth order
//! - 0.706 < q ≤ 0.908: linear taper from a(0.706) down to 0 at q = 0.908
//!
//! The taper replaces the series where it loses accuracy. The curve is
//! continuous on the whole charted range but has a kink at q = 0.706.
//! Values must stay bit-compatible with the reference tables, so do not
//! swap in a "better" approximation here.

use ndarray::Array1;
use trap_types::constants::{Q_BLEND, Q_MAX, Q_SERIES_LOW};

/// q²/2 − 7q⁴/128
#[inline]
fn series_fourth_order(q: f64) -> f64 {
    let q2 = q * q;
    q2 / 2.0 - 7.0 * q2 * q2 / 128.0
}

/// q²/2 − 7q⁴/128 + 29q⁶/2304 − 68687q⁸/18874368
#[inline]
fn series_eighth_order(q: f64) -> f64 {
    let q2 = q * q;
    let q4 = q2 * q2;
    series_fourth_order(q) + 29.0 * q4 * q2 / 2304.0 - 68687.0 * q4 * q4 / 18_874_368.0
}

/// Upper stability boundary a(q).
///
/// Defined on `[0, Q_MAX]`. Negative q evaluates the (even) series;
/// q beyond `Q_MAX` returns 0, as does NaN.
pub fn upper_boundary(q: f64) -> f64 {
    if q <= Q_SERIES_LOW {
        series_fourth_order(q)
    } else if q <= Q_BLEND {
        series_eighth_order(q)
    } else if q <= Q_MAX {
        let a0 = series_eighth_order(Q_BLEND);
        let t = (q - Q_BLEND) / (Q_MAX - Q_BLEND);
        a0 * (1.0 - t)
    } else {
        0.0
    }
}

/// Element-wise [`upper_boundary`].
pub fn upper_boundary_array(q: &Array1<f64>) -> Array1<f64> {
    q.mapv(upper_boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_close_to_zero() {
        assert_eq!(upper_boundary(0.0), 0.0);
        assert_eq!(upper_boundary(Q_MAX), 0.0);
    }

    #[test]
    fn test_known_values() {
        // 0.2²/2 − 7·0.2⁴/128
        assert!((upper_boundary(0.2) - 0.019_912_5).abs() < 1e-12);
        assert!((upper_boundary(0.5) - 0.121_764_484_585_987_2).abs() < 1e-12);
        // peak of the curve, where the taper starts
        assert!((upper_boundary(Q_BLEND) - 0.236_965_539_476_938_4).abs() < 1e-12);
    }

    #[test]
    fn test_continuity_at_segment_joins() {
        let eps = 1e-9;
        for &join in &[Q_SERIES_LOW, Q_BLEND] {
            let left = upper_boundary(join - eps);
            let right = upper_boundary(join + eps);
            assert!(
                (left - right).abs() < 1e-3,
                "jump at q = {join}: {left} vs {right}"
            );
        }
        // The taper starts exactly at the eighth-order value.
        assert!((upper_boundary(Q_BLEND + 1e-12) - upper_boundary(Q_BLEND)).abs() < 1e-9);
    }

    #[test]
    fn test_rises_then_tapers() {
        let n = 2000;
        let mut prev = upper_boundary(0.0);
        for i in 1..=n {
            let q = Q_BLEND * i as f64 / n as f64;
            let a = upper_boundary(q);
            assert!(a > prev, "not increasing at q = {q}");
            prev = a;
        }
        for i in 1..=n {
            let q = Q_BLEND + (Q_MAX - Q_BLEND) * i as f64 / n as f64;
            let a = upper_boundary(q);
            assert!(a < prev, "not decreasing at q = {q}");
            prev = a;
        }
    }

    #[test]
    fn test_taper_is_linear() {
        let a0 = upper_boundary(Q_BLEND);
        let mid = 0.5 * (Q_BLEND + Q_MAX);
        assert!((upper_boundary(mid) - 0.5 * a0).abs() < 1e-12);
    }

    #[test]
    fn test_outside_charted_range() {
        assert_eq!(upper_boundary(1.2), 0.0);
        assert_eq!(upper_boundary(f64::NAN), 0.0);
        // even series
        assert_eq!(upper_boundary(-0.3), upper_boundary(0.3));
    }

    #[test]
    fn test_array_matches_scalar() {
        let q = Array1::linspace(0.0, Q_MAX, 501);
        let a = upper_boundary_array(&q);
        assert_eq!(a.len(), 501);
        for (qi, ai) in q.iter().zip(a.iter()) {
            assert_eq!(*ai, upper_boundary(*qi));
        }
    }
}
