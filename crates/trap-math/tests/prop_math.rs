// ─────────────────────────────────────────────────────────────────────
// Mathieu Trap Core — Property-Based Tests (proptest) for trap-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for trap-math using proptest.
//!
//! Covers: boundary curve shape, nearest-point self-consistency and
//! idempotence, cached table equivalence.

use proptest::prelude::*;
use trap_math::boundary::upper_boundary;
use trap_math::search::{find_nearest_boundary_point, BoundaryTable};
use trap_types::constants::{Q_BLEND, Q_MAX, Q_SERIES_LOW};

// ── Boundary Curve Properties ────────────────────────────────────────

proptest! {
    /// The boundary is non-negative and below its apex on the charted range.
    #[test]
    fn boundary_bounded(q in 0.0f64..=Q_MAX) {
        let a = upper_boundary(q);
        prop_assert!(a >= 0.0, "a({}) = {}", q, a);
        prop_assert!(a <= upper_boundary(Q_BLEND) + 1e-15, "a({}) = {} above apex", q, a);
    }

    /// No jumps across either segment join.
    #[test]
    fn boundary_continuous_at_joins(eps in 1e-9f64..1e-4) {
        for &join in &[Q_SERIES_LOW, Q_BLEND] {
            let jump = (upper_boundary(join - eps) - upper_boundary(join + eps)).abs();
            prop_assert!(jump < 1e-3, "jump {} at q = {}", jump, join);
        }
    }
}

// ── Nearest-Point Search Properties ──────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A point on the curve is its own nearest boundary point.
    #[test]
    fn on_curve_point_is_fixed(q in 0.0f64..=Q_MAX) {
        let a = upper_boundary(q);
        let p = find_nearest_boundary_point(q, a);
        prop_assert!((p.q - q).abs() < 1e-4, "q = {}, q_b = {}", q, p.q);
        prop_assert!((p.a - a).abs() < 1e-4, "a = {}, a_b = {}", a, p.a);
    }

    /// Searching again from the result returns the result.
    #[test]
    fn search_idempotent(q in -0.5f64..1.5, a in -0.5f64..0.6) {
        let first = find_nearest_boundary_point(q, a);
        let second = find_nearest_boundary_point(first.q, first.a);
        prop_assert!((first.q - second.q).abs() < 1e-6,
            "q_b drifted {} -> {}", first.q, second.q);
        prop_assert!((first.a - second.a).abs() < 1e-6,
            "a_b drifted {} -> {}", first.a, second.a);
    }

    /// The result lies on the curve and inside the charted range.
    #[test]
    fn search_result_on_curve(q in -2.0f64..3.0, a in -2.0f64..2.0) {
        let p = find_nearest_boundary_point(q, a);
        prop_assert!((0.0..=Q_MAX).contains(&p.q));
        prop_assert_eq!(p.a, upper_boundary(p.q));
    }

    /// No sampled curve point is closer than the search result (up to the
    /// fine-grid resolution).
    #[test]
    fn search_beats_uniform_samples(q in 0.0f64..1.0, a in 0.0f64..0.4) {
        let p = find_nearest_boundary_point(q, a);
        let d = p.distance_to(q, a);
        for i in 0..=400 {
            let q_s = Q_MAX * i as f64 / 400.0;
            let d_s = (q - q_s).hypot(a - upper_boundary(q_s));
            prop_assert!(d <= d_s + 1e-5, "sample q = {} closer: {} < {}", q_s, d_s, d);
        }
    }

    /// The cached table gives bit-identical answers.
    #[test]
    fn table_matches_stateless(q in -0.5f64..1.5, a in -0.5f64..0.6) {
        let table = BoundaryTable::new();
        prop_assert_eq!(table.nearest(q, a), find_nearest_boundary_point(q, a));
    }
}
