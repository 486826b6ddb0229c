// ─────────────────────────────────────────────────────────────────────
// Mathieu Trap Core — Physics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form ion/trap conversions that place a configuration on the
//! (q, a) stability diagram.
//!
//! q = 4 z e (V_rf/2) / (m ω² r₀²)
//! a = 8 z e V_dc / (m ω² r₀²)

use ndarray::Array1;
use std::f64::consts::PI;
use trap_types::config::QuadrupoleParams;
use trap_types::constants::{AVOGADRO, E_CHARGE};
use trap_types::state::OperatingPoint;

/// Angular drive frequency ω = 2πf [rad/s].
pub fn omega(frequency: f64) -> f64 {
    2.0 * PI * frequency
}

/// Mass of one particle [kg] from molar mass [kg/mol].
pub fn particle_mass(molar_mass: f64) -> f64 {
    molar_mass / AVOGADRO
}

/// m ω² r₀², shared denominator of q and a.
fn inertial_term(params: &QuadrupoleParams) -> f64 {
    let w = omega(params.frequency);
    particle_mass(params.molar_mass) * w * w * params.radius * params.radius
}

/// Mathieu q for a peak-to-peak RF amplitude `voltage_rf` [V].
pub fn mathieu_q(voltage_rf: f64, charge_state: i32, params: &QuadrupoleParams) -> f64 {
    4.0 * charge_state as f64 * E_CHARGE * (voltage_rf / 2.0) / inertial_term(params)
}

/// Mathieu a for a DC offset `voltage_dc` [V].
pub fn mathieu_a(voltage_dc: f64, charge_state: i32, params: &QuadrupoleParams) -> f64 {
    8.0 * charge_state as f64 * E_CHARGE * voltage_dc / inertial_term(params)
}

/// m/z [g/mol per unit charge] of the ion that sits at `q` for this RF amplitude.
///
/// m/z is already per unit charge, so `_charge_state` does not enter.
pub fn mass_to_charge(
    voltage_rf: f64,
    _charge_state: i32,
    params: &QuadrupoleParams,
    q: f64,
) -> f64 {
    let w = omega(params.frequency);
    4.0 * (voltage_rf / 2.0) * E_CHARGE / ((q / AVOGADRO) * w * w * params.radius * params.radius)
        * 1000.0
}

/// (q, a) for one RF/DC drive setting.
pub fn operating_point(
    voltage_rf: f64,
    voltage_dc: f64,
    charge_state: i32,
    params: &QuadrupoleParams,
) -> OperatingPoint {
    OperatingPoint::new(
        mathieu_q(voltage_rf, charge_state, params),
        mathieu_a(voltage_dc, charge_state, params),
    )
}

/// [`mathieu_q`] over an RF amplitude sweep.
pub fn mathieu_q_array(
    voltage_rf: &Array1<f64>,
    charge_state: i32,
    params: &QuadrupoleParams,
) -> Array1<f64> {
    voltage_rf.mapv(|v| mathieu_q(v, charge_state, params))
}

/// [`mathieu_a`] over a DC offset sweep.
pub fn mathieu_a_array(
    voltage_dc: &Array1<f64>,
    charge_state: i32,
    params: &QuadrupoleParams,
) -> Array1<f64> {
    voltage_dc.mapv(|v| mathieu_a(v, charge_state, params))
}
