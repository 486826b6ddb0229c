// ─────────────────────────────────────────────────────────────────────
// Mathieu Trap Core — Trap Evaluation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One full calculation for a configured trap: physical readouts, the
//! (q, a) operating point and its stability assessment.

use crate::physics::{mass_to_charge, omega, operating_point, particle_mass};
use crate::stability::{StabilityAnalyzer, StabilityAssessment};
use log::info;
use trap_types::config::TrapConfig;
use trap_types::error::TrapResult;
use trap_types::state::OperatingPoint;

/// Everything derived from a [`TrapConfig`].
#[derive(Debug, Clone)]
pub struct TrapEvaluation {
    pub name: String,
    /// [rad/s]
    pub omega: f64,
    /// [kg]
    pub particle_mass: f64,
    pub point: OperatingPoint,
    /// m/z at the operating q [g/mol per unit charge]
    pub mass_to_charge: f64,
    pub assessment: StabilityAssessment,
}

/// Validate the config, place the ion on the stability diagram and assess it.
pub fn evaluate(config: &TrapConfig) -> TrapResult<TrapEvaluation> {
    config.validate()?;
    let analyzer = StabilityAnalyzer::with_search(config.search)?;
    Ok(evaluate_with(config, &analyzer))
}

/// Same as [`evaluate`] with a caller-owned analyzer; the analyzer's search
/// resolution is used, not `config.search`. The config is assumed valid.
pub fn evaluate_with(config: &TrapConfig, analyzer: &StabilityAnalyzer) -> TrapEvaluation {
    let params = &config.quadrupole;
    let point = operating_point(
        config.voltage_rf,
        config.voltage_dc,
        config.charge_state,
        params,
    );
    let assessment = analyzer.assess(point, params, config.charge_state);

    info!(
        "event=trap_evaluate module=analysis status=ok name={:?} q={:.6} a={:.6} stable={}",
        config.name, point.q, point.a, assessment.stable
    );

    TrapEvaluation {
        name: config.name.clone(),
        omega: omega(params.frequency),
        particle_mass: particle_mass(params.molar_mass),
        point,
        mass_to_charge: mass_to_charge(config.voltage_rf, config.charge_state, params, point.q),
        assessment,
    }
}
