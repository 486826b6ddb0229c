// ─────────────────────────────────────────────────────────────────────
// Mathieu Trap Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::Q_MAX;
use crate::error::{TrapError, TrapResult};
use serde::{Deserialize, Serialize};

/// Top-level trap configuration: one ion species in one quadrupole at one
/// RF/DC drive setting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrapConfig {
    pub name: String,
    pub quadrupole: QuadrupoleParams,
    /// RF amplitude, peak-to-peak [V]
    pub voltage_rf: f64,
    /// DC offset [V]
    pub voltage_dc: f64,
    pub charge_state: i32,
    /// Boundary search resolution. Defaults reproduce the reference grid.
    #[serde(default)]
    pub search: SearchConfig,
}

/// Geometry and drive of the quadrupole plus the ion's molar mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadrupoleParams {
    /// Drive frequency [Hz]
    pub frequency: f64,
    /// Field radius r₀ [m]
    pub radius: f64,
    /// Molar mass [kg/mol]
    pub molar_mass: f64,
}

impl QuadrupoleParams {
    pub fn new(frequency: f64, radius: f64, molar_mass: f64) -> Self {
        QuadrupoleParams {
            frequency,
            radius,
            molar_mass,
        }
    }

    /// All three fields must be finite and strictly positive.
    pub fn validate(&self) -> TrapResult<()> {
        require_positive("frequency", self.frequency)?;
        require_positive("radius", self.radius)?;
        require_positive("molar_mass", self.molar_mass)?;
        Ok(())
    }
}

/// Two-phase grid search resolution (coarse scan, then a fine window).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_coarse_step")]
    pub coarse_step: f64,
    #[serde(default = "default_fine_step")]
    pub fine_step: f64,
    /// Half-width of the fine window around the coarse minimiser.
    #[serde(default = "default_fine_window")]
    pub fine_window: f64,
}

/// Finest accepted coarse step; bounds the coarse scan to ~1e6 samples.
pub const MIN_COARSE_STEP: f64 = 1e-6;

/// Finest accepted fine step; the fine window is clamped to [0, Q_MAX], so
/// the fine scan stays below ~1e9 samples.
pub const MIN_FINE_STEP: f64 = 1e-9;

fn default_coarse_step() -> f64 {
    1e-3
}
fn default_fine_step() -> f64 {
    1e-5
}
fn default_fine_window() -> f64 {
    1e-2
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            coarse_step: default_coarse_step(),
            fine_step: default_fine_step(),
            fine_window: default_fine_window(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> TrapResult<()> {
        require_positive("search.coarse_step", self.coarse_step)?;
        require_positive("search.fine_step", self.fine_step)?;
        require_positive("search.fine_window", self.fine_window)?;
        if self.coarse_step < MIN_COARSE_STEP {
            return Err(TrapError::ConfigError(format!(
                "search.coarse_step {} is finer than the supported minimum {MIN_COARSE_STEP}",
                self.coarse_step
            )));
        }
        if self.fine_step < MIN_FINE_STEP {
            return Err(TrapError::ConfigError(format!(
                "search.fine_step {} is finer than the supported minimum {MIN_FINE_STEP}",
                self.fine_step
            )));
        }
        if self.fine_window > Q_MAX {
            return Err(TrapError::ConfigError(format!(
                "search.fine_window {} exceeds the charted q range {Q_MAX}",
                self.fine_window
            )));
        }
        if self.coarse_step > Q_MAX {
            return Err(TrapError::ConfigError(format!(
                "search.coarse_step {} exceeds the charted q range {Q_MAX}",
                self.coarse_step
            )));
        }
        if self.fine_step > self.fine_window {
            return Err(TrapError::ConfigError(format!(
                "search.fine_step {} is wider than search.fine_window {}",
                self.fine_step, self.fine_window
            )));
        }
        Ok(())
    }

    /// Number of coarse intervals spanning [0, Q_MAX].
    pub fn coarse_intervals(&self) -> usize {
        (Q_MAX / self.coarse_step).round() as usize
    }
}

impl TrapConfig {
    /// Load from a JSON file and validate it.
    pub fn from_file(path: &str) -> TrapResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TrapResult<()> {
        if self.name.trim().is_empty() {
            return Err(TrapError::ConfigError("trap name cannot be empty".to_string()));
        }
        self.quadrupole.validate()?;
        require_finite("voltage_rf", self.voltage_rf)?;
        require_finite("voltage_dc", self.voltage_dc)?;
        self.search.validate()
    }
}

fn require_finite(name: &'static str, value: f64) -> TrapResult<()> {
    if !value.is_finite() {
        return Err(TrapError::InvalidParameter {
            name,
            message: format!("must be finite, got {value}"),
        });
    }
    Ok(())
}

fn require_positive(name: &'static str, value: f64) -> TrapResult<()> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(TrapError::InvalidParameter {
            name,
            message: format!("must be > 0, got {value}"),
        });
    }
    Ok(())
}
