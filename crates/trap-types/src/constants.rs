// ─────────────────────────────────────────────────────────────────────
// Mathieu Trap Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Elementary charge (C), exact SI value.
pub const E_CHARGE: f64 = 1.602176634e-19;

/// Avogadro constant (mol⁻¹), exact SI value.
pub const AVOGADRO: f64 = 6.02214076e23;

/// Upper end of the charted q axis. The boundary taper closes to a = 0 here.
pub const Q_MAX: f64 = 0.908;

/// Last q of the fourth-order series segment.
pub const Q_SERIES_LOW: f64 = 0.4;

/// Last q of the eighth-order series segment; the linear taper starts here.
pub const Q_BLEND: f64 = 0.706;
