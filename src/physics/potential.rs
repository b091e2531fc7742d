//! Thermal voltage and built-in potential.
//!
//!   Vt  = k * T / q
//!   Vbi = Vt * ln(Na * Nd / ni^2)
//!
//! The logarithm is expanded to ln(Na) + ln(Nd) - 2 ln(ni) so that the
//! density product is never formed.

use crate::constants::PhysicalConstants;
use crate::error::{require_positive, JunctionError, Result};

/// Thermal voltage kT/q at temperature `t` (K).
pub fn thermal_voltage(constants: &PhysicalConstants, t: f64) -> Result<f64> {
    require_positive("T", t)?;
    Ok(constants.thermal_voltage(t))
}

/// Check that all three densities are positive and Na * Nd > ni^2.
///
/// Returns ln(Na * Nd / ni^2) on success.
pub fn doping_log_ratio(na: f64, nd: f64, ni: f64) -> Result<f64> {
    for value in [na, nd, ni] {
        if !(value.is_finite() && value > 0.0) {
            return Err(JunctionError::invalid_doping(
                na,
                nd,
                ni,
                "densities must be finite and > 0",
            ));
        }
    }

    let log_ratio = na.ln() + nd.ln() - 2.0 * ni.ln();
    if log_ratio <= 0.0 {
        return Err(JunctionError::invalid_doping(
            na,
            nd,
            ni,
            "Na * Nd must exceed ni^2",
        ));
    }
    Ok(log_ratio)
}

/// Built-in potential (V) of an abrupt junction at temperature `t`.
pub fn built_in_potential(
    constants: &PhysicalConstants,
    na: f64,
    nd: f64,
    ni: f64,
    t: f64,
) -> Result<f64> {
    let log_ratio = doping_log_ratio(na, nd, ni)?;
    let vt = thermal_voltage(constants, t)?;
    Ok(vt * log_ratio)
}
