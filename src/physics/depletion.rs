//! Depletion-region width of an abrupt PN junction.
//!
//!   W  = sqrt((2 * eps_si * Vj / q) * (Na + Nd) / (Na * Nd))
//!   Wn = W * Na / (Na + Nd)
//!   Wp = W * Nd / (Na + Nd)
//!
//! with Vj = Vbi - Vapp (forward bias positive). The heavier-doped side holds
//! the thinner part of the region.

use serde::Serialize;

use crate::constants::PhysicalConstants;
use crate::error::{require_finite, require_positive, JunctionError, Result};

/// Depletion widths in cm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepletionWidth {
    /// Total width W (cm)
    pub total: f64,
    /// Extent into the n-type side, Wn (cm)
    pub n_side: f64,
    /// Extent into the p-type side, Wp (cm)
    pub p_side: f64,
}

impl DepletionWidth {
    /// A fully collapsed region.
    pub const ZERO: DepletionWidth = DepletionWidth {
        total: 0.0,
        n_side: 0.0,
        p_side: 0.0,
    };

    /// Split a total width between the two sides by doping ratio.
    ///
    /// Works from Nd/Na and Na/Nd so that Na + Nd is never formed.
    pub fn partition(total: f64, na: f64, nd: f64) -> Self {
        Self {
            total,
            n_side: total / (1.0 + nd / na),
            p_side: total / (1.0 + na / nd),
        }
    }

    fn is_finite(&self) -> bool {
        self.total.is_finite() && self.n_side.is_finite() && self.p_side.is_finite()
    }
}

/// Junction voltage Vbi - Vapp.
pub fn junction_voltage(vbi: f64, vapp: f64) -> f64 {
    vbi - vapp
}

/// Total depletion width (cm) for a non-negative junction voltage `vj`.
pub fn total_width(q: f64, eps_si: f64, na: f64, nd: f64, vj: f64) -> f64 {
    // (Na + Nd) / (Na * Nd) == 1/Na + 1/Nd
    ((2.0 * eps_si * vj / q) * (1.0 / na + 1.0 / nd)).sqrt()
}

/// Depletion widths for doping `na`/`nd` at built-in potential `vbi` and
/// applied bias `vapp`, in a medium of permittivity `eps_si` (F/cm).
pub fn depletion_width(
    constants: &PhysicalConstants,
    na: f64,
    nd: f64,
    vbi: f64,
    vapp: f64,
    eps_si: f64,
) -> Result<DepletionWidth> {
    if !(na.is_finite() && na > 0.0 && nd.is_finite() && nd > 0.0) {
        return Err(JunctionError::invalid_doping(
            na,
            nd,
            constants.intrinsic_concentration,
            "densities must be finite and > 0",
        ));
    }
    require_finite("Vbi", vbi)?;
    require_finite("Vapp", vapp)?;
    require_positive("eps_si", eps_si)?;

    let vj = junction_voltage(vbi, vapp);
    if !vj.is_finite() {
        return Err(JunctionError::overflow("junction voltage", vapp));
    }
    if vj < 0.0 {
        return Err(JunctionError::NegativeJunctionVoltage { vbi, vapp, vj });
    }

    let total = total_width(constants.elementary_charge, eps_si, na, nd, vj);
    let width = DepletionWidth::partition(total, na, nd);
    if !width.is_finite() {
        return Err(JunctionError::overflow("depletion width", vapp));
    }
    Ok(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS_SI: f64 = 1.0395e-12;

    #[test]
    fn test_reference_width() {
        let c = PhysicalConstants::default();
        let w = depletion_width(&c, 1e18, 1e17, 0.7, 0.0, EPS_SI).unwrap();

        // sqrt(2 * 1.0395e-12 * 0.7 / 1.602176634e-19 * 1.1e18 / 1e35)
        assert_relative_eq!(w.total, 9.995_796_602_406_945e-6, max_relative = 1e-6);
        assert_relative_eq!(w.n_side + w.p_side, w.total, max_relative = 1e-12);
    }

    #[test]
    fn test_heavier_side_is_thinner() {
        let c = PhysicalConstants::default();
        let w = depletion_width(&c, 1e18, 1e17, 0.8, 0.0, EPS_SI).unwrap();
        // n-side is lightly doped here, so it carries most of the width
        assert!(w.n_side > w.p_side);
        assert_relative_eq!(w.n_side / w.p_side, 10.0, max_relative = 1e-9);
    }

    #[test]
    fn test_reverse_bias_widens() {
        let c = PhysicalConstants::default();
        let zero = depletion_width(&c, 1e17, 1e16, 0.8, 0.0, EPS_SI).unwrap();
        let reverse = depletion_width(&c, 1e17, 1e16, 0.8, -5.0, EPS_SI).unwrap();
        let forward = depletion_width(&c, 1e17, 1e16, 0.8, 0.4, EPS_SI).unwrap();
        assert!(reverse.total > zero.total);
        assert!(forward.total < zero.total);
    }

    #[test]
    fn test_flat_band_is_zero_width() {
        let c = PhysicalConstants::default();
        let w = depletion_width(&c, 1e17, 1e16, 0.8, 0.8, EPS_SI).unwrap();
        assert_eq!(w, DepletionWidth::ZERO);
    }

    #[test]
    fn test_excess_forward_bias_rejected() {
        let c = PhysicalConstants::default();
        let err = depletion_width(&c, 1e17, 1e16, 0.8, 1.0, EPS_SI).unwrap_err();
        match err {
            JunctionError::NegativeJunctionVoltage { vj, .. } => {
                assert_relative_eq!(vj, -0.2, max_relative = 1e-9)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let c = PhysicalConstants::default();
        assert!(depletion_width(&c, 0.0, 1e16, 0.8, 0.0, EPS_SI).is_err());
        assert!(depletion_width(&c, 1e17, 1e16, 0.8, 0.0, 0.0).is_err());
        assert!(depletion_width(&c, 1e17, 1e16, f64::NAN, 0.0, EPS_SI).is_err());
    }

    #[test]
    fn test_partition_extreme_doping() {
        let c = PhysicalConstants::default();
        let w = depletion_width(&c, 1e308, 1e308, 0.8, 0.0, EPS_SI).unwrap();
        assert!(w.total > 0.0);
        assert_eq!(w.n_side, w.p_side);
        assert_relative_eq!(w.n_side + w.p_side, w.total, max_relative = 1e-12);

        let w = DepletionWidth::partition(1e-5, 1e308, 1e300);
        assert!(w.n_side > 0.0 && w.p_side > 0.0);
        assert_relative_eq!(w.n_side + w.p_side, 1e-5, max_relative = 1e-12);
    }

    #[test]
    fn test_width_overflow_rejected() {
        let c = PhysicalConstants::default();
        assert!(matches!(
            depletion_width(&c, 1e17, 1e16, 0.8, -1e308, EPS_SI),
            Err(JunctionError::NumericalOverflow { .. })
        ));
        assert!(matches!(
            depletion_width(&c, 1e-300, 1e-300, 0.8, 0.0, EPS_SI),
            Err(JunctionError::NumericalOverflow { .. })
        ));
        assert!(matches!(
            depletion_width(&c, 1e17, 1e16, 1e308, -1e308, EPS_SI),
            Err(JunctionError::NumericalOverflow { .. })
        ));
    }
}
