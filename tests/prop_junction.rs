//! Property-based tests for the junction formulas using proptest.
//!
//! Covers: built-in potential positivity and monotonicity, depletion width
//! partition laws, diode current monotonicity, and the preset table.

use junction_core::junction::{EngineConfig, JunctionEngine, JunctionVoltagePolicy};
use junction_core::physics::depletion::total_width;
use junction_core::physics::{built_in_potential, depletion_width, diode_current, DiodeModel, DiodeParams};
use junction_core::presets::lookup_preset;
use junction_core::{JunctionError, PhysicalConstants};
use proptest::prelude::*;

const EPS_SI: f64 = 1.0395e-12;

// ── Built-in Potential ───────────────────────────────────────────────

proptest! {
    /// Vbi > 0 whenever Na * Nd > ni^2.
    #[test]
    fn vbi_positive_above_intrinsic(
        log_na in 11.0f64..21.0,
        log_nd in 11.0f64..21.0,
        log_ni in 6.0f64..10.5,
        t in 50.0f64..600.0,
    ) {
        let c = PhysicalConstants::default();
        let (na, nd, ni) = (10f64.powf(log_na), 10f64.powf(log_nd), 10f64.powf(log_ni));
        let vbi = built_in_potential(&c, na, nd, ni, t).unwrap();
        prop_assert!(vbi > 0.0);
        prop_assert!(vbi.is_finite());
    }

    /// Vbi is strictly increasing in Na.
    #[test]
    fn vbi_increases_with_acceptor_density(
        log_na in 12.0f64..20.0,
        factor in 1.01f64..100.0,
        log_nd in 12.0f64..20.0,
        t in 100.0f64..500.0,
    ) {
        let c = PhysicalConstants::default();
        let na = 10f64.powf(log_na);
        let nd = 10f64.powf(log_nd);
        let low = built_in_potential(&c, na, nd, 1e10, t).unwrap();
        let high = built_in_potential(&c, na * factor, nd, 1e10, t).unwrap();
        prop_assert!(high > low);
    }

    /// Sub-intrinsic doping is always an error, never a number.
    #[test]
    fn vbi_rejects_sub_intrinsic(
        log_na in 0.0f64..9.0,
        log_nd in 0.0f64..9.0,
    ) {
        let c = PhysicalConstants::default();
        let result = built_in_potential(&c, 10f64.powf(log_na), 10f64.powf(log_nd), 1e10, 300.0);
        let is_invalid_doping = matches!(result, Err(JunctionError::InvalidDoping { .. }));
        prop_assert!(is_invalid_doping);
    }
}

// ── Depletion Width ──────────────────────────────────────────────────

proptest! {
    /// Wn + Wp equals the independently computed total width.
    #[test]
    fn widths_sum_to_total(
        log_na in 14.0f64..20.0,
        log_nd in 14.0f64..20.0,
        vbi in 0.1f64..1.2,
        vapp in -20.0f64..0.1,
    ) {
        let c = PhysicalConstants::default();
        let (na, nd) = (10f64.powf(log_na), 10f64.powf(log_nd));
        let w = depletion_width(&c, na, nd, vbi, vapp, EPS_SI).unwrap();
        let total = total_width(c.elementary_charge, EPS_SI, na, nd, vbi - vapp);
        prop_assert!((w.n_side + w.p_side - total).abs() <= total * 1e-12);
        prop_assert!((w.total - total).abs() <= total * 1e-12);
    }

    /// Wn / Wp equals Na / Nd.
    #[test]
    fn width_ratio_matches_doping_ratio(
        log_na in 14.0f64..20.0,
        log_nd in 14.0f64..20.0,
        vbi in 0.1f64..1.2,
    ) {
        let c = PhysicalConstants::default();
        let (na, nd) = (10f64.powf(log_na), 10f64.powf(log_nd));
        let w = depletion_width(&c, na, nd, vbi, 0.0, EPS_SI).unwrap();
        let ratio = w.n_side / w.p_side;
        prop_assert!((ratio - na / nd).abs() <= (na / nd) * 1e-12);
    }

    /// Forward bias past Vbi is rejected.
    #[test]
    fn width_rejects_negative_junction_voltage(
        vbi in 0.1f64..1.2,
        excess in 1e-6f64..5.0,
    ) {
        let c = PhysicalConstants::default();
        let result = depletion_width(&c, 1e18, 1e17, vbi, vbi + excess, EPS_SI);
        let is_negative = matches!(result, Err(JunctionError::NegativeJunctionVoltage { .. }));
        prop_assert!(is_negative);
    }
}

// ── Diode Current ────────────────────────────────────────────────────

proptest! {
    /// Zero bias gives zero current and zero terminal voltage.
    #[test]
    fn zero_bias_zero_current(
        log_is in -16.0f64..-6.0,
        n in 1.0f64..2.5,
        rs in 0.0f64..100.0,
    ) {
        let is = 10f64.powf(log_is);
        let op = diode_current(0.0, is, n, 0.025852, rs).unwrap();
        prop_assert_eq!(op.current, 0.0);
        prop_assert_eq!(op.terminal_voltage, 0.0);
        prop_assert_eq!(op.leakage, -is);
    }

    /// Current strictly increases with forward bias, across the
    /// linearization boundary.
    #[test]
    fn current_monotonic_in_forward_bias(
        v in 0.0f64..5.0,
        dv in 1e-4f64..0.5,
        n in 1.0f64..2.0,
    ) {
        let model = DiodeModel::new(DiodeParams::new(1e-12, n, 10.0), 0.025852).unwrap();
        let i1 = model.current(v).unwrap();
        let i2 = model.current(v + dv).unwrap();
        prop_assert!(i2 > i1);
        prop_assert!(i2.is_finite());
    }
}

// ── Engine & Presets ─────────────────────────────────────────────────

proptest! {
    /// The engine never returns NaN or infinity, with or without clamping.
    #[test]
    fn engine_outputs_finite(
        vapp in -10.0f64..3.0,
        preset_index in 0usize..3,
    ) {
        let name = ["1N4148", "power", "led"][preset_index];
        let engine = JunctionEngine::new(
            PhysicalConstants::default(),
            EngineConfig::new().with_junction_voltage_policy(JunctionVoltagePolicy::ClampToZero),
        )
        .unwrap();
        let r = engine.solve(&engine.inputs_for(name).with_bias(vapp)).unwrap();
        prop_assert!(r.built_in_potential.is_finite());
        prop_assert!(r.depletion.total.is_finite());
        prop_assert!(r.current().is_finite());
        prop_assert!(r.terminal_voltage().is_finite());
    }
}

#[test]
fn preset_table_matches_reference() {
    let p = lookup_preset("1N4148").unwrap();
    assert_eq!(
        (p.saturation_current, p.ideality, p.series_resistance, p.donor_density, p.acceptor_density),
        (1e-12, 1.0, 10.0, 1e17, 1e18)
    );
    assert!(lookup_preset("nonexistent").is_none());
}

#[test]
fn end_to_end_reference_values() {
    let c = PhysicalConstants::default();
    let vt = c.thermal_voltage(300.0);
    assert!((vt - 0.02585).abs() < 1e-5);

    let vbi = built_in_potential(&c, 1e18, 1e17, 1e10, 300.0).unwrap();
    assert!((vbi - vt * 1e15f64.ln()).abs() < 1e-12);
    assert!((vbi - 0.892).abs() < 2e-3);

    // W = sqrt(2 * 1.0395e-12 * 0.7 / q * 1.1e18 / 1e35)
    let w = depletion_width(&c, 1e18, 1e17, 0.7, 0.0, EPS_SI).unwrap();
    let reference = 9.995_796_602_406_945e-6;
    assert!(((w.total - reference) / reference).abs() < 1e-6);
}
