//! Presentation units and formatting.
//!
//! Nothing here feeds back into a calculation: widths shown in lattice
//! constants or densities shown per µm³ are conversions of the values held in
//! [`JunctionResult`].

use std::fmt;

use serde::Serialize;

use crate::constants::PhysicalConstants;
use crate::junction::{JunctionInputs, JunctionResult};

/// cm⁻³ to µm⁻³.
pub fn per_cubic_micrometer(density_cm3: f64) -> f64 {
    density_cm3 / 1e12
}

/// Length in cm expressed in lattice constants `a` (cm).
pub fn lattice_constants(length_cm: f64, a: f64) -> f64 {
    length_cm / a
}

pub fn millivolts(volts: f64) -> f64 {
    volts * 1e3
}

pub fn microamps(amps: f64) -> f64 {
    amps * 1e6
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Scientific notation with `digits` fractional digits, e.g. `1.234e-5`.
pub fn format_sci(value: f64, digits: usize) -> String {
    format!("{value:.digits$e}")
}

const SI_PREFIXES: [(i32, &str); 9] = [
    (-15, "f"),
    (-12, "p"),
    (-9, "n"),
    (-6, "µ"),
    (-3, "m"),
    (0, ""),
    (3, "k"),
    (6, "M"),
    (9, "G"),
];

/// Format a value with an SI prefix and three significant digits.
pub fn format_eng(value: f64, unit: &str) -> String {
    if value == 0.0 {
        return format!("0 {unit}");
    }
    if !value.is_finite() {
        return format!("{value} {unit}");
    }

    let mut exp3 = ((value.abs().log10() / 3.0).floor() as i32 * 3).clamp(-15, 9);
    // log10 can land a hair off an exact power of ten
    if (value / 10f64.powi(exp3)).abs() < 1.0 - 1e-9 && exp3 > -15 {
        exp3 -= 3;
    }

    let rounded_at = |exp3: i32| {
        let raw = value / 10f64.powi(exp3);
        round_to(raw, eng_decimals(raw))
    };
    // Round before settling the prefix so 999.6 m becomes 1.00, not 1000 m.
    let mut scaled = rounded_at(exp3);
    if scaled.abs() >= 1000.0 && exp3 < 9 {
        exp3 += 3;
        scaled = rounded_at(exp3);
    }

    let prefix = SI_PREFIXES
        .iter()
        .find(|(e, _)| *e == exp3)
        .map(|(_, p)| *p)
        .unwrap_or("");
    let decimals = eng_decimals(scaled) as usize;
    format!("{scaled:.decimals$} {prefix}{unit}")
}

/// Decimal places that leave three significant digits, at most two.
fn eng_decimals(scaled: f64) -> i32 {
    if scaled == 0.0 {
        return 2;
    }
    (2 - scaled.abs().log10().floor() as i32).clamp(0, 2)
}

/// Form-ready view of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayResult {
    /// Thermal voltage (mV, 2 decimals)
    #[serde(rename = "Vt")]
    pub vt_mv: f64,
    /// Built-in potential (mV, 1 decimal)
    #[serde(rename = "Vbi")]
    pub vbi_mv: f64,
    /// n-side width in lattice constants
    #[serde(rename = "Wn")]
    pub wn: String,
    /// p-side width in lattice constants
    #[serde(rename = "Wp")]
    pub wp: String,
    /// Intrinsic density per µm³
    #[serde(rename = "ni")]
    pub ni: String,
    #[serde(rename = "Rs")]
    pub rs: f64,
    /// Diode current, engineering notation
    #[serde(rename = "Id")]
    pub id: String,
    /// Terminal voltage (V, 3 decimals)
    #[serde(rename = "Vterminal")]
    pub vterminal: f64,
    /// Leakage current (µA)
    #[serde(rename = "Ileak")]
    pub ileak_ua: f64,
    #[serde(rename = "Vapp")]
    pub vapp: f64,
    #[serde(rename = "Is")]
    pub is: f64,
    #[serde(rename = "n")]
    pub n: f64,
}

impl DisplayResult {
    pub fn new(
        inputs: &JunctionInputs,
        result: &JunctionResult,
        constants: &PhysicalConstants,
    ) -> Self {
        let a = constants.lattice_constant;
        Self {
            vt_mv: round_to(millivolts(result.thermal_voltage), 2),
            vbi_mv: round_to(millivolts(result.built_in_potential), 1),
            wn: format_sci(lattice_constants(result.wn(), a), 3),
            wp: format_sci(lattice_constants(result.wp(), a), 3),
            ni: format!(
                "{} /µm³",
                format_sci(per_cubic_micrometer(inputs.intrinsic_concentration), 2)
            ),
            rs: inputs.series_resistance,
            id: format_eng(result.current(), "A"),
            vterminal: round_to(result.terminal_voltage(), 3),
            ileak_ua: microamps(result.leakage()),
            vapp: inputs.applied_bias,
            is: inputs.saturation_current,
            n: inputs.ideality,
        }
    }
}

impl fmt::Display for DisplayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vapp       {} V", self.vapp)?;
        writeln!(f, "Vt         {} mV", self.vt_mv)?;
        writeln!(f, "Vbi        {} mV", self.vbi_mv)?;
        writeln!(f, "Wn         {} a", self.wn)?;
        writeln!(f, "Wp         {} a", self.wp)?;
        writeln!(f, "ni         {}", self.ni)?;
        writeln!(f, "Is         {} A", self.is)?;
        writeln!(f, "n          {}", self.n)?;
        writeln!(f, "Rs         {} Ω", self.rs)?;
        writeln!(f, "Id         {}", self.id)?;
        writeln!(f, "Vterminal  {} V", self.vterminal)?;
        write!(f, "Ileak      {} µA", self.ileak_ua)
    }
}
