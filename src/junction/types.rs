//! Input and result records for a junction calculation.

use serde::Serialize;

use crate::constants::PhysicalConstants;
use crate::error::{require_finite, require_positive, JunctionError, Result};
use crate::params::ParamList;
use crate::physics::potential::doping_log_ratio;
use crate::physics::{DepletionWidth, DiodeOperatingPoint, DiodeParams};
use crate::presets::{default_preset, lookup_preset, DiodePreset};

/// Everything needed to evaluate one junction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JunctionInputs {
    /// Acceptor density Na (cm⁻³)
    pub acceptor_density: f64,
    /// Donor density Nd (cm⁻³)
    pub donor_density: f64,
    /// Intrinsic carrier concentration ni (cm⁻³)
    pub intrinsic_concentration: f64,
    /// Applied bias Vapp (V), positive for forward bias
    pub applied_bias: f64,
    /// Series resistance Rs (ohm)
    pub series_resistance: f64,
    /// Saturation current Is (A)
    pub saturation_current: f64,
    /// Ideality factor n
    pub ideality: f64,
    /// Temperature T (K)
    pub temperature: f64,
}

impl JunctionInputs {
    /// Inputs for a preset device at zero bias and the reference temperature.
    pub fn from_preset(preset: &DiodePreset, constants: &PhysicalConstants) -> Self {
        Self {
            acceptor_density: preset.acceptor_density,
            donor_density: preset.donor_density,
            intrinsic_concentration: preset.intrinsic_concentration,
            applied_bias: 0.0,
            series_resistance: preset.series_resistance,
            saturation_current: preset.saturation_current,
            ideality: preset.ideality,
            temperature: constants.reference_temperature,
        }
    }

    /// System defaults: the default device with ni and T from `constants`.
    pub fn defaults(constants: &PhysicalConstants) -> Self {
        let mut inputs = Self::from_preset(default_preset(), constants);
        inputs.intrinsic_concentration = constants.intrinsic_concentration;
        inputs
    }

    /// Inputs for the named preset, or the system defaults if it is unknown.
    pub fn for_preset(name: &str, constants: &PhysicalConstants) -> Self {
        match lookup_preset(name) {
            Some(preset) => Self::from_preset(preset, constants),
            None => {
                log::warn!("Unknown diode preset '{name}', using system defaults");
                Self::defaults(constants)
            }
        }
    }

    /// Set the applied bias.
    pub fn with_bias(mut self, vapp: f64) -> Self {
        self.applied_bias = vapp;
        self
    }

    /// Override fields from a parameter list.
    ///
    /// Recognised names (case-insensitive): `Na`, `Nd`, `ni`, `Vapp`, `Rs`,
    /// `Is`, `n`, `T`.
    pub fn with_params(mut self, params: &ParamList) -> Result<Self> {
        for (key, value) in params.iter() {
            let field = match key.to_ascii_lowercase().as_str() {
                "na" => &mut self.acceptor_density,
                "nd" => &mut self.donor_density,
                "ni" => &mut self.intrinsic_concentration,
                "vapp" => &mut self.applied_bias,
                "rs" => &mut self.series_resistance,
                "is" => &mut self.saturation_current,
                "n" => &mut self.ideality,
                "t" => &mut self.temperature,
                _ => {
                    return Err(JunctionError::invalid_parameter(key, "unknown junction parameter"))
                }
            };
            *field = value;
        }
        Ok(self)
    }

    /// Diode-law parameters.
    pub fn diode_params(&self) -> DiodeParams {
        DiodeParams::new(self.saturation_current, self.ideality, self.series_resistance)
    }

    /// Check every field before any formula runs.
    pub fn validate(&self) -> Result<()> {
        doping_log_ratio(
            self.acceptor_density,
            self.donor_density,
            self.intrinsic_concentration,
        )?;
        require_positive("T", self.temperature)?;
        require_finite("Vapp", self.applied_bias)?;
        self.diode_params().validate()
    }
}

/// Derived junction quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JunctionResult {
    /// Thermal voltage Vt (V)
    pub thermal_voltage: f64,
    /// Built-in potential Vbi (V)
    pub built_in_potential: f64,
    /// Junction voltage Vj = Vbi - Vapp (V)
    pub junction_voltage: f64,
    /// Depletion widths (cm)
    pub depletion: DepletionWidth,
    /// Whether the depletion widths were clamped to zero
    pub depletion_clamped: bool,
    /// Current and terminal quantities at Vapp
    pub diode: DiodeOperatingPoint,
}

impl JunctionResult {
    /// Depletion width on the n side (cm).
    pub fn wn(&self) -> f64 {
        self.depletion.n_side
    }

    /// Depletion width on the p side (cm).
    pub fn wp(&self) -> f64 {
        self.depletion.p_side
    }

    /// Diode current (A).
    pub fn current(&self) -> f64 {
        self.diode.current
    }

    /// Terminal voltage (V).
    pub fn terminal_voltage(&self) -> f64 {
        self.diode.terminal_voltage
    }

    /// Leakage current (A).
    pub fn leakage(&self) -> f64 {
        self.diode.leakage
    }
}
