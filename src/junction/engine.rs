//! The junction calculation pipeline.

use serde::Serialize;

use crate::constants::{PhysicalConstants, DEFAULT_CONSTANTS};
use crate::error::{JunctionError, Result};
use crate::physics::current::{DEFAULT_MAX_EXPONENT, MAX_EXPONENT_LIMIT};
use crate::physics::{
    built_in_potential, depletion_width, junction_voltage, thermal_voltage, DepletionWidth,
    DiodeModel, OverflowPolicy,
};

use super::{JunctionInputs, JunctionResult};

/// What to do when forward bias exceeds the built-in potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum JunctionVoltagePolicy {
    /// Fail with [`JunctionError::NegativeJunctionVoltage`]
    #[default]
    Reject,
    /// Report zero depletion width and keep going
    ClampToZero,
}

/// Configuration for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineConfig {
    /// Exponent cap V / (n * Vt) for the diode law.
    pub max_exponent: f64,
    /// Behaviour above the exponent cap.
    pub overflow_policy: OverflowPolicy,
    /// Behaviour when Vbi - Vapp < 0.
    pub junction_voltage_policy: JunctionVoltagePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_exponent: DEFAULT_MAX_EXPONENT,
            overflow_policy: OverflowPolicy::default(),
            junction_voltage_policy: JunctionVoltagePolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exponent cap for the diode law.
    ///
    /// - 40 (default): linearizes above ~1 V for n = 1 at 300 K
    /// - larger values follow the exponential further, up to 700
    pub fn with_max_exponent(mut self, max_exponent: f64) -> Self {
        self.max_exponent = max_exponent;
        self
    }

    /// Set the behaviour above the exponent cap.
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Set the behaviour for a negative junction voltage.
    pub fn with_junction_voltage_policy(mut self, policy: JunctionVoltagePolicy) -> Self {
        self.junction_voltage_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_exponent > 0.0 && self.max_exponent <= MAX_EXPONENT_LIMIT {
            Ok(())
        } else {
            Err(JunctionError::invalid_parameter(
                "max_exponent",
                format!(
                    "must be in (0, {MAX_EXPONENT_LIMIT}] (got {})",
                    self.max_exponent
                ),
            ))
        }
    }
}

/// Stateless calculator holding its injected constants and configuration.
#[derive(Debug, Clone)]
pub struct JunctionEngine {
    constants: PhysicalConstants,
    config: EngineConfig,
}

impl Default for JunctionEngine {
    fn default() -> Self {
        Self {
            constants: *DEFAULT_CONSTANTS,
            config: EngineConfig::default(),
        }
    }
}

impl JunctionEngine {
    /// Create an engine, validating constants and configuration.
    pub fn new(constants: PhysicalConstants, config: EngineConfig) -> Result<Self> {
        constants.validate()?;
        config.validate()?;
        Ok(Self { constants, config })
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Inputs for the named preset, falling back to system defaults.
    pub fn inputs_for(&self, preset: &str) -> JunctionInputs {
        JunctionInputs::for_preset(preset, &self.constants)
    }

    /// Evaluate the full pipeline for one set of inputs.
    pub fn solve(&self, inputs: &JunctionInputs) -> Result<JunctionResult> {
        inputs.validate()?;
        let c = &self.constants;

        let vt = thermal_voltage(c, inputs.temperature)?;
        let vbi = built_in_potential(
            c,
            inputs.acceptor_density,
            inputs.donor_density,
            inputs.intrinsic_concentration,
            inputs.temperature,
        )?;
        let vj = junction_voltage(vbi, inputs.applied_bias);

        let (depletion, depletion_clamped) = match depletion_width(
            c,
            inputs.acceptor_density,
            inputs.donor_density,
            vbi,
            inputs.applied_bias,
            c.silicon_permittivity(),
        ) {
            Ok(w) => (w, false),
            Err(JunctionError::NegativeJunctionVoltage { vj, .. })
                if self.config.junction_voltage_policy == JunctionVoltagePolicy::ClampToZero =>
            {
                log::warn!("Junction voltage {vj:.4} V is negative; depletion width clamped to 0");
                (DepletionWidth::ZERO, true)
            }
            Err(e) => return Err(e),
        };

        let model = DiodeModel::new(inputs.diode_params(), vt)?
            .with_max_exponent(self.config.max_exponent)?
            .with_overflow_policy(self.config.overflow_policy);
        let diode = model.operating_point(inputs.applied_bias)?;

        log::debug!(
            "Vapp={:.4} V: Vt={:.5} V, Vbi={:.4} V, W={:.4e} cm, Id={:.4e} A",
            inputs.applied_bias,
            vt,
            vbi,
            depletion.total,
            diode.current
        );

        Ok(JunctionResult {
            thermal_voltage: vt,
            built_in_potential: vbi,
            junction_voltage: vj,
            depletion,
            depletion_clamped,
            diode,
        })
    }
}
