//! Physical constants used by every junction formula.
//!
//! A single [`PhysicalConstants`] value is passed to each computation instead
//! of module-level globals. The default set uses CGS-style lengths (cm) for
//! permittivity and lattice constant, matching the cm⁻³ doping densities.

use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, JunctionError, Result};

/// Elementary charge (C)
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Vacuum permittivity (F/cm)
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_8128e-14;

/// Relative permittivity of silicon
pub const SILICON_RELATIVE_PERMITTIVITY: f64 = 11.7;

/// Boltzmann constant (J/K)
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// Reference temperature (K)
pub const REFERENCE_TEMPERATURE: f64 = 300.0;

/// Intrinsic carrier concentration of silicon at 300 K (cm⁻³)
pub const INTRINSIC_CONCENTRATION: f64 = 1.5e10;

/// Silicon lattice constant (cm)
pub const SILICON_LATTICE_CONSTANT: f64 = 5.43e-8;

/// Process-wide default constants.
pub static DEFAULT_CONSTANTS: LazyLock<PhysicalConstants> = LazyLock::new(PhysicalConstants::default);

/// Fixed physical scalars. Any field missing from a JSON file takes its
/// default value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    /// Elementary charge q (C)
    pub elementary_charge: f64,
    /// Vacuum permittivity eps0 (F/cm)
    pub vacuum_permittivity: f64,
    /// Relative permittivity of silicon
    pub silicon_relative_permittivity: f64,
    /// Boltzmann constant k (J/K)
    pub boltzmann: f64,
    /// Reference temperature (K)
    pub reference_temperature: f64,
    /// Intrinsic carrier concentration ni (cm⁻³)
    pub intrinsic_concentration: f64,
    /// Silicon lattice constant (cm)
    pub lattice_constant: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            elementary_charge: ELEMENTARY_CHARGE,
            vacuum_permittivity: VACUUM_PERMITTIVITY,
            silicon_relative_permittivity: SILICON_RELATIVE_PERMITTIVITY,
            boltzmann: BOLTZMANN,
            reference_temperature: REFERENCE_TEMPERATURE,
            intrinsic_concentration: INTRINSIC_CONCENTRATION,
            lattice_constant: SILICON_LATTICE_CONSTANT,
        }
    }
}

impl PhysicalConstants {
    /// Create the default constant set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reference temperature (K).
    pub fn with_reference_temperature(mut self, temperature: f64) -> Self {
        self.reference_temperature = temperature;
        self
    }

    /// Set the intrinsic carrier concentration (cm⁻³).
    pub fn with_intrinsic_concentration(mut self, ni: f64) -> Self {
        self.intrinsic_concentration = ni;
        self
    }

    /// Permittivity of silicon, eps_r * eps0 (F/cm).
    pub fn silicon_permittivity(&self) -> f64 {
        self.silicon_relative_permittivity * self.vacuum_permittivity
    }

    /// Thermal voltage kT/q at the given temperature (V).
    pub fn thermal_voltage(&self, temperature: f64) -> f64 {
        self.boltzmann * temperature / self.elementary_charge
    }

    /// Check every constant is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        require_positive("elementary_charge", self.elementary_charge)?;
        require_positive("vacuum_permittivity", self.vacuum_permittivity)?;
        require_positive(
            "silicon_relative_permittivity",
            self.silicon_relative_permittivity,
        )?;
        require_positive("boltzmann", self.boltzmann)?;
        require_positive("reference_temperature", self.reference_temperature)?;
        require_positive("intrinsic_concentration", self.intrinsic_concentration)?;
        require_positive("lattice_constant", self.lattice_constant)?;
        Ok(())
    }

    /// Parse constants from a JSON string. Call [`validate`](Self::validate)
    /// before use.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load constants from a JSON file and validate them.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| JunctionError::ConfigRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let constants = Self::from_json(&contents).map_err(|e| JunctionError::ConfigFormat {
            path: path.display().to_string(),
            source: e,
        })?;
        constants.validate()?;
        log::debug!("Loaded physical constants from {}", path.display());
        Ok(constants)
    }
}
