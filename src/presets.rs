//! Built-in diode presets.
//!
//! A small read-only table of named devices, built on first access and never
//! mutated afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::{JunctionError, Result};
use crate::params::ParamList;

/// Default device parameters for a named diode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiodePreset {
    pub name: &'static str,
    pub description: &'static str,
    /// Saturation current Is (A)
    pub saturation_current: f64,
    /// Ideality factor n
    pub ideality: f64,
    /// Series resistance Rs (ohm)
    pub series_resistance: f64,
    /// Donor density Nd (cm⁻³)
    pub donor_density: f64,
    /// Acceptor density Na (cm⁻³)
    pub acceptor_density: f64,
    /// Intrinsic carrier concentration ni (cm⁻³)
    pub intrinsic_concentration: f64,
}

impl DiodePreset {
    /// The preset as a `key=value` parameter list.
    pub fn params(&self) -> ParamList {
        let mut list = ParamList::new();
        list.set("Is", self.saturation_current);
        list.set("n", self.ideality);
        list.set("Rs", self.series_resistance);
        list.set("Nd", self.donor_density);
        list.set("Na", self.acceptor_density);
        list.set("ni", self.intrinsic_concentration);
        list
    }
}

/// Name of the preset used when none is requested.
pub const DEFAULT_PRESET: &str = "1N4148";

/// The device whose parameters serve as system defaults.
pub fn default_preset() -> &'static DiodePreset {
    &PRESET_TABLE[0]
}

static PRESET_TABLE: [DiodePreset; 3] = [
    DiodePreset {
        name: "1N4148",
        description: "Small-signal switching diode",
        saturation_current: 1e-12,
        ideality: 1.0,
        series_resistance: 10.0,
        donor_density: 1e17,
        acceptor_density: 1e18,
        intrinsic_concentration: 1e10,
    },
    DiodePreset {
        name: "power",
        description: "General-purpose power rectifier",
        saturation_current: 1e-8,
        ideality: 1.2,
        series_resistance: 0.5,
        donor_density: 1e15,
        acceptor_density: 1e17,
        intrinsic_concentration: 1e10,
    },
    DiodePreset {
        name: "led",
        description: "Light-emitting diode",
        saturation_current: 1e-14,
        ideality: 2.0,
        series_resistance: 20.0,
        donor_density: 1e17,
        acceptor_density: 1e17,
        intrinsic_concentration: 1e10,
    },
];

/// All presets, keyed by name.
pub static PRESETS: LazyLock<HashMap<&'static str, &'static DiodePreset>> =
    LazyLock::new(|| PRESET_TABLE.iter().map(|preset| (preset.name, preset)).collect());

/// Look up a preset by exact name.
pub fn lookup_preset(name: &str) -> Option<&'static DiodePreset> {
    PRESETS.get(name).copied()
}

/// Look up a preset, failing with [`JunctionError::InvalidPreset`] if unknown.
pub fn require_preset(name: &str) -> Result<&'static DiodePreset> {
    lookup_preset(name).ok_or_else(|| JunctionError::InvalidPreset {
        name: name.to_string(),
    })
}

/// Preset names in sorted order.
pub fn preset_names() -> Vec<&'static str> {
    let mut names: Vec<_> = PRESETS.keys().copied().collect();
    names.sort_unstable();
    names
}
