//! # Junction Core
//!
//! Steady-state characteristics of an abrupt silicon PN-junction diode.
//!
//! This library provides:
//! - Thermal voltage and built-in potential from doping densities
//! - Depletion-region width and its split between the n and p sides
//! - Shockley diode current with series resistance and overflow limiting
//! - A read-only table of named diode presets
//! - Display conversions for a browser form (µm⁻³, lattice constants, mV, µA)
//!
//! ## Architecture
//!
//! - [`constants`] - Physical constants, injected into every formula
//! - [`physics`] - The individual analytical formulas
//! - [`junction`] - Inputs/results and the [`JunctionEngine`] pipeline
//! - [`presets`] - Named device presets
//! - [`params`] - `key=value` parameter lists with unit suffixes
//! - [`display`] - Presentation units and formatting
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! junction solve --preset 1N4148 --vapp 0.6
//! junction sweep --preset led --start -1 --stop 1 --step 0.05 > iv.csv
//! ```
//!
//! ### Library
//!
//! ```
//! use junction_core::JunctionEngine;
//!
//! let engine = JunctionEngine::default();
//! let inputs = engine.inputs_for("1N4148").with_bias(0.5);
//! let result = engine.solve(&inputs).unwrap();
//! assert!(result.built_in_potential > 0.8);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmJunctionEngine } from 'junction_core';
//!
//! const engine = new WasmJunctionEngine();
//! const fields = JSON.parse(engine.calculate("1N4148", "Vapp=0.6"));
//! ```
//!
//! ## Sign Convention
//!
//! Applied bias is positive for forward bias. The junction voltage is
//! Vj = Vbi - Vapp, the diode law is evaluated at Vapp and the terminal
//! voltage is Vapp - Id * Rs.

pub mod constants;
pub mod display;
pub mod error;
pub mod junction;
pub mod params;
pub mod physics;
pub mod presets;

// Re-export main types for convenience
pub use constants::PhysicalConstants;
pub use error::{JunctionError, Result};
pub use junction::{BiasSweep, EngineConfig, JunctionEngine, JunctionInputs, JunctionResult};
pub use physics::{built_in_potential, depletion_width, diode_current};
pub use presets::{lookup_preset, DiodePreset};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmJunctionEngine;
