//! WASM bindings for Junction Core.
//!
//! This module provides JavaScript-friendly bindings so a browser form can
//! evaluate the junction model locally.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmJunctionEngine, preset } from 'junction_core';
//!
//! await init();
//!
//! const engine = new WasmJunctionEngine();
//!
//! // On device change:
//! const defaults = JSON.parse(preset("1N4148"));
//!
//! // On field blur:
//! const fields = JSON.parse(engine.calculate("1N4148", "Na=1e18,Nd=1e17,Vapp=0.6"));
//! document.getElementById("Vbi").value = fields.Vbi;
//! ```

use wasm_bindgen::prelude::*;

use crate::constants::PhysicalConstants;
use crate::display::DisplayResult;
use crate::junction::{EngineConfig, JunctionEngine, JunctionVoltagePolicy};
use crate::params::ParamList;
use crate::physics;
use crate::presets;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM-compatible junction calculator.
///
/// This struct wraps the native [`JunctionEngine`] and returns results as
/// JSON strings keyed by the form's field names.
#[wasm_bindgen]
pub struct WasmJunctionEngine {
    engine: JunctionEngine,
}

#[wasm_bindgen]
impl WasmJunctionEngine {
    /// Create an engine with default constants.
    ///
    /// # Example
    /// ```javascript
    /// const engine = new WasmJunctionEngine();
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmJunctionEngine {
        WasmJunctionEngine {
            engine: JunctionEngine::default(),
        }
    }

    /// Create an engine with custom constants and limiting behaviour.
    ///
    /// # Arguments
    /// * `constants_json` - Physical constants as JSON; missing fields take defaults
    /// * `max_exponent` - Exponent cap for the diode law (default: 40)
    /// * `clamp_depletion` - Report zero width instead of failing when Vapp > Vbi
    #[wasm_bindgen]
    pub fn with_config(
        constants_json: &str,
        max_exponent: f64,
        clamp_depletion: bool,
    ) -> Result<WasmJunctionEngine, JsValue> {
        let constants = PhysicalConstants::from_json(constants_json).map_err(js_error)?;
        let policy = if clamp_depletion {
            JunctionVoltagePolicy::ClampToZero
        } else {
            JunctionVoltagePolicy::Reject
        };
        let config = EngineConfig::new()
            .with_max_exponent(max_exponent)
            .with_junction_voltage_policy(policy);
        let engine = JunctionEngine::new(constants, config).map_err(js_error)?;
        Ok(WasmJunctionEngine { engine })
    }

    /// Evaluate a device and return the form fields as JSON.
    ///
    /// # Arguments
    /// * `preset` - Device name; unknown names use system defaults
    /// * `overrides` - `key=value` list, e.g. `"Na=1e18,Vapp=0.6"`
    #[wasm_bindgen]
    pub fn calculate(&self, preset: &str, overrides: &str) -> Result<String, JsValue> {
        let params = ParamList::parse(overrides).map_err(js_error)?;
        let inputs = self
            .engine
            .inputs_for(preset)
            .with_params(&params)
            .map_err(js_error)?;
        let result = self.engine.solve(&inputs).map_err(js_error)?;
        let display = DisplayResult::new(&inputs, &result, self.engine.constants());
        serde_json::to_string(&display).map_err(js_error)
    }

    /// Built-in potential in volts.
    #[wasm_bindgen]
    pub fn built_in_potential(&self, na: f64, nd: f64, ni: f64, t: f64) -> Result<f64, JsValue> {
        physics::built_in_potential(self.engine.constants(), na, nd, ni, t).map_err(js_error)
    }

    /// Depletion widths `[Wn, Wp]` in cm.
    #[wasm_bindgen]
    pub fn depletion_width(&self, na: f64, nd: f64, vbi: f64, vapp: f64) -> Result<Vec<f64>, JsValue> {
        let constants = self.engine.constants();
        let w = physics::depletion_width(
            constants,
            na,
            nd,
            vbi,
            vapp,
            constants.silicon_permittivity(),
        )
        .map_err(js_error)?;
        Ok(vec![w.n_side, w.p_side])
    }

    /// Diode operating point as JSON.
    #[wasm_bindgen]
    pub fn diode_current(&self, v: f64, is: f64, n: f64, vt: f64, rs: f64) -> Result<String, JsValue> {
        let op = physics::diode_current(v, is, n, vt, rs).map_err(js_error)?;
        serde_json::to_string(&op).map_err(js_error)
    }
}

impl Default for WasmJunctionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Names of the built-in presets.
#[wasm_bindgen]
pub fn preset_names() -> Vec<String> {
    presets::preset_names().into_iter().map(String::from).collect()
}

/// A preset as JSON, or `undefined` for an unknown name.
#[wasm_bindgen]
pub fn preset(name: &str) -> Option<String> {
    presets::lookup_preset(name).and_then(|p| serde_json::to_string(p).ok())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
