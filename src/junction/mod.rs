//! Junction inputs, results and the calculation pipeline.
//!
//! ```text
//! thermal voltage -> built-in potential -> depletion widths
//!                 -> junction current -> terminal voltage / leakage
//! ```
//!
//! Sign convention: the applied bias Vapp is positive for forward bias. The
//! junction voltage is Vj = Vbi - Vapp, the diode law is evaluated at V = Vapp
//! and the terminal voltage is Vapp - Id * Rs.

mod engine;
mod sweep;
mod types;

pub use engine::{EngineConfig, JunctionEngine, JunctionVoltagePolicy};
pub use sweep::{BiasSweep, SweepPoint, MAX_SWEEP_POINTS};
pub use types::{JunctionInputs, JunctionResult};
