//! Analytical PN-junction formulas.
//!
//! - [`potential`] - thermal voltage and built-in potential
//! - [`depletion`] - depletion width and its split between the two sides
//! - [`current`] - Shockley current, series drop and leakage
//!
//! Every function is pure and takes its physical constants explicitly.

pub mod current;
pub mod depletion;
pub mod potential;

pub use current::{diode_current, DiodeModel, DiodeOperatingPoint, DiodeParams, OverflowPolicy};
pub use depletion::{depletion_width, junction_voltage, DepletionWidth};
pub use potential::{built_in_potential, thermal_voltage};
