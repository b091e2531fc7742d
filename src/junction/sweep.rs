//! Bias sweep: the junction evaluated over a range of applied voltages.

use serde::Serialize;

use crate::error::{require_finite, require_positive, JunctionError, Result};

use super::{JunctionEngine, JunctionInputs, JunctionResult};

/// Upper bound on the number of points in one sweep.
pub const MAX_SWEEP_POINTS: usize = 10_001;

/// An inclusive range of applied bias values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BiasSweep {
    /// First bias (V)
    pub start: f64,
    /// Last bias (V), included when it falls on the step grid
    pub stop: f64,
    /// Spacing between points (V)
    pub step: f64,
}

impl Default for BiasSweep {
    /// -1 V to +1 V in 50 mV steps.
    fn default() -> Self {
        Self {
            start: -1.0,
            stop: 1.0,
            step: 0.05,
        }
    }
}

impl BiasSweep {
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// Number of points in the sweep.
    pub fn point_count(&self) -> Result<usize> {
        require_finite("start", self.start)?;
        require_finite("stop", self.stop)?;
        require_positive("step", self.step)?;
        if self.stop < self.start {
            return Err(JunctionError::invalid_parameter(
                "stop",
                format!("must be >= start ({} < {})", self.stop, self.start),
            ));
        }

        // Tolerate rounding so that e.g. -1..1 step 0.05 includes +1.
        let intervals = ((self.stop - self.start) / self.step + 1e-9).floor();
        if intervals >= MAX_SWEEP_POINTS as f64 {
            return Err(JunctionError::invalid_parameter(
                "step",
                format!("sweep would exceed {MAX_SWEEP_POINTS} points"),
            ));
        }
        Ok(intervals as usize + 1)
    }

    /// Bias values, each computed as start + i * step.
    pub fn biases(&self) -> Result<Vec<f64>> {
        let len = self.point_count()?;
        Ok((0..len)
            .map(|i| self.start + i as f64 * self.step)
            .collect())
    }
}

/// One point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Applied bias (V)
    pub bias: f64,
    pub result: JunctionResult,
}

impl JunctionEngine {
    /// Evaluate `inputs` at every bias of `sweep`. The bias already set in
    /// `inputs` is ignored.
    pub fn sweep(&self, inputs: &JunctionInputs, sweep: &BiasSweep) -> Result<Vec<SweepPoint>> {
        let biases = sweep.biases()?;
        log::debug!(
            "Sweeping {} points from {} V to {} V",
            biases.len(),
            sweep.start,
            sweep.stop
        );

        biases
            .into_iter()
            .map(|bias| {
                let result = self.solve(&inputs.with_bias(bias))?;
                Ok(SweepPoint { bias, result })
            })
            .collect()
    }
}
