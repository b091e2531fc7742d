//! Diode current under series resistance.
//!
//! Uses the Shockley diode equation:
//!   I = Is * (exp(V / (n * Vt)) - 1)
//!
//! and reports the terminal voltage left after the series-resistance drop:
//!   Vterminal = V - I * Rs
//!
//! Above the critical voltage V_crit = max_exponent * n * Vt the exponential
//! is continued along its tangent at V_crit:
//!   I ≈ I(V_crit) + G(V_crit) * (V - V_crit)
//! where G = dI/dV = Is/(n*Vt) * exp(V/(n*Vt)). This keeps the current finite
//! and strictly increasing for any finite bias.

use serde::Serialize;

use crate::error::{require_finite, require_non_negative, require_positive, JunctionError, Result};

/// Default exponent cap, about 1 V for n = 1 at room temperature.
pub const DEFAULT_MAX_EXPONENT: f64 = 40.0;

/// Largest accepted exponent cap. exp(709.78) is the f64 limit.
pub const MAX_EXPONENT_LIMIT: f64 = 700.0;

/// What to do when V / (n * Vt) exceeds the exponent cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum OverflowPolicy {
    /// Continue the curve linearly beyond V_crit
    #[default]
    Linearize,
    /// Fail with [`JunctionError::NumericalOverflow`]
    Reject,
}

/// Parameters for the diode current law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiodeParams {
    /// Saturation current (Is), typically 1e-14 to 1e-8 A
    pub saturation_current: f64,
    /// Ideality factor (n), typically 1.0 to 2.0
    pub ideality: f64,
    /// Series resistance (Rs) in ohms
    pub series_resistance: f64,
}

impl DiodeParams {
    pub fn new(saturation_current: f64, ideality: f64, series_resistance: f64) -> Self {
        Self {
            saturation_current,
            ideality,
            series_resistance,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("Is", self.saturation_current)?;
        require_positive("n", self.ideality)?;
        require_non_negative("Rs", self.series_resistance)?;
        Ok(())
    }
}

/// Diode state at one bias point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiodeOperatingPoint {
    /// Applied bias V (V)
    pub bias: f64,
    /// Junction current Id (A)
    pub current: f64,
    /// Small-signal conductance dId/dV (S)
    pub conductance: f64,
    /// Voltage dropped across Rs (V)
    pub series_drop: f64,
    /// Bias minus the series drop (V)
    pub terminal_voltage: f64,
    /// Reverse saturation current, -Is (A)
    pub leakage: f64,
    /// Whether the exponential was linearized at this point
    pub limited: bool,
}

/// Diode current model with overflow limiting.
#[derive(Debug, Clone)]
pub struct DiodeModel {
    pub params: DiodeParams,
    /// Thermal voltage Vt (V)
    pub vt: f64,
    max_exponent: f64,
    overflow_policy: OverflowPolicy,
}

impl DiodeModel {
    /// Create a new model with the default exponent cap.
    pub fn new(params: DiodeParams, vt: f64) -> Result<Self> {
        params.validate()?;
        require_positive("Vt", vt)?;
        Ok(Self {
            params,
            vt,
            max_exponent: DEFAULT_MAX_EXPONENT,
            overflow_policy: OverflowPolicy::default(),
        })
    }

    /// Set the exponent cap, in (0, 700].
    pub fn with_max_exponent(mut self, max_exponent: f64) -> Result<Self> {
        if !(max_exponent > 0.0 && max_exponent <= MAX_EXPONENT_LIMIT) {
            return Err(JunctionError::invalid_parameter(
                "max_exponent",
                format!("must be in (0, {MAX_EXPONENT_LIMIT}] (got {max_exponent})"),
            ));
        }
        self.max_exponent = max_exponent;
        Ok(self)
    }

    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Thermal voltage times ideality factor.
    pub fn n_vt(&self) -> f64 {
        self.params.ideality * self.vt
    }

    /// Bias above which the exponential is capped.
    pub fn v_crit(&self) -> f64 {
        self.max_exponent * self.n_vt()
    }

    /// Reverse saturation current, reported as -Is.
    pub fn leakage(&self) -> f64 {
        -self.params.saturation_current
    }

    /// Calculate the diode current at a given bias.
    pub fn current(&self, v: f64) -> Result<f64> {
        require_finite("V", v)?;
        let n_vt = self.n_vt();
        let is = self.params.saturation_current;

        let current = if v > self.v_crit() {
            if self.overflow_policy == OverflowPolicy::Reject {
                return Err(JunctionError::overflow("diode current", v));
            }
            let v_crit = self.v_crit();
            let e_crit = self.max_exponent.exp();
            let i_crit = is * (e_crit - 1.0);
            let g_crit = is / n_vt * e_crit;
            i_crit + g_crit * (v - v_crit)
        } else {
            is * (v / n_vt).exp_m1()
        };

        if current.is_finite() {
            Ok(current)
        } else {
            Err(JunctionError::overflow("diode current", v))
        }
    }

    /// Calculate the conductance (dI/dV) at a given bias.
    pub fn conductance(&self, v: f64) -> f64 {
        let n_vt = self.n_vt();
        let exponent = (v / n_vt).min(self.max_exponent);
        self.params.saturation_current / n_vt * exponent.exp()
    }

    /// Full operating point at bias `v`.
    pub fn operating_point(&self, v: f64) -> Result<DiodeOperatingPoint> {
        let current = self.current(v)?;
        let limited = v > self.v_crit();
        if limited {
            log::warn!(
                "Bias {v:.4} V exceeds V_crit {:.4} V; diode current linearized",
                self.v_crit()
            );
        }

        let series_drop = current * self.params.series_resistance;
        if !series_drop.is_finite() {
            return Err(JunctionError::overflow("series-resistance drop", v));
        }

        Ok(DiodeOperatingPoint {
            bias: v,
            current,
            conductance: self.conductance(v),
            series_drop,
            terminal_voltage: v - series_drop,
            leakage: self.leakage(),
            limited,
        })
    }
}

/// Diode current, terminal voltage and leakage at bias `v` with the default
/// exponent cap and linearization above it.
pub fn diode_current(v: f64, is: f64, n: f64, vt: f64, rs: f64) -> Result<DiodeOperatingPoint> {
    DiodeModel::new(DiodeParams::new(is, n, rs), vt)?.operating_point(v)
}
