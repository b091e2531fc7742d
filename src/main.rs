//! Junction - PN-junction diode calculator
//!
//! Computes built-in potential, depletion widths and diode current for a
//! preset or custom device.
//!
//! # Usage
//!
//! ```bash
//! junction solve --preset 1N4148 --vapp 0.6
//! junction solve --set "Na=5e17,Nd=1e16,Rs=2" --json
//! junction sweep --preset power --start -1 --stop 0.6 --step 0.01 > iv.csv
//! junction presets
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use junction_core::{
    display::DisplayResult,
    error::Result,
    junction::{BiasSweep, EngineConfig, JunctionEngine, JunctionInputs, JunctionVoltagePolicy},
    params::ParamList,
    physics::OverflowPolicy,
    presets::{self, DEFAULT_PRESET},
    PhysicalConstants,
};

/// PN-junction diode calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one bias point
    Solve {
        #[command(flatten)]
        device: DeviceArgs,

        /// Applied bias in volts, positive for forward bias
        #[arg(long, allow_hyphen_values = true)]
        vapp: Option<f64>,

        /// Emit the form fields as JSON
        #[arg(long)]
        json: bool,

        /// Report zero depletion width instead of failing when Vapp > Vbi
        #[arg(long)]
        clamp: bool,
    },

    /// Evaluate a range of bias points (CSV by default)
    Sweep {
        #[command(flatten)]
        device: DeviceArgs,

        /// First bias (V)
        #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
        start: f64,

        /// Last bias (V)
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        stop: f64,

        /// Bias step (V)
        #[arg(long, default_value_t = 0.05)]
        step: f64,

        /// Emit the raw results as JSON
        #[arg(long)]
        json: bool,

        /// Fail instead of clamping the depletion width when Vapp > Vbi
        #[arg(long)]
        strict: bool,
    },

    /// List the built-in presets
    Presets,
}

#[derive(Args, Debug)]
struct DeviceArgs {
    /// Device preset; unknown names fall back to system defaults
    #[arg(short, long, default_value = DEFAULT_PRESET)]
    preset: String,

    /// Parameter overrides, e.g. "Na=1e18,Nd=1e17,Rs=10"
    #[arg(short, long, value_name = "PARAMS")]
    set: Option<String>,

    /// Temperature in kelvin
    #[arg(short, long)]
    temperature: Option<f64>,

    /// JSON file of physical constants
    #[arg(long, value_name = "FILE")]
    constants: Option<PathBuf>,

    /// Exponent cap V/(n*Vt) for the diode law
    #[arg(long)]
    max_exponent: Option<f64>,

    /// Fail instead of linearizing the current above the exponent cap
    #[arg(long)]
    reject_overflow: bool,
}

impl DeviceArgs {
    fn engine(&self, junction_voltage_policy: JunctionVoltagePolicy) -> Result<JunctionEngine> {
        let constants = match &self.constants {
            Some(path) => PhysicalConstants::from_file(path)?,
            None => PhysicalConstants::default(),
        };

        let mut config = EngineConfig::new().with_junction_voltage_policy(junction_voltage_policy);
        if let Some(max_exponent) = self.max_exponent {
            config = config.with_max_exponent(max_exponent);
        }
        if self.reject_overflow {
            config = config.with_overflow_policy(OverflowPolicy::Reject);
        }

        JunctionEngine::new(constants, config)
    }

    fn inputs(&self, engine: &JunctionEngine) -> Result<JunctionInputs> {
        let mut inputs = engine.inputs_for(&self.preset);
        if let Some(t) = self.temperature {
            inputs.temperature = t;
        }
        if let Some(set) = &self.set {
            inputs = inputs.with_params(&ParamList::parse(set)?)?;
        }
        Ok(inputs)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Solve {
            device,
            vapp,
            json,
            clamp,
        } => {
            let policy = if clamp {
                JunctionVoltagePolicy::ClampToZero
            } else {
                JunctionVoltagePolicy::Reject
            };
            let engine = device.engine(policy)?;
            let mut inputs = device.inputs(&engine)?;
            if let Some(v) = vapp {
                inputs = inputs.with_bias(v);
            }

            let result = engine.solve(&inputs)?;
            let display = DisplayResult::new(&inputs, &result, engine.constants());
            if json {
                print_json(&display)?;
            } else {
                println!("{display}");
            }
        }

        Command::Sweep {
            device,
            start,
            stop,
            step,
            json,
            strict,
        } => {
            let policy = if strict {
                JunctionVoltagePolicy::Reject
            } else {
                JunctionVoltagePolicy::ClampToZero
            };
            let engine = device.engine(policy)?;
            let inputs = device.inputs(&engine)?;
            let points = engine.sweep(&inputs, &BiasSweep::new(start, stop, step))?;

            if json {
                print_json(&points)?;
            } else {
                println!("vapp_v,vj_v,wn_cm,wp_cm,id_a,vterminal_v");
                for p in &points {
                    println!(
                        "{},{:.6},{:.6e},{:.6e},{:.6e},{:.6}",
                        p.bias,
                        p.result.junction_voltage,
                        p.result.wn(),
                        p.result.wp(),
                        p.result.current(),
                        p.result.terminal_voltage()
                    );
                }
            }
        }

        Command::Presets => {
            for name in presets::preset_names() {
                if let Some(p) = presets::lookup_preset(name) {
                    println!("{:<8} {}  ({})", p.name, p.params(), p.description);
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
