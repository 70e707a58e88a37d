use anyhow::{anyhow, ensure, Context, Result};
use clap::Parser;
use config::{Config, Environment, File};
use log::info;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Prefix for environment variable overrides, e.g. `REFRAX_N1=1.33`.
pub const ENV_PREFIX: &str = "refrax";


/// Number of sweep samples when only a range is given on the command line.
pub const DEFAULT_SWEEP_POINTS: usize = 91;

/// Runtime configuration for the application.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Settings {
    /// Refractive index on the incident side.
    pub n1: f64,
    /// Refractive index on the transmission side.
    pub n2: f64,
    /// Incidence angle in degrees.
    pub incidence: f64,
    /// Directory for written files.
    #[serde(default)]
    pub output: Option<String>,
    /// Write a JSON snapshot of the model and diagram.
    #[serde(default)]
    pub json: bool,
    #[serde(default)]
    pub sweep: Option<SweepSettings>,
}

/// Range of incidence angles for a reflectance sweep, in degrees.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct SweepSettings {
    pub start: f64,
    pub end: f64,
    #[serde(default = "default_sweep_points")]
    pub num_points: usize,
}

fn default_sweep_points() -> usize {
    DEFAULT_SWEEP_POINTS
}

impl SweepSettings {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.num_points >= 2,
            "Sweep needs at least 2 points, got {}",
            self.num_points
        );
        ensure!(
            self.start.is_finite() && self.end.is_finite(),
            "Sweep bounds must be finite, got {} to {}",
            self.start,
            self.end
        );
        ensure!(
            self.start <= self.end,
            "Sweep start must not exceed end, got {} to {}",
            self.start,
            self.end
        );
        Ok(())
    }
}

impl Settings {
    /// Incidence angle in radians.
    pub fn incidence_rad(&self) -> f64 {
        self.incidence.to_radians()
    }
}

pub fn load_default_config() -> Result<Settings> {
    let root = retrieve_project_root()?;
    let default_config_file = root.join("config/default.toml");

    let settings: Config = Config::builder()
        .add_source(File::from(default_config_file).required(true))
        .build()
        .context("Error loading configuration")?;

    let config: Settings = settings
        .try_deserialize()
        .context("Error deserializing configuration")?;

    validate_config(&config)?;

    Ok(config)
}

/// Loads configuration from file and environment, then applies command-line arguments.
pub fn load_config() -> Result<Settings> {
    load_config_from(&CliArgs::parse())
}

pub fn load_config_from(args: &CliArgs) -> Result<Settings> {
    let root = retrieve_project_root()?;

    let default_config_file = root.join("config/default.toml");
    let local_config = root.join("config/local.toml");

    // Check if local config exists, if not use default
    let config_file = if local_config.exists() {
        info!("Using local configuration: {:?}", local_config);
        local_config
    } else {
        info!("Using default configuration: {:?}", default_config_file);
        default_config_file
    };

    let settings: Config = Config::builder()
        .add_source(File::from(config_file).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Error loading configuration")?;

    let mut config: Settings = settings
        .try_deserialize()
        .context("Error deserializing configuration")?;

    apply_cli_args(&mut config, args);

    validate_config(&config)?;

    Ok(config)
}

fn apply_cli_args(config: &mut Settings, args: &CliArgs) {
    if let Some(n1) = args.n1 {
        config.n1 = n1;
    }
    if let Some(n2) = args.n2 {
        config.n2 = n2;
    }
    if let Some(incidence) = args.incidence {
        config.incidence = incidence;
    }
    if let Some(output) = &args.output {
        config.output = Some(output.clone());
    }
    if args.json {
        config.json = true;
    }

    // Handle sweep range
    if let Some(range) = &args.sweep {
        let num_points = args
            .points
            .or(config.sweep.map(|s| s.num_points))
            .unwrap_or(DEFAULT_SWEEP_POINTS);
        config.sweep = Some(SweepSettings {
            start: range[0],
            end: range[1],
            num_points,
        });
    } else if let (Some(points), Some(sweep)) = (args.points, config.sweep.as_mut()) {
        sweep.num_points = points;
    }
}

/// Retrieve the project root directory.
/// This function tries to find the project root directory in different ways:
/// 1. If the CARGO_MANIFEST_DIR environment variable is set, use it.
/// 2. If the REFRAX_ROOT_DIR environment variable is set, use it.
/// 3. If the "config" subdirectory is found in the executable directory or any of its parents, use it.
fn retrieve_project_root() -> Result<PathBuf> {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        // When running through cargo (e.g. cargo run, cargo test)
        return Ok(PathBuf::from(manifest_dir));
    }
    if let Ok(path) = env::var("REFRAX_ROOT_DIR") {
        return Ok(PathBuf::from(path));
    }

    // Walk upward from the executable directory
    let exe_path = env::current_exe().context("Failed to get current executable path")?;
    exe_path
        .ancestors()
        .skip(1)
        .find(|dir| dir.join("config").is_dir())
        .map(|dir| dir.to_path_buf())
        .ok_or_else(|| anyhow!("Could not find project root directory"))
}

/// Checks settings the core does not guard itself.
///
/// Indices and the incidence angle are left alone: any real, NaN included,
/// is a valid model input.
pub fn validate_config(config: &Settings) -> Result<()> {
    if let Some(sweep) = &config.sweep {
        sweep.validate()?;
    }
    Ok(())
}

#[derive(Parser, Debug, Default)]
#[command(version, about = "Refrax - Snell's law and Fresnel reflectance at a planar interface")]
pub struct CliArgs {
    /// Refractive index of the incident medium.
    #[arg(long)]
    pub n1: Option<f64>,

    /// Refractive index of the transmission medium.
    #[arg(long)]
    pub n2: Option<f64>,

    /// Incidence angle in degrees, measured from the interface normal.
    #[arg(short = 'a', long, allow_negative_numbers = true)]
    pub incidence: Option<f64>,

    /// Sweep the incidence angle over a range in degrees.
    /// Format: start end
    #[arg(long, num_args = 2, value_delimiter = ' ', allow_negative_numbers = true)]
    pub sweep: Option<Vec<f64>>,

    /// Number of samples in the sweep, endpoints included.
    #[arg(long)]
    pub points: Option<usize>,

    /// Directory to write output files to.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Also write a JSON snapshot of the model and diagram.
    #[arg(long)]
    pub json: bool,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    pub dump_config: bool,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings:
  - Incident Refractive Index: {:.6}
  - Transmitted Refractive Index: {:.6}
  - Incidence Angle (deg): {:.6}
  - Sweep: {:?}
  - Output: {:?}
  ",
            self.n1, self.n2, self.incidence, self.sweep, self.output,
        )
    }
}
