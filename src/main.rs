pub mod angle;
pub mod arc;
pub mod disc;
pub mod error;
pub mod fan;
pub mod output;
pub mod params;
pub mod point_set;
pub mod pool;
pub mod sector;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use params::{FanParams, Params, DEFAULT_PARAMS};
use point_set::PointSet;

use crate::{fan::FanSpec, output::FanRecord, pool::FanBuilder};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Builds range fan (circular sector) polygons around points.")]
pub struct Args {
    /// Path to the input points file (`x y` per line, projected linear units)
    #[arg(short, long)]
    pub file: PathBuf,

    /// Path of the output records file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Fan radius, in the units of the input coordinates
    #[arg(short, long)]
    pub range: f64,

    /// Central bearing in degrees (0 north, clockwise)
    #[arg(short, long, allow_negative_numbers = true)]
    pub bearing: f64,

    /// Angular width of the fan in degrees; 360 or more builds discs
    #[arg(short, long)]
    pub traversal: f64,

    /// Arc step in degrees
    #[arg(long)]
    pub step: Option<f64>,

    /// Edges used to approximate full-circle fans
    #[arg(long)]
    pub disc_segments: Option<usize>,

    /// Number of worker threads
    #[arg(long)]
    pub threads: Option<usize>,

    /// Replace the output file if it already exists
    #[arg(long)]
    pub overwrite: bool,
}

impl Args {
    /// Run parameters, starting from the defaults.
    fn params(&self) -> Params {
        Params {
            step: self.step.unwrap_or(DEFAULT_PARAMS.step),
            disc_segments: self.disc_segments.unwrap_or(DEFAULT_PARAMS.disc_segments),
            overwrite: self.overwrite || DEFAULT_PARAMS.overwrite,
            n_threads: self.threads.unwrap_or(DEFAULT_PARAMS.n_threads),
        }
    }

    fn fan_params(&self) -> FanParams {
        FanParams {
            range: self.range,
            bearing: self.bearing,
            traversal: self.traversal,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    log::set_max_level(log::LevelFilter::Trace);
    env_logger::builder()
        .filter(None, log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let params = args.params();
    let fan_params = args.fan_params();
    log::info!("{}", params);
    log::info!("{}", fan_params);

    log::info!("Reading centers from: {}", args.file.display());
    let points = PointSet::from_file(&args.file)?;
    if points.is_empty() {
        log::warn!("No centers in {}; writing an empty output", points.instance_name);
    }

    let spec = FanSpec::new(fan_params, params.step, params.disc_segments)
        .context("Invalid fan parameters")?;
    let mode = if spec.is_full_circle() {
        log::info!("Traversal is a full circle; building discs instead of sectors");
        "disc"
    } else {
        log::debug!("{} arc vertices per fan", spec.angles().len());
        "sector"
    };

    log::info!("Building {} fans ...", points.len());
    let fans = FanBuilder::new(spec, params.n_threads)
        .build(&points.centers)
        .context("Failed to build fans")?;

    let records = fans
        .iter()
        .map(|fan| FanRecord::new(fan, &fan_params))
        .collect::<Vec<_>>();
    output::write_records(&args.output, &records, params.overwrite)?;

    log::info!("Total runtime: {:.3?}", points.start_time.elapsed());
    println!(
        r#"{{"Instance": "{}", "Time": "{:.2}", "Fans": "{}", "Mode": "{}"}}"#,
        points.instance_name,
        points.start_time.elapsed().as_secs_f64(),
        records.len(),
        mode,
    );
    Ok(())
}
