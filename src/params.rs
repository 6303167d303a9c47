use std::fmt::Display;

use lazy_static::lazy_static;

lazy_static! {
  pub static ref DEFAULT_PARAMS: Params = Params {
    // Arc step, in degrees
    step: 1.0,
    // Edges used to approximate full-circle fans
    disc_segments: 360,
    // Refuse to replace an existing output unless asked
    overwrite: false,

    // Default to system physical cores (to prevent interference from hyperthreading)
    n_threads: num_cpus::get_physical(),
  };
}

/// Run parameters that are not part of the fan geometry itself.
#[derive(Copy, Clone, Debug)]
pub struct Params {
    /// Angular distance between consecutive arc vertices, in degrees
    pub step: f64,
    /// Number of edges of the disc built when traversal covers the full circle
    pub disc_segments: usize,
    /// Whether an existing output file may be replaced
    pub overwrite: bool,

    /// Number of threads available
    pub n_threads: usize,
}

/// Geometric parameters shared by every fan of a run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FanParams {
    /// Radius, in the linear units of the input coordinates
    pub range: f64,
    /// Central direction, geographic degrees (0 north, clockwise)
    pub bearing: f64,
    /// Total angular width, in degrees
    pub traversal: f64,
}

impl Display for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "===== Range Fan Parameters =====")?;
        writeln!(f, "\t - step (arc step in degrees): {}", self.step)?;
        writeln!(
            f,
            "\t - disc_segments (edges of full-circle fans): {}",
            self.disc_segments
        )?;
        writeln!(f, "\t - overwrite (replace existing output): {}", self.overwrite)?;
        writeln!(f, "\t - n_threads (n threads to use): {}", self.n_threads)
    }
}

impl Display for FanParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FanParams(range: {}, bearing: {}, traversal: {})",
            self.range, self.bearing, self.traversal
        )
    }
}
