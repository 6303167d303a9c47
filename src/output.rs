use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};

use crate::{fan::RangeFan, params::FanParams, sector::Point2D};

/// One output feature: the fan polygon plus the attributes carried alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct FanRecord {
    /// Closed outer ring of the polygon
    pub ring: Vec<Point2D>,
    /// Radius the fan was built with
    pub range: f64,
    /// Bearing as given by the caller, before conversion to an arithmetic angle
    pub bearing: f64,
}

impl FanRecord {
    pub fn new(fan: &RangeFan, params: &FanParams) -> FanRecord {
        FanRecord {
            ring: fan.ring(),
            range: params.range,
            bearing: params.bearing,
        }
    }

    /// Polygon geometry as WKT.
    pub fn wkt(&self) -> String {
        let coords = self
            .ring
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("POLYGON (({}))", coords)
    }
}

/// An intermediate file that is deleted when dropped, unless it was committed to its final
/// location first.
struct PartialFile {
    path: PathBuf,
    committed: bool,
}

impl PartialFile {
    fn new(target: &Path) -> PartialFile {
        let mut name = target.as_os_str().to_owned();
        name.push(".partial");
        PartialFile {
            path: PathBuf::from(name),
            committed: false,
        }
    }

    /// Moves the intermediate file over `target`.
    fn commit(mut self, target: &Path) -> Result<()> {
        fs::rename(&self.path, target).with_context(|| {
            format!(
                "Failed to move {} to {}",
                self.path.display(),
                target.display()
            )
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for PartialFile {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        log::debug!("Removing intermediate file {}", self.path.display());
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to remove {}: {}", self.path.display(), e);
            }
        }
    }
}

/// Writes `records` to `path`, one tab separated line per fan after a header line.
///
/// An existing file at `path` is only replaced when `overwrite` is set. Records are first
/// written to a `.partial` sibling, which never outlives this call.
pub fn write_records(path: &Path, records: &[FanRecord], overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        bail!(
            "Output {} already exists; pass --overwrite to replace it",
            path.display()
        );
    }
    log::info!("Output file: {}", path.display());

    let partial = PartialFile::new(path);
    let f = fs::File::create(&partial.path)
        .with_context(|| format!("Failed to create {}", partial.path.display()))?;
    let mut f = BufWriter::new(f);

    writeln!(f, "Range\tBearing\tGeometry")?;
    for record in records {
        writeln!(f, "{}\t{}\t{}", record.range, record.bearing, record.wkt())?;
    }
    f.flush()
        .with_context(|| format!("Failed to write {}", partial.path.display()))?;
    drop(f);

    partial.commit(path)
}
