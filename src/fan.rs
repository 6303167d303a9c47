use crate::{
    angle::{self, FULL_TURN},
    arc,
    disc::Disc,
    error::FanError,
    params::FanParams,
    sector::{self, Point2D, SectorPath},
};

/// Geometry produced for one center point.
#[derive(Clone, Debug, PartialEq)]
pub enum RangeFan {
    /// A proper sector: center, arc, center
    Sector(SectorPath),
    /// Traversal covered the whole circle; a buffer disc stands in for the sector
    Disc(Disc),
}

impl RangeFan {
    /// Closed outer ring of the fan polygon.
    pub fn ring(&self) -> Vec<Point2D> {
        match self {
            RangeFan::Sector(path) => path.points().to_vec(),
            RangeFan::Disc(disc) => disc.ring(),
        }
    }
}

/// Validated fan parameters with the arc angles worked out once, ready to be applied to any
/// number of centers.
#[derive(Clone, Debug)]
pub struct FanSpec {
    pub params: FanParams,
    /// Arithmetic angles of the arc vertices; empty for full-circle fans
    angles: Vec<f64>,
    disc_segments: usize,
}

impl FanSpec {
    pub fn new(params: FanParams, step: f64, disc_segments: usize) -> Result<FanSpec, FanError> {
        let FanParams {
            range,
            bearing,
            traversal,
        } = params;
        if !range.is_finite() || range < 0. {
            return Err(FanError::InvalidRadius(range));
        }
        if !bearing.is_finite() {
            return Err(FanError::InvalidBearing(bearing));
        }
        if !traversal.is_finite() || traversal < 0. {
            return Err(FanError::InvalidTraversal(traversal));
        }
        if !step.is_finite() || step <= 0. {
            return Err(FanError::InvalidStep(step));
        }

        if traversal >= FULL_TURN {
            if disc_segments < 3 {
                return Err(FanError::InvalidSegments(disc_segments));
            }
            log::debug!("Traversal {} covers the full circle; using discs", traversal);
            return Ok(FanSpec {
                params,
                angles: Vec::new(),
                disc_segments,
            });
        }

        let center_angle = angle::geo_to_arithmetic(bearing);
        let (left, right) = arc::sector_bounds(center_angle, traversal);
        log::debug!(
            "Bearing {} -> arithmetic {}; left angle: {}, right angle: {}",
            bearing,
            center_angle,
            left,
            right
        );
        let angles = arc::step_angles(left, right, step)?;

        Ok(FanSpec {
            params,
            angles,
            disc_segments,
        })
    }

    /// True when fans are discs rather than sectors.
    pub fn is_full_circle(&self) -> bool {
        self.params.traversal >= FULL_TURN
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Builds the fan around one center.
    pub fn fan_at(&self, center: Point2D) -> Result<RangeFan, FanError> {
        if self.is_full_circle() {
            return Disc::new(center, self.params.range, self.disc_segments).map(RangeFan::Disc);
        }
        let path = sector::build_sector_path(center, self.params.range, &self.angles)?;
        debug_assert!(path.is_closed());
        log::trace!(
            "Sector at {}: {} arc vertices, {} points",
            path.center(),
            path.arc().len(),
            path.len()
        );
        Ok(RangeFan::Sector(path))
    }
}
