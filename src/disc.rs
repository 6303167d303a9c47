use crate::{angle::FULL_TURN, error::FanError, sector::Point2D};

/// Full-circle buffer around a center, used instead of a sector when the traversal covers the
/// whole turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    pub center: Point2D,
    pub radius: f64,
    /// Number of edges approximating the circle
    pub segments: usize,
}

impl Disc {
    pub fn new(center: Point2D, radius: f64, segments: usize) -> Result<Disc, FanError> {
        if !radius.is_finite() || radius < 0. {
            return Err(FanError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(FanError::InvalidCenter {
                x: center.x,
                y: center.y,
            });
        }
        if segments < 3 {
            return Err(FanError::InvalidSegments(segments));
        }
        Ok(Disc {
            center,
            radius,
            segments,
        })
    }

    /// Closed ring of `segments` vertices, counterclockwise starting due east.
    pub fn ring(&self) -> Vec<Point2D> {
        let mut ring: Vec<Point2D> = (0..self.segments)
            .map(|i| {
                let degrees = FULL_TURN * i as f64 / self.segments as f64;
                self.center.offset_polar(self.radius, degrees)
            })
            .collect();
        // close it
        ring.push(ring[0]);
        ring
    }
}
