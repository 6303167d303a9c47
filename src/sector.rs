use std::fmt::Display;

use crate::error::FanError;

/// A point in a planar, projected coordinate system (linear units, e.g. meters).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Point at `radius` from this one, in the direction of arithmetic angle `degrees`.
    pub fn offset_polar(&self, radius: f64, degrees: f64) -> Point2D {
        let rad = degrees.to_radians();
        Point2D {
            x: self.x + radius * rad.cos(),
            y: self.y + radius * rad.sin(),
        }
    }
}

impl Display for Point2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Closed vertex ring of a sector: center, arc vertices, center.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorPath {
    points: Vec<Point2D>,
}

impl SectorPath {
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Sector center (first and last vertex).
    pub fn center(&self) -> Point2D {
        self.points[0]
    }

    /// Vertices on the arc, without the center at either end.
    pub fn arc(&self) -> &[Point2D] {
        &self.points[1..self.points.len() - 1]
    }

    pub fn is_closed(&self) -> bool {
        self.points.first() == self.points.last()
    }
}

/// Builds the closed sector ring around `center`: one vertex at `radius` for each arithmetic
/// angle in `angles`, bracketed by the center on both ends.
///
/// A zero radius is allowed and gives a zero-area ring collapsed onto the center.
pub fn build_sector_path(
    center: Point2D,
    radius: f64,
    angles: &[f64],
) -> Result<SectorPath, FanError> {
    if !radius.is_finite() || radius < 0. {
        return Err(FanError::InvalidRadius(radius));
    }
    if !center.is_finite() {
        return Err(FanError::InvalidCenter {
            x: center.x,
            y: center.y,
        });
    }
    if angles.is_empty() {
        return Err(FanError::EmptyArc);
    }

    let mut points = Vec::with_capacity(angles.len() + 2);
    points.push(center);
    points.extend(angles.iter().map(|&d| center.offset_polar(radius, d)));
    points.push(center);

    Ok(SectorPath { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::step_angles;

    const EPS: f64 = 1e-9;

    fn close(a: Point2D, b: Point2D) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn quarter_sector_vertices() {
        let angles = step_angles(0., 90., 45.).unwrap();
        let path = build_sector_path(Point2D::new(10., 20.), 2., &angles).unwrap();

        assert_eq!(path.len(), 5);
        assert!(path.is_closed());
        assert_eq!(path.center(), Point2D::new(10., 20.));
        let arc = path.arc();
        assert!(close(arc[0], Point2D::new(12., 20.)));
        assert!(close(arc[1], Point2D::new(10. + 2f64.sqrt(), 20. + 2f64.sqrt())));
        assert!(close(arc[2], Point2D::new(10., 22.)));
    }

    #[test]
    fn arc_vertices_lie_on_radius() {
        let center = Point2D::new(-500., 300.);
        let angles = step_angles(200., 330., 1.).unwrap();
        let path = build_sector_path(center, 1000., &angles).unwrap();
        for p in path.arc() {
            let d = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
            assert!((d - 1000.).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_radius_collapses_onto_center() {
        let center = Point2D::new(1., 1.);
        let path = build_sector_path(center, 0., &[10., 20.]).unwrap();
        assert_eq!(path.len(), 4);
        assert!(path.points().iter().all(|&p| p == center));
    }

    #[test]
    fn same_inputs_same_path() {
        let angles = step_angles(15., 75., 1.).unwrap();
        let a = build_sector_path(Point2D::new(3., 4.), 250., &angles).unwrap();
        let b = build_sector_path(Point2D::new(3., 4.), 250., &angles).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_invalid_inputs() {
        let c = Point2D::new(0., 0.);
        assert_eq!(build_sector_path(c, -1., &[0.]), Err(FanError::InvalidRadius(-1.)));
        assert_eq!(build_sector_path(c, 1., &[]), Err(FanError::EmptyArc));
        assert!(matches!(
            build_sector_path(Point2D::new(f64::NAN, 0.), 1., &[0.]),
            Err(FanError::InvalidCenter { .. })
        ));
    }
}
