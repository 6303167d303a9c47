use thiserror::Error;

/// Everything that can go wrong while building a range fan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FanError {
    /// Radius is negative or not a finite number
    #[error("(InvalidRadius) radius must be a finite value >= 0, got {0}")]
    InvalidRadius(f64),
    /// Arc step is zero, negative or not finite
    #[error("(InvalidStep) step must be a finite value > 0, got {0}")]
    InvalidStep(f64),
    /// Traversal is negative or not finite
    #[error("(InvalidTraversal) traversal must be a finite value >= 0, got {0}")]
    InvalidTraversal(f64),
    #[error("(InvalidBearing) bearing must be finite, got {0}")]
    InvalidBearing(f64),
    /// The arc would run backwards (or its bounds are not finite)
    #[error("(InvalidArcBounds) arc from {left} to {right} is not a forward interval")]
    InvalidArcBounds { left: f64, right: f64 },
    #[error("(EmptyArc) a sector needs at least one arc angle")]
    EmptyArc,
    #[error("(InvalidCenter) center ({x}, {y}) has a NaN or infinite coordinate")]
    InvalidCenter { x: f64, y: f64 },
    /// A disc ring needs at least a triangle
    #[error("(InvalidSegments) disc needs at least 3 segments, got {0}")]
    InvalidSegments(usize),
}
