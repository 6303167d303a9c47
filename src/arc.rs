use crate::error::FanError;

/// Relative tolerance under which a span counts as a whole number of steps.
const SPAN_EPSILON: f64 = 1e-9;

/// Most steps a single arc may take. Steps fine enough to exceed this are rejected.
pub const MAX_ARC_VERTICES: usize = 1_000_000;

/// Narrowest sector ever emitted, in degrees. A zero traversal is widened to this.
pub const MIN_TRAVERSAL: f64 = 1.;

/// Returns the angles from `left` to `right` (both included) spaced `step` apart.
///
/// Each value is computed as `left + i * step` rather than accumulated, and the last one is
/// always exactly `right`, so the sequence is strictly increasing with no overshoot. When the
/// span is not a multiple of `step`, the final gap is shorter than `step`.
///
/// A step so small that the arc would need more than [`MAX_ARC_VERTICES`] steps, or that
/// vanishes against the magnitude of the bounds, is an [`FanError::InvalidStep`].
pub fn step_angles(left: f64, right: f64, step: f64) -> Result<Vec<f64>, FanError> {
    if !step.is_finite() || step <= 0. {
        return Err(FanError::InvalidStep(step));
    }
    if !left.is_finite() || !right.is_finite() || right < left {
        return Err(FanError::InvalidArcBounds { left, right });
    }

    // Each step has to move the angle at both ends of the arc
    if left + step <= left || right + step <= right {
        return Err(FanError::InvalidStep(step));
    }
    let span = (right - left) / step;
    if !span.is_finite() || span >= MAX_ARC_VERTICES as f64 {
        return Err(FanError::InvalidStep(step));
    }
    // Snap spans that only miss a whole count through rounding
    let n_steps = if (span - span.round()).abs() <= SPAN_EPSILON * span.max(1.) {
        span.round() as usize
    } else {
        span.ceil() as usize
    };

    let mut angles = Vec::with_capacity(n_steps + 1);
    for i in 0..n_steps {
        angles.push(left + i as f64 * step);
    }
    angles.push(right);
    log::trace!("Stepped {} angles from {} to {}", angles.len(), left, right);
    Ok(angles)
}

/// Computes the (left, right) arithmetic bounds of a sector centered on `center_angle`.
///
/// A zero traversal is widened to [`MIN_TRAVERSAL`] so a sector never collapses to a line.
pub fn sector_bounds(center_angle: f64, traversal: f64) -> (f64, f64) {
    let traversal = if traversal == 0. { MIN_TRAVERSAL } else { traversal };
    let half = traversal / 2.;
    (center_angle - half, center_angle + half)
}
