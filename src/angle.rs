/// Degrees in a full turn.
pub const FULL_TURN: f64 = 360.;

/// Converts a geographic bearing (0 at north, clockwise) to an arithmetic angle (0 at east,
/// counterclockwise), in degrees in [0, 360).
///
/// Any finite bearing is accepted; it is wrapped before conversion so that `b` and `b + 360k`
/// map to the same angle. Non-finite input gives NaN.
pub fn geo_to_arithmetic(bearing: f64) -> f64 {
  wrap_degrees(450. - wrap_degrees(bearing))
}

/// Wraps an angle in degrees into [0, 360).
pub fn wrap_degrees(degrees: f64) -> f64 {
  let wrapped = degrees.rem_euclid(FULL_TURN);
  // rem_euclid can round up to the modulus for tiny negative inputs
  if wrapped >= FULL_TURN {
    0.
  } else {
    wrapped
  }
}
