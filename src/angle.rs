//! Pure angle/time conversions for the circular dial.
//!
//! The dial maps clock time onto degrees with 90° at the top (midnight)
//! and clockwise motion meaning *increasing* time, i.e. decreasing angle.
//! One half-turn of the clock face covers 12 hours, so a full 1440-minute
//! day spans two revolutions; angles are therefore kept in an extended
//! [0, 720) range so that incremental updates can tell "5° past a full
//! revolution" apart from a bare "5°".
//!
//! Everything here is a stateless free function. Inputs may be arbitrary
//! reals (negative, far outside one turn); outputs are always normalized.

/// Minutes in a full day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Minutes covered by one 360° revolution of the dial (12 hours).
pub const MINUTES_PER_TURN: i32 = 12 * 60;

/// Reduce an angle in degrees to [0, 360).
pub fn normalize_360(angle: f64) -> f64 {
    let mut result = angle % 360.0;
    if result < 0.0 {
        result += 360.0;
    }
    result
}

/// Reduce an angle in degrees to the extended [0, 720) range.
///
/// The extra lap of headroom is what lets the drag controller accumulate
/// signed deltas across a full revolution without ambiguity.
pub fn normalize_720(angle: f64) -> f64 {
    let mut result = angle % 720.0;
    if result < 0.0 {
        result += 720.0;
    }
    result
}

/// Map minutes-of-day to the dial angle in [0, 720).
///
/// `mins == 0` (midnight) lands on 90°; every further minute rotates the
/// handle clockwise, i.e. subtracts from the angle.
pub fn minutes_to_angle(mins: i32) -> f64 {
    normalize_720(90.0 - (mins as f64 / MINUTES_PER_TURN as f64) * 360.0)
}

/// Inverse of [`minutes_to_angle`]: dial angle to minutes-of-day.
///
/// Truncates to whole minutes; the result is always in [0, 1440).
pub fn angle_to_minutes(angle: f64) -> i32 {
    ((normalize_720(90.0 - angle) / 360.0) * MINUTES_PER_TURN as f64) as i32
}

/// Snap a minute value to the nearest multiple of `step`, rounding
/// half-steps up.
///
/// Integer arithmetic only: `2*(m % step) / step` is 1 exactly when the
/// remainder is at least half a step, which differs from round-half-even
/// at the boundary (10 with step 15 snaps *up* to 15). Callers pass
/// `minutes` already normalized to [0, 1440).
pub fn snap_minutes(minutes: i32, step: i32) -> i32 {
    (minutes / step) * step + (2 * (minutes % step) / step) * step
}

/// Minimal signed rotation from the unit vector at `angle1` to the unit
/// vector at `angle2`, both in radians. The result is in (−π, π].
///
/// Going through `atan2(cross, dot)` instead of subtracting the raw
/// angles is what keeps a drag smooth across the 0°/360° seam.
pub fn angle_between_vectors(angle1: f64, angle2: f64) -> f64 {
    let (y1, x1) = angle1.sin_cos();
    let (y2, x2) = angle2.sin_cos();
    vectors_angle_rad(x1, y1, x2, y2)
}

/// Signed angle between two vectors given by components, in radians.
pub fn vectors_angle_rad(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let cross = x1 * y2 - y1 * x2;
    let dot = x1 * x2 + y1 * y2;
    cross.atan2(dot)
}
