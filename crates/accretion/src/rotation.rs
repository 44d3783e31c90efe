//! Rotation and size derivation
//!
//! Converts the simulation's accumulated angular momentum into a rotation
//! period, treating the planet as a uniform sphere. Degenerate inputs
//! settle on an Earth day; everything else is clamped between one hour
//! and one week.

/// Earth mass in kg.
const EARTH_MASS: f64 = 5.97e24;

/// Earth radius in meters.
const EARTH_RADIUS: f64 = 6.371e6;

/// Fastest allowed rotation, in seconds.
const MIN_ROTATION_PERIOD: f64 = 3600.0;

/// Slowest allowed rotation, in seconds.
const MAX_ROTATION_PERIOD: f64 = 604800.0;

/// Fallback period for degenerate inputs, in seconds.
const DEFAULT_ROTATION_PERIOD: f64 = 86400.0;

/// Planet radius from total mass, scaled off Earth at constant density.
/// Non-positive masses yield a zero radius.
pub fn radius_from_mass(mass: f64) -> f64 {
    if mass <= 0.0 {
        return 0.0;
    }
    (mass / EARTH_MASS).cbrt() * EARTH_RADIUS
}

/// Rotation period in seconds from angular momentum, mass, and radius.
///
/// Uses the uniform-sphere moment of inertia `(2/5)MR²`. Non-positive
/// inputs fall back to 24 hours; the result is clamped to [1 hour,
/// 1 week].
pub fn rotation_period(angular_momentum: f64, mass: f64, radius: f64) -> f64 {
    if angular_momentum <= 0.0 || mass <= 0.0 || radius <= 0.0 {
        return DEFAULT_ROTATION_PERIOD;
    }

    let moment_of_inertia = 0.4 * mass * radius * radius;
    let angular_velocity = angular_momentum / moment_of_inertia;
    let period = std::f64::consts::TAU / angular_velocity;

    period.clamp(MIN_ROTATION_PERIOD, MAX_ROTATION_PERIOD)
}
