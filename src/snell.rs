//! Snell's law for real refractive indices.
//!
//! This module holds the three angle relations of a planar interface between
//! two non-absorbing media: the transmitted angle, the critical angle and
//! Brewster's angle. All angles are in radians and measured from the
//! interface normal.
//!
//! None of these functions fail. When no real solution exists (an arcsine
//! argument outside `[-1, 1]`, or non-physical indices) the result is NaN,
//! and NaN is the signal callers test for. Total internal reflection shows up
//! as a NaN transmitted angle.


/// Computes the transmitted angle from Snell's law, `n1 sin(theta_i) = n2 sin(theta_t)`.
///
/// Returns NaN when `|n1 sin(theta_i) / n2| > 1` (total internal reflection)
/// or when any input is NaN. A zero `n2` with non-zero incidence also lands
/// outside the arcsine domain.
///
/// Identical indices return `theta_i` unchanged, for any `theta_i`.
pub fn get_theta_t(theta_i: f64, n1: f64, n2: f64) -> f64 {
    if n1 == n2 {
        return theta_i;
    }

    (n1 * theta_i.sin() / n2).asin()
}

/// Incidence angle beyond which no transmitted ray exists, `asin(n2 / n1)`.
///
/// NaN whenever `n2 >= n1`: going from a low to a high index, or across
/// identical indices, there is no critical angle.
pub fn critical_angle(n1: f64, n2: f64) -> f64 {
    if !(n2 < n1) {
        return f64::NAN;
    }

    (n2 / n1).asin()
}

/// Incidence angle at which the p-polarised (TM) reflectance vanishes, `atan(n2 / n1)`.
pub fn brewster_angle(n1: f64, n2: f64) -> f64 {
    (n2 / n1).atan()
}
