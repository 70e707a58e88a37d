//! Fresnel equations for a planar dielectric interface.
//!
//! This module computes the reflection amplitude coefficients for the two
//! orthogonal polarisations and the corresponding power reflectances:
//! - s-polarisation (TE): electric field perpendicular to the plane of incidence
//! - p-polarisation (TM): electric field parallel to the plane of incidence
//!
//! # Total reflectance substitution
//!
//! Under total internal reflection the transmitted angle is NaN and so is every
//! coefficient built from it. A NaN reflectance is replaced by `1.0`: all
//! incident power is reflected. The same substitution applies to any other
//! NaN outcome (for example NaN indices), so a reflectance returned from this
//! module is never NaN.

use nalgebra::Vector2;

#[cfg(test)]
mod tests {

    use super::*;
    use crate::snell::get_theta_t;

    #[test]
    fn normal_incidence_glass() {
        let refl = reflectance(1.0, 1.5, 0.0, 0.0);
        // ((1 - 1.5) / (1 + 1.5))^2
        assert!((refl.x - 0.04).abs() < 1e-12, "te: {}", refl.x);
        assert!((refl.y - 0.04).abs() < 1e-12, "tm: {}", refl.y);
    }

    #[test]
    fn no_contrast_no_reflection() {
        let theta_i = 0.6;
        let theta_t = get_theta_t(theta_i, 1.33, 1.33);
        let refl = reflectance(1.33, 1.33, theta_i, theta_t);
        assert!(refl.x.abs() < 1e-12);
        assert!(refl.y.abs() < 1e-12);
    }

    #[test]
    fn nan_transmitted_angle_is_total_reflection() {
        let refl = reflectance(1.5, 1.0, 1.2, f64::NAN);
        assert_eq!(refl.x, 1.0);
        assert_eq!(refl.y, 1.0);
    }

    #[test]
    fn grazing_incidence_reflects_everything() {
        let theta_i = std::f64::consts::FRAC_PI_2;
        let theta_t = get_theta_t(theta_i, 1.0, 1.5);
        let refl = reflectance(1.0, 1.5, theta_i, theta_t);
        assert!((refl.x - 1.0).abs() < 1e-9);
        assert!((refl.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn tm_vanishes_at_brewster() {
        let theta_i = 1.5f64.atan();
        let theta_t = get_theta_t(theta_i, 1.0, 1.5);
        let refl = reflectance(1.0, 1.5, theta_i, theta_t);
        assert!(refl.y < 1e-12, "tm: {}", refl.y);
        assert!(refl.x > 0.1, "te: {}", refl.x);
    }

    #[test]
    fn tm_below_te_between_normal_and_grazing() {
        let theta_i = 0.5;
        let theta_t = get_theta_t(theta_i, 1.0, 1.5);
        let refl = reflectance(1.0, 1.5, theta_i, theta_t);
        assert!(refl.y < refl.x);
    }

    #[test]
    fn total_reflection_rule() {
        assert_eq!(total_if_nan(f64::NAN), 1.0);
        assert_eq!(total_if_nan(0.25), 0.25);
        assert_eq!(total_if_nan(f64::INFINITY), f64::INFINITY);
    }
}

/// Computes the Fresnel reflection amplitude coefficients `(r_te, r_tm)`.
///
/// The TE coefficient pairs each index with the cosine of its own angle, the
/// TM coefficient crosses them, which is what makes it vanish at Brewster's
/// angle. Only the squares are used downstream, so the sign convention does
/// not matter here.
///
/// # Example
/// ```rust
/// let ampl = refrax::fresnel::refl(1.0, 1.5, 0.0, 0.0);
/// assert!((ampl.x + 0.2).abs() < 1e-12);
/// ```
pub fn refl(n1: f64, n2: f64, theta_i: f64, theta_t: f64) -> Vector2<f64> {
    let cti = theta_i.cos();
    let ctt = theta_t.cos();
    let te = (n1 * cti - n2 * ctt) / (n1 * cti + n2 * ctt);
    let tm = (n2 * cti - n1 * ctt) / (n1 * ctt + n2 * cti);
    Vector2::new(te, tm)
}

/// Computes the power reflectances `(R_te, R_tm)`, the squared amplitude coefficients.
///
/// A NaN reflectance is forced to `1.0`.
pub fn reflectance(n1: f64, n2: f64, theta_i: f64, theta_t: f64) -> Vector2<f64> {
    refl(n1, n2, theta_i, theta_t).map(|r| total_if_nan(r.powi(2)))
}

/// Replaces a NaN reflectance with total reflectance.
pub fn total_if_nan(reflectance: f64) -> f64 {
    if reflectance.is_nan() {
        1.0
    } else {
        reflectance
    }
}
