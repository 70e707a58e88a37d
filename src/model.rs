//! Optical state of a single planar interface.
//!
//! An [`OpticalModel`] is a pure function of three scalars: the incident-side
//! index `n1`, the transmission-side index `n2` and the incidence angle. Every
//! derived quantity is computed once, in [`OpticalModel::compute`], and the
//! value is never mutated afterwards. A change of input means building a new
//! model.
//!
//! The computation is total. Out-of-domain inputs do not produce errors, they
//! produce NaN fields:
//! - `refraction_angle` is NaN under total internal reflection
//! - `critical_angle` is NaN when `n2 >= n1`
//! - reflectances are never NaN, a NaN result is replaced by `1.0`

use log::warn;
use serde::Serialize;

use crate::{fresnel, snell};


/// Angles and reflectances of light crossing a planar interface.
///
/// All angles are in radians, measured from the interface normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpticalModel {
    pub n1: f64,
    pub n2: f64,
    pub incidence_angle: f64,
    pub refraction_angle: f64,
    pub reflection_angle: f64,
    pub critical_angle: f64,
    pub brewster_angle: f64,
    pub reflectance_te: f64,
    pub reflectance_tm: f64,
}

impl OpticalModel {
    /// Computes every derived quantity from the two indices and the incidence angle.
    ///
    /// Never fails, inputs are not validated. See the module docs for which
    /// fields can be NaN.
    pub fn compute(n1: f64, n2: f64, incidence_angle: f64) -> Self {
        let refraction_angle = snell::get_theta_t(incidence_angle, n1, n2);
        let refl = fresnel::reflectance(n1, n2, incidence_angle, refraction_angle);

        Self {
            n1,
            n2,
            incidence_angle,
            refraction_angle,
            reflection_angle: -incidence_angle,
            critical_angle: snell::critical_angle(n1, n2),
            brewster_angle: snell::brewster_angle(n1, n2),
            reflectance_te: refl.x,
            reflectance_tm: refl.y,
        }
    }

    /// True iff `|incidence_angle| > critical_angle`.
    ///
    /// Any comparison against a NaN critical angle is false, so there is no
    /// total internal reflection when no critical angle exists.
    pub fn is_total_internal_reflection(&self) -> bool {
        self.incidence_angle.abs() > self.critical_angle
    }

    /// Geometric mean of the two reflectances, `sqrt(R_te * R_tm)`.
    ///
    /// Used as a single reflected/transmitted blend factor. Since neither
    /// reflectance is ever NaN, neither is this. It lies in `[0, 1]` for
    /// positive indices; non-physical indices can push it above 1.
    pub fn blend_factor(&self) -> f64 {
        let r = (self.reflectance_te * self.reflectance_tm).sqrt();
        debug_assert!(!r.is_nan(), "blend factor is NaN for {:?}", self);
        if r.is_nan() {
            warn!("blend factor is NaN for {:?}, treating as total reflection", self);
            return 1.0;
        }
        r
    }
}
