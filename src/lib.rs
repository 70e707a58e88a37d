//! Snell's law and Fresnel reflectance at a planar interface between two media.
//!
//! [`model::OpticalModel::compute`] evaluates the optics for a pair of indices
//! and an incidence angle, and [`diagram::project`] turns the result into an
//! ordered list of rays and a critical-angle cone for drawing.
//! [`controller::Controller`] ties the two together for interactive hosts.

pub mod color;
pub mod controller;
pub mod diagram;
pub mod fresnel;
#[cfg(feature = "macroquad")]
pub mod helpers;
pub mod model;
pub mod output;
pub mod readout;
pub mod settings;
pub mod snell;
pub mod sweep;
