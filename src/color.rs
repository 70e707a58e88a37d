//! RGBA colours for diagram segments.

use serde::Serialize;


/// Linear RGBA colour, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Channel-wise linear interpolation, `self` at `t = 0` and `other` at `t = 1`.
    ///
    /// `t` is not clamped.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Rgba::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

#[cfg(feature = "macroquad")]
impl From<Rgba> for macroquad::color::Color {
    fn from(c: Rgba) -> Self {
        macroquad::color::Color::new(c.r, c.g, c.b, c.a)
    }
}

/// Interface plane.
pub const AXIS: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
/// Interface normal.
pub const NORMAL: Rgba = Rgba::new(1.0, 1.0, 0.0, 1.0);
/// Incident ray, always solid.
pub const INCIDENT: Rgba = Rgba::new(1.0, 105.0 / 255.0, 180.0 / 255.0, 1.0);
/// Full-intensity refracted or reflected ray.
pub const TRANSMITTED: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);
pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
/// Critical-angle cone.
pub const CRITICAL: Rgba = Rgba::new(105.0 / 255.0, 105.0 / 255.0, 105.0 / 255.0, 1.0);
