//! Projection of an [`OpticalModel`] onto a 2D ray diagram.
//!
//! The diagram lives in a unit square centred on the point where the rays
//! meet the interface. The interface runs along the x axis, the normal along
//! the y axis, and the incident medium is the upper half plane. Angles rotate
//! counter-clockwise, so a positive incidence angle puts the incident ray in
//! the upper left quadrant.
//!
//! [`project`] always builds the same sequence of segments, in draw order:
//! 1. interface axis
//! 2. normal axis
//! 3. incident ray
//! 4. refracted ray, fading out as reflectance grows
//! 5. reflected ray, fading in as reflectance grows
//! 6. critical-angle cone
//!
//! A segment whose geometry is not finite is left out and the rest keep their
//! order. This drops the refracted ray under total internal reflection and the
//! cone when no critical angle exists. Each segment is tagged with a
//! [`SegmentKind`] so a host never has to rely on positions.

use log::debug;
use nalgebra::{Point2, Rotation2, Vector2};
use serde::Serialize;

use crate::{
    color::{self, Rgba},
    model::OpticalModel,
};

/// Length of the incident, refracted and reflected rays.
pub const RAY_LENGTH: f64 = 0.7;
/// Half length of the two axes.
pub const AXIS_HALF_LENGTH: f64 = 0.5;


/// Which part of the diagram a segment draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Interface,
    Normal,
    Incident,
    Refracted,
    Reflected,
    CriticalCone,
}

/// Geometry of a segment, in diagram units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Directed segment from `origin` to `origin + direction`.
    Ray {
        origin: Point2<f64>,
        direction: Vector2<f64>,
    },
    /// Filled triangle.
    Triangle { vertices: [Point2<f64>; 3] },
}

/// A single rendering primitive of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiagramSegment {
    pub kind: SegmentKind,
    pub shape: Shape,
    pub color: Rgba,
}

impl DiagramSegment {
    fn ray(kind: SegmentKind, origin: Point2<f64>, direction: Vector2<f64>, color: Rgba) -> Self {
        Self {
            kind,
            shape: Shape::Ray { origin, direction },
            color,
        }
    }

    fn triangle(kind: SegmentKind, vertices: [Point2<f64>; 3], color: Rgba) -> Self {
        Self {
            kind,
            shape: Shape::Triangle { vertices },
            color,
        }
    }

    /// The points that define the segment: both ends of a ray, or the three
    /// triangle vertices.
    pub fn points(&self) -> Vec<Point2<f64>> {
        match self.shape {
            Shape::Ray { origin, direction } => vec![origin, origin + direction],
            Shape::Triangle { vertices } => vertices.to_vec(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.points()
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite())
    }
}

/// Ordered segments of one projected model.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Diagram {
    segments: Vec<DiagramSegment>,
}

impl Diagram {
    pub fn segments(&self) -> &[DiagramSegment] {
        &self.segments
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagramSegment> {
        self.segments.iter()
    }

    /// Looks up the segment of a given kind, if it was emitted.
    pub fn get(&self, kind: SegmentKind) -> Option<&DiagramSegment> {
        self.segments.iter().find(|s| s.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Rotates `v` counter-clockwise by `angle` radians.
fn rotate(v: Vector2<f64>, angle: f64) -> Vector2<f64> {
    Rotation2::new(angle) * v
}

/// Maps a model onto the fixed sequence of diagram segments.
///
/// Ray colours blend on `r = sqrt(R_te * R_tm)`, clamped into `[0, 1]`. At
/// `r = 0` the refracted ray is fully [`color::TRANSMITTED`] and the reflected
/// ray is invisible; at `r = 1` it is the other way round.
pub fn project(model: &OpticalModel) -> Diagram {
    let r = model.blend_factor().clamp(0.0, 1.0) as f32;
    let unit = Vector2::y() * RAY_LENGTH;
    let origin = Point2::origin();

    let critical = rotate(unit, model.critical_angle);
    let critical_mirror = Vector2::new(-critical.x, critical.y);

    let candidates = [
        DiagramSegment::ray(
            SegmentKind::Interface,
            Point2::new(-AXIS_HALF_LENGTH, 0.0),
            Vector2::x() * 2.0 * AXIS_HALF_LENGTH,
            color::AXIS,
        ),
        DiagramSegment::ray(
            SegmentKind::Normal,
            Point2::new(0.0, -AXIS_HALF_LENGTH),
            Vector2::y() * 2.0 * AXIS_HALF_LENGTH,
            color::NORMAL,
        ),
        DiagramSegment::ray(
            SegmentKind::Incident,
            origin,
            rotate(unit, model.incidence_angle),
            color::INCIDENT,
        ),
        DiagramSegment::ray(
            SegmentKind::Refracted,
            origin,
            rotate(-unit, model.refraction_angle),
            color::TRANSMITTED.lerp(color::TRANSPARENT, r),
        ),
        DiagramSegment::ray(
            SegmentKind::Reflected,
            origin,
            rotate(unit, model.reflection_angle),
            color::TRANSPARENT.lerp(color::TRANSMITTED, r),
        ),
        DiagramSegment::triangle(
            SegmentKind::CriticalCone,
            [
                origin,
                Point2::from(critical),
                Point2::from(critical_mirror),
            ],
            color::CRITICAL,
        ),
    ];

    let segments = candidates
        .into_iter()
        .filter(|segment| {
            let keep = segment.is_finite();
            if !keep {
                debug!("skipping {:?}: geometry is undefined", segment.kind);
            }
            keep
        })
        .collect();

    Diagram { segments }
}
