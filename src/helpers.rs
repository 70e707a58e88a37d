//! Drawing helpers for the interactive viewer.
//!
//! Diagram coordinates are mapped to screen pixels with a uniform scale and a
//! fixed centre, with y flipped so the incident medium sits at the top of the
//! window.

use macroquad::prelude::*;

use crate::{
    diagram::{Diagram, DiagramSegment, Shape},
    readout::{Readout, TIR_WARNING},
};

/// Pixels per diagram unit.
pub const SCALE: f32 = 400.0;
pub const OFFSET_X: f32 = 560.0;
pub const OFFSET_Y: f32 = 300.0;
const LINE_THICKNESS: f32 = 2.0;

/// Screen position of a diagram point.
pub fn to_screen(x: f64, y: f64) -> Vec2 {
    vec2(x as f32 * SCALE + OFFSET_X, -(y as f32) * SCALE + OFFSET_Y)
}

/// Renders one segment: rays as lines, cones as filled triangles.
pub fn draw_segment(segment: &DiagramSegment) {
    let color: Color = segment.color.into();
    match segment.shape {
        Shape::Ray { origin, direction } => {
            let start = to_screen(origin.x, origin.y);
            let end = origin + direction;
            let end = to_screen(end.x, end.y);
            draw_line(start.x, start.y, end.x, end.y, LINE_THICKNESS, color);
        }
        Shape::Triangle { vertices: [a, b, c] } => {
            draw_triangle(
                to_screen(a.x, a.y),
                to_screen(b.x, b.y),
                to_screen(c.x, c.y),
                color,
            );
        }
    }
}

/// Renders every segment in diagram order.
pub fn draw_diagram(diagram: &Diagram) {
    for segment in diagram.iter() {
        draw_segment(segment);
    }
}

/// Renders the derived outputs below the input fields, and the TIR warning at the bottom.
pub fn draw_readout(readout: &Readout, x: f32, y: f32, line_height: f32) {
    // the first three rows are the editable inputs
    for (i, (label, value)) in readout.rows().iter().skip(3).enumerate() {
        let text = format!("{} {}", label, value);
        draw_text(&text, x, y + i as f32 * line_height, 20.0, WHITE);
    }
    if readout.tir_warning {
        draw_text(TIR_WARNING, x, screen_height() - line_height, 20.0, RED);
    }
}
