//! Drawing surfaces for genome maps.
//!
//! Layout code only talks to the [`Surface`] trait. [`SvgSurface`] turns the
//! calls into an SVG document, [`RecordingSurface`] keeps them as
//! [`Primitive`] values so layouts can be inspected without a backend.

mod recording;
mod svg_surface;

pub use recording::{Primitive, RecordingSurface};
pub use svg_surface::SvgSurface;

use std::io;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fill and outline of a shape. Use `"none"` to disable either.
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Paint {
    pub fn filled(fill: &str, stroke: &str, stroke_width: f64) -> Self {
        Self {
            fill: fill.to_string(),
            stroke: stroke.to_string(),
            stroke_width,
        }
    }

    /// Fill only, no outline.
    pub fn solid(fill: &str) -> Self {
        Self::filled(fill, "none", 0.0)
    }

    /// Outline only, used for arcs and circles.
    pub fn outline(stroke: &str, stroke_width: f64) -> Self {
        Self::filled("none", stroke, stroke_width)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_family: String,
    pub font_style: String,
    pub font_weight: String,
}

impl TextStyle {
    pub fn plain(font_size: f64, font_family: &str) -> Self {
        Self {
            font_size,
            font_family: font_family.to_string(),
            font_style: "normal".to_string(),
            font_weight: "normal".to_string(),
        }
    }

    pub fn italic_bold(font_size: f64, font_family: &str) -> Self {
        Self {
            font_style: "italic".to_string(),
            font_weight: "bold".to_string(),
            ..Self::plain(font_size, font_family)
        }
    }
}

/// Clockwise rotation (screen space) around `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub degrees: f64,
    pub center: Point,
}

impl Rotation {
    pub fn transform(&self) -> String {
        format!(
            "rotate({:.3} {:.3} {:.3})",
            self.degrees, self.center.x, self.center.y
        )
    }
}

/// The operations a genome map needs from a vector backend.
///
/// Calls are z-ordered: anything added later is painted over earlier
/// primitives.
pub trait Surface {
    fn create_surface(&mut self, width: f64, height: f64, centered_origin: bool);

    fn add_rectangle(&mut self, top_left: Point, width: f64, height: f64, paint: &Paint);

    fn add_closed_path(&mut self, points: &[Point], paint: &Paint);

    fn add_circle(&mut self, center: Point, radius: f64, paint: &Paint);

    /// Angles are in degrees, counter-clockwise from 3 o'clock. The arc runs
    /// clockwise from `angle_from` to `angle_to`; equal angles mean a full
    /// circle.
    fn add_arc(
        &mut self,
        center: Point,
        radius: f64,
        angle_from: f64,
        angle_to: f64,
        paint: &Paint,
    );

    fn add_text(
        &mut self,
        text: &str,
        position: Point,
        style: &TextStyle,
        rotation: Option<Rotation>,
    );

    fn set_pixel_scale(&mut self, factor: f64);

    fn serialize(&self, path: &Path) -> io::Result<()>;
}

/// Clockwise sweep in degrees between two angles, in `(0, 360]`.
pub fn clockwise_sweep(angle_from: f64, angle_to: f64) -> f64 {
    let sweep = (angle_from - angle_to).rem_euclid(360.0);
    if sweep < 1e-9 { 360.0 } else { sweep }
}

/// Screen position of `angle` (degrees) on a circle, y pointing down.
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    let t = angle.to_radians();
    Point {
        x: center.x + radius * t.cos(),
        y: center.y - radius * t.sin(),
    }
}
