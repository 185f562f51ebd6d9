use crate::{Paint, Point, Rotation, Surface, TextStyle};
use std::fmt::Write as _;
use std::io;
use std::path::Path;

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Surface {
        width: f64,
        height: f64,
        centered_origin: bool,
    },
    Rectangle {
        top_left: Point,
        width: f64,
        height: f64,
        paint: Paint,
    },
    ClosedPath {
        points: Vec<Point>,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: f64,
        paint: Paint,
    },
    Arc {
        center: Point,
        radius: f64,
        angle_from: f64,
        angle_to: f64,
        paint: Paint,
    },
    Text {
        text: String,
        position: Point,
        style: TextStyle,
        rotation: Option<Rotation>,
    },
    PixelScale(f64),
}

impl Primitive {
    /// Short tag used when comparing draw sequences.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Surface { .. } => "surface",
            Primitive::Rectangle { .. } => "rect",
            Primitive::ClosedPath { .. } => "path",
            Primitive::Circle { .. } => "circle",
            Primitive::Arc { .. } => "arc",
            Primitive::Text { .. } => "text",
            Primitive::PixelScale(_) => "scale",
        }
    }
}

/// Keeps every call in order instead of drawing it.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    primitives: Vec<Primitive>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.primitives.iter().map(Primitive::kind).collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn create_surface(&mut self, width: f64, height: f64, centered_origin: bool) {
        self.primitives.push(Primitive::Surface {
            width,
            height,
            centered_origin,
        });
    }

    fn add_rectangle(&mut self, top_left: Point, width: f64, height: f64, paint: &Paint) {
        self.primitives.push(Primitive::Rectangle {
            top_left,
            width,
            height,
            paint: paint.clone(),
        });
    }

    fn add_closed_path(&mut self, points: &[Point], paint: &Paint) {
        self.primitives.push(Primitive::ClosedPath {
            points: points.to_vec(),
            paint: paint.clone(),
        });
    }

    fn add_circle(&mut self, center: Point, radius: f64, paint: &Paint) {
        self.primitives.push(Primitive::Circle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn add_arc(
        &mut self,
        center: Point,
        radius: f64,
        angle_from: f64,
        angle_to: f64,
        paint: &Paint,
    ) {
        self.primitives.push(Primitive::Arc {
            center,
            radius,
            angle_from,
            angle_to,
            paint: paint.clone(),
        });
    }

    fn add_text(
        &mut self,
        text: &str,
        position: Point,
        style: &TextStyle,
        rotation: Option<Rotation>,
    ) {
        self.primitives.push(Primitive::Text {
            text: text.to_string(),
            position,
            style: style.clone(),
            rotation,
        });
    }

    fn set_pixel_scale(&mut self, factor: f64) {
        self.primitives.push(Primitive::PixelScale(factor));
    }

    fn serialize(&self, path: &Path) -> io::Result<()> {
        let mut listing = String::new();
        for primitive in &self.primitives {
            let _ = writeln!(listing, "{primitive:?}");
        }
        std::fs::write(path, listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let mut surface = RecordingSurface::new();
        surface.create_surface(10.0, 10.0, false);
        surface.add_rectangle(Point::new(0.0, 0.0), 1.0, 1.0, &Paint::solid("#fff"));
        surface.add_text("a", Point::new(0.0, 0.0), &TextStyle::plain(8.0, "Arial"), None);
        surface.set_pixel_scale(2.0);
        assert_eq!(surface.kinds(), vec!["surface", "rect", "text", "scale"]);
        assert_eq!(surface.texts(), vec!["a"]);
    }
}
