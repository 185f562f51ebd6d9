use crate::{Paint, Point, Rotation, Surface, TextStyle, clockwise_sweep, point_on_circle};
use std::io;
use std::path::Path as FsPath;
use svg::{Document, Node};
use svg::node::element::{Circle, Path, Rectangle, Text};

/// Writes primitives into an SVG document.
#[derive(Debug)]
pub struct SvgSurface {
    document: Document,
    width: f64,
    height: f64,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgSurface {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }

    fn apply_paint<T: svg::Node>(mut node: T, paint: &Paint) -> T {
        node.assign("fill", paint.fill.as_str());
        node.assign("stroke", paint.stroke.as_str());
        if paint.stroke_width > 0.0 {
            node.assign("stroke-width", num(paint.stroke_width));
        }
        node
    }
}

/// Fixed-precision coordinates keep the output stable across runs.
fn num(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        _ => text.to_string(),
    }
}

fn arc_path_data(center: Point, radius: f64, angle_from: f64, angle_to: f64) -> String {
    let sweep = clockwise_sweep(angle_from, angle_to);
    let start = point_on_circle(center, radius, angle_from);
    let r = num(radius);
    if sweep >= 360.0 {
        // A single arc command cannot close on itself, go round in two halves.
        let half = point_on_circle(center, radius, angle_from - 180.0);
        return format!(
            "M {} {} A {r} {r} 0 0 1 {} {} A {r} {r} 0 0 1 {} {}",
            num(start.x),
            num(start.y),
            num(half.x),
            num(half.y),
            num(start.x),
            num(start.y)
        );
    }
    let end = point_on_circle(center, radius, angle_to);
    let large_arc = if sweep > 180.0 { 1 } else { 0 };
    format!(
        "M {} {} A {r} {r} 0 {large_arc} 1 {} {}",
        num(start.x),
        num(start.y),
        num(end.x),
        num(end.y)
    )
}

impl Surface for SvgSurface {
    fn create_surface(&mut self, width: f64, height: f64, centered_origin: bool) {
        let (min_x, min_y) = if centered_origin {
            (-width / 2.0, -height / 2.0)
        } else {
            (0.0, 0.0)
        };
        self.width = width;
        self.height = height;
        self.document = Document::new()
            .set(
                "viewBox",
                format!("{} {} {} {}", num(min_x), num(min_y), num(width), num(height)),
            )
            .set("width", num(width))
            .set("height", num(height));
    }

    fn add_rectangle(&mut self, top_left: Point, width: f64, height: f64, paint: &Paint) {
        let rect = Rectangle::new()
            .set("x", num(top_left.x))
            .set("y", num(top_left.y))
            .set("width", num(width))
            .set("height", num(height));
        self.document.append(Self::apply_paint(rect, paint));
    }

    fn add_closed_path(&mut self, points: &[Point], paint: &Paint) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut d = format!("M {} {}", num(first.x), num(first.y));
        for p in rest {
            d.push_str(&format!(" L {} {}", num(p.x), num(p.y)));
        }
        d.push_str(" Z");
        self.document
            .append(Self::apply_paint(Path::new().set("d", d), paint));
    }

    fn add_circle(&mut self, center: Point, radius: f64, paint: &Paint) {
        let circle = Circle::new()
            .set("cx", num(center.x))
            .set("cy", num(center.y))
            .set("r", num(radius));
        self.document.append(Self::apply_paint(circle, paint));
    }

    fn add_arc(
        &mut self,
        center: Point,
        radius: f64,
        angle_from: f64,
        angle_to: f64,
        paint: &Paint,
    ) {
        let d = arc_path_data(center, radius, angle_from, angle_to);
        self.document
            .append(Self::apply_paint(Path::new().set("d", d), paint));
    }

    fn add_text(
        &mut self,
        text: &str,
        position: Point,
        style: &TextStyle,
        rotation: Option<Rotation>,
    ) {
        let mut node = Text::new(text)
            .set("x", num(position.x))
            .set("y", num(position.y))
            .set("font-size", num(style.font_size))
            .set("font-family", style.font_family.as_str())
            .set("font-style", style.font_style.as_str())
            .set("font-weight", style.font_weight.as_str());
        if let Some(rotation) = rotation {
            node = node.set("transform", rotation.transform());
        }
        self.document.append(node);
    }

    fn set_pixel_scale(&mut self, factor: f64) {
        self.document.assign("width", num(self.width * factor));
        self.document.assign("height", num(self.height * factor));
    }

    fn serialize(&self, path: &FsPath) -> io::Result<()> {
        svg::save(path, &self.document)
    }
}
