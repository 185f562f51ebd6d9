//! Polar map of a single genome.

use crate::genome::Strand;
use crate::geometry::{
    arc_degrees, offset_to_angle, polar_to_cartesian, radial_rotation, radius_for_circumference,
    scaled_polar, tangential_rotation,
};
use crate::label::{BASELINE_RATIO, LabelFit, estimate_text_width, fit_label};
use crate::layout::{DrawableGenome, LayoutConfig};
use mtsvg_render::{Paint, Point, Rotation, Surface, TextStyle, clockwise_sweep};

const OUTLINE: &str = "#000000";

/// Radii of the ring, derived from the scaled circumference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    /// Radius that offsets are converted to angles with.
    pub angular: f64,
    pub outer: f64,
    pub inner: f64,
    pub thickness: f64,
}

impl Ring {
    pub fn new(circumference: f64, config: &LayoutConfig) -> Self {
        let angular = radius_for_circumference(circumference);
        let thickness = config.ribbon_height() / 2.0;
        // Tiny genomes still get a ring with a visible hole.
        let outer = angular.max(2.0 * thickness);
        Self {
            angular,
            outer,
            inner: outer - thickness,
            thickness,
        }
    }

    pub fn middle(&self) -> f64 {
        (self.outer + self.inner) / 2.0
    }

    pub fn angle(&self, offset: f64) -> f64 {
        offset_to_angle(offset, self.angular)
    }
}

fn translate(center: Point, p: Point) -> Point {
    Point::new(center.x + p.x, center.y + p.y)
}

pub fn circular_canvas_side(ring: &Ring, config: &LayoutConfig) -> f64 {
    2.0 * (ring.outer + config.species_height + config.stroke_width)
}

/// Draws the ring clockwise from 12 o'clock. Each gene gets a black
/// background arc, its colored arc, a label and, when enabled, a strand
/// arc with arrowhead. Intergenic entries only get the two arcs.
pub fn render_circular<S: Surface>(
    surface: &mut S,
    drawable: &DrawableGenome,
    config: &LayoutConfig,
) {
    let circumference = drawable.genome.total_units() as f64 * config.scale_factor;
    let ring = Ring::new(circumference, config);
    let side = circular_canvas_side(&ring, config);
    surface.create_surface(side, side, true);

    let center = drawable.origin;
    let outline = Paint::outline(OUTLINE, config.stroke_width);
    surface.add_circle(center, ring.outer, &outline);
    surface.add_circle(center, ring.inner, &outline);
    draw_center_labels(surface, drawable, center, config);

    let mut offset = 0.0;
    for gene in &drawable.genome.genes {
        let width = config.gene_width(gene);
        let from = ring.angle(offset);
        let to = ring.angle(offset + width);
        surface.add_arc(
            center,
            ring.middle(),
            from,
            to,
            &Paint::outline(OUTLINE, ring.thickness),
        );
        let inset = arc_degrees(config.stroke_width, ring.middle())
            .min(clockwise_sweep(from, to) / 4.0);
        surface.add_arc(
            center,
            ring.middle(),
            from - inset,
            to + inset,
            &Paint::outline(
                drawable.gene_color(gene),
                (ring.thickness - 2.0 * config.stroke_width).max(config.stroke_width),
            ),
        );
        if !gene.is_intergenic() {
            let text = drawable.label(gene);
            let mid_offset = offset + width / 2.0;
            draw_gene_label(
                surface,
                drawable,
                &text,
                center,
                &ring,
                mid_offset,
                width,
                config,
            );
        }
        if let (Some(color), Some(strand)) = (drawable.orientation_color(gene), gene.orientation) {
            draw_orientation(surface, strand, color, center, &ring, offset, width, config);
        }
        offset += width;
    }
}

fn draw_center_labels<S: Surface>(
    surface: &mut S,
    drawable: &DrawableGenome,
    center: Point,
    config: &LayoutConfig,
) {
    let fs = config.species_font_size();
    let style = TextStyle::italic_bold(fs, drawable.font);
    let species = &drawable.genome.species;
    let length = drawable.genome.length_label();
    surface.add_text(
        species,
        Point::new(
            center.x - estimate_text_width(species, fs) / 2.0,
            center.y - fs * 0.35,
        ),
        &style,
        None,
    );
    surface.add_text(
        &length,
        Point::new(
            center.x - estimate_text_width(&length, fs) / 2.0,
            center.y + fs * 0.7,
        ),
        &style,
        None,
    );
}

#[allow(clippy::too_many_arguments)]
fn draw_gene_label<S: Surface>(
    surface: &mut S,
    drawable: &DrawableGenome,
    text: &str,
    center: Point,
    ring: &Ring,
    mid_offset: f64,
    width: f64,
    config: &LayoutConfig,
) {
    let angle = ring.angle(mid_offset);
    let arc_length = if ring.angular > 0.0 {
        width * ring.middle() / ring.angular
    } else {
        width
    };
    let fit = fit_label(
        text,
        config.label_font_size,
        arc_length,
        ring.thickness,
        config.stroke_width,
        config.min_label_font_size,
    );
    let font_size = fit.font_size();
    let anchor = translate(center, scaled_polar(angle, ring.outer, ring.middle() / ring.outer));
    let degrees = match fit {
        LabelFit::Along(_) => tangential_rotation(angle),
        LabelFit::Across(_) => radial_rotation(angle),
    };
    surface.add_text(
        text,
        Point::new(
            anchor.x - estimate_text_width(text, font_size) / 2.0,
            anchor.y + font_size * BASELINE_RATIO,
        ),
        &TextStyle::plain(font_size, drawable.font),
        Some(Rotation {
            degrees,
            center: anchor,
        }),
    );
}

/// Thin arc inside the ring, one unit short, then the arrowhead in that unit.
#[allow(clippy::too_many_arguments)]
fn draw_orientation<S: Surface>(
    surface: &mut S,
    strand: Strand,
    color: &str,
    center: Point,
    ring: &Ring,
    offset: f64,
    width: f64,
    config: &LayoutConfig,
) {
    let h = config.orientation_height;
    let radius = ring.inner - config.intra_genome_space - h / 2.0;
    if radius <= 0.0 {
        return;
    }
    let unit = config.scale_factor;
    let (band_from, band_to, base, tip) = match strand {
        Strand::Forward => (offset, offset + width - unit, offset + width - unit, offset + width),
        Strand::Reverse => (offset + unit, offset + width, offset + unit, offset),
    };
    if band_to > band_from {
        surface.add_arc(
            center,
            radius,
            ring.angle(band_from),
            ring.angle(band_to),
            &Paint::outline(color, h),
        );
    }
    let reach = h / 2.0 + config.arrow_overhang();
    let base_angle = ring.angle(base);
    let points = [
        scaled_polar(base_angle, radius, (radius + reach) / radius),
        polar_to_cartesian(ring.angle(tip), radius),
        scaled_polar(base_angle, radius, (radius - reach).max(0.0) / radius),
    ];
    let points: Vec<Point> = points.into_iter().map(|p| translate(center, p)).collect();
    surface.add_closed_path(&points, &Paint::solid(color));
}
