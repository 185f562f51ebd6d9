//! Stacked horizontal ribbons, one row per genome.

use crate::genome::{Gene, Strand};
use crate::label::{BASELINE_RATIO, LabelFit, estimate_text_width, fit_label};
use crate::layout::{DrawableGenome, LayoutConfig};
use mtsvg_render::{Paint, Point, Rotation, Surface, TextStyle};

const OUTLINE: &str = "#000000";

/// Canvas size holding every genome row.
pub fn linear_canvas_size(genomes: &[DrawableGenome], config: &LayoutConfig) -> (f64, f64) {
    let width = genomes
        .iter()
        .map(|d| config.genome_width(d.genome))
        .fold(0.0, f64::max);
    let height = config.ribbon_height() * genomes.len() as f64;
    (width, height)
}

/// Origin of row `index`.
pub fn row_origin(index: usize, config: &LayoutConfig) -> Point {
    Point::new(0.0, config.ribbon_height() * index as f64)
}

/// Draws one row per genome. Genes run left to right as box, label, strand
/// band and arrowhead; intergenic entries only get their box.
pub fn render_linear<S: Surface>(
    surface: &mut S,
    genomes: &[DrawableGenome],
    config: &LayoutConfig,
) {
    let (width, height) = linear_canvas_size(genomes, config);
    surface.create_surface(width, height, false);
    for drawable in genomes {
        draw_row(surface, drawable, config);
    }
}

fn draw_row<S: Surface>(surface: &mut S, drawable: &DrawableGenome, config: &LayoutConfig) {
    let origin = drawable.origin;
    let species_fs = config.species_font_size();
    surface.add_text(
        &drawable.species_label(),
        Point::new(origin.x + config.stroke_width, origin.y + species_fs),
        &TextStyle::italic_bold(species_fs, drawable.font),
        None,
    );

    let top = origin.y + config.species_height;
    let mut x = origin.x + config.stroke_width / 2.0;
    for gene in &drawable.genome.genes {
        let width = config.gene_width(gene);
        surface.add_rectangle(
            Point::new(x, top),
            width,
            config.gene_height,
            &Paint::filled(drawable.gene_color(gene), OUTLINE, config.stroke_width),
        );
        if !gene.is_intergenic() {
            draw_gene_label(surface, drawable, gene, Point::new(x, top), width, config);
        }
        if let (Some(color), Some(strand)) = (drawable.orientation_color(gene), gene.orientation) {
            let band_top = top + config.gene_height + config.intra_genome_space;
            draw_orientation(surface, strand, color, x, band_top, width, config);
        }
        x += width + config.stroke_width;
    }
}

fn draw_gene_label<S: Surface>(
    surface: &mut S,
    drawable: &DrawableGenome,
    gene: &Gene,
    top_left: Point,
    width: f64,
    config: &LayoutConfig,
) {
    let text = drawable.label(gene);
    let fit = fit_label(
        &text,
        config.label_font_size,
        width,
        config.gene_height,
        config.stroke_width,
        config.min_label_font_size,
    );
    let font_size = fit.font_size();
    let center = Point::new(top_left.x + width / 2.0, top_left.y + config.gene_height / 2.0);
    let position = Point::new(
        center.x - estimate_text_width(&text, font_size) / 2.0,
        center.y + font_size * BASELINE_RATIO,
    );
    let rotation = match fit {
        LabelFit::Along(_) => None,
        LabelFit::Across(_) => Some(Rotation {
            degrees: 270.0,
            center,
        }),
    };
    surface.add_text(
        &text,
        position,
        &TextStyle::plain(font_size, drawable.font),
        rotation,
    );
}

/// Band under the gene box, one unit short, then the arrowhead in that unit.
fn draw_orientation<S: Surface>(
    surface: &mut S,
    strand: Strand,
    color: &str,
    x: f64,
    top: f64,
    width: f64,
    config: &LayoutConfig,
) {
    let unit = config.scale_factor;
    let h = config.orientation_height;
    let band_width = width - unit;
    let paint = Paint::solid(color);
    let (band_x, base_x, tip_x) = match strand {
        Strand::Forward => (x, x + band_width, x + width),
        Strand::Reverse => (x + unit, x + unit, x),
    };
    if band_width > 0.0 {
        surface.add_rectangle(Point::new(band_x, top), band_width, h, &paint);
    }
    let overhang = config.arrow_overhang();
    surface.add_closed_path(
        &[
            Point::new(base_x, top - overhang),
            Point::new(tip_x, top + h / 2.0),
            Point::new(base_x, top + h + overhang),
        ],
        &paint,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_scheme::ColorScheme;
    use crate::genome::Genome;
    use mtsvg_render::{Primitive, RecordingSurface};

    fn gene(name: &str, strand: Option<Strand>, units: u32) -> Gene {
        let mut gene = Gene::new(name, strand, 0, 1);
        gene.scaled_length = Some(units);
        gene
    }

    fn drawable<'a>(
        genome: &'a Genome,
        scheme: &'a ColorScheme,
        index: usize,
        oriented: bool,
    ) -> DrawableGenome<'a> {
        DrawableGenome {
            genome,
            origin: row_origin(index, &LayoutConfig::default()),
            color_scheme: scheme,
            font: "Arial",
            show_full_name: false,
            show_orientation: oriented,
        }
    }

    #[test]
    fn canvas_uses_widest_genome() {
        let config = LayoutConfig::default();
        let scheme = ColorScheme::default();
        let a = Genome::new("a", 100, vec![gene("cox1", None, 10)]);
        let b = Genome::new("b", 100, vec![gene("cox1", None, 2), gene("nad1", None, 2)]);
        let rows = [drawable(&a, &scheme, 0, false), drawable(&b, &scheme, 1, false)];
        assert_eq!(linear_canvas_size(&rows, &config), (505.0, 660.0));
    }

    #[test]
    fn primitives_follow_gene_order() {
        let config = LayoutConfig::default();
        let scheme = ColorScheme::default();
        let genome = Genome::new(
            "Homo sapiens",
            16569,
            vec![
                gene("cox1", Some(Strand::Forward), 10),
                gene("trnL1(uaa)", Some(Strand::Reverse), 1),
                gene("intergenic", None, 2),
            ],
        );
        let mut surface = RecordingSurface::new();
        render_linear(&mut surface, &[drawable(&genome, &scheme, 0, true)], &config);
        assert_eq!(
            surface.kinds(),
            vec![
                "surface", "text", // species
                "rect", "text", "rect", "path", // cox1
                "rect", "text", "path", // one unit: arrow only
                "rect", // intergenic
            ]
        );
        assert_eq!(
            surface.texts(),
            vec!["Homo sapiens (16,569 bp)", "cox1", "trnl"]
        );
    }

    #[test]
    fn boxes_advance_by_width_and_stroke() {
        let config = LayoutConfig::default();
        let scheme = ColorScheme::default();
        let genome = Genome::new("x", 100, vec![gene("cox1", None, 4), gene("nad1", None, 2)]);
        let mut surface = RecordingSurface::new();
        render_linear(&mut surface, &[drawable(&genome, &scheme, 1, false)], &config);
        let rects: Vec<(Point, f64, String)> = surface
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Rectangle { top_left, width, paint, .. } => {
                    Some((*top_left, *width, paint.fill.clone()))
                }
                _ => None,
            })
            .collect();
        assert_eq!(rects[0], (Point::new(2.5, 410.0), 200.0, "#f2ed8d".to_string()));
        assert_eq!(rects[1], (Point::new(207.5, 410.0), 100.0, "#b6e07b".to_string()));
    }

    #[test]
    fn narrow_label_is_turned() {
        let config = LayoutConfig::default();
        let scheme = ColorScheme::default();
        let genome = Genome::new("x", 100, vec![gene("nad4l", None, 1)]);
        let mut surface = RecordingSurface::new();
        render_linear(&mut surface, &[drawable(&genome, &scheme, 0, false)], &config);
        let rotation = surface.primitives().iter().find_map(|p| match p {
            Primitive::Text { text, rotation, .. } if text == "nad4l" => Some(*rotation),
            _ => None,
        });
        let rotation = rotation.flatten().unwrap();
        assert_eq!(rotation.degrees, 270.0);
        assert_eq!(rotation.center, Point::new(27.5, 160.0));
    }

    #[test]
    fn reverse_arrow_points_left() {
        let config = LayoutConfig::default();
        let scheme = ColorScheme::default();
        let genome = Genome::new("x", 100, vec![gene("cox1", Some(Strand::Reverse), 3)]);
        let mut surface = RecordingSurface::new();
        render_linear(&mut surface, &[drawable(&genome, &scheme, 0, true)], &config);
        let primitives = surface.primitives();
        match &primitives[primitives.len() - 2] {
            Primitive::Rectangle { top_left, width, paint, .. } => {
                assert_eq!(*top_left, Point::new(52.5, 250.0));
                assert_eq!(*width, 100.0);
                assert_eq!(paint.fill, "#ac759a");
            }
            other => panic!("expected band, got {other:?}"),
        }
        match primitives.last() {
            Some(Primitive::ClosedPath { points, .. }) => {
                assert_eq!(points[1], Point::new(2.5, 265.0));
                assert_eq!(points[0].x, 52.5);
            }
            other => panic!("expected arrow, got {other:?}"),
        }
    }
}
