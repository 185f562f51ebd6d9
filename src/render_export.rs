use crate::color_scheme::ColorScheme;
use crate::error::{MtSvgError, Result};
use crate::genome::Genome;
use crate::layout::{DrawableGenome, LayoutConfig};
use crate::render_circular::render_circular;
use crate::render_linear::{render_linear, row_origin};
use mtsvg_render::{Point, Surface, SvgSurface};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapKind {
    #[default]
    Linear,
    Circular,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub kind: MapKind,
    pub layout: LayoutConfig,
    pub color_scheme: ColorScheme,
    pub font: String,
    pub show_full_name: bool,
    pub show_orientation: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            kind: MapKind::Linear,
            layout: LayoutConfig::default(),
            color_scheme: ColorScheme::default(),
            font: "Arial".to_string(),
            show_full_name: false,
            show_orientation: false,
        }
    }
}

impl RenderOptions {
    fn drawable<'a>(&'a self, genome: &'a Genome, origin: Point) -> DrawableGenome<'a> {
        DrawableGenome {
            genome,
            origin,
            color_scheme: &self.color_scheme,
            font: &self.font,
            show_full_name: self.show_full_name,
            show_orientation: self.show_orientation,
        }
    }
}

/// Fails with [`MtSvgError::CircularGenomeCount`] unless a circular map
/// gets exactly one genome.
pub fn check_genome_count(kind: MapKind, count: usize) -> Result<()> {
    if kind == MapKind::Circular && count != 1 {
        return Err(MtSvgError::CircularGenomeCount(count));
    }
    Ok(())
}

/// Draws `genomes` onto `surface` and applies the pixel scale.
pub fn render_map<S: Surface>(
    surface: &mut S,
    genomes: &[Genome],
    options: &RenderOptions,
) -> Result<()> {
    check_genome_count(options.kind, genomes.len())?;
    if genomes.is_empty() {
        return Err(MtSvgError::NoGenes);
    }
    let config = &options.layout;
    match options.kind {
        MapKind::Linear => {
            let rows: Vec<DrawableGenome> = genomes
                .iter()
                .enumerate()
                .map(|(i, genome)| options.drawable(genome, row_origin(i, config)))
                .collect();
            render_linear(surface, &rows, config);
        }
        MapKind::Circular => {
            let drawable = options.drawable(&genomes[0], Point::default());
            render_circular(surface, &drawable, config);
        }
    }
    surface.set_pixel_scale(config.pixel_scale);
    Ok(())
}

pub fn render_svg_string(genomes: &[Genome], options: &RenderOptions) -> Result<String> {
    let mut surface = SvgSurface::new();
    render_map(&mut surface, genomes, options)?;
    Ok(surface.to_svg_string())
}

pub fn export_svg(genomes: &[Genome], options: &RenderOptions, path: &Path) -> Result<()> {
    let mut surface = SvgSurface::new();
    render_map(&mut surface, genomes, options)?;
    surface.serialize(path)?;
    info!(
        path = %path.display(),
        genomes = genomes.len(),
        kind = ?options.kind,
        "wrote genome map"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{Gene, Strand};
    use mtsvg_render::RecordingSurface;

    fn genome(species: &str) -> Genome {
        let mut cox1 = Gene::new("cox1", Some(Strand::Forward), 1, 1500);
        cox1.scaled_length = Some(10);
        let mut trn = Gene::new("trnl", Some(Strand::Reverse), 1500, 1570);
        trn.scaled_length = Some(1);
        Genome::new(species, 16569, vec![cox1, trn])
    }

    #[test]
    fn circular_map_needs_exactly_one_genome() {
        let options = RenderOptions {
            kind: MapKind::Circular,
            ..RenderOptions::default()
        };
        let mut surface = RecordingSurface::new();
        let err = render_map(&mut surface, &[genome("a"), genome("b")], &options).unwrap_err();
        assert!(matches!(err, MtSvgError::CircularGenomeCount(2)));
        assert!(surface.primitives().is_empty());
        assert!(check_genome_count(MapKind::Linear, 3).is_ok());
    }

    #[test]
    fn pixel_scale_comes_last() {
        let mut surface = RecordingSurface::new();
        render_map(&mut surface, &[genome("a")], &RenderOptions::default()).unwrap();
        assert_eq!(surface.kinds().last(), Some(&"scale"));
    }

    #[test]
    fn svg_holds_labels_and_scaled_size() {
        let genomes = [genome("Mus musculus"), genome("Homo sapiens")];
        let svg = render_svg_string(&genomes, &RenderOptions::default()).unwrap();
        assert!(svg.contains("Mus musculus (16,569 bp)"));
        assert!(svg.contains("Homo sapiens (16,569 bp)"));
        assert!(svg.contains("cox1"));
        // 11 units × 50 + 2 strokes = 560 wide, two rows of 330
        assert!(svg.contains("viewBox=\"0 0 560 660\""));
        assert!(svg.contains("width=\"168\""));
    }

    #[test]
    fn circular_svg_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");
        let options = RenderOptions {
            kind: MapKind::Circular,
            show_orientation: true,
            ..RenderOptions::default()
        };
        export_svg(&[genome("Homo sapiens")], &options, &path).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("(16,569 bp)"));
        assert!(svg.contains("<circle"));
    }
}
