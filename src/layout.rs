//! Shared layout parameters and the per-render view of a genome.

use crate::color_scheme::ColorScheme;
use crate::genome::{Gene, Genome};
use crate::label::display_name;
use mtsvg_render::Point;
use serde::{Deserialize, Serialize};

/// Drawing constants, in canvas units unless noted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Canvas units per scaled length unit.
    pub scale_factor: f64,
    pub stroke_width: f64,
    /// Output size relative to the canvas.
    pub pixel_scale: f64,
    pub inter_genome_space: f64,
    pub intra_genome_space: f64,
    pub gene_height: f64,
    pub orientation_height: f64,
    pub species_height: f64,
    pub label_font_size: f64,
    pub min_label_font_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale_factor: 50.0,
            stroke_width: 5.0,
            pixel_scale: 0.3,
            inter_genome_space: 50.0,
            intra_genome_space: 10.0,
            gene_height: 160.0,
            orientation_height: 30.0,
            species_height: 80.0,
            label_font_size: 40.0,
            min_label_font_size: 12.0,
        }
    }
}

impl LayoutConfig {
    /// Height of one genome row in the linear map.
    pub fn ribbon_height(&self) -> f64 {
        self.species_height
            + self.gene_height
            + self.orientation_height
            + self.intra_genome_space
            + self.inter_genome_space
    }

    pub fn species_font_size(&self) -> f64 {
        self.species_height * 0.75
    }

    /// Overhang of an arrowhead past its orientation band, on each side.
    pub fn arrow_overhang(&self) -> f64 {
        self.orientation_height * 0.25
    }

    pub fn gene_width(&self, gene: &Gene) -> f64 {
        f64::from(gene.units()) * self.scale_factor
    }

    /// Width taken by a genome's genes including one stroke per gene.
    pub fn genome_width(&self, genome: &Genome) -> f64 {
        genome.total_units() as f64 * self.scale_factor
            + genome.genes.len() as f64 * self.stroke_width
    }
}

/// A genome bound to the presentation choices of one render pass.
#[derive(Clone, Debug)]
pub struct DrawableGenome<'a> {
    pub genome: &'a Genome,
    pub origin: Point,
    pub color_scheme: &'a ColorScheme,
    pub font: &'a str,
    pub show_full_name: bool,
    pub show_orientation: bool,
}

impl<'a> DrawableGenome<'a> {
    pub fn label(&self, gene: &Gene) -> String {
        display_name(&gene.name, self.show_full_name)
    }

    pub fn gene_color(&self, gene: &Gene) -> &'a str {
        self.color_scheme.resolve(&gene.name)
    }

    /// Band color and direction, `None` when nothing is drawn for `gene`.
    pub fn orientation_color(&self, gene: &Gene) -> Option<&'a str> {
        if !self.show_orientation || gene.is_intergenic() {
            return None;
        }
        gene.orientation
            .map(|strand| self.color_scheme.resolve(strand.symbol()))
    }

    pub fn species_label(&self) -> String {
        format!("{} {}", self.genome.species, self.genome.length_label())
    }
}
