pub mod annotation;
pub mod batch;
pub mod color_scheme;
pub mod error;
pub mod gene_products;
pub mod genome;
pub mod geometry;
pub mod label;
pub mod layout;
pub mod normalize;
pub mod render_circular;
pub mod render_export;
pub mod render_linear;

pub use color_scheme::ColorScheme;
pub use error::{MtSvgError, Result};
pub use genome::{Gene, Genome, Strand};
pub use layout::{DrawableGenome, LayoutConfig};
pub use normalize::{NormalizeOptions, RawGenome, normalize_genomes};
pub use render_export::{MapKind, RenderOptions, export_svg};
