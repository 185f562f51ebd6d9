use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use mtsvg::annotation::Dialect;
use mtsvg::batch::{GenomeEntry, load_raw_genomes, read_batch_file};
use mtsvg::render_export::check_genome_count;
use mtsvg::{
    ColorScheme, MapKind, NormalizeOptions, RenderOptions, export_svg, normalize_genomes,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DialectArg {
    Auto,
    Mitos,
    Ncbi,
}

impl DialectArg {
    fn forced(self) -> Option<Dialect> {
        match self {
            DialectArg::Auto => None,
            DialectArg::Mitos => Some(Dialect::Mitos),
            DialectArg::Ncbi => Some(Dialect::Ncbi),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "mtsvg",
    about = "Draw mitochondrial genome maps from annotation files as SVG",
    version
)]
struct Args {
    /// Batch file with one `species;length;annotation[;reverse]` row per genome
    #[arg(short = 'b', long, value_name = "FILE", conflicts_with_all = ["gff", "length"])]
    batch: Option<PathBuf>,

    /// Annotation of a single genome (GFF, optionally gzipped)
    #[arg(long, value_name = "GFF", requires = "length")]
    gff: Option<PathBuf>,

    /// Genome length in bp, with --gff
    #[arg(long, value_name = "BP")]
    length: Option<i64>,

    /// Species name, with --gff
    #[arg(long, default_value = "unknown species")]
    species: String,

    /// Reverse the gene order, with --gff
    #[arg(long)]
    reverse: bool,

    #[arg(short = 'o', long, value_name = "SVG", default_value = "mtdna.svg")]
    output: PathBuf,

    /// Draw first the gene whose name contains this token
    #[arg(long, default_value = "cox1")]
    start: String,

    /// Minimum gap in bp shown as an intergenic region, 0 for none
    #[arg(long, default_value_t = 0)]
    intergenic: i64,

    /// Keep file order instead of rotating to --start
    #[arg(long)]
    linear: bool,

    /// Circular map of a single genome
    #[arg(long)]
    circular: bool,

    /// Leave out genes whose name starts with this prefix (repeatable)
    #[arg(long, value_name = "PREFIX")]
    skip: Vec<String>,

    #[arg(long, value_enum, default_value_t = DialectArg::Auto)]
    dialect: DialectArg,

    #[arg(long, conflicts_with = "colors")]
    monochromatic: bool,

    /// JSON array of [prefix, color] pairs; the first matching prefix wins
    #[arg(long, value_name = "JSON")]
    colors: Option<PathBuf>,

    #[arg(long, default_value = "Arial")]
    font: String,

    /// Print gene names unabridged
    #[arg(long)]
    full_name: bool,

    /// Draw strand arrows
    #[arg(long)]
    oriented: bool,

    /// Output size relative to the drawing
    #[arg(long)]
    pixel_scale: Option<f64>,

    /// Print the normalized genomes as JSON to stdout
    #[arg(long)]
    summary: bool,

    /// Only log warnings and errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl Args {
    fn entries(&self) -> Result<Vec<GenomeEntry>> {
        if let Some(batch) = &self.batch {
            return read_batch_file(batch)
                .with_context(|| format!("reading batch file {}", batch.display()));
        }
        let (Some(gff), Some(length)) = (&self.gff, self.length) else {
            bail!("either --batch or --gff with --length is required");
        };
        if length <= 0 {
            bail!("--length must be positive, got {length}");
        }
        Ok(vec![GenomeEntry {
            species: self.species.clone(),
            length,
            annotation: gff.clone(),
            reverse: self.reverse,
        }])
    }

    fn color_scheme(&self) -> Result<ColorScheme> {
        if let Some(path) = &self.colors {
            return ColorScheme::from_json_file(path)
                .with_context(|| format!("reading color scheme {}", path.display()));
        }
        Ok(if self.monochromatic {
            ColorScheme::monochromatic()
        } else {
            ColorScheme::default_scheme()
        })
    }

    fn render_options(&self) -> Result<RenderOptions> {
        let mut options = RenderOptions {
            kind: if self.circular {
                MapKind::Circular
            } else {
                MapKind::Linear
            },
            color_scheme: self.color_scheme()?,
            font: self.font.clone(),
            show_full_name: self.full_name,
            show_orientation: self.oriented,
            ..RenderOptions::default()
        };
        if let Some(scale) = self.pixel_scale {
            if scale <= 0.0 {
                bail!("--pixel-scale must be positive, got {scale}");
            }
            options.layout.pixel_scale = scale;
        }
        Ok(options)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if args.quiet {
            EnvFilter::new("warn")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = args.render_options()?;
    let entries = args.entries()?;
    check_genome_count(options.kind, entries.len())?;

    let raw = load_raw_genomes(&entries, &args.skip, args.dialect.forced())
        .context("reading annotations")?;
    let normalize = NormalizeOptions {
        start: args.start.clone(),
        intergenic: args.intergenic,
        linear: args.linear,
    };
    let genomes = normalize_genomes(raw, &normalize)?;

    if args.summary {
        println!("{}", serde_json::to_string_pretty(&genomes)?);
    }
    export_svg(&genomes, &options, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn single_genome_arguments() {
        let args = Args::parse_from([
            "mtsvg",
            "--gff",
            "a.gff",
            "--length",
            "16569",
            "--species",
            "Homo sapiens",
            "--skip",
            "trn",
            "--skip",
            "rrn",
            "--oriented",
        ]);
        let entries = args.entries().unwrap();
        assert_eq!(entries[0].species, "Homo sapiens");
        assert_eq!(args.skip, vec!["trn", "rrn"]);
        assert!(args.render_options().unwrap().show_orientation);
    }

    #[test]
    fn batch_conflicts_with_gff() {
        let parsed = Args::try_parse_from([
            "mtsvg", "--batch", "b.csv", "--gff", "a.gff", "--length", "1",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_input_is_reported() {
        let args = Args::parse_from(["mtsvg"]);
        assert!(args.entries().is_err());
    }
}
