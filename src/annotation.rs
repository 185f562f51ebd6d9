//! GFF-style annotation records and their reduction to an ordered gene list.

use crate::error::{MtSvgError, Result};
use crate::gene_products::{canonical_gene_symbol, product_to_code};
use crate::genome::{Gene, Strand};
use flate2::read::GzDecoder;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// One feature row of an annotation file.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationRecord {
    /// 1-based line number in the source file.
    pub line: usize,
    pub seqid: String,
    pub source: String,
    pub feature_type: String,
    pub start: i64,
    pub end: i64,
    pub strand: Option<Strand>,
    /// Keys are lowercased.
    pub attributes: HashMap<String, String>,
}

impl AnnotationRecord {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Annotation flavours, told apart by the source column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    /// MITOS output: gene, tRNA and rRNA rows carrying `Name=`.
    Mitos,
    /// NCBI/RefSeq: `gene` rows carrying `gene=`, or a child row with
    /// `product=` right after them.
    Ncbi,
}

impl Dialect {
    pub fn from_source(source: &str) -> Self {
        if source.to_ascii_lowercase().starts_with("mitos") {
            Dialect::Mitos
        } else {
            Dialect::Ncbi
        }
    }

    /// Guess from the first record; MITOS when the file is empty.
    pub fn detect(records: &[AnnotationRecord]) -> Self {
        records
            .first()
            .map(|r| Self::from_source(&r.source))
            .unwrap_or(Dialect::Mitos)
    }

    fn keeps(&self, feature_type: &str) -> bool {
        let feature_type = feature_type.to_ascii_lowercase();
        match self {
            Dialect::Mitos => matches!(feature_type.as_str(), "gene" | "trna" | "rrna"),
            Dialect::Ncbi => feature_type == "gene",
        }
    }
}

/// `Name=cox1;gene_id="cox1"` → `{name: cox1, gene_id: cox1}`. Pairs
/// without `=` or with an empty side are dropped.
fn parse_attributes(column: &str) -> HashMap<String, String> {
    column
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, value)| {
            (
                key.trim().to_ascii_lowercase(),
                value.trim().trim_matches('"').to_string(),
            )
        })
        .filter(|(key, value)| !key.is_empty() && !value.is_empty())
        .collect()
}

fn parse_coordinate(raw: &str, what: &str, line: usize) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|e| MtSvgError::Annotation {
        line,
        message: format!("invalid {what} '{raw}': {e}"),
    })
}

/// Reads tab-separated feature rows. Blank lines, `#` comments and rows with
/// fewer than nine columns are skipped.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<AnnotationRecord>> {
    let mut records = vec![];
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = line_no + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let cols: Vec<&str> = trimmed.split('\t').collect();
        if cols.len() < 9 {
            continue;
        }
        let start = parse_coordinate(cols[3], "start", line_no)?;
        let end = parse_coordinate(cols[4], "end", line_no)?;
        if start < 0 || end < 0 {
            return Err(MtSvgError::Annotation {
                line: line_no,
                message: format!("negative interval {start}-{end}"),
            });
        }
        records.push(AnnotationRecord {
            line: line_no,
            seqid: cols[0].to_string(),
            source: cols[1].to_string(),
            feature_type: cols[2].to_string(),
            start,
            end,
            strand: Strand::from_symbol(cols[6]),
            attributes: parse_attributes(cols[8]),
        });
    }
    Ok(records)
}

/// Reads an annotation file, gunzipping it when the name ends in `.gz`.
pub fn read_annotation_file(path: &Path) -> Result<Vec<AnnotationRecord>> {
    let file = File::open(path)?;
    let is_gzip = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    let reader: Box<dyn Read> = if is_gzip {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    read_records(BufReader::new(reader))
}

fn gene_name(records: &[AnnotationRecord], idx: usize, dialect: Dialect) -> Result<String> {
    let record = &records[idx];
    match dialect {
        Dialect::Mitos => record
            .attribute("name")
            .map(|name| name.trim().to_lowercase())
            .ok_or_else(|| MtSvgError::Annotation {
                line: record.line,
                message: "missing Name= attribute".to_string(),
            }),
        Dialect::Ncbi => {
            if let Some(symbol) = record.attribute("gene") {
                return Ok(canonical_gene_symbol(symbol));
            }
            let next = records
                .get(idx + 1)
                .ok_or(MtSvgError::MissingGeneName { line: record.line })?;
            let product = next
                .attribute("product")
                .ok_or(MtSvgError::MissingGeneName { line: record.line })?;
            product_to_code(product).map_err(|e| MtSvgError::UnrecognizedProduct {
                product: e.0,
                line: next.line,
            })
        }
    }
}

/// Keeps the gene rows of `dialect`, names them canonically, drops names
/// starting with any `skip` prefix and sorts by start coordinate.
pub fn genes_from_records(
    records: &[AnnotationRecord],
    skip: &[String],
    dialect: Dialect,
) -> Result<Vec<Gene>> {
    let skip: Vec<String> = skip
        .iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect();
    let mut genes = vec![];
    for (idx, record) in records.iter().enumerate() {
        if !dialect.keeps(&record.feature_type) {
            continue;
        }
        let name = gene_name(records, idx, dialect)?;
        if skip.iter().any(|prefix| name.starts_with(prefix.as_str())) {
            continue;
        }
        genes.push(Gene::new(&name, record.strand, record.start, record.end));
    }
    genes.sort_by_key(|g| g.start);
    Ok(genes)
}
