//! `species;length;annotation[;reverse]` batch files and loading the genomes
//! they list.

use crate::annotation::{Dialect, genes_from_records, read_annotation_file};
use crate::error::{MtSvgError, Result};
use crate::normalize::RawGenome;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenomeEntry {
    pub species: String,
    pub length: i64,
    pub annotation: PathBuf,
    pub reverse: bool,
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" | "" => Some(false),
        _ => None,
    }
}

fn parse_entry(record: &StringRecord, row: usize, base_dir: &Path) -> Result<GenomeEntry> {
    let bad_row = |message: String| MtSvgError::BatchFormat { line: row, message };
    if record.len() < 3 {
        return Err(bad_row(format!(
            "expected species;length;annotation, got {} field(s)",
            record.len()
        )));
    }
    let length = match record[1].parse::<i64>() {
        Ok(length) if length > 0 => length,
        _ => return Err(bad_row(format!("invalid genome length '{}'", &record[1]))),
    };
    let reverse = match record.get(3) {
        Some(raw) => {
            parse_flag(raw).ok_or_else(|| bad_row(format!("invalid reverse flag '{raw}'")))?
        }
        None => false,
    };
    let annotation = PathBuf::from(&record[2]);
    let annotation = if annotation.is_relative() {
        base_dir.join(annotation)
    } else {
        annotation
    };
    Ok(GenomeEntry {
        species: record[0].to_string(),
        length,
        annotation,
        reverse,
    })
}

/// Parses batch rows; relative annotation paths are joined onto `base_dir`.
pub fn read_batch<R: Read>(reader: R, base_dir: &Path) -> Result<Vec<GenomeEntry>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b';')
        .comment(Some(b'#'))
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let mut entries = vec![];
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let row = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(idx + 1);
        entries.push(parse_entry(&record, row, base_dir)?);
    }
    Ok(entries)
}

pub fn read_batch_file(path: &Path) -> Result<Vec<GenomeEntry>> {
    let file = std::fs::File::open(path)?;
    let base_dir = path.parent().unwrap_or(Path::new("."));
    read_batch(file, base_dir)
}

/// Reads each entry's annotation into a [`RawGenome`]. Without a forced
/// `dialect` every file is auto-detected on its own.
pub fn load_raw_genomes(
    entries: &[GenomeEntry],
    skip: &[String],
    dialect: Option<Dialect>,
) -> Result<Vec<RawGenome>> {
    entries
        .iter()
        .map(|entry| {
            let records = read_annotation_file(&entry.annotation)?;
            let dialect = dialect.unwrap_or_else(|| Dialect::detect(&records));
            let genes = genes_from_records(&records, skip, dialect)?;
            debug!(
                species = %entry.species,
                records = records.len(),
                genes = genes.len(),
                dialect = ?dialect,
                "read annotation"
            );
            Ok(RawGenome {
                species: entry.species.clone(),
                length: entry.length,
                genes,
                reverse: entry.reverse,
            })
        })
        .collect()
}
