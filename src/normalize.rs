//! Turns parsed gene lists into ordered, gap-filled, scaled genomes.

use crate::error::{MtSvgError, Result};
use crate::genome::{Gene, Genome};
use itertools::Itertools;
use tracing::{debug, warn};

/// A genome as read from its annotation, before normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct RawGenome {
    pub species: String,
    pub length: i64,
    pub genes: Vec<Gene>,
    pub reverse: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Substring of the gene name to draw first.
    pub start: String,
    /// Smallest gap in bp that gets an intergenic entry; 0 disables them.
    pub intergenic: i64,
    /// Keep file order instead of rotating to `start`.
    pub linear: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            start: "cox1".to_string(),
            intergenic: 0,
            linear: false,
        }
    }
}

/// Gap between `prev.end` and `cur.start`, `None` when the genes overlap.
/// Only the origin-crossing pair may wrap around.
fn gap_between(prev: &Gene, cur: &Gene, genome_length: i64, wraps: bool) -> Option<i64> {
    if cur.start < prev.end && prev.end < cur.end {
        return None;
    }
    let gap = cur.start - prev.end;
    if gap >= 0 {
        Some(gap)
    } else if wraps {
        Some(gap + genome_length)
    } else {
        None
    }
}

/// Inserts intergenic entries for gaps of at least `threshold` bp. Genes
/// must be sorted by start. Returns the number of entries added.
pub fn add_intergenic_regions(
    genes: &mut Vec<Gene>,
    genome_length: i64,
    threshold: i64,
    linear: bool,
) -> usize {
    if threshold <= 0 || genes.is_empty() {
        return 0;
    }
    let before = genes.len();
    let n = genes.len();

    if !linear {
        let (prev, cur) = (&genes[n - 1], &genes[0]);
        if let Some(gap) = gap_between(prev, cur, genome_length, true) {
            if gap >= threshold {
                let filler = Gene::intergenic(prev.end, cur.start);
                genes.push(filler);
            }
        }
    }
    // Backwards, so insertions never shift a pair still to be visited.
    for idx in (1..n).rev() {
        let (prev, cur) = (&genes[idx - 1], &genes[idx]);
        if let Some(gap) = gap_between(prev, cur, genome_length, false) {
            if gap >= threshold {
                let filler = Gene::intergenic(prev.end, cur.start);
                genes.insert(idx, filler);
            }
        }
    }

    if linear {
        if let Some(last) = genes.last() {
            if last.end < genome_length && last.end >= last.start {
                let filler = Gene::intergenic(last.end, genome_length);
                genes.push(filler);
            }
        }
    }
    genes.len() - before
}

/// Index of the first gene whose name contains `token`, ignoring case.
pub fn find_start(genes: &[Gene], token: &str) -> Option<usize> {
    let token = token.to_lowercase();
    genes
        .iter()
        .position(|g| g.name.to_lowercase().contains(&token))
}

/// Cyclic rotation putting `genes[index]` first.
pub fn rotate_genes(genes: &mut [Gene], index: usize) {
    if !genes.is_empty() {
        genes.rotate_left(index % genes.len());
    }
}

/// `max(1, ceil(raw / (max_raw / 10)))`, in exact integer arithmetic.
pub fn scaled_length(raw_length: i64, max_raw_length: i64) -> u32 {
    if max_raw_length <= 0 || raw_length <= 0 {
        return 1;
    }
    let raw = raw_length as i128 * 10;
    let max = max_raw_length as i128;
    let units = (raw + max - 1) / max;
    units.clamp(1, u32::MAX as i128) as u32
}

/// Runs the whole normalization over a batch. All genomes share one length
/// unit so their drawings are comparable.
pub fn normalize_genomes(raw: Vec<RawGenome>, options: &NormalizeOptions) -> Result<Vec<Genome>> {
    let (kept, empty): (Vec<RawGenome>, Vec<RawGenome>) =
        raw.into_iter().partition(|g| !g.genes.is_empty());
    for genome in &empty {
        warn!(species = %genome.species, "no gene found, genome excluded");
    }
    if kept.is_empty() {
        return Err(MtSvgError::NoGenes);
    }
    if !empty.is_empty() {
        let excluded = empty.iter().map(|g| g.species.as_str()).join(", ");
        debug!(excluded = %excluded, "empty genomes left out of the batch");
    }

    let mut genomes = Vec::with_capacity(kept.len());
    let mut max_raw_length = 0;
    for mut raw in kept {
        let added = add_intergenic_regions(
            &mut raw.genes,
            raw.length,
            options.intergenic,
            options.linear,
        );
        if raw.reverse {
            raw.genes.reverse();
        }

        let start_idx = if options.linear {
            0
        } else {
            match find_start(&raw.genes, &options.start) {
                Some(idx) => idx,
                None => {
                    warn!(
                        species = %raw.species,
                        start = %options.start,
                        "start gene not found, keeping annotation order"
                    );
                    0
                }
            }
        };
        rotate_genes(&mut raw.genes, start_idx);

        if let Some(longest) = raw.genes.iter().map(|g| g.raw_length(raw.length)).max() {
            max_raw_length = max_raw_length.max(longest);
        }
        debug!(
            species = %raw.species,
            genes = raw.genes.len(),
            intergenic_added = added,
            rotation = start_idx,
            "genome normalized"
        );
        genomes.push(Genome::new(&raw.species, raw.length, raw.genes));
    }

    for genome in &mut genomes {
        let length = genome.length;
        for gene in &mut genome.genes {
            gene.scaled_length = Some(scaled_length(gene.raw_length(length), max_raw_length));
        }
    }
    Ok(genomes)
}
