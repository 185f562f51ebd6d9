//! Genes and genomes as produced by parsing and normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const INTERGENIC: &str = "intergenic";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "+" => Some(Strand::Forward),
            "-" => Some(Strand::Reverse),
            _ => None,
        }
    }

    /// Also the color scheme key for the strand.
    pub fn symbol(&self) -> &'static str {
        match self {
            Strand::Forward => "+",
            Strand::Reverse => "-",
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    pub name: String,
    pub orientation: Option<Strand>,
    pub start: i64,
    pub end: i64,
    /// Display width in units, set by normalization.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scaled_length: Option<u32>,
}

impl Gene {
    pub fn new(name: &str, orientation: Option<Strand>, start: i64, end: i64) -> Self {
        Self {
            name: name.to_string(),
            orientation,
            start,
            end,
            scaled_length: None,
        }
    }

    pub fn intergenic(start: i64, end: i64) -> Self {
        Self::new(INTERGENIC, None, start, end)
    }

    pub fn is_intergenic(&self) -> bool {
        self.name == INTERGENIC
    }

    /// Length in bp; a feature with `end < start` crosses the origin.
    pub fn raw_length(&self, genome_length: i64) -> i64 {
        compute_length(self.start, self.end, genome_length)
    }

    /// Width in display units, 1 until normalization has run.
    pub fn units(&self) -> u32 {
        self.scaled_length.unwrap_or(1).max(1)
    }
}

pub fn compute_length(start: i64, end: i64, genome_length: i64) -> i64 {
    let length = end - start;
    if length < 0 {
        genome_length - start + end
    } else {
        length
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    pub species: String,
    pub length: i64,
    pub genes: Vec<Gene>,
}

impl Genome {
    pub fn new(species: &str, length: i64, genes: Vec<Gene>) -> Self {
        Self {
            species: species.to_string(),
            length,
            genes,
        }
    }

    /// Sum of the genes' display units.
    pub fn total_units(&self) -> u64 {
        self.genes.iter().map(|g| u64::from(g.units())).sum()
    }

    /// `"(14,414 bp)"`
    pub fn length_label(&self) -> String {
        format!("({} bp)", group_thousands(self.length))
    }
}

pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
