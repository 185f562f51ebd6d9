//! Canonical gene codes from NCBI-style gene symbols and product texts.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TRNA_PRODUCT: Regex =
        Regex::new(r"^(?:trna|transfer rna)[- ]?([a-z]{3})").expect("valid tRNA product regex");
    static ref SUBUNIT_NUMBER: Regex =
        Regex::new(r"subunit\s+([0-9]+l?|i{1,3}|iv|v|vi)$").expect("valid subunit regex");
    static ref MT_TRNA_SYMBOL: Regex =
        Regex::new(r"^t([a-z][12]?)$").expect("valid tRNA symbol regex");
}

/// Why a product description could not be mapped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnrecognizedProduct(pub String);

/// One-letter code of a three-letter amino acid abbreviation.
pub fn amino_acid_letter(three_letter: &str) -> Option<char> {
    let letter = match three_letter.to_ascii_lowercase().as_str() {
        "ala" => 'a',
        "arg" => 'r',
        "asn" => 'n',
        "asp" => 'd',
        "cys" => 'c',
        "gln" => 'q',
        "glu" => 'e',
        "gly" => 'g',
        "his" => 'h',
        "ile" => 'i',
        "leu" => 'l',
        "lys" => 'k',
        "met" => 'm',
        "phe" => 'f',
        "pro" => 'p',
        "ser" => 's',
        "thr" => 't',
        "trp" => 'w',
        "tyr" => 'y',
        "val" => 'v',
        _ => return None,
    };
    Some(letter)
}

fn subunit_index(raw: &str) -> Option<&'static str> {
    let index = match raw {
        "1" | "i" => "1",
        "2" | "ii" => "2",
        "3" | "iii" => "3",
        "4" | "iv" => "4",
        "4l" => "4l",
        "5" | "v" => "5",
        "6" | "vi" => "6",
        "8" => "8",
        _ => return None,
    };
    Some(index)
}

/// Maps a free-text `product=` value to its canonical code, e.g.
/// `"16S ribosomal RNA"` → `rrnl`, `"tRNA-Ala"` → `trna`.
pub fn product_to_code(product: &str) -> Result<String, UnrecognizedProduct> {
    let text = product.trim().to_lowercase();
    let unrecognized = || UnrecognizedProduct(product.trim().to_string());

    match text.as_str() {
        "16s ribosomal rna" | "large subunit ribosomal rna" | "l-rrna" | "rrnl"
        | "16s rrna" | "l-ribosomal rna" => return Ok("rrnl".to_string()),
        "12s ribosomal rna" | "small subunit ribosomal rna" | "s-rrna" | "rrns"
        | "12s rrna" | "s-ribosomal rna" => return Ok("rrns".to_string()),
        "cytochrome b" | "apocytochrome b" | "cytb" | "cob" => return Ok("cob".to_string()),
        _ => {}
    }

    if let Some(caps) = TRNA_PRODUCT.captures(&text) {
        let letter = amino_acid_letter(&caps[1]).ok_or_else(unrecognized)?;
        return Ok(format!("trn{letter}"));
    }

    let family = if text.starts_with("cytochrome c oxidase") {
        "cox"
    } else if text.starts_with("nadh dehydrogenase") {
        "nad"
    } else if text.starts_with("atp synthase") {
        "atp"
    } else {
        return Err(unrecognized());
    };
    let caps = SUBUNIT_NUMBER.captures(&text).ok_or_else(unrecognized)?;
    let index = subunit_index(&caps[1]).ok_or_else(unrecognized)?;
    match (family, index) {
        ("cox", "1" | "2" | "3")
        | ("nad", "1" | "2" | "3" | "4" | "4l" | "5" | "6")
        | ("atp", "6" | "8") => Ok(format!("{family}{index}")),
        _ => Err(unrecognized()),
    }
}

/// Lowercase code of a `gene=` symbol, folding the usual NCBI aliases onto
/// the names used by annotation pipelines (`ND4L` → `nad4l`, `MT-CO1` →
/// `cox1`, `RNR2` → `rrnl`).
pub fn canonical_gene_symbol(symbol: &str) -> String {
    let symbol = symbol.trim().to_lowercase();
    if let Some(rest) = symbol.strip_prefix("mt-") {
        // `MT-TL1` style tRNA symbols
        if let Some(trna) = MT_TRNA_SYMBOL.captures(rest) {
            return format!("trn{}", &trna[1]);
        }
        return canonical_gene_symbol(rest);
    }
    match symbol.as_str() {
        "coi" | "co1" | "cox1" => return "cox1".to_string(),
        "coii" | "co2" | "cox2" => return "cox2".to_string(),
        "coiii" | "co3" | "cox3" => return "cox3".to_string(),
        "cytb" | "cob" | "cyb" => return "cob".to_string(),
        "atp6" | "atpase6" => return "atp6".to_string(),
        "atp8" | "atpase8" => return "atp8".to_string(),
        "l-rrna" | "rnl" | "rnr2" | "16s" => return "rrnl".to_string(),
        "s-rrna" | "rns" | "rnr1" | "12s" => return "rrns".to_string(),
        _ => {}
    }
    if let Some(index) = symbol.strip_prefix("nd") {
        if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit() || c == 'l') {
            return format!("nad{index}");
        }
    }
    if let Some(rest) = symbol.strip_prefix("trn-") {
        if let Some(letter) = amino_acid_letter(rest) {
            return format!("trn{letter}");
        }
    }
    symbol
}
