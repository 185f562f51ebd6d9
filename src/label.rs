//! Gene label text and fitting.

/// Rough advance width of one glyph relative to the font size.
const CHAR_WIDTH_RATIO: f64 = 0.6;
/// Baseline shift that vertically centers a line of text on a point.
pub const BASELINE_RATIO: f64 = 0.35;

/// `trnL1(tag)` → `trnl`, `nad4_x` → `nad4`, `cox1-2` → `cox1`.
pub fn short_name(name: &str) -> String {
    let lower = name.to_lowercase();
    if lower.starts_with("trn") && lower.chars().count() >= 4 {
        return lower.chars().take(4).collect();
    }
    name.split(['_', '-'])
        .next()
        .unwrap_or(name)
        .to_string()
}

pub fn display_name(name: &str, full_name: bool) -> String {
    if full_name {
        name.to_string()
    } else {
        short_name(name)
    }
}

pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count().max(1) as f64 * font_size * CHAR_WIDTH_RATIO
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LabelFit {
    /// Runs along the box at the given font size.
    Along(f64),
    /// Runs across the box, shrunk if needed.
    Across(f64),
}

impl LabelFit {
    pub fn font_size(&self) -> f64 {
        match self {
            LabelFit::Along(size) | LabelFit::Across(size) => *size,
        }
    }
}

/// Picks how a label goes into a box `along` long and `across` thick.
///
/// Text that fits lengthwise keeps `font_size`. Otherwise it is turned
/// across the box and, if still too long, shrunk to an integer size no
/// smaller than `min_font_size`.
pub fn fit_label(
    text: &str,
    font_size: f64,
    along: f64,
    across: f64,
    padding: f64,
    min_font_size: f64,
) -> LabelFit {
    let width = estimate_text_width(text, font_size);
    if width <= along - 2.0 * padding {
        return LabelFit::Along(font_size);
    }
    let room = across - 2.0 * padding;
    if width <= room {
        return LabelFit::Across(font_size);
    }
    let shrunk = (font_size * room.max(0.0) / width).floor();
    LabelFit::Across(shrunk.max(min_font_size).min(font_size))
}
