use thiserror::Error;

#[derive(Debug, Error)]
pub enum MtSvgError {
    #[error("unrecognized gene product '{product}' at line {line}")]
    UnrecognizedProduct { product: String, line: usize },

    #[error("gene at line {line} has no gene= attribute and no product= on the following record")]
    MissingGeneName { line: usize },

    #[error("invalid annotation at line {line}: {message}")]
    Annotation { line: usize, message: String },

    #[error("no gene found in any genome")]
    NoGenes,

    #[error("a circular map holds exactly one genome, got {0}")]
    CircularGenomeCount(usize),

    #[error("invalid batch row {line}: {message}")]
    BatchFormat { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MtSvgError>;
