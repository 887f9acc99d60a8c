use thiserror::Error;

/// Rejections produced by the coordinate encoder.
///
/// Encoding never produces a partial result: any invalid field rejects the
/// whole box or query.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Unrecognized chromosome: {0}")]
    UnrecognizedChromosome(String),

    #[error("Invalid genomic position: {0}")]
    InvalidPosition(String),

    #[error("Invalid strand: {0:?} (expected \"1\" or \"-1\")")]
    InvalidStrand(String),

    #[error("Inverted span: start {start} is greater than end {end}")]
    InvertedSpan { start: u64, end: u64 },
}
