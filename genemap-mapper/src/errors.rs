use thiserror::Error;

use genemap_core::errors::EncodeError;

/// Errors reading a gene annotation source.
///
/// These cover source-level failures only; individual malformed rows are
/// dropped during ingestion and never abort a build.
#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("Missing required column in annotation header: {0}")]
    MissingColumn(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Source(#[from] anyhow::Error),
}

/// Invalid input on a query call, reported distinctly from "no gene found".
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("A chromosome name is required")]
    MissingChromosome,

    #[error("A chromosome position is required")]
    MissingPosition,

    #[error(transparent)]
    Encode(#[from] EncodeError),
}
