//! # Core library for genemap
//!
//! Shared building blocks for answering "which gene lives at this genomic
//! position?" style queries: the data models (strands, chromosome axis
//! values, genomic boxes), the pure coordinate encoder that turns annotation
//! fields and caller input into index geometry, and small IO utilities for
//! reading plain or gzipped tab-separated annotation files.
//!
//! The actual spatial structure lives in `genemap-rtree`; the query service
//! that ties everything together lives in `genemap-mapper`.
pub mod encode;
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use encode::{encode_gene_box, encode_query_point, encode_query_range};
pub use errors::EncodeError;
pub use models::{Entry, GeneRecord, GenomicBox, Rect, Strand};
