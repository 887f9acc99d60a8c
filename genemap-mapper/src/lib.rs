//! # Gene lookup by genomic position.
//!
//! This crate ties the coordinate encoder and the spatial index together
//! into the two public query operations:
//!
//! - [`GeneIndex::find_gene_at_position`] — which gene (if any) overlaps a
//!   (chromosome, position, strand) point; no overlap is the normal
//!   "intergenic" outcome, not an error.
//! - [`GeneIndex::find_genes_in_range`] — every gene overlapping a
//!   (chromosome, start, end) range on either strand, found by issuing one
//!   query rectangle per strand half-line.
//!
//! Identifier translation (symbol ↔ Entrez, Ensembl → symbol + Entrez) lives
//! in [`IdTables`], and [`GeneMapper`] bundles both behind a single facade
//! with a guarded, build-once process-wide handle.
//!
//! ```no_run
//! use genemap_mapper::{GeneIndex, INTERGENIC};
//!
//! let index = GeneIndex::from_path("ensembl_grch38_gene.tsv")?;
//! let symbol = index.find_gene_at_position("17", "43044296", "-1")?;
//! println!("{}", symbol.as_deref().unwrap_or(INTERGENIC));
//! # Ok::<(), anyhow::Error>(())
//! ```
pub mod annotations;
pub mod errors;
pub mod idmap;
pub mod index;
pub mod mapper;

// re-exports
pub use annotations::read_gene_annotations;
pub use errors::{AnnotationError, QueryError};
pub use idmap::IdTables;
pub use index::GeneIndex;
pub use mapper::{GeneMapper, GeneMapperConfig};

/// Sentinel printed for a point query that overlaps no annotated gene.
pub const INTERGENIC: &str = "intergenic";
