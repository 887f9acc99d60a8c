//! The process-wide mapping facade: spatial index plus identifier tables
//! behind one handle, with a guarded build-once initialization path.

use std::path::PathBuf;
use std::sync::OnceLock;

use log::error;

use crate::errors::QueryError;
use crate::idmap::IdTables;
use crate::index::GeneIndex;

/// Source file locations for one mapper build.
#[derive(Debug, Clone)]
pub struct GeneMapperConfig {
    /// Tab-separated gene annotations (plain or gzipped).
    pub annotations: PathBuf,
    /// Two-column symbol → Entrez TSV; `None` leaves those lookups empty.
    pub symbol_entrez: Option<PathBuf>,
    /// `Ensembl`/`Symbol`/`Entrez` TSV; `None` leaves those lookups empty.
    pub ensembl_ids: Option<PathBuf>,
}

impl GeneMapperConfig {
    pub fn new<P: Into<PathBuf>>(annotations: P) -> Self {
        GeneMapperConfig {
            annotations: annotations.into(),
            symbol_entrez: None,
            ensembl_ids: None,
        }
    }

    pub fn with_symbol_entrez<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.symbol_entrez = Some(path.into());
        self
    }

    pub fn with_ensembl_ids<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.ensembl_ids = Some(path.into());
        self
    }
}

/// Gene lookup facade: the spatial index and the identifier tables.
///
/// Construction degrades per source: a table whose file cannot be read is
/// error-logged and stays permanently empty for the process lifetime, while
/// the remaining lookups keep working. Callers that need the annotation
/// read error surfaced should build a [`GeneIndex`] directly via
/// [`GeneIndex::from_path`].
///
/// All query methods take `&self`; after construction there is no interior
/// mutability, so a `GeneMapper` is freely shared across threads.
pub struct GeneMapper {
    index: GeneIndex,
    tables: IdTables,
}

impl GeneMapper {
    /// Build a mapper from the configured source files.
    pub fn from_config(config: &GeneMapperConfig) -> Self {
        let index = match GeneIndex::from_path(&config.annotations) {
            Ok(index) => index,
            Err(e) => {
                error!(
                    "gene annotation source unavailable, position lookups will be empty: {}",
                    e
                );
                GeneIndex::build(Vec::new())
            }
        };
        let tables = IdTables::load(
            config.symbol_entrez.as_deref(),
            config.ensembl_ids.as_deref(),
        );
        GeneMapper { index, tables }
    }

    /// The process-wide mapper, built exactly once.
    ///
    /// Concurrent first-touch from any number of threads performs a single
    /// build; every caller observes the same completed instance. The config
    /// of the first caller wins; later configs are ignored.
    pub fn shared(config: &GeneMapperConfig) -> &'static GeneMapper {
        static SHARED: OnceLock<GeneMapper> = OnceLock::new();
        SHARED.get_or_init(|| GeneMapper::from_config(config))
    }

    /// See [`GeneIndex::find_gene_at_position`].
    pub fn find_gene_at_position(
        &self,
        chromosome: &str,
        position: &str,
        strand: &str,
    ) -> Result<Option<String>, QueryError> {
        self.index
            .find_gene_at_position(chromosome, position, strand)
    }

    /// See [`GeneIndex::find_genes_in_range`].
    pub fn find_genes_in_range(
        &self,
        chromosome: &str,
        start_position: &str,
        end_position: &str,
    ) -> Result<Vec<String>, QueryError> {
        self.index
            .find_genes_in_range(chromosome, start_position, end_position)
    }

    /// See [`IdTables::symbol_to_entrez_id`].
    pub fn symbol_to_entrez_id(&self, symbol: &str) -> Option<&str> {
        self.tables.symbol_to_entrez_id(symbol)
    }

    /// See [`IdTables::entrez_id_to_symbol`].
    pub fn entrez_id_to_symbol(&self, entrez_id: &str) -> Option<&str> {
        self.tables.entrez_id_to_symbol(entrez_id)
    }

    /// See [`IdTables::ensembl_to_symbol_and_entrez_id`].
    pub fn ensembl_to_symbol_and_entrez_id(&self, ensembl_id: &str) -> Option<(&str, &str)> {
        self.tables.ensembl_to_symbol_and_entrez_id(ensembl_id)
    }

    /// The underlying spatial index.
    pub fn index(&self) -> &GeneIndex {
        &self.index
    }
}
