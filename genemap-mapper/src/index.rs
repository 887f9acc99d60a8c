//! The genomic query service: a build-once spatial index over gene
//! annotations and the point/range lookups on top of it.

use std::path::Path;

use log::{debug, info};

use genemap_core::encode::{encode_query_point, encode_query_range};
use genemap_core::models::{Entry, GeneRecord, Rect};
use genemap_rtree::StrTree;

use crate::annotations::read_gene_annotations_from_path;
use crate::errors::{AnnotationError, QueryError};

/// A 2-D spatial index of gene symbols keyed by (chromosome axis, signed
/// position span).
///
/// Built once from an annotation record stream and immutable afterwards, so
/// any number of threads may query it concurrently without locking.
///
/// # Examples
///
/// ```
/// use genemap_core::models::{GeneRecord, Strand};
/// use genemap_mapper::GeneIndex;
///
/// let index = GeneIndex::build(vec![GeneRecord {
///     ensembl_id: "ENSG00000012048".to_string(),
///     chromosome: "17".to_string(),
///     start: 43044295,
///     end: 43170245,
///     symbol: "BRCA1".to_string(),
///     strand: Strand::Minus,
/// }]);
///
/// let hit = index.find_gene_at_position("17", "43044296", "-1").unwrap();
/// assert_eq!(hit.as_deref(), Some("BRCA1"));
///
/// // no overlap is a normal outcome, not an error
/// let miss = index.find_gene_at_position("8", "1000", "1").unwrap();
/// assert_eq!(miss, None);
/// ```
pub struct GeneIndex {
    tree: StrTree<String>,
    skipped: usize,
}

impl GeneIndex {
    /// Build the index from annotation records in a single pass.
    ///
    /// Records whose geometry fails to encode are dropped and logged; they
    /// never abort the build.
    pub fn build(records: Vec<GeneRecord>) -> Self {
        let mut entries: Vec<Entry<String>> = Vec::with_capacity(records.len());
        let mut skipped = 0usize;

        for record in records {
            match record.genomic_box() {
                Ok(gene_box) => entries.push(Entry {
                    rect: gene_box.to_rect(),
                    value: record.symbol,
                }),
                Err(e) => {
                    debug!("dropping record for {}: {}", record.symbol, e);
                    skipped += 1;
                }
            }
        }

        let tree = StrTree::build(entries);
        info!(
            "Built gene index with {} entries ({} records dropped)",
            tree.len(),
            skipped
        );
        GeneIndex { tree, skipped }
    }

    /// Read an annotation file and build the index from it.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AnnotationError> {
        Ok(Self::build(read_gene_annotations_from_path(path)?))
    }

    /// Number of indexed gene entries.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Number of records dropped during the build.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Find the gene overlapping a single (chromosome, position, strand)
    /// point.
    ///
    /// An empty strand means plus. `Ok(None)` is the intergenic outcome;
    /// invalid input (empty arguments, unrecognized chromosome, unparsable
    /// position) is a [`QueryError`], never a fabricated miss. When several
    /// genes overlap the point, the lexicographically smallest symbol is
    /// returned so the tie-break is deterministic.
    pub fn find_gene_at_position(
        &self,
        chromosome: &str,
        position: &str,
        strand: &str,
    ) -> Result<Option<String>, QueryError> {
        if chromosome.trim().is_empty() {
            return Err(QueryError::MissingChromosome);
        }
        if position.trim().is_empty() {
            return Err(QueryError::MissingPosition);
        }

        let (chrom, y) = encode_query_point(chromosome, position, strand)?;
        let point = Rect::point(chrom as i64, y);
        Ok(self
            .tree
            .find_iter(&point)
            .map(|entry| entry.value.as_str())
            .min()
            .map(str::to_owned))
    }

    /// Find every gene overlapping a (chromosome, start, end) range on
    /// either strand.
    ///
    /// The encoder emits one query rectangle per strand half-line; both are
    /// issued as independent index queries and their union is returned as a
    /// sorted, deduplicated list of symbols. An empty result means no
    /// overlap; an inverted range is rejected as invalid input.
    pub fn find_genes_in_range(
        &self,
        chromosome: &str,
        start_position: &str,
        end_position: &str,
    ) -> Result<Vec<String>, QueryError> {
        if chromosome.trim().is_empty() {
            return Err(QueryError::MissingChromosome);
        }
        if start_position.trim().is_empty() || end_position.trim().is_empty() {
            return Err(QueryError::MissingPosition);
        }

        let [plus, minus] = encode_query_range(chromosome, start_position, end_position)?;
        let mut symbols: Vec<String> = self
            .tree
            .find_iter(&plus)
            .chain(self.tree.find_iter(&minus))
            .map(|entry| entry.value.clone())
            .collect();
        symbols.sort();
        symbols.dedup();
        Ok(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use genemap_core::models::Strand;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn record(
        chromosome: &str,
        start: u64,
        end: u64,
        symbol: &str,
        strand: Strand,
    ) -> GeneRecord {
        GeneRecord {
            ensembl_id: format!("ENSG_{symbol}"),
            chromosome: chromosome.to_string(),
            start,
            end,
            symbol: symbol.to_string(),
            strand,
        }
    }

    #[fixture]
    fn index() -> GeneIndex {
        GeneIndex::build(vec![
            record("1", 42816970, 42857605, "ERMAP", Strand::Plus),
            record("1", 42795813, 42818655, "CCDC23", Strand::Minus),
            record("17", 43044295, 43170245, "BRCA1", Strand::Minus),
            record("8", 13563344, 13572135, "C8orf48", Strand::Plus),
            record("Y", 6246223, 6249019, "TSPY2", Strand::Plus),
        ])
    }

    #[rstest]
    fn test_point_lookup_both_strands(index: GeneIndex) {
        // same coordinate, opposite strands, different genes
        let plus = index.find_gene_at_position("1", "42817156", "1").unwrap();
        assert_eq!(plus.as_deref(), Some("ERMAP"));

        let minus = index.find_gene_at_position("1", "42817156", "-1").unwrap();
        assert_eq!(minus.as_deref(), Some("CCDC23"));
    }

    #[rstest]
    fn test_point_lookup_intergenic(index: GeneIndex) {
        let miss = index.find_gene_at_position("8", "1000", "1").unwrap();
        assert_eq!(miss, None);
    }

    #[rstest]
    fn test_point_lookup_empty_strand_defaults_to_plus(index: GeneIndex) {
        let hit = index.find_gene_at_position("Y", "6246223", "").unwrap();
        assert_eq!(hit.as_deref(), Some("TSPY2"));
    }

    #[rstest]
    fn test_point_lookup_invalid_input_is_not_a_miss(index: GeneIndex) {
        assert!(matches!(
            index.find_gene_at_position("", "100", "1"),
            Err(QueryError::MissingChromosome)
        ));
        assert!(matches!(
            index.find_gene_at_position("1", "", "1"),
            Err(QueryError::MissingPosition)
        ));
        assert!(matches!(
            index.find_gene_at_position("MT", "100", "1"),
            Err(QueryError::Encode(_))
        ));
        assert!(matches!(
            index.find_gene_at_position("1", "1e5", "1"),
            Err(QueryError::Encode(_))
        ));
    }

    #[rstest]
    fn test_range_lookup_spans_both_strands(index: GeneIndex) {
        let symbols = index
            .find_genes_in_range("1", "42816000", "42819000")
            .unwrap();
        assert_eq!(symbols, vec!["CCDC23", "ERMAP"]);
    }

    #[rstest]
    fn test_range_lookup_known_gene(index: GeneIndex) {
        let symbols = index
            .find_genes_in_range("17", "43044295", "43170245")
            .unwrap();
        assert!(symbols.contains(&"BRCA1".to_string()));
    }

    #[rstest]
    fn test_range_lookup_empty_result(index: GeneIndex) {
        let symbols = index.find_genes_in_range("8", "1", "1000").unwrap();
        assert!(symbols.is_empty());
    }

    #[rstest]
    fn test_range_lookup_rejects_inverted_range(index: GeneIndex) {
        assert!(matches!(
            index.find_genes_in_range("17", "43170245", "43044295"),
            Err(QueryError::Encode(_))
        ));
    }

    #[test]
    fn test_overlap_tie_break_is_lexicographic() {
        let index = GeneIndex::build(vec![
            record("5", 1000, 2000, "ZNF99", Strand::Plus),
            record("5", 1500, 2500, "ABHD1", Strand::Plus),
        ]);
        let hit = index.find_gene_at_position("5", "1700", "1").unwrap();
        assert_eq!(hit.as_deref(), Some("ABHD1"));
    }

    #[test]
    fn test_duplicate_symbols_collapse_in_range_result() {
        let index = GeneIndex::build(vec![
            record("2", 100, 200, "DUPL1", Strand::Plus),
            record("2", 150, 300, "DUPL1", Strand::Plus),
        ]);
        let symbols = index.find_genes_in_range("2", "100", "400").unwrap();
        assert_eq!(symbols, vec!["DUPL1"]);
    }

    #[test]
    fn test_unencodable_record_dropped_at_build() {
        let index = GeneIndex::build(vec![
            record("1", 100, 200, "KEEP1", Strand::Plus),
            // inverted span is rejected by the encoder
            record("1", 500, 400, "DROP1", Strand::Plus),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.skipped(), 1);
    }

    #[rstest]
    fn test_repeated_queries_are_idempotent(index: GeneIndex) {
        let first = index.find_gene_at_position("17", "43044296", "-1").unwrap();
        let second = index.find_gene_at_position("17", "43044296", "-1").unwrap();
        assert_eq!(first, second);
    }
}
