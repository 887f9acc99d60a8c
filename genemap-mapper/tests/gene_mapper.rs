use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

use genemap_mapper::{GeneIndex, GeneMapper, GeneMapperConfig, INTERGENIC};

fn get_test_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(file_name)
}

#[fixture]
fn mapper() -> GeneMapper {
    let config = GeneMapperConfig::new(get_test_path("genes.tsv"))
        .with_symbol_entrez(get_test_path("symbol_entrez.tsv"))
        .with_ensembl_ids(get_test_path("hgnc_ensembl.tsv"));
    GeneMapper::from_config(&config)
}

#[rstest]
fn test_index_skips_bad_annotation_rows(mapper: GeneMapper) {
    // MT chromosome, one-letter symbol, and unparsable coordinates are all
    // filtered out of the nine fixture rows
    assert_eq!(mapper.index().len(), 6);
}

#[rstest]
#[case("1", "42817156", "1", Some("ERMAP"))]
#[case("1", "42817156", "-1", Some("CCDC23"))]
#[case("8", "1000", "1", None)]
#[case("17", "43044296", "-1", Some("BRCA1"))]
#[case("x", "91982660", "-1", Some("VDAC1P3"))]
#[case("Y", "6246223", "1", Some("TSPY2"))]
fn test_point_queries(
    mapper: GeneMapper,
    #[case] chromosome: &str,
    #[case] position: &str,
    #[case] strand: &str,
    #[case] expected: Option<&str>,
) {
    let hit = mapper
        .find_gene_at_position(chromosome, position, strand)
        .unwrap();
    assert_eq!(hit.as_deref(), expected);
}

#[rstest]
fn test_intergenic_sentinel_display(mapper: GeneMapper) {
    let hit = mapper.find_gene_at_position("8", "1000", "1").unwrap();
    assert_eq!(hit.as_deref().unwrap_or(INTERGENIC), "intergenic");
}

#[rstest]
fn test_range_query_includes_brca1(mapper: GeneMapper) {
    let symbols = mapper
        .find_genes_in_range("17", "43044295", "43170245")
        .unwrap();
    assert!(symbols.contains(&"BRCA1".to_string()));
}

#[rstest]
fn test_range_query_unions_both_strands(mapper: GeneMapper) {
    let symbols = mapper
        .find_genes_in_range("1", "42816000", "42819000")
        .unwrap();
    assert_eq!(symbols, vec!["CCDC23", "ERMAP"]);
}

#[rstest]
fn test_range_query_no_overlap_is_empty(mapper: GeneMapper) {
    let symbols = mapper.find_genes_in_range("8", "1", "1000").unwrap();
    assert!(symbols.is_empty());
}

#[rstest]
fn test_identifier_tables(mapper: GeneMapper) {
    assert_eq!(mapper.symbol_to_entrez_id("BRCA1"), Some("672"));
    assert_eq!(mapper.entrez_id_to_symbol("114625"), Some("ERMAP"));
    assert_eq!(
        mapper.ensembl_to_symbol_and_entrez_id("ENSG00000012048"),
        Some(("BRCA1", "672"))
    );
    assert_eq!(mapper.symbol_to_entrez_id("NOSUCHGENE"), None);
}

#[rstest]
fn test_missing_table_files_degrade_not_crash(mapper: GeneMapper) {
    let config = GeneMapperConfig::new(get_test_path("genes.tsv"))
        .with_symbol_entrez(get_test_path("does_not_exist.tsv"));
    let degraded = GeneMapper::from_config(&config);

    // id lookups are empty, position lookups still work
    assert_eq!(degraded.symbol_to_entrez_id("BRCA1"), None);
    assert_eq!(
        degraded
            .find_gene_at_position("17", "43044296", "-1")
            .unwrap(),
        mapper
            .find_gene_at_position("17", "43044296", "-1")
            .unwrap()
    );
}

#[test]
fn test_index_from_path_reports_missing_source() {
    assert!(GeneIndex::from_path(get_test_path("does_not_exist.tsv")).is_err());
}

#[test]
fn test_gzipped_annotations_are_read() {
    use flate2::{Compression, write::GzEncoder};
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let gz_path = dir.path().join("genes.tsv.gz");
    let raw = std::fs::read(get_test_path("genes.tsv")).unwrap();
    let mut encoder = GzEncoder::new(
        std::fs::File::create(&gz_path).unwrap(),
        Compression::default(),
    );
    encoder.write_all(&raw).unwrap();
    encoder.finish().unwrap();

    let index = GeneIndex::from_path(&gz_path).unwrap();
    assert_eq!(index.len(), 6);
    let hit = index.find_gene_at_position("1", "42817156", "1").unwrap();
    assert_eq!(hit.as_deref(), Some("ERMAP"));
}

#[test]
fn test_shared_builds_once_across_threads() {
    let config = GeneMapperConfig::new(get_test_path("genes.tsv"));
    let config = Arc::new(config);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let config = Arc::clone(&config);
            thread::spawn(move || GeneMapper::shared(&config) as *const GeneMapper as usize)
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));

    // and the shared instance answers queries
    let shared = GeneMapper::shared(&config);
    let hit = shared.find_gene_at_position("17", "43044296", "-1").unwrap();
    assert_eq!(hit.as_deref(), Some("BRCA1"));
}
