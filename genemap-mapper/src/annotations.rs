//! Ingestion of tab-separated gene annotation files.
//!
//! The source format is a header row plus one row per gene, with columns
//! addressed by name so their order does not matter. Rows that cannot
//! contribute a valid index entry (unrecognized chromosome, placeholder
//! symbol, unparsable coordinates or strand) are dropped and counted; a bad
//! row never aborts the build.

use std::io::BufRead;
use std::path::Path;

use log::{debug, info};

use genemap_core::models::chrom::resolve_chromosome;
use genemap_core::models::{GeneRecord, Strand};
use genemap_core::utils::{DelimitedRecords, get_dynamic_reader};

use crate::errors::AnnotationError;

pub const ENSEMBL_GENE_ID_COL: &str = "Ensembl Gene ID";
pub const CHROMOSOME_COL: &str = "Chromosome";
pub const GENE_START_COL: &str = "Gene start";
pub const GENE_END_COL: &str = "Gene end";
pub const HGNC_SYMBOL_COL: &str = "HGNC symbol";
pub const STRAND_COL: &str = "Strand";

/// Symbols shorter than this are placeholders, not real HGNC names.
const MIN_SYMBOL_LEN: usize = 2;

/// Read gene annotation records from a TSV source with a header row.
///
/// Returns only the rows that survived filtering; the skipped remainder is
/// logged. A missing required column is a source-level error.
pub fn read_gene_annotations<B: BufRead>(reader: B) -> Result<Vec<GeneRecord>, AnnotationError> {
    let records = DelimitedRecords::new(reader)?;

    let require = |name: &'static str| {
        records
            .column(name)
            .ok_or(AnnotationError::MissingColumn(name))
    };
    let ensembl_idx = require(ENSEMBL_GENE_ID_COL)?;
    let chrom_idx = require(CHROMOSOME_COL)?;
    let start_idx = require(GENE_START_COL)?;
    let end_idx = require(GENE_END_COL)?;
    let symbol_idx = require(HGNC_SYMBOL_COL)?;
    let strand_idx = require(STRAND_COL)?;

    let mut out = Vec::new();
    let mut skipped = 0usize;

    for row in records {
        let row = row?;
        let field = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("").trim();

        let chromosome = field(chrom_idx);
        if resolve_chromosome(chromosome).is_none() {
            debug!("skipping row on unrecognized chromosome {:?}", chromosome);
            skipped += 1;
            continue;
        }

        let symbol = field(symbol_idx);
        if symbol.len() < MIN_SYMBOL_LEN {
            debug!("skipping row with missing or placeholder symbol {:?}", symbol);
            skipped += 1;
            continue;
        }

        let (Ok(start), Ok(end)) = (
            field(start_idx).parse::<u64>(),
            field(end_idx).parse::<u64>(),
        ) else {
            debug!("skipping row for {}: unparsable coordinates", symbol);
            skipped += 1;
            continue;
        };

        let Ok(strand) = Strand::from_field(field(strand_idx)) else {
            debug!("skipping row for {}: unparsable strand", symbol);
            skipped += 1;
            continue;
        };

        out.push(GeneRecord {
            ensembl_id: field(ensembl_idx).to_string(),
            chromosome: chromosome.to_string(),
            start,
            end,
            symbol: symbol.to_string(),
            strand,
        });
    }

    info!(
        "Read {} gene annotation records ({} rows skipped)",
        out.len(),
        skipped
    );
    Ok(out)
}

/// Read gene annotations from a plain or gzipped file on disk.
pub fn read_gene_annotations_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<GeneRecord>, AnnotationError> {
    let reader = get_dynamic_reader(path.as_ref())?;
    read_gene_annotations(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    const HEADER: &str = "Ensembl Gene ID\tChromosome\tGene start\tGene end\tHGNC symbol\tStrand";

    #[test]
    fn test_reads_valid_rows() {
        let tsv = format!(
            "{HEADER}\nENSG00000012048\t17\t43044295\t43170245\tBRCA1\t-1\n\
             ENSG00000164010\t1\t42816970\t42857605\tERMAP\t1\n"
        );
        let records = read_gene_annotations(Cursor::new(tsv)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].symbol, "BRCA1");
        assert_eq!(records[0].strand, Strand::Minus);
        assert_eq!(records[1].start, 42816970);
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let tsv = "Strand\tHGNC symbol\tGene end\tGene start\tChromosome\tEnsembl Gene ID\n\
                   -1\tBRCA1\t43170245\t43044295\t17\tENSG00000012048\n";
        let records = read_gene_annotations(Cursor::new(tsv)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].symbol, "BRCA1");
        assert_eq!(records[0].chromosome, "17");
        assert_eq!(records[0].end, 43170245);
    }

    #[test]
    fn test_bad_rows_are_skipped_not_fatal() {
        let tsv = format!(
            "{HEADER}\n\
             ENSG1\tMT\t576\t647\tMT-TF\t1\n\
             ENSG2\t1\t17369\t17436\tM\t-1\n\
             ENSG3\t2\tnotanumber\t123\tBADPOS\t1\n\
             ENSG4\t2\t123\t456\tBADSTRAND\t+\n\
             ENSG5\t3\t100\t200\tGOOD1\t1\n"
        );
        let records = read_gene_annotations(Cursor::new(tsv)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].symbol, "GOOD1");
    }

    #[test]
    fn test_missing_column_is_source_error() {
        let tsv = "Chromosome\tGene start\tGene end\n1\t1\t2\n";
        let err = read_gene_annotations(Cursor::new(tsv)).unwrap_err();
        assert!(matches!(err, AnnotationError::MissingColumn(_)));
    }
}
