use std::fmt::{self, Display};

use super::genomic_box::GenomicBox;
use super::strand::Strand;
use crate::encode::encode_gene_box;
use crate::errors::EncodeError;

/// One gene annotation row, consumed transiently while the index is built.
///
/// Coordinates are the natural (unsigned, inclusive) span from the annotation
/// source; the signed encoding only appears once the record is turned into a
/// [`GenomicBox`].
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct GeneRecord {
    pub ensembl_id: String,
    pub chromosome: String,
    pub start: u64,
    pub end: u64,
    pub symbol: String,
    pub strand: Strand,
}

impl GeneRecord {
    /// Encode this record's geometry, rejecting unrecognized chromosomes and
    /// inverted spans.
    pub fn genomic_box(&self) -> Result<GenomicBox, EncodeError> {
        encode_gene_box(&self.chromosome, self.start, self.end, self.strand)
    }
}

impl Display for GeneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.ensembl_id, self.chromosome, self.start, self.end, self.symbol, self.strand
        )
    }
}
