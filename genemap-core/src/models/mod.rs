pub mod chrom;
pub mod genomic_box;
pub mod record;
pub mod rect;
pub mod strand;

pub use chrom::{CHROM_X, CHROM_Y, resolve_chromosome};
pub use genomic_box::GenomicBox;
pub use record::GeneRecord;
pub use rect::{Entry, Rect};
pub use strand::Strand;
