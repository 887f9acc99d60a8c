//! The coordinate encoder: pure mappings from annotation fields and caller
//! input to query-plane geometry.
//!
//! All three entry points resolve the chromosome name to its axis value and
//! apply the strand sign convention: plus-strand coordinates are taken as
//! given, minus-strand coordinates are negated (and reordered so the low end
//! of the span comes first). Invalid input is rejected outright; no function
//! here produces a partial result or has side effects.

use crate::errors::EncodeError;
use crate::models::chrom::resolve_chromosome;
use crate::models::genomic_box::GenomicBox;
use crate::models::rect::Rect;
use crate::models::strand::Strand;

fn resolve_chromosome_or_reject(chromosome: &str) -> Result<u32, EncodeError> {
    resolve_chromosome(chromosome)
        .ok_or_else(|| EncodeError::UnrecognizedChromosome(chromosome.to_string()))
}

fn parse_position(field: &str) -> Result<i64, EncodeError> {
    let value = field
        .trim()
        .parse::<u64>()
        .map_err(|_| EncodeError::InvalidPosition(field.to_string()))?;
    i64::try_from(value).map_err(|_| EncodeError::InvalidPosition(field.to_string()))
}

/// Encode one gene annotation span as a [`GenomicBox`].
///
/// `start` and `end` are the natural (unsigned) coordinates with
/// `start <= end`; on the minus strand the stored span becomes
/// `[-end, -start]`.
///
/// ```
/// use genemap_core::{encode_gene_box, Strand};
///
/// let plus = encode_gene_box("17", 43044295, 43170245, Strand::Plus).unwrap();
/// assert_eq!((plus.chrom, plus.y1, plus.y2), (17, 43044295, 43170245));
///
/// let minus = encode_gene_box("17", 43044295, 43170245, Strand::Minus).unwrap();
/// assert_eq!((minus.y1, minus.y2), (-43170245, -43044295));
/// ```
pub fn encode_gene_box(
    chromosome: &str,
    start: u64,
    end: u64,
    strand: Strand,
) -> Result<GenomicBox, EncodeError> {
    let chrom = resolve_chromosome_or_reject(chromosome)?;
    if start > end {
        return Err(EncodeError::InvertedSpan { start, end });
    }
    let start = i64::try_from(start)
        .map_err(|_| EncodeError::InvalidPosition(start.to_string()))?;
    let end = i64::try_from(end).map_err(|_| EncodeError::InvalidPosition(end.to_string()))?;
    let (y1, y2) = match strand {
        Strand::Plus => (start, end),
        Strand::Minus => (-end, -start),
    };
    Ok(GenomicBox { chrom, y1, y2 })
}

/// Encode a caller-supplied point query as `(chromosome axis, signed y)`.
///
/// An empty strand field means plus. The position is negated on the minus
/// strand so it lands on that strand's half-line.
pub fn encode_query_point(
    chromosome: &str,
    position: &str,
    strand: &str,
) -> Result<(u32, i64), EncodeError> {
    let chrom = resolve_chromosome_or_reject(chromosome)?;
    let strand = Strand::from_field(strand)?;
    let y = parse_position(position)? * strand.sign();
    Ok((chrom, y))
}

/// Encode a caller-supplied coordinate range as the two half-line query
/// rectangles: one covering `[start, end]` on the plus half-line, one
/// covering `[-end, -start]` on the minus half-line.
///
/// Both rectangles must be issued as independent index queries; that is how a
/// single range is checked against genes on both strands. An inverted input
/// range (`start > end`) is rejected as invalid input.
pub fn encode_query_range(
    chromosome: &str,
    start_position: &str,
    end_position: &str,
) -> Result<[Rect; 2], EncodeError> {
    let chrom = resolve_chromosome_or_reject(chromosome)? as i64;
    let start = parse_position(start_position)?;
    let end = parse_position(end_position)?;
    if start > end {
        return Err(EncodeError::InvertedSpan {
            start: start as u64,
            end: end as u64,
        });
    }
    Ok([
        Rect {
            min: [chrom, start],
            max: [chrom, end],
        },
        Rect {
            min: [chrom, -end],
            max: [chrom, -start],
        },
    ])
}
