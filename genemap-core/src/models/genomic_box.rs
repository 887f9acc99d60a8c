use std::fmt::{self, Display};

use super::rect::Rect;
use super::strand::Strand;

/// The geometry assigned to one gene annotation: a zero-width span on the
/// chromosome axis and a signed span on the position axis.
///
/// Plus-strand features keep their natural coordinates; minus-strand features
/// are stored negated, which partitions the position axis into two disjoint
/// half-lines so one spatial structure serves both strands without
/// cross-strand false matches. Invariant: `y1 <= y2`, and the strand is
/// recoverable from the sign of the span.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct GenomicBox {
    /// Numeric chromosome axis value (1..=22, X=23, Y=24).
    pub chrom: u32,
    pub y1: i64,
    pub y2: i64,
}

impl GenomicBox {
    /// The strand this box was encoded from.
    pub fn strand(&self) -> Strand {
        if self.y1 < 0 {
            Strand::Minus
        } else {
            Strand::Plus
        }
    }

    /// This box as a query-plane rectangle.
    #[inline]
    pub fn to_rect(&self) -> Rect {
        Rect {
            min: [self.chrom as i64, self.y1],
            max: [self.chrom as i64, self.y2],
        }
    }
}

impl Display for GenomicBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.chrom, self.y1, self.y2)
    }
}
