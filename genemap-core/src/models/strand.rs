use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::EncodeError;

/// DNA strand orientation.
///
/// Annotation files and query callers encode the strand as `"1"` (plus) or
/// `"-1"` (minus). An empty field means plus at every boundary that accepts
/// raw input; use [`Strand::from_field`] for that behavior.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, Default)]
pub enum Strand {
    #[default]
    Plus,
    Minus,
}

impl Strand {
    /// The sign applied to positions on this strand when they are placed on
    /// the signed query axis.
    #[inline]
    pub fn sign(&self) -> i64 {
        match self {
            Strand::Plus => 1,
            Strand::Minus => -1,
        }
    }

    /// Parse a raw strand field, treating an empty or whitespace-only value
    /// as plus.
    pub fn from_field(field: &str) -> Result<Self, EncodeError> {
        let field = field.trim();
        if field.is_empty() {
            return Ok(Strand::Plus);
        }
        field.parse()
    }
}

impl FromStr for Strand {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Strand::Plus),
            "-1" => Ok(Strand::Minus),
            other => Err(EncodeError::InvalidStrand(other.to_string())),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Plus => write!(f, "1"),
            Strand::Minus => write!(f, "-1"),
        }
    }
}
