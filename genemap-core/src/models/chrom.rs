/// Axis value assigned to chromosome X.
pub const CHROM_X: u32 = 23;

/// Axis value assigned to chromosome Y.
pub const CHROM_Y: u32 = 24;

/// Resolve a chromosome name to its numeric axis value.
///
/// Autosomes `1`..`22` map to their integer value; the sex chromosomes map to
/// the sentinels [`CHROM_X`] and [`CHROM_Y`]. Matching is case-insensitive.
/// Anything else (`MT`, scaffolds, `chr`-prefixed names) returns `None` and
/// must be rejected by the caller rather than defaulted.
///
/// ```
/// use genemap_core::models::chrom::resolve_chromosome;
///
/// assert_eq!(resolve_chromosome("17"), Some(17));
/// assert_eq!(resolve_chromosome("x"), Some(23));
/// assert_eq!(resolve_chromosome("Y"), Some(24));
/// assert_eq!(resolve_chromosome("MT"), None);
/// ```
pub fn resolve_chromosome(name: &str) -> Option<u32> {
    let name = name.trim();
    if name.eq_ignore_ascii_case("x") {
        return Some(CHROM_X);
    }
    if name.eq_ignore_ascii_case("y") {
        return Some(CHROM_Y);
    }
    match name.parse::<u32>() {
        Ok(n) if (1..=22).contains(&n) => Some(n),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(1))]
    #[case("22", Some(22))]
    #[case("x", Some(23))]
    #[case("X", Some(23))]
    #[case("y", Some(24))]
    #[case("Y", Some(24))]
    #[case("0", None)]
    #[case("23", None)]
    #[case("MT", None)]
    #[case("chr1", None)]
    #[case("", None)]
    fn test_resolve_chromosome(#[case] name: &str, #[case] expected: Option<u32>) {
        assert_eq!(resolve_chromosome(name), expected);
    }

    #[test]
    fn test_resolution_is_injective() {
        let mut seen = std::collections::HashSet::new();
        for name in (1..=22)
            .map(|n| n.to_string())
            .chain(["X".to_string(), "Y".to_string()])
        {
            let axis = resolve_chromosome(&name).unwrap();
            assert!(seen.insert(axis), "axis value {axis} assigned twice");
        }
    }
}
