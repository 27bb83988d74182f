//! Closed value domains shared by the entity enums

/// A closed enumeration whose full set of values is known up front.
///
/// Charts iterate `ALL` so that categories with no records still show up
/// with a zero count.
pub trait EnumDomain: Copy + Eq + 'static {
    /// Every value of the domain, in display order
    const ALL: &'static [Self];

    /// Human-readable label used for chart categories
    fn label(self) -> &'static str;
}
