//! Ordered first-match threshold tables
//!
//! Every classifier in this crate maps a number onto a fixed result by
//! scanning a table of `(Bound, result)` pairs in order and taking the
//! first bound the value satisfies.

/// Predicate half of a bucket
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// `value > limit`
    Above(f64),
    /// `value >= limit`
    AtLeast(f64),
    /// `value < limit`
    Below(f64),
    /// `value <= limit`
    AtMost(f64),
    /// Always matches; closes a total table
    Otherwise,
}

impl Bound {
    /// Whether `value` satisfies this bound. NaN only matches `Otherwise`.
    #[must_use]
    pub fn matches(self, value: f64) -> bool {
        match self {
            Self::Above(limit) => value > limit,
            Self::AtLeast(limit) => value >= limit,
            Self::Below(limit) => value < limit,
            Self::AtMost(limit) => value <= limit,
            Self::Otherwise => true,
        }
    }
}

/// A first-match table
pub type BucketTable<T> = [(Bound, T)];

/// Return the result of the first bucket whose bound matches `value`.
///
/// `None` means no bucket covers the value, which is a valid outcome for
/// tables that do not end in [`Bound::Otherwise`].
#[must_use]
pub fn first_match<T>(table: &BucketTable<T>, value: f64) -> Option<&T> {
    table
        .iter()
        .find(|(bound, _)| bound.matches(value))
        .map(|(_, result)| result)
}
