//! Shared traits for forecast primitives.

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Sums the amounts of every item in `items`.
pub fn total_of<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(Amounted::amount).sum()
}
