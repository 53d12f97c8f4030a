//! Key domains with a least and a greatest element.

/// A totally ordered key type whose domain has sentinel bounds.
///
/// [`min_value`](Self::min_value) is the key of the first breakpoint of every
/// [`IntervalMap`](crate::IntervalMap), so every key in the domain is covered.
/// [`max_value`](Self::max_value) is the one key no run boundary can be placed
/// after: assigning up to it extends the run to the end of the domain.
pub trait Bounded: Ord {
    /// Returns the least key of the domain.
    fn min_value() -> Self;

    /// Returns the greatest key of the domain.
    fn max_value() -> Self;
}

macro_rules! bounded_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Bounded for $ty {
                #[inline]
                fn min_value() -> Self {
                    <$ty>::MIN
                }

                #[inline]
                fn max_value() -> Self {
                    <$ty>::MAX
                }
            }
        )*
    };
}

bounded_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char);

impl Bounded for bool {
    #[inline]
    fn min_value() -> Self {
        false
    }

    #[inline]
    fn max_value() -> Self {
        true
    }
}
