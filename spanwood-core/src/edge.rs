//! Weighted undirected edges and the weight abstraction they carry.

use std::fmt;

/// A totally ordered edge weight that can be summed without silent overflow.
///
/// Implemented for every primitive integer type. Zero and negative weights are
/// valid; the MST algorithm only compares and adds them. Running totals are
/// kept in the wider [`Weight::Sum`] so that only the final total has to fit
/// in `Self`.
pub trait Weight: Copy + Ord + fmt::Debug + fmt::Display {
    /// Accumulator for running totals: `i128` for signed, `u128` for unsigned.
    type Sum: Copy + Ord + fmt::Debug;

    /// The empty total.
    const SUM_ZERO: Self::Sum;

    /// Adds `weight` to `sum`, returning `None` when the accumulator overflows.
    fn accumulate(sum: Self::Sum, weight: Self) -> Option<Self::Sum>;

    /// Converts a total back to `Self`, returning `None` when it does not fit.
    fn narrow(sum: Self::Sum) -> Option<Self>;
}

macro_rules! impl_weight {
    ($sum:ty => $($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                type Sum = $sum;

                const SUM_ZERO: Self::Sum = 0;

                #[inline]
                fn accumulate(sum: Self::Sum, weight: Self) -> Option<Self::Sum> {
                    <$sum>::try_from(weight).ok().and_then(|wide| sum.checked_add(wide))
                }

                #[inline]
                fn narrow(sum: Self::Sum) -> Option<Self> {
                    Self::try_from(sum).ok()
                }
            }
        )+
    };
}

impl_weight!(i128 => i8, i16, i32, i64, i128, isize);
impl_weight!(u128 => u8, u16, u32, u64, u128, usize);

/// A weighted undirected edge `{u, v}`.
///
/// The endpoints are stored as given: `(u, v)` and `(v, u)` describe the same
/// connection but are not canonicalised, so callers that feed both directions
/// will see both considered.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge<W = i64> {
    u: usize,
    v: usize,
    weight: W,
}

impl<W> Edge<W> {
    /// Creates an edge between `u` and `v` with the given weight.
    ///
    /// # Examples
    /// ```
    /// use spanwood_core::Edge;
    ///
    /// let edge = Edge::new(0, 3, 7);
    /// assert_eq!((edge.u(), edge.v(), edge.weight()), (0, 3, 7));
    /// ```
    #[must_use]
    pub const fn new(u: usize, v: usize, weight: W) -> Self {
        Self { u, v, weight }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn u(&self) -> usize { self.u }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v(&self) -> usize { self.v }

    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// Returns the larger endpoint, used for range validation.
    pub(crate) const fn max_endpoint(&self) -> usize {
        if self.u >= self.v { self.u } else { self.v }
    }
}

impl<W: Copy> Edge<W> {
    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> W { self.weight }
}

impl<W> From<(usize, usize, W)> for Edge<W> {
    fn from((u, v, weight): (usize, usize, W)) -> Self {
        Self::new(u, v, weight)
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.u, self.v, self.weight)
    }
}
