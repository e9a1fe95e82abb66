//! Edge weight abstraction.
//!
//! Shortest-path engines are generic over the numeric type used for edge
//! weights. All primitive integers and floats implement [`Weight`]: integer
//! sums are overflow checked, float sums saturate to infinity on their own.

use std::{cmp::Ordering, fmt, ops::Add};

use num_traits::{CheckedAdd, One, Zero};

/// Numeric edge weight usable by the shortest-path engines.
///
/// - [`Zero`] provides the distance of the start vertex
/// - [`One`] provides the implicit weight of an unweighted edge
/// - [`PartialOrd`] orders tentative distances in the frontier
///
/// Floating point weights are accepted. `NaN` weights compare equal to
/// everything (see [`compare`]) and produce unspecified but non-panicking
/// results.
pub trait Weight: Copy + PartialOrd + Zero + One + Add<Output = Self> + fmt::Debug {
    /// Adds two weights, returning `None` when the sum is not representable.
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                #[inline]
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                #[inline]
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);

/// Total comparison used by the frontier, treating incomparable values as equal.
#[inline]
pub(crate) fn compare<W: Weight>(a: W, b: W) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Returns `true` if the weight is strictly below zero.
#[inline]
pub(crate) fn is_negative<W: Weight>(weight: W) -> bool {
    weight < W::zero()
}

/// Returns the smallest of the given weights, or `None` for an empty input.
pub(crate) fn min_weight<W: Weight>(weights: impl IntoIterator<Item = W>) -> Option<W> {
    weights.into_iter().fold(None, |best, w| match best {
        Some(b) if compare(b, w) != Ordering::Greater => Some(b),
        _ => Some(w),
    })
}
