use std::fmt::Debug;
use num_traits::{CheckedAdd, Signed, Zero};
use ordered_float::OrderedFloat;

/// Edge weight and path distance type
///
/// Distances are totally ordered so the frontier can compare `(distance, vertex)` pairs
/// directly, which is what makes the lowest-index tie-break fall out of the ordering.
pub trait Weight: Copy + Ord + Debug + Send + Sync {
    /// The distance of the source to itself
    fn zero() -> Self;

    /// Adds two distances, returning `None` when the sum is not representable
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Returns true if the weight cannot be used by the search
    fn is_negative(self) -> bool;
}

macro_rules! signed_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    <$t as Zero>::zero()
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }

                fn is_negative(self) -> bool {
                    Signed::is_negative(&self)
                }
            }
        )*
    };
}

macro_rules! unsigned_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    <$t as Zero>::zero()
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }

                fn is_negative(self) -> bool {
                    false
                }
            }
        )*
    };
}

signed_weight!(i8, i16, i32, i64, i128, isize);
unsigned_weight!(u8, u16, u32, u64, u128, usize);

// NaN sorts above every number in OrderedFloat, so it would silently act as an
// unreachable edge; it is rejected together with negative values instead.
impl Weight for OrderedFloat<f64> {
    fn zero() -> Self {
        OrderedFloat(0.0)
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        let sum = self.0 + rhs.0;
        if sum.is_finite() {
            Some(OrderedFloat(sum))
        } else {
            None
        }
    }

    fn is_negative(self) -> bool {
        self.0.is_nan() || self.0 < 0.0
    }
}
