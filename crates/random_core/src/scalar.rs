//! Numeric types accepted by the ranged and normal-distributed draws.
//!
//! Integer types select an integer-uniform adapter, floating-point types a
//! real-uniform adapter. Both share the `rand` [`SampleUniform`] machinery;
//! this trait adds the range validation and the conversion of a normal draw
//! (always an `f64`) back into the caller's type.

use num_traits::AsPrimitive;
use rand::distributions::uniform::SampleUniform;
use std::fmt::Debug;

/// Primitive numeric type usable with [`Randomizer`](crate::Randomizer).
///
/// Implemented for every primitive integer and floating-point type.
pub trait Scalar: SampleUniform + PartialOrd + Copy + Debug + AsPrimitive<f64> {
    /// Whether normal draws are truncated toward zero before use.
    const IS_INTEGER: bool;

    /// Converts a normal draw into `Self`.
    ///
    /// Integers truncate toward zero and saturate at their bounds; floats
    /// round to the nearest representable value.
    fn from_draw(draw: f64) -> Self;

    /// Returns `true` when `[min, max]` can be sampled uniformly.
    fn is_valid_range(min: Self, max: Self) -> bool;

    /// Normalises a draw the way [`Scalar::from_draw`] will, still as `f64`.
    #[inline]
    fn normalise_draw(draw: f64) -> f64 {
        if Self::IS_INTEGER {
            draw.trunc()
        } else {
            draw
        }
    }
}

macro_rules! impl_scalar_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const IS_INTEGER: bool = true;

                #[inline]
                fn from_draw(draw: f64) -> Self {
                    draw as $ty
                }

                #[inline]
                fn is_valid_range(min: Self, max: Self) -> bool {
                    min <= max
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const IS_INTEGER: bool = false;

                #[inline]
                fn from_draw(draw: f64) -> Self {
                    draw as $ty
                }

                // `Uniform` panics on non-finite bounds, and on a span that
                // overflows once divided by its largest unit draw `1 - EPSILON`.
                #[inline]
                fn is_valid_range(min: Self, max: Self) -> bool {
                    let span = max - min;
                    min <= max
                        && min.is_finite()
                        && max.is_finite()
                        && (span / (1.0 - <$ty>::EPSILON)).is_finite()
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);
