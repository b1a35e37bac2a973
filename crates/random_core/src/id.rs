//! Fixed-width 128-bit random identifier.

use std::fmt;

/// 128-bit identifier built from two independent 64-bit draws.
///
/// Intended purely as an identifier: equality, hashing and display are
/// provided, arithmetic is not. Not cryptographically secure.
///
/// # Examples
///
/// ```rust
/// use random_core::Id128;
///
/// let id = Id128::from_halves(1, 2);
/// assert_eq!(id.as_u128(), (1u128 << 64) | 2);
/// assert_eq!(id.to_string(), "00000000000000010000000000000002");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id128 {
    high: u64,
    low: u64,
}

impl Id128 {
    /// Creates an identifier from its high and low halves.
    #[inline]
    pub const fn from_halves(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    /// Returns the high 64 bits.
    #[inline]
    pub const fn high(&self) -> u64 {
        self.high
    }

    /// Returns the low 64 bits.
    #[inline]
    pub const fn low(&self) -> u64 {
        self.low
    }

    /// Returns the identifier as a native `u128`.
    #[inline]
    pub const fn as_u128(&self) -> u128 {
        ((self.high as u128) << 64) | self.low as u128
    }
}

impl From<u128> for Id128 {
    fn from(value: u128) -> Self {
        Self::from_halves((value >> 64) as u64, value as u64)
    }
}

impl From<Id128> for u128 {
    fn from(id: Id128) -> Self {
        id.as_u128()
    }
}

impl fmt::Display for Id128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.high, self.low)
    }
}
