use std::fmt;

/// Maximum number of dimensions a [`Signature`] can encode.
pub const MAX_DIMENSIONS: usize = u64::BITS as usize;

/// Bit pattern identifying the orthant a function output lies in.
///
/// Bit `i` is set when component `i` is strictly positive. The
/// [complement](Signature::complement_of) sets bit `i` when component `i` is
/// zero or negative, so for any finite output the two patterns are disjoint
/// and together cover every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Signature(u64);

impl Signature {
    /// Creates a signature from raw bits.
    #[must_use]
    pub fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the signature of `v`: bit `i` is set iff `v[i] > 0`.
    ///
    /// Components past [`MAX_DIMENSIONS`] are ignored; the solver rejects
    /// such problems before encoding anything.
    #[must_use]
    pub fn of(v: &[f64]) -> Self {
        Self::encode(v, |component| component > 0.0)
    }

    /// Returns the complementary signature of `v`: bit `i` is set iff `v[i] <= 0`.
    #[must_use]
    pub fn complement_of(v: &[f64]) -> Self {
        Self::encode(v, |component| component <= 0.0)
    }

    /// Returns the raw bits.
    #[must_use]
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Returns the number of bits that differ between two signatures.
    #[must_use]
    pub fn distance(self, other: Self) -> u32 {
        (self.0 ^ other.0).count_ones()
    }

    fn encode(v: &[f64], set: impl Fn(f64) -> bool) -> Self {
        let bits = v
            .iter()
            .take(MAX_DIMENSIONS)
            .enumerate()
            .filter(|&(_, &component)| set(component))
            .fold(0_u64, |bits, (i, _)| bits | (1_u64 << i));
        Self(bits)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}
