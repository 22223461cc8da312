//! Scalars modulo the group order `n`.

use super::{to_be_bytes_32, Secp256k1};
use crate::Result;
use core::fmt;
use num_bigint::BigUint;
use primefield::FieldElement;

/// Element of the scalar field `ℤ/nℤ`.
///
/// `n` is prime, so scalars are ordinary prime field elements: inversion is
/// Fermat's `s^(n-2)` like in the base field.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Scalar(FieldElement);

impl Scalar {
    /// Create a scalar, failing with [`Error::OutOfRange`] unless
    /// `value < n`.
    ///
    /// [`Error::OutOfRange`]: crate::Error::OutOfRange
    pub fn new(value: &BigUint) -> Result<Self> {
        Self::new_in(Secp256k1::get(), value)
    }

    pub(crate) fn new_in(curve: &Secp256k1, value: &BigUint) -> Result<Self> {
        Ok(Self(FieldElement::new(value.clone(), curve.order().clone())?))
    }

    /// Reduce an arbitrary integer modulo `n`.
    pub fn reduce(value: &BigUint) -> Result<Self> {
        Self::reduce_in(Secp256k1::get(), value)
    }

    pub(crate) fn reduce_in(curve: &Secp256k1, value: &BigUint) -> Result<Self> {
        Ok(Self(FieldElement::from_reduced(value, curve.order())?))
    }

    /// Interpret big endian bytes as an integer and reduce it modulo `n`.
    pub fn from_be_bytes_reduced(bytes: &[u8]) -> Result<Self> {
        Self::reduce(&BigUint::from_bytes_be(bytes))
    }

    /// Canonical integer representative in `[0, n)`.
    pub fn value(&self) -> &BigUint {
        self.0.value()
    }

    /// Is this scalar zero?
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Is this scalar above `n / 2`?
    pub fn is_high(&self) -> bool {
        *self.value() > (self.0.modulus() >> 1)
    }

    /// Returns `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        Ok(Self(self.0.add(&rhs.0)?))
    }

    /// Returns `self - rhs`.
    pub fn subtract(&self, rhs: &Self) -> Result<Self> {
        Ok(Self(self.0.subtract(&rhs.0)?))
    }

    /// Returns `self · rhs`.
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        Ok(Self(self.0.multiply(&rhs.0)?))
    }

    /// Returns `self / rhs`, failing if `rhs` is zero.
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        Ok(Self(self.0.divide(&rhs.0)?))
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Self {
        Self(self.0.negate())
    }

    /// Returns `self⁻¹`, failing if `self` is zero.
    pub fn invert(&self) -> Result<Self> {
        Ok(Self(self.0.invert()?))
    }

    /// 32-byte big endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        to_be_bytes_32(self.value())
    }
}

impl From<Scalar> for BigUint {
    fn from(scalar: Scalar) -> BigUint {
        scalar.value().clone()
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x{:x})", self.0)
    }
}
