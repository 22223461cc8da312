//! Field elements carrying their own modulus.

mod sqrt;

use crate::{Error, Result};
use alloc::{vec, vec::Vec};
use core::fmt;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// Element of the prime field `ℤ/pℤ`.
///
/// The modulus travels with the value, so elements of different fields can
/// coexist; combining them fails with [`Error::FieldMismatch`]. Primality of
/// the modulus is the caller's responsibility and is not checked.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldElement {
    /// Canonical representative in `[0, modulus)`.
    value: BigUint,

    /// Field modulus `p`.
    modulus: BigUint,
}

impl FieldElement {
    /// Create a field element, failing with [`Error::OutOfRange`] unless
    /// `value < modulus` and `modulus >= 2`.
    pub fn new(value: BigUint, modulus: BigUint) -> Result<Self> {
        check_modulus(&modulus)?;

        if value >= modulus {
            return Err(Error::OutOfRange);
        }

        Ok(Self { value, modulus })
    }

    /// Create a field element from a small integer.
    pub fn from_u64(value: u64, modulus: &BigUint) -> Result<Self> {
        Self::new(BigUint::from(value), modulus.clone())
    }

    /// Reduce an arbitrary integer into the field.
    pub fn from_reduced(value: &BigUint, modulus: &BigUint) -> Result<Self> {
        check_modulus(modulus)?;

        Ok(Self {
            value: value % modulus,
            modulus: modulus.clone(),
        })
    }

    /// Decode a big endian integer, failing if it is not below the modulus.
    pub fn from_be_bytes(bytes: &[u8], modulus: &BigUint) -> Result<Self> {
        Self::new(BigUint::from_bytes_be(bytes), modulus.clone())
    }

    /// Additive identity.
    pub fn zero(modulus: &BigUint) -> Result<Self> {
        Self::from_u64(0, modulus)
    }

    /// Multiplicative identity.
    pub fn one(modulus: &BigUint) -> Result<Self> {
        Self::from_u64(1, modulus)
    }

    /// Canonical integer representative.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Field modulus.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Is this the zero element?
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Is the canonical representative odd?
    pub fn is_odd(&self) -> bool {
        self.value.bit(0)
    }

    /// Encode the value as a big endian integer left-padded to `len` bytes.
    ///
    /// Fails with [`Error::OutOfRange`] if the value does not fit.
    pub fn to_be_bytes(&self, len: usize) -> Result<Vec<u8>> {
        let bytes = if self.is_zero() {
            Vec::new()
        } else {
            self.value.to_bytes_be()
        };

        if bytes.len() > len {
            return Err(Error::OutOfRange);
        }

        let mut out = vec![0u8; len - bytes.len()];
        out.extend_from_slice(&bytes);
        Ok(out)
    }

    /// Returns `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.reduced(&self.value + &rhs.value))
    }

    /// Returns `self - rhs`.
    pub fn subtract(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.sub_unchecked(rhs))
    }

    /// Returns `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.mul_unchecked(rhs))
    }

    /// Returns `self / rhs`, computed as `self * rhs^(p-2)`.
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.mul_unchecked(&rhs.invert()?))
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Self {
        if self.is_zero() {
            self.clone()
        } else {
            self.with_value(&self.modulus - &self.value)
        }
    }

    /// Returns `2 * self`.
    pub fn double(&self) -> Self {
        self.reduced(&self.value << 1)
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        self.mul_unchecked(self)
    }

    /// Multiplicative inverse via Fermat's little theorem: `self^(p-2)`.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }

        Ok(self.power_unsigned(&(&self.modulus - 2u32)))
    }

    /// Raise to a signed power.
    ///
    /// The exponent is first normalized into `[0, p-1)` (since `a^(p-1) = 1`),
    /// which is what makes negative exponents meaningful.
    pub fn power(&self, exponent: &BigInt) -> Self {
        if self.is_zero() {
            return self.zero_power(exponent.is_zero());
        }

        let order = BigInt::from_biguint(Sign::Plus, &self.modulus - 1u32);
        let normalized = ((exponent % &order) + &order) % &order;
        self.pow_mod(normalized.magnitude())
    }

    /// Raise to a non-negative power, normalizing the exponent modulo `p-1`.
    pub fn power_unsigned(&self, exponent: &BigUint) -> Self {
        if self.is_zero() {
            return self.zero_power(exponent.is_zero());
        }

        let order = &self.modulus - 1u32;
        self.pow_mod(&(exponent % &order))
    }

    /// Square-and-multiply, least significant bit first, reducing after every
    /// product so intermediates stay below `p²`.
    fn pow_mod(&self, exponent: &BigUint) -> Self {
        let mut result = BigUint::one();
        let mut base = self.value.clone();

        for i in 0..exponent.bits() {
            if exponent.bit(i) {
                result = &result * &base % &self.modulus;
            }
            base = &base * &base % &self.modulus;
        }

        self.with_value(result)
    }

    /// `0^0 = 1`; every other power of zero is zero.
    fn zero_power(&self, exponent_is_zero: bool) -> Self {
        if exponent_is_zero {
            self.with_value(BigUint::one())
        } else {
            self.clone()
        }
    }

    fn check_field(&self, rhs: &Self) -> Result<()> {
        if self.modulus == rhs.modulus {
            Ok(())
        } else {
            Err(Error::FieldMismatch)
        }
    }

    pub(crate) fn sub_unchecked(&self, rhs: &Self) -> Self {
        if self.value >= rhs.value {
            self.with_value(&self.value - &rhs.value)
        } else {
            self.with_value(&self.modulus - &rhs.value + &self.value)
        }
    }

    pub(crate) fn mul_unchecked(&self, rhs: &Self) -> Self {
        self.reduced(&self.value * &rhs.value)
    }

    fn reduced(&self, value: BigUint) -> Self {
        self.with_value(value % &self.modulus)
    }

    /// Build an element in the same field from an already-reduced value.
    fn with_value(&self, value: BigUint) -> Self {
        debug_assert!(value < self.modulus);
        Self {
            value,
            modulus: self.modulus.clone(),
        }
    }
}

fn check_modulus(modulus: &BigUint) -> Result<()> {
    if modulus.bits() < 2 {
        Err(Error::OutOfRange)
    } else {
        Ok(())
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.modulus, self.value)
    }
}

impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}
