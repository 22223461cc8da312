//! secp256k1 domain parameters and group arithmetic.

mod point;
mod scalar;

pub use self::{point::Secp256k1Point, scalar::Scalar};

use crate::Result;
use hex_literal::hex;
use num_bigint::BigUint;
use primefield::FieldElement;
use weierstrass::{AffinePoint, CurveEquation};

#[cfg(not(any(feature = "critical-section", feature = "std")))]
compile_error!("secp256k1 parameters require either the `critical-section` or `std` feature");

#[cfg(feature = "critical-section")]
use once_cell::sync::Lazy as LazyLock;
#[cfg(all(feature = "std", not(feature = "critical-section")))]
use std::sync::LazyLock;

/// Field modulus `p = 2²⁵⁶ - 2³² - 977`.
const MODULUS: [u8; 32] = hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");

/// Order `n` of the group generated by `G`.
const ORDER: [u8; 32] = hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

const GENERATOR_X: [u8; 32] =
    hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");

const GENERATOR_Y: [u8; 32] =
    hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");

static SECP256K1: LazyLock<Secp256k1> =
    LazyLock::new(|| Secp256k1::from_constants().expect("secp256k1 domain parameters are valid"));

/// secp256k1 elliptic curve.
///
/// Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain Parameters:
///
/// <https://www.secg.org/sec2-v2.pdf>
///
/// The curve's equation is `y² = x³ + 7` over a ~256-bit prime field.
///
/// The parameters are built once per process and never change. Operations
/// that need them resolve [`Secp256k1::get`] once at their entry point and
/// pass the reference down.
#[derive(Clone, Debug)]
pub struct Secp256k1 {
    equation: CurveEquation,
    generator: AffinePoint,
    order: BigUint,
    half_order: BigUint,
    sqrt_exponent: BigUint,
}

impl Secp256k1 {
    /// Process-wide secp256k1 parameters.
    pub fn get() -> &'static Self {
        &SECP256K1
    }

    fn from_constants() -> Result<Self> {
        let p = BigUint::from_bytes_be(&MODULUS);
        let equation = CurveEquation::new(FieldElement::zero(&p)?, FieldElement::from_u64(7, &p)?)?;
        let generator = AffinePoint::new(
            FieldElement::from_be_bytes(&GENERATOR_X, &p)?,
            FieldElement::from_be_bytes(&GENERATOR_Y, &p)?,
            equation.clone(),
        )?;

        let order = BigUint::from_bytes_be(&ORDER);
        let half_order = &order >> 1;
        let sqrt_exponent = (&p + 1u32) >> 2;

        Ok(Self {
            equation,
            generator,
            order,
            half_order,
            sqrt_exponent,
        })
    }

    /// Field modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        self.equation.modulus()
    }

    /// Group order `n`.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// `⌊n / 2⌋`, the largest low-S value.
    pub fn half_order(&self) -> &BigUint {
        &self.half_order
    }

    /// Curve equation `y² = x³ + 7`.
    pub fn equation(&self) -> &CurveEquation {
        &self.equation
    }

    /// Base point `G`.
    pub fn generator(&self) -> Secp256k1Point {
        Secp256k1Point::from_affine_unchecked(self.generator.clone())
    }

    /// Point at infinity.
    pub fn identity(&self) -> Secp256k1Point {
        Secp256k1Point::from_affine_unchecked(AffinePoint::identity(self.equation.clone()))
    }

    /// `(p + 1) / 4`: since `p ≡ 3 (mod 4)`, raising a residue to this power
    /// yields one of its square roots.
    pub(crate) fn sqrt_exponent(&self) -> &BigUint {
        &self.sqrt_exponent
    }

    /// Base field element, failing with [`Error::OutOfRange`] if `value >= p`.
    ///
    /// [`Error::OutOfRange`]: crate::Error::OutOfRange
    pub(crate) fn field_element(&self, value: &BigUint) -> Result<FieldElement> {
        Ok(FieldElement::new(value.clone(), self.modulus().clone())?)
    }
}

/// Serialize an integer below `2²⁵⁶` as 32 big endian bytes.
pub(crate) fn to_be_bytes_32(value: &BigUint) -> [u8; 32] {
    let bytes = value.to_bytes_be();
    debug_assert!(bytes.len() <= 32);

    let bytes = &bytes[bytes.len().saturating_sub(32)..];
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(bytes);
    out
}
