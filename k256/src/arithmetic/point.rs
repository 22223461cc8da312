//! secp256k1 points.

use super::Secp256k1;
use crate::{Error, Result};
use core::fmt;
use num_bigint::BigUint;
use primefield::FieldElement;
use weierstrass::AffinePoint;

/// Point on the secp256k1 curve, in affine coordinates.
///
/// Thin wrapper over the generic [`AffinePoint`] that pins the curve to
/// `y² = x³ + 7` over `p` and reduces scalars modulo the group order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Secp256k1Point(AffinePoint);

impl Secp256k1Point {
    /// Create a point from its affine coordinates.
    ///
    /// Fails with [`Error::OutOfRange`] if a coordinate is not below `p` and
    /// with [`Error::NotOnCurve`] if the equation does not hold.
    pub fn new(x: &BigUint, y: &BigUint) -> Result<Self> {
        let curve = Secp256k1::get();
        let x = curve.field_element(x)?;
        let y = curve.field_element(y)?;
        Ok(Self(AffinePoint::new(x, y, curve.equation().clone())?))
    }

    /// Point at infinity.
    pub fn identity() -> Self {
        Secp256k1::get().identity()
    }

    /// Base point `G`.
    pub fn generator() -> Self {
        Secp256k1::get().generator()
    }

    /// Wrap a generic point, failing with [`Error::CurveMismatch`] unless it
    /// lies on secp256k1.
    pub fn from_affine(point: AffinePoint) -> Result<Self> {
        if point.curve() != Secp256k1::get().equation() {
            return Err(Error::CurveMismatch);
        }

        Ok(Self(point))
    }

    pub(crate) fn from_affine_unchecked(point: AffinePoint) -> Self {
        Self(point)
    }

    /// Borrow the generic point.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.0
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.0.is_identity()
    }

    /// x-coordinate, `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        self.0.x().map(FieldElement::value)
    }

    /// y-coordinate, `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        self.0.y().map(FieldElement::value)
    }

    /// Returns `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        Ok(Self(self.0.add(&rhs.0)?))
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Self {
        Self(self.0.negate())
    }

    /// Returns `k·self`.
    ///
    /// `k` is reduced modulo `n` first, which is sound because `n·P` is the
    /// identity for every point on the curve.
    pub fn multiply(&self, k: &BigUint) -> Result<Self> {
        self.multiply_in(Secp256k1::get(), k)
    }

    pub(crate) fn multiply_in(&self, curve: &Secp256k1, k: &BigUint) -> Result<Self> {
        let k = k % curve.order();
        Ok(Self(self.0.multiply(&k)?))
    }

    /// Returns `k·G`.
    pub fn mul_generator(k: &BigUint) -> Result<Self> {
        Self::mul_generator_in(Secp256k1::get(), k)
    }

    pub(crate) fn mul_generator_in(curve: &Secp256k1, k: &BigUint) -> Result<Self> {
        curve.generator().multiply_in(curve, k)
    }

    /// Recover the point with x-coordinate `x` whose y-coordinate has the
    /// requested parity.
    ///
    /// Fails with [`Error::NotOnCurve`] if `x³ + 7` is not a square.
    pub fn lift_x(x: &BigUint, odd_y: bool) -> Result<Self> {
        let curve = Secp256k1::get();
        let x = curve.field_element(x)?;
        let alpha = curve.equation().rhs(&x)?;
        let beta = alpha.power_unsigned(curve.sqrt_exponent());

        if beta.square() != alpha {
            return Err(Error::NotOnCurve);
        }

        // p is odd, so exactly one of beta and p - beta is odd
        let y = if beta.is_odd() == odd_y {
            beta
        } else {
            beta.negate()
        };

        Ok(Self(AffinePoint::new(x, y, curve.equation().clone())?))
    }
}

impl fmt::Display for Secp256k1Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Secp256k1Point;
    use crate::{arithmetic::Secp256k1, Error};
    use hex_literal::hex;
    use num_bigint::BigUint;
    use primefield::FieldElement;
    use weierstrass::{AffinePoint, CurveEquation};

    fn int(bytes: &[u8]) -> BigUint {
        BigUint::from_bytes_be(bytes)
    }

    fn point(x: &[u8], y: &[u8]) -> Secp256k1Point {
        Secp256k1Point::new(&int(x), &int(y)).unwrap()
    }

    fn double_g() -> Secp256k1Point {
        point(
            &hex!("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"),
            &hex!("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a"),
        )
    }

    fn triple_g() -> Secp256k1Point {
        point(
            &hex!("f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"),
            &hex!("388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672"),
        )
    }

    #[test]
    fn small_multiples() {
        let g = Secp256k1Point::generator();
        assert_eq!(g.add(&g).unwrap(), double_g());
        assert_eq!(g.add(&double_g()).unwrap(), triple_g());
        assert_eq!(Secp256k1Point::mul_generator(&BigUint::from(3u32)).unwrap(), triple_g());
    }

    #[test]
    fn scalar_is_reduced_mod_n() {
        let n = Secp256k1::get().order();
        let g = Secp256k1Point::generator();

        assert!(g.multiply(n).unwrap().is_identity());
        assert_eq!(g.multiply(&(n + 2u32)).unwrap(), double_g());
        assert_eq!(g.multiply(&(n - 1u32)).unwrap(), g.negate());
    }

    #[test]
    fn identity_handling() {
        let g = Secp256k1Point::generator();
        let o = Secp256k1Point::identity();

        assert!(o.is_identity());
        assert_eq!(o.x(), None);
        assert_eq!(g.add(&o).unwrap(), g);
        assert!(g.add(&g.negate()).unwrap().is_identity());
        assert!(o.multiply(&BigUint::from(12345u32)).unwrap().is_identity());
    }

    #[test]
    fn rejects_invalid_coordinates() {
        let g = Secp256k1Point::generator();
        let (x, y) = (g.x().unwrap(), g.y().unwrap());

        assert_eq!(
            Secp256k1Point::new(x, &(y + 1u32)),
            Err(Error::NotOnCurve)
        );

        let p = Secp256k1::get().modulus();
        assert_eq!(
            Secp256k1Point::new(&(x + p), y),
            Err(Error::OutOfRange)
        );
    }

    #[test]
    fn lift_x_picks_parity() {
        let g = Secp256k1Point::generator();
        let x = g.x().unwrap();

        // Gy is even
        assert_eq!(Secp256k1Point::lift_x(x, false).unwrap(), g);
        assert_eq!(Secp256k1Point::lift_x(x, true).unwrap(), g.negate());

        let odd = Secp256k1Point::lift_x(&BigUint::from(2u32), true).unwrap();
        assert!(odd.y().unwrap().bit(0));
    }

    #[test]
    fn lift_x_without_point() {
        // 0³ + 7 and 5³ + 7 are non-residues mod p
        for x in [0u32, 5] {
            assert_eq!(
                Secp256k1Point::lift_x(&BigUint::from(x), false),
                Err(Error::NotOnCurve)
            );
        }

        let p = Secp256k1::get().modulus();
        assert_eq!(
            Secp256k1Point::lift_x(&(p + 1u32), false),
            Err(Error::OutOfRange)
        );
    }

    #[test]
    fn foreign_curve() {
        let p = BigUint::from(223u32);
        let curve = CurveEquation::new(
            FieldElement::zero(&p).unwrap(),
            FieldElement::from_u64(7, &p).unwrap(),
        )
        .unwrap();

        assert_eq!(
            Secp256k1Point::from_affine(AffinePoint::identity(curve)),
            Err(Error::CurveMismatch)
        );
    }
}
