//! Curve equation coefficients.

use crate::{Error, Result};
use core::fmt;
use primefield::{num_bigint::BigUint, FieldElement};

/// Coefficients of the short Weierstrass equation `y² = x³ + ax + b`.
///
/// Both coefficients live in the same prime field, which is the field of
/// every point on the curve.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CurveEquation {
    a: FieldElement,
    b: FieldElement,
}

impl CurveEquation {
    /// Create a curve equation from its coefficients.
    pub fn new(a: FieldElement, b: FieldElement) -> Result<Self> {
        if a.modulus() != b.modulus() {
            return Err(primefield::Error::FieldMismatch.into());
        }

        Ok(Self { a, b })
    }

    /// Coefficient `a`.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Coefficient `b`.
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Modulus of the underlying field.
    pub fn modulus(&self) -> &BigUint {
        self.a.modulus()
    }

    /// Right-hand side of the equation: `x³ + ax + b`.
    pub fn rhs(&self, x: &FieldElement) -> Result<FieldElement> {
        let x3 = x.square().multiply(x)?;
        let ax = self.a.multiply(x)?;
        Ok(x3.add(&ax)?.add(&self.b)?)
    }

    /// Does `(x, y)` satisfy the curve equation?
    pub fn contains(&self, x: &FieldElement, y: &FieldElement) -> Result<bool> {
        if y.modulus() != self.modulus() {
            return Err(Error::Field(primefield::Error::FieldMismatch));
        }

        Ok(y.square() == self.rhs(x)?)
    }
}

impl fmt::Debug for CurveEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CurveEquation {{ a: {}, b: {}, p: {} }}",
            self.a.value(),
            self.b.value(),
            self.modulus()
        )
    }
}
