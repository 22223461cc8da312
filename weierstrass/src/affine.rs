//! Affine curve points.

use crate::{CurveEquation, Error, Result};
use core::fmt;
use primefield::FieldElement;

/// Coordinates of an [`AffinePoint`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Coordinates {
    /// The point at infinity, identity of the group.
    Identity,

    /// A finite point `(x, y)`.
    Affine {
        /// x-coordinate
        x: FieldElement,

        /// y-coordinate
        y: FieldElement,
    },
}

/// Point on a short Weierstrass curve in affine coordinates.
///
/// Finite points always satisfy the curve equation: it is checked when the
/// point is constructed, and the group law preserves it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AffinePoint {
    coordinates: Coordinates,
    curve: CurveEquation,
}

impl AffinePoint {
    /// Create a finite point, failing with [`Error::NotOnCurve`] if `(x, y)`
    /// does not satisfy the equation of `curve`.
    pub fn new(x: FieldElement, y: FieldElement, curve: CurveEquation) -> Result<Self> {
        if !curve.contains(&x, &y)? {
            return Err(Error::NotOnCurve);
        }

        Ok(Self {
            coordinates: Coordinates::Affine { x, y },
            curve,
        })
    }

    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity(curve: CurveEquation) -> Self {
        Self {
            coordinates: Coordinates::Identity,
            curve,
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self.coordinates, Coordinates::Identity)
    }

    /// Coordinates of this point.
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// x-coordinate, `None` for the identity.
    pub fn x(&self) -> Option<&FieldElement> {
        match &self.coordinates {
            Coordinates::Identity => None,
            Coordinates::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, `None` for the identity.
    pub fn y(&self) -> Option<&FieldElement> {
        match &self.coordinates {
            Coordinates::Identity => None,
            Coordinates::Affine { y, .. } => Some(y),
        }
    }

    /// Curve this point lies on.
    pub fn curve(&self) -> &CurveEquation {
        &self.curve
    }

    /// Returns `self + rhs`.
    ///
    /// Cases are tried in order: identity operand, vertical line through
    /// inverse points, chord through distinct x-coordinates, tangent at a
    /// repeated point.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        if self.curve != rhs.curve {
            return Err(Error::CurveMismatch);
        }

        let ((x1, y1), (x2, y2)) = match (&self.coordinates, &rhs.coordinates) {
            (Coordinates::Identity, _) => return Ok(rhs.clone()),
            (_, Coordinates::Identity) => return Ok(self.clone()),
            (Coordinates::Affine { x: x1, y: y1 }, Coordinates::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        if x1 == x2 && y1 != y2 {
            return Ok(self.to_identity());
        }

        if x1 != x2 {
            let slope = y2.subtract(y1)?.divide(&x2.subtract(x1)?)?;
            return self.chord(&slope, x1, y1, x2);
        }

        self.double()
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Result<Self> {
        let (x, y) = match &self.coordinates {
            Coordinates::Identity => return Ok(self.clone()),
            Coordinates::Affine { x, y } => (x, y),
        };

        // vertical tangent
        if y.is_zero() {
            return Ok(self.to_identity());
        }

        let three = FieldElement::from_u64(3, x.modulus())?;
        let numerator = three.multiply(&x.square())?.add(self.curve.a())?;
        let slope = numerator.divide(&y.double())?;
        self.chord(&slope, x, y, x)
    }

    /// Returns `-self`, the reflection across the x-axis.
    pub fn negate(&self) -> Self {
        match &self.coordinates {
            Coordinates::Identity => self.clone(),
            Coordinates::Affine { x, y } => Self {
                coordinates: Coordinates::Affine {
                    x: x.clone(),
                    y: y.negate(),
                },
                curve: self.curve.clone(),
            },
        }
    }

    /// Returns `self - rhs`.
    pub fn subtract(&self, rhs: &Self) -> Result<Self> {
        self.add(&rhs.negate())
    }

    /// Third intersection of the line with slope `slope` through
    /// `(x1, y1)`, reflected: `x3 = slope² - x1 - x2`,
    /// `y3 = slope·(x1 - x3) - y1`.
    fn chord(
        &self,
        slope: &FieldElement,
        x1: &FieldElement,
        y1: &FieldElement,
        x2: &FieldElement,
    ) -> Result<Self> {
        let x3 = slope.square().subtract(x1)?.subtract(x2)?;
        let y3 = slope.multiply(&x1.subtract(&x3)?)?.subtract(y1)?;

        debug_assert!(self.curve.contains(&x3, &y3).unwrap_or(false));

        Ok(Self {
            coordinates: Coordinates::Affine { x: x3, y: y3 },
            curve: self.curve.clone(),
        })
    }

    fn to_identity(&self) -> Self {
        Self::identity(self.curve.clone())
    }
}

impl fmt::Display for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coordinates {
            Coordinates::Identity => f.write_str("Point(infinity)"),
            Coordinates::Affine { x, y } => write!(
                f,
                "Point({},{})_{}_{} FieldElement({})",
                x.value(),
                y.value(),
                self.curve.a().value(),
                self.curve.b().value(),
                self.curve.modulus()
            ),
        }
    }
}
