//! Error types.

use core::fmt;

/// Curve arithmetic errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Underlying field arithmetic failed.
    Field(primefield::Error),

    /// Points lie on curves with different `(a, b)` coefficients.
    CurveMismatch,

    /// Coordinates do not satisfy the curve equation.
    NotOnCurve,
}

impl From<primefield::Error> for Error {
    fn from(err: primefield::Error) -> Self {
        Error::Field(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Field(err) => write!(f, "field error: {err}"),
            Error::CurveMismatch => f.write_str("points are on different curves"),
            Error::NotOnCurve => f.write_str("point is not on the curve"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Field(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
