//! Error types.

use core::fmt;

/// Field arithmetic errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Value outside `[0, modulus)`, or a modulus smaller than 2.
    OutOfRange,

    /// Operands belong to fields with different moduli.
    FieldMismatch,

    /// Inversion of (or division by) the zero element.
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange => f.write_str("field element out of range"),
            Error::FieldMismatch => f.write_str("field elements belong to different fields"),
            Error::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
