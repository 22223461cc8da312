//! Error types.

use core::fmt;

/// Errors raised by secp256k1 arithmetic, signing and the encoders.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Field element or scalar outside its domain.
    OutOfRange,

    /// Operands belong to different fields.
    FieldMismatch,

    /// Points lie on different curves.
    CurveMismatch,

    /// Coordinates do not satisfy the curve equation, including an
    /// x-coordinate with no matching y on decompression.
    NotOnCurve,

    /// Inversion of zero.
    DivisionByZero,

    /// Nonce produced `r = 0` or `s = 0` and must be resampled.
    DegenerateNonce,

    /// Signature components out of range, or the signature does not match.
    InvalidSignature,

    /// Structurally invalid DER signature.
    MalformedDer,

    /// Unknown SEC1 tag or wrong encoding length.
    MalformedSec1,

    /// Character outside the Base58 alphabet.
    InvalidBase58,

    /// Base58Check checksum did not match its payload.
    ChecksumMismatch,

    /// Integer too large for the target encoding.
    IntegerTooLarge,

    /// Truncated varint.
    MalformedVarint,

    /// Bad WIF version byte, length or compression flag.
    InvalidWif,

    /// Bad address version byte or length.
    InvalidAddress,
}

impl From<primefield::Error> for Error {
    fn from(err: primefield::Error) -> Self {
        match err {
            primefield::Error::OutOfRange => Error::OutOfRange,
            primefield::Error::FieldMismatch => Error::FieldMismatch,
            primefield::Error::DivisionByZero => Error::DivisionByZero,
        }
    }
}

impl From<weierstrass::Error> for Error {
    fn from(err: weierstrass::Error) -> Self {
        match err {
            weierstrass::Error::Field(err) => err.into(),
            weierstrass::Error::CurveMismatch => Error::CurveMismatch,
            weierstrass::Error::NotOnCurve => Error::NotOnCurve,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::OutOfRange => "value out of range",
            Error::FieldMismatch => "operands belong to different fields",
            Error::CurveMismatch => "points are on different curves",
            Error::NotOnCurve => "point is not on the curve",
            Error::DivisionByZero => "division by zero",
            Error::DegenerateNonce => "nonce produced a degenerate signature",
            Error::InvalidSignature => "invalid signature",
            Error::MalformedDer => "malformed DER signature",
            Error::MalformedSec1 => "malformed SEC1 point encoding",
            Error::InvalidBase58 => "invalid Base58 character",
            Error::ChecksumMismatch => "Base58Check checksum mismatch",
            Error::IntegerTooLarge => "integer too large",
            Error::MalformedVarint => "truncated varint",
            Error::InvalidWif => "invalid WIF private key",
            Error::InvalidAddress => "invalid address",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
