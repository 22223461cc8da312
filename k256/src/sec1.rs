//! SEC1 point encoding.
//!
//! Described in [SEC 1: Elliptic Curve Cryptography] (Version 2.0) section
//! 2.3.3 (page 10).
//!
//! [SEC 1: Elliptic Curve Cryptography]: https://www.secg.org/sec1-v2.pdf

use crate::{
    arithmetic::{to_be_bytes_32, Secp256k1Point},
    Error, Result,
};
use alloc::{vec, vec::Vec};
use num_bigint::BigUint;

/// Size of a serialized coordinate.
const COORDINATE_SIZE: usize = 32;

/// Leading byte of a SEC1 encoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Tag {
    /// Point at infinity.
    Identity = 0,

    /// Compressed point with even y-coordinate.
    CompressedEvenY = 2,

    /// Compressed point with odd y-coordinate.
    CompressedOddY = 3,

    /// Uncompressed point.
    Uncompressed = 4,
}

impl Tag {
    /// Parse a tag byte, failing with [`Error::MalformedSec1`] on unknown
    /// values (including the hybrid tags 6 and 7, which are not supported).
    pub fn from_u8(byte: u8) -> Result<Self> {
        match byte {
            0 => Ok(Tag::Identity),
            2 => Ok(Tag::CompressedEvenY),
            3 => Ok(Tag::CompressedOddY),
            4 => Ok(Tag::Uncompressed),
            _ => Err(Error::MalformedSec1),
        }
    }

    /// Total length of an encoding starting with this tag.
    pub fn message_len(self) -> usize {
        match self {
            Tag::Identity => 1,
            Tag::CompressedEvenY | Tag::CompressedOddY => 1 + COORDINATE_SIZE,
            Tag::Uncompressed => 1 + 2 * COORDINATE_SIZE,
        }
    }
}

impl Secp256k1Point {
    /// Serialize as SEC1: `0x04 ‖ x ‖ y`, or `0x02`/`0x03 ‖ x` (by the
    /// parity of `y`) when `compressed`. The identity encodes as `0x00`.
    pub fn to_sec1_bytes(&self, compressed: bool) -> Vec<u8> {
        let (x, y) = match (self.x(), self.y()) {
            (Some(x), Some(y)) => (x, y),
            _ => return vec![Tag::Identity as u8],
        };

        let tag = match (compressed, y.bit(0)) {
            (false, _) => Tag::Uncompressed,
            (true, false) => Tag::CompressedEvenY,
            (true, true) => Tag::CompressedOddY,
        };

        let mut out = Vec::with_capacity(tag.message_len());
        out.push(tag as u8);
        out.extend_from_slice(&to_be_bytes_32(x));
        if !compressed {
            out.extend_from_slice(&to_be_bytes_32(y));
        }
        out
    }

    /// Parse a SEC1 encoding.
    ///
    /// Uncompressed points are checked against the curve equation;
    /// compressed points are recovered with [`Secp256k1Point::lift_x`].
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let tag = Tag::from_u8(*bytes.first().ok_or(Error::MalformedSec1)?)?;
        if bytes.len() != tag.message_len() {
            return Err(Error::MalformedSec1);
        }

        let coordinate = |i: usize| {
            let start = 1 + i * COORDINATE_SIZE;
            BigUint::from_bytes_be(&bytes[start..start + COORDINATE_SIZE])
        };

        match tag {
            Tag::Identity => Ok(Self::identity()),
            Tag::CompressedEvenY => Self::lift_x(&coordinate(0), false),
            Tag::CompressedOddY => Self::lift_x(&coordinate(0), true),
            Tag::Uncompressed => Self::new(&coordinate(0), &coordinate(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tag;
    use crate::{
        arithmetic::{Secp256k1, Secp256k1Point},
        test_vectors::encoding::SEC1_TEST_VECTORS,
        Error,
    };
    use alloc::vec;
    use num_bigint::BigUint;
    use proptest::prelude::*;

    #[test]
    fn known_points() {
        for vector in SEC1_TEST_VECTORS {
            let secret = BigUint::from_bytes_be(vector.secret);
            let point = Secp256k1Point::mul_generator(&secret).unwrap();
            let encoded = point.to_sec1_bytes(vector.compressed);
            assert_eq!(encoded, vector.encoded);
            assert_eq!(Secp256k1Point::from_sec1_bytes(&encoded).unwrap(), point);
        }
    }

    #[test]
    fn identity() {
        let identity = Secp256k1Point::identity();
        assert_eq!(identity.to_sec1_bytes(true), [0]);
        assert_eq!(identity.to_sec1_bytes(false), [0]);
        assert_eq!(Secp256k1Point::from_sec1_bytes(&[0]).unwrap(), identity);
    }

    #[test]
    fn malformed() {
        let g = Secp256k1Point::generator();
        let compressed = g.to_sec1_bytes(true);
        let uncompressed = g.to_sec1_bytes(false);

        assert_eq!(Secp256k1Point::from_sec1_bytes(&[]), Err(Error::MalformedSec1));
        assert_eq!(
            Secp256k1Point::from_sec1_bytes(&compressed[..32]),
            Err(Error::MalformedSec1)
        );
        assert_eq!(
            Secp256k1Point::from_sec1_bytes(&uncompressed[..33]),
            Err(Error::MalformedSec1)
        );

        let mut hybrid = uncompressed.clone();
        hybrid[0] = 0x06;
        assert_eq!(Secp256k1Point::from_sec1_bytes(&hybrid), Err(Error::MalformedSec1));

        let mut off_curve = uncompressed;
        off_curve[64] ^= 1;
        assert_eq!(Secp256k1Point::from_sec1_bytes(&off_curve), Err(Error::NotOnCurve));
    }

    #[test]
    fn coordinate_above_modulus() {
        let mut above = vec![Tag::CompressedEvenY as u8];
        above.extend_from_slice(&[0xff; 32]);
        assert_eq!(Secp256k1Point::from_sec1_bytes(&above), Err(Error::OutOfRange));

        let p = Secp256k1::get().modulus();
        let mut uncompressed = vec![Tag::Uncompressed as u8];
        uncompressed.extend_from_slice(&p.to_bytes_be());
        uncompressed.extend_from_slice(&[0u8; 32]);
        assert_eq!(
            Secp256k1Point::from_sec1_bytes(&uncompressed),
            Err(Error::OutOfRange)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn round_trip(k in any::<[u8; 32]>(), compressed in any::<bool>()) {
            let point = Secp256k1Point::mul_generator(&BigUint::from_bytes_be(&k)).unwrap();
            let encoded = point.to_sec1_bytes(compressed);
            prop_assert_eq!(Secp256k1Point::from_sec1_bytes(&encoded).unwrap(), point);
        }
    }
}
