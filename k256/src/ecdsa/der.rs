//! ASN.1 DER encoding of ECDSA signatures.
//!
//! ```text
//! 0x30 len 0x02 len(r) r 0x02 len(s) s
//! ```
//!
//! Only the subset needed for secp256k1 signatures is supported: short-form
//! lengths and non-negative, minimally encoded integers, as required by
//! [BIP66].
//!
//! [BIP66]: https://github.com/bitcoin/bips/blob/master/bip-0066.mediawiki

use super::Signature;
use crate::{Error, Result};
use alloc::vec::Vec;
use num_bigint::BigUint;

const SEQUENCE_TAG: u8 = 0x30;
const INTEGER_TAG: u8 = 0x02;

/// Lengths at or above this use the long form, which is never needed here.
const LONG_FORM: u8 = 0x80;

/// Largest INTEGER body: a 256-bit value plus the sign padding byte.
const MAX_INTEGER_LEN: usize = 33;

/// Largest DER signature: two 33-byte integers plus headers.
pub const MAX_SIGNATURE_LEN: usize = 6 + 2 * MAX_INTEGER_LEN;

impl Signature {
    /// Serialize as ASN.1 DER.
    ///
    /// Both components fit in 256 bits, so every length is short form.
    pub fn to_der(&self) -> Vec<u8> {
        let r = integer_bytes(self.r());
        let s = integer_bytes(self.s());
        let body_len = 4 + r.len() + s.len();

        let mut out = Vec::with_capacity(2 + body_len);
        out.push(SEQUENCE_TAG);
        out.push(body_len as u8);
        for int in [r, s] {
            out.push(INTEGER_TAG);
            out.push(int.len() as u8);
            out.extend_from_slice(&int);
        }

        debug_assert!(out.len() <= MAX_SIGNATURE_LEN);
        out
    }

    /// Parse an ASN.1 DER signature.
    ///
    /// Any structural defect, including an integer wider than 256 bits, is
    /// reported as [`Error::MalformedDer`]. The decoded integers are not
    /// otherwise range checked here; verification does that.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let body = read_tlv(bytes, SEQUENCE_TAG).and_then(|(body, rest)| {
            if rest.is_empty() {
                Ok(body)
            } else {
                Err(Error::MalformedDer)
            }
        })?;

        let (r, rest) = read_integer(body)?;
        let (s, rest) = read_integer(rest)?;
        if !rest.is_empty() {
            return Err(Error::MalformedDer);
        }

        Ok(Self::from_scalars(r, s))
    }
}

/// Minimal big endian bytes, with a `0x00` prefix when the high bit is set
/// so the integer reads as positive.
fn integer_bytes(value: &BigUint) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    if bytes[0] & 0x80 != 0 {
        let mut padded = Vec::with_capacity(bytes.len() + 1);
        padded.push(0);
        padded.extend_from_slice(&bytes);
        padded
    } else {
        bytes
    }
}

/// Split off one tag-length-value with the given tag, returning the value
/// and the remaining input.
fn read_tlv(input: &[u8], tag: u8) -> Result<(&[u8], &[u8])> {
    match input {
        [t, len, rest @ ..] if *t == tag && *len < LONG_FORM && rest.len() >= usize::from(*len) => {
            Ok(rest.split_at(usize::from(*len)))
        }
        _ => Err(Error::MalformedDer),
    }
}

fn read_integer(input: &[u8]) -> Result<(BigUint, &[u8])> {
    let (value, rest) = read_tlv(input, INTEGER_TAG)?;

    match value {
        [] => return Err(Error::MalformedDer),
        // negative
        [first, ..] if first & 0x80 != 0 => return Err(Error::MalformedDer),
        // superfluous leading zero
        [0, second, ..] if second & 0x80 == 0 => return Err(Error::MalformedDer),
        _ if value.len() > MAX_INTEGER_LEN => return Err(Error::MalformedDer),
        // 33 bytes only with the sign padding byte
        [first, ..] if value.len() == MAX_INTEGER_LEN && *first != 0 => {
            return Err(Error::MalformedDer)
        }
        _ => {}
    }

    Ok((BigUint::from_bytes_be(value), rest))
}
