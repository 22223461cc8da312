//! Base58 and Base58Check text encodings.
//!
//! The byte string is read as one big endian integer and written in base 58.
//! Leading zero bytes would vanish under that reading, so each one is carried
//! over as a leading `'1'`, the alphabet's zero digit.

use crate::{hash::hash256, Error, Result};
use alloc::{string::String, vec, vec::Vec};
use num_bigint::BigUint;

/// Bitcoin's alphabet: digits and letters without `0`, `O`, `I` and `l`.
const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length of the Base58Check checksum.
const CHECKSUM_LEN: usize = 4;

/// Encode bytes as Base58.
pub fn encode(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();
    let mut out = "1".repeat(zeros);

    let rest = &bytes[zeros..];
    if !rest.is_empty() {
        let digits = BigUint::from_bytes_be(rest).to_radix_be(58);
        out.extend(digits.iter().map(|&d| char::from(ALPHABET[usize::from(d)])));
    }

    out
}

/// Decode a Base58 string, failing with [`Error::InvalidBase58`] on any
/// character outside the alphabet.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    let zeros = s.bytes().take_while(|&c| c == ALPHABET[0]).count();
    let digits = s.bytes().skip(zeros).map(digit).collect::<Result<Vec<u8>>>()?;

    let mut out = vec![0u8; zeros];
    if !digits.is_empty() {
        let value = BigUint::from_radix_be(&digits, 58).ok_or(Error::InvalidBase58)?;
        out.extend_from_slice(&value.to_bytes_be());
    }

    Ok(out)
}

/// Encode `payload` followed by the first four bytes of its double SHA-256.
pub fn encode_check(payload: &[u8]) -> String {
    let mut bytes = payload.to_vec();
    bytes.extend_from_slice(&checksum(payload));
    encode(&bytes)
}

/// Decode Base58Check, returning the payload with its checksum verified.
pub fn decode_check(s: &str) -> Result<Vec<u8>> {
    let mut bytes = decode(s)?;
    if bytes.len() < CHECKSUM_LEN {
        return Err(Error::ChecksumMismatch);
    }

    let expected = bytes.split_off(bytes.len() - CHECKSUM_LEN);
    if checksum(&bytes)[..] != expected[..] {
        return Err(Error::ChecksumMismatch);
    }

    Ok(bytes)
}

fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = hash256(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash[..CHECKSUM_LEN]);
    out
}

fn digit(c: u8) -> Result<u8> {
    ALPHABET
        .iter()
        .position(|&a| a == c)
        .and_then(|d| u8::try_from(d).ok())
        .ok_or(Error::InvalidBase58)
}
