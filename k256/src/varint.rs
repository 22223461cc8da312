//! Bitcoin's variable length integers ("CompactSize").
//!
//! | value                | encoding                   |
//! |----------------------|----------------------------|
//! | `0..=0xfc`           | the value as one byte      |
//! | `..=0xffff`          | `0xfd` + 2 bytes LE        |
//! | `..=0xffff_ffff`     | `0xfe` + 4 bytes LE        |
//! | `..=u64::MAX`        | `0xff` + 8 bytes LE        |

use crate::{Error, Result};
use alloc::vec::Vec;

/// Encode an integer, failing with [`Error::IntegerTooLarge`] above
/// `u64::MAX`.
pub fn encode(value: u128) -> Result<Vec<u8>> {
    let value = u64::try_from(value).map_err(|_| Error::IntegerTooLarge)?;

    let mut out = Vec::with_capacity(9);
    match value {
        0..=0xfc => out.push(value as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(value as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(value as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&value.to_le_bytes());
        }
    }

    Ok(out)
}

/// Decode a varint from the front of `bytes`, returning the value and the
/// number of bytes consumed.
pub fn decode(bytes: &[u8]) -> Result<(u64, usize)> {
    let (&prefix, rest) = bytes.split_first().ok_or(Error::MalformedVarint)?;
    let width = width(prefix);
    if width == 0 {
        return Ok((u64::from(prefix), 1));
    }

    let body = rest.get(..width).ok_or(Error::MalformedVarint)?;
    Ok((read_le(body), 1 + width))
}

/// Read one varint from a byte stream.
///
/// Truncated input is reported as [`Error::MalformedVarint`].
#[cfg(feature = "std")]
pub fn read_varint<R: std::io::Read>(reader: &mut R) -> Result<u64> {
    let mut prefix = [0u8; 1];
    reader
        .read_exact(&mut prefix)
        .map_err(|_| Error::MalformedVarint)?;

    let width = width(prefix[0]);
    if width == 0 {
        return Ok(u64::from(prefix[0]));
    }

    let mut body = [0u8; 8];
    reader
        .read_exact(&mut body[..width])
        .map_err(|_| Error::MalformedVarint)?;
    Ok(read_le(&body[..width]))
}

/// Number of little endian bytes following `prefix`.
fn width(prefix: u8) -> usize {
    match prefix {
        0xfd => 2,
        0xfe => 4,
        0xff => 8,
        _ => 0,
    }
}

fn read_le(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}
