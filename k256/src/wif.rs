//! Wallet Import Format private keys.
//!
//! `Base58Check(version ‖ secret (32 bytes BE) ‖ [0x01 if compressed])`

use crate::{base58, Error, Network, Result};
use alloc::{string::String, vec::Vec};
use zeroize::Zeroizing;

/// Marker appended when the key's public key is used in compressed form.
const COMPRESSED_FLAG: u8 = 0x01;

/// Secret key decoded from WIF.
pub struct Wif {
    /// Big endian secret scalar.
    pub secret: Zeroizing<[u8; 32]>,

    /// Network named by the version byte.
    pub network: Network,

    /// Whether the public key is meant to be used compressed.
    pub compressed: bool,
}

/// Encode a 32-byte secret in WIF.
pub fn encode(secret: &[u8; 32], network: Network, compressed: bool) -> String {
    let mut payload = Zeroizing::new(Vec::with_capacity(34));
    payload.push(network.wif_prefix());
    payload.extend_from_slice(secret);
    if compressed {
        payload.push(COMPRESSED_FLAG);
    }

    base58::encode_check(&payload)
}

/// Decode a WIF string.
///
/// Range checks on the secret are left to [`SigningKey`].
///
/// [`SigningKey`]: crate::ecdsa::SigningKey
pub fn decode(wif: &str) -> Result<Wif> {
    let payload = Zeroizing::new(base58::decode_check(wif)?);

    let (&prefix, body) = payload.split_first().ok_or(Error::InvalidWif)?;
    let network = Network::from_wif_prefix(prefix).ok_or(Error::InvalidWif)?;

    let (secret, compressed) = match body.len() {
        32 => (body, false),
        33 if body[32] == COMPRESSED_FLAG => (&body[..32], true),
        _ => return Err(Error::InvalidWif),
    };

    let mut out = Zeroizing::new([0u8; 32]);
    out.copy_from_slice(secret);

    Ok(Wif {
        secret: out,
        network,
        compressed,
    })
}
