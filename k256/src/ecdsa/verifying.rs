//! ECDSA verifying key

use super::{verify_digest, Signature};
use crate::{
    address::p2pkh_address,
    arithmetic::{Secp256k1, Secp256k1Point},
    hash::sha256,
    Error, Network, Result,
};
use alloc::{string::String, vec::Vec};
use num_bigint::BigUint;

/// ECDSA/secp256k1 verifying key: a public point other than the identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VerifyingKey {
    point: Secp256k1Point,
}

impl VerifyingKey {
    /// Wrap a curve point, failing with [`Error::OutOfRange`] for the
    /// identity.
    pub fn from_affine(point: Secp256k1Point) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::OutOfRange);
        }

        Ok(Self { point })
    }

    /// Parse a SEC1 encoded public key.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_affine(Secp256k1Point::from_sec1_bytes(bytes)?)
    }

    /// SEC1 encoding, compressed or not.
    pub fn to_sec1_bytes(&self, compressed: bool) -> Vec<u8> {
        self.point.to_sec1_bytes(compressed)
    }

    /// Borrow the public point.
    pub fn as_affine(&self) -> &Secp256k1Point {
        &self.point
    }

    /// Verify a signature over a 32-byte digest.
    pub fn verify_prehash(&self, prehash: &[u8; 32], signature: &Signature) -> Result<()> {
        verify_digest(
            Secp256k1::get(),
            &self.point,
            &BigUint::from_bytes_be(prehash),
            signature,
        )
    }

    /// Verify a signature over the SHA-256 digest of `msg`.
    pub fn verify(&self, msg: &[u8], signature: &Signature) -> bool {
        self.verify_prehash(&sha256(msg), signature).is_ok()
    }

    /// P2PKH address of this key.
    pub fn to_address(&self, network: Network, compressed: bool) -> String {
        p2pkh_address(self, network, compressed)
    }
}

impl From<VerifyingKey> for Secp256k1Point {
    fn from(key: VerifyingKey) -> Secp256k1Point {
        key.point
    }
}

#[cfg(feature = "serde")]
impl serdect::serde::Serialize for VerifyingKey {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serdect::serde::Serializer,
    {
        serdect::slice::serialize_hex_lower_or_bin(&self.to_sec1_bytes(true), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serdect::serde::Deserialize<'de> for VerifyingKey {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serdect::serde::Deserializer<'de>,
    {
        use serdect::serde::de::Error as _;

        let bytes = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        Self::from_sec1_bytes(&bytes).map_err(D::Error::custom)
    }
}
