//! ECDSA signing key

use super::{secret_scalar, sign_digest, Signature, VerifyingKey};
use crate::{
    arithmetic::{to_be_bytes_32, Secp256k1, Secp256k1Point},
    hash::sha256,
    wif, Error, Network, Result,
};
use alloc::string::String;
use core::fmt;
use num_bigint::BigUint;
use rand_core::{CryptoRng, OsRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// ECDSA/secp256k1 signing key.
///
/// Holds the secret scalar `d ∈ [1, n-1]` as 32 big endian bytes, wiped
/// when the key is dropped, next to its public key `d·G`.
#[derive(Clone)]
pub struct SigningKey {
    secret: [u8; 32],
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Generate a key with the operating system's random number generator.
    pub fn random() -> Self {
        Self::random_from_rng(&mut OsRng)
    }

    /// Generate a key from `rng`, redrawing until the candidate lies in
    /// `[1, n-1]`.
    pub fn random_from_rng<R: CryptoRng + RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = Zeroizing::new([0u8; 32]);
        loop {
            rng.fill_bytes(&mut bytes[..]);
            if let Ok(key) = Self::from_bytes(&bytes) {
                return key;
            }
        }
    }

    /// Initialize signing key from a big endian serialized scalar,
    /// failing with [`Error::OutOfRange`] unless it lies in `[1, n-1]`.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let curve = Secp256k1::get();
        let d = secret_scalar(curve, &BigUint::from_bytes_be(bytes))?;
        let public = Secp256k1Point::mul_generator_in(curve, d.value())?;

        Ok(Self {
            secret: *bytes,
            verifying_key: VerifyingKey::from_affine(public)?,
        })
    }

    /// Initialize signing key from a 32-byte slice.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes = <&[u8; 32]>::try_from(slice).map_err(|_| Error::OutOfRange)?;
        Self::from_bytes(bytes)
    }

    /// Initialize signing key from an integer.
    pub fn from_secret(secret: &BigUint) -> Result<Self> {
        if secret.bits() > 256 {
            return Err(Error::OutOfRange);
        }

        Self::from_bytes(&Zeroizing::new(to_be_bytes_32(secret)))
    }

    /// Serialize the secret scalar as 32 big endian bytes.
    pub fn to_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.secret)
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Sign a 32-byte message digest with an RFC6979 nonce.
    pub fn sign_prehash(&self, prehash: &[u8; 32]) -> Result<Signature> {
        let curve = Secp256k1::get();
        let d = secret_scalar(curve, &BigUint::from_bytes_be(&self.secret))?;
        sign_digest(curve, &d, &BigUint::from_bytes_be(prehash))
    }

    /// Sign the SHA-256 digest of `msg`.
    pub fn sign(&self, msg: &[u8]) -> Result<Signature> {
        self.sign_prehash(&sha256(msg))
    }

    /// Export in Wallet Import Format.
    pub fn to_wif(&self, network: Network, compressed: bool) -> String {
        wif::encode(&self.secret, network, compressed)
    }

    /// Import from Wallet Import Format, returning the key together with the
    /// network and compression flag it was exported with.
    pub fn from_wif(s: &str) -> Result<(Self, Network, bool)> {
        let decoded = wif::decode(s)?;
        let key = Self::from_bytes(&decoded.secret)?;
        Ok((key, decoded.network, decoded.compressed))
    }
}

impl ConstantTimeEq for SigningKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.secret[..].ct_eq(&other.secret[..])
    }
}

impl PartialEq for SigningKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SigningKey {}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl ZeroizeOnDrop for SigningKey {}

impl From<&SigningKey> for VerifyingKey {
    fn from(signing_key: &SigningKey) -> VerifyingKey {
        signing_key.verifying_key.clone()
    }
}

impl TryFrom<&[u8]> for SigningKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}
