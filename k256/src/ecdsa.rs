//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! Signing derives its nonce deterministically from the secret and the
//! message digest ([RFC6979]) and always emits low-S signatures ([BIP62]).
//! Verification accepts either S.
//!
//! ```
//! use btc_k256::ecdsa::SigningKey;
//!
//! let signing_key = SigningKey::from_slice(&[0x11; 32])?;
//! let signature = signing_key.sign(b"ECDSA proves knowledge of a secret number")?;
//! assert!(signature.is_low_s());
//!
//! let verifying_key = signing_key.verifying_key();
//! assert!(verifying_key.verify(b"ECDSA proves knowledge of a secret number", &signature));
//!
//! let der = signature.to_der();
//! assert_eq!(btc_k256::ecdsa::Signature::from_der(&der)?, signature);
//! # Ok::<(), btc_k256::Error>(())
//! ```
//!
//! [RFC6979]: https://datatracker.ietf.org/doc/html/rfc6979
//! [BIP62]: https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki

mod der;
pub mod rfc6979;
mod signing;
mod verifying;

pub use self::{der::MAX_SIGNATURE_LEN, signing::SigningKey, verifying::VerifyingKey};

use self::rfc6979::NonceGenerator;
use crate::{
    arithmetic::{to_be_bytes_32, Scalar, Secp256k1, Secp256k1Point},
    Error, Result,
};
use num_bigint::BigUint;
use num_traits::Zero;

/// ECDSA/secp256k1 signature `(r, s)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature, failing with [`Error::InvalidSignature`] unless
    /// both components lie in `[1, n-1]`.
    pub fn new(r: BigUint, s: BigUint) -> Result<Self> {
        let n = Secp256k1::get().order();
        if [&r, &s].iter().any(|c| c.is_zero() || *c >= n) {
            return Err(Error::InvalidSignature);
        }

        Ok(Self { r, s })
    }

    /// Create a signature without range checks. Both components must fit in
    /// 256 bits.
    pub(crate) fn from_scalars(r: BigUint, s: BigUint) -> Self {
        debug_assert!(r.bits() <= 256 && s.bits() <= 256);
        Self { r, s }
    }

    /// The `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Is `s <= n/2`?
    pub fn is_low_s(&self) -> bool {
        self.s <= *Secp256k1::get().half_order()
    }

    /// Normalize signature into "low S" form as described in
    /// [BIP 0062: Dealing with Malleability][1].
    ///
    /// Returns `None` if the signature is already low-S (or `s` is not a
    /// valid scalar).
    ///
    /// [1]: https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki
    pub fn normalize_s(&self) -> Option<Self> {
        self.normalize_s_in(Secp256k1::get())
    }

    fn normalize_s_in(&self, curve: &Secp256k1) -> Option<Self> {
        if self.s <= *curve.half_order() {
            return None;
        }

        let s = Scalar::new_in(curve, &self.s).ok()?;
        Some(Self {
            r: self.r.clone(),
            s: s.negate().into(),
        })
    }
}

#[cfg(feature = "serde")]
impl serdect::serde::Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serdect::serde::Serializer,
    {
        serdect::slice::serialize_hex_lower_or_bin(&self.to_der(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serdect::serde::Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serdect::serde::Deserializer<'de>,
    {
        use serdect::serde::de::Error as _;

        let bytes = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        Self::from_der(&bytes).map_err(D::Error::custom)
    }
}

/// Sign the 256-bit digest `z` with `secret ∈ [1, n-1]`.
pub fn sign(secret: &BigUint, z: &BigUint) -> Result<Signature> {
    let curve = Secp256k1::get();
    sign_digest(curve, &secret_scalar(curve, secret)?, z)
}

/// Verify `signature` over digest `z` under `public_key`.
///
/// Any failure, including out of range signature components, is `false`.
pub fn verify(public_key: &Secp256k1Point, z: &BigUint, signature: &Signature) -> bool {
    verify_digest(Secp256k1::get(), public_key, z, signature).is_ok()
}

/// Recover the secret key from two signatures that share a nonce.
///
/// With `s1 = (z1 + r·d)/k` and `s2 = (z2 + r·d)/k`:
///
/// ```text
/// d = (s2·z1 - s1·z2) / (r·s1 - r·s2)  (mod n)
/// ```
///
/// Low-S normalization may have negated either `s`, so both relative signs
/// are tried and the candidate is checked against `public_key`. Fails with
/// [`Error::InvalidSignature`] if the signatures do not share `r` or no
/// candidate matches.
pub fn recover_secret_from_reused_nonce(
    public_key: &Secp256k1Point,
    z1: &BigUint,
    sig1: &Signature,
    z2: &BigUint,
    sig2: &Signature,
) -> Result<BigUint> {
    if sig1.r() != sig2.r() {
        return Err(Error::InvalidSignature);
    }

    let curve = Secp256k1::get();
    let r = Scalar::new_in(curve, sig1.r()).map_err(|_| Error::InvalidSignature)?;
    let s1 = Scalar::new_in(curve, sig1.s()).map_err(|_| Error::InvalidSignature)?;
    let s2 = Scalar::new_in(curve, sig2.s()).map_err(|_| Error::InvalidSignature)?;
    let z1 = Scalar::reduce_in(curve, z1)?;
    let z2 = Scalar::reduce_in(curve, z2)?;

    for s2 in [s2.clone(), s2.negate()] {
        let numerator = s2.multiply(&z1)?.subtract(&s1.multiply(&z2)?)?;
        let denominator = r.multiply(&s1)?.subtract(&r.multiply(&s2)?)?;

        let Ok(candidate) = numerator.divide(&denominator) else {
            continue;
        };

        if !candidate.is_zero()
            && Secp256k1Point::mul_generator_in(curve, candidate.value())? == *public_key
        {
            return Ok(candidate.into());
        }
    }

    Err(Error::InvalidSignature)
}

/// Secret scalar in `[1, n-1]`, else [`Error::OutOfRange`].
pub(crate) fn secret_scalar(curve: &Secp256k1, secret: &BigUint) -> Result<Scalar> {
    let scalar = Scalar::new_in(curve, secret)?;
    if scalar.is_zero() {
        return Err(Error::OutOfRange);
    }

    Ok(scalar)
}

/// Sign with RFC6979 nonces, resampling whenever a candidate is degenerate.
pub(crate) fn sign_digest(curve: &Secp256k1, d: &Scalar, z: &BigUint) -> Result<Signature> {
    if z.bits() > 256 {
        return Err(Error::OutOfRange);
    }

    let mut nonces = NonceGenerator::new(d.value(), &to_be_bytes_32(z), curve.order());

    loop {
        let k = nonces.next_candidate();
        match sign_with_nonce(curve, d, z, &k) {
            Err(Error::DegenerateNonce) => continue,
            result => return result,
        }
    }
}

/// Sign with an explicit nonce `k`.
///
/// Fails with [`Error::DegenerateNonce`] if `k`, `r` or `s` is zero.
pub(crate) fn sign_with_nonce(
    curve: &Secp256k1,
    d: &Scalar,
    z: &BigUint,
    k: &BigUint,
) -> Result<Signature> {
    let k = Scalar::new_in(curve, k)?;
    if k.is_zero() {
        return Err(Error::DegenerateNonce);
    }

    // x-coordinate of k×G, reduced into the scalar field
    let big_r = Secp256k1Point::mul_generator_in(curve, k.value())?;
    let r = Scalar::reduce_in(curve, big_r.x().ok_or(Error::DegenerateNonce)?)?;
    if r.is_zero() {
        return Err(Error::DegenerateNonce);
    }

    let z = Scalar::reduce_in(curve, z)?;
    let s = z.add(&r.multiply(d)?)?.divide(&k)?;
    if s.is_zero() {
        return Err(Error::DegenerateNonce);
    }

    let signature = Signature::from_scalars(r.into(), s.into());
    Ok(signature.normalize_s_in(curve).unwrap_or(signature))
}

pub(crate) fn verify_digest(
    curve: &Secp256k1,
    public_key: &Secp256k1Point,
    z: &BigUint,
    signature: &Signature,
) -> Result<()> {
    let (r, s) = match (
        Scalar::new_in(curve, signature.r()),
        Scalar::new_in(curve, signature.s()),
    ) {
        (Ok(r), Ok(s)) if !r.is_zero() && !s.is_zero() => (r, s),
        _ => return Err(Error::InvalidSignature),
    };

    if public_key.is_identity() {
        return Err(Error::InvalidSignature);
    }

    let z = Scalar::reduce_in(curve, z)?;
    let s_inv = s.invert()?;
    let u1 = z.multiply(&s_inv)?;
    let u2 = r.multiply(&s_inv)?;

    let big_r = Secp256k1Point::mul_generator_in(curve, u1.value())?
        .add(&public_key.multiply_in(curve, u2.value())?)?;
    let x = big_r.x().ok_or(Error::InvalidSignature)?;

    if Scalar::reduce_in(curve, x)? == r {
        Ok(())
    } else {
        Err(Error::InvalidSignature)
    }
}
