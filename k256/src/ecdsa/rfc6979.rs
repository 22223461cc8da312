//! Deterministic nonces as described in [RFC6979] section 3.2.
//!
//! An HMAC-DRBG over SHA-256 is seeded with the secret and the message hash;
//! the same inputs always yield the same sequence of candidates. `K` and `V`
//! are wiped when the generator is dropped.
//!
//! [RFC6979]: https://datatracker.ietf.org/doc/html/rfc6979

use alloc::{vec, vec::Vec};
use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::Sha256;
use zeroize::Zeroizing;

type HmacSha256 = Hmac<Sha256>;

/// Output size of SHA-256.
const HASH_LEN: usize = 32;

const SEPARATOR_0: &[u8] = &[0x00];
const SEPARATOR_1: &[u8] = &[0x01];

/// HMAC-DRBG producing candidate nonces in `[1, q)`.
pub struct NonceGenerator {
    k: Zeroizing<[u8; HASH_LEN]>,
    v: Zeroizing<[u8; HASH_LEN]>,
    q: BigUint,
    emitted: bool,
}

impl NonceGenerator {
    /// Seed the generator from secret `x ∈ [1, q)` and message hash `h1`
    /// (steps a-g).
    pub fn new(x: &BigUint, h1: &[u8], q: &BigUint) -> Self {
        let rlen = octet_len(q);
        let x = Zeroizing::new(int2octets(x, rlen));
        let h = bits2octets(h1, q);

        let mut drbg = Self {
            k: Zeroizing::new([0x00; HASH_LEN]),
            v: Zeroizing::new([0x01; HASH_LEN]),
            q: q.clone(),
            emitted: false,
        };

        for separator in [SEPARATOR_0, SEPARATOR_1] {
            drbg.k = hmac_sha256(&drbg.k[..], &[&drbg.v[..], separator, &x[..], &h[..]]);
            drbg.v = hmac_sha256(&drbg.k[..], &[&drbg.v[..]]);
        }

        drbg
    }

    /// Next candidate nonce (step h).
    ///
    /// Candidates outside `[1, q)` are skipped internally. Calling this again
    /// after a candidate was rejected by the signer continues the sequence as
    /// the RFC prescribes.
    pub fn next_candidate(&mut self) -> BigUint {
        if self.emitted {
            self.update();
        }
        self.emitted = true;

        let qlen = bit_len(&self.q);
        loop {
            let mut t = Zeroizing::new(Vec::with_capacity(octet_len(&self.q)));
            while t.len() * 8 < qlen {
                self.v = hmac_sha256(&self.k[..], &[&self.v[..]]);
                t.extend_from_slice(&self.v[..]);
            }

            let k = bits2int(&t, qlen);
            if !k.is_zero() && k < self.q {
                return k;
            }

            self.update();
        }
    }

    fn update(&mut self) {
        self.k = hmac_sha256(&self.k[..], &[&self.v[..], SEPARATOR_0]);
        self.v = hmac_sha256(&self.k[..], &[&self.v[..]]);
    }
}

fn hmac_sha256(key: &[u8], parts: &[&[u8]]) -> Zeroizing<[u8; HASH_LEN]> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    for part in parts {
        mac.update(part);
    }
    Zeroizing::new(mac.finalize().into_bytes().into())
}

fn bit_len(q: &BigUint) -> usize {
    q.bits() as usize
}

/// `rlen`: length of `q` rounded up to whole octets.
fn octet_len(q: &BigUint) -> usize {
    bit_len(q).div_ceil(8)
}

/// Leftmost `qlen` bits of `bytes` as an integer (section 2.3.2).
fn bits2int(bytes: &[u8], qlen: usize) -> BigUint {
    let value = BigUint::from_bytes_be(bytes);
    let blen = bytes.len() * 8;
    if blen > qlen {
        value >> (blen - qlen)
    } else {
        value
    }
}

/// Big endian, left-padded to `rlen` octets (section 2.3.3).
fn int2octets(value: &BigUint, rlen: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut out = vec![0u8; rlen.saturating_sub(bytes.len())];
    out.extend_from_slice(&bytes);
    out
}

/// `bits2int` reduced once modulo `q`, then `int2octets` (section 2.3.4).
fn bits2octets(bytes: &[u8], q: &BigUint) -> Vec<u8> {
    let z1 = bits2int(bytes, bit_len(q));
    let z2 = if &z1 >= q { z1 - q } else { z1 };
    int2octets(&z2, octet_len(q))
}
