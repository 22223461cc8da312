#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod address;
pub mod arithmetic;
pub mod base58;
pub mod ecdsa;
pub mod hash;
pub mod sec1;
pub mod varint;
pub mod wif;

mod error;

#[cfg(test)]
mod test_vectors;

pub use crate::{
    address::Network,
    arithmetic::{Scalar, Secp256k1, Secp256k1Point},
    error::{Error, Result},
};
pub use {num_bigint, primefield, weierstrass};
