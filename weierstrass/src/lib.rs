#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(any(feature = "std", test))]
extern crate std;

mod affine;
mod curve;
mod error;
mod mul;

pub use crate::{
    affine::{AffinePoint, Coordinates},
    curve::CurveEquation,
    error::{Error, Result},
};
pub use primefield;
