//! Known-answer vectors shared by the unit tests.

pub mod ecdsa;
pub mod encoding;
