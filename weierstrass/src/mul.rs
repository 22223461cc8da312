//! Scalar multiplication.

use crate::{AffinePoint, Result};
use primefield::num_bigint::BigUint;

impl AffinePoint {
    /// Returns `k·self` by double-and-add.
    ///
    /// Walks the bits of `k` from least to most significant, adding the
    /// running power-of-two multiple of `self` into the accumulator whenever a
    /// bit is set: `O(log k)` group operations.
    pub fn multiply(&self, k: &BigUint) -> Result<Self> {
        let mut result = Self::identity(self.curve().clone());
        let mut current = self.clone();
        let bits = k.bits();

        for i in 0..bits {
            if k.bit(i) {
                result = result.add(&current)?;
            }
            if i + 1 < bits {
                current = current.double()?;
            }
        }

        Ok(result)
    }
}
