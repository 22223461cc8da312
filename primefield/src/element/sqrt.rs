//! Modular square roots.

use super::FieldElement;
use num_bigint::BigUint;
use num_traits::One;

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Algorithm {
    /// `p = 2`: every element is its own root.
    Trivial,

    /// Shanks' exponentiation for `p ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks for any odd prime.
    TonelliShanks,
}

impl Algorithm {
    fn for_modulus(p: &BigUint) -> Self {
        if p.bits() == 2 && !p.bit(0) {
            Self::Trivial
        } else if p.bit(0) && p.bit(1) {
            Self::Shanks
        } else {
            Self::TonelliShanks
        }
    }
}

impl FieldElement {
    /// Returns the square root of `self`, or `None` if `self` is a quadratic
    /// non-residue.
    ///
    /// Which of the two roots `r` and `p - r` is returned depends on the
    /// algorithm; callers needing a particular parity must pick it themselves.
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(self.clone());
        }

        let root = match Algorithm::for_modulus(self.modulus()) {
            Algorithm::Trivial => return Some(self.clone()),
            Algorithm::Shanks => self.sqrt_shanks(),
            Algorithm::TonelliShanks => self.sqrt_tonelli_shanks()?,
        };

        (root.square() == *self).then_some(root)
    }

    /// `self^((p+1)/4)`, a root whenever one exists.
    fn sqrt_shanks(&self) -> Self {
        self.power_unsigned(&((self.modulus() + 1u32) >> 2))
    }

    fn sqrt_tonelli_shanks(&self) -> Option<Self> {
        let one = self.with_value(BigUint::one());
        let p_minus_one = self.modulus() - 1u32;
        let legendre_exponent = &p_minus_one >> 1;

        if self.power_unsigned(&legendre_exponent) != one {
            return None;
        }

        // p - 1 = q * 2^s with q odd
        let s = p_minus_one.trailing_zeros()?;
        let q = &p_minus_one >> s;

        let mut z = self.with_value(BigUint::from(2u32));
        while z.power_unsigned(&legendre_exponent) == one {
            z = z.add(&one).ok()?;
        }

        let mut m = s;
        let mut c = z.power_unsigned(&q);
        let mut t = self.power_unsigned(&q);
        let mut r = self.power_unsigned(&((&q + 1u32) >> 1));

        while t != one {
            let mut i = 0;
            let mut t_pow = t.clone();
            while t_pow != one {
                t_pow = t_pow.square();
                i += 1;
                if i == m {
                    return None;
                }
            }

            let b = c.power_unsigned(&(BigUint::one() << (m - i - 1)));
            m = i;
            c = b.square();
            t = t.mul_unchecked(&c);
            r = r.mul_unchecked(&b);
        }

        Some(r)
    }
}
