//! Arithmetic in the prime field 𝔽ₚ
//!
//! Elements are plain [`BigInt`]s kept in `[0, p)` by [`reduce`]. Division is
//! only ever done through [`modular_inverse`], which relies on Fermat's little
//! theorem and therefore on `p` being prime.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};

/// Reduce `x` into the canonical range `[0, p)`, also for negative `x`
pub fn reduce(x: &BigInt, p: &BigInt) -> BigInt {
    x.mod_floor(p)
}

/// Compute `y` with `x·y ≡ 1 (mod p)` as `x^(p-2) mod p`.
///
/// `p` must be prime. Fails with [`Error::DivisionByZero`] when
/// `x ≡ 0 (mod p)`.
pub fn modular_inverse(p: &BigInt, x: &BigInt) -> Result<BigInt> {
    if p <= &BigInt::one() {
        return Err(Error::param("modulus", "must be a prime greater than 1"));
    }

    let x = reduce(x, p);
    if x.is_zero() {
        return Err(Error::DivisionByZero {
            context: "modular inverse",
        });
    }

    let exponent = p - BigInt::from(2u8);
    debug_assert!(!exponent.is_negative());
    Ok(x.modpow(&exponent, p))
}
