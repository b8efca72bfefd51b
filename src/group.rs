//! DISCLAIMER: This module is a toy example of ElGamal group-parameter
//! resolution in pure Rust. It is *EXCLUSIVELY* for demonstration and
//! educational purposes. Absolutely DO NOT use it for real cryptographic
//! or security-sensitive operations. It is not audited, not vetted, and
//! very likely insecure in practice.
//!
//! If you need ElGamal or any cryptographic operations in production,
//! please use a vetted, well-reviewed cryptography library.

use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::arith::{mod_exp, prime_factors};
use crate::error::{ElGamalError, Result};

/// ElGamal group parameters: a prime modulus `p` and a generator `g` of
/// the multiplicative group modulo `p`.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone)]
pub struct ElGamalParams {
    /// Prime modulus. Primality is the caller's responsibility; see
    /// [`crate::arith::is_probable_prime`] for an up-front guard.
    pub p: BigUint,
    /// Generator of the multiplicative group modulo `p`.
    pub g: BigUint,
}

impl ElGamalParams {
    /// Bundles a caller-supplied modulus and generator, unvalidated.
    pub fn new(p: BigUint, g: BigUint) -> Self {
        ElGamalParams { p, g }
    }

    /// Resolves parameters for the prime `p` by searching for its
    /// smallest primitive root.
    pub fn resolve(p: BigUint) -> Result<Self> {
        let g = find_primitive_root(&p)?;
        Ok(ElGamalParams { p, g })
    }
}

/// Finds the smallest primitive root modulo the prime `p`.
///
/// Computes `phi = p - 1`, factors it by trial division, and scans
/// candidates `2..p` in ascending order, rejecting any candidate `r`
/// with `r^(phi/f) == 1 mod p` for some prime factor `f` of `phi`. The
/// first survivor has order exactly `phi` and generates the full
/// multiplicative group.
///
/// # Returns
/// - `Ok(1)` for `p = 2` (the group mod 2 is trivial).
/// - `Ok(g)` with the smallest generator for larger primes.
/// - `Err(InvalidModulus)` for `p < 2`.
/// - `Err(GeneratorNotFound)` if the scan exhausts `2..p`; this cannot
///   happen for a prime `p` and signals a malformed modulus.
///
/// # Warnings
/// - Trial-division factoring costs `O(sqrt(p))` and the scan repeats
///   modular exponentiations per candidate; only practical for small
///   and moderate `p`, not cryptographic-size primes.
/// - If `p` is not prime, the scan may accept a candidate that
///   generates nothing of interest. Validate `p` first.
pub fn find_primitive_root(p: &BigUint) -> Result<BigUint> {
    let two = BigUint::from(2u32);
    if *p < two {
        return Err(ElGamalError::invalid_modulus(format!(
            "modulus must be at least 2, got {}",
            p
        )));
    }
    if *p == two {
        return Ok(BigUint::one());
    }

    let phi = p - BigUint::one();
    let factors = prime_factors(&phi);
    debug!(
        "searching primitive root mod {}: phi = {} with {} distinct prime factors",
        p,
        phi,
        factors.len()
    );
    let exponents: Vec<BigUint> = factors.iter().map(|f| &phi / f).collect();

    let mut candidate = two;
    while candidate < *p {
        if exponents
            .iter()
            .all(|e| !mod_exp(&candidate, e, p).is_one())
        {
            trace!("primitive root mod {}: {}", p, candidate);
            return Ok(candidate);
        }
        candidate += 1u32;
    }
    Err(ElGamalError::GeneratorNotFound(p.to_string()))
}

/// Checks that `params.g` generates the full multiplicative group
/// modulo `params.p`, i.e. has multiplicative order exactly `p - 1`.
///
/// Lagrange check: `g^phi == 1` and `g^(phi/f) != 1` for every prime
/// factor `f` of `phi = p - 1`. For `p = 2` only `g = 1` passes.
pub fn is_generator(params: &ElGamalParams) -> bool {
    let p = &params.p;
    let g = &params.g;
    let two = BigUint::from(2u32);
    if *p < two || g.is_zero() || g >= p {
        return false;
    }
    if *p == two {
        return g.is_one();
    }

    let phi = p - BigUint::one();
    if !mod_exp(g, &phi, p).is_one() {
        return false;
    }
    prime_factors(&phi)
        .iter()
        .all(|f| !mod_exp(g, &(&phi / f), p).is_one())
}
