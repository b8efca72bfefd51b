//! Modular arithmetic and primality helpers shared by the ElGamal
//! operations.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

/// Modular exponentiation: `base^exp mod modulus`.
///
/// Square-and-multiply, `O(log exp)` modular multiplications. Panics if
/// `modulus` is zero.
pub fn mod_exp(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exp, modulus)
}

/// Modular inverse of `a` modulo the prime `p`, via Fermat's little
/// theorem: `a^(p-2) mod p`.
///
/// Returns `None` when `a` is congruent to zero mod `p`, which has no
/// inverse. The result is only meaningful when `p` is prime. Panics if
/// `p` is zero.
pub fn fermat_inverse(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let reduced = a % p;
    if reduced.is_zero() {
        return None;
    }
    let exp = p - BigUint::from(2u32);
    Some(reduced.modpow(&exp, p))
}

/// Distinct prime factors of `n` in ascending order, by trial division
/// up to the square root of `n`.
///
/// Returns an empty vector for `n < 2`.
pub fn prime_factors(n: &BigUint) -> Vec<BigUint> {
    let mut factors = Vec::new();
    let mut remaining = n.clone();
    let mut divisor = BigUint::from(2u32);
    while &divisor * &divisor <= remaining {
        if (&remaining % &divisor).is_zero() {
            factors.push(divisor.clone());
            while (&remaining % &divisor).is_zero() {
                remaining /= &divisor;
            }
        }
        divisor += 1u32;
    }
    if remaining > BigUint::one() {
        factors.push(remaining);
    }
    factors
}

/// Miller-Rabin probabilistic primality test with `rounds` random
/// witnesses drawn from `rng`.
///
/// A `true` result means `n` is prime with probability at least
/// `1 - 4^(-rounds)`; `false` means `n` is certainly composite. Intended
/// as an up-front guard on caller-supplied moduli; none of the cipher
/// operations run it implicitly.
pub fn is_probable_prime<R: Rng + ?Sized>(n: &BigUint, rounds: u32, rng: &mut R) -> bool {
    let two = BigUint::from(2u32);
    if *n < two {
        return false;
    }
    if *n == two || *n == BigUint::from(3u32) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // n - 1 = d * 2^s with d odd
    let n_minus_one = n - BigUint::one();
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d /= 2u32;
        s += 1;
    }

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
