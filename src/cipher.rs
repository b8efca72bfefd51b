//! DISCLAIMER: This module is a toy example of ElGamal encryption and
//! decryption in pure Rust. It is *EXCLUSIVELY* for demonstration and
//! educational purposes. Absolutely DO NOT use it for real cryptographic
//! or security-sensitive operations. It is not audited, not vetted, and
//! very likely insecure in practice.
//!
//! If you need ElGamal or any cryptographic operations in production,
//! please use a vetted, well-reviewed cryptography library.

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

use crate::arith::{fermat_inverse, mod_exp};
use crate::error::{ElGamalError, Result};
use crate::keys::{ElGamalPrivateKey, ElGamalPublicKey};

/// A ciphertext in ElGamal encryption consists of two values, `(c1, c2)`.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone)]
pub struct ElGamalCiphertext {
    pub c1: BigUint,
    pub c2: BigUint,
}

/// Encrypts a plaintext field element under an ElGamal public key.
///
/// Draws a fresh ephemeral exponent `k` in `[1, p-2]` from the caller's
/// `rng` on every call, so encrypting the same plaintext twice yields
/// different ciphertexts.
///
/// # Arguments
/// - `public_key`: the ElGamal public key `(p, g, y)`.
/// - `plaintext`: a field element in `[0, p-1]`.
/// - `rng`: source of the ephemeral exponent.
///
/// # Returns
/// An [`ElGamalCiphertext`] `(c1, c2)` where:
/// `c1 = g^k mod p`,
/// `c2 = plaintext * y^k mod p`.
///
/// # Warnings
/// - Raw ElGamal with no padding or message encoding; the caller maps
///   messages onto field elements.
/// - DO NOT USE FOR REAL CRYPTOGRAPHY.
pub fn encrypt<R: Rng + ?Sized>(
    public_key: &ElGamalPublicKey,
    plaintext: &BigUint,
    rng: &mut R,
) -> Result<ElGamalCiphertext> {
    let p = &public_key.p;
    if *p < BigUint::from(3u32) {
        return Err(ElGamalError::invalid_modulus(format!(
            "modulus must be at least 3 for encryption, got {}",
            p
        )));
    }

    // fresh k in [1, p-2] per call; the upper bound of the draw is exclusive
    let k = rng.gen_biguint_range(&BigUint::one(), &(p - BigUint::one()));
    encrypt_with_ephemeral(public_key, plaintext, &k)
}

/// Encrypts with a caller-supplied ephemeral exponent `k` in `[1, p-2]`.
///
/// Deterministic body of [`encrypt`]; reusing `k` across messages leaks
/// their ratio, so outside of tests and protocol replays prefer
/// [`encrypt`].
pub fn encrypt_with_ephemeral(
    public_key: &ElGamalPublicKey,
    plaintext: &BigUint,
    k: &BigUint,
) -> Result<ElGamalCiphertext> {
    let p = &public_key.p;
    if *p < BigUint::from(3u32) {
        return Err(ElGamalError::invalid_modulus(format!(
            "modulus must be at least 3 for encryption, got {}",
            p
        )));
    }
    if plaintext >= p {
        return Err(ElGamalError::range_violation(format!(
            "plaintext must lie in [0, p-1], got {}",
            plaintext
        )));
    }
    if k.is_zero() || *k >= p - BigUint::one() {
        return Err(ElGamalError::range_violation(format!(
            "ephemeral exponent must lie in [1, p-2], got {}",
            k
        )));
    }

    // c1 = g^k mod p
    let c1 = mod_exp(&public_key.g, k, p);
    // c2 = plaintext * y^k mod p
    let shared = mod_exp(&public_key.y, k, p);
    let c2 = (plaintext * &shared) % p;

    Ok(ElGamalCiphertext { c1, c2 })
}

/// Decrypts an ElGamal ciphertext `(c1, c2)` with the private exponent.
///
/// Reconstructs the sender's shared secret as `s = c1^x mod p` and
/// inverts it by Fermat's little theorem, so the result is only
/// meaningful when `p` is prime.
///
/// # Returns
/// The plaintext `c2 * (c1^x)^(-1) mod p`, or:
/// - `Err(RangeViolation)` if a ciphertext component is not in
///   `[0, p-1]`.
/// - `Err(InvalidCiphertext)` if `c1` is congruent to zero, which has
///   no invertible shared secret.
///
/// # Warnings
/// - Raw ElGamal decryption with no side-channel protections.
/// - DO NOT USE FOR REAL CRYPTOGRAPHY.
pub fn decrypt(
    private_key: &ElGamalPrivateKey,
    ciphertext: &ElGamalCiphertext,
) -> Result<BigUint> {
    let p = &private_key.p;
    if ciphertext.c1 >= *p || ciphertext.c2 >= *p {
        return Err(ElGamalError::range_violation(format!(
            "ciphertext components must lie in [0, p-1], got ({}, {})",
            ciphertext.c1, ciphertext.c2
        )));
    }

    // s = c1^x mod p reconstructs the sender's shared secret
    let s = mod_exp(&ciphertext.c1, &private_key.x, p);
    let s_inv = fermat_inverse(&s, p).ok_or_else(|| {
        ElGamalError::invalid_ciphertext("c1 is congruent to zero, shared secret has no inverse")
    })?;

    // plaintext = c2 * s^(-1) mod p
    Ok((&ciphertext.c2 * &s_inv) % p)
}
