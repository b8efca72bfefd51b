//! DISCLAIMER: This module is a toy example of ElGamal key generation in
//! pure Rust. It is *EXCLUSIVELY* for demonstration and educational
//! purposes. Absolutely DO NOT use it for real cryptographic or
//! security-sensitive operations. It is not audited, not vetted, and
//! very likely insecure in practice.
//!
//! If you need ElGamal or any cryptographic operations in production,
//! please use a vetted, well-reviewed cryptography library.

use log::debug;
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

use crate::arith::mod_exp;
use crate::error::{ElGamalError, Result};
use crate::group::ElGamalParams;

/// A structure holding the ElGamal public key:
/// - `p` and `g` from the group parameters.
/// - `y = g^x mod p`, where `x` is the secret exponent.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone)]
pub struct ElGamalPublicKey {
    pub p: BigUint,
    pub g: BigUint,
    pub y: BigUint,
}

/// A structure holding the ElGamal private key:
/// - the same `p`, `g`,
/// - plus the secret exponent `x`.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone)]
pub struct ElGamalPrivateKey {
    pub p: BigUint,
    pub g: BigUint,
    pub x: BigUint,
}

/// Combined key pair, storing both public and private halves together.
/// This can be split if needed.
#[derive(Debug, Clone)]
pub struct ElGamalKeyPair {
    pub public: ElGamalPublicKey,
    pub private: ElGamalPrivateKey,
}

impl ElGamalKeyPair {
    /// Derives the key pair for a caller-chosen private exponent `x`.
    ///
    /// Useful for importing an existing key or for deterministic
    /// derivation in tests. `x` must lie in `[1, p-2]`.
    pub fn from_secret(params: &ElGamalParams, x: BigUint) -> Result<Self> {
        let p = &params.p;
        if *p < BigUint::from(3u32) {
            return Err(ElGamalError::invalid_modulus(format!(
                "modulus must be at least 3 for key generation, got {}",
                p
            )));
        }
        if x.is_zero() || x >= p - BigUint::one() {
            return Err(ElGamalError::range_violation(format!(
                "private exponent must lie in [1, p-2], got {}",
                x
            )));
        }

        let y = mod_exp(&params.g, &x, p);
        let public = ElGamalPublicKey {
            p: p.clone(),
            g: params.g.clone(),
            y,
        };
        let private = ElGamalPrivateKey {
            p: p.clone(),
            g: params.g.clone(),
            x,
        };
        Ok(ElGamalKeyPair { public, private })
    }
}

/// Generates an ElGamal key pair from the supplied group parameters.
///
/// Draws the private exponent `x` uniformly from `[1, p-2]` using the
/// caller's `rng` and derives the public value `y = g^x mod p`.
///
/// # Returns
/// - `Err(InvalidModulus)` when `p < 3`, which leaves no room for a
///   private exponent.
///
/// # Warnings
/// - No primality or generator validation is performed here.
/// - DO NOT USE FOR REAL CRYPTOGRAPHY.
pub fn generate_keys<R: Rng + ?Sized>(
    params: &ElGamalParams,
    rng: &mut R,
) -> Result<ElGamalKeyPair> {
    let p = &params.p;
    if *p < BigUint::from(3u32) {
        return Err(ElGamalError::invalid_modulus(format!(
            "modulus must be at least 3 for key generation, got {}",
            p
        )));
    }

    // x in [1, p-2]; the upper bound of the draw is exclusive
    let x = rng.gen_biguint_range(&BigUint::one(), &(p - BigUint::one()));
    let y = mod_exp(&params.g, &x, p);
    debug!("generated key pair mod {} ({} bits)", p, p.bits());

    let public = ElGamalPublicKey {
        p: p.clone(),
        g: params.g.clone(),
        y,
    };
    let private = ElGamalPrivateKey {
        p: p.clone(),
        g: params.g.clone(),
        x,
    };
    Ok(ElGamalKeyPair { public, private })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use crate::group::find_primitive_root;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn params_23() -> ElGamalParams {
        ElGamalParams::new(big(23), big(5))
    }

    #[test]
    fn public_value_matches_private_exponent() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let params = params_23();
        for _ in 0..50 {
            let pair = generate_keys(&params, &mut rng).unwrap();
            assert!(!pair.private.x.is_zero(), "exponent must be nonzero");
            assert!(pair.private.x <= big(21), "exponent must be at most p-2");
            assert_eq!(
                pair.public.y,
                mod_exp(&params.g, &pair.private.x, &params.p)
            );
        }
    }

    #[test]
    fn same_seed_same_key_pair() {
        let params = params_23();
        let mut rng_a = ChaCha20Rng::seed_from_u64(7);
        let mut rng_b = ChaCha20Rng::seed_from_u64(7);
        let a = generate_keys(&params, &mut rng_a).unwrap();
        let b = generate_keys(&params, &mut rng_b).unwrap();
        assert_eq!(a.private.x, b.private.x);
        assert_eq!(a.public.y, b.public.y);
    }

    #[test]
    fn from_secret_matches_known_vector() {
        let pair = ElGamalKeyPair::from_secret(&params_23(), big(6)).unwrap();
        assert_eq!(pair.public.y, big(8));
        assert_eq!(pair.private.x, big(6));
        assert_eq!(pair.public.p, big(23));
        assert_eq!(pair.public.g, big(5));
    }

    #[test]
    fn from_secret_rejects_out_of_range_exponents() {
        let params = params_23();
        assert!(matches!(
            ElGamalKeyPair::from_secret(&params, big(0)),
            Err(ElGamalError::RangeViolation(_))
        ));
        assert!(matches!(
            ElGamalKeyPair::from_secret(&params, big(22)),
            Err(ElGamalError::RangeViolation(_))
        ));
        assert!(ElGamalKeyPair::from_secret(&params, big(21)).is_ok());
    }

    #[test]
    fn tiny_moduli_are_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let trivial = ElGamalParams::new(big(2), big(1));
        assert!(matches!(
            generate_keys(&trivial, &mut rng),
            Err(ElGamalError::InvalidModulus(_))
        ));
        assert!(matches!(
            ElGamalKeyPair::from_secret(&trivial, big(1)),
            Err(ElGamalError::InvalidModulus(_))
        ));
    }

    #[test]
    fn key_generation_over_a_moderate_prime() {
        let p = big(1_000_000_007);
        let g = find_primitive_root(&p).unwrap();
        let params = ElGamalParams::new(p, g);
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        let pair = generate_keys(&params, &mut rng).unwrap();
        assert_eq!(
            pair.public.y,
            mod_exp(&pair.public.g, &pair.private.x, &pair.public.p)
        );
    }
}
