pub mod arith;
pub mod cipher;
pub mod error;
pub mod group;
pub mod keys;

pub use cipher::{decrypt, encrypt, encrypt_with_ephemeral, ElGamalCiphertext};
pub use error::{ElGamalError, Result};
pub use group::{find_primitive_root, is_generator, ElGamalParams};
pub use keys::{generate_keys, ElGamalKeyPair, ElGamalPrivateKey, ElGamalPublicKey};
