use num_bigint::BigUint;
use rand::thread_rng;

use elgamal::{arith, decrypt, encrypt, find_primitive_root, generate_keys, ElGamalParams};

fn main() -> elgamal::Result<()> {
    let mut rng = thread_rng();

    let p = BigUint::from(23u32);
    println!("modulus p = {}", p);
    println!(
        "p passes Miller-Rabin: {}",
        arith::is_probable_prime(&p, 20, &mut rng)
    );

    let g = find_primitive_root(&p)?;
    println!("smallest primitive root g = {}", g);

    let params = ElGamalParams::new(p, g);
    let keys = generate_keys(&params, &mut rng)?;
    println!("private exponent x = {}", keys.private.x);
    println!("public value y = {}", keys.public.y);

    let plaintext = BigUint::from(15u32);
    println!("plaintext m = {}", plaintext);

    let ciphertext = encrypt(&keys.public, &plaintext, &mut rng)?;
    println!("ciphertext c1 = {}", ciphertext.c1);
    println!("ciphertext c2 = {}", ciphertext.c2);

    let recovered = decrypt(&keys.private, &ciphertext)?;
    println!("recovered m = {}", recovered);
    println!(
        "round trip {}",
        if recovered == plaintext {
            "succeeded"
        } else {
            "failed"
        }
    );

    Ok(())
}
