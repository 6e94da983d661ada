#![warn(missing_docs, unused_imports)]

//! _This is a part of **pailcrypt**. For more information, head to the
//! [pailcrypt](https://crates.io/crates/pailcrypt) crate homepage._
//!
//! Uniformly random probable-prime generation on top of the pailcrypt sampling layer.

use rug::integer::IsPrime;
use rug::Integer;

use pailcrypt_traits::error::{Error, Result};
use pailcrypt_traits::randomness::{GeneralRng, SecureRng};

/// Miller-Rabin rounds applied to each candidate by default. A composite survives one round
/// with probability at most 1/4, so the false-positive probability is bounded by 4^-16.
const MILLER_RABIN_ROUNDS: u32 = 16;

/// Generates a uniformly random probable prime number of a given bit length. So, the number
/// contains `bit_length` bits, of which the first and the last bit are always 1.
pub fn gen_prime<R: SecureRng>(bit_length: u32, rng: &mut GeneralRng<R>) -> Result<Integer> {
    gen_prime_with_rounds(bit_length, MILLER_RABIN_ROUNDS, rng)
}

/// Generates a uniformly random probable prime of exactly `bit_length` bits, testing each odd
/// candidate with the given number of Miller-Rabin rounds. The search terminates
/// probabilistically; by the prime number theorem the expected number of candidates is in the
/// order of `bit_length`.
pub fn gen_prime_with_rounds<R: SecureRng>(
    bit_length: u32,
    rounds: u32,
    rng: &mut GeneralRng<R>,
) -> Result<Integer> {
    if bit_length < 1 {
        return Err(Error::InvalidBitLength(bit_length));
    }

    loop {
        let mut candidate = rng.random_bits(bit_length, true)?;
        candidate.set_bit(0, true);

        if candidate.is_probably_prime(rounds) != IsPrime::No {
            return Ok(candidate);
        }
    }
}
