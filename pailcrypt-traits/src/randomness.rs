use rand_core::{CryptoRng, RngCore};
use rug::integer::Order;
use rug::Integer;

use crate::error::{Error, Result};

/// Marker for cryptographically secure RNGs. Automatically implemented for every RNG that is
/// both `RngCore` and `CryptoRng`.
pub trait SecureRng: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng> SecureRng for T {}

/// General RNG that can be used for all dependencies. Wrapping the RNG ensures at the type
/// level that all consumed randomness comes from a cryptographically secure source, and carries
/// the uniform sampling operations built on top of raw byte draws.
pub struct GeneralRng<R: SecureRng> {
    rng: R,
}

impl<R: SecureRng> GeneralRng<R> {
    /// Creates a new `GeneralRng` based on an RNG that implements both `RngCore` and `CryptoRng`
    /// to ensure that the underlying RNG is indeed cryptographically secure.
    pub fn new(rng: R) -> Self {
        GeneralRng { rng }
    }

    /// Exposes the underlying RNG.
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Fills a fresh buffer of `byte_length` bytes from the underlying CSPRNG.
    pub fn random_bytes(&mut self, byte_length: usize) -> Result<Vec<u8>> {
        if byte_length < 1 {
            return Err(Error::InvalidByteLength(byte_length));
        }

        let mut buffer = vec![0u8; byte_length];
        self.rng.fill_bytes(&mut buffer);
        Ok(buffer)
    }

    /// Draws a uniformly random non-negative integer of at most `bit_length` significant bits.
    /// If `force_length` is set, the top bit is also turned on, so that the result has exactly
    /// `bit_length` significant bits.
    pub fn random_bits(&mut self, bit_length: u32, force_length: bool) -> Result<Integer> {
        if bit_length < 1 {
            return Err(Error::InvalidBitLength(bit_length));
        }

        let byte_length = ((bit_length + 7) / 8) as usize;
        let mut bytes = self.random_bytes(byte_length)?;

        // The leading byte carries up to 7 bits beyond `bit_length`; mask them off.
        let excess_bits = byte_length as u32 * 8 - bit_length;
        bytes[0] &= 0xff >> excess_bits;
        if force_length {
            bytes[0] |= 1 << (7 - excess_bits);
        }

        Ok(Integer::from_digits(&bytes, Order::Msf))
    }

    /// Draws a uniformly random integer in the inclusive range `[min, max]`. Rejection sampling:
    /// draws of the interval's bit length are discarded until one falls inside the interval, so
    /// no result is biased by a modular reduction. The expected number of draws is below 2.
    pub fn random_between(&mut self, min: &Integer, max: &Integer) -> Result<Integer> {
        if max <= min {
            return Err(Error::InvalidRange);
        }

        let interval = Integer::from(max - min);
        let bit_length = interval.significant_bits();

        loop {
            let draw = self.random_bits(bit_length, false)?;
            if draw <= interval {
                return Ok(draw + min);
            }
        }
    }
}
