/// Error cases arising in sampling and key generation. Out-of-range plaintexts and ciphertexts
/// are not represented here: the operations that consume them document their preconditions and
/// leave the results unspecified when those are violated.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A bit length of zero was requested from the sampler or the prime generator.
    #[error("bit length must be at least 1 but it is {0}")]
    InvalidBitLength(u32),
    /// A byte length of zero was requested from the sampler.
    #[error("byte length must be at least 1 but it is {0}")]
    InvalidByteLength(usize),
    /// The upper bound of a sampling range did not exceed the lower bound.
    #[error("the upper bound of a sampling range must exceed the lower bound")]
    InvalidRange,
    /// A modular inverse required during key derivation does not exist. Under the preconditions
    /// of key generation (distinct primes, exactly sized modulus) this cannot occur and
    /// signifies a bug.
    #[error("a modular inverse required during key generation does not exist; this signifies a bug")]
    KeyGenerationFailure,
}

/// Shorthand for results of sampling and key generation.
pub type Result<T> = std::result::Result<T, Error>;
