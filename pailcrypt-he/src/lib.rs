#![warn(missing_docs, unused_imports)]

//! _This is a part of **pailcrypt**. For more information, head to the
//! [pailcrypt](https://crates.io/crates/pailcrypt) crate homepage._
//!
//! The Paillier additively homomorphic cryptosystem: key generation for the standard and the
//! simplified generator scheme, encryption, decryption, homomorphic addition of ciphertexts and
//! pseudo-homomorphic multiplication by a cleartext scalar.

/// Additively homomorphic cryptosystems with one key.
pub mod cryptosystems;

pub use pailcrypt_traits;
