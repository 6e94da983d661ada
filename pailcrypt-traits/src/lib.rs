#![warn(missing_docs, unused_imports)]

//! _This is a part of **pailcrypt**. For more information, head to the
//! [pailcrypt](https://crates.io/crates/pailcrypt) crate homepage._
//!
//! General traits for additively homomorphic cryptosystems, together with the secure randomness
//! and uniform sampling layer that all pailcrypt crates draw from.

/// Random number generation and uniform sampling that is consistent with the dependencies'
/// requirements.
pub mod randomness;

/// Concepts expressing the security level or setting of a given primitive or protocol.
pub mod security;

/// General notion of an asymmetric cryptosystem.
pub mod cryptosystems;

/// Homomorphic operations over ciphertexts.
pub mod homomorphic;

/// Errors shared by all pailcrypt crates.
pub mod error;
