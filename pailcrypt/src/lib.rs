#![warn(missing_docs, unused_imports)]

//! Building blocks for computing sums and scalar products over encrypted integers without
//! decrypting intermediate values, based on the Paillier cryptosystem: secure aggregation,
//! voting tallies, private statistics.
//!
//! ```
//! use pailcrypt::cryptosystems::paillier::Paillier;
//! use pailcrypt::pailcrypt_traits::cryptosystems::{
//!     AsymmetricCryptosystem, DecryptionKey, EncryptionKey,
//! };
//! use pailcrypt::pailcrypt_traits::randomness::GeneralRng;
//! use pailcrypt::pailcrypt_traits::security::BitsOfSecurity;
//! use rand_core::OsRng;
//! use rug::Integer;
//!
//! let mut rng = GeneralRng::new(OsRng);
//! let paillier = Paillier::setup(&BitsOfSecurity::Other { pk_bits: 512 });
//! let (public_key, secret_key) = paillier.generate_keys(&mut rng).unwrap();
//!
//! let tally = public_key.addition(&[
//!     public_key.encrypt_raw(&Integer::from(4), &mut rng),
//!     public_key.encrypt_raw(&Integer::from(9), &mut rng),
//! ]);
//! assert_eq!(13, secret_key.decrypt_raw(&public_key, &tally));
//! ```

pub use pailcrypt_he::cryptosystems;
pub use pailcrypt_numbertheory;
pub use pailcrypt_traits;
