use rug::Integer;
use serde::{Deserialize, Serialize};
use std::ops::Rem;

use pailcrypt_numbertheory::gen_prime;
use pailcrypt_traits::cryptosystems::{
    Associable, AsymmetricCryptosystem, DecryptionKey, EncryptionKey,
};
use pailcrypt_traits::error::{Error, Result};
use pailcrypt_traits::homomorphic::HomomorphicAddition;
use pailcrypt_traits::randomness::{GeneralRng, SecureRng};
use pailcrypt_traits::security::BitsOfSecurity;

/// The Paillier cryptosystem.
#[derive(Copy, Clone)]
pub struct Paillier {
    modulus_size: u32,
    variant: PaillierVariant,
}

/// Selects how the generator and the decryption exponents are derived during key generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaillierVariant {
    /// Draws g as a random element of (Z/n²Z)* of order divisible by n, with
    /// lambda = lcm(p - 1, q - 1).
    Standard,
    /// Sets g = n + 1, which has order n in (Z/n²Z)*, so no generator search is needed. The
    /// decryption exponent simplifies to lambda = (p - 1)(q - 1).
    Simple,
}

/// Public key for the Paillier cryptosystem.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct PaillierPK {
    /// Public modulus n for encryption
    pub n: Integer,
    /// Public generator g for encryption
    pub g: Integer,
    /// The ciphertext group modulus n², derived from n at construction
    pub n_squared: Integer,
}

/// Decryption key for the Paillier cryptosystem. The prime factors of the modulus are retained
/// from key generation, but decryption itself only needs lambda and mu.
pub struct PaillierSK {
    lambda: Integer,
    mu: Integer,
    p: Option<Integer>,
    q: Option<Integer>,
}

/// Ciphertext of the Paillier cryptosystem, which is additively homomorphic.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct PaillierCiphertext {
    /// Encrypted message (Ciphertext)
    pub c: Integer,
}

impl Associable<PaillierPK> for PaillierCiphertext {}

impl Paillier {
    /// Replaces the key generation variant. `setup` selects `PaillierVariant::Standard`.
    pub fn with_variant(self, variant: PaillierVariant) -> Self {
        Paillier { variant, ..self }
    }
}

impl AsymmetricCryptosystem for Paillier {
    type PublicKey = PaillierPK;
    type SecretKey = PaillierSK;

    fn setup(security_param: &BitsOfSecurity) -> Self {
        Paillier {
            modulus_size: security_param.to_public_key_bit_length(),
            variant: PaillierVariant::Standard,
        }
    }

    /// Generates a fresh Paillier keypair.
    /// ```
    /// # use pailcrypt_traits::randomness::GeneralRng;
    /// # use pailcrypt_he::cryptosystems::paillier::Paillier;
    /// # use pailcrypt_traits::security::BitsOfSecurity;
    /// # use pailcrypt_traits::cryptosystems::AsymmetricCryptosystem;
    /// # use rand_core::OsRng;
    /// let mut rng = GeneralRng::new(OsRng);
    /// let paillier = Paillier::setup(&BitsOfSecurity::Other { pk_bits: 512 });
    /// let (public_key, secret_key) = paillier.generate_keys(&mut rng).unwrap();
    /// ```
    fn generate_keys<R: SecureRng>(
        &self,
        rng: &mut GeneralRng<R>,
    ) -> Result<(PaillierPK, PaillierSK)> {
        // Drawing p one bit longer than q makes n = pq land on exactly `modulus_size` bits for
        // most draws; the loop rejects the remaining ones, as well as the (unlikely) case p = q,
        // which would collapse the group structure.
        let (p, q, n) = loop {
            let p = gen_prime(self.modulus_size / 2 + 1, rng)?;
            let q = gen_prime(self.modulus_size / 2, rng)?;
            let n = Integer::from(&p * &q);

            if p != q && n.significant_bits() == self.modulus_size {
                break (p, q, n);
            }
        };

        let n_squared = Integer::from(n.square_ref());
        let p_minus_one = Integer::from(&p - 1);
        let q_minus_one = Integer::from(&q - 1);

        let (g, lambda, mu) = match self.variant {
            PaillierVariant::Simple => {
                let g = Integer::from(&n + 1);
                let lambda = p_minus_one * q_minus_one;
                let mu =
                    Integer::from(lambda.invert_ref(&n).ok_or(Error::KeyGenerationFailure)?);

                (g, lambda, mu)
            }
            PaillierVariant::Standard => {
                let upper = Integer::from(&n - 1);
                let alpha = rng.random_between(&Integer::from(0), &upper)?;
                let beta = rng.random_between(&Integer::from(0), &upper)?;

                let left = Integer::from(&alpha * &n) + 1;
                let right = Integer::from(beta.pow_mod_ref(&n, &n_squared).unwrap());
                let product: Integer = left * right;
                let g: Integer = product.rem(&n_squared);

                let lambda = Integer::from(p_minus_one.lcm_ref(&q_minus_one));
                let g_lambda = Integer::from(g.pow_mod_ref(&lambda, &n_squared).unwrap());
                let l_value = l_function(g_lambda, &n);
                let mu =
                    Integer::from(l_value.invert_ref(&n).ok_or(Error::KeyGenerationFailure)?);

                (g, lambda, mu)
            }
        };

        Ok((
            PaillierPK::new(n, g),
            PaillierSK {
                lambda,
                mu,
                p: Some(p),
                q: Some(q),
            },
        ))
    }
}

impl PaillierPK {
    fn new(n: Integer, g: Integer) -> Self {
        let n_squared = Integer::from(n.square_ref());
        PaillierPK { n, g, n_squared }
    }

    /// The bit length of the public modulus n.
    pub fn bit_length(&self) -> u32 {
        self.n.significant_bits()
    }

    /// Folds any number of ciphertexts into a single one that decrypts to the sum of the
    /// corresponding plaintexts modulo n. The fold is seeded with the multiplicative identity,
    /// so an empty input yields a ciphertext of 0.
    /// ```
    /// # use pailcrypt_traits::randomness::GeneralRng;
    /// # use pailcrypt_he::cryptosystems::paillier::Paillier;
    /// # use pailcrypt_traits::security::BitsOfSecurity;
    /// # use pailcrypt_traits::cryptosystems::{AsymmetricCryptosystem, EncryptionKey, DecryptionKey};
    /// # use rug::Integer;
    /// # use rand_core::OsRng;
    /// # let mut rng = GeneralRng::new(OsRng);
    /// # let paillier = Paillier::setup(&BitsOfSecurity::Other { pk_bits: 512 });
    /// # let (public_key, secret_key) = paillier.generate_keys(&mut rng).unwrap();
    /// let ciphertexts = vec![
    ///     public_key.encrypt_raw(&Integer::from(2), &mut rng),
    ///     public_key.encrypt_raw(&Integer::from(3), &mut rng),
    ///     public_key.encrypt_raw(&Integer::from(5), &mut rng),
    /// ];
    /// let sum = public_key.addition(&ciphertexts);
    /// assert_eq!(10, secret_key.decrypt_raw(&public_key, &sum));
    /// ```
    pub fn addition<'a, I>(&self, ciphertexts: I) -> PaillierCiphertext
    where
        I: IntoIterator<Item = &'a PaillierCiphertext>,
    {
        let c = ciphertexts
            .into_iter()
            .fold(Integer::from(1), |sum, ciphertext| {
                (sum * &ciphertext.c).rem(&self.n_squared)
            });

        PaillierCiphertext { c }
    }
}

impl EncryptionKey for PaillierPK {
    type Input = Integer;
    type Plaintext = Integer;
    type Ciphertext = PaillierCiphertext;

    /// Encrypts a plaintext integer using the Paillier public key. The plaintext must lie in
    /// `[0, n)`; the result is unspecified otherwise. Every call draws a fresh blinding factor,
    /// so two encryptions of the same plaintext differ with overwhelming probability.
    /// ```
    /// # use pailcrypt_traits::randomness::GeneralRng;
    /// # use pailcrypt_he::cryptosystems::paillier::Paillier;
    /// # use pailcrypt_traits::security::BitsOfSecurity;
    /// # use pailcrypt_traits::cryptosystems::{AsymmetricCryptosystem, EncryptionKey};
    /// # use rug::Integer;
    /// # use rand_core::OsRng;
    /// # let mut rng = GeneralRng::new(OsRng);
    /// # let paillier = Paillier::setup(&BitsOfSecurity::Other { pk_bits: 512 });
    /// # let (public_key, secret_key) = paillier.generate_keys(&mut rng).unwrap();
    /// let ciphertext = public_key.encrypt(&Integer::from(5), &mut rng);
    /// ```
    fn encrypt_raw<R: SecureRng>(
        &self,
        plaintext: &Integer,
        rng: &mut GeneralRng<R>,
    ) -> PaillierCiphertext {
        // The blinding factor lies strictly between 0 and n; the bounds themselves would
        // produce degenerate ciphertexts. A generated modulus always exceeds 2, so the range is
        // never empty.
        let upper = Integer::from(&self.n - 1);
        let r = rng.random_between(&Integer::from(1), &upper).unwrap();

        let first = Integer::from(self.g.pow_mod_ref(plaintext, &self.n_squared).unwrap());
        let second = r.secure_pow_mod(&self.n, &self.n_squared);

        PaillierCiphertext {
            c: (first * second).rem(&self.n_squared),
        }
    }
}

impl DecryptionKey<PaillierPK> for PaillierSK {
    /// Decrypts a Paillier ciphertext using the secret key. The ciphertext must lie in
    /// `[0, n²)`; the result is unspecified otherwise.
    /// ```
    /// # use pailcrypt_traits::randomness::GeneralRng;
    /// # use pailcrypt_he::cryptosystems::paillier::Paillier;
    /// # use pailcrypt_traits::security::BitsOfSecurity;
    /// # use pailcrypt_traits::cryptosystems::{AsymmetricCryptosystem, EncryptionKey, DecryptionKey};
    /// # use rug::Integer;
    /// # use rand_core::OsRng;
    /// # let mut rng = GeneralRng::new(OsRng);
    /// # let paillier = Paillier::setup(&BitsOfSecurity::Other { pk_bits: 512 });
    /// # let (public_key, secret_key) = paillier.generate_keys(&mut rng).unwrap();
    /// # let ciphertext = public_key.encrypt(&Integer::from(5), &mut rng);
    /// println!("The decrypted message is {}", secret_key.decrypt(&ciphertext));
    /// // Prints: "The decrypted message is 5".
    /// ```
    fn decrypt_raw(&self, public_key: &PaillierPK, ciphertext: &PaillierCiphertext) -> Integer {
        let inner = Integer::from(
            ciphertext
                .c
                .secure_pow_mod_ref(&self.lambda, &public_key.n_squared),
        );

        (l_function(inner, &public_key.n) * &self.mu).rem(&public_key.n)
    }
}

impl PaillierSK {
    /// The prime factors of the public modulus when they were retained at key generation.
    /// Applications may use them for CRT-style speedups; decryption itself does not need them.
    pub fn factors(&self) -> Option<(&Integer, &Integer)> {
        match (&self.p, &self.q) {
            (Some(p), Some(q)) => Some((p, q)),
            _ => None,
        }
    }
}

impl HomomorphicAddition for PaillierPK {
    fn add(
        &self,
        ciphertext_a: PaillierCiphertext,
        ciphertext_b: PaillierCiphertext,
    ) -> PaillierCiphertext {
        PaillierCiphertext {
            c: (ciphertext_a.c * &ciphertext_b.c).rem(&self.n_squared),
        }
    }

    /// Multiplies a ciphertext by a cleartext scalar. The scalars 0 and 1 are special-cased by
    /// numeric comparison: c^0 is the constant 1 and c^1 is c itself, so returning the naive
    /// exponentiation would reveal those scalars to anyone seeing both ciphertexts. Both paths
    /// re-randomize with a fresh encryption of 0 instead.
    fn mul<R: SecureRng>(
        &self,
        ciphertext: PaillierCiphertext,
        input: Integer,
        rng: &mut GeneralRng<R>,
    ) -> PaillierCiphertext {
        if input == 0 {
            return self.encrypt_raw(&Integer::from(0), rng);
        }

        if input == 1 {
            let fresh_zero = self.encrypt_raw(&Integer::from(0), rng);
            return self.add(ciphertext, fresh_zero);
        }

        PaillierCiphertext {
            c: Integer::from(ciphertext.c.pow_mod_ref(&input, &self.n_squared).unwrap()),
        }
    }
}

/// L(x) = (x - 1) / n. The division is exact for every x in the image of the decryption
/// exponentiation, since x ≡ 1 (mod n) there.
fn l_function(x: Integer, n: &Integer) -> Integer {
    let mut inner = x;
    inner -= 1;
    inner /= n;
    inner
}

#[cfg(test)]
mod tests {
    use rand_core::OsRng;
    use rug::Integer;
    use std::ops::Rem;

    use pailcrypt_traits::cryptosystems::{
        AsymmetricCryptosystem, DecryptionKey, EncryptionKey,
    };
    use pailcrypt_traits::homomorphic::HomomorphicAddition;
    use pailcrypt_traits::randomness::GeneralRng;
    use pailcrypt_traits::security::BitsOfSecurity;

    use crate::cryptosystems::paillier::{Paillier, PaillierVariant};

    fn test_setup() -> Paillier {
        Paillier::setup(&BitsOfSecurity::Other { pk_bits: 512 })
    }

    #[test]
    fn test_encrypt_decrypt() {
        let mut rng = GeneralRng::new(OsRng);

        let paillier = test_setup();
        let (pk, sk) = paillier.generate_keys(&mut rng).unwrap();

        let ciphertext = pk.encrypt(&Integer::from(15), &mut rng);

        assert_eq!(15, sk.decrypt(&ciphertext));
    }

    #[test]
    fn test_encrypt_decrypt_simple_variant() {
        let mut rng = GeneralRng::new(OsRng);

        let paillier = test_setup().with_variant(PaillierVariant::Simple);
        let (pk, sk) = paillier.generate_keys(&mut rng).unwrap();

        let ciphertext = pk.encrypt(&Integer::from(15), &mut rng);

        assert_eq!(15, sk.decrypt(&ciphertext));
    }

    #[test]
    fn test_encrypt_decrypt_random_plaintexts() {
        let mut rng = GeneralRng::new(OsRng);

        for variant in [PaillierVariant::Standard, PaillierVariant::Simple] {
            let paillier = test_setup().with_variant(variant);
            let (pk, sk) = paillier.generate_keys(&mut rng).unwrap();

            let upper = Integer::from(&pk.n - 1);
            for _ in 0..8 {
                let plaintext = rng.random_between(&Integer::from(0), &upper).unwrap();
                let ciphertext = pk.encrypt(&plaintext, &mut rng);

                assert_eq!(plaintext, sk.decrypt(&ciphertext));
            }
        }
    }

    #[test]
    fn test_encrypt_is_randomized() {
        let mut rng = GeneralRng::new(OsRng);

        let paillier = test_setup();
        let (pk, _) = paillier.generate_keys(&mut rng).unwrap();

        let first = pk.encrypt_raw(&Integer::from(21), &mut rng);
        let second = pk.encrypt_raw(&Integer::from(21), &mut rng);

        assert_ne!(first, second);
    }

    #[test]
    fn test_homomorphic_add() {
        let mut rng = GeneralRng::new(OsRng);

        let paillier = test_setup();
        let (pk, sk) = paillier.generate_keys(&mut rng).unwrap();

        let ciphertext_a = pk.encrypt(&Integer::from(7), &mut rng);
        let ciphertext_b = pk.encrypt(&Integer::from(7), &mut rng);
        let ciphertext_twice = ciphertext_a + ciphertext_b;

        assert_eq!(Integer::from(14), sk.decrypt(&ciphertext_twice));
    }

    #[test]
    fn test_addition_of_many_ciphertexts() {
        let mut rng = GeneralRng::new(OsRng);

        let paillier = test_setup();
        let (pk, sk) = paillier.generate_keys(&mut rng).unwrap();

        let upper = Integer::from(&pk.n - 1);
        let plaintexts: Vec<Integer> = (0..8)
            .map(|_| rng.random_between(&Integer::from(0), &upper).unwrap())
            .collect();
        let ciphertexts: Vec<_> = plaintexts
            .iter()
            .map(|plaintext| pk.encrypt_raw(plaintext, &mut rng))
            .collect();

        let expected = plaintexts
            .iter()
            .fold(Integer::from(0), |sum, plaintext| {
                (sum + plaintext).rem(&pk.n)
            });

        let encrypted_sum = pk.addition(&ciphertexts);
        assert_eq!(expected, sk.decrypt_raw(&pk, &encrypted_sum));
    }

    #[test]
    fn test_addition_of_no_ciphertexts_is_zero() {
        let mut rng = GeneralRng::new(OsRng);

        let paillier = test_setup();
        let (pk, sk) = paillier.generate_keys(&mut rng).unwrap();

        let encrypted_sum = pk.addition(&[]);
        assert_eq!(0, sk.decrypt_raw(&pk, &encrypted_sum));
    }

    #[test]
    fn test_homomorphic_scalar_mul() {
        let mut rng = GeneralRng::new(OsRng);

        let paillier = test_setup();
        let (pk, sk) = paillier.generate_keys(&mut rng).unwrap();

        let ciphertext = pk.encrypt(&Integer::from(9), &mut rng);
        let ciphertext_sixteen = ciphertext.mul(Integer::from(16), &mut rng);

        assert_eq!(144, sk.decrypt(&ciphertext_sixteen));
    }

    #[test]
    fn test_scalar_mul_by_zero_rerandomizes() {
        let mut rng = GeneralRng::new(OsRng);

        let paillier = test_setup();
        let (pk, sk) = paillier.generate_keys(&mut rng).unwrap();

        let ciphertext = pk.encrypt_raw(&Integer::from(10), &mut rng);

        let first = pk.mul(ciphertext.clone(), Integer::from(0), &mut rng);
        let second = pk.mul(ciphertext, Integer::from(0), &mut rng);

        // The naive c^0 mod n² would be the constant 1 for every input.
        assert_ne!(first.c, 1);
        assert_ne!(first, second);
        assert_eq!(0, sk.decrypt_raw(&pk, &first));
        assert_eq!(0, sk.decrypt_raw(&pk, &second));
    }

    #[test]
    fn test_scalar_mul_by_one_is_unlinkable() {
        let mut rng = GeneralRng::new(OsRng);

        let paillier = test_setup();
        let (pk, sk) = paillier.generate_keys(&mut rng).unwrap();

        let ciphertext = pk.encrypt_raw(&Integer::from(10), &mut rng);
        let rerandomized = pk.mul(ciphertext.clone(), Integer::from(1), &mut rng);

        // The naive c^1 mod n² would return the input unchanged.
        assert_ne!(ciphertext, rerandomized);
        assert_eq!(10, sk.decrypt_raw(&pk, &rerandomized));
    }

    #[test]
    fn test_modulus_has_exact_bit_length() {
        let mut rng = GeneralRng::new(OsRng);

        for bit_length in [512u32, 1024] {
            let paillier = Paillier::setup(&BitsOfSecurity::Other {
                pk_bits: bit_length,
            });
            let (pk, sk) = paillier.generate_keys(&mut rng).unwrap();

            assert_eq!(pk.bit_length(), bit_length);

            let (p, q) = sk.factors().unwrap();
            assert_ne!(p, q);
            assert_eq!(Integer::from(p * q), pk.n);
        }
    }

    #[test]
    fn test_scenario_multiply_encrypted_ten() {
        let mut rng = GeneralRng::new(OsRng);

        let paillier = Paillier::setup(&BitsOfSecurity::Other { pk_bits: 1024 });
        let (pk, sk) = paillier.generate_keys(&mut rng).unwrap();

        let ciphertext = pk.encrypt_raw(&Integer::from(10), &mut rng);

        let times_zero = pk.mul(ciphertext.clone(), Integer::from(0), &mut rng);
        assert_ne!(times_zero.c, 1);
        assert_eq!(0, sk.decrypt_raw(&pk, &times_zero));

        let times_one = pk.mul(ciphertext.clone(), Integer::from(1), &mut rng);
        assert_ne!(times_one, ciphertext);
        assert_eq!(10, sk.decrypt_raw(&pk, &times_one));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut rng = GeneralRng::new(OsRng);

        let paillier = test_setup();
        let (pk, _) = paillier.generate_keys(&mut rng).unwrap();
        let ciphertext = pk.encrypt_raw(&Integer::from(42), &mut rng);

        let pk_bytes = bincode::serialize(&pk).unwrap();
        let ciphertext_bytes = bincode::serialize(&ciphertext).unwrap();

        assert_eq!(pk, bincode::deserialize(&pk_bytes).unwrap());
        assert_eq!(ciphertext, bincode::deserialize(&ciphertext_bytes).unwrap());
    }
}
