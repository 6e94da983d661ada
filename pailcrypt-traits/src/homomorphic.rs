use std::ops::Add;

use crate::cryptosystems::{Associable, AssociatedCiphertext, EncryptionKey};
use crate::randomness::{GeneralRng, SecureRng};

/// Homomorphic addition over ciphertexts, with pseudo-homomorphic multiplication by a cleartext
/// scalar. Scalar multiplication takes an RNG because multiplying by 0 or 1 must produce a
/// freshly randomized ciphertext; the naive exponentiation would leak those scalars.
pub trait HomomorphicAddition: EncryptionKey {
    /// Combines two ciphertexts into one that decrypts to the sum of the two plaintexts.
    fn add(&self, ciphertext_a: Self::Ciphertext, ciphertext_b: Self::Ciphertext) -> Self::Ciphertext;

    /// Multiplies a ciphertext by a cleartext scalar, so that the result decrypts to the scaled
    /// plaintext.
    fn mul<R: SecureRng>(
        &self,
        ciphertext: Self::Ciphertext,
        input: Self::Input,
        rng: &mut GeneralRng<R>,
    ) -> Self::Ciphertext;
}

impl<'pk, C: Associable<PK>, PK: EncryptionKey<Ciphertext = C> + HomomorphicAddition> Add
    for AssociatedCiphertext<'pk, C, PK>
{
    type Output = AssociatedCiphertext<'pk, C, PK>;

    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.public_key, rhs.public_key);
        self.public_key
            .add(self.ciphertext, rhs.ciphertext)
            .associate(self.public_key)
    }
}

impl<'pk, C: Associable<PK>, PK: EncryptionKey<Ciphertext = C> + HomomorphicAddition>
    AssociatedCiphertext<'pk, C, PK>
{
    /// Multiplies this ciphertext by a cleartext scalar. There is no `Mul` operator overload
    /// because an operator cannot thread the RNG through.
    pub fn mul<R: SecureRng>(self, scalar: PK::Input, rng: &mut GeneralRng<R>) -> Self {
        self.public_key
            .mul(self.ciphertext, scalar, rng)
            .associate(self.public_key)
    }
}
