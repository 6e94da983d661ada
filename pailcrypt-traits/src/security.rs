/// The number of bits of security as compared to the AES cryptosystem. Check
/// <https://www.keylength.com/en/4/> for recommendations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BitsOfSecurity {
    /// Equivalent to the security of the 2TDEA cryptosystem. Not considered secure; only kept
    /// for interoperating with legacy parameters.
    AES80,
    /// This level of security is expected to be safe until 2030.
    AES112,
    /// Matches 128 bits of security in the AES cryptosystem, expected to be safe until 2030 &
    /// beyond.
    AES128,
    /// Matches 192 bits of security in the AES cryptosystem.
    AES192,
    /// Matches 256 bits of security in the AES cryptosystem.
    AES256,
    /// An explicit public key modulus size. Any number lower than 1024 is considered extremely
    /// insecure; 2048 is the recommended minimum for real use.
    Other {
        /// The number of bits in a public key (factoring) modulus.
        pk_bits: u32,
    },
}

impl BitsOfSecurity {
    /// Returns the required modulus size for a given symmetric security level in the asymmetric
    /// setting.
    pub fn to_public_key_bit_length(&self) -> u32 {
        match self {
            Self::AES80 => 1024,
            Self::AES112 => 2048,
            Self::AES128 => 3072,
            Self::AES192 => 7680,
            Self::AES256 => 15360,
            Self::Other { pk_bits } => *pk_bits,
        }
    }
}

impl Default for BitsOfSecurity {
    fn default() -> Self {
        Self::AES128
    }
}

#[cfg(test)]
mod tests {
    use crate::security::BitsOfSecurity;

    #[test]
    fn test_default_modulus_size() {
        assert_eq!(BitsOfSecurity::default().to_public_key_bit_length(), 3072);
    }

    #[test]
    fn test_explicit_modulus_size() {
        let level = BitsOfSecurity::Other { pk_bits: 1024 };
        assert_eq!(level.to_public_key_bit_length(), 1024);
    }
}
