//! Generic block cipher trait and the primitives behind it
//!
//! The transforms themselves come from the RustCrypto `aes` and `des` crates;
//! this module only adapts them to a key-per-call block interface.

use aes::Aes256;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, BlockSizeUser, KeyInit, KeySizeUser};
use des::Des;

use crate::error::{CipherError, Result};

/// Trait for a generic block cipher
pub trait BlockCipher {
    /// Encrypts a single block
    fn encrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts a single block
    fn decrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>>;

    /// Returns the block size of the cipher
    fn block_size(&self) -> usize;

    /// Returns the exact key size in bytes
    fn key_size(&self) -> usize;
}

fn keyed<C: KeyInit>(key: &[u8], name: &str) -> Result<C> {
    C::new_from_slice(key).map_err(|_| {
        CipherError::InvalidKeyLength(format!(
            "{name} requires a {}-byte key, got {}",
            C::key_size(),
            key.len()
        ))
    })
}

fn check_block<C: BlockSizeUser>(block: &[u8], name: &str) -> Result<()> {
    if block.len() != C::block_size() {
        return Err(CipherError::InvalidCiphertextEncoding(format!(
            "{name} operates on {}-byte blocks, got {}",
            C::block_size(),
            block.len()
        )));
    }
    Ok(())
}

fn encrypt_with<C: KeyInit + BlockEncrypt>(key: &[u8], block: &[u8], name: &str) -> Result<Vec<u8>> {
    check_block::<C>(block, name)?;
    let cipher: C = keyed(key, name)?;
    let mut buffer = GenericArray::clone_from_slice(block);
    cipher.encrypt_block(&mut buffer);
    Ok(buffer.to_vec())
}

fn decrypt_with<C: KeyInit + BlockDecrypt>(key: &[u8], block: &[u8], name: &str) -> Result<Vec<u8>> {
    check_block::<C>(block, name)?;
    let cipher: C = keyed(key, name)?;
    let mut buffer = GenericArray::clone_from_slice(block);
    cipher.decrypt_block(&mut buffer);
    Ok(buffer.to_vec())
}

/// AES with a 256-bit key, 128-bit blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes256Primitive;

impl BlockCipher for Aes256Primitive {
    fn encrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>> {
        encrypt_with::<Aes256>(key, block, "AES-256")
    }

    fn decrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>> {
        decrypt_with::<Aes256>(key, block, "AES-256")
    }

    fn block_size(&self) -> usize {
        Aes256::block_size()
    }

    fn key_size(&self) -> usize {
        Aes256::key_size()
    }
}

/// DES with a 64-bit key, 64-bit blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesPrimitive;

impl BlockCipher for DesPrimitive {
    fn encrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>> {
        encrypt_with::<Des>(key, block, "DES")
    }

    fn decrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>> {
        decrypt_with::<Des>(key, block, "DES")
    }

    fn block_size(&self) -> usize {
        Des::block_size()
    }

    fn key_size(&self) -> usize {
        Des::key_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(Aes256Primitive.block_size(), 16);
        assert_eq!(Aes256Primitive.key_size(), 32);
        assert_eq!(DesPrimitive.block_size(), 8);
        assert_eq!(DesPrimitive.key_size(), 8);
    }

    #[test]
    fn test_des_known_answer() {
        // classic DES test vector
        let key = hex::decode("133457799BBCDFF1").unwrap();
        let block = hex::decode("0123456789ABCDEF").unwrap();
        let encrypted = DesPrimitive.encrypt(&key, &block).unwrap();
        assert_eq!(hex::encode(&encrypted), "85e813540f0ab405");
        assert_eq!(DesPrimitive.decrypt(&key, &encrypted).unwrap(), block);
    }

    #[test]
    fn test_aes_known_answer() {
        // FIPS-197 appendix C.3
        let key: Vec<u8> = (0u8..32).collect();
        let block = hex::decode("00112233445566778899aabbccddeeff").unwrap();
        let encrypted = Aes256Primitive.encrypt(&key, &block).unwrap();
        assert_eq!(hex::encode(&encrypted), "8ea2b7ca516745bfeafc49904b496089");
        assert_eq!(Aes256Primitive.decrypt(&key, &encrypted).unwrap(), block);
    }

    #[test]
    fn test_wrong_sizes() {
        assert!(matches!(
            DesPrimitive.encrypt(b"short", b"12345678"),
            Err(CipherError::InvalidKeyLength(_))
        ));
        assert!(matches!(
            DesPrimitive.encrypt(b"8bytekey", b"1234"),
            Err(CipherError::InvalidCiphertextEncoding(_))
        ));
    }
}
