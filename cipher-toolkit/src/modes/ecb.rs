//! ECB (Electronic Code Book) mode implementation

use crate::{BlockCipher, Result, error::CipherError, utils};

use super::CipherModes;

impl CipherModes {
    /// ECB mode encryption with PKCS#7 padding
    pub fn ecb_encrypt<C: BlockCipher>(cipher: &C, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        let padded_data: Vec<u8> = utils::add_padding(plaintext, block_size);
        let mut ciphertext: Vec<u8> = Vec::with_capacity(padded_data.len());

        for chunk in padded_data.chunks(block_size) {
            let encrypted_block = cipher.encrypt(key, chunk)?;
            ciphertext.extend(encrypted_block);
        }

        Ok(ciphertext)
    }

    /// ECB mode decryption; strips and validates the padding
    pub fn ecb_decrypt<C: BlockCipher>(cipher: &C, key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        if ciphertext.is_empty() || ciphertext.len() % block_size != 0 {
            return Err(CipherError::InvalidCiphertextEncoding(format!(
                "ciphertext must be a non-empty multiple of {block_size} bytes"
            )));
        }

        let mut plaintext = Vec::with_capacity(ciphertext.len());

        for chunk in ciphertext.chunks(block_size) {
            let decrypted_block = cipher.decrypt(key, chunk)?;
            plaintext.extend(decrypted_block);
        }

        utils::remove_padding(&plaintext, block_size)
    }
}
