//! CBC (Cipher Block Chaining) mode implementation

use crate::{BlockCipher, Result, error::CipherError, utils};

use super::CipherModes;

impl CipherModes {
    /// CBC mode encryption with PKCS#7 padding
    pub fn cbc_encrypt<C: BlockCipher>(
        cipher: &C,
        key: &[u8],
        plaintext: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        if iv.len() != block_size {
            return Err(CipherError::InvalidCiphertextEncoding(format!(
                "IV must be {block_size} bytes, got {}",
                iv.len()
            )));
        }

        let padded_data = utils::add_padding(plaintext, block_size);
        let mut ciphertext = Vec::with_capacity(padded_data.len());
        let mut previous_block = iv.to_vec();

        for chunk in padded_data.chunks(block_size) {
            let xored = utils::xor_blocks(chunk, &previous_block)?;
            let encrypted_block = cipher.encrypt(key, &xored)?;
            ciphertext.extend(&encrypted_block);
            previous_block = encrypted_block;
        }

        Ok(ciphertext)
    }

    /// CBC mode decryption; strips and validates the padding
    pub fn cbc_decrypt<C: BlockCipher>(
        cipher: &C,
        key: &[u8],
        ciphertext: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        if iv.len() != block_size {
            return Err(CipherError::InvalidCiphertextEncoding(format!(
                "IV must be {block_size} bytes, got {}",
                iv.len()
            )));
        }

        if ciphertext.is_empty() || ciphertext.len() % block_size != 0 {
            return Err(CipherError::InvalidCiphertextEncoding(format!(
                "ciphertext must be a non-empty multiple of {block_size} bytes"
            )));
        }

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut previous_block = iv;

        for chunk in ciphertext.chunks(block_size) {
            let decrypted_block = cipher.decrypt(key, chunk)?;
            let xored = utils::xor_blocks(&decrypted_block, previous_block)?;
            plaintext.extend(xored);
            previous_block = chunk;
        }

        utils::remove_padding(&plaintext, block_size)
    }
}
