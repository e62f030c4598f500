//! Byte helpers shared by the block modes and the one-time pad

use crate::error::{CipherError, Result};

/// PKCS#7 padding: always appends 1..=block_size bytes, each equal to the count.
pub fn add_padding(data: &[u8], block_size: usize) -> Vec<u8> {
    let padding_needed = block_size - data.len() % block_size;
    let mut padded = data.to_vec();
    padded.extend(std::iter::repeat_n(padding_needed as u8, padding_needed));
    padded
}

/// Removes and validates PKCS#7 padding.
pub fn remove_padding(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let bad_padding =
        || CipherError::InvalidCiphertextEncoding("padding is incorrect (wrong key?)".to_string());

    let &last = data.last().ok_or_else(bad_padding)?;
    let count = last as usize;
    if count == 0 || count > block_size || count > data.len() {
        return Err(bad_padding());
    }
    let (body, padding) = data.split_at(data.len() - count);
    if padding.iter().any(|&b| b != last) {
        return Err(bad_padding());
    }
    Ok(body.to_vec())
}

/// XOR two byte arrays of equal length
pub fn xor_blocks(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(CipherError::InvalidKeyLength(format!(
            "cannot XOR {} bytes with {} bytes",
            a.len(),
            b.len()
        )));
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}
