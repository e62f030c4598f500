//! Vigenère (running-key polyalphabetic) cipher

use crate::error::{CipherError, Result};
use crate::text;

/// Parses the keyword into its per-position shifts (0-25).
fn parse_shifts(key: &str) -> Result<Vec<i64>> {
    if key.is_empty() {
        return Err(CipherError::InvalidKeyLength(
            "key cannot be empty for the Vigenère cipher".to_string(),
        ));
    }
    key.chars()
        .map(|c| {
            text::letter_index(c).map(i64::from).ok_or_else(|| {
                CipherError::InvalidKeyFormat("key must contain only letters".to_string())
            })
        })
        .collect()
}

/// Shifts letters by the key, advancing the key position only on letters.
fn apply(content: &str, shifts: &[i64], direction: i64) -> String {
    let mut key_index: usize = 0;

    content
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let shift = shifts[key_index % shifts.len()] * direction;
                key_index += 1;
                text::shift_letter(c, shift)
            } else {
                // Non-alphabetic characters remain unchanged
                c
            }
        })
        .collect()
}

/// Encrypts text using the Vigenère cipher: `(plaintext + key) mod 26`.
///
/// # Arguments
///
/// * `content` - The plaintext to encrypt
/// * `key` - Letters only, case-insensitive
///
/// # Returns
///
/// The encrypted text; non-letters pass through and do not consume key letters
pub fn encrypt(content: &str, key: &str) -> Result<String> {
    let shifts = parse_shifts(key)?;
    Ok(apply(content, &shifts, 1))
}

/// Decrypts: `(ciphertext - key) mod 26`.
pub fn decrypt(content: &str, key: &str) -> Result<String> {
    let shifts = parse_shifts(key)?;
    Ok(apply(content, &shifts, -1))
}
