//! Keyed monoalphabetic substitution

use crate::error::{CipherError, Result};
use crate::text;

/// A bijection of the 26-letter alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    forward: [u8; 26],
    inverse: [u8; 26],
}

impl Alphabet {
    /// Parses a 26-letter key such as `QWERTYUIOPASDFGHJKLZXCVBNM`.
    pub fn parse(key: &str) -> Result<Self> {
        let key = key.to_uppercase();
        let count = key.chars().count();
        if count != 26 {
            return Err(CipherError::InvalidKeyLength(format!(
                "key must be exactly 26 characters (one for each letter), got {count}"
            )));
        }

        let mut forward = [0u8; 26];
        let mut inverse = [u8::MAX; 26];
        for (plain, c) in key.chars().enumerate() {
            let cipher = text::letter_index(c).ok_or_else(|| {
                CipherError::InvalidKeyFormat(format!("'{c}' is not a letter A-Z"))
            })?;
            if inverse[cipher as usize] != u8::MAX {
                return Err(CipherError::NonPermutationKey(format!(
                    "letter '{c}' appears more than once; key must contain all 26 unique letters"
                )));
            }
            forward[plain] = cipher;
            inverse[cipher as usize] = plain as u8;
        }

        Ok(Self { forward, inverse })
    }

    fn map(table: &[u8; 26], c: char) -> char {
        match text::letter_index(c) {
            Some(index) => {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                (base + table[index as usize]) as char
            }
            None => c,
        }
    }

    pub fn substitute(&self, c: char) -> char {
        Self::map(&self.forward, c)
    }

    pub fn restore(&self, c: char) -> char {
        Self::map(&self.inverse, c)
    }
}

/// Encrypts text using a keyed substitution alphabet.
///
/// # Arguments
///
/// * `content` - The plaintext to encrypt
/// * `key` - 26 distinct letters; position `i` is the image of the `i`-th letter
///
/// # Returns
///
/// The substituted text, case and non-letters preserved
pub fn encrypt(content: &str, key: &str) -> Result<String> {
    let alphabet = Alphabet::parse(key)?;
    Ok(content.chars().map(|c| alphabet.substitute(c)).collect())
}

/// Applies the inverse alphabet of `key`.
pub fn decrypt(content: &str, key: &str) -> Result<String> {
    let alphabet = Alphabet::parse(key)?;
    Ok(content.chars().map(|c| alphabet.restore(c)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

    #[test]
    fn test_encrypt_preserves_case() {
        assert_eq!(encrypt("Hello, World", KEY).unwrap(), "Itssg, Vgksr");
    }

    #[test]
    fn test_round_trip() {
        let plaintext = "The quick brown fox jumps over the lazy dog.";
        let ciphertext = encrypt(plaintext, &KEY.to_lowercase()).unwrap();
        assert_eq!(decrypt(&ciphertext, KEY).unwrap(), plaintext);
    }

    #[test]
    fn test_wrong_length() {
        assert!(matches!(
            encrypt("abc", "ABC"),
            Err(CipherError::InvalidKeyLength(_))
        ));
    }

    #[test]
    fn test_repeated_letter() {
        assert!(matches!(
            encrypt("abc", "AACDEFGHIJKLMNOPQRSTUVWXYZ"),
            Err(CipherError::NonPermutationKey(_))
        ));
    }

    #[test]
    fn test_non_letter_in_key() {
        assert!(matches!(
            encrypt("abc", "1BCDEFGHIJKLMNOPQRSTUVWXYZ"),
            Err(CipherError::InvalidKeyFormat(_))
        ));
    }
}
