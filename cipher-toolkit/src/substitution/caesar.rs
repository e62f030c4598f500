//! Shift (Caesar) cipher

use crate::error::{CipherError, Result};
use crate::text;

fn parse_shift(key: &str) -> Result<i64> {
    key.trim().parse::<i64>().map_err(|_| {
        CipherError::InvalidKeyFormat("key must be a number for the Caesar cipher".to_string())
    })
}

fn shift_text(content: &str, shift: i64) -> String {
    content.chars().map(|c| text::shift_letter(c, shift)).collect()
}

/// Encrypts text using the shift cipher.
///
/// # Arguments
///
/// * `content` - The plaintext to encrypt
/// * `key` - Any decimal `i64`; only `key mod 26` matters
///
/// # Returns
///
/// The text with every ASCII letter shifted forward, case and non-letters preserved
pub fn encrypt(content: &str, key: &str) -> Result<String> {
    let shift = parse_shift(key)?.rem_euclid(26);
    Ok(shift_text(content, shift))
}

/// Decrypts text encrypted with [`encrypt`] under the same key.
pub fn decrypt(content: &str, key: &str) -> Result<String> {
    // reduced before negating so i64::MIN cannot overflow
    let shift = parse_shift(key)?.rem_euclid(26);
    Ok(shift_text(content, -shift))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        assert_eq!(encrypt("HELLO WORLD", "3").unwrap(), "KHOOR ZRUOG");
        assert_eq!(decrypt("KHOOR ZRUOG", "3").unwrap(), "HELLO WORLD");
    }

    #[test]
    fn test_negative_and_large_shifts() {
        assert_eq!(encrypt("abc", "-1").unwrap(), "zab");
        assert_eq!(encrypt("abc", "27").unwrap(), "bcd");
        assert_eq!(encrypt("Hello", " 29 ").unwrap(), encrypt("Hello", "3").unwrap());
    }

    #[test]
    fn test_round_trip_keeps_punctuation() {
        let plaintext = "Attack at dawn, 5 o'clock!";
        let ciphertext = encrypt(plaintext, "13").unwrap();
        assert_eq!(decrypt(&ciphertext, "13").unwrap(), plaintext);
    }

    #[test]
    fn test_round_trip_with_extreme_keys() {
        let plaintext = "Hello, World";
        for key in ["-9223372036854775808", "9223372036854775807"] {
            let ciphertext = encrypt(plaintext, key).unwrap();
            assert_eq!(decrypt(&ciphertext, key).unwrap(), plaintext, "key {key}");
        }
        // i64::MIN = 18 (mod 26)
        assert_eq!(decrypt("HELLO", "-9223372036854775808").unwrap(), decrypt("HELLO", "18").unwrap());
    }

    #[test]
    fn test_non_numeric_key() {
        assert!(matches!(
            encrypt("hello", "three"),
            Err(CipherError::InvalidKeyFormat(_))
        ));
    }
}
