//! Block-cipher adapter: key stretching, IV handling and hex encoding
//! around the AES-256 (CBC) and DES (ECB) primitives.
//!
//! Keys are stretched with a fixed filler or truncated. That is a usability
//! shortcut for demonstrations and gives no security.

use rand::RngCore;
use rand::rngs::OsRng;

use crate::cipher::{Aes256Primitive, BlockCipher, DesPrimitive};
use crate::error::{CipherError, Result};
use crate::modes::CipherModes;
use crate::text;

/// Filler for short AES keys (ASCII `'0'`).
const AES_KEY_FILLER: u8 = b'0';
/// Filler for short DES keys.
const DES_KEY_FILLER: u8 = 0x00;

/// Right-pads `key` with `filler` or truncates it to exactly `size` bytes.
pub fn fit_key(key: &[u8], size: usize, filler: u8) -> Vec<u8> {
    let mut fitted: Vec<u8> = key.iter().copied().take(size).collect();
    fitted.resize(size, filler);
    fitted
}

fn aes_key(key: &str) -> Vec<u8> {
    fit_key(key.as_bytes(), Aes256Primitive.key_size(), AES_KEY_FILLER)
}

/// DES keys are hexadecimal; spaces are ignored.
fn des_key(key: &str) -> Result<Vec<u8>> {
    let compact: String = key.chars().filter(|&c| c != ' ').collect();
    let bytes = hex::decode(compact).map_err(|_| {
        CipherError::InvalidKeyFormat(
            "key must be a valid hexadecimal string (e.g., '0123456789ABCDEF')".to_string(),
        )
    })?;
    Ok(fit_key(&bytes, DesPrimitive.key_size(), DES_KEY_FILLER))
}

fn decode_ciphertext(content: &str) -> Result<Vec<u8>> {
    text::decode_hex(content).map_err(|_| {
        CipherError::InvalidCiphertextEncoding("ciphertext must be hexadecimal".to_string())
    })
}

/// AES-256-CBC; returns `hex(iv || ciphertext)` with a fresh random IV.
pub fn aes_encrypt(content: &str, key: &str) -> Result<String> {
    let cipher = Aes256Primitive;
    let key_bytes = aes_key(key);

    let mut iv = vec![0u8; cipher.block_size()];
    OsRng.fill_bytes(&mut iv);

    let encrypted = CipherModes::cbc_encrypt(&cipher, &key_bytes, content.as_bytes(), &iv)?;
    let mut result = iv;
    result.extend(encrypted);
    Ok(text::encode_hex(&result))
}

pub fn aes_decrypt(content: &str, key: &str) -> Result<String> {
    let cipher = Aes256Primitive;
    let key_bytes = aes_key(key);

    let data = decode_ciphertext(content)?;
    if data.len() < cipher.block_size() {
        return Err(CipherError::InvalidCiphertextEncoding(format!(
            "ciphertext is shorter than the {}-byte IV",
            cipher.block_size()
        )));
    }
    let (iv, encrypted) = data.split_at(cipher.block_size());

    let decrypted = CipherModes::cbc_decrypt(&cipher, &key_bytes, encrypted, iv)?;
    text::utf8(decrypted)
}

/// DES-ECB; returns hex ciphertext.
pub fn des_encrypt(content: &str, key: &str) -> Result<String> {
    let key_bytes = des_key(key)?;
    let encrypted = CipherModes::ecb_encrypt(&DesPrimitive, &key_bytes, content.as_bytes())?;
    Ok(text::encode_hex(&encrypted))
}

pub fn des_decrypt(content: &str, key: &str) -> Result<String> {
    let key_bytes = des_key(key)?;
    let data = decode_ciphertext(content)?;
    let decrypted = CipherModes::ecb_decrypt(&DesPrimitive, &key_bytes, &data)?;
    text::utf8(decrypted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_key() {
        assert_eq!(fit_key(b"abc", 5, b'0'), b"abc00");
        assert_eq!(fit_key(b"abcdefg", 4, 0), b"abcd");
        assert_eq!(fit_key(b"", 2, 0), vec![0, 0]);
    }

    #[test]
    fn test_aes_round_trip_and_random_iv() {
        let first = aes_encrypt("Top Secret Data", "Password123").unwrap();
        let second = aes_encrypt("Top Secret Data", "Password123").unwrap();
        // 16-byte IV + one block, hex encoded
        assert_eq!(first.len(), 64);
        assert_ne!(first, second);
        assert_eq!(aes_decrypt(&first, "Password123").unwrap(), "Top Secret Data");
        assert_eq!(aes_decrypt(&second, "Password123").unwrap(), "Top Secret Data");
    }

    #[test]
    fn test_aes_long_key_is_truncated() {
        let long_key = "k".repeat(40);
        let ciphertext = aes_encrypt("hello", &long_key).unwrap();
        assert_eq!(aes_decrypt(&ciphertext, &"k".repeat(32)).unwrap(), "hello");
    }

    #[test]
    fn test_aes_rejects_malformed_ciphertext() {
        assert!(matches!(
            aes_decrypt("not hex", "key"),
            Err(CipherError::InvalidCiphertextEncoding(_))
        ));
        assert!(matches!(
            aes_decrypt("00ff", "key"),
            Err(CipherError::InvalidCiphertextEncoding(_))
        ));
    }

    #[test]
    fn test_des_round_trip_spaced_key() {
        // 14 bytes pad to two blocks
        let ciphertext = des_encrypt("Secret Message", "13 34 57 79 9B BC DF F1").unwrap();
        assert_eq!(ciphertext.len(), 32);
        assert_eq!(
            des_decrypt(&ciphertext, "133457799BBCDFF1").unwrap(),
            "Secret Message"
        );
    }

    #[test]
    fn test_des_short_hex_key_is_zero_padded() {
        let ciphertext = des_encrypt("pad me", "0123").unwrap();
        assert_eq!(des_decrypt(&ciphertext, "0123000000000000").unwrap(), "pad me");
    }

    #[test]
    fn test_des_key_must_be_hex() {
        assert!(matches!(
            des_encrypt("Secret Message", "MyKey123"),
            Err(CipherError::InvalidKeyFormat(_))
        ));
    }
}
