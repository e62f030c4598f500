//! Text and key normalization shared by the ciphers

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{CipherError, Result};

/// Keeps only ASCII letters and uppercases them.
pub fn letters_upper(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Alphabet index of an ASCII letter (`A`/`a` = 0 .. `Z`/`z` = 25).
pub fn letter_index(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Maps any integer back onto `A..=Z`.
pub fn upper_letter(n: i64) -> char {
    (b'A' + n.rem_euclid(26) as u8) as char
}

/// Letters of `text` as numbers 0-25, everything else dropped.
pub fn to_numbers(text: &str) -> Vec<i64> {
    text.chars().filter_map(letter_index).map(i64::from).collect()
}

pub fn from_numbers(numbers: &[i64]) -> String {
    numbers.iter().map(|&n| upper_letter(n)).collect()
}

/// Shifts an ASCII letter by `shift` positions, keeping its case.
/// Anything else is returned unchanged.
pub fn shift_letter(c: char, shift: i64) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }
    let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
    let offset = (i64::from(c as u8 - base) + shift.rem_euclid(26)) % 26;
    let offset = offset as u8;
    (base + offset) as char
}

/// Parses a list of integers separated by commas and/or whitespace.
pub fn parse_integers(key: &str) -> Result<Vec<i64>> {
    key.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>().map_err(|_| {
                CipherError::InvalidKeyFormat(format!("'{}' is not an integer", part))
            })
        })
        .collect()
}

/// Decodes hexadecimal, ignoring whitespace between digits.
pub fn decode_hex(data: &str) -> std::result::Result<Vec<u8>, hex::FromHexError> {
    let compact: String = data.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(compact)
}

pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

pub fn decode_base64(data: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(data.trim())
}

pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Interprets decrypted bytes as text.
pub fn utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| {
        CipherError::InvalidCiphertextEncoding("decrypted bytes are not valid UTF-8".to_string())
    })
}
