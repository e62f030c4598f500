//! One-Time Pad in two modes
//!
//! - **letters**: A-Z addition mod 26, ciphertext is uppercase letters
//! - **xor**: byte-wise XOR of the UTF-8 text, ciphertext rendered as hex or base64
//!
//! In both modes the key must be exactly as long as the message. It is never
//! cycled or stretched.

use std::fmt;
use std::str::FromStr;

use crate::error::{CipherError, Result};
use crate::text;
use crate::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OtpMode {
    #[default]
    Letters,
    Xor,
}

impl FromStr for OtpMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letters" => Ok(OtpMode::Letters),
            "xor" => Ok(OtpMode::Xor),
            other => Err(CipherError::UnsupportedMode(format!(
                "mode must be 'letters' or 'xor', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for OtpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OtpMode::Letters => write!(f, "letters"),
            OtpMode::Xor => write!(f, "xor"),
        }
    }
}

/// Text encoding of XOR-mode ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Hex,
    Base64,
}

impl FromStr for OutputFormat {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(OutputFormat::Hex),
            "base64" => Ok(OutputFormat::Base64),
            other => Err(CipherError::UnsupportedMode(format!(
                "format must be 'hex' or 'base64', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Hex => write!(f, "hex"),
            OutputFormat::Base64 => write!(f, "base64"),
        }
    }
}

impl OutputFormat {
    fn encode(self, data: &[u8]) -> String {
        match self {
            OutputFormat::Hex => text::encode_hex(data),
            OutputFormat::Base64 => text::encode_base64(data),
        }
    }

    fn decode(self, data: &str) -> Result<Vec<u8>> {
        match self {
            OutputFormat::Hex => text::decode_hex(data).map_err(|_| {
                CipherError::InvalidCiphertextEncoding("invalid hex format for ciphertext".to_string())
            }),
            OutputFormat::Base64 => text::decode_base64(data).map_err(|_| {
                CipherError::InvalidCiphertextEncoding(
                    "invalid base64 format for ciphertext".to_string(),
                )
            }),
        }
    }
}

fn check_lengths(key_len: usize, text_len: usize, what: &str, unit: &str) -> Result<()> {
    if key_len != text_len {
        return Err(CipherError::InvalidKeyLength(format!(
            "key length ({key_len}{unit}) must equal {what} length ({text_len}{unit})"
        )));
    }
    Ok(())
}

fn combine_letters(content: &str, key: &str, direction: i64) -> String {
    content
        .chars()
        .zip(key.chars())
        .map(|(c, k)| {
            let value = i64::from(c as u8 - b'A') + direction * i64::from(k as u8 - b'A');
            text::upper_letter(value)
        })
        .collect()
}

pub fn encrypt(content: &str, key: &str, mode: OtpMode, format: OutputFormat) -> Result<String> {
    match mode {
        OtpMode::Letters => {
            let normalized_text = text::letters_upper(content);
            let normalized_key = text::letters_upper(key);
            check_lengths(
                normalized_key.len(),
                normalized_text.len(),
                "plaintext",
                "",
            )?;
            Ok(combine_letters(&normalized_text, &normalized_key, 1))
        }
        OtpMode::Xor => {
            let text_bytes = content.as_bytes();
            let key_bytes = key.as_bytes();
            check_lengths(key_bytes.len(), text_bytes.len(), "plaintext", " bytes")?;
            let result = utils::xor_blocks(text_bytes, key_bytes)?;
            Ok(format.encode(&result))
        }
    }
}

pub fn decrypt(content: &str, key: &str, mode: OtpMode, format: OutputFormat) -> Result<String> {
    match mode {
        OtpMode::Letters => {
            if !content.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(CipherError::InvalidCiphertextEncoding(
                    "ciphertext must contain only letters A-Z for letters mode".to_string(),
                ));
            }
            let normalized_text = content.to_ascii_uppercase();
            let normalized_key = text::letters_upper(key);
            check_lengths(
                normalized_key.len(),
                normalized_text.len(),
                "ciphertext",
                "",
            )?;
            Ok(combine_letters(&normalized_text, &normalized_key, -1))
        }
        OtpMode::Xor => {
            let text_bytes = format.decode(content)?;
            let key_bytes = key.as_bytes();
            check_lengths(key_bytes.len(), text_bytes.len(), "ciphertext", " bytes")?;
            let result = utils::xor_blocks(&text_bytes, key_bytes)?;
            text::utf8(result)
        }
    }
}
