//! Error types for cipher operations

use thiserror::Error;

/// Failure of an `encrypt` or `decrypt` call.
///
/// Every variant carries a message naming the violated constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Invalid key length: {0}")]
    InvalidKeyLength(String),

    #[error("Key is not a permutation: {0}")]
    NonPermutationKey(String),

    #[error("Key is not invertible: {0}")]
    NonInvertibleKey(String),

    #[error("Invalid ciphertext encoding: {0}")]
    InvalidCiphertextEncoding(String),

    #[error("Unsupported mode: {0}")]
    UnsupportedMode(String),
}

/// Field-less view of [`CipherError`], for matching on the kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidKeyFormat,
    InvalidKeyLength,
    NonPermutationKey,
    NonInvertibleKey,
    InvalidCiphertextEncoding,
    UnsupportedMode,
}

impl CipherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CipherError::InvalidKeyFormat(_) => ErrorKind::InvalidKeyFormat,
            CipherError::InvalidKeyLength(_) => ErrorKind::InvalidKeyLength,
            CipherError::NonPermutationKey(_) => ErrorKind::NonPermutationKey,
            CipherError::NonInvertibleKey(_) => ErrorKind::NonInvertibleKey,
            CipherError::InvalidCiphertextEncoding(_) => ErrorKind::InvalidCiphertextEncoding,
            CipherError::UnsupportedMode(_) => ErrorKind::UnsupportedMode,
        }
    }

    /// The human-readable detail without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            CipherError::InvalidKeyFormat(msg)
            | CipherError::InvalidKeyLength(msg)
            | CipherError::NonPermutationKey(msg)
            | CipherError::NonInvertibleKey(msg)
            | CipherError::InvalidCiphertextEncoding(msg)
            | CipherError::UnsupportedMode(msg) => msg,
        }
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let err = CipherError::NonInvertibleKey("determinant 4 shares a factor with 26".to_string());
        assert_eq!(
            format!("{}", err),
            "Key is not invertible: determinant 4 shares a factor with 26"
        );
    }

    #[test]
    fn test_kind_and_detail() {
        let err = CipherError::InvalidKeyLength("expected 6, got 5".to_string());
        assert_eq!(err.kind(), ErrorKind::InvalidKeyLength);
        assert_eq!(err.detail(), "expected 6, got 5");
    }
}
