//! Permutation cipher over fixed-size blocks
//!
//! Known limitation: decryption strips every trailing `X`, so a plaintext
//! that genuinely ends in `X` loses those characters.

use crate::error::{CipherError, Result};

const FILLER: char = 'X';

/// Block permutation parsed from a 1-based key such as `3,1,4,2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Permutation {
    pub fn parse(key: &str) -> Result<Self> {
        let compact: String = key.chars().filter(|c| !c.is_whitespace()).collect();
        let positions = compact
            .split(',')
            .map(|part| part.parse::<usize>())
            .collect::<std::result::Result<Vec<usize>, _>>()
            .map_err(|_| {
                CipherError::InvalidKeyFormat(
                    "key must be comma-separated numbers (e.g., '3,1,4,2')".to_string(),
                )
            })?;

        let size = positions.len();
        let mut inverse = vec![usize::MAX; size];
        let mut forward = Vec::with_capacity(size);
        for (target, &position) in positions.iter().enumerate() {
            let source = position.wrapping_sub(1);
            if source >= size || inverse[source] != usize::MAX {
                return Err(CipherError::NonPermutationKey(format!(
                    "key must be a permutation of numbers 1 to {size}"
                )));
            }
            forward.push(source);
            inverse[source] = target;
        }

        Ok(Self { forward, inverse })
    }

    pub fn block_size(&self) -> usize {
        self.forward.len()
    }

    /// Output position `j` takes input position `order[j]`.
    fn reorder(chars: &[char], order: &[usize]) -> String {
        chars
            .chunks(order.len())
            .flat_map(|block| order.iter().map(move |&source| block[source]))
            .collect()
    }
}

/// Encrypts text using a block permutation.
///
/// # Arguments
///
/// * `content` - The plaintext, padded with `X` to whole blocks
/// * `key` - 1-based positions such as `3,1,4,2`; output position `i` takes input `key[i]`
///
/// # Returns
///
/// The permuted text, padding included
pub fn encrypt(content: &str, key: &str) -> Result<String> {
    let permutation = Permutation::parse(key)?;
    let size = permutation.block_size();

    let mut chars: Vec<char> = content.chars().collect();
    let padding_needed = (size - chars.len() % size) % size;
    chars.extend(std::iter::repeat_n(FILLER, padding_needed));

    Ok(Permutation::reorder(&chars, &permutation.forward))
}

/// Applies the inverse permutation, then strips trailing `X` padding.
pub fn decrypt(content: &str, key: &str) -> Result<String> {
    let permutation = Permutation::parse(key)?;
    let size = permutation.block_size();

    let chars: Vec<char> = content.chars().collect();
    if chars.len() % size != 0 {
        return Err(CipherError::InvalidCiphertextEncoding(format!(
            "ciphertext length {} is not a multiple of the block size {size}",
            chars.len()
        )));
    }

    let restored = Permutation::reorder(&chars, &permutation.inverse);
    Ok(restored.trim_end_matches(FILLER).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_block() {
        assert_eq!(encrypt("ABCD", "3,1,4,2").unwrap(), "CADB");
        assert_eq!(decrypt("CADB", "3, 1, 4, 2").unwrap(), "ABCD");
    }

    #[test]
    fn test_padding_kept_then_stripped() {
        let ciphertext = encrypt("Hello World", "2,1,3").unwrap();
        assert_eq!(ciphertext.chars().count(), 12);
        assert_eq!(ciphertext, "eHlol oWrdlX");
        assert_eq!(decrypt(&ciphertext, "2,1,3").unwrap(), "Hello World");
    }

    #[test]
    fn test_trailing_x_is_lost() {
        let ciphertext = encrypt("RELAX", "1,2").unwrap();
        assert_eq!(decrypt(&ciphertext, "1,2").unwrap(), "RELA");
    }

    #[test]
    fn test_inverse_table() {
        let permutation = Permutation::parse("3,1,4,2").unwrap();
        assert_eq!(permutation.forward, vec![2, 0, 3, 1]);
        assert_eq!(permutation.inverse, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_invalid_keys() {
        assert!(matches!(
            encrypt("abc", "1,a"),
            Err(CipherError::InvalidKeyFormat(_))
        ));
        assert!(matches!(
            encrypt("abc", ""),
            Err(CipherError::InvalidKeyFormat(_))
        ));
        assert!(matches!(
            encrypt("abc", "1,1,2"),
            Err(CipherError::NonPermutationKey(_))
        ));
        assert!(matches!(
            encrypt("abc", "0,1"),
            Err(CipherError::NonPermutationKey(_))
        ));
        assert!(matches!(
            encrypt("abc", "1,3"),
            Err(CipherError::NonPermutationKey(_))
        ));
    }

    #[test]
    fn test_ragged_ciphertext_rejected() {
        assert!(matches!(
            decrypt("ABCDE", "2,1"),
            Err(CipherError::InvalidCiphertextEncoding(_))
        ));
    }
}
