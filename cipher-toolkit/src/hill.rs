//! Hill cipher: block-wise linear transform over Z/26
//!
//! The key is 4 (2x2) or 9 (3x3) integers separated by commas or whitespace.
//! Letters map to 0-25, everything else is dropped, and the final block is
//! padded with `X`.

use crate::error::{CipherError, Result};
use crate::modular::Matrix;
use crate::text;

/// Padding value for an incomplete final block (`X`).
const FILLER: i64 = 23;

/// Parses the key into a 2x2 or 3x3 matrix. Entries may be any `i64` and are reduced mod 26.
pub fn parse_key(key: &str) -> Result<Matrix> {
    let numbers = text::parse_integers(key)?;
    let order = match numbers.len() {
        4 => 2,
        9 => 3,
        n => {
            return Err(CipherError::InvalidKeyLength(format!(
                "key must be for a 2x2 (4 numbers) or 3x3 (9 numbers) matrix, got {n} numbers"
            )));
        }
    };
    Matrix::from_rows(order, numbers)
}

fn apply_blocks(matrix: &Matrix, content: &str) -> String {
    let size = matrix.order();
    let mut numbers = text::to_numbers(content);
    while numbers.len() % size != 0 {
        numbers.push(FILLER);
    }
    tracing::trace!(blocks = numbers.len() / size, size, "hill transform");

    let result: Vec<i64> = numbers
        .chunks(size)
        .flat_map(|block| matrix.apply_mod26(block))
        .collect();
    text::from_numbers(&result)
}

/// Encrypts with `C = K · P mod 26` per block.
///
/// # Arguments
///
/// * `content` - The plaintext; non-letters are dropped
/// * `key` - 4 or 9 integers, row-major
///
/// # Returns
///
/// Uppercase ciphertext, a whole number of blocks long
pub fn encrypt(content: &str, key: &str) -> Result<String> {
    let matrix = parse_key(key)?;
    Ok(apply_blocks(&matrix, content))
}

/// Decrypts with `P = K⁻¹ · C mod 26` per block.
///
/// # Arguments
///
/// * `content` - The ciphertext; padded with `X` like plaintext if ragged
/// * `key` - The encryption key; it is inverted here
///
/// # Returns
///
/// The uppercase plaintext including any padding, or `NonInvertibleKey`
/// when `det(K)` shares a factor with 26
pub fn decrypt(content: &str, key: &str) -> Result<String> {
    let inverse = parse_key(key)?.inverse_mod26()?;
    Ok(apply_blocks(&inverse, content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector_3x3() {
        let key = "6 24 1 13 16 10 20 17 15";
        assert_eq!(encrypt("ACT", key).unwrap(), "POH");
        assert_eq!(decrypt("POH", key).unwrap(), "ACT");
    }

    #[test]
    fn test_round_trip_2x2_pads_with_x() {
        let key = "3,3,2,5";
        assert_eq!(encrypt("HELP", key).unwrap(), "HIAT");
        let ciphertext = encrypt("Hello", key).unwrap();
        assert_eq!(ciphertext.len(), 6);
        assert_eq!(decrypt(&ciphertext, key).unwrap(), "HELLOX");
    }

    #[test]
    fn test_even_determinant_is_rejected() {
        // det = 54, shares the factor 2 with 26
        assert!(matches!(
            decrypt("ABCD", "6,24,1,13"),
            Err(CipherError::NonInvertibleKey(_))
        ));
    }

    #[test]
    fn test_non_invertible_key_fails_decrypt() {
        let key = "2,4,6,8";
        assert!(encrypt("HELLO", key).is_ok());
        assert!(matches!(
            decrypt("ABCD", key),
            Err(CipherError::NonInvertibleKey(_))
        ));
    }

    #[test]
    fn test_extreme_key_entries_match_reduced_key() {
        assert_eq!(
            encrypt("HELLO", "9223372036854775807,1,1,1").unwrap(),
            encrypt("HELLO", "7,1,1,1").unwrap()
        );

        // congruent to 3,3,2,5
        let key = "9223372036854775803 -23 -24 -7799999999999999995";
        assert_eq!(encrypt("HELP", key).unwrap(), "HIAT");
        assert_eq!(decrypt("HIAT", key).unwrap(), "HELP");

        let big = "4000000001 4000000000 4000000001 4000000000 4000000001 4000000000 4000000001 4000000000 4000000001";
        let small = "23 22 23 22 23 22 23 22 23";
        assert_eq!(encrypt("HELLOX", big).unwrap(), encrypt("HELLOX", small).unwrap());
        assert_eq!(decrypt("HELLOX", big), decrypt("HELLOX", small));
    }

    #[test]
    fn test_key_shape_errors() {
        assert!(matches!(
            encrypt("abc", "1,2,3"),
            Err(CipherError::InvalidKeyLength(_))
        ));
        assert!(matches!(
            encrypt("abc", "1,2,3,x"),
            Err(CipherError::InvalidKeyFormat(_))
        ));
    }
}
