//! Row (columnar) transposition with irregular columns
//!
//! Encryption lays the text out row-major under a digit key such as `3142`
//! and reads whole columns in key order. The last row may be partial; its
//! missing cells are skipped rather than emitted, so the ciphertext has exactly
//! the plaintext's length and decryption recovers the column heights from that
//! length alone.

use crate::error::{CipherError, Result};

/// Parses a digit key into 0-based column indices in read order.
pub fn parse_key(key: &str) -> Result<Vec<usize>> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_digit()) {
        return Err(CipherError::InvalidKeyFormat(
            "key must be a numeric string (e.g., '3142')".to_string(),
        ));
    }

    let digits: Vec<usize> = key.bytes().map(|b| (b - b'0') as usize).collect();
    let columns = digits.len();
    let mut seen = vec![false; columns];
    for &digit in &digits {
        if digit == 0 || digit > columns || seen[digit - 1] {
            return Err(CipherError::NonPermutationKey(format!(
                "key must contain each digit from 1 to {columns} exactly once"
            )));
        }
        seen[digit - 1] = true;
    }

    Ok(digits.into_iter().map(|digit| digit - 1).collect())
}

/// Height of every column (by 0-based column index) for a text of `text_len` characters.
///
/// With `remainder = text_len % columns` (or `columns` when that is zero),
/// the first `remainder` columns are full height and the rest are one short.
pub fn column_heights(text_len: usize, columns: usize) -> Vec<usize> {
    let rows = text_len.div_ceil(columns);
    let remainder = match text_len % columns {
        0 => columns,
        r => r,
    };
    (0..columns)
        .map(|col| if col < remainder { rows } else { rows.saturating_sub(1) })
        .collect()
}

/// Encrypts text using row transposition.
///
/// # Arguments
///
/// * `content` - The plaintext; every character is kept
/// * `key` - Digits `1..=n`, each exactly once
///
/// # Returns
///
/// The columns read in key order, the same length as `content`
pub fn encrypt(content: &str, key: &str) -> Result<String> {
    let order = parse_key(key)?;
    let columns = order.len();
    let chars: Vec<char> = content.chars().collect();
    let rows = chars.len().div_ceil(columns);

    let mut result = String::with_capacity(content.len());
    for &col in &order {
        for row in 0..rows {
            // cells past the end of the text are padding
            if let Some(&c) = chars.get(row * columns + col) {
                result.push(c);
            }
        }
    }
    Ok(result)
}

/// Refills the columns in key order using [`column_heights`] and reads row-major.
pub fn decrypt(content: &str, key: &str) -> Result<String> {
    let order = parse_key(key)?;
    let columns = order.len();
    let chars: Vec<char> = content.chars().collect();
    let heights = column_heights(chars.len(), columns);
    let rows = heights.first().copied().unwrap_or(0);
    tracing::trace!(rows, columns, ?heights, "row transposition grid");

    let mut grid: Vec<Option<char>> = vec![None; rows * columns];
    let mut source = chars.iter();
    for &col in &order {
        for row in 0..heights[col] {
            grid[row * columns + col] = source.next().copied();
        }
    }

    Ok(grid.into_iter().flatten().collect())
}
