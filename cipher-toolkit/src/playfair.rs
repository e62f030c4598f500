//! Playfair digraph cipher over a 5x5 grid
//!
//! `J` is merged into `I` so the remaining 25 letters fit the grid.
//! Output is uppercase letters only.

use crate::error::{CipherError, Result};

const SIZE: usize = 5;
const FILLER: char = 'X';
const ALT_FILLER: char = 'Q';

/// 5x5 key square holding each letter except `J` exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [char; SIZE * SIZE],
    /// Row and column of every letter A-Z; `J` shares the cell of `I`.
    positions: [(usize, usize); 26],
}

fn alphabet_index(c: char) -> usize {
    (c as u8 - b'A') as usize
}

fn merge(c: char) -> char {
    if c == 'J' { 'I' } else { c }
}

fn uppercase_letters(content: &str) -> impl Iterator<Item = char> + '_ {
    content
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| merge(c.to_ascii_uppercase()))
}

/// Filler that cannot equal `c`, so a padded pair never repeats a letter.
fn filler_for(c: char) -> char {
    if c == FILLER { ALT_FILLER } else { FILLER }
}

impl Grid {
    /// Builds the key square: keyword letters first (deduplicated), then the rest of the alphabet.
    pub fn from_keyword(keyword: &str) -> Result<Self> {
        if keyword.is_empty() {
            return Err(CipherError::InvalidKeyLength(
                "key cannot be empty for the Playfair cipher".to_string(),
            ));
        }

        let mut cells = [' '; SIZE * SIZE];
        let mut positions = [(0, 0); 26];
        let mut placed = [false; 26];
        let mut filled = 0;

        let alphabet = ('A'..='Z').filter(|&c| c != 'J');
        for c in uppercase_letters(keyword).chain(alphabet) {
            let index = alphabet_index(c);
            if placed[index] {
                continue;
            }
            cells[filled] = c;
            positions[index] = (filled / SIZE, filled % SIZE);
            placed[index] = true;
            filled += 1;
        }
        positions[alphabet_index('J')] = positions[alphabet_index('I')];
        tracing::trace!(?cells, "built playfair grid");

        Ok(Self { cells, positions })
    }

    fn at(&self, row: usize, col: usize) -> char {
        self.cells[row * SIZE + col]
    }

    /// Location of an uppercase ASCII letter.
    fn position(&self, c: char) -> (usize, usize) {
        self.positions[alphabet_index(c)]
    }

    /// Substitutes one digraph. `step` is 1 to encrypt, `SIZE - 1` to decrypt.
    fn substitute(&self, first: char, second: char, step: usize) -> (char, char) {
        let (row1, col1) = self.position(first);
        let (row2, col2) = self.position(second);

        if row1 == row2 {
            (
                self.at(row1, (col1 + step) % SIZE),
                self.at(row2, (col2 + step) % SIZE),
            )
        } else if col1 == col2 {
            (
                self.at((row1 + step) % SIZE, col1),
                self.at((row2 + step) % SIZE, col2),
            )
        } else {
            // rectangle rule is its own inverse
            (self.at(row1, col2), self.at(row2, col1))
        }
    }

    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(SIZE)
            .map(|row| row.iter().collect())
            .collect()
    }
}

/// Uppercases, drops non-letters, merges `J`, then splits doubled letters and pads to even length.
pub fn prepare_text(content: &str) -> String {
    let letters: Vec<char> = uppercase_letters(content).collect();
    let mut prepared = String::with_capacity(letters.len() + letters.len() / 2 + 1);

    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        prepared.push(first);
        match letters.get(i + 1) {
            Some(&second) if second == first => {
                prepared.push(filler_for(first));
                i += 1;
            }
            Some(&second) => {
                prepared.push(second);
                i += 2;
            }
            None => {
                prepared.push(filler_for(first));
                i += 1;
            }
        }
    }

    prepared
}

fn transform(letters: &[char], grid: &Grid, step: usize) -> String {
    let mut result = String::with_capacity(letters.len());
    for pair in letters.chunks_exact(2) {
        let (a, b) = grid.substitute(pair[0], pair[1], step);
        result.push(a);
        result.push(b);
    }
    result
}

/// Encrypts text using the Playfair cipher.
///
/// # Arguments
///
/// * `content` - The plaintext; prepared with [`prepare_text`] first
/// * `key` - Keyword for the grid; must contain at least one character
///
/// # Returns
///
/// Uppercase ciphertext of even length
pub fn encrypt(content: &str, key: &str) -> Result<String> {
    let grid = Grid::from_keyword(key)?;
    let prepared: Vec<char> = prepare_text(content).chars().collect();
    Ok(transform(&prepared, &grid, 1))
}

/// Decrypts; a dangling odd final letter is discarded.
pub fn decrypt(content: &str, key: &str) -> Result<String> {
    let grid = Grid::from_keyword(key)?;
    let letters: Vec<char> = uppercase_letters(content).collect();
    Ok(transform(&letters, &grid, SIZE - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_construction() {
        let grid = Grid::from_keyword("playfair example").unwrap();
        assert_eq!(
            grid.rows(),
            vec!["PLAYF", "IREXM", "BCDGH", "KNOQS", "TUVWZ"]
        );
    }

    #[test]
    fn test_grid_merges_j() {
        let grid = Grid::from_keyword("JIG").unwrap();
        assert_eq!(grid.rows()[0], "IGABC");
    }

    #[test]
    fn test_every_letter_has_its_own_cell() {
        let grid = Grid::from_keyword("MONARCHY").unwrap();
        for c in ('A'..='Z').filter(|&c| c != 'J') {
            let (row, col) = grid.position(c);
            assert_eq!(grid.at(row, col), c);
        }
        assert_eq!(grid.position('J'), grid.position('I'));
    }

    #[test]
    fn test_prepare_text() {
        assert_eq!(prepare_text("Hide the gold in the tree stump"), "HIDETHEGOLDINTHETREXESTUMP");
        assert_eq!(prepare_text("balloon"), "BALXLOON");
        assert_eq!(prepare_text("abc"), "ABCX");
        assert_eq!(prepare_text("xx"), "XQXQ");
        assert_eq!(prepare_text("box"), "BOXQ");
    }

    #[test]
    fn test_known_vector() {
        let ciphertext = encrypt("Hide the gold in the tree stump", "playfair example").unwrap();
        assert_eq!(ciphertext, "BMODZBXDNABEKUDMUIXMMOUVIF");
        assert_eq!(
            decrypt(&ciphertext, "playfair example").unwrap(),
            "HIDETHEGOLDINTHETREXESTUMP"
        );
    }

    #[test]
    fn test_no_identical_pairs_in_ciphertext() {
        let ciphertext = encrypt("aa bb xx jj ll moon", "MONARCHY").unwrap();
        let chars: Vec<char> = ciphertext.chars().collect();
        for pair in chars.chunks(2) {
            assert_ne!(pair[0], pair[1], "identical digraph in {ciphertext}");
        }
    }

    #[test]
    fn test_decrypt_discards_dangling_letter() {
        let ciphertext = encrypt("HELP", "KEY").unwrap();
        let with_extra = format!("{ciphertext}A");
        assert_eq!(decrypt(&with_extra, "KEY").unwrap(), "HELP");
    }

    #[test]
    fn test_empty_key() {
        assert!(matches!(
            encrypt("text", ""),
            Err(CipherError::InvalidKeyLength(_))
        ));
    }
}
