//! Modulo-26 arithmetic and small square matrices over Z/26

use crate::error::{CipherError, Result};

pub const MODULUS: i64 = 26;

pub fn mod26(value: i64) -> i64 {
    value.rem_euclid(MODULUS)
}

/// Modular inverse of `a` by exhaustive search over `1..m`.
///
/// Returns `None` when `a` and `m` share a factor.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let a = a.rem_euclid(m);
    (1..m).find(|candidate| (a * candidate) % m == 1)
}

/// Square integer matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    order: usize,
    cells: Vec<i64>,
}

impl Matrix {
    /// Builds a matrix from `order * order` row-major entries, each reduced mod 26.
    ///
    /// Stored entries lie in `0..26`, so cofactor products and block sums cannot overflow.
    pub fn from_rows(order: usize, cells: Vec<i64>) -> Result<Self> {
        if order == 0 || cells.len() != order * order {
            return Err(CipherError::InvalidKeyLength(format!(
                "a {order}x{order} matrix needs {} entries, got {}",
                order * order,
                cells.len()
            )));
        }
        let cells = cells.into_iter().map(mod26).collect();
        Ok(Self { order, cells })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.order + col]
    }

    /// The matrix with row `skip_row` and column `skip_col` removed.
    fn minor(&self, skip_row: usize, skip_col: usize) -> Matrix {
        let mut cells = Vec::with_capacity((self.order - 1) * (self.order - 1));
        for row in (0..self.order).filter(|&r| r != skip_row) {
            for col in (0..self.order).filter(|&c| c != skip_col) {
                cells.push(self.get(row, col));
            }
        }
        Matrix {
            order: self.order - 1,
            cells,
        }
    }

    /// Exact integer determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> i64 {
        match self.order {
            1 => self.cells[0],
            2 => self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0),
            _ => (0..self.order)
                .map(|col| {
                    let sign = if col % 2 == 0 { 1 } else { -1 };
                    sign * self.get(0, col) * self.minor(0, col).determinant()
                })
                .sum(),
        }
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Matrix {
        if self.order == 1 {
            return Matrix {
                order: 1,
                cells: vec![1],
            };
        }
        let mut cells = vec![0; self.order * self.order];
        for row in 0..self.order {
            for col in 0..self.order {
                let sign = if (row + col) % 2 == 0 { 1 } else { -1 };
                // transposed on write
                cells[col * self.order + row] = sign * self.minor(row, col).determinant();
            }
        }
        Matrix {
            order: self.order,
            cells,
        }
    }

    /// `det⁻¹ · adj(M) mod 26`.
    pub fn inverse_mod26(&self) -> Result<Matrix> {
        let det = mod26(self.determinant());
        let det_inv = mod_inverse(det, MODULUS).ok_or_else(|| {
            CipherError::NonInvertibleKey(format!(
                "matrix not invertible mod 26 (determinant {det} shares a factor with 26)"
            ))
        })?;
        let cells = self
            .adjugate()
            .cells
            .into_iter()
            .map(|value| mod26(mod26(value) * det_inv))
            .collect();
        Ok(Matrix {
            order: self.order,
            cells,
        })
    }

    /// `(M · v) mod 26` for a block of exactly `order` values.
    pub fn apply_mod26(&self, block: &[i64]) -> Vec<i64> {
        (0..self.order)
            .map(|row| {
                let sum: i64 = (0..self.order).map(|col| self.get(row, col) * block[col]).sum();
                mod26(sum)
            })
            .collect()
    }
}
