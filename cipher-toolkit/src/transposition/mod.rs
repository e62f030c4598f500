//! Transposition ciphers: characters are reordered, never substituted

pub mod permutation;
pub mod row;
