//! Letter-for-letter substitution ciphers

pub mod caesar;
pub mod monoalphabetic;
pub mod vigenere;
