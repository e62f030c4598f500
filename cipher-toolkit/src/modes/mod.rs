//! Block cipher modes of operation used by the block-cipher adapter

pub mod cbc;
pub mod ecb;

/// Namespace for the CBC and ECB chaining functions.
pub struct CipherModes;
