//! # Cipher Toolkit
//!
//! An educational collection of classical and simple modern ciphers behind one
//! `encrypt`/`decrypt` interface. Nothing here is meant to protect real secrets.
//!
//! ## Supported Ciphers
//!
//! - **Caesar**, **Monoalphabetic**, **Vigenère**: letter substitution
//! - **Playfair**: digraph substitution over a 5x5 grid
//! - **Hill**: 2x2 or 3x3 matrix multiplication mod 26
//! - **Permutation**, **Row Transposition**: character reordering
//! - **One-Time Pad**: letters (mod 26) or XOR (hex/base64 output)
//! - **DES** (ECB) and **AES-256** (CBC): key/padding glue around RustCrypto primitives
//!
//! ## Usage
//!
//! ```rust
//! use cipher_toolkit::{registry, CipherKind, CipherRequest};
//!
//! let request = CipherRequest::new("ATTACKATDAWN", "LEMON");
//! let ciphertext = registry::encrypt(CipherKind::Vigenere, &request)?;
//! assert_eq!(ciphertext, "LXFOPVEFRNHR");
//!
//! let otp = registry::lookup("otp").unwrap();
//! let request = CipherRequest::new("Hello", "abcde")
//!     .with_option("mode", "xor")
//!     .with_option("format", "base64");
//! let encrypted = otp.encrypt(&request)?;
//! let plaintext = otp.decrypt(&CipherRequest { payload: encrypted, ..request })?;
//! assert_eq!(plaintext, "Hello");
//! # Ok::<(), cipher_toolkit::CipherError>(())
//! ```

pub mod block;
pub mod cipher;
pub mod error;
pub mod hill;
pub mod modes;
pub mod modular;
pub mod otp;
pub mod playfair;
pub mod registry;
pub mod request;
pub mod substitution;
pub mod text;
pub mod transposition;
pub mod utils;

// Re-exports for easy access
pub use cipher::BlockCipher;
pub use error::{CipherError, ErrorKind, Result};
pub use modes::CipherModes;
pub use otp::{OtpMode, OutputFormat};
pub use registry::{CipherEntry, CipherKind, Direction};
pub use request::CipherRequest;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
