//! Static catalog mapping each cipher to its encrypt/decrypt pair
//!
//! Adding a cipher means adding a [`CipherKind`] variant and one [`REGISTRY`] entry.

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::request::CipherRequest;
use crate::substitution::{caesar, monoalphabetic, vigenere};
use crate::transposition::{permutation, row};
use crate::{block, hill, otp, playfair};

/// Signature every registered transform is adapted to.
pub type CipherFn = fn(&CipherRequest) -> Result<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    Caesar,
    Monoalphabetic,
    Playfair,
    Vigenere,
    OneTimePad,
    Hill,
    RowTransposition,
    Permutation,
    Des,
    Aes,
}

impl CipherKind {
    pub const ALL: [CipherKind; 10] = [
        CipherKind::Caesar,
        CipherKind::Monoalphabetic,
        CipherKind::Playfair,
        CipherKind::Vigenere,
        CipherKind::OneTimePad,
        CipherKind::Hill,
        CipherKind::RowTransposition,
        CipherKind::Permutation,
        CipherKind::Des,
        CipherKind::Aes,
    ];

    pub fn entry(self) -> &'static CipherEntry {
        // REGISTRY is declared in variant order
        &REGISTRY[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn slug(self) -> &'static str {
        self.entry().slug
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// One registered cipher.
#[derive(Clone, Copy)]
pub struct CipherEntry {
    pub kind: CipherKind,
    /// Human-readable name shown to users.
    pub name: &'static str,
    /// Short lowercase identifier for command lines.
    pub slug: &'static str,
    encrypt_fn: CipherFn,
    decrypt_fn: CipherFn,
}

impl fmt::Debug for CipherEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherEntry")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("slug", &self.slug)
            .finish_non_exhaustive()
    }
}

impl CipherEntry {
    pub fn encrypt(&self, request: &CipherRequest) -> Result<String> {
        self.run(Direction::Encrypt, request)
    }

    pub fn decrypt(&self, request: &CipherRequest) -> Result<String> {
        self.run(Direction::Decrypt, request)
    }

    pub fn run(&self, direction: Direction, request: &CipherRequest) -> Result<String> {
        debug!(
            cipher = self.name,
            %direction,
            payload_len = request.payload.len(),
            options = ?request.options,
            "dispatching cipher"
        );
        let transform = match direction {
            Direction::Encrypt => self.encrypt_fn,
            Direction::Decrypt => self.decrypt_fn,
        };
        let result = transform(request);
        if let Err(err) = &result {
            debug!(cipher = self.name, %direction, kind = ?err.kind(), "cipher rejected input");
        }
        result
    }
}

macro_rules! text_cipher {
    ($kind:ident, $name:literal, $slug:literal, $encrypt:path, $decrypt:path) => {
        CipherEntry {
            kind: CipherKind::$kind,
            name: $name,
            slug: $slug,
            encrypt_fn: |request| $encrypt(&request.payload, &request.key),
            decrypt_fn: |request| $decrypt(&request.payload, &request.key),
        }
    };
}

fn otp_encrypt(request: &CipherRequest) -> Result<String> {
    let mode = request.otp_mode()?;
    let format = request.output_format()?;
    otp::encrypt(&request.payload, &request.key, mode, format)
}

fn otp_decrypt(request: &CipherRequest) -> Result<String> {
    let mode = request.otp_mode()?;
    let format = request.output_format()?;
    otp::decrypt(&request.payload, &request.key, mode, format)
}

pub static REGISTRY: [CipherEntry; 10] = [
    text_cipher!(Caesar, "Caesar Cipher", "caesar", caesar::encrypt, caesar::decrypt),
    text_cipher!(
        Monoalphabetic,
        "Monoalphabetic",
        "monoalphabetic",
        monoalphabetic::encrypt,
        monoalphabetic::decrypt
    ),
    text_cipher!(Playfair, "Playfair Cipher", "playfair", playfair::encrypt, playfair::decrypt),
    text_cipher!(Vigenere, "Vigenère Cipher", "vigenere", vigenere::encrypt, vigenere::decrypt),
    CipherEntry {
        kind: CipherKind::OneTimePad,
        name: "One-Time Pad",
        slug: "otp",
        encrypt_fn: otp_encrypt,
        decrypt_fn: otp_decrypt,
    },
    text_cipher!(Hill, "Hill Cipher", "hill", hill::encrypt, hill::decrypt),
    text_cipher!(
        RowTransposition,
        "Row Transposition",
        "row-transposition",
        row::encrypt,
        row::decrypt
    ),
    text_cipher!(
        Permutation,
        "Permutation",
        "permutation",
        permutation::encrypt,
        permutation::decrypt
    ),
    text_cipher!(Des, "DES", "des", block::des_encrypt, block::des_decrypt),
    text_cipher!(Aes, "AES", "aes", block::aes_encrypt, block::aes_decrypt),
];

/// All registered ciphers in display order.
pub fn entries() -> &'static [CipherEntry] {
    &REGISTRY
}

/// Finds a cipher by exact display name or case-insensitive slug.
pub fn lookup(name: &str) -> Option<&'static CipherEntry> {
    let name = name.trim();
    REGISTRY
        .iter()
        .find(|entry| entry.name == name || entry.slug.eq_ignore_ascii_case(name))
}

pub fn encrypt(kind: CipherKind, request: &CipherRequest) -> Result<String> {
    kind.entry().encrypt(request)
}

pub fn decrypt(kind: CipherKind, request: &CipherRequest) -> Result<String> {
    kind.entry().decrypt(request)
}
