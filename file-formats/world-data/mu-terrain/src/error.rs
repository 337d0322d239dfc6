//! Error types for the terrain decryption library

use std::io;
use thiserror::Error;

use crate::crypto::CipherKind;

/// Result type alias for terrain operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for terrain decryption
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Encrypted body is smaller than the 34-byte ModulusDecrypt header
    #[error("Encrypted body too short: {actual} bytes, need at least 34")]
    TooShort {
        /// Actual body length in bytes
        actual: usize,
    },

    /// A cipher primitive rejected the supplied key material
    #[error("Key schedule failed for {cipher}")]
    KeySchedule {
        /// The cipher that rejected the key
        cipher: CipherKind,
    },

    /// File does not start with a recognized 4-byte magic
    #[error("Unknown magic {magic:02X?}: expected ATT\\x01 or MAP\\x01")]
    UnknownMagic {
        /// The first four bytes of the file
        magic: [u8; 4],
    },
}
