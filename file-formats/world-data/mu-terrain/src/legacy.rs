//! Pre-Season16 terrain file decryption
//!
//! Older clients shipped `EncTerrain*.att`/`.map` without the modulus magic,
//! protected by a byte-stream XOR with a 16-byte key and a rolling additive
//! component seeded from a constant. Attribute files take the BUX mask on
//! top, mapping files do not — the same asymmetry as the modern format.
//!
//! These routines are infallible: any input length (including empty) is
//! valid, and there is nothing to classify — callers opt in per file.

use crate::framing::AssetKind;
use crate::postprocess::xor_bux_mask;

/// Stream XOR key used by pre-Season16 terrain files.
pub const MAP_XOR_KEY: [u8; 16] = [
    0xD1, 0x73, 0x52, 0xF6, 0xD2, 0x9A, 0xCB, 0x27, 0x3E, 0xAF, 0x59, 0x31, 0x37, 0xB3, 0xE7, 0xA2,
];

/// Initial value of the rolling additive key.
const MAP_KEY_SEED: u8 = 0x5E;

/// Decrypt the legacy rolling-XOR stream.
///
/// Each output byte is the input byte XORed with the repeating key, minus a
/// rolling value that is reseeded from the previous *input* byte.
pub fn map_file_decrypt(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut key = MAP_KEY_SEED;
    for (i, &byte) in data.iter().enumerate() {
        out.push((byte ^ MAP_XOR_KEY[i % MAP_XOR_KEY.len()]).wrapping_sub(key));
        key = byte.wrapping_add(0x3D);
    }
    out
}

/// Decrypt a legacy terrain file of the given kind.
///
/// `.att` data takes the BUX mask after the stream decrypt, `.map` data is
/// returned as the stream decrypt alone.
pub fn decrypt_legacy(kind: AssetKind, data: &[u8]) -> Vec<u8> {
    let mut out = map_file_decrypt(data);
    if kind == AssetKind::Att {
        xor_bux_mask(&mut out);
    }
    out
}
