//! BUX post-processing mask
//!
//! Attribute payloads get one more trivial layer after ModulusDecrypt: a
//! repeating 3-byte XOR. Map payloads do not.

/// The repeating 3-byte mask applied to attribute payloads.
pub const BUX_MASK: [u8; 3] = [0xFC, 0xCF, 0xAB];

/// XOR every byte of `data` with the repeating [`BUX_MASK`], in place.
/// Infallible; self-inverse.
pub fn xor_bux_mask(data: &mut [u8]) {
    for (i, byte) in data.iter_mut().enumerate() {
        *byte ^= BUX_MASK[i % 3];
    }
}
