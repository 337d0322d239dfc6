//! The ModulusDecrypt two-stage scheme used by Season16+ EncTerrain files
//!
//! The encrypted body carries a 34-byte header: two cipher selector bytes
//! followed by a 32-byte key-material region. Stage 1 uses a fixed key baked
//! into the client to decrypt a few scattered windows of the buffer, which
//! recovers the key-material region; stage 2 then decrypts the payload with
//! that self-derived key. The window placement below looks arbitrary because
//! it is — it is obfuscation in the original format and has to be matched
//! bit-for-bit, including the strict comparisons and the decryption order.

use log::{debug, trace};

use crate::crypto::{CipherKind, ModulusCipher};
use crate::error::{Error, Result};

/// Length of the ModulusDecrypt header: two selector bytes plus the 32-byte
/// key-material region.
pub const HEADER_LEN: usize = 34;

/// Fixed stage-1 key material, identical in every client build.
pub const MODULUS_KEY: &[u8; 32] = b"webzen#@!01webzen#@!01webzen#@!0";

/// Decrypt a ModulusDecrypt body in place.
///
/// On success the 34-byte header is removed and `buf` holds only the
/// decrypted payload. On failure `buf` may hold partially decrypted bytes
/// and must not be used; callers emit no output in that case.
///
/// A 34-byte body is legal and yields an empty payload. A payload shorter
/// than the stage-2 block size is passed through untouched by stage 2,
/// which is a valid outcome, not an error.
pub fn modulus_decrypt(buf: &mut Vec<u8>) -> Result<()> {
    let size = buf.len();
    if size < HEADER_LEN {
        return Err(Error::TooShort { actual: size });
    }

    // The byte order is part of the format: byte 1 selects the stage-1
    // cipher, byte 0 the stage-2 cipher.
    let algorithm1 = buf[1];
    let algorithm2 = buf[0];
    let data_size = size - HEADER_LEN;

    let kind1 = CipherKind::from_selector(algorithm1);
    let cipher1 = ModulusCipher::new(kind1, MODULUS_KEY)?;
    // Stage-1 chunk: the largest multiple of the block size that fits in 1 KiB
    let block_size = 1024 - (1024 % cipher1.block_size());
    debug!(
        "stage 1: {} (chunk {} bytes), payload {} bytes",
        kind1, block_size, data_size
    );

    if data_size > 4 * block_size {
        let mid = 2 + (data_size >> 1);
        trace!("stage 1: midpoint window at {mid}");
        cipher1.decrypt(&mut buf[mid..mid + block_size]);
    }
    if data_size > block_size {
        trace!("stage 1: tail and key-region windows");
        cipher1.decrypt(&mut buf[size - block_size..]);
        cipher1.decrypt(&mut buf[2..2 + block_size]);
    }
    drop(cipher1);

    // The key-material region is now plaintext; it is the stage-2 key.
    let mut key2 = [0u8; 32];
    key2.copy_from_slice(&buf[2..HEADER_LEN]);

    let kind2 = CipherKind::from_selector(algorithm2);
    let cipher2 = ModulusCipher::new(kind2, &key2)?;
    let decrypt_size = data_size - (data_size % cipher2.block_size());
    debug!("stage 2: {} over {} of {} bytes", kind2, decrypt_size, data_size);
    cipher2.decrypt(&mut buf[HEADER_LEN..HEADER_LEN + decrypt_size]);

    buf.drain(..HEADER_LEN);
    Ok(())
}
