//! Asset framing: the 4-byte magic prefix and the full decryption pipeline

use log::info;

use crate::error::{Error, Result};
use crate::modulus::modulus_decrypt;
use crate::postprocess::xor_bux_mask;

/// Magic prefix of Season16+ terrain attribute files.
pub const ATT_MAGIC: [u8; 4] = *b"ATT\x01";
/// Magic prefix of Season16+ terrain mapping files.
pub const MAP_MAGIC: [u8; 4] = *b"MAP\x01";

/// The two encrypted terrain asset kinds, distinguished by magic prefix.
///
/// The kind decides post-processing: attribute payloads take the BUX XOR
/// mask after ModulusDecrypt, mapping payloads are emitted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Terrain attribute / collision data (`.att`)
    Att,
    /// Terrain tile mapping data (`.map`)
    Map,
}

impl AssetKind {
    /// Classify a raw file by its 4-byte magic prefix.
    ///
    /// Fails with [`Error::UnknownMagic`] for anything else, including
    /// inputs shorter than 4 bytes — before any decryption work happens.
    pub fn classify(raw: &[u8]) -> Result<Self> {
        let magic: [u8; 4] = raw
            .get(..4)
            .and_then(|m| m.try_into().ok())
            .ok_or(Error::UnknownMagic { magic: [0; 4] })?;
        match magic {
            ATT_MAGIC => Ok(Self::Att),
            MAP_MAGIC => Ok(Self::Map),
            _ => Err(Error::UnknownMagic { magic }),
        }
    }

    /// File extension conventionally used for this kind.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Att => "att",
            Self::Map => "map",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Att => f.write_str("ATT"),
            Self::Map => f.write_str("MAP"),
        }
    }
}

/// Decrypt a complete terrain asset file.
///
/// Classifies the magic, strips it, runs ModulusDecrypt on the body, and
/// applies the BUX mask for attribute assets. Returns the kind and the raw
/// decrypted payload. On any failure nothing is returned, so callers never
/// see partially decrypted bytes.
///
/// The format carries no integrity check: decrypting corrupt or mismatched
/// input "succeeds" with garbage bytes.
pub fn decrypt_asset(raw: &[u8]) -> Result<(AssetKind, Vec<u8>)> {
    let kind = AssetKind::classify(raw)?;
    let mut body = raw[4..].to_vec();
    modulus_decrypt(&mut body)?;
    if kind == AssetKind::Att {
        xor_bux_mask(&mut body);
    }
    info!("decrypted {} asset, {} payload bytes", kind, body.len());
    Ok((kind, body))
}
