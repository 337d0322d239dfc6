//! # mu_terrain - MU Online Terrain Decryption Library
//!
//! A safe Rust implementation of the two-stage "modulus" encryption scheme
//! protecting MU Online Season16+ terrain assets (`EncTerrain*.att` and
//! `EncTerrain*.map`), plus the rolling-XOR scheme used by older clients.
//!
//! ## Format
//!
//! A modern terrain file starts with a 4-byte magic (`ATT\x01` or `MAP\x01`)
//! followed by the modulus body: two cipher selector bytes, a 32-byte
//! stage-two key, and the payload. Stage one decrypts three fixed windows of
//! the body with a compiled-in key, stage two decrypts the payload with the
//! key recovered from the header. Attribute payloads are additionally XORed
//! with a repeating 3-byte mask.
//!
//! ## Examples
//!
//! ```no_run
//! use mu_terrain::{AssetKind, decrypt_asset};
//!
//! # fn main() -> Result<(), mu_terrain::Error> {
//! let raw = std::fs::read("EncTerrain1.att")?;
//! let (kind, plain) = decrypt_asset(&raw)?;
//! assert_eq!(kind, AssetKind::Att);
//! println!("{} bytes of {} data", plain.len(), kind);
//! # Ok(())
//! # }
//! ```
//!
//! Working on a raw modulus body directly:
//!
//! ```
//! use mu_terrain::{HEADER_LEN, modulus_decrypt};
//!
//! # fn main() -> Result<(), mu_terrain::Error> {
//! let mut body = vec![0u8; HEADER_LEN + 16];
//! modulus_decrypt(&mut body)?;
//! assert_eq!(body.len(), 16);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod crypto;
pub mod error;
pub mod framing;
pub mod legacy;
pub mod modulus;
pub mod postprocess;

pub use crypto::{CipherKind, ModulusCipher};
pub use error::{Error, Result};
pub use framing::{ATT_MAGIC, AssetKind, MAP_MAGIC, decrypt_asset};
pub use legacy::{MAP_XOR_KEY, decrypt_legacy};
pub use modulus::{HEADER_LEN, MODULUS_KEY, modulus_decrypt};
pub use postprocess::{BUX_MASK, xor_bux_mask};
