//! CAST-128 via the RustCrypto `cast5` crate
//!
//! The client uses plain RFC 2144 CAST-128 with a 128-bit key, which the
//! crate reproduces exactly.

use cipher::generic_array::GenericArray;
use cipher::{BlockDecrypt, KeyInit};

use crate::error::{Error, Result};

#[derive(Debug)]
pub(super) struct Cast128 {
    inner: cast5::Cast5,
}

impl Cast128 {
    pub(super) fn new(key: &[u8]) -> Result<Self> {
        let inner = cast5::Cast5::new_from_slice(key).map_err(|_| Error::KeySchedule {
            cipher: super::CipherKind::Cast128,
        })?;
        Ok(Self { inner })
    }

    pub(super) fn decrypt_block(&self, block: &mut [u8]) {
        self.inner
            .decrypt_block(GenericArray::from_mut_slice(block));
    }
}
