//! IDEA via the RustCrypto `idea` crate
//!
//! Standard IDEA with a 128-bit key, bit-identical to the client's build.

use cipher::generic_array::GenericArray;
use cipher::{BlockDecrypt, KeyInit};

use crate::error::{Error, Result};

#[derive(Debug)]
pub(super) struct Idea {
    inner: ::idea::Idea,
}

impl Idea {
    pub(super) fn new(key: &[u8]) -> Result<Self> {
        let inner = ::idea::Idea::new_from_slice(key).map_err(|_| Error::KeySchedule {
            cipher: super::CipherKind::Idea,
        })?;
        Ok(Self { inner })
    }

    pub(super) fn decrypt_block(&self, block: &mut [u8]) {
        self.inner
            .decrypt_block(GenericArray::from_mut_slice(block));
    }
}
