//! TEA (Tiny Encryption Algorithm), decrypt-only
//!
//! 64-bit blocks, 128-bit key, 32 rounds, big-endian word order.

const DELTA: u32 = 0x9E37_79B9;
const ROUNDS: u32 = 32;

#[derive(Debug)]
pub(super) struct Tea {
    k: [u32; 4],
}

impl Tea {
    pub(super) fn new(key: &[u8]) -> Self {
        let mut k = [0u32; 4];
        for (i, word) in k.iter_mut().enumerate() {
            *word = u32::from_be_bytes([key[4 * i], key[4 * i + 1], key[4 * i + 2], key[4 * i + 3]]);
        }
        Self { k }
    }

    pub(super) fn decrypt_block(&self, block: &mut [u8]) {
        let [k0, k1, k2, k3] = self.k;
        let mut v0 = u32::from_be_bytes([block[0], block[1], block[2], block[3]]);
        let mut v1 = u32::from_be_bytes([block[4], block[5], block[6], block[7]]);
        let mut sum = DELTA.wrapping_mul(ROUNDS);

        for _ in 0..ROUNDS {
            v1 = v1.wrapping_sub(
                (v0 << 4).wrapping_add(k2) ^ v0.wrapping_add(sum) ^ (v0 >> 5).wrapping_add(k3),
            );
            v0 = v0.wrapping_sub(
                (v1 << 4).wrapping_add(k0) ^ v1.wrapping_add(sum) ^ (v1 >> 5).wrapping_add(k1),
            );
            sum = sum.wrapping_sub(DELTA);
        }

        block[..4].copy_from_slice(&v0.to_be_bytes());
        block[4..8].copy_from_slice(&v1.to_be_bytes());
    }
}
