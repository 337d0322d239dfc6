//! Joan Daemen's 3-Way cipher, decrypt-only
//!
//! 96-bit blocks, 96-bit key, 11 rounds. Decryption reuses the encryption
//! round function on a theta/mu-transformed key with bit-reversed words.

const ROUNDS: usize = 11;
const START_D: u32 = 0xB1B1;

#[derive(Debug)]
pub(super) struct ThreeWay {
    k: [u32; 3],
}

impl ThreeWay {
    pub(super) fn new(key: &[u8]) -> Self {
        let mut k = [0u32; 3];
        for (i, word) in k.iter_mut().enumerate() {
            *word = u32::from_be_bytes([key[4 * i], key[4 * i + 1], key[4 * i + 2], key[4 * i + 3]]);
        }
        // Transform the key for decryption
        let mut a = [k[0], k[1], k[2]];
        theta(&mut a);
        mu(&mut a);
        Self {
            k: [a[0].swap_bytes(), a[1].swap_bytes(), a[2].swap_bytes()],
        }
    }

    pub(super) fn decrypt_block(&self, block: &mut [u8]) {
        let [k0, k1, k2] = self.k;
        let mut a = [
            u32::from_le_bytes([block[0], block[1], block[2], block[3]]),
            u32::from_le_bytes([block[4], block[5], block[6], block[7]]),
            u32::from_le_bytes([block[8], block[9], block[10], block[11]]),
        ];
        let mut rc = START_D;

        mu(&mut a);
        for _ in 0..ROUNDS {
            a[0] ^= k0 ^ (rc << 16);
            a[1] ^= k1;
            a[2] ^= k2 ^ rc;
            theta(&mut a);
            pi_gamma_pi(&mut a);
            rc <<= 1;
            if rc & 0x10000 != 0 {
                rc ^= 0x11011;
            }
            rc &= 0xFFFF;
        }
        a[0] ^= k0 ^ (rc << 16);
        a[1] ^= k1;
        a[2] ^= k2 ^ rc;
        theta(&mut a);
        mu(&mut a);

        block[..4].copy_from_slice(&a[0].to_le_bytes());
        block[4..8].copy_from_slice(&a[1].to_le_bytes());
        block[8..12].copy_from_slice(&a[2].to_le_bytes());
    }
}

/// Reverse the bit order within each byte of a word.
fn reverse_bits(mut a: u32) -> u32 {
    a = ((a & 0xAAAA_AAAA) >> 1) | ((a & 0x5555_5555) << 1);
    a = ((a & 0xCCCC_CCCC) >> 2) | ((a & 0x3333_3333) << 2);
    ((a & 0xF0F0_F0F0) >> 4) | ((a & 0x0F0F_0F0F) << 4)
}

fn theta(a: &mut [u32; 3]) {
    let c0 = a[0] ^ a[1] ^ a[2];
    let c = c0.rotate_left(16) ^ c0.rotate_left(8);
    let b0 = (a[0] << 24) ^ (a[2] >> 8) ^ (a[1] << 8) ^ (a[0] >> 24);
    let b1 = (a[1] << 24) ^ (a[0] >> 8) ^ (a[2] << 8) ^ (a[1] >> 24);
    a[0] ^= c ^ b0;
    a[1] ^= c ^ b1;
    a[2] ^= c ^ ((b0 >> 16) ^ (b1 << 16));
}

fn mu(a: &mut [u32; 3]) {
    a[1] = reverse_bits(a[1]);
    let tmp = reverse_bits(a[0]);
    a[0] = reverse_bits(a[2]);
    a[2] = tmp;
}

fn pi_gamma_pi(a: &mut [u32; 3]) {
    let b2 = a[2].rotate_left(1);
    let b0 = a[0].rotate_left(22);
    a[0] = (b0 ^ (a[1] | !b2)).rotate_left(1);
    a[2] = (b2 ^ (b0 | !a[1])).rotate_left(22);
    a[1] ^= b2 | !b0;
}
