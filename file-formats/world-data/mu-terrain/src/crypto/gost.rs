//! GOST 28147-89, decrypt-only
//!
//! 64-bit blocks, 256-bit key, 32 rounds, little-endian word order, using
//! the standard's "test parameters" S-boxes (the set the client ships).

const SBOX: [[u8; 16]; 8] = [
    [4, 10, 9, 2, 13, 8, 0, 14, 6, 11, 1, 12, 7, 15, 5, 3],
    [14, 11, 4, 12, 6, 13, 15, 10, 2, 3, 8, 1, 0, 7, 5, 9],
    [5, 8, 1, 13, 10, 3, 4, 2, 14, 15, 12, 7, 6, 0, 9, 11],
    [7, 13, 10, 1, 0, 8, 9, 15, 14, 4, 6, 12, 11, 2, 5, 3],
    [6, 12, 7, 1, 5, 15, 13, 8, 4, 10, 9, 14, 0, 3, 11, 2],
    [4, 11, 10, 0, 7, 2, 1, 13, 3, 6, 8, 5, 9, 12, 15, 14],
    [13, 11, 4, 1, 3, 15, 5, 9, 0, 10, 14, 7, 6, 8, 2, 12],
    [1, 15, 13, 0, 5, 7, 10, 4, 9, 2, 3, 14, 6, 11, 8, 12],
];

#[derive(Debug)]
pub(super) struct Gost {
    // Full 32-round decryption schedule: K0..K7 then K7..K0 three times
    schedule: [u32; 32],
}

impl Gost {
    pub(super) fn new(key: &[u8]) -> Self {
        let mut k = [0u32; 8];
        for (i, word) in k.iter_mut().enumerate() {
            *word = u32::from_le_bytes([key[4 * i], key[4 * i + 1], key[4 * i + 2], key[4 * i + 3]]);
        }
        let mut schedule = [0u32; 32];
        schedule[..8].copy_from_slice(&k);
        for rep in 0..3 {
            for i in 0..8 {
                schedule[8 + rep * 8 + i] = k[7 - i];
            }
        }
        Self { schedule }
    }

    pub(super) fn decrypt_block(&self, block: &mut [u8]) {
        let mut n1 = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        let mut n2 = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);

        for &round_key in &self.schedule[..31] {
            let mixed = substitute(n1.wrapping_add(round_key)).rotate_left(11);
            let next = n2 ^ mixed;
            n2 = n1;
            n1 = next;
        }
        // Final round leaves the halves unswapped
        let mixed = substitute(n1.wrapping_add(self.schedule[31])).rotate_left(11);
        n2 ^= mixed;

        block[..4].copy_from_slice(&n1.to_le_bytes());
        block[4..8].copy_from_slice(&n2.to_le_bytes());
    }
}

fn substitute(value: u32) -> u32 {
    let mut out = 0u32;
    for (i, sbox) in SBOX.iter().enumerate() {
        let nibble = (value >> (4 * i)) & 0xF;
        out |= u32::from(sbox[nibble as usize]) << (4 * i);
    }
    out
}
