//! RC5-32/16/16, decrypt-only
//!
//! 64-bit blocks, 128-bit key, 16 rounds (the client's round count, not the
//! textbook 12), little-endian word order.

const ROUNDS: usize = 16;
const P32: u32 = 0xB7E1_5163;
const Q32: u32 = 0x9E37_79B9;
const TABLE_LEN: usize = 2 * (ROUNDS + 1);

#[derive(Debug)]
pub(super) struct Rc5 {
    s: [u32; TABLE_LEN],
}

impl Rc5 {
    pub(super) fn new(key: &[u8]) -> Self {
        Self {
            s: expand_key(key),
        }
    }

    pub(super) fn decrypt_block(&self, block: &mut [u8]) {
        let s = &self.s;
        let mut a = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        let mut b = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);

        for i in (1..=ROUNDS).rev() {
            b = b.wrapping_sub(s[2 * i + 1]).rotate_right(a & 31) ^ a;
            a = a.wrapping_sub(s[2 * i]).rotate_right(b & 31) ^ b;
        }
        b = b.wrapping_sub(s[1]);
        a = a.wrapping_sub(s[0]);

        block[..4].copy_from_slice(&a.to_le_bytes());
        block[4..8].copy_from_slice(&b.to_le_bytes());
    }
}

fn expand_key(key: &[u8]) -> [u32; TABLE_LEN] {
    let c = (key.len() / 4).max(1);
    let mut l = vec![0u32; c];
    for i in (0..key.len()).rev() {
        l[i / 4] = (l[i / 4] << 8).wrapping_add(u32::from(key[i]));
    }

    let mut s = [0u32; TABLE_LEN];
    s[0] = P32;
    for i in 1..TABLE_LEN {
        s[i] = s[i - 1].wrapping_add(Q32);
    }

    let (mut a, mut b) = (0u32, 0u32);
    let (mut i, mut j) = (0usize, 0usize);
    for _ in 0..3 * TABLE_LEN.max(c) {
        a = s[i].wrapping_add(a).wrapping_add(b).rotate_left(3);
        s[i] = a;
        let shift = a.wrapping_add(b) & 31;
        b = l[j].wrapping_add(a).wrapping_add(b).rotate_left(shift);
        l[j] = b;
        i = (i + 1) % TABLE_LEN;
        j = (j + 1) % c;
    }
    s
}
