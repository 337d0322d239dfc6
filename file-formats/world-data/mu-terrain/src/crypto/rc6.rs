//! RC6-32/20/16, decrypt-only
//!
//! 128-bit blocks, 128-bit key, 20 rounds, little-endian word order.

const ROUNDS: usize = 20;
const P32: u32 = 0xB7E1_5163;
const Q32: u32 = 0x9E37_79B9;
const TABLE_LEN: usize = 2 * ROUNDS + 4;

#[derive(Debug)]
pub(super) struct Rc6 {
    s: [u32; TABLE_LEN],
}

impl Rc6 {
    pub(super) fn new(key: &[u8]) -> Self {
        Self {
            s: expand_key(key),
        }
    }

    pub(super) fn decrypt_block(&self, block: &mut [u8]) {
        let s = &self.s;
        let mut a = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        let mut b = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);
        let mut c = u32::from_le_bytes([block[8], block[9], block[10], block[11]]);
        let mut d = u32::from_le_bytes([block[12], block[13], block[14], block[15]]);

        c = c.wrapping_sub(s[2 * ROUNDS + 3]);
        a = a.wrapping_sub(s[2 * ROUNDS + 2]);

        for i in (1..=ROUNDS).rev() {
            (a, b, c, d) = (d, a, b, c);
            let u = d.wrapping_mul(d.wrapping_add(d).wrapping_add(1)).rotate_left(5);
            let t = b.wrapping_mul(b.wrapping_add(b).wrapping_add(1)).rotate_left(5);
            c = c.wrapping_sub(s[2 * i + 1]).rotate_right(t & 31) ^ u;
            a = a.wrapping_sub(s[2 * i]).rotate_right(u & 31) ^ t;
        }

        d = d.wrapping_sub(s[1]);
        b = b.wrapping_sub(s[0]);

        block[..4].copy_from_slice(&a.to_le_bytes());
        block[4..8].copy_from_slice(&b.to_le_bytes());
        block[8..12].copy_from_slice(&c.to_le_bytes());
        block[12..16].copy_from_slice(&d.to_le_bytes());
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
