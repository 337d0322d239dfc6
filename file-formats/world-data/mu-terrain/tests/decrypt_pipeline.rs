//! End-to-end decryption tests against captured terrain files.
//!
//! The `.bin` fixtures are encrypted terrain assets, the `.dec` files hold
//! the expected plaintext produced by the reference client converter.

use mu_terrain::{AssetKind, Error, decrypt_asset};
use pretty_assertions::assert_eq;

const ATT_SMALL: &[u8] = include_bytes!("data/att_small.bin");
const ATT_SMALL_DEC: &[u8] = include_bytes!("data/att_small.dec");
const MAP_WINDOWS: &[u8] = include_bytes!("data/map_windows.bin");
const MAP_WINDOWS_DEC: &[u8] = include_bytes!("data/map_windows.dec");
const ATT_MIDPOINT: &[u8] = include_bytes!("data/att_midpoint.bin");
const ATT_MIDPOINT_DEC: &[u8] = include_bytes!("data/att_midpoint.dec");

#[test]
fn decrypts_small_attribute_file() {
    let (kind, plain) = decrypt_asset(ATT_SMALL).unwrap();
    assert_eq!(kind, AssetKind::Att);
    assert_eq!(plain, ATT_SMALL_DEC);
}

#[test]
fn decrypts_map_file_spanning_stage_one_windows() {
    // Large enough that the tail and header windows of stage one apply
    let (kind, plain) = decrypt_asset(MAP_WINDOWS).unwrap();
    assert_eq!(kind, AssetKind::Map);
    assert_eq!(plain, MAP_WINDOWS_DEC);
}

#[test]
fn decrypts_attribute_file_spanning_midpoint_window() {
    // Payload larger than four stage-one blocks, all three windows apply
    let (kind, plain) = decrypt_asset(ATT_MIDPOINT).unwrap();
    assert_eq!(kind, AssetKind::Att);
    assert_eq!(plain, ATT_MIDPOINT_DEC);
}

#[test]
fn decryption_is_deterministic() {
    let first = decrypt_asset(MAP_WINDOWS).unwrap();
    let second = decrypt_asset(MAP_WINDOWS).unwrap();
    assert_eq!(first, second);
}

#[test]
fn rejects_unknown_magic() {
    let mut raw = ATT_SMALL.to_vec();
    raw[..4].copy_from_slice(b"XYZ\x01");
    match decrypt_asset(&raw) {
        Err(Error::UnknownMagic { magic }) => assert_eq!(&magic, b"XYZ\x01"),
        other => panic!("expected UnknownMagic, got {other:?}"),
    }
}

#[test]
fn rejects_truncated_body() {
    // Magic plus a body shorter than the 34-byte modulus header
    match decrypt_asset(&ATT_SMALL[..24]) {
        Err(Error::TooShort { actual }) => assert_eq!(actual, 20),
        other => panic!("expected TooShort, got {other:?}"),
    }
}
