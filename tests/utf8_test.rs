// utf8_test.rs - Codec integration tests: round-trips for every scalar
// value and the ill-formed byte sequences of Unicode Table 3-7.

use ferrune::types::*;
use ferrune::utf8::{charbound_encode_char, codepoint_valid, encode_char, iterate};

fn ok(bytes: &[u8], cp: Codepoint, width: isize) {
    let mut out = -2;
    let n = iterate(bytes, &mut out);
    assert_eq!(n, width, "width mismatch for {:02X?}", bytes);
    assert_eq!(out, cp, "codepoint mismatch for {:02X?}", bytes);
}

fn bad(bytes: &[u8]) {
    let mut out = -2;
    let n = iterate(bytes, &mut out);
    assert_eq!(n, ERR_INVALIDUTF8, "expected rejection of {:02X?}", bytes);
    assert_eq!(out, -1, "codepoint must be -1 on error for {:02X?}", bytes);
}

#[test]
fn round_trip_every_scalar() {
    let mut buf = [0u8; 4];
    for cp in 0..0x110000 {
        if !codepoint_valid(cp) {
            continue;
        }
        let n = encode_char(cp, &mut buf);
        assert!(n >= 1 && n <= 4);
        let mut out = -2;
        let m = iterate(&buf[..n], &mut out);
        assert_eq!(m as usize, n, "width drift at U+{:04X}", cp);
        assert_eq!(out, cp, "value drift at U+{:04X}", cp);
    }
}

#[test]
fn boundary_widths() {
    ok(b"\x7F", 0x7F, 1);
    ok(b"\xC2\x80", 0x80, 2);
    ok(b"\xDF\xBF", 0x7FF, 2);
    ok(b"\xE0\xA0\x80", 0x800, 3);
    ok(b"\xED\x9F\xBF", 0xD7FF, 3);
    ok(b"\xEE\x80\x80", 0xE000, 3);
    ok(b"\xEF\xBF\xBF", 0xFFFF, 3);
    ok(b"\xF0\x90\x80\x80", 0x10000, 4);
    ok(b"\xF4\x8F\xBF\xBF", 0x10FFFF, 4);
}

#[test]
fn table_3_7_rejections() {
    // bad lead bytes
    bad(b"\x80");
    bad(b"\xBF");
    bad(b"\xC0\x80"); // over-long NUL
    bad(b"\xC1\xBF");
    bad(b"\xF5\x80\x80\x80");
    bad(b"\xFE");
    bad(b"\xFF");
    // over-long forms
    bad(b"\xE0\x80\xAF");
    bad(b"\xE0\x9F\xBF");
    bad(b"\xF0\x80\x80\x80");
    bad(b"\xF0\x8F\xBF\xBF");
    // surrogates
    bad(b"\xED\xA0\x80");
    bad(b"\xED\xAD\xBF");
    bad(b"\xED\xBF\xBF");
    // beyond U+10FFFF
    bad(b"\xF4\x90\x80\x80");
    // truncated sequences
    bad(b"\xC2");
    bad(b"\xE0\xA0");
    bad(b"\xF0\x90\x80");
    // broken continuations
    bad(b"\xC2\x41");
    bad(b"\xE0\xA0\xC0");
    bad(b"\xF0\x90\x41\x80");
}

#[test]
fn empty_is_zero_not_error() {
    let mut out = 7;
    assert_eq!(iterate(b"", &mut out), 0);
    assert_eq!(out, -1);
}

#[test]
fn decode_stream_ignores_trailing_bytes() {
    // only the first sequence is consumed
    ok("éx".as_bytes(), 0xE9, 2);
    ok("𝄞rest".as_bytes(), 0x1D11E, 4);
}

#[test]
fn surrogate_encode_asymmetry() {
    // encode still emits the historical 3-byte form; decode refuses it
    let mut buf = [0u8; 4];
    for cp in [0xD800, 0xDBFF, 0xDC00, 0xDFFF] {
        let n = encode_char(cp, &mut buf);
        assert_eq!(n, 3, "U+{:04X}", cp);
        bad(&buf[..3]);
    }
}

#[test]
fn charbound_byte() {
    let mut buf = [0u8; 4];
    assert_eq!(charbound_encode_char(-1, &mut buf), 1);
    assert_eq!(buf[0], 0xFF);
    assert_eq!(charbound_encode_char(0x10348, &mut buf), 4);
}
