// utf8.rs - UTF-8 codec: validating decode, encode, charbound encode.

use crate::types::*;

#[inline]
fn utf8_istail(c: u8) -> bool {
    (c & 0xC0) == 0x80
}

/// Is `cp` a Unicode scalar value (in range and not a surrogate)?
#[inline]
pub fn codepoint_valid(cp: Codepoint) -> bool {
    (0..0x110000).contains(&cp) && !(0xD800..0xE000).contains(&cp)
}

/// Decode one codepoint from the front of `buf`.
///
/// On success, stores the codepoint in `cp_ref` and returns the number of
/// bytes consumed. Empty input returns 0. Ill-formed input (bad lead byte,
/// bad or missing continuation, over-long form, surrogate, value above
/// U+10FFFF) returns `ERR_INVALIDUTF8`; `cp_ref` is -1 on any non-decode.
pub fn iterate(buf: &[u8], cp_ref: &mut Codepoint) -> isize {
    *cp_ref = -1;
    let b0 = match buf.first() {
        Some(&b) => b,
        None => return 0,
    };
    if b0 < 0x80 {
        *cp_ref = b0 as Codepoint;
        return 1;
    }
    // lead byte must be 0xC2..=0xF4: 0x80..0xC1 are continuations or
    // over-long 2-byte leads, 0xF5..0xFF would exceed U+10FFFF
    if !(0xC2..=0xF4).contains(&b0) {
        return ERR_INVALIDUTF8;
    }
    if b0 <= 0xDF {
        match buf.get(1) {
            Some(&b1) if utf8_istail(b1) => {
                *cp_ref = ((b0 as Codepoint & 0x1F) << 6) | (b1 as Codepoint & 0x3F);
                2
            }
            _ => ERR_INVALIDUTF8,
        }
    } else if b0 <= 0xEF {
        let (b1, b2) = match (buf.get(1), buf.get(2)) {
            (Some(&b1), Some(&b2)) => (b1, b2),
            _ => return ERR_INVALIDUTF8,
        };
        if !utf8_istail(b1) || !utf8_istail(b2) {
            return ERR_INVALIDUTF8;
        }
        if b0 == 0xE0 && b1 < 0xA0 {
            return ERR_INVALIDUTF8; // over-long
        }
        if b0 == 0xED && b1 > 0x9F {
            return ERR_INVALIDUTF8; // surrogate
        }
        *cp_ref = ((b0 as Codepoint & 0x0F) << 12)
            | ((b1 as Codepoint & 0x3F) << 6)
            | (b2 as Codepoint & 0x3F);
        3
    } else {
        let (b1, b2, b3) = match (buf.get(1), buf.get(2), buf.get(3)) {
            (Some(&b1), Some(&b2), Some(&b3)) => (b1, b2, b3),
            _ => return ERR_INVALIDUTF8,
        };
        if !utf8_istail(b1) || !utf8_istail(b2) || !utf8_istail(b3) {
            return ERR_INVALIDUTF8;
        }
        if b0 == 0xF0 && b1 < 0x90 {
            return ERR_INVALIDUTF8; // over-long
        }
        if b0 == 0xF4 && b1 > 0x8F {
            return ERR_INVALIDUTF8; // above U+10FFFF
        }
        *cp_ref = ((b0 as Codepoint & 0x07) << 18)
            | ((b1 as Codepoint & 0x3F) << 12)
            | ((b2 as Codepoint & 0x3F) << 6)
            | (b3 as Codepoint & 0x3F);
        4
    }
}

/// Encode `cp` into `dst` (which must hold at least 4 bytes) and return the
/// number of bytes written, or 0 for out-of-range codepoints.
///
/// Surrogates are still encoded to their 3-byte form; this asymmetry with
/// [`iterate`] is a deliberate part of the API contract. Callers wanting
/// strict UTF-8 output should pre-filter with [`codepoint_valid`].
pub fn encode_char(cp: Codepoint, dst: &mut [u8]) -> usize {
    if cp < 0 {
        0
    } else if cp < 0x80 {
        dst[0] = cp as u8;
        1
    } else if cp < 0x800 {
        dst[0] = 0xC0 | (cp >> 6) as u8;
        dst[1] = 0x80 | (cp as u8 & 0x3F);
        2
    } else if cp < 0x10000 {
        dst[0] = 0xE0 | (cp >> 12) as u8;
        dst[1] = 0x80 | ((cp >> 6) as u8 & 0x3F);
        dst[2] = 0x80 | (cp as u8 & 0x3F);
        3
    } else if cp < 0x110000 {
        dst[0] = 0xF0 | (cp >> 18) as u8;
        dst[1] = 0x80 | ((cp >> 12) as u8 & 0x3F);
        dst[2] = 0x80 | ((cp >> 6) as u8 & 0x3F);
        dst[3] = 0x80 | (cp as u8 & 0x3F);
        4
    } else {
        0
    }
}

/// Like [`encode_char`], but the grapheme-boundary sentinel -1 encodes to a
/// single 0xFF byte (used by `OPTION_CHARBOUND` output).
pub fn charbound_encode_char(cp: Codepoint, dst: &mut [u8]) -> usize {
    if cp == -1 {
        dst[0] = 0xFF;
        1
    } else {
        encode_char(cp, dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> (isize, Codepoint) {
        let mut cp = 0;
        let n = iterate(bytes, &mut cp);
        (n, cp)
    }

    #[test]
    fn ascii() {
        assert_eq!(decode(b"A"), (1, 0x41));
        assert_eq!(decode(b"\x00"), (1, 0));
        assert_eq!(decode(b"\x7F"), (1, 0x7F));
    }

    #[test]
    fn multibyte() {
        assert_eq!(decode("é".as_bytes()), (2, 0xE9));
        assert_eq!(decode("ह".as_bytes()), (3, 0x939));
        assert_eq!(decode("𐍈".as_bytes()), (4, 0x10348));
        assert_eq!(decode("\u{10FFFF}".as_bytes()), (4, 0x10FFFF));
    }

    #[test]
    fn empty_input() {
        assert_eq!(decode(b""), (0, -1));
    }

    #[test]
    fn rejects_overlong() {
        assert_eq!(decode(b"\xC0\x80").0, ERR_INVALIDUTF8); // over-long NUL
        assert_eq!(decode(b"\xC1\xBF").0, ERR_INVALIDUTF8);
        assert_eq!(decode(b"\xE0\x80\x80").0, ERR_INVALIDUTF8);
        assert_eq!(decode(b"\xE0\x9F\xBF").0, ERR_INVALIDUTF8);
        assert_eq!(decode(b"\xF0\x80\x80\x80").0, ERR_INVALIDUTF8);
        assert_eq!(decode(b"\xF0\x8F\xBF\xBF").0, ERR_INVALIDUTF8);
    }

    #[test]
    fn rejects_surrogates_and_out_of_range() {
        assert_eq!(decode(b"\xED\xA0\x80").0, ERR_INVALIDUTF8); // U+D800
        assert_eq!(decode(b"\xED\xBF\xBF").0, ERR_INVALIDUTF8); // U+DFFF
        assert_eq!(decode(b"\xF4\x90\x80\x80").0, ERR_INVALIDUTF8); // U+110000
        assert_eq!(decode(b"\xF5\x80\x80\x80").0, ERR_INVALIDUTF8);
        assert_eq!(decode(b"\xFE").0, ERR_INVALIDUTF8);
        assert_eq!(decode(b"\xFF").0, ERR_INVALIDUTF8);
    }

    #[test]
    fn rejects_truncation_and_bad_continuation() {
        assert_eq!(decode(b"\xC3").0, ERR_INVALIDUTF8);
        assert_eq!(decode(b"\xE2\x82").0, ERR_INVALIDUTF8);
        assert_eq!(decode(b"\xF0\x9F\x92").0, ERR_INVALIDUTF8);
        assert_eq!(decode(b"\xC3\x28").0, ERR_INVALIDUTF8);
        assert_eq!(decode(b"\xE2\x28\xA1").0, ERR_INVALIDUTF8);
        assert_eq!(decode(b"\x80").0, ERR_INVALIDUTF8); // lone continuation
    }

    #[test]
    fn encode_round_trip() {
        let mut buf = [0u8; 4];
        for cp in [0x41, 0xE9, 0x939, 0xAC01, 0x10348, 0x10FFFF] {
            let n = encode_char(cp, &mut buf);
            let (m, decoded) = {
                let mut out = 0;
                (iterate(&buf[..n], &mut out), out)
            };
            assert_eq!(m as usize, n);
            assert_eq!(decoded, cp);
        }
    }

    #[test]
    fn encode_surrogate_still_encodes() {
        let mut buf = [0u8; 4];
        assert_eq!(encode_char(0xD800, &mut buf), 3);
        assert_eq!(&buf[..3], b"\xED\xA0\x80");
        // but decode refuses it
        let mut cp = 0;
        assert_eq!(iterate(&buf[..3], &mut cp), ERR_INVALIDUTF8);
    }

    #[test]
    fn encode_out_of_range() {
        let mut buf = [0u8; 4];
        assert_eq!(encode_char(-1, &mut buf), 0);
        assert_eq!(encode_char(0x110000, &mut buf), 0);
    }

    #[test]
    fn charbound_sentinel() {
        let mut buf = [0u8; 4];
        assert_eq!(charbound_encode_char(-1, &mut buf), 1);
        assert_eq!(buf[0], 0xFF);
        assert_eq!(charbound_encode_char(0x41, &mut buf), 1);
        assert_eq!(buf[0], 0x41);
    }

    #[test]
    fn codepoint_validity() {
        assert!(codepoint_valid(0));
        assert!(codepoint_valid(0x10FFFF));
        assert!(!codepoint_valid(-1));
        assert!(!codepoint_valid(0xD800));
        assert!(!codepoint_valid(0xDFFF));
        assert!(codepoint_valid(0xE000));
        assert!(!codepoint_valid(0x110000));
    }
}
