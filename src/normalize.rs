// normalize.rs - Buffer-level passes (newline canonicalization, control
// stripping, canonical composition), UTF-8 re-encoding, and the map entry
// points that tie the whole pipeline together.

use crate::decompose::decompose_custom;
use crate::property::get_property;
use crate::types::*;
use crate::unicode::COMBINATIONS;
use crate::utf8::{charbound_encode_char, encode_char};

/// Reject option combinations the pipeline cannot honor.
pub(crate) fn options_valid(options: Options) -> bool {
    if option_is_on(options, OPTION_COMPOSE) && option_is_on(options, OPTION_DECOMPOSE) {
        return false;
    }
    if option_is_on(options, OPTION_STRIPMARK)
        && options & (OPTION_COMPOSE | OPTION_DECOMPOSE) == 0
    {
        return false;
    }
    true
}

/// Normalize a codepoint buffer in place and return its new length.
///
/// Runs the newline/control pass when any of `OPTION_NLF2LS`,
/// `OPTION_NLF2PS`, `OPTION_STRIPCC` is set, then the composition pass
/// when `OPTION_COMPOSE` is set. The buffer must already be canonically
/// ordered (the decompose pass leaves it that way); contents past the
/// returned length are unspecified.
pub fn normalize_utf32(buffer: &mut [Codepoint], options: Options) -> isize {
    let mut len = buffer.len();

    if options & (OPTION_NLF2LS | OPTION_NLF2PS | OPTION_STRIPCC) != 0 {
        let mut wpos = 0;
        let mut rpos = 0;
        while rpos < len {
            let uc = buffer[rpos];
            if uc == 0x000D && rpos + 1 < len && buffer[rpos + 1] == 0x000A {
                rpos += 1; // CR LF is a single newline event
            }
            if matches!(uc, 0x000A | 0x000D | 0x0085)
                || (option_is_on(options, OPTION_STRIPCC) && matches!(uc, 0x000B | 0x000C))
            {
                buffer[wpos] = if option_is_on(options, OPTION_NLF2LS) {
                    if option_is_on(options, OPTION_NLF2PS) {
                        0x000A
                    } else {
                        0x2028
                    }
                } else if option_is_on(options, OPTION_NLF2PS) {
                    0x2029
                } else {
                    0x0020
                };
                wpos += 1;
            } else if option_is_on(options, OPTION_STRIPCC)
                && ((0x0000..0x0020).contains(&uc) || (0x007F..0x00A0).contains(&uc))
            {
                if uc == 0x0009 {
                    buffer[wpos] = 0x0020;
                    wpos += 1;
                }
            } else {
                buffer[wpos] = uc;
                wpos += 1;
            }
            rpos += 1;
        }
        len = wpos;
    }

    if option_is_on(options, OPTION_COMPOSE) {
        let mut starter: Option<usize> = None;
        let mut max_combining_class: i32 = -1;
        let mut wpos = 0;
        for rpos in 0..len {
            let current = buffer[rpos];
            let property = get_property(current);
            let cc = property.combining_class as i32;
            if let Some(spos) = starter {
                if cc > max_combining_class {
                    let s = buffer[spos];
                    // Hangul L + V
                    let lindex = s - HANGUL_LBASE;
                    if (0..HANGUL_LCOUNT).contains(&lindex) {
                        let vindex = current - HANGUL_VBASE;
                        if (0..HANGUL_VCOUNT).contains(&vindex) {
                            buffer[spos] = HANGUL_SBASE
                                + (lindex * HANGUL_VCOUNT + vindex) * HANGUL_TCOUNT;
                            continue;
                        }
                    }
                    // Hangul LV + T
                    let sindex = s - HANGUL_SBASE;
                    if (0..HANGUL_SCOUNT).contains(&sindex) && sindex % HANGUL_TCOUNT == 0
                    {
                        let tindex = current - HANGUL_TBASE;
                        if tindex > 0 && tindex < HANGUL_TCOUNT {
                            buffer[spos] = s + tindex;
                            continue;
                        }
                    }
                    // table composition: primary starter x combiner
                    let sprop = get_property(s);
                    if sprop.comb_index < 0x8000
                        && property.comb_index != SEQINDEX_NONE
                        && property.comb_index & 0x8000 != 0
                    {
                        let sidx = sprop.comb_index as usize;
                        let cid = property.comb_index & 0x3FFF;
                        let min = COMBINATIONS[sidx];
                        let max = COMBINATIONS[sidx + 1];
                        if (min..=max).contains(&cid) {
                            let composed = if property.comb_index & 0x4000 != 0 {
                                let e = sidx + 2 + 2 * (cid - min) as usize;
                                ((COMBINATIONS[e] as Codepoint) << 16)
                                    | COMBINATIONS[e + 1] as Codepoint
                            } else {
                                COMBINATIONS[sidx + 2 + (cid - min) as usize] as Codepoint
                            };
                            if composed > 0
                                && (!option_is_on(options, OPTION_STABLE)
                                    || !get_property(composed).comp_exclusion)
                            {
                                buffer[spos] = composed;
                                continue;
                            }
                        }
                    }
                }
            }
            buffer[wpos] = current;
            if cc != 0 {
                if cc > max_combining_class {
                    max_combining_class = cc;
                }
            } else {
                starter = Some(wpos);
                max_combining_class = -1;
            }
            wpos += 1;
        }
        len = wpos;
    }

    len as isize
}

/// Normalize `buffer` in place, then encode it to UTF-8. With
/// `OPTION_CHARBOUND` the -1 sentinels become 0xFF bytes.
pub fn reencode(buffer: &mut [Codepoint], options: Options) -> Vec<u8> {
    let len = normalize_utf32(buffer, options) as usize;
    let mut out = Vec::with_capacity(len * 4);
    let mut tmp = [0u8; 4];
    let charbound = option_is_on(options, OPTION_CHARBOUND);
    for &cp in &buffer[..len] {
        let n = if charbound {
            charbound_encode_char(cp, &mut tmp)
        } else {
            encode_char(cp, &mut tmp)
        };
        out.extend_from_slice(&tmp[..n]);
    }
    out
}

fn reborrow<'a>(
    custom: &'a mut Option<&mut dyn FnMut(Codepoint) -> Codepoint>,
) -> Option<&'a mut dyn FnMut(Codepoint) -> Codepoint> {
    match custom {
        Some(hook) => Some(&mut **hook),
        None => None,
    }
}

/// Full pipeline with a per-codepoint hook applied between decode and
/// decomposition: size the codepoint buffer with a dry run, fill it,
/// normalize, re-encode. Errors are raw status codes.
pub fn map_custom(
    src: &[u8],
    options: Options,
    mut custom: Option<&mut dyn FnMut(Codepoint) -> Codepoint>,
) -> Result<Vec<u8>, isize> {
    if !options_valid(options) {
        return Err(ERR_INVALIDOPTS);
    }
    let count = decompose_custom(src, &mut [], options, reborrow(&mut custom));
    if count < 0 {
        return Err(count);
    }
    if count > isize::MAX / 8 {
        return Err(ERR_OVERFLOW);
    }
    let mut buffer: Vec<Codepoint> = Vec::new();
    if buffer.try_reserve_exact(count as usize).is_err() {
        return Err(ERR_NOMEM);
    }
    buffer.resize(count as usize, 0);
    let result = decompose_custom(src, &mut buffer, options, reborrow(&mut custom));
    if result < 0 {
        return Err(result);
    }
    Ok(reencode(&mut buffer, options))
}

/// Transform `src` under `options` and return the new UTF-8 bytes.
pub fn map(src: &[u8], options: Options) -> Result<Vec<u8>, isize> {
    map_custom(src, options, None)
}

/// Canonical decomposition (Normalization Form D).
pub fn nfd(src: &[u8]) -> Result<Vec<u8>, isize> {
    map(src, NFD_OPTIONS)
}

/// Canonical composition (Normalization Form C).
pub fn nfc(src: &[u8]) -> Result<Vec<u8>, isize> {
    map(src, NFC_OPTIONS)
}

/// Compatibility decomposition (Normalization Form KD).
pub fn nfkd(src: &[u8]) -> Result<Vec<u8>, isize> {
    map(src, NFKD_OPTIONS)
}

/// Compatibility composition (Normalization Form KC).
pub fn nfkc(src: &[u8]) -> Result<Vec<u8>, isize> {
    map(src, NFKC_OPTIONS)
}

/// NFKC with case folding and default-ignorable removal, the stable
/// caseless-matching form.
pub fn nfkc_casefold(src: &[u8]) -> Result<Vec<u8>, isize> {
    map(src, NFKC_CASEFOLD_OPTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_pair() {
        let mut buf = vec![0x41, 0x030A];
        let n = normalize_utf32(&mut buf, NFC_OPTIONS);
        assert_eq!(n, 1);
        assert_eq!(buf[0], 0x00C5);
    }

    #[test]
    fn consecutive_composition() {
        // the cedilla composes first, then the acute rides the new starter
        let mut buf = vec![0x65, 0x0327, 0x0301];
        let n = normalize_utf32(&mut buf, NFC_OPTIONS);
        assert_eq!(&buf[..n as usize], [0x0229, 0x0301]);
    }

    #[test]
    fn blocked_composition() {
        // the overline (ccc 230) blocks the equal-class acute from the base
        let mut buf = vec![0x61, 0x0305, 0x0301];
        let n = normalize_utf32(&mut buf, NFC_OPTIONS);
        assert_eq!(&buf[..n as usize], [0x61, 0x0305, 0x0301]);
        // a lower-class mark in between does not block
        let mut buf = vec![0x61, 0x0316, 0x0301];
        let n = normalize_utf32(&mut buf, NFC_OPTIONS);
        assert_eq!(&buf[..n as usize], [0x00E1, 0x0316]);
    }

    #[test]
    fn hangul_composition() {
        let mut buf = vec![0x1100, 0x1161, 0x11A8];
        let n = normalize_utf32(&mut buf, NFC_OPTIONS);
        assert_eq!(&buf[..n as usize], [0xAC01]);
        // LV followed by a V-range jamo must not be absorbed
        let mut buf = vec![0xAC00, 0x11A7];
        let n = normalize_utf32(&mut buf, NFC_OPTIONS);
        assert_eq!(&buf[..n as usize], [0xAC00, 0x11A7]);
    }

    #[test]
    fn stability_gate() {
        // 0915 093C compose to the excluded 0958 only without OPTION_STABLE
        let mut buf = vec![0x0915, 0x093C];
        let n = normalize_utf32(&mut buf, NFC_OPTIONS);
        assert_eq!(&buf[..n as usize], [0x0915, 0x093C]);
        let mut buf = vec![0x0915, 0x093C];
        let n = normalize_utf32(&mut buf, OPTION_COMPOSE);
        assert_eq!(&buf[..n as usize], [0x0958]);
    }

    #[test]
    fn supplementary_composition() {
        // musical symbols compose through two-word table entries
        let mut buf = vec![0x1D157, 0x1D165];
        let n = normalize_utf32(&mut buf, OPTION_COMPOSE);
        assert_eq!(&buf[..n as usize], [0x1D15E]);
        // and are excluded under the stability guarantee
        let mut buf = vec![0x1D157, 0x1D165];
        let n = normalize_utf32(&mut buf, NFC_OPTIONS);
        assert_eq!(&buf[..n as usize], [0x1D157, 0x1D165]);
    }

    #[test]
    fn nlf_modes() {
        let run = |input: &[Codepoint], options| {
            let mut buf = input.to_vec();
            let n = normalize_utf32(&mut buf, options);
            buf.truncate(n as usize);
            buf
        };
        let src = [0x61, 0x000D, 0x000A, 0x62, 0x000D, 0x63, 0x0085, 0x64];
        assert_eq!(
            run(&src, OPTION_NLF2LS),
            [0x61, 0x2028, 0x62, 0x2028, 0x63, 0x2028, 0x64]
        );
        assert_eq!(
            run(&src, OPTION_NLF2PS),
            [0x61, 0x2029, 0x62, 0x2029, 0x63, 0x2029, 0x64]
        );
        assert_eq!(
            run(&src, OPTION_NLF2LF),
            [0x61, 0x000A, 0x62, 0x000A, 0x63, 0x000A, 0x64]
        );
        // stripcc alone maps newline events to SPACE
        assert_eq!(
            run(&src, OPTION_STRIPCC),
            [0x61, 0x0020, 0x62, 0x0020, 0x63, 0x0020, 0x64]
        );
    }

    #[test]
    fn stripcc_details() {
        let mut buf = vec![0x61, 0x0009, 0x62, 0x0000, 0x63, 0x001B, 0x0092, 0x64];
        let n = normalize_utf32(&mut buf, OPTION_STRIPCC);
        assert_eq!(&buf[..n as usize], [0x61, 0x0020, 0x62, 0x63, 0x64]);
        // VT and FF count as newline events under stripcc
        let mut buf = vec![0x61, 0x000B, 0x62, 0x000C, 0x63];
        let n = normalize_utf32(&mut buf, OPTION_STRIPCC | OPTION_NLF2LF);
        assert_eq!(&buf[..n as usize], [0x61, 0x000A, 0x62, 0x000A, 0x63]);
    }

    #[test]
    fn map_end_to_end() {
        assert_eq!(map("A\u{030A}".as_bytes(), NFC_OPTIONS).unwrap(), "Å".as_bytes());
        assert_eq!(nfd("Å".as_bytes()).unwrap(), "A\u{030A}".as_bytes());
        assert_eq!(nfkc("ﬁ".as_bytes()).unwrap(), b"fi");
        assert_eq!(nfc("ﬁ".as_bytes()).unwrap(), "ﬁ".as_bytes());
        assert_eq!(nfc("\u{1100}\u{1161}\u{11A8}".as_bytes()).unwrap(), "각".as_bytes());
        assert_eq!(nfd("각".as_bytes()).unwrap(), "\u{1100}\u{1161}\u{11A8}".as_bytes());
    }

    #[test]
    fn map_error_paths() {
        assert_eq!(map(b"\xC0\x80", NFC_OPTIONS), Err(ERR_INVALIDUTF8));
        assert_eq!(
            map(b"a", OPTION_COMPOSE | OPTION_DECOMPOSE),
            Err(ERR_INVALIDOPTS)
        );
        assert_eq!(map(b"a", OPTION_STRIPMARK), Err(ERR_INVALIDOPTS));
        assert_eq!(
            map("\u{0378}".as_bytes(), NFC_OPTIONS | OPTION_REJECTNA),
            Err(ERR_NOTASSIGNED)
        );
    }

    #[test]
    fn map_custom_hook() {
        let mut upcase_a = |cp: Codepoint| if cp == 0x61 { 0x41 } else { cp };
        let out = map_custom(b"abc", NFC_OPTIONS, Some(&mut upcase_a)).unwrap();
        assert_eq!(out, b"Abc");
    }

    #[test]
    fn charbound_bytes() {
        let out = map("ab".as_bytes(), OPTION_CHARBOUND).unwrap();
        assert_eq!(out, b"\xFFa\xFFb");
        let out = map("a\u{0301}".as_bytes(), OPTION_CHARBOUND).unwrap();
        assert_eq!(out, b"\xFFa\xCC\x81");
    }

    #[test]
    fn nfkc_casefold_pipeline() {
        // A + acute + soft hyphen + fi ligature
        let src = "A\u{0301}\u{00AD}\u{FB01}";
        assert_eq!(
            nfkc_casefold(src.as_bytes()).unwrap(),
            "\u{00E1}fi".as_bytes()
        );
    }
}
