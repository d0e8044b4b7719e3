// decompose.rs - Per-codepoint decomposition/transformation engine.
//
// `decompose_char` applies the option-gated transformation chain to one
// codepoint; `decompose`/`decompose_custom` drive it over a UTF-8 stream
// and finish with the canonical-reordering pass. All writers are dry-run
// capable: they write at most `dst.len()` codepoints but always return
// the full count the buffer would need.

use crate::grapheme::grapheme_break_extended;
use crate::property::{get_property, seqindex_decode_entry, seqindex_span};
use crate::types::*;
use crate::utf8;

/// Expand a packed sequence-table entry, transforming each produced
/// codepoint recursively (a casefold target may itself decompose, and
/// vice versa). Recursion depth is bounded by the UCD's decomposition
/// depth.
fn seqindex_write_char_decomposed(
    seqindex: u16,
    dst: &mut [Codepoint],
    options: Options,
    last_boundclass: &mut i32,
) -> isize {
    let (mut pos, len) = seqindex_span(seqindex);
    let mut written: isize = 0;
    for _ in 0..len {
        let cp = seqindex_decode_entry(&mut pos);
        let start = (written as usize).min(dst.len());
        let r = decompose_char(cp, &mut dst[start..], options, last_boundclass);
        if r < 0 {
            return r;
        }
        written += r;
    }
    written
}

/// Transform a single codepoint under `options`, writing the result into
/// `dst` (dry-run capable) and returning the codepoint count or an error.
///
/// `last_boundclass` is the grapheme state cell used by
/// `OPTION_CHARBOUND`; initialize it to [`BOUNDCLASS_START`] and thread
/// it through consecutive calls over one stream.
pub fn decompose_char(
    uc: Codepoint,
    dst: &mut [Codepoint],
    options: Options,
    last_boundclass: &mut i32,
) -> isize {
    if !(0..0x110000).contains(&uc) {
        return ERR_NOTASSIGNED;
    }
    let property = get_property(uc);

    // Hangul syllables decompose arithmetically, before anything else
    if options & (OPTION_COMPOSE | OPTION_DECOMPOSE) != 0 {
        let sindex = uc - HANGUL_SBASE;
        if (0..HANGUL_SCOUNT).contains(&sindex) {
            if !dst.is_empty() {
                dst[0] = HANGUL_LBASE + sindex / HANGUL_NCOUNT;
            }
            if dst.len() >= 2 {
                dst[1] = HANGUL_VBASE + (sindex % HANGUL_NCOUNT) / HANGUL_TCOUNT;
            }
            let tindex = sindex % HANGUL_TCOUNT;
            if tindex == 0 {
                return 2;
            }
            if dst.len() >= 3 {
                dst[2] = HANGUL_TBASE + tindex;
            }
            return 3;
        }
    }

    let cat = property.category();
    if option_is_on(options, OPTION_REJECTNA) && cat == Category::Cn {
        return ERR_NOTASSIGNED;
    }
    if option_is_on(options, OPTION_IGNORE) && property.ignorable {
        return 0;
    }
    if option_is_on(options, OPTION_STRIPNA) && cat == Category::Cn {
        return 0;
    }

    if option_is_on(options, OPTION_LUMP) {
        macro_rules! lump {
            ($replacement:expr) => {
                return decompose_char($replacement, dst, options & !OPTION_LUMP, last_boundclass)
            };
        }
        if cat == Category::Zs {
            lump!(0x0020);
        }
        if matches!(uc, 0x2018 | 0x2019 | 0x02BC | 0x02C8) {
            lump!(0x0027);
        }
        if cat == Category::Pd || uc == 0x2212 {
            lump!(0x002D);
        }
        if matches!(uc, 0x2044 | 0x2215) {
            lump!(0x002F);
        }
        if uc == 0x2236 {
            lump!(0x003A);
        }
        if matches!(uc, 0x2039 | 0x2045 | 0x2329) {
            lump!(0x003C);
        }
        if matches!(uc, 0x203A | 0x2046 | 0x232A) {
            lump!(0x003E);
        }
        if uc == 0x2216 {
            lump!(0x005C);
        }
        if matches!(uc, 0x02C4 | 0x02C6 | 0x2038 | 0x2303) {
            lump!(0x005E);
        }
        if cat == Category::Pc || uc == 0x02CD {
            lump!(0x005F);
        }
        if uc == 0x02CB {
            lump!(0x0060);
        }
        if uc == 0x2223 {
            lump!(0x007C);
        }
        if uc == 0x223C {
            lump!(0x007E);
        }
        if options & OPTION_NLF2LF == OPTION_NLF2LF
            && (cat == Category::Zl || cat == Category::Zp)
        {
            lump!(0x000A);
        }
    }

    if option_is_on(options, OPTION_STRIPMARK)
        && matches!(cat, Category::Mn | Category::Mc | Category::Me)
    {
        return 0;
    }
    if option_is_on(options, OPTION_CASEFOLD)
        && property.casefold_seqindex != SEQINDEX_NONE
    {
        return seqindex_write_char_decomposed(
            property.casefold_seqindex,
            dst,
            options,
            last_boundclass,
        );
    }
    if options & (OPTION_COMPOSE | OPTION_DECOMPOSE) != 0
        && property.decomp_seqindex != SEQINDEX_NONE
        && (property.decomp_type == DECOMP_TYPE_CANONICAL
            || option_is_on(options, OPTION_COMPAT))
    {
        return seqindex_write_char_decomposed(
            property.decomp_seqindex,
            dst,
            options,
            last_boundclass,
        );
    }
    if option_is_on(options, OPTION_CHARBOUND) {
        let boundary = grapheme_break_extended(
            BOUNDCLASS_START,
            property.boundclass(),
            Some(last_boundclass),
        );
        if boundary {
            if !dst.is_empty() {
                dst[0] = -1;
            }
            if dst.len() >= 2 {
                dst[1] = uc;
            }
            return 2;
        }
    }
    if !dst.is_empty() {
        dst[0] = uc;
    }
    1
}

/// Decode `src`, run every codepoint through [`decompose_char`] (after the
/// optional per-codepoint hook), then canonically reorder the buffer.
///
/// Returns the number of codepoints the output needs; when `dst` is large
/// enough it holds the reordered result. Pass an empty `dst` to size a
/// buffer.
pub fn decompose_custom(
    src: &[u8],
    dst: &mut [Codepoint],
    options: Options,
    mut custom: Option<&mut dyn FnMut(Codepoint) -> Codepoint>,
) -> isize {
    let mut wpos: isize = 0;
    let mut rpos: usize = 0;
    let mut uc: Codepoint = -1;
    let mut boundclass = BOUNDCLASS_START;
    while rpos < src.len() {
        let r = utf8::iterate(&src[rpos..], &mut uc);
        if r < 0 {
            return ERR_INVALIDUTF8;
        }
        rpos += r as usize;
        if let Some(hook) = custom.as_mut() {
            uc = hook(uc);
        }
        let start = (wpos as usize).min(dst.len());
        let dr = decompose_char(uc, &mut dst[start..], options, &mut boundclass);
        if dr < 0 {
            return dr;
        }
        wpos += dr;
        if wpos > isize::MAX / 8 {
            return ERR_OVERFLOW;
        }
    }
    // canonical reordering: adjacent pair swap with backtrack, skipped in
    // dry-run mode (the buffer does not hold the full result then)
    if options & (OPTION_COMPOSE | OPTION_DECOMPOSE) != 0 && wpos as usize <= dst.len()
    {
        let buf = &mut dst[..wpos as usize];
        let mut pos = 0;
        while pos + 1 < buf.len() {
            let cc1 = get_property(buf[pos]).combining_class;
            let cc2 = get_property(buf[pos + 1]).combining_class;
            if cc1 > cc2 && cc2 > 0 {
                buf.swap(pos, pos + 1);
                if pos > 0 {
                    pos -= 1;
                } else {
                    pos += 1;
                }
            } else {
                pos += 1;
            }
        }
    }
    wpos
}

/// [`decompose_custom`] without a per-codepoint hook.
pub fn decompose(src: &[u8], dst: &mut [Codepoint], options: Options) -> isize {
    decompose_custom(src, dst, options, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(src: &str, options: Options) -> Vec<Codepoint> {
        let n = decompose(src.as_bytes(), &mut [], options);
        assert!(n >= 0, "sizing pass failed: {}", n);
        let mut buf = vec![0; n as usize];
        let m = decompose(src.as_bytes(), &mut buf, options);
        assert_eq!(m, n, "dry-run and real counts disagree");
        buf
    }

    #[test]
    fn plain_passthrough() {
        assert_eq!(run("abc", OPTION_NONE), [0x61, 0x62, 0x63]);
    }

    #[test]
    fn canonical_expansion() {
        assert_eq!(run("Å", OPTION_DECOMPOSE), [0x41, 0x030A]);
        assert_eq!(run("é", OPTION_DECOMPOSE), [0x65, 0x0301]);
        // compatibility mapping held back without OPTION_COMPAT
        assert_eq!(run("ﬁ", OPTION_DECOMPOSE), [0xFB01]);
        assert_eq!(run("ﬁ", OPTION_DECOMPOSE | OPTION_COMPAT), [0x66, 0x69]);
    }

    #[test]
    fn reordering_after_expansion() {
        // dot above (230) after dot below (220) must sort below-first
        assert_eq!(
            run("q\u{0307}\u{0323}", OPTION_DECOMPOSE),
            [0x71, 0x0323, 0x0307]
        );
        // ṩ = s + dot below + dot above via two canonical layers
        assert_eq!(run("\u{1E69}", OPTION_DECOMPOSE), [0x73, 0x0323, 0x0307]);
    }

    #[test]
    fn hangul_arithmetic() {
        assert_eq!(run("\u{AC01}", OPTION_DECOMPOSE), [0x1100, 0x1161, 0x11A8]);
        assert_eq!(run("\u{AC00}", OPTION_DECOMPOSE), [0x1100, 0x1161]);
        // no decomposition without a normalization direction
        assert_eq!(run("\u{AC01}", OPTION_NONE), [0xAC01]);
    }

    #[test]
    fn casefold_expands() {
        assert_eq!(run("A", OPTION_CASEFOLD), [0x61]);
        assert_eq!(run("ß", OPTION_CASEFOLD), [0x73, 0x73]);
        assert_eq!(run("ﬁ", OPTION_CASEFOLD), [0x66, 0x69]);
        assert_eq!(run("İ", OPTION_CASEFOLD), [0x69, 0x0307]);
        assert_eq!(run("Σ", OPTION_CASEFOLD), [0x3C3]);
    }

    #[test]
    fn ignore_and_strip() {
        assert_eq!(run("a\u{00AD}b", OPTION_IGNORE), [0x61, 0x62]);
        assert_eq!(run("a\u{200B}b", OPTION_IGNORE), [0x61, 0x62]);
        assert_eq!(
            run("ä", OPTION_DECOMPOSE | OPTION_STRIPMARK),
            [0x61]
        );
        assert!(run("\u{0378}", OPTION_STRIPNA).is_empty());
    }

    #[test]
    fn rejectna_fails() {
        let mut bc = BOUNDCLASS_START;
        assert_eq!(
            decompose_char(0x0378, &mut [0; 4], OPTION_REJECTNA, &mut bc),
            ERR_NOTASSIGNED
        );
        let r = decompose("\u{0378}".as_bytes(), &mut [], OPTION_REJECTNA);
        assert_eq!(r, ERR_NOTASSIGNED);
    }

    #[test]
    fn out_of_range_codepoint() {
        let mut bc = BOUNDCLASS_START;
        assert_eq!(
            decompose_char(-2, &mut [0; 4], OPTION_NONE, &mut bc),
            ERR_NOTASSIGNED
        );
        assert_eq!(
            decompose_char(0x110000, &mut [0; 4], OPTION_NONE, &mut bc),
            ERR_NOTASSIGNED
        );
    }

    #[test]
    fn lump_substitutions() {
        let opts = OPTION_COMPOSE | OPTION_LUMP;
        assert_eq!(run("\u{2013}", opts), [0x2D]); // en dash
        assert_eq!(run("\u{2018}", opts), [0x27]);
        assert_eq!(run("\u{00A0}", opts), [0x20]); // Zs lumps to space
        assert_eq!(run("\u{2044}", opts), [0x2F]);
        assert_eq!(run("\u{02CB}", opts), [0x60]);
        assert_eq!(run("\u{2223}", opts), [0x7C]);
        assert_eq!(run("\u{223C}", opts), [0x7E]);
        // line separator only lumps when both NLF flags are set
        assert_eq!(run("\u{2028}", opts), [0x2028]);
        assert_eq!(run("\u{2028}", opts | OPTION_NLF2LF), [0x0A]);
    }

    #[test]
    fn charbound_sentinels() {
        assert_eq!(run("ab", OPTION_CHARBOUND), [-1, 0x61, -1, 0x62]);
        // combining mark joins its base cluster
        assert_eq!(
            run("a\u{0301}b", OPTION_CHARBOUND),
            [-1, 0x61, 0x0301, -1, 0x62]
        );
        // regional indicators pair up; the third starts a new cluster
        assert_eq!(
            run("\u{1F1FA}\u{1F1F8}\u{1F1FA}", OPTION_CHARBOUND),
            [-1, 0x1F1FA, 0x1F1F8, -1, 0x1F1FA]
        );
    }

    #[test]
    fn invalid_utf8_rejected() {
        assert_eq!(
            decompose(b"\xC0\x80", &mut [], OPTION_NONE),
            ERR_INVALIDUTF8
        );
        assert_eq!(
            decompose(b"ab\xED\xA0\x80", &mut [], OPTION_NONE),
            ERR_INVALIDUTF8
        );
    }

    #[test]
    fn custom_hook_rewrites() {
        let mut to_x = |cp: Codepoint| if cp == 0x62 { 0x78 } else { cp };
        let mut buf = [0; 8];
        let n = decompose_custom(b"abc", &mut buf, OPTION_NONE, Some(&mut to_x));
        assert_eq!(n, 3);
        assert_eq!(&buf[..3], [0x61, 0x78, 0x63]);
    }

    #[test]
    fn dry_run_matches_partial_buffers() {
        // a too-small buffer still reports the full count
        let mut small = [0; 1];
        let mut bc = BOUNDCLASS_START;
        let n = decompose_char(0xAC01, &mut small, OPTION_DECOMPOSE, &mut bc);
        assert_eq!(n, 3);
        assert_eq!(small[0], 0x1100);
    }
}
