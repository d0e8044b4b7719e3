// types.rs - Public types, option flags, error codes, Unicode constants.

// === Version ===

/// Version of the Unicode character database the tables were generated from.
pub const UNICODE_VERSION: &str = "13.0.0";

/// Library version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Unicode standard version implemented by the data tables.
pub fn unicode_version() -> &'static str {
    UNICODE_VERSION
}

// === Base types ===

/// A Unicode codepoint, or -1 as the in-buffer grapheme-boundary sentinel.
pub type Codepoint = i32;

/// Bit-set of `OPTION_*` flags controlling a transformation.
pub type Options = u32;

// === Option Flags ===

pub const OPTION_NONE: Options = 0;
/// Historical flag of the C-style API ("input is NUL-terminated"). Byte
/// slices carry their length, so this is accepted but has no effect.
pub const OPTION_NULLTERM: Options = 1;
/// Respect Unicode versioning stability: never compose a codepoint listed
/// in the composition exclusions.
pub const OPTION_STABLE: Options = OPTION_NULLTERM << 1;
/// Apply compatibility decompositions in addition to canonical ones.
pub const OPTION_COMPAT: Options = OPTION_STABLE << 1;
/// Compose codepoints after decomposition (NFC/NFKC direction).
pub const OPTION_COMPOSE: Options = OPTION_COMPAT << 1;
/// Leave codepoints fully decomposed (NFD/NFKD direction).
pub const OPTION_DECOMPOSE: Options = OPTION_COMPOSE << 1;
/// Drop codepoints with the Default_Ignorable_Code_Point property.
pub const OPTION_IGNORE: Options = OPTION_DECOMPOSE << 1;
/// Fail with `ERR_NOTASSIGNED` when an unassigned codepoint is seen.
pub const OPTION_REJECTNA: Options = OPTION_IGNORE << 1;
/// Map newline sequences to LINE SEPARATOR (U+2028).
pub const OPTION_NLF2LS: Options = OPTION_REJECTNA << 1;
/// Map newline sequences to PARAGRAPH SEPARATOR (U+2029).
pub const OPTION_NLF2PS: Options = OPTION_NLF2LS << 1;
/// Strip control characters; TAB becomes SPACE.
pub const OPTION_STRIPCC: Options = OPTION_NLF2PS << 1;
/// Apply full Unicode case folding.
pub const OPTION_CASEFOLD: Options = OPTION_STRIPCC << 1;
/// Insert the -1 sentinel before every grapheme cluster (encoded as 0xFF).
pub const OPTION_CHARBOUND: Options = OPTION_CASEFOLD << 1;
/// Lump certain lookalike punctuation onto ASCII equivalents.
pub const OPTION_LUMP: Options = OPTION_CHARBOUND << 1;
/// Drop all combining marks (categories Mn, Mc, Me).
pub const OPTION_STRIPMARK: Options = OPTION_LUMP << 1;
/// Drop unassigned codepoints.
pub const OPTION_STRIPNA: Options = OPTION_STRIPMARK << 1;
/// Both NLF flags together: map newline sequences to LINE FEED (U+000A).
pub const OPTION_NLF2LF: Options = OPTION_NLF2LS | OPTION_NLF2PS;

#[inline]
pub fn option_on(options: &mut Options, flag: Options) {
    *options |= flag;
}

#[inline]
pub fn option_off(options: &mut Options, flag: Options) {
    *options &= !flag;
}

#[inline]
pub fn option_is_on(options: Options, flag: Options) -> bool {
    (options & flag) != 0
}

// === Convenience masks for the normal forms ===

pub const NFD_OPTIONS: Options = OPTION_NULLTERM | OPTION_STABLE | OPTION_DECOMPOSE;
pub const NFC_OPTIONS: Options = OPTION_NULLTERM | OPTION_STABLE | OPTION_COMPOSE;
pub const NFKD_OPTIONS: Options = NFD_OPTIONS | OPTION_COMPAT;
pub const NFKC_OPTIONS: Options = NFC_OPTIONS | OPTION_COMPAT;
pub const NFKC_CASEFOLD_OPTIONS: Options =
    NFKC_OPTIONS | OPTION_CASEFOLD | OPTION_IGNORE;

// === Error Codes ===

/// Memory for the output buffer could not be allocated.
pub const ERR_NOMEM: isize = -1;
/// The output would exceed the signed-size ceiling.
pub const ERR_OVERFLOW: isize = -2;
/// Ill-formed UTF-8 in the input stream.
pub const ERR_INVALIDUTF8: isize = -3;
/// An unassigned codepoint was found while `OPTION_REJECTNA` was set.
pub const ERR_NOTASSIGNED: isize = -4;
/// The option combination is not valid.
pub const ERR_INVALIDOPTS: isize = -5;

/// Human-readable message for an error code.
pub fn errmsg(code: isize) -> &'static str {
    match code {
        ERR_NOMEM => "memory for the output buffer could not be allocated",
        ERR_OVERFLOW => "input or output is too long to be processed",
        ERR_INVALIDUTF8 => "ill-formed UTF-8 in input",
        ERR_NOTASSIGNED => "unassigned Unicode codepoint in input",
        ERR_INVALIDOPTS => "invalid option combination",
        _ => "unknown error",
    }
}

// === General Categories ===

/// The 30 Unicode general categories, `Cn` first (the table default).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Category {
    Cn = 0,
    Lu, Ll, Lt, Lm, Lo,
    Mn, Mc, Me,
    Nd, Nl, No,
    Pc, Pd, Ps, Pe, Pi, Pf, Po,
    Sm, Sc, Sk, So,
    Zs, Zl, Zp,
    Cc, Cf, Cs, Co,
}

impl Category {
    pub fn from_raw(v: u8) -> Category {
        const ALL: [Category; 30] = [
            Category::Cn, Category::Lu, Category::Ll, Category::Lt,
            Category::Lm, Category::Lo, Category::Mn, Category::Mc,
            Category::Me, Category::Nd, Category::Nl, Category::No,
            Category::Pc, Category::Pd, Category::Ps, Category::Pe,
            Category::Pi, Category::Pf, Category::Po, Category::Sm,
            Category::Sc, Category::Sk, Category::So, Category::Zs,
            Category::Zl, Category::Zp, Category::Cc, Category::Cf,
            Category::Cs, Category::Co,
        ];
        ALL[v as usize]
    }

    /// The two-letter category abbreviation ("Lu", "Zs", ...).
    pub fn as_str(self) -> &'static str {
        const NAMES: [&str; 30] = [
            "Cn", "Lu", "Ll", "Lt", "Lm", "Lo", "Mn", "Mc", "Me", "Nd",
            "Nl", "No", "Pc", "Pd", "Ps", "Pe", "Pi", "Pf", "Po", "Sm",
            "Sc", "Sk", "So", "Zs", "Zl", "Zp", "Cc", "Cf", "Cs", "Co",
        ];
        NAMES[self as usize]
    }
}

// === Bidirectional Classes ===

/// Per-codepoint bidirectional class; `None` for codepoints without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BidiClass {
    None = 0,
    L, LRE, LRO, R, AL, RLE, RLO, PDF,
    EN, ES, ET, AN, CS, NSM, BN,
    B, S, WS, ON,
    LRI, RLI, FSI, PDI,
}

impl BidiClass {
    pub fn from_raw(v: u8) -> BidiClass {
        const ALL: [BidiClass; 24] = [
            BidiClass::None, BidiClass::L, BidiClass::LRE, BidiClass::LRO,
            BidiClass::R, BidiClass::AL, BidiClass::RLE, BidiClass::RLO,
            BidiClass::PDF, BidiClass::EN, BidiClass::ES, BidiClass::ET,
            BidiClass::AN, BidiClass::CS, BidiClass::NSM, BidiClass::BN,
            BidiClass::B, BidiClass::S, BidiClass::WS, BidiClass::ON,
            BidiClass::LRI, BidiClass::RLI, BidiClass::FSI, BidiClass::PDI,
        ];
        ALL[v as usize]
    }
}

// === Decomposition Types ===

pub const DECOMP_TYPE_CANONICAL: u8 = 0;
pub const DECOMP_TYPE_FONT: u8 = 1;
pub const DECOMP_TYPE_NOBREAK: u8 = 2;
pub const DECOMP_TYPE_INITIAL: u8 = 3;
pub const DECOMP_TYPE_MEDIAL: u8 = 4;
pub const DECOMP_TYPE_FINAL: u8 = 5;
pub const DECOMP_TYPE_ISOLATED: u8 = 6;
pub const DECOMP_TYPE_CIRCLE: u8 = 7;
pub const DECOMP_TYPE_SUPER: u8 = 8;
pub const DECOMP_TYPE_SUB: u8 = 9;
pub const DECOMP_TYPE_VERTICAL: u8 = 10;
pub const DECOMP_TYPE_WIDE: u8 = 11;
pub const DECOMP_TYPE_NARROW: u8 = 12;
pub const DECOMP_TYPE_SMALL: u8 = 13;
pub const DECOMP_TYPE_SQUARE: u8 = 14;
pub const DECOMP_TYPE_FRACTION: u8 = 15;
pub const DECOMP_TYPE_COMPAT: u8 = 16;

// === Grapheme Boundary Classes (UAX #29) ===

pub const BOUNDCLASS_START: i32 = 0;
pub const BOUNDCLASS_OTHER: i32 = 1;
pub const BOUNDCLASS_CR: i32 = 2;
pub const BOUNDCLASS_LF: i32 = 3;
pub const BOUNDCLASS_CONTROL: i32 = 4;
pub const BOUNDCLASS_EXTEND: i32 = 5;
pub const BOUNDCLASS_L: i32 = 6;
pub const BOUNDCLASS_V: i32 = 7;
pub const BOUNDCLASS_T: i32 = 8;
pub const BOUNDCLASS_LV: i32 = 9;
pub const BOUNDCLASS_LVT: i32 = 10;
pub const BOUNDCLASS_REGIONAL_INDICATOR: i32 = 11;
pub const BOUNDCLASS_SPACINGMARK: i32 = 12;
pub const BOUNDCLASS_PREPEND: i32 = 13;
pub const BOUNDCLASS_ZWJ: i32 = 14;
// legacy emoji classes, retained for table compatibility
pub const BOUNDCLASS_E_BASE: i32 = 15;
pub const BOUNDCLASS_E_MODIFIER: i32 = 16;
pub const BOUNDCLASS_GLUE_AFTER_ZWJ: i32 = 17;
pub const BOUNDCLASS_E_BASE_GAZ: i32 = 18;
pub const BOUNDCLASS_EXTENDED_PICTOGRAPHIC: i32 = 19;
/// Synthetic state: an extended-pictographic run followed by ZWJ.
pub const BOUNDCLASS_E_ZWG: i32 = 20;

// === Hangul Syllable Constants ===

pub const HANGUL_SBASE: Codepoint = 0xAC00;
pub const HANGUL_LBASE: Codepoint = 0x1100;
pub const HANGUL_VBASE: Codepoint = 0x1161;
pub const HANGUL_TBASE: Codepoint = 0x11A7;
pub const HANGUL_LCOUNT: Codepoint = 19;
pub const HANGUL_VCOUNT: Codepoint = 21;
pub const HANGUL_TCOUNT: Codepoint = 28;
pub const HANGUL_NCOUNT: Codepoint = HANGUL_VCOUNT * HANGUL_TCOUNT;
pub const HANGUL_SCOUNT: Codepoint = HANGUL_LCOUNT * HANGUL_NCOUNT;

// === Property Record ===

/// Sequence-table index meaning "no mapping".
pub const SEQINDEX_NONE: u16 = 0xFFFF;

/// Per-codepoint property record, fetched through the two-stage table.
///
/// `decomp_seqindex` and `casefold_seqindex` are packed indexes into
/// `SEQUENCES` (top 3 bits: length - 1, or 7 for a spilled length word;
/// low 13 bits: word offset). The case-mapping indexes are raw word
/// offsets addressing a single, possibly two-word, entry.
#[derive(Debug, Clone, Copy)]
pub struct Property {
    pub category: u8,
    pub combining_class: u8,
    pub bidi_class: u8,
    pub decomp_type: u8,
    pub decomp_seqindex: u16,
    pub casefold_seqindex: u16,
    pub uppercase_seqindex: u16,
    pub lowercase_seqindex: u16,
    pub titlecase_seqindex: u16,
    /// Composition-table index: values < 0x8000 are a primary starter's
    /// row offset; bit 15 marks a combiner (low 14 bits: combiner id,
    /// bit 14: the composition result is supplementary, two words wide).
    pub comb_index: u16,
    pub bidi_mirrored: bool,
    pub comp_exclusion: bool,
    pub ignorable: bool,
    pub control_boundary: bool,
    pub charwidth: u8,
    pub boundclass: u8,
}

impl Property {
    pub fn category(&self) -> Category {
        Category::from_raw(self.category)
    }

    pub fn bidi_class(&self) -> BidiClass {
        BidiClass::from_raw(self.bidi_class)
    }

    pub fn boundclass(&self) -> i32 {
        self.boundclass as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_helpers() {
        let mut opts = OPTION_NONE;
        option_on(&mut opts, OPTION_COMPOSE | OPTION_STABLE);
        assert!(option_is_on(opts, OPTION_COMPOSE));
        assert!(option_is_on(opts, OPTION_STABLE));
        option_off(&mut opts, OPTION_COMPOSE);
        assert!(!option_is_on(opts, OPTION_COMPOSE));
    }

    #[test]
    fn option_flags_distinct() {
        let flags = [
            OPTION_NULLTERM, OPTION_STABLE, OPTION_COMPAT, OPTION_COMPOSE,
            OPTION_DECOMPOSE, OPTION_IGNORE, OPTION_REJECTNA, OPTION_NLF2LS,
            OPTION_NLF2PS, OPTION_STRIPCC, OPTION_CASEFOLD, OPTION_CHARBOUND,
            OPTION_LUMP, OPTION_STRIPMARK, OPTION_STRIPNA,
        ];
        let mut seen = 0u32;
        for f in flags {
            assert_eq!(seen & f, 0, "overlapping option flag {:#x}", f);
            seen |= f;
        }
    }

    #[test]
    fn category_round_trip() {
        for v in 0..30u8 {
            assert_eq!(Category::from_raw(v) as u8, v);
        }
        assert_eq!(Category::Lu.as_str(), "Lu");
        assert_eq!(Category::Cn.as_str(), "Cn");
    }

    #[test]
    fn errmsg_known_codes() {
        assert_eq!(errmsg(ERR_INVALIDUTF8), "ill-formed UTF-8 in input");
        assert_eq!(errmsg(-99), "unknown error");
    }

    #[test]
    fn hangul_counts() {
        assert_eq!(HANGUL_NCOUNT, 588);
        assert_eq!(HANGUL_SCOUNT, 11172);
        assert_eq!(HANGUL_SBASE + HANGUL_SCOUNT, 0xD7A4);
    }

    #[test]
    fn versions() {
        assert_eq!(unicode_version(), "13.0.0");
        assert!(!version().is_empty());
    }
}
