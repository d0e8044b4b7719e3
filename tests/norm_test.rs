// norm_test.rs - End-to-end normalization vectors and the universal
// normal-form properties (idempotence, inclusion, canonical ordering).

use ferrune::normalize::{map, nfc, nfd, nfkc, nfkc_casefold, nfkd};
use ferrune::property::get_property;
use ferrune::types::*;
use ferrune::utf8::iterate;

fn s(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("normalized output must be valid UTF-8")
}

/// Assert a transformation result, comparing as strings for readable
/// failure output.
fn x(form: fn(&[u8]) -> Result<Vec<u8>, isize>, input: &str, want: &str) {
    let got = s(form(input.as_bytes()).expect("transformation failed"));
    assert_eq!(
        got, want,
        "wrong result for {:04X?}",
        input.chars().map(|c| c as u32).collect::<Vec<_>>()
    );
}

fn codepoints(text: &str) -> Vec<Codepoint> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut pos = 0;
    let mut cp = -1;
    while pos < bytes.len() {
        let n = iterate(&bytes[pos..], &mut cp);
        assert!(n > 0);
        pos += n as usize;
        out.push(cp);
    }
    out
}

#[test]
fn canonical_pairs() {
    x(nfc, "A\u{030A}", "\u{00C5}");
    x(nfd, "\u{00C5}", "A\u{030A}");
    x(nfc, "e\u{0301}", "\u{00E9}");
    x(nfd, "\u{1E69}", "s\u{0323}\u{0307}");
    x(nfc, "s\u{0323}\u{0307}", "\u{1E69}");
    // singleton: ohm and angstrom collapse to the letters
    x(nfc, "\u{2126}", "\u{03A9}");
    x(nfd, "\u{212B}", "A\u{030A}");
}

#[test]
fn compatibility_pairs() {
    x(nfkc, "\u{FB01}", "fi");
    x(nfc, "\u{FB01}", "\u{FB01}"); // no canonical decomposition
    x(nfkd, "\u{00BD}", "1\u{2044}2");
    x(nfkc, "\u{FF76}\u{FF9E}", "\u{30AC}"); // halfwidth katakana + voicing
    // squared "giga" unit sign, fully decomposed including voicing marks
    x(nfkd, "\u{3310}", "\u{30AD}\u{3099}\u{30AB}\u{3099}");
    x(nfkc, "\u{3310}", "\u{30AE}\u{30AC}");
}

#[test]
fn hangul_round_trip() {
    x(nfc, "\u{1100}\u{1161}\u{11A8}", "\u{AC01}");
    x(nfd, "\u{AC01}", "\u{1100}\u{1161}\u{11A8}");
    x(nfd, "\u{AC00}", "\u{1100}\u{1161}");
    x(nfc, "\u{1100}\u{1161}", "\u{AC00}");
    // full syllable block round-trips
    for syllable in [0xAC00u32, 0xB098, 0xD7A3, 0xC548] {
        let ch = char::from_u32(syllable).unwrap().to_string();
        let dec = s(nfd(ch.as_bytes()).unwrap());
        assert_eq!(s(nfc(dec.as_bytes()).unwrap()), ch);
    }
}

#[test]
fn reordering_canonical_order() {
    x(nfd, "q\u{0307}\u{0323}", "q\u{0323}\u{0307}");
    x(nfc, "q\u{0307}\u{0323}", "q\u{0323}\u{0307}");
    // Tibetan vowel signs with interleaved classes
    x(nfd, "\u{0F71}\u{0F72}\u{0F71}", "\u{0F71}\u{0F71}\u{0F72}");
}

#[test]
fn composition_exclusions_stay_decomposed() {
    x(nfc, "\u{0958}", "\u{0915}\u{093C}");
    x(nfc, "\u{0915}\u{093C}", "\u{0915}\u{093C}");
    x(nfc, "\u{FB1D}", "\u{05D9}\u{05B4}");
    x(nfc, "\u{2ADC}", "\u{2ADD}\u{0338}");
    x(nfc, "\u{1D15E}", "\u{1D157}\u{1D165}");
    // without the stability option the pair does compose
    let got = map("\u{0915}\u{093C}".as_bytes(), OPTION_COMPOSE).unwrap();
    assert_eq!(s(got), "\u{0958}");
}

#[test]
fn nfkc_casefold_scenario() {
    // A + acute + soft hyphen + fi ligature
    x(nfkc_casefold, "A\u{0301}\u{00AD}\u{FB01}", "\u{00E1}fi");
    x(nfkc_casefold, "\u{1E9E}", "ss");
    x(nfkc_casefold, "\u{0130}", "i\u{0307}");
    x(nfkc_casefold, "\u{03A3}\u{03C2}", "\u{03C3}\u{03C3}");
}

#[test]
fn lump_scenarios() {
    let lump = |input: &str| s(map(input.as_bytes(), NFC_OPTIONS | OPTION_LUMP).unwrap());
    assert_eq!(lump("\u{2013}"), "-");
    assert_eq!(lump("\u{2018}quote\u{2019}"), "'quote'");
    assert_eq!(lump("a\u{00A0}b"), "a b");
    assert_eq!(lump("\u{2044}"), "/");
    assert_eq!(lump("\u{2329}x\u{232A}"), "<x>");
}

#[test]
fn newline_and_control_options() {
    let run = |input: &str, options| s(map(input.as_bytes(), options).unwrap());
    assert_eq!(run("a\r\nb", OPTION_NLF2LS), "a\u{2028}b");
    assert_eq!(run("a\r\nb", OPTION_NLF2PS), "a\u{2029}b");
    assert_eq!(run("a\r\nb\rc\nd\u{0085}e", OPTION_NLF2LF), "a\nb\nc\nd\ne");
    assert_eq!(run("a\tb\u{0000}c\u{001B}d", OPTION_STRIPCC), "a bcd");
    assert_eq!(run("a\u{000B}b", OPTION_STRIPCC | OPTION_NLF2LF), "a\nb");
}

#[test]
fn stripmark_and_casefold() {
    let run = |input: &str, options| s(map(input.as_bytes(), options).unwrap());
    assert_eq!(run("\u{00C4}bc", NFC_OPTIONS | OPTION_STRIPMARK), "Abc");
    assert_eq!(run("\u{00C4}bc", NFC_OPTIONS | OPTION_CASEFOLD), "\u{00E4}bc");
    assert_eq!(
        run("\u{00C4}bc", NFC_OPTIONS | OPTION_CASEFOLD | OPTION_STRIPMARK),
        "abc"
    );
}

#[test]
fn invalid_inputs() {
    assert_eq!(nfc(b"\xC0\x80"), Err(ERR_INVALIDUTF8));
    assert_eq!(nfc(b"\xED\xA0\x80"), Err(ERR_INVALIDUTF8));
    assert_eq!(nfd(b"ok so far\xFF"), Err(ERR_INVALIDUTF8));
    assert_eq!(
        map(b"a", OPTION_COMPOSE | OPTION_DECOMPOSE),
        Err(ERR_INVALIDOPTS)
    );
    assert_eq!(map(b"a", OPTION_STRIPMARK), Err(ERR_INVALIDOPTS));
    assert_eq!(
        map("\u{0378}".as_bytes(), NFD_OPTIONS | OPTION_REJECTNA),
        Err(ERR_NOTASSIGNED)
    );
}

/// A corpus mixing scripts, precomposed and decomposed forms, ligatures,
/// Hangul, kana, supplementary codepoints and exclusions.
const CORPUS: &[&str] = &[
    "",
    "plain ascii, nothing to do",
    "caf\u{00E9} cre\u{0300}me br\u{00FB}l\u{00E9}e",
    "\u{0041}\u{030A}\u{0301}\u{0328}",
    "\u{1E69}\u{1E0B}\u{0323}q\u{0307}\u{0323}",
    "\u{D55C}\u{AD6D}\u{C5B4} \u{1112}\u{1161}\u{11AB}",
    "\u{30AC}\u{3099}\u{FF76}\u{FF9E}",
    "\u{0958}\u{09DC}\u{FB1D}\u{2ADC}",
    "\u{1D157}\u{1D165}\u{1D15E}",
    "\u{FB03}\u{FB4E}\u{FDFA}",
    "\u{0390}\u{03B0}\u{1F82}\u{1FF3}",
    "\u{0F77}\u{0F71}\u{0F72}\u{0F80}",
    "\u{2126}\u{212B}\u{2161}\u{3250}",
    "a\u{0305}\u{0301}b\u{0316}\u{0301}c",
    "\u{05D0}\u{05B8}\u{05BC}\u{0627}\u{0653}",
];

#[test]
fn idempotence() {
    for text in CORPUS {
        for form in [nfd, nfc, nfkd, nfkc, nfkc_casefold] {
            let once = s(form(text.as_bytes()).unwrap());
            let twice = s(form(once.as_bytes()).unwrap());
            assert_eq!(once, twice, "not idempotent on {:?}", text);
        }
    }
}

#[test]
fn inclusion_relations() {
    for text in CORPUS {
        let d = s(nfd(text.as_bytes()).unwrap());
        let c = s(nfc(text.as_bytes()).unwrap());
        assert_eq!(s(nfc(d.as_bytes()).unwrap()), c, "NFC != NFC(NFD) on {:?}", text);
        let kd = s(nfkd(text.as_bytes()).unwrap());
        let kc = s(nfkc(text.as_bytes()).unwrap());
        assert_eq!(s(nfc(kd.as_bytes()).unwrap()), kc, "NFKC != NFC(NFKD) on {:?}", text);
    }
}

#[test]
fn nfd_output_is_canonically_ordered() {
    for text in CORPUS {
        for form in [nfd, nfkd] {
            let out = s(form(text.as_bytes()).unwrap());
            let cps = codepoints(&out);
            for pair in cps.windows(2) {
                let c1 = get_property(pair[0]).combining_class;
                let c2 = get_property(pair[1]).combining_class;
                assert!(
                    c2 == 0 || c1 <= c2 || c1 == 0,
                    "ordering violated in {:?}: U+{:04X}({}) before U+{:04X}({})",
                    out, pair[0], c1, pair[1], c2
                );
            }
        }
    }
}

#[test]
fn charbound_map() {
    let out = map("a\u{0301}b".as_bytes(), OPTION_CHARBOUND).unwrap();
    assert_eq!(out, b"\xFFa\xCC\x81\xFFb");
    let out = map(
        "\u{1F1FA}\u{1F1F8}\u{1F1FA}".as_bytes(),
        OPTION_CHARBOUND,
    )
    .unwrap();
    // 0xFF before each cluster: RI-pair, then lone RI
    assert_eq!(
        out,
        b"\xFF\xF0\x9F\x87\xBA\xF0\x9F\x87\xB8\xFF\xF0\x9F\x87\xBA"
    );
}
