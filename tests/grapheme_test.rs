// grapheme_test.rs - UAX #29 boundary vectors in the style of the UCD
// GraphemeBreakTest data: each case lists codepoints and the expected
// break decision before each of them.

use ferrune::grapheme::{grapheme_break, grapheme_break_stateful};
use ferrune::types::*;

/// Assert the stateful automaton produces `want` break decisions, where
/// `want[0]` is the implicit start-of-text break.
fn x(cps: &[Codepoint], want: &[bool]) {
    assert_eq!(cps.len(), want.len());
    let mut state = BOUNDCLASS_START;
    let mut got = vec![true];
    for w in cps.windows(2) {
        got.push(grapheme_break_stateful(w[0], w[1], &mut state));
    }
    assert_eq!(got, want, "break set mismatch for {:04X?}", cps);
}

#[test]
fn gb3_gb4_gb5_newlines_and_controls() {
    x(&[0x000D, 0x000A], &[true, false]);
    x(&[0x000A, 0x000D], &[true, true]);
    x(&[0x0061, 0x000A, 0x0062], &[true, true, true]);
    x(&[0x0001, 0x0301], &[true, true]); // no mark attaches to a control
    x(&[0x0061, 0x200E, 0x0062], &[true, true, true]); // LRM is Control
}

#[test]
fn gb6_gb7_gb8_hangul() {
    x(&[0x1100, 0x1100], &[true, false]);
    x(&[0x1100, 0x1161], &[true, false]);
    x(&[0x1100, 0xAC00], &[true, false]);
    x(&[0x1100, 0xAC01], &[true, false]);
    x(&[0xAC00, 0x1161], &[true, false]);
    x(&[0x1161, 0x1161], &[true, false]);
    x(&[0xAC01, 0x11A8], &[true, false]);
    x(&[0x11A8, 0x11A8], &[true, false]);
    x(&[0xAC01, 0x1161], &[true, true]); // LVT + V splits
    x(&[0x1161, 0x1100], &[true, true]); // V + L splits
}

#[test]
fn gb9_extend_zwj_spacingmark_prepend() {
    x(&[0x0061, 0x0301, 0x0308, 0x0062], &[true, false, false, true]);
    x(&[0x0061, 0x200D], &[true, false]);
    x(&[0x0061, 0x0903], &[true, false]); // SpacingMark
    x(&[0x0600, 0x0661], &[true, false]); // Prepend + digit
    x(&[0x0061, 0x200C, 0x0062], &[true, false, true]); // ZWNJ extends
}

#[test]
fn gb11_emoji_zwj() {
    x(&[0x1F600, 0x200D, 0x1F600], &[true, false, false]);
    x(&[0x2764, 0x200D, 0x1F525], &[true, false, false]); // heart + fire
    x(&[0x1F600, 0x1F3FB, 0x200D, 0x1F600], &[true, false, false, false]);
    x(
        &[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F466],
        &[true, false, false, false, false],
    );
    x(&[0x1F600, 0x1F600], &[true, true]);
    // ZWJ glue requires a pictographic on the left of the whole run
    x(&[0x0061, 0x200D, 0x1F600], &[true, false, true]);
    // an intervening non-Extend breaks the GB11 state
    x(&[0x1F600, 0x0301, 0x0061, 0x200D, 0x1F600], &[true, false, true, false, true]);
}

#[test]
fn gb12_gb13_regional_indicators() {
    x(&[0x1F1FA, 0x1F1F8], &[true, false]);
    x(&[0x1F1FA, 0x1F1F8, 0x1F1FA], &[true, false, true]);
    x(
        &[0x1F1FA, 0x1F1F8, 0x1F1FA, 0x1F1F8],
        &[true, false, true, false],
    );
    x(
        &[0x1F1FA, 0x1F1F8, 0x1F1FA, 0x1F1F8, 0x1F1FA],
        &[true, false, true, false, true],
    );
    // an odd RI after a letter still pairs with the next one
    x(&[0x0061, 0x1F1FA, 0x1F1F8], &[true, true, false]);
}

#[test]
fn stateless_query_is_pairwise() {
    assert!(!grapheme_break(0x1100, 0x1161));
    assert!(grapheme_break(0x0061, 0x0062));
    assert!(!grapheme_break(0x0061, 0x0301));
    assert!(!grapheme_break(0x000D, 0x000A));
    assert!(grapheme_break(0x000A, 0x0061));
}

#[test]
fn state_survives_extend_runs() {
    // RI Extend RI: the Extend keeps the cluster open, and the RI state
    // must not treat the third codepoint as a fresh pair start
    x(&[0x1F1FA, 0x0301, 0x1F1FA], &[true, false, true]);
}
