// grapheme.rs - UAX #29 extended grapheme cluster boundary detection.
//
// A pair-wise rule check plus one carried state integer. The state holds
// either a boundclass or BOUNDCLASS_START and is what makes GB11 (emoji
// ZWJ sequences) and GB12/13 (regional-indicator pairs) decidable without
// lookbehind.

use crate::property::get_property;
use crate::types::*;

/// The stateless pair rules (GB1, GB3-GB9b, GB999 plus the state-resolved
/// halves of GB11/GB12/GB13 via the E_ZWG and folded-RI left classes).
fn grapheme_break_simple(lbc: i32, tbc: i32) -> bool {
    if lbc == BOUNDCLASS_START {
        return true; // GB1
    }
    if lbc == BOUNDCLASS_CR && tbc == BOUNDCLASS_LF {
        return false; // GB3
    }
    if (BOUNDCLASS_CR..=BOUNDCLASS_CONTROL).contains(&lbc) {
        return true; // GB4
    }
    if (BOUNDCLASS_CR..=BOUNDCLASS_CONTROL).contains(&tbc) {
        return true; // GB5
    }
    if lbc == BOUNDCLASS_L
        && (tbc == BOUNDCLASS_L
            || tbc == BOUNDCLASS_V
            || tbc == BOUNDCLASS_LV
            || tbc == BOUNDCLASS_LVT)
    {
        return false; // GB6
    }
    if (lbc == BOUNDCLASS_LV || lbc == BOUNDCLASS_V)
        && (tbc == BOUNDCLASS_V || tbc == BOUNDCLASS_T)
    {
        return false; // GB7
    }
    if (lbc == BOUNDCLASS_LVT || lbc == BOUNDCLASS_T) && tbc == BOUNDCLASS_T {
        return false; // GB8
    }
    if tbc == BOUNDCLASS_EXTEND
        || tbc == BOUNDCLASS_ZWJ
        || tbc == BOUNDCLASS_SPACINGMARK
        || lbc == BOUNDCLASS_PREPEND
    {
        return false; // GB9, GB9a, GB9b
    }
    if lbc == BOUNDCLASS_E_ZWG && tbc == BOUNDCLASS_EXTENDED_PICTOGRAPHIC {
        return false; // GB11
    }
    if lbc == BOUNDCLASS_REGIONAL_INDICATOR && tbc == BOUNDCLASS_REGIONAL_INDICATOR {
        return false; // GB12/13
    }
    true // GB999
}

/// Boundclass-level automaton step. With a state cell, the left class is
/// taken from (and folded into) the state; without one, this is the plain
/// pair approximation.
pub(crate) fn grapheme_break_extended(
    lbc: i32,
    tbc: i32,
    state: Option<&mut i32>,
) -> bool {
    let state = match state {
        Some(s) => s,
        None => return grapheme_break_simple(lbc, tbc),
    };
    if *state == BOUNDCLASS_START {
        *state = lbc;
    }
    let lbc = *state;
    let permitted = grapheme_break_simple(lbc, tbc);
    if lbc == BOUNDCLASS_REGIONAL_INDICATOR && tbc == BOUNDCLASS_REGIONAL_INDICATOR {
        // a completed RI pair must not absorb a third indicator
        *state = BOUNDCLASS_OTHER;
    } else if lbc == BOUNDCLASS_EXTENDED_PICTOGRAPHIC {
        if tbc == BOUNDCLASS_EXTEND {
            // Extend codepoints fold into the pictographic run (GB11)
            *state = BOUNDCLASS_EXTENDED_PICTOGRAPHIC;
        } else if tbc == BOUNDCLASS_ZWJ {
            *state = BOUNDCLASS_E_ZWG;
        } else {
            *state = tbc;
        }
    } else {
        *state = tbc;
    }
    permitted
}

/// May a grapheme cluster break appear between `c1` and `c2`?
///
/// This is the stateless approximation; it cannot see across an emoji ZWJ
/// sequence or count regional-indicator pairs. Use
/// [`grapheme_break_stateful`] when scanning a whole string.
pub fn grapheme_break(c1: Codepoint, c2: Codepoint) -> bool {
    grapheme_break_extended(
        get_property(c1).boundclass(),
        get_property(c2).boundclass(),
        None,
    )
}

/// Stateful variant of [`grapheme_break`]. `state` must be initialized to
/// [`BOUNDCLASS_START`] before the first call and must not be shared
/// across concurrent scans.
pub fn grapheme_break_stateful(c1: Codepoint, c2: Codepoint, state: &mut i32) -> bool {
    grapheme_break_extended(
        get_property(c1).boundclass(),
        get_property(c2).boundclass(),
        Some(state),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Break decisions for each adjacent pair of `cps`, via the stateful
    /// automaton, with the implicit start-of-text break first.
    fn breaks(cps: &[Codepoint]) -> Vec<bool> {
        let mut state = BOUNDCLASS_START;
        let mut out = vec![true];
        for w in cps.windows(2) {
            out.push(grapheme_break_stateful(w[0], w[1], &mut state));
        }
        out
    }

    #[test]
    fn crlf() {
        assert_eq!(breaks(&[0x0D, 0x0A]), [true, false]); // GB3
        assert_eq!(breaks(&[0x0A, 0x0D]), [true, true]);
    }

    #[test]
    fn combining_marks_attach() {
        assert_eq!(breaks(&[0x61, 0x0301]), [true, false]); // GB9
        assert_eq!(breaks(&[0x61, 0x0301, 0x62]), [true, false, true]);
    }

    #[test]
    fn controls_break_everything() {
        assert_eq!(breaks(&[0x61, 0x00, 0x62]), [true, true, true]); // GB4/5
        assert_eq!(breaks(&[0x61, 0x0301, 0x00]), [true, false, true]);
    }

    #[test]
    fn hangul_jamo() {
        // L V T composes one cluster; a following L starts a new one (GB6-8)
        assert_eq!(breaks(&[0x1100, 0x1161, 0x11A8, 0xAC00]), [true, false, false, true]);
        assert_eq!(breaks(&[0xAC00, 0x11A8]), [true, false]); // LV + T
        assert_eq!(breaks(&[0xAC01, 0x11A8]), [true, false]); // LVT + T
        assert_eq!(breaks(&[0xAC01, 0x1161]), [true, true]); // LVT + V breaks
    }

    #[test]
    fn regional_indicator_pairs() {
        // RI RI | RI RI (GB12/13)
        assert_eq!(
            breaks(&[0x1F1FA, 0x1F1F8, 0x1F1FA, 0x1F1F8]),
            [true, false, true, false]
        );
        // a third indicator starts a new flag
        assert_eq!(breaks(&[0x1F1FA, 0x1F1F8, 0x1F1FA]), [true, false, true]);
    }

    #[test]
    fn emoji_zwj_sequences() {
        let zwj = 0x200D;
        // pictographic ZWJ pictographic joins (GB11)
        assert_eq!(breaks(&[0x1F600, zwj, 0x1F600]), [true, false, false]);
        // with a skin-tone modifier (Extend) folded into the run
        assert_eq!(
            breaks(&[0x1F600, 0x1F3FB, zwj, 0x1F600]),
            [true, false, false, false]
        );
        // two pictographics without ZWJ split
        assert_eq!(breaks(&[0x1F600, 0x1F600]), [true, true]);
        // ZWJ after a non-pictographic does not glue
        assert_eq!(breaks(&[0x61, zwj, 0x1F600]), [true, false, true]);
    }

    #[test]
    fn prepend_and_spacing_marks() {
        assert_eq!(breaks(&[0x0600, 0x61]), [true, false]); // GB9b
        assert_eq!(breaks(&[0x61, 0x0903, 0x62]), [true, false, true]); // GB9a
    }

    #[test]
    fn stateless_pair_query() {
        assert!(!grapheme_break(0x0D, 0x0A));
        assert!(grapheme_break(0x61, 0x62));
        assert!(!grapheme_break(0x61, 0x0301));
        // the stateless query cannot count RI pairs; it reports no break
        assert!(!grapheme_break(0x1F1FA, 0x1F1F8));
    }

    #[test]
    fn state_reuse_across_calls() {
        let mut state = BOUNDCLASS_START;
        assert!(!grapheme_break_stateful(0x1F1FA, 0x1F1F8, &mut state));
        // the pair is complete; the next RI starts a new cluster
        assert!(grapheme_break_stateful(0x1F1F8, 0x1F1FA, &mut state));
    }
}
