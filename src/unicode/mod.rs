// unicode/mod.rs - Front door for the generated Unicode 13.0.0 tables.
//
// The data modules are produced offline from the Unicode character
// database (UnicodeData.txt, CompositionExclusions.txt, PropList.txt,
// GraphemeBreakProperty.txt, emoji-data.txt, EastAsianWidth.txt) and
// checked in; see the per-file headers.

mod combination_data;
mod property_data;
mod sequence_data;

pub use combination_data::COMBINATIONS;
pub use property_data::{PROPERTIES, STAGE1, STAGE2};
pub use sequence_data::SEQUENCES;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shape() {
        assert_eq!(STAGE1.len(), 0x110000 >> 8);
        assert_eq!(STAGE2.len() % 256, 0);
        // every stage1 base addresses a full chunk
        for &base in STAGE1.iter() {
            assert!(base as usize + 256 <= STAGE2.len());
        }
    }

    #[test]
    fn stage2_indexes_in_range() {
        for &idx in STAGE2.iter() {
            assert!((idx as usize) < PROPERTIES.len());
        }
    }

    #[test]
    fn default_record_is_unassigned() {
        let p = &PROPERTIES[0];
        assert_eq!(p.category, 0);
        assert_eq!(p.combining_class, 0);
        assert_eq!(p.decomp_seqindex, crate::types::SEQINDEX_NONE);
    }

    #[test]
    fn combination_rows_well_formed() {
        // spot-check: every starter row referenced from the properties
        // carries min <= max and stays inside the table
        for prop in PROPERTIES.iter() {
            let ci = prop.comb_index;
            if ci != crate::types::SEQINDEX_NONE && ci < 0x8000 {
                let sidx = ci as usize;
                let (min, max) = (COMBINATIONS[sidx], COMBINATIONS[sidx + 1]);
                assert!(min <= max);
                assert!(sidx + 2 + (max - min) as usize <= COMBINATIONS.len());
            }
        }
    }
}
