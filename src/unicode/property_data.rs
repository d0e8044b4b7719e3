// unicode/property_data.rs - Generated from the Unicode 13.0.0 character database.
// DO NOT EDIT BY HAND; regenerate from the UCD instead.

//! Two-stage codepoint -> property-record lookup tables.

use crate::types::Property;

const N: u16 = 0xFFFF;

#[rustfmt::skip]
const fn p(
    category: u8, combining_class: u8, bidi_class: u8, decomp_type: u8,
    decomp_seqindex: u16, casefold_seqindex: u16, uppercase_seqindex: u16,
    lowercase_seqindex: u16, titlecase_seqindex: u16, comb_index: u16,
    flags: u8, charwidth: u8, boundclass: u8,
) -> Property {
    Property {
        category,
        combining_class,
        bidi_class,
        decomp_type,
        decomp_seqindex,
        casefold_seqindex,
        uppercase_seqindex,
        lowercase_seqindex,
        titlecase_seqindex,
        comb_index,
        bidi_mirrored: flags & 1 != 0,
        comp_exclusion: flags & 2 != 0,
        ignorable: flags & 4 != 0,
        control_boundary: flags & 8 != 0,
        charwidth,
        boundclass,
    }
}

#[rustfmt::skip]
pub static PROPERTIES: [Property; 6924] = [
    p(0, 0, 0, 0, N, N, N, N, N, N, 0, 1, 1),
    p(26, 0, 15, 0, N, N, N, N, N, N, 8, 0, 4),
    p(26, 0, 17, 0, N, N, N, N, N, N, 8, 0, 4),
    p(26, 0, 16, 0, N, N, N, N, N, N, 8, 0, 3),
    p(26, 0, 18, 0, N, N, N, N, N, N, 8, 0, 4),
    p(26, 0, 16, 0, N, N, N, N, N, N, 8, 0, 2),
    p(26, 0, 16, 0, N, N, N, N, N, N, 8, 0, 4),
    p(23, 0, 18, 0, N, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 19, 0, N, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 11, 0, N, N, N, N, N, N, 0, 1, 1),
    p(20, 0, 11, 0, N, N, N, N, N, N, 0, 1, 1),
    p(14, 0, 19, 0, N, N, N, N, N, N, 1, 1, 1),
    p(15, 0, 19, 0, N, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 10, 0, N, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 13, 0, N, N, N, N, N, N, 0, 1, 1),
    p(13, 0, 10, 0, N, N, N, N, N, N, 0, 1, 1),
    p(9, 0, 9, 0, N, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0000, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0003, 0, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0006, 1, 1, 1),
    p(1, 0, 1, 0, N, 0x0030, N, 0x0030, N, 0x0009, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x04D0, N, 0x04D0, N, 0x0022, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0145, N, 0x0145, N, 0x0039, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0031, N, 0x0031, N, 0x0050, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x044E, N, 0x044E, N, 0x0067, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0218, N, 0x0218, N, 0x0083, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x019B, N, 0x019B, N, 0x0086, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x02EF, N, 0x02EF, N, 0x009D, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x00DD, N, 0x00DD, N, 0x00B6, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x03E9, N, 0x03E9, N, 0x00D2, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0144, N, 0x0144, N, 0x00D5, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0147, N, 0x0147, N, 0x00F1, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x00AE, N, 0x00AE, N, 0x010D, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0401, N, 0x0401, N, 0x0120, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0201, N, 0x0201, N, 0x013D, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x00AC, N, 0x00AC, N, 0x0156, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x04A9, N, 0x04A9, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x002F, N, 0x002F, N, 0x015E, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0033, N, 0x0033, N, 0x017A, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0386, N, 0x0386, N, 0x0191, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0264, N, 0x0264, N, 0x01A8, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x00DC, N, 0x00DC, N, 0x01C4, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0473, N, 0x0473, N, 0x01D5, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x023B, N, 0x023B, N, 0x01E9, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0212, N, 0x0212, N, 0x01ED, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0381, N, 0x0381, N, 0x0201, 0, 1, 1),
    p(21, 0, 19, 0, N, N, N, N, N, N, 0, 1, 1),
    p(12, 0, 19, 0, N, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x035C, N, 0x035C, 0x021D, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0245, N, 0x0245, 0x0236, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0198, N, 0x0198, 0x024D, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x01F1, N, 0x01F1, 0x0264, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0329, N, 0x0329, 0x027B, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x035B, N, 0x035B, 0x0297, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x03BB, N, 0x03BB, 0x029A, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0215, N, 0x0215, 0x02B1, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x019D, N, 0x019D, 0x02CC, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x043D, N, 0x043D, 0x02E8, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x02A5, N, 0x02A5, 0x02F4, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x03E6, N, 0x03E6, 0x0310, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x024B, N, 0x024B, 0x032C, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x060E, N, 0x060E, 0x033F, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x02D2, N, 0x02D2, 0x035C, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x01F4, N, 0x01F4, 0x0375, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x026F, N, 0x026F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0353, N, 0x0353, 0x037D, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x03D4, N, 0x03D4, 0x0399, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0418, N, 0x0418, 0x03B0, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0452, N, 0x0452, 0x03C7, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x019C, N, 0x019C, 0x03E3, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x01EB, N, 0x01EB, 0x03F4, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x031D, N, 0x031D, 0x0408, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0614, N, 0x0614, 0x040C, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x02D8, N, 0x02D8, 0x0420, 0, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, N, 0, 1, 1),
    p(23, 0, 13, 2, 0x0004, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 0, N, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 16, 0x2720, N, N, N, N, 0x043C, 0, 1, 1),
    p(22, 0, 19, 0, N, N, N, N, N, N, 0, 1, 19),
    p(5, 0, 1, 8, 0x0030, N, N, N, N, N, 0, 1, 1),
    p(16, 0, 19, 0, N, N, N, N, N, N, 1, 1, 1),
    p(27, 0, 15, 0, N, N, N, N, N, N, 12, 1, 4),
    p(21, 0, 19, 16, 0x334E, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 11, 0, N, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 11, 0, N, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 8, 0x00BE, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 8, 0x0122, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 16, 0x2852, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x07A6, 0x07A6, 0x19BC, N, 0x19BC, N, 0, 1, 1),
    p(21, 0, 19, 16, 0x2D08, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 8, 0x00BD, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 8, 0x0201, N, N, N, N, N, 0, 1, 1),
    p(17, 0, 19, 0, N, N, N, N, N, N, 1, 1, 1),
    p(11, 0, 19, 15, 0x4316, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x42F8, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x43A9, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2F66, 0x15FE, N, 0x15FE, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3248, 0x1439, N, 0x1439, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2FE0, 0x1032, N, 0x1032, N, 0x045B, 0, 1, 1),
    p(1, 0, 1, 0, 0x32BA, 0x1489, N, 0x1489, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x311C, 0x0C9C, N, 0x0C9C, N, 0x0466, 0, 1, 1),
    p(1, 0, 1, 0, 0x3180, 0x11C0, N, 0x11C0, N, 0x0469, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0830, N, 0x0830, N, 0x046C, 0, 1, 1),
    p(1, 0, 1, 0, 0x2910, 0x0B7A, N, 0x0B7A, N, 0x0472, 0, 1, 1),
    p(1, 0, 1, 0, 0x278C, 0x1C67, N, 0x1C67, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2A8A, 0x1A97, N, 0x1A97, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x27F8, 0x0D64, N, 0x0D64, N, 0x0475, 0, 1, 1),
    p(1, 0, 1, 0, 0x2952, 0x1AE2, N, 0x1AE2, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2CC0, 0x13F5, N, 0x13F5, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2FD8, 0x1B2B, N, 0x1B2B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D1E, 0x1976, N, 0x1976, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E72, 0x10BC, N, 0x10BC, N, 0x0480, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19CC, N, 0x19CC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2BE4, 0x1BCC, N, 0x1BCC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2C2C, 0x1A14, N, 0x1A14, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2F28, 0x1C17, N, 0x1C17, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2CA2, 0x0C60, N, 0x0C60, N, 0x0483, 0, 1, 1),
    p(1, 0, 1, 0, 0x2FA0, 0x0860, N, 0x0860, N, 0x048E, 0, 1, 1),
    p(1, 0, 1, 0, 0x2DCA, 0x0EBA, N, 0x0EBA, N, 0x0497, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x11B4, N, 0x11B4, N, 0x049A, 0, 1, 1),
    p(1, 0, 1, 0, 0x2AB6, 0x1931, N, 0x1931, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D88, 0x1B37, N, 0x1B37, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B1E, 0x1981, N, 0x1981, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2C5C, 0x0788, N, 0x0788, N, 0x049D, 0, 1, 1),
    p(1, 0, 1, 0, 0x32EE, 0x19D1, N, 0x19D1, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1821, N, 0x1821, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x293C, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2DEC, N, 0x1C8B, N, 0x1C8B, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B78, N, 0x1C8C, N, 0x1C8C, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2916, N, 0x08D0, N, 0x08D0, 0x04AB, 0, 1, 1),
    p(2, 0, 1, 0, 0x2BDE, N, 0x1C8D, N, 0x1C8D, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A5A, N, 0x12CA, N, 0x12CA, 0x04B6, 0, 1, 1),
    p(2, 0, 1, 0, 0x2ABC, N, 0x12B6, N, 0x12B6, 0x04B9, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0BEA, N, 0x0BEA, 0x04BC, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F54, N, 0x11B8, N, 0x11B8, 0x04C2, 0, 1, 1),
    p(2, 0, 1, 0, 0x333E, N, 0x1C8E, N, 0x1C8E, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x30E6, N, 0x1C8F, N, 0x1C8F, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2E3A, N, 0x0E6E, N, 0x0E6E, 0x04C5, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F96, N, 0x1C90, N, 0x1C90, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x26F6, N, 0x1C91, N, 0x1C91, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x29F6, N, 0x1C92, N, 0x1C92, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2764, N, 0x1C93, N, 0x1C93, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x28BA, N, 0x0A5C, N, 0x0A5C, 0x04D0, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1C94, N, 0x1C94, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2D50, N, 0x1C95, N, 0x1C95, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2AEC, N, 0x1C96, N, 0x1C96, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x285E, N, 0x1C97, N, 0x1C97, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x32F2, N, 0x0680, N, 0x0680, 0x04D3, 0, 1, 1),
    p(2, 0, 1, 0, 0x28D4, N, 0x0C6A, N, 0x0C6A, 0x04DE, 0, 1, 1),
    p(2, 0, 1, 0, 0x2726, N, 0x0FD2, N, 0x0FD2, 0x04E7, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0B5A, N, 0x0B5A, 0x04EA, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A64, N, 0x1C98, N, 0x1C98, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x27C8, N, 0x1C99, N, 0x1C99, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3260, N, 0x1C9A, N, 0x1C9A, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x268A, N, 0x06EC, N, 0x06EC, 0x04ED, 0, 1, 1),
    p(2, 0, 1, 0, 0x2CEC, N, 0x1C9B, N, 0x1C9B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1C9C, N, 0x1C9C, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2BC6, N, 0x1C9D, N, 0x1C9D, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3054, 0x16BC, N, 0x16BC, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2976, N, 0x1C9E, N, 0x1C9E, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x30C0, 0x0CD0, N, 0x0CD0, N, 0x04FB, 0, 1, 1),
    p(2, 0, 1, 0, 0x29E0, N, 0x0958, N, 0x0958, 0x0506, 0, 1, 1),
    p(1, 0, 1, 0, 0x2778, 0x173A, N, 0x173A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2DA8, N, 0x1C9F, N, 0x1C9F, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3148, 0x1789, N, 0x1789, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A96, N, 0x1CA0, N, 0x1CA0, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2EB8, 0x17D3, N, 0x17D3, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2800, N, 0x1CA1, N, 0x1CA1, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2CF6, 0x1825, N, 0x1825, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3360, N, 0x1CA2, N, 0x1CA2, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B68, 0x1867, N, 0x1867, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x31C8, N, 0x1CA3, N, 0x1CA3, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E0E, 0x14F2, N, 0x14F2, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2D9E, N, 0x1CA4, N, 0x1CA4, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x153E, N, 0x153E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CA5, N, 0x1CA5, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2862, 0x086E, N, 0x086E, N, 0x0511, 0, 1, 1),
    p(2, 0, 1, 0, 0x2EA2, N, 0x0C66, N, 0x0C66, 0x0515, 0, 1, 1),
    p(1, 0, 1, 0, 0x28D6, 0x15D9, N, 0x15D9, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F20, N, 0x1CA6, N, 0x1CA6, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x335C, 0x162B, N, 0x162B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C92, N, 0x1CA7, N, 0x1CA7, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2CB2, 0x1678, N, 0x1678, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x330C, N, 0x1CA8, N, 0x1CA8, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2A3A, 0x1BF0, N, 0x1BF0, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x308E, N, 0x1CA9, N, 0x1CA9, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x26F0, 0x1C3C, N, 0x1C3C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2868, N, 0x1CAA, N, 0x1CAA, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x27D0, 0x1378, N, 0x1378, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2954, N, 0x1CAB, N, 0x1CAB, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x326A, 0x13D3, N, 0x13D3, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C24, N, 0x1CAC, N, 0x1CAC, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E34, 0x141F, N, 0x141F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FBE, N, 0x1CAD, N, 0x1CAD, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x31EA, 0x1467, N, 0x1467, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x30F8, N, 0x1CAE, N, 0x1CAE, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14AC, N, 0x14AC, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1BA1, N, 0x1BA1, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x304A, 0x1A39, N, 0x1A39, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A6E, N, 0x1CAF, N, 0x1CAF, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D90, 0x1A81, N, 0x1A81, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x27D2, N, 0x1CB0, N, 0x1CB0, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E00, 0x1AC4, N, 0x1AC4, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2836, N, 0x1CB1, N, 0x1CB1, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3212, 0x1B0D, N, 0x1B0D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C18, N, 0x1CB2, N, 0x1CB2, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B8E, 0x32D0, N, 0x00DD, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x019D, N, 0x019D, N, 0, 1, 1),
    p(1, 0, 1, 16, 0x305A, 0x1BA7, N, 0x1BA7, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x3344, N, 0x1CB3, N, 0x1CB3, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x30F2, 0x1847, N, 0x1847, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A2A, N, 0x1CB4, N, 0x1CB4, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x266C, 0x1887, N, 0x1887, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x27E4, N, 0x1CB5, N, 0x1CB5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2C84, 0x1AC8, N, 0x1AC8, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B92, N, 0x1CB6, N, 0x1CB6, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x315A, 0x175B, N, 0x175B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x307E, N, 0x1CB7, N, 0x1CB7, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2C1E, 0x17AF, N, 0x17AF, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x32D2, N, 0x1CB8, N, 0x1CB8, N, 0, 1, 1),
    p(1, 0, 1, 16, 0x2848, 0x17FA, N, 0x17FA, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x2EF2, N, 0x1CB9, N, 0x1CB9, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x184C, N, 0x184C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CBA, N, 0x1CBA, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B8A, 0x188E, N, 0x188E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2CE2, N, 0x1CBB, N, 0x1CBB, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3078, 0x18D7, N, 0x18D7, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x31D4, N, 0x1CBC, N, 0x1CBC, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x32C8, 0x1560, N, 0x1560, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C98, N, 0x1CBD, N, 0x1CBD, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x31EC, 0x31EC, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17B6, N, 0x17B6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CBE, N, 0x1CBE, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2CEE, 0x0682, N, 0x0682, N, 0x0519, 0, 1, 1),
    p(2, 0, 1, 0, 0x3356, N, 0x0B26, N, 0x0B26, 0x051D, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D5E, 0x1485, N, 0x1485, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x26B4, N, 0x1CBF, N, 0x1CBF, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2BCA, 0x14C9, N, 0x14C9, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x322C, N, 0x1CC0, N, 0x1CC0, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x151F, N, 0x151F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CC1, N, 0x1CC1, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x30F0, 0x1567, N, 0x1567, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3244, N, 0x1CC2, N, 0x1CC2, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2892, 0x15B7, N, 0x15B7, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A08, N, 0x1CC3, N, 0x1CC3, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B02, 0x1601, N, 0x1601, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x31F6, N, 0x1CC4, N, 0x1CC4, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x275A, 0x0A70, N, 0x0A70, N, 0x0521, 0, 1, 1),
    p(2, 0, 1, 0, 0x2D8E, N, 0x06C4, N, 0x06C4, 0x0524, 0, 1, 1),
    p(1, 0, 1, 0, 0x31FE, 0x1BC8, N, 0x1BC8, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B28, N, 0x1CC5, N, 0x1CC5, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2C08, 0x1C13, N, 0x1C13, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x327C, N, 0x1CC6, N, 0x1CC6, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E84, 0x08E8, N, 0x08E8, N, 0x0527, 0, 1, 1),
    p(2, 0, 1, 0, 0x2D2A, N, 0x1258, N, 0x1258, 0x052A, 0, 1, 1),
    p(1, 0, 1, 0, 0x2FCC, 0x13A9, N, 0x13A9, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x290E, N, 0x1CC7, N, 0x1CC7, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x323A, 0x13FA, N, 0x13FA, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x30FA, N, 0x1CC8, N, 0x1CC8, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1444, N, 0x1444, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CC9, N, 0x1CC9, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2DF4, 0x12BE, N, 0x12BE, N, 0x052D, 0, 1, 1),
    p(2, 0, 1, 0, 0x2828, N, 0x0F1E, N, 0x0F1E, 0x0530, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B80, 0x10A2, N, 0x10A2, N, 0x0533, 0, 1, 1),
    p(2, 0, 1, 0, 0x32C4, N, 0x0CCC, N, 0x0CCC, 0x0536, 0, 1, 1),
    p(1, 0, 1, 0, 0x2BE0, 0x1A5C, N, 0x1A5C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x332C, N, 0x1CCA, N, 0x1CCA, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2CC4, 0x1AA2, N, 0x1AA2, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x26FA, N, 0x1CCB, N, 0x1CCB, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2A62, 0x1AF1, N, 0x1AF1, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x318A, N, 0x1CCC, N, 0x1CCC, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3014, 0x1B3B, N, 0x1B3B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A16, N, 0x1CCD, N, 0x1CCD, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2A3C, 0x17CE, N, 0x17CE, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B8C, N, 0x1CCE, N, 0x1CCE, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3086, 0x1824, N, 0x1824, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2AA2, N, 0x1CCF, N, 0x1CCF, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x31B2, 0x1A1A, N, 0x1A1A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x297C, 0x1A62, N, 0x1A62, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2AE4, N, 0x1CD0, N, 0x1CD0, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x325A, 0x1701, N, 0x1701, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C14, N, 0x1CD1, N, 0x1CD1, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2920, 0x072B, N, 0x072B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A8E, N, 0x09C7, N, 0x09C7, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x0033, 0x0033, 0x03D4, N, 0x03D4, 0x0539, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CD2, N, 0x1CD2, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C73, N, 0x1C73, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1628, N, 0x1628, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CD3, N, 0x1CD3, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1672, N, 0x1672, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CD4, N, 0x1CD4, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x157D, N, 0x157D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14F8, N, 0x14F8, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CD5, N, 0x1CD5, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AF0, N, 0x1AF0, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1401, N, 0x1401, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x158F, N, 0x158F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CD6, N, 0x1CD6, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AEC, N, 0x1AEC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x144D, N, 0x144D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x149A, N, 0x149A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x167B, N, 0x167B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CD7, N, 0x1CD7, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C7C, N, 0x1C7C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AFA, N, 0x1AFA, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CD8, N, 0x1CD8, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1829, N, 0x1829, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19DA, N, 0x19DA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1598, N, 0x1598, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CD9, N, 0x1CD9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CDA, N, 0x1CDA, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1904, N, 0x1904, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1797, N, 0x1797, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CDB, N, 0x1CDB, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19E4, N, 0x19E4, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x29D4, 0x09CE, N, 0x09CE, N, 0x053C, 0, 1, 1),
    p(2, 0, 1, 0, 0x3038, N, 0x09EE, N, 0x09EE, 0x0550, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C45, N, 0x1C45, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CDC, N, 0x1CDC, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1385, N, 0x1385, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CDD, N, 0x1CDD, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15E3, N, 0x15E3, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B10, N, 0x1B10, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CDE, N, 0x1CDE, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1469, N, 0x1469, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19F9, N, 0x19F9, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CDF, N, 0x1CDF, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1711, N, 0x1711, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x283A, 0x0824, N, 0x0824, N, 0x0564, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F88, N, 0x071C, N, 0x071C, 0x0578, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1384, N, 0x1384, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x159D, N, 0x159D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1919, N, 0x1919, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CE0, N, 0x1CE0, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1962, N, 0x1962, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CE1, N, 0x1CE1, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x08BC, N, 0x08BC, N, 0x058C, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17FC, N, 0x17FC, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CE2, N, 0x1CE2, N, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1890, N, 0x1890, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CE3, N, 0x1CE3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CE4, N, 0x1CE4, N, 0, 1, 1),
    p(1, 0, 1, 16, 0x29C6, 0x1803, N, 0x1803, 0x1CE5, N, 0, 1, 1),
    p(3, 0, 1, 16, 0x272A, 0x1803, 0x1CE6, 0x1803, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x2E5E, N, 0x1CE6, N, 0x1CE5, N, 0, 1, 1),
    p(1, 0, 1, 16, 0x3280, 0x16A2, N, 0x16A2, 0x1CE7, N, 0, 1, 1),
    p(3, 0, 1, 16, 0x28FA, 0x16A2, 0x1CE8, 0x16A2, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x27EE, N, 0x1CE8, N, 0x1CE7, N, 0, 1, 1),
    p(1, 0, 1, 16, 0x2BF2, 0x1522, N, 0x1522, 0x1CE9, N, 0, 1, 1),
    p(3, 0, 1, 16, 0x27E2, 0x1522, 0x1CEA, 0x1522, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x2966, N, 0x1CEA, N, 0x1CE9, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x31FC, 0x156A, N, 0x156A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B22, N, 0x1CEB, N, 0x1CEB, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x29F2, 0x15BA, N, 0x15BA, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x299A, N, 0x1CEC, N, 0x1CEC, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2EC2, 0x1604, N, 0x1604, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2806, N, 0x1CED, N, 0x1CED, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D22, 0x1654, N, 0x1654, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x276A, N, 0x1CEE, N, 0x1CEE, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x26EC, 0x1BCB, N, 0x1BCB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2854, N, 0x1CEF, N, 0x1CEF, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x30C4, 0x1C16, N, 0x1C16, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A80, N, 0x1CF0, N, 0x1CF0, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3068, 0x1C6E, N, 0x1C6E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x31BC, N, 0x1CF1, N, 0x1CF1, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3322, 0x13AC, N, 0x13AC, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2788, N, 0x1CF2, N, 0x1CF2, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x15DC, N, 0x15DC, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x32CA, 0x1B35, N, 0x1B35, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C9C, N, 0x1CF3, N, 0x1CF3, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x27CE, 0x1B87, N, 0x1B87, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x306A, N, 0x1CF4, N, 0x1CF4, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2BEA, 0x1BD6, N, 0x1BD6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B98, N, 0x1CF5, N, 0x1CF5, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C25, N, 0x1C25, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1CF6, N, 0x1CF6, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x30D2, 0x1C77, N, 0x1C77, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A9E, N, 0x1CF7, N, 0x1CF7, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x28F8, 0x18F7, N, 0x18F7, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FF0, N, 0x1CF8, N, 0x1CF8, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3168, 0x105E, N, 0x105E, N, 0x058F, 0, 1, 1),
    p(2, 0, 1, 0, 0x2AB2, N, 0x0C9A, N, 0x0C9A, 0x0592, 0, 1, 1),
    p(1, 0, 1, 0, 0x2C9A, 0x1987, N, 0x1987, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x305E, N, 0x1CF9, N, 0x1CF9, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2FB4, 0x19D7, N, 0x19D7, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x28BC, N, 0x1CFA, N, 0x1CFA, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C26, 0x2C26, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 16, 0x3268, 0x1A68, N, 0x1A68, 0x1CFB, N, 0, 1, 1),
    p(3, 0, 1, 16, 0x2E32, 0x1A68, 0x1CFC, 0x1A68, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x2864, N, 0x1CFC, N, 0x1CFB, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x298A, 0x1703, N, 0x1703, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2AF0, N, 0x1CFD, N, 0x1CFD, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1501, N, 0x1501, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18DB, N, 0x18DB, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x28A8, 0x1792, N, 0x1792, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F94, N, 0x1CFE, N, 0x1CFE, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x32B6, 0x17DA, N, 0x17DA, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x31C0, N, 0x1CFF, N, 0x1CFF, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2DFC, 0x182F, N, 0x182F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2830, N, 0x1D00, N, 0x1D00, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B5A, 0x186E, N, 0x186E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x31B4, N, 0x1D01, N, 0x1D01, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2FF2, 0x18BC, N, 0x18BC, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x291E, N, 0x1D02, N, 0x1D02, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3062, 0x1543, N, 0x1543, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2986, N, 0x1D03, N, 0x1D03, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2808, 0x1593, N, 0x1593, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2E44, N, 0x1D04, N, 0x1D04, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2874, 0x15DF, N, 0x15DF, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2EB4, N, 0x1D05, N, 0x1D05, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D2C, 0x1632, N, 0x1632, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x276E, N, 0x1D06, N, 0x1D06, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D9A, 0x1682, N, 0x1682, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x27DC, N, 0x1D07, N, 0x1D07, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2CA8, 0x16CE, N, 0x16CE, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x32FE, N, 0x1D08, N, 0x1D08, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2CFC, 0x1C43, N, 0x1C43, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3364, N, 0x1D09, N, 0x1D09, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E4C, 0x1380, N, 0x1380, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FEC, N, 0x1D0A, N, 0x1D0A, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2EC4, 0x13DB, N, 0x13DB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3060, N, 0x1D0B, N, 0x1D0B, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B2E, 0x1425, N, 0x1425, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x326C, N, 0x1D0C, N, 0x1D0C, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B94, 0x146D, N, 0x146D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x32D8, N, 0x1D0D, N, 0x1D0D, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x293E, 0x14B2, N, 0x14B2, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x27DE, N, 0x1D0E, N, 0x1D0E, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2CBA, 0x150E, N, 0x150E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B6C, N, 0x1D0F, N, 0x1D0F, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A86, N, 0x1A86, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D10, N, 0x1D10, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x26E6, 0x1AC7, N, 0x1AC7, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2D68, N, 0x1D11, N, 0x1D11, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x146A, N, 0x146A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B67, N, 0x1B67, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x195D, N, 0x195D, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BAC, N, 0x1BAC, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D12, N, 0x1D12, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E0A, 0x106A, N, 0x106A, N, 0x0595, 0, 1, 1),
    p(2, 0, 1, 0, 0x2CBE, N, 0x07CE, N, 0x07CE, 0x0598, 0, 1, 1),
    p(1, 0, 1, 0, 0x2F4A, 0x1222, N, 0x1222, N, 0x059B, 0, 1, 1),
    p(2, 0, 1, 0, 0x288A, N, 0x0E70, N, 0x0E70, 0x059E, 0, 1, 1),
    p(1, 0, 1, 0, 0x2FD2, 0x18D6, N, 0x18D6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2EBA, N, 0x1D13, N, 0x1D13, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2C6A, 0x191D, N, 0x191D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x335A, N, 0x1D14, N, 0x1D14, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2AFE, 0x08EC, N, 0x08EC, N, 0x05A1, 0, 1, 1),
    p(2, 0, 1, 0, 0x314C, N, 0x125E, N, 0x125E, 0x05A4, 0, 1, 1),
    p(1, 0, 1, 0, 0x325E, 0x19B0, N, 0x19B0, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x28EC, N, 0x1D15, N, 0x1D15, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x30EC, 0x1A01, N, 0x1A01, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2AFC, N, 0x1D16, N, 0x1D16, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15DD, N, 0x15DD, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15B6, N, 0x15B6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D17, N, 0x1D17, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13D8, N, 0x13D8, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17E4, N, 0x17E4, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D18, N, 0x1D18, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D19, N, 0x1D19, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16A3, N, 0x16A3, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D1A, N, 0x1D1A, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x178E, N, 0x178E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x154D, N, 0x154D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13DC, N, 0x13DC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x156D, N, 0x156D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D1B, N, 0x1D1B, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15BE, N, 0x15BE, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D1C, N, 0x1D1C, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x160B, N, 0x160B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D1D, N, 0x1D1D, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1658, N, 0x1658, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D1E, N, 0x1D1E, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BD1, N, 0x1BD1, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D1F, N, 0x1D1F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D20, N, 0x1D20, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D21, N, 0x1D21, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D22, N, 0x1D22, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D23, N, 0x1D23, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D24, N, 0x1D24, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D25, N, 0x1D25, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D26, N, 0x1D26, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D27, N, 0x1D27, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x162F, N, 0x162F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D28, N, 0x1D28, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D29, N, 0x1D29, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D2A, N, 0x1D2A, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D2B, N, 0x1D2B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D2C, N, 0x1D2C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D2D, N, 0x1D2D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D2E, N, 0x1D2E, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D2F, N, 0x1D2F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D30, N, 0x1D30, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D31, N, 0x1D31, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D32, N, 0x1D32, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D33, N, 0x1D33, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D34, N, 0x1D34, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D35, N, 0x1D35, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D36, N, 0x1D36, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D37, N, 0x1D37, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D38, N, 0x1D38, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D39, N, 0x1D39, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D3A, N, 0x1D3A, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D3B, N, 0x1D3B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D3C, N, 0x1D3C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D3D, N, 0x1D3D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D3E, N, 0x1D3E, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D3F, N, 0x1D3F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D40, N, 0x1D40, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0FB4, N, 0x0FB4, 0x05A7, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D41, N, 0x1D41, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D42, N, 0x1D42, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x02EF, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1988, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x03E9, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x002F, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x16C9, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x170B, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x17EA, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0473, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0212, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 19, 0, N, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 0, N, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 16, 0x26AE, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 16, 0x3144, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 16, 0x2790, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 16, 0x2AAE, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 16, 0x28CC, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 16, 0x3228, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1AFA, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0147, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0033, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x023B, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1C4D, N, N, N, N, N, 0, 1, 1),
    p(6, 230, 14, 0, N, N, N, N, N, 0x8000, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x8001, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x8002, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x8003, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x8004, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x8005, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x8006, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x8007, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x8008, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x8009, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x800A, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x800B, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x800C, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x800D, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x800E, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x800F, 0, 0, 5),
    p(6, 232, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 220, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 216, 14, 0, N, N, N, N, N, 0x8010, 0, 0, 5),
    p(6, 202, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 220, 14, 0, N, N, N, N, N, 0x8011, 0, 0, 5),
    p(6, 220, 14, 0, N, N, N, N, N, 0x8012, 0, 0, 5),
    p(6, 220, 14, 0, N, N, N, N, N, 0x8013, 0, 0, 5),
    p(6, 220, 14, 0, N, N, N, N, N, 0x8014, 0, 0, 5),
    p(6, 202, 14, 0, N, N, N, N, N, 0x8015, 0, 0, 5),
    p(6, 202, 14, 0, N, N, N, N, N, 0x8016, 0, 0, 5),
    p(6, 220, 14, 0, N, N, N, N, N, 0x8017, 0, 0, 5),
    p(6, 220, 14, 0, N, N, N, N, N, 0x8018, 0, 0, 5),
    p(6, 220, 14, 0, N, N, N, N, N, 0x8019, 0, 0, 5),
    p(6, 220, 14, 0, N, N, N, N, N, 0x801A, 0, 0, 5),
    p(6, 1, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 1, 14, 0, N, N, N, N, N, 0x801B, 0, 0, 5),
    p(6, 230, 14, 0, 0x0282, N, N, N, N, N, 0, 0, 5),
    p(6, 230, 14, 0, 0x0399, N, N, N, N, N, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x801C, 0, 0, 5),
    p(6, 230, 14, 0, 0x0281, N, N, N, N, N, 0, 0, 5),
    p(6, 230, 14, 0, 0x2398, N, N, N, N, N, 0, 0, 5),
    p(6, 240, 14, 0, N, 0x0370, 0x0B0E, N, 0x0B0E, 0x801D, 0, 0, 5),
    p(6, 0, 14, 0, N, N, N, N, N, N, 4, 0, 5),
    p(6, 233, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 234, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(1, 0, 1, 0, N, 0x17A2, N, 0x17A2, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D43, N, 0x1D43, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17EF, N, 0x17EF, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D44, N, 0x1D44, N, 0, 1, 1),
    p(4, 0, 19, 0, 0x1653, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14B6, N, 0x14B6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D45, N, 0x1D45, N, 0, 1, 1),
    p(4, 0, 1, 16, 0x28AE, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D46, N, 0x1D46, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D47, N, 0x1D47, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D48, N, 0x1D48, N, 0, 1, 1),
    p(18, 0, 19, 0, 0x1ABE, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1717, N, 0x1717, N, N, 0, 1, 1),
    p(21, 0, 19, 0, 0x2DF2, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x279E, 0x0742, N, 0x0742, N, N, 0, 1, 1),
    p(18, 0, 19, 0, 0x0849, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2CCE, 0x16AC, N, 0x16AC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2BCC, 0x1158, N, 0x1158, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3234, 0x16F6, N, 0x16F6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x318E, 0x1AB5, N, 0x1AB5, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x302C, 0x13C9, N, 0x13C9, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x282E, 0x0766, N, 0x0766, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2D28, 0x448A, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x03AC, N, 0x03AC, N, 0x05AA, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1581, N, 0x1581, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1780, N, 0x1780, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15CC, N, 0x15CC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0F04, N, 0x0F04, N, 0x05CA, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1615, N, 0x1615, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x03D0, N, 0x03D0, N, 0x05DC, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1661, N, 0x1661, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0370, N, 0x0370, N, 0x05FC, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16B5, N, 0x16B5, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14E2, N, 0x14E2, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x07A6, N, 0x07A6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1536, N, 0x1536, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C81, N, 0x1C81, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0694, N, 0x0694, N, 0x060E, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13BF, N, 0x13BF, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0FD0, N, 0x0FD0, N, 0x0620, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x161C, N, 0x161C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1458, N, 0x1458, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0280, N, 0x0280, N, 0x0623, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14A1, N, 0x14A1, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BE7, N, 0x1BE7, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14ED, N, 0x14ED, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x05F2, N, 0x05F2, N, 0x0635, 0, 1, 1),
    p(1, 0, 1, 0, 0x3102, 0x0D28, N, 0x0D28, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2ECC, 0x08B8, N, 0x08B8, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2DC8, N, 0x1516, N, 0x1516, 0x0655, 0, 1, 1),
    p(2, 0, 1, 0, 0x3328, N, 0x1559, N, 0x1559, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2D36, N, 0x1393, N, 0x1393, 0x0658, 0, 1, 1),
    p(2, 0, 1, 0, 0x267A, N, 0x1AD2, N, 0x1AD2, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x28B8, 0x4397, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x079E, N, 0x079E, 0x065B, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1C08, N, 0x1C08, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1A4A, N, 0x1A4A, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1C5D, N, 0x1C5D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x08C0, N, 0x08C0, 0x067B, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x139B, N, 0x139B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x069A, N, 0x069A, 0x068D, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1925, N, 0x1925, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0B0E, N, 0x0B0E, 0x06AD, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x196D, N, 0x196D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1B73, N, 0x1B73, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x19BC, N, 0x19BC, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x180E, N, 0x180E, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1A0E, N, 0x1A0E, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0A7E, N, 0x0A7E, 0x06CC, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1A4F, N, 0x1A4F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x068E, N, 0x068E, 0x06DE, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x161C, 0x18E7, N, 0x18E7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x18E7, N, 0x18E7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x172C, N, 0x172C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0BCE, N, 0x0BCE, 0x06E2, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1779, N, 0x1779, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1970, N, 0x1970, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x17C3, N, 0x17C3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0715, N, 0x0715, 0x0701, 0, 1, 1),
    p(2, 0, 1, 0, 0x2370, N, 0x1D49, N, 0x1D49, 0x0721, 0, 1, 1),
    p(2, 0, 1, 0, 0x2283, N, 0x1D4A, N, 0x1D4A, 0x0740, 0, 1, 1),
    p(2, 0, 1, 0, 0x2ACC, N, 0x1B1B, N, 0x1B1B, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A46, N, 0x1B6E, N, 0x1B6E, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F80, N, 0x147E, N, 0x147E, 0x075F, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A78, N, 0x1A78, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x1581, 0x1581, 0x1C08, N, 0x1C08, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x1661, 0x1661, 0x1925, N, 0x1925, N, 0, 1, 1),
    p(1, 0, 1, 16, 0x0BCE, N, N, N, N, 0x0762, 0, 1, 1),
    p(1, 0, 1, 0, 0x2AC8, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2994, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x14A1, 0x14A1, 0x1779, N, 0x1779, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x13BF, 0x13BF, 0x1A4F, N, 0x1A4F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D4B, N, 0x1D4B, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AB9, N, 0x1AB9, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D4C, N, 0x1D4C, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B08, N, 0x1B08, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D4D, N, 0x1D4D, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B55, N, 0x1B55, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x194E, N, 0x194E, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17EC, N, 0x17EC, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D4E, N, 0x1D4E, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x183E, N, 0x183E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D4F, N, 0x1D4F, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x187A, N, 0x187A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D50, N, 0x1D50, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18C5, N, 0x18C5, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D51, N, 0x1D51, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x190F, N, 0x190F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D52, N, 0x1D52, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1956, N, 0x1956, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D53, N, 0x1D53, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15E9, N, 0x15E9, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D54, N, 0x1D54, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x163D, N, 0x163D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D55, N, 0x1D55, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x168F, N, 0x168F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D56, N, 0x1D56, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x16B5, 0x16B5, 0x196D, N, 0x196D, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x0FD0, 0x0FD0, 0x068E, N, 0x068E, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x140D, N, 0x1D57, N, 0x1D57, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D58, N, 0x1D58, N, 0, 1, 1),
    p(1, 0, 1, 16, 0x1925, 0x1661, N, 0x1661, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x0F04, 0x0F04, 0x08C0, N, 0x08C0, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15EF, N, 0x15EF, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D59, N, 0x1D59, N, 0, 1, 1),
    p(1, 0, 1, 16, 0x18E7, 0x1513, N, 0x1513, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x147B, N, 0x147B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D5A, N, 0x1D5A, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1554, N, 0x1554, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1756, N, 0x1756, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15A2, N, 0x15A2, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2A9C, 0x1A7B, N, 0x1A7B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x26C2, 0x18C3, N, 0x18C3, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1ABC, N, 0x1ABC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2ED2, 0x190C, N, 0x190C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B0C, N, 0x1B0C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1950, N, 0x1950, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0FBA, N, 0x0FBA, N, 0x076B, 0, 1, 1),
    p(1, 0, 1, 0, 0x2C00, 0x199E, N, 0x199E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17EE, N, 0x17EE, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19EF, N, 0x19EF, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1841, N, 0x1841, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A37, N, 0x1A37, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x30FE, 0x187F, N, 0x187F, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D00, 0x1A7F, N, 0x1A7F, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x306E, 0x18CA, N, 0x18CA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1713, N, 0x1713, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x099E, N, 0x099E, N, 0x076E, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1664, N, 0x1664, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x149E, N, 0x149E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0812, N, 0x0812, N, 0x0773, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14E8, N, 0x14E8, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x099C, N, 0x099C, N, 0x0776, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0908, N, 0x0908, N, 0x0780, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0BFA, N, 0x0BFA, N, 0x0785, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0732, N, 0x0732, N, 0x0788, 0, 1, 1),
    p(1, 0, 1, 0, 0x2906, 0x13C4, N, 0x13C4, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1012, N, 0x1012, N, 0x0792, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1412, N, 0x1412, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1624, N, 0x1624, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x145B, N, 0x145B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0F12, N, 0x0F12, N, 0x0795, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14A3, N, 0x14A3, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BEA, N, 0x1BEA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14F0, N, 0x14F0, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C33, N, 0x1C33, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x09FC, N, 0x09FC, N, 0x0798, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C87, N, 0x1C87, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AB8, N, 0x1AB8, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13CE, N, 0x13CE, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0FF8, N, 0x0FF8, N, 0x07A1, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x141B, N, 0x141B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B51, N, 0x1B51, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1461, N, 0x1461, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0FAA, N, 0x0FAA, N, 0x07A4, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19EB, N, 0x19EB, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0E8C, N, 0x0E8C, N, 0x07A7, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A34, N, 0x1A34, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C3B, N, 0x1C3B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1076, N, 0x1076, 0x07AA, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D5B, N, 0x1D5B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D5C, N, 0x1D5C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0ED2, N, 0x0ED2, 0x07AF, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D5D, N, 0x1D5D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x06C2, N, 0x06C2, 0x07B2, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0ED6, N, 0x0ED6, 0x07BC, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x12DE, N, 0x12DE, 0x07C1, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0906, N, 0x0906, 0x07C4, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F44, N, 0x1D5E, N, 0x1D5E, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x10FE, N, 0x10FE, 0x07CE, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D5F, N, 0x1D5F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D60, N, 0x1D60, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D61, N, 0x1D61, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x07D8, N, 0x07D8, 0x07D1, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D62, N, 0x1D62, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D63, N, 0x1D63, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D64, N, 0x1D64, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D65, N, 0x1D65, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0702, N, 0x0702, 0x07D4, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D66, N, 0x1D66, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D67, N, 0x1D67, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D68, N, 0x1D68, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x08FC, N, 0x08FC, 0x07DD, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D69, N, 0x1D69, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D6A, N, 0x1D6A, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D6B, N, 0x1D6B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0964, N, 0x0964, 0x07E0, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D6C, N, 0x1D6C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0842, N, 0x0842, 0x07E3, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D6D, N, 0x1D6D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D6E, N, 0x1D6E, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x299C, N, 0x1D6F, N, 0x1D6F, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x32E2, N, 0x1D70, N, 0x1D70, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D71, N, 0x1D71, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2812, N, 0x1D72, N, 0x1D72, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D73, N, 0x1D73, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D74, N, 0x1D74, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0C00, N, 0x0C00, 0x07E6, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FBA, N, 0x1D75, N, 0x1D75, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D76, N, 0x1D76, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D77, N, 0x1D77, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D78, N, 0x1D78, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D79, N, 0x1D79, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3012, N, 0x1D7A, N, 0x1D7A, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3368, N, 0x1D7B, N, 0x1D7B, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2EF8, N, 0x1D7C, N, 0x1D7C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D7D, N, 0x1D7D, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1755, N, 0x1755, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D7E, N, 0x1D7E, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17A8, N, 0x17A8, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D7F, N, 0x1D7F, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17F5, N, 0x17F5, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D80, N, 0x1D80, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1845, N, 0x1845, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D81, N, 0x1D81, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1886, N, 0x1886, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D82, N, 0x1D82, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1515, N, 0x1515, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D83, N, 0x1D83, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1558, N, 0x1558, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D84, N, 0x1D84, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15A9, N, 0x15A9, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D85, N, 0x1D85, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15F1, N, 0x15F1, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D86, N, 0x1D86, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1643, N, 0x1643, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D87, N, 0x1D87, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x11CE, N, 0x11CE, N, 0x07E9, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x09AC, N, 0x09AC, 0x07EC, 0, 1, 1),
    p(1, 0, 1, 0, 0x29AC, 0x16E4, N, 0x16E4, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x31CE, N, 0x1D88, N, 0x1D88, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C5C, N, 0x1C5C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D89, N, 0x1D89, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x139A, N, 0x139A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D8A, N, 0x1D8A, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13ED, N, 0x13ED, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D8B, N, 0x1D8B, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1435, N, 0x1435, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D8C, N, 0x1D8C, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1484, N, 0x1484, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D8D, N, 0x1D8D, N, 0, 1, 1),
    p(22, 0, 1, 0, N, N, N, N, N, N, 0, 1, 1),
    p(8, 0, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(1, 0, 1, 0, N, 0x1B26, N, 0x1B26, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D8E, N, 0x1D8E, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B7A, N, 0x1B7A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D8F, N, 0x1D8F, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BC6, N, 0x1BC6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D90, N, 0x1D90, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C11, N, 0x1C11, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D91, N, 0x1D91, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18A3, N, 0x18A3, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D92, N, 0x1D92, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18EB, N, 0x18EB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D93, N, 0x1D93, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x192B, N, 0x192B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D94, N, 0x1D94, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1977, N, 0x1977, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D95, N, 0x1D95, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19CE, N, 0x19CE, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D96, N, 0x1D96, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A16, N, 0x1A16, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D97, N, 0x1D97, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16B4, N, 0x16B4, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D98, N, 0x1D98, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16FA, N, 0x16FA, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D99, N, 0x1D99, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1735, N, 0x1735, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D9A, N, 0x1D9A, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1784, N, 0x1784, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D9B, N, 0x1D9B, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17CD, N, 0x17CD, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D9C, N, 0x1D9C, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1822, N, 0x1822, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D9D, N, 0x1D9D, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14A0, N, 0x14A0, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D9E, N, 0x1D9E, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14EB, N, 0x14EB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1D9F, N, 0x1D9F, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x153B, N, 0x153B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DA0, N, 0x1DA0, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1589, N, 0x1589, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DA1, N, 0x1DA1, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15D8, N, 0x15D8, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DA2, N, 0x1DA2, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1627, N, 0x1627, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DA3, N, 0x1DA3, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x166F, N, 0x166F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DA4, N, 0x1DA4, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BEC, N, 0x1BEC, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DA5, N, 0x1DA5, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C35, N, 0x1C35, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DA6, N, 0x1DA6, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1374, N, 0x1374, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DA7, N, 0x1DA7, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13D0, N, 0x13D0, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DA8, N, 0x1DA8, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B5D, N, 0x1B5D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2ED6, 0x1B54, N, 0x1B54, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2908, N, 0x1DA9, N, 0x1DA9, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B9E, N, 0x1B9E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DAA, N, 0x1DAA, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BF3, N, 0x1BF3, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DAB, N, 0x1DAB, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C3F, N, 0x1C3F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DAC, N, 0x1DAC, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x137C, N, 0x137C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DAD, N, 0x1DAD, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x190E, N, 0x190E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DAE, N, 0x1DAE, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1955, N, 0x1955, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DAF, N, 0x1DAF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DB0, N, 0x1DB0, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3076, 0x1BA4, N, 0x1BA4, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x299E, N, 0x1DB1, N, 0x1DB1, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x30DE, 0x1843, N, 0x1843, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A0A, N, 0x1DB2, N, 0x1DB2, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1881, N, 0x1881, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DB3, N, 0x1DB3, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3366, 0x18CC, N, 0x18CC, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3278, N, 0x1DB4, N, 0x1DB4, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0CFA, N, 0x0CFA, N, 0x07EF, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0A72, N, 0x0A72, 0x07F2, 0, 1, 1),
    p(1, 0, 1, 0, 0x2A72, 0x195A, N, 0x195A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2CFA, N, 0x1DB5, N, 0x1DB5, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2F3E, 0x19A5, N, 0x19A5, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x296E, N, 0x1DB6, N, 0x1DB6, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x32DE, 0x1641, N, 0x1641, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2BFA, N, 0x1DB7, N, 0x1DB7, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1693, N, 0x1693, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DB8, N, 0x1DB8, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2DD8, 0x16E3, N, 0x16E3, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2732, N, 0x1DB9, N, 0x1DB9, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2968, 0x171B, N, 0x171B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FB6, N, 0x1DBA, N, 0x1DBA, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x27D8, 0x175C, N, 0x175C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F12, N, 0x1DBB, N, 0x1DBB, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x090A, N, 0x090A, N, 0x07F5, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x0D70, N, 0x0D70, 0x07F8, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D70, 0x17FB, N, 0x17FB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x290A, N, 0x1DBC, N, 0x1DBC, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2842, 0x1481, N, 0x1481, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2E8C, N, 0x1DBD, N, 0x1DBD, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2838, 0x14C5, N, 0x14C5, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2E7C, N, 0x1DBE, N, 0x1DBE, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x30D6, 0x151C, N, 0x151C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x29FC, N, 0x1DBF, N, 0x1DBF, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2702, 0x1563, N, 0x1563, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2D38, N, 0x1DC0, N, 0x1DC0, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x28FC, 0x15B2, N, 0x15B2, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FF8, N, 0x1DC1, N, 0x1DC1, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15FB, N, 0x15FB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DC2, N, 0x1DC2, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2964, 0x1B77, N, 0x1B77, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FAA, N, 0x1DC3, N, 0x1DC3, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BC1, N, 0x1BC1, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DC4, N, 0x1DC4, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C0E, N, 0x1C0E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DC5, N, 0x1DC5, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C65, N, 0x1C65, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DC6, N, 0x1DC6, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13A2, N, 0x13A2, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DC7, N, 0x1DC7, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13F3, N, 0x13F3, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DC8, N, 0x1DC8, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1974, N, 0x1974, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DC9, N, 0x1DC9, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19C9, N, 0x19C9, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DCA, N, 0x1DCA, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A13, N, 0x1A13, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DCB, N, 0x1DCB, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A59, N, 0x1A59, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DCC, N, 0x1DCC, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A9C, N, 0x1A9C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DCD, N, 0x1DCD, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AEA, N, 0x1AEA, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DCE, N, 0x1DCE, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B31, N, 0x1B31, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DCF, N, 0x1DCF, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17CC, N, 0x17CC, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DD0, N, 0x1DD0, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x181E, N, 0x181E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DD1, N, 0x1DD1, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1862, N, 0x1862, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DD2, N, 0x1DD2, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18AC, N, 0x18AC, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DD3, N, 0x1DD3, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18F5, N, 0x18F5, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DD4, N, 0x1DD4, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1935, N, 0x1935, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DD5, N, 0x1DD5, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15D5, N, 0x15D5, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DD6, N, 0x1DD6, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1623, N, 0x1623, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DD7, N, 0x1DD7, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x166A, N, 0x166A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DD8, N, 0x1DD8, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16C0, N, 0x16C0, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DD9, N, 0x1DD9, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1702, N, 0x1702, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DDA, N, 0x1DDA, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1740, N, 0x1740, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DDB, N, 0x1DDB, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1790, N, 0x1790, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DDC, N, 0x1DDC, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x141A, N, 0x141A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DDD, N, 0x1DDD, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1460, N, 0x1460, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DDE, N, 0x1DDE, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15AF, N, 0x15AF, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17B4, N, 0x17B4, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15F8, N, 0x15F8, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17FD, N, 0x17FD, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x09FE, N, 0x09FE, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1483, N, 0x1483, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x169D, N, 0x169D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14C7, N, 0x14C7, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16E8, N, 0x16E8, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x151E, N, 0x151E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0D4D, N, 0x0D4D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1565, N, 0x1565, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0857, N, 0x0857, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15B4, N, 0x15B4, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13F1, N, 0x13F1, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1600, N, 0x1600, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x143C, N, 0x143C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x164A, N, 0x164A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x148B, N, 0x148B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0792, N, 0x0792, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14CD, N, 0x14CD, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0793, N, 0x0793, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1524, N, 0x1524, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C6B, N, 0x1C6B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A99, N, 0x1A99, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13A4, N, 0x13A4, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AE5, N, 0x1AE5, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13F7, N, 0x13F7, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B2F, N, 0x1B2F, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1122, N, 0x1122, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B82, N, 0x1B82, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19CD, N, 0x19CD, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BD0, N, 0x1BD0, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x09FF, N, 0x09FF, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C1D, N, 0x1C1D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A5B, N, 0x1A5B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C70, N, 0x1C70, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AA0, N, 0x1AA0, N, N, 0, 1, 1),
    p(18, 0, 1, 0, N, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DDF, N, 0x1DDF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DE0, N, 0x1DE0, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DE1, N, 0x1DE1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DE2, N, 0x1DE2, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DE3, N, 0x1DE3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DE4, N, 0x1DE4, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DE5, N, 0x1DE5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DE6, N, 0x1DE6, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DE7, N, 0x1DE7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DE8, N, 0x1DE8, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DE9, N, 0x1DE9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DEA, N, 0x1DEA, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DEB, N, 0x1DEB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DEC, N, 0x1DEC, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DED, N, 0x1DED, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DEE, N, 0x1DEE, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DEF, N, 0x1DEF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DF0, N, 0x1DF0, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DF1, N, 0x1DF1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DF2, N, 0x1DF2, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DF3, N, 0x1DF3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DF4, N, 0x1DF4, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DF5, N, 0x1DF5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DF6, N, 0x1DF6, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DF7, N, 0x1DF7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DF8, N, 0x1DF8, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DF9, N, 0x1DF9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DFA, N, 0x1DFA, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DFB, N, 0x1DFB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DFC, N, 0x1DFC, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DFD, N, 0x1DFD, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DFE, N, 0x1DFE, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1DFF, N, 0x1DFF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E00, N, 0x1E00, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E01, N, 0x1E01, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E02, N, 0x1E02, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E03, N, 0x1E03, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E04, N, 0x1E04, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x29FE, 0x29FE, N, N, N, N, 0, 1, 1),
    p(13, 0, 19, 0, N, N, N, N, N, N, 0, 1, 1),
    p(6, 222, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 228, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 10, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 11, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 12, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 13, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 14, 14, 0, N, N, N, N, N, 0x801E, 0, 0, 5),
    p(6, 15, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 16, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 17, 14, 0, N, N, N, N, N, 0x801F, 0, 0, 5),
    p(6, 18, 14, 0, N, N, N, N, N, 0x8020, 0, 0, 5),
    p(6, 19, 14, 0, N, N, N, N, N, 0x8021, 0, 0, 5),
    p(6, 19, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 20, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 21, 14, 0, N, N, N, N, N, 0x8022, 0, 0, 5),
    p(6, 22, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(13, 0, 4, 0, N, N, N, N, N, N, 0, 1, 1),
    p(6, 23, 14, 0, N, N, N, N, N, 0x8023, 0, 0, 5),
    p(18, 0, 4, 0, N, N, N, N, N, N, 0, 1, 1),
    p(6, 24, 14, 0, N, N, N, N, N, 0x8024, 0, 0, 5),
    p(6, 25, 14, 0, N, N, N, N, N, 0x8025, 0, 0, 5),
    p(6, 18, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(5, 0, 4, 0, N, N, N, N, N, 0x07FB, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x0801, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x0805, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x0808, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x080B, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x080E, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x0812, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x0815, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x0818, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x081F, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x0822, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x0826, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x0829, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x082C, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x082F, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x0832, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x0835, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x0839, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x083C, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x083F, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x0842, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x0848, 0, 1, 1),
    p(5, 0, 4, 0, N, N, N, N, N, 0x084B, 0, 1, 1),
    p(27, 0, 12, 0, N, N, N, N, N, N, 8, 0, 13),
    p(19, 0, 5, 0, N, N, N, N, N, N, 0, 1, 1),
    p(20, 0, 5, 0, N, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 5, 0, N, N, N, N, N, N, 0, 1, 1),
    p(6, 30, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 31, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 32, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(27, 0, 5, 0, N, N, N, N, N, N, 12, 0, 4),
    p(5, 0, 5, 0, N, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 0, 0x30CA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 0, 0x2E14, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 0, 0x2B06, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 0, 0x3124, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 0, 0x314A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 0, N, N, N, N, N, 0x084E, 0, 1, 1),
    p(4, 0, 5, 0, N, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 0, N, N, N, N, N, 0x0853, 0, 1, 1),
    p(5, 0, 5, 0, N, N, N, N, N, 0x0856, 0, 1, 1),
    p(6, 27, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 28, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 29, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 33, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 34, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x8026, 0, 0, 5),
    p(6, 230, 14, 0, N, N, N, N, N, 0x8027, 0, 0, 5),
    p(6, 220, 14, 0, N, N, N, N, N, 0x8028, 0, 0, 5),
    p(9, 0, 12, 0, N, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 12, 0, N, N, N, N, N, N, 0, 1, 1),
    p(6, 35, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(5, 0, 5, 16, 0x2A14, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 16, 0x26DE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 16, 0x2C02, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 16, 0x2D0A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 0, 0x2CF0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 0, N, N, N, N, N, 0x0859, 0, 1, 1),
    p(5, 0, 5, 0, 0x2996, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 0, N, N, N, N, N, 0x085C, 0, 1, 1),
    p(5, 0, 5, 0, 0x306C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 0, N, N, N, N, N, 0x085F, 0, 1, 1),
    p(22, 0, 5, 0, N, N, N, N, N, N, 0, 1, 1),
    p(27, 0, 5, 0, N, N, N, N, N, N, 8, 0, 13),
    p(6, 36, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 0, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(9, 0, 4, 0, N, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 4, 0, N, N, N, N, N, N, 0, 1, 1),
    p(20, 0, 4, 0, N, N, N, N, N, N, 0, 1, 1),
    p(7, 0, 1, 0, N, N, N, N, N, N, 0, 1, 12),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0862, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0865, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0868, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x086B, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x086E, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0871, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0874, 0, 1, 1),
    p(5, 0, 1, 0, 0x2E02, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0877, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x087A, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x087D, 0, 1, 1),
    p(5, 0, 1, 0, 0x26AA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0880, 0, 1, 1),
    p(5, 0, 1, 0, 0x295A, N, N, N, N, N, 0, 1, 1),
    p(6, 7, 14, 0, N, N, N, N, N, 0x8029, 0, 0, 5),
    p(6, 9, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(5, 0, 1, 0, 0x2E10, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, 0x31C2, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, 0x2F98, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, 0x305C, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, 0x2BF4, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, 0x2FA6, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, 0x30CC, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, 0x28F2, N, N, N, N, N, 2, 1, 1),
    p(9, 0, 1, 0, N, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0883, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0886, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0889, 0, 1, 1),
    p(6, 7, 14, 0, N, N, N, N, N, 0x802A, 0, 0, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0x802B, 0, 1, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0x088C, 0, 1, 12),
    p(7, 0, 1, 0, 0x3188, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, 0x293A, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, N, N, N, N, N, 0x802C, 0, 1, 5),
    p(5, 0, 1, 0, 0x2B5C, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, 0x2EFA, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, 0x283C, N, N, N, N, N, 2, 1, 1),
    p(11, 0, 1, 0, N, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0890, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0893, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0896, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0899, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x089C, 0, 1, 1),
    p(5, 0, 1, 0, 0x31E0, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, 0x2B6A, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x089F, 0, 1, 1),
    p(6, 7, 14, 0, N, N, N, N, N, 0x802D, 0, 0, 5),
    p(5, 0, 1, 0, 0x2B0A, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, 0x2664, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, 0x2F50, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, 0x2A04, N, N, N, N, N, 2, 1, 1),
    p(6, 7, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(5, 0, 1, 0, N, N, N, N, N, 0x08A2, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x08A5, 0, 1, 1),
    p(6, 7, 14, 0, N, N, N, N, N, 0x802E, 0, 0, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0x802F, 0, 1, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0x08A8, 0, 1, 12),
    p(7, 0, 1, 0, 0x31D2, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, 0x2A92, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, 0x27A8, N, N, N, N, N, 0, 1, 12),
    p(6, 0, 14, 0, N, N, N, N, N, 0x8030, 0, 0, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0x8031, 0, 1, 5),
    p(5, 0, 1, 0, 0x3174, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, 0x27FC, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x08AD, 0, 1, 1),
    p(5, 0, 1, 0, 0x2E24, N, N, N, N, N, 0, 1, 1),
    p(7, 0, 1, 0, N, N, N, N, N, 0x8032, 0, 1, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0x08B0, 0, 1, 12),
    p(7, 0, 1, 0, N, N, N, N, N, 0x08B4, 0, 1, 12),
    p(7, 0, 1, 0, 0x272E, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, 0x2FB2, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, 0x2BDA, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, N, N, N, N, N, 0x8033, 0, 1, 5),
    p(6, 0, 14, 0, N, N, N, N, N, 0x08B7, 0, 0, 5),
    p(6, 0, 14, 0, 0x2D1C, N, N, N, N, N, 0, 0, 5),
    p(6, 84, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 91, 14, 0, N, N, N, N, N, 0x8034, 0, 0, 5),
    p(11, 0, 19, 0, N, N, N, N, N, N, 0, 1, 1),
    p(6, 0, 1, 0, N, N, N, N, N, 0x08BA, 0, 0, 5),
    p(7, 0, 1, 0, 0x279A, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, N, N, N, N, N, 0x8035, 0, 1, 5),
    p(6, 0, 1, 0, N, N, N, N, N, 0x08BD, 0, 0, 5),
    p(7, 0, 1, 0, 0x2F7C, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, 0x3270, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, 0x267E, N, N, N, N, 0x08C2, 0, 1, 12),
    p(7, 0, 1, 0, 0x3002, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, N, N, N, N, N, 0x8036, 0, 1, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0x8037, 0, 1, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0x8038, 0, 1, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0x08C5, 0, 1, 12),
    p(7, 0, 1, 0, N, N, N, N, N, 0x08C9, 0, 1, 12),
    p(7, 0, 1, 0, 0x3224, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, 0x28B6, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, 0x2F46, N, N, N, N, N, 0, 1, 12),
    p(5, 0, 1, 0, N, N, N, N, N, N, 0, 1, 13),
    p(7, 0, 1, 0, N, N, N, N, N, 0x8039, 0, 1, 5),
    p(6, 9, 14, 0, N, N, N, N, N, 0x803A, 0, 0, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0x803B, 0, 1, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0x08CC, 0, 1, 12),
    p(7, 0, 1, 0, 0x273C, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, 0x32AA, N, N, N, N, 0x08D1, 0, 1, 12),
    p(7, 0, 1, 0, 0x312A, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, 0x2B2A, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, N, N, N, N, N, 0x803C, 0, 1, 5),
    p(5, 0, 1, 16, 0x2928, N, N, N, N, N, 0, 1, 12),
    p(6, 103, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 107, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(5, 0, 1, 16, 0x2888, N, N, N, N, N, 0, 1, 12),
    p(6, 118, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 122, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(5, 0, 1, 16, 0x331E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 16, 0x2F6C, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 1, 2, 0x1655, N, N, N, N, N, 0, 1, 1),
    p(6, 216, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(5, 0, 1, 0, N, N, N, N, N, 0x08D4, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x08D7, 0, 1, 1),
    p(5, 0, 1, 0, 0x324A, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x08DA, 0, 1, 1),
    p(5, 0, 1, 0, 0x29F0, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x08DD, 0, 1, 1),
    p(5, 0, 1, 0, 0x32C6, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x08E0, 0, 1, 1),
    p(5, 0, 1, 0, 0x336C, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x08E3, 0, 1, 1),
    p(5, 0, 1, 0, 0x2980, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 1, 0, 0x2B96, N, N, N, N, N, 2, 1, 1),
    p(6, 129, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 130, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 0, 14, 0, 0x2E40, N, N, N, N, N, 0, 0, 5),
    p(6, 132, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 0, 14, 0, 0x2EAC, N, N, N, N, N, 0, 0, 5),
    p(6, 0, 14, 0, 0x3004, N, N, N, N, N, 2, 0, 5),
    p(6, 0, 14, 16, 0x32D6, N, N, N, N, N, 0, 0, 5),
    p(6, 0, 14, 0, 0x328C, N, N, N, N, N, 2, 0, 5),
    p(6, 0, 14, 16, 0x286C, N, N, N, N, N, 0, 0, 5),
    p(6, 130, 14, 0, N, N, N, N, N, 0x803D, 0, 0, 5),
    p(6, 0, 14, 0, 0x2BBE, N, N, N, N, N, 0, 0, 5),
    p(6, 0, 14, 0, N, N, N, N, N, 0x08E6, 0, 0, 5),
    p(6, 0, 14, 0, N, N, N, N, N, 0x08E9, 0, 0, 5),
    p(6, 0, 14, 0, 0x28E2, N, N, N, N, N, 2, 0, 5),
    p(6, 0, 14, 0, N, N, N, N, N, 0x08EC, 0, 0, 5),
    p(6, 0, 14, 0, 0x2D66, N, N, N, N, N, 2, 0, 5),
    p(6, 0, 14, 0, N, N, N, N, N, 0x08EF, 0, 0, 5),
    p(6, 0, 14, 0, 0x2962, N, N, N, N, N, 2, 0, 5),
    p(6, 0, 14, 0, N, N, N, N, N, 0x08F2, 0, 0, 5),
    p(6, 0, 14, 0, 0x31F2, N, N, N, N, N, 2, 0, 5),
    p(6, 0, 14, 0, N, N, N, N, N, 0x08F5, 0, 0, 5),
    p(6, 0, 14, 0, 0x2D94, N, N, N, N, N, 2, 0, 5),
    p(6, 0, 14, 0, N, N, N, N, N, 0x08F8, 0, 0, 5),
    p(6, 0, 14, 0, N, N, N, N, N, 0x08FB, 0, 0, 5),
    p(6, 0, 14, 0, N, N, N, N, N, 0x803E, 0, 0, 5),
    p(6, 0, 14, 0, N, N, N, N, N, 0x803F, 0, 0, 5),
    p(6, 0, 14, 0, 0x2F34, N, N, N, N, N, 2, 0, 5),
    p(5, 0, 1, 0, N, N, N, N, N, 0x08FE, 0, 1, 1),
    p(5, 0, 1, 0, 0x2EC6, N, N, N, N, N, 0, 1, 1),
    p(7, 0, 1, 0, N, N, N, N, N, N, 0, 1, 1),
    p(6, 0, 14, 0, N, N, N, N, N, 0x8040, 0, 0, 5),
    p(1, 0, 1, 0, N, 0x1C55, N, 0x1C55, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A89, N, 0x1A89, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1391, N, 0x1391, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AD0, N, 0x1AD0, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x191E, N, 0x191E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B19, N, 0x1B19, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1966, N, 0x1966, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B6D, N, 0x1B6D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19B3, N, 0x19B3, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BB6, N, 0x1BB6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A04, N, 0x1A04, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1851, N, 0x1851, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A49, N, 0x1A49, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1894, N, 0x1894, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A8F, N, 0x1A8F, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18E1, N, 0x18E1, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1724, N, 0x1724, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1924, N, 0x1924, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1770, N, 0x1770, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x196C, N, 0x196C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17BC, N, 0x17BC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19BB, N, 0x19BB, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x180D, N, 0x180D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1650, N, 0x1650, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1857, N, 0x1857, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16A6, N, 0x16A6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x189C, N, 0x189C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16F1, N, 0x16F1, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18E6, N, 0x18E6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x172B, N, 0x172B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1575, N, 0x1575, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1778, N, 0x1778, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15C2, N, 0x15C2, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17C2, N, 0x17C2, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x160E, N, 0x160E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1814, N, 0x1814, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x165A, N, 0x165A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1494, N, 0x1494, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14D9, N, 0x14D9, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15CB, N, 0x15CB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E05, N, 0x1E05, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E06, N, 0x1E06, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E07, N, 0x1E07, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E08, N, 0x1E08, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E09, N, 0x1E09, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E0A, N, 0x1E0A, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E0B, N, 0x1E0B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E0C, N, 0x1E0C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E0D, N, 0x1E0D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E0E, N, 0x1E0E, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E0F, N, 0x1E0F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E10, N, 0x1E10, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E11, N, 0x1E11, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E12, N, 0x1E12, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E13, N, 0x1E13, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E14, N, 0x1E14, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E15, N, 0x1E15, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E16, N, 0x1E16, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E17, N, 0x1E17, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E18, N, 0x1E18, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E19, N, 0x1E19, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E1A, N, 0x1E1A, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E1B, N, 0x1E1B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E1C, N, 0x1E1C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E1D, N, 0x1E1D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E1E, N, 0x1E1E, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E1F, N, 0x1E1F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E20, N, 0x1E20, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E21, N, 0x1E21, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E22, N, 0x1E22, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E23, N, 0x1E23, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E24, N, 0x1E24, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E25, N, 0x1E25, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E26, N, 0x1E26, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E27, N, 0x1E27, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E28, N, 0x1E28, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E29, N, 0x1E29, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E2A, N, 0x1E2A, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E2B, N, 0x1E2B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E2C, N, 0x1E2C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E2D, N, 0x1E2D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E2E, N, 0x1E2E, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E2F, N, 0x1E2F, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x192A, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E30, N, 0x1E30, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E31, N, 0x1E31, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E32, N, 0x1E32, N, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, N, 0, 2, 6),
    p(5, 0, 1, 0, N, N, N, N, N, N, 4, 2, 6),
    p(5, 0, 1, 0, N, N, N, N, N, N, 4, 0, 7),
    p(5, 0, 1, 0, N, N, N, N, N, N, 0, 0, 7),
    p(5, 0, 1, 0, N, N, N, N, N, N, 0, 0, 8),
    p(1, 0, 1, 0, N, N, N, 0x1E33, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E34, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E35, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E36, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E37, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E38, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E39, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E3A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E3B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E3C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E3D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E3E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E3F, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E40, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E41, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E42, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E43, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E44, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E45, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E46, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E47, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E48, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E49, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E4A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E4B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E4C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E4D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E4E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E4F, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E50, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E51, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E52, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E53, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E54, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E55, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E56, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E57, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E58, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E59, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E5A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E5B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E5C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E5D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E5E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E5F, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E60, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E61, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E62, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E63, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E64, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E65, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E66, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E67, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E68, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E69, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E6A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E6B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E6C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E6D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E6E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E6F, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E70, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E71, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E72, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E73, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E74, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E75, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E76, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E77, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E78, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E79, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E7A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E7B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E7C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E7D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E7E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E7F, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E80, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E81, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E82, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E83, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E84, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E85, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E86, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E87, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, N, N, 0x1E88, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1C56, 0x1C56, N, 0x1C56, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1A8A, 0x1A8A, N, 0x1A8A, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1392, 0x1392, N, 0x1392, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1AD1, 0x1AD1, N, 0x1AD1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x13E8, 0x13E8, N, 0x13E8, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1B1A, 0x1B1A, N, 0x1B1A, N, 0, 1, 1),
    p(10, 0, 1, 0, N, N, N, N, N, N, 0, 1, 1),
    p(27, 0, 15, 0, N, N, N, N, N, N, 12, 0, 4),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0901, 0, 1, 1),
    p(5, 0, 1, 0, 0x320A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0904, 0, 1, 1),
    p(5, 0, 1, 0, 0x3110, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0907, 0, 1, 1),
    p(5, 0, 1, 0, 0x2A44, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x090A, 0, 1, 1),
    p(5, 0, 1, 0, 0x2936, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x090D, 0, 1, 1),
    p(5, 0, 1, 0, 0x2F78, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0910, 0, 1, 1),
    p(5, 0, 1, 0, 0x3000, N, N, N, N, N, 0, 1, 1),
    p(7, 0, 1, 0, N, N, N, N, N, 0x8041, 0, 1, 5),
    p(6, 0, 14, 0, N, N, N, N, N, 0x0913, 0, 0, 5),
    p(7, 0, 1, 0, 0x3018, N, N, N, N, N, 0, 1, 12),
    p(6, 0, 14, 0, N, N, N, N, N, 0x0916, 0, 0, 5),
    p(7, 0, 1, 0, 0x2934, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, N, N, N, N, N, 0x0919, 0, 1, 12),
    p(7, 0, 1, 0, N, N, N, N, N, 0x091C, 0, 1, 12),
    p(7, 0, 1, 0, 0x307C, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, 0x3308, N, N, N, N, N, 0, 1, 12),
    p(6, 0, 14, 0, N, N, N, N, N, 0x091F, 0, 0, 5),
    p(7, 0, 1, 0, 0x2894, N, N, N, N, N, 0, 1, 12),
    p(7, 9, 1, 0, N, N, N, N, N, N, 0, 1, 12),
    p(2, 0, 1, 0, N, 0x149E, 0x1D5C, N, 0x1D5C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x14E8, 0x1D5D, N, 0x1D5D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x0F12, 0x07D8, N, 0x07D8, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x14F0, 0x1D64, N, 0x1D64, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1C33, 0x1D65, N, 0x1D65, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1461, 0x1D6B, N, 0x1D6B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x17A8, 0x1D7F, N, 0x1D7F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1771, 0x1E89, N, 0x1E89, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B23, N, 0x1B23, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1437, N, 0x1437, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B74, N, 0x1B74, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19BF, N, 0x19BF, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BBC, N, 0x1BBC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A0F, N, 0x1A0F, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C0C, N, 0x1C0C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A51, N, 0x1A51, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x189E, N, 0x189E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A96, N, 0x1A96, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18E9, N, 0x18E9, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1ADF, N, 0x1ADF, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x192A, N, 0x192A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B29, N, 0x1B29, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1971, N, 0x1971, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17C7, N, 0x17C7, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19C6, N, 0x19C6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1816, N, 0x1816, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A11, N, 0x1A11, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x185B, N, 0x185B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A56, N, 0x1A56, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18A5, N, 0x18A5, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16F7, N, 0x16F7, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18ED, N, 0x18ED, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1732, N, 0x1732, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x192D, N, 0x192D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1781, N, 0x1781, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x197B, N, 0x197B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17CA, N, 0x17CA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1618, N, 0x1618, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x181C, N, 0x181C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1663, N, 0x1663, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x185F, N, 0x185F, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16B8, N, 0x16B8, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14E6, N, 0x14E6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16FB, N, 0x16FB, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1538, N, 0x1538, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1737, N, 0x1737, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1585, N, 0x1585, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1786, N, 0x1786, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15D2, N, 0x15D2, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1411, N, 0x1411, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1621, N, 0x1621, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14A2, N, 0x14A2, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16BE, N, 0x16BE, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14EE, N, 0x14EE, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x035C, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0BEA, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0245, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x01F1, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0329, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x15DC, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x03BB, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0215, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x019D, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x043D, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x02A5, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x03E6, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x024B, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x060E, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x02D2, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x195D, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x01F4, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0353, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0418, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0452, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x01EB, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0030, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x14D4, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1C1F, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1512, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x04D0, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0031, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x044E, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x144D, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x149A, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1BD8, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x019B, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0144, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x00AE, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x17B6, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0201, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x157D, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1434, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1B70, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x00AC, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0386, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0264, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1C60, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1904, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x00DC, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x19C1, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1581, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1780, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x15CC, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x14A1, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1BE7, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x00DD, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x002F, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x0264, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x00DC, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x1581, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x1780, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x0FD0, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x14A1, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x1BE7, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x145B, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E8A, N, 0x1E8A, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E8B, N, 0x1E8B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E8C, N, 0x1E8C, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x152D, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0145, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x13B0, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x19CC, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0218, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1A61, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1AA7, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1B43, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x19DA, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1829, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1A23, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1514, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x19AC, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x18B7, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1694, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x19FD, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1947, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1743, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1797, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1991, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x17DE, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x19E4, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1872, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1636, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1469, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x19A6, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x154D, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1384, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1A4B, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x159D, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x13DC, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x0381, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1472, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1BAA, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x08BC, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1661, N, N, N, N, N, 0, 1, 1),
    p(6, 214, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(1, 0, 1, 0, 0x29A4, 0x151B, N, 0x151B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x300C, N, 0x1E8D, N, 0x1E8D, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2992, 0x1562, N, 0x1562, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x308C, N, 0x1E8E, N, 0x1E8E, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x31A8, 0x15B1, N, 0x15B1, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x330A, N, 0x1E8F, N, 0x1E8F, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2F1C, 0x1B24, N, 0x1B24, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x30B4, N, 0x1E90, N, 0x1E90, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x31B8, 0x1B75, N, 0x1B75, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B7A, N, 0x1E91, N, 0x1E91, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2FE4, 0x1BC0, N, 0x1BC0, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x29F8, N, 0x1E92, N, 0x1E92, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2AD2, 0x1C0D, N, 0x1C0D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3214, N, 0x1E93, N, 0x1E93, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2844, 0x1C64, N, 0x1C64, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F9A, N, 0x1E94, N, 0x1E94, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B9E, 0x13A1, N, 0x13A1, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x32E6, N, 0x1E95, N, 0x1E95, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x277A, 0x13F2, N, 0x13F2, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2EA6, N, 0x1E96, N, 0x1E96, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2EF0, 0x1973, N, 0x1973, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x328E, N, 0x1E97, N, 0x1E97, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2C66, 0x19C8, N, 0x19C8, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x286E, N, 0x1E98, N, 0x1E98, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B10, 0x1A12, N, 0x1A12, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x29D8, N, 0x1E99, N, 0x1E99, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E64, 0x1A58, N, 0x1A58, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x27B4, N, 0x1E9A, N, 0x1E9A, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E70, 0x1A9B, N, 0x1A9B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3222, N, 0x1E9B, N, 0x1E9B, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2EBE, 0x1AE9, N, 0x1AE9, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x28A2, N, 0x1E9C, N, 0x1E9C, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2760, 0x1782, N, 0x1782, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x28D8, N, 0x1E9D, N, 0x1E9D, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x289E, 0x17CB, N, 0x17CB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F2E, N, 0x1E9E, N, 0x1E9E, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B36, 0x181D, N, 0x181D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A4C, N, 0x1E9F, N, 0x1E9F, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x331C, 0x1861, N, 0x1861, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3232, N, 0x1EA0, N, 0x1EA0, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2BFE, 0x18AB, N, 0x18AB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B12, N, 0x1EA1, N, 0x1EA1, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2AD4, 0x18F4, N, 0x18F4, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x29DC, N, 0x1EA2, N, 0x1EA2, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x269E, 0x1586, N, 0x1586, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2DC2, N, 0x1EA3, N, 0x1EA3, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2A5C, 0x15D4, N, 0x15D4, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x30BC, N, 0x1EA4, N, 0x1EA4, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2EB6, 0x1622, N, 0x1622, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3050, N, 0x1EA5, N, 0x1EA5, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x32B0, 0x1669, N, 0x1669, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x270C, N, 0x1EA6, N, 0x1EA6, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x304E, 0x16BF, N, 0x16BF, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x31AC, N, 0x1EA7, N, 0x1EA7, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x30AA, 0x1074, N, 0x1074, N, 0x0922, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F90, N, 0x0D82, N, 0x0D82, 0x0925, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D82, 0x173F, N, 0x173F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3074, N, 0x1EA8, N, 0x1EA8, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2DE6, 0x13CD, N, 0x13CD, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2CE6, N, 0x1EA9, N, 0x1EA9, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x32A2, 0x1419, N, 0x1419, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C1A, N, 0x1EAA, N, 0x1EAA, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3048, 0x145F, N, 0x145F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F2C, N, 0x1EAB, N, 0x1EAB, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3176, 0x14A6, N, 0x14A6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B08, N, 0x1EAC, N, 0x1EAC, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2706, 0x14FB, N, 0x14FB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3316, N, 0x1EAD, N, 0x1EAD, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x275E, 0x1542, N, 0x1542, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2E3C, N, 0x1EAE, N, 0x1EAE, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2F8E, 0x1ABB, N, 0x1ABB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x310C, N, 0x1EAF, N, 0x1EAF, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2CE0, 0x1B0B, N, 0x1B0B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2E66, N, 0x1EB0, N, 0x1EB0, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2C12, 0x1B5A, N, 0x1B5A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x330E, N, 0x1EB1, N, 0x1EB1, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E7E, 0x1BA0, N, 0x1BA0, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2860, N, 0x1EB2, N, 0x1EB2, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D3A, 0x1BF6, N, 0x1BF6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2EC0, N, 0x1EB3, N, 0x1EB3, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B26, 0x1C42, N, 0x1C42, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2682, N, 0x1EB4, N, 0x1EB4, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2DFE, 0x137D, N, 0x137D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2988, N, 0x1EB5, N, 0x1EB5, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x31E4, 0x1912, N, 0x1912, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2BE8, N, 0x1EB6, N, 0x1EB6, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D8C, 0x1958, N, 0x1958, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2D26, N, 0x1EB7, N, 0x1EB7, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2CA4, 0x19A3, N, 0x19A3, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2670, N, 0x1EB8, N, 0x1EB8, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x27B2, 0x0FCA, N, 0x0FCA, N, 0x0928, 0, 1, 1),
    p(2, 0, 1, 0, 0x292E, N, 0x0740, N, 0x0740, 0x092B, 0, 1, 1),
    p(1, 0, 1, 0, 0x2740, 0x1A3E, N, 0x1A3E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FCA, N, 0x1EB9, N, 0x1EB9, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3242, 0x1A85, N, 0x1A85, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x26A0, N, 0x1EBA, N, 0x1EBA, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3066, 0x171A, N, 0x171A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x298C, N, 0x1EBB, N, 0x1EBB, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B44, 0x1342, N, 0x1342, N, 0x092E, 0, 1, 1),
    p(2, 0, 1, 0, 0x31A4, N, 0x0FC6, N, 0x0FC6, 0x0931, 0, 1, 1),
    p(1, 0, 1, 0, 0x26C4, 0x17AE, N, 0x17AE, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A70, N, 0x1EBC, N, 0x1EBC, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3258, 0x17F9, N, 0x17F9, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x28E8, N, 0x1EBD, N, 0x1EBD, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2FC6, 0x184B, N, 0x184B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3342, N, 0x1EBE, N, 0x1EBE, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x26C6, 0x188C, N, 0x188C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2CF2, N, 0x1EBF, N, 0x1EBF, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2EE4, 0x18D4, N, 0x18D4, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2822, N, 0x1EC0, N, 0x1EC0, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2C5E, 0x155D, N, 0x155D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x32B8, N, 0x1EC1, N, 0x1EC1, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B86, 0x15AE, N, 0x15AE, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A50, N, 0x1EC2, N, 0x1EC2, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2770, 0x15F7, N, 0x15F7, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2E96, N, 0x1EC3, N, 0x1EC3, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x31AA, 0x1648, N, 0x1648, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2BB2, N, 0x1EC4, N, 0x1EC4, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E2A, 0x169C, N, 0x169C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2DB8, N, 0x1EC5, N, 0x1EC5, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2F1E, 0x16E7, N, 0x16E7, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x32BE, N, 0x1EC6, N, 0x1EC6, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2CCC, 0x1C63, N, 0x1C63, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x30A2, N, 0x1EC7, N, 0x1EC7, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x31B0, 0x139E, N, 0x139E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2AE6, N, 0x1EC8, N, 0x1EC8, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x281E, 0x13F0, N, 0x13F0, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2E5C, N, 0x1EC9, N, 0x1EC9, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x29BC, 0x143B, N, 0x143B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x30BA, N, 0x1ECA, N, 0x1ECA, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2C9E, 0x148A, N, 0x148A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2DF6, N, 0x1ECB, N, 0x1ECB, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B5E, 0x14CC, N, 0x14CC, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2CC8, N, 0x1ECC, N, 0x1ECC, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2876, 0x1A54, N, 0x1A54, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F68, N, 0x1ECD, N, 0x1ECD, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x30B2, 0x1A98, N, 0x1A98, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x320E, N, 0x1ECE, N, 0x1ECE, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2BF6, 0x1AE4, N, 0x1AE4, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3262, N, 0x1ECF, N, 0x1ECF, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2EFC, 0x1B2E, N, 0x1B2E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x282C, N, 0x1ED0, N, 0x1ED0, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2EB0, 0x1B81, N, 0x1B81, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x28F4, N, 0x1ED1, N, 0x1ED1, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x26E8, 0x1BCF, N, 0x1BCF, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2DB4, N, 0x1ED2, N, 0x1ED2, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D3E, 0x1C1B, N, 0x1C1B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2730, N, 0x1ED3, N, 0x1ED3, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2AE2, 0x18A8, N, 0x18A8, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C4E, N, 0x1ED4, N, 0x1ED4, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x27C0, 0x27C0, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x302A, 0x302A, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2D24, 0x2D24, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C38, 0x2C38, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x2E26, 0x2E26, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x28F0, 0x171A, 0x1EBB, N, 0x1EBB, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x293C, N, 0x1ED5, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2930, 0x0A4E, N, 0x0A4E, N, 0x0934, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F7E, N, 0x0698, N, 0x0698, 0x093A, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E76, 0x16FF, N, 0x16FF, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x27C4, N, 0x1ED6, N, 0x1ED6, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x28D0, 0x173D, N, 0x173D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3032, N, 0x1ED7, N, 0x1ED7, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B54, 0x178C, N, 0x178C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3294, N, 0x1ED8, N, 0x1ED8, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2A9A, 0x17D5, N, 0x17D5, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x31CC, N, 0x1ED9, N, 0x1ED9, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x294C, 0x1827, N, 0x1827, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x309E, N, 0x1EDA, N, 0x1EDA, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B38, 0x1869, N, 0x1869, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2EDE, N, 0x1EDB, N, 0x1EDB, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2958, 0x14F5, N, 0x14F5, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2CD0, N, 0x1EDC, N, 0x1EDC, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2BBC, 0x153F, N, 0x153F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F72, N, 0x1EDD, N, 0x1EDD, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B00, 0x158D, N, 0x158D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2E82, N, 0x1EDE, N, 0x1EDE, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x29C4, 0x15DA, N, 0x15DA, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2D32, N, 0x1EDF, N, 0x1EDF, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2698, 0x162D, N, 0x162D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A4E, N, 0x1EE0, N, 0x1EE0, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E60, 0x0F84, N, 0x0F84, N, 0x0940, 0, 1, 1),
    p(2, 0, 1, 0, 0x27AA, N, 0x0754, N, 0x0754, 0x0943, 0, 1, 1),
    p(1, 0, 1, 0, 0x26B8, 0x1BF2, N, 0x1BF2, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2CE8, N, 0x1EE1, N, 0x1EE1, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2AEE, 0x1C3D, N, 0x1C3D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3134, N, 0x1EE2, N, 0x1EE2, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E6E, 0x137B, N, 0x137B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2D64, N, 0x1EE3, N, 0x1EE3, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x311A, 0x13D5, N, 0x13D5, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x302E, N, 0x1EE4, N, 0x1EE4, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3058, 0x1421, N, 0x1421, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F36, N, 0x1EE5, N, 0x1EE5, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2EEE, 0x1468, N, 0x1468, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2DD0, N, 0x1EE6, N, 0x1EE6, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2754, 0x19F3, N, 0x19F3, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F84, N, 0x1EE7, N, 0x1EE7, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2BEC, 0x1A3A, N, 0x1A3A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3334, N, 0x1EE8, N, 0x1EE8, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2692, 0x1A82, N, 0x1A82, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2DB6, N, 0x1EE9, N, 0x1EE9, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3312, 0x0BAE, N, 0x0BAE, N, 0x0946, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C4C, N, 0x0FD4, N, 0x0FD4, 0x0949, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B64, 0x1B0F, N, 0x1B0F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x31BE, N, 0x1EEA, N, 0x1EEA, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3324, 0x1B61, N, 0x1B61, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C60, N, 0x1EEB, N, 0x1EEB, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x28AA, 0x1BA8, N, 0x1BA8, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2EEC, N, 0x1EEC, N, 0x1EEC, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x27CC, 0x184A, N, 0x184A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2E0C, N, 0x1EED, N, 0x1EED, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2680, 0x1889, N, 0x1889, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2CC6, N, 0x1EEE, N, 0x1EEE, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2FD4, 0x18D1, N, 0x18D1, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2BAE, N, 0x1EEF, N, 0x1EEF, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x29EE, 0x1917, N, 0x1917, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2D62, N, 0x1EF0, N, 0x1EF0, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2C64, 0x1960, N, 0x1960, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3028, N, 0x1EF1, N, 0x1EF1, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3332, 0x19AA, N, 0x19AA, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x29CE, N, 0x1EF2, N, 0x1EF2, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2A6A, 0x1647, N, 0x1647, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2DCC, N, 0x1EF3, N, 0x1EF3, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2DB2, 0x169A, N, 0x169A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x316C, N, 0x1EF4, N, 0x1EF4, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x319E, 0x16E6, N, 0x16E6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2BA2, N, 0x1EF5, N, 0x1EF5, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x29E8, 0x171E, N, 0x171E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3126, N, 0x1EF6, N, 0x1EF6, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x31AE, 0x1765, N, 0x1765, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2824, N, 0x1EF7, N, 0x1EF7, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x271C, 0x17B8, N, 0x17B8, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2ABE, N, 0x1EF8, N, 0x1EF8, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3350, 0x17FF, N, 0x17FF, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x29EC, N, 0x1EF9, N, 0x1EF9, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x321C, 0x1487, N, 0x1487, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x28AC, N, 0x1EFA, N, 0x1EFA, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2DDC, 0x14CB, N, 0x14CB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x31A0, N, 0x1EFB, N, 0x1EFB, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x301E, 0x1520, N, 0x1520, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F9E, N, 0x1EFC, N, 0x1EFC, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x29D2, 0x1569, N, 0x1569, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3114, N, 0x1EFD, N, 0x1EFD, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2F26, 0x15B8, N, 0x15B8, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x295E, N, 0x1EFE, N, 0x1EFE, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3346, 0x1602, N, 0x1602, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2D5C, N, 0x1EFF, N, 0x1EFF, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B7B, N, 0x1B7B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F00, N, 0x1F00, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BCA, N, 0x1BCA, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F01, N, 0x1F01, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C14, N, 0x1C14, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F02, N, 0x1F02, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C3C, N, 0x07B0, N, 0x07B0, 0x094C, 0, 1, 1),
    p(2, 0, 1, 0, 0x29D0, N, 0x0B76, N, 0x0B76, 0x096C, 0, 1, 1),
    p(2, 0, 1, 0, 0x31A2, N, 0x06E4, N, 0x06E4, 0x098C, 0, 1, 1),
    p(2, 0, 1, 0, 0x2820, N, 0x0A94, N, 0x0A94, 0x098F, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F10, N, 0x0D12, N, 0x0D12, 0x0992, 0, 1, 1),
    p(2, 0, 1, 0, 0x32AE, N, 0x10E4, N, 0x10E4, 0x0995, 0, 1, 1),
    p(2, 0, 1, 0, 0x3160, N, 0x0752, N, 0x0752, 0x0998, 0, 1, 1),
    p(2, 0, 1, 0, 0x27F0, N, 0x0FE8, N, 0x0FE8, 0x099B, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D74, 0x0F10, N, 0x0F10, N, 0x099E, 0, 1, 1),
    p(1, 0, 1, 0, 0x30AC, 0x0784, N, 0x0784, N, 0x09BE, 0, 1, 1),
    p(1, 0, 1, 0, 0x2A48, 0x097A, N, 0x097A, N, 0x09DE, 0, 1, 1),
    p(1, 0, 1, 0, 0x2DAA, 0x0674, N, 0x0674, N, 0x09E1, 0, 1, 1),
    p(1, 0, 1, 0, 0x27B0, 0x0FC4, N, 0x0FC4, N, 0x09E4, 0, 1, 1),
    p(1, 0, 1, 0, 0x30DA, 0x0B1A, N, 0x0B1A, N, 0x09E7, 0, 1, 1),
    p(1, 0, 1, 0, 0x2A12, 0x0EAA, N, 0x0EAA, N, 0x09EA, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D7C, 0x0A38, N, 0x0A38, N, 0x09ED, 0, 1, 1),
    p(2, 0, 1, 0, 0x3190, N, 0x10BE, N, 0x10BE, 0x09F0, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F04, N, 0x06D0, N, 0x06D0, 0x09F4, 0, 1, 1),
    p(2, 0, 1, 0, 0x300E, N, 0x1F03, N, 0x1F03, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B3C, N, 0x1F04, N, 0x1F04, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x32DC, N, 0x1F05, N, 0x1F05, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x28C2, N, 0x1F06, N, 0x1F06, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x32E0, 0x100E, N, 0x100E, N, 0x09F8, 0, 1, 1),
    p(1, 0, 1, 0, 0x28C0, 0x08C2, N, 0x08C2, N, 0x09FC, 0, 1, 1),
    p(1, 0, 1, 0, 0x331A, 0x1934, N, 0x1934, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x310E, 0x1B3C, N, 0x1B3C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x30BE, 0x1984, N, 0x1984, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x26D0, 0x17D0, N, 0x17D0, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2BA0, N, 0x0748, N, 0x0748, 0x0A00, 0, 1, 1),
    p(2, 0, 1, 0, 0x2938, N, 0x06D6, N, 0x06D6, 0x0A20, 0, 1, 1),
    p(2, 0, 1, 0, 0x2BAC, N, 0x084A, N, 0x084A, 0x0A40, 0, 1, 1),
    p(2, 0, 1, 0, 0x29A0, N, 0x10EA, N, 0x10EA, 0x0A43, 0, 1, 1),
    p(2, 0, 1, 0, 0x2944, N, 0x0758, N, 0x0758, 0x0A46, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C70, N, 0x0FEE, N, 0x0FEE, 0x0A49, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B84, N, 0x0D80, N, 0x0D80, 0x0A4C, 0, 1, 1),
    p(2, 0, 1, 0, 0x296C, N, 0x113A, N, 0x113A, 0x0A4F, 0, 1, 1),
    p(1, 0, 1, 0, 0x31E6, 0x0944, N, 0x0944, N, 0x0A52, 0, 1, 1),
    p(1, 0, 1, 0, 0x27B8, 0x0746, N, 0x0746, N, 0x0A72, 0, 1, 1),
    p(1, 0, 1, 0, 0x316A, 0x0FCE, N, 0x0FCE, N, 0x0A92, 0, 1, 1),
    p(1, 0, 1, 0, 0x2708, 0x07F4, N, 0x07F4, N, 0x0A95, 0, 1, 1),
    p(1, 0, 1, 0, 0x2748, 0x0EB2, N, 0x0EB2, N, 0x0A98, 0, 1, 1),
    p(1, 0, 1, 0, 0x2A00, 0x0C7A, N, 0x0C7A, N, 0x0A9B, 0, 1, 1),
    p(1, 0, 1, 0, 0x313E, 0x07F2, N, 0x07F2, N, 0x0A9E, 0, 1, 1),
    p(1, 0, 1, 0, 0x26D6, 0x0B7E, N, 0x0B7E, N, 0x0AA1, 0, 1, 1),
    p(2, 0, 1, 0, 0x3206, N, 0x0750, N, 0x0750, 0x0AA4, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F7A, N, 0x0D52, N, 0x0D52, 0x0AC3, 0, 1, 1),
    p(2, 0, 1, 0, 0x2EE8, N, 0x1F07, N, 0x1F07, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3284, N, 0x1F08, N, 0x1F08, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C54, N, 0x1F09, N, 0x1F09, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x284E, N, 0x1F0A, N, 0x1F0A, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2EA4, N, 0x1F0B, N, 0x1F0B, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x324E, N, 0x1F0C, N, 0x1F0C, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2B0E, 0x0C54, N, 0x0C54, N, 0x0AE2, 0, 1, 1),
    p(1, 0, 1, 0, 0x2DE2, 0x084E, N, 0x084E, N, 0x0B01, 0, 1, 1),
    p(1, 0, 1, 0, 0x2780, 0x167F, N, 0x167F, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x301A, 0x14AA, N, 0x14AA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2A7A, 0x16CA, N, 0x16CA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D52, 0x1503, N, 0x1503, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2750, 0x1C41, N, 0x1C41, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2FE2, 0x1548, N, 0x1548, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2932, N, 0x0AB4, N, 0x0AB4, 0x0B20, 0, 1, 1),
    p(2, 0, 1, 0, 0x2694, N, 0x0E36, N, 0x0E36, 0x0B24, 0, 1, 1),
    p(2, 0, 1, 0, 0x3216, N, 0x1F0D, N, 0x1F0D, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x289A, N, 0x1F0E, N, 0x1F0E, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x27EA, N, 0x1F0F, N, 0x1F0F, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B72, N, 0x1F10, N, 0x1F10, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2A7E, 0x07EA, N, 0x07EA, N, 0x0B28, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D4A, 0x089A, N, 0x089A, N, 0x0B2C, 0, 1, 1),
    p(1, 0, 1, 0, 0x2AB4, 0x1A3D, N, 0x1A3D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E36, 0x1C47, N, 0x1C47, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2D76, 0x1A84, N, 0x1A84, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3130, 0x1387, N, 0x1387, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2280, 0x2280, N, N, N, 0x0B30, 0, 1, 1),
    p(2, 0, 1, 0, 0x3314, N, 0x0744, N, 0x0744, 0x0B4F, 0, 1, 1),
    p(2, 0, 1, 0, 0x307A, 0x4280, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2BA8, N, 0x1F11, N, 0x1F11, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3336, 0x4622, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2E9A, N, 0x1F12, N, 0x1F12, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3044, 0x451A, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B7C, N, 0x1F13, N, 0x1F13, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2BCE, 0x0B7C, N, 0x0B7C, N, 0x0B6E, 0, 1, 1),
    p(1, 0, 1, 0, 0x3164, 0x1ACB, N, 0x1ACB, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2744, 0x1761, N, 0x1761, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3138, 0x17B3, N, 0x17B3, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x284C, N, 0x0BD6, N, 0x0BD6, 0x0B8D, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B4C, N, 0x074C, N, 0x074C, 0x0BAD, 0, 1, 1),
    p(2, 0, 1, 0, 0x2666, N, 0x0E38, N, 0x0E38, 0x0BCD, 0, 1, 1),
    p(2, 0, 1, 0, 0x2EE2, N, 0x1146, N, 0x1146, 0x0BD0, 0, 1, 1),
    p(2, 0, 1, 0, 0x296A, N, 0x077C, N, 0x077C, 0x0BD3, 0, 1, 1),
    p(2, 0, 1, 0, 0x31DA, N, 0x0A86, N, 0x0A86, 0x0BD6, 0, 1, 1),
    p(2, 0, 1, 0, 0x333C, N, 0x0DFA, N, 0x0DFA, 0x0BD9, 0, 1, 1),
    p(2, 0, 1, 0, 0x2E9E, N, 0x0A24, N, 0x0A24, 0x0BDC, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E22, 0x0666, N, 0x0666, N, 0x0BDF, 0, 1, 1),
    p(1, 0, 1, 0, 0x312E, 0x0C90, N, 0x0C90, N, 0x0BFF, 0, 1, 1),
    p(1, 0, 1, 0, 0x3198, 0x1056, N, 0x1056, N, 0x0C1F, 0, 1, 1),
    p(1, 0, 1, 0, 0x277E, 0x06BA, N, 0x06BA, N, 0x0C22, 0, 1, 1),
    p(1, 0, 1, 0, 0x2F08, 0x0974, N, 0x0974, N, 0x0C25, 0, 1, 1),
    p(1, 0, 1, 0, 0x2A78, 0x0716, N, 0x0716, N, 0x0C28, 0, 1, 1),
    p(1, 0, 1, 0, 0x2BD6, 0x0866, N, 0x0866, N, 0x0C2B, 0, 1, 1),
    p(1, 0, 1, 0, 0x274C, 0x0BEE, N, 0x0BEE, N, 0x0C2E, 0, 1, 1),
    p(2, 0, 1, 0, 0x3096, N, 0x1F14, N, 0x1F14, 0x0C31, 0, 1, 1),
    p(2, 0, 1, 0, 0x0742, N, 0x1F15, N, 0x1F15, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3064, N, 0x1F16, N, 0x1F16, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x16AC, N, 0x1F17, N, 0x1F17, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FFC, N, 0x1F18, N, 0x1F18, 0x0C34, 0, 1, 1),
    p(2, 0, 1, 0, 0x1158, N, 0x1F19, N, 0x1F19, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x291C, N, 0x1F1A, N, 0x1F1A, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x16F6, N, 0x1F1B, N, 0x1F1B, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x27D6, N, 0x1F1C, N, 0x1F1C, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x1AB5, N, 0x1F1D, N, 0x1F1D, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2CAC, N, 0x1F1E, N, 0x1F1E, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x13C9, N, 0x1F1F, N, 0x1F1F, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C72, N, 0x1F20, N, 0x1F20, 0x0C37, 0, 1, 1),
    p(2, 0, 1, 0, 0x0766, N, 0x1F21, N, 0x1F21, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2F5A, 0x3116, 0x1F22, N, 0x1F22, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x32EC, 0x2784, 0x1F23, N, 0x1F23, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x297A, 0x2B1C, 0x1F24, N, 0x1F24, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x31FA, 0x2674, 0x1F25, N, 0x1F25, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FC4, 0x3162, 0x1F26, N, 0x1F26, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B1A, 0x2CB8, 0x1F27, N, 0x1F27, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2EAA, 0x3084, 0x1F28, N, 0x1F28, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2A38, 0x2BB6, 0x1F29, N, 0x1F29, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x27EC, 0x3116, N, 0x1F2A, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x2B76, 0x2784, N, 0x1F2B, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x26E4, 0x2B1C, N, 0x1F2C, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x2A94, 0x2674, N, 0x1F2D, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x2D12, 0x3162, N, 0x1F2E, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x30E4, 0x2CB8, N, 0x1F2F, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x2752, 0x3084, N, 0x1F30, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x2FE8, 0x2BB6, N, 0x1F31, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2982, 0x2B24, 0x1F32, N, 0x1F32, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2746, 0x290C, 0x1F33, N, 0x1F33, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FCE, 0x316E, 0x1F34, N, 0x1F34, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x334A, 0x27F4, 0x1F35, N, 0x1F35, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2EB2, 0x3092, 0x1F36, N, 0x1F36, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C7A, 0x2E2C, 0x1F37, N, 0x1F37, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x27F2, 0x29B0, 0x1F38, N, 0x1F38, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B7E, 0x2D18, 0x1F39, N, 0x1F39, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x2F22, 0x2B24, N, 0x1F3A, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x31DC, 0x290C, N, 0x1F3B, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x284A, 0x316E, N, 0x1F3C, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x30EA, 0x27F4, N, 0x1F3D, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x2758, 0x3092, N, 0x1F3E, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x2FEE, 0x2E2C, N, 0x1F3F, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x2D80, 0x29B0, N, 0x1F40, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x313A, 0x2D18, N, 0x1F41, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x29AA, 0x2B46, 0x1F42, N, 0x1F42, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C90, 0x2E3E, 0x1F43, N, 0x1F43, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3056, 0x31F4, 0x1F44, N, 0x1F44, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x26BA, 0x286A, 0x1F45, N, 0x1F45, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2974, 0x2B14, 0x1F46, N, 0x1F46, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x327E, 0x2716, 0x1F47, N, 0x1F47, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2866, 0x2A2E, 0x1F48, N, 0x1F48, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2BEE, 0x2D96, 0x1F49, N, 0x1F49, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x2F52, 0x2B46, N, 0x1F4A, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x3246, 0x2E3E, N, 0x1F4B, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x2E38, 0x31F4, N, 0x1F4C, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x3146, 0x286A, N, 0x1F4D, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x277C, 0x2B14, N, 0x1F4E, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x2A86, 0x2716, N, 0x1F4F, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x2DFA, 0x2A2E, N, 0x1F50, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x2A24, 0x2D96, N, 0x1F51, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C2E, N, 0x1F52, N, 0x1F52, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2BC0, N, 0x1F53, N, 0x1F53, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2CB4, 0x2E62, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2E12, 0x2FFE, 0x1F54, N, 0x1F54, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x32A8, 0x2742, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x23AC, 0x23AC, N, N, N, 0x0C3A, 0, 1, 1),
    p(2, 0, 1, 0, 0x2C96, 0x43AC, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3302, 0x154B, N, 0x154B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x329C, 0x1382, N, 0x1382, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x31C6, 0x0CB4, N, 0x0CB4, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x1516, 0x13F6, N, 0x13F6, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x27DA, 0x2FFE, N, 0x1F55, N, N, 0, 1, 1),
    p(21, 0, 19, 16, 0x2E52, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x0370, 0x0370, 0x0B0E, N, 0x0B0E, N, 0, 1, 1),
    p(21, 0, 19, 16, 0x2E52, N, N, N, N, 0x0C3D, 0, 1, 1),
    p(21, 0, 19, 16, 0x3256, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 0, 0x3088, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x325C, 0x26EE, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2D6C, 0x2F42, 0x1F56, N, 0x1F56, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3158, 0x3304, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x23D0, 0x23D0, N, N, N, 0x0C5C, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FDE, 0x43D0, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x29FA, 0x1607, N, 0x1607, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x1559, 0x1442, N, 0x1442, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2902, 0x06EE, N, 0x06EE, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x1393, 0x1490, N, 0x1490, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x269A, 0x2F42, N, 0x1F57, N, N, 0, 1, 1),
    p(21, 0, 19, 0, 0x301C, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 0, 0x2D54, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 0, 0x2A68, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3200, N, 0x1F58, N, 0x1F58, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x3184, N, 0x1F59, N, 0x1F59, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FEA, 0x4574, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x1BB7, 0x448A, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x28E6, 0x28E6, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FA4, 0x4370, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x30A4, 0x17B7, N, 0x17B7, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3034, 0x19B1, N, 0x19B1, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2F32, 0x1BCE, N, 0x1BCE, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x1AD2, 0x14D3, N, 0x14D3, N, N, 0, 1, 1),
    p(21, 0, 19, 0, 0x270A, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 0, 0x31A6, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 0, 0x26D8, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x288E, N, 0x1F5A, N, 0x1F5A, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2818, N, 0x1F5B, N, 0x1F5B, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2B32, 0x447B, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x18EC, 0x4397, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FD0, 0x2FD0, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x32B4, N, 0x1F5C, N, 0x1F5C, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2710, 0x2710, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x32A0, 0x4283, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E4E, 0x164E, N, 0x164E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2DCE, 0x1855, N, 0x1855, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2CF4, 0x1C6F, N, 0x1C6F, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x1B6E, 0x1A9E, N, 0x1A9E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x268E, 0x1527, N, 0x1527, N, N, 0, 1, 1),
    p(21, 0, 19, 0, 0x30B8, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 0, 0x1C00, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 0, 0x1C09, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2AF6, 0x2CA0, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x2FBC, 0x315E, 0x1F5D, N, 0x1F5D, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x32CC, 0x2766, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, 0x25F2, 0x25F2, N, N, N, 0x0C5F, 0, 1, 1),
    p(2, 0, 1, 0, 0x274A, 0x45F2, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x2E86, 0x1C1A, N, 0x1C1A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x1B1B, 0x152A, N, 0x152A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x3266, 0x0AF6, N, 0x0AF6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x147E, 0x1AEE, N, 0x1AEE, N, N, 0, 1, 1),
    p(3, 0, 1, 0, 0x2882, 0x315E, N, 0x1F5E, N, N, 0, 1, 1),
    p(21, 0, 19, 0, 0x1AC2, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 19, 16, 0x3150, N, N, N, N, 0x0C62, 0, 1, 1),
    p(23, 0, 18, 0, 0x18FA, N, N, N, N, N, 0, 1, 1),
    p(23, 0, 18, 0, 0x1AFD, N, N, N, N, N, 0, 1, 1),
    p(23, 0, 18, 16, 0x0004, N, N, N, N, N, 0, 1, 1),
    p(23, 0, 18, 2, 0x0004, N, N, N, N, N, 0, 1, 1),
    p(27, 0, 15, 0, N, N, N, N, N, N, 4, 0, 5),
    p(27, 0, 15, 0, N, N, N, N, N, N, 4, 0, 14),
    p(27, 0, 1, 0, N, N, N, N, N, N, 12, 0, 4),
    p(27, 0, 4, 0, N, N, N, N, N, N, 12, 0, 4),
    p(13, 0, 19, 2, 0x1745, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 19, 16, 0x2A54, N, N, N, N, N, 0, 1, 1),
    p(16, 0, 19, 0, N, N, N, N, N, N, 0, 1, 1),
    p(17, 0, 19, 0, N, N, N, N, N, N, 0, 1, 1),
    p(14, 0, 19, 0, N, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 19, 16, 0x00AD, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 19, 16, 0x2394, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 19, 16, 0x4394, N, N, N, N, N, 0, 1, 1),
    p(24, 0, 18, 0, N, N, N, N, N, N, 8, 0, 4),
    p(25, 0, 16, 0, N, N, N, N, N, N, 8, 0, 4),
    p(27, 0, 2, 0, N, N, N, N, N, N, 12, 0, 4),
    p(27, 0, 6, 0, N, N, N, N, N, N, 12, 0, 4),
    p(27, 0, 8, 0, N, N, N, N, N, N, 12, 0, 4),
    p(27, 0, 3, 0, N, N, N, N, N, N, 12, 0, 4),
    p(27, 0, 7, 0, N, N, N, N, N, N, 12, 0, 4),
    p(18, 0, 11, 16, 0x21B8, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 11, 16, 0x41B8, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 19, 16, 0x25E9, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 19, 16, 0x45E9, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 19, 16, 0x2E88, N, N, N, N, N, 0, 1, 19),
    p(18, 0, 19, 16, 0x30F6, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 13, 0, N, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 19, 16, 0x2A36, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 19, 16, 0x2E92, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 19, 16, 0x2A22, N, N, N, N, N, 0, 1, 19),
    p(18, 0, 19, 16, 0x61B8, N, N, N, N, N, 0, 1, 1),
    p(0, 0, 0, 0, N, N, N, N, N, N, 4, 1, 4),
    p(27, 0, 20, 0, N, N, N, N, N, N, 12, 0, 4),
    p(27, 0, 21, 0, N, N, N, N, N, N, 12, 0, 4),
    p(27, 0, 22, 0, N, N, N, N, N, N, 12, 0, 4),
    p(27, 0, 23, 0, N, N, N, N, N, N, 12, 0, 4),
    p(11, 0, 9, 8, 0x00E2, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x00DD, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 8, 0x0172, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 8, 0x01DE, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 8, 0x00CE, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 8, 0x01BE, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 8, 0x017A, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 8, 0x00FA, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 10, 8, 0x1C34, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 10, 8, 0x1432, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 8, 0x034E, N, N, N, N, N, 0, 1, 1),
    p(14, 0, 19, 8, 0x001C, N, N, N, N, N, 1, 1, 1),
    p(15, 0, 19, 8, 0x0022, N, N, N, N, N, 1, 1, 1),
    p(4, 0, 1, 8, 0x0401, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 9, 0x00E2, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 9, 0x00BD, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 9, 0x00BE, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 9, 0x0122, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 9, 0x0172, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 9, 0x01DE, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 9, 0x00CE, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 9, 0x01BE, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 9, 0x017A, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 9, 0x00FA, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 10, 9, 0x1C34, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 10, 9, 0x1432, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 9, 0x034E, N, N, N, N, N, 0, 1, 1),
    p(14, 0, 19, 9, 0x001C, N, N, N, N, N, 1, 1, 1),
    p(15, 0, 19, 9, 0x0022, N, N, N, N, N, 1, 1, 1),
    p(4, 0, 1, 9, 0x0030, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x044E, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x0201, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x023B, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x144D, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x02EF, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x0144, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x0147, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x00AE, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x0401, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x00AC, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x0033, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x0386, N, N, N, N, N, 0, 1, 1),
    p(20, 0, 11, 16, 0x2C50, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 16, 0x448D, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 16, 0x43C7, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x0198, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 16, 0x2684, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 16, 0x41FF, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 16, 0x4262, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 16, 0x162F, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 16, 0x3186, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x019B, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x0215, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x02EF, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x14AC, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x019D, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x03E6, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0147, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x060E, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 16, 0x3338, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x01F4, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x026F, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x0353, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 8, 0x2B34, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 16, 0x4418, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 8, 0x2ECA, N, N, N, N, N, 0, 1, 19),
    p(1, 0, 1, 1, 0x02D8, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x0715, 0x05F2, N, 0x05F2, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x02A5, 0x0144, N, 0x0144, N, N, 0, 1, 1),
    p(1, 0, 1, 0, 0x12B6, 0x11C0, N, 0x11C0, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x0245, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x044E, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x0329, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x035B, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18A4, N, 0x18A4, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x024B, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0201, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 16, 0x08EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 16, 0x103C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 16, 0x08BE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 16, 0x0C4A, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x00DD, N, N, N, N, N, 0, 1, 19),
    p(22, 0, 19, 16, 0x435B, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x13BF, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x1780, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x1A4A, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x1A4F, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 1, 0x15F3, N, N, N, N, N, 1, 1, 1),
    p(1, 0, 1, 1, 0x01F1, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0031, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x00DD, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x03E9, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F5F, N, 0x1F5F, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x425F, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x4289, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x6180, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x4223, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x4505, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x423E, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x4526, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x42DA, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x424D, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x4340, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x4241, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x4367, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x4220, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x4517, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x4277, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x2180, N, N, N, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x019D, 0x1B4F, N, 0x1B4F, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x219D, 0x1997, N, 0x1997, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x419D, 0x1B9B, N, 0x1B9B, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x2D34, 0x19EA, N, 0x19EA, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x019C, 0x1BED, N, 0x1BED, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x219C, 0x1A32, N, 0x1A32, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x419C, 0x1C37, N, 0x1C37, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x619C, 0x1A79, N, 0x1A79, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x2DA0, 0x18C2, N, 0x18C2, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x031D, 0x1ABA, N, 0x1ABA, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x253E, 0x190B, N, 0x190B, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x453E, 0x1B09, N, 0x1B09, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x03E6, 0x194F, N, 0x194F, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x0198, 0x1B57, N, 0x1B57, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x01F1, 0x199C, N, 0x199C, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x024B, 0x17ED, N, 0x17ED, N, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x00DD, N, 0x1F60, N, 0x1F60, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x20DD, N, 0x1F61, N, 0x1F61, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x40DD, N, 0x1F62, N, 0x1F62, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x3094, N, 0x1F63, N, 0x1F63, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x00DC, N, 0x1F64, N, 0x1F64, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x20DC, N, 0x1F65, N, 0x1F65, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x40DC, N, 0x1F66, N, 0x1F66, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x60DC, N, 0x1F67, N, 0x1F67, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x30F4, N, 0x1F68, N, 0x1F68, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x023B, N, 0x1F69, N, 0x1F69, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x223B, N, 0x1F6A, N, 0x1F6A, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x423B, N, 0x1F6B, N, 0x1F6B, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x0147, N, 0x1F6C, N, 0x1F6C, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x0145, N, 0x1F6D, N, 0x1F6D, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x0031, N, 0x1F6E, N, 0x1F6E, N, 0, 1, 1),
    p(10, 0, 1, 16, 0x00AE, N, 0x1F6F, N, 0x1F6F, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16D6, N, 0x16D6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F70, N, 0x1F70, N, 0, 1, 1),
    p(11, 0, 19, 15, 0x464C, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0C81, 0, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0C84, 0, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0C87, 0, 1, 19),
    p(19, 0, 19, 0, 0x2912, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 0, 0x304C, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 0, 0x2972, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 0, 0x297E, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 0, 0x29E2, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 0, 0x2ADC, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 0, N, N, N, N, N, 0x0C8A, 0, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0C8D, 0, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0C90, 0, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0C93, 1, 1, 1),
    p(19, 0, 19, 0, 0x30C2, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0C96, 1, 1, 1),
    p(19, 0, 19, 0, 0x26A2, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0C99, 1, 1, 1),
    p(19, 0, 19, 0, 0x2950, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0C9C, 0, 1, 1),
    p(19, 0, 19, 0, 0x29E4, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0C9F, 0, 1, 1),
    p(19, 0, 19, 0, 0x3120, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 16, 0x20C4, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 16, 0x40C4, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 16, 0x2304, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 16, 0x4304, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CA2, 1, 1, 1),
    p(19, 0, 19, 0, 0x2EA0, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CA5, 1, 1, 1),
    p(19, 0, 19, 0, 0x30E2, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CA8, 1, 1, 1),
    p(19, 0, 19, 0, 0x2A5E, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CAB, 1, 1, 1),
    p(19, 0, 19, 0, 0x2C8A, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CAE, 0, 1, 1),
    p(19, 0, 19, 0, 0x321A, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CB1, 0, 1, 1),
    p(19, 0, 19, 0, 0x30E8, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CB4, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CB7, 1, 1, 1),
    p(19, 0, 19, 0, 0x2850, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 0, 0x29AE, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x28A4, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x2D7A, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x3132, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CBA, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CBD, 1, 1, 1),
    p(19, 0, 19, 0, 0x2A82, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x2DF8, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CC0, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CC3, 1, 1, 1),
    p(19, 0, 19, 0, 0x2FD6, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x334C, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CC6, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CC9, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CCC, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CCF, 1, 1, 1),
    p(19, 0, 19, 0, 0x3046, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x2B82, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CD2, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CD5, 1, 1, 1),
    p(19, 0, 19, 0, 0x2D86, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x313C, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CD8, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CDB, 1, 1, 1),
    p(19, 0, 19, 0, 0x2DEE, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x2978, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CDE, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CE1, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CE4, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CE7, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CEA, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CED, 1, 1, 1),
    p(19, 0, 19, 0, 0x27C6, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x3348, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x29E6, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x3042, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CF0, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CF3, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CF6, 1, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CF9, 1, 1, 1),
    p(19, 0, 19, 0, 0x2F24, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x31DE, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x2E08, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x2BD8, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x2AF4, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x2E78, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x3136, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 0, 0x27BE, N, N, N, N, N, 1, 1, 1),
    p(22, 0, 19, 0, N, N, N, N, N, N, 0, 2, 19),
    p(14, 0, 19, 0, 0x14A9, N, N, N, N, N, 1, 2, 1),
    p(15, 0, 19, 0, 0x16C7, N, N, N, N, N, 1, 2, 1),
    p(11, 0, 19, 7, 0x00BD, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x00BE, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x0122, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x0172, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x01DE, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x00CE, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x01BE, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x017A, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x00FA, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x20E1, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x2149, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x20BD, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x2121, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x2171, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x21DD, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x20CD, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x21BD, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x2179, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x20F9, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x2129, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x4478, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x45B3, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x4415, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x456B, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x44A2, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x4301, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x444B, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x42A7, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x41E7, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x60E0, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x6148, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x60BC, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x6120, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x6170, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x61DC, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x60CC, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x61BC, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x6178, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x60F8, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 19, 16, 0x6128, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x23A7, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x24DF, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x260B, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x2296, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x23C5, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x24C1, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x25F9, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x246D, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x2599, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x4550, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x43A6, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x44DE, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x460A, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x4295, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x43C4, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x44C0, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x45F8, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x446C, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x4598, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x4619, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x438B, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x44CF, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x45AA, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4268, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4568, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4217, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x42FE, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4442, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x457D, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x43E8, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4319, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4610, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x42D4, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4400, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4274, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x463A, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x44A8, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x45DD, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4454, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4385, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x44C6, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4322, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4472, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x455F, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4211, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4508, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x035C, 0x1C05, N, 0x1C05, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0245, 0x1A45, N, 0x1A45, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0198, 0x1C59, N, 0x1C59, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x01F1, 0x1A8D, N, 0x1A8D, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0329, 0x18DD, N, 0x18DD, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x035B, 0x1AD5, N, 0x1AD5, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x03BB, 0x1921, N, 0x1921, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0215, 0x1B1F, N, 0x1B1F, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x019D, 0x1967, N, 0x1967, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x043D, 0x1B71, N, 0x1B71, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x02A5, 0x19B6, N, 0x19B6, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x03E6, 0x1807, N, 0x1807, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x024B, 0x1A08, N, 0x1A08, N, N, 0, 1, 19),
    p(22, 0, 1, 7, 0x060E, 0x1853, N, 0x1853, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x02D2, 0x1A4C, N, 0x1A4C, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x01F4, 0x1897, N, 0x1897, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x026F, 0x1A91, N, 0x1A91, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0353, 0x18E3, N, 0x18E3, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x03D4, 0x1728, N, 0x1728, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0418, 0x1928, N, 0x1928, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0452, 0x1775, N, 0x1775, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x019C, 0x196F, N, 0x196F, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x01EB, 0x17BF, N, 0x17BF, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x031D, 0x19C2, N, 0x19C2, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0614, 0x1811, N, 0x1811, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x02D8, 0x1656, N, 0x1656, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0030, N, 0x1F71, N, 0x1F71, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x04D0, N, 0x1F72, N, 0x1F72, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0145, N, 0x1F73, N, 0x1F73, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0031, N, 0x1F74, N, 0x1F74, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x044E, N, 0x1F75, N, 0x1F75, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0218, N, 0x1F76, N, 0x1F76, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x019B, N, 0x1F77, N, 0x1F77, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x02EF, N, 0x1F78, N, 0x1F78, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x00DD, N, 0x1F79, N, 0x1F79, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x03E9, N, 0x1F7A, N, 0x1F7A, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0144, N, 0x1F7B, N, 0x1F7B, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0147, N, 0x1F7C, N, 0x1F7C, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x00AE, N, 0x1F7D, N, 0x1F7D, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0401, N, 0x1F7E, N, 0x1F7E, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0201, N, 0x1F7F, N, 0x1F7F, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x00AC, N, 0x1F80, N, 0x1F80, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x04A9, N, 0x1F81, N, 0x1F81, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x002F, N, 0x1F82, N, 0x1F82, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0033, N, 0x1F83, N, 0x1F83, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0386, N, 0x1F84, N, 0x1F84, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0264, N, 0x1F85, N, 0x1F85, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x00DC, N, 0x1F86, N, 0x1F86, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0473, N, 0x1F87, N, 0x1F87, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x023B, N, 0x1F88, N, 0x1F88, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0212, N, 0x1F89, N, 0x1F89, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0381, N, 0x1F8A, N, 0x1F8A, N, 0, 1, 1),
    p(11, 0, 19, 7, 0x00E2, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, N, 0, 1, 19),
    p(19, 0, 19, 0, N, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 0, N, N, N, N, N, N, 0, 1, 19),
    p(19, 0, 19, 16, 0x60C4, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 16, 0x434C, N, N, N, N, N, 1, 1, 1),
    p(19, 0, 19, 16, 0x2649, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 16, 0x4649, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 0, 0x269C, N, N, N, N, N, 3, 1, 1),
    p(19, 0, 19, 0, N, N, N, N, N, 0x0CFC, 0, 1, 1),
    p(22, 0, 19, 0, N, N, N, N, N, N, 1, 1, 1),
    p(1, 0, 1, 0, N, 0x1603, N, 0x1603, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1440, N, 0x1440, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1651, N, 0x1651, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x148D, N, 0x148D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16A7, N, 0x16A7, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14D0, N, 0x14D0, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C15, N, 0x1C15, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1528, N, 0x1528, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C6D, N, 0x1C6D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1576, N, 0x1576, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13AB, N, 0x13AB, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15C3, N, 0x15C3, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13FB, N, 0x13FB, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B33, N, 0x1B33, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1446, N, 0x1446, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B85, N, 0x1B85, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1495, N, 0x1495, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BD4, N, 0x1BD4, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14DA, N, 0x14DA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C22, N, 0x1C22, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A5E, N, 0x1A5E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C75, N, 0x1C75, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AA3, N, 0x1AA3, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13B6, N, 0x13B6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AF5, N, 0x1AF5, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1938, N, 0x1938, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B3E, N, 0x1B3E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1985, N, 0x1985, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B8D, N, 0x1B8D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19D5, N, 0x19D5, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BDC, N, 0x1BDC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A20, N, 0x1A20, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1866, N, 0x1866, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A67, N, 0x1A67, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18B1, N, 0x18B1, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AAC, N, 0x1AAC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18FF, N, 0x18FF, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AFE, N, 0x1AFE, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1941, N, 0x1941, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1791, N, 0x1791, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x198B, N, 0x198B, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17D9, N, 0x17D9, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19DF, N, 0x19DF, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x182E, N, 0x182E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A28, N, 0x1A28, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x186D, N, 0x186D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16C6, N, 0x16C6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F8B, N, 0x1F8B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F8C, N, 0x1F8C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F8D, N, 0x1F8D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F8E, N, 0x1F8E, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F8F, N, 0x1F8F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F90, N, 0x1F90, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F91, N, 0x1F91, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F92, N, 0x1F92, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F93, N, 0x1F93, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F94, N, 0x1F94, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F95, N, 0x1F95, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F96, N, 0x1F96, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F97, N, 0x1F97, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F98, N, 0x1F98, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F99, N, 0x1F99, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F9A, N, 0x1F9A, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F9B, N, 0x1F9B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F9C, N, 0x1F9C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F9D, N, 0x1F9D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F9E, N, 0x1F9E, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1F9F, N, 0x1F9F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FA0, N, 0x1FA0, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FA1, N, 0x1FA1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FA2, N, 0x1FA2, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FA3, N, 0x1FA3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FA4, N, 0x1FA4, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FA5, N, 0x1FA5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FA6, N, 0x1FA6, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FA7, N, 0x1FA7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FA8, N, 0x1FA8, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FA9, N, 0x1FA9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FAA, N, 0x1FAA, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FAB, N, 0x1FAB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FAC, N, 0x1FAC, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FAD, N, 0x1FAD, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FAE, N, 0x1FAE, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FAF, N, 0x1FAF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FB0, N, 0x1FB0, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FB1, N, 0x1FB1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FB2, N, 0x1FB2, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FB3, N, 0x1FB3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FB4, N, 0x1FB4, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FB5, N, 0x1FB5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FB6, N, 0x1FB6, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FB7, N, 0x1FB7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FB8, N, 0x1FB8, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FB9, N, 0x1FB9, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1907, N, 0x1907, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FBA, N, 0x1FBA, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x186A, N, 0x186A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1557, N, 0x1557, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x174E, N, 0x174E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FBB, N, 0x1FBB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FBC, N, 0x1FBC, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1836, N, 0x1836, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FBD, N, 0x1FBD, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14AB, N, 0x14AB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FBE, N, 0x1FBE, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1504, N, 0x1504, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FBF, N, 0x1FBF, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C1F, N, 0x1C1F, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1947, N, 0x1947, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14D4, N, 0x14D4, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x152D, N, 0x152D, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1423, N, 0x1423, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FC0, N, 0x1FC0, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BA6, N, 0x1BA6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FC1, N, 0x1FC1, N, 0, 1, 1),
    p(4, 0, 1, 9, 0x03E9, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x019C, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x180A, N, 0x180A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x164C, N, 0x164C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B66, N, 0x1B66, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FC2, N, 0x1FC2, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BAB, N, 0x1BAB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FC3, N, 0x1FC3, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BFE, N, 0x1BFE, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FC4, N, 0x1FC4, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C50, N, 0x1C50, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FC5, N, 0x1FC5, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x138C, N, 0x138C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FC6, N, 0x1FC6, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x191C, N, 0x191C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FC7, N, 0x1FC7, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1964, N, 0x1964, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FC8, N, 0x1FC8, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19AF, N, 0x19AF, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FC9, N, 0x1FC9, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19FF, N, 0x19FF, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FCA, N, 0x1FCA, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A46, N, 0x1A46, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FCB, N, 0x1FCB, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A8E, N, 0x1A8E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FCC, N, 0x1FCC, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1722, N, 0x1722, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FCD, N, 0x1FCD, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x176B, N, 0x176B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FCE, N, 0x1FCE, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17BB, N, 0x17BB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FCF, N, 0x1FCF, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1808, N, 0x1808, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FD0, N, 0x1FD0, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1854, N, 0x1854, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FD1, N, 0x1FD1, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1898, N, 0x1898, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FD2, N, 0x1FD2, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1526, N, 0x1526, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FD3, N, 0x1FD3, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x156C, N, 0x156C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FD4, N, 0x1FD4, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15BD, N, 0x15BD, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FD5, N, 0x1FD5, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1609, N, 0x1609, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FD6, N, 0x1FD6, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1657, N, 0x1657, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FD7, N, 0x1FD7, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16AA, N, 0x16AA, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FD8, N, 0x1FD8, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16F3, N, 0x16F3, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FD9, N, 0x1FD9, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C72, N, 0x1C72, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FDA, N, 0x1FDA, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13AE, N, 0x13AE, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FDB, N, 0x1FDB, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13FF, N, 0x13FF, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FDC, N, 0x1FDC, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x144A, N, 0x144A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FDD, N, 0x1FDD, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1498, N, 0x1498, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FDE, N, 0x1FDE, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14DE, N, 0x14DE, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FDF, N, 0x1FDF, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A60, N, 0x1A60, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FE0, N, 0x1FE0, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AA5, N, 0x1AA5, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FE1, N, 0x1FE1, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AF8, N, 0x1AF8, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FE2, N, 0x1FE2, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B41, N, 0x1B41, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FE3, N, 0x1FE3, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B92, N, 0x1B92, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FE4, N, 0x1FE4, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BE0, N, 0x1BE0, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FE5, N, 0x1FE5, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C2F, N, 0x1C2F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FE6, N, 0x1FE6, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18B6, N, 0x18B6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FE7, N, 0x1FE7, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1902, N, 0x1902, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FE8, N, 0x1FE8, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1945, N, 0x1945, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FE9, N, 0x1FE9, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x198E, N, 0x198E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FEA, N, 0x1FEA, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19E2, N, 0x19E2, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FEB, N, 0x1FEB, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A2E, N, 0x1A2E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FEC, N, 0x1FEC, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16C8, N, 0x16C8, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FED, N, 0x1FED, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1709, N, 0x1709, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FEE, N, 0x1FEE, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x174C, N, 0x174C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FEF, N, 0x1FEF, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x179C, N, 0x179C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FF0, N, 0x1FF0, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17E7, N, 0x17E7, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FF1, N, 0x1FF1, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1838, N, 0x1838, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FF2, N, 0x1FF2, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14AE, N, 0x14AE, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FF3, N, 0x1FF3, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1427, N, 0x1427, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FF4, N, 0x1FF4, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x146F, N, 0x146F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FF5, N, 0x1FF5, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C4B, N, 0x1C4B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FF6, N, 0x1FF6, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FF7, N, 0x1FF7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FF8, N, 0x1FF8, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FF9, N, 0x1FF9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FFA, N, 0x1FFA, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FFB, N, 0x1FFB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FFC, N, 0x1FFC, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FFD, N, 0x1FFD, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FFE, N, 0x1FFE, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1FFF, N, 0x1FFF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2000, N, 0x2000, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2001, N, 0x2001, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2002, N, 0x2002, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2003, N, 0x2003, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2004, N, 0x2004, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2005, N, 0x2005, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2006, N, 0x2006, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2007, N, 0x2007, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2008, N, 0x2008, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2009, N, 0x2009, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x200A, N, 0x200A, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x200B, N, 0x200B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x200C, N, 0x200C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x200D, N, 0x200D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x200E, N, 0x200E, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x200F, N, 0x200F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2010, N, 0x2010, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2011, N, 0x2011, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2012, N, 0x2012, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2013, N, 0x2013, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2014, N, 0x2014, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2015, N, 0x2015, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2016, N, 0x2016, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2017, N, 0x2017, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2018, N, 0x2018, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2019, N, 0x2019, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x201A, N, 0x201A, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x201B, N, 0x201B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x201C, N, 0x201C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x201D, N, 0x201D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x201E, N, 0x201E, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1753, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 0, N, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1689, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1A70, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x0530, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x13D9, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1B14, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1A87, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x16EE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1B01, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x01FD, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x159A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1ACF, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x158B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x18CF, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x0359, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1768, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1BCD, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x193A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1916, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x16A0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x164D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1900, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x157E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1B03, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x19E6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x16DA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x0320, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x19BE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1610, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1410, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x15A6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x19B8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1819, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x150A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x05BD, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x19CF, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x13CC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x14FA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x19EE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x0C82, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x166E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1748, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1C07, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1A05, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x17C6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x14E4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1996, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1B72, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1A0A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1BC7, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1979, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1B3A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x178D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x18B0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x162A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x14FD, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1832, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x15E2, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x15E6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1C4A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x144F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1A27, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x190A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1C79, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1B38, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1BFA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x195F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x17C8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x16B1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1C5E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1ADE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1AE8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1864, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x19F4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x01F8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x16EC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x01EE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x0413, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1A17, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x19FA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x17B9, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1A2B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1638, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1AC9, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x19FC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1B8A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1A63, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x03F5, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x03A4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x18C7, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x16DF, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x15A8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1642, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x175F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1B78, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1BC4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1849, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1BF9, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1AC5, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x199A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1752, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x189D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x17C5, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1731, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x149D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x17C0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x16F4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1C66, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1B7D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1ABD, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1B5E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1A55, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1B83, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1AA1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1B40, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x185A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1734, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1450, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x155B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1B9F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1C62, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x13B1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1AAD, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x16B9, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x14FC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1566, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x14F6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1521, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x14CF, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1AEB, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1676, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x13F8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1578, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x18A2, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x03F2, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x02AE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1BE6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1A76, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1712, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x17A5, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x13C3, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x145A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x153D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x155A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x177B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1AE6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x18F0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x16C2, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1C54, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1892, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x174F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1BB8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x188B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x151D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x156B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x166D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1B60, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1942, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1747, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x156E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x165D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1A74, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1619, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1C88, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1B52, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x16C1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1801, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1896, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x15BB, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x0548, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x15BF, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x152E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1631, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1A8B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x13E9, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x16B7, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1817, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1453, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x14E9, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1413, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1660, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x13D1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x19ED, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1844, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x13A5, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1C3E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x13D6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1C1C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1A9F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x17D6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x194A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1A47, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x196A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x19EC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x17A4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x163C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x13E3, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x19C0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1704, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1C01, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x19B4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1405, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x18BB, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x19E9, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x179F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x146B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1809, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1899, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x157C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x144C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1454, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x17E9, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1842, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x15A3, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1662, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1BE8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0x1C84, N, N, N, N, N, 0, 2, 1),
    p(23, 0, 18, 11, 0x0004, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 0, N, N, N, N, N, N, 0, 2, 1),
    p(4, 0, 1, 0, N, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, N, 0, 2, 1),
    p(10, 0, 1, 0, N, N, N, N, N, N, 0, 2, 1),
    p(14, 0, 19, 0, N, N, N, N, N, N, 1, 2, 1),
    p(15, 0, 19, 0, N, N, N, N, N, N, 1, 2, 1),
    p(13, 0, 19, 0, N, N, N, N, N, N, 0, 2, 1),
    p(14, 0, 19, 0, N, N, N, N, N, N, 0, 2, 1),
    p(15, 0, 19, 0, N, N, N, N, N, N, 0, 2, 1),
    p(6, 218, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(7, 224, 1, 0, N, N, N, N, N, N, 0, 2, 5),
    p(13, 0, 19, 0, N, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 19, 16, 0x1634, N, N, N, N, N, 0, 2, 1),
    p(10, 0, 1, 16, 0x0320, N, N, N, N, N, 0, 2, 1),
    p(10, 0, 1, 16, 0x14BD, N, N, N, N, N, 0, 2, 1),
    p(10, 0, 1, 16, 0x1C03, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 0, N, N, N, N, N, N, 0, 2, 19),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0CFF, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D02, 0, 2, 1),
    p(5, 0, 1, 0, 0x2F74, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D05, 0, 2, 1),
    p(5, 0, 1, 0, 0x2E58, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D08, 0, 2, 1),
    p(5, 0, 1, 0, 0x2FFA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D0B, 0, 2, 1),
    p(5, 0, 1, 0, 0x2ED8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D0E, 0, 2, 1),
    p(5, 0, 1, 0, 0x2810, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D11, 0, 2, 1),
    p(5, 0, 1, 0, 0x2700, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D14, 0, 2, 1),
    p(5, 0, 1, 0, 0x2D30, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D17, 0, 2, 1),
    p(5, 0, 1, 0, 0x2C3E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D1A, 0, 2, 1),
    p(5, 0, 1, 0, 0x2D9C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D1D, 0, 2, 1),
    p(5, 0, 1, 0, 0x2CAA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D20, 0, 2, 1),
    p(5, 0, 1, 0, 0x32F8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D23, 0, 2, 1),
    p(5, 0, 1, 0, 0x3208, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D26, 0, 2, 1),
    p(5, 0, 1, 0, 0x2EC8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D29, 0, 2, 1),
    p(5, 0, 1, 0, 0x2DA2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D2C, 0, 2, 1),
    p(5, 0, 1, 0, 0x26F8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D2F, 0, 2, 1),
    p(5, 0, 1, 0, 0x2EDC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x2C48, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D33, 0, 2, 1),
    p(5, 0, 1, 0, 0x2B9A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x292C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D37, 0, 2, 1),
    p(5, 0, 1, 0, 0x287E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x2B66, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D3B, 0, 2, 1),
    p(5, 0, 1, 0, 0x2A40, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x27A0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D3F, 0, 2, 1),
    p(5, 0, 1, 0, 0x2CAE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x2A4A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x2686, N, N, N, N, N, 0, 2, 1),
    p(6, 8, 14, 0, N, N, N, N, N, 0x8042, 0, 0, 5),
    p(6, 8, 14, 0, N, N, N, N, N, 0x8043, 0, 0, 5),
    p(21, 0, 19, 16, 0x31B6, N, N, N, N, N, 0, 2, 1),
    p(21, 0, 19, 16, 0x2F2A, N, N, N, N, N, 0, 2, 1),
    p(4, 0, 1, 0, N, N, N, N, N, 0x0D43, 0, 2, 1),
    p(4, 0, 1, 0, 0x2D04, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 10, 0x332A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D46, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D49, 0, 2, 1),
    p(5, 0, 1, 0, 0x3154, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D4C, 0, 2, 1),
    p(5, 0, 1, 0, 0x3072, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D4F, 0, 2, 1),
    p(5, 0, 1, 0, 0x2998, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D52, 0, 2, 1),
    p(5, 0, 1, 0, 0x288C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D55, 0, 2, 1),
    p(5, 0, 1, 0, 0x2ECE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D58, 0, 2, 1),
    p(5, 0, 1, 0, 0x2900, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D5B, 0, 2, 1),
    p(5, 0, 1, 0, 0x2F30, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D5E, 0, 2, 1),
    p(5, 0, 1, 0, 0x2E1A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D61, 0, 2, 1),
    p(5, 0, 1, 0, 0x2768, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D64, 0, 2, 1),
    p(5, 0, 1, 0, 0x3370, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D67, 0, 2, 1),
    p(5, 0, 1, 0, 0x2CA6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D6A, 0, 2, 1),
    p(5, 0, 1, 0, 0x26CC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D6D, 0, 2, 1),
    p(5, 0, 1, 0, 0x2884, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D70, 0, 2, 1),
    p(5, 0, 1, 0, 0x2774, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D73, 0, 2, 1),
    p(5, 0, 1, 0, 0x28F6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D76, 0, 2, 1),
    p(5, 0, 1, 0, 0x30DC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x2690, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D7A, 0, 2, 1),
    p(5, 0, 1, 0, 0x3276, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x283E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D7E, 0, 2, 1),
    p(5, 0, 1, 0, 0x2F3A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x3238, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D82, 0, 2, 1),
    p(5, 0, 1, 0, 0x3182, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x2EF4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D86, 0, 2, 1),
    p(5, 0, 1, 0, 0x2E8E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x319C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D8A, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D8D, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D90, 0, 2, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D93, 0, 2, 1),
    p(5, 0, 1, 0, 0x2878, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x2A02, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x2D72, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x28B2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x2C34, N, N, N, N, N, 0, 2, 1),
    p(4, 0, 1, 0, N, N, N, N, N, 0x0D96, 0, 2, 1),
    p(4, 0, 1, 0, 0x26D4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 10, 0x32C0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x004C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x153C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1644, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x013D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1696, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x14C3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x0105, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x13CB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x0091, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x171D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x155F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1762, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x15B0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x13EE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x15FA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x187C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x00D1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x01A5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x145D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x17A6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x0119, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x14A4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x001D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x001F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1C38, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x0049, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x00A1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x0189, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x00C1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x002C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x004A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1930, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1783, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1980, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x0020, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x161B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1820, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1666, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x001E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x16BB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x18AD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x16FD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x153A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x002D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1587, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1788, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x15D6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x17D2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1625, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x008F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x166C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x18EF, N, N, N, N, N, 4, 2, 1),
    p(5, 0, 1, 16, 0x1B58, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x199D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1A10, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1C12, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x13A8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x192C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x181B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x18A9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x18F2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x18C6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1983, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x19D3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1AC1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1910, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1957, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x19A2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x17F3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1884, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x18CE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1913, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1758, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x15A7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x17AD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x15F0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x147D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1519, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1BB9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1ADC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x19C4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x14F7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1706, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1975, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1B7F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x19CB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1BEF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x14FE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1377, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1BF7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1A38, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1A80, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x1848, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 16, 0x16E1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 0, N, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 8, 0x0530, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 8, 0x01FD, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 8, 0x02CC, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 8, 0x02EA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 8, 0x1AAB, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 8, 0x1687, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 8, 0x18FE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 8, 0x14E3, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 8, 0x16EE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 8, 0x1746, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 8, 0x1B3D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 8, 0x1914, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 8, 0x1B98, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 8, 0x1ACF, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x45D1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4379, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x465B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4607, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x42CE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4208, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4634, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x43CA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x422F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x44BA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x459E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4256, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4559, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x420E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x6138, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x613C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x6104, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x6090, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x60D0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x61A4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x6118, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x61C0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x61C8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x60E8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x60A0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x6188, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x60C0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x60FC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x6110, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0xC01C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 16, 0xA029, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 16, 0x452F, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 16, 0x42BC, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 16, 0x464F, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 16, 0x42E9, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 16, 0x44B4, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 16, 0x430A, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 16, 0x43FD, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 16, 0x4358, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 16, 0x44F3, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 16, 0x431F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x41ED, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x43A3, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x43F4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4412, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4547, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x45BC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x44E1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x445A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4325, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4436, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4496, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4625, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4307, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x437C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4271, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x44F6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4556, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x43DC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x43AF, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x44F9, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x450E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4535, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4493, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x45F5, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x43F1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x42AD, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1667, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1677, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1C5E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1AF2, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 14, 0x4427, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x230D, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2466, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2544, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x21F9, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x23A0, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x221A, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x25D4, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2445, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2580, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x22E0, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2225, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2E8A, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x3196, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2F06, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x320C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x004C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x013D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0105, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0091, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x00D1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x01A5, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0119, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x001D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x001F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0049, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x00A1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0189, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x00C1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x002C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x2139, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x213D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x2105, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x2091, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x20D1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x21A5, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x2119, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x21C1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x21C9, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x2049, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x20A1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x2189, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x20C1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x20FD, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 7, 0x8049, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 7, 0x608C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 7, 0x3282, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 7, 0x0530, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 7, 0x01FD, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 7, 0x02CC, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 7, 0x02EA, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 7, 0x04B5, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 7, 0x030B, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 7, 0x03FE, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 7, 0x0359, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 7, 0x04F4, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 1, 7, 0x0320, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x01EE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x03A4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x03F5, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0413, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0548, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x05BD, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x01F8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x00B0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0326, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x00B3, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0497, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0626, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0308, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x037D, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 7, 0x0272, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1998, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 7, 0x13C1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x166E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1C0F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1BD2, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1531, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1859, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x18CD, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x05F6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1A5A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0C83, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1AAB, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1687, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x18FE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1B84, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x16BA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1555, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x160C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x03DD, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x03B0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x04FA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x050F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0536, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1911, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2F82, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x3274, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x3010, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2D42, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x29A6, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2C74, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2A10, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2CD4, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2A76, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x27E8, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2AD6, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2846, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2B42, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x28C4, N, N, N, N, N, 0, 2, 1),
    p(11, 0, 19, 7, 0x2D0E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x2434, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x2377, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x2F60, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x2AC0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x2E46, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x29C2, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x2786, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x3022, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x2678, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x45CE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4433, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4376, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 14, 0x32D4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 14, 0x444E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 14, 0x26B6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 14, 0x44B7, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x005E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0065, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x03C1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0044, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x02B6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0088, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0023, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0046, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x02BF, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0355, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x007B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x003C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0045, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0073, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x07C3, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0069, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x007D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x03BA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0774, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0027, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0357, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0161, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x13FC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x00AB, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0229, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0570, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0645, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x006C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0067, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0238, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x003A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x004E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0041, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0025, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x18B2, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0481, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x03B2, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x198D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0040, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x004F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0028, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0035, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0024, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0078, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0D72, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x08B2, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x0C34, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2672, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x616C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x61D0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x60D8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4232, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x6160, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x42E6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x43C1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x8044, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x6150, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x42B6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x45BF, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x44E7, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x6134, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x6088, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x429B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x439D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2A06, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4583, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x61CC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x60F4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2023, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x8053, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0xA023, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x8076, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x403F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x803F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x8062, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x60A8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x42BF, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4355, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4457, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x61D4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x807B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x61AC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x45CB, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4073, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4259, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x267C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2F16, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2042, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2CFE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4229, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x461F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x8071, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x44CC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x60D4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x805D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x446F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x333A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x26A8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x806C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x60B4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x8058, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x44AB, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x8067, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x27C2, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4643, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x43B8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x463D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4586, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x441E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x61D8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x427A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x28B0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x462B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4637, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4238, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x6140, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x427D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x456E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x43DF, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x803A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x6124, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x204E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x804E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2164, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x6164, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x6025, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4481, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x45E3, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x43B2, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x61A8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2B6E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x43FA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x614C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2B4E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x8035, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4078, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x24B2, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x2227, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x234A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x24A0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x21FA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x2449, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x2539, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x21E5, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x22ED, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x241C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x45B0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4226, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4349, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x449F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4595, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4448, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4538, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x41E4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x42EC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x441B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x44B1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x430D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4466, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4544, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x41F9, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x42EF, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2B3E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x3264, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x44ED, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2B62, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x29A8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 14, 0x235E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 14, 0x445D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 14, 0x435E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 14, 0x2FF6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x27E0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x289C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2C82, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2898, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x60B0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x32BC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x26A4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x27A6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x28DC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x29DE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x32F4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x274E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2D98, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4145, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x6144, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x311E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x3218, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x3306, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2C5A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2D7E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x219A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2380, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x437F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4562, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x43BB, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4523, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2F40, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x3098, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2F70, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x317A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2E94, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x273A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2826, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2334, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x228C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x24C3, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4403, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x436D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x236E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4592, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4334, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x428C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x228D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x44C3, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x41B0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x61B0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x21F4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x41F3, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x45C8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x43EB, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x402F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x802F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0xA02F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2782, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2890, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2990, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2ABA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2F00, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x3026, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2B70, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2CB0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x332E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x3326, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2C6C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2D60, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2E68, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2FB8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x30CE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x30C8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2718, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2714, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x61C4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x28CA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x281A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x32A4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x6198, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4514, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x3252, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2DC4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x30AE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2918, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x271A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x3230, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x329A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2940, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x32EA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x28C8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x4313, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x3286, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2F4E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x420B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x45FB, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2A56, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x60AC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x458C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x26EA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x3340, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2DBE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x273E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 14, 0x42B9, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 14, 0x4439, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x22B4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x21F7, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x2332, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x226C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x22DE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x221B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x2512, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x2362, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x24AF, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4460, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x42B3, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x41F6, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4331, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4616, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x42DD, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x43B5, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4511, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4361, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x44AE, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x452C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x438E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x44D2, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x45AD, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x426B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x43A0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x421A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x45D4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4445, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4580, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x42E0, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4406, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 14, 0x459B, N, N, N, N, N, 0, 2, 1),
    p(1, 0, 1, 0, N, 0x15FD, N, 0x15FD, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x201F, N, 0x201F, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1649, N, 0x1649, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2020, N, 0x2020, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16A1, N, 0x16A1, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2021, N, 0x2021, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16ED, N, 0x16ED, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2022, N, 0x2022, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1725, N, 0x1725, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2023, N, 0x2023, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1771, N, 0x1771, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x1E89, N, 0x1E89, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13F4, N, 0x13F4, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2024, N, 0x2024, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1441, N, 0x1441, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2025, N, 0x2025, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x148E, N, 0x148E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2026, N, 0x2026, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14D1, N, 0x14D1, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2027, N, 0x2027, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1529, N, 0x1529, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2028, N, 0x2028, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1577, N, 0x1577, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2029, N, 0x2029, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15C5, N, 0x15C5, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x202A, N, 0x202A, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B34, N, 0x1B34, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x202B, N, 0x202B, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B86, N, 0x1B86, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x202C, N, 0x202C, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BD5, N, 0x1BD5, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x202D, N, 0x202D, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C24, N, 0x1C24, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x202E, N, 0x202E, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C76, N, 0x1C76, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x202F, N, 0x202F, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13B7, N, 0x13B7, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2030, N, 0x2030, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1939, N, 0x1939, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2031, N, 0x2031, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1986, N, 0x1986, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2032, N, 0x2032, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19D6, N, 0x19D6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2033, N, 0x2033, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A21, N, 0x1A21, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2034, N, 0x2034, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1592, N, 0x1592, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2035, N, 0x2035, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15DE, N, 0x15DE, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2036, N, 0x2036, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1630, N, 0x1630, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2037, N, 0x2037, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1681, N, 0x1681, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2038, N, 0x2038, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16CD, N, 0x16CD, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2039, N, 0x2039, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x170D, N, 0x170D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x203A, N, 0x203A, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x137F, N, 0x137F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x203B, N, 0x203B, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13DA, N, 0x13DA, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x203C, N, 0x203C, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1424, N, 0x1424, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x203D, N, 0x203D, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x146C, N, 0x146C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x203E, N, 0x203E, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14B1, N, 0x14B1, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x203F, N, 0x203F, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x150C, N, 0x150C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2040, N, 0x2040, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1550, N, 0x1550, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2041, N, 0x2041, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AC6, N, 0x1AC6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2042, N, 0x2042, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1461, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x19EB, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B1C, N, 0x1B1C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2043, N, 0x2043, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B6F, N, 0x1B6F, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2044, N, 0x2044, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1802, N, 0x1802, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2045, N, 0x2045, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1852, N, 0x1852, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2046, N, 0x2046, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1895, N, 0x1895, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2047, N, 0x2047, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18E2, N, 0x18E2, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2048, N, 0x2048, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1926, N, 0x1926, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2049, N, 0x2049, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19BD, N, 0x19BD, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x204A, N, 0x204A, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1652, N, 0x1652, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x204B, N, 0x204B, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16A8, N, 0x16A8, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x204C, N, 0x204C, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16F2, N, 0x16F2, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x204D, N, 0x204D, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x172D, N, 0x172D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x204E, N, 0x204E, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x177A, N, 0x177A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x204F, N, 0x204F, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17C4, N, 0x17C4, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2050, N, 0x2050, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1447, N, 0x1447, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2051, N, 0x2051, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1496, N, 0x1496, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2052, N, 0x2052, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14DB, N, 0x14DB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2053, N, 0x2053, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1530, N, 0x1530, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2054, N, 0x2054, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1582, N, 0x1582, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2055, N, 0x2055, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15CD, N, 0x15CD, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2056, N, 0x2056, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1616, N, 0x1616, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2057, N, 0x2057, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B8E, N, 0x1B8E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2058, N, 0x2058, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BDD, N, 0x1BDD, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2059, N, 0x2059, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C2A, N, 0x1C2A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x205A, N, 0x205A, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C82, N, 0x1C82, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x205B, N, 0x205B, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13C0, N, 0x13C0, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x205C, N, 0x205C, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x140E, N, 0x140E, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x205D, N, 0x205D, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x198C, N, 0x198C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x205E, N, 0x205E, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19E0, N, 0x19E0, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x205F, N, 0x205F, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A29, N, 0x1A29, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2060, N, 0x2060, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A71, N, 0x1A71, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2061, N, 0x2061, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AB6, N, 0x1AB6, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2062, N, 0x2062, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B07, N, 0x1B07, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2063, N, 0x2063, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x179A, N, 0x179A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2064, N, 0x2064, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x17E5, N, 0x17E5, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2065, N, 0x2065, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1837, N, 0x1837, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2066, N, 0x2066, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1874, N, 0x1874, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2067, N, 0x2067, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x18C0, N, 0x18C0, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2068, N, 0x2068, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x18C0, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x187B, N, 0x187B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2069, N, 0x2069, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x150B, N, 0x150B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x206A, N, 0x206A, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14BB, N, 0x14BB, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1754, N, 0x1754, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x206B, N, 0x206B, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13DD, N, 0x13DD, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x206C, N, 0x206C, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x142A, N, 0x142A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x206D, N, 0x206D, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1475, N, 0x1475, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x206E, N, 0x206E, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x14B9, N, 0x14B9, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x206F, N, 0x206F, N, 0, 1, 1),
    p(21, 0, 1, 0, N, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x138D, N, 0x138D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2070, N, 0x2070, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B43, N, 0x1B43, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B6B, N, 0x1B6B, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2071, N, 0x2071, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BB2, N, 0x1BB2, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2072, N, 0x2072, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2073, N, 0x2073, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1C5A, N, 0x1C5A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2074, N, 0x2074, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1398, N, 0x1398, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2075, N, 0x2075, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1922, N, 0x1922, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2076, N, 0x2076, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1968, N, 0x1968, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2077, N, 0x2077, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19B7, N, 0x19B7, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2078, N, 0x2078, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A09, N, 0x1A09, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2079, N, 0x2079, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A4D, N, 0x1A4D, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x207A, N, 0x207A, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A92, N, 0x1A92, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x207B, N, 0x207B, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1ADB, N, 0x1ADB, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x207C, N, 0x207C, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1776, N, 0x1776, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x207D, N, 0x207D, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1988, N, 0x1988, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BD8, N, 0x1BD8, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1AA7, N, 0x1AA7, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A6C, N, 0x1A6C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A23, N, 0x1A23, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BAF, N, 0x1BAF, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1509, N, 0x1509, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x19AC, N, 0x19AC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1572, N, 0x1572, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x157A, N, 0x157A, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x207E, N, 0x207E, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x15C7, N, 0x15C7, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x207F, N, 0x207F, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1611, N, 0x1611, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2080, N, 0x2080, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x165C, N, 0x165C, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2081, N, 0x2081, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16AE, N, 0x16AE, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2082, N, 0x2082, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x16F8, N, 0x16F8, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2083, N, 0x2083, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x13BA, N, 0x13BA, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2084, N, 0x2084, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1A00, N, 0x1A00, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1636, N, 0x1636, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B22, N, 0x1B22, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1B93, N, 0x1B93, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2085, N, 0x2085, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1BE1, N, 0x1BE1, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2086, N, 0x2086, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1714, N, 0x1714, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2087, N, 0x2087, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1BA1, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x151F, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2088, N, 0x2088, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x1802, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x138F, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x186A, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x172A, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 8, 0x15E8, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x152C, 0x152C, N, 0x152C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x172F, 0x172F, N, 0x172F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x157B, 0x157B, N, 0x157B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x13AF, 0x13AF, N, 0x13AF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x15C8, 0x15C8, N, 0x15C8, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1400, 0x1400, N, 0x1400, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1612, 0x1612, N, 0x1612, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x144B, 0x144B, N, 0x144B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1B89, 0x1B89, N, 0x1B89, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1499, 0x1499, N, 0x1499, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1BD7, 0x1BD7, N, 0x1BD7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x14DF, 0x14DF, N, 0x14DF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1C27, 0x1C27, N, 0x1C27, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1532, 0x1532, N, 0x1532, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1C7B, 0x1C7B, N, 0x1C7B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1AA6, 0x1AA6, N, 0x1AA6, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x13BB, 0x13BB, N, 0x13BB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1AF9, 0x1AF9, N, 0x1AF9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1409, 0x1409, N, 0x1409, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1B42, 0x1B42, N, 0x1B42, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1455, 0x1455, N, 0x1455, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1B94, 0x1B94, N, 0x1B94, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x19D9, 0x19D9, N, 0x19D9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1BE2, 0x1BE2, N, 0x1BE2, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1A22, 0x1A22, N, 0x1A22, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1C30, 0x1C30, N, 0x1C30, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1A6B, 0x1A6B, N, 0x1A6B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1C83, 0x1C83, N, 0x1C83, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1AB0, 0x1AB0, N, 0x1AB0, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1903, 0x1903, N, 0x1903, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1B02, 0x1B02, N, 0x1B02, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1946, 0x1946, N, 0x1946, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1B48, 0x1B48, N, 0x1B48, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x198F, 0x198F, N, 0x198F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x17DD, 0x17DD, N, 0x17DD, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x19E3, 0x19E3, N, 0x19E3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1833, 0x1833, N, 0x1833, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1A2F, 0x1A2F, N, 0x1A2F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1871, 0x1871, N, 0x1871, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1A73, 0x1A73, N, 0x1A73, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x18BE, 0x18BE, N, 0x18BE, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x170A, 0x170A, N, 0x170A, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1908, 0x1908, N, 0x1908, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x174D, 0x174D, N, 0x174D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x194C, 0x194C, N, 0x194C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x179D, 0x179D, N, 0x179D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1999, 0x1999, N, 0x1999, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x17E8, 0x17E8, N, 0x17E8, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1635, 0x1635, N, 0x1635, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1839, 0x1839, N, 0x1839, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1685, 0x1685, N, 0x1685, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1876, 0x1876, N, 0x1876, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x16D3, 0x16D3, N, 0x16D3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1508, 0x1508, N, 0x1508, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1710, 0x1710, N, 0x1710, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x154C, 0x154C, N, 0x154C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1751, 0x1751, N, 0x1751, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x159C, 0x159C, N, 0x159C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x17A1, 0x17A1, N, 0x17A1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x15E7, 0x15E7, N, 0x15E7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1428, 0x1428, N, 0x1428, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x163B, 0x163B, N, 0x163B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1470, 0x1470, N, 0x1470, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x168C, 0x168C, N, 0x168C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x14B5, 0x14B5, N, 0x14B5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x16D8, 0x16D8, N, 0x16D8, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x150F, 0x150F, N, 0x150F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1C4C, 0x1C4C, N, 0x1C4C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1553, 0x1553, N, 0x1553, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x138B, 0x138B, N, 0x138B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x15A1, 0x15A1, N, 0x15A1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x13E0, 0x13E0, N, 0x13E0, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x15EB, 0x15EB, N, 0x15EB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x142C, 0x142C, N, 0x142C, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1B69, 0x1B69, N, 0x1B69, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1479, 0x1479, N, 0x1479, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1BAE, 0x1BAE, N, 0x1BAE, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x14BC, 0x14BC, N, 0x14BC, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1BFF, 0x1BFF, N, 0x1BFF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, 0x1A43, 0x1A43, N, 0x1A43, N, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, N, 0, 2, 9),
    p(5, 0, 1, 0, N, N, N, N, N, N, 0, 2, 10),
    p(0, 0, 0, 0, N, N, N, N, N, N, 0, 0, 1),
    p(28, 0, 1, 0, N, N, N, N, N, N, 0, 1, 4),
    p(29, 0, 1, 0, N, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 0, 0x1564, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x176F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A74, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x148C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1739, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x154F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x185E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BE8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13A3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0548, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x188A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x143A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C69, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C61, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x169E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1715, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15B3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C48, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x166B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19A4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B9D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1510, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17D7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A1E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C74, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A03, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18B5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1407, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1850, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C39, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x183B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15C0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17B1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x159E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x163E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x170E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x184D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18E5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1695, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1443, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1865, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17C9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1673, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17B5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17A0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1741, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AD8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1617, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1545, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C86, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B27, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1521, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16B0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AD9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x183C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13EC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1733, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BAD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14B0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16DB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x147A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18F8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x163F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19B4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1640, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BC9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16D2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16A4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15BC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AE3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13FE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x176C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C32, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13A0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x147C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1699, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x185D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A40, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1ACD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A52, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18DE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13E7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AEF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C49, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14AD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19C5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A50, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1381, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13BC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1932, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x191F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19C7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1474, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x142D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C5B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x154A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x142F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B49, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x170F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1813, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1727, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1940, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BB3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16E0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x159F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AD6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A94, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1785, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x182A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B06, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1594, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C88, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B8F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1826, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x173C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14B8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1476, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13DF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x195B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1633, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A2D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14DC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15D3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15A4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1810, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14D6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BBA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x166E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AAF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1671, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BB1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19B9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x179E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A07, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15C4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15E4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1900, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BFC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1767, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15A5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18FD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x197D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A15, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B1D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15B5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15A0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13E6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B47, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1875, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1920, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16B6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C51, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1670, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16BD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1402, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A2C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C10, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x183D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A5D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1608, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14B4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18B8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1793, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13DE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1679, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0672, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17BA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x175A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A0D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x176D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16D0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13F9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x137E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18DF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A2A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x189F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15F5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x168B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1972, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19AD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AD3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17A7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1944, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14A8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C57, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18C1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B28, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1397, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AC0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16EA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x192F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1662, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13A6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x150D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14DD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15C6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13B5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15F2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x175D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14B7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1688, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x193F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16CF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B9C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x030B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1595, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B44, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BBF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13CA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16FC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1736, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1511, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BF1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16CC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1990, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x182B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1877, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C06, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x143F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C4F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1692, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19C3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B64, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1517, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x188D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A65, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1591, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15BB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15CE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15ED, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x143E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16D9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13EB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1969, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18A0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1471, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x197C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C23, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1796, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BC3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x177F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B9F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18AE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17DF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1764, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1580, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15AB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BB5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x139F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1502, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1570, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A41, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15FF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x180F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AD7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A35, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17DC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1417, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18F0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1923, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1892, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13AD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x178F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18F6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A0C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x184F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x138A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x171C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1759, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14D8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B4C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A77, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x155C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16F9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C02, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14F6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x149F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18EA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13D7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A5F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B62, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17B0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BD3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B36, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x164B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1394, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B21, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19F1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13D2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1477, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x180C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A06, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1438, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1963, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BA9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14BA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17F1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14C0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B72, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BBE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15F4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x192E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BC5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14F1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A3B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C1E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AB7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x140F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17F6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x176A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A93, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AC3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1804, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1389, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x00B3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14E1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16B3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x140C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A26, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x037D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1518, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C58, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13C7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1561, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A3C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15EA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1818, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x195C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15B9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x165F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C85, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x167D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x184E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1856, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x185C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A7E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1445, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1422, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1462, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1404, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17F2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A9D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13E4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1318, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1879, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1750, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1705, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B13, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A7A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1675, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1720, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x142B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13B2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x173E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1766, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1680, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17AA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x139D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B2D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17DB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x177C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1579, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19D2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1799, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17BE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x183F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19A0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1929, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1888, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BA3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17BD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C53, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1534, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x141C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18FC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19AE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17B9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18AF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A19, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x152B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19F6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1885, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16E2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1426, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19B5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1459, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15D1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x161E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1436, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B30, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x169B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18D2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1449, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1668, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A1D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1613, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17D1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1933, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C44, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1416, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B3F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19B2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1878, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x168D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13EF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16FE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x158A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B7C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1637, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18BF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BE3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14EC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15EE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13C6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1082, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0F18, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0DE4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1482, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1719, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B79, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0AFA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0FB0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0C06, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x190D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x149C, N, N, N, N, N, 0, 2, 1),
    p(2, 0, 1, 16, 0x234F, 0x234F, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x240D, 0x240D, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x2350, 0x2350, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x440C, 0x440C, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x434F, 0x434F, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x3320, 0x26A6, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x26A6, 0x26A6, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x2792, 0x2792, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x2C0A, 0x2C0A, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x2D4C, 0x2D4C, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x3122, 0x3122, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 16, 0x2856, 0x2856, N, N, N, N, 0, 1, 1),
    p(5, 0, 4, 0, 0x2E7A, N, N, N, N, N, 2, 1, 1),
    p(6, 26, 14, 0, N, N, N, N, N, N, 0, 0, 5),
    p(5, 0, 4, 0, 0x30D0, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 1, 0x16EB, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 4, 1, 0x08EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 4, 1, 0x0C4A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 4, 1, 0x0EFE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 4, 1, 0x07B6, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 4, 1, 0x07A2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 4, 1, 0x1800, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 4, 1, 0x0B40, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 4, 1, 0x1194, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 10, 1, 0x1C34, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 4, 0, 0x2C44, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x2F3C, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x2F6A, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x324C, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x2B60, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x28EE, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x29CC, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x323C, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x28BE, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x2C4A, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x2EFE, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x329E, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x2DE0, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x272C, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x2ACE, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x2E5A, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x29DA, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x27A2, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x268C, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x32A6, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x30A6, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x2F86, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x2ADA, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x2C42, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x27AE, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x2B40, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x2DD6, N, N, N, N, 0x0D99, 2, 1, 1),
    p(5, 0, 4, 0, 0x3194, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x27A4, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x303C, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x27B6, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 0, 0x28C6, N, N, N, N, N, 2, 1, 1),
    p(5, 0, 4, 16, 0x32B2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1B88, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1B88, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x193B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x193B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x193B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x193B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1B91, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1B91, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x1B91, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x1B91, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1BDE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1BDE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x1BDE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x1BDE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1AF7, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1AF7, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x1AF7, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x1AF7, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x19D8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x19D8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x19D8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x19D8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x13B9, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x13B9, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x13B9, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x13B9, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x15E5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x15E5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x15E5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x15E5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1639, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1639, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x1639, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x1639, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x18B3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x18B3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x18B3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x18B3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1A69, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1A69, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x1A69, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x1A69, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1901, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1901, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x1901, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x1901, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1742, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1742, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x1742, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x1742, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1831, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1831, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x19E1, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x19E1, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x167A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x167A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1943, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1943, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x17E6, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x17E6, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x18BD, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x18BD, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x14B3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x14B3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x14B3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x14B3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1ACA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1ACA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x1ACA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x1ACA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1B68, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1B68, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x1B68, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x1B68, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1B15, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1B15, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x1B15, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x1B15, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1A88, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1A88, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x18D8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x18D8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x18D8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x18D8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1B6C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1B6C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0996, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0996, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0996, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0996, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1B18, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1B18, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x1B18, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x1B18, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x04CB, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x04CB, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x189B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x189B, N, N, N, N, N, 0, 1, 1),
    p(21, 0, 5, 0, N, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1551, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1551, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x1551, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x1551, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0C02, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0C02, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0BC3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0BC3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0C33, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0C33, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1C78, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x176E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x176E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1A48, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1A48, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1723, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1723, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0DD3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0DD3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0DD3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0DD3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0003, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0003, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2704, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2704, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2C40, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2C40, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2D5A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2D5A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2EBC, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2EBC, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2BC2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2BC2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2C32, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2C32, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2DD2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2DD2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2DD2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x3090, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x3090, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x3090, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x018D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x018D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x018D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x018D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x327A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2840, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2F9C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2DC6, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2C30, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2484, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x25C2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x3112, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x31E2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2F5E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2247, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2391, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2421, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2253, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x30EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2E42, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2E28, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2B58, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2C2A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x29C0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2266, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2206, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x242B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x211D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2491, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2DDE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2293, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2265, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x242A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x22E3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x23D9, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x22B0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x23BE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x292A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x239A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2373, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2DBA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2F0E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x222C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2712, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2343, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x209E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2E54, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2286, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x30A0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2DD4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x232E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x265E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2914, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x266E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x3192, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x22C2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2C8C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2A20, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2B9C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2A0E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2CD2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2A74, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x29B6, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x24E4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x27FA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x3288, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x22F2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x22A1, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2292, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2011, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2002, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x200B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2250, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x211C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x22F5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x222D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x221E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2287, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2205, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x22AA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2738, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x221D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x31EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2F64, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x3006, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x22C5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2858, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x32F0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2475, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x25A1, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2C6E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2424, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2A1C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2423, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x319A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x281C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x310A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x429E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x43CD, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x4235, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x4601, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x42C8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x433A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x30E0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2696, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2F9C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2CEA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2DC6, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2196, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2814, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x3112, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x26DA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x31E2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2F5E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x29A2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x270E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2253, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2D58, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x30EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2E42, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2C7E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2F92, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2B58, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x28E0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2C2A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x29C0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2914, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x266E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2C8C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2A20, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2B9C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x29B6, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x24E4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x27FA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x3288, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2011, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2002, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x200B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x3202, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x222D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2AA8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2816, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x221D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x26DC, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x31EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2F64, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x310A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x300A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2D3C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2424, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2C10, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2A1C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2423, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x327A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2840, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x32E4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2F9C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x3024, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2C30, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2484, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x25C2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x3112, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x3166, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2247, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2391, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2421, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2253, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x308A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2B58, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2266, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2206, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x242B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x211D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2491, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2293, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2265, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x242A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x22E3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x23D9, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x22B0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2D6E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x23BE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x292A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x239A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2373, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2DBA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2F0E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2712, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2343, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x209E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2E54, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2286, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x30A0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2DD4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x232E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x265E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x3192, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x22C2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2A0E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2CD2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2A74, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x29B6, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x24E4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x22F2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x22A1, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2292, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2011, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2007, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2250, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x211C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x22F5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x222D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2205, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x22AA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2738, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x221D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x3172, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x3006, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x22C5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2AB0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2475, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x25A1, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2C6E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2424, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x200C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x2F9C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x3024, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x3112, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x3166, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x2253, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x308A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x2B58, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x2BBA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x23D9, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x317E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x2463, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x2F56, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x29B6, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x24E4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x2011, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x221D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x3172, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x2424, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x200C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x454A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x4202, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x44FC, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2A34, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2798, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x3080, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2DBC, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x26E2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x3178, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x31F8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2F6E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2FC2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2D14, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x23D7, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x22A2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2299, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x23EF, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x22E4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x22F6, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2B18, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x28A0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2EA8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2C20, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x23EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x253B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2AA4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2463, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2880, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2AAC, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x3106, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2772, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2A34, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2798, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x3080, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2DBC, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x26E2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x3178, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x31F8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2F6E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2FC2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2D14, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x23D7, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x22A2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2299, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x23EF, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x22E4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x22F6, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2B18, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x28A0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2EA8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2C20, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x23EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x253B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2AA4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2463, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2880, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2AAC, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x3106, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2772, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x23EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x253B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2AA4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2463, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x317E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x2F56, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x222C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x2265, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x242A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x22E3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x23EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x253B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x2AA4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x222C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x2712, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2EF6, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2EF6, N, N, N, N, N, 0, 1, 1),
    p(15, 0, 19, 0, N, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4247, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4487, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4487, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4391, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x44D5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4502, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4409, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4337, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4344, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4344, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4469, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4346, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x442A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4265, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4541, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x43D9, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x43D9, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x44BD, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4655, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4655, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x454D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x454D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x43BE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x45C5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x45C5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x43EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x457A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x457A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4463, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4463, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x447E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4373, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4373, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x443F, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x443F, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x422C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4628, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4343, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x44DB, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x44DB, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4520, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4310, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4286, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4604, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x432E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x432E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x436A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x45EC, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x45D7, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x42A1, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x461C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x42F2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x42F2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4292, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4292, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4658, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4658, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4553, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x411C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4652, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x432B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x45A4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4490, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4631, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4250, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x458F, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x42C5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x433D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x462E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4205, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4205, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x44FF, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x45B9, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x421D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x44D8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x44D8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x45C2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4640, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4298, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4421, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x451D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x45FE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4253, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4364, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x43D6, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x425C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x42E3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x42B0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x453B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x439A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x45E6, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x45A7, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x45A1, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4475, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4424, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x44F0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x42C2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x42AA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x436A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x45D7, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4430, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x44E4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x43F7, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x42F5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x449C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4577, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x449C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x43F7, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x42FB, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4499, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4529, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x465E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x4484, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4577, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x4343, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x43BE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x43E2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x45EF, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x44C9, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x4646, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x6005, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x6194, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x611C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x609C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x610C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x600A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x600F, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x4001, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0xE000, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0xE013, N, N, N, N, N, 0, 1, 1),
    p(20, 0, 5, 6, 0x618C, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 19, 10, 0x07E7, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 10, 0x158C, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 10, 0x1795, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 10, 0x034C, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 10, 0x1ABE, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 10, 0x0A22, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 10, 0x0A23, N, N, N, N, N, 0, 2, 1),
    p(14, 0, 19, 10, 0x1BFB, N, N, N, N, N, 0, 2, 1),
    p(15, 0, 19, 10, 0x1506, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 10, 0x16D4, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 10, 0x14AF, N, N, N, N, N, 0, 2, 1),
    p(13, 0, 19, 10, 0x17E2, N, N, N, N, N, 0, 2, 1),
    p(13, 0, 19, 10, 0x1994, N, N, N, N, N, 0, 2, 1),
    p(12, 0, 19, 10, 0x14C4, N, N, N, N, N, 0, 2, 1),
    p(14, 0, 19, 10, 0x001C, N, N, N, N, N, 0, 2, 1),
    p(15, 0, 19, 10, 0x0022, N, N, N, N, N, 0, 2, 1),
    p(14, 0, 19, 10, 0x1A57, N, N, N, N, N, 0, 2, 1),
    p(15, 0, 19, 10, 0x1A9A, N, N, N, N, N, 0, 2, 1),
    p(14, 0, 19, 10, 0x01FC, N, N, N, N, N, 0, 2, 1),
    p(15, 0, 19, 10, 0x01FE, N, N, N, N, N, 0, 2, 1),
    p(14, 0, 19, 10, 0x15E1, N, N, N, N, N, 0, 2, 1),
    p(15, 0, 19, 10, 0x1420, N, N, N, N, N, 0, 2, 1),
    p(14, 0, 19, 10, 0x14FF, N, N, N, N, N, 0, 2, 1),
    p(15, 0, 19, 10, 0x1708, N, N, N, N, N, 0, 2, 1),
    p(14, 0, 19, 10, 0x14A9, N, N, N, N, N, 0, 2, 1),
    p(15, 0, 19, 10, 0x16C7, N, N, N, N, N, 0, 2, 1),
    p(14, 0, 19, 10, 0x1546, N, N, N, N, N, 0, 2, 1),
    p(15, 0, 19, 10, 0x137A, N, N, N, N, N, 0, 2, 1),
    p(14, 0, 19, 10, 0x1596, N, N, N, N, N, 0, 2, 1),
    p(15, 0, 19, 10, 0x13D4, N, N, N, N, N, 0, 2, 1),
    p(14, 0, 19, 10, 0x1433, N, N, N, N, N, 0, 2, 1),
    p(15, 0, 19, 10, 0x1480, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 16, 0x1BB0, N, N, N, N, N, 0, 2, 1),
    p(12, 0, 19, 16, 0x14C4, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 13, 13, 0x07E7, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 13, 0x158C, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 13, 13, 0x00AD, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 13, 0x1ABE, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 13, 13, 0x034C, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 13, 0x0A23, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 13, 0x0A22, N, N, N, N, N, 0, 2, 1),
    p(13, 0, 19, 13, 0x17E2, N, N, N, N, N, 0, 2, 1),
    p(14, 0, 19, 13, 0x001C, N, N, N, N, N, 1, 2, 1),
    p(15, 0, 19, 13, 0x0022, N, N, N, N, N, 1, 2, 1),
    p(14, 0, 19, 13, 0x1A57, N, N, N, N, N, 1, 2, 1),
    p(15, 0, 19, 13, 0x1A9A, N, N, N, N, N, 1, 2, 1),
    p(14, 0, 19, 13, 0x01FC, N, N, N, N, N, 1, 2, 1),
    p(15, 0, 19, 13, 0x01FE, N, N, N, N, N, 1, 2, 1),
    p(18, 0, 11, 13, 0x15D7, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 13, 0x145C, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 13, 0x14F3, N, N, N, N, N, 0, 2, 1),
    p(19, 0, 10, 13, 0x1C34, N, N, N, N, N, 0, 2, 1),
    p(13, 0, 10, 13, 0x1C8A, N, N, N, N, N, 0, 2, 1),
    p(19, 0, 19, 13, 0x09AE, N, N, N, N, N, 1, 2, 1),
    p(19, 0, 19, 13, 0x08A4, N, N, N, N, N, 1, 2, 1),
    p(19, 0, 19, 13, 0x034E, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 13, 0x1645, N, N, N, N, N, 0, 2, 1),
    p(20, 0, 11, 13, 0x1414, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 11, 13, 0x1626, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 13, 0x199F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 5, 6, 0x2A42, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x26BC, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x229E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x23CD, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2235, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x254A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2601, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x2202, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x22C8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x24FC, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x233A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x2FA8, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2904, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x3296, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1465, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1109, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1109, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x06CF, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x06CF, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x16CB, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x16CB, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0737, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0737, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0696, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0696, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0696, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0696, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0005, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0005, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0196, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0196, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0196, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0196, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x1599, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x1599, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0247, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0247, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0247, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0247, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x08E0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x08E0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x08E0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x08E0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0014, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0014, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0014, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0014, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x011D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x011D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x011D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x011D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0252, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0252, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0252, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0252, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x011F, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x011F, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x119A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x119A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x010C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x010C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0697, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0697, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0010, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0010, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0010, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0010, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x03EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x03EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x03EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x03EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0001, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0001, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0001, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0001, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0373, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0373, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0373, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0373, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x022C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x022C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x022C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x022C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0712, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0712, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0712, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0712, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x000A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x000A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x000A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x000A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0286, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0286, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0286, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0286, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x032E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x032E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x032E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x032E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x02C2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x02C2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x02C2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x02C2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0195, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0195, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0195, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0195, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0002, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0002, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0002, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0002, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0012, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0012, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0012, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0012, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0205, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0205, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0205, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0205, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0008, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0008, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x0008, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x0008, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x000F, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x000F, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x0003, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x0003, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x000C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x000C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 3, 0x000C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 4, 0x000C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x3108, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x3108, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x26CE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x26CE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2736, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2736, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 6, 0x2018, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 5, 0x2018, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 19, 11, 0x0A22, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 11, 0x13C5, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 11, 11, 0x15D7, N, N, N, N, N, 0, 2, 1),
    p(20, 0, 11, 11, 0x1414, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 11, 11, 0x1626, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 11, 0x145C, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 11, 0x1B9A, N, N, N, N, N, 0, 2, 1),
    p(14, 0, 19, 11, 0x001C, N, N, N, N, N, 1, 2, 1),
    p(15, 0, 19, 11, 0x0022, N, N, N, N, N, 1, 2, 1),
    p(18, 0, 19, 11, 0x14F3, N, N, N, N, N, 0, 2, 1),
    p(19, 0, 10, 11, 0x1C34, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 13, 11, 0x07E7, N, N, N, N, N, 0, 2, 1),
    p(13, 0, 10, 11, 0x1C8A, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 13, 11, 0x00AD, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 13, 11, 0x0200, N, N, N, N, N, 0, 2, 1),
    p(9, 0, 9, 11, 0x00E2, N, N, N, N, N, 0, 2, 1),
    p(9, 0, 9, 11, 0x00BD, N, N, N, N, N, 0, 2, 1),
    p(9, 0, 9, 11, 0x00BE, N, N, N, N, N, 0, 2, 1),
    p(9, 0, 9, 11, 0x0122, N, N, N, N, N, 0, 2, 1),
    p(9, 0, 9, 11, 0x0172, N, N, N, N, N, 0, 2, 1),
    p(9, 0, 9, 11, 0x01DE, N, N, N, N, N, 0, 2, 1),
    p(9, 0, 9, 11, 0x00CE, N, N, N, N, N, 0, 2, 1),
    p(9, 0, 9, 11, 0x01BE, N, N, N, N, N, 0, 2, 1),
    p(9, 0, 9, 11, 0x017A, N, N, N, N, N, 0, 2, 1),
    p(9, 0, 9, 11, 0x00FA, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 13, 11, 0x034C, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 11, 0x1ABE, N, N, N, N, N, 0, 2, 1),
    p(19, 0, 19, 11, 0x09AE, N, N, N, N, N, 1, 2, 1),
    p(19, 0, 19, 11, 0x034E, N, N, N, N, N, 0, 2, 1),
    p(19, 0, 19, 11, 0x08A4, N, N, N, N, N, 1, 2, 1),
    p(18, 0, 19, 11, 0x0A23, N, N, N, N, N, 0, 2, 1),
    p(18, 0, 19, 11, 0x199F, N, N, N, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x035C, 0x1C28, N, 0x1C28, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x0245, 0x1A64, N, 0x1A64, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x0198, 0x1C7E, N, 0x1C7E, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x01F1, 0x1AA8, N, 0x1AA8, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x0329, 0x13BD, N, 0x13BD, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x035B, 0x1AFB, N, 0x1AFB, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x03BB, 0x193D, N, 0x193D, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x0215, 0x1B45, N, 0x1B45, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x019D, 0x1989, N, 0x1989, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x043D, 0x1B95, N, 0x1B95, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x02A5, 0x19DB, N, 0x19DB, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x03E6, 0x1BE4, N, 0x1BE4, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x024B, 0x1A24, N, 0x1A24, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x060E, 0x186B, N, 0x186B, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x02D2, 0x1A6D, N, 0x1A6D, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x01F4, 0x18B9, N, 0x18B9, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x026F, 0x1AB2, N, 0x1AB2, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x0353, 0x1905, N, 0x1905, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x03D4, 0x1744, N, 0x1744, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x0418, 0x1948, N, 0x1948, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x0452, 0x1798, N, 0x1798, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x019C, 0x1992, N, 0x1992, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x01EB, 0x17E0, N, 0x17E0, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x031D, 0x19E5, N, 0x19E5, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x0614, 0x1834, N, 0x1834, N, N, 0, 2, 1),
    p(1, 0, 1, 11, 0x02D8, 0x167E, N, 0x167E, N, N, 0, 2, 1),
    p(14, 0, 19, 11, 0x1433, N, N, N, N, N, 1, 2, 1),
    p(18, 0, 19, 11, 0x1645, N, N, N, N, N, 0, 2, 1),
    p(15, 0, 19, 11, 0x1480, N, N, N, N, N, 1, 2, 1),
    p(21, 0, 19, 11, 0x1697, N, N, N, N, N, 0, 2, 1),
    p(12, 0, 19, 11, 0x14C4, N, N, N, N, N, 0, 2, 1),
    p(21, 0, 19, 11, 0x1C09, N, N, N, N, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x0030, N, 0x2089, N, 0x2089, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x04D0, N, 0x208A, N, 0x208A, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x0145, N, 0x208B, N, 0x208B, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x0031, N, 0x208C, N, 0x208C, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x044E, N, 0x208D, N, 0x208D, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x0218, N, 0x208E, N, 0x208E, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x019B, N, 0x208F, N, 0x208F, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x02EF, N, 0x2090, N, 0x2090, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x00DD, N, 0x2091, N, 0x2091, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x03E9, N, 0x2092, N, 0x2092, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x0144, N, 0x2093, N, 0x2093, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x0147, N, 0x2094, N, 0x2094, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x00AE, N, 0x2095, N, 0x2095, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x0401, N, 0x2096, N, 0x2096, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x0201, N, 0x2097, N, 0x2097, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x00AC, N, 0x2098, N, 0x2098, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x04A9, N, 0x2099, N, 0x2099, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x002F, N, 0x209A, N, 0x209A, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x0033, N, 0x209B, N, 0x209B, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x0386, N, 0x209C, N, 0x209C, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x0264, N, 0x209D, N, 0x209D, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x00DC, N, 0x209E, N, 0x209E, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x0473, N, 0x209F, N, 0x209F, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x023B, N, 0x20A0, N, 0x20A0, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x0212, N, 0x20A1, N, 0x20A1, N, 0, 2, 1),
    p(2, 0, 1, 11, 0x0381, N, 0x20A2, N, 0x20A2, N, 0, 2, 1),
    p(14, 0, 19, 11, 0x1A57, N, N, N, N, N, 1, 2, 1),
    p(19, 0, 19, 11, 0x18A6, N, N, N, N, N, 0, 2, 1),
    p(15, 0, 19, 11, 0x1A9A, N, N, N, N, N, 1, 2, 1),
    p(19, 0, 19, 11, 0x18EE, N, N, N, N, N, 0, 2, 1),
    p(14, 0, 19, 11, 0x181A, N, N, N, N, N, 1, 2, 1),
    p(15, 0, 19, 11, 0x165E, N, N, N, N, N, 1, 2, 1),
    p(18, 0, 19, 12, 0x1795, N, N, N, N, N, 0, 1, 1),
    p(14, 0, 19, 12, 0x1546, N, N, N, N, N, 1, 1, 1),
    p(15, 0, 19, 12, 0x137A, N, N, N, N, N, 1, 1, 1),
    p(18, 0, 19, 12, 0x158C, N, N, N, N, N, 0, 1, 1),
    p(18, 0, 19, 12, 0x16D1, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0C34, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x006D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x00B5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1B6A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x005B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x03C2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1AAE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x01CD, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x003D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0059, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 12, 0x0026, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x005E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0065, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x03C1, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0044, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x02B6, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0088, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0023, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0046, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x02BF, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0355, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x007B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x003C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0045, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0073, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x07C3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0069, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x007D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x03BA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0774, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0027, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0357, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0161, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x13FC, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x00AB, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0229, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0570, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0645, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x006C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0067, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0238, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x003A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x004E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0041, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0025, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x18B2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0481, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x03B2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x198D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0040, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x004F, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0028, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0035, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0024, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0078, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x0036, N, N, N, N, N, 0, 1, 1),
    p(4, 0, 1, 12, 0x0687, N, N, N, N, N, 0, 1, 5),
    p(4, 0, 1, 12, 0x0691, N, N, N, N, N, 0, 1, 5),
    p(5, 0, 1, 12, 0x1835, N, N, N, N, N, 4, 1, 1),
    p(5, 0, 1, 12, 0x189A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x16F0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x18E4, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1729, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1571, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1777, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x15C1, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x17C1, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x160D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1812, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1659, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1492, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x16AB, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x14D7, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x16F5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x152F, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1730, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x157F, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x13B3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x15C9, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1403, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1614, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x144E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1B8C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x149B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1BD9, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x14E0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1C29, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1535, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1C80, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1AAA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x13BE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1AFC, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x140B, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1B46, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1456, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1B96, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x19DC, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1BE5, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1A25, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1C31, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1A6E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x18BA, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1AB3, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1906, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1B05, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1949, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1B4A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x1993, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x17E1, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 12, 0x19E8, N, N, N, N, N, 0, 1, 1),
    p(20, 0, 11, 11, 0x1BEE, N, N, N, N, N, 0, 2, 1),
    p(20, 0, 11, 11, 0x14F9, N, N, N, N, N, 0, 2, 1),
    p(19, 0, 19, 11, 0x1464, N, N, N, N, N, 0, 2, 1),
    p(21, 0, 19, 11, 0x1BF4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 11, 0x1375, N, N, N, N, N, 0, 2, 1),
    p(20, 0, 11, 11, 0x1540, N, N, N, N, N, 0, 2, 1),
    p(20, 0, 11, 11, 0x1478, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 19, 12, 0x1452, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 12, 0x0912, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 12, 0x16DE, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 12, 0x104C, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 12, 0x1718, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 12, 0x1954, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 12, 0x1B76, N, N, N, N, N, 0, 1, 1),
    p(27, 0, 19, 0, N, N, N, N, N, N, 8, 0, 4),
    p(10, 0, 19, 0, N, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 0, N, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0F0C, N, 0x0F0C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0C78, N, 0x0C78, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0F8C, N, 0x0F8C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0CDA, N, 0x0CDA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0A7C, N, 0x0A7C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0D48, N, 0x0D48, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0AE0, N, 0x0AE0, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0DAE, N, 0x0DAE, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0B4A, N, 0x0B4A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0E30, N, 0x0E30, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0BA6, N, 0x0BA6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0942, N, 0x0942, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0C0E, N, 0x0C0E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x09B4, N, 0x09B4, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0C88, N, 0x0C88, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0A1A, N, 0x0A1A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x078A, N, 0x078A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0A88, N, 0x0A88, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x07F6, N, 0x07F6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0AEA, N, 0x0AEA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x085C, N, 0x085C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0B52, N, 0x0B52, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x08D2, N, 0x08D2, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1352, N, 0x1352, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x094A, N, 0x094A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x06B2, N, 0x06B2, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x09BA, N, 0x09BA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0724, N, 0x0724, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0A32, N, 0x0A32, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0796, N, 0x0796, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x122A, N, 0x122A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0804, N, 0x0804, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1292, N, 0x1292, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0872, N, 0x0872, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x12FC, N, 0x12FC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x109C, N, 0x109C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1362, N, 0x1362, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1100, N, 0x1100, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x06C0, N, 0x06C0, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1152, N, 0x1152, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20A3, N, 0x20A3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20A5, N, 0x20A5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20A7, N, 0x20A7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20A9, N, 0x20A9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20AB, N, 0x20AB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20AD, N, 0x20AD, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20AF, N, 0x20AF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20B1, N, 0x20B1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20B3, N, 0x20B3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20B5, N, 0x20B5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20B7, N, 0x20B7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20B9, N, 0x20B9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20BB, N, 0x20BB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20BD, N, 0x20BD, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20BF, N, 0x20BF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20C1, N, 0x20C1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20C3, N, 0x20C3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20C5, N, 0x20C5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20C7, N, 0x20C7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20C9, N, 0x20C9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20CB, N, 0x20CB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20CD, N, 0x20CD, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20CF, N, 0x20CF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20D1, N, 0x20D1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20D3, N, 0x20D3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20D5, N, 0x20D5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20D7, N, 0x20D7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20D9, N, 0x20D9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20DB, N, 0x20DB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20DD, N, 0x20DD, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20DF, N, 0x20DF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20E1, N, 0x20E1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20E3, N, 0x20E3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20E5, N, 0x20E5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20E7, N, 0x20E7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20E9, N, 0x20E9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20EB, N, 0x20EB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20ED, N, 0x20ED, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20EF, N, 0x20EF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20F1, N, 0x20F1, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0F4C, N, 0x0F4C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0CB6, N, 0x0CB6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0FC0, N, 0x0FC0, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0D10, N, 0x0D10, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x103E, N, 0x103E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0D78, N, 0x0D78, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x10B0, N, 0x10B0, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0DEA, N, 0x0DEA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0B74, N, 0x0B74, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0E6A, N, 0x0E6A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0BDC, N, 0x0BDC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0EE6, N, 0x0EE6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0C52, N, 0x0C52, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0F5C, N, 0x0F5C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0CBC, N, 0x0CBC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0A58, N, 0x0A58, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0D16, N, 0x0D16, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0AB8, N, 0x0AB8, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0D8A, N, 0x0D8A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0B20, N, 0x0B20, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x08A6, N, 0x08A6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0B88, N, 0x0B88, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x091A, N, 0x091A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0BE2, N, 0x0BE2, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0984, N, 0x0984, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0C62, N, 0x0C62, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x09EA, N, 0x09EA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x075C, N, 0x075C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0A66, N, 0x0A66, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x07CA, N, 0x07CA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0AC6, N, 0x0AC6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x082A, N, 0x082A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0B30, N, 0x0B30, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x08B4, N, 0x08B4, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1330, N, 0x1330, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0924, N, 0x0924, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20F3, N, 0x20F3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20F5, N, 0x20F5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20F7, N, 0x20F7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20F9, N, 0x20F9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20FB, N, 0x20FB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20FD, N, 0x20FD, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x20FF, N, 0x20FF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2101, N, 0x2101, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2103, N, 0x2103, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2105, N, 0x2105, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2107, N, 0x2107, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2109, N, 0x2109, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x210B, N, 0x210B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x210D, N, 0x210D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x210F, N, 0x210F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2111, N, 0x2111, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2113, N, 0x2113, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2115, N, 0x2115, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2117, N, 0x2117, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2119, N, 0x2119, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x211B, N, 0x211B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x211D, N, 0x211D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x211F, N, 0x211F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2121, N, 0x2121, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2123, N, 0x2123, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2125, N, 0x2125, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2127, N, 0x2127, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2129, N, 0x2129, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x212B, N, 0x212B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x212D, N, 0x212D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x212F, N, 0x212F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2131, N, 0x2131, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2133, N, 0x2133, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2135, N, 0x2135, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2137, N, 0x2137, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2139, N, 0x2139, N, 0, 1, 1),
    p(11, 0, 4, 0, N, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 4, 0, N, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x06FC, N, 0x06FC, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x118C, N, 0x118C, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0F02, N, 0x0F02, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x1204, N, 0x1204, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0F76, N, 0x0F76, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x126E, N, 0x126E, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x1008, N, 0x1008, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x12DA, N, 0x12DA, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x1070, N, 0x1070, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0DA6, N, 0x0DA6, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x10D8, N, 0x10D8, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0E20, N, 0x0E20, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x112C, N, 0x112C, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0E90, N, 0x0E90, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0C04, N, 0x0C04, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0F0A, N, 0x0F0A, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0C76, N, 0x0C76, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0F8A, N, 0x0F8A, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0CD8, N, 0x0CD8, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x1016, N, 0x1016, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0D46, N, 0x0D46, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0ADE, N, 0x0ADE, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0DAC, N, 0x0DAC, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0B48, N, 0x0B48, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0E2E, N, 0x0E2E, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0BA4, N, 0x0BA4, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0E98, N, 0x0E98, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0C0C, N, 0x0C0C, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x09B2, N, 0x09B2, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0C86, N, 0x0C86, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0A18, N, 0x0A18, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0CDE, N, 0x0CDE, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0A84, N, 0x0A84, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0D4E, N, 0x0D4E, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0AE8, N, 0x0AE8, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x085A, N, 0x085A, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0B50, N, 0x0B50, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x08CE, N, 0x08CE, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0BB4, N, 0x0BB4, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0948, N, 0x0948, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x06B0, N, 0x06B0, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x09B8, N, 0x09B8, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0722, N, 0x0722, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0A30, N, 0x0A30, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0794, N, 0x0794, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0A98, N, 0x0A98, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0802, N, 0x0802, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x1290, N, 0x1290, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0870, N, 0x0870, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x12FA, N, 0x12FA, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x08E4, N, 0x08E4, N, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x213B, N, 0x213B, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x213D, N, 0x213D, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x213F, N, 0x213F, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2141, N, 0x2141, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2143, N, 0x2143, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2145, N, 0x2145, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2147, N, 0x2147, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2149, N, 0x2149, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x214B, N, 0x214B, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x214D, N, 0x214D, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x214F, N, 0x214F, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2151, N, 0x2151, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2153, N, 0x2153, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2155, N, 0x2155, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2157, N, 0x2157, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2159, N, 0x2159, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x215B, N, 0x215B, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x215D, N, 0x215D, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x215F, N, 0x215F, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2161, N, 0x2161, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2163, N, 0x2163, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2165, N, 0x2165, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2167, N, 0x2167, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2169, N, 0x2169, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x216B, N, 0x216B, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x216D, N, 0x216D, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x216F, N, 0x216F, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2171, N, 0x2171, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2173, N, 0x2173, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2175, N, 0x2175, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2177, N, 0x2177, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2179, N, 0x2179, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x217B, N, 0x217B, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x217D, N, 0x217D, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x217F, N, 0x217F, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2181, N, 0x2181, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2183, N, 0x2183, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2185, N, 0x2185, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2187, N, 0x2187, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2189, N, 0x2189, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x218B, N, 0x218B, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x218D, N, 0x218D, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x218F, N, 0x218F, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2191, N, 0x2191, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2193, N, 0x2193, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2195, N, 0x2195, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2197, N, 0x2197, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2199, N, 0x2199, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x219B, N, 0x219B, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x219D, N, 0x219D, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x219F, N, 0x219F, N, 0, 1, 1),
    p(11, 0, 12, 0, N, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 5, 0, N, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0D9D, 0, 1, 1),
    p(5, 0, 1, 0, 0x2080, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0DA1, 0, 1, 1),
    p(5, 0, 1, 0, 0x212C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 1, 0, N, N, N, N, N, 0x0DA5, 0, 1, 1),
    p(5, 0, 1, 0, 0x20C8, N, N, N, N, N, 0, 1, 1),
    p(6, 7, 14, 0, N, N, N, N, N, 0xC044, 0, 0, 5),
    p(27, 0, 1, 0, N, N, N, N, N, N, 8, 0, 13),
    p(6, 0, 14, 0, N, N, N, N, N, 0xC045, 0, 0, 5),
    p(6, 0, 14, 0, 0x20F0, N, N, N, N, N, 0, 0, 5),
    p(6, 0, 14, 0, 0x2158, N, N, N, N, N, 0, 0, 5),
    p(6, 0, 14, 0, N, N, N, N, N, 0x0DA9, 0, 0, 5),
    p(6, 0, 14, 0, N, N, N, N, N, 0x0DAD, 0, 0, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0xC046, 0, 1, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0x0DB1, 0, 1, 12),
    p(7, 0, 1, 0, 0x217C, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, 0x2130, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, N, N, N, N, N, 0xC047, 0, 1, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0xC048, 0, 1, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0x0DB7, 0, 1, 12),
    p(6, 0, 14, 0, N, N, N, N, N, 0xC049, 0, 0, 5),
    p(7, 0, 1, 0, 0x2190, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, 0x2084, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, N, N, N, N, N, 0xC04A, 0, 1, 5),
    p(7, 0, 1, 0, 0x215C, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, N, N, N, N, N, 0xC04B, 0, 1, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0x0DBF, 0, 1, 12),
    p(7, 0, 1, 0, N, N, N, N, N, 0x0DC3, 0, 1, 12),
    p(7, 0, 1, 0, 0x2114, N, N, N, N, N, 0, 1, 12),
    p(7, 0, 1, 0, 0x2184, N, N, N, N, N, 0, 1, 12),
    p(1, 0, 1, 0, N, 0x0946, N, 0x0946, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x06AC, N, 0x06AC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1142, N, 0x1142, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x071E, N, 0x071E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x11BA, N, 0x11BA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x078E, N, 0x078E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1226, N, 0x1226, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x07FE, N, 0x07FE, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x128A, N, 0x128A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1030, N, 0x1030, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x12F6, N, 0x12F6, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x109A, N, 0x109A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x135E, N, 0x135E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x10FC, N, 0x10FC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0E50, N, 0x0E50, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x114E, N, 0x114E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0ED0, N, 0x0ED0, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x11C4, N, 0x11C4, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0F38, N, 0x0F38, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1236, N, 0x1236, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0FAC, N, 0x0FAC, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0D02, N, 0x0D02, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1036, N, 0x1036, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0D6A, N, 0x0D6A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x10A8, N, 0x10A8, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0DDA, N, 0x0DDA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1104, N, 0x1104, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0E56, N, 0x0E56, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0BD0, N, 0x0BD0, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0EDA, N, 0x0EDA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0C46, N, 0x0C46, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0F48, N, 0x0F48, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21A1, N, 0x21A1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21A3, N, 0x21A3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21A5, N, 0x21A5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21A7, N, 0x21A7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21A9, N, 0x21A9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21AB, N, 0x21AB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21AD, N, 0x21AD, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21AF, N, 0x21AF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21B1, N, 0x21B1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21B3, N, 0x21B3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21B5, N, 0x21B5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21B7, N, 0x21B7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21B9, N, 0x21B9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21BB, N, 0x21BB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21BD, N, 0x21BD, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21BF, N, 0x21BF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21C1, N, 0x21C1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21C3, N, 0x21C3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21C5, N, 0x21C5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21C7, N, 0x21C7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21C9, N, 0x21C9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21CB, N, 0x21CB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21CD, N, 0x21CD, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21CF, N, 0x21CF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21D1, N, 0x21D1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21D3, N, 0x21D3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21D5, N, 0x21D5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21D7, N, 0x21D7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21D9, N, 0x21D9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21DB, N, 0x21DB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21DD, N, 0x21DD, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21DF, N, 0x21DF, N, 0, 1, 1),
    p(7, 0, 1, 0, N, N, N, N, N, 0xC04C, 0, 1, 5),
    p(7, 0, 1, 0, N, N, N, N, N, 0x0DC7, 0, 1, 12),
    p(7, 0, 1, 0, 0x21A0, N, N, N, N, N, 0, 1, 12),
    p(6, 0, 1, 0, N, N, N, N, N, N, 0, 0, 5),
    p(6, 9, 1, 0, N, N, N, N, N, N, 0, 0, 5),
    p(27, 0, 1, 0, N, N, N, N, N, N, 8, 0, 4),
    p(1, 0, 1, 0, N, 0x0BB0, N, 0x0BB0, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0E9C, N, 0x0E9C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0C16, N, 0x0C16, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0F1A, N, 0x0F1A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0C8E, N, 0x0C8E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0A2C, N, 0x0A2C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0CE4, N, 0x0CE4, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0A90, N, 0x0A90, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0D56, N, 0x0D56, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0AF2, N, 0x0AF2, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0DC0, N, 0x0DC0, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0B56, N, 0x0B56, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x08DA, N, 0x08DA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0BB8, N, 0x0BB8, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0956, N, 0x0956, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0C28, N, 0x0C28, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x09BE, N, 0x09BE, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0728, N, 0x0728, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0A3E, N, 0x0A3E, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x079C, N, 0x079C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0AA0, N, 0x0AA0, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x080C, N, 0x080C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0AF8, N, 0x0AF8, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x087A, N, 0x087A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x1300, N, 0x1300, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x08EA, N, 0x08EA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x136A, N, 0x136A, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x095C, N, 0x095C, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x06C8, N, 0x06C8, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x09CA, N, 0x09CA, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x0734, N, 0x0734, N, N, 0, 1, 1),
    p(1, 0, 1, 0, N, 0x11D0, N, 0x11D0, N, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21E1, N, 0x21E1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21E3, N, 0x21E3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21E5, N, 0x21E5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21E7, N, 0x21E7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21E9, N, 0x21E9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21EB, N, 0x21EB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21ED, N, 0x21ED, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21EF, N, 0x21EF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21F1, N, 0x21F1, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21F3, N, 0x21F3, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21F5, N, 0x21F5, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21F7, N, 0x21F7, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21F9, N, 0x21F9, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21FB, N, 0x21FB, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21FD, N, 0x21FD, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x21FF, N, 0x21FF, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2201, N, 0x2201, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2203, N, 0x2203, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2205, N, 0x2205, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2207, N, 0x2207, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2209, N, 0x2209, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x220B, N, 0x220B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x220D, N, 0x220D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x220F, N, 0x220F, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2211, N, 0x2211, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2213, N, 0x2213, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2215, N, 0x2215, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2217, N, 0x2217, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x2219, N, 0x2219, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x221B, N, 0x221B, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x221D, N, 0x221D, N, 0, 1, 1),
    p(2, 0, 1, 0, N, N, 0x221F, N, 0x221F, N, 0, 1, 1),
    p(7, 6, 1, 0, N, N, N, N, N, N, 0, 2, 12),
    p(22, 0, 1, 0, N, N, N, N, N, 0x0DCB, 0, 1, 1),
    p(22, 0, 1, 0, N, N, N, N, N, 0x0DCF, 0, 1, 1),
    p(22, 0, 1, 0, 0x2174, N, N, N, N, N, 2, 1, 1),
    p(22, 0, 1, 0, 0x21E0, N, N, N, N, 0x0DD3, 2, 1, 1),
    p(22, 0, 1, 0, 0x2094, N, N, N, N, N, 2, 1, 1),
    p(22, 0, 1, 0, 0x20E4, N, N, N, N, N, 2, 1, 1),
    p(22, 0, 1, 0, 0x2098, N, N, N, N, N, 2, 1, 1),
    p(22, 0, 1, 0, 0x20EC, N, N, N, N, N, 2, 1, 1),
    p(22, 0, 1, 0, 0x20A4, N, N, N, N, N, 2, 1, 1),
    p(7, 216, 1, 0, N, N, N, N, N, 0xC04D, 0, 1, 5),
    p(7, 216, 1, 0, N, N, N, N, N, N, 0, 1, 12),
    p(7, 226, 1, 0, N, N, N, N, N, N, 0, 1, 12),
    p(7, 216, 1, 0, N, N, N, N, N, 0xC04E, 0, 1, 5),
    p(7, 216, 1, 0, N, N, N, N, N, 0xC04F, 0, 1, 5),
    p(7, 216, 1, 0, N, N, N, N, N, 0xC050, 0, 1, 5),
    p(7, 216, 1, 0, N, N, N, N, N, 0xC051, 0, 1, 5),
    p(7, 216, 1, 0, N, N, N, N, N, 0xC052, 0, 1, 5),
    p(22, 0, 1, 0, N, N, N, N, N, 0x0DDF, 0, 1, 1),
    p(22, 0, 1, 0, N, N, N, N, N, 0x0DE3, 0, 1, 1),
    p(22, 0, 1, 0, 0x20B8, N, N, N, N, 0x0DE7, 2, 1, 1),
    p(22, 0, 1, 0, 0x2108, N, N, N, N, 0x0DED, 2, 1, 1),
    p(22, 0, 1, 0, 0x2154, N, N, N, N, N, 2, 1, 1),
    p(22, 0, 1, 0, 0x21B4, N, N, N, N, N, 2, 1, 1),
    p(22, 0, 1, 0, 0x2100, N, N, N, N, N, 2, 1, 1),
    p(22, 0, 1, 0, 0x2168, N, N, N, N, N, 2, 1, 1),
    p(1, 0, 1, 1, 0x035C, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x03BB, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x043D, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x02A5, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x02D2, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x03D4, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x0418, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x0452, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x019C, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x01EB, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x031D, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x0614, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0030, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x04D0, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0145, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0218, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0144, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x00AE, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0401, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x00AC, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x04A9, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x002F, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0033, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0386, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0264, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x00DC, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0473, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x023B, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0212, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0381, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x1B5F, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x16E9, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x079E, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x1C08, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x1C5D, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x08C0, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x139B, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x069A, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x1925, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x0B0E, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x196D, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x1B73, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x19BC, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x180E, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x1A0E, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x0A7E, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x068E, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x1556, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x18E7, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x172C, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x0BCE, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x1779, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x1970, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x17C3, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x0715, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 1, 1, 0x1846, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x03AC, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x1581, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x15CC, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0F04, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x1615, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x03D0, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x1661, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0370, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x16B5, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x14E2, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x07A6, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x1536, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x1C81, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0694, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0FD0, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x140D, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x161C, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x1458, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x0280, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x14A1, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x1BE7, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x14ED, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x05F2, N, N, N, N, N, 0, 1, 1),
    p(19, 0, 19, 1, 0x1959, N, N, N, N, N, 1, 1, 1),
    p(2, 0, 1, 1, 0x1757, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x1995, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x1882, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x1A31, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x16DD, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x1C36, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 1, 1, 0x194E, N, N, N, N, N, 0, 1, 1),
    p(2, 0, 1, 1, 0x1B55, N, N, N, N, N, 0, 1, 1),
    p(9, 0, 9, 1, 0x00E2, N, N, N, N, N, 0, 1, 1),
    p(9, 0, 9, 1, 0x00BD, N, N, N, N, N, 0, 1, 1),
    p(9, 0, 9, 1, 0x00BE, N, N, N, N, N, 0, 1, 1),
    p(9, 0, 9, 1, 0x0122, N, N, N, N, N, 0, 1, 1),
    p(9, 0, 9, 1, 0x0172, N, N, N, N, N, 0, 1, 1),
    p(9, 0, 9, 1, 0x01DE, N, N, N, N, N, 0, 1, 1),
    p(9, 0, 9, 1, 0x00CE, N, N, N, N, N, 0, 1, 1),
    p(9, 0, 9, 1, 0x01BE, N, N, N, N, N, 0, 1, 1),
    p(9, 0, 9, 1, 0x017A, N, N, N, N, N, 0, 1, 1),
    p(9, 0, 9, 1, 0x00FA, N, N, N, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0EE0, N, 0x0EE0, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x11D8, N, 0x11D8, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0F58, N, 0x0F58, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x1240, N, 0x1240, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0FC8, N, 0x0FC8, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x12AC, N, 0x12AC, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x1040, N, 0x1040, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0D84, N, 0x0D84, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x10B6, N, 0x10B6, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0DF0, N, 0x0DF0, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x1118, N, 0x1118, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0E6C, N, 0x0E6C, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x1170, N, 0x1170, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0EEA, N, 0x0EEA, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0C56, N, 0x0C56, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0F62, N, 0x0F62, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0CC2, N, 0x0CC2, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0FDC, N, 0x0FDC, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0D20, N, 0x0D20, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0AC4, N, 0x0AC4, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0D92, N, 0x0D92, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0B2C, N, 0x0B2C, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0E04, N, 0x0E04, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0B90, N, 0x0B90, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0E74, N, 0x0E74, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0BF0, N, 0x0BF0, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x098E, N, 0x098E, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0C68, N, 0x0C68, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x09F4, N, 0x09F4, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0CCA, N, 0x0CCA, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0A6C, N, 0x0A6C, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0D2E, N, 0x0D2E, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0ACA, N, 0x0ACA, N, N, 0, 1, 1),
    p(1, 0, 4, 0, N, 0x0832, N, 0x0832, N, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2221, N, 0x2221, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2223, N, 0x2223, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2225, N, 0x2225, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2227, N, 0x2227, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2229, N, 0x2229, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x222B, N, 0x222B, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x222D, N, 0x222D, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x222F, N, 0x222F, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2231, N, 0x2231, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2233, N, 0x2233, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2235, N, 0x2235, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2237, N, 0x2237, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2239, N, 0x2239, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x223B, N, 0x223B, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x223D, N, 0x223D, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x223F, N, 0x223F, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2241, N, 0x2241, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2243, N, 0x2243, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2245, N, 0x2245, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2247, N, 0x2247, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2249, N, 0x2249, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x224B, N, 0x224B, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x224D, N, 0x224D, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x224F, N, 0x224F, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2251, N, 0x2251, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2253, N, 0x2253, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2255, N, 0x2255, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2257, N, 0x2257, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2259, N, 0x2259, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x225B, N, 0x225B, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x225D, N, 0x225D, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x225F, N, 0x225F, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2261, N, 0x2261, N, 0, 1, 1),
    p(2, 0, 4, 0, N, N, 0x2263, N, 0x2263, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0005, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0196, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0014, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x011F, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x000F, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0697, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x011D, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x022C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x000C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0195, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0002, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0012, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0205, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0010, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x000A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x032E, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0001, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x02C2, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x010C, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x03EE, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0247, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x08E0, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0252, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x119A, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0373, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0712, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0286, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x13FD, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x1A88, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x1383, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x1B39, N, N, N, N, N, 0, 1, 1),
    p(5, 0, 5, 1, 0x0008, N, N, N, N, N, 0, 1, 1),
    p(0, 0, 0, 0, N, N, N, N, N, N, 0, 1, 19),
    p(11, 0, 9, 16, 0x2551, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x28FE, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x315C, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x27E6, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x32CE, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x2E16, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x31D6, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x2D0C, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x2B04, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x336E, N, N, N, N, N, 0, 1, 1),
    p(11, 0, 9, 16, 0x2A0C, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x45E0, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4244, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4388, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x41F0, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4328, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x440F, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4565, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4214, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x450B, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x443C, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x42A4, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x43E5, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x424A, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x460D, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x42D1, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x45B6, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x426E, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4352, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x44A5, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x45DA, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4451, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4382, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x41EA, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x431C, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x4613, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x42D7, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 16, 0x43D3, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0198, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x0353, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x28DE, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 7, 0x2B0C, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x035C, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x0245, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x0198, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x01F1, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x0329, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x035B, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x03BB, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x0215, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x019D, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x043D, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x02A5, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x03E6, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x024B, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x060E, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x02D2, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x01F4, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x026F, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x0353, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x03D4, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x0418, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x0452, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x019C, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x01EB, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x031D, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x0614, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x02D8, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x2A60, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x3326, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x2BE6, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x26FE, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x455C, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 14, 0x2E4A, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 8, 0x2A52, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 8, 0x27BC, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 19, 8, 0x3254, N, N, N, N, N, 0, 1, 19),
    p(22, 0, 1, 0, N, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 14, 0x2756, N, N, N, N, N, 0, 1, 1),
    p(22, 0, 1, 0, N, N, N, N, N, N, 0, 1, 11),
    p(22, 0, 1, 14, 0x2FF4, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x2970, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 14, 0x007B, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 14, 0x195F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x1684, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x1A4E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x067C, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x01FD, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x18C8, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x1429, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x1914, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x163A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x197F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x1B00, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 14, 0x1B28, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x1B12, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x1C4E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x1C6A, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x18F1, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x1A1F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x180B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x17C5, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x195E, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x18AA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x1C5F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x191B, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x16C5, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x156F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x0530, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x02CC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x17F7, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x1B84, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x1687, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x16BA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x1794, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 14, 0x1747, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x0533, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 14, 0x1716, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 14, 0x1646, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 14, 0x194D, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 14, 0x1ABF, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 14, 0x0326, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 14, 0x01EE, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 14, 0x1C2B, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 14, 0x1726, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 14, 0x1B32, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 14, 0x1893, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4571, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x42CB, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x41FC, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x442D, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4661, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4532, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x4589, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x428F, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 16, 0x44EA, N, N, N, N, N, 0, 2, 1),
    p(22, 0, 1, 7, 0x1C04, N, N, N, N, N, 0, 2, 19),
    p(22, 0, 1, 7, 0x161A, N, N, N, N, N, 0, 2, 19),
    p(21, 0, 19, 0, N, N, N, N, N, N, 0, 2, 5),
    p(5, 0, 1, 0, 0x1A42, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B65, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1ACC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1358, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1451, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B25, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19F2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17F4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C0B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14F4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1597, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x06CA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BF5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A83, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17B2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0DA4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1918, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1915, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C6A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x11CA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14D2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A1B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19BA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x178B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x076C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16A0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14CE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C6C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x170C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BFD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1726, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1606, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1549, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C7F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AA9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1396, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x196E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13B8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1537, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1584, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0C7C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1390, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A0B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x177E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0FE6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1583, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1665, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13CF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17F8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x151A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18E8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1620, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14BF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1376, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18D0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1700, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x158E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19F8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B7E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13AA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1937, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x165B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1497, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1500, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19AB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1860, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13E5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x172E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1539, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15CA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x168A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1840, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1880, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0896, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18F3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17CF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x145E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18C8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19F5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1982, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x123E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1210, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1674, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x191A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x171F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AF3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x186F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1953, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17AB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A44, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C2C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x06BE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A30, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17A3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B1E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x094E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1927, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1858, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BDB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14E4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15AD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1430, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19F0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16B2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x122E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17AC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1298, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19CA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B2A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x181F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13A7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AE7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x193E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x193C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B63, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18DA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1936, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18D3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0FA2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1523, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17FE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x169F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18DC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0E06, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15E2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1272, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AB4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18D9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x146E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0AD8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0D06, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x186C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17E3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A02, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A8C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14E7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B97, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1552, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AD4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1386, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A6F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x10D4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B50, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1379, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1952, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14CA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C3A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14EF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14A5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1760, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x07E1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1868, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1486, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C46, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1805, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16A5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0A28, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1965, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B90, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B8B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19E7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14E5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0A26, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1431, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1605, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x142E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13E2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BEB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1951, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x147F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A36, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C2D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18CB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0A8C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1883, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x143D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B5B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14BE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17F0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14EA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B2C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x148F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1574, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1823, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1870, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BBB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19DE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1721, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B16, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x080A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x197A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BDA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C7A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1774, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x06F2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A33, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17EB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x168E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AE0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15F6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14A7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C18, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x11F0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BA2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14C8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C21, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0DB0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BA5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16C4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1891, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AF6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x179B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0E48, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x09D6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1140, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13E1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0D44, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1690, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14C1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1ADA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1909, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1395, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15CF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x161F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B4D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0926, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15EC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x155E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16C3, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A6A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x197E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x11E8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C89, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1507, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x10C6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1220, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x198A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18B4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16A9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AF4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x194B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18E0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BB4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19DD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0CD6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18C9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x07AC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B4B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1354, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x187E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C0A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1372, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17D4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A7C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0776, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1128, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1544, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B0E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18C4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1763, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16DC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1406, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A72, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C52, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AB1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B0A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16AD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0B3A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BE9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x12C2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0AAA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1978, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0BD2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1052, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0BFC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1541, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C40, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0ED4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1156, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0676, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0E1E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x162E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1463, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x182C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B80, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19A9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0CF8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1573, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1590, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0762, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0922, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0C1C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16D7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C19, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A75, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x141D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0BAA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0C58, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x175E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1806, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0AD0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B11, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19A7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1408, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1250, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1772, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x140A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C26, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1448, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1830, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0C3A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C7D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1815, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x160F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16D5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18A7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B56, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0A1E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x103A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1399, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0D1A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16E5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x06D2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1525, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15FC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x12E8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x117C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18D5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0E80, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1769, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0BD4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15F9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x174B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13B4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1418, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1473, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1491, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0C22, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x09C8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0E18, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0D40, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1415, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1863, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19D0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x187D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B59, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1691, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1505, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15AC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B20, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x139C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1588, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0CDC, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15AA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1629, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C68, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1698, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AED, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15E0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1787, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x173B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x178A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x162C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0EAE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0BF8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x066A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x188F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1ACE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B17, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C20, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0834, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19FE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0AC2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19D4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A66, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x07D4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0BC8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x182D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13EA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A95, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1ADD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A7D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x161D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B53, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AE1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17A9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15D0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x141E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BDF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1738, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1466, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x159B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1828, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16C2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x07BA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17D8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1707, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1493, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1388, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1961, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0668, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1020, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C2E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B99, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1457, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x156B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x087C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19A8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1568, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A3F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1683, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0688, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0C36, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1533, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14D5, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1686, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x121E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x183A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0AA6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0FDA, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18FB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1C71, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x15DB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0FAE, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x174A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x196B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13C2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AFF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x199B, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14C2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A53, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0E1C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A1C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1547, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x154E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0C94, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1AA4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A90, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19F7, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x138E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0DE8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0886, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B04, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1873, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x13C8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0B16, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1773, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x06F4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BC2, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x080E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B5C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18A1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1A18, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18F9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1749, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x164F, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1B4E, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0BC4, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BBD, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1BF8, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19A1, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x14C6, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x167C, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x06E0, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1488, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0C80, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0960, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1310, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x18BB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x19FB, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x1809, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16EF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x160A, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x177D, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x16AF, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x17E9, N, N, N, N, N, 0, 2, 1),
    p(5, 0, 1, 0, 0x0F14, N, N, N, N, N, 0, 2, 1),
    p(27, 0, 15, 0, N, N, N, N, N, N, 12, 0, 5),
];

#[rustfmt::skip]
pub static STAGE1: [u32; 4352] = [
    0x0000, 0x0100, 0x0200, 0x0300, 0x0400, 0x0500, 0x0600, 0x0700, 0x0800, 0x0900, 0x0A00, 0x0B00,
    0x0C00, 0x0D00, 0x0E00, 0x0F00, 0x1000, 0x1100, 0x1200, 0x1300, 0x1400, 0x1500, 0x1600, 0x1700,
    0x1800, 0x1900, 0x1A00, 0x1B00, 0x1C00, 0x1D00, 0x1E00, 0x1F00, 0x2000, 0x2100, 0x2200, 0x2300,
    0x2400, 0x2500, 0x2600, 0x2700, 0x2800, 0x2900, 0x2A00, 0x2B00, 0x2C00, 0x2D00, 0x2E00, 0x2F00,
    0x3000, 0x3100, 0x3200, 0x3300, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3500, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3600, 0x3700, 0x3400, 0x3400, 0x3400, 0x3800, 0x1500, 0x3900, 0x3A00,
    0x3B00, 0x3C00, 0x3D00, 0x3E00, 0x3F00, 0x4000, 0x4100, 0x4200, 0x4300, 0x4400, 0x4500, 0x3F00,
    0x4000, 0x4100, 0x4200, 0x4300, 0x4400, 0x4500, 0x3F00, 0x4000, 0x4100, 0x4200, 0x4300, 0x4400,
    0x4500, 0x3F00, 0x4000, 0x4100, 0x4200, 0x4300, 0x4400, 0x4500, 0x3F00, 0x4000, 0x4100, 0x4200,
    0x4300, 0x4400, 0x4500, 0x3F00, 0x4000, 0x4100, 0x4200, 0x4300, 0x4400, 0x4500, 0x3F00, 0x4600,
    0x4700, 0x4700, 0x4700, 0x4700, 0x4700, 0x4700, 0x4700, 0x4700, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4900, 0x4A00, 0x4B00,
    0x4C00, 0x4D00, 0x4E00, 0x4F00, 0x5000, 0x5100, 0x5200, 0x5300, 0x5400, 0x5500, 0x1500, 0x5600,
    0x5700, 0x5800, 0x5900, 0x5A00, 0x5B00, 0x5C00, 0x5D00, 0x5E00, 0x5F00, 0x6000, 0x6100, 0x6200,
    0x6300, 0x6400, 0x6500, 0x6600, 0x6700, 0x6800, 0x6900, 0x6A00, 0x6B00, 0x6C00, 0x6D00, 0x6E00,
    0x1500, 0x1500, 0x1500, 0x6F00, 0x7000, 0x7100, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x1500, 0x1500, 0x1500, 0x1500, 0x7200, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x1500, 0x1500, 0x7300, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x1500, 0x1500, 0x7400, 0x7500, 0x6A00, 0x6A00, 0x7600, 0x7700, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x7800, 0x3400, 0x3400, 0x3400, 0x3400,
    0x7900, 0x7A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x3400, 0x7B00, 0x7C00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x7D00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x7E00, 0x7F00, 0x8000, 0x8100,
    0x8200, 0x8300, 0x8400, 0x8500, 0x2800, 0x2800, 0x8600, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x8700, 0x8800, 0x8900, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x8A00, 0x8B00, 0x6A00, 0x6A00,
    0x8C00, 0x8D00, 0x8E00, 0x6A00, 0x8F00, 0x9000, 0x9100, 0x9200, 0x9300, 0x9400, 0x9500, 0x9600,
    0x9700, 0x9800, 0x9900, 0x9A00, 0x9B00, 0x9B00, 0x9B00, 0x9C00, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x9D00, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x9E00,
    0x9F00, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0xA000, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0xA100, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0xA200, 0xA300, 0xA400, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400,
    0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0x3400, 0xA500, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0xA600, 0xA700, 0xA800, 0xA800,
    0xA800, 0xA800, 0xA800, 0xA800, 0xA800, 0xA800, 0xA800, 0xA800, 0xA800, 0xA800, 0xA800, 0xA800,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00, 0x6A00,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0xA900, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800,
    0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0xA900,
];

#[rustfmt::skip]
pub static STAGE2: [u16; 43520] = [
    0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0002, 0x0003, 0x0002,
    0x0004, 0x0005, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
    0x0001, 0x0001, 0x0001, 0x0001, 0x0006, 0x0006, 0x0006, 0x0002, 0x0007, 0x0008, 0x0008, 0x0009,
    0x000A, 0x0009, 0x0008, 0x0008, 0x000B, 0x000C, 0x0008, 0x000D, 0x000E, 0x000F, 0x000E, 0x000E,
    0x0010, 0x0010, 0x0010, 0x0010, 0x0010, 0x0010, 0x0010, 0x0010, 0x0010, 0x0010, 0x000E, 0x0008,
    0x0011, 0x0012, 0x0013, 0x0008, 0x0008, 0x0014, 0x0015, 0x0016, 0x0017, 0x0018, 0x0019, 0x001A,
    0x001B, 0x001C, 0x001D, 0x001E, 0x001F, 0x0020, 0x0021, 0x0022, 0x0023, 0x0024, 0x0025, 0x0026,
    0x0027, 0x0028, 0x0029, 0x002A, 0x002B, 0x002C, 0x002D, 0x000B, 0x0008, 0x000C, 0x002E, 0x002F,
    0x002E, 0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0x0039, 0x003A,
    0x003B, 0x003C, 0x003D, 0x003E, 0x003F, 0x0040, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046,
    0x0047, 0x0048, 0x0049, 0x000B, 0x004A, 0x000C, 0x004A, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
    0x0001, 0x0006, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
    0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001, 0x0001,
    0x0001, 0x0001, 0x0001, 0x0001, 0x004B, 0x0008, 0x000A, 0x000A, 0x000A, 0x000A, 0x004C, 0x0008,
    0x004D, 0x004E, 0x004F, 0x0050, 0x004A, 0x0051, 0x004E, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056,
    0x0057, 0x0058, 0x0008, 0x0008, 0x0059, 0x005A, 0x005B, 0x005C, 0x005D, 0x005E, 0x005F, 0x0008,
    0x0060, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006A, 0x006B,
    0x006C, 0x006D, 0x006E, 0x006F, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x004A,
    0x0077, 0x0078, 0x0079, 0x007A, 0x007B, 0x007C, 0x007D, 0x007E, 0x007F, 0x0080, 0x0081, 0x0082,
    0x0083, 0x0084, 0x0085, 0x0086, 0x0087, 0x0088, 0x0089, 0x008A, 0x008B, 0x008C, 0x008D, 0x008E,
    0x008F, 0x0090, 0x0091, 0x0092, 0x0093, 0x0094, 0x0095, 0x004A, 0x0096, 0x0097, 0x0098, 0x0099,
    0x009A, 0x009B, 0x009C, 0x009D, 0x009E, 0x009F, 0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x00A4, 0x00A5,
    0x00A6, 0x00A7, 0x00A8, 0x00A9, 0x00AA, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF, 0x00B0, 0x00B1,
    0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7, 0x00B8, 0x00B9, 0x00BA, 0x00BB, 0x00BC, 0x00BD,
    0x00BE, 0x00BF, 0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x00C7, 0x00C8, 0x00C9,
    0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF, 0x00D0, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x00D5,
    0x00D6, 0x00D7, 0x00D8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x00DD, 0x00DE, 0x00DF, 0x00E0, 0x00E1,
    0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x00E7, 0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED,
    0x00EE, 0x00EF, 0x00F0, 0x00F1, 0x00F2, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x00F7, 0x00F8, 0x00F9,
    0x00FA, 0x00FB, 0x00FC, 0x00FD, 0x00FE, 0x00FF, 0x0100, 0x0101, 0x0102, 0x0103, 0x0104, 0x0105,
    0x0106, 0x0107, 0x0108, 0x0109, 0x010A, 0x010B, 0x010C, 0x010D, 0x010E, 0x010F, 0x0110, 0x0111,
    0x0112, 0x0113, 0x0114, 0x0115, 0x0116, 0x0117, 0x0118, 0x0119, 0x011A, 0x011B, 0x011C, 0x011D,
    0x011E, 0x011F, 0x0120, 0x0121, 0x0122, 0x0123, 0x0124, 0x0125, 0x0126, 0x0127, 0x0128, 0x0129,
    0x012A, 0x00D6, 0x012B, 0x012C, 0x012D, 0x012E, 0x012F, 0x0130, 0x0131, 0x0132, 0x0133, 0x0134,
    0x0135, 0x0136, 0x0137, 0x00D6, 0x0138, 0x0139, 0x013A, 0x013B, 0x013C, 0x013D, 0x013E, 0x013F,
    0x0140, 0x0141, 0x0142, 0x0143, 0x0144, 0x0145, 0x00D6, 0x00D6, 0x0146, 0x0147, 0x0148, 0x0149,
    0x014A, 0x014B, 0x014C, 0x014D, 0x014E, 0x014F, 0x0150, 0x0151, 0x0152, 0x0153, 0x00D6, 0x0154,
    0x0155, 0x0156, 0x00D6, 0x0157, 0x0154, 0x0154, 0x0154, 0x0154, 0x0158, 0x0159, 0x015A, 0x015B,
    0x015C, 0x015D, 0x015E, 0x015F, 0x0160, 0x0161, 0x0162, 0x0163, 0x0164, 0x0165, 0x0166, 0x0167,
    0x0168, 0x0169, 0x016A, 0x016B, 0x016C, 0x016D, 0x016E, 0x016F, 0x0170, 0x0171, 0x0172, 0x0173,
    0x0174, 0x0175, 0x0176, 0x0177, 0x0178, 0x0179, 0x017A, 0x017B, 0x017C, 0x017D, 0x017E, 0x017F,
    0x0180, 0x0181, 0x0182, 0x0183, 0x0184, 0x0185, 0x0186, 0x0187, 0x0188, 0x0189, 0x018A, 0x018B,
    0x018C, 0x018D, 0x018E, 0x018F, 0x0190, 0x0191, 0x0192, 0x0193, 0x0194, 0x0195, 0x0196, 0x0197,
    0x0198, 0x0199, 0x019A, 0x019B, 0x019C, 0x019D, 0x019E, 0x019F, 0x01A0, 0x01A1, 0x01A2, 0x01A3,
    0x01A4, 0x01A5, 0x01A6, 0x01A7, 0x01A8, 0x01A9, 0x01AA, 0x01AB, 0x01AC, 0x01AD, 0x01AE, 0x01AF,
    0x01B0, 0x01B1, 0x01B2, 0x01B3, 0x01B4, 0x00D6, 0x01B5, 0x01B6, 0x01B7, 0x01B8, 0x01B9, 0x01BA,
    0x01BB, 0x01BC, 0x01BD, 0x01BE, 0x01BF, 0x01C0, 0x01C1, 0x01C2, 0x01C3, 0x01C4, 0x01C5, 0x01C6,
    0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x01C7, 0x01C8, 0x01C9, 0x01CA, 0x01CB, 0x01CC,
    0x01CD, 0x01CE, 0x01CF, 0x01D0, 0x01D1, 0x01D2, 0x01D3, 0x01D4, 0x01D5, 0x01D6, 0x01D7, 0x01D8,
    0x01D9, 0x01DA, 0x01DB, 0x01DC, 0x01DD, 0x01DE, 0x01DF, 0x01E0, 0x01E1, 0x00D6, 0x01E2, 0x01E3,
    0x00D6, 0x01E4, 0x00D6, 0x01E5, 0x01E6, 0x00D6, 0x00D6, 0x00D6, 0x01E7, 0x01E8, 0x00D6, 0x01E9,
    0x00D6, 0x01EA, 0x01EB, 0x00D6, 0x01EC, 0x01ED, 0x01EE, 0x01EF, 0x01F0, 0x00D6, 0x00D6, 0x01F1,
    0x00D6, 0x01F2, 0x01F3, 0x00D6, 0x00D6, 0x01F4, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6,
    0x00D6, 0x01F5, 0x00D6, 0x00D6, 0x01F6, 0x00D6, 0x01F7, 0x01F8, 0x00D6, 0x00D6, 0x00D6, 0x01F9,
    0x01FA, 0x01FB, 0x01FC, 0x01FD, 0x01FE, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x01FF, 0x00D6,
    0x0154, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x0200, 0x0201, 0x00D6,
    0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6,
    0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x0202, 0x0203, 0x0204, 0x0205, 0x0206, 0x0207, 0x0208, 0x0209,
    0x020A, 0x020B, 0x020B, 0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x002E, 0x002E,
    0x002E, 0x002E, 0x020B, 0x020B, 0x020B, 0x020B, 0x020B, 0x020B, 0x020B, 0x020B, 0x020B, 0x020B,
    0x020C, 0x020C, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x020D, 0x020E, 0x020F, 0x0210,
    0x0211, 0x0212, 0x002E, 0x002E, 0x0213, 0x0214, 0x0215, 0x0216, 0x0217, 0x002E, 0x002E, 0x002E,
    0x002E, 0x002E, 0x002E, 0x002E, 0x020B, 0x002E, 0x020C, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E,
    0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E,
    0x0218, 0x0219, 0x021A, 0x021B, 0x021C, 0x021D, 0x021E, 0x021F, 0x0220, 0x0221, 0x0222, 0x0223,
    0x0224, 0x021D, 0x021D, 0x0225, 0x021D, 0x0226, 0x021D, 0x0227, 0x0228, 0x0229, 0x022A, 0x022A,
    0x022A, 0x022A, 0x0229, 0x022B, 0x022A, 0x022A, 0x022A, 0x022A, 0x022A, 0x022C, 0x022C, 0x022D,
    0x022E, 0x022F, 0x0230, 0x0231, 0x0232, 0x022A, 0x022A, 0x022A, 0x022A, 0x0233, 0x0234, 0x022A,
    0x0235, 0x0236, 0x022A, 0x022A, 0x0237, 0x0237, 0x0237, 0x0237, 0x0238, 0x022A, 0x022A, 0x022A,
    0x022A, 0x021D, 0x021D, 0x021D, 0x0239, 0x023A, 0x023B, 0x023C, 0x023D, 0x023E, 0x021D, 0x022A,
    0x022A, 0x022A, 0x021D, 0x021D, 0x021D, 0x022A, 0x022A, 0x023F, 0x021D, 0x021D, 0x021D, 0x022A,
    0x022A, 0x022A, 0x022A, 0x021D, 0x0229, 0x022A, 0x022A, 0x021D, 0x0240, 0x0241, 0x0241, 0x0240,
    0x0241, 0x0241, 0x0240, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D,
    0x021D, 0x021D, 0x021D, 0x021D, 0x0242, 0x0243, 0x0244, 0x0245, 0x0246, 0x002E, 0x0247, 0x0248,
    0x0000, 0x0000, 0x0249, 0x024A, 0x024B, 0x024C, 0x024D, 0x024E, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0057, 0x024F, 0x0250, 0x0251, 0x0252, 0x0253, 0x0254, 0x0000, 0x0255, 0x0000, 0x0256, 0x0257,
    0x0258, 0x0259, 0x025A, 0x025B, 0x025C, 0x025D, 0x025E, 0x025F, 0x0260, 0x0261, 0x0262, 0x0263,
    0x0264, 0x0265, 0x0266, 0x0267, 0x0268, 0x0269, 0x0000, 0x026A, 0x026B, 0x026C, 0x026D, 0x026E,
    0x026F, 0x0270, 0x0271, 0x0272, 0x0273, 0x0274, 0x0275, 0x0276, 0x0277, 0x0278, 0x0279, 0x027A,
    0x027B, 0x027C, 0x027D, 0x027E, 0x027F, 0x0280, 0x0281, 0x0282, 0x0283, 0x0284, 0x0285, 0x0286,
    0x0287, 0x0288, 0x0289, 0x028A, 0x028B, 0x028C, 0x028D, 0x028E, 0x028F, 0x0290, 0x0291, 0x0292,
    0x0293, 0x0294, 0x0295, 0x0296, 0x0297, 0x0298, 0x0299, 0x029A, 0x029B, 0x029C, 0x029D, 0x029E,
    0x029F, 0x02A0, 0x02A1, 0x02A2, 0x02A3, 0x02A4, 0x02A5, 0x02A6, 0x02A7, 0x02A8, 0x02A9, 0x02AA,
    0x02AB, 0x02AC, 0x02AD, 0x02AE, 0x02AF, 0x02B0, 0x02B1, 0x02B2, 0x02B3, 0x02B4, 0x02B5, 0x02B6,
    0x02B7, 0x02B8, 0x02B9, 0x02BA, 0x02BB, 0x02BC, 0x004A, 0x02BD, 0x02BE, 0x02BF, 0x02C0, 0x02C1,
    0x00D6, 0x02C2, 0x02C3, 0x02C4, 0x02C5, 0x02C6, 0x02C7, 0x02C8, 0x02C9, 0x02CA, 0x02CB, 0x02CC,
    0x02CD, 0x02CE, 0x02CF, 0x02D0, 0x02D1, 0x02D2, 0x02D3, 0x02D4, 0x02D5, 0x02D6, 0x02D7, 0x02D8,
    0x02D9, 0x02DA, 0x02DB, 0x02DC, 0x02DD, 0x02DE, 0x02DF, 0x02E0, 0x02E1, 0x02E2, 0x02E3, 0x02E4,
    0x02E5, 0x02E6, 0x02E7, 0x02E8, 0x02E9, 0x02EA, 0x02EB, 0x02EC, 0x02ED, 0x02EE, 0x02EF, 0x02F0,
    0x02F1, 0x02F2, 0x02F3, 0x02F4, 0x02F5, 0x02F6, 0x02F7, 0x02F8, 0x02F9, 0x02FA, 0x02FB, 0x02FC,
    0x02FD, 0x02FE, 0x02FF, 0x0300, 0x0301, 0x0302, 0x0303, 0x0304, 0x0305, 0x0306, 0x0307, 0x0308,
    0x0309, 0x030A, 0x030B, 0x030C, 0x030D, 0x030E, 0x030F, 0x0310, 0x0311, 0x0312, 0x0313, 0x0314,
    0x0315, 0x0316, 0x0317, 0x0318, 0x0319, 0x031A, 0x031B, 0x031C, 0x031D, 0x031E, 0x031F, 0x0320,
    0x0321, 0x0322, 0x0323, 0x0324, 0x0325, 0x0326, 0x0327, 0x0328, 0x0329, 0x032A, 0x032B, 0x032C,
    0x032D, 0x032E, 0x032F, 0x0330, 0x0331, 0x0332, 0x0333, 0x0334, 0x0335, 0x0336, 0x0337, 0x0338,
    0x0339, 0x033A, 0x033B, 0x033C, 0x033D, 0x033E, 0x033F, 0x0340, 0x0341, 0x0342, 0x0343, 0x0344,
    0x0345, 0x0346, 0x0347, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x0348, 0x0348, 0x0349, 0x034A,
    0x034B, 0x034C, 0x034D, 0x034E, 0x034F, 0x0350, 0x0351, 0x0352, 0x0353, 0x0354, 0x0355, 0x0356,
    0x0357, 0x0358, 0x0359, 0x035A, 0x035B, 0x035C, 0x035D, 0x035E, 0x035F, 0x0360, 0x0361, 0x0362,
    0x0363, 0x0364, 0x0365, 0x0366, 0x0367, 0x0368, 0x0369, 0x036A, 0x036B, 0x036C, 0x036D, 0x036E,
    0x036F, 0x0370, 0x0371, 0x0372, 0x0373, 0x0374, 0x0375, 0x0376, 0x0377, 0x0378, 0x0379, 0x037A,
    0x037B, 0x037C, 0x037D, 0x037E, 0x037F, 0x0380, 0x0381, 0x0382, 0x0383, 0x0384, 0x0385, 0x0386,
    0x0387, 0x0388, 0x0389, 0x038A, 0x038B, 0x038C, 0x038D, 0x038E, 0x038F, 0x0390, 0x0391, 0x0392,
    0x0393, 0x0394, 0x0395, 0x0396, 0x0397, 0x0398, 0x0399, 0x039A, 0x039B, 0x039C, 0x039D, 0x039E,
    0x039F, 0x03A0, 0x03A1, 0x03A2, 0x03A3, 0x03A4, 0x03A5, 0x03A6, 0x03A7, 0x03A8, 0x03A9, 0x03AA,
    0x03AB, 0x03AC, 0x03AD, 0x03AE, 0x03AF, 0x03B0, 0x03B1, 0x03B2, 0x03B3, 0x03B4, 0x03B5, 0x03B6,
    0x03B7, 0x03B8, 0x03B9, 0x03BA, 0x03BB, 0x03BC, 0x03BD, 0x03BE, 0x03BF, 0x03C0, 0x03C1, 0x03C2,
    0x03C3, 0x03C4, 0x03C5, 0x03C6, 0x03C7, 0x03C8, 0x03C9, 0x03CA, 0x03CB, 0x03CC, 0x03CD, 0x03CE,
    0x03CF, 0x03D0, 0x03D1, 0x03D2, 0x03D3, 0x03D4, 0x03D5, 0x03D6, 0x03D7, 0x03D8, 0x03D9, 0x03DA,
    0x03DB, 0x03DC, 0x03DD, 0x03DE, 0x03DF, 0x03E0, 0x03E1, 0x03E2, 0x03E3, 0x03E4, 0x03E5, 0x03E6,
    0x03E7, 0x03E8, 0x03E9, 0x03EA, 0x03EB, 0x03EC, 0x03ED, 0x03EE, 0x0000, 0x03EF, 0x03F0, 0x03F1,
    0x03F2, 0x03F3, 0x03F4, 0x03F5, 0x03F6, 0x03F7, 0x03F8, 0x03F9, 0x03FA, 0x03FB, 0x03FC, 0x03FD,
    0x03FE, 0x03FF, 0x0400, 0x0401, 0x0402, 0x0403, 0x0404, 0x0405, 0x0406, 0x0407, 0x0408, 0x0409,
    0x040A, 0x040B, 0x040C, 0x040D, 0x040E, 0x040F, 0x0410, 0x0411, 0x0412, 0x0413, 0x0414, 0x0000,
    0x0000, 0x020C, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x00D6, 0x0416, 0x0417, 0x0418,
    0x0419, 0x041A, 0x041B, 0x041C, 0x041D, 0x041E, 0x041F, 0x0420, 0x0421, 0x0422, 0x0423, 0x0424,
    0x0425, 0x0426, 0x0427, 0x0428, 0x0429, 0x042A, 0x042B, 0x042C, 0x042D, 0x042E, 0x042F, 0x0430,
    0x0431, 0x0432, 0x0433, 0x0434, 0x0435, 0x0436, 0x0437, 0x0438, 0x0439, 0x043A, 0x043B, 0x043C,
    0x00D6, 0x0415, 0x043D, 0x0000, 0x0000, 0x004C, 0x004C, 0x000A, 0x0000, 0x022A, 0x021D, 0x021D,
    0x021D, 0x021D, 0x022A, 0x021D, 0x021D, 0x021D, 0x043E, 0x022A, 0x021D, 0x021D, 0x021D, 0x021D,
    0x021D, 0x021D, 0x022A, 0x022A, 0x022A, 0x022A, 0x022A, 0x022A, 0x021D, 0x021D, 0x022A, 0x021D,
    0x021D, 0x043E, 0x043F, 0x021D, 0x0440, 0x0441, 0x0442, 0x0443, 0x0444, 0x0445, 0x0446, 0x0447,
    0x0448, 0x0449, 0x044A, 0x044B, 0x044C, 0x044D, 0x044E, 0x044F, 0x0450, 0x0451, 0x0452, 0x0450,
    0x021D, 0x022A, 0x0450, 0x0453, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0454, 0x0455, 0x0456, 0x0457, 0x0458, 0x0459, 0x045A, 0x045B, 0x045C, 0x045D, 0x045E, 0x045F,
    0x0460, 0x045B, 0x0461, 0x045B, 0x0462, 0x0463, 0x045B, 0x0464, 0x0465, 0x045B, 0x0466, 0x0467,
    0x0468, 0x0469, 0x046A, 0x0000, 0x0000, 0x0000, 0x0000, 0x045B, 0x045B, 0x045B, 0x046B, 0x0450,
    0x0450, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x046C, 0x046C, 0x046C, 0x046C, 0x046C, 0x046C, 0x004A, 0x004A, 0x046D, 0x0009, 0x0009, 0x046E,
    0x000E, 0x046F, 0x004C, 0x004C, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D,
    0x0470, 0x0471, 0x0472, 0x046F, 0x0473, 0x0000, 0x046F, 0x046F, 0x0474, 0x0474, 0x0475, 0x0476,
    0x0477, 0x0478, 0x0479, 0x047A, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x047B, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x047C, 0x0474, 0x047D, 0x047E, 0x047F, 0x0480, 0x0470, 0x0471, 0x0472, 0x0481, 0x0482, 0x0483,
    0x0484, 0x0485, 0x022A, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x022A, 0x021D, 0x021D, 0x022A,
    0x0486, 0x0486, 0x0486, 0x0486, 0x0486, 0x0486, 0x0486, 0x0486, 0x0486, 0x0486, 0x0009, 0x0487,
    0x0487, 0x046F, 0x0474, 0x0474, 0x0488, 0x0474, 0x0474, 0x0474, 0x0474, 0x0489, 0x048A, 0x048B,
    0x048C, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x048D, 0x048E, 0x048F, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0490, 0x0491, 0x046F, 0x0492, 0x021D, 0x021D,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x046C, 0x004C, 0x021D, 0x021D, 0x021D, 0x021D, 0x022A,
    0x021D, 0x047B, 0x047B, 0x021D, 0x021D, 0x004C, 0x022A, 0x021D, 0x021D, 0x022A, 0x0474, 0x0474,
    0x0010, 0x0010, 0x0010, 0x0010, 0x0010, 0x0010, 0x0010, 0x0010, 0x0010, 0x0010, 0x0474, 0x0474,
    0x0474, 0x0493, 0x0493, 0x0474, 0x046F, 0x046F, 0x046F, 0x046F, 0x046F, 0x046F, 0x046F, 0x046F,
    0x046F, 0x046F, 0x046F, 0x046F, 0x046F, 0x046F, 0x0000, 0x0494, 0x0474, 0x0495, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x021D, 0x022A, 0x021D, 0x021D, 0x022A, 0x021D, 0x021D, 0x022A,
    0x022A, 0x022A, 0x021D, 0x022A, 0x022A, 0x021D, 0x022A, 0x021D, 0x021D, 0x021D, 0x022A, 0x021D,
    0x022A, 0x021D, 0x022A, 0x021D, 0x022A, 0x021D, 0x021D, 0x0000, 0x0000, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0474, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0497, 0x0497, 0x0497, 0x0497, 0x0497, 0x0497, 0x0497, 0x0497,
    0x0497, 0x0497, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x021D,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x022A, 0x021D, 0x0498, 0x0498, 0x004C, 0x0008,
    0x0008, 0x0008, 0x0498, 0x0000, 0x0000, 0x022A, 0x0499, 0x0499, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x021D, 0x021D, 0x021D, 0x021D, 0x0498, 0x021D,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x0498, 0x021D, 0x021D, 0x021D,
    0x0498, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x0000, 0x0000, 0x0450, 0x0450, 0x0450, 0x0450,
    0x0450, 0x0450, 0x0450, 0x0450, 0x0450, 0x0450, 0x0450, 0x0450, 0x0450, 0x0450, 0x0450, 0x0000,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x022A, 0x022A, 0x022A, 0x0000, 0x0000, 0x0450, 0x0000, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0000, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x022A, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x046C, 0x022A, 0x021D, 0x021D, 0x022A, 0x021D,
    0x021D, 0x022A, 0x021D, 0x021D, 0x021D, 0x022A, 0x022A, 0x022A, 0x047E, 0x047F, 0x0480, 0x021D,
    0x021D, 0x021D, 0x022A, 0x021D, 0x021D, 0x022A, 0x022A, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D,
    0x0496, 0x0496, 0x0496, 0x049A, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x049B, 0x049C, 0x049D,
    0x0154, 0x0154, 0x0154, 0x0154, 0x049E, 0x0154, 0x0154, 0x0154, 0x0154, 0x049F, 0x04A0, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x04A1, 0x04A2, 0x0154, 0x04A3, 0x0154, 0x0154, 0x0154, 0x04A4,
    0x04A5, 0x04A6, 0x0154, 0x04A7, 0x04A8, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496, 0x049A,
    0x04A9, 0x0154, 0x049A, 0x049A, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x049A, 0x049A, 0x049A, 0x049A, 0x04AA, 0x049A, 0x049A, 0x0154, 0x021D, 0x022A, 0x021D,
    0x021D, 0x0496, 0x0496, 0x0496, 0x04AB, 0x04AC, 0x04AD, 0x04AE, 0x04AF, 0x04B0, 0x04B1, 0x04B2,
    0x0154, 0x0154, 0x0496, 0x0496, 0x0415, 0x0415, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0415, 0x020C, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496, 0x049A, 0x049A,
    0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0154,
    0x0154, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x04B4, 0x04B5, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x04B6, 0x0154, 0x0000, 0x0154, 0x0000,
    0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x04B7, 0x0154, 0x04B8, 0x049A,
    0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x0000, 0x0000, 0x04B9, 0x049A, 0x0000, 0x0000, 0x04BA,
    0x04BB, 0x04AA, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04BC,
    0x0000, 0x0000, 0x0000, 0x0000, 0x04BD, 0x04BE, 0x0000, 0x04BF, 0x0154, 0x0154, 0x0496, 0x0496,
    0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x0154, 0x0154, 0x000A, 0x000A, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x0347, 0x000A,
    0x0154, 0x0415, 0x021D, 0x0000, 0x0000, 0x0496, 0x0496, 0x049A, 0x0000, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0000, 0x0000, 0x0154,
    0x0154, 0x0154, 0x04C1, 0x04C2, 0x0154, 0x0154, 0x0154, 0x0154, 0x04C3, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x04C4,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x04C5, 0x04C6, 0x0000, 0x0154, 0x04C7, 0x0000,
    0x04C8, 0x0154, 0x0000, 0x0000, 0x04C9, 0x0000, 0x049A, 0x049A, 0x049A, 0x0496, 0x0496, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0496, 0x0496, 0x0000, 0x0000, 0x0496, 0x0496, 0x04AA, 0x0000, 0x0000,
    0x0000, 0x0496, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04CA, 0x04CB, 0x04CC,
    0x0154, 0x0000, 0x04CD, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0496, 0x0496, 0x0154, 0x0154,
    0x0154, 0x0496, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0496, 0x0496, 0x049A, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000,
    0x04CE, 0x0154, 0x049A, 0x049A, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0000, 0x0496,
    0x0496, 0x049A, 0x0000, 0x049A, 0x049A, 0x04AA, 0x0000, 0x0000, 0x0154, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0496, 0x0496, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0415, 0x000A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0154, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0000, 0x0496, 0x049A, 0x049A,
    0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0154,
    0x0154, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x04CF, 0x04D0, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154,
    0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x04D1, 0x0154, 0x04D2, 0x0496,
    0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x0000, 0x0000, 0x04D3, 0x04D4, 0x0000, 0x0000, 0x04D5,
    0x04D6, 0x04AA, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0496, 0x04D7, 0x04D8,
    0x0000, 0x0000, 0x0000, 0x0000, 0x04D9, 0x04DA, 0x0000, 0x0154, 0x0154, 0x0154, 0x0496, 0x0496,
    0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x0347, 0x0154, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0496, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0000, 0x04DB, 0x0154,
    0x04DC, 0x0154, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0000, 0x0154, 0x0000, 0x0154, 0x0154,
    0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0000,
    0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x04DD, 0x049A, 0x0496, 0x049A, 0x049A, 0x0000,
    0x0000, 0x0000, 0x04DE, 0x04DF, 0x049A, 0x0000, 0x04E0, 0x04E1, 0x04E2, 0x04AA, 0x0000, 0x0000,
    0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04E3, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04C0, 0x04C0, 0x04C0, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x000A, 0x004C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0496, 0x049A, 0x049A, 0x049A, 0x0496, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000,
    0x0000, 0x0154, 0x0496, 0x0496, 0x0496, 0x049A, 0x049A, 0x049A, 0x049A, 0x0000, 0x04E4, 0x0496,
    0x04E5, 0x0000, 0x0496, 0x0496, 0x0496, 0x04AA, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x04E6, 0x04E7, 0x0000, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0496, 0x0496, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0415,
    0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x0347, 0x0154, 0x0496, 0x049A, 0x049A,
    0x0415, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x04CE, 0x0154, 0x049A, 0x04E9,
    0x04EA, 0x049A, 0x04EB, 0x049A, 0x049A, 0x0000, 0x04EC, 0x04ED, 0x04EE, 0x0000, 0x04EF, 0x04F0,
    0x0496, 0x04AA, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04F1, 0x04F2, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0000, 0x0154, 0x0154, 0x0496, 0x0496,
    0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x0000, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0496, 0x0496, 0x049A, 0x049A, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x04AA, 0x04AA, 0x0154, 0x04F3, 0x049A, 0x049A, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0000, 0x04F4, 0x04F5, 0x049A, 0x0000, 0x04F6, 0x04F7, 0x04F8, 0x04AA, 0x04F9, 0x0347,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x04FA, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x0154, 0x0154, 0x0154, 0x0496, 0x0496, 0x0000, 0x0000, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x0347, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0000, 0x0496, 0x049A, 0x049A, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000,
    0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0000, 0x0154, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000,
    0x0000, 0x0000, 0x04FB, 0x0000, 0x0000, 0x0000, 0x0000, 0x04FC, 0x049A, 0x049A, 0x0496, 0x0496,
    0x0496, 0x0000, 0x0496, 0x0000, 0x049A, 0x04FD, 0x04FE, 0x049A, 0x04FF, 0x0500, 0x0501, 0x0502,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0000, 0x0000, 0x049A, 0x049A, 0x0415, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496, 0x0154, 0x0503,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0504, 0x0504, 0x04AA, 0x0000, 0x0000, 0x0000, 0x0000, 0x000A,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x020C, 0x0496, 0x0505, 0x0505, 0x0505, 0x0505,
    0x0496, 0x0496, 0x0496, 0x0415, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x0415, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0000, 0x0154, 0x0000, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496, 0x0154, 0x0506, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0507, 0x0507, 0x04AA, 0x0496, 0x0496, 0x0154, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0000, 0x020C, 0x0000, 0x0508, 0x0508, 0x0508, 0x0508, 0x0496, 0x0496, 0x0000, 0x0000,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0000, 0x0000,
    0x0509, 0x050A, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0347, 0x0347, 0x0347, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415,
    0x050B, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0347, 0x0415, 0x0347, 0x0347, 0x0347,
    0x022A, 0x022A, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x0347, 0x022A, 0x0347, 0x022A, 0x0347, 0x050C, 0x000B, 0x000C,
    0x000B, 0x000C, 0x049A, 0x049A, 0x050D, 0x0154, 0x050E, 0x050F, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0000, 0x0154, 0x0154, 0x0154, 0x0510, 0x0511, 0x0154, 0x0154, 0x0154, 0x0512, 0x0513, 0x0154,
    0x0154, 0x0154, 0x0514, 0x0515, 0x0154, 0x0154, 0x0154, 0x0516, 0x0517, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0518, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0519, 0x051A, 0x051B, 0x051C, 0x051D, 0x051E, 0x051F,
    0x0520, 0x0521, 0x051A, 0x051A, 0x051A, 0x051A, 0x0496, 0x049A, 0x0522, 0x0523, 0x021D, 0x021D,
    0x04AA, 0x0415, 0x021D, 0x021D, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496, 0x0496, 0x0496,
    0x0524, 0x0496, 0x0525, 0x0526, 0x0496, 0x0496, 0x0496, 0x0496, 0x0000, 0x0496, 0x0496, 0x0496,
    0x0527, 0x0528, 0x0496, 0x0496, 0x0496, 0x0529, 0x052A, 0x0496, 0x0496, 0x0496, 0x052B, 0x052C,
    0x0496, 0x0496, 0x0496, 0x052D, 0x052E, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x052F, 0x0530,
    0x0496, 0x0531, 0x0496, 0x0532, 0x0496, 0x0533, 0x0496, 0x0496, 0x0496, 0x0000, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x022A, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0000, 0x0347, 0x0347, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0415, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0534, 0x0535, 0x0154, 0x0154, 0x0154, 0x0154, 0x0536,
    0x0536, 0x0496, 0x0537, 0x0496, 0x0496, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x04CE,
    0x0536, 0x04AA, 0x04AA, 0x049A, 0x049A, 0x0496, 0x0496, 0x0154, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x049A, 0x049A, 0x0496, 0x0496, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0496, 0x0496, 0x0496, 0x0154, 0x0536, 0x0536, 0x0536, 0x0154, 0x0154, 0x0536,
    0x0536, 0x0536, 0x0536, 0x0536, 0x0536, 0x0536, 0x0154, 0x0154, 0x0154, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0496, 0x0536, 0x049A, 0x0496, 0x0496, 0x0536, 0x0536, 0x0536, 0x0536, 0x0536,
    0x0536, 0x022A, 0x0154, 0x0536, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x0536, 0x0536, 0x0536, 0x0496, 0x0347, 0x0347, 0x0538, 0x0539, 0x053A, 0x053B,
    0x053C, 0x053D, 0x053E, 0x053F, 0x0540, 0x0541, 0x0542, 0x0543, 0x0544, 0x0545, 0x0546, 0x0547,
    0x0548, 0x0549, 0x054A, 0x054B, 0x054C, 0x054D, 0x054E, 0x054F, 0x0550, 0x0551, 0x0552, 0x0553,
    0x0554, 0x0555, 0x0556, 0x0557, 0x0558, 0x0559, 0x055A, 0x055B, 0x055C, 0x055D, 0x0000, 0x055E,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x055F, 0x0000, 0x0000, 0x0560, 0x0561, 0x0562, 0x0563,
    0x0564, 0x0565, 0x0566, 0x0567, 0x0568, 0x0569, 0x056A, 0x056B, 0x056C, 0x056D, 0x056E, 0x056F,
    0x0570, 0x0571, 0x0572, 0x0573, 0x0574, 0x0575, 0x0576, 0x0577, 0x0578, 0x0579, 0x057A, 0x057B,
    0x057C, 0x057D, 0x057E, 0x057F, 0x0580, 0x0581, 0x0582, 0x0583, 0x0584, 0x0585, 0x0586, 0x0587,
    0x0588, 0x0589, 0x058A, 0x0415, 0x058B, 0x058C, 0x058D, 0x058E, 0x058F, 0x058F, 0x058F, 0x058F,
    0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F,
    0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F,
    0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F,
    0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F,
    0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F,
    0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F,
    0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F,
    0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x0590, 0x0591, 0x0592, 0x0592, 0x0592,
    0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592,
    0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592,
    0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592,
    0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592,
    0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592,
    0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0593, 0x0593, 0x0593, 0x0593,
    0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593,
    0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593,
    0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593,
    0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593,
    0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593,
    0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593,
    0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000,
    0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000,
    0x0000, 0x021D, 0x021D, 0x021D, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415,
    0x0415, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0594, 0x0595, 0x0596, 0x0597,
    0x0598, 0x0599, 0x059A, 0x059B, 0x059C, 0x059D, 0x059E, 0x059F, 0x05A0, 0x05A1, 0x05A2, 0x05A3,
    0x05A4, 0x05A5, 0x05A6, 0x05A7, 0x05A8, 0x05A9, 0x05AA, 0x05AB, 0x05AC, 0x05AD, 0x05AE, 0x05AF,
    0x05B0, 0x05B1, 0x05B2, 0x05B3, 0x05B4, 0x05B5, 0x05B6, 0x05B7, 0x05B8, 0x05B9, 0x05BA, 0x05BB,
    0x05BC, 0x05BD, 0x05BE, 0x05BF, 0x05C0, 0x05C1, 0x05C2, 0x05C3, 0x05C4, 0x05C5, 0x05C6, 0x05C7,
    0x05C8, 0x05C9, 0x05CA, 0x05CB, 0x05CC, 0x05CD, 0x05CE, 0x05CF, 0x05D0, 0x05D1, 0x05D2, 0x05D3,
    0x05D4, 0x05D5, 0x05D6, 0x05D7, 0x05D8, 0x05D9, 0x05DA, 0x05DB, 0x05DC, 0x05DD, 0x05DE, 0x05DF,
    0x05E0, 0x05E1, 0x05E2, 0x05E3, 0x05E4, 0x05E5, 0x05E6, 0x05E7, 0x05E8, 0x05E9, 0x0000, 0x0000,
    0x05EA, 0x05EB, 0x05EC, 0x05ED, 0x05EE, 0x05EF, 0x0000, 0x0000, 0x043D, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0347, 0x0415, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0007, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x000B, 0x000C, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0415,
    0x0415, 0x0415, 0x05F0, 0x05F0, 0x05F0, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0496, 0x0496, 0x04AA, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496, 0x0496,
    0x04AA, 0x0415, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496, 0x0496, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0496, 0x0496, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x023F, 0x023F, 0x049A, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A,
    0x049A, 0x049A, 0x0496, 0x049A, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x04AA, 0x0496, 0x0415, 0x0415, 0x0415, 0x020C, 0x0415, 0x0415, 0x0415, 0x000A,
    0x0154, 0x021D, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04E8, 0x04E8, 0x04E8, 0x04E8,
    0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x043D, 0x0008, 0x0008, 0x0008, 0x0008, 0x023F,
    0x023F, 0x023F, 0x05F1, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x020C, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0496, 0x0496, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x043F, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000,
    0x0496, 0x0496, 0x0496, 0x049A, 0x049A, 0x049A, 0x049A, 0x0496, 0x0496, 0x049A, 0x049A, 0x049A,
    0x0000, 0x0000, 0x0000, 0x0000, 0x049A, 0x049A, 0x0496, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A,
    0x049A, 0x043E, 0x021D, 0x022A, 0x0000, 0x0000, 0x0000, 0x0000, 0x004C, 0x0000, 0x0000, 0x0000,
    0x0008, 0x0008, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04C0, 0x0000, 0x0000, 0x0000, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x021D, 0x022A, 0x049A, 0x049A, 0x0496,
    0x0000, 0x0000, 0x0415, 0x0415, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x049A, 0x0496, 0x049A,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0000, 0x04AA, 0x0536, 0x0496, 0x0536,
    0x0536, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x049A, 0x049A, 0x049A,
    0x049A, 0x049A, 0x049A, 0x0496, 0x0496, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D,
    0x021D, 0x0000, 0x0000, 0x022A, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x020C, 0x0415, 0x0415, 0x0415, 0x0415,
    0x0415, 0x0415, 0x0000, 0x0000, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x022A, 0x022A, 0x022A,
    0x022A, 0x022A, 0x022A, 0x021D, 0x021D, 0x022A, 0x0348, 0x022A, 0x022A, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0496, 0x0496, 0x0496, 0x0496, 0x049A, 0x05F2, 0x05F3, 0x05F4, 0x05F5, 0x05F6, 0x05F7, 0x05F8,
    0x05F9, 0x05FA, 0x05FB, 0x0154, 0x0154, 0x05FC, 0x05FD, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x04CE, 0x05FE, 0x0496, 0x0496, 0x0496, 0x0496, 0x05FF, 0x0600,
    0x0601, 0x0602, 0x0603, 0x0604, 0x0605, 0x0606, 0x0607, 0x0608, 0x0609, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415,
    0x0415, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x021D,
    0x022A, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0000, 0x0000, 0x0000, 0x0496, 0x0496, 0x049A, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x049A, 0x049A,
    0x0496, 0x0496, 0x0609, 0x04AA, 0x0496, 0x0496, 0x0154, 0x0154, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x04CE, 0x049A, 0x0496, 0x0496, 0x049A, 0x049A, 0x049A, 0x0496, 0x049A, 0x0496,
    0x0496, 0x0496, 0x0609, 0x0609, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0415, 0x0415, 0x0415, 0x0415, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x049A, 0x049A, 0x0496, 0x04CE,
    0x0000, 0x0000, 0x0000, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x0415, 0x0415,
    0x060A, 0x060B, 0x060C, 0x060D, 0x060E, 0x060E, 0x060F, 0x0610, 0x0611, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0612, 0x0613, 0x0614, 0x0615, 0x0616, 0x0617, 0x0618, 0x0619,
    0x061A, 0x061B, 0x061C, 0x061D, 0x061E, 0x061F, 0x0620, 0x0621, 0x0622, 0x0623, 0x0624, 0x0625,
    0x0626, 0x0627, 0x0628, 0x0629, 0x062A, 0x062B, 0x062C, 0x062D, 0x062E, 0x062F, 0x0630, 0x0631,
    0x0632, 0x0633, 0x0634, 0x0635, 0x0636, 0x0637, 0x0638, 0x0639, 0x063A, 0x063B, 0x063C, 0x0000,
    0x0000, 0x063D, 0x063E, 0x063F, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x021D, 0x021D, 0x021D, 0x0415,
    0x0237, 0x022A, 0x022A, 0x022A, 0x022A, 0x022A, 0x021D, 0x021D, 0x022A, 0x022A, 0x022A, 0x022A,
    0x021D, 0x049A, 0x0237, 0x0237, 0x0237, 0x0237, 0x0237, 0x0237, 0x0237, 0x0154, 0x0154, 0x0154,
    0x0154, 0x022A, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x021D, 0x0154, 0x0154, 0x049A,
    0x021D, 0x021D, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00D6, 0x00D6, 0x00D6, 0x00D6,
    0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6,
    0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6,
    0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6,
    0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x0640, 0x0641, 0x0642, 0x020C, 0x0643, 0x0644, 0x0645, 0x0646,
    0x0647, 0x0648, 0x0649, 0x064A, 0x064B, 0x064C, 0x064D, 0x020C, 0x064E, 0x064F, 0x0650, 0x0651,
    0x0652, 0x0653, 0x0654, 0x0655, 0x0656, 0x0657, 0x0658, 0x0659, 0x065A, 0x065B, 0x065C, 0x065D,
    0x065E, 0x065F, 0x020C, 0x0660, 0x0661, 0x0662, 0x0663, 0x0664, 0x0665, 0x0666, 0x0667, 0x0668,
    0x0669, 0x066A, 0x066B, 0x066C, 0x066D, 0x066E, 0x066F, 0x0670, 0x0671, 0x0672, 0x0673, 0x0674,
    0x0675, 0x0676, 0x0677, 0x0678, 0x0679, 0x067A, 0x067B, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6,
    0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x067C, 0x067D, 0x00D6, 0x00D6,
    0x00D6, 0x067E, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6,
    0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x067F, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6,
    0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x0680, 0x0681, 0x0682, 0x0683, 0x065E,
    0x0684, 0x0685, 0x0686, 0x0687, 0x0688, 0x0689, 0x068A, 0x068B, 0x068C, 0x068D, 0x068E, 0x068F,
    0x0690, 0x0691, 0x0692, 0x0693, 0x0694, 0x0695, 0x0696, 0x0697, 0x0698, 0x0699, 0x069A, 0x069B,
    0x069C, 0x069D, 0x069E, 0x069F, 0x06A0, 0x06A1, 0x06A2, 0x06A3, 0x021D, 0x021D, 0x022A, 0x021D,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x022A, 0x021D, 0x021D, 0x0241, 0x06A4, 0x022A,
    0x022C, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D,
    0x021D, 0x021D, 0x0229, 0x043F, 0x043F, 0x022A, 0x0000, 0x021D, 0x0240, 0x022A, 0x021D, 0x022A,
    0x06A5, 0x06A6, 0x06A7, 0x06A8, 0x06A9, 0x06AA, 0x06AB, 0x06AC, 0x06AD, 0x06AE, 0x06AF, 0x06B0,
    0x06B1, 0x06B2, 0x06B3, 0x06B4, 0x06B5, 0x06B6, 0x06B7, 0x06B8, 0x06B9, 0x06BA, 0x06BB, 0x06BC,
    0x06BD, 0x06BE, 0x06BF, 0x06C0, 0x06C1, 0x06C2, 0x06C3, 0x06C4, 0x06C5, 0x06C6, 0x06C7, 0x06C8,
    0x06C9, 0x06CA, 0x06CB, 0x06CC, 0x06CD, 0x06CE, 0x06CF, 0x06D0, 0x06D1, 0x06D2, 0x06D3, 0x06D4,
    0x06D5, 0x06D6, 0x06D7, 0x06D8, 0x06D9, 0x06DA, 0x06DB, 0x06DC, 0x06DD, 0x06DE, 0x06DF, 0x06E0,
    0x06E1, 0x06E2, 0x06E3, 0x06E4, 0x06E5, 0x06E6, 0x06E7, 0x06E8, 0x06E9, 0x06EA, 0x06EB, 0x06EC,
    0x06ED, 0x06EE, 0x06EF, 0x06F0, 0x06F1, 0x06F2, 0x06F3, 0x06F4, 0x06F5, 0x06F6, 0x06F7, 0x06F8,
    0x06F9, 0x06FA, 0x06FB, 0x06FC, 0x06FD, 0x06FE, 0x06FF, 0x0700, 0x0701, 0x0702, 0x0703, 0x0704,
    0x0705, 0x0706, 0x0707, 0x0708, 0x0709, 0x070A, 0x070B, 0x070C, 0x070D, 0x070E, 0x070F, 0x0710,
    0x0711, 0x0712, 0x0713, 0x0714, 0x0715, 0x0716, 0x0717, 0x0718, 0x0719, 0x071A, 0x071B, 0x071C,
    0x071D, 0x071E, 0x071F, 0x0720, 0x0721, 0x0722, 0x0723, 0x0724, 0x0725, 0x0726, 0x0727, 0x0728,
    0x0729, 0x072A, 0x072B, 0x072C, 0x072D, 0x072E, 0x072F, 0x0730, 0x0731, 0x0732, 0x0733, 0x0734,
    0x0735, 0x0736, 0x0737, 0x0738, 0x0739, 0x073A, 0x073B, 0x073C, 0x073D, 0x073E, 0x073F, 0x0740,
    0x00D6, 0x00D6, 0x0741, 0x00D6, 0x0742, 0x0743, 0x0744, 0x0745, 0x0746, 0x0747, 0x0748, 0x0749,
    0x074A, 0x074B, 0x074C, 0x074D, 0x074E, 0x074F, 0x0750, 0x0751, 0x0752, 0x0753, 0x0754, 0x0755,
    0x0756, 0x0757, 0x0758, 0x0759, 0x075A, 0x075B, 0x075C, 0x075D, 0x075E, 0x075F, 0x0760, 0x0761,
    0x0762, 0x0763, 0x0764, 0x0765, 0x0766, 0x0767, 0x0768, 0x0769, 0x076A, 0x076B, 0x076C, 0x076D,
    0x076E, 0x076F, 0x0770, 0x0771, 0x0772, 0x0773, 0x0774, 0x0775, 0x0776, 0x0777, 0x0778, 0x0779,
    0x077A, 0x077B, 0x077C, 0x077D, 0x077E, 0x077F, 0x0780, 0x0781, 0x0782, 0x0783, 0x0784, 0x0785,
    0x0786, 0x0787, 0x0788, 0x0789, 0x078A, 0x078B, 0x078C, 0x078D, 0x078E, 0x078F, 0x0790, 0x0791,
    0x0792, 0x0793, 0x0794, 0x0795, 0x0796, 0x0797, 0x0798, 0x0799, 0x079A, 0x079B, 0x079C, 0x079D,
    0x079E, 0x079F, 0x07A0, 0x07A1, 0x07A2, 0x07A3, 0x07A4, 0x07A5, 0x07A6, 0x07A7, 0x07A8, 0x07A9,
    0x07AA, 0x07AB, 0x07AC, 0x07AD, 0x07AE, 0x07AF, 0x07B0, 0x07B1, 0x07B2, 0x07B3, 0x07B4, 0x07B5,
    0x07B6, 0x07B7, 0x0000, 0x0000, 0x07B8, 0x07B9, 0x07BA, 0x07BB, 0x07BC, 0x07BD, 0x0000, 0x0000,
    0x07BE, 0x07BF, 0x07C0, 0x07C1, 0x07C2, 0x07C3, 0x07C4, 0x07C5, 0x07C6, 0x07C7, 0x07C8, 0x07C9,
    0x07CA, 0x07CB, 0x07CC, 0x07CD, 0x07CE, 0x07CF, 0x07D0, 0x07D1, 0x07D2, 0x07D3, 0x07D4, 0x07D5,
    0x07D6, 0x07D7, 0x07D8, 0x07D9, 0x07DA, 0x07DB, 0x07DC, 0x07DD, 0x07DE, 0x07DF, 0x07E0, 0x07E1,
    0x07E2, 0x07E3, 0x0000, 0x0000, 0x07E4, 0x07E5, 0x07E6, 0x07E7, 0x07E8, 0x07E9, 0x0000, 0x0000,
    0x07EA, 0x07EB, 0x07EC, 0x07ED, 0x07EE, 0x07EF, 0x07F0, 0x07F1, 0x0000, 0x07F2, 0x0000, 0x07F3,
    0x0000, 0x07F4, 0x0000, 0x07F5, 0x07F6, 0x07F7, 0x07F8, 0x07F9, 0x07FA, 0x07FB, 0x07FC, 0x07FD,
    0x07FE, 0x07FF, 0x0800, 0x0801, 0x0802, 0x0803, 0x0804, 0x0805, 0x0806, 0x0807, 0x0808, 0x0809,
    0x080A, 0x080B, 0x080C, 0x080D, 0x080E, 0x080F, 0x0810, 0x0811, 0x0812, 0x0813, 0x0000, 0x0000,
    0x0814, 0x0815, 0x0816, 0x0817, 0x0818, 0x0819, 0x081A, 0x081B, 0x081C, 0x081D, 0x081E, 0x081F,
    0x0820, 0x0821, 0x0822, 0x0823, 0x0824, 0x0825, 0x0826, 0x0827, 0x0828, 0x0829, 0x082A, 0x082B,
    0x082C, 0x082D, 0x082E, 0x082F, 0x0830, 0x0831, 0x0832, 0x0833, 0x0834, 0x0835, 0x0836, 0x0837,
    0x0838, 0x0839, 0x083A, 0x083B, 0x083C, 0x083D, 0x083E, 0x083F, 0x0840, 0x0841, 0x0842, 0x0843,
    0x0844, 0x0845, 0x0846, 0x0847, 0x0848, 0x0000, 0x0849, 0x084A, 0x084B, 0x084C, 0x084D, 0x084E,
    0x084F, 0x0850, 0x0851, 0x0852, 0x0853, 0x0854, 0x0855, 0x0856, 0x0857, 0x0000, 0x0858, 0x0859,
    0x085A, 0x085B, 0x085C, 0x085D, 0x085E, 0x085F, 0x0860, 0x0861, 0x0862, 0x0863, 0x0864, 0x0865,
    0x0000, 0x0000, 0x0866, 0x0867, 0x0868, 0x0869, 0x086A, 0x086B, 0x0000, 0x086C, 0x086D, 0x086E,
    0x086F, 0x0870, 0x0871, 0x0872, 0x0873, 0x0874, 0x0875, 0x0876, 0x0877, 0x0878, 0x0879, 0x087A,
    0x087B, 0x087C, 0x087D, 0x087E, 0x0000, 0x0000, 0x087F, 0x0880, 0x0881, 0x0000, 0x0882, 0x0883,
    0x0884, 0x0885, 0x0886, 0x0887, 0x0888, 0x0889, 0x088A, 0x0000, 0x088B, 0x088C, 0x088D, 0x088D,
    0x088D, 0x088D, 0x088D, 0x088E, 0x088D, 0x088D, 0x088D, 0x05F1, 0x088F, 0x0890, 0x0891, 0x0892,
    0x043D, 0x0893, 0x043D, 0x043D, 0x043D, 0x043D, 0x0008, 0x0894, 0x0895, 0x0896, 0x0897, 0x0895,
    0x0895, 0x0896, 0x0897, 0x0895, 0x0008, 0x0008, 0x0008, 0x0008, 0x0898, 0x0899, 0x089A, 0x0008,
    0x089B, 0x089C, 0x089D, 0x089E, 0x089F, 0x08A0, 0x08A1, 0x004B, 0x0009, 0x0009, 0x0009, 0x08A2,
    0x08A3, 0x0008, 0x08A4, 0x08A5, 0x0008, 0x0050, 0x005C, 0x0008, 0x08A6, 0x0008, 0x08A7, 0x002F,
    0x002F, 0x0008, 0x0008, 0x0008, 0x08A8, 0x000B, 0x000C, 0x08A9, 0x08AA, 0x08AB, 0x0008, 0x0008,
    0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x004A, 0x0008, 0x002F, 0x0008, 0x0008, 0x08AC,
    0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x088D, 0x05F1, 0x05F1, 0x05F1, 0x05F1,
    0x05F1, 0x08AD, 0x08AE, 0x08AF, 0x08B0, 0x08B1, 0x05F1, 0x05F1, 0x05F1, 0x05F1, 0x05F1, 0x05F1,
    0x08B2, 0x08B3, 0x0000, 0x0000, 0x08B4, 0x08B5, 0x08B6, 0x08B7, 0x08B8, 0x08B9, 0x08BA, 0x08BB,
    0x08BC, 0x08BD, 0x08BE, 0x08BF, 0x08C0, 0x08C1, 0x08C2, 0x08C3, 0x08C4, 0x08C5, 0x08C6, 0x08C7,
    0x08C8, 0x08C9, 0x08CA, 0x08CB, 0x08CC, 0x08CD, 0x08CE, 0x0000, 0x08CF, 0x08D0, 0x08D1, 0x08D2,
    0x08D3, 0x08D4, 0x08D5, 0x08D6, 0x08D7, 0x08D8, 0x08D9, 0x08DA, 0x08DB, 0x0000, 0x0000, 0x0000,
    0x000A, 0x000A, 0x000A, 0x000A, 0x000A, 0x000A, 0x000A, 0x000A, 0x08DC, 0x000A, 0x000A, 0x000A,
    0x000A, 0x000A, 0x000A, 0x000A, 0x000A, 0x000A, 0x000A, 0x000A, 0x000A, 0x000A, 0x000A, 0x000A,
    0x000A, 0x000A, 0x000A, 0x000A, 0x000A, 0x000A, 0x000A, 0x000A, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x021D, 0x021D, 0x0237, 0x0237, 0x021D, 0x021D, 0x021D, 0x021D, 0x0237, 0x0237, 0x0237, 0x021D,
    0x021D, 0x0348, 0x0348, 0x0348, 0x0348, 0x021D, 0x0348, 0x0348, 0x0348, 0x0237, 0x0237, 0x021D,
    0x022A, 0x021D, 0x0237, 0x0237, 0x022A, 0x022A, 0x022A, 0x022A, 0x021D, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x08DD, 0x08DE, 0x08DF, 0x08E0, 0x004C, 0x08E1, 0x08E2, 0x08E3, 0x004C, 0x08E4, 0x08E5, 0x08E6,
    0x08E6, 0x08E6, 0x08E7, 0x08E8, 0x08E9, 0x08E9, 0x08EA, 0x08EB, 0x004C, 0x08EC, 0x08ED, 0x004C,
    0x004A, 0x08EE, 0x08EF, 0x08F0, 0x08F0, 0x08F0, 0x004C, 0x004C, 0x08F1, 0x08F2, 0x08F3, 0x004C,
    0x08F4, 0x004C, 0x08F5, 0x004C, 0x08F4, 0x004C, 0x08F6, 0x08F7, 0x08F8, 0x08DF, 0x0053, 0x08F9,
    0x08FA, 0x08FB, 0x08FC, 0x08FD, 0x08FE, 0x08FF, 0x0900, 0x0901, 0x0902, 0x0903, 0x004C, 0x0904,
    0x0905, 0x0906, 0x0907, 0x0908, 0x0909, 0x004A, 0x004A, 0x004A, 0x004A, 0x090A, 0x090B, 0x08F9,
    0x090C, 0x090D, 0x004C, 0x004A, 0x004C, 0x004C, 0x090E, 0x0347, 0x090F, 0x0910, 0x0911, 0x0912,
    0x0913, 0x0914, 0x0915, 0x0916, 0x0917, 0x0918, 0x0919, 0x091A, 0x091B, 0x091C, 0x091D, 0x091E,
    0x091F, 0x0920, 0x0921, 0x0922, 0x0923, 0x0924, 0x0925, 0x0926, 0x0927, 0x0928, 0x0929, 0x092A,
    0x092B, 0x092C, 0x092D, 0x092E, 0x092F, 0x0930, 0x0931, 0x0932, 0x0933, 0x0934, 0x0935, 0x0936,
    0x0937, 0x0938, 0x0939, 0x093A, 0x093B, 0x093C, 0x093D, 0x093E, 0x05F0, 0x05F0, 0x05F0, 0x093F,
    0x0940, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x0941, 0x004C, 0x004C, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0942, 0x004A, 0x0943, 0x004A, 0x0944, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x0945, 0x0946,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004A, 0x004C, 0x004C, 0x004A, 0x004C, 0x004C, 0x004A, 0x004C,
    0x004C, 0x004E, 0x004E, 0x004C, 0x004C, 0x004C, 0x0947, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x0948, 0x0949, 0x094A, 0x094B, 0x004C, 0x094C, 0x004C, 0x094D, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x094E, 0x094E, 0x094F, 0x0950, 0x004A, 0x004A, 0x004A,
    0x0951, 0x0952, 0x094E, 0x0953, 0x0954, 0x094E, 0x004A, 0x004A, 0x004A, 0x094E, 0x000D, 0x0054,
    0x004A, 0x094E, 0x094E, 0x004A, 0x004A, 0x004A, 0x094E, 0x094E, 0x094E, 0x094E, 0x004A, 0x094E,
    0x094E, 0x094E, 0x094E, 0x0955, 0x0956, 0x0957, 0x0958, 0x004A, 0x004A, 0x004A, 0x004A, 0x094E,
    0x0959, 0x095A, 0x094E, 0x095B, 0x095C, 0x094E, 0x094E, 0x094E, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x094E, 0x004A, 0x094E, 0x095D, 0x094E, 0x094E, 0x094E, 0x094E, 0x095E, 0x094E, 0x095F,
    0x0960, 0x0961, 0x094E, 0x0962, 0x0963, 0x0964, 0x094E, 0x094E, 0x094E, 0x0965, 0x004A, 0x004A,
    0x004A, 0x004A, 0x094E, 0x094E, 0x094E, 0x094E, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x094E, 0x0966, 0x0967, 0x0968, 0x004A, 0x0969, 0x096A, 0x094E, 0x094E,
    0x094E, 0x094E, 0x094E, 0x094E, 0x004A, 0x096B, 0x096C, 0x096D, 0x096E, 0x096F, 0x0970, 0x0971,
    0x0972, 0x0973, 0x0974, 0x0975, 0x0976, 0x0977, 0x0978, 0x0979, 0x097A, 0x097B, 0x094E, 0x094E,
    0x097C, 0x097D, 0x097E, 0x097F, 0x0980, 0x0981, 0x0982, 0x0983, 0x0984, 0x0985, 0x094E, 0x094E,
    0x094E, 0x004A, 0x004A, 0x094E, 0x094E, 0x0986, 0x0987, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x094E, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x0988, 0x094E,
    0x004A, 0x004A, 0x094E, 0x094E, 0x0989, 0x098A, 0x094E, 0x098B, 0x098C, 0x098D, 0x098E, 0x098F,
    0x094E, 0x094E, 0x0990, 0x0991, 0x0992, 0x0993, 0x094E, 0x094E, 0x094E, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x094E, 0x094E, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x004A, 0x004A, 0x094E, 0x094E, 0x004A, 0x004A,
    0x004A, 0x004A, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E,
    0x0994, 0x0995, 0x0996, 0x0997, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x0998, 0x0999,
    0x099A, 0x099B, 0x004A, 0x004A, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E,
    0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x000B, 0x000C, 0x000B, 0x000C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x099C, 0x099C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x094E, 0x094E, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004E, 0x099D, 0x099E, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x004C,
    0x004A, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004E, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x0347, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004E,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x099C, 0x099C, 0x099C, 0x099C, 0x004E, 0x004E, 0x004E, 0x099C, 0x004E, 0x004E, 0x099C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004E, 0x004E, 0x004E, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x099F, 0x09A0, 0x09A1, 0x09A2, 0x09A3, 0x09A4, 0x09A5, 0x09A6, 0x09A7, 0x09A8, 0x09A9, 0x09AA,
    0x09AB, 0x09AC, 0x09AD, 0x09AE, 0x09AF, 0x09B0, 0x09B1, 0x09B2, 0x09B3, 0x09B4, 0x09B5, 0x09B6,
    0x09B7, 0x09B8, 0x09B9, 0x09BA, 0x09BB, 0x09BC, 0x09BD, 0x09BE, 0x09BF, 0x09C0, 0x09C1, 0x09C2,
    0x09C3, 0x09C4, 0x09C5, 0x09C6, 0x09C7, 0x09C8, 0x09C9, 0x09CA, 0x09CB, 0x09CC, 0x09CD, 0x09CE,
    0x09CF, 0x09D0, 0x09D1, 0x09D2, 0x09D3, 0x09D4, 0x09D5, 0x09D6, 0x09D7, 0x09D8, 0x09D9, 0x09DA,
    0x09DB, 0x09DC, 0x09DD, 0x09DE, 0x09DF, 0x09E0, 0x09E1, 0x09E2, 0x09E3, 0x09E4, 0x09E5, 0x09E6,
    0x09E7, 0x09E8, 0x09E9, 0x09EA, 0x09EB, 0x09EC, 0x09ED, 0x09EE, 0x09EF, 0x09F0, 0x09F1, 0x09F2,
    0x09F3, 0x09F4, 0x09F5, 0x09F6, 0x09F7, 0x09F8, 0x09F9, 0x09FA, 0x09FB, 0x09FC, 0x09FD, 0x09FE,
    0x09FF, 0x0A00, 0x0A01, 0x0A02, 0x0A03, 0x0A04, 0x0A05, 0x0A06, 0x0A07, 0x0A08, 0x0A09, 0x0A0A,
    0x0A0B, 0x0A0C, 0x0A0D, 0x0A0E, 0x0A0F, 0x0A10, 0x0A11, 0x0A12, 0x0A13, 0x0A14, 0x0A15, 0x0A16,
    0x0A17, 0x0A18, 0x0A19, 0x0A1A, 0x0A1B, 0x0A1C, 0x0A1D, 0x0A1E, 0x0A1F, 0x0A20, 0x0A21, 0x0A22,
    0x0A23, 0x0A24, 0x0A25, 0x0A26, 0x0A27, 0x0A28, 0x0A29, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8,
    0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8,
    0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004E, 0x004E, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004E, 0x004A, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004E, 0x004A, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004A, 0x004A, 0x004A, 0x0A2A, 0x0A2A, 0x0A2B, 0x0A2B, 0x004A, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004C, 0x099C, 0x099C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x0A2A,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x099C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004E, 0x004E, 0x004E, 0x099C,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x099C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x099C, 0x099C,
    0x0A2C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x099C, 0x099C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x099C, 0x099C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x099C, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x099C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x099C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x099C, 0x099C,
    0x004E, 0x099C, 0x004E, 0x004E, 0x004E, 0x004E, 0x099C, 0x004E, 0x004E, 0x099C, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x099C, 0x004C, 0x004C, 0x004E, 0x004E, 0x099C, 0x099C,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004C, 0x004E, 0x004C, 0x004E, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004E, 0x004C, 0x004C, 0x004C, 0x004E, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x099C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004E, 0x004E, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004E, 0x004C, 0x004C, 0x004E,
    0x004C, 0x004C, 0x004C, 0x004C, 0x099C, 0x004C, 0x099C, 0x004C, 0x004C, 0x004C, 0x004C, 0x099C,
    0x099C, 0x099C, 0x004C, 0x099C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x000B, 0x000C, 0x000B, 0x000C,
    0x000B, 0x000C, 0x000B, 0x000C, 0x000B, 0x000C, 0x000B, 0x000C, 0x000B, 0x000C, 0x04E8, 0x04E8,
    0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8,
    0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8,
    0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x004C, 0x099C, 0x099C, 0x099C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004E, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x099C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x099C,
    0x094E, 0x004A, 0x004A, 0x094E, 0x094E, 0x000B, 0x000C, 0x004A, 0x094E, 0x094E, 0x004A, 0x094E,
    0x094E, 0x094E, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x094E, 0x094E, 0x094E, 0x094E, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x094E, 0x094E, 0x094E, 0x004A, 0x004A, 0x004A, 0x094E, 0x094E,
    0x094E, 0x094E, 0x000B, 0x000C, 0x000B, 0x000C, 0x000B, 0x000C, 0x000B, 0x000C, 0x000B, 0x000C,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x0A2A, 0x0A2A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x000B, 0x000C, 0x000B, 0x000C, 0x000B,
    0x000C, 0x000B, 0x000C, 0x000B, 0x000C, 0x000B, 0x000C, 0x000B, 0x000C, 0x000B, 0x000C, 0x000B,
    0x000C, 0x000B, 0x000C, 0x000B, 0x000C, 0x004A, 0x004A, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E,
    0x094E, 0x004A, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E,
    0x094E, 0x094E, 0x094E, 0x094E, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x094E, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x094E, 0x094E, 0x094E, 0x094E,
    0x094E, 0x094E, 0x004A, 0x004A, 0x004A, 0x094E, 0x004A, 0x004A, 0x004A, 0x004A, 0x094E, 0x094E,
    0x094E, 0x094E, 0x094E, 0x004A, 0x094E, 0x094E, 0x004A, 0x004A, 0x000B, 0x000C, 0x000B, 0x000C,
    0x094E, 0x004A, 0x004A, 0x004A, 0x004A, 0x094E, 0x004A, 0x094E, 0x094E, 0x094E, 0x004A, 0x004A,
    0x094E, 0x094E, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x004A, 0x004A, 0x000B, 0x000C, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x094E, 0x094E,
    0x0A2D, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E,
    0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x004A, 0x094E, 0x094E, 0x094E, 0x094E, 0x004A, 0x004A,
    0x094E, 0x004A, 0x094E, 0x004A, 0x004A, 0x094E, 0x004A, 0x094E, 0x094E, 0x094E, 0x094E, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x094E, 0x094E, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x094E, 0x094E, 0x094E, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x094E, 0x094E, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x094E, 0x094E, 0x004A, 0x004A, 0x004A, 0x004A, 0x094E, 0x094E,
    0x094E, 0x094E, 0x004A, 0x094E, 0x094E, 0x004A, 0x004A, 0x094E, 0x0A2E, 0x0A2F, 0x0A30, 0x004A,
    0x004A, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E,
    0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E,
    0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E,
    0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x004A, 0x004A, 0x094E, 0x094E,
    0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x004A, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E,
    0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E,
    0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E,
    0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x0A31, 0x0A32, 0x094E, 0x004A, 0x004A, 0x004A, 0x094E, 0x094E,
    0x094E, 0x094E, 0x094E, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x094E, 0x094E, 0x094E, 0x004A,
    0x004A, 0x004A, 0x004A, 0x094E, 0x004A, 0x004A, 0x004A, 0x094E, 0x094E, 0x094E, 0x094E, 0x094E,
    0x004A, 0x094E, 0x004A, 0x004A, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004E, 0x004E, 0x004E,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x099C, 0x099C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A,
    0x004A, 0x004C, 0x004C, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004A, 0x004C, 0x004C, 0x004C,
    0x099C, 0x004C, 0x004C, 0x004C, 0x004C, 0x099C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x0000, 0x0000, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x0000, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x0A33, 0x004C, 0x0A34, 0x0A35, 0x0A36, 0x0A37,
    0x0A38, 0x0A39, 0x0A3A, 0x0A3B, 0x0A3C, 0x0A3D, 0x0A3E, 0x0A3F, 0x0A40, 0x0A41, 0x0A42, 0x0A43,
    0x0A44, 0x0A45, 0x0A46, 0x0A47, 0x0A48, 0x0A49, 0x0A4A, 0x0A4B, 0x0A4C, 0x0A4D, 0x0A4E, 0x0A4F,
    0x0A50, 0x0A51, 0x0A52, 0x0A53, 0x0A54, 0x0A55, 0x0A56, 0x0A57, 0x0A58, 0x0A59, 0x0A5A, 0x0A5B,
    0x0A5C, 0x0A5D, 0x0A5E, 0x0A5F, 0x0A60, 0x0A61, 0x0A62, 0x0000, 0x0A63, 0x0A64, 0x0A65, 0x0A66,
    0x0A67, 0x0A68, 0x0A69, 0x0A6A, 0x0A6B, 0x0A6C, 0x0A6D, 0x0A6E, 0x0A6F, 0x0A70, 0x0A71, 0x0A72,
    0x0A73, 0x0A74, 0x0A75, 0x0A76, 0x0A77, 0x0A78, 0x0A79, 0x0A7A, 0x0A7B, 0x0A7C, 0x0A7D, 0x0A7E,
    0x0A7F, 0x0A80, 0x0A81, 0x0A82, 0x0A83, 0x0A84, 0x0A85, 0x0A86, 0x0A87, 0x0A88, 0x0A89, 0x0A8A,
    0x0A8B, 0x0A8C, 0x0A8D, 0x0A8E, 0x0A8F, 0x0A90, 0x0A91, 0x0000, 0x0A92, 0x0A93, 0x0A94, 0x0A95,
    0x0A96, 0x0A97, 0x0A98, 0x0A99, 0x0A9A, 0x0A9B, 0x0A9C, 0x0A9D, 0x0A9E, 0x0A9F, 0x0AA0, 0x0AA1,
    0x0AA2, 0x00D6, 0x0AA3, 0x0AA4, 0x00D6, 0x0AA5, 0x0AA6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6,
    0x0AA7, 0x0AA8, 0x0AA9, 0x0AAA, 0x0AAB, 0x0AAC, 0x0AAD, 0x0AAE, 0x0AAF, 0x0AB0, 0x0AB1, 0x0AB2,
    0x0AB3, 0x0AB4, 0x0AB5, 0x0AB6, 0x0AB7, 0x0AB8, 0x0AB9, 0x0ABA, 0x0ABB, 0x0ABC, 0x0ABD, 0x0ABE,
    0x0ABF, 0x0AC0, 0x0AC1, 0x0AC2, 0x0AC3, 0x0AC4, 0x0AC5, 0x0AC6, 0x0AC7, 0x0AC8, 0x0AC9, 0x0ACA,
    0x0ACB, 0x0ACC, 0x0ACD, 0x0ACE, 0x0ACF, 0x0AD0, 0x0AD1, 0x0AD2, 0x0AD3, 0x0AD4, 0x0AD5, 0x0AD6,
    0x0AD7, 0x0AD8, 0x0AD9, 0x0ADA, 0x0ADB, 0x0ADC, 0x0ADD, 0x0ADE, 0x0ADF, 0x0AE0, 0x0AE1, 0x0AE2,
    0x0AE3, 0x0AE4, 0x0AE5, 0x0AE6, 0x0AE7, 0x0AE8, 0x0AE9, 0x0AEA, 0x0AEB, 0x0AEC, 0x0AED, 0x0AEE,
    0x0AEF, 0x0AF0, 0x0AF1, 0x0AF2, 0x0AF3, 0x0AF4, 0x0AF5, 0x0AF6, 0x0AF7, 0x0AF8, 0x0AF9, 0x0AFA,
    0x0AFB, 0x0AFC, 0x0AFD, 0x0AFE, 0x0AFF, 0x0B00, 0x0B01, 0x0B02, 0x0B03, 0x0B04, 0x0B05, 0x0B06,
    0x0B07, 0x0B08, 0x0B09, 0x0B0A, 0x0B0B, 0x0B0C, 0x0B0D, 0x0B0E, 0x00D6, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x0B0F, 0x0B10, 0x0B11, 0x0B12, 0x021D, 0x021D, 0x021D, 0x0B13, 0x0B14,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0008, 0x0008, 0x0008, 0x0008, 0x04E8, 0x0008, 0x0008,
    0x0B15, 0x0B16, 0x0B17, 0x0B18, 0x0B19, 0x0B1A, 0x0B1B, 0x0B1C, 0x0B1D, 0x0B1E, 0x0B1F, 0x0B20,
    0x0B21, 0x0B22, 0x0B23, 0x0B24, 0x0B25, 0x0B26, 0x0B27, 0x0B28, 0x0B29, 0x0B2A, 0x0B2B, 0x0B2C,
    0x0B2D, 0x0B2E, 0x0B2F, 0x0B30, 0x0B31, 0x0B32, 0x0B33, 0x0B34, 0x0B35, 0x0B36, 0x0B37, 0x0B38,
    0x0B39, 0x0B3A, 0x0000, 0x0B3B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0B3C, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0B3D, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04AA, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x021D, 0x021D, 0x021D, 0x021D,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D,
    0x021D, 0x021D, 0x021D, 0x021D, 0x0008, 0x0008, 0x0050, 0x005C, 0x0050, 0x005C, 0x0008, 0x0008,
    0x0008, 0x0050, 0x005C, 0x0008, 0x0050, 0x005C, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008,
    0x0008, 0x0008, 0x0008, 0x043D, 0x0008, 0x0008, 0x043D, 0x0008, 0x0050, 0x005C, 0x0008, 0x0008,
    0x0050, 0x005C, 0x000B, 0x000C, 0x000B, 0x000C, 0x000B, 0x000C, 0x000B, 0x000C, 0x0008, 0x0008,
    0x0008, 0x0008, 0x0008, 0x020B, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008,
    0x0008, 0x0008, 0x043D, 0x043D, 0x0008, 0x0008, 0x0008, 0x0008, 0x043D, 0x0008, 0x0897, 0x0008,
    0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008,
    0x004C, 0x004C, 0x0008, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0000, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3F, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B40, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0B41, 0x0B42, 0x0B43, 0x0B44,
    0x0B45, 0x0B46, 0x0B47, 0x0B48, 0x0B49, 0x0B4A, 0x0B4B, 0x0B4C, 0x0B4D, 0x0B4E, 0x0B4F, 0x0B50,
    0x0B51, 0x0B52, 0x0B53, 0x0B54, 0x0B55, 0x0B56, 0x0B57, 0x0B58, 0x0B59, 0x0B5A, 0x0B5B, 0x0B5C,
    0x0B5D, 0x0B5E, 0x0B5F, 0x0B60, 0x0B61, 0x0B62, 0x0B63, 0x0B64, 0x0B65, 0x0B66, 0x0B67, 0x0B68,
    0x0B69, 0x0B6A, 0x0B6B, 0x0B6C, 0x0B6D, 0x0B6E, 0x0B6F, 0x0B70, 0x0B71, 0x0B72, 0x0B73, 0x0B74,
    0x0B75, 0x0B76, 0x0B77, 0x0B78, 0x0B79, 0x0B7A, 0x0B7B, 0x0B7C, 0x0B7D, 0x0B7E, 0x0B7F, 0x0B80,
    0x0B81, 0x0B82, 0x0B83, 0x0B84, 0x0B85, 0x0B86, 0x0B87, 0x0B88, 0x0B89, 0x0B8A, 0x0B8B, 0x0B8C,
    0x0B8D, 0x0B8E, 0x0B8F, 0x0B90, 0x0B91, 0x0B92, 0x0B93, 0x0B94, 0x0B95, 0x0B96, 0x0B97, 0x0B98,
    0x0B99, 0x0B9A, 0x0B9B, 0x0B9C, 0x0B9D, 0x0B9E, 0x0B9F, 0x0BA0, 0x0BA1, 0x0BA2, 0x0BA3, 0x0BA4,
    0x0BA5, 0x0BA6, 0x0BA7, 0x0BA8, 0x0BA9, 0x0BAA, 0x0BAB, 0x0BAC, 0x0BAD, 0x0BAE, 0x0BAF, 0x0BB0,
    0x0BB1, 0x0BB2, 0x0BB3, 0x0BB4, 0x0BB5, 0x0BB6, 0x0BB7, 0x0BB8, 0x0BB9, 0x0BBA, 0x0BBB, 0x0BBC,
    0x0BBD, 0x0BBE, 0x0BBF, 0x0BC0, 0x0BC1, 0x0BC2, 0x0BC3, 0x0BC4, 0x0BC5, 0x0BC6, 0x0BC7, 0x0BC8,
    0x0BC9, 0x0BCA, 0x0BCB, 0x0BCC, 0x0BCD, 0x0BCE, 0x0BCF, 0x0BD0, 0x0BD1, 0x0BD2, 0x0BD3, 0x0BD4,
    0x0BD5, 0x0BD6, 0x0BD7, 0x0BD8, 0x0BD9, 0x0BDA, 0x0BDB, 0x0BDC, 0x0BDD, 0x0BDE, 0x0BDF, 0x0BE0,
    0x0BE1, 0x0BE2, 0x0BE3, 0x0BE4, 0x0BE5, 0x0BE6, 0x0BE7, 0x0BE8, 0x0BE9, 0x0BEA, 0x0BEB, 0x0BEC,
    0x0BED, 0x0BEE, 0x0BEF, 0x0BF0, 0x0BF1, 0x0BF2, 0x0BF3, 0x0BF4, 0x0BF5, 0x0BF6, 0x0BF7, 0x0BF8,
    0x0BF9, 0x0BFA, 0x0BFB, 0x0BFC, 0x0BFD, 0x0BFE, 0x0BFF, 0x0C00, 0x0C01, 0x0C02, 0x0C03, 0x0C04,
    0x0C05, 0x0C06, 0x0C07, 0x0C08, 0x0C09, 0x0C0A, 0x0C0B, 0x0C0C, 0x0C0D, 0x0C0E, 0x0C0F, 0x0C10,
    0x0C11, 0x0C12, 0x0C13, 0x0C14, 0x0C15, 0x0C16, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0C17, 0x0C18, 0x0C18, 0x0C18, 0x0B3E, 0x0C19, 0x0C1A, 0x0C1B, 0x0C1C, 0x0C1D, 0x0C1C, 0x0C1D,
    0x0C1C, 0x0C1D, 0x0C1C, 0x0C1D, 0x0C1C, 0x0C1D, 0x0B3E, 0x0B3E, 0x0C1C, 0x0C1D, 0x0C1C, 0x0C1D,
    0x0C1C, 0x0C1D, 0x0C1C, 0x0C1D, 0x0C1E, 0x0C1F, 0x0C20, 0x0C20, 0x0B3E, 0x0C1B, 0x0C1B, 0x0C1B,
    0x0C1B, 0x0C1B, 0x0C1B, 0x0C1B, 0x0C1B, 0x0C1B, 0x0C21, 0x043F, 0x0229, 0x043E, 0x0C22, 0x0C22,
    0x0C23, 0x0C19, 0x0C19, 0x0C19, 0x0C19, 0x0C19, 0x0C24, 0x0B3E, 0x0C25, 0x0C26, 0x0C27, 0x0C19,
    0x0C1A, 0x0C28, 0x0B3E, 0x004C, 0x0000, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C29, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C2A, 0x0C2B, 0x0C2C, 0x0C2D, 0x0C2E, 0x0C2F, 0x0C30, 0x0C31, 0x0C32,
    0x0C33, 0x0C34, 0x0C35, 0x0C36, 0x0C37, 0x0C38, 0x0C39, 0x0C3A, 0x0C3B, 0x0C3C, 0x0C3D, 0x0C3E,
    0x0C3F, 0x0C40, 0x0C41, 0x0C1A, 0x0C42, 0x0C43, 0x0C44, 0x0C45, 0x0C46, 0x0C47, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C48, 0x0C49, 0x0C4A, 0x0C4B, 0x0C4C, 0x0C4D, 0x0C4E, 0x0C4F, 0x0C50,
    0x0C51, 0x0C52, 0x0C53, 0x0C54, 0x0C55, 0x0C56, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C57, 0x0C1A, 0x0C1A, 0x0000, 0x0000, 0x0C58, 0x0C59, 0x0C5A,
    0x0C5B, 0x0C5C, 0x0C5D, 0x0C5E, 0x0C1E, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C5F, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C60, 0x0C61, 0x0C62, 0x0C63, 0x0C64, 0x0C65, 0x0C66, 0x0C67, 0x0C68,
    0x0C69, 0x0C6A, 0x0C6B, 0x0C6C, 0x0C6D, 0x0C6E, 0x0C6F, 0x0C70, 0x0C71, 0x0C72, 0x0C73, 0x0C74,
    0x0C75, 0x0C76, 0x0C77, 0x0C1A, 0x0C78, 0x0C79, 0x0C7A, 0x0C7B, 0x0C7C, 0x0C7D, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C7E, 0x0C7F, 0x0C80, 0x0C81, 0x0C82, 0x0C83, 0x0C84, 0x0C85, 0x0C86,
    0x0C87, 0x0C88, 0x0C89, 0x0C8A, 0x0C8B, 0x0C8C, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C8D,
    0x0C8E, 0x0C8F, 0x0C90, 0x0C1A, 0x0C91, 0x0C1A, 0x0C1A, 0x0C92, 0x0C93, 0x0C94, 0x0C95, 0x0C18,
    0x0C19, 0x0C96, 0x0C97, 0x0C98, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0000, 0x0C99, 0x0C9A, 0x0C9B, 0x0C9C, 0x0C9D, 0x0C9E, 0x0C9F,
    0x0CA0, 0x0CA1, 0x0CA2, 0x0CA3, 0x0CA4, 0x0CA5, 0x0CA6, 0x0CA7, 0x0CA8, 0x0CA9, 0x0CAA, 0x0CAB,
    0x0CAC, 0x0CAD, 0x0CAE, 0x0CAF, 0x0CB0, 0x0CB1, 0x0CB2, 0x0CB3, 0x0CB4, 0x0CB5, 0x0CB6, 0x0CB7,
    0x0CB8, 0x0CB9, 0x0CBA, 0x0CBB, 0x0CBC, 0x0CBD, 0x0CBE, 0x0CBF, 0x0CC0, 0x0CC1, 0x0CC2, 0x0CC3,
    0x0CC4, 0x0CC5, 0x0CC6, 0x0CC7, 0x0CC8, 0x0CC9, 0x0CCA, 0x0CCB, 0x0CCC, 0x0CCD, 0x0CCE, 0x0CCF,
    0x0CD0, 0x0CD1, 0x0CD2, 0x0CD3, 0x0CD4, 0x0CD5, 0x0CD6, 0x0CD7, 0x0CD8, 0x0CD9, 0x0CDA, 0x0CDB,
    0x0CDC, 0x0CDD, 0x0CDE, 0x0CDF, 0x0CE0, 0x0CE1, 0x0CE2, 0x0CE3, 0x0CE4, 0x0CE5, 0x0CE6, 0x0CE7,
    0x0CE8, 0x0CE9, 0x0CEA, 0x0CEB, 0x0CEC, 0x0CED, 0x0CEE, 0x0CEF, 0x0CF0, 0x0CF1, 0x0CF2, 0x0CF3,
    0x0CF4, 0x0CF5, 0x0CF6, 0x0000, 0x0CF7, 0x0CF7, 0x0CF8, 0x0CF9, 0x0CFA, 0x0CFB, 0x0CFC, 0x0CFD,
    0x0CFE, 0x0CFF, 0x0D00, 0x0D01, 0x0D02, 0x0D03, 0x0D04, 0x0D05, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0D06, 0x0D07, 0x0D08, 0x0D09,
    0x0D0A, 0x0D0B, 0x0D0C, 0x0D0D, 0x0D0E, 0x0D0F, 0x0D10, 0x0D11, 0x0D12, 0x0D13, 0x0D14, 0x0D15,
    0x0D16, 0x0D17, 0x0D18, 0x0D19, 0x0D1A, 0x0D1B, 0x0D1C, 0x0D1D, 0x0D1E, 0x0D1F, 0x0D20, 0x0D21,
    0x0D22, 0x0D23, 0x0D24, 0x0000, 0x0D25, 0x0D26, 0x0D27, 0x0D28, 0x0D29, 0x0D2A, 0x0D2B, 0x0D2C,
    0x0D2D, 0x0D2E, 0x0D2F, 0x0D30, 0x0D31, 0x0D32, 0x0D33, 0x0D34, 0x0D35, 0x0D36, 0x0D37, 0x0D38,
    0x0D39, 0x0D3A, 0x0D3B, 0x0D3C, 0x0D3D, 0x0D3E, 0x0D3F, 0x0D40, 0x0D41, 0x0D42, 0x0D43, 0x0D44,
    0x0D45, 0x0D46, 0x0D47, 0x0D48, 0x0D49, 0x0D4A, 0x0D4B, 0x0D4C, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x0D4D, 0x0D4E, 0x0D4F, 0x0D50, 0x0D51, 0x0D52, 0x0D53, 0x0D54,
    0x0D55, 0x0D56, 0x0D57, 0x0D58, 0x0D59, 0x0D5A, 0x0D5B, 0x0D5C, 0x0D5D, 0x0D5E, 0x0D5F, 0x0D60,
    0x0D61, 0x0D62, 0x0D63, 0x0D64, 0x0D65, 0x0D66, 0x0D67, 0x0D68, 0x0D69, 0x0D6A, 0x0D6B, 0x0D6C,
    0x0D6D, 0x0D6E, 0x0D6F, 0x0D70, 0x0D71, 0x0D72, 0x0D73, 0x0D74, 0x0D75, 0x0D76, 0x0D77, 0x0D78,
    0x0D79, 0x0D7A, 0x0D7B, 0x0CF7, 0x0D7C, 0x0D7D, 0x0D7E, 0x0D7F, 0x0D80, 0x0D81, 0x0D82, 0x0D83,
    0x0D84, 0x0D85, 0x0D86, 0x0D87, 0x0D88, 0x0D89, 0x0D8A, 0x0D8B, 0x0D8C, 0x0D8D, 0x0D8E, 0x0D8F,
    0x0D90, 0x0D91, 0x0D92, 0x0D93, 0x0D94, 0x0D95, 0x0D96, 0x0D97, 0x0D98, 0x0D99, 0x0D9A, 0x0D9B,
    0x0D9C, 0x0D9D, 0x0D9E, 0x0D9F, 0x0DA0, 0x0DA1, 0x0DA2, 0x0DA3, 0x0DA4, 0x0DA5, 0x0DA6, 0x0DA7,
    0x0DA8, 0x0DA9, 0x0DAA, 0x0DAB, 0x0DAC, 0x0DAD, 0x0DAE, 0x0DAF, 0x0DB0, 0x0DB1, 0x0DB2, 0x0DB3,
    0x0DB4, 0x0DB5, 0x0DB6, 0x0DB7, 0x0DB8, 0x0DB9, 0x0DBA, 0x0DBB, 0x0DBC, 0x0DBD, 0x0DBE, 0x0DBF,
    0x0DC0, 0x0DC1, 0x0DC2, 0x0DC3, 0x0DC4, 0x0DC5, 0x0DC6, 0x0DC7, 0x0DC8, 0x0DC9, 0x0DCA, 0x0DCB,
    0x0DCC, 0x0DCD, 0x0DCE, 0x0DCF, 0x0DD0, 0x0DD1, 0x0DD2, 0x0DD3, 0x0DD4, 0x0DD5, 0x0DD6, 0x0DD7,
    0x0DD8, 0x0DD9, 0x0DDA, 0x0DDB, 0x0DDC, 0x0DDD, 0x0DDE, 0x0DDF, 0x0DE0, 0x0DE1, 0x0DE2, 0x0DE3,
    0x0DE4, 0x0DE5, 0x0DE6, 0x0DE7, 0x0DE8, 0x0DE9, 0x0DEA, 0x0DEB, 0x0DEC, 0x0DED, 0x0DEE, 0x0DEF,
    0x0DF0, 0x0DF1, 0x0DF2, 0x0DF3, 0x0DF4, 0x0DF5, 0x0DF6, 0x0DF7, 0x0DF8, 0x0DF9, 0x0DFA, 0x0DFB,
    0x0DFC, 0x0DFD, 0x0DFE, 0x0DFF, 0x0E00, 0x0E01, 0x0E02, 0x0E03, 0x0E04, 0x0E05, 0x0E06, 0x0E07,
    0x0E08, 0x0E09, 0x0E0A, 0x0E0B, 0x0E0C, 0x0E0D, 0x0E0E, 0x0E0F, 0x0E10, 0x0E11, 0x0E12, 0x0E13,
    0x0E14, 0x0E15, 0x0E16, 0x0E17, 0x0E18, 0x0E19, 0x0E1A, 0x0E1B, 0x0E1C, 0x0E1D, 0x0E1E, 0x0E1F,
    0x0E20, 0x0E21, 0x0E22, 0x0E23, 0x0E24, 0x0E25, 0x0E26, 0x0E27, 0x0E28, 0x0E29, 0x0E2A, 0x0E2B,
    0x0E2C, 0x0E2D, 0x0E2E, 0x0E2F, 0x0E30, 0x0E31, 0x0E32, 0x0E33, 0x0E34, 0x0E35, 0x0E36, 0x0E37,
    0x0E38, 0x0E39, 0x0E3A, 0x0E3B, 0x0E3C, 0x0E3D, 0x0E3E, 0x0E3F, 0x0E40, 0x0E41, 0x0E42, 0x0E43,
    0x0E44, 0x0E45, 0x0E46, 0x0E47, 0x0E48, 0x0E49, 0x0E4A, 0x0E4B, 0x0E4C, 0x0E4D, 0x0E4E, 0x0E4F,
    0x0E50, 0x0E51, 0x0E52, 0x0E53, 0x0E54, 0x0E55, 0x0E56, 0x0E57, 0x0E58, 0x0E59, 0x0E5A, 0x0E5B,
    0x0E5C, 0x0E5D, 0x0E5E, 0x0E5F, 0x0E60, 0x0E61, 0x0E62, 0x0E63, 0x0E64, 0x0E65, 0x0E66, 0x0E67,
    0x0E68, 0x0E69, 0x0E6A, 0x0E6B, 0x0E6C, 0x0E6D, 0x0E6E, 0x0E6F, 0x0E70, 0x0E71, 0x0E72, 0x0E73,
    0x0E74, 0x0E75, 0x0E76, 0x0E77, 0x0E78, 0x0E79, 0x0E7A, 0x0E7B, 0x0E7C, 0x0E7D, 0x0E7E, 0x0E7F,
    0x0E80, 0x0E81, 0x0E82, 0x0E83, 0x0E84, 0x0E85, 0x0E86, 0x0E87, 0x0E88, 0x0E89, 0x0E8A, 0x0E8B,
    0x0E8C, 0x0E8D, 0x0E8E, 0x0E8F, 0x0E90, 0x0E91, 0x0E92, 0x0E93, 0x0E94, 0x0E95, 0x0E96, 0x0E97,
    0x0E98, 0x0E99, 0x0E9A, 0x0E9B, 0x0E9C, 0x0E9D, 0x0E9E, 0x0E9F, 0x0EA0, 0x0EA1, 0x0EA2, 0x0EA3,
    0x0EA4, 0x0EA5, 0x0EA6, 0x0EA7, 0x0EA8, 0x0EA9, 0x0EAA, 0x0EAB, 0x0EAC, 0x0EAD, 0x0EAE, 0x0EAF,
    0x0EB0, 0x0EB1, 0x0EB2, 0x0EB3, 0x0EB4, 0x0EB5, 0x0EB6, 0x0EB7, 0x0EB8, 0x0EB9, 0x0EBA, 0x0EBB,
    0x0EBC, 0x0EBD, 0x0EBE, 0x0EBF, 0x0EC0, 0x0EC1, 0x0EC2, 0x0EC3, 0x0EC4, 0x0EC5, 0x0EC6, 0x0EC7,
    0x0EC8, 0x0EC9, 0x0ECA, 0x0ECB, 0x0ECC, 0x0ECD, 0x0ECE, 0x0ECF, 0x0ED0, 0x0ED1, 0x0ED2, 0x0ED3,
    0x0ED4, 0x0ED5, 0x0ED6, 0x0ED7, 0x0ED8, 0x0ED9, 0x0EDA, 0x0EDB, 0x0EDC, 0x0EDD, 0x0EDE, 0x0EDF,
    0x0EE0, 0x0EE1, 0x0EE2, 0x0EE3, 0x0EE4, 0x0EE5, 0x0EE6, 0x0EE7, 0x0EE8, 0x0EE9, 0x0EEA, 0x0EEB,
    0x0EEC, 0x0EED, 0x0EEE, 0x0EEF, 0x0EF0, 0x0EF1, 0x0EF2, 0x0EF3, 0x0EF4, 0x0EF5, 0x0EF6, 0x0EF7,
    0x0EF8, 0x0EF9, 0x0EFA, 0x0EFB, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0000, 0x0000, 0x0000, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C19, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0000, 0x0000, 0x0000, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E, 0x0B3E,
    0x0B3E, 0x0B3E, 0x0B3E, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x0415, 0x0415,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x020C, 0x0008, 0x0008, 0x0008, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0EFC, 0x0EFD, 0x0EFE, 0x0EFF, 0x0F00, 0x0F01, 0x0F02, 0x0F03,
    0x0F04, 0x0F05, 0x0F06, 0x0F07, 0x0F08, 0x0F09, 0x0F0A, 0x0F0B, 0x0F0C, 0x0F0D, 0x0F0E, 0x0F0F,
    0x0F10, 0x0F11, 0x0F12, 0x0F13, 0x0F14, 0x0F15, 0x0F16, 0x0F17, 0x0F18, 0x0F19, 0x0F1A, 0x0F1B,
    0x0F1C, 0x0F1D, 0x0F1E, 0x0F1F, 0x0F20, 0x0F21, 0x0F22, 0x0F23, 0x0F24, 0x0F25, 0x0F26, 0x0F27,
    0x0F28, 0x0F29, 0x0154, 0x021D, 0x0348, 0x0348, 0x0348, 0x0008, 0x021D, 0x021D, 0x021D, 0x021D,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x0008, 0x020B, 0x0F2A, 0x0F2B, 0x0F2C, 0x0F2D,
    0x0F2E, 0x0F2F, 0x0F30, 0x0F31, 0x0F32, 0x0F33, 0x0F34, 0x0F35, 0x0F36, 0x0F37, 0x0F38, 0x0F39,
    0x0F3A, 0x0F3B, 0x0F3C, 0x0F3D, 0x0F3E, 0x0F3F, 0x0F40, 0x0F41, 0x0F42, 0x0F43, 0x0F44, 0x0F45,
    0x0F46, 0x0F47, 0x021D, 0x021D, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0,
    0x021D, 0x021D, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E,
    0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E,
    0x002E, 0x002E, 0x002E, 0x020B, 0x020B, 0x020B, 0x020B, 0x020B, 0x020B, 0x020B, 0x020B, 0x020B,
    0x002E, 0x002E, 0x0F48, 0x0F49, 0x0F4A, 0x0F4B, 0x0F4C, 0x0F4D, 0x0F4E, 0x0F4F, 0x0F50, 0x0F51,
    0x0F52, 0x0F53, 0x0F54, 0x0F55, 0x00D6, 0x00D6, 0x0F56, 0x0F57, 0x0F58, 0x0F59, 0x0F5A, 0x0F5B,
    0x0F5C, 0x0F5D, 0x0F5E, 0x0F5F, 0x0F60, 0x0F61, 0x0F62, 0x0F63, 0x0F64, 0x0F65, 0x0F66, 0x0F67,
    0x0F68, 0x0F69, 0x0F6A, 0x0F6B, 0x0F6C, 0x0F6D, 0x0F6E, 0x0F6F, 0x0F70, 0x0F71, 0x0F72, 0x0F73,
    0x0F74, 0x0F75, 0x0F76, 0x0F77, 0x0F78, 0x0F79, 0x0F7A, 0x0F7B, 0x0F7C, 0x0F7D, 0x0F7E, 0x0F7F,
    0x0F80, 0x0F81, 0x0F82, 0x0F83, 0x0F84, 0x0F85, 0x0F86, 0x0F87, 0x0F88, 0x0F89, 0x0F8A, 0x0F8B,
    0x0F8C, 0x0F8D, 0x0F8E, 0x0F8F, 0x0F90, 0x0F91, 0x0F92, 0x0F93, 0x0F94, 0x00D6, 0x00D6, 0x00D6,
    0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x0F95, 0x0F96, 0x0F97, 0x0F98, 0x0F99, 0x0F9A, 0x0F9B,
    0x0F9C, 0x0F9D, 0x0F9E, 0x0F9F, 0x0FA0, 0x0FA1, 0x0FA2, 0x0FA3, 0x020B, 0x0FA4, 0x0FA4, 0x0FA5,
    0x0FA6, 0x0FA7, 0x00D6, 0x0154, 0x0FA8, 0x0FA9, 0x0FAA, 0x0FAB, 0x0FAC, 0x00D6, 0x0FAD, 0x0FAE,
    0x0FAF, 0x0FB0, 0x0FB1, 0x0FB2, 0x0FB3, 0x0FB4, 0x0FB5, 0x0FB6, 0x0FB7, 0x0FB8, 0x0FB9, 0x0FBA,
    0x0FBB, 0x0FBC, 0x0FBD, 0x0FBE, 0x0FBF, 0x0FC0, 0x0FC1, 0x0FC2, 0x0FC3, 0x0FC4, 0x0FC5, 0x00D6,
    0x0FC6, 0x0FC7, 0x0FC8, 0x0FC9, 0x0FCA, 0x0FCB, 0x0FCC, 0x0FCD, 0x0FCE, 0x0FCF, 0x0FD0, 0x0FD1,
    0x0FD2, 0x0FD3, 0x0FD4, 0x0FD5, 0x0000, 0x0000, 0x0FD6, 0x0FD7, 0x0FD8, 0x0FD9, 0x0FDA, 0x0FDB,
    0x0FDC, 0x0FDD, 0x0FDE, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0FDF, 0x0FE0, 0x0154,
    0x0FE1, 0x0FE2, 0x00D6, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496, 0x0154,
    0x0154, 0x0154, 0x04AA, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x049A, 0x049A, 0x0496, 0x0496, 0x049A,
    0x004C, 0x004C, 0x004C, 0x004C, 0x04AA, 0x0000, 0x0000, 0x0000, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x0347, 0x0347, 0x000A, 0x0053, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0008, 0x0008, 0x0008, 0x0008, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x049A, 0x049A, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x049A, 0x049A, 0x049A, 0x049A,
    0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A,
    0x04AA, 0x0496, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0415, 0x0415,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0415, 0x0415, 0x0415, 0x0154, 0x0415, 0x0154, 0x0154, 0x0496,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x022A, 0x022A, 0x022A, 0x0415, 0x0415,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x049A, 0x0609,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0415,
    0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F,
    0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x058F,
    0x058F, 0x058F, 0x058F, 0x058F, 0x058F, 0x0000, 0x0000, 0x0000, 0x0496, 0x0496, 0x0496, 0x049A,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x04CE,
    0x049A, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x049A, 0x049A, 0x0496, 0x0496, 0x049A, 0x049A,
    0x0609, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415,
    0x0415, 0x0415, 0x0000, 0x020C, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0415, 0x0415, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0496, 0x020C, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x049A, 0x049A, 0x0496, 0x0496, 0x049A, 0x049A, 0x0496, 0x0496, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0496,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496, 0x049A, 0x0000, 0x0000,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0000, 0x0000,
    0x0415, 0x0415, 0x0415, 0x0415, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x020C, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0347, 0x0347, 0x0347, 0x0154, 0x0536, 0x0496, 0x0536, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x021D, 0x0154, 0x021D, 0x021D, 0x022A, 0x0154, 0x0154, 0x021D, 0x021D, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x021D, 0x021D, 0x0154, 0x021D, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x020C, 0x0415, 0x0415,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x049A,
    0x0496, 0x0496, 0x049A, 0x049A, 0x0415, 0x0415, 0x0154, 0x020C, 0x020C, 0x049A, 0x04AA, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000,
    0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x00D6, 0x00D6, 0x00D6, 0x00D6,
    0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6,
    0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6,
    0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x0FE3, 0x00D6, 0x00D6, 0x00D6, 0x00D6,
    0x00D6, 0x00D6, 0x00D6, 0x0FA4, 0x0FE4, 0x0FE5, 0x0FE6, 0x0FE7, 0x00D6, 0x00D6, 0x00D6, 0x00D6,
    0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x00D6, 0x0FE8, 0x002E, 0x002E, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0FE9, 0x0FEA, 0x0FEB, 0x0FEC, 0x0FED, 0x0FEE, 0x0FEF, 0x0FF0, 0x0FF1, 0x0FF2, 0x0FF3, 0x0FF4,
    0x0FF5, 0x0FF6, 0x0FF7, 0x0FF8, 0x0FF9, 0x0FFA, 0x0FFB, 0x0FFC, 0x0FFD, 0x0FFE, 0x0FFF, 0x1000,
    0x1001, 0x1002, 0x1003, 0x1004, 0x1005, 0x1006, 0x1007, 0x1008, 0x1009, 0x100A, 0x100B, 0x100C,
    0x100D, 0x100E, 0x100F, 0x1010, 0x1011, 0x1012, 0x1013, 0x1014, 0x1015, 0x1016, 0x1017, 0x1018,
    0x1019, 0x101A, 0x101B, 0x101C, 0x101D, 0x101E, 0x101F, 0x1020, 0x1021, 0x1022, 0x1023, 0x1024,
    0x1025, 0x1026, 0x1027, 0x1028, 0x1029, 0x102A, 0x102B, 0x102C, 0x102D, 0x102E, 0x102F, 0x1030,
    0x1031, 0x1032, 0x1033, 0x1034, 0x1035, 0x1036, 0x1037, 0x1038, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x049A, 0x049A, 0x0496, 0x049A, 0x049A,
    0x0496, 0x049A, 0x049A, 0x0415, 0x049A, 0x04AA, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x1039, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A, 0x103A,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592,
    0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x0592, 0x103B,
    0x103B, 0x103B, 0x103B, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593,
    0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593,
    0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593,
    0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593, 0x0593,
    0x0593, 0x0593, 0x0593, 0x0593, 0x103B, 0x103B, 0x103B, 0x103B, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C, 0x103C,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103E, 0x103F, 0x1040, 0x1041, 0x1042, 0x1043, 0x1044, 0x1045,
    0x1045, 0x1046, 0x1047, 0x1048, 0x1049, 0x104A, 0x104B, 0x104C, 0x104D, 0x104E, 0x104F, 0x1050,
    0x1051, 0x1052, 0x1053, 0x1054, 0x1055, 0x1056, 0x1057, 0x1058, 0x1059, 0x105A, 0x105B, 0x105C,
    0x105D, 0x105E, 0x105F, 0x1060, 0x1061, 0x1062, 0x1063, 0x1064, 0x1065, 0x1066, 0x1067, 0x1068,
    0x1069, 0x106A, 0x106B, 0x106C, 0x106D, 0x106E, 0x106F, 0x1070, 0x1071, 0x1072, 0x1073, 0x1074,
    0x1075, 0x1076, 0x1077, 0x1078, 0x1079, 0x107A, 0x107B, 0x107C, 0x107D, 0x107E, 0x107F, 0x1080,
    0x1081, 0x1082, 0x1083, 0x1084, 0x1085, 0x1086, 0x1087, 0x1088, 0x1089, 0x108A, 0x108B, 0x108C,
    0x108D, 0x108E, 0x108F, 0x1090, 0x1091, 0x1092, 0x1093, 0x1094, 0x1095, 0x1096, 0x1097, 0x1098,
    0x1051, 0x1099, 0x109A, 0x109B, 0x109C, 0x109D, 0x109E, 0x109F, 0x10A0, 0x10A1, 0x10A2, 0x10A3,
    0x10A4, 0x10A5, 0x10A6, 0x10A7, 0x10A8, 0x10A9, 0x10AA, 0x10AB, 0x10AC, 0x10AD, 0x10AE, 0x10AF,
    0x10B0, 0x10B1, 0x10B2, 0x10B3, 0x10B4, 0x10B5, 0x10B6, 0x10B7, 0x10B8, 0x10B9, 0x10BA, 0x10BB,
    0x10BC, 0x10BD, 0x10BE, 0x10BF, 0x10C0, 0x10C1, 0x10C2, 0x10C3, 0x10C4, 0x10C5, 0x10C6, 0x10C7,
    0x10C8, 0x10C9, 0x10CA, 0x10CB, 0x10CC, 0x10CD, 0x10CE, 0x10CF, 0x10D0, 0x10D1, 0x10D2, 0x10D3,
    0x10D4, 0x10D5, 0x10D6, 0x10D7, 0x10D8, 0x10D9, 0x10DA, 0x10DB, 0x10DC, 0x10AB, 0x10DD, 0x10DE,
    0x10DF, 0x10E0, 0x10E1, 0x10E2, 0x10E3, 0x10E4, 0x109B, 0x10E5, 0x10E6, 0x10E7, 0x10E8, 0x10E9,
    0x10EA, 0x10EB, 0x10EC, 0x10ED, 0x10EE, 0x10EF, 0x10F0, 0x10F1, 0x10F2, 0x10F3, 0x10F4, 0x10F5,
    0x10F6, 0x10F7, 0x10F8, 0x1051, 0x10F9, 0x10FA, 0x10FB, 0x10FC, 0x10FD, 0x10FE, 0x10FF, 0x1100,
    0x1101, 0x1102, 0x1103, 0x1104, 0x1105, 0x1106, 0x1107, 0x1108, 0x1109, 0x110A, 0x110B, 0x110C,
    0x110D, 0x110E, 0x110F, 0x1110, 0x1111, 0x1112, 0x1113, 0x109D, 0x1114, 0x1115, 0x1116, 0x1117,
    0x1118, 0x1119, 0x111A, 0x111B, 0x111C, 0x111D, 0x111E, 0x111F, 0x1120, 0x1121, 0x1122, 0x1123,
    0x1124, 0x1125, 0x1126, 0x1127, 0x1128, 0x1129, 0x112A, 0x112B, 0x112C, 0x112D, 0x112E, 0x112F,
    0x1130, 0x1131, 0x1132, 0x1133, 0x1134, 0x1135, 0x1136, 0x1137, 0x1138, 0x1139, 0x113A, 0x113B,
    0x113C, 0x113D, 0x113E, 0x113F, 0x1140, 0x1141, 0x1142, 0x1143, 0x1144, 0x1145, 0x0C1A, 0x0C1A,
    0x1146, 0x0C1A, 0x1147, 0x0C1A, 0x0C1A, 0x1148, 0x1149, 0x114A, 0x114B, 0x114C, 0x114D, 0x114E,
    0x114F, 0x1150, 0x1151, 0x0C1A, 0x1152, 0x0C1A, 0x1153, 0x0C1A, 0x0C1A, 0x1154, 0x1155, 0x0C1A,
    0x0C1A, 0x0C1A, 0x1156, 0x1157, 0x1158, 0x1159, 0x115A, 0x115B, 0x115C, 0x115D, 0x115E, 0x115F,
    0x1160, 0x1161, 0x1162, 0x1163, 0x1164, 0x1165, 0x1166, 0x1167, 0x1168, 0x1169, 0x116A, 0x116B,
    0x116C, 0x116D, 0x116E, 0x116F, 0x1170, 0x1171, 0x1172, 0x1173, 0x1174, 0x1175, 0x1176, 0x1177,
    0x1178, 0x1179, 0x117A, 0x117B, 0x117C, 0x117D, 0x117E, 0x117F, 0x1180, 0x1181, 0x1182, 0x10D2,
    0x1183, 0x1184, 0x1185, 0x1186, 0x1187, 0x1188, 0x1188, 0x1189, 0x118A, 0x118B, 0x118C, 0x118D,
    0x118E, 0x118F, 0x1190, 0x1154, 0x1191, 0x1192, 0x1193, 0x1194, 0x1195, 0x1196, 0x0000, 0x0000,
    0x1197, 0x1198, 0x1199, 0x119A, 0x119B, 0x119C, 0x119D, 0x119E, 0x1162, 0x119F, 0x11A0, 0x11A1,
    0x1146, 0x11A2, 0x11A3, 0x11A4, 0x11A5, 0x11A6, 0x11A7, 0x11A8, 0x11A9, 0x11AA, 0x11AB, 0x11AC,
    0x11AD, 0x116B, 0x11AE, 0x116C, 0x11AF, 0x11B0, 0x11B1, 0x11B2, 0x11B3, 0x1147, 0x1066, 0x11B4,
    0x11B5, 0x11B6, 0x10AC, 0x1103, 0x11B7, 0x11B8, 0x1173, 0x11B9, 0x1174, 0x11BA, 0x11BB, 0x11BC,
    0x1149, 0x11BD, 0x11BE, 0x11BF, 0x11C0, 0x11C1, 0x114A, 0x11C2, 0x11C3, 0x11C4, 0x11C5, 0x11C6,
    0x11C7, 0x1182, 0x11C8, 0x11C9, 0x10D2, 0x11CA, 0x1186, 0x11CB, 0x11CC, 0x11CD, 0x11CE, 0x11CF,
    0x118B, 0x11D0, 0x1153, 0x11D1, 0x118C, 0x1099, 0x11D2, 0x118D, 0x11D3, 0x118F, 0x11D4, 0x11D5,
    0x11D6, 0x11D7, 0x11D8, 0x1191, 0x114F, 0x11D9, 0x1192, 0x11DA, 0x1193, 0x11DB, 0x1045, 0x11DC,
    0x11DD, 0x11DE, 0x11DF, 0x11E0, 0x11E1, 0x11E2, 0x11E3, 0x11E4, 0x11E5, 0x11E6, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x11E7, 0x11E8, 0x11E9, 0x11EA, 0x11EB, 0x11EC, 0x11ED, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x11EE, 0x11EF, 0x11F0, 0x11F1, 0x11F2,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x11F3, 0x11F4, 0x11F5, 0x11F6, 0x11F7, 0x11F8, 0x11F9,
    0x11FA, 0x11FB, 0x11FC, 0x11FD, 0x11FE, 0x11FF, 0x1200, 0x1201, 0x1202, 0x1203, 0x1204, 0x1205,
    0x1206, 0x1207, 0x1208, 0x1209, 0x120A, 0x120B, 0x120C, 0x0000, 0x120D, 0x120E, 0x120F, 0x1210,
    0x1211, 0x0000, 0x1212, 0x0000, 0x1213, 0x1214, 0x0000, 0x1215, 0x1216, 0x0000, 0x1217, 0x1218,
    0x1219, 0x121A, 0x121B, 0x121C, 0x121D, 0x121E, 0x121F, 0x1220, 0x1221, 0x1222, 0x1223, 0x1224,
    0x1225, 0x1226, 0x1227, 0x1228, 0x1229, 0x122A, 0x122B, 0x122C, 0x122D, 0x122E, 0x122F, 0x1230,
    0x1231, 0x1232, 0x1233, 0x1234, 0x1235, 0x1236, 0x1237, 0x1238, 0x1239, 0x123A, 0x123B, 0x123C,
    0x123D, 0x123E, 0x123F, 0x1240, 0x1241, 0x1242, 0x1243, 0x1244, 0x1245, 0x1246, 0x1247, 0x1248,
    0x1249, 0x124A, 0x124B, 0x124C, 0x124D, 0x124E, 0x124F, 0x1250, 0x1251, 0x1252, 0x1253, 0x1254,
    0x1255, 0x1256, 0x1257, 0x1258, 0x1259, 0x125A, 0x125B, 0x125C, 0x125D, 0x125E, 0x125F, 0x1260,
    0x1261, 0x1262, 0x1263, 0x1264, 0x1265, 0x1266, 0x1267, 0x1268, 0x1269, 0x126A, 0x126B, 0x126C,
    0x126D, 0x126E, 0x126F, 0x1270, 0x1271, 0x1272, 0x1273, 0x1274, 0x1275, 0x1276, 0x1277, 0x1278,
    0x1279, 0x127A, 0x127B, 0x127C, 0x127D, 0x127E, 0x127F, 0x1280, 0x1281, 0x1282, 0x1283, 0x1283,
    0x1283, 0x1283, 0x1283, 0x1283, 0x1283, 0x1283, 0x1283, 0x1283, 0x1283, 0x1283, 0x1283, 0x1283,
    0x1283, 0x1283, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1284, 0x1285, 0x1286, 0x1287, 0x1288,
    0x1289, 0x128A, 0x128B, 0x128C, 0x128D, 0x128E, 0x128F, 0x1290, 0x1291, 0x1292, 0x1293, 0x1294,
    0x1295, 0x1296, 0x1297, 0x1298, 0x1299, 0x129A, 0x129B, 0x129C, 0x129D, 0x129E, 0x129F, 0x12A0,
    0x12A1, 0x12A2, 0x12A3, 0x12A4, 0x12A5, 0x12A6, 0x12A7, 0x12A8, 0x12A9, 0x12AA, 0x12AB, 0x12AC,
    0x12AD, 0x12AE, 0x12AF, 0x12B0, 0x12B1, 0x12B2, 0x12B3, 0x12AA, 0x12B4, 0x12B5, 0x12B6, 0x12B7,
    0x12B8, 0x12B9, 0x12BA, 0x12BB, 0x12BC, 0x12BD, 0x12BE, 0x12BF, 0x12C0, 0x12C1, 0x12C2, 0x12C3,
    0x12C4, 0x12C5, 0x12C6, 0x12C7, 0x12C8, 0x12C9, 0x12CA, 0x12CB, 0x12CC, 0x12CD, 0x12CE, 0x12CF,
    0x12D0, 0x12D1, 0x12D2, 0x12D3, 0x12D4, 0x12D5, 0x12D6, 0x12D7, 0x12D8, 0x12D9, 0x12DA, 0x12DB,
    0x12DC, 0x12DD, 0x12DE, 0x12DF, 0x12E0, 0x12E1, 0x12E2, 0x12E3, 0x12E4, 0x12E5, 0x12E6, 0x12E7,
    0x12E8, 0x12E9, 0x12EA, 0x12EB, 0x12EC, 0x12ED, 0x12EE, 0x12EF, 0x12F0, 0x12F1, 0x12F2, 0x12F3,
    0x12F4, 0x12F5, 0x12F6, 0x12F7, 0x12F8, 0x12F9, 0x12FA, 0x12FB, 0x12FC, 0x12FD, 0x12FE, 0x12FF,
    0x1300, 0x1301, 0x1302, 0x1303, 0x1304, 0x1305, 0x1306, 0x1307, 0x1308, 0x1309, 0x130A, 0x130B,
    0x130C, 0x130D, 0x130E, 0x130F, 0x1310, 0x1311, 0x1312, 0x1313, 0x1314, 0x1315, 0x1316, 0x1317,
    0x12AB, 0x1318, 0x1319, 0x131A, 0x131B, 0x131C, 0x131D, 0x131E, 0x131F, 0x1320, 0x1321, 0x1322,
    0x1323, 0x1324, 0x1325, 0x1326, 0x1327, 0x1328, 0x1329, 0x132A, 0x132B, 0x132C, 0x132D, 0x132E,
    0x132F, 0x1330, 0x1331, 0x1332, 0x1333, 0x1334, 0x1335, 0x1336, 0x1337, 0x1338, 0x1339, 0x133A,
    0x133B, 0x133C, 0x133D, 0x133E, 0x133F, 0x1340, 0x1341, 0x1342, 0x1343, 0x1344, 0x1345, 0x1346,
    0x1347, 0x1348, 0x1349, 0x134A, 0x134B, 0x134C, 0x134D, 0x134E, 0x134F, 0x1350, 0x1351, 0x1352,
    0x1353, 0x1354, 0x1355, 0x1356, 0x1357, 0x1358, 0x1359, 0x135A, 0x135B, 0x135C, 0x135D, 0x135E,
    0x135F, 0x1360, 0x1361, 0x1362, 0x1363, 0x1364, 0x1365, 0x1366, 0x1367, 0x1368, 0x1369, 0x136A,
    0x136B, 0x136C, 0x136D, 0x136E, 0x136F, 0x1370, 0x1371, 0x1372, 0x1373, 0x1374, 0x1375, 0x1376,
    0x1377, 0x1378, 0x1379, 0x137A, 0x137B, 0x137C, 0x137D, 0x137E, 0x137F, 0x1380, 0x1381, 0x1382,
    0x1383, 0x1384, 0x1385, 0x1386, 0x1387, 0x1388, 0x1389, 0x138A, 0x138B, 0x138C, 0x138D, 0x138E,
    0x138F, 0x1390, 0x1391, 0x1392, 0x1393, 0x1394, 0x1395, 0x1396, 0x1397, 0x1398, 0x1399, 0x139A,
    0x139B, 0x139C, 0x139D, 0x139E, 0x139F, 0x13A0, 0x13A1, 0x13A2, 0x13A3, 0x13A4, 0x13A5, 0x13A6,
    0x13A7, 0x13A8, 0x13A9, 0x13AA, 0x13AB, 0x13AC, 0x13AD, 0x13AE, 0x13AF, 0x13B0, 0x13B1, 0x13B2,
    0x13B3, 0x13B4, 0x13B5, 0x13B6, 0x13B7, 0x13B8, 0x13B9, 0x13BA, 0x13BB, 0x13BC, 0x13BD, 0x13BE,
    0x13BF, 0x13C0, 0x13C1, 0x13C2, 0x13C3, 0x13C4, 0x13C5, 0x13C6, 0x13C7, 0x13C8, 0x13C9, 0x13CA,
    0x13CB, 0x13CC, 0x13CD, 0x13CE, 0x13CF, 0x13D0, 0x13D1, 0x13D2, 0x13D3, 0x13D4, 0x13D5, 0x13D6,
    0x13D7, 0x13D8, 0x13D9, 0x13DA, 0x13DB, 0x13DC, 0x13DD, 0x13DE, 0x13DF, 0x13E0, 0x13E1, 0x13E2,
    0x13E3, 0x13E4, 0x13E5, 0x13E6, 0x13E7, 0x13E8, 0x13E9, 0x13EA, 0x13EB, 0x13EC, 0x13ED, 0x0897,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x13EE, 0x13EF, 0x13F0, 0x13F1, 0x13F2, 0x13F3, 0x13F4, 0x13F5,
    0x13F6, 0x13F7, 0x13F8, 0x13F9, 0x13FA, 0x13FB, 0x13FC, 0x13FD, 0x13FE, 0x13FF, 0x1400, 0x1401,
    0x1402, 0x1403, 0x1404, 0x1405, 0x1406, 0x1407, 0x1408, 0x1409, 0x140A, 0x140B, 0x140C, 0x140D,
    0x140E, 0x140F, 0x1410, 0x1411, 0x1412, 0x1413, 0x1414, 0x1415, 0x1416, 0x1417, 0x1418, 0x1419,
    0x141A, 0x141B, 0x141C, 0x141D, 0x141E, 0x141F, 0x1420, 0x1421, 0x1422, 0x1423, 0x1424, 0x1425,
    0x1426, 0x1427, 0x1428, 0x1429, 0x142A, 0x142B, 0x142C, 0x142D, 0x0000, 0x0000, 0x142E, 0x142F,
    0x1430, 0x1431, 0x1432, 0x1433, 0x1434, 0x1435, 0x1436, 0x1437, 0x1438, 0x1439, 0x143A, 0x143B,
    0x143C, 0x143D, 0x143E, 0x143F, 0x1440, 0x1441, 0x1442, 0x1443, 0x1444, 0x1445, 0x1446, 0x1447,
    0x1448, 0x1449, 0x144A, 0x144B, 0x144C, 0x144D, 0x144E, 0x144F, 0x1450, 0x1451, 0x1452, 0x1453,
    0x1454, 0x1455, 0x1456, 0x1457, 0x1458, 0x1459, 0x145A, 0x145B, 0x145C, 0x145D, 0x145E, 0x145F,
    0x1460, 0x1461, 0x1462, 0x1463, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1464, 0x1465, 0x1466, 0x1467,
    0x1468, 0x1469, 0x146A, 0x146B, 0x146C, 0x146D, 0x146E, 0x146F, 0x1470, 0x004C, 0x0000, 0x0000,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x1471, 0x1472, 0x1473, 0x1474, 0x1475, 0x1476, 0x1477, 0x1478,
    0x1479, 0x147A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x021D, 0x021D, 0x021D, 0x021D,
    0x021D, 0x021D, 0x021D, 0x022A, 0x022A, 0x022A, 0x022A, 0x022A, 0x022A, 0x022A, 0x021D, 0x021D,
    0x147B, 0x147C, 0x147D, 0x147E, 0x147E, 0x147F, 0x1480, 0x1481, 0x1482, 0x1483, 0x1484, 0x1485,
    0x1486, 0x1487, 0x1488, 0x1489, 0x148A, 0x148B, 0x148C, 0x148D, 0x148E, 0x0C18, 0x0C18, 0x148F,
    0x1490, 0x1491, 0x1491, 0x1491, 0x1491, 0x1492, 0x1492, 0x1492, 0x1493, 0x1494, 0x1495, 0x0000,
    0x1496, 0x1497, 0x1498, 0x1499, 0x149A, 0x149B, 0x149C, 0x149D, 0x149E, 0x149F, 0x14A0, 0x14A1,
    0x14A2, 0x14A3, 0x14A4, 0x14A5, 0x14A6, 0x14A7, 0x14A8, 0x0000, 0x14A9, 0x14AA, 0x14AB, 0x14AC,
    0x0000, 0x0000, 0x0000, 0x0000, 0x14AD, 0x14AE, 0x14AF, 0x0474, 0x14B0, 0x0000, 0x14B1, 0x14B2,
    0x14B3, 0x14B4, 0x14B5, 0x14B6, 0x14B7, 0x14B8, 0x14B9, 0x14BA, 0x14BB, 0x14BC, 0x14BD, 0x14BE,
    0x14BF, 0x14C0, 0x14C1, 0x14C2, 0x14C3, 0x14C4, 0x14C5, 0x14C6, 0x14C7, 0x14C8, 0x14C9, 0x14CA,
    0x14CB, 0x14CC, 0x14CD, 0x14CE, 0x14CF, 0x14D0, 0x14D1, 0x14D2, 0x14D3, 0x14D4, 0x14D5, 0x14D6,
    0x14D7, 0x14D8, 0x14D9, 0x14DA, 0x14DB, 0x14DC, 0x14DD, 0x14DE, 0x14DF, 0x14E0, 0x14E1, 0x14E2,
    0x14E3, 0x14E4, 0x14E5, 0x14E6, 0x14E7, 0x14E8, 0x14E9, 0x14EA, 0x14EB, 0x14EC, 0x14ED, 0x14EE,
    0x14EF, 0x14F0, 0x14F1, 0x14F2, 0x14F3, 0x14F4, 0x14F5, 0x14F6, 0x14F7, 0x14F8, 0x14F9, 0x14FA,
    0x14FB, 0x14FC, 0x14FD, 0x14FE, 0x14FF, 0x1500, 0x1501, 0x1502, 0x1503, 0x1504, 0x1505, 0x1506,
    0x1507, 0x1508, 0x1509, 0x150A, 0x150B, 0x150C, 0x150D, 0x150E, 0x150F, 0x1510, 0x1511, 0x1512,
    0x1513, 0x1514, 0x1515, 0x1516, 0x1517, 0x1518, 0x1519, 0x151A, 0x151B, 0x151C, 0x151D, 0x151E,
    0x151F, 0x1520, 0x1521, 0x1522, 0x1523, 0x1524, 0x1525, 0x1526, 0x1527, 0x1528, 0x1529, 0x152A,
    0x152B, 0x152C, 0x152D, 0x152E, 0x152F, 0x1530, 0x1531, 0x1532, 0x1533, 0x1534, 0x1535, 0x1536,
    0x1537, 0x0000, 0x0000, 0x05F1, 0x0000, 0x1538, 0x1539, 0x153A, 0x153B, 0x153C, 0x153D, 0x153E,
    0x153F, 0x1540, 0x1541, 0x1542, 0x1543, 0x1544, 0x1545, 0x1546, 0x1547, 0x1548, 0x1549, 0x154A,
    0x154B, 0x154C, 0x154D, 0x154E, 0x154F, 0x1550, 0x1551, 0x1552, 0x1553, 0x1554, 0x1555, 0x1556,
    0x1557, 0x1558, 0x1559, 0x155A, 0x155B, 0x155C, 0x155D, 0x155E, 0x155F, 0x1560, 0x1561, 0x1562,
    0x1563, 0x1564, 0x1565, 0x1566, 0x1567, 0x1568, 0x1569, 0x156A, 0x156B, 0x156C, 0x156D, 0x156E,
    0x156F, 0x1570, 0x1571, 0x1572, 0x1573, 0x1574, 0x1575, 0x1576, 0x1577, 0x1578, 0x1579, 0x157A,
    0x157B, 0x157C, 0x157D, 0x157E, 0x157F, 0x1580, 0x1581, 0x1582, 0x1583, 0x1584, 0x1585, 0x1586,
    0x1587, 0x1588, 0x1589, 0x158A, 0x158B, 0x158C, 0x158D, 0x158E, 0x158F, 0x1590, 0x1591, 0x1592,
    0x1593, 0x1594, 0x1595, 0x1596, 0x1597, 0x1598, 0x1599, 0x159A, 0x159B, 0x159C, 0x159D, 0x159E,
    0x159F, 0x15A0, 0x15A1, 0x15A2, 0x15A3, 0x15A4, 0x15A5, 0x15A6, 0x15A7, 0x15A8, 0x15A9, 0x15AA,
    0x15AB, 0x15AC, 0x15AD, 0x15AE, 0x15AF, 0x15B0, 0x15B1, 0x15B2, 0x15B3, 0x15B4, 0x15B5, 0x15B6,
    0x15B7, 0x15B8, 0x15B9, 0x15BA, 0x15BB, 0x15BC, 0x15BD, 0x15BE, 0x15BF, 0x15C0, 0x15C1, 0x15C2,
    0x15C3, 0x15C4, 0x15C5, 0x15C6, 0x15C7, 0x15C8, 0x15C9, 0x15CA, 0x15CB, 0x15CC, 0x15CD, 0x15CE,
    0x15CF, 0x15D0, 0x15D1, 0x15D2, 0x15D3, 0x15D4, 0x15D5, 0x15D6, 0x15D7, 0x15D8, 0x15D9, 0x15DA,
    0x15DB, 0x15DC, 0x15DD, 0x15DE, 0x15DF, 0x15E0, 0x15E1, 0x15E2, 0x15E3, 0x15E4, 0x15E5, 0x15E6,
    0x15E7, 0x15E8, 0x15E9, 0x15EA, 0x15EB, 0x15EC, 0x15ED, 0x15EE, 0x15EF, 0x15F0, 0x15F1, 0x15F2,
    0x15F3, 0x15F4, 0x15F5, 0x0000, 0x0000, 0x0000, 0x15F6, 0x15F7, 0x15F8, 0x15F9, 0x15FA, 0x15FB,
    0x0000, 0x0000, 0x15FC, 0x15FD, 0x15FE, 0x15FF, 0x1600, 0x1601, 0x0000, 0x0000, 0x1602, 0x1603,
    0x1604, 0x1605, 0x1606, 0x1607, 0x0000, 0x0000, 0x1608, 0x1609, 0x160A, 0x0000, 0x0000, 0x0000,
    0x160B, 0x160C, 0x160D, 0x160E, 0x160F, 0x1610, 0x1611, 0x0000, 0x1612, 0x1613, 0x1614, 0x1615,
    0x1616, 0x1617, 0x1618, 0x0000, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x1619, 0x1619, 0x1619, 0x004C, 0x004C, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0000, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0415, 0x0008, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x0000, 0x0000, 0x0000, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A,
    0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A,
    0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A,
    0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A,
    0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x161A, 0x04E8, 0x04E8, 0x04E8,
    0x04E8, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x04E8, 0x04E8, 0x004C, 0x0347, 0x0347, 0x0000,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x0000, 0x0000, 0x0000, 0x004C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x022A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x022A, 0x161B, 0x161B, 0x161B, 0x161B, 0x161B, 0x161B, 0x161B, 0x161B, 0x161B, 0x161B, 0x161B,
    0x161B, 0x161B, 0x161B, 0x161B, 0x161B, 0x161B, 0x161B, 0x161B, 0x161B, 0x161B, 0x161B, 0x161B,
    0x161B, 0x161B, 0x161B, 0x161B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x05F0, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x05F0, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0415,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0415, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x161C, 0x161D, 0x161E, 0x161F, 0x1620, 0x1621, 0x1622, 0x1623, 0x1624, 0x1625, 0x1626, 0x1627,
    0x1628, 0x1629, 0x162A, 0x162B, 0x162C, 0x162D, 0x162E, 0x162F, 0x1630, 0x1631, 0x1632, 0x1633,
    0x1634, 0x1635, 0x1636, 0x1637, 0x1638, 0x1639, 0x163A, 0x163B, 0x163C, 0x163D, 0x163E, 0x163F,
    0x1640, 0x1641, 0x1642, 0x1643, 0x1644, 0x1645, 0x1646, 0x1647, 0x1648, 0x1649, 0x164A, 0x164B,
    0x164C, 0x164D, 0x164E, 0x164F, 0x1650, 0x1651, 0x1652, 0x1653, 0x1654, 0x1655, 0x1656, 0x1657,
    0x1658, 0x1659, 0x165A, 0x165B, 0x165C, 0x165D, 0x165E, 0x165F, 0x1660, 0x1661, 0x1662, 0x1663,
    0x1664, 0x1665, 0x1666, 0x1667, 0x1668, 0x1669, 0x166A, 0x166B, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x166C, 0x166D, 0x166E, 0x166F,
    0x1670, 0x1671, 0x1672, 0x1673, 0x1674, 0x1675, 0x1676, 0x1677, 0x1678, 0x1679, 0x167A, 0x167B,
    0x167C, 0x167D, 0x167E, 0x167F, 0x1680, 0x1681, 0x1682, 0x1683, 0x1684, 0x1685, 0x1686, 0x1687,
    0x1688, 0x1689, 0x168A, 0x168B, 0x168C, 0x168D, 0x168E, 0x168F, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1690, 0x1691, 0x1692, 0x1693, 0x1694, 0x1695, 0x1696, 0x1697, 0x1698, 0x1699, 0x169A, 0x169B,
    0x169C, 0x169D, 0x169E, 0x169F, 0x16A0, 0x16A1, 0x16A2, 0x16A3, 0x16A4, 0x16A5, 0x16A6, 0x16A7,
    0x16A8, 0x16A9, 0x16AA, 0x16AB, 0x16AC, 0x16AD, 0x16AE, 0x16AF, 0x16B0, 0x16B1, 0x16B2, 0x16B3,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x0000, 0x0000, 0x045B, 0x0000, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x0000, 0x045B, 0x045B, 0x0000, 0x0000, 0x0000,
    0x045B, 0x0000, 0x0000, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x0000, 0x0450, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x16B5,
    0x16B5, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x16B4,
    0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x0000, 0x045B, 0x045B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x16B4,
    0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x0000, 0x0000, 0x0000, 0x0008,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0450, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x0000, 0x0000, 0x0000, 0x0000,
    0x16B4, 0x16B4, 0x045B, 0x045B, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4,
    0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x0000, 0x0000, 0x16B4, 0x16B4,
    0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4,
    0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4,
    0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4,
    0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x045B, 0x0496, 0x0496, 0x0496,
    0x0000, 0x0496, 0x0496, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0496, 0x022A, 0x0496, 0x021D,
    0x045B, 0x045B, 0x045B, 0x045B, 0x0000, 0x045B, 0x045B, 0x045B, 0x0000, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x0000, 0x0000, 0x021D, 0x0237, 0x022A, 0x0000, 0x0000, 0x0000, 0x0000, 0x04AA,
    0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0450, 0x0450, 0x0450, 0x0450, 0x0450, 0x0450, 0x0450, 0x0450,
    0x0450, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x16B4, 0x16B4, 0x0450, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x16B4, 0x16B4, 0x16B4,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x16B5, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x021D, 0x022A, 0x0000,
    0x0000, 0x0000, 0x0000, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x0450, 0x0450, 0x0450, 0x0450,
    0x0450, 0x0450, 0x0450, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x0000, 0x0000, 0x0000, 0x0008, 0x0008, 0x0008,
    0x0008, 0x0008, 0x0008, 0x0008, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x0000, 0x0000, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0450, 0x0450, 0x0450,
    0x0450, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x16B6, 0x16B7, 0x16B8, 0x16B9, 0x16BA, 0x16BB, 0x16BC, 0x16BD, 0x16BE, 0x16BF, 0x16C0, 0x16C1,
    0x16C2, 0x16C3, 0x16C4, 0x16C5, 0x16C6, 0x16C7, 0x16C8, 0x16C9, 0x16CA, 0x16CB, 0x16CC, 0x16CD,
    0x16CE, 0x16CF, 0x16D0, 0x16D1, 0x16D2, 0x16D3, 0x16D4, 0x16D5, 0x16D6, 0x16D7, 0x16D8, 0x16D9,
    0x16DA, 0x16DB, 0x16DC, 0x16DD, 0x16DE, 0x16DF, 0x16E0, 0x16E1, 0x16E2, 0x16E3, 0x16E4, 0x16E5,
    0x16E6, 0x16E7, 0x16E8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x16E9, 0x16EA, 0x16EB, 0x16EC, 0x16ED, 0x16EE, 0x16EF, 0x16F0,
    0x16F1, 0x16F2, 0x16F3, 0x16F4, 0x16F5, 0x16F6, 0x16F7, 0x16F8, 0x16F9, 0x16FA, 0x16FB, 0x16FC,
    0x16FD, 0x16FE, 0x16FF, 0x1700, 0x1701, 0x1702, 0x1703, 0x1704, 0x1705, 0x1706, 0x1707, 0x1708,
    0x1709, 0x170A, 0x170B, 0x170C, 0x170D, 0x170E, 0x170F, 0x1710, 0x1711, 0x1712, 0x1713, 0x1714,
    0x1715, 0x1716, 0x1717, 0x1718, 0x1719, 0x171A, 0x171B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x021D, 0x021D, 0x021D, 0x021D,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0486, 0x0486, 0x0486, 0x0486,
    0x0486, 0x0486, 0x0486, 0x0486, 0x0486, 0x0486, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C,
    0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C,
    0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x171C, 0x0000, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x0000, 0x021D, 0x021D, 0x044E, 0x0000, 0x0000, 0x045B, 0x045B, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x16B4, 0x16B4, 0x16B4,
    0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x045B, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474, 0x0474,
    0x0474, 0x0474, 0x022A, 0x022A, 0x021D, 0x021D, 0x021D, 0x022A, 0x021D, 0x022A, 0x022A, 0x022A,
    0x022A, 0x171D, 0x171D, 0x171D, 0x171D, 0x046F, 0x046F, 0x046F, 0x046F, 0x046F, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x16B4, 0x16B4, 0x16B4,
    0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x049A, 0x0496, 0x049A, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x04AA, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415,
    0x0415, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8,
    0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8, 0x04E8,
    0x04E8, 0x04E8, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x04AA, 0x0496, 0x0496, 0x049A, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x171E, 0x171F, 0x1720, 0x1721, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x1722, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x1723,
    0x0154, 0x0154, 0x0154, 0x0154, 0x049A, 0x049A, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x049A,
    0x049A, 0x04AA, 0x1724, 0x0415, 0x0415, 0x1725, 0x0415, 0x0415, 0x0415, 0x0415, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1725, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x021D, 0x021D, 0x021D, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x1726, 0x0496, 0x0496, 0x0496, 0x0496, 0x049A, 0x0496, 0x1727, 0x1728,
    0x0496, 0x1729, 0x172A, 0x04AA, 0x04AA, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0415, 0x0415, 0x0415, 0x0415, 0x0154, 0x049A, 0x049A, 0x0154,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x04CE, 0x0415, 0x0415, 0x0154, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0496, 0x0496, 0x049A, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x049A,
    0x049A, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x049A,
    0x0609, 0x0154, 0x04F9, 0x04F9, 0x0154, 0x0415, 0x0415, 0x0415, 0x0415, 0x0496, 0x04CE, 0x0496,
    0x0496, 0x0415, 0x049A, 0x0496, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x0154, 0x0415, 0x0154, 0x0415, 0x0415, 0x0415, 0x0000, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x049A, 0x049A, 0x049A, 0x0496, 0x0496, 0x0496, 0x049A, 0x049A, 0x0496, 0x0609, 0x04CE, 0x0496,
    0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0496, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0000, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496,
    0x049A, 0x049A, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x04CE, 0x04AA, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0496, 0x0496, 0x049A, 0x049A,
    0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0154,
    0x0154, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154,
    0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x04CE, 0x04CE, 0x0154, 0x172B, 0x049A,
    0x0496, 0x049A, 0x049A, 0x049A, 0x049A, 0x0000, 0x0000, 0x172C, 0x049A, 0x0000, 0x0000, 0x172D,
    0x172E, 0x0609, 0x0000, 0x0000, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x172F,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x049A, 0x049A,
    0x0000, 0x0000, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x0000, 0x0000, 0x0000,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x049A, 0x049A, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x049A, 0x049A, 0x04AA, 0x0496, 0x0496, 0x049A, 0x04CE, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0415, 0x0415, 0x0000, 0x0415, 0x021D, 0x0154,
    0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x1730, 0x049A, 0x049A, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x1731, 0x1732, 0x1733, 0x1734, 0x1735, 0x1736, 0x0496,
    0x0496, 0x049A, 0x04AA, 0x04CE, 0x0154, 0x0154, 0x0415, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x1737,
    0x049A, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x0000, 0x0000, 0x1738, 0x1739, 0x173A, 0x173B,
    0x0496, 0x0496, 0x049A, 0x04AA, 0x04CE, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415,
    0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415,
    0x0415, 0x0415, 0x0415, 0x0415, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496, 0x0496, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x049A, 0x049A, 0x049A, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x049A, 0x049A, 0x0496, 0x049A, 0x04AA,
    0x0496, 0x0415, 0x0415, 0x0415, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0008, 0x0008, 0x0008, 0x0008,
    0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496,
    0x049A, 0x0496, 0x049A, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0609, 0x04CE,
    0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0496, 0x0496, 0x0496, 0x0536, 0x0536, 0x0496, 0x0496,
    0x0496, 0x0496, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x04AA, 0x0000, 0x0000, 0x0000, 0x0000,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04C0, 0x04C0,
    0x0415, 0x0415, 0x0415, 0x0347, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x049A, 0x049A, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x049A, 0x04AA, 0x04CE, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x173C, 0x173D, 0x173E, 0x173F,
    0x1740, 0x1741, 0x1742, 0x1743, 0x1744, 0x1745, 0x1746, 0x1747, 0x1748, 0x1749, 0x174A, 0x174B,
    0x174C, 0x174D, 0x174E, 0x174F, 0x1750, 0x1751, 0x1752, 0x1753, 0x1754, 0x1755, 0x1756, 0x1757,
    0x1758, 0x1759, 0x175A, 0x175B, 0x175C, 0x175D, 0x175E, 0x175F, 0x1760, 0x1761, 0x1762, 0x1763,
    0x1764, 0x1765, 0x1766, 0x1767, 0x1768, 0x1769, 0x176A, 0x176B, 0x176C, 0x176D, 0x176E, 0x176F,
    0x1770, 0x1771, 0x1772, 0x1773, 0x1774, 0x1775, 0x1776, 0x1777, 0x1778, 0x1779, 0x177A, 0x177B,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0154, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x177C, 0x049A, 0x049A, 0x049A,
    0x049A, 0x177D, 0x0000, 0x049A, 0x177E, 0x0000, 0x0000, 0x0496, 0x0496, 0x0609, 0x04AA, 0x04F9,
    0x049A, 0x04F9, 0x049A, 0x04CE, 0x0415, 0x0415, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x049A, 0x049A, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496, 0x0000, 0x0000, 0x0496, 0x0496,
    0x049A, 0x049A, 0x049A, 0x049A, 0x04AA, 0x0154, 0x0415, 0x0154, 0x049A, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x177F, 0x177F, 0x0496, 0x0496, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0496, 0x04AA, 0x0496, 0x0496, 0x0496, 0x0496, 0x049A, 0x04F9, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x04AA,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x049A, 0x049A, 0x0496, 0x0496, 0x0496, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x04F9, 0x04F9, 0x04F9, 0x04F9, 0x04F9, 0x04F9, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x049A, 0x0496, 0x04AA, 0x0415, 0x0415,
    0x0415, 0x0154, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x049A, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0000, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x049A, 0x1780,
    0x0154, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x0000, 0x0000, 0x0000,
    0x0415, 0x0415, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0000, 0x049A, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x049A, 0x0496, 0x0496, 0x049A, 0x0496, 0x0496, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0000, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0000, 0x0000, 0x0000, 0x0496, 0x0000,
    0x0496, 0x0496, 0x0000, 0x0496, 0x0496, 0x0496, 0x04CE, 0x0496, 0x04AA, 0x04AA, 0x04F9, 0x0496,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154, 0x0000, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x0000,
    0x0496, 0x0496, 0x0000, 0x049A, 0x049A, 0x0496, 0x049A, 0x04AA, 0x0154, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0496, 0x0496, 0x049A, 0x049A, 0x0415,
    0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x000A, 0x000A, 0x000A, 0x000A, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0415,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0,
    0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0,
    0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0,
    0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0,
    0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0,
    0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0,
    0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0,
    0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0,
    0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0,
    0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x05F0, 0x0000, 0x0415, 0x0415, 0x0415, 0x0415,
    0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000,
    0x1781, 0x1781, 0x1781, 0x1781, 0x1781, 0x1781, 0x1781, 0x1781, 0x1781, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0415, 0x0415,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0237, 0x0237, 0x0237, 0x0237,
    0x0237, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x0415, 0x0415, 0x0415, 0x0415, 0x0415,
    0x0347, 0x0347, 0x0347, 0x0347, 0x020C, 0x020C, 0x020C, 0x020C, 0x0415, 0x0347, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0000, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1782, 0x1783, 0x1784, 0x1785,
    0x1786, 0x1787, 0x1788, 0x1789, 0x178A, 0x178B, 0x178C, 0x178D, 0x178E, 0x178F, 0x1790, 0x1791,
    0x1792, 0x1793, 0x1794, 0x1795, 0x1796, 0x1797, 0x1798, 0x1799, 0x179A, 0x179B, 0x179C, 0x179D,
    0x179E, 0x179F, 0x17A0, 0x17A1, 0x17A2, 0x17A3, 0x17A4, 0x17A5, 0x17A6, 0x17A7, 0x17A8, 0x17A9,
    0x17AA, 0x17AB, 0x17AC, 0x17AD, 0x17AE, 0x17AF, 0x17B0, 0x17B1, 0x17B2, 0x17B3, 0x17B4, 0x17B5,
    0x17B6, 0x17B7, 0x17B8, 0x17B9, 0x17BA, 0x17BB, 0x17BC, 0x17BD, 0x17BE, 0x17BF, 0x17C0, 0x17C1,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x0415,
    0x0415, 0x0415, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0496, 0x0154, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A,
    0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A,
    0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A,
    0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A,
    0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A, 0x049A,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0496, 0x0496, 0x0496, 0x0496, 0x020C,
    0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x020C,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0C19, 0x0C19, 0x0C18, 0x0C19, 0x0496, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x17C2, 0x17C2, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0C1A, 0x0C1A, 0x0C1A, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0000, 0x0000, 0x0347, 0x0496, 0x0237, 0x0415,
    0x05F1, 0x05F1, 0x05F1, 0x05F1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0000, 0x0000, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x17C3, 0x17C4, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x17C5, 0x17C6, 0x17C7, 0x17C8, 0x17C9, 0x17CA, 0x17CB, 0x17CC, 0x17CD, 0x0237,
    0x0237, 0x0237, 0x0347, 0x0347, 0x0347, 0x17CE, 0x17CF, 0x17D0, 0x17D1, 0x17D2, 0x17D3, 0x05F1,
    0x05F1, 0x05F1, 0x05F1, 0x05F1, 0x05F1, 0x05F1, 0x05F1, 0x022A, 0x022A, 0x022A, 0x022A, 0x022A,
    0x022A, 0x022A, 0x022A, 0x0347, 0x0347, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x022A, 0x022A,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x021D, 0x021D, 0x021D, 0x021D, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x17D4, 0x17D5, 0x17D6,
    0x17D7, 0x17D8, 0x17D9, 0x17DA, 0x17DB, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x021D, 0x021D, 0x021D, 0x004C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0, 0x04C0,
    0x04C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x17DC, 0x08F8, 0x08DF, 0x090A, 0x08FA, 0x08FB, 0x17DD, 0x08E6,
    0x08E9, 0x17DE, 0x17DF, 0x08EA, 0x08FD, 0x08EC, 0x17E0, 0x08EE, 0x08EF, 0x08F0, 0x17E1, 0x17E2,
    0x17E3, 0x17E4, 0x17E5, 0x17E6, 0x17E7, 0x08F4, 0x17E8, 0x17E9, 0x17EA, 0x090B, 0x08F9, 0x17EB,
    0x08E5, 0x08E7, 0x090C, 0x090D, 0x17EC, 0x08EB, 0x17ED, 0x17EE, 0x08FE, 0x17EF, 0x17F0, 0x17F1,
    0x17F2, 0x17F3, 0x17F4, 0x17F5, 0x17F6, 0x17F7, 0x17F8, 0x17F9, 0x17DC, 0x08F8, 0x08DF, 0x090A,
    0x08FA, 0x08FB, 0x17DD, 0x08E6, 0x08E9, 0x17DE, 0x17DF, 0x08EA, 0x08FD, 0x08EC, 0x17E0, 0x08EE,
    0x08EF, 0x08F0, 0x17E1, 0x17E2, 0x17E3, 0x17E4, 0x17E5, 0x17E6, 0x17E7, 0x08F4, 0x17E8, 0x17E9,
    0x17EA, 0x090B, 0x08F9, 0x17EB, 0x08E5, 0x0000, 0x090C, 0x090D, 0x17EC, 0x08EB, 0x17ED, 0x17EE,
    0x08FE, 0x17EF, 0x17F0, 0x17F1, 0x17F2, 0x17F3, 0x17F4, 0x17F5, 0x17F6, 0x17F7, 0x17F8, 0x17F9,
    0x17DC, 0x08F8, 0x08DF, 0x090A, 0x08FA, 0x08FB, 0x17DD, 0x08E6, 0x08E9, 0x17DE, 0x17DF, 0x08EA,
    0x08FD, 0x08EC, 0x17E0, 0x08EE, 0x08EF, 0x08F0, 0x17E1, 0x17E2, 0x17E3, 0x17E4, 0x17E5, 0x17E6,
    0x17E7, 0x08F4, 0x17E8, 0x17E9, 0x17EA, 0x090B, 0x08F9, 0x17EB, 0x08E5, 0x08E7, 0x090C, 0x090D,
    0x17EC, 0x08EB, 0x17ED, 0x17EE, 0x08FE, 0x17EF, 0x17F0, 0x17F1, 0x17F2, 0x17F3, 0x17F4, 0x17F5,
    0x17F6, 0x17F7, 0x17F8, 0x17F9, 0x17DC, 0x0000, 0x08DF, 0x090A, 0x0000, 0x0000, 0x17DD, 0x0000,
    0x0000, 0x17DE, 0x17DF, 0x0000, 0x0000, 0x08EC, 0x17E0, 0x08EE, 0x08EF, 0x0000, 0x17E1, 0x17E2,
    0x17E3, 0x17E4, 0x17E5, 0x17E6, 0x17E7, 0x08F4, 0x17E8, 0x17E9, 0x17EA, 0x090B, 0x0000, 0x17EB,
    0x0000, 0x08E7, 0x090C, 0x090D, 0x17EC, 0x08EB, 0x17ED, 0x17EE, 0x0000, 0x17EF, 0x17F0, 0x17F1,
    0x17F2, 0x17F3, 0x17F4, 0x17F5, 0x17F6, 0x17F7, 0x17F8, 0x17F9, 0x17DC, 0x08F8, 0x08DF, 0x090A,
    0x08FA, 0x08FB, 0x17DD, 0x08E6, 0x08E9, 0x17DE, 0x17DF, 0x08EA, 0x08FD, 0x08EC, 0x17E0, 0x08EE,
    0x08EF, 0x08F0, 0x17E1, 0x17E2, 0x17E3, 0x17E4, 0x17E5, 0x17E6, 0x17E7, 0x08F4, 0x17E8, 0x17E9,
    0x17EA, 0x090B, 0x08F9, 0x17EB, 0x08E5, 0x08E7, 0x090C, 0x090D, 0x17EC, 0x08EB, 0x17ED, 0x17EE,
    0x08FE, 0x17EF, 0x17F0, 0x17F1, 0x17F2, 0x17F3, 0x17F4, 0x17F5, 0x17F6, 0x17F7, 0x17F8, 0x17F9,
    0x17DC, 0x08F8, 0x0000, 0x090A, 0x08FA, 0x08FB, 0x17DD, 0x0000, 0x0000, 0x17DE, 0x17DF, 0x08EA,
    0x08FD, 0x08EC, 0x17E0, 0x08EE, 0x08EF, 0x0000, 0x17E1, 0x17E2, 0x17E3, 0x17E4, 0x17E5, 0x17E6,
    0x17E7, 0x0000, 0x17E8, 0x17E9, 0x17EA, 0x090B, 0x08F9, 0x17EB, 0x08E5, 0x08E7, 0x090C, 0x090D,
    0x17EC, 0x08EB, 0x17ED, 0x17EE, 0x08FE, 0x17EF, 0x17F0, 0x17F1, 0x17F2, 0x17F3, 0x17F4, 0x17F5,
    0x17F6, 0x17F7, 0x17F8, 0x17F9, 0x17DC, 0x08F8, 0x0000, 0x090A, 0x08FA, 0x08FB, 0x17DD, 0x0000,
    0x08E9, 0x17DE, 0x17DF, 0x08EA, 0x08FD, 0x0000, 0x17E0, 0x0000, 0x0000, 0x0000, 0x17E1, 0x17E2,
    0x17E3, 0x17E4, 0x17E5, 0x17E6, 0x17E7, 0x0000, 0x17E8, 0x17E9, 0x17EA, 0x090B, 0x08F9, 0x17EB,
    0x08E5, 0x08E7, 0x090C, 0x090D, 0x17EC, 0x08EB, 0x17ED, 0x17EE, 0x08FE, 0x17EF, 0x17F0, 0x17F1,
    0x17F2, 0x17F3, 0x17F4, 0x17F5, 0x17F6, 0x17F7, 0x17F8, 0x17F9, 0x17DC, 0x08F8, 0x08DF, 0x090A,
    0x08FA, 0x08FB, 0x17DD, 0x08E6, 0x08E9, 0x17DE, 0x17DF, 0x08EA, 0x08FD, 0x08EC, 0x17E0, 0x08EE,
    0x08EF, 0x08F0, 0x17E1, 0x17E2, 0x17E3, 0x17E4, 0x17E5, 0x17E6, 0x17E7, 0x08F4, 0x17E8, 0x17E9,
    0x17EA, 0x090B, 0x08F9, 0x17EB, 0x08E5, 0x08E7, 0x090C, 0x090D, 0x17EC, 0x08EB, 0x17ED, 0x17EE,
    0x08FE, 0x17EF, 0x17F0, 0x17F1, 0x17F2, 0x17F3, 0x17F4, 0x17F5, 0x17F6, 0x17F7, 0x17F8, 0x17F9,
    0x17DC, 0x08F8, 0x08DF, 0x090A, 0x08FA, 0x08FB, 0x17DD, 0x08E6, 0x08E9, 0x17DE, 0x17DF, 0x08EA,
    0x08FD, 0x08EC, 0x17E0, 0x08EE, 0x08EF, 0x08F0, 0x17E1, 0x17E2, 0x17E3, 0x17E4, 0x17E5, 0x17E6,
    0x17E7, 0x08F4, 0x17E8, 0x17E9, 0x17EA, 0x090B, 0x08F9, 0x17EB, 0x08E5, 0x08E7, 0x090C, 0x090D,
    0x17EC, 0x08EB, 0x17ED, 0x17EE, 0x08FE, 0x17EF, 0x17F0, 0x17F1, 0x17F2, 0x17F3, 0x17F4, 0x17F5,
    0x17F6, 0x17F7, 0x17F8, 0x17F9, 0x17DC, 0x08F8, 0x08DF, 0x090A, 0x08FA, 0x08FB, 0x17DD, 0x08E6,
    0x08E9, 0x17DE, 0x17DF, 0x08EA, 0x08FD, 0x08EC, 0x17E0, 0x08EE, 0x08EF, 0x08F0, 0x17E1, 0x17E2,
    0x17E3, 0x17E4, 0x17E5, 0x17E6, 0x17E7, 0x08F4, 0x17E8, 0x17E9, 0x17EA, 0x090B, 0x08F9, 0x17EB,
    0x08E5, 0x08E7, 0x090C, 0x090D, 0x17EC, 0x08EB, 0x17ED, 0x17EE, 0x08FE, 0x17EF, 0x17F0, 0x17F1,
    0x17F2, 0x17F3, 0x17F4, 0x17F5, 0x17F6, 0x17F7, 0x17F8, 0x17F9, 0x17DC, 0x08F8, 0x08DF, 0x090A,
    0x08FA, 0x08FB, 0x17DD, 0x08E6, 0x08E9, 0x17DE, 0x17DF, 0x08EA, 0x08FD, 0x08EC, 0x17E0, 0x08EE,
    0x08EF, 0x08F0, 0x17E1, 0x17E2, 0x17E3, 0x17E4, 0x17E5, 0x17E6, 0x17E7, 0x08F4, 0x17E8, 0x17E9,
    0x17EA, 0x090B, 0x08F9, 0x17EB, 0x08E5, 0x08E7, 0x090C, 0x090D, 0x17EC, 0x08EB, 0x17ED, 0x17EE,
    0x08FE, 0x17EF, 0x17F0, 0x17F1, 0x17F2, 0x17F3, 0x17F4, 0x17F5, 0x17F6, 0x17F7, 0x17F8, 0x17F9,
    0x17DC, 0x08F8, 0x08DF, 0x090A, 0x08FA, 0x08FB, 0x17DD, 0x08E6, 0x08E9, 0x17DE, 0x17DF, 0x08EA,
    0x08FD, 0x08EC, 0x17E0, 0x08EE, 0x08EF, 0x08F0, 0x17E1, 0x17E2, 0x17E3, 0x17E4, 0x17E5, 0x17E6,
    0x17E7, 0x08F4, 0x17E8, 0x17E9, 0x17EA, 0x090B, 0x08F9, 0x17EB, 0x08E5, 0x08E7, 0x090C, 0x090D,
    0x17EC, 0x08EB, 0x17ED, 0x17EE, 0x08FE, 0x17EF, 0x17F0, 0x17F1, 0x17F2, 0x17F3, 0x17F4, 0x17F5,
    0x17F6, 0x17F7, 0x17F8, 0x17F9, 0x17DC, 0x08F8, 0x08DF, 0x090A, 0x08FA, 0x08FB, 0x17DD, 0x08E6,
    0x08E9, 0x17DE, 0x17DF, 0x08EA, 0x08FD, 0x08EC, 0x17E0, 0x08EE, 0x08EF, 0x08F0, 0x17E1, 0x17E2,
    0x17E3, 0x17E4, 0x17E5, 0x17E6, 0x17E7, 0x08F4, 0x17E8, 0x17E9, 0x17EA, 0x090B, 0x08F9, 0x17EB,
    0x08E5, 0x08E7, 0x090C, 0x090D, 0x17EC, 0x08EB, 0x17ED, 0x17EE, 0x08FE, 0x17EF, 0x17F0, 0x17F1,
    0x17F2, 0x17F3, 0x17F4, 0x17F5, 0x17F6, 0x17F7, 0x17F8, 0x17F9, 0x17FA, 0x17FB, 0x0000, 0x0000,
    0x17FC, 0x17FD, 0x0907, 0x17FE, 0x17FF, 0x1800, 0x1801, 0x1802, 0x1803, 0x1804, 0x1805, 0x1806,
    0x1807, 0x1808, 0x1809, 0x0908, 0x180A, 0x180B, 0x180C, 0x180D, 0x180E, 0x180F, 0x1810, 0x1811,
    0x1812, 0x1813, 0x1814, 0x1815, 0x0906, 0x1816, 0x1817, 0x1818, 0x1819, 0x181A, 0x181B, 0x181C,
    0x181D, 0x181E, 0x181F, 0x1820, 0x1821, 0x0905, 0x1822, 0x1823, 0x1824, 0x1825, 0x1826, 0x1827,
    0x1828, 0x1829, 0x182A, 0x182B, 0x182C, 0x182D, 0x182E, 0x182F, 0x1830, 0x1831, 0x17FC, 0x17FD,
    0x0907, 0x17FE, 0x17FF, 0x1800, 0x1801, 0x1802, 0x1803, 0x1804, 0x1805, 0x1806, 0x1807, 0x1808,
    0x1809, 0x0908, 0x180A, 0x180B, 0x180C, 0x180D, 0x180E, 0x180F, 0x1810, 0x1811, 0x1812, 0x1813,
    0x1814, 0x1815, 0x0906, 0x1816, 0x1817, 0x1818, 0x1819, 0x181A, 0x181B, 0x181C, 0x181D, 0x181E,
    0x181F, 0x1820, 0x1821, 0x0905, 0x1822, 0x1823, 0x1824, 0x1825, 0x1826, 0x1827, 0x1828, 0x1829,
    0x182A, 0x182B, 0x182C, 0x182D, 0x182E, 0x182F, 0x1830, 0x1831, 0x17FC, 0x17FD, 0x0907, 0x17FE,
    0x17FF, 0x1800, 0x1801, 0x1802, 0x1803, 0x1804, 0x1805, 0x1806, 0x1807, 0x1808, 0x1809, 0x0908,
    0x180A, 0x180B, 0x180C, 0x180D, 0x180E, 0x180F, 0x1810, 0x1811, 0x1812, 0x1813, 0x1814, 0x1815,
    0x0906, 0x1816, 0x1817, 0x1818, 0x1819, 0x181A, 0x181B, 0x181C, 0x181D, 0x181E, 0x181F, 0x1820,
    0x1821, 0x0905, 0x1822, 0x1823, 0x1824, 0x1825, 0x1826, 0x1827, 0x1828, 0x1829, 0x182A, 0x182B,
    0x182C, 0x182D, 0x182E, 0x182F, 0x1830, 0x1831, 0x17FC, 0x17FD, 0x0907, 0x17FE, 0x17FF, 0x1800,
    0x1801, 0x1802, 0x1803, 0x1804, 0x1805, 0x1806, 0x1807, 0x1808, 0x1809, 0x0908, 0x180A, 0x180B,
    0x180C, 0x180D, 0x180E, 0x180F, 0x1810, 0x1811, 0x1812, 0x1813, 0x1814, 0x1815, 0x0906, 0x1816,
    0x1817, 0x1818, 0x1819, 0x181A, 0x181B, 0x181C, 0x181D, 0x181E, 0x181F, 0x1820, 0x1821, 0x0905,
    0x1822, 0x1823, 0x1824, 0x1825, 0x1826, 0x1827, 0x1828, 0x1829, 0x182A, 0x182B, 0x182C, 0x182D,
    0x182E, 0x182F, 0x1830, 0x1831, 0x17FC, 0x17FD, 0x0907, 0x17FE, 0x17FF, 0x1800, 0x1801, 0x1802,
    0x1803, 0x1804, 0x1805, 0x1806, 0x1807, 0x1808, 0x1809, 0x0908, 0x180A, 0x180B, 0x180C, 0x180D,
    0x180E, 0x180F, 0x1810, 0x1811, 0x1812, 0x1813, 0x1814, 0x1815, 0x0906, 0x1816, 0x1817, 0x1818,
    0x1819, 0x181A, 0x181B, 0x181C, 0x181D, 0x181E, 0x181F, 0x1820, 0x1821, 0x0905, 0x1822, 0x1823,
    0x1824, 0x1825, 0x1826, 0x1827, 0x1828, 0x1829, 0x182A, 0x182B, 0x182C, 0x182D, 0x182E, 0x182F,
    0x1830, 0x1831, 0x1832, 0x1833, 0x0000, 0x0000, 0x1834, 0x1835, 0x1836, 0x1837, 0x1838, 0x1839,
    0x183A, 0x183B, 0x183C, 0x183D, 0x1834, 0x1835, 0x1836, 0x1837, 0x1838, 0x1839, 0x183A, 0x183B,
    0x183C, 0x183D, 0x1834, 0x1835, 0x1836, 0x1837, 0x1838, 0x1839, 0x183A, 0x183B, 0x183C, 0x183D,
    0x1834, 0x1835, 0x1836, 0x1837, 0x1838, 0x1839, 0x183A, 0x183B, 0x183C, 0x183D, 0x1834, 0x1835,
    0x1836, 0x1837, 0x1838, 0x1839, 0x183A, 0x183B, 0x183C, 0x183D, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0347, 0x0347, 0x0347, 0x0347, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0496, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0496, 0x0347, 0x0347, 0x0415,
    0x0415, 0x0415, 0x0415, 0x0415, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0000, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496, 0x0496,
    0x0496, 0x0496, 0x0496, 0x0496, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x0000, 0x021D, 0x021D, 0x021D, 0x021D,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D,
    0x021D, 0x0000, 0x0000, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x0000, 0x021D,
    0x021D, 0x0000, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0000, 0x0000, 0x0000, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x020C,
    0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x020C, 0x0000, 0x0000, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0347,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154, 0x0154,
    0x0154, 0x0154, 0x0154, 0x0154, 0x021D, 0x021D, 0x021D, 0x021D, 0x04B3, 0x04B3, 0x04B3, 0x04B3,
    0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x04B3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x000A,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x045B,
    0x045B, 0x045B, 0x045B, 0x045B, 0x045B, 0x0000, 0x0000, 0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x16B4,
    0x16B4, 0x16B4, 0x16B4, 0x16B4, 0x022A, 0x022A, 0x022A, 0x022A, 0x022A, 0x022A, 0x022A, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x183E, 0x183F, 0x1840, 0x1841, 0x1842, 0x1843, 0x1844, 0x1845,
    0x1846, 0x1847, 0x1848, 0x1849, 0x184A, 0x184B, 0x184C, 0x184D, 0x184E, 0x184F, 0x1850, 0x1851,
    0x1852, 0x1853, 0x1854, 0x1855, 0x1856, 0x1857, 0x1858, 0x1859, 0x185A, 0x185B, 0x185C, 0x185D,
    0x185E, 0x185F, 0x1860, 0x1861, 0x1862, 0x1863, 0x1864, 0x1865, 0x1866, 0x1867, 0x1868, 0x1869,
    0x186A, 0x186B, 0x186C, 0x186D, 0x186E, 0x186F, 0x1870, 0x1871, 0x1872, 0x1873, 0x1874, 0x1875,
    0x1876, 0x1877, 0x1878, 0x1879, 0x187A, 0x187B, 0x187C, 0x187D, 0x187E, 0x187F, 0x1880, 0x1881,
    0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x021D, 0x04CE, 0x0498, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0497, 0x0497, 0x0497, 0x0497, 0x0497, 0x0497, 0x0497, 0x0497, 0x0497, 0x0497, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0450, 0x0450, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D,
    0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D,
    0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D,
    0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D,
    0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D,
    0x0493, 0x171D, 0x171D, 0x171D, 0x046E, 0x171D, 0x171D, 0x171D, 0x171D, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D,
    0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D,
    0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D,
    0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x0493, 0x171D,
    0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D, 0x171D,
    0x171D, 0x171D, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x1882, 0x1883, 0x1884, 0x1885, 0x0000, 0x1886, 0x1887, 0x1888,
    0x1889, 0x188A, 0x188B, 0x188C, 0x188D, 0x188E, 0x188F, 0x1890, 0x1891, 0x1892, 0x1893, 0x1894,
    0x1895, 0x1896, 0x1897, 0x1898, 0x1899, 0x189A, 0x189B, 0x189C, 0x189D, 0x189E, 0x189F, 0x18A0,
    0x0000, 0x1883, 0x1884, 0x0000, 0x18A1, 0x0000, 0x0000, 0x1888, 0x0000, 0x188A, 0x188B, 0x188C,
    0x188D, 0x188E, 0x188F, 0x1890, 0x1891, 0x1892, 0x1893, 0x0000, 0x1895, 0x1896, 0x1897, 0x1898,
    0x0000, 0x189A, 0x0000, 0x189C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1884, 0x0000,
    0x0000, 0x0000, 0x0000, 0x1888, 0x0000, 0x188A, 0x0000, 0x188C, 0x0000, 0x188E, 0x188F, 0x1890,
    0x0000, 0x1892, 0x1893, 0x0000, 0x1895, 0x0000, 0x0000, 0x1898, 0x0000, 0x189A, 0x0000, 0x189C,
    0x0000, 0x189E, 0x0000, 0x18A0, 0x0000, 0x1883, 0x1884, 0x0000, 0x18A1, 0x0000, 0x0000, 0x1888,
    0x1889, 0x188A, 0x188B, 0x0000, 0x188D, 0x188E, 0x188F, 0x1890, 0x1891, 0x1892, 0x1893, 0x0000,
    0x1895, 0x1896, 0x1897, 0x1898, 0x0000, 0x189A, 0x189B, 0x189C, 0x189D, 0x0000, 0x189F, 0x0000,
    0x1882, 0x1883, 0x1884, 0x1885, 0x18A1, 0x1886, 0x1887, 0x1888, 0x1889, 0x188A, 0x0000, 0x188C,
    0x188D, 0x188E, 0x188F, 0x1890, 0x1891, 0x1892, 0x1893, 0x1894, 0x1895, 0x1896, 0x1897, 0x1898,
    0x1899, 0x189A, 0x189B, 0x189C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1883, 0x1884, 0x1885,
    0x0000, 0x1886, 0x1887, 0x1888, 0x1889, 0x188A, 0x0000, 0x188C, 0x188D, 0x188E, 0x188F, 0x1890,
    0x1891, 0x1892, 0x1893, 0x1894, 0x1895, 0x1896, 0x1897, 0x1898, 0x1899, 0x189A, 0x189B, 0x189C,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x004A, 0x004A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x004E, 0x004E, 0x004E, 0x004E,
    0x099C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x18A2, 0x18A2, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x18A2, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x099C,
    0x18A2, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A3, 0x18A4, 0x18A5, 0x18A6, 0x18A7, 0x18A8, 0x18A9, 0x18AA, 0x18AB, 0x18AC, 0x18AD, 0x04E8,
    0x04E8, 0x004E, 0x004E, 0x004E, 0x18AE, 0x18AF, 0x18B0, 0x18B1, 0x18B2, 0x18B3, 0x18B4, 0x18B5,
    0x18B6, 0x18B7, 0x18B8, 0x18B9, 0x18BA, 0x18BB, 0x18BC, 0x18BD, 0x18BE, 0x18BF, 0x18C0, 0x18C1,
    0x18C2, 0x18C3, 0x18C4, 0x18C5, 0x18C6, 0x18C7, 0x18C8, 0x18C9, 0x18CA, 0x18CB, 0x18CC, 0x004E,
    0x18CD, 0x18CE, 0x18CF, 0x18D0, 0x18D1, 0x18D2, 0x18D3, 0x18D4, 0x18D5, 0x18D6, 0x18D7, 0x18D8,
    0x18D9, 0x18DA, 0x18DB, 0x18DC, 0x18DD, 0x18DE, 0x18DF, 0x18E0, 0x18E1, 0x18E2, 0x18E3, 0x18E4,
    0x18E5, 0x18E6, 0x18E7, 0x18E8, 0x18E9, 0x18EA, 0x18EB, 0x18EC, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x18ED, 0x18EE,
    0x18EF, 0x004E, 0x004E, 0x004E, 0x0A2C, 0x0A2C, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0A2C, 0x0A2C, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x18F0, 0x0347,
    0x18F1, 0x18F0, 0x18F0, 0x18F0, 0x18F0, 0x18F0, 0x18F0, 0x18F0, 0x18F0, 0x18F0, 0x18F0, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x0347,
    0x0347, 0x0347, 0x0347, 0x0347, 0x0347, 0x004E, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18F2, 0x18F2, 0x18F2, 0x18F2, 0x18F2, 0x18F2, 0x18F2, 0x18F2, 0x18F2, 0x18F2,
    0x18F2, 0x18F2, 0x18F2, 0x18F2, 0x18F2, 0x18F2, 0x18F2, 0x18F2, 0x18F2, 0x18F2, 0x18F2, 0x18F2,
    0x18F2, 0x18F2, 0x18F2, 0x18F2, 0x18F3, 0x18F4, 0x18F5, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18F6, 0x18F7, 0x18F8, 0x18F9,
    0x18FA, 0x18FB, 0x18FC, 0x18FD, 0x18FE, 0x18FF, 0x1900, 0x1901, 0x1902, 0x1903, 0x1904, 0x1905,
    0x1906, 0x1907, 0x1908, 0x1909, 0x190A, 0x190B, 0x190C, 0x190D, 0x190E, 0x190F, 0x1910, 0x1911,
    0x1912, 0x1913, 0x1914, 0x1915, 0x1916, 0x1917, 0x1918, 0x1919, 0x191A, 0x191B, 0x191C, 0x191D,
    0x191E, 0x191F, 0x1920, 0x1921, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x1922, 0x1923, 0x1924, 0x1925,
    0x1926, 0x1927, 0x1928, 0x1929, 0x192A, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x192B, 0x192C, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x004E, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x004E, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x004E, 0x004E, 0x004E, 0x004E, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x004E, 0x004E, 0x004E,
    0x099C, 0x004E, 0x004E, 0x004E, 0x099C, 0x099C, 0x099C, 0x192D, 0x192D, 0x192D, 0x192D, 0x192D,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x004E, 0x099C, 0x004E, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x004E, 0x004E, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x099C, 0x099C, 0x099C, 0x099C, 0x004E,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x099C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x099C, 0x099C, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x099C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x099C, 0x004E, 0x004E, 0x004E,
    0x099C, 0x099C, 0x099C, 0x004E, 0x004E, 0x099C, 0x099C, 0x099C, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x099C, 0x099C, 0x18A2, 0x18A2, 0x18A2, 0x004E, 0x004E, 0x004E, 0x004E,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x18A2, 0x18A2, 0x18A2,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004E, 0x004E, 0x004E,
    0x004E, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x18A2, 0x18A2,
    0x004E, 0x004E, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x004C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x004C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x18A2, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x18A2, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E, 0x004E,
    0x004E, 0x004E, 0x18A2, 0x18A2, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x18A2, 0x18A2, 0x18A2,
    0x099C, 0x099C, 0x099C, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x099C, 0x099C, 0x099C, 0x099C,
    0x099C, 0x099C, 0x099C, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x099C, 0x099C, 0x099C, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x099C, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x0000, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C, 0x004C,
    0x004C, 0x004C, 0x004C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x1834, 0x1835, 0x1836, 0x1837, 0x1838, 0x1839, 0x183A, 0x183B,
    0x183C, 0x183D, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2, 0x18A2,
    0x18A2, 0x18A2, 0x0000, 0x0000, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0000, 0x0000, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x192E, 0x192F, 0x1930, 0x1931, 0x1932, 0x115C, 0x1933, 0x1934, 0x1935, 0x1936, 0x115D, 0x1937,
    0x1938, 0x1939, 0x115E, 0x193A, 0x193B, 0x193C, 0x193D, 0x193E, 0x193F, 0x1940, 0x1941, 0x1942,
    0x1943, 0x1944, 0x1945, 0x1198, 0x1946, 0x1947, 0x1948, 0x1949, 0x194A, 0x194B, 0x194C, 0x194D,
    0x194E, 0x119D, 0x115F, 0x1160, 0x119E, 0x194F, 0x1950, 0x109F, 0x1951, 0x1161, 0x1952, 0x1953,
    0x1954, 0x1955, 0x1955, 0x1955, 0x1956, 0x1957, 0x1958, 0x1959, 0x195A, 0x195B, 0x195C, 0x195D,
    0x195E, 0x195F, 0x1960, 0x1961, 0x1962, 0x1963, 0x1964, 0x1965, 0x1966, 0x1967, 0x1967, 0x11A0,
    0x1968, 0x1969, 0x196A, 0x196B, 0x1163, 0x196C, 0x196D, 0x196E, 0x1138, 0x196F, 0x1970, 0x1971,
    0x1972, 0x1973, 0x1974, 0x1975, 0x1976, 0x1977, 0x1978, 0x1979, 0x197A, 0x197B, 0x197C, 0x197D,
    0x197E, 0x197F, 0x1980, 0x1981, 0x1982, 0x1983, 0x1984, 0x1985, 0x1986, 0x1987, 0x1988, 0x1988,
    0x1989, 0x198A, 0x198B, 0x109B, 0x198C, 0x198D, 0x198E, 0x198F, 0x1990, 0x1991, 0x1992, 0x1993,
    0x1168, 0x1994, 0x1995, 0x1996, 0x1997, 0x1998, 0x1999, 0x199A, 0x199B, 0x199C, 0x199D, 0x199E,
    0x199F, 0x19A0, 0x19A1, 0x19A2, 0x19A3, 0x19A4, 0x19A5, 0x19A6, 0x19A7, 0x19A8, 0x1065, 0x19A9,
    0x19AA, 0x19AB, 0x19AB, 0x19AC, 0x19AD, 0x19AD, 0x19AE, 0x19AF, 0x19B0, 0x19B1, 0x19B2, 0x19B3,
    0x19B4, 0x19B5, 0x19B6, 0x19B7, 0x19B8, 0x19B9, 0x19BA, 0x1169, 0x19BB, 0x19BC, 0x19BD, 0x19BE,
    0x11AC, 0x19BE, 0x19BF, 0x116B, 0x19C0, 0x19C1, 0x19C2, 0x19C3, 0x116C, 0x104A, 0x19C4, 0x19C5,
    0x19C6, 0x19C7, 0x19C8, 0x19C9, 0x19CA, 0x19CB, 0x19CC, 0x19CD, 0x19CE, 0x19CF, 0x19D0, 0x19D1,
    0x19D2, 0x19D3, 0x19D4, 0x19D5, 0x19D6, 0x19D7, 0x19D8, 0x19D9, 0x116D, 0x19DA, 0x19DB, 0x19DC,
    0x19DD, 0x19DE, 0x19DF, 0x116F, 0x19E0, 0x19E1, 0x19E2, 0x19E3, 0x19E4, 0x19E5, 0x19E6, 0x19E7,
    0x1066, 0x11B4, 0x19E8, 0x19E9, 0x19EA, 0x19EB, 0x19EC, 0x19ED, 0x19EE, 0x19EF, 0x1170, 0x19F0,
    0x19F1, 0x19F2, 0x19F3, 0x11DF, 0x19F4, 0x19F5, 0x19F6, 0x19F7, 0x19F8, 0x19F9, 0x19FA, 0x19FB,
    0x19FC, 0x19FD, 0x19FE, 0x19FF, 0x1A00, 0x10AC, 0x1A01, 0x1A02, 0x1A03, 0x1A04, 0x1A05, 0x1A06,
    0x1A07, 0x1A08, 0x1A09, 0x1A0A, 0x1A0B, 0x1171, 0x1103, 0x1A0C, 0x1A0D, 0x1A0E, 0x1A0F, 0x1A10,
    0x1A11, 0x1A12, 0x1A13, 0x11B8, 0x1A14, 0x1A15, 0x1A16, 0x1A17, 0x1A18, 0x1A19, 0x1A1A, 0x1A1B,
    0x11B9, 0x1A1C, 0x1A1D, 0x1A1E, 0x1A1F, 0x1A20, 0x1A21, 0x1A22, 0x1A23, 0x1A24, 0x1A25, 0x1A26,
    0x1A27, 0x11BB, 0x1A28, 0x1A29, 0x1A2A, 0x1A2B, 0x1A2C, 0x1A2D, 0x1A2E, 0x1A2F, 0x1A30, 0x1A31,
    0x1A32, 0x1A32, 0x1A33, 0x1A34, 0x11BD, 0x1A35, 0x1A36, 0x1A37, 0x1A38, 0x1A39, 0x1A3A, 0x1A3B,
    0x109E, 0x1A3C, 0x1A3D, 0x1A3E, 0x1A3F, 0x1A40, 0x1A41, 0x1A42, 0x11C3, 0x1A43, 0x1A44, 0x1A45,
    0x1A46, 0x1A47, 0x1A48, 0x1A48, 0x11C4, 0x11E1, 0x1A49, 0x1A4A, 0x1A4B, 0x1A4C, 0x1A4D, 0x1078,
    0x11C6, 0x1A4E, 0x1A4F, 0x117C, 0x1A50, 0x1A51, 0x114E, 0x1A52, 0x1A53, 0x1180, 0x1A54, 0x1A55,
    0x1A56, 0x1A57, 0x1A57, 0x1A58, 0x1A59, 0x1A5A, 0x1A5B, 0x1A5C, 0x1A5D, 0x1A5E, 0x1A5F, 0x1A60,
    0x1A61, 0x1A62, 0x1A63, 0x1A64, 0x1A65, 0x1A66, 0x1A67, 0x1A68, 0x1A69, 0x1A6A, 0x1A6B, 0x1A6C,
    0x1A6D, 0x1A6E, 0x1A6F, 0x1A70, 0x1A71, 0x1A72, 0x1186, 0x1A73, 0x1A74, 0x1A75, 0x1A76, 0x1A77,
    0x1A78, 0x1A79, 0x1A7A, 0x1A7B, 0x1A7C, 0x1A7D, 0x1A7E, 0x1A7F, 0x1A80, 0x1A81, 0x1A82, 0x19AC,
    0x1A83, 0x1A84, 0x1A85, 0x1A86, 0x1A87, 0x1A88, 0x1A89, 0x1A8A, 0x1A8B, 0x1A8C, 0x1A8D, 0x1A8E,
    0x10B0, 0x1A8F, 0x1A90, 0x1A91, 0x1A92, 0x1A93, 0x1A94, 0x1189, 0x1A95, 0x1A96, 0x1A97, 0x1A98,
    0x1A99, 0x1A9A, 0x1A9B, 0x1A9C, 0x1A9D, 0x1A9E, 0x1A9F, 0x1AA0, 0x1AA1, 0x1AA2, 0x1AA3, 0x1AA4,
    0x1AA5, 0x1AA6, 0x1AA7, 0x1AA8, 0x1073, 0x1AA9, 0x1AAA, 0x1AAB, 0x1AAC, 0x1AAD, 0x1AAE, 0x11CD,
    0x1AAF, 0x1AB0, 0x1AB1, 0x1AB2, 0x1AB3, 0x1AB4, 0x1AB5, 0x1AB6, 0x1AB7, 0x1AB8, 0x1AB9, 0x1ABA,
    0x1ABB, 0x1ABC, 0x1ABD, 0x1ABE, 0x1ABF, 0x1AC0, 0x1AC1, 0x1AC2, 0x11D2, 0x11D3, 0x1AC3, 0x1AC4,
    0x1AC5, 0x1AC6, 0x1AC7, 0x1AC8, 0x1AC9, 0x1ACA, 0x1ACB, 0x1ACC, 0x1ACD, 0x1ACE, 0x1ACF, 0x11D4,
    0x1AD0, 0x1AD1, 0x1AD2, 0x1AD3, 0x1AD4, 0x1AD5, 0x1AD6, 0x1AD7, 0x1AD8, 0x1AD9, 0x1ADA, 0x1ADB,
    0x1ADC, 0x1ADD, 0x1ADE, 0x1ADF, 0x1AE0, 0x1AE1, 0x1AE2, 0x1AE3, 0x1AE4, 0x1AE5, 0x1AE6, 0x1AE7,
    0x1AE8, 0x1AE9, 0x1AEA, 0x1AEB, 0x1AEC, 0x1AED, 0x11DA, 0x11DA, 0x1AEE, 0x1AEF, 0x1AF0, 0x1AF1,
    0x1AF2, 0x1AF3, 0x1AF4, 0x1AF5, 0x1AF6, 0x1AF7, 0x11DB, 0x1AF8, 0x1AF9, 0x1AFA, 0x1AFB, 0x1AFC,
    0x1AFD, 0x1AFE, 0x1AFF, 0x1B00, 0x1B01, 0x1B02, 0x1B03, 0x1B04, 0x1B05, 0x1B06, 0x1B07, 0x1B08,
    0x1B09, 0x1B0A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A, 0x0C1A,
    0x0C1A, 0x0C1A, 0x0C1A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x08AD, 0x05F1, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B,
    0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B,
    0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B,
    0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B,
    0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B,
    0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B,
    0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B,
    0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B, 0x1B0B,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F,
    0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x023F, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x08AD,
    0x08AD, 0x08AD, 0x08AD, 0x08AD, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D,
    0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x103D, 0x0000, 0x0000,
];
