// unicode/combination_data.rs - Generated from the Unicode 13.0.0 character database.
// DO NOT EDIT BY HAND; regenerate from the UCD instead.

//! Primary starter rows for canonical composition: per starter a
//! `{min_id, max_id, entries...}` record, indexed by combiner id.

pub static COMBINATIONS: [u16; 3571] = [
    0x001B, 0x001B, 0x226E, 0x001B, 0x001B, 0x2260, 0x001B, 0x001B, 0x226F, 0x0000, 0x0016, 0x00C0,
    0x00C1, 0x00C2, 0x00C3, 0x0100, 0x0102, 0x0226, 0x00C4, 0x1EA2, 0x00C5, 0x0000, 0x01CD, 0x0200,
    0x0202, 0x0000, 0x0000, 0x0000, 0x1EA0, 0x0000, 0x1E00, 0x0000, 0x0000, 0x0104, 0x0006, 0x001A,
    0x1E02, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E04,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E06, 0x0001, 0x0015, 0x0106,
    0x0108, 0x0000, 0x0000, 0x0000, 0x010A, 0x0000, 0x0000, 0x0000, 0x0000, 0x010C, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00C7, 0x0006, 0x001A, 0x1E0A, 0x0000,
    0x0000, 0x0000, 0x0000, 0x010E, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E0C, 0x0000, 0x0000,
    0x0000, 0x1E10, 0x0000, 0x1E12, 0x0000, 0x0000, 0x1E0E, 0x0000, 0x0019, 0x00C8, 0x00C9, 0x00CA,
    0x1EBC, 0x0112, 0x0114, 0x0116, 0x00CB, 0x1EBA, 0x0000, 0x0000, 0x011A, 0x0204, 0x0206, 0x0000,
    0x0000, 0x0000, 0x1EB8, 0x0000, 0x0000, 0x0000, 0x0228, 0x0118, 0x1E18, 0x0000, 0x1E1A, 0x0006,
    0x0006, 0x1E1E, 0x0001, 0x0015, 0x01F4, 0x011C, 0x0000, 0x1E20, 0x011E, 0x0120, 0x0000, 0x0000,
    0x0000, 0x0000, 0x01E6, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0122, 0x0002, 0x0018, 0x0124, 0x0000, 0x0000, 0x0000, 0x1E22, 0x1E26, 0x0000, 0x0000, 0x0000,
    0x021E, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E24, 0x0000, 0x0000, 0x0000, 0x1E28, 0x0000,
    0x0000, 0x1E2A, 0x0000, 0x0019, 0x00CC, 0x00CD, 0x00CE, 0x0128, 0x012A, 0x012C, 0x0130, 0x00CF,
    0x1EC8, 0x0000, 0x0000, 0x01CF, 0x0208, 0x020A, 0x0000, 0x0000, 0x0000, 0x1ECA, 0x0000, 0x0000,
    0x0000, 0x0000, 0x012E, 0x0000, 0x0000, 0x1E2C, 0x0002, 0x0002, 0x0134, 0x0001, 0x001A, 0x1E30,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x01E8, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x1E32, 0x0000, 0x0000, 0x0000, 0x0136, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1E34, 0x0001, 0x001A, 0x0139, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x013D, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E36, 0x0000, 0x0000, 0x0000, 0x013B,
    0x0000, 0x1E3C, 0x0000, 0x0000, 0x1E3A, 0x0001, 0x0011, 0x1E3E, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1E40, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E42,
    0x0000, 0x001A, 0x01F8, 0x0143, 0x0000, 0x00D1, 0x0000, 0x0000, 0x1E44, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0147, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E46, 0x0000, 0x0000, 0x0000, 0x0145,
    0x0000, 0x1E4A, 0x0000, 0x0000, 0x1E48, 0x0000, 0x0016, 0x00D2, 0x00D3, 0x00D4, 0x00D5, 0x014C,
    0x014E, 0x022E, 0x00D6, 0x1ECE, 0x0000, 0x0150, 0x01D1, 0x020C, 0x020E, 0x0000, 0x0000, 0x01A0,
    0x1ECC, 0x0000, 0x0000, 0x0000, 0x0000, 0x01EA, 0x0001, 0x0006, 0x1E54, 0x0000, 0x0000, 0x0000,
    0x0000, 0x1E56, 0x0001, 0x001A, 0x0154, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E58, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0158, 0x0210, 0x0212, 0x0000, 0x0000, 0x0000, 0x1E5A, 0x0000, 0x0000, 0x0000,
    0x0156, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E5E, 0x0001, 0x0015, 0x015A, 0x015C, 0x0000, 0x0000,
    0x0000, 0x1E60, 0x0000, 0x0000, 0x0000, 0x0000, 0x0160, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1E62, 0x0000, 0x0000, 0x0218, 0x015E, 0x0006, 0x001A, 0x1E6A, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0164, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E6C, 0x0000, 0x0000, 0x021A, 0x0162, 0x0000,
    0x1E70, 0x0000, 0x0000, 0x1E6E, 0x0000, 0x0019, 0x00D9, 0x00DA, 0x00DB, 0x0168, 0x016A, 0x016C,
    0x0000, 0x00DC, 0x1EE6, 0x016E, 0x0170, 0x01D3, 0x0214, 0x0216, 0x0000, 0x0000, 0x01AF, 0x1EE4,
    0x1E72, 0x0000, 0x0000, 0x0000, 0x0172, 0x1E76, 0x0000, 0x1E74, 0x0003, 0x0011, 0x1E7C, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1E7E, 0x0000, 0x0011, 0x1E80, 0x1E82, 0x0174, 0x0000, 0x0000, 0x0000, 0x1E86, 0x1E84, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E88, 0x0006, 0x0007, 0x1E8A,
    0x1E8C, 0x0000, 0x0011, 0x1EF2, 0x00DD, 0x0176, 0x1EF8, 0x0232, 0x0000, 0x1E8E, 0x0178, 0x1EF6,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1EF4, 0x0001, 0x001A, 0x0179,
    0x1E90, 0x0000, 0x0000, 0x0000, 0x017B, 0x0000, 0x0000, 0x0000, 0x0000, 0x017D, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x1E92, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1E94, 0x0000, 0x0016, 0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x0101, 0x0103, 0x0227, 0x00E4, 0x1EA3,
    0x00E5, 0x0000, 0x01CE, 0x0201, 0x0203, 0x0000, 0x0000, 0x0000, 0x1EA1, 0x0000, 0x1E01, 0x0000,
    0x0000, 0x0105, 0x0006, 0x001A, 0x1E03, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x1E05, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1E07, 0x0001, 0x0015, 0x0107, 0x0109, 0x0000, 0x0000, 0x0000, 0x010B, 0x0000, 0x0000, 0x0000,
    0x0000, 0x010D, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00E7,
    0x0006, 0x001A, 0x1E0B, 0x0000, 0x0000, 0x0000, 0x0000, 0x010F, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x1E0D, 0x0000, 0x0000, 0x0000, 0x1E11, 0x0000, 0x1E13, 0x0000, 0x0000, 0x1E0F, 0x0000,
    0x0019, 0x00E8, 0x00E9, 0x00EA, 0x1EBD, 0x0113, 0x0115, 0x0117, 0x00EB, 0x1EBB, 0x0000, 0x0000,
    0x011B, 0x0205, 0x0207, 0x0000, 0x0000, 0x0000, 0x1EB9, 0x0000, 0x0000, 0x0000, 0x0229, 0x0119,
    0x1E19, 0x0000, 0x1E1B, 0x0006, 0x0006, 0x1E1F, 0x0001, 0x0015, 0x01F5, 0x011D, 0x0000, 0x1E21,
    0x011F, 0x0121, 0x0000, 0x0000, 0x0000, 0x0000, 0x01E7, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0123, 0x0002, 0x001A, 0x0125, 0x0000, 0x0000, 0x0000, 0x1E23,
    0x1E27, 0x0000, 0x0000, 0x0000, 0x021F, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E25, 0x0000,
    0x0000, 0x0000, 0x1E29, 0x0000, 0x0000, 0x1E2B, 0x0000, 0x1E96, 0x0000, 0x0019, 0x00EC, 0x00ED,
    0x00EE, 0x0129, 0x012B, 0x012D, 0x0000, 0x00EF, 0x1EC9, 0x0000, 0x0000, 0x01D0, 0x0209, 0x020B,
    0x0000, 0x0000, 0x0000, 0x1ECB, 0x0000, 0x0000, 0x0000, 0x0000, 0x012F, 0x0000, 0x0000, 0x1E2D,
    0x0002, 0x000B, 0x0135, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x01F0,
    0x0001, 0x001A, 0x1E31, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x01E9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E33, 0x0000, 0x0000, 0x0000, 0x0137, 0x0000,
    0x0000, 0x0000, 0x0000, 0x1E35, 0x0001, 0x001A, 0x013A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x013E, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E37, 0x0000,
    0x0000, 0x0000, 0x013C, 0x0000, 0x1E3D, 0x0000, 0x0000, 0x1E3B, 0x0001, 0x0011, 0x1E3F, 0x0000,
    0x0000, 0x0000, 0x0000, 0x1E41, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x1E43, 0x0000, 0x001A, 0x01F9, 0x0144, 0x0000, 0x00F1, 0x0000, 0x0000, 0x1E45,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0148, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E47, 0x0000,
    0x0000, 0x0000, 0x0146, 0x0000, 0x1E4B, 0x0000, 0x0000, 0x1E49, 0x0000, 0x0016, 0x00F2, 0x00F3,
    0x00F4, 0x00F5, 0x014D, 0x014F, 0x022F, 0x00F6, 0x1ECF, 0x0000, 0x0151, 0x01D2, 0x020D, 0x020F,
    0x0000, 0x0000, 0x01A1, 0x1ECD, 0x0000, 0x0000, 0x0000, 0x0000, 0x01EB, 0x0001, 0x0006, 0x1E55,
    0x0000, 0x0000, 0x0000, 0x0000, 0x1E57, 0x0001, 0x001A, 0x0155, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1E59, 0x0000, 0x0000, 0x0000, 0x0000, 0x0159, 0x0211, 0x0213, 0x0000, 0x0000, 0x0000, 0x1E5B,
    0x0000, 0x0000, 0x0000, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E5F, 0x0001, 0x0015, 0x015B,
    0x015D, 0x0000, 0x0000, 0x0000, 0x1E61, 0x0000, 0x0000, 0x0000, 0x0000, 0x0161, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x1E63, 0x0000, 0x0000, 0x0219, 0x015F, 0x0006, 0x001A, 0x1E6B, 0x1E97,
    0x0000, 0x0000, 0x0000, 0x0165, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E6D, 0x0000, 0x0000,
    0x021B, 0x0163, 0x0000, 0x1E71, 0x0000, 0x0000, 0x1E6F, 0x0000, 0x0019, 0x00F9, 0x00FA, 0x00FB,
    0x0169, 0x016B, 0x016D, 0x0000, 0x00FC, 0x1EE7, 0x016F, 0x0171, 0x01D4, 0x0215, 0x0217, 0x0000,
    0x0000, 0x01B0, 0x1EE5, 0x1E73, 0x0000, 0x0000, 0x0000, 0x0173, 0x1E77, 0x0000, 0x1E75, 0x0003,
    0x0011, 0x1E7D, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x1E7F, 0x0000, 0x0011, 0x1E81, 0x1E83, 0x0175, 0x0000, 0x0000, 0x0000,
    0x1E87, 0x1E85, 0x0000, 0x1E98, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E89,
    0x0006, 0x0007, 0x1E8B, 0x1E8D, 0x0000, 0x0011, 0x1EF3, 0x00FD, 0x0177, 0x1EF9, 0x0233, 0x0000,
    0x1E8F, 0x00FF, 0x1EF7, 0x1E99, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1EF5,
    0x0001, 0x001A, 0x017A, 0x1E91, 0x0000, 0x0000, 0x0000, 0x017C, 0x0000, 0x0000, 0x0000, 0x0000,
    0x017E, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E93, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x1E95, 0x0000, 0x001C, 0x1FED, 0x0385, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1FC1, 0x0000,
    0x0008, 0x1EA6, 0x1EA4, 0x0000, 0x1EAA, 0x0000, 0x0000, 0x0000, 0x0000, 0x1EA8, 0x0004, 0x0004,
    0x01DE, 0x0001, 0x0001, 0x01FA, 0x0001, 0x0004, 0x01FC, 0x0000, 0x0000, 0x01E2, 0x0001, 0x0001,
    0x1E08, 0x0000, 0x0008, 0x1EC0, 0x1EBE, 0x0000, 0x1EC4, 0x0000, 0x0000, 0x0000, 0x0000, 0x1EC2,
    0x0001, 0x0001, 0x1E2E, 0x0000, 0x0008, 0x1ED2, 0x1ED0, 0x0000, 0x1ED6, 0x0000, 0x0000, 0x0000,
    0x0000, 0x1ED4, 0x0001, 0x0007, 0x1E4C, 0x0000, 0x0000, 0x022C, 0x0000, 0x0000, 0x1E4E, 0x0004,
    0x0004, 0x022A, 0x0001, 0x0001, 0x01FE, 0x0000, 0x000B, 0x01DB, 0x01D7, 0x0000, 0x0000, 0x01D5,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x01D9, 0x0000, 0x0008, 0x1EA7, 0x1EA5, 0x0000,
    0x1EAB, 0x0000, 0x0000, 0x0000, 0x0000, 0x1EA9, 0x0004, 0x0004, 0x01DF, 0x0001, 0x0001, 0x01FB,
    0x0001, 0x0004, 0x01FD, 0x0000, 0x0000, 0x01E3, 0x0001, 0x0001, 0x1E09, 0x0000, 0x0008, 0x1EC1,
    0x1EBF, 0x0000, 0x1EC5, 0x0000, 0x0000, 0x0000, 0x0000, 0x1EC3, 0x0001, 0x0001, 0x1E2F, 0x0000,
    0x0008, 0x1ED3, 0x1ED1, 0x0000, 0x1ED7, 0x0000, 0x0000, 0x0000, 0x0000, 0x1ED5, 0x0001, 0x0007,
    0x1E4D, 0x0000, 0x0000, 0x022D, 0x0000, 0x0000, 0x1E4F, 0x0004, 0x0004, 0x022B, 0x0001, 0x0001,
    0x01FF, 0x0000, 0x000B, 0x01DC, 0x01D8, 0x0000, 0x0000, 0x01D6, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x01DA, 0x0000, 0x0008, 0x1EB0, 0x1EAE, 0x0000, 0x1EB4, 0x0000, 0x0000, 0x0000,
    0x0000, 0x1EB2, 0x0000, 0x0008, 0x1EB1, 0x1EAF, 0x0000, 0x1EB5, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1EB3, 0x0000, 0x0001, 0x1E14, 0x1E16, 0x0000, 0x0001, 0x1E15, 0x1E17, 0x0000, 0x0001, 0x1E50,
    0x1E52, 0x0000, 0x0001, 0x1E51, 0x1E53, 0x0006, 0x0006, 0x1E64, 0x0006, 0x0006, 0x1E65, 0x0006,
    0x0006, 0x1E66, 0x0006, 0x0006, 0x1E67, 0x0001, 0x0001, 0x1E78, 0x0001, 0x0001, 0x1E79, 0x0007,
    0x0007, 0x1E7A, 0x0007, 0x0007, 0x1E7B, 0x0006, 0x0006, 0x1E9B, 0x0000, 0x0011, 0x1EDC, 0x1EDA,
    0x0000, 0x1EE0, 0x0000, 0x0000, 0x0000, 0x0000, 0x1EDE, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x1EE2, 0x0000, 0x0011, 0x1EDD, 0x1EDB, 0x0000, 0x1EE1, 0x0000, 0x0000,
    0x0000, 0x0000, 0x1EDF, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1EE3,
    0x0000, 0x0011, 0x1EEA, 0x1EE8, 0x0000, 0x1EEE, 0x0000, 0x0000, 0x0000, 0x0000, 0x1EEC, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1EF0, 0x0000, 0x0011, 0x1EEB, 0x1EE9,
    0x0000, 0x1EEF, 0x0000, 0x0000, 0x0000, 0x0000, 0x1EED, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x1EF1, 0x000B, 0x000B, 0x01EE, 0x0004, 0x0004, 0x01EC, 0x0004, 0x0004,
    0x01ED, 0x0004, 0x0004, 0x01E0, 0x0004, 0x0004, 0x01E1, 0x0005, 0x0005, 0x1E1C, 0x0005, 0x0005,
    0x1E1D, 0x0004, 0x0004, 0x0230, 0x0004, 0x0004, 0x0231, 0x000B, 0x000B, 0x01EF, 0x0000, 0x001D,
    0x1FBA, 0x0386, 0x0000, 0x0000, 0x1FB9, 0x1FB8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x1F08, 0x1F09, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1FBC, 0x0000, 0x000F, 0x1FC8, 0x0388, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F18, 0x1F19,
    0x0000, 0x001D, 0x1FCA, 0x0389, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x1F28, 0x1F29, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1FCC, 0x0000, 0x000F, 0x1FDA, 0x038A,
    0x0000, 0x0000, 0x1FD9, 0x1FD8, 0x0000, 0x03AA, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1F38, 0x1F39, 0x0000, 0x000F, 0x1FF8, 0x038C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F48, 0x1F49, 0x000F, 0x000F, 0x1FEC, 0x0000,
    0x000F, 0x1FEA, 0x038E, 0x0000, 0x0000, 0x1FE9, 0x1FE8, 0x0000, 0x03AB, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x1F59, 0x0000, 0x001D, 0x1FFA, 0x038F, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F68, 0x1F69, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1FFC, 0x001D, 0x001D, 0x1FB4, 0x001D, 0x001D, 0x1FC4, 0x0000, 0x001D, 0x1F70, 0x03AC, 0x0000,
    0x0000, 0x1FB1, 0x1FB0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F00,
    0x1F01, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x1FB6, 0x1FB3, 0x0000, 0x000F, 0x1F72, 0x03AD, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F10, 0x1F11, 0x0000, 0x001D, 0x1F74,
    0x03AE, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x1F20, 0x1F21, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x1FC6, 0x1FC3, 0x0000, 0x001C, 0x1F76, 0x03AF, 0x0000, 0x0000, 0x1FD1,
    0x1FD0, 0x0000, 0x03CA, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F30, 0x1F31, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1FD6,
    0x0000, 0x000F, 0x1F78, 0x03CC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x1F40, 0x1F41, 0x000E, 0x000F, 0x1FE4, 0x1FE5, 0x0000, 0x001C,
    0x1F7A, 0x03CD, 0x0000, 0x0000, 0x1FE1, 0x1FE0, 0x0000, 0x03CB, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x1F50, 0x1F51, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x1FE6, 0x0000, 0x001D, 0x1F7C, 0x03CE, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F60, 0x1F61, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1FF6,
    0x1FF3, 0x0000, 0x001C, 0x1FD2, 0x0390, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1FD7, 0x0000, 0x001C, 0x1FE2, 0x03B0,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x1FE7, 0x001D, 0x001D, 0x1FF4, 0x0001, 0x0007, 0x03D3, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x03D4, 0x0007, 0x0007, 0x0407, 0x0005, 0x0007, 0x04D0, 0x0000, 0x04D2, 0x0001,
    0x0001, 0x0403, 0x0000, 0x0007, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000, 0x04D6, 0x0000, 0x0401,
    0x0005, 0x0007, 0x04C1, 0x0000, 0x04DC, 0x0007, 0x0007, 0x04DE, 0x0000, 0x0007, 0x040D, 0x0000,
    0x0000, 0x0000, 0x04E2, 0x0419, 0x0000, 0x04E4, 0x0001, 0x0001, 0x040C, 0x0007, 0x0007, 0x04E6,
    0x0004, 0x000A, 0x04EE, 0x040E, 0x0000, 0x04F0, 0x0000, 0x0000, 0x04F2, 0x0007, 0x0007, 0x04F4,
    0x0007, 0x0007, 0x04F8, 0x0007, 0x0007, 0x04EC, 0x0005, 0x0007, 0x04D1, 0x0000, 0x04D3, 0x0001,
    0x0001, 0x0453, 0x0000, 0x0007, 0x0450, 0x0000, 0x0000, 0x0000, 0x0000, 0x04D7, 0x0000, 0x0451,
    0x0005, 0x0007, 0x04C2, 0x0000, 0x04DD, 0x0007, 0x0007, 0x04DF, 0x0000, 0x0007, 0x045D, 0x0000,
    0x0000, 0x0000, 0x04E3, 0x0439, 0x0000, 0x04E5, 0x0001, 0x0001, 0x045C, 0x0007, 0x0007, 0x04E7,
    0x0004, 0x000A, 0x04EF, 0x045E, 0x0000, 0x04F1, 0x0000, 0x0000, 0x04F3, 0x0007, 0x0007, 0x04F5,
    0x0007, 0x0007, 0x04F9, 0x0007, 0x0007, 0x04ED, 0x0007, 0x0007, 0x0457, 0x000C, 0x000C, 0x0476,
    0x000C, 0x000C, 0x0477, 0x0007, 0x0007, 0x04DA, 0x0007, 0x0007, 0x04DB, 0x0007, 0x0007, 0x04EA,
    0x0007, 0x0007, 0x04EB, 0x001F, 0x0022, 0xFB2E, 0xFB2F, 0x0000, 0xFB30, 0x0022, 0x0023, 0xFB31,
    0xFB4C, 0x0022, 0x0022, 0xFB32, 0x0022, 0x0022, 0xFB33, 0x0022, 0x0022, 0xFB34, 0x0021, 0x0022,
    0xFB4B, 0xFB35, 0x0022, 0x0022, 0xFB36, 0x0022, 0x0022, 0xFB38, 0x001E, 0x0022, 0xFB1D, 0x0000,
    0x0000, 0x0000, 0xFB39, 0x0022, 0x0022, 0xFB3A, 0x0022, 0x0023, 0xFB3B, 0xFB4D, 0x0022, 0x0022,
    0xFB3C, 0x0022, 0x0022, 0xFB3E, 0x0022, 0x0022, 0xFB40, 0x0022, 0x0022, 0xFB41, 0x0022, 0x0022,
    0xFB43, 0x0022, 0x0023, 0xFB44, 0xFB4E, 0x0022, 0x0022, 0xFB46, 0x0022, 0x0022, 0xFB47, 0x0022,
    0x0022, 0xFB48, 0x0022, 0x0025, 0xFB49, 0x0000, 0xFB2A, 0xFB2B, 0x0022, 0x0022, 0xFB4A, 0x001F,
    0x001F, 0xFB1F, 0x0026, 0x0028, 0x0622, 0x0623, 0x0625, 0x0027, 0x0027, 0x0624, 0x0027, 0x0027,
    0x0626, 0x0027, 0x0027, 0x06C2, 0x0027, 0x0027, 0x06D3, 0x0027, 0x0027, 0x06C0, 0x0029, 0x0029,
    0x0958, 0x0029, 0x0029, 0x0959, 0x0029, 0x0029, 0x095A, 0x0029, 0x0029, 0x095B, 0x0029, 0x0029,
    0x095C, 0x0029, 0x0029, 0x095D, 0x0029, 0x0029, 0x0929, 0x0029, 0x0029, 0x095E, 0x0029, 0x0029,
    0x095F, 0x0029, 0x0029, 0x0931, 0x0029, 0x0029, 0x0934, 0x002A, 0x002A, 0x09DC, 0x002A, 0x002A,
    0x09DD, 0x002A, 0x002A, 0x09DF, 0x002B, 0x002C, 0x09CB, 0x09CC, 0x002D, 0x002D, 0x0A59, 0x002D,
    0x002D, 0x0A5A, 0x002D, 0x002D, 0x0A5B, 0x002D, 0x002D, 0x0A5E, 0x002D, 0x002D, 0x0A33, 0x002D,
    0x002D, 0x0A36, 0x002E, 0x002E, 0x0B5C, 0x002E, 0x002E, 0x0B5D, 0x002F, 0x0031, 0x0B4B, 0x0B48,
    0x0B4C, 0x0033, 0x0033, 0x0B94, 0x0032, 0x0033, 0x0BCA, 0x0BCC, 0x0032, 0x0032, 0x0BCB, 0x0034,
    0x0034, 0x0C48, 0x0036, 0x0036, 0x0CC0, 0x0035, 0x0037, 0x0CCA, 0x0CC7, 0x0CC8, 0x0036, 0x0036,
    0x0CCB, 0x0038, 0x0039, 0x0D4A, 0x0D4C, 0x0038, 0x0038, 0x0D4B, 0x003A, 0x003C, 0x0DDA, 0x0DDC,
    0x0DDE, 0x003A, 0x003A, 0x0DDD, 0x003E, 0x003E, 0x0F69, 0x003F, 0x003F, 0x0F43, 0x003F, 0x003F,
    0x0F4D, 0x003F, 0x003F, 0x0F52, 0x003F, 0x003F, 0x0F57, 0x003F, 0x003F, 0x0F5C, 0x003E, 0x003E,
    0x0FB9, 0x003F, 0x003F, 0x0F93, 0x003F, 0x003F, 0x0F9D, 0x003F, 0x003F, 0x0FA2, 0x003F, 0x003F,
    0x0FA7, 0x003F, 0x003F, 0x0FAC, 0x003D, 0x003D, 0x0F76, 0x003D, 0x003D, 0x0F78, 0x0040, 0x0040,
    0x1026, 0x0041, 0x0041, 0x1B06, 0x0041, 0x0041, 0x1B08, 0x0041, 0x0041, 0x1B0A, 0x0041, 0x0041,
    0x1B0C, 0x0041, 0x0041, 0x1B0E, 0x0041, 0x0041, 0x1B12, 0x0041, 0x0041, 0x1B3B, 0x0041, 0x0041,
    0x1B3D, 0x0041, 0x0041, 0x1B40, 0x0041, 0x0041, 0x1B41, 0x0041, 0x0041, 0x1B43, 0x0004, 0x0004,
    0x1E38, 0x0004, 0x0004, 0x1E39, 0x0004, 0x0004, 0x1E5C, 0x0004, 0x0004, 0x1E5D, 0x0006, 0x0006,
    0x1E68, 0x0006, 0x0006, 0x1E69, 0x0002, 0x0005, 0x1EAC, 0x0000, 0x0000, 0x1EB6, 0x0002, 0x0005,
    0x1EAD, 0x0000, 0x0000, 0x1EB7, 0x0002, 0x0002, 0x1EC6, 0x0002, 0x0002, 0x1EC7, 0x0002, 0x0002,
    0x1ED8, 0x0002, 0x0002, 0x1ED9, 0x0000, 0x001D, 0x1F02, 0x1F04, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F06, 0x1F80,
    0x0000, 0x001D, 0x1F03, 0x1F05, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F07, 0x1F81, 0x001D, 0x001D, 0x1F82, 0x001D,
    0x001D, 0x1F83, 0x001D, 0x001D, 0x1F84, 0x001D, 0x001D, 0x1F85, 0x001D, 0x001D, 0x1F86, 0x001D,
    0x001D, 0x1F87, 0x0000, 0x001D, 0x1F0A, 0x1F0C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F0E, 0x1F88, 0x0000, 0x001D,
    0x1F0B, 0x1F0D, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x1F0F, 0x1F89, 0x001D, 0x001D, 0x1F8A, 0x001D, 0x001D, 0x1F8B,
    0x001D, 0x001D, 0x1F8C, 0x001D, 0x001D, 0x1F8D, 0x001D, 0x001D, 0x1F8E, 0x001D, 0x001D, 0x1F8F,
    0x0000, 0x0001, 0x1F12, 0x1F14, 0x0000, 0x0001, 0x1F13, 0x1F15, 0x0000, 0x0001, 0x1F1A, 0x1F1C,
    0x0000, 0x0001, 0x1F1B, 0x1F1D, 0x0000, 0x001D, 0x1F22, 0x1F24, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F26, 0x1F90,
    0x0000, 0x001D, 0x1F23, 0x1F25, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F27, 0x1F91, 0x001D, 0x001D, 0x1F92, 0x001D,
    0x001D, 0x1F93, 0x001D, 0x001D, 0x1F94, 0x001D, 0x001D, 0x1F95, 0x001D, 0x001D, 0x1F96, 0x001D,
    0x001D, 0x1F97, 0x0000, 0x001D, 0x1F2A, 0x1F2C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F2E, 0x1F98, 0x0000, 0x001D,
    0x1F2B, 0x1F2D, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x1F2F, 0x1F99, 0x001D, 0x001D, 0x1F9A, 0x001D, 0x001D, 0x1F9B,
    0x001D, 0x001D, 0x1F9C, 0x001D, 0x001D, 0x1F9D, 0x001D, 0x001D, 0x1F9E, 0x001D, 0x001D, 0x1F9F,
    0x0000, 0x001C, 0x1F32, 0x1F34, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F36, 0x0000, 0x001C, 0x1F33, 0x1F35, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x1F37, 0x0000, 0x001C, 0x1F3A, 0x1F3C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F3E, 0x0000, 0x001C, 0x1F3B,
    0x1F3D, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x1F3F, 0x0000, 0x0001, 0x1F42, 0x1F44, 0x0000, 0x0001, 0x1F43, 0x1F45,
    0x0000, 0x0001, 0x1F4A, 0x1F4C, 0x0000, 0x0001, 0x1F4B, 0x1F4D, 0x0000, 0x001C, 0x1F52, 0x1F54,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x1F56, 0x0000, 0x001C, 0x1F53, 0x1F55, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F57, 0x0000, 0x001C,
    0x1F5B, 0x1F5D, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x1F5F, 0x0000, 0x001D, 0x1F62, 0x1F64, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F66,
    0x1FA0, 0x0000, 0x001D, 0x1F63, 0x1F65, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F67, 0x1FA1, 0x001D, 0x001D, 0x1FA2,
    0x001D, 0x001D, 0x1FA3, 0x001D, 0x001D, 0x1FA4, 0x001D, 0x001D, 0x1FA5, 0x001D, 0x001D, 0x1FA6,
    0x001D, 0x001D, 0x1FA7, 0x0000, 0x001D, 0x1F6A, 0x1F6C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F6E, 0x1FA8, 0x0000,
    0x001D, 0x1F6B, 0x1F6D, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F6F, 0x1FA9, 0x001D, 0x001D, 0x1FAA, 0x001D, 0x001D,
    0x1FAB, 0x001D, 0x001D, 0x1FAC, 0x001D, 0x001D, 0x1FAD, 0x001D, 0x001D, 0x1FAE, 0x001D, 0x001D,
    0x1FAF, 0x001D, 0x001D, 0x1FB2, 0x001D, 0x001D, 0x1FC2, 0x001D, 0x001D, 0x1FF2, 0x001D, 0x001D,
    0x1FB7, 0x0000, 0x001C, 0x1FCD, 0x1FCE, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1FCF, 0x001D, 0x001D, 0x1FC7, 0x001D,
    0x001D, 0x1FF7, 0x0000, 0x001C, 0x1FDD, 0x1FDE, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1FDF, 0x001B, 0x001B, 0x219A,
    0x001B, 0x001B, 0x219B, 0x001B, 0x001B, 0x21AE, 0x001B, 0x001B, 0x21CD, 0x001B, 0x001B, 0x21CF,
    0x001B, 0x001B, 0x21CE, 0x001B, 0x001B, 0x2204, 0x001B, 0x001B, 0x2209, 0x001B, 0x001B, 0x220C,
    0x001B, 0x001B, 0x2224, 0x001B, 0x001B, 0x2226, 0x001B, 0x001B, 0x2241, 0x001B, 0x001B, 0x2244,
    0x001B, 0x001B, 0x2247, 0x001B, 0x001B, 0x2249, 0x001B, 0x001B, 0x226D, 0x001B, 0x001B, 0x2262,
    0x001B, 0x001B, 0x2270, 0x001B, 0x001B, 0x2271, 0x001B, 0x001B, 0x2274, 0x001B, 0x001B, 0x2275,
    0x001B, 0x001B, 0x2278, 0x001B, 0x001B, 0x2279, 0x001B, 0x001B, 0x2280, 0x001B, 0x001B, 0x2281,
    0x001B, 0x001B, 0x22E0, 0x001B, 0x001B, 0x22E1, 0x001B, 0x001B, 0x2284, 0x001B, 0x001B, 0x2285,
    0x001B, 0x001B, 0x2288, 0x001B, 0x001B, 0x2289, 0x001B, 0x001B, 0x22E2, 0x001B, 0x001B, 0x22E3,
    0x001B, 0x001B, 0x22AC, 0x001B, 0x001B, 0x22AD, 0x001B, 0x001B, 0x22AE, 0x001B, 0x001B, 0x22AF,
    0x001B, 0x001B, 0x22EA, 0x001B, 0x001B, 0x22EB, 0x001B, 0x001B, 0x22EC, 0x001B, 0x001B, 0x22ED,
    0x001B, 0x001B, 0x2ADC, 0x0042, 0x0042, 0x3094, 0x0042, 0x0042, 0x304C, 0x0042, 0x0042, 0x304E,
    0x0042, 0x0042, 0x3050, 0x0042, 0x0042, 0x3052, 0x0042, 0x0042, 0x3054, 0x0042, 0x0042, 0x3056,
    0x0042, 0x0042, 0x3058, 0x0042, 0x0042, 0x305A, 0x0042, 0x0042, 0x305C, 0x0042, 0x0042, 0x305E,
    0x0042, 0x0042, 0x3060, 0x0042, 0x0042, 0x3062, 0x0042, 0x0042, 0x3065, 0x0042, 0x0042, 0x3067,
    0x0042, 0x0042, 0x3069, 0x0042, 0x0043, 0x3070, 0x3071, 0x0042, 0x0043, 0x3073, 0x3074, 0x0042,
    0x0043, 0x3076, 0x3077, 0x0042, 0x0043, 0x3079, 0x307A, 0x0042, 0x0043, 0x307C, 0x307D, 0x0042,
    0x0042, 0x309E, 0x0042, 0x0042, 0x30F4, 0x0042, 0x0042, 0x30AC, 0x0042, 0x0042, 0x30AE, 0x0042,
    0x0042, 0x30B0, 0x0042, 0x0042, 0x30B2, 0x0042, 0x0042, 0x30B4, 0x0042, 0x0042, 0x30B6, 0x0042,
    0x0042, 0x30B8, 0x0042, 0x0042, 0x30BA, 0x0042, 0x0042, 0x30BC, 0x0042, 0x0042, 0x30BE, 0x0042,
    0x0042, 0x30C0, 0x0042, 0x0042, 0x30C2, 0x0042, 0x0042, 0x30C5, 0x0042, 0x0042, 0x30C7, 0x0042,
    0x0042, 0x30C9, 0x0042, 0x0043, 0x30D0, 0x30D1, 0x0042, 0x0043, 0x30D3, 0x30D4, 0x0042, 0x0043,
    0x30D6, 0x30D7, 0x0042, 0x0043, 0x30D9, 0x30DA, 0x0042, 0x0043, 0x30DC, 0x30DD, 0x0042, 0x0042,
    0x30F7, 0x0042, 0x0042, 0x30F8, 0x0042, 0x0042, 0x30F9, 0x0042, 0x0042, 0x30FA, 0x0042, 0x0042,
    0x30FE, 0x0024, 0x0025, 0xFB2C, 0xFB2D, 0x0044, 0x0044, 0x0001, 0x109A, 0x0044, 0x0044, 0x0001,
    0x109C, 0x0044, 0x0044, 0x0001, 0x10AB, 0x0045, 0x0045, 0x0001, 0x112E, 0x0045, 0x0045, 0x0001,
    0x112F, 0x0046, 0x0047, 0x0001, 0x134B, 0x0001, 0x134C, 0x0048, 0x004A, 0x0001, 0x14BC, 0x0001,
    0x14BB, 0x0001, 0x14BE, 0x004B, 0x004B, 0x0001, 0x15BA, 0x004B, 0x004B, 0x0001, 0x15BB, 0x004C,
    0x004C, 0x0001, 0x1938, 0x004D, 0x004D, 0x0001, 0xD15E, 0x004D, 0x004D, 0x0001, 0xD15F, 0x004E,
    0x0052, 0x0001, 0xD160, 0x0001, 0xD161, 0x0001, 0xD162, 0x0001, 0xD163, 0x0001, 0xD164, 0x004D,
    0x004D, 0x0001, 0xD1BB, 0x004D, 0x004D, 0x0001, 0xD1BC, 0x004E, 0x004F, 0x0001, 0xD1BD, 0x0001,
    0xD1BF, 0x004E, 0x004F, 0x0001, 0xD1BE, 0x0001, 0xD1C0,
];
