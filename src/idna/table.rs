// Generated by scripts/gen_idna_table.py from IdnaMappingTable.txt
// (Unicode 17.0.0). Do not edit by hand.

use super::mapping::Status::{self, *};

/// The Unicode version of the IDNA mapping data.
pub const UNICODE_VERSION: &str = "17.0.0";

#[rustfmt::skip]
pub(super) static TABLE: &[(u32, Status, &str)] = &[
    (0x0000, Valid, ""),
    (0x0041, Mapped, "a"),
    (0x0042, Mapped, "b"),
    (0x0043, Mapped, "c"),
    (0x0044, Mapped, "d"),
    (0x0045, Mapped, "e"),
    (0x0046, Mapped, "f"),
    (0x0047, Mapped, "g"),
    (0x0048, Mapped, "h"),
    (0x0049, Mapped, "i"),
    (0x004A, Mapped, "j"),
    (0x004B, Mapped, "k"),
    (0x004C, Mapped, "l"),
    (0x004D, Mapped, "m"),
    (0x004E, Mapped, "n"),
    (0x004F, Mapped, "o"),
    (0x0050, Mapped, "p"),
    (0x0051, Mapped, "q"),
    (0x0052, Mapped, "r"),
    (0x0053, Mapped, "s"),
    (0x0054, Mapped, "t"),
    (0x0055, Mapped, "u"),
    (0x0056, Mapped, "v"),
    (0x0057, Mapped, "w"),
    (0x0058, Mapped, "x"),
    (0x0059, Mapped, "y"),
    (0x005A, Mapped, "z"),
    (0x005B, Valid, ""),
    (0x0080, Disallowed, ""),
    (0x00A0, Mapped, " "),
    (0x00A1, Valid, ""),
    (0x00A8, Mapped, " \u{308}"),
    (0x00A9, Valid, ""),
    (0x00AA, Mapped, "a"),
    (0x00AB, Valid, ""),
    (0x00AD, Ignored, ""),
    (0x00AE, Valid, ""),
    (0x00AF, Mapped, " \u{304}"),
    (0x00B0, Valid, ""),
    (0x00B2, Mapped, "2"),
    (0x00B3, Mapped, "3"),
    (0x00B4, Mapped, " \u{301}"),
    (0x00B5, Mapped, "\u{3bc}"),
    (0x00B6, Valid, ""),
    (0x00B8, Mapped, " \u{327}"),
    (0x00B9, Mapped, "1"),
    (0x00BA, Mapped, "o"),
    (0x00BB, Valid, ""),
    (0x00BC, Mapped, "1\u{2044}4"),
    (0x00BD, Mapped, "1\u{2044}2"),
    (0x00BE, Mapped, "3\u{2044}4"),
    (0x00BF, Valid, ""),
    (0x00C0, Mapped, "\u{e0}"),
    (0x00C1, Mapped, "\u{e1}"),
    (0x00C2, Mapped, "\u{e2}"),
    (0x00C3, Mapped, "\u{e3}"),
    (0x00C4, Mapped, "\u{e4}"),
    (0x00C5, Mapped, "\u{e5}"),
    (0x00C6, Mapped, "\u{e6}"),
    (0x00C7, Mapped, "\u{e7}"),
    (0x00C8, Mapped, "\u{e8}"),
    (0x00C9, Mapped, "\u{e9}"),
    (0x00CA, Mapped, "\u{ea}"),
    (0x00CB, Mapped, "\u{eb}"),
    (0x00CC, Mapped, "\u{ec}"),
    (0x00CD, Mapped, "\u{ed}"),
    (0x00CE, Mapped, "\u{ee}"),
    (0x00CF, Mapped, "\u{ef}"),
    (0x00D0, Mapped, "\u{f0}"),
    (0x00D1, Mapped, "\u{f1}"),
    (0x00D2, Mapped, "\u{f2}"),
    (0x00D3, Mapped, "\u{f3}"),
    (0x00D4, Mapped, "\u{f4}"),
    (0x00D5, Mapped, "\u{f5}"),
    (0x00D6, Mapped, "\u{f6}"),
    (0x00D7, Valid, ""),
    (0x00D8, Mapped, "\u{f8}"),
    (0x00D9, Mapped, "\u{f9}"),
    (0x00DA, Mapped, "\u{fa}"),
    (0x00DB, Mapped, "\u{fb}"),
    (0x00DC, Mapped, "\u{fc}"),
    (0x00DD, Mapped, "\u{fd}"),
    (0x00DE, Mapped, "\u{fe}"),
    (0x00DF, Deviation, ""),
    (0x00E0, Valid, ""),
    (0x0100, Mapped, "\u{101}"),
    (0x0101, Valid, ""),
    (0x0102, Mapped, "\u{103}"),
    (0x0103, Valid, ""),
    (0x0104, Mapped, "\u{105}"),
    (0x0105, Valid, ""),
    (0x0106, Mapped, "\u{107}"),
    (0x0107, Valid, ""),
    (0x0108, Mapped, "\u{109}"),
    (0x0109, Valid, ""),
    (0x010A, Mapped, "\u{10b}"),
    (0x010B, Valid, ""),
    (0x010C, Mapped, "\u{10d}"),
    (0x010D, Valid, ""),
    (0x010E, Mapped, "\u{10f}"),
    (0x010F, Valid, ""),
    (0x0110, Mapped, "\u{111}"),
    (0x0111, Valid, ""),
    (0x0112, Mapped, "\u{113}"),
    (0x0113, Valid, ""),
    (0x0114, Mapped, "\u{115}"),
    (0x0115, Valid, ""),
    (0x0116, Mapped, "\u{117}"),
    (0x0117, Valid, ""),
    (0x0118, Mapped, "\u{119}"),
    (0x0119, Valid, ""),
    (0x011A, Mapped, "\u{11b}"),
    (0x011B, Valid, ""),
    (0x011C, Mapped, "\u{11d}"),
    (0x011D, Valid, ""),
    (0x011E, Mapped, "\u{11f}"),
    (0x011F, Valid, ""),
    (0x0120, Mapped, "\u{121}"),
    (0x0121, Valid, ""),
    (0x0122, Mapped, "\u{123}"),
    (0x0123, Valid, ""),
    (0x0124, Mapped, "\u{125}"),
    (0x0125, Valid, ""),
    (0x0126, Mapped, "\u{127}"),
    (0x0127, Valid, ""),
    (0x0128, Mapped, "\u{129}"),
    (0x0129, Valid, ""),
    (0x012A, Mapped, "\u{12b}"),
    (0x012B, Valid, ""),
    (0x012C, Mapped, "\u{12d}"),
    (0x012D, Valid, ""),
    (0x012E, Mapped, "\u{12f}"),
    (0x012F, Valid, ""),
    (0x0130, Mapped, "i\u{307}"),
    (0x0131, Valid, ""),
    (0x0132, Mapped, "ij"),
    (0x0134, Mapped, "\u{135}"),
    (0x0135, Valid, ""),
    (0x0136, Mapped, "\u{137}"),
    (0x0137, Valid, ""),
    (0x0139, Mapped, "\u{13a}"),
    (0x013A, Valid, ""),
    (0x013B, Mapped, "\u{13c}"),
    (0x013C, Valid, ""),
    (0x013D, Mapped, "\u{13e}"),
    (0x013E, Valid, ""),
    (0x013F, Mapped, "l\u{b7}"),
    (0x0141, Mapped, "\u{142}"),
    (0x0142, Valid, ""),
    (0x0143, Mapped, "\u{144}"),
    (0x0144, Valid, ""),
    (0x0145, Mapped, "\u{146}"),
    (0x0146, Valid, ""),
    (0x0147, Mapped, "\u{148}"),
    (0x0148, Valid, ""),
    (0x0149, Mapped, "\u{2bc}n"),
    (0x014A, Mapped, "\u{14b}"),
    (0x014B, Valid, ""),
    (0x014C, Mapped, "\u{14d}"),
    (0x014D, Valid, ""),
    (0x014E, Mapped, "\u{14f}"),
    (0x014F, Valid, ""),
    (0x0150, Mapped, "\u{151}"),
    (0x0151, Valid, ""),
    (0x0152, Mapped, "\u{153}"),
    (0x0153, Valid, ""),
    (0x0154, Mapped, "\u{155}"),
    (0x0155, Valid, ""),
    (0x0156, Mapped, "\u{157}"),
    (0x0157, Valid, ""),
    (0x0158, Mapped, "\u{159}"),
    (0x0159, Valid, ""),
    (0x015A, Mapped, "\u{15b}"),
    (0x015B, Valid, ""),
    (0x015C, Mapped, "\u{15d}"),
    (0x015D, Valid, ""),
    (0x015E, Mapped, "\u{15f}"),
    (0x015F, Valid, ""),
    (0x0160, Mapped, "\u{161}"),
    (0x0161, Valid, ""),
    (0x0162, Mapped, "\u{163}"),
    (0x0163, Valid, ""),
    (0x0164, Mapped, "\u{165}"),
    (0x0165, Valid, ""),
    (0x0166, Mapped, "\u{167}"),
    (0x0167, Valid, ""),
    (0x0168, Mapped, "\u{169}"),
    (0x0169, Valid, ""),
    (0x016A, Mapped, "\u{16b}"),
    (0x016B, Valid, ""),
    (0x016C, Mapped, "\u{16d}"),
    (0x016D, Valid, ""),
    (0x016E, Mapped, "\u{16f}"),
    (0x016F, Valid, ""),
    (0x0170, Mapped, "\u{171}"),
    (0x0171, Valid, ""),
    (0x0172, Mapped, "\u{173}"),
    (0x0173, Valid, ""),
    (0x0174, Mapped, "\u{175}"),
    (0x0175, Valid, ""),
    (0x0176, Mapped, "\u{177}"),
    (0x0177, Valid, ""),
    (0x0178, Mapped, "\u{ff}"),
    (0x0179, Mapped, "\u{17a}"),
    (0x017A, Valid, ""),
    (0x017B, Mapped, "\u{17c}"),
    (0x017C, Valid, ""),
    (0x017D, Mapped, "\u{17e}"),
    (0x017E, Valid, ""),
    (0x017F, Mapped, "s"),
    (0x0180, Valid, ""),
    (0x0181, Mapped, "\u{253}"),
    (0x0182, Mapped, "\u{183}"),
    (0x0183, Valid, ""),
    (0x0184, Mapped, "\u{185}"),
    (0x0185, Valid, ""),
    (0x0186, Mapped, "\u{254}"),
    (0x0187, Mapped, "\u{188}"),
    (0x0188, Valid, ""),
    (0x0189, Mapped, "\u{256}"),
    (0x018A, Mapped, "\u{257}"),
    (0x018B, Mapped, "\u{18c}"),
    (0x018C, Valid, ""),
    (0x018E, Mapped, "\u{1dd}"),
    (0x018F, Mapped, "\u{259}"),
    (0x0190, Mapped, "\u{25b}"),
    (0x0191, Mapped, "\u{192}"),
    (0x0192, Valid, ""),
    (0x0193, Mapped, "\u{260}"),
    (0x0194, Mapped, "\u{263}"),
    (0x0195, Valid, ""),
    (0x0196, Mapped, "\u{269}"),
    (0x0197, Mapped, "\u{268}"),
    (0x0198, Mapped, "\u{199}"),
    (0x0199, Valid, ""),
    (0x019C, Mapped, "\u{26f}"),
    (0x019D, Mapped, "\u{272}"),
    (0x019E, Valid, ""),
    (0x019F, Mapped, "\u{275}"),
    (0x01A0, Mapped, "\u{1a1}"),
    (0x01A1, Valid, ""),
    (0x01A2, Mapped, "\u{1a3}"),
    (0x01A3, Valid, ""),
    (0x01A4, Mapped, "\u{1a5}"),
    (0x01A5, Valid, ""),
    (0x01A6, Mapped, "\u{280}"),
    (0x01A7, Mapped, "\u{1a8}"),
    (0x01A8, Valid, ""),
    (0x01A9, Mapped, "\u{283}"),
    (0x01AA, Valid, ""),
    (0x01AC, Mapped, "\u{1ad}"),
    (0x01AD, Valid, ""),
    (0x01AE, Mapped, "\u{288}"),
    (0x01AF, Mapped, "\u{1b0}"),
    (0x01B0, Valid, ""),
    (0x01B1, Mapped, "\u{28a}"),
    (0x01B2, Mapped, "\u{28b}"),
    (0x01B3, Mapped, "\u{1b4}"),
    (0x01B4, Valid, ""),
    (0x01B5, Mapped, "\u{1b6}"),
    (0x01B6, Valid, ""),
    (0x01B7, Mapped, "\u{292}"),
    (0x01B8, Mapped, "\u{1b9}"),
    (0x01B9, Valid, ""),
    (0x01BC, Mapped, "\u{1bd}"),
    (0x01BD, Valid, ""),
    (0x01C4, Mapped, "d\u{17e}"),
    (0x01C7, Mapped, "lj"),
    (0x01CA, Mapped, "nj"),
    (0x01CD, Mapped, "\u{1ce}"),
    (0x01CE, Valid, ""),
    (0x01CF, Mapped, "\u{1d0}"),
    (0x01D0, Valid, ""),
    (0x01D1, Mapped, "\u{1d2}"),
    (0x01D2, Valid, ""),
    (0x01D3, Mapped, "\u{1d4}"),
    (0x01D4, Valid, ""),
    (0x01D5, Mapped, "\u{1d6}"),
    (0x01D6, Valid, ""),
    (0x01D7, Mapped, "\u{1d8}"),
    (0x01D8, Valid, ""),
    (0x01D9, Mapped, "\u{1da}"),
    (0x01DA, Valid, ""),
    (0x01DB, Mapped, "\u{1dc}"),
    (0x01DC, Valid, ""),
    (0x01DE, Mapped, "\u{1df}"),
    (0x01DF, Valid, ""),
    (0x01E0, Mapped, "\u{1e1}"),
    (0x01E1, Valid, ""),
    (0x01E2, Mapped, "\u{1e3}"),
    (0x01E3, Valid, ""),
    (0x01E4, Mapped, "\u{1e5}"),
    (0x01E5, Valid, ""),
    (0x01E6, Mapped, "\u{1e7}"),
    (0x01E7, Valid, ""),
    (0x01E8, Mapped, "\u{1e9}"),
    (0x01E9, Valid, ""),
    (0x01EA, Mapped, "\u{1eb}"),
    (0x01EB, Valid, ""),
    (0x01EC, Mapped, "\u{1ed}"),
    (0x01ED, Valid, ""),
    (0x01EE, Mapped, "\u{1ef}"),
    (0x01EF, Valid, ""),
    (0x01F1, Mapped, "dz"),
    (0x01F4, Mapped, "\u{1f5}"),
    (0x01F5, Valid, ""),
    (0x01F6, Mapped, "\u{195}"),
    (0x01F7, Mapped, "\u{1bf}"),
    (0x01F8, Mapped, "\u{1f9}"),
    (0x01F9, Valid, ""),
    (0x01FA, Mapped, "\u{1fb}"),
    (0x01FB, Valid, ""),
    (0x01FC, Mapped, "\u{1fd}"),
    (0x01FD, Valid, ""),
    (0x01FE, Mapped, "\u{1ff}"),
    (0x01FF, Valid, ""),
    (0x0200, Mapped, "\u{201}"),
    (0x0201, Valid, ""),
    (0x0202, Mapped, "\u{203}"),
    (0x0203, Valid, ""),
    (0x0204, Mapped, "\u{205}"),
    (0x0205, Valid, ""),
    (0x0206, Mapped, "\u{207}"),
    (0x0207, Valid, ""),
    (0x0208, Mapped, "\u{209}"),
    (0x0209, Valid, ""),
    (0x020A, Mapped, "\u{20b}"),
    (0x020B, Valid, ""),
    (0x020C, Mapped, "\u{20d}"),
    (0x020D, Valid, ""),
    (0x020E, Mapped, "\u{20f}"),
    (0x020F, Valid, ""),
    (0x0210, Mapped, "\u{211}"),
    (0x0211, Valid, ""),
    (0x0212, Mapped, "\u{213}"),
    (0x0213, Valid, ""),
    (0x0214, Mapped, "\u{215}"),
    (0x0215, Valid, ""),
    (0x0216, Mapped, "\u{217}"),
    (0x0217, Valid, ""),
    (0x0218, Mapped, "\u{219}"),
    (0x0219, Valid, ""),
    (0x021A, Mapped, "\u{21b}"),
    (0x021B, Valid, ""),
    (0x021C, Mapped, "\u{21d}"),
    (0x021D, Valid, ""),
    (0x021E, Mapped, "\u{21f}"),
    (0x021F, Valid, ""),
    (0x0220, Mapped, "\u{19e}"),
    (0x0221, Valid, ""),
    (0x0222, Mapped, "\u{223}"),
    (0x0223, Valid, ""),
    (0x0224, Mapped, "\u{225}"),
    (0x0225, Valid, ""),
    (0x0226, Mapped, "\u{227}"),
    (0x0227, Valid, ""),
    (0x0228, Mapped, "\u{229}"),
    (0x0229, Valid, ""),
    (0x022A, Mapped, "\u{22b}"),
    (0x022B, Valid, ""),
    (0x022C, Mapped, "\u{22d}"),
    (0x022D, Valid, ""),
    (0x022E, Mapped, "\u{22f}"),
    (0x022F, Valid, ""),
    (0x0230, Mapped, "\u{231}"),
    (0x0231, Valid, ""),
    (0x0232, Mapped, "\u{233}"),
    (0x0233, Valid, ""),
    (0x023A, Mapped, "\u{2c65}"),
    (0x023B, Mapped, "\u{23c}"),
    (0x023C, Valid, ""),
    (0x023D, Mapped, "\u{19a}"),
    (0x023E, Mapped, "\u{2c66}"),
    (0x023F, Valid, ""),
    (0x0241, Mapped, "\u{242}"),
    (0x0242, Valid, ""),
    (0x0243, Mapped, "\u{180}"),
    (0x0244, Mapped, "\u{289}"),
    (0x0245, Mapped, "\u{28c}"),
    (0x0246, Mapped, "\u{247}"),
    (0x0247, Valid, ""),
    (0x0248, Mapped, "\u{249}"),
    (0x0249, Valid, ""),
    (0x024A, Mapped, "\u{24b}"),
    (0x024B, Valid, ""),
    (0x024C, Mapped, "\u{24d}"),
    (0x024D, Valid, ""),
    (0x024E, Mapped, "\u{24f}"),
    (0x024F, Valid, ""),
    (0x02B0, Mapped, "h"),
    (0x02B1, Mapped, "\u{266}"),
    (0x02B2, Mapped, "j"),
    (0x02B3, Mapped, "r"),
    (0x02B4, Mapped, "\u{279}"),
    (0x02B5, Mapped, "\u{27b}"),
    (0x02B6, Mapped, "\u{281}"),
    (0x02B7, Mapped, "w"),
    (0x02B8, Mapped, "y"),
    (0x02B9, Valid, ""),
    (0x02D8, Mapped, " \u{306}"),
    (0x02D9, Mapped, " \u{307}"),
    (0x02DA, Mapped, " \u{30a}"),
    (0x02DB, Mapped, " \u{328}"),
    (0x02DC, Mapped, " \u{303}"),
    (0x02DD, Mapped, " \u{30b}"),
    (0x02DE, Valid, ""),
    (0x02E0, Mapped, "\u{263}"),
    (0x02E1, Mapped, "l"),
    (0x02E2, Mapped, "s"),
    (0x02E3, Mapped, "x"),
    (0x02E4, Mapped, "\u{295}"),
    (0x02E5, Valid, ""),
    (0x0340, Mapped, "\u{300}"),
    (0x0341, Mapped, "\u{301}"),
    (0x0342, Valid, ""),
    (0x0343, Mapped, "\u{313}"),
    (0x0344, Mapped, "\u{308}\u{301}"),
    (0x0345, Mapped, "\u{3b9}"),
    (0x0346, Valid, ""),
    (0x034F, Ignored, ""),
    (0x0350, Valid, ""),
    (0x0370, Mapped, "\u{371}"),
    (0x0371, Valid, ""),
    (0x0372, Mapped, "\u{373}"),
    (0x0373, Valid, ""),
    (0x0374, Mapped, "\u{2b9}"),
    (0x0375, Valid, ""),
    (0x0376, Mapped, "\u{377}"),
    (0x0377, Valid, ""),
    (0x0378, Disallowed, ""),
    (0x037A, Mapped, " \u{3b9}"),
    (0x037B, Valid, ""),
    (0x037E, Mapped, ";"),
    (0x037F, Mapped, "\u{3f3}"),
    (0x0380, Disallowed, ""),
    (0x0384, Mapped, " \u{301}"),
    (0x0385, Mapped, " \u{308}\u{301}"),
    (0x0386, Mapped, "\u{3ac}"),
    (0x0387, Mapped, "\u{b7}"),
    (0x0388, Mapped, "\u{3ad}"),
    (0x0389, Mapped, "\u{3ae}"),
    (0x038A, Mapped, "\u{3af}"),
    (0x038B, Disallowed, ""),
    (0x038C, Mapped, "\u{3cc}"),
    (0x038D, Disallowed, ""),
    (0x038E, Mapped, "\u{3cd}"),
    (0x038F, Mapped, "\u{3ce}"),
    (0x0390, Valid, ""),
    (0x0391, Mapped, "\u{3b1}"),
    (0x0392, Mapped, "\u{3b2}"),
    (0x0393, Mapped, "\u{3b3}"),
    (0x0394, Mapped, "\u{3b4}"),
    (0x0395, Mapped, "\u{3b5}"),
    (0x0396, Mapped, "\u{3b6}"),
    (0x0397, Mapped, "\u{3b7}"),
    (0x0398, Mapped, "\u{3b8}"),
    (0x0399, Mapped, "\u{3b9}"),
    (0x039A, Mapped, "\u{3ba}"),
    (0x039B, Mapped, "\u{3bb}"),
    (0x039C, Mapped, "\u{3bc}"),
    (0x039D, Mapped, "\u{3bd}"),
    (0x039E, Mapped, "\u{3be}"),
    (0x039F, Mapped, "\u{3bf}"),
    (0x03A0, Mapped, "\u{3c0}"),
    (0x03A1, Mapped, "\u{3c1}"),
    (0x03A2, Disallowed, ""),
    (0x03A3, Mapped, "\u{3c3}"),
    (0x03A4, Mapped, "\u{3c4}"),
    (0x03A5, Mapped, "\u{3c5}"),
    (0x03A6, Mapped, "\u{3c6}"),
    (0x03A7, Mapped, "\u{3c7}"),
    (0x03A8, Mapped, "\u{3c8}"),
    (0x03A9, Mapped, "\u{3c9}"),
    (0x03AA, Mapped, "\u{3ca}"),
    (0x03AB, Mapped, "\u{3cb}"),
    (0x03AC, Valid, ""),
    (0x03C2, Deviation, ""),
    (0x03C3, Valid, ""),
    (0x03CF, Mapped, "\u{3d7}"),
    (0x03D0, Mapped, "\u{3b2}"),
    (0x03D1, Mapped, "\u{3b8}"),
    (0x03D2, Mapped, "\u{3c5}"),
    (0x03D3, Mapped, "\u{3cd}"),
    (0x03D4, Mapped, "\u{3cb}"),
    (0x03D5, Mapped, "\u{3c6}"),
    (0x03D6, Mapped, "\u{3c0}"),
    (0x03D7, Valid, ""),
    (0x03D8, Mapped, "\u{3d9}"),
    (0x03D9, Valid, ""),
    (0x03DA, Mapped, "\u{3db}"),
    (0x03DB, Valid, ""),
    (0x03DC, Mapped, "\u{3dd}"),
    (0x03DD, Valid, ""),
    (0x03DE, Mapped, "\u{3df}"),
    (0x03DF, Valid, ""),
    (0x03E0, Mapped, "\u{3e1}"),
    (0x03E1, Valid, ""),
    (0x03E2, Mapped, "\u{3e3}"),
    (0x03E3, Valid, ""),
    (0x03E4, Mapped, "\u{3e5}"),
    (0x03E5, Valid, ""),
    (0x03E6, Mapped, "\u{3e7}"),
    (0x03E7, Valid, ""),
    (0x03E8, Mapped, "\u{3e9}"),
    (0x03E9, Valid, ""),
    (0x03EA, Mapped, "\u{3eb}"),
    (0x03EB, Valid, ""),
    (0x03EC, Mapped, "\u{3ed}"),
    (0x03ED, Valid, ""),
    (0x03EE, Mapped, "\u{3ef}"),
    (0x03EF, Valid, ""),
    (0x03F0, Mapped, "\u{3ba}"),
    (0x03F1, Mapped, "\u{3c1}"),
    (0x03F2, Mapped, "\u{3c3}"),
    (0x03F3, Valid, ""),
    (0x03F4, Mapped, "\u{3b8}"),
    (0x03F5, Mapped, "\u{3b5}"),
    (0x03F6, Valid, ""),
    (0x03F7, Mapped, "\u{3f8}"),
    (0x03F8, Valid, ""),
    (0x03F9, Mapped, "\u{3c3}"),
    (0x03FA, Mapped, "\u{3fb}"),
    (0x03FB, Valid, ""),
    (0x03FD, Mapped, "\u{37b}"),
    (0x03FE, Mapped, "\u{37c}"),
    (0x03FF, Mapped, "\u{37d}"),
    (0x0400, Mapped, "\u{450}"),
    (0x0401, Mapped, "\u{451}"),
    (0x0402, Mapped, "\u{452}"),
    (0x0403, Mapped, "\u{453}"),
    (0x0404, Mapped, "\u{454}"),
    (0x0405, Mapped, "\u{455}"),
    (0x0406, Mapped, "\u{456}"),
    (0x0407, Mapped, "\u{457}"),
    (0x0408, Mapped, "\u{458}"),
    (0x0409, Mapped, "\u{459}"),
    (0x040A, Mapped, "\u{45a}"),
    (0x040B, Mapped, "\u{45b}"),
    (0x040C, Mapped, "\u{45c}"),
    (0x040D, Mapped, "\u{45d}"),
    (0x040E, Mapped, "\u{45e}"),
    (0x040F, Mapped, "\u{45f}"),
    (0x0410, Mapped, "\u{430}"),
    (0x0411, Mapped, "\u{431}"),
    (0x0412, Mapped, "\u{432}"),
    (0x0413, Mapped, "\u{433}"),
    (0x0414, Mapped, "\u{434}"),
    (0x0415, Mapped, "\u{435}"),
    (0x0416, Mapped, "\u{436}"),
    (0x0417, Mapped, "\u{437}"),
    (0x0418, Mapped, "\u{438}"),
    (0x0419, Mapped, "\u{439}"),
    (0x041A, Mapped, "\u{43a}"),
    (0x041B, Mapped, "\u{43b}"),
    (0x041C, Mapped, "\u{43c}"),
    (0x041D, Mapped, "\u{43d}"),
    (0x041E, Mapped, "\u{43e}"),
    (0x041F, Mapped, "\u{43f}"),
    (0x0420, Mapped, "\u{440}"),
    (0x0421, Mapped, "\u{441}"),
    (0x0422, Mapped, "\u{442}"),
    (0x0423, Mapped, "\u{443}"),
    (0x0424, Mapped, "\u{444}"),
    (0x0425, Mapped, "\u{445}"),
    (0x0426, Mapped, "\u{446}"),
    (0x0427, Mapped, "\u{447}"),
    (0x0428, Mapped, "\u{448}"),
    (0x0429, Mapped, "\u{449}"),
    (0x042A, Mapped, "\u{44a}"),
    (0x042B, Mapped, "\u{44b}"),
    (0x042C, Mapped, "\u{44c}"),
    (0x042D, Mapped, "\u{44d}"),
    (0x042E, Mapped, "\u{44e}"),
    (0x042F, Mapped, "\u{44f}"),
    (0x0430, Valid, ""),
    (0x0460, Mapped, "\u{461}"),
    (0x0461, Valid, ""),
    (0x0462, Mapped, "\u{463}"),
    (0x0463, Valid, ""),
    (0x0464, Mapped, "\u{465}"),
    (0x0465, Valid, ""),
    (0x0466, Mapped, "\u{467}"),
    (0x0467, Valid, ""),
    (0x0468, Mapped, "\u{469}"),
    (0x0469, Valid, ""),
    (0x046A, Mapped, "\u{46b}"),
    (0x046B, Valid, ""),
    (0x046C, Mapped, "\u{46d}"),
    (0x046D, Valid, ""),
    (0x046E, Mapped, "\u{46f}"),
    (0x046F, Valid, ""),
    (0x0470, Mapped, "\u{471}"),
    (0x0471, Valid, ""),
    (0x0472, Mapped, "\u{473}"),
    (0x0473, Valid, ""),
    (0x0474, Mapped, "\u{475}"),
    (0x0475, Valid, ""),
    (0x0476, Mapped, "\u{477}"),
    (0x0477, Valid, ""),
    (0x0478, Mapped, "\u{479}"),
    (0x0479, Valid, ""),
    (0x047A, Mapped, "\u{47b}"),
    (0x047B, Valid, ""),
    (0x047C, Mapped, "\u{47d}"),
    (0x047D, Valid, ""),
    (0x047E, Mapped, "\u{47f}"),
    (0x047F, Valid, ""),
    (0x0480, Mapped, "\u{481}"),
    (0x0481, Valid, ""),
    (0x048A, Mapped, "\u{48b}"),
    (0x048B, Valid, ""),
    (0x048C, Mapped, "\u{48d}"),
    (0x048D, Valid, ""),
    (0x048E, Mapped, "\u{48f}"),
    (0x048F, Valid, ""),
    (0x0490, Mapped, "\u{491}"),
    (0x0491, Valid, ""),
    (0x0492, Mapped, "\u{493}"),
    (0x0493, Valid, ""),
    (0x0494, Mapped, "\u{495}"),
    (0x0495, Valid, ""),
    (0x0496, Mapped, "\u{497}"),
    (0x0497, Valid, ""),
    (0x0498, Mapped, "\u{499}"),
    (0x0499, Valid, ""),
    (0x049A, Mapped, "\u{49b}"),
    (0x049B, Valid, ""),
    (0x049C, Mapped, "\u{49d}"),
    (0x049D, Valid, ""),
    (0x049E, Mapped, "\u{49f}"),
    (0x049F, Valid, ""),
    (0x04A0, Mapped, "\u{4a1}"),
    (0x04A1, Valid, ""),
    (0x04A2, Mapped, "\u{4a3}"),
    (0x04A3, Valid, ""),
    (0x04A4, Mapped, "\u{4a5}"),
    (0x04A5, Valid, ""),
    (0x04A6, Mapped, "\u{4a7}"),
    (0x04A7, Valid, ""),
    (0x04A8, Mapped, "\u{4a9}"),
    (0x04A9, Valid, ""),
    (0x04AA, Mapped, "\u{4ab}"),
    (0x04AB, Valid, ""),
    (0x04AC, Mapped, "\u{4ad}"),
    (0x04AD, Valid, ""),
    (0x04AE, Mapped, "\u{4af}"),
    (0x04AF, Valid, ""),
    (0x04B0, Mapped, "\u{4b1}"),
    (0x04B1, Valid, ""),
    (0x04B2, Mapped, "\u{4b3}"),
    (0x04B3, Valid, ""),
    (0x04B4, Mapped, "\u{4b5}"),
    (0x04B5, Valid, ""),
    (0x04B6, Mapped, "\u{4b7}"),
    (0x04B7, Valid, ""),
    (0x04B8, Mapped, "\u{4b9}"),
    (0x04B9, Valid, ""),
    (0x04BA, Mapped, "\u{4bb}"),
    (0x04BB, Valid, ""),
    (0x04BC, Mapped, "\u{4bd}"),
    (0x04BD, Valid, ""),
    (0x04BE, Mapped, "\u{4bf}"),
    (0x04BF, Valid, ""),
    (0x04C0, Mapped, "\u{4cf}"),
    (0x04C1, Mapped, "\u{4c2}"),
    (0x04C2, Valid, ""),
    (0x04C3, Mapped, "\u{4c4}"),
    (0x04C4, Valid, ""),
    (0x04C5, Mapped, "\u{4c6}"),
    (0x04C6, Valid, ""),
    (0x04C7, Mapped, "\u{4c8}"),
    (0x04C8, Valid, ""),
    (0x04C9, Mapped, "\u{4ca}"),
    (0x04CA, Valid, ""),
    (0x04CB, Mapped, "\u{4cc}"),
    (0x04CC, Valid, ""),
    (0x04CD, Mapped, "\u{4ce}"),
    (0x04CE, Valid, ""),
    (0x04D0, Mapped, "\u{4d1}"),
    (0x04D1, Valid, ""),
    (0x04D2, Mapped, "\u{4d3}"),
    (0x04D3, Valid, ""),
    (0x04D4, Mapped, "\u{4d5}"),
    (0x04D5, Valid, ""),
    (0x04D6, Mapped, "\u{4d7}"),
    (0x04D7, Valid, ""),
    (0x04D8, Mapped, "\u{4d9}"),
    (0x04D9, Valid, ""),
    (0x04DA, Mapped, "\u{4db}"),
    (0x04DB, Valid, ""),
    (0x04DC, Mapped, "\u{4dd}"),
    (0x04DD, Valid, ""),
    (0x04DE, Mapped, "\u{4df}"),
    (0x04DF, Valid, ""),
    (0x04E0, Mapped, "\u{4e1}"),
    (0x04E1, Valid, ""),
    (0x04E2, Mapped, "\u{4e3}"),
    (0x04E3, Valid, ""),
    (0x04E4, Mapped, "\u{4e5}"),
    (0x04E5, Valid, ""),
    (0x04E6, Mapped, "\u{4e7}"),
    (0x04E7, Valid, ""),
    (0x04E8, Mapped, "\u{4e9}"),
    (0x04E9, Valid, ""),
    (0x04EA, Mapped, "\u{4eb}"),
    (0x04EB, Valid, ""),
    (0x04EC, Mapped, "\u{4ed}"),
    (0x04ED, Valid, ""),
    (0x04EE, Mapped, "\u{4ef}"),
    (0x04EF, Valid, ""),
    (0x04F0, Mapped, "\u{4f1}"),
    (0x04F1, Valid, ""),
    (0x04F2, Mapped, "\u{4f3}"),
    (0x04F3, Valid, ""),
    (0x04F4, Mapped, "\u{4f5}"),
    (0x04F5, Valid, ""),
    (0x04F6, Mapped, "\u{4f7}"),
    (0x04F7, Valid, ""),
    (0x04F8, Mapped, "\u{4f9}"),
    (0x04F9, Valid, ""),
    (0x04FA, Mapped, "\u{4fb}"),
    (0x04FB, Valid, ""),
    (0x04FC, Mapped, "\u{4fd}"),
    (0x04FD, Valid, ""),
    (0x04FE, Mapped, "\u{4ff}"),
    (0x04FF, Valid, ""),
    (0x0500, Mapped, "\u{501}"),
    (0x0501, Valid, ""),
    (0x0502, Mapped, "\u{503}"),
    (0x0503, Valid, ""),
    (0x0504, Mapped, "\u{505}"),
    (0x0505, Valid, ""),
    (0x0506, Mapped, "\u{507}"),
    (0x0507, Valid, ""),
    (0x0508, Mapped, "\u{509}"),
    (0x0509, Valid, ""),
    (0x050A, Mapped, "\u{50b}"),
    (0x050B, Valid, ""),
    (0x050C, Mapped, "\u{50d}"),
    (0x050D, Valid, ""),
    (0x050E, Mapped, "\u{50f}"),
    (0x050F, Valid, ""),
    (0x0510, Mapped, "\u{511}"),
    (0x0511, Valid, ""),
    (0x0512, Mapped, "\u{513}"),
    (0x0513, Valid, ""),
    (0x0514, Mapped, "\u{515}"),
    (0x0515, Valid, ""),
    (0x0516, Mapped, "\u{517}"),
    (0x0517, Valid, ""),
    (0x0518, Mapped, "\u{519}"),
    (0x0519, Valid, ""),
    (0x051A, Mapped, "\u{51b}"),
    (0x051B, Valid, ""),
    (0x051C, Mapped, "\u{51d}"),
    (0x051D, Valid, ""),
    (0x051E, Mapped, "\u{51f}"),
    (0x051F, Valid, ""),
    (0x0520, Mapped, "\u{521}"),
    (0x0521, Valid, ""),
    (0x0522, Mapped, "\u{523}"),
    (0x0523, Valid, ""),
    (0x0524, Mapped, "\u{525}"),
    (0x0525, Valid, ""),
    (0x0526, Mapped, "\u{527}"),
    (0x0527, Valid, ""),
    (0x0528, Mapped, "\u{529}"),
    (0x0529, Valid, ""),
    (0x052A, Mapped, "\u{52b}"),
    (0x052B, Valid, ""),
    (0x052C, Mapped, "\u{52d}"),
    (0x052D, Valid, ""),
    (0x052E, Mapped, "\u{52f}"),
    (0x052F, Valid, ""),
    (0x0530, Disallowed, ""),
    (0x0531, Mapped, "\u{561}"),
    (0x0532, Mapped, "\u{562}"),
    (0x0533, Mapped, "\u{563}"),
    (0x0534, Mapped, "\u{564}"),
    (0x0535, Mapped, "\u{565}"),
    (0x0536, Mapped, "\u{566}"),
    (0x0537, Mapped, "\u{567}"),
    (0x0538, Mapped, "\u{568}"),
    (0x0539, Mapped, "\u{569}"),
    (0x053A, Mapped, "\u{56a}"),
    (0x053B, Mapped, "\u{56b}"),
    (0x053C, Mapped, "\u{56c}"),
    (0x053D, Mapped, "\u{56d}"),
    (0x053E, Mapped, "\u{56e}"),
    (0x053F, Mapped, "\u{56f}"),
    (0x0540, Mapped, "\u{570}"),
    (0x0541, Mapped, "\u{571}"),
    (0x0542, Mapped, "\u{572}"),
    (0x0543, Mapped, "\u{573}"),
    (0x0544, Mapped, "\u{574}"),
    (0x0545, Mapped, "\u{575}"),
    (0x0546, Mapped, "\u{576}"),
    (0x0547, Mapped, "\u{577}"),
    (0x0548, Mapped, "\u{578}"),
    (0x0549, Mapped, "\u{579}"),
    (0x054A, Mapped, "\u{57a}"),
    (0x054B, Mapped, "\u{57b}"),
    (0x054C, Mapped, "\u{57c}"),
    (0x054D, Mapped, "\u{57d}"),
    (0x054E, Mapped, "\u{57e}"),
    (0x054F, Mapped, "\u{57f}"),
    (0x0550, Mapped, "\u{580}"),
    (0x0551, Mapped, "\u{581}"),
    (0x0552, Mapped, "\u{582}"),
    (0x0553, Mapped, "\u{583}"),
    (0x0554, Mapped, "\u{584}"),
    (0x0555, Mapped, "\u{585}"),
    (0x0556, Mapped, "\u{586}"),
    (0x0557, Disallowed, ""),
    (0x0559, Valid, ""),
    (0x0587, Mapped, "\u{565}\u{582}"),
    (0x0588, Valid, ""),
    (0x058B, Disallowed, ""),
    (0x058D, Valid, ""),
    (0x0590, Disallowed, ""),
    (0x0591, Valid, ""),
    (0x05C8, Disallowed, ""),
    (0x05D0, Valid, ""),
    (0x05EB, Disallowed, ""),
    (0x05EF, Valid, ""),
    (0x05F5, Disallowed, ""),
    (0x0606, Valid, ""),
    (0x061C, Disallowed, ""),
    (0x061D, Valid, ""),
    (0x0675, Mapped, "\u{627}\u{674}"),
    (0x0676, Mapped, "\u{648}\u{674}"),
    (0x0677, Mapped, "\u{6c7}\u{674}"),
    (0x0678, Mapped, "\u{64a}\u{674}"),
    (0x0679, Valid, ""),
    (0x06DD, Disallowed, ""),
    (0x06DE, Valid, ""),
    (0x070E, Disallowed, ""),
    (0x0710, Valid, ""),
    (0x074B, Disallowed, ""),
    (0x074D, Valid, ""),
    (0x07B2, Disallowed, ""),
    (0x07C0, Valid, ""),
    (0x07FB, Disallowed, ""),
    (0x07FD, Valid, ""),
    (0x082E, Disallowed, ""),
    (0x0830, Valid, ""),
    (0x083F, Disallowed, ""),
    (0x0840, Valid, ""),
    (0x085C, Disallowed, ""),
    (0x085E, Valid, ""),
    (0x085F, Disallowed, ""),
    (0x0860, Valid, ""),
    (0x086B, Disallowed, ""),
    (0x0870, Valid, ""),
    (0x0890, Disallowed, ""),
    (0x0897, Valid, ""),
    (0x08E2, Disallowed, ""),
    (0x08E3, Valid, ""),
    (0x0958, Mapped, "\u{915}\u{93c}"),
    (0x0959, Mapped, "\u{916}\u{93c}"),
    (0x095A, Mapped, "\u{917}\u{93c}"),
    (0x095B, Mapped, "\u{91c}\u{93c}"),
    (0x095C, Mapped, "\u{921}\u{93c}"),
    (0x095D, Mapped, "\u{922}\u{93c}"),
    (0x095E, Mapped, "\u{92b}\u{93c}"),
    (0x095F, Mapped, "\u{92f}\u{93c}"),
    (0x0960, Valid, ""),
    (0x0984, Disallowed, ""),
    (0x0985, Valid, ""),
    (0x098D, Disallowed, ""),
    (0x098F, Valid, ""),
    (0x0991, Disallowed, ""),
    (0x0993, Valid, ""),
    (0x09A9, Disallowed, ""),
    (0x09AA, Valid, ""),
    (0x09B1, Disallowed, ""),
    (0x09B2, Valid, ""),
    (0x09B3, Disallowed, ""),
    (0x09B6, Valid, ""),
    (0x09BA, Disallowed, ""),
    (0x09BC, Valid, ""),
    (0x09C5, Disallowed, ""),
    (0x09C7, Valid, ""),
    (0x09C9, Disallowed, ""),
    (0x09CB, Valid, ""),
    (0x09CF, Disallowed, ""),
    (0x09D7, Valid, ""),
    (0x09D8, Disallowed, ""),
    (0x09DC, Mapped, "\u{9a1}\u{9bc}"),
    (0x09DD, Mapped, "\u{9a2}\u{9bc}"),
    (0x09DE, Disallowed, ""),
    (0x09DF, Mapped, "\u{9af}\u{9bc}"),
    (0x09E0, Valid, ""),
    (0x09E4, Disallowed, ""),
    (0x09E6, Valid, ""),
    (0x09FF, Disallowed, ""),
    (0x0A01, Valid, ""),
    (0x0A04, Disallowed, ""),
    (0x0A05, Valid, ""),
    (0x0A0B, Disallowed, ""),
    (0x0A0F, Valid, ""),
    (0x0A11, Disallowed, ""),
    (0x0A13, Valid, ""),
    (0x0A29, Disallowed, ""),
    (0x0A2A, Valid, ""),
    (0x0A31, Disallowed, ""),
    (0x0A32, Valid, ""),
    (0x0A33, Mapped, "\u{a32}\u{a3c}"),
    (0x0A34, Disallowed, ""),
    (0x0A35, Valid, ""),
    (0x0A36, Mapped, "\u{a38}\u{a3c}"),
    (0x0A37, Disallowed, ""),
    (0x0A38, Valid, ""),
    (0x0A3A, Disallowed, ""),
    (0x0A3C, Valid, ""),
    (0x0A3D, Disallowed, ""),
    (0x0A3E, Valid, ""),
    (0x0A43, Disallowed, ""),
    (0x0A47, Valid, ""),
    (0x0A49, Disallowed, ""),
    (0x0A4B, Valid, ""),
    (0x0A4E, Disallowed, ""),
    (0x0A51, Valid, ""),
    (0x0A52, Disallowed, ""),
    (0x0A59, Mapped, "\u{a16}\u{a3c}"),
    (0x0A5A, Mapped, "\u{a17}\u{a3c}"),
    (0x0A5B, Mapped, "\u{a1c}\u{a3c}"),
    (0x0A5C, Valid, ""),
    (0x0A5D, Disallowed, ""),
    (0x0A5E, Mapped, "\u{a2b}\u{a3c}"),
    (0x0A5F, Disallowed, ""),
    (0x0A66, Valid, ""),
    (0x0A77, Disallowed, ""),
    (0x0A81, Valid, ""),
    (0x0A84, Disallowed, ""),
    (0x0A85, Valid, ""),
    (0x0A8E, Disallowed, ""),
    (0x0A8F, Valid, ""),
    (0x0A92, Disallowed, ""),
    (0x0A93, Valid, ""),
    (0x0AA9, Disallowed, ""),
    (0x0AAA, Valid, ""),
    (0x0AB1, Disallowed, ""),
    (0x0AB2, Valid, ""),
    (0x0AB4, Disallowed, ""),
    (0x0AB5, Valid, ""),
    (0x0ABA, Disallowed, ""),
    (0x0ABC, Valid, ""),
    (0x0AC6, Disallowed, ""),
    (0x0AC7, Valid, ""),
    (0x0ACA, Disallowed, ""),
    (0x0ACB, Valid, ""),
    (0x0ACE, Disallowed, ""),
    (0x0AD0, Valid, ""),
    (0x0AD1, Disallowed, ""),
    (0x0AE0, Valid, ""),
    (0x0AE4, Disallowed, ""),
    (0x0AE6, Valid, ""),
    (0x0AF2, Disallowed, ""),
    (0x0AF9, Valid, ""),
    (0x0B00, Disallowed, ""),
    (0x0B01, Valid, ""),
    (0x0B04, Disallowed, ""),
    (0x0B05, Valid, ""),
    (0x0B0D, Disallowed, ""),
    (0x0B0F, Valid, ""),
    (0x0B11, Disallowed, ""),
    (0x0B13, Valid, ""),
    (0x0B29, Disallowed, ""),
    (0x0B2A, Valid, ""),
    (0x0B31, Disallowed, ""),
    (0x0B32, Valid, ""),
    (0x0B34, Disallowed, ""),
    (0x0B35, Valid, ""),
    (0x0B3A, Disallowed, ""),
    (0x0B3C, Valid, ""),
    (0x0B45, Disallowed, ""),
    (0x0B47, Valid, ""),
    (0x0B49, Disallowed, ""),
    (0x0B4B, Valid, ""),
    (0x0B4E, Disallowed, ""),
    (0x0B55, Valid, ""),
    (0x0B58, Disallowed, ""),
    (0x0B5C, Mapped, "\u{b21}\u{b3c}"),
    (0x0B5D, Mapped, "\u{b22}\u{b3c}"),
    (0x0B5E, Disallowed, ""),
    (0x0B5F, Valid, ""),
    (0x0B64, Disallowed, ""),
    (0x0B66, Valid, ""),
    (0x0B78, Disallowed, ""),
    (0x0B82, Valid, ""),
    (0x0B84, Disallowed, ""),
    (0x0B85, Valid, ""),
    (0x0B8B, Disallowed, ""),
    (0x0B8E, Valid, ""),
    (0x0B91, Disallowed, ""),
    (0x0B92, Valid, ""),
    (0x0B96, Disallowed, ""),
    (0x0B99, Valid, ""),
    (0x0B9B, Disallowed, ""),
    (0x0B9C, Valid, ""),
    (0x0B9D, Disallowed, ""),
    (0x0B9E, Valid, ""),
    (0x0BA0, Disallowed, ""),
    (0x0BA3, Valid, ""),
    (0x0BA5, Disallowed, ""),
    (0x0BA8, Valid, ""),
    (0x0BAB, Disallowed, ""),
    (0x0BAE, Valid, ""),
    (0x0BBA, Disallowed, ""),
    (0x0BBE, Valid, ""),
    (0x0BC3, Disallowed, ""),
    (0x0BC6, Valid, ""),
    (0x0BC9, Disallowed, ""),
    (0x0BCA, Valid, ""),
    (0x0BCE, Disallowed, ""),
    (0x0BD0, Valid, ""),
    (0x0BD1, Disallowed, ""),
    (0x0BD7, Valid, ""),
    (0x0BD8, Disallowed, ""),
    (0x0BE6, Valid, ""),
    (0x0BFB, Disallowed, ""),
    (0x0C00, Valid, ""),
    (0x0C0D, Disallowed, ""),
    (0x0C0E, Valid, ""),
    (0x0C11, Disallowed, ""),
    (0x0C12, Valid, ""),
    (0x0C29, Disallowed, ""),
    (0x0C2A, Valid, ""),
    (0x0C3A, Disallowed, ""),
    (0x0C3C, Valid, ""),
    (0x0C45, Disallowed, ""),
    (0x0C46, Valid, ""),
    (0x0C49, Disallowed, ""),
    (0x0C4A, Valid, ""),
    (0x0C4E, Disallowed, ""),
    (0x0C55, Valid, ""),
    (0x0C57, Disallowed, ""),
    (0x0C58, Valid, ""),
    (0x0C5B, Disallowed, ""),
    (0x0C5C, Valid, ""),
    (0x0C5E, Disallowed, ""),
    (0x0C60, Valid, ""),
    (0x0C64, Disallowed, ""),
    (0x0C66, Valid, ""),
    (0x0C70, Disallowed, ""),
    (0x0C77, Valid, ""),
    (0x0C8D, Disallowed, ""),
    (0x0C8E, Valid, ""),
    (0x0C91, Disallowed, ""),
    (0x0C92, Valid, ""),
    (0x0CA9, Disallowed, ""),
    (0x0CAA, Valid, ""),
    (0x0CB4, Disallowed, ""),
    (0x0CB5, Valid, ""),
    (0x0CBA, Disallowed, ""),
    (0x0CBC, Valid, ""),
    (0x0CC5, Disallowed, ""),
    (0x0CC6, Valid, ""),
    (0x0CC9, Disallowed, ""),
    (0x0CCA, Valid, ""),
    (0x0CCE, Disallowed, ""),
    (0x0CD5, Valid, ""),
    (0x0CD7, Disallowed, ""),
    (0x0CDC, Valid, ""),
    (0x0CDF, Disallowed, ""),
    (0x0CE0, Valid, ""),
    (0x0CE4, Disallowed, ""),
    (0x0CE6, Valid, ""),
    (0x0CF0, Disallowed, ""),
    (0x0CF1, Valid, ""),
    (0x0CF4, Disallowed, ""),
    (0x0D00, Valid, ""),
    (0x0D0D, Disallowed, ""),
    (0x0D0E, Valid, ""),
    (0x0D11, Disallowed, ""),
    (0x0D12, Valid, ""),
    (0x0D45, Disallowed, ""),
    (0x0D46, Valid, ""),
    (0x0D49, Disallowed, ""),
    (0x0D4A, Valid, ""),
    (0x0D50, Disallowed, ""),
    (0x0D54, Valid, ""),
    (0x0D64, Disallowed, ""),
    (0x0D66, Valid, ""),
    (0x0D80, Disallowed, ""),
    (0x0D81, Valid, ""),
    (0x0D84, Disallowed, ""),
    (0x0D85, Valid, ""),
    (0x0D97, Disallowed, ""),
    (0x0D9A, Valid, ""),
    (0x0DB2, Disallowed, ""),
    (0x0DB3, Valid, ""),
    (0x0DBC, Disallowed, ""),
    (0x0DBD, Valid, ""),
    (0x0DBE, Disallowed, ""),
    (0x0DC0, Valid, ""),
    (0x0DC7, Disallowed, ""),
    (0x0DCA, Valid, ""),
    (0x0DCB, Disallowed, ""),
    (0x0DCF, Valid, ""),
    (0x0DD5, Disallowed, ""),
    (0x0DD6, Valid, ""),
    (0x0DD7, Disallowed, ""),
    (0x0DD8, Valid, ""),
    (0x0DE0, Disallowed, ""),
    (0x0DE6, Valid, ""),
    (0x0DF0, Disallowed, ""),
    (0x0DF2, Valid, ""),
    (0x0DF5, Disallowed, ""),
    (0x0E01, Valid, ""),
    (0x0E33, Mapped, "\u{e4d}\u{e32}"),
    (0x0E34, Valid, ""),
    (0x0E3B, Disallowed, ""),
    (0x0E3F, Valid, ""),
    (0x0E5C, Disallowed, ""),
    (0x0E81, Valid, ""),
    (0x0E83, Disallowed, ""),
    (0x0E84, Valid, ""),
    (0x0E85, Disallowed, ""),
    (0x0E86, Valid, ""),
    (0x0E8B, Disallowed, ""),
    (0x0E8C, Valid, ""),
    (0x0EA4, Disallowed, ""),
    (0x0EA5, Valid, ""),
    (0x0EA6, Disallowed, ""),
    (0x0EA7, Valid, ""),
    (0x0EB3, Mapped, "\u{ecd}\u{eb2}"),
    (0x0EB4, Valid, ""),
    (0x0EBE, Disallowed, ""),
    (0x0EC0, Valid, ""),
    (0x0EC5, Disallowed, ""),
    (0x0EC6, Valid, ""),
    (0x0EC7, Disallowed, ""),
    (0x0EC8, Valid, ""),
    (0x0ECF, Disallowed, ""),
    (0x0ED0, Valid, ""),
    (0x0EDA, Disallowed, ""),
    (0x0EDC, Mapped, "\u{eab}\u{e99}"),
    (0x0EDD, Mapped, "\u{eab}\u{ea1}"),
    (0x0EDE, Valid, ""),
    (0x0EE0, Disallowed, ""),
    (0x0F00, Valid, ""),
    (0x0F0C, Mapped, "\u{f0b}"),
    (0x0F0D, Valid, ""),
    (0x0F43, Mapped, "\u{f42}\u{fb7}"),
    (0x0F44, Valid, ""),
    (0x0F48, Disallowed, ""),
    (0x0F49, Valid, ""),
    (0x0F4D, Mapped, "\u{f4c}\u{fb7}"),
    (0x0F4E, Valid, ""),
    (0x0F52, Mapped, "\u{f51}\u{fb7}"),
    (0x0F53, Valid, ""),
    (0x0F57, Mapped, "\u{f56}\u{fb7}"),
    (0x0F58, Valid, ""),
    (0x0F5C, Mapped, "\u{f5b}\u{fb7}"),
    (0x0F5D, Valid, ""),
    (0x0F69, Mapped, "\u{f40}\u{fb5}"),
    (0x0F6A, Valid, ""),
    (0x0F6D, Disallowed, ""),
    (0x0F71, Valid, ""),
    (0x0F73, Mapped, "\u{f71}\u{f72}"),
    (0x0F74, Valid, ""),
    (0x0F75, Mapped, "\u{f71}\u{f74}"),
    (0x0F76, Mapped, "\u{fb2}\u{f80}"),
    (0x0F77, Mapped, "\u{fb2}\u{f71}\u{f80}"),
    (0x0F78, Mapped, "\u{fb3}\u{f80}"),
    (0x0F79, Mapped, "\u{fb3}\u{f71}\u{f80}"),
    (0x0F7A, Valid, ""),
    (0x0F81, Mapped, "\u{f71}\u{f80}"),
    (0x0F82, Valid, ""),
    (0x0F93, Mapped, "\u{f92}\u{fb7}"),
    (0x0F94, Valid, ""),
    (0x0F98, Disallowed, ""),
    (0x0F99, Valid, ""),
    (0x0F9D, Mapped, "\u{f9c}\u{fb7}"),
    (0x0F9E, Valid, ""),
    (0x0FA2, Mapped, "\u{fa1}\u{fb7}"),
    (0x0FA3, Valid, ""),
    (0x0FA7, Mapped, "\u{fa6}\u{fb7}"),
    (0x0FA8, Valid, ""),
    (0x0FAC, Mapped, "\u{fab}\u{fb7}"),
    (0x0FAD, Valid, ""),
    (0x0FB9, Mapped, "\u{f90}\u{fb5}"),
    (0x0FBA, Valid, ""),
    (0x0FBD, Disallowed, ""),
    (0x0FBE, Valid, ""),
    (0x0FCD, Disallowed, ""),
    (0x0FCE, Valid, ""),
    (0x0FDB, Disallowed, ""),
    (0x1000, Valid, ""),
    (0x10A0, Mapped, "\u{2d00}"),
    (0x10A1, Mapped, "\u{2d01}"),
    (0x10A2, Mapped, "\u{2d02}"),
    (0x10A3, Mapped, "\u{2d03}"),
    (0x10A4, Mapped, "\u{2d04}"),
    (0x10A5, Mapped, "\u{2d05}"),
    (0x10A6, Mapped, "\u{2d06}"),
    (0x10A7, Mapped, "\u{2d07}"),
    (0x10A8, Mapped, "\u{2d08}"),
    (0x10A9, Mapped, "\u{2d09}"),
    (0x10AA, Mapped, "\u{2d0a}"),
    (0x10AB, Mapped, "\u{2d0b}"),
    (0x10AC, Mapped, "\u{2d0c}"),
    (0x10AD, Mapped, "\u{2d0d}"),
    (0x10AE, Mapped, "\u{2d0e}"),
    (0x10AF, Mapped, "\u{2d0f}"),
    (0x10B0, Mapped, "\u{2d10}"),
    (0x10B1, Mapped, "\u{2d11}"),
    (0x10B2, Mapped, "\u{2d12}"),
    (0x10B3, Mapped, "\u{2d13}"),
    (0x10B4, Mapped, "\u{2d14}"),
    (0x10B5, Mapped, "\u{2d15}"),
    (0x10B6, Mapped, "\u{2d16}"),
    (0x10B7, Mapped, "\u{2d17}"),
    (0x10B8, Mapped, "\u{2d18}"),
    (0x10B9, Mapped, "\u{2d19}"),
    (0x10BA, Mapped, "\u{2d1a}"),
    (0x10BB, Mapped, "\u{2d1b}"),
    (0x10BC, Mapped, "\u{2d1c}"),
    (0x10BD, Mapped, "\u{2d1d}"),
    (0x10BE, Mapped, "\u{2d1e}"),
    (0x10BF, Mapped, "\u{2d1f}"),
    (0x10C0, Mapped, "\u{2d20}"),
    (0x10C1, Mapped, "\u{2d21}"),
    (0x10C2, Mapped, "\u{2d22}"),
    (0x10C3, Mapped, "\u{2d23}"),
    (0x10C4, Mapped, "\u{2d24}"),
    (0x10C5, Mapped, "\u{2d25}"),
    (0x10C6, Disallowed, ""),
    (0x10C7, Mapped, "\u{2d27}"),
    (0x10C8, Disallowed, ""),
    (0x10CD, Mapped, "\u{2d2d}"),
    (0x10CE, Disallowed, ""),
    (0x10D0, Valid, ""),
    (0x10FC, Mapped, "\u{10dc}"),
    (0x10FD, Valid, ""),
    (0x115F, Ignored, ""),
    (0x1161, Valid, ""),
    (0x1249, Disallowed, ""),
    (0x124A, Valid, ""),
    (0x124E, Disallowed, ""),
    (0x1250, Valid, ""),
    (0x1257, Disallowed, ""),
    (0x1258, Valid, ""),
    (0x1259, Disallowed, ""),
    (0x125A, Valid, ""),
    (0x125E, Disallowed, ""),
    (0x1260, Valid, ""),
    (0x1289, Disallowed, ""),
    (0x128A, Valid, ""),
    (0x128E, Disallowed, ""),
    (0x1290, Valid, ""),
    (0x12B1, Disallowed, ""),
    (0x12B2, Valid, ""),
    (0x12B6, Disallowed, ""),
    (0x12B8, Valid, ""),
    (0x12BF, Disallowed, ""),
    (0x12C0, Valid, ""),
    (0x12C1, Disallowed, ""),
    (0x12C2, Valid, ""),
    (0x12C6, Disallowed, ""),
    (0x12C8, Valid, ""),
    (0x12D7, Disallowed, ""),
    (0x12D8, Valid, ""),
    (0x1311, Disallowed, ""),
    (0x1312, Valid, ""),
    (0x1316, Disallowed, ""),
    (0x1318, Valid, ""),
    (0x135B, Disallowed, ""),
    (0x135D, Valid, ""),
    (0x137D, Disallowed, ""),
    (0x1380, Valid, ""),
    (0x139A, Disallowed, ""),
    (0x13A0, Valid, ""),
    (0x13F6, Disallowed, ""),
    (0x13F8, Mapped, "\u{13f0}"),
    (0x13F9, Mapped, "\u{13f1}"),
    (0x13FA, Mapped, "\u{13f2}"),
    (0x13FB, Mapped, "\u{13f3}"),
    (0x13FC, Mapped, "\u{13f4}"),
    (0x13FD, Mapped, "\u{13f5}"),
    (0x13FE, Disallowed, ""),
    (0x1400, Valid, ""),
    (0x1680, Disallowed, ""),
    (0x1681, Valid, ""),
    (0x169D, Disallowed, ""),
    (0x16A0, Valid, ""),
    (0x16F9, Disallowed, ""),
    (0x1700, Valid, ""),
    (0x1716, Disallowed, ""),
    (0x171F, Valid, ""),
    (0x1737, Disallowed, ""),
    (0x1740, Valid, ""),
    (0x1754, Disallowed, ""),
    (0x1760, Valid, ""),
    (0x176D, Disallowed, ""),
    (0x176E, Valid, ""),
    (0x1771, Disallowed, ""),
    (0x1772, Valid, ""),
    (0x1774, Disallowed, ""),
    (0x1780, Valid, ""),
    (0x17B4, Ignored, ""),
    (0x17B6, Valid, ""),
    (0x17DE, Disallowed, ""),
    (0x17E0, Valid, ""),
    (0x17EA, Disallowed, ""),
    (0x17F0, Valid, ""),
    (0x17FA, Disallowed, ""),
    (0x1800, Valid, ""),
    (0x180B, Ignored, ""),
    (0x1810, Valid, ""),
    (0x181A, Disallowed, ""),
    (0x1820, Valid, ""),
    (0x1879, Disallowed, ""),
    (0x1880, Valid, ""),
    (0x18AB, Disallowed, ""),
    (0x18B0, Valid, ""),
    (0x18F6, Disallowed, ""),
    (0x1900, Valid, ""),
    (0x191F, Disallowed, ""),
    (0x1920, Valid, ""),
    (0x192C, Disallowed, ""),
    (0x1930, Valid, ""),
    (0x193C, Disallowed, ""),
    (0x1940, Valid, ""),
    (0x1941, Disallowed, ""),
    (0x1944, Valid, ""),
    (0x196E, Disallowed, ""),
    (0x1970, Valid, ""),
    (0x1975, Disallowed, ""),
    (0x1980, Valid, ""),
    (0x19AC, Disallowed, ""),
    (0x19B0, Valid, ""),
    (0x19CA, Disallowed, ""),
    (0x19D0, Valid, ""),
    (0x19DB, Disallowed, ""),
    (0x19DE, Valid, ""),
    (0x1A1C, Disallowed, ""),
    (0x1A1E, Valid, ""),
    (0x1A5F, Disallowed, ""),
    (0x1A60, Valid, ""),
    (0x1A7D, Disallowed, ""),
    (0x1A7F, Valid, ""),
    (0x1A8A, Disallowed, ""),
    (0x1A90, Valid, ""),
    (0x1A9A, Disallowed, ""),
    (0x1AA0, Valid, ""),
    (0x1AAE, Disallowed, ""),
    (0x1AB0, Valid, ""),
    (0x1ADE, Disallowed, ""),
    (0x1AE0, Valid, ""),
    (0x1AEC, Disallowed, ""),
    (0x1B00, Valid, ""),
    (0x1B4D, Disallowed, ""),
    (0x1B4E, Valid, ""),
    (0x1BF4, Disallowed, ""),
    (0x1BFC, Valid, ""),
    (0x1C38, Disallowed, ""),
    (0x1C3B, Valid, ""),
    (0x1C4A, Disallowed, ""),
    (0x1C4D, Valid, ""),
    (0x1C80, Mapped, "\u{432}"),
    (0x1C81, Mapped, "\u{434}"),
    (0x1C82, Mapped, "\u{43e}"),
    (0x1C83, Mapped, "\u{441}"),
    (0x1C84, Mapped, "\u{442}"),
    (0x1C86, Mapped, "\u{44a}"),
    (0x1C87, Mapped, "\u{463}"),
    (0x1C88, Mapped, "\u{a64b}"),
    (0x1C89, Mapped, "\u{1c8a}"),
    (0x1C8A, Valid, ""),
    (0x1C8B, Disallowed, ""),
    (0x1C90, Mapped, "\u{10d0}"),
    (0x1C91, Mapped, "\u{10d1}"),
    (0x1C92, Mapped, "\u{10d2}"),
    (0x1C93, Mapped, "\u{10d3}"),
    (0x1C94, Mapped, "\u{10d4}"),
    (0x1C95, Mapped, "\u{10d5}"),
    (0x1C96, Mapped, "\u{10d6}"),
    (0x1C97, Mapped, "\u{10d7}"),
    (0x1C98, Mapped, "\u{10d8}"),
    (0x1C99, Mapped, "\u{10d9}"),
    (0x1C9A, Mapped, "\u{10da}"),
    (0x1C9B, Mapped, "\u{10db}"),
    (0x1C9C, Mapped, "\u{10dc}"),
    (0x1C9D, Mapped, "\u{10dd}"),
    (0x1C9E, Mapped, "\u{10de}"),
    (0x1C9F, Mapped, "\u{10df}"),
    (0x1CA0, Mapped, "\u{10e0}"),
    (0x1CA1, Mapped, "\u{10e1}"),
    (0x1CA2, Mapped, "\u{10e2}"),
    (0x1CA3, Mapped, "\u{10e3}"),
    (0x1CA4, Mapped, "\u{10e4}"),
    (0x1CA5, Mapped, "\u{10e5}"),
    (0x1CA6, Mapped, "\u{10e6}"),
    (0x1CA7, Mapped, "\u{10e7}"),
    (0x1CA8, Mapped, "\u{10e8}"),
    (0x1CA9, Mapped, "\u{10e9}"),
    (0x1CAA, Mapped, "\u{10ea}"),
    (0x1CAB, Mapped, "\u{10eb}"),
    (0x1CAC, Mapped, "\u{10ec}"),
    (0x1CAD, Mapped, "\u{10ed}"),
    (0x1CAE, Mapped, "\u{10ee}"),
    (0x1CAF, Mapped, "\u{10ef}"),
    (0x1CB0, Mapped, "\u{10f0}"),
    (0x1CB1, Mapped, "\u{10f1}"),
    (0x1CB2, Mapped, "\u{10f2}"),
    (0x1CB3, Mapped, "\u{10f3}"),
    (0x1CB4, Mapped, "\u{10f4}"),
    (0x1CB5, Mapped, "\u{10f5}"),
    (0x1CB6, Mapped, "\u{10f6}"),
    (0x1CB7, Mapped, "\u{10f7}"),
    (0x1CB8, Mapped, "\u{10f8}"),
    (0x1CB9, Mapped, "\u{10f9}"),
    (0x1CBA, Mapped, "\u{10fa}"),
    (0x1CBB, Disallowed, ""),
    (0x1CBD, Mapped, "\u{10fd}"),
    (0x1CBE, Mapped, "\u{10fe}"),
    (0x1CBF, Mapped, "\u{10ff}"),
    (0x1CC0, Valid, ""),
    (0x1CC8, Disallowed, ""),
    (0x1CD0, Valid, ""),
    (0x1CFB, Disallowed, ""),
    (0x1D00, Valid, ""),
    (0x1D2C, Mapped, "a"),
    (0x1D2D, Mapped, "\u{e6}"),
    (0x1D2E, Mapped, "b"),
    (0x1D2F, Valid, ""),
    (0x1D30, Mapped, "d"),
    (0x1D31, Mapped, "e"),
    (0x1D32, Mapped, "\u{1dd}"),
    (0x1D33, Mapped, "g"),
    (0x1D34, Mapped, "h"),
    (0x1D35, Mapped, "i"),
    (0x1D36, Mapped, "j"),
    (0x1D37, Mapped, "k"),
    (0x1D38, Mapped, "l"),
    (0x1D39, Mapped, "m"),
    (0x1D3A, Mapped, "n"),
    (0x1D3B, Valid, ""),
    (0x1D3C, Mapped, "o"),
    (0x1D3D, Mapped, "\u{223}"),
    (0x1D3E, Mapped, "p"),
    (0x1D3F, Mapped, "r"),
    (0x1D40, Mapped, "t"),
    (0x1D41, Mapped, "u"),
    (0x1D42, Mapped, "w"),
    (0x1D43, Mapped, "a"),
    (0x1D44, Mapped, "\u{250}"),
    (0x1D45, Mapped, "\u{251}"),
    (0x1D46, Mapped, "\u{1d02}"),
    (0x1D47, Mapped, "b"),
    (0x1D48, Mapped, "d"),
    (0x1D49, Mapped, "e"),
    (0x1D4A, Mapped, "\u{259}"),
    (0x1D4B, Mapped, "\u{25b}"),
    (0x1D4C, Mapped, "\u{25c}"),
    (0x1D4D, Mapped, "g"),
    (0x1D4E, Valid, ""),
    (0x1D4F, Mapped, "k"),
    (0x1D50, Mapped, "m"),
    (0x1D51, Mapped, "\u{14b}"),
    (0x1D52, Mapped, "o"),
    (0x1D53, Mapped, "\u{254}"),
    (0x1D54, Mapped, "\u{1d16}"),
    (0x1D55, Mapped, "\u{1d17}"),
    (0x1D56, Mapped, "p"),
    (0x1D57, Mapped, "t"),
    (0x1D58, Mapped, "u"),
    (0x1D59, Mapped, "\u{1d1d}"),
    (0x1D5A, Mapped, "\u{26f}"),
    (0x1D5B, Mapped, "v"),
    (0x1D5C, Mapped, "\u{1d25}"),
    (0x1D5D, Mapped, "\u{3b2}"),
    (0x1D5E, Mapped, "\u{3b3}"),
    (0x1D5F, Mapped, "\u{3b4}"),
    (0x1D60, Mapped, "\u{3c6}"),
    (0x1D61, Mapped, "\u{3c7}"),
    (0x1D62, Mapped, "i"),
    (0x1D63, Mapped, "r"),
    (0x1D64, Mapped, "u"),
    (0x1D65, Mapped, "v"),
    (0x1D66, Mapped, "\u{3b2}"),
    (0x1D67, Mapped, "\u{3b3}"),
    (0x1D68, Mapped, "\u{3c1}"),
    (0x1D69, Mapped, "\u{3c6}"),
    (0x1D6A, Mapped, "\u{3c7}"),
    (0x1D6B, Valid, ""),
    (0x1D78, Mapped, "\u{43d}"),
    (0x1D79, Valid, ""),
    (0x1D9B, Mapped, "\u{252}"),
    (0x1D9C, Mapped, "c"),
    (0x1D9D, Mapped, "\u{255}"),
    (0x1D9E, Mapped, "\u{f0}"),
    (0x1D9F, Mapped, "\u{25c}"),
    (0x1DA0, Mapped, "f"),
    (0x1DA1, Mapped, "\u{25f}"),
    (0x1DA2, Mapped, "\u{261}"),
    (0x1DA3, Mapped, "\u{265}"),
    (0x1DA4, Mapped, "\u{268}"),
    (0x1DA5, Mapped, "\u{269}"),
    (0x1DA6, Mapped, "\u{26a}"),
    (0x1DA7, Mapped, "\u{1d7b}"),
    (0x1DA8, Mapped, "\u{29d}"),
    (0x1DA9, Mapped, "\u{26d}"),
    (0x1DAA, Mapped, "\u{1d85}"),
    (0x1DAB, Mapped, "\u{29f}"),
    (0x1DAC, Mapped, "\u{271}"),
    (0x1DAD, Mapped, "\u{270}"),
    (0x1DAE, Mapped, "\u{272}"),
    (0x1DAF, Mapped, "\u{273}"),
    (0x1DB0, Mapped, "\u{274}"),
    (0x1DB1, Mapped, "\u{275}"),
    (0x1DB2, Mapped, "\u{278}"),
    (0x1DB3, Mapped, "\u{282}"),
    (0x1DB4, Mapped, "\u{283}"),
    (0x1DB5, Mapped, "\u{1ab}"),
    (0x1DB6, Mapped, "\u{289}"),
    (0x1DB7, Mapped, "\u{28a}"),
    (0x1DB8, Mapped, "\u{1d1c}"),
    (0x1DB9, Mapped, "\u{28b}"),
    (0x1DBA, Mapped, "\u{28c}"),
    (0x1DBB, Mapped, "z"),
    (0x1DBC, Mapped, "\u{290}"),
    (0x1DBD, Mapped, "\u{291}"),
    (0x1DBE, Mapped, "\u{292}"),
    (0x1DBF, Mapped, "\u{3b8}"),
    (0x1DC0, Valid, ""),
    (0x1E00, Mapped, "\u{1e01}"),
    (0x1E01, Valid, ""),
    (0x1E02, Mapped, "\u{1e03}"),
    (0x1E03, Valid, ""),
    (0x1E04, Mapped, "\u{1e05}"),
    (0x1E05, Valid, ""),
    (0x1E06, Mapped, "\u{1e07}"),
    (0x1E07, Valid, ""),
    (0x1E08, Mapped, "\u{1e09}"),
    (0x1E09, Valid, ""),
    (0x1E0A, Mapped, "\u{1e0b}"),
    (0x1E0B, Valid, ""),
    (0x1E0C, Mapped, "\u{1e0d}"),
    (0x1E0D, Valid, ""),
    (0x1E0E, Mapped, "\u{1e0f}"),
    (0x1E0F, Valid, ""),
    (0x1E10, Mapped, "\u{1e11}"),
    (0x1E11, Valid, ""),
    (0x1E12, Mapped, "\u{1e13}"),
    (0x1E13, Valid, ""),
    (0x1E14, Mapped, "\u{1e15}"),
    (0x1E15, Valid, ""),
    (0x1E16, Mapped, "\u{1e17}"),
    (0x1E17, Valid, ""),
    (0x1E18, Mapped, "\u{1e19}"),
    (0x1E19, Valid, ""),
    (0x1E1A, Mapped, "\u{1e1b}"),
    (0x1E1B, Valid, ""),
    (0x1E1C, Mapped, "\u{1e1d}"),
    (0x1E1D, Valid, ""),
    (0x1E1E, Mapped, "\u{1e1f}"),
    (0x1E1F, Valid, ""),
    (0x1E20, Mapped, "\u{1e21}"),
    (0x1E21, Valid, ""),
    (0x1E22, Mapped, "\u{1e23}"),
    (0x1E23, Valid, ""),
    (0x1E24, Mapped, "\u{1e25}"),
    (0x1E25, Valid, ""),
    (0x1E26, Mapped, "\u{1e27}"),
    (0x1E27, Valid, ""),
    (0x1E28, Mapped, "\u{1e29}"),
    (0x1E29, Valid, ""),
    (0x1E2A, Mapped, "\u{1e2b}"),
    (0x1E2B, Valid, ""),
    (0x1E2C, Mapped, "\u{1e2d}"),
    (0x1E2D, Valid, ""),
    (0x1E2E, Mapped, "\u{1e2f}"),
    (0x1E2F, Valid, ""),
    (0x1E30, Mapped, "\u{1e31}"),
    (0x1E31, Valid, ""),
    (0x1E32, Mapped, "\u{1e33}"),
    (0x1E33, Valid, ""),
    (0x1E34, Mapped, "\u{1e35}"),
    (0x1E35, Valid, ""),
    (0x1E36, Mapped, "\u{1e37}"),
    (0x1E37, Valid, ""),
    (0x1E38, Mapped, "\u{1e39}"),
    (0x1E39, Valid, ""),
    (0x1E3A, Mapped, "\u{1e3b}"),
    (0x1E3B, Valid, ""),
    (0x1E3C, Mapped, "\u{1e3d}"),
    (0x1E3D, Valid, ""),
    (0x1E3E, Mapped, "\u{1e3f}"),
    (0x1E3F, Valid, ""),
    (0x1E40, Mapped, "\u{1e41}"),
    (0x1E41, Valid, ""),
    (0x1E42, Mapped, "\u{1e43}"),
    (0x1E43, Valid, ""),
    (0x1E44, Mapped, "\u{1e45}"),
    (0x1E45, Valid, ""),
    (0x1E46, Mapped, "\u{1e47}"),
    (0x1E47, Valid, ""),
    (0x1E48, Mapped, "\u{1e49}"),
    (0x1E49, Valid, ""),
    (0x1E4A, Mapped, "\u{1e4b}"),
    (0x1E4B, Valid, ""),
    (0x1E4C, Mapped, "\u{1e4d}"),
    (0x1E4D, Valid, ""),
    (0x1E4E, Mapped, "\u{1e4f}"),
    (0x1E4F, Valid, ""),
    (0x1E50, Mapped, "\u{1e51}"),
    (0x1E51, Valid, ""),
    (0x1E52, Mapped, "\u{1e53}"),
    (0x1E53, Valid, ""),
    (0x1E54, Mapped, "\u{1e55}"),
    (0x1E55, Valid, ""),
    (0x1E56, Mapped, "\u{1e57}"),
    (0x1E57, Valid, ""),
    (0x1E58, Mapped, "\u{1e59}"),
    (0x1E59, Valid, ""),
    (0x1E5A, Mapped, "\u{1e5b}"),
    (0x1E5B, Valid, ""),
    (0x1E5C, Mapped, "\u{1e5d}"),
    (0x1E5D, Valid, ""),
    (0x1E5E, Mapped, "\u{1e5f}"),
    (0x1E5F, Valid, ""),
    (0x1E60, Mapped, "\u{1e61}"),
    (0x1E61, Valid, ""),
    (0x1E62, Mapped, "\u{1e63}"),
    (0x1E63, Valid, ""),
    (0x1E64, Mapped, "\u{1e65}"),
    (0x1E65, Valid, ""),
    (0x1E66, Mapped, "\u{1e67}"),
    (0x1E67, Valid, ""),
    (0x1E68, Mapped, "\u{1e69}"),
    (0x1E69, Valid, ""),
    (0x1E6A, Mapped, "\u{1e6b}"),
    (0x1E6B, Valid, ""),
    (0x1E6C, Mapped, "\u{1e6d}"),
    (0x1E6D, Valid, ""),
    (0x1E6E, Mapped, "\u{1e6f}"),
    (0x1E6F, Valid, ""),
    (0x1E70, Mapped, "\u{1e71}"),
    (0x1E71, Valid, ""),
    (0x1E72, Mapped, "\u{1e73}"),
    (0x1E73, Valid, ""),
    (0x1E74, Mapped, "\u{1e75}"),
    (0x1E75, Valid, ""),
    (0x1E76, Mapped, "\u{1e77}"),
    (0x1E77, Valid, ""),
    (0x1E78, Mapped, "\u{1e79}"),
    (0x1E79, Valid, ""),
    (0x1E7A, Mapped, "\u{1e7b}"),
    (0x1E7B, Valid, ""),
    (0x1E7C, Mapped, "\u{1e7d}"),
    (0x1E7D, Valid, ""),
    (0x1E7E, Mapped, "\u{1e7f}"),
    (0x1E7F, Valid, ""),
    (0x1E80, Mapped, "\u{1e81}"),
    (0x1E81, Valid, ""),
    (0x1E82, Mapped, "\u{1e83}"),
    (0x1E83, Valid, ""),
    (0x1E84, Mapped, "\u{1e85}"),
    (0x1E85, Valid, ""),
    (0x1E86, Mapped, "\u{1e87}"),
    (0x1E87, Valid, ""),
    (0x1E88, Mapped, "\u{1e89}"),
    (0x1E89, Valid, ""),
    (0x1E8A, Mapped, "\u{1e8b}"),
    (0x1E8B, Valid, ""),
    (0x1E8C, Mapped, "\u{1e8d}"),
    (0x1E8D, Valid, ""),
    (0x1E8E, Mapped, "\u{1e8f}"),
    (0x1E8F, Valid, ""),
    (0x1E90, Mapped, "\u{1e91}"),
    (0x1E91, Valid, ""),
    (0x1E92, Mapped, "\u{1e93}"),
    (0x1E93, Valid, ""),
    (0x1E94, Mapped, "\u{1e95}"),
    (0x1E95, Valid, ""),
    (0x1E9A, Mapped, "a\u{2be}"),
    (0x1E9B, Mapped, "\u{1e61}"),
    (0x1E9C, Valid, ""),
    (0x1E9E, Mapped, "\u{df}"),
    (0x1E9F, Valid, ""),
    (0x1EA0, Mapped, "\u{1ea1}"),
    (0x1EA1, Valid, ""),
    (0x1EA2, Mapped, "\u{1ea3}"),
    (0x1EA3, Valid, ""),
    (0x1EA4, Mapped, "\u{1ea5}"),
    (0x1EA5, Valid, ""),
    (0x1EA6, Mapped, "\u{1ea7}"),
    (0x1EA7, Valid, ""),
    (0x1EA8, Mapped, "\u{1ea9}"),
    (0x1EA9, Valid, ""),
    (0x1EAA, Mapped, "\u{1eab}"),
    (0x1EAB, Valid, ""),
    (0x1EAC, Mapped, "\u{1ead}"),
    (0x1EAD, Valid, ""),
    (0x1EAE, Mapped, "\u{1eaf}"),
    (0x1EAF, Valid, ""),
    (0x1EB0, Mapped, "\u{1eb1}"),
    (0x1EB1, Valid, ""),
    (0x1EB2, Mapped, "\u{1eb3}"),
    (0x1EB3, Valid, ""),
    (0x1EB4, Mapped, "\u{1eb5}"),
    (0x1EB5, Valid, ""),
    (0x1EB6, Mapped, "\u{1eb7}"),
    (0x1EB7, Valid, ""),
    (0x1EB8, Mapped, "\u{1eb9}"),
    (0x1EB9, Valid, ""),
    (0x1EBA, Mapped, "\u{1ebb}"),
    (0x1EBB, Valid, ""),
    (0x1EBC, Mapped, "\u{1ebd}"),
    (0x1EBD, Valid, ""),
    (0x1EBE, Mapped, "\u{1ebf}"),
    (0x1EBF, Valid, ""),
    (0x1EC0, Mapped, "\u{1ec1}"),
    (0x1EC1, Valid, ""),
    (0x1EC2, Mapped, "\u{1ec3}"),
    (0x1EC3, Valid, ""),
    (0x1EC4, Mapped, "\u{1ec5}"),
    (0x1EC5, Valid, ""),
    (0x1EC6, Mapped, "\u{1ec7}"),
    (0x1EC7, Valid, ""),
    (0x1EC8, Mapped, "\u{1ec9}"),
    (0x1EC9, Valid, ""),
    (0x1ECA, Mapped, "\u{1ecb}"),
    (0x1ECB, Valid, ""),
    (0x1ECC, Mapped, "\u{1ecd}"),
    (0x1ECD, Valid, ""),
    (0x1ECE, Mapped, "\u{1ecf}"),
    (0x1ECF, Valid, ""),
    (0x1ED0, Mapped, "\u{1ed1}"),
    (0x1ED1, Valid, ""),
    (0x1ED2, Mapped, "\u{1ed3}"),
    (0x1ED3, Valid, ""),
    (0x1ED4, Mapped, "\u{1ed5}"),
    (0x1ED5, Valid, ""),
    (0x1ED6, Mapped, "\u{1ed7}"),
    (0x1ED7, Valid, ""),
    (0x1ED8, Mapped, "\u{1ed9}"),
    (0x1ED9, Valid, ""),
    (0x1EDA, Mapped, "\u{1edb}"),
    (0x1EDB, Valid, ""),
    (0x1EDC, Mapped, "\u{1edd}"),
    (0x1EDD, Valid, ""),
    (0x1EDE, Mapped, "\u{1edf}"),
    (0x1EDF, Valid, ""),
    (0x1EE0, Mapped, "\u{1ee1}"),
    (0x1EE1, Valid, ""),
    (0x1EE2, Mapped, "\u{1ee3}"),
    (0x1EE3, Valid, ""),
    (0x1EE4, Mapped, "\u{1ee5}"),
    (0x1EE5, Valid, ""),
    (0x1EE6, Mapped, "\u{1ee7}"),
    (0x1EE7, Valid, ""),
    (0x1EE8, Mapped, "\u{1ee9}"),
    (0x1EE9, Valid, ""),
    (0x1EEA, Mapped, "\u{1eeb}"),
    (0x1EEB, Valid, ""),
    (0x1EEC, Mapped, "\u{1eed}"),
    (0x1EED, Valid, ""),
    (0x1EEE, Mapped, "\u{1eef}"),
    (0x1EEF, Valid, ""),
    (0x1EF0, Mapped, "\u{1ef1}"),
    (0x1EF1, Valid, ""),
    (0x1EF2, Mapped, "\u{1ef3}"),
    (0x1EF3, Valid, ""),
    (0x1EF4, Mapped, "\u{1ef5}"),
    (0x1EF5, Valid, ""),
    (0x1EF6, Mapped, "\u{1ef7}"),
    (0x1EF7, Valid, ""),
    (0x1EF8, Mapped, "\u{1ef9}"),
    (0x1EF9, Valid, ""),
    (0x1EFA, Mapped, "\u{1efb}"),
    (0x1EFB, Valid, ""),
    (0x1EFC, Mapped, "\u{1efd}"),
    (0x1EFD, Valid, ""),
    (0x1EFE, Mapped, "\u{1eff}"),
    (0x1EFF, Valid, ""),
    (0x1F08, Mapped, "\u{1f00}"),
    (0x1F09, Mapped, "\u{1f01}"),
    (0x1F0A, Mapped, "\u{1f02}"),
    (0x1F0B, Mapped, "\u{1f03}"),
    (0x1F0C, Mapped, "\u{1f04}"),
    (0x1F0D, Mapped, "\u{1f05}"),
    (0x1F0E, Mapped, "\u{1f06}"),
    (0x1F0F, Mapped, "\u{1f07}"),
    (0x1F10, Valid, ""),
    (0x1F16, Disallowed, ""),
    (0x1F18, Mapped, "\u{1f10}"),
    (0x1F19, Mapped, "\u{1f11}"),
    (0x1F1A, Mapped, "\u{1f12}"),
    (0x1F1B, Mapped, "\u{1f13}"),
    (0x1F1C, Mapped, "\u{1f14}"),
    (0x1F1D, Mapped, "\u{1f15}"),
    (0x1F1E, Disallowed, ""),
    (0x1F20, Valid, ""),
    (0x1F28, Mapped, "\u{1f20}"),
    (0x1F29, Mapped, "\u{1f21}"),
    (0x1F2A, Mapped, "\u{1f22}"),
    (0x1F2B, Mapped, "\u{1f23}"),
    (0x1F2C, Mapped, "\u{1f24}"),
    (0x1F2D, Mapped, "\u{1f25}"),
    (0x1F2E, Mapped, "\u{1f26}"),
    (0x1F2F, Mapped, "\u{1f27}"),
    (0x1F30, Valid, ""),
    (0x1F38, Mapped, "\u{1f30}"),
    (0x1F39, Mapped, "\u{1f31}"),
    (0x1F3A, Mapped, "\u{1f32}"),
    (0x1F3B, Mapped, "\u{1f33}"),
    (0x1F3C, Mapped, "\u{1f34}"),
    (0x1F3D, Mapped, "\u{1f35}"),
    (0x1F3E, Mapped, "\u{1f36}"),
    (0x1F3F, Mapped, "\u{1f37}"),
    (0x1F40, Valid, ""),
    (0x1F46, Disallowed, ""),
    (0x1F48, Mapped, "\u{1f40}"),
    (0x1F49, Mapped, "\u{1f41}"),
    (0x1F4A, Mapped, "\u{1f42}"),
    (0x1F4B, Mapped, "\u{1f43}"),
    (0x1F4C, Mapped, "\u{1f44}"),
    (0x1F4D, Mapped, "\u{1f45}"),
    (0x1F4E, Disallowed, ""),
    (0x1F50, Valid, ""),
    (0x1F58, Disallowed, ""),
    (0x1F59, Mapped, "\u{1f51}"),
    (0x1F5A, Disallowed, ""),
    (0x1F5B, Mapped, "\u{1f53}"),
    (0x1F5C, Disallowed, ""),
    (0x1F5D, Mapped, "\u{1f55}"),
    (0x1F5E, Disallowed, ""),
    (0x1F5F, Mapped, "\u{1f57}"),
    (0x1F60, Valid, ""),
    (0x1F68, Mapped, "\u{1f60}"),
    (0x1F69, Mapped, "\u{1f61}"),
    (0x1F6A, Mapped, "\u{1f62}"),
    (0x1F6B, Mapped, "\u{1f63}"),
    (0x1F6C, Mapped, "\u{1f64}"),
    (0x1F6D, Mapped, "\u{1f65}"),
    (0x1F6E, Mapped, "\u{1f66}"),
    (0x1F6F, Mapped, "\u{1f67}"),
    (0x1F70, Valid, ""),
    (0x1F71, Mapped, "\u{3ac}"),
    (0x1F72, Valid, ""),
    (0x1F73, Mapped, "\u{3ad}"),
    (0x1F74, Valid, ""),
    (0x1F75, Mapped, "\u{3ae}"),
    (0x1F76, Valid, ""),
    (0x1F77, Mapped, "\u{3af}"),
    (0x1F78, Valid, ""),
    (0x1F79, Mapped, "\u{3cc}"),
    (0x1F7A, Valid, ""),
    (0x1F7B, Mapped, "\u{3cd}"),
    (0x1F7C, Valid, ""),
    (0x1F7D, Mapped, "\u{3ce}"),
    (0x1F7E, Disallowed, ""),
    (0x1F80, Mapped, "\u{1f00}\u{3b9}"),
    (0x1F81, Mapped, "\u{1f01}\u{3b9}"),
    (0x1F82, Mapped, "\u{1f02}\u{3b9}"),
    (0x1F83, Mapped, "\u{1f03}\u{3b9}"),
    (0x1F84, Mapped, "\u{1f04}\u{3b9}"),
    (0x1F85, Mapped, "\u{1f05}\u{3b9}"),
    (0x1F86, Mapped, "\u{1f06}\u{3b9}"),
    (0x1F87, Mapped, "\u{1f07}\u{3b9}"),
    (0x1F88, Mapped, "\u{1f00}\u{3b9}"),
    (0x1F89, Mapped, "\u{1f01}\u{3b9}"),
    (0x1F8A, Mapped, "\u{1f02}\u{3b9}"),
    (0x1F8B, Mapped, "\u{1f03}\u{3b9}"),
    (0x1F8C, Mapped, "\u{1f04}\u{3b9}"),
    (0x1F8D, Mapped, "\u{1f05}\u{3b9}"),
    (0x1F8E, Mapped, "\u{1f06}\u{3b9}"),
    (0x1F8F, Mapped, "\u{1f07}\u{3b9}"),
    (0x1F90, Mapped, "\u{1f20}\u{3b9}"),
    (0x1F91, Mapped, "\u{1f21}\u{3b9}"),
    (0x1F92, Mapped, "\u{1f22}\u{3b9}"),
    (0x1F93, Mapped, "\u{1f23}\u{3b9}"),
    (0x1F94, Mapped, "\u{1f24}\u{3b9}"),
    (0x1F95, Mapped, "\u{1f25}\u{3b9}"),
    (0x1F96, Mapped, "\u{1f26}\u{3b9}"),
    (0x1F97, Mapped, "\u{1f27}\u{3b9}"),
    (0x1F98, Mapped, "\u{1f20}\u{3b9}"),
    (0x1F99, Mapped, "\u{1f21}\u{3b9}"),
    (0x1F9A, Mapped, "\u{1f22}\u{3b9}"),
    (0x1F9B, Mapped, "\u{1f23}\u{3b9}"),
    (0x1F9C, Mapped, "\u{1f24}\u{3b9}"),
    (0x1F9D, Mapped, "\u{1f25}\u{3b9}"),
    (0x1F9E, Mapped, "\u{1f26}\u{3b9}"),
    (0x1F9F, Mapped, "\u{1f27}\u{3b9}"),
    (0x1FA0, Mapped, "\u{1f60}\u{3b9}"),
    (0x1FA1, Mapped, "\u{1f61}\u{3b9}"),
    (0x1FA2, Mapped, "\u{1f62}\u{3b9}"),
    (0x1FA3, Mapped, "\u{1f63}\u{3b9}"),
    (0x1FA4, Mapped, "\u{1f64}\u{3b9}"),
    (0x1FA5, Mapped, "\u{1f65}\u{3b9}"),
    (0x1FA6, Mapped, "\u{1f66}\u{3b9}"),
    (0x1FA7, Mapped, "\u{1f67}\u{3b9}"),
    (0x1FA8, Mapped, "\u{1f60}\u{3b9}"),
    (0x1FA9, Mapped, "\u{1f61}\u{3b9}"),
    (0x1FAA, Mapped, "\u{1f62}\u{3b9}"),
    (0x1FAB, Mapped, "\u{1f63}\u{3b9}"),
    (0x1FAC, Mapped, "\u{1f64}\u{3b9}"),
    (0x1FAD, Mapped, "\u{1f65}\u{3b9}"),
    (0x1FAE, Mapped, "\u{1f66}\u{3b9}"),
    (0x1FAF, Mapped, "\u{1f67}\u{3b9}"),
    (0x1FB0, Valid, ""),
    (0x1FB2, Mapped, "\u{1f70}\u{3b9}"),
    (0x1FB3, Mapped, "\u{3b1}\u{3b9}"),
    (0x1FB4, Mapped, "\u{3ac}\u{3b9}"),
    (0x1FB5, Disallowed, ""),
    (0x1FB6, Valid, ""),
    (0x1FB7, Mapped, "\u{1fb6}\u{3b9}"),
    (0x1FB8, Mapped, "\u{1fb0}"),
    (0x1FB9, Mapped, "\u{1fb1}"),
    (0x1FBA, Mapped, "\u{1f70}"),
    (0x1FBB, Mapped, "\u{3ac}"),
    (0x1FBC, Mapped, "\u{3b1}\u{3b9}"),
    (0x1FBD, Mapped, " \u{313}"),
    (0x1FBE, Mapped, "\u{3b9}"),
    (0x1FBF, Mapped, " \u{313}"),
    (0x1FC0, Mapped, " \u{342}"),
    (0x1FC1, Mapped, " \u{308}\u{342}"),
    (0x1FC2, Mapped, "\u{1f74}\u{3b9}"),
    (0x1FC3, Mapped, "\u{3b7}\u{3b9}"),
    (0x1FC4, Mapped, "\u{3ae}\u{3b9}"),
    (0x1FC5, Disallowed, ""),
    (0x1FC6, Valid, ""),
    (0x1FC7, Mapped, "\u{1fc6}\u{3b9}"),
    (0x1FC8, Mapped, "\u{1f72}"),
    (0x1FC9, Mapped, "\u{3ad}"),
    (0x1FCA, Mapped, "\u{1f74}"),
    (0x1FCB, Mapped, "\u{3ae}"),
    (0x1FCC, Mapped, "\u{3b7}\u{3b9}"),
    (0x1FCD, Mapped, " \u{313}\u{300}"),
    (0x1FCE, Mapped, " \u{313}\u{301}"),
    (0x1FCF, Mapped, " \u{313}\u{342}"),
    (0x1FD0, Valid, ""),
    (0x1FD3, Mapped, "\u{390}"),
    (0x1FD4, Disallowed, ""),
    (0x1FD6, Valid, ""),
    (0x1FD8, Mapped, "\u{1fd0}"),
    (0x1FD9, Mapped, "\u{1fd1}"),
    (0x1FDA, Mapped, "\u{1f76}"),
    (0x1FDB, Mapped, "\u{3af}"),
    (0x1FDC, Disallowed, ""),
    (0x1FDD, Mapped, " \u{314}\u{300}"),
    (0x1FDE, Mapped, " \u{314}\u{301}"),
    (0x1FDF, Mapped, " \u{314}\u{342}"),
    (0x1FE0, Valid, ""),
    (0x1FE3, Mapped, "\u{3b0}"),
    (0x1FE4, Valid, ""),
    (0x1FE8, Mapped, "\u{1fe0}"),
    (0x1FE9, Mapped, "\u{1fe1}"),
    (0x1FEA, Mapped, "\u{1f7a}"),
    (0x1FEB, Mapped, "\u{3cd}"),
    (0x1FEC, Mapped, "\u{1fe5}"),
    (0x1FED, Mapped, " \u{308}\u{300}"),
    (0x1FEE, Mapped, " \u{308}\u{301}"),
    (0x1FEF, Mapped, "`"),
    (0x1FF0, Disallowed, ""),
    (0x1FF2, Mapped, "\u{1f7c}\u{3b9}"),
    (0x1FF3, Mapped, "\u{3c9}\u{3b9}"),
    (0x1FF4, Mapped, "\u{3ce}\u{3b9}"),
    (0x1FF5, Disallowed, ""),
    (0x1FF6, Valid, ""),
    (0x1FF7, Mapped, "\u{1ff6}\u{3b9}"),
    (0x1FF8, Mapped, "\u{1f78}"),
    (0x1FF9, Mapped, "\u{3cc}"),
    (0x1FFA, Mapped, "\u{1f7c}"),
    (0x1FFB, Mapped, "\u{3ce}"),
    (0x1FFC, Mapped, "\u{3c9}\u{3b9}"),
    (0x1FFD, Mapped, " \u{301}"),
    (0x1FFE, Mapped, " \u{314}"),
    (0x1FFF, Disallowed, ""),
    (0x2000, Mapped, " "),
    (0x200B, Ignored, ""),
    (0x200C, Deviation, ""),
    (0x200E, Disallowed, ""),
    (0x2010, Valid, ""),
    (0x2011, Mapped, "\u{2010}"),
    (0x2012, Valid, ""),
    (0x2017, Mapped, " \u{333}"),
    (0x2018, Valid, ""),
    (0x2024, Disallowed, ""),
    (0x2027, Valid, ""),
    (0x2028, Disallowed, ""),
    (0x202F, Mapped, " "),
    (0x2030, Valid, ""),
    (0x2033, Mapped, "\u{2032}\u{2032}"),
    (0x2034, Mapped, "\u{2032}\u{2032}\u{2032}"),
    (0x2035, Valid, ""),
    (0x2036, Mapped, "\u{2035}\u{2035}"),
    (0x2037, Mapped, "\u{2035}\u{2035}\u{2035}"),
    (0x2038, Valid, ""),
    (0x203C, Mapped, "!!"),
    (0x203D, Valid, ""),
    (0x203E, Mapped, " \u{305}"),
    (0x203F, Valid, ""),
    (0x2047, Mapped, "??"),
    (0x2048, Mapped, "?!"),
    (0x2049, Mapped, "!?"),
    (0x204A, Valid, ""),
    (0x2057, Mapped, "\u{2032}\u{2032}\u{2032}\u{2032}"),
    (0x2058, Valid, ""),
    (0x205F, Mapped, " "),
    (0x2060, Ignored, ""),
    (0x2065, Disallowed, ""),
    (0x206A, Ignored, ""),
    (0x2070, Mapped, "0"),
    (0x2071, Mapped, "i"),
    (0x2072, Disallowed, ""),
    (0x2074, Mapped, "4"),
    (0x2075, Mapped, "5"),
    (0x2076, Mapped, "6"),
    (0x2077, Mapped, "7"),
    (0x2078, Mapped, "8"),
    (0x2079, Mapped, "9"),
    (0x207A, Mapped, "+"),
    (0x207B, Mapped, "\u{2212}"),
    (0x207C, Mapped, "="),
    (0x207D, Mapped, "("),
    (0x207E, Mapped, ")"),
    (0x207F, Mapped, "n"),
    (0x2080, Mapped, "0"),
    (0x2081, Mapped, "1"),
    (0x2082, Mapped, "2"),
    (0x2083, Mapped, "3"),
    (0x2084, Mapped, "4"),
    (0x2085, Mapped, "5"),
    (0x2086, Mapped, "6"),
    (0x2087, Mapped, "7"),
    (0x2088, Mapped, "8"),
    (0x2089, Mapped, "9"),
    (0x208A, Mapped, "+"),
    (0x208B, Mapped, "\u{2212}"),
    (0x208C, Mapped, "="),
    (0x208D, Mapped, "("),
    (0x208E, Mapped, ")"),
    (0x208F, Disallowed, ""),
    (0x2090, Mapped, "a"),
    (0x2091, Mapped, "e"),
    (0x2092, Mapped, "o"),
    (0x2093, Mapped, "x"),
    (0x2094, Mapped, "\u{259}"),
    (0x2095, Mapped, "h"),
    (0x2096, Mapped, "k"),
    (0x2097, Mapped, "l"),
    (0x2098, Mapped, "m"),
    (0x2099, Mapped, "n"),
    (0x209A, Mapped, "p"),
    (0x209B, Mapped, "s"),
    (0x209C, Mapped, "t"),
    (0x209D, Disallowed, ""),
    (0x20A0, Valid, ""),
    (0x20A8, Mapped, "rs"),
    (0x20A9, Valid, ""),
    (0x20C2, Disallowed, ""),
    (0x20D0, Valid, ""),
    (0x20F1, Disallowed, ""),
    (0x2100, Mapped, "a/c"),
    (0x2101, Mapped, "a/s"),
    (0x2102, Mapped, "c"),
    (0x2103, Mapped, "\u{b0}c"),
    (0x2104, Valid, ""),
    (0x2105, Mapped, "c/o"),
    (0x2106, Mapped, "c/u"),
    (0x2107, Mapped, "\u{25b}"),
    (0x2108, Valid, ""),
    (0x2109, Mapped, "\u{b0}f"),
    (0x210A, Mapped, "g"),
    (0x210B, Mapped, "h"),
    (0x210F, Mapped, "\u{127}"),
    (0x2110, Mapped, "i"),
    (0x2112, Mapped, "l"),
    (0x2114, Valid, ""),
    (0x2115, Mapped, "n"),
    (0x2116, Mapped, "no"),
    (0x2117, Valid, ""),
    (0x2119, Mapped, "p"),
    (0x211A, Mapped, "q"),
    (0x211B, Mapped, "r"),
    (0x211E, Valid, ""),
    (0x2120, Mapped, "sm"),
    (0x2121, Mapped, "tel"),
    (0x2122, Mapped, "tm"),
    (0x2123, Valid, ""),
    (0x2124, Mapped, "z"),
    (0x2125, Valid, ""),
    (0x2126, Mapped, "\u{3c9}"),
    (0x2127, Valid, ""),
    (0x2128, Mapped, "z"),
    (0x2129, Valid, ""),
    (0x212A, Mapped, "k"),
    (0x212B, Mapped, "\u{e5}"),
    (0x212C, Mapped, "b"),
    (0x212D, Mapped, "c"),
    (0x212E, Valid, ""),
    (0x212F, Mapped, "e"),
    (0x2131, Mapped, "f"),
    (0x2132, Mapped, "\u{214e}"),
    (0x2133, Mapped, "m"),
    (0x2134, Mapped, "o"),
    (0x2135, Mapped, "\u{5d0}"),
    (0x2136, Mapped, "\u{5d1}"),
    (0x2137, Mapped, "\u{5d2}"),
    (0x2138, Mapped, "\u{5d3}"),
    (0x2139, Mapped, "i"),
    (0x213A, Valid, ""),
    (0x213B, Mapped, "fax"),
    (0x213C, Mapped, "\u{3c0}"),
    (0x213D, Mapped, "\u{3b3}"),
    (0x213F, Mapped, "\u{3c0}"),
    (0x2140, Mapped, "\u{2211}"),
    (0x2141, Valid, ""),
    (0x2145, Mapped, "d"),
    (0x2147, Mapped, "e"),
    (0x2148, Mapped, "i"),
    (0x2149, Mapped, "j"),
    (0x214A, Valid, ""),
    (0x2150, Mapped, "1\u{2044}7"),
    (0x2151, Mapped, "1\u{2044}9"),
    (0x2152, Mapped, "1\u{2044}10"),
    (0x2153, Mapped, "1\u{2044}3"),
    (0x2154, Mapped, "2\u{2044}3"),
    (0x2155, Mapped, "1\u{2044}5"),
    (0x2156, Mapped, "2\u{2044}5"),
    (0x2157, Mapped, "3\u{2044}5"),
    (0x2158, Mapped, "4\u{2044}5"),
    (0x2159, Mapped, "1\u{2044}6"),
    (0x215A, Mapped, "5\u{2044}6"),
    (0x215B, Mapped, "1\u{2044}8"),
    (0x215C, Mapped, "3\u{2044}8"),
    (0x215D, Mapped, "5\u{2044}8"),
    (0x215E, Mapped, "7\u{2044}8"),
    (0x215F, Mapped, "1\u{2044}"),
    (0x2160, Mapped, "i"),
    (0x2161, Mapped, "ii"),
    (0x2162, Mapped, "iii"),
    (0x2163, Mapped, "iv"),
    (0x2164, Mapped, "v"),
    (0x2165, Mapped, "vi"),
    (0x2166, Mapped, "vii"),
    (0x2167, Mapped, "viii"),
    (0x2168, Mapped, "ix"),
    (0x2169, Mapped, "x"),
    (0x216A, Mapped, "xi"),
    (0x216B, Mapped, "xii"),
    (0x216C, Mapped, "l"),
    (0x216D, Mapped, "c"),
    (0x216E, Mapped, "d"),
    (0x216F, Mapped, "m"),
    (0x2170, Mapped, "i"),
    (0x2171, Mapped, "ii"),
    (0x2172, Mapped, "iii"),
    (0x2173, Mapped, "iv"),
    (0x2174, Mapped, "v"),
    (0x2175, Mapped, "vi"),
    (0x2176, Mapped, "vii"),
    (0x2177, Mapped, "viii"),
    (0x2178, Mapped, "ix"),
    (0x2179, Mapped, "x"),
    (0x217A, Mapped, "xi"),
    (0x217B, Mapped, "xii"),
    (0x217C, Mapped, "l"),
    (0x217D, Mapped, "c"),
    (0x217E, Mapped, "d"),
    (0x217F, Mapped, "m"),
    (0x2180, Valid, ""),
    (0x2183, Mapped, "\u{2184}"),
    (0x2184, Valid, ""),
    (0x2189, Mapped, "0\u{2044}3"),
    (0x218A, Valid, ""),
    (0x218C, Disallowed, ""),
    (0x2190, Valid, ""),
    (0x222C, Mapped, "\u{222b}\u{222b}"),
    (0x222D, Mapped, "\u{222b}\u{222b}\u{222b}"),
    (0x222E, Valid, ""),
    (0x222F, Mapped, "\u{222e}\u{222e}"),
    (0x2230, Mapped, "\u{222e}\u{222e}\u{222e}"),
    (0x2231, Valid, ""),
    (0x2329, Mapped, "\u{3008}"),
    (0x232A, Mapped, "\u{3009}"),
    (0x232B, Valid, ""),
    (0x242A, Disallowed, ""),
    (0x2440, Valid, ""),
    (0x244B, Disallowed, ""),
    (0x2460, Mapped, "1"),
    (0x2461, Mapped, "2"),
    (0x2462, Mapped, "3"),
    (0x2463, Mapped, "4"),
    (0x2464, Mapped, "5"),
    (0x2465, Mapped, "6"),
    (0x2466, Mapped, "7"),
    (0x2467, Mapped, "8"),
    (0x2468, Mapped, "9"),
    (0x2469, Mapped, "10"),
    (0x246A, Mapped, "11"),
    (0x246B, Mapped, "12"),
    (0x246C, Mapped, "13"),
    (0x246D, Mapped, "14"),
    (0x246E, Mapped, "15"),
    (0x246F, Mapped, "16"),
    (0x2470, Mapped, "17"),
    (0x2471, Mapped, "18"),
    (0x2472, Mapped, "19"),
    (0x2473, Mapped, "20"),
    (0x2474, Mapped, "(1)"),
    (0x2475, Mapped, "(2)"),
    (0x2476, Mapped, "(3)"),
    (0x2477, Mapped, "(4)"),
    (0x2478, Mapped, "(5)"),
    (0x2479, Mapped, "(6)"),
    (0x247A, Mapped, "(7)"),
    (0x247B, Mapped, "(8)"),
    (0x247C, Mapped, "(9)"),
    (0x247D, Mapped, "(10)"),
    (0x247E, Mapped, "(11)"),
    (0x247F, Mapped, "(12)"),
    (0x2480, Mapped, "(13)"),
    (0x2481, Mapped, "(14)"),
    (0x2482, Mapped, "(15)"),
    (0x2483, Mapped, "(16)"),
    (0x2484, Mapped, "(17)"),
    (0x2485, Mapped, "(18)"),
    (0x2486, Mapped, "(19)"),
    (0x2487, Mapped, "(20)"),
    (0x2488, Disallowed, ""),
    (0x249C, Mapped, "(a)"),
    (0x249D, Mapped, "(b)"),
    (0x249E, Mapped, "(c)"),
    (0x249F, Mapped, "(d)"),
    (0x24A0, Mapped, "(e)"),
    (0x24A1, Mapped, "(f)"),
    (0x24A2, Mapped, "(g)"),
    (0x24A3, Mapped, "(h)"),
    (0x24A4, Mapped, "(i)"),
    (0x24A5, Mapped, "(j)"),
    (0x24A6, Mapped, "(k)"),
    (0x24A7, Mapped, "(l)"),
    (0x24A8, Mapped, "(m)"),
    (0x24A9, Mapped, "(n)"),
    (0x24AA, Mapped, "(o)"),
    (0x24AB, Mapped, "(p)"),
    (0x24AC, Mapped, "(q)"),
    (0x24AD, Mapped, "(r)"),
    (0x24AE, Mapped, "(s)"),
    (0x24AF, Mapped, "(t)"),
    (0x24B0, Mapped, "(u)"),
    (0x24B1, Mapped, "(v)"),
    (0x24B2, Mapped, "(w)"),
    (0x24B3, Mapped, "(x)"),
    (0x24B4, Mapped, "(y)"),
    (0x24B5, Mapped, "(z)"),
    (0x24B6, Mapped, "a"),
    (0x24B7, Mapped, "b"),
    (0x24B8, Mapped, "c"),
    (0x24B9, Mapped, "d"),
    (0x24BA, Mapped, "e"),
    (0x24BB, Mapped, "f"),
    (0x24BC, Mapped, "g"),
    (0x24BD, Mapped, "h"),
    (0x24BE, Mapped, "i"),
    (0x24BF, Mapped, "j"),
    (0x24C0, Mapped, "k"),
    (0x24C1, Mapped, "l"),
    (0x24C2, Mapped, "m"),
    (0x24C3, Mapped, "n"),
    (0x24C4, Mapped, "o"),
    (0x24C5, Mapped, "p"),
    (0x24C6, Mapped, "q"),
    (0x24C7, Mapped, "r"),
    (0x24C8, Mapped, "s"),
    (0x24C9, Mapped, "t"),
    (0x24CA, Mapped, "u"),
    (0x24CB, Mapped, "v"),
    (0x24CC, Mapped, "w"),
    (0x24CD, Mapped, "x"),
    (0x24CE, Mapped, "y"),
    (0x24CF, Mapped, "z"),
    (0x24D0, Mapped, "a"),
    (0x24D1, Mapped, "b"),
    (0x24D2, Mapped, "c"),
    (0x24D3, Mapped, "d"),
    (0x24D4, Mapped, "e"),
    (0x24D5, Mapped, "f"),
    (0x24D6, Mapped, "g"),
    (0x24D7, Mapped, "h"),
    (0x24D8, Mapped, "i"),
    (0x24D9, Mapped, "j"),
    (0x24DA, Mapped, "k"),
    (0x24DB, Mapped, "l"),
    (0x24DC, Mapped, "m"),
    (0x24DD, Mapped, "n"),
    (0x24DE, Mapped, "o"),
    (0x24DF, Mapped, "p"),
    (0x24E0, Mapped, "q"),
    (0x24E1, Mapped, "r"),
    (0x24E2, Mapped, "s"),
    (0x24E3, Mapped, "t"),
    (0x24E4, Mapped, "u"),
    (0x24E5, Mapped, "v"),
    (0x24E6, Mapped, "w"),
    (0x24E7, Mapped, "x"),
    (0x24E8, Mapped, "y"),
    (0x24E9, Mapped, "z"),
    (0x24EA, Mapped, "0"),
    (0x24EB, Valid, ""),
    (0x2A0C, Mapped, "\u{222b}\u{222b}\u{222b}\u{222b}"),
    (0x2A0D, Valid, ""),
    (0x2A74, Mapped, "::="),
    (0x2A75, Mapped, "=="),
    (0x2A76, Mapped, "==="),
    (0x2A77, Valid, ""),
    (0x2ADC, Mapped, "\u{2add}\u{338}"),
    (0x2ADD, Valid, ""),
    (0x2B74, Disallowed, ""),
    (0x2B76, Valid, ""),
    (0x2C00, Mapped, "\u{2c30}"),
    (0x2C01, Mapped, "\u{2c31}"),
    (0x2C02, Mapped, "\u{2c32}"),
    (0x2C03, Mapped, "\u{2c33}"),
    (0x2C04, Mapped, "\u{2c34}"),
    (0x2C05, Mapped, "\u{2c35}"),
    (0x2C06, Mapped, "\u{2c36}"),
    (0x2C07, Mapped, "\u{2c37}"),
    (0x2C08, Mapped, "\u{2c38}"),
    (0x2C09, Mapped, "\u{2c39}"),
    (0x2C0A, Mapped, "\u{2c3a}"),
    (0x2C0B, Mapped, "\u{2c3b}"),
    (0x2C0C, Mapped, "\u{2c3c}"),
    (0x2C0D, Mapped, "\u{2c3d}"),
    (0x2C0E, Mapped, "\u{2c3e}"),
    (0x2C0F, Mapped, "\u{2c3f}"),
    (0x2C10, Mapped, "\u{2c40}"),
    (0x2C11, Mapped, "\u{2c41}"),
    (0x2C12, Mapped, "\u{2c42}"),
    (0x2C13, Mapped, "\u{2c43}"),
    (0x2C14, Mapped, "\u{2c44}"),
    (0x2C15, Mapped, "\u{2c45}"),
    (0x2C16, Mapped, "\u{2c46}"),
    (0x2C17, Mapped, "\u{2c47}"),
    (0x2C18, Mapped, "\u{2c48}"),
    (0x2C19, Mapped, "\u{2c49}"),
    (0x2C1A, Mapped, "\u{2c4a}"),
    (0x2C1B, Mapped, "\u{2c4b}"),
    (0x2C1C, Mapped, "\u{2c4c}"),
    (0x2C1D, Mapped, "\u{2c4d}"),
    (0x2C1E, Mapped, "\u{2c4e}"),
    (0x2C1F, Mapped, "\u{2c4f}"),
    (0x2C20, Mapped, "\u{2c50}"),
    (0x2C21, Mapped, "\u{2c51}"),
    (0x2C22, Mapped, "\u{2c52}"),
    (0x2C23, Mapped, "\u{2c53}"),
    (0x2C24, Mapped, "\u{2c54}"),
    (0x2C25, Mapped, "\u{2c55}"),
    (0x2C26, Mapped, "\u{2c56}"),
    (0x2C27, Mapped, "\u{2c57}"),
    (0x2C28, Mapped, "\u{2c58}"),
    (0x2C29, Mapped, "\u{2c59}"),
    (0x2C2A, Mapped, "\u{2c5a}"),
    (0x2C2B, Mapped, "\u{2c5b}"),
    (0x2C2C, Mapped, "\u{2c5c}"),
    (0x2C2D, Mapped, "\u{2c5d}"),
    (0x2C2E, Mapped, "\u{2c5e}"),
    (0x2C2F, Mapped, "\u{2c5f}"),
    (0x2C30, Valid, ""),
    (0x2C60, Mapped, "\u{2c61}"),
    (0x2C61, Valid, ""),
    (0x2C62, Mapped, "\u{26b}"),
    (0x2C63, Mapped, "\u{1d7d}"),
    (0x2C64, Mapped, "\u{27d}"),
    (0x2C65, Valid, ""),
    (0x2C67, Mapped, "\u{2c68}"),
    (0x2C68, Valid, ""),
    (0x2C69, Mapped, "\u{2c6a}"),
    (0x2C6A, Valid, ""),
    (0x2C6B, Mapped, "\u{2c6c}"),
    (0x2C6C, Valid, ""),
    (0x2C6D, Mapped, "\u{251}"),
    (0x2C6E, Mapped, "\u{271}"),
    (0x2C6F, Mapped, "\u{250}"),
    (0x2C70, Mapped, "\u{252}"),
    (0x2C71, Valid, ""),
    (0x2C72, Mapped, "\u{2c73}"),
    (0x2C73, Valid, ""),
    (0x2C75, Mapped, "\u{2c76}"),
    (0x2C76, Valid, ""),
    (0x2C7C, Mapped, "j"),
    (0x2C7D, Mapped, "v"),
    (0x2C7E, Mapped, "\u{23f}"),
    (0x2C7F, Mapped, "\u{240}"),
    (0x2C80, Mapped, "\u{2c81}"),
    (0x2C81, Valid, ""),
    (0x2C82, Mapped, "\u{2c83}"),
    (0x2C83, Valid, ""),
    (0x2C84, Mapped, "\u{2c85}"),
    (0x2C85, Valid, ""),
    (0x2C86, Mapped, "\u{2c87}"),
    (0x2C87, Valid, ""),
    (0x2C88, Mapped, "\u{2c89}"),
    (0x2C89, Valid, ""),
    (0x2C8A, Mapped, "\u{2c8b}"),
    (0x2C8B, Valid, ""),
    (0x2C8C, Mapped, "\u{2c8d}"),
    (0x2C8D, Valid, ""),
    (0x2C8E, Mapped, "\u{2c8f}"),
    (0x2C8F, Valid, ""),
    (0x2C90, Mapped, "\u{2c91}"),
    (0x2C91, Valid, ""),
    (0x2C92, Mapped, "\u{2c93}"),
    (0x2C93, Valid, ""),
    (0x2C94, Mapped, "\u{2c95}"),
    (0x2C95, Valid, ""),
    (0x2C96, Mapped, "\u{2c97}"),
    (0x2C97, Valid, ""),
    (0x2C98, Mapped, "\u{2c99}"),
    (0x2C99, Valid, ""),
    (0x2C9A, Mapped, "\u{2c9b}"),
    (0x2C9B, Valid, ""),
    (0x2C9C, Mapped, "\u{2c9d}"),
    (0x2C9D, Valid, ""),
    (0x2C9E, Mapped, "\u{2c9f}"),
    (0x2C9F, Valid, ""),
    (0x2CA0, Mapped, "\u{2ca1}"),
    (0x2CA1, Valid, ""),
    (0x2CA2, Mapped, "\u{2ca3}"),
    (0x2CA3, Valid, ""),
    (0x2CA4, Mapped, "\u{2ca5}"),
    (0x2CA5, Valid, ""),
    (0x2CA6, Mapped, "\u{2ca7}"),
    (0x2CA7, Valid, ""),
    (0x2CA8, Mapped, "\u{2ca9}"),
    (0x2CA9, Valid, ""),
    (0x2CAA, Mapped, "\u{2cab}"),
    (0x2CAB, Valid, ""),
    (0x2CAC, Mapped, "\u{2cad}"),
    (0x2CAD, Valid, ""),
    (0x2CAE, Mapped, "\u{2caf}"),
    (0x2CAF, Valid, ""),
    (0x2CB0, Mapped, "\u{2cb1}"),
    (0x2CB1, Valid, ""),
    (0x2CB2, Mapped, "\u{2cb3}"),
    (0x2CB3, Valid, ""),
    (0x2CB4, Mapped, "\u{2cb5}"),
    (0x2CB5, Valid, ""),
    (0x2CB6, Mapped, "\u{2cb7}"),
    (0x2CB7, Valid, ""),
    (0x2CB8, Mapped, "\u{2cb9}"),
    (0x2CB9, Valid, ""),
    (0x2CBA, Mapped, "\u{2cbb}"),
    (0x2CBB, Valid, ""),
    (0x2CBC, Mapped, "\u{2cbd}"),
    (0x2CBD, Valid, ""),
    (0x2CBE, Mapped, "\u{2cbf}"),
    (0x2CBF, Valid, ""),
    (0x2CC0, Mapped, "\u{2cc1}"),
    (0x2CC1, Valid, ""),
    (0x2CC2, Mapped, "\u{2cc3}"),
    (0x2CC3, Valid, ""),
    (0x2CC4, Mapped, "\u{2cc5}"),
    (0x2CC5, Valid, ""),
    (0x2CC6, Mapped, "\u{2cc7}"),
    (0x2CC7, Valid, ""),
    (0x2CC8, Mapped, "\u{2cc9}"),
    (0x2CC9, Valid, ""),
    (0x2CCA, Mapped, "\u{2ccb}"),
    (0x2CCB, Valid, ""),
    (0x2CCC, Mapped, "\u{2ccd}"),
    (0x2CCD, Valid, ""),
    (0x2CCE, Mapped, "\u{2ccf}"),
    (0x2CCF, Valid, ""),
    (0x2CD0, Mapped, "\u{2cd1}"),
    (0x2CD1, Valid, ""),
    (0x2CD2, Mapped, "\u{2cd3}"),
    (0x2CD3, Valid, ""),
    (0x2CD4, Mapped, "\u{2cd5}"),
    (0x2CD5, Valid, ""),
    (0x2CD6, Mapped, "\u{2cd7}"),
    (0x2CD7, Valid, ""),
    (0x2CD8, Mapped, "\u{2cd9}"),
    (0x2CD9, Valid, ""),
    (0x2CDA, Mapped, "\u{2cdb}"),
    (0x2CDB, Valid, ""),
    (0x2CDC, Mapped, "\u{2cdd}"),
    (0x2CDD, Valid, ""),
    (0x2CDE, Mapped, "\u{2cdf}"),
    (0x2CDF, Valid, ""),
    (0x2CE0, Mapped, "\u{2ce1}"),
    (0x2CE1, Valid, ""),
    (0x2CE2, Mapped, "\u{2ce3}"),
    (0x2CE3, Valid, ""),
    (0x2CEB, Mapped, "\u{2cec}"),
    (0x2CEC, Valid, ""),
    (0x2CED, Mapped, "\u{2cee}"),
    (0x2CEE, Valid, ""),
    (0x2CF2, Mapped, "\u{2cf3}"),
    (0x2CF3, Valid, ""),
    (0x2CF4, Disallowed, ""),
    (0x2CF9, Valid, ""),
    (0x2D26, Disallowed, ""),
    (0x2D27, Valid, ""),
    (0x2D28, Disallowed, ""),
    (0x2D2D, Valid, ""),
    (0x2D2E, Disallowed, ""),
    (0x2D30, Valid, ""),
    (0x2D68, Disallowed, ""),
    (0x2D6F, Mapped, "\u{2d61}"),
    (0x2D70, Valid, ""),
    (0x2D71, Disallowed, ""),
    (0x2D7F, Valid, ""),
    (0x2D97, Disallowed, ""),
    (0x2DA0, Valid, ""),
    (0x2DA7, Disallowed, ""),
    (0x2DA8, Valid, ""),
    (0x2DAF, Disallowed, ""),
    (0x2DB0, Valid, ""),
    (0x2DB7, Disallowed, ""),
    (0x2DB8, Valid, ""),
    (0x2DBF, Disallowed, ""),
    (0x2DC0, Valid, ""),
    (0x2DC7, Disallowed, ""),
    (0x2DC8, Valid, ""),
    (0x2DCF, Disallowed, ""),
    (0x2DD0, Valid, ""),
    (0x2DD7, Disallowed, ""),
    (0x2DD8, Valid, ""),
    (0x2DDF, Disallowed, ""),
    (0x2DE0, Valid, ""),
    (0x2E5E, Disallowed, ""),
    (0x2E80, Valid, ""),
    (0x2E9A, Disallowed, ""),
    (0x2E9B, Valid, ""),
    (0x2E9F, Mapped, "\u{6bcd}"),
    (0x2EA0, Valid, ""),
    (0x2EF3, Mapped, "\u{9f9f}"),
    (0x2EF4, Disallowed, ""),
    (0x2F00, Mapped, "\u{4e00}"),
    (0x2F01, Mapped, "\u{4e28}"),
    (0x2F02, Mapped, "\u{4e36}"),
    (0x2F03, Mapped, "\u{4e3f}"),
    (0x2F04, Mapped, "\u{4e59}"),
    (0x2F05, Mapped, "\u{4e85}"),
    (0x2F06, Mapped, "\u{4e8c}"),
    (0x2F07, Mapped, "\u{4ea0}"),
    (0x2F08, Mapped, "\u{4eba}"),
    (0x2F09, Mapped, "\u{513f}"),
    (0x2F0A, Mapped, "\u{5165}"),
    (0x2F0B, Mapped, "\u{516b}"),
    (0x2F0C, Mapped, "\u{5182}"),
    (0x2F0D, Mapped, "\u{5196}"),
    (0x2F0E, Mapped, "\u{51ab}"),
    (0x2F0F, Mapped, "\u{51e0}"),
    (0x2F10, Mapped, "\u{51f5}"),
    (0x2F11, Mapped, "\u{5200}"),
    (0x2F12, Mapped, "\u{529b}"),
    (0x2F13, Mapped, "\u{52f9}"),
    (0x2F14, Mapped, "\u{5315}"),
    (0x2F15, Mapped, "\u{531a}"),
    (0x2F16, Mapped, "\u{5338}"),
    (0x2F17, Mapped, "\u{5341}"),
    (0x2F18, Mapped, "\u{535c}"),
    (0x2F19, Mapped, "\u{5369}"),
    (0x2F1A, Mapped, "\u{5382}"),
    (0x2F1B, Mapped, "\u{53b6}"),
    (0x2F1C, Mapped, "\u{53c8}"),
    (0x2F1D, Mapped, "\u{53e3}"),
    (0x2F1E, Mapped, "\u{56d7}"),
    (0x2F1F, Mapped, "\u{571f}"),
    (0x2F20, Mapped, "\u{58eb}"),
    (0x2F21, Mapped, "\u{5902}"),
    (0x2F22, Mapped, "\u{590a}"),
    (0x2F23, Mapped, "\u{5915}"),
    (0x2F24, Mapped, "\u{5927}"),
    (0x2F25, Mapped, "\u{5973}"),
    (0x2F26, Mapped, "\u{5b50}"),
    (0x2F27, Mapped, "\u{5b80}"),
    (0x2F28, Mapped, "\u{5bf8}"),
    (0x2F29, Mapped, "\u{5c0f}"),
    (0x2F2A, Mapped, "\u{5c22}"),
    (0x2F2B, Mapped, "\u{5c38}"),
    (0x2F2C, Mapped, "\u{5c6e}"),
    (0x2F2D, Mapped, "\u{5c71}"),
    (0x2F2E, Mapped, "\u{5ddb}"),
    (0x2F2F, Mapped, "\u{5de5}"),
    (0x2F30, Mapped, "\u{5df1}"),
    (0x2F31, Mapped, "\u{5dfe}"),
    (0x2F32, Mapped, "\u{5e72}"),
    (0x2F33, Mapped, "\u{5e7a}"),
    (0x2F34, Mapped, "\u{5e7f}"),
    (0x2F35, Mapped, "\u{5ef4}"),
    (0x2F36, Mapped, "\u{5efe}"),
    (0x2F37, Mapped, "\u{5f0b}"),
    (0x2F38, Mapped, "\u{5f13}"),
    (0x2F39, Mapped, "\u{5f50}"),
    (0x2F3A, Mapped, "\u{5f61}"),
    (0x2F3B, Mapped, "\u{5f73}"),
    (0x2F3C, Mapped, "\u{5fc3}"),
    (0x2F3D, Mapped, "\u{6208}"),
    (0x2F3E, Mapped, "\u{6236}"),
    (0x2F3F, Mapped, "\u{624b}"),
    (0x2F40, Mapped, "\u{652f}"),
    (0x2F41, Mapped, "\u{6534}"),
    (0x2F42, Mapped, "\u{6587}"),
    (0x2F43, Mapped, "\u{6597}"),
    (0x2F44, Mapped, "\u{65a4}"),
    (0x2F45, Mapped, "\u{65b9}"),
    (0x2F46, Mapped, "\u{65e0}"),
    (0x2F47, Mapped, "\u{65e5}"),
    (0x2F48, Mapped, "\u{66f0}"),
    (0x2F49, Mapped, "\u{6708}"),
    (0x2F4A, Mapped, "\u{6728}"),
    (0x2F4B, Mapped, "\u{6b20}"),
    (0x2F4C, Mapped, "\u{6b62}"),
    (0x2F4D, Mapped, "\u{6b79}"),
    (0x2F4E, Mapped, "\u{6bb3}"),
    (0x2F4F, Mapped, "\u{6bcb}"),
    (0x2F50, Mapped, "\u{6bd4}"),
    (0x2F51, Mapped, "\u{6bdb}"),
    (0x2F52, Mapped, "\u{6c0f}"),
    (0x2F53, Mapped, "\u{6c14}"),
    (0x2F54, Mapped, "\u{6c34}"),
    (0x2F55, Mapped, "\u{706b}"),
    (0x2F56, Mapped, "\u{722a}"),
    (0x2F57, Mapped, "\u{7236}"),
    (0x2F58, Mapped, "\u{723b}"),
    (0x2F59, Mapped, "\u{723f}"),
    (0x2F5A, Mapped, "\u{7247}"),
    (0x2F5B, Mapped, "\u{7259}"),
    (0x2F5C, Mapped, "\u{725b}"),
    (0x2F5D, Mapped, "\u{72ac}"),
    (0x2F5E, Mapped, "\u{7384}"),
    (0x2F5F, Mapped, "\u{7389}"),
    (0x2F60, Mapped, "\u{74dc}"),
    (0x2F61, Mapped, "\u{74e6}"),
    (0x2F62, Mapped, "\u{7518}"),
    (0x2F63, Mapped, "\u{751f}"),
    (0x2F64, Mapped, "\u{7528}"),
    (0x2F65, Mapped, "\u{7530}"),
    (0x2F66, Mapped, "\u{758b}"),
    (0x2F67, Mapped, "\u{7592}"),
    (0x2F68, Mapped, "\u{7676}"),
    (0x2F69, Mapped, "\u{767d}"),
    (0x2F6A, Mapped, "\u{76ae}"),
    (0x2F6B, Mapped, "\u{76bf}"),
    (0x2F6C, Mapped, "\u{76ee}"),
    (0x2F6D, Mapped, "\u{77db}"),
    (0x2F6E, Mapped, "\u{77e2}"),
    (0x2F6F, Mapped, "\u{77f3}"),
    (0x2F70, Mapped, "\u{793a}"),
    (0x2F71, Mapped, "\u{79b8}"),
    (0x2F72, Mapped, "\u{79be}"),
    (0x2F73, Mapped, "\u{7a74}"),
    (0x2F74, Mapped, "\u{7acb}"),
    (0x2F75, Mapped, "\u{7af9}"),
    (0x2F76, Mapped, "\u{7c73}"),
    (0x2F77, Mapped, "\u{7cf8}"),
    (0x2F78, Mapped, "\u{7f36}"),
    (0x2F79, Mapped, "\u{7f51}"),
    (0x2F7A, Mapped, "\u{7f8a}"),
    (0x2F7B, Mapped, "\u{7fbd}"),
    (0x2F7C, Mapped, "\u{8001}"),
    (0x2F7D, Mapped, "\u{800c}"),
    (0x2F7E, Mapped, "\u{8012}"),
    (0x2F7F, Mapped, "\u{8033}"),
    (0x2F80, Mapped, "\u{807f}"),
    (0x2F81, Mapped, "\u{8089}"),
    (0x2F82, Mapped, "\u{81e3}"),
    (0x2F83, Mapped, "\u{81ea}"),
    (0x2F84, Mapped, "\u{81f3}"),
    (0x2F85, Mapped, "\u{81fc}"),
    (0x2F86, Mapped, "\u{820c}"),
    (0x2F87, Mapped, "\u{821b}"),
    (0x2F88, Mapped, "\u{821f}"),
    (0x2F89, Mapped, "\u{826e}"),
    (0x2F8A, Mapped, "\u{8272}"),
    (0x2F8B, Mapped, "\u{8278}"),
    (0x2F8C, Mapped, "\u{864d}"),
    (0x2F8D, Mapped, "\u{866b}"),
    (0x2F8E, Mapped, "\u{8840}"),
    (0x2F8F, Mapped, "\u{884c}"),
    (0x2F90, Mapped, "\u{8863}"),
    (0x2F91, Mapped, "\u{897e}"),
    (0x2F92, Mapped, "\u{898b}"),
    (0x2F93, Mapped, "\u{89d2}"),
    (0x2F94, Mapped, "\u{8a00}"),
    (0x2F95, Mapped, "\u{8c37}"),
    (0x2F96, Mapped, "\u{8c46}"),
    (0x2F97, Mapped, "\u{8c55}"),
    (0x2F98, Mapped, "\u{8c78}"),
    (0x2F99, Mapped, "\u{8c9d}"),
    (0x2F9A, Mapped, "\u{8d64}"),
    (0x2F9B, Mapped, "\u{8d70}"),
    (0x2F9C, Mapped, "\u{8db3}"),
    (0x2F9D, Mapped, "\u{8eab}"),
    (0x2F9E, Mapped, "\u{8eca}"),
    (0x2F9F, Mapped, "\u{8f9b}"),
    (0x2FA0, Mapped, "\u{8fb0}"),
    (0x2FA1, Mapped, "\u{8fb5}"),
    (0x2FA2, Mapped, "\u{9091}"),
    (0x2FA3, Mapped, "\u{9149}"),
    (0x2FA4, Mapped, "\u{91c6}"),
    (0x2FA5, Mapped, "\u{91cc}"),
    (0x2FA6, Mapped, "\u{91d1}"),
    (0x2FA7, Mapped, "\u{9577}"),
    (0x2FA8, Mapped, "\u{9580}"),
    (0x2FA9, Mapped, "\u{961c}"),
    (0x2FAA, Mapped, "\u{96b6}"),
    (0x2FAB, Mapped, "\u{96b9}"),
    (0x2FAC, Mapped, "\u{96e8}"),
    (0x2FAD, Mapped, "\u{9751}"),
    (0x2FAE, Mapped, "\u{975e}"),
    (0x2FAF, Mapped, "\u{9762}"),
    (0x2FB0, Mapped, "\u{9769}"),
    (0x2FB1, Mapped, "\u{97cb}"),
    (0x2FB2, Mapped, "\u{97ed}"),
    (0x2FB3, Mapped, "\u{97f3}"),
    (0x2FB4, Mapped, "\u{9801}"),
    (0x2FB5, Mapped, "\u{98a8}"),
    (0x2FB6, Mapped, "\u{98db}"),
    (0x2FB7, Mapped, "\u{98df}"),
    (0x2FB8, Mapped, "\u{9996}"),
    (0x2FB9, Mapped, "\u{9999}"),
    (0x2FBA, Mapped, "\u{99ac}"),
    (0x2FBB, Mapped, "\u{9aa8}"),
    (0x2FBC, Mapped, "\u{9ad8}"),
    (0x2FBD, Mapped, "\u{9adf}"),
    (0x2FBE, Mapped, "\u{9b25}"),
    (0x2FBF, Mapped, "\u{9b2f}"),
    (0x2FC0, Mapped, "\u{9b32}"),
    (0x2FC1, Mapped, "\u{9b3c}"),
    (0x2FC2, Mapped, "\u{9b5a}"),
    (0x2FC3, Mapped, "\u{9ce5}"),
    (0x2FC4, Mapped, "\u{9e75}"),
    (0x2FC5, Mapped, "\u{9e7f}"),
    (0x2FC6, Mapped, "\u{9ea5}"),
    (0x2FC7, Mapped, "\u{9ebb}"),
    (0x2FC8, Mapped, "\u{9ec3}"),
    (0x2FC9, Mapped, "\u{9ecd}"),
    (0x2FCA, Mapped, "\u{9ed1}"),
    (0x2FCB, Mapped, "\u{9ef9}"),
    (0x2FCC, Mapped, "\u{9efd}"),
    (0x2FCD, Mapped, "\u{9f0e}"),
    (0x2FCE, Mapped, "\u{9f13}"),
    (0x2FCF, Mapped, "\u{9f20}"),
    (0x2FD0, Mapped, "\u{9f3b}"),
    (0x2FD1, Mapped, "\u{9f4a}"),
    (0x2FD2, Mapped, "\u{9f52}"),
    (0x2FD3, Mapped, "\u{9f8d}"),
    (0x2FD4, Mapped, "\u{9f9c}"),
    (0x2FD5, Mapped, "\u{9fa0}"),
    (0x2FD6, Disallowed, ""),
    (0x3000, Mapped, " "),
    (0x3001, Valid, ""),
    (0x3002, Mapped, "."),
    (0x3003, Valid, ""),
    (0x3036, Mapped, "\u{3012}"),
    (0x3037, Valid, ""),
    (0x3038, Mapped, "\u{5341}"),
    (0x3039, Mapped, "\u{5344}"),
    (0x303A, Mapped, "\u{5345}"),
    (0x303B, Valid, ""),
    (0x3040, Disallowed, ""),
    (0x3041, Valid, ""),
    (0x3097, Disallowed, ""),
    (0x3099, Valid, ""),
    (0x309B, Mapped, " \u{3099}"),
    (0x309C, Mapped, " \u{309a}"),
    (0x309D, Valid, ""),
    (0x309F, Mapped, "\u{3088}\u{308a}"),
    (0x30A0, Valid, ""),
    (0x30FF, Mapped, "\u{30b3}\u{30c8}"),
    (0x3100, Disallowed, ""),
    (0x3105, Valid, ""),
    (0x3130, Disallowed, ""),
    (0x3131, Mapped, "\u{1100}"),
    (0x3132, Mapped, "\u{1101}"),
    (0x3133, Mapped, "\u{11aa}"),
    (0x3134, Mapped, "\u{1102}"),
    (0x3135, Mapped, "\u{11ac}"),
    (0x3136, Mapped, "\u{11ad}"),
    (0x3137, Mapped, "\u{1103}"),
    (0x3138, Mapped, "\u{1104}"),
    (0x3139, Mapped, "\u{1105}"),
    (0x313A, Mapped, "\u{11b0}"),
    (0x313B, Mapped, "\u{11b1}"),
    (0x313C, Mapped, "\u{11b2}"),
    (0x313D, Mapped, "\u{11b3}"),
    (0x313E, Mapped, "\u{11b4}"),
    (0x313F, Mapped, "\u{11b5}"),
    (0x3140, Mapped, "\u{111a}"),
    (0x3141, Mapped, "\u{1106}"),
    (0x3142, Mapped, "\u{1107}"),
    (0x3143, Mapped, "\u{1108}"),
    (0x3144, Mapped, "\u{1121}"),
    (0x3145, Mapped, "\u{1109}"),
    (0x3146, Mapped, "\u{110a}"),
    (0x3147, Mapped, "\u{110b}"),
    (0x3148, Mapped, "\u{110c}"),
    (0x3149, Mapped, "\u{110d}"),
    (0x314A, Mapped, "\u{110e}"),
    (0x314B, Mapped, "\u{110f}"),
    (0x314C, Mapped, "\u{1110}"),
    (0x314D, Mapped, "\u{1111}"),
    (0x314E, Mapped, "\u{1112}"),
    (0x314F, Mapped, "\u{1161}"),
    (0x3150, Mapped, "\u{1162}"),
    (0x3151, Mapped, "\u{1163}"),
    (0x3152, Mapped, "\u{1164}"),
    (0x3153, Mapped, "\u{1165}"),
    (0x3154, Mapped, "\u{1166}"),
    (0x3155, Mapped, "\u{1167}"),
    (0x3156, Mapped, "\u{1168}"),
    (0x3157, Mapped, "\u{1169}"),
    (0x3158, Mapped, "\u{116a}"),
    (0x3159, Mapped, "\u{116b}"),
    (0x315A, Mapped, "\u{116c}"),
    (0x315B, Mapped, "\u{116d}"),
    (0x315C, Mapped, "\u{116e}"),
    (0x315D, Mapped, "\u{116f}"),
    (0x315E, Mapped, "\u{1170}"),
    (0x315F, Mapped, "\u{1171}"),
    (0x3160, Mapped, "\u{1172}"),
    (0x3161, Mapped, "\u{1173}"),
    (0x3162, Mapped, "\u{1174}"),
    (0x3163, Mapped, "\u{1175}"),
    (0x3164, Ignored, ""),
    (0x3165, Mapped, "\u{1114}"),
    (0x3166, Mapped, "\u{1115}"),
    (0x3167, Mapped, "\u{11c7}"),
    (0x3168, Mapped, "\u{11c8}"),
    (0x3169, Mapped, "\u{11cc}"),
    (0x316A, Mapped, "\u{11ce}"),
    (0x316B, Mapped, "\u{11d3}"),
    (0x316C, Mapped, "\u{11d7}"),
    (0x316D, Mapped, "\u{11d9}"),
    (0x316E, Mapped, "\u{111c}"),
    (0x316F, Mapped, "\u{11dd}"),
    (0x3170, Mapped, "\u{11df}"),
    (0x3171, Mapped, "\u{111d}"),
    (0x3172, Mapped, "\u{111e}"),
    (0x3173, Mapped, "\u{1120}"),
    (0x3174, Mapped, "\u{1122}"),
    (0x3175, Mapped, "\u{1123}"),
    (0x3176, Mapped, "\u{1127}"),
    (0x3177, Mapped, "\u{1129}"),
    (0x3178, Mapped, "\u{112b}"),
    (0x3179, Mapped, "\u{112c}"),
    (0x317A, Mapped, "\u{112d}"),
    (0x317B, Mapped, "\u{112e}"),
    (0x317C, Mapped, "\u{112f}"),
    (0x317D, Mapped, "\u{1132}"),
    (0x317E, Mapped, "\u{1136}"),
    (0x317F, Mapped, "\u{1140}"),
    (0x3180, Mapped, "\u{1147}"),
    (0x3181, Mapped, "\u{114c}"),
    (0x3182, Mapped, "\u{11f1}"),
    (0x3183, Mapped, "\u{11f2}"),
    (0x3184, Mapped, "\u{1157}"),
    (0x3185, Mapped, "\u{1158}"),
    (0x3186, Mapped, "\u{1159}"),
    (0x3187, Mapped, "\u{1184}"),
    (0x3188, Mapped, "\u{1185}"),
    (0x3189, Mapped, "\u{1188}"),
    (0x318A, Mapped, "\u{1191}"),
    (0x318B, Mapped, "\u{1192}"),
    (0x318C, Mapped, "\u{1194}"),
    (0x318D, Mapped, "\u{119e}"),
    (0x318E, Mapped, "\u{11a1}"),
    (0x318F, Disallowed, ""),
    (0x3190, Valid, ""),
    (0x3192, Mapped, "\u{4e00}"),
    (0x3193, Mapped, "\u{4e8c}"),
    (0x3194, Mapped, "\u{4e09}"),
    (0x3195, Mapped, "\u{56db}"),
    (0x3196, Mapped, "\u{4e0a}"),
    (0x3197, Mapped, "\u{4e2d}"),
    (0x3198, Mapped, "\u{4e0b}"),
    (0x3199, Mapped, "\u{7532}"),
    (0x319A, Mapped, "\u{4e59}"),
    (0x319B, Mapped, "\u{4e19}"),
    (0x319C, Mapped, "\u{4e01}"),
    (0x319D, Mapped, "\u{5929}"),
    (0x319E, Mapped, "\u{5730}"),
    (0x319F, Mapped, "\u{4eba}"),
    (0x31A0, Valid, ""),
    (0x31E6, Disallowed, ""),
    (0x31F0, Valid, ""),
    (0x3200, Mapped, "(\u{1100})"),
    (0x3201, Mapped, "(\u{1102})"),
    (0x3202, Mapped, "(\u{1103})"),
    (0x3203, Mapped, "(\u{1105})"),
    (0x3204, Mapped, "(\u{1106})"),
    (0x3205, Mapped, "(\u{1107})"),
    (0x3206, Mapped, "(\u{1109})"),
    (0x3207, Mapped, "(\u{110b})"),
    (0x3208, Mapped, "(\u{110c})"),
    (0x3209, Mapped, "(\u{110e})"),
    (0x320A, Mapped, "(\u{110f})"),
    (0x320B, Mapped, "(\u{1110})"),
    (0x320C, Mapped, "(\u{1111})"),
    (0x320D, Mapped, "(\u{1112})"),
    (0x320E, Mapped, "(\u{ac00})"),
    (0x320F, Mapped, "(\u{b098})"),
    (0x3210, Mapped, "(\u{b2e4})"),
    (0x3211, Mapped, "(\u{b77c})"),
    (0x3212, Mapped, "(\u{b9c8})"),
    (0x3213, Mapped, "(\u{bc14})"),
    (0x3214, Mapped, "(\u{c0ac})"),
    (0x3215, Mapped, "(\u{c544})"),
    (0x3216, Mapped, "(\u{c790})"),
    (0x3217, Mapped, "(\u{cc28})"),
    (0x3218, Mapped, "(\u{ce74})"),
    (0x3219, Mapped, "(\u{d0c0})"),
    (0x321A, Mapped, "(\u{d30c})"),
    (0x321B, Mapped, "(\u{d558})"),
    (0x321C, Mapped, "(\u{c8fc})"),
    (0x321D, Mapped, "(\u{c624}\u{c804})"),
    (0x321E, Mapped, "(\u{c624}\u{d6c4})"),
    (0x321F, Disallowed, ""),
    (0x3220, Mapped, "(\u{4e00})"),
    (0x3221, Mapped, "(\u{4e8c})"),
    (0x3222, Mapped, "(\u{4e09})"),
    (0x3223, Mapped, "(\u{56db})"),
    (0x3224, Mapped, "(\u{4e94})"),
    (0x3225, Mapped, "(\u{516d})"),
    (0x3226, Mapped, "(\u{4e03})"),
    (0x3227, Mapped, "(\u{516b})"),
    (0x3228, Mapped, "(\u{4e5d})"),
    (0x3229, Mapped, "(\u{5341})"),
    (0x322A, Mapped, "(\u{6708})"),
    (0x322B, Mapped, "(\u{706b})"),
    (0x322C, Mapped, "(\u{6c34})"),
    (0x322D, Mapped, "(\u{6728})"),
    (0x322E, Mapped, "(\u{91d1})"),
    (0x322F, Mapped, "(\u{571f})"),
    (0x3230, Mapped, "(\u{65e5})"),
    (0x3231, Mapped, "(\u{682a})"),
    (0x3232, Mapped, "(\u{6709})"),
    (0x3233, Mapped, "(\u{793e})"),
    (0x3234, Mapped, "(\u{540d})"),
    (0x3235, Mapped, "(\u{7279})"),
    (0x3236, Mapped, "(\u{8ca1})"),
    (0x3237, Mapped, "(\u{795d})"),
    (0x3238, Mapped, "(\u{52b4})"),
    (0x3239, Mapped, "(\u{4ee3})"),
    (0x323A, Mapped, "(\u{547c})"),
    (0x323B, Mapped, "(\u{5b66})"),
    (0x323C, Mapped, "(\u{76e3})"),
    (0x323D, Mapped, "(\u{4f01})"),
    (0x323E, Mapped, "(\u{8cc7})"),
    (0x323F, Mapped, "(\u{5354})"),
    (0x3240, Mapped, "(\u{796d})"),
    (0x3241, Mapped, "(\u{4f11})"),
    (0x3242, Mapped, "(\u{81ea})"),
    (0x3243, Mapped, "(\u{81f3})"),
    (0x3244, Mapped, "\u{554f}"),
    (0x3245, Mapped, "\u{5e7c}"),
    (0x3246, Mapped, "\u{6587}"),
    (0x3247, Mapped, "\u{7b8f}"),
    (0x3248, Valid, ""),
    (0x3250, Mapped, "pte"),
    (0x3251, Mapped, "21"),
    (0x3252, Mapped, "22"),
    (0x3253, Mapped, "23"),
    (0x3254, Mapped, "24"),
    (0x3255, Mapped, "25"),
    (0x3256, Mapped, "26"),
    (0x3257, Mapped, "27"),
    (0x3258, Mapped, "28"),
    (0x3259, Mapped, "29"),
    (0x325A, Mapped, "30"),
    (0x325B, Mapped, "31"),
    (0x325C, Mapped, "32"),
    (0x325D, Mapped, "33"),
    (0x325E, Mapped, "34"),
    (0x325F, Mapped, "35"),
    (0x3260, Mapped, "\u{1100}"),
    (0x3261, Mapped, "\u{1102}"),
    (0x3262, Mapped, "\u{1103}"),
    (0x3263, Mapped, "\u{1105}"),
    (0x3264, Mapped, "\u{1106}"),
    (0x3265, Mapped, "\u{1107}"),
    (0x3266, Mapped, "\u{1109}"),
    (0x3267, Mapped, "\u{110b}"),
    (0x3268, Mapped, "\u{110c}"),
    (0x3269, Mapped, "\u{110e}"),
    (0x326A, Mapped, "\u{110f}"),
    (0x326B, Mapped, "\u{1110}"),
    (0x326C, Mapped, "\u{1111}"),
    (0x326D, Mapped, "\u{1112}"),
    (0x326E, Mapped, "\u{ac00}"),
    (0x326F, Mapped, "\u{b098}"),
    (0x3270, Mapped, "\u{b2e4}"),
    (0x3271, Mapped, "\u{b77c}"),
    (0x3272, Mapped, "\u{b9c8}"),
    (0x3273, Mapped, "\u{bc14}"),
    (0x3274, Mapped, "\u{c0ac}"),
    (0x3275, Mapped, "\u{c544}"),
    (0x3276, Mapped, "\u{c790}"),
    (0x3277, Mapped, "\u{cc28}"),
    (0x3278, Mapped, "\u{ce74}"),
    (0x3279, Mapped, "\u{d0c0}"),
    (0x327A, Mapped, "\u{d30c}"),
    (0x327B, Mapped, "\u{d558}"),
    (0x327C, Mapped, "\u{cc38}\u{ace0}"),
    (0x327D, Mapped, "\u{c8fc}\u{c758}"),
    (0x327E, Mapped, "\u{c6b0}"),
    (0x327F, Valid, ""),
    (0x3280, Mapped, "\u{4e00}"),
    (0x3281, Mapped, "\u{4e8c}"),
    (0x3282, Mapped, "\u{4e09}"),
    (0x3283, Mapped, "\u{56db}"),
    (0x3284, Mapped, "\u{4e94}"),
    (0x3285, Mapped, "\u{516d}"),
    (0x3286, Mapped, "\u{4e03}"),
    (0x3287, Mapped, "\u{516b}"),
    (0x3288, Mapped, "\u{4e5d}"),
    (0x3289, Mapped, "\u{5341}"),
    (0x328A, Mapped, "\u{6708}"),
    (0x328B, Mapped, "\u{706b}"),
    (0x328C, Mapped, "\u{6c34}"),
    (0x328D, Mapped, "\u{6728}"),
    (0x328E, Mapped, "\u{91d1}"),
    (0x328F, Mapped, "\u{571f}"),
    (0x3290, Mapped, "\u{65e5}"),
    (0x3291, Mapped, "\u{682a}"),
    (0x3292, Mapped, "\u{6709}"),
    (0x3293, Mapped, "\u{793e}"),
    (0x3294, Mapped, "\u{540d}"),
    (0x3295, Mapped, "\u{7279}"),
    (0x3296, Mapped, "\u{8ca1}"),
    (0x3297, Mapped, "\u{795d}"),
    (0x3298, Mapped, "\u{52b4}"),
    (0x3299, Mapped, "\u{79d8}"),
    (0x329A, Mapped, "\u{7537}"),
    (0x329B, Mapped, "\u{5973}"),
    (0x329C, Mapped, "\u{9069}"),
    (0x329D, Mapped, "\u{512a}"),
    (0x329E, Mapped, "\u{5370}"),
    (0x329F, Mapped, "\u{6ce8}"),
    (0x32A0, Mapped, "\u{9805}"),
    (0x32A1, Mapped, "\u{4f11}"),
    (0x32A2, Mapped, "\u{5199}"),
    (0x32A3, Mapped, "\u{6b63}"),
    (0x32A4, Mapped, "\u{4e0a}"),
    (0x32A5, Mapped, "\u{4e2d}"),
    (0x32A6, Mapped, "\u{4e0b}"),
    (0x32A7, Mapped, "\u{5de6}"),
    (0x32A8, Mapped, "\u{53f3}"),
    (0x32A9, Mapped, "\u{533b}"),
    (0x32AA, Mapped, "\u{5b97}"),
    (0x32AB, Mapped, "\u{5b66}"),
    (0x32AC, Mapped, "\u{76e3}"),
    (0x32AD, Mapped, "\u{4f01}"),
    (0x32AE, Mapped, "\u{8cc7}"),
    (0x32AF, Mapped, "\u{5354}"),
    (0x32B0, Mapped, "\u{591c}"),
    (0x32B1, Mapped, "36"),
    (0x32B2, Mapped, "37"),
    (0x32B3, Mapped, "38"),
    (0x32B4, Mapped, "39"),
    (0x32B5, Mapped, "40"),
    (0x32B6, Mapped, "41"),
    (0x32B7, Mapped, "42"),
    (0x32B8, Mapped, "43"),
    (0x32B9, Mapped, "44"),
    (0x32BA, Mapped, "45"),
    (0x32BB, Mapped, "46"),
    (0x32BC, Mapped, "47"),
    (0x32BD, Mapped, "48"),
    (0x32BE, Mapped, "49"),
    (0x32BF, Mapped, "50"),
    (0x32C0, Mapped, "1\u{6708}"),
    (0x32C1, Mapped, "2\u{6708}"),
    (0x32C2, Mapped, "3\u{6708}"),
    (0x32C3, Mapped, "4\u{6708}"),
    (0x32C4, Mapped, "5\u{6708}"),
    (0x32C5, Mapped, "6\u{6708}"),
    (0x32C6, Mapped, "7\u{6708}"),
    (0x32C7, Mapped, "8\u{6708}"),
    (0x32C8, Mapped, "9\u{6708}"),
    (0x32C9, Mapped, "10\u{6708}"),
    (0x32CA, Mapped, "11\u{6708}"),
    (0x32CB, Mapped, "12\u{6708}"),
    (0x32CC, Mapped, "hg"),
    (0x32CD, Mapped, "erg"),
    (0x32CE, Mapped, "ev"),
    (0x32CF, Mapped, "ltd"),
    (0x32D0, Mapped, "\u{30a2}"),
    (0x32D1, Mapped, "\u{30a4}"),
    (0x32D2, Mapped, "\u{30a6}"),
    (0x32D3, Mapped, "\u{30a8}"),
    (0x32D4, Mapped, "\u{30aa}"),
    (0x32D5, Mapped, "\u{30ab}"),
    (0x32D6, Mapped, "\u{30ad}"),
    (0x32D7, Mapped, "\u{30af}"),
    (0x32D8, Mapped, "\u{30b1}"),
    (0x32D9, Mapped, "\u{30b3}"),
    (0x32DA, Mapped, "\u{30b5}"),
    (0x32DB, Mapped, "\u{30b7}"),
    (0x32DC, Mapped, "\u{30b9}"),
    (0x32DD, Mapped, "\u{30bb}"),
    (0x32DE, Mapped, "\u{30bd}"),
    (0x32DF, Mapped, "\u{30bf}"),
    (0x32E0, Mapped, "\u{30c1}"),
    (0x32E1, Mapped, "\u{30c4}"),
    (0x32E2, Mapped, "\u{30c6}"),
    (0x32E3, Mapped, "\u{30c8}"),
    (0x32E4, Mapped, "\u{30ca}"),
    (0x32E5, Mapped, "\u{30cb}"),
    (0x32E6, Mapped, "\u{30cc}"),
    (0x32E7, Mapped, "\u{30cd}"),
    (0x32E8, Mapped, "\u{30ce}"),
    (0x32E9, Mapped, "\u{30cf}"),
    (0x32EA, Mapped, "\u{30d2}"),
    (0x32EB, Mapped, "\u{30d5}"),
    (0x32EC, Mapped, "\u{30d8}"),
    (0x32ED, Mapped, "\u{30db}"),
    (0x32EE, Mapped, "\u{30de}"),
    (0x32EF, Mapped, "\u{30df}"),
    (0x32F0, Mapped, "\u{30e0}"),
    (0x32F1, Mapped, "\u{30e1}"),
    (0x32F2, Mapped, "\u{30e2}"),
    (0x32F3, Mapped, "\u{30e4}"),
    (0x32F4, Mapped, "\u{30e6}"),
    (0x32F5, Mapped, "\u{30e8}"),
    (0x32F6, Mapped, "\u{30e9}"),
    (0x32F7, Mapped, "\u{30ea}"),
    (0x32F8, Mapped, "\u{30eb}"),
    (0x32F9, Mapped, "\u{30ec}"),
    (0x32FA, Mapped, "\u{30ed}"),
    (0x32FB, Mapped, "\u{30ef}"),
    (0x32FC, Mapped, "\u{30f0}"),
    (0x32FD, Mapped, "\u{30f1}"),
    (0x32FE, Mapped, "\u{30f2}"),
    (0x32FF, Mapped, "\u{4ee4}\u{548c}"),
    (0x3300, Mapped, "\u{30a2}\u{30d1}\u{30fc}\u{30c8}"),
    (0x3301, Mapped, "\u{30a2}\u{30eb}\u{30d5}\u{30a1}"),
    (0x3302, Mapped, "\u{30a2}\u{30f3}\u{30da}\u{30a2}"),
    (0x3303, Mapped, "\u{30a2}\u{30fc}\u{30eb}"),
    (0x3304, Mapped, "\u{30a4}\u{30cb}\u{30f3}\u{30b0}"),
    (0x3305, Mapped, "\u{30a4}\u{30f3}\u{30c1}"),
    (0x3306, Mapped, "\u{30a6}\u{30a9}\u{30f3}"),
    (0x3307, Mapped, "\u{30a8}\u{30b9}\u{30af}\u{30fc}\u{30c9}"),
    (0x3308, Mapped, "\u{30a8}\u{30fc}\u{30ab}\u{30fc}"),
    (0x3309, Mapped, "\u{30aa}\u{30f3}\u{30b9}"),
    (0x330A, Mapped, "\u{30aa}\u{30fc}\u{30e0}"),
    (0x330B, Mapped, "\u{30ab}\u{30a4}\u{30ea}"),
    (0x330C, Mapped, "\u{30ab}\u{30e9}\u{30c3}\u{30c8}"),
    (0x330D, Mapped, "\u{30ab}\u{30ed}\u{30ea}\u{30fc}"),
    (0x330E, Mapped, "\u{30ac}\u{30ed}\u{30f3}"),
    (0x330F, Mapped, "\u{30ac}\u{30f3}\u{30de}"),
    (0x3310, Mapped, "\u{30ae}\u{30ac}"),
    (0x3311, Mapped, "\u{30ae}\u{30cb}\u{30fc}"),
    (0x3312, Mapped, "\u{30ad}\u{30e5}\u{30ea}\u{30fc}"),
    (0x3313, Mapped, "\u{30ae}\u{30eb}\u{30c0}\u{30fc}"),
    (0x3314, Mapped, "\u{30ad}\u{30ed}"),
    (0x3315, Mapped, "\u{30ad}\u{30ed}\u{30b0}\u{30e9}\u{30e0}"),
    (0x3316, Mapped, "\u{30ad}\u{30ed}\u{30e1}\u{30fc}\u{30c8}\u{30eb}"),
    (0x3317, Mapped, "\u{30ad}\u{30ed}\u{30ef}\u{30c3}\u{30c8}"),
    (0x3318, Mapped, "\u{30b0}\u{30e9}\u{30e0}"),
    (0x3319, Mapped, "\u{30b0}\u{30e9}\u{30e0}\u{30c8}\u{30f3}"),
    (0x331A, Mapped, "\u{30af}\u{30eb}\u{30bc}\u{30a4}\u{30ed}"),
    (0x331B, Mapped, "\u{30af}\u{30ed}\u{30fc}\u{30cd}"),
    (0x331C, Mapped, "\u{30b1}\u{30fc}\u{30b9}"),
    (0x331D, Mapped, "\u{30b3}\u{30eb}\u{30ca}"),
    (0x331E, Mapped, "\u{30b3}\u{30fc}\u{30dd}"),
    (0x331F, Mapped, "\u{30b5}\u{30a4}\u{30af}\u{30eb}"),
    (0x3320, Mapped, "\u{30b5}\u{30f3}\u{30c1}\u{30fc}\u{30e0}"),
    (0x3321, Mapped, "\u{30b7}\u{30ea}\u{30f3}\u{30b0}"),
    (0x3322, Mapped, "\u{30bb}\u{30f3}\u{30c1}"),
    (0x3323, Mapped, "\u{30bb}\u{30f3}\u{30c8}"),
    (0x3324, Mapped, "\u{30c0}\u{30fc}\u{30b9}"),
    (0x3325, Mapped, "\u{30c7}\u{30b7}"),
    (0x3326, Mapped, "\u{30c9}\u{30eb}"),
    (0x3327, Mapped, "\u{30c8}\u{30f3}"),
    (0x3328, Mapped, "\u{30ca}\u{30ce}"),
    (0x3329, Mapped, "\u{30ce}\u{30c3}\u{30c8}"),
    (0x332A, Mapped, "\u{30cf}\u{30a4}\u{30c4}"),
    (0x332B, Mapped, "\u{30d1}\u{30fc}\u{30bb}\u{30f3}\u{30c8}"),
    (0x332C, Mapped, "\u{30d1}\u{30fc}\u{30c4}"),
    (0x332D, Mapped, "\u{30d0}\u{30fc}\u{30ec}\u{30eb}"),
    (0x332E, Mapped, "\u{30d4}\u{30a2}\u{30b9}\u{30c8}\u{30eb}"),
    (0x332F, Mapped, "\u{30d4}\u{30af}\u{30eb}"),
    (0x3330, Mapped, "\u{30d4}\u{30b3}"),
    (0x3331, Mapped, "\u{30d3}\u{30eb}"),
    (0x3332, Mapped, "\u{30d5}\u{30a1}\u{30e9}\u{30c3}\u{30c9}"),
    (0x3333, Mapped, "\u{30d5}\u{30a3}\u{30fc}\u{30c8}"),
    (0x3334, Mapped, "\u{30d6}\u{30c3}\u{30b7}\u{30a7}\u{30eb}"),
    (0x3335, Mapped, "\u{30d5}\u{30e9}\u{30f3}"),
    (0x3336, Mapped, "\u{30d8}\u{30af}\u{30bf}\u{30fc}\u{30eb}"),
    (0x3337, Mapped, "\u{30da}\u{30bd}"),
    (0x3338, Mapped, "\u{30da}\u{30cb}\u{30d2}"),
    (0x3339, Mapped, "\u{30d8}\u{30eb}\u{30c4}"),
    (0x333A, Mapped, "\u{30da}\u{30f3}\u{30b9}"),
    (0x333B, Mapped, "\u{30da}\u{30fc}\u{30b8}"),
    (0x333C, Mapped, "\u{30d9}\u{30fc}\u{30bf}"),
    (0x333D, Mapped, "\u{30dd}\u{30a4}\u{30f3}\u{30c8}"),
    (0x333E, Mapped, "\u{30dc}\u{30eb}\u{30c8}"),
    (0x333F, Mapped, "\u{30db}\u{30f3}"),
    (0x3340, Mapped, "\u{30dd}\u{30f3}\u{30c9}"),
    (0x3341, Mapped, "\u{30db}\u{30fc}\u{30eb}"),
    (0x3342, Mapped, "\u{30db}\u{30fc}\u{30f3}"),
    (0x3343, Mapped, "\u{30de}\u{30a4}\u{30af}\u{30ed}"),
    (0x3344, Mapped, "\u{30de}\u{30a4}\u{30eb}"),
    (0x3345, Mapped, "\u{30de}\u{30c3}\u{30cf}"),
    (0x3346, Mapped, "\u{30de}\u{30eb}\u{30af}"),
    (0x3347, Mapped, "\u{30de}\u{30f3}\u{30b7}\u{30e7}\u{30f3}"),
    (0x3348, Mapped, "\u{30df}\u{30af}\u{30ed}\u{30f3}"),
    (0x3349, Mapped, "\u{30df}\u{30ea}"),
    (0x334A, Mapped, "\u{30df}\u{30ea}\u{30d0}\u{30fc}\u{30eb}"),
    (0x334B, Mapped, "\u{30e1}\u{30ac}"),
    (0x334C, Mapped, "\u{30e1}\u{30ac}\u{30c8}\u{30f3}"),
    (0x334D, Mapped, "\u{30e1}\u{30fc}\u{30c8}\u{30eb}"),
    (0x334E, Mapped, "\u{30e4}\u{30fc}\u{30c9}"),
    (0x334F, Mapped, "\u{30e4}\u{30fc}\u{30eb}"),
    (0x3350, Mapped, "\u{30e6}\u{30a2}\u{30f3}"),
    (0x3351, Mapped, "\u{30ea}\u{30c3}\u{30c8}\u{30eb}"),
    (0x3352, Mapped, "\u{30ea}\u{30e9}"),
    (0x3353, Mapped, "\u{30eb}\u{30d4}\u{30fc}"),
    (0x3354, Mapped, "\u{30eb}\u{30fc}\u{30d6}\u{30eb}"),
    (0x3355, Mapped, "\u{30ec}\u{30e0}"),
    (0x3356, Mapped, "\u{30ec}\u{30f3}\u{30c8}\u{30b2}\u{30f3}"),
    (0x3357, Mapped, "\u{30ef}\u{30c3}\u{30c8}"),
    (0x3358, Mapped, "0\u{70b9}"),
    (0x3359, Mapped, "1\u{70b9}"),
    (0x335A, Mapped, "2\u{70b9}"),
    (0x335B, Mapped, "3\u{70b9}"),
    (0x335C, Mapped, "4\u{70b9}"),
    (0x335D, Mapped, "5\u{70b9}"),
    (0x335E, Mapped, "6\u{70b9}"),
    (0x335F, Mapped, "7\u{70b9}"),
    (0x3360, Mapped, "8\u{70b9}"),
    (0x3361, Mapped, "9\u{70b9}"),
    (0x3362, Mapped, "10\u{70b9}"),
    (0x3363, Mapped, "11\u{70b9}"),
    (0x3364, Mapped, "12\u{70b9}"),
    (0x3365, Mapped, "13\u{70b9}"),
    (0x3366, Mapped, "14\u{70b9}"),
    (0x3367, Mapped, "15\u{70b9}"),
    (0x3368, Mapped, "16\u{70b9}"),
    (0x3369, Mapped, "17\u{70b9}"),
    (0x336A, Mapped, "18\u{70b9}"),
    (0x336B, Mapped, "19\u{70b9}"),
    (0x336C, Mapped, "20\u{70b9}"),
    (0x336D, Mapped, "21\u{70b9}"),
    (0x336E, Mapped, "22\u{70b9}"),
    (0x336F, Mapped, "23\u{70b9}"),
    (0x3370, Mapped, "24\u{70b9}"),
    (0x3371, Mapped, "hpa"),
    (0x3372, Mapped, "da"),
    (0x3373, Mapped, "au"),
    (0x3374, Mapped, "bar"),
    (0x3375, Mapped, "ov"),
    (0x3376, Mapped, "pc"),
    (0x3377, Mapped, "dm"),
    (0x3378, Mapped, "dm2"),
    (0x3379, Mapped, "dm3"),
    (0x337A, Mapped, "iu"),
    (0x337B, Mapped, "\u{5e73}\u{6210}"),
    (0x337C, Mapped, "\u{662d}\u{548c}"),
    (0x337D, Mapped, "\u{5927}\u{6b63}"),
    (0x337E, Mapped, "\u{660e}\u{6cbb}"),
    (0x337F, Mapped, "\u{682a}\u{5f0f}\u{4f1a}\u{793e}"),
    (0x3380, Mapped, "pa"),
    (0x3381, Mapped, "na"),
    (0x3382, Mapped, "\u{3bc}a"),
    (0x3383, Mapped, "ma"),
    (0x3384, Mapped, "ka"),
    (0x3385, Mapped, "kb"),
    (0x3386, Mapped, "mb"),
    (0x3387, Mapped, "gb"),
    (0x3388, Mapped, "cal"),
    (0x3389, Mapped, "kcal"),
    (0x338A, Mapped, "pf"),
    (0x338B, Mapped, "nf"),
    (0x338C, Mapped, "\u{3bc}f"),
    (0x338D, Mapped, "\u{3bc}g"),
    (0x338E, Mapped, "mg"),
    (0x338F, Mapped, "kg"),
    (0x3390, Mapped, "hz"),
    (0x3391, Mapped, "khz"),
    (0x3392, Mapped, "mhz"),
    (0x3393, Mapped, "ghz"),
    (0x3394, Mapped, "thz"),
    (0x3395, Mapped, "\u{3bc}l"),
    (0x3396, Mapped, "ml"),
    (0x3397, Mapped, "dl"),
    (0x3398, Mapped, "kl"),
    (0x3399, Mapped, "fm"),
    (0x339A, Mapped, "nm"),
    (0x339B, Mapped, "\u{3bc}m"),
    (0x339C, Mapped, "mm"),
    (0x339D, Mapped, "cm"),
    (0x339E, Mapped, "km"),
    (0x339F, Mapped, "mm2"),
    (0x33A0, Mapped, "cm2"),
    (0x33A1, Mapped, "m2"),
    (0x33A2, Mapped, "km2"),
    (0x33A3, Mapped, "mm3"),
    (0x33A4, Mapped, "cm3"),
    (0x33A5, Mapped, "m3"),
    (0x33A6, Mapped, "km3"),
    (0x33A7, Mapped, "m\u{2215}s"),
    (0x33A8, Mapped, "m\u{2215}s2"),
    (0x33A9, Mapped, "pa"),
    (0x33AA, Mapped, "kpa"),
    (0x33AB, Mapped, "mpa"),
    (0x33AC, Mapped, "gpa"),
    (0x33AD, Mapped, "rad"),
    (0x33AE, Mapped, "rad\u{2215}s"),
    (0x33AF, Mapped, "rad\u{2215}s2"),
    (0x33B0, Mapped, "ps"),
    (0x33B1, Mapped, "ns"),
    (0x33B2, Mapped, "\u{3bc}s"),
    (0x33B3, Mapped, "ms"),
    (0x33B4, Mapped, "pv"),
    (0x33B5, Mapped, "nv"),
    (0x33B6, Mapped, "\u{3bc}v"),
    (0x33B7, Mapped, "mv"),
    (0x33B8, Mapped, "kv"),
    (0x33B9, Mapped, "mv"),
    (0x33BA, Mapped, "pw"),
    (0x33BB, Mapped, "nw"),
    (0x33BC, Mapped, "\u{3bc}w"),
    (0x33BD, Mapped, "mw"),
    (0x33BE, Mapped, "kw"),
    (0x33BF, Mapped, "mw"),
    (0x33C0, Mapped, "k\u{3c9}"),
    (0x33C1, Mapped, "m\u{3c9}"),
    (0x33C2, Disallowed, ""),
    (0x33C3, Mapped, "bq"),
    (0x33C4, Mapped, "cc"),
    (0x33C5, Mapped, "cd"),
    (0x33C6, Mapped, "c\u{2215}kg"),
    (0x33C7, Disallowed, ""),
    (0x33C8, Mapped, "db"),
    (0x33C9, Mapped, "gy"),
    (0x33CA, Mapped, "ha"),
    (0x33CB, Mapped, "hp"),
    (0x33CC, Mapped, "in"),
    (0x33CD, Mapped, "kk"),
    (0x33CE, Mapped, "km"),
    (0x33CF, Mapped, "kt"),
    (0x33D0, Mapped, "lm"),
    (0x33D1, Mapped, "ln"),
    (0x33D2, Mapped, "log"),
    (0x33D3, Mapped, "lx"),
    (0x33D4, Mapped, "mb"),
    (0x33D5, Mapped, "mil"),
    (0x33D6, Mapped, "mol"),
    (0x33D7, Mapped, "ph"),
    (0x33D8, Disallowed, ""),
    (0x33D9, Mapped, "ppm"),
    (0x33DA, Mapped, "pr"),
    (0x33DB, Mapped, "sr"),
    (0x33DC, Mapped, "sv"),
    (0x33DD, Mapped, "wb"),
    (0x33DE, Mapped, "v\u{2215}m"),
    (0x33DF, Mapped, "a\u{2215}m"),
    (0x33E0, Mapped, "1\u{65e5}"),
    (0x33E1, Mapped, "2\u{65e5}"),
    (0x33E2, Mapped, "3\u{65e5}"),
    (0x33E3, Mapped, "4\u{65e5}"),
    (0x33E4, Mapped, "5\u{65e5}"),
    (0x33E5, Mapped, "6\u{65e5}"),
    (0x33E6, Mapped, "7\u{65e5}"),
    (0x33E7, Mapped, "8\u{65e5}"),
    (0x33E8, Mapped, "9\u{65e5}"),
    (0x33E9, Mapped, "10\u{65e5}"),
    (0x33EA, Mapped, "11\u{65e5}"),
    (0x33EB, Mapped, "12\u{65e5}"),
    (0x33EC, Mapped, "13\u{65e5}"),
    (0x33ED, Mapped, "14\u{65e5}"),
    (0x33EE, Mapped, "15\u{65e5}"),
    (0x33EF, Mapped, "16\u{65e5}"),
    (0x33F0, Mapped, "17\u{65e5}"),
    (0x33F1, Mapped, "18\u{65e5}"),
    (0x33F2, Mapped, "19\u{65e5}"),
    (0x33F3, Mapped, "20\u{65e5}"),
    (0x33F4, Mapped, "21\u{65e5}"),
    (0x33F5, Mapped, "22\u{65e5}"),
    (0x33F6, Mapped, "23\u{65e5}"),
    (0x33F7, Mapped, "24\u{65e5}"),
    (0x33F8, Mapped, "25\u{65e5}"),
    (0x33F9, Mapped, "26\u{65e5}"),
    (0x33FA, Mapped, "27\u{65e5}"),
    (0x33FB, Mapped, "28\u{65e5}"),
    (0x33FC, Mapped, "29\u{65e5}"),
    (0x33FD, Mapped, "30\u{65e5}"),
    (0x33FE, Mapped, "31\u{65e5}"),
    (0x33FF, Mapped, "gal"),
    (0x3400, Valid, ""),
    (0xA48D, Disallowed, ""),
    (0xA490, Valid, ""),
    (0xA4C7, Disallowed, ""),
    (0xA4D0, Valid, ""),
    (0xA62C, Disallowed, ""),
    (0xA640, Mapped, "\u{a641}"),
    (0xA641, Valid, ""),
    (0xA642, Mapped, "\u{a643}"),
    (0xA643, Valid, ""),
    (0xA644, Mapped, "\u{a645}"),
    (0xA645, Valid, ""),
    (0xA646, Mapped, "\u{a647}"),
    (0xA647, Valid, ""),
    (0xA648, Mapped, "\u{a649}"),
    (0xA649, Valid, ""),
    (0xA64A, Mapped, "\u{a64b}"),
    (0xA64B, Valid, ""),
    (0xA64C, Mapped, "\u{a64d}"),
    (0xA64D, Valid, ""),
    (0xA64E, Mapped, "\u{a64f}"),
    (0xA64F, Valid, ""),
    (0xA650, Mapped, "\u{a651}"),
    (0xA651, Valid, ""),
    (0xA652, Mapped, "\u{a653}"),
    (0xA653, Valid, ""),
    (0xA654, Mapped, "\u{a655}"),
    (0xA655, Valid, ""),
    (0xA656, Mapped, "\u{a657}"),
    (0xA657, Valid, ""),
    (0xA658, Mapped, "\u{a659}"),
    (0xA659, Valid, ""),
    (0xA65A, Mapped, "\u{a65b}"),
    (0xA65B, Valid, ""),
    (0xA65C, Mapped, "\u{a65d}"),
    (0xA65D, Valid, ""),
    (0xA65E, Mapped, "\u{a65f}"),
    (0xA65F, Valid, ""),
    (0xA660, Mapped, "\u{a661}"),
    (0xA661, Valid, ""),
    (0xA662, Mapped, "\u{a663}"),
    (0xA663, Valid, ""),
    (0xA664, Mapped, "\u{a665}"),
    (0xA665, Valid, ""),
    (0xA666, Mapped, "\u{a667}"),
    (0xA667, Valid, ""),
    (0xA668, Mapped, "\u{a669}"),
    (0xA669, Valid, ""),
    (0xA66A, Mapped, "\u{a66b}"),
    (0xA66B, Valid, ""),
    (0xA66C, Mapped, "\u{a66d}"),
    (0xA66D, Valid, ""),
    (0xA680, Mapped, "\u{a681}"),
    (0xA681, Valid, ""),
    (0xA682, Mapped, "\u{a683}"),
    (0xA683, Valid, ""),
    (0xA684, Mapped, "\u{a685}"),
    (0xA685, Valid, ""),
    (0xA686, Mapped, "\u{a687}"),
    (0xA687, Valid, ""),
    (0xA688, Mapped, "\u{a689}"),
    (0xA689, Valid, ""),
    (0xA68A, Mapped, "\u{a68b}"),
    (0xA68B, Valid, ""),
    (0xA68C, Mapped, "\u{a68d}"),
    (0xA68D, Valid, ""),
    (0xA68E, Mapped, "\u{a68f}"),
    (0xA68F, Valid, ""),
    (0xA690, Mapped, "\u{a691}"),
    (0xA691, Valid, ""),
    (0xA692, Mapped, "\u{a693}"),
    (0xA693, Valid, ""),
    (0xA694, Mapped, "\u{a695}"),
    (0xA695, Valid, ""),
    (0xA696, Mapped, "\u{a697}"),
    (0xA697, Valid, ""),
    (0xA698, Mapped, "\u{a699}"),
    (0xA699, Valid, ""),
    (0xA69A, Mapped, "\u{a69b}"),
    (0xA69B, Valid, ""),
    (0xA69C, Mapped, "\u{44a}"),
    (0xA69D, Mapped, "\u{44c}"),
    (0xA69E, Valid, ""),
    (0xA6F8, Disallowed, ""),
    (0xA700, Valid, ""),
    (0xA722, Mapped, "\u{a723}"),
    (0xA723, Valid, ""),
    (0xA724, Mapped, "\u{a725}"),
    (0xA725, Valid, ""),
    (0xA726, Mapped, "\u{a727}"),
    (0xA727, Valid, ""),
    (0xA728, Mapped, "\u{a729}"),
    (0xA729, Valid, ""),
    (0xA72A, Mapped, "\u{a72b}"),
    (0xA72B, Valid, ""),
    (0xA72C, Mapped, "\u{a72d}"),
    (0xA72D, Valid, ""),
    (0xA72E, Mapped, "\u{a72f}"),
    (0xA72F, Valid, ""),
    (0xA732, Mapped, "\u{a733}"),
    (0xA733, Valid, ""),
    (0xA734, Mapped, "\u{a735}"),
    (0xA735, Valid, ""),
    (0xA736, Mapped, "\u{a737}"),
    (0xA737, Valid, ""),
    (0xA738, Mapped, "\u{a739}"),
    (0xA739, Valid, ""),
    (0xA73A, Mapped, "\u{a73b}"),
    (0xA73B, Valid, ""),
    (0xA73C, Mapped, "\u{a73d}"),
    (0xA73D, Valid, ""),
    (0xA73E, Mapped, "\u{a73f}"),
    (0xA73F, Valid, ""),
    (0xA740, Mapped, "\u{a741}"),
    (0xA741, Valid, ""),
    (0xA742, Mapped, "\u{a743}"),
    (0xA743, Valid, ""),
    (0xA744, Mapped, "\u{a745}"),
    (0xA745, Valid, ""),
    (0xA746, Mapped, "\u{a747}"),
    (0xA747, Valid, ""),
    (0xA748, Mapped, "\u{a749}"),
    (0xA749, Valid, ""),
    (0xA74A, Mapped, "\u{a74b}"),
    (0xA74B, Valid, ""),
    (0xA74C, Mapped, "\u{a74d}"),
    (0xA74D, Valid, ""),
    (0xA74E, Mapped, "\u{a74f}"),
    (0xA74F, Valid, ""),
    (0xA750, Mapped, "\u{a751}"),
    (0xA751, Valid, ""),
    (0xA752, Mapped, "\u{a753}"),
    (0xA753, Valid, ""),
    (0xA754, Mapped, "\u{a755}"),
    (0xA755, Valid, ""),
    (0xA756, Mapped, "\u{a757}"),
    (0xA757, Valid, ""),
    (0xA758, Mapped, "\u{a759}"),
    (0xA759, Valid, ""),
    (0xA75A, Mapped, "\u{a75b}"),
    (0xA75B, Valid, ""),
    (0xA75C, Mapped, "\u{a75d}"),
    (0xA75D, Valid, ""),
    (0xA75E, Mapped, "\u{a75f}"),
    (0xA75F, Valid, ""),
    (0xA760, Mapped, "\u{a761}"),
    (0xA761, Valid, ""),
    (0xA762, Mapped, "\u{a763}"),
    (0xA763, Valid, ""),
    (0xA764, Mapped, "\u{a765}"),
    (0xA765, Valid, ""),
    (0xA766, Mapped, "\u{a767}"),
    (0xA767, Valid, ""),
    (0xA768, Mapped, "\u{a769}"),
    (0xA769, Valid, ""),
    (0xA76A, Mapped, "\u{a76b}"),
    (0xA76B, Valid, ""),
    (0xA76C, Mapped, "\u{a76d}"),
    (0xA76D, Valid, ""),
    (0xA76E, Mapped, "\u{a76f}"),
    (0xA76F, Valid, ""),
    (0xA770, Mapped, "\u{a76f}"),
    (0xA771, Valid, ""),
    (0xA779, Mapped, "\u{a77a}"),
    (0xA77A, Valid, ""),
    (0xA77B, Mapped, "\u{a77c}"),
    (0xA77C, Valid, ""),
    (0xA77D, Mapped, "\u{1d79}"),
    (0xA77E, Mapped, "\u{a77f}"),
    (0xA77F, Valid, ""),
    (0xA780, Mapped, "\u{a781}"),
    (0xA781, Valid, ""),
    (0xA782, Mapped, "\u{a783}"),
    (0xA783, Valid, ""),
    (0xA784, Mapped, "\u{a785}"),
    (0xA785, Valid, ""),
    (0xA786, Mapped, "\u{a787}"),
    (0xA787, Valid, ""),
    (0xA78B, Mapped, "\u{a78c}"),
    (0xA78C, Valid, ""),
    (0xA78D, Mapped, "\u{265}"),
    (0xA78E, Valid, ""),
    (0xA790, Mapped, "\u{a791}"),
    (0xA791, Valid, ""),
    (0xA792, Mapped, "\u{a793}"),
    (0xA793, Valid, ""),
    (0xA796, Mapped, "\u{a797}"),
    (0xA797, Valid, ""),
    (0xA798, Mapped, "\u{a799}"),
    (0xA799, Valid, ""),
    (0xA79A, Mapped, "\u{a79b}"),
    (0xA79B, Valid, ""),
    (0xA79C, Mapped, "\u{a79d}"),
    (0xA79D, Valid, ""),
    (0xA79E, Mapped, "\u{a79f}"),
    (0xA79F, Valid, ""),
    (0xA7A0, Mapped, "\u{a7a1}"),
    (0xA7A1, Valid, ""),
    (0xA7A2, Mapped, "\u{a7a3}"),
    (0xA7A3, Valid, ""),
    (0xA7A4, Mapped, "\u{a7a5}"),
    (0xA7A5, Valid, ""),
    (0xA7A6, Mapped, "\u{a7a7}"),
    (0xA7A7, Valid, ""),
    (0xA7A8, Mapped, "\u{a7a9}"),
    (0xA7A9, Valid, ""),
    (0xA7AA, Mapped, "\u{266}"),
    (0xA7AB, Mapped, "\u{25c}"),
    (0xA7AC, Mapped, "\u{261}"),
    (0xA7AD, Mapped, "\u{26c}"),
    (0xA7AE, Mapped, "\u{26a}"),
    (0xA7AF, Valid, ""),
    (0xA7B0, Mapped, "\u{29e}"),
    (0xA7B1, Mapped, "\u{287}"),
    (0xA7B2, Mapped, "\u{29d}"),
    (0xA7B3, Mapped, "\u{ab53}"),
    (0xA7B4, Mapped, "\u{a7b5}"),
    (0xA7B5, Valid, ""),
    (0xA7B6, Mapped, "\u{a7b7}"),
    (0xA7B7, Valid, ""),
    (0xA7B8, Mapped, "\u{a7b9}"),
    (0xA7B9, Valid, ""),
    (0xA7BA, Mapped, "\u{a7bb}"),
    (0xA7BB, Valid, ""),
    (0xA7BC, Mapped, "\u{a7bd}"),
    (0xA7BD, Valid, ""),
    (0xA7BE, Mapped, "\u{a7bf}"),
    (0xA7BF, Valid, ""),
    (0xA7C0, Mapped, "\u{a7c1}"),
    (0xA7C1, Valid, ""),
    (0xA7C2, Mapped, "\u{a7c3}"),
    (0xA7C3, Valid, ""),
    (0xA7C4, Mapped, "\u{a794}"),
    (0xA7C5, Mapped, "\u{282}"),
    (0xA7C6, Mapped, "\u{1d8e}"),
    (0xA7C7, Mapped, "\u{a7c8}"),
    (0xA7C8, Valid, ""),
    (0xA7C9, Mapped, "\u{a7ca}"),
    (0xA7CA, Valid, ""),
    (0xA7CB, Mapped, "\u{264}"),
    (0xA7CC, Mapped, "\u{a7cd}"),
    (0xA7CD, Valid, ""),
    (0xA7CE, Mapped, "\u{a7cf}"),
    (0xA7CF, Valid, ""),
    (0xA7D0, Mapped, "\u{a7d1}"),
    (0xA7D1, Valid, ""),
    (0xA7D2, Mapped, "\u{a7d3}"),
    (0xA7D3, Valid, ""),
    (0xA7D4, Mapped, "\u{a7d5}"),
    (0xA7D5, Valid, ""),
    (0xA7D6, Mapped, "\u{a7d7}"),
    (0xA7D7, Valid, ""),
    (0xA7D8, Mapped, "\u{a7d9}"),
    (0xA7D9, Valid, ""),
    (0xA7DA, Mapped, "\u{a7db}"),
    (0xA7DB, Valid, ""),
    (0xA7DC, Mapped, "\u{19b}"),
    (0xA7DD, Disallowed, ""),
    (0xA7F1, Mapped, "s"),
    (0xA7F2, Mapped, "c"),
    (0xA7F3, Mapped, "f"),
    (0xA7F4, Mapped, "q"),
    (0xA7F5, Mapped, "\u{a7f6}"),
    (0xA7F6, Valid, ""),
    (0xA7F8, Mapped, "\u{127}"),
    (0xA7F9, Mapped, "\u{153}"),
    (0xA7FA, Valid, ""),
    (0xA82D, Disallowed, ""),
    (0xA830, Valid, ""),
    (0xA83A, Disallowed, ""),
    (0xA840, Valid, ""),
    (0xA878, Disallowed, ""),
    (0xA880, Valid, ""),
    (0xA8C6, Disallowed, ""),
    (0xA8CE, Valid, ""),
    (0xA8DA, Disallowed, ""),
    (0xA8E0, Valid, ""),
    (0xA954, Disallowed, ""),
    (0xA95F, Valid, ""),
    (0xA97D, Disallowed, ""),
    (0xA980, Valid, ""),
    (0xA9CE, Disallowed, ""),
    (0xA9CF, Valid, ""),
    (0xA9DA, Disallowed, ""),
    (0xA9DE, Valid, ""),
    (0xA9FF, Disallowed, ""),
    (0xAA00, Valid, ""),
    (0xAA37, Disallowed, ""),
    (0xAA40, Valid, ""),
    (0xAA4E, Disallowed, ""),
    (0xAA50, Valid, ""),
    (0xAA5A, Disallowed, ""),
    (0xAA5C, Valid, ""),
    (0xAAC3, Disallowed, ""),
    (0xAADB, Valid, ""),
    (0xAAF7, Disallowed, ""),
    (0xAB01, Valid, ""),
    (0xAB07, Disallowed, ""),
    (0xAB09, Valid, ""),
    (0xAB0F, Disallowed, ""),
    (0xAB11, Valid, ""),
    (0xAB17, Disallowed, ""),
    (0xAB20, Valid, ""),
    (0xAB27, Disallowed, ""),
    (0xAB28, Valid, ""),
    (0xAB2F, Disallowed, ""),
    (0xAB30, Valid, ""),
    (0xAB5C, Mapped, "\u{a727}"),
    (0xAB5D, Mapped, "\u{ab37}"),
    (0xAB5E, Mapped, "\u{26b}"),
    (0xAB5F, Mapped, "\u{ab52}"),
    (0xAB60, Valid, ""),
    (0xAB69, Mapped, "\u{28d}"),
    (0xAB6A, Valid, ""),
    (0xAB6C, Disallowed, ""),
    (0xAB70, Mapped, "\u{13a0}"),
    (0xAB71, Mapped, "\u{13a1}"),
    (0xAB72, Mapped, "\u{13a2}"),
    (0xAB73, Mapped, "\u{13a3}"),
    (0xAB74, Mapped, "\u{13a4}"),
    (0xAB75, Mapped, "\u{13a5}"),
    (0xAB76, Mapped, "\u{13a6}"),
    (0xAB77, Mapped, "\u{13a7}"),
    (0xAB78, Mapped, "\u{13a8}"),
    (0xAB79, Mapped, "\u{13a9}"),
    (0xAB7A, Mapped, "\u{13aa}"),
    (0xAB7B, Mapped, "\u{13ab}"),
    (0xAB7C, Mapped, "\u{13ac}"),
    (0xAB7D, Mapped, "\u{13ad}"),
    (0xAB7E, Mapped, "\u{13ae}"),
    (0xAB7F, Mapped, "\u{13af}"),
    (0xAB80, Mapped, "\u{13b0}"),
    (0xAB81, Mapped, "\u{13b1}"),
    (0xAB82, Mapped, "\u{13b2}"),
    (0xAB83, Mapped, "\u{13b3}"),
    (0xAB84, Mapped, "\u{13b4}"),
    (0xAB85, Mapped, "\u{13b5}"),
    (0xAB86, Mapped, "\u{13b6}"),
    (0xAB87, Mapped, "\u{13b7}"),
    (0xAB88, Mapped, "\u{13b8}"),
    (0xAB89, Mapped, "\u{13b9}"),
    (0xAB8A, Mapped, "\u{13ba}"),
    (0xAB8B, Mapped, "\u{13bb}"),
    (0xAB8C, Mapped, "\u{13bc}"),
    (0xAB8D, Mapped, "\u{13bd}"),
    (0xAB8E, Mapped, "\u{13be}"),
    (0xAB8F, Mapped, "\u{13bf}"),
    (0xAB90, Mapped, "\u{13c0}"),
    (0xAB91, Mapped, "\u{13c1}"),
    (0xAB92, Mapped, "\u{13c2}"),
    (0xAB93, Mapped, "\u{13c3}"),
    (0xAB94, Mapped, "\u{13c4}"),
    (0xAB95, Mapped, "\u{13c5}"),
    (0xAB96, Mapped, "\u{13c6}"),
    (0xAB97, Mapped, "\u{13c7}"),
    (0xAB98, Mapped, "\u{13c8}"),
    (0xAB99, Mapped, "\u{13c9}"),
    (0xAB9A, Mapped, "\u{13ca}"),
    (0xAB9B, Mapped, "\u{13cb}"),
    (0xAB9C, Mapped, "\u{13cc}"),
    (0xAB9D, Mapped, "\u{13cd}"),
    (0xAB9E, Mapped, "\u{13ce}"),
    (0xAB9F, Mapped, "\u{13cf}"),
    (0xABA0, Mapped, "\u{13d0}"),
    (0xABA1, Mapped, "\u{13d1}"),
    (0xABA2, Mapped, "\u{13d2}"),
    (0xABA3, Mapped, "\u{13d3}"),
    (0xABA4, Mapped, "\u{13d4}"),
    (0xABA5, Mapped, "\u{13d5}"),
    (0xABA6, Mapped, "\u{13d6}"),
    (0xABA7, Mapped, "\u{13d7}"),
    (0xABA8, Mapped, "\u{13d8}"),
    (0xABA9, Mapped, "\u{13d9}"),
    (0xABAA, Mapped, "\u{13da}"),
    (0xABAB, Mapped, "\u{13db}"),
    (0xABAC, Mapped, "\u{13dc}"),
    (0xABAD, Mapped, "\u{13dd}"),
    (0xABAE, Mapped, "\u{13de}"),
    (0xABAF, Mapped, "\u{13df}"),
    (0xABB0, Mapped, "\u{13e0}"),
    (0xABB1, Mapped, "\u{13e1}"),
    (0xABB2, Mapped, "\u{13e2}"),
    (0xABB3, Mapped, "\u{13e3}"),
    (0xABB4, Mapped, "\u{13e4}"),
    (0xABB5, Mapped, "\u{13e5}"),
    (0xABB6, Mapped, "\u{13e6}"),
    (0xABB7, Mapped, "\u{13e7}"),
    (0xABB8, Mapped, "\u{13e8}"),
    (0xABB9, Mapped, "\u{13e9}"),
    (0xABBA, Mapped, "\u{13ea}"),
    (0xABBB, Mapped, "\u{13eb}"),
    (0xABBC, Mapped, "\u{13ec}"),
    (0xABBD, Mapped, "\u{13ed}"),
    (0xABBE, Mapped, "\u{13ee}"),
    (0xABBF, Mapped, "\u{13ef}"),
    (0xABC0, Valid, ""),
    (0xABEE, Disallowed, ""),
    (0xABF0, Valid, ""),
    (0xABFA, Disallowed, ""),
    (0xAC00, Valid, ""),
    (0xD7A4, Disallowed, ""),
    (0xD7B0, Valid, ""),
    (0xD7C7, Disallowed, ""),
    (0xD7CB, Valid, ""),
    (0xD7FC, Disallowed, ""),
    (0xF900, Mapped, "\u{8c48}"),
    (0xF901, Mapped, "\u{66f4}"),
    (0xF902, Mapped, "\u{8eca}"),
    (0xF903, Mapped, "\u{8cc8}"),
    (0xF904, Mapped, "\u{6ed1}"),
    (0xF905, Mapped, "\u{4e32}"),
    (0xF906, Mapped, "\u{53e5}"),
    (0xF907, Mapped, "\u{9f9c}"),
    (0xF909, Mapped, "\u{5951}"),
    (0xF90A, Mapped, "\u{91d1}"),
    (0xF90B, Mapped, "\u{5587}"),
    (0xF90C, Mapped, "\u{5948}"),
    (0xF90D, Mapped, "\u{61f6}"),
    (0xF90E, Mapped, "\u{7669}"),
    (0xF90F, Mapped, "\u{7f85}"),
    (0xF910, Mapped, "\u{863f}"),
    (0xF911, Mapped, "\u{87ba}"),
    (0xF912, Mapped, "\u{88f8}"),
    (0xF913, Mapped, "\u{908f}"),
    (0xF914, Mapped, "\u{6a02}"),
    (0xF915, Mapped, "\u{6d1b}"),
    (0xF916, Mapped, "\u{70d9}"),
    (0xF917, Mapped, "\u{73de}"),
    (0xF918, Mapped, "\u{843d}"),
    (0xF919, Mapped, "\u{916a}"),
    (0xF91A, Mapped, "\u{99f1}"),
    (0xF91B, Mapped, "\u{4e82}"),
    (0xF91C, Mapped, "\u{5375}"),
    (0xF91D, Mapped, "\u{6b04}"),
    (0xF91E, Mapped, "\u{721b}"),
    (0xF91F, Mapped, "\u{862d}"),
    (0xF920, Mapped, "\u{9e1e}"),
    (0xF921, Mapped, "\u{5d50}"),
    (0xF922, Mapped, "\u{6feb}"),
    (0xF923, Mapped, "\u{85cd}"),
    (0xF924, Mapped, "\u{8964}"),
    (0xF925, Mapped, "\u{62c9}"),
    (0xF926, Mapped, "\u{81d8}"),
    (0xF927, Mapped, "\u{881f}"),
    (0xF928, Mapped, "\u{5eca}"),
    (0xF929, Mapped, "\u{6717}"),
    (0xF92A, Mapped, "\u{6d6a}"),
    (0xF92B, Mapped, "\u{72fc}"),
    (0xF92C, Mapped, "\u{90ce}"),
    (0xF92D, Mapped, "\u{4f86}"),
    (0xF92E, Mapped, "\u{51b7}"),
    (0xF92F, Mapped, "\u{52de}"),
    (0xF930, Mapped, "\u{64c4}"),
    (0xF931, Mapped, "\u{6ad3}"),
    (0xF932, Mapped, "\u{7210}"),
    (0xF933, Mapped, "\u{76e7}"),
    (0xF934, Mapped, "\u{8001}"),
    (0xF935, Mapped, "\u{8606}"),
    (0xF936, Mapped, "\u{865c}"),
    (0xF937, Mapped, "\u{8def}"),
    (0xF938, Mapped, "\u{9732}"),
    (0xF939, Mapped, "\u{9b6f}"),
    (0xF93A, Mapped, "\u{9dfa}"),
    (0xF93B, Mapped, "\u{788c}"),
    (0xF93C, Mapped, "\u{797f}"),
    (0xF93D, Mapped, "\u{7da0}"),
    (0xF93E, Mapped, "\u{83c9}"),
    (0xF93F, Mapped, "\u{9304}"),
    (0xF940, Mapped, "\u{9e7f}"),
    (0xF941, Mapped, "\u{8ad6}"),
    (0xF942, Mapped, "\u{58df}"),
    (0xF943, Mapped, "\u{5f04}"),
    (0xF944, Mapped, "\u{7c60}"),
    (0xF945, Mapped, "\u{807e}"),
    (0xF946, Mapped, "\u{7262}"),
    (0xF947, Mapped, "\u{78ca}"),
    (0xF948, Mapped, "\u{8cc2}"),
    (0xF949, Mapped, "\u{96f7}"),
    (0xF94A, Mapped, "\u{58d8}"),
    (0xF94B, Mapped, "\u{5c62}"),
    (0xF94C, Mapped, "\u{6a13}"),
    (0xF94D, Mapped, "\u{6dda}"),
    (0xF94E, Mapped, "\u{6f0f}"),
    (0xF94F, Mapped, "\u{7d2f}"),
    (0xF950, Mapped, "\u{7e37}"),
    (0xF951, Mapped, "\u{964b}"),
    (0xF952, Mapped, "\u{52d2}"),
    (0xF953, Mapped, "\u{808b}"),
    (0xF954, Mapped, "\u{51dc}"),
    (0xF955, Mapped, "\u{51cc}"),
    (0xF956, Mapped, "\u{7a1c}"),
    (0xF957, Mapped, "\u{7dbe}"),
    (0xF958, Mapped, "\u{83f1}"),
    (0xF959, Mapped, "\u{9675}"),
    (0xF95A, Mapped, "\u{8b80}"),
    (0xF95B, Mapped, "\u{62cf}"),
    (0xF95C, Mapped, "\u{6a02}"),
    (0xF95D, Mapped, "\u{8afe}"),
    (0xF95E, Mapped, "\u{4e39}"),
    (0xF95F, Mapped, "\u{5be7}"),
    (0xF960, Mapped, "\u{6012}"),
    (0xF961, Mapped, "\u{7387}"),
    (0xF962, Mapped, "\u{7570}"),
    (0xF963, Mapped, "\u{5317}"),
    (0xF964, Mapped, "\u{78fb}"),
    (0xF965, Mapped, "\u{4fbf}"),
    (0xF966, Mapped, "\u{5fa9}"),
    (0xF967, Mapped, "\u{4e0d}"),
    (0xF968, Mapped, "\u{6ccc}"),
    (0xF969, Mapped, "\u{6578}"),
    (0xF96A, Mapped, "\u{7d22}"),
    (0xF96B, Mapped, "\u{53c3}"),
    (0xF96C, Mapped, "\u{585e}"),
    (0xF96D, Mapped, "\u{7701}"),
    (0xF96E, Mapped, "\u{8449}"),
    (0xF96F, Mapped, "\u{8aaa}"),
    (0xF970, Mapped, "\u{6bba}"),
    (0xF971, Mapped, "\u{8fb0}"),
    (0xF972, Mapped, "\u{6c88}"),
    (0xF973, Mapped, "\u{62fe}"),
    (0xF974, Mapped, "\u{82e5}"),
    (0xF975, Mapped, "\u{63a0}"),
    (0xF976, Mapped, "\u{7565}"),
    (0xF977, Mapped, "\u{4eae}"),
    (0xF978, Mapped, "\u{5169}"),
    (0xF979, Mapped, "\u{51c9}"),
    (0xF97A, Mapped, "\u{6881}"),
    (0xF97B, Mapped, "\u{7ce7}"),
    (0xF97C, Mapped, "\u{826f}"),
    (0xF97D, Mapped, "\u{8ad2}"),
    (0xF97E, Mapped, "\u{91cf}"),
    (0xF97F, Mapped, "\u{52f5}"),
    (0xF980, Mapped, "\u{5442}"),
    (0xF981, Mapped, "\u{5973}"),
    (0xF982, Mapped, "\u{5eec}"),
    (0xF983, Mapped, "\u{65c5}"),
    (0xF984, Mapped, "\u{6ffe}"),
    (0xF985, Mapped, "\u{792a}"),
    (0xF986, Mapped, "\u{95ad}"),
    (0xF987, Mapped, "\u{9a6a}"),
    (0xF988, Mapped, "\u{9e97}"),
    (0xF989, Mapped, "\u{9ece}"),
    (0xF98A, Mapped, "\u{529b}"),
    (0xF98B, Mapped, "\u{66c6}"),
    (0xF98C, Mapped, "\u{6b77}"),
    (0xF98D, Mapped, "\u{8f62}"),
    (0xF98E, Mapped, "\u{5e74}"),
    (0xF98F, Mapped, "\u{6190}"),
    (0xF990, Mapped, "\u{6200}"),
    (0xF991, Mapped, "\u{649a}"),
    (0xF992, Mapped, "\u{6f23}"),
    (0xF993, Mapped, "\u{7149}"),
    (0xF994, Mapped, "\u{7489}"),
    (0xF995, Mapped, "\u{79ca}"),
    (0xF996, Mapped, "\u{7df4}"),
    (0xF997, Mapped, "\u{806f}"),
    (0xF998, Mapped, "\u{8f26}"),
    (0xF999, Mapped, "\u{84ee}"),
    (0xF99A, Mapped, "\u{9023}"),
    (0xF99B, Mapped, "\u{934a}"),
    (0xF99C, Mapped, "\u{5217}"),
    (0xF99D, Mapped, "\u{52a3}"),
    (0xF99E, Mapped, "\u{54bd}"),
    (0xF99F, Mapped, "\u{70c8}"),
    (0xF9A0, Mapped, "\u{88c2}"),
    (0xF9A1, Mapped, "\u{8aaa}"),
    (0xF9A2, Mapped, "\u{5ec9}"),
    (0xF9A3, Mapped, "\u{5ff5}"),
    (0xF9A4, Mapped, "\u{637b}"),
    (0xF9A5, Mapped, "\u{6bae}"),
    (0xF9A6, Mapped, "\u{7c3e}"),
    (0xF9A7, Mapped, "\u{7375}"),
    (0xF9A8, Mapped, "\u{4ee4}"),
    (0xF9A9, Mapped, "\u{56f9}"),
    (0xF9AA, Mapped, "\u{5be7}"),
    (0xF9AB, Mapped, "\u{5dba}"),
    (0xF9AC, Mapped, "\u{601c}"),
    (0xF9AD, Mapped, "\u{73b2}"),
    (0xF9AE, Mapped, "\u{7469}"),
    (0xF9AF, Mapped, "\u{7f9a}"),
    (0xF9B0, Mapped, "\u{8046}"),
    (0xF9B1, Mapped, "\u{9234}"),
    (0xF9B2, Mapped, "\u{96f6}"),
    (0xF9B3, Mapped, "\u{9748}"),
    (0xF9B4, Mapped, "\u{9818}"),
    (0xF9B5, Mapped, "\u{4f8b}"),
    (0xF9B6, Mapped, "\u{79ae}"),
    (0xF9B7, Mapped, "\u{91b4}"),
    (0xF9B8, Mapped, "\u{96b8}"),
    (0xF9B9, Mapped, "\u{60e1}"),
    (0xF9BA, Mapped, "\u{4e86}"),
    (0xF9BB, Mapped, "\u{50da}"),
    (0xF9BC, Mapped, "\u{5bee}"),
    (0xF9BD, Mapped, "\u{5c3f}"),
    (0xF9BE, Mapped, "\u{6599}"),
    (0xF9BF, Mapped, "\u{6a02}"),
    (0xF9C0, Mapped, "\u{71ce}"),
    (0xF9C1, Mapped, "\u{7642}"),
    (0xF9C2, Mapped, "\u{84fc}"),
    (0xF9C3, Mapped, "\u{907c}"),
    (0xF9C4, Mapped, "\u{9f8d}"),
    (0xF9C5, Mapped, "\u{6688}"),
    (0xF9C6, Mapped, "\u{962e}"),
    (0xF9C7, Mapped, "\u{5289}"),
    (0xF9C8, Mapped, "\u{677b}"),
    (0xF9C9, Mapped, "\u{67f3}"),
    (0xF9CA, Mapped, "\u{6d41}"),
    (0xF9CB, Mapped, "\u{6e9c}"),
    (0xF9CC, Mapped, "\u{7409}"),
    (0xF9CD, Mapped, "\u{7559}"),
    (0xF9CE, Mapped, "\u{786b}"),
    (0xF9CF, Mapped, "\u{7d10}"),
    (0xF9D0, Mapped, "\u{985e}"),
    (0xF9D1, Mapped, "\u{516d}"),
    (0xF9D2, Mapped, "\u{622e}"),
    (0xF9D3, Mapped, "\u{9678}"),
    (0xF9D4, Mapped, "\u{502b}"),
    (0xF9D5, Mapped, "\u{5d19}"),
    (0xF9D6, Mapped, "\u{6dea}"),
    (0xF9D7, Mapped, "\u{8f2a}"),
    (0xF9D8, Mapped, "\u{5f8b}"),
    (0xF9D9, Mapped, "\u{6144}"),
    (0xF9DA, Mapped, "\u{6817}"),
    (0xF9DB, Mapped, "\u{7387}"),
    (0xF9DC, Mapped, "\u{9686}"),
    (0xF9DD, Mapped, "\u{5229}"),
    (0xF9DE, Mapped, "\u{540f}"),
    (0xF9DF, Mapped, "\u{5c65}"),
    (0xF9E0, Mapped, "\u{6613}"),
    (0xF9E1, Mapped, "\u{674e}"),
    (0xF9E2, Mapped, "\u{68a8}"),
    (0xF9E3, Mapped, "\u{6ce5}"),
    (0xF9E4, Mapped, "\u{7406}"),
    (0xF9E5, Mapped, "\u{75e2}"),
    (0xF9E6, Mapped, "\u{7f79}"),
    (0xF9E7, Mapped, "\u{88cf}"),
    (0xF9E8, Mapped, "\u{88e1}"),
    (0xF9E9, Mapped, "\u{91cc}"),
    (0xF9EA, Mapped, "\u{96e2}"),
    (0xF9EB, Mapped, "\u{533f}"),
    (0xF9EC, Mapped, "\u{6eba}"),
    (0xF9ED, Mapped, "\u{541d}"),
    (0xF9EE, Mapped, "\u{71d0}"),
    (0xF9EF, Mapped, "\u{7498}"),
    (0xF9F0, Mapped, "\u{85fa}"),
    (0xF9F1, Mapped, "\u{96a3}"),
    (0xF9F2, Mapped, "\u{9c57}"),
    (0xF9F3, Mapped, "\u{9e9f}"),
    (0xF9F4, Mapped, "\u{6797}"),
    (0xF9F5, Mapped, "\u{6dcb}"),
    (0xF9F6, Mapped, "\u{81e8}"),
    (0xF9F7, Mapped, "\u{7acb}"),
    (0xF9F8, Mapped, "\u{7b20}"),
    (0xF9F9, Mapped, "\u{7c92}"),
    (0xF9FA, Mapped, "\u{72c0}"),
    (0xF9FB, Mapped, "\u{7099}"),
    (0xF9FC, Mapped, "\u{8b58}"),
    (0xF9FD, Mapped, "\u{4ec0}"),
    (0xF9FE, Mapped, "\u{8336}"),
    (0xF9FF, Mapped, "\u{523a}"),
    (0xFA00, Mapped, "\u{5207}"),
    (0xFA01, Mapped, "\u{5ea6}"),
    (0xFA02, Mapped, "\u{62d3}"),
    (0xFA03, Mapped, "\u{7cd6}"),
    (0xFA04, Mapped, "\u{5b85}"),
    (0xFA05, Mapped, "\u{6d1e}"),
    (0xFA06, Mapped, "\u{66b4}"),
    (0xFA07, Mapped, "\u{8f3b}"),
    (0xFA08, Mapped, "\u{884c}"),
    (0xFA09, Mapped, "\u{964d}"),
    (0xFA0A, Mapped, "\u{898b}"),
    (0xFA0B, Mapped, "\u{5ed3}"),
    (0xFA0C, Mapped, "\u{5140}"),
    (0xFA0D, Mapped, "\u{55c0}"),
    (0xFA0E, Valid, ""),
    (0xFA10, Mapped, "\u{585a}"),
    (0xFA11, Valid, ""),
    (0xFA12, Mapped, "\u{6674}"),
    (0xFA13, Valid, ""),
    (0xFA15, Mapped, "\u{51de}"),
    (0xFA16, Mapped, "\u{732a}"),
    (0xFA17, Mapped, "\u{76ca}"),
    (0xFA18, Mapped, "\u{793c}"),
    (0xFA19, Mapped, "\u{795e}"),
    (0xFA1A, Mapped, "\u{7965}"),
    (0xFA1B, Mapped, "\u{798f}"),
    (0xFA1C, Mapped, "\u{9756}"),
    (0xFA1D, Mapped, "\u{7cbe}"),
    (0xFA1E, Mapped, "\u{7fbd}"),
    (0xFA1F, Valid, ""),
    (0xFA20, Mapped, "\u{8612}"),
    (0xFA21, Valid, ""),
    (0xFA22, Mapped, "\u{8af8}"),
    (0xFA23, Valid, ""),
    (0xFA25, Mapped, "\u{9038}"),
    (0xFA26, Mapped, "\u{90fd}"),
    (0xFA27, Valid, ""),
    (0xFA2A, Mapped, "\u{98ef}"),
    (0xFA2B, Mapped, "\u{98fc}"),
    (0xFA2C, Mapped, "\u{9928}"),
    (0xFA2D, Mapped, "\u{9db4}"),
    (0xFA2E, Mapped, "\u{90de}"),
    (0xFA2F, Mapped, "\u{96b7}"),
    (0xFA30, Mapped, "\u{4fae}"),
    (0xFA31, Mapped, "\u{50e7}"),
    (0xFA32, Mapped, "\u{514d}"),
    (0xFA33, Mapped, "\u{52c9}"),
    (0xFA34, Mapped, "\u{52e4}"),
    (0xFA35, Mapped, "\u{5351}"),
    (0xFA36, Mapped, "\u{559d}"),
    (0xFA37, Mapped, "\u{5606}"),
    (0xFA38, Mapped, "\u{5668}"),
    (0xFA39, Mapped, "\u{5840}"),
    (0xFA3A, Mapped, "\u{58a8}"),
    (0xFA3B, Mapped, "\u{5c64}"),
    (0xFA3C, Mapped, "\u{5c6e}"),
    (0xFA3D, Mapped, "\u{6094}"),
    (0xFA3E, Mapped, "\u{6168}"),
    (0xFA3F, Mapped, "\u{618e}"),
    (0xFA40, Mapped, "\u{61f2}"),
    (0xFA41, Mapped, "\u{654f}"),
    (0xFA42, Mapped, "\u{65e2}"),
    (0xFA43, Mapped, "\u{6691}"),
    (0xFA44, Mapped, "\u{6885}"),
    (0xFA45, Mapped, "\u{6d77}"),
    (0xFA46, Mapped, "\u{6e1a}"),
    (0xFA47, Mapped, "\u{6f22}"),
    (0xFA48, Mapped, "\u{716e}"),
    (0xFA49, Mapped, "\u{722b}"),
    (0xFA4A, Mapped, "\u{7422}"),
    (0xFA4B, Mapped, "\u{7891}"),
    (0xFA4C, Mapped, "\u{793e}"),
    (0xFA4D, Mapped, "\u{7949}"),
    (0xFA4E, Mapped, "\u{7948}"),
    (0xFA4F, Mapped, "\u{7950}"),
    (0xFA50, Mapped, "\u{7956}"),
    (0xFA51, Mapped, "\u{795d}"),
    (0xFA52, Mapped, "\u{798d}"),
    (0xFA53, Mapped, "\u{798e}"),
    (0xFA54, Mapped, "\u{7a40}"),
    (0xFA55, Mapped, "\u{7a81}"),
    (0xFA56, Mapped, "\u{7bc0}"),
    (0xFA57, Mapped, "\u{7df4}"),
    (0xFA58, Mapped, "\u{7e09}"),
    (0xFA59, Mapped, "\u{7e41}"),
    (0xFA5A, Mapped, "\u{7f72}"),
    (0xFA5B, Mapped, "\u{8005}"),
    (0xFA5C, Mapped, "\u{81ed}"),
    (0xFA5D, Mapped, "\u{8279}"),
    (0xFA5F, Mapped, "\u{8457}"),
    (0xFA60, Mapped, "\u{8910}"),
    (0xFA61, Mapped, "\u{8996}"),
    (0xFA62, Mapped, "\u{8b01}"),
    (0xFA63, Mapped, "\u{8b39}"),
    (0xFA64, Mapped, "\u{8cd3}"),
    (0xFA65, Mapped, "\u{8d08}"),
    (0xFA66, Mapped, "\u{8fb6}"),
    (0xFA67, Mapped, "\u{9038}"),
    (0xFA68, Mapped, "\u{96e3}"),
    (0xFA69, Mapped, "\u{97ff}"),
    (0xFA6A, Mapped, "\u{983b}"),
    (0xFA6B, Mapped, "\u{6075}"),
    (0xFA6C, Mapped, "\u{242ee}"),
    (0xFA6D, Mapped, "\u{8218}"),
    (0xFA6E, Disallowed, ""),
    (0xFA70, Mapped, "\u{4e26}"),
    (0xFA71, Mapped, "\u{51b5}"),
    (0xFA72, Mapped, "\u{5168}"),
    (0xFA73, Mapped, "\u{4f80}"),
    (0xFA74, Mapped, "\u{5145}"),
    (0xFA75, Mapped, "\u{5180}"),
    (0xFA76, Mapped, "\u{52c7}"),
    (0xFA77, Mapped, "\u{52fa}"),
    (0xFA78, Mapped, "\u{559d}"),
    (0xFA79, Mapped, "\u{5555}"),
    (0xFA7A, Mapped, "\u{5599}"),
    (0xFA7B, Mapped, "\u{55e2}"),
    (0xFA7C, Mapped, "\u{585a}"),
    (0xFA7D, Mapped, "\u{58b3}"),
    (0xFA7E, Mapped, "\u{5944}"),
    (0xFA7F, Mapped, "\u{5954}"),
    (0xFA80, Mapped, "\u{5a62}"),
    (0xFA81, Mapped, "\u{5b28}"),
    (0xFA82, Mapped, "\u{5ed2}"),
    (0xFA83, Mapped, "\u{5ed9}"),
    (0xFA84, Mapped, "\u{5f69}"),
    (0xFA85, Mapped, "\u{5fad}"),
    (0xFA86, Mapped, "\u{60d8}"),
    (0xFA87, Mapped, "\u{614e}"),
    (0xFA88, Mapped, "\u{6108}"),
    (0xFA89, Mapped, "\u{618e}"),
    (0xFA8A, Mapped, "\u{6160}"),
    (0xFA8B, Mapped, "\u{61f2}"),
    (0xFA8C, Mapped, "\u{6234}"),
    (0xFA8D, Mapped, "\u{63c4}"),
    (0xFA8E, Mapped, "\u{641c}"),
    (0xFA8F, Mapped, "\u{6452}"),
    (0xFA90, Mapped, "\u{6556}"),
    (0xFA91, Mapped, "\u{6674}"),
    (0xFA92, Mapped, "\u{6717}"),
    (0xFA93, Mapped, "\u{671b}"),
    (0xFA94, Mapped, "\u{6756}"),
    (0xFA95, Mapped, "\u{6b79}"),
    (0xFA96, Mapped, "\u{6bba}"),
    (0xFA97, Mapped, "\u{6d41}"),
    (0xFA98, Mapped, "\u{6edb}"),
    (0xFA99, Mapped, "\u{6ecb}"),
    (0xFA9A, Mapped, "\u{6f22}"),
    (0xFA9B, Mapped, "\u{701e}"),
    (0xFA9C, Mapped, "\u{716e}"),
    (0xFA9D, Mapped, "\u{77a7}"),
    (0xFA9E, Mapped, "\u{7235}"),
    (0xFA9F, Mapped, "\u{72af}"),
    (0xFAA0, Mapped, "\u{732a}"),
    (0xFAA1, Mapped, "\u{7471}"),
    (0xFAA2, Mapped, "\u{7506}"),
    (0xFAA3, Mapped, "\u{753b}"),
    (0xFAA4, Mapped, "\u{761d}"),
    (0xFAA5, Mapped, "\u{761f}"),
    (0xFAA6, Mapped, "\u{76ca}"),
    (0xFAA7, Mapped, "\u{76db}"),
    (0xFAA8, Mapped, "\u{76f4}"),
    (0xFAA9, Mapped, "\u{774a}"),
    (0xFAAA, Mapped, "\u{7740}"),
    (0xFAAB, Mapped, "\u{78cc}"),
    (0xFAAC, Mapped, "\u{7ab1}"),
    (0xFAAD, Mapped, "\u{7bc0}"),
    (0xFAAE, Mapped, "\u{7c7b}"),
    (0xFAAF, Mapped, "\u{7d5b}"),
    (0xFAB0, Mapped, "\u{7df4}"),
    (0xFAB1, Mapped, "\u{7f3e}"),
    (0xFAB2, Mapped, "\u{8005}"),
    (0xFAB3, Mapped, "\u{8352}"),
    (0xFAB4, Mapped, "\u{83ef}"),
    (0xFAB5, Mapped, "\u{8779}"),
    (0xFAB6, Mapped, "\u{8941}"),
    (0xFAB7, Mapped, "\u{8986}"),
    (0xFAB8, Mapped, "\u{8996}"),
    (0xFAB9, Mapped, "\u{8abf}"),
    (0xFABA, Mapped, "\u{8af8}"),
    (0xFABB, Mapped, "\u{8acb}"),
    (0xFABC, Mapped, "\u{8b01}"),
    (0xFABD, Mapped, "\u{8afe}"),
    (0xFABE, Mapped, "\u{8aed}"),
    (0xFABF, Mapped, "\u{8b39}"),
    (0xFAC0, Mapped, "\u{8b8a}"),
    (0xFAC1, Mapped, "\u{8d08}"),
    (0xFAC2, Mapped, "\u{8f38}"),
    (0xFAC3, Mapped, "\u{9072}"),
    (0xFAC4, Mapped, "\u{9199}"),
    (0xFAC5, Mapped, "\u{9276}"),
    (0xFAC6, Mapped, "\u{967c}"),
    (0xFAC7, Mapped, "\u{96e3}"),
    (0xFAC8, Mapped, "\u{9756}"),
    (0xFAC9, Mapped, "\u{97db}"),
    (0xFACA, Mapped, "\u{97ff}"),
    (0xFACB, Mapped, "\u{980b}"),
    (0xFACC, Mapped, "\u{983b}"),
    (0xFACD, Mapped, "\u{9b12}"),
    (0xFACE, Mapped, "\u{9f9c}"),
    (0xFACF, Mapped, "\u{2284a}"),
    (0xFAD0, Mapped, "\u{22844}"),
    (0xFAD1, Mapped, "\u{233d5}"),
    (0xFAD2, Mapped, "\u{3b9d}"),
    (0xFAD3, Mapped, "\u{4018}"),
    (0xFAD4, Mapped, "\u{4039}"),
    (0xFAD5, Mapped, "\u{25249}"),
    (0xFAD6, Mapped, "\u{25cd0}"),
    (0xFAD7, Mapped, "\u{27ed3}"),
    (0xFAD8, Mapped, "\u{9f43}"),
    (0xFAD9, Mapped, "\u{9f8e}"),
    (0xFADA, Disallowed, ""),
    (0xFB00, Mapped, "ff"),
    (0xFB01, Mapped, "fi"),
    (0xFB02, Mapped, "fl"),
    (0xFB03, Mapped, "ffi"),
    (0xFB04, Mapped, "ffl"),
    (0xFB05, Mapped, "st"),
    (0xFB07, Disallowed, ""),
    (0xFB13, Mapped, "\u{574}\u{576}"),
    (0xFB14, Mapped, "\u{574}\u{565}"),
    (0xFB15, Mapped, "\u{574}\u{56b}"),
    (0xFB16, Mapped, "\u{57e}\u{576}"),
    (0xFB17, Mapped, "\u{574}\u{56d}"),
    (0xFB18, Disallowed, ""),
    (0xFB1D, Mapped, "\u{5d9}\u{5b4}"),
    (0xFB1E, Valid, ""),
    (0xFB1F, Mapped, "\u{5f2}\u{5b7}"),
    (0xFB20, Mapped, "\u{5e2}"),
    (0xFB21, Mapped, "\u{5d0}"),
    (0xFB22, Mapped, "\u{5d3}"),
    (0xFB23, Mapped, "\u{5d4}"),
    (0xFB24, Mapped, "\u{5db}"),
    (0xFB25, Mapped, "\u{5dc}"),
    (0xFB26, Mapped, "\u{5dd}"),
    (0xFB27, Mapped, "\u{5e8}"),
    (0xFB28, Mapped, "\u{5ea}"),
    (0xFB29, Mapped, "+"),
    (0xFB2A, Mapped, "\u{5e9}\u{5c1}"),
    (0xFB2B, Mapped, "\u{5e9}\u{5c2}"),
    (0xFB2C, Mapped, "\u{5e9}\u{5bc}\u{5c1}"),
    (0xFB2D, Mapped, "\u{5e9}\u{5bc}\u{5c2}"),
    (0xFB2E, Mapped, "\u{5d0}\u{5b7}"),
    (0xFB2F, Mapped, "\u{5d0}\u{5b8}"),
    (0xFB30, Mapped, "\u{5d0}\u{5bc}"),
    (0xFB31, Mapped, "\u{5d1}\u{5bc}"),
    (0xFB32, Mapped, "\u{5d2}\u{5bc}"),
    (0xFB33, Mapped, "\u{5d3}\u{5bc}"),
    (0xFB34, Mapped, "\u{5d4}\u{5bc}"),
    (0xFB35, Mapped, "\u{5d5}\u{5bc}"),
    (0xFB36, Mapped, "\u{5d6}\u{5bc}"),
    (0xFB37, Disallowed, ""),
    (0xFB38, Mapped, "\u{5d8}\u{5bc}"),
    (0xFB39, Mapped, "\u{5d9}\u{5bc}"),
    (0xFB3A, Mapped, "\u{5da}\u{5bc}"),
    (0xFB3B, Mapped, "\u{5db}\u{5bc}"),
    (0xFB3C, Mapped, "\u{5dc}\u{5bc}"),
    (0xFB3D, Disallowed, ""),
    (0xFB3E, Mapped, "\u{5de}\u{5bc}"),
    (0xFB3F, Disallowed, ""),
    (0xFB40, Mapped, "\u{5e0}\u{5bc}"),
    (0xFB41, Mapped, "\u{5e1}\u{5bc}"),
    (0xFB42, Disallowed, ""),
    (0xFB43, Mapped, "\u{5e3}\u{5bc}"),
    (0xFB44, Mapped, "\u{5e4}\u{5bc}"),
    (0xFB45, Disallowed, ""),
    (0xFB46, Mapped, "\u{5e6}\u{5bc}"),
    (0xFB47, Mapped, "\u{5e7}\u{5bc}"),
    (0xFB48, Mapped, "\u{5e8}\u{5bc}"),
    (0xFB49, Mapped, "\u{5e9}\u{5bc}"),
    (0xFB4A, Mapped, "\u{5ea}\u{5bc}"),
    (0xFB4B, Mapped, "\u{5d5}\u{5b9}"),
    (0xFB4C, Mapped, "\u{5d1}\u{5bf}"),
    (0xFB4D, Mapped, "\u{5db}\u{5bf}"),
    (0xFB4E, Mapped, "\u{5e4}\u{5bf}"),
    (0xFB4F, Mapped, "\u{5d0}\u{5dc}"),
    (0xFB50, Mapped, "\u{671}"),
    (0xFB52, Mapped, "\u{67b}"),
    (0xFB56, Mapped, "\u{67e}"),
    (0xFB5A, Mapped, "\u{680}"),
    (0xFB5E, Mapped, "\u{67a}"),
    (0xFB62, Mapped, "\u{67f}"),
    (0xFB66, Mapped, "\u{679}"),
    (0xFB6A, Mapped, "\u{6a4}"),
    (0xFB6E, Mapped, "\u{6a6}"),
    (0xFB72, Mapped, "\u{684}"),
    (0xFB76, Mapped, "\u{683}"),
    (0xFB7A, Mapped, "\u{686}"),
    (0xFB7E, Mapped, "\u{687}"),
    (0xFB82, Mapped, "\u{68d}"),
    (0xFB84, Mapped, "\u{68c}"),
    (0xFB86, Mapped, "\u{68e}"),
    (0xFB88, Mapped, "\u{688}"),
    (0xFB8A, Mapped, "\u{698}"),
    (0xFB8C, Mapped, "\u{691}"),
    (0xFB8E, Mapped, "\u{6a9}"),
    (0xFB92, Mapped, "\u{6af}"),
    (0xFB96, Mapped, "\u{6b3}"),
    (0xFB9A, Mapped, "\u{6b1}"),
    (0xFB9E, Mapped, "\u{6ba}"),
    (0xFBA0, Mapped, "\u{6bb}"),
    (0xFBA4, Mapped, "\u{6c0}"),
    (0xFBA6, Mapped, "\u{6c1}"),
    (0xFBAA, Mapped, "\u{6be}"),
    (0xFBAE, Mapped, "\u{6d2}"),
    (0xFBB0, Mapped, "\u{6d3}"),
    (0xFBB2, Valid, ""),
    (0xFBD3, Mapped, "\u{6ad}"),
    (0xFBD7, Mapped, "\u{6c7}"),
    (0xFBD9, Mapped, "\u{6c6}"),
    (0xFBDB, Mapped, "\u{6c8}"),
    (0xFBDD, Mapped, "\u{6c7}\u{674}"),
    (0xFBDE, Mapped, "\u{6cb}"),
    (0xFBE0, Mapped, "\u{6c5}"),
    (0xFBE2, Mapped, "\u{6c9}"),
    (0xFBE4, Mapped, "\u{6d0}"),
    (0xFBE8, Mapped, "\u{649}"),
    (0xFBEA, Mapped, "\u{626}\u{627}"),
    (0xFBEC, Mapped, "\u{626}\u{6d5}"),
    (0xFBEE, Mapped, "\u{626}\u{648}"),
    (0xFBF0, Mapped, "\u{626}\u{6c7}"),
    (0xFBF2, Mapped, "\u{626}\u{6c6}"),
    (0xFBF4, Mapped, "\u{626}\u{6c8}"),
    (0xFBF6, Mapped, "\u{626}\u{6d0}"),
    (0xFBF9, Mapped, "\u{626}\u{649}"),
    (0xFBFC, Mapped, "\u{6cc}"),
    (0xFC00, Mapped, "\u{626}\u{62c}"),
    (0xFC01, Mapped, "\u{626}\u{62d}"),
    (0xFC02, Mapped, "\u{626}\u{645}"),
    (0xFC03, Mapped, "\u{626}\u{649}"),
    (0xFC04, Mapped, "\u{626}\u{64a}"),
    (0xFC05, Mapped, "\u{628}\u{62c}"),
    (0xFC06, Mapped, "\u{628}\u{62d}"),
    (0xFC07, Mapped, "\u{628}\u{62e}"),
    (0xFC08, Mapped, "\u{628}\u{645}"),
    (0xFC09, Mapped, "\u{628}\u{649}"),
    (0xFC0A, Mapped, "\u{628}\u{64a}"),
    (0xFC0B, Mapped, "\u{62a}\u{62c}"),
    (0xFC0C, Mapped, "\u{62a}\u{62d}"),
    (0xFC0D, Mapped, "\u{62a}\u{62e}"),
    (0xFC0E, Mapped, "\u{62a}\u{645}"),
    (0xFC0F, Mapped, "\u{62a}\u{649}"),
    (0xFC10, Mapped, "\u{62a}\u{64a}"),
    (0xFC11, Mapped, "\u{62b}\u{62c}"),
    (0xFC12, Mapped, "\u{62b}\u{645}"),
    (0xFC13, Mapped, "\u{62b}\u{649}"),
    (0xFC14, Mapped, "\u{62b}\u{64a}"),
    (0xFC15, Mapped, "\u{62c}\u{62d}"),
    (0xFC16, Mapped, "\u{62c}\u{645}"),
    (0xFC17, Mapped, "\u{62d}\u{62c}"),
    (0xFC18, Mapped, "\u{62d}\u{645}"),
    (0xFC19, Mapped, "\u{62e}\u{62c}"),
    (0xFC1A, Mapped, "\u{62e}\u{62d}"),
    (0xFC1B, Mapped, "\u{62e}\u{645}"),
    (0xFC1C, Mapped, "\u{633}\u{62c}"),
    (0xFC1D, Mapped, "\u{633}\u{62d}"),
    (0xFC1E, Mapped, "\u{633}\u{62e}"),
    (0xFC1F, Mapped, "\u{633}\u{645}"),
    (0xFC20, Mapped, "\u{635}\u{62d}"),
    (0xFC21, Mapped, "\u{635}\u{645}"),
    (0xFC22, Mapped, "\u{636}\u{62c}"),
    (0xFC23, Mapped, "\u{636}\u{62d}"),
    (0xFC24, Mapped, "\u{636}\u{62e}"),
    (0xFC25, Mapped, "\u{636}\u{645}"),
    (0xFC26, Mapped, "\u{637}\u{62d}"),
    (0xFC27, Mapped, "\u{637}\u{645}"),
    (0xFC28, Mapped, "\u{638}\u{645}"),
    (0xFC29, Mapped, "\u{639}\u{62c}"),
    (0xFC2A, Mapped, "\u{639}\u{645}"),
    (0xFC2B, Mapped, "\u{63a}\u{62c}"),
    (0xFC2C, Mapped, "\u{63a}\u{645}"),
    (0xFC2D, Mapped, "\u{641}\u{62c}"),
    (0xFC2E, Mapped, "\u{641}\u{62d}"),
    (0xFC2F, Mapped, "\u{641}\u{62e}"),
    (0xFC30, Mapped, "\u{641}\u{645}"),
    (0xFC31, Mapped, "\u{641}\u{649}"),
    (0xFC32, Mapped, "\u{641}\u{64a}"),
    (0xFC33, Mapped, "\u{642}\u{62d}"),
    (0xFC34, Mapped, "\u{642}\u{645}"),
    (0xFC35, Mapped, "\u{642}\u{649}"),
    (0xFC36, Mapped, "\u{642}\u{64a}"),
    (0xFC37, Mapped, "\u{643}\u{627}"),
    (0xFC38, Mapped, "\u{643}\u{62c}"),
    (0xFC39, Mapped, "\u{643}\u{62d}"),
    (0xFC3A, Mapped, "\u{643}\u{62e}"),
    (0xFC3B, Mapped, "\u{643}\u{644}"),
    (0xFC3C, Mapped, "\u{643}\u{645}"),
    (0xFC3D, Mapped, "\u{643}\u{649}"),
    (0xFC3E, Mapped, "\u{643}\u{64a}"),
    (0xFC3F, Mapped, "\u{644}\u{62c}"),
    (0xFC40, Mapped, "\u{644}\u{62d}"),
    (0xFC41, Mapped, "\u{644}\u{62e}"),
    (0xFC42, Mapped, "\u{644}\u{645}"),
    (0xFC43, Mapped, "\u{644}\u{649}"),
    (0xFC44, Mapped, "\u{644}\u{64a}"),
    (0xFC45, Mapped, "\u{645}\u{62c}"),
    (0xFC46, Mapped, "\u{645}\u{62d}"),
    (0xFC47, Mapped, "\u{645}\u{62e}"),
    (0xFC48, Mapped, "\u{645}\u{645}"),
    (0xFC49, Mapped, "\u{645}\u{649}"),
    (0xFC4A, Mapped, "\u{645}\u{64a}"),
    (0xFC4B, Mapped, "\u{646}\u{62c}"),
    (0xFC4C, Mapped, "\u{646}\u{62d}"),
    (0xFC4D, Mapped, "\u{646}\u{62e}"),
    (0xFC4E, Mapped, "\u{646}\u{645}"),
    (0xFC4F, Mapped, "\u{646}\u{649}"),
    (0xFC50, Mapped, "\u{646}\u{64a}"),
    (0xFC51, Mapped, "\u{647}\u{62c}"),
    (0xFC52, Mapped, "\u{647}\u{645}"),
    (0xFC53, Mapped, "\u{647}\u{649}"),
    (0xFC54, Mapped, "\u{647}\u{64a}"),
    (0xFC55, Mapped, "\u{64a}\u{62c}"),
    (0xFC56, Mapped, "\u{64a}\u{62d}"),
    (0xFC57, Mapped, "\u{64a}\u{62e}"),
    (0xFC58, Mapped, "\u{64a}\u{645}"),
    (0xFC59, Mapped, "\u{64a}\u{649}"),
    (0xFC5A, Mapped, "\u{64a}\u{64a}"),
    (0xFC5B, Mapped, "\u{630}\u{670}"),
    (0xFC5C, Mapped, "\u{631}\u{670}"),
    (0xFC5D, Mapped, "\u{649}\u{670}"),
    (0xFC5E, Mapped, " \u{64c}\u{651}"),
    (0xFC5F, Mapped, " \u{64d}\u{651}"),
    (0xFC60, Mapped, " \u{64e}\u{651}"),
    (0xFC61, Mapped, " \u{64f}\u{651}"),
    (0xFC62, Mapped, " \u{650}\u{651}"),
    (0xFC63, Mapped, " \u{651}\u{670}"),
    (0xFC64, Mapped, "\u{626}\u{631}"),
    (0xFC65, Mapped, "\u{626}\u{632}"),
    (0xFC66, Mapped, "\u{626}\u{645}"),
    (0xFC67, Mapped, "\u{626}\u{646}"),
    (0xFC68, Mapped, "\u{626}\u{649}"),
    (0xFC69, Mapped, "\u{626}\u{64a}"),
    (0xFC6A, Mapped, "\u{628}\u{631}"),
    (0xFC6B, Mapped, "\u{628}\u{632}"),
    (0xFC6C, Mapped, "\u{628}\u{645}"),
    (0xFC6D, Mapped, "\u{628}\u{646}"),
    (0xFC6E, Mapped, "\u{628}\u{649}"),
    (0xFC6F, Mapped, "\u{628}\u{64a}"),
    (0xFC70, Mapped, "\u{62a}\u{631}"),
    (0xFC71, Mapped, "\u{62a}\u{632}"),
    (0xFC72, Mapped, "\u{62a}\u{645}"),
    (0xFC73, Mapped, "\u{62a}\u{646}"),
    (0xFC74, Mapped, "\u{62a}\u{649}"),
    (0xFC75, Mapped, "\u{62a}\u{64a}"),
    (0xFC76, Mapped, "\u{62b}\u{631}"),
    (0xFC77, Mapped, "\u{62b}\u{632}"),
    (0xFC78, Mapped, "\u{62b}\u{645}"),
    (0xFC79, Mapped, "\u{62b}\u{646}"),
    (0xFC7A, Mapped, "\u{62b}\u{649}"),
    (0xFC7B, Mapped, "\u{62b}\u{64a}"),
    (0xFC7C, Mapped, "\u{641}\u{649}"),
    (0xFC7D, Mapped, "\u{641}\u{64a}"),
    (0xFC7E, Mapped, "\u{642}\u{649}"),
    (0xFC7F, Mapped, "\u{642}\u{64a}"),
    (0xFC80, Mapped, "\u{643}\u{627}"),
    (0xFC81, Mapped, "\u{643}\u{644}"),
    (0xFC82, Mapped, "\u{643}\u{645}"),
    (0xFC83, Mapped, "\u{643}\u{649}"),
    (0xFC84, Mapped, "\u{643}\u{64a}"),
    (0xFC85, Mapped, "\u{644}\u{645}"),
    (0xFC86, Mapped, "\u{644}\u{649}"),
    (0xFC87, Mapped, "\u{644}\u{64a}"),
    (0xFC88, Mapped, "\u{645}\u{627}"),
    (0xFC89, Mapped, "\u{645}\u{645}"),
    (0xFC8A, Mapped, "\u{646}\u{631}"),
    (0xFC8B, Mapped, "\u{646}\u{632}"),
    (0xFC8C, Mapped, "\u{646}\u{645}"),
    (0xFC8D, Mapped, "\u{646}\u{646}"),
    (0xFC8E, Mapped, "\u{646}\u{649}"),
    (0xFC8F, Mapped, "\u{646}\u{64a}"),
    (0xFC90, Mapped, "\u{649}\u{670}"),
    (0xFC91, Mapped, "\u{64a}\u{631}"),
    (0xFC92, Mapped, "\u{64a}\u{632}"),
    (0xFC93, Mapped, "\u{64a}\u{645}"),
    (0xFC94, Mapped, "\u{64a}\u{646}"),
    (0xFC95, Mapped, "\u{64a}\u{649}"),
    (0xFC96, Mapped, "\u{64a}\u{64a}"),
    (0xFC97, Mapped, "\u{626}\u{62c}"),
    (0xFC98, Mapped, "\u{626}\u{62d}"),
    (0xFC99, Mapped, "\u{626}\u{62e}"),
    (0xFC9A, Mapped, "\u{626}\u{645}"),
    (0xFC9B, Mapped, "\u{626}\u{647}"),
    (0xFC9C, Mapped, "\u{628}\u{62c}"),
    (0xFC9D, Mapped, "\u{628}\u{62d}"),
    (0xFC9E, Mapped, "\u{628}\u{62e}"),
    (0xFC9F, Mapped, "\u{628}\u{645}"),
    (0xFCA0, Mapped, "\u{628}\u{647}"),
    (0xFCA1, Mapped, "\u{62a}\u{62c}"),
    (0xFCA2, Mapped, "\u{62a}\u{62d}"),
    (0xFCA3, Mapped, "\u{62a}\u{62e}"),
    (0xFCA4, Mapped, "\u{62a}\u{645}"),
    (0xFCA5, Mapped, "\u{62a}\u{647}"),
    (0xFCA6, Mapped, "\u{62b}\u{645}"),
    (0xFCA7, Mapped, "\u{62c}\u{62d}"),
    (0xFCA8, Mapped, "\u{62c}\u{645}"),
    (0xFCA9, Mapped, "\u{62d}\u{62c}"),
    (0xFCAA, Mapped, "\u{62d}\u{645}"),
    (0xFCAB, Mapped, "\u{62e}\u{62c}"),
    (0xFCAC, Mapped, "\u{62e}\u{645}"),
    (0xFCAD, Mapped, "\u{633}\u{62c}"),
    (0xFCAE, Mapped, "\u{633}\u{62d}"),
    (0xFCAF, Mapped, "\u{633}\u{62e}"),
    (0xFCB0, Mapped, "\u{633}\u{645}"),
    (0xFCB1, Mapped, "\u{635}\u{62d}"),
    (0xFCB2, Mapped, "\u{635}\u{62e}"),
    (0xFCB3, Mapped, "\u{635}\u{645}"),
    (0xFCB4, Mapped, "\u{636}\u{62c}"),
    (0xFCB5, Mapped, "\u{636}\u{62d}"),
    (0xFCB6, Mapped, "\u{636}\u{62e}"),
    (0xFCB7, Mapped, "\u{636}\u{645}"),
    (0xFCB8, Mapped, "\u{637}\u{62d}"),
    (0xFCB9, Mapped, "\u{638}\u{645}"),
    (0xFCBA, Mapped, "\u{639}\u{62c}"),
    (0xFCBB, Mapped, "\u{639}\u{645}"),
    (0xFCBC, Mapped, "\u{63a}\u{62c}"),
    (0xFCBD, Mapped, "\u{63a}\u{645}"),
    (0xFCBE, Mapped, "\u{641}\u{62c}"),
    (0xFCBF, Mapped, "\u{641}\u{62d}"),
    (0xFCC0, Mapped, "\u{641}\u{62e}"),
    (0xFCC1, Mapped, "\u{641}\u{645}"),
    (0xFCC2, Mapped, "\u{642}\u{62d}"),
    (0xFCC3, Mapped, "\u{642}\u{645}"),
    (0xFCC4, Mapped, "\u{643}\u{62c}"),
    (0xFCC5, Mapped, "\u{643}\u{62d}"),
    (0xFCC6, Mapped, "\u{643}\u{62e}"),
    (0xFCC7, Mapped, "\u{643}\u{644}"),
    (0xFCC8, Mapped, "\u{643}\u{645}"),
    (0xFCC9, Mapped, "\u{644}\u{62c}"),
    (0xFCCA, Mapped, "\u{644}\u{62d}"),
    (0xFCCB, Mapped, "\u{644}\u{62e}"),
    (0xFCCC, Mapped, "\u{644}\u{645}"),
    (0xFCCD, Mapped, "\u{644}\u{647}"),
    (0xFCCE, Mapped, "\u{645}\u{62c}"),
    (0xFCCF, Mapped, "\u{645}\u{62d}"),
    (0xFCD0, Mapped, "\u{645}\u{62e}"),
    (0xFCD1, Mapped, "\u{645}\u{645}"),
    (0xFCD2, Mapped, "\u{646}\u{62c}"),
    (0xFCD3, Mapped, "\u{646}\u{62d}"),
    (0xFCD4, Mapped, "\u{646}\u{62e}"),
    (0xFCD5, Mapped, "\u{646}\u{645}"),
    (0xFCD6, Mapped, "\u{646}\u{647}"),
    (0xFCD7, Mapped, "\u{647}\u{62c}"),
    (0xFCD8, Mapped, "\u{647}\u{645}"),
    (0xFCD9, Mapped, "\u{647}\u{670}"),
    (0xFCDA, Mapped, "\u{64a}\u{62c}"),
    (0xFCDB, Mapped, "\u{64a}\u{62d}"),
    (0xFCDC, Mapped, "\u{64a}\u{62e}"),
    (0xFCDD, Mapped, "\u{64a}\u{645}"),
    (0xFCDE, Mapped, "\u{64a}\u{647}"),
    (0xFCDF, Mapped, "\u{626}\u{645}"),
    (0xFCE0, Mapped, "\u{626}\u{647}"),
    (0xFCE1, Mapped, "\u{628}\u{645}"),
    (0xFCE2, Mapped, "\u{628}\u{647}"),
    (0xFCE3, Mapped, "\u{62a}\u{645}"),
    (0xFCE4, Mapped, "\u{62a}\u{647}"),
    (0xFCE5, Mapped, "\u{62b}\u{645}"),
    (0xFCE6, Mapped, "\u{62b}\u{647}"),
    (0xFCE7, Mapped, "\u{633}\u{645}"),
    (0xFCE8, Mapped, "\u{633}\u{647}"),
    (0xFCE9, Mapped, "\u{634}\u{645}"),
    (0xFCEA, Mapped, "\u{634}\u{647}"),
    (0xFCEB, Mapped, "\u{643}\u{644}"),
    (0xFCEC, Mapped, "\u{643}\u{645}"),
    (0xFCED, Mapped, "\u{644}\u{645}"),
    (0xFCEE, Mapped, "\u{646}\u{645}"),
    (0xFCEF, Mapped, "\u{646}\u{647}"),
    (0xFCF0, Mapped, "\u{64a}\u{645}"),
    (0xFCF1, Mapped, "\u{64a}\u{647}"),
    (0xFCF2, Mapped, "\u{640}\u{64e}\u{651}"),
    (0xFCF3, Mapped, "\u{640}\u{64f}\u{651}"),
    (0xFCF4, Mapped, "\u{640}\u{650}\u{651}"),
    (0xFCF5, Mapped, "\u{637}\u{649}"),
    (0xFCF6, Mapped, "\u{637}\u{64a}"),
    (0xFCF7, Mapped, "\u{639}\u{649}"),
    (0xFCF8, Mapped, "\u{639}\u{64a}"),
    (0xFCF9, Mapped, "\u{63a}\u{649}"),
    (0xFCFA, Mapped, "\u{63a}\u{64a}"),
    (0xFCFB, Mapped, "\u{633}\u{649}"),
    (0xFCFC, Mapped, "\u{633}\u{64a}"),
    (0xFCFD, Mapped, "\u{634}\u{649}"),
    (0xFCFE, Mapped, "\u{634}\u{64a}"),
    (0xFCFF, Mapped, "\u{62d}\u{649}"),
    (0xFD00, Mapped, "\u{62d}\u{64a}"),
    (0xFD01, Mapped, "\u{62c}\u{649}"),
    (0xFD02, Mapped, "\u{62c}\u{64a}"),
    (0xFD03, Mapped, "\u{62e}\u{649}"),
    (0xFD04, Mapped, "\u{62e}\u{64a}"),
    (0xFD05, Mapped, "\u{635}\u{649}"),
    (0xFD06, Mapped, "\u{635}\u{64a}"),
    (0xFD07, Mapped, "\u{636}\u{649}"),
    (0xFD08, Mapped, "\u{636}\u{64a}"),
    (0xFD09, Mapped, "\u{634}\u{62c}"),
    (0xFD0A, Mapped, "\u{634}\u{62d}"),
    (0xFD0B, Mapped, "\u{634}\u{62e}"),
    (0xFD0C, Mapped, "\u{634}\u{645}"),
    (0xFD0D, Mapped, "\u{634}\u{631}"),
    (0xFD0E, Mapped, "\u{633}\u{631}"),
    (0xFD0F, Mapped, "\u{635}\u{631}"),
    (0xFD10, Mapped, "\u{636}\u{631}"),
    (0xFD11, Mapped, "\u{637}\u{649}"),
    (0xFD12, Mapped, "\u{637}\u{64a}"),
    (0xFD13, Mapped, "\u{639}\u{649}"),
    (0xFD14, Mapped, "\u{639}\u{64a}"),
    (0xFD15, Mapped, "\u{63a}\u{649}"),
    (0xFD16, Mapped, "\u{63a}\u{64a}"),
    (0xFD17, Mapped, "\u{633}\u{649}"),
    (0xFD18, Mapped, "\u{633}\u{64a}"),
    (0xFD19, Mapped, "\u{634}\u{649}"),
    (0xFD1A, Mapped, "\u{634}\u{64a}"),
    (0xFD1B, Mapped, "\u{62d}\u{649}"),
    (0xFD1C, Mapped, "\u{62d}\u{64a}"),
    (0xFD1D, Mapped, "\u{62c}\u{649}"),
    (0xFD1E, Mapped, "\u{62c}\u{64a}"),
    (0xFD1F, Mapped, "\u{62e}\u{649}"),
    (0xFD20, Mapped, "\u{62e}\u{64a}"),
    (0xFD21, Mapped, "\u{635}\u{649}"),
    (0xFD22, Mapped, "\u{635}\u{64a}"),
    (0xFD23, Mapped, "\u{636}\u{649}"),
    (0xFD24, Mapped, "\u{636}\u{64a}"),
    (0xFD25, Mapped, "\u{634}\u{62c}"),
    (0xFD26, Mapped, "\u{634}\u{62d}"),
    (0xFD27, Mapped, "\u{634}\u{62e}"),
    (0xFD28, Mapped, "\u{634}\u{645}"),
    (0xFD29, Mapped, "\u{634}\u{631}"),
    (0xFD2A, Mapped, "\u{633}\u{631}"),
    (0xFD2B, Mapped, "\u{635}\u{631}"),
    (0xFD2C, Mapped, "\u{636}\u{631}"),
    (0xFD2D, Mapped, "\u{634}\u{62c}"),
    (0xFD2E, Mapped, "\u{634}\u{62d}"),
    (0xFD2F, Mapped, "\u{634}\u{62e}"),
    (0xFD30, Mapped, "\u{634}\u{645}"),
    (0xFD31, Mapped, "\u{633}\u{647}"),
    (0xFD32, Mapped, "\u{634}\u{647}"),
    (0xFD33, Mapped, "\u{637}\u{645}"),
    (0xFD34, Mapped, "\u{633}\u{62c}"),
    (0xFD35, Mapped, "\u{633}\u{62d}"),
    (0xFD36, Mapped, "\u{633}\u{62e}"),
    (0xFD37, Mapped, "\u{634}\u{62c}"),
    (0xFD38, Mapped, "\u{634}\u{62d}"),
    (0xFD39, Mapped, "\u{634}\u{62e}"),
    (0xFD3A, Mapped, "\u{637}\u{645}"),
    (0xFD3B, Mapped, "\u{638}\u{645}"),
    (0xFD3C, Mapped, "\u{627}\u{64b}"),
    (0xFD3E, Valid, ""),
    (0xFD50, Mapped, "\u{62a}\u{62c}\u{645}"),
    (0xFD51, Mapped, "\u{62a}\u{62d}\u{62c}"),
    (0xFD53, Mapped, "\u{62a}\u{62d}\u{645}"),
    (0xFD54, Mapped, "\u{62a}\u{62e}\u{645}"),
    (0xFD55, Mapped, "\u{62a}\u{645}\u{62c}"),
    (0xFD56, Mapped, "\u{62a}\u{645}\u{62d}"),
    (0xFD57, Mapped, "\u{62a}\u{645}\u{62e}"),
    (0xFD58, Mapped, "\u{62c}\u{645}\u{62d}"),
    (0xFD5A, Mapped, "\u{62d}\u{645}\u{64a}"),
    (0xFD5B, Mapped, "\u{62d}\u{645}\u{649}"),
    (0xFD5C, Mapped, "\u{633}\u{62d}\u{62c}"),
    (0xFD5D, Mapped, "\u{633}\u{62c}\u{62d}"),
    (0xFD5E, Mapped, "\u{633}\u{62c}\u{649}"),
    (0xFD5F, Mapped, "\u{633}\u{645}\u{62d}"),
    (0xFD61, Mapped, "\u{633}\u{645}\u{62c}"),
    (0xFD62, Mapped, "\u{633}\u{645}\u{645}"),
    (0xFD64, Mapped, "\u{635}\u{62d}\u{62d}"),
    (0xFD66, Mapped, "\u{635}\u{645}\u{645}"),
    (0xFD67, Mapped, "\u{634}\u{62d}\u{645}"),
    (0xFD69, Mapped, "\u{634}\u{62c}\u{64a}"),
    (0xFD6A, Mapped, "\u{634}\u{645}\u{62e}"),
    (0xFD6C, Mapped, "\u{634}\u{645}\u{645}"),
    (0xFD6E, Mapped, "\u{636}\u{62d}\u{649}"),
    (0xFD6F, Mapped, "\u{636}\u{62e}\u{645}"),
    (0xFD71, Mapped, "\u{637}\u{645}\u{62d}"),
    (0xFD73, Mapped, "\u{637}\u{645}\u{645}"),
    (0xFD74, Mapped, "\u{637}\u{645}\u{64a}"),
    (0xFD75, Mapped, "\u{639}\u{62c}\u{645}"),
    (0xFD76, Mapped, "\u{639}\u{645}\u{645}"),
    (0xFD78, Mapped, "\u{639}\u{645}\u{649}"),
    (0xFD79, Mapped, "\u{63a}\u{645}\u{645}"),
    (0xFD7A, Mapped, "\u{63a}\u{645}\u{64a}"),
    (0xFD7B, Mapped, "\u{63a}\u{645}\u{649}"),
    (0xFD7C, Mapped, "\u{641}\u{62e}\u{645}"),
    (0xFD7E, Mapped, "\u{642}\u{645}\u{62d}"),
    (0xFD7F, Mapped, "\u{642}\u{645}\u{645}"),
    (0xFD80, Mapped, "\u{644}\u{62d}\u{645}"),
    (0xFD81, Mapped, "\u{644}\u{62d}\u{64a}"),
    (0xFD82, Mapped, "\u{644}\u{62d}\u{649}"),
    (0xFD83, Mapped, "\u{644}\u{62c}\u{62c}"),
    (0xFD85, Mapped, "\u{644}\u{62e}\u{645}"),
    (0xFD87, Mapped, "\u{644}\u{645}\u{62d}"),
    (0xFD89, Mapped, "\u{645}\u{62d}\u{62c}"),
    (0xFD8A, Mapped, "\u{645}\u{62d}\u{645}"),
    (0xFD8B, Mapped, "\u{645}\u{62d}\u{64a}"),
    (0xFD8C, Mapped, "\u{645}\u{62c}\u{62d}"),
    (0xFD8D, Mapped, "\u{645}\u{62c}\u{645}"),
    (0xFD8E, Mapped, "\u{645}\u{62e}\u{62c}"),
    (0xFD8F, Mapped, "\u{645}\u{62e}\u{645}"),
    (0xFD90, Valid, ""),
    (0xFD92, Mapped, "\u{645}\u{62c}\u{62e}"),
    (0xFD93, Mapped, "\u{647}\u{645}\u{62c}"),
    (0xFD94, Mapped, "\u{647}\u{645}\u{645}"),
    (0xFD95, Mapped, "\u{646}\u{62d}\u{645}"),
    (0xFD96, Mapped, "\u{646}\u{62d}\u{649}"),
    (0xFD97, Mapped, "\u{646}\u{62c}\u{645}"),
    (0xFD99, Mapped, "\u{646}\u{62c}\u{649}"),
    (0xFD9A, Mapped, "\u{646}\u{645}\u{64a}"),
    (0xFD9B, Mapped, "\u{646}\u{645}\u{649}"),
    (0xFD9C, Mapped, "\u{64a}\u{645}\u{645}"),
    (0xFD9E, Mapped, "\u{628}\u{62e}\u{64a}"),
    (0xFD9F, Mapped, "\u{62a}\u{62c}\u{64a}"),
    (0xFDA0, Mapped, "\u{62a}\u{62c}\u{649}"),
    (0xFDA1, Mapped, "\u{62a}\u{62e}\u{64a}"),
    (0xFDA2, Mapped, "\u{62a}\u{62e}\u{649}"),
    (0xFDA3, Mapped, "\u{62a}\u{645}\u{64a}"),
    (0xFDA4, Mapped, "\u{62a}\u{645}\u{649}"),
    (0xFDA5, Mapped, "\u{62c}\u{645}\u{64a}"),
    (0xFDA6, Mapped, "\u{62c}\u{62d}\u{649}"),
    (0xFDA7, Mapped, "\u{62c}\u{645}\u{649}"),
    (0xFDA8, Mapped, "\u{633}\u{62e}\u{649}"),
    (0xFDA9, Mapped, "\u{635}\u{62d}\u{64a}"),
    (0xFDAA, Mapped, "\u{634}\u{62d}\u{64a}"),
    (0xFDAB, Mapped, "\u{636}\u{62d}\u{64a}"),
    (0xFDAC, Mapped, "\u{644}\u{62c}\u{64a}"),
    (0xFDAD, Mapped, "\u{644}\u{645}\u{64a}"),
    (0xFDAE, Mapped, "\u{64a}\u{62d}\u{64a}"),
    (0xFDAF, Mapped, "\u{64a}\u{62c}\u{64a}"),
    (0xFDB0, Mapped, "\u{64a}\u{645}\u{64a}"),
    (0xFDB1, Mapped, "\u{645}\u{645}\u{64a}"),
    (0xFDB2, Mapped, "\u{642}\u{645}\u{64a}"),
    (0xFDB3, Mapped, "\u{646}\u{62d}\u{64a}"),
    (0xFDB4, Mapped, "\u{642}\u{645}\u{62d}"),
    (0xFDB5, Mapped, "\u{644}\u{62d}\u{645}"),
    (0xFDB6, Mapped, "\u{639}\u{645}\u{64a}"),
    (0xFDB7, Mapped, "\u{643}\u{645}\u{64a}"),
    (0xFDB8, Mapped, "\u{646}\u{62c}\u{62d}"),
    (0xFDB9, Mapped, "\u{645}\u{62e}\u{64a}"),
    (0xFDBA, Mapped, "\u{644}\u{62c}\u{645}"),
    (0xFDBB, Mapped, "\u{643}\u{645}\u{645}"),
    (0xFDBC, Mapped, "\u{644}\u{62c}\u{645}"),
    (0xFDBD, Mapped, "\u{646}\u{62c}\u{62d}"),
    (0xFDBE, Mapped, "\u{62c}\u{62d}\u{64a}"),
    (0xFDBF, Mapped, "\u{62d}\u{62c}\u{64a}"),
    (0xFDC0, Mapped, "\u{645}\u{62c}\u{64a}"),
    (0xFDC1, Mapped, "\u{641}\u{645}\u{64a}"),
    (0xFDC2, Mapped, "\u{628}\u{62d}\u{64a}"),
    (0xFDC3, Mapped, "\u{643}\u{645}\u{645}"),
    (0xFDC4, Mapped, "\u{639}\u{62c}\u{645}"),
    (0xFDC5, Mapped, "\u{635}\u{645}\u{645}"),
    (0xFDC6, Mapped, "\u{633}\u{62e}\u{64a}"),
    (0xFDC7, Mapped, "\u{646}\u{62c}\u{64a}"),
    (0xFDC8, Valid, ""),
    (0xFDD0, Disallowed, ""),
    (0xFDF0, Mapped, "\u{635}\u{644}\u{6d2}"),
    (0xFDF1, Mapped, "\u{642}\u{644}\u{6d2}"),
    (0xFDF2, Mapped, "\u{627}\u{644}\u{644}\u{647}"),
    (0xFDF3, Mapped, "\u{627}\u{643}\u{628}\u{631}"),
    (0xFDF4, Mapped, "\u{645}\u{62d}\u{645}\u{62f}"),
    (0xFDF5, Mapped, "\u{635}\u{644}\u{639}\u{645}"),
    (0xFDF6, Mapped, "\u{631}\u{633}\u{648}\u{644}"),
    (0xFDF7, Mapped, "\u{639}\u{644}\u{64a}\u{647}"),
    (0xFDF8, Mapped, "\u{648}\u{633}\u{644}\u{645}"),
    (0xFDF9, Mapped, "\u{635}\u{644}\u{649}"),
    (0xFDFA, Mapped, "\u{635}\u{644}\u{649} \u{627}\u{644}\u{644}\u{647} \u{639}\u{644}\u{64a}\u{647} \u{648}\u{633}\u{644}\u{645}"),
    (0xFDFB, Mapped, "\u{62c}\u{644} \u{62c}\u{644}\u{627}\u{644}\u{647}"),
    (0xFDFC, Mapped, "\u{631}\u{6cc}\u{627}\u{644}"),
    (0xFDFD, Valid, ""),
    (0xFE00, Ignored, ""),
    (0xFE10, Mapped, ","),
    (0xFE11, Mapped, "\u{3001}"),
    (0xFE12, Disallowed, ""),
    (0xFE13, Mapped, ":"),
    (0xFE14, Mapped, ";"),
    (0xFE15, Mapped, "!"),
    (0xFE16, Mapped, "?"),
    (0xFE17, Mapped, "\u{3016}"),
    (0xFE18, Mapped, "\u{3017}"),
    (0xFE19, Disallowed, ""),
    (0xFE20, Valid, ""),
    (0xFE30, Disallowed, ""),
    (0xFE31, Mapped, "\u{2014}"),
    (0xFE32, Mapped, "\u{2013}"),
    (0xFE33, Mapped, "_"),
    (0xFE35, Mapped, "("),
    (0xFE36, Mapped, ")"),
    (0xFE37, Mapped, "{"),
    (0xFE38, Mapped, "}"),
    (0xFE39, Mapped, "\u{3014}"),
    (0xFE3A, Mapped, "\u{3015}"),
    (0xFE3B, Mapped, "\u{3010}"),
    (0xFE3C, Mapped, "\u{3011}"),
    (0xFE3D, Mapped, "\u{300a}"),
    (0xFE3E, Mapped, "\u{300b}"),
    (0xFE3F, Mapped, "\u{3008}"),
    (0xFE40, Mapped, "\u{3009}"),
    (0xFE41, Mapped, "\u{300c}"),
    (0xFE42, Mapped, "\u{300d}"),
    (0xFE43, Mapped, "\u{300e}"),
    (0xFE44, Mapped, "\u{300f}"),
    (0xFE45, Valid, ""),
    (0xFE47, Mapped, "["),
    (0xFE48, Mapped, "]"),
    (0xFE49, Mapped, " \u{305}"),
    (0xFE4D, Mapped, "_"),
    (0xFE50, Mapped, ","),
    (0xFE51, Mapped, "\u{3001}"),
    (0xFE52, Disallowed, ""),
    (0xFE54, Mapped, ";"),
    (0xFE55, Mapped, ":"),
    (0xFE56, Mapped, "?"),
    (0xFE57, Mapped, "!"),
    (0xFE58, Mapped, "\u{2014}"),
    (0xFE59, Mapped, "("),
    (0xFE5A, Mapped, ")"),
    (0xFE5B, Mapped, "{"),
    (0xFE5C, Mapped, "}"),
    (0xFE5D, Mapped, "\u{3014}"),
    (0xFE5E, Mapped, "\u{3015}"),
    (0xFE5F, Mapped, "#"),
    (0xFE60, Mapped, "&"),
    (0xFE61, Mapped, "*"),
    (0xFE62, Mapped, "+"),
    (0xFE63, Mapped, "-"),
    (0xFE64, Mapped, "<"),
    (0xFE65, Mapped, ">"),
    (0xFE66, Mapped, "="),
    (0xFE67, Disallowed, ""),
    (0xFE68, Mapped, "\u{5c}"),
    (0xFE69, Mapped, "$"),
    (0xFE6A, Mapped, "%"),
    (0xFE6B, Mapped, "@"),
    (0xFE6C, Disallowed, ""),
    (0xFE70, Mapped, " \u{64b}"),
    (0xFE71, Mapped, "\u{640}\u{64b}"),
    (0xFE72, Mapped, " \u{64c}"),
    (0xFE73, Valid, ""),
    (0xFE74, Mapped, " \u{64d}"),
    (0xFE75, Disallowed, ""),
    (0xFE76, Mapped, " \u{64e}"),
    (0xFE77, Mapped, "\u{640}\u{64e}"),
    (0xFE78, Mapped, " \u{64f}"),
    (0xFE79, Mapped, "\u{640}\u{64f}"),
    (0xFE7A, Mapped, " \u{650}"),
    (0xFE7B, Mapped, "\u{640}\u{650}"),
    (0xFE7C, Mapped, " \u{651}"),
    (0xFE7D, Mapped, "\u{640}\u{651}"),
    (0xFE7E, Mapped, " \u{652}"),
    (0xFE7F, Mapped, "\u{640}\u{652}"),
    (0xFE80, Mapped, "\u{621}"),
    (0xFE81, Mapped, "\u{622}"),
    (0xFE83, Mapped, "\u{623}"),
    (0xFE85, Mapped, "\u{624}"),
    (0xFE87, Mapped, "\u{625}"),
    (0xFE89, Mapped, "\u{626}"),
    (0xFE8D, Mapped, "\u{627}"),
    (0xFE8F, Mapped, "\u{628}"),
    (0xFE93, Mapped, "\u{629}"),
    (0xFE95, Mapped, "\u{62a}"),
    (0xFE99, Mapped, "\u{62b}"),
    (0xFE9D, Mapped, "\u{62c}"),
    (0xFEA1, Mapped, "\u{62d}"),
    (0xFEA5, Mapped, "\u{62e}"),
    (0xFEA9, Mapped, "\u{62f}"),
    (0xFEAB, Mapped, "\u{630}"),
    (0xFEAD, Mapped, "\u{631}"),
    (0xFEAF, Mapped, "\u{632}"),
    (0xFEB1, Mapped, "\u{633}"),
    (0xFEB5, Mapped, "\u{634}"),
    (0xFEB9, Mapped, "\u{635}"),
    (0xFEBD, Mapped, "\u{636}"),
    (0xFEC1, Mapped, "\u{637}"),
    (0xFEC5, Mapped, "\u{638}"),
    (0xFEC9, Mapped, "\u{639}"),
    (0xFECD, Mapped, "\u{63a}"),
    (0xFED1, Mapped, "\u{641}"),
    (0xFED5, Mapped, "\u{642}"),
    (0xFED9, Mapped, "\u{643}"),
    (0xFEDD, Mapped, "\u{644}"),
    (0xFEE1, Mapped, "\u{645}"),
    (0xFEE5, Mapped, "\u{646}"),
    (0xFEE9, Mapped, "\u{647}"),
    (0xFEED, Mapped, "\u{648}"),
    (0xFEEF, Mapped, "\u{649}"),
    (0xFEF1, Mapped, "\u{64a}"),
    (0xFEF5, Mapped, "\u{644}\u{622}"),
    (0xFEF7, Mapped, "\u{644}\u{623}"),
    (0xFEF9, Mapped, "\u{644}\u{625}"),
    (0xFEFB, Mapped, "\u{644}\u{627}"),
    (0xFEFD, Disallowed, ""),
    (0xFEFF, Ignored, ""),
    (0xFF00, Disallowed, ""),
    (0xFF01, Mapped, "!"),
    (0xFF02, Mapped, "\u{22}"),
    (0xFF03, Mapped, "#"),
    (0xFF04, Mapped, "$"),
    (0xFF05, Mapped, "%"),
    (0xFF06, Mapped, "&"),
    (0xFF07, Mapped, "'"),
    (0xFF08, Mapped, "("),
    (0xFF09, Mapped, ")"),
    (0xFF0A, Mapped, "*"),
    (0xFF0B, Mapped, "+"),
    (0xFF0C, Mapped, ","),
    (0xFF0D, Mapped, "-"),
    (0xFF0E, Mapped, "."),
    (0xFF0F, Mapped, "/"),
    (0xFF10, Mapped, "0"),
    (0xFF11, Mapped, "1"),
    (0xFF12, Mapped, "2"),
    (0xFF13, Mapped, "3"),
    (0xFF14, Mapped, "4"),
    (0xFF15, Mapped, "5"),
    (0xFF16, Mapped, "6"),
    (0xFF17, Mapped, "7"),
    (0xFF18, Mapped, "8"),
    (0xFF19, Mapped, "9"),
    (0xFF1A, Mapped, ":"),
    (0xFF1B, Mapped, ";"),
    (0xFF1C, Mapped, "<"),
    (0xFF1D, Mapped, "="),
    (0xFF1E, Mapped, ">"),
    (0xFF1F, Mapped, "?"),
    (0xFF20, Mapped, "@"),
    (0xFF21, Mapped, "a"),
    (0xFF22, Mapped, "b"),
    (0xFF23, Mapped, "c"),
    (0xFF24, Mapped, "d"),
    (0xFF25, Mapped, "e"),
    (0xFF26, Mapped, "f"),
    (0xFF27, Mapped, "g"),
    (0xFF28, Mapped, "h"),
    (0xFF29, Mapped, "i"),
    (0xFF2A, Mapped, "j"),
    (0xFF2B, Mapped, "k"),
    (0xFF2C, Mapped, "l"),
    (0xFF2D, Mapped, "m"),
    (0xFF2E, Mapped, "n"),
    (0xFF2F, Mapped, "o"),
    (0xFF30, Mapped, "p"),
    (0xFF31, Mapped, "q"),
    (0xFF32, Mapped, "r"),
    (0xFF33, Mapped, "s"),
    (0xFF34, Mapped, "t"),
    (0xFF35, Mapped, "u"),
    (0xFF36, Mapped, "v"),
    (0xFF37, Mapped, "w"),
    (0xFF38, Mapped, "x"),
    (0xFF39, Mapped, "y"),
    (0xFF3A, Mapped, "z"),
    (0xFF3B, Mapped, "["),
    (0xFF3C, Mapped, "\u{5c}"),
    (0xFF3D, Mapped, "]"),
    (0xFF3E, Mapped, "^"),
    (0xFF3F, Mapped, "_"),
    (0xFF40, Mapped, "`"),
    (0xFF41, Mapped, "a"),
    (0xFF42, Mapped, "b"),
    (0xFF43, Mapped, "c"),
    (0xFF44, Mapped, "d"),
    (0xFF45, Mapped, "e"),
    (0xFF46, Mapped, "f"),
    (0xFF47, Mapped, "g"),
    (0xFF48, Mapped, "h"),
    (0xFF49, Mapped, "i"),
    (0xFF4A, Mapped, "j"),
    (0xFF4B, Mapped, "k"),
    (0xFF4C, Mapped, "l"),
    (0xFF4D, Mapped, "m"),
    (0xFF4E, Mapped, "n"),
    (0xFF4F, Mapped, "o"),
    (0xFF50, Mapped, "p"),
    (0xFF51, Mapped, "q"),
    (0xFF52, Mapped, "r"),
    (0xFF53, Mapped, "s"),
    (0xFF54, Mapped, "t"),
    (0xFF55, Mapped, "u"),
    (0xFF56, Mapped, "v"),
    (0xFF57, Mapped, "w"),
    (0xFF58, Mapped, "x"),
    (0xFF59, Mapped, "y"),
    (0xFF5A, Mapped, "z"),
    (0xFF5B, Mapped, "{"),
    (0xFF5C, Mapped, "|"),
    (0xFF5D, Mapped, "}"),
    (0xFF5E, Mapped, "~"),
    (0xFF5F, Mapped, "\u{2985}"),
    (0xFF60, Mapped, "\u{2986}"),
    (0xFF61, Mapped, "."),
    (0xFF62, Mapped, "\u{300c}"),
    (0xFF63, Mapped, "\u{300d}"),
    (0xFF64, Mapped, "\u{3001}"),
    (0xFF65, Mapped, "\u{30fb}"),
    (0xFF66, Mapped, "\u{30f2}"),
    (0xFF67, Mapped, "\u{30a1}"),
    (0xFF68, Mapped, "\u{30a3}"),
    (0xFF69, Mapped, "\u{30a5}"),
    (0xFF6A, Mapped, "\u{30a7}"),
    (0xFF6B, Mapped, "\u{30a9}"),
    (0xFF6C, Mapped, "\u{30e3}"),
    (0xFF6D, Mapped, "\u{30e5}"),
    (0xFF6E, Mapped, "\u{30e7}"),
    (0xFF6F, Mapped, "\u{30c3}"),
    (0xFF70, Mapped, "\u{30fc}"),
    (0xFF71, Mapped, "\u{30a2}"),
    (0xFF72, Mapped, "\u{30a4}"),
    (0xFF73, Mapped, "\u{30a6}"),
    (0xFF74, Mapped, "\u{30a8}"),
    (0xFF75, Mapped, "\u{30aa}"),
    (0xFF76, Mapped, "\u{30ab}"),
    (0xFF77, Mapped, "\u{30ad}"),
    (0xFF78, Mapped, "\u{30af}"),
    (0xFF79, Mapped, "\u{30b1}"),
    (0xFF7A, Mapped, "\u{30b3}"),
    (0xFF7B, Mapped, "\u{30b5}"),
    (0xFF7C, Mapped, "\u{30b7}"),
    (0xFF7D, Mapped, "\u{30b9}"),
    (0xFF7E, Mapped, "\u{30bb}"),
    (0xFF7F, Mapped, "\u{30bd}"),
    (0xFF80, Mapped, "\u{30bf}"),
    (0xFF81, Mapped, "\u{30c1}"),
    (0xFF82, Mapped, "\u{30c4}"),
    (0xFF83, Mapped, "\u{30c6}"),
    (0xFF84, Mapped, "\u{30c8}"),
    (0xFF85, Mapped, "\u{30ca}"),
    (0xFF86, Mapped, "\u{30cb}"),
    (0xFF87, Mapped, "\u{30cc}"),
    (0xFF88, Mapped, "\u{30cd}"),
    (0xFF89, Mapped, "\u{30ce}"),
    (0xFF8A, Mapped, "\u{30cf}"),
    (0xFF8B, Mapped, "\u{30d2}"),
    (0xFF8C, Mapped, "\u{30d5}"),
    (0xFF8D, Mapped, "\u{30d8}"),
    (0xFF8E, Mapped, "\u{30db}"),
    (0xFF8F, Mapped, "\u{30de}"),
    (0xFF90, Mapped, "\u{30df}"),
    (0xFF91, Mapped, "\u{30e0}"),
    (0xFF92, Mapped, "\u{30e1}"),
    (0xFF93, Mapped, "\u{30e2}"),
    (0xFF94, Mapped, "\u{30e4}"),
    (0xFF95, Mapped, "\u{30e6}"),
    (0xFF96, Mapped, "\u{30e8}"),
    (0xFF97, Mapped, "\u{30e9}"),
    (0xFF98, Mapped, "\u{30ea}"),
    (0xFF99, Mapped, "\u{30eb}"),
    (0xFF9A, Mapped, "\u{30ec}"),
    (0xFF9B, Mapped, "\u{30ed}"),
    (0xFF9C, Mapped, "\u{30ef}"),
    (0xFF9D, Mapped, "\u{30f3}"),
    (0xFF9E, Mapped, "\u{3099}"),
    (0xFF9F, Mapped, "\u{309a}"),
    (0xFFA0, Ignored, ""),
    (0xFFA1, Mapped, "\u{1100}"),
    (0xFFA2, Mapped, "\u{1101}"),
    (0xFFA3, Mapped, "\u{11aa}"),
    (0xFFA4, Mapped, "\u{1102}"),
    (0xFFA5, Mapped, "\u{11ac}"),
    (0xFFA6, Mapped, "\u{11ad}"),
    (0xFFA7, Mapped, "\u{1103}"),
    (0xFFA8, Mapped, "\u{1104}"),
    (0xFFA9, Mapped, "\u{1105}"),
    (0xFFAA, Mapped, "\u{11b0}"),
    (0xFFAB, Mapped, "\u{11b1}"),
    (0xFFAC, Mapped, "\u{11b2}"),
    (0xFFAD, Mapped, "\u{11b3}"),
    (0xFFAE, Mapped, "\u{11b4}"),
    (0xFFAF, Mapped, "\u{11b5}"),
    (0xFFB0, Mapped, "\u{111a}"),
    (0xFFB1, Mapped, "\u{1106}"),
    (0xFFB2, Mapped, "\u{1107}"),
    (0xFFB3, Mapped, "\u{1108}"),
    (0xFFB4, Mapped, "\u{1121}"),
    (0xFFB5, Mapped, "\u{1109}"),
    (0xFFB6, Mapped, "\u{110a}"),
    (0xFFB7, Mapped, "\u{110b}"),
    (0xFFB8, Mapped, "\u{110c}"),
    (0xFFB9, Mapped, "\u{110d}"),
    (0xFFBA, Mapped, "\u{110e}"),
    (0xFFBB, Mapped, "\u{110f}"),
    (0xFFBC, Mapped, "\u{1110}"),
    (0xFFBD, Mapped, "\u{1111}"),
    (0xFFBE, Mapped, "\u{1112}"),
    (0xFFBF, Disallowed, ""),
    (0xFFC2, Mapped, "\u{1161}"),
    (0xFFC3, Mapped, "\u{1162}"),
    (0xFFC4, Mapped, "\u{1163}"),
    (0xFFC5, Mapped, "\u{1164}"),
    (0xFFC6, Mapped, "\u{1165}"),
    (0xFFC7, Mapped, "\u{1166}"),
    (0xFFC8, Disallowed, ""),
    (0xFFCA, Mapped, "\u{1167}"),
    (0xFFCB, Mapped, "\u{1168}"),
    (0xFFCC, Mapped, "\u{1169}"),
    (0xFFCD, Mapped, "\u{116a}"),
    (0xFFCE, Mapped, "\u{116b}"),
    (0xFFCF, Mapped, "\u{116c}"),
    (0xFFD0, Disallowed, ""),
    (0xFFD2, Mapped, "\u{116d}"),
    (0xFFD3, Mapped, "\u{116e}"),
    (0xFFD4, Mapped, "\u{116f}"),
    (0xFFD5, Mapped, "\u{1170}"),
    (0xFFD6, Mapped, "\u{1171}"),
    (0xFFD7, Mapped, "\u{1172}"),
    (0xFFD8, Disallowed, ""),
    (0xFFDA, Mapped, "\u{1173}"),
    (0xFFDB, Mapped, "\u{1174}"),
    (0xFFDC, Mapped, "\u{1175}"),
    (0xFFDD, Disallowed, ""),
    (0xFFE0, Mapped, "\u{a2}"),
    (0xFFE1, Mapped, "\u{a3}"),
    (0xFFE2, Mapped, "\u{ac}"),
    (0xFFE3, Mapped, " \u{304}"),
    (0xFFE4, Mapped, "\u{a6}"),
    (0xFFE5, Mapped, "\u{a5}"),
    (0xFFE6, Mapped, "\u{20a9}"),
    (0xFFE7, Disallowed, ""),
    (0xFFE8, Mapped, "\u{2502}"),
    (0xFFE9, Mapped, "\u{2190}"),
    (0xFFEA, Mapped, "\u{2191}"),
    (0xFFEB, Mapped, "\u{2192}"),
    (0xFFEC, Mapped, "\u{2193}"),
    (0xFFED, Mapped, "\u{25a0}"),
    (0xFFEE, Mapped, "\u{25cb}"),
    (0xFFEF, Disallowed, ""),
    (0x10000, Valid, ""),
    (0x1000C, Disallowed, ""),
    (0x1000D, Valid, ""),
    (0x10027, Disallowed, ""),
    (0x10028, Valid, ""),
    (0x1003B, Disallowed, ""),
    (0x1003C, Valid, ""),
    (0x1003E, Disallowed, ""),
    (0x1003F, Valid, ""),
    (0x1004E, Disallowed, ""),
    (0x10050, Valid, ""),
    (0x1005E, Disallowed, ""),
    (0x10080, Valid, ""),
    (0x100FB, Disallowed, ""),
    (0x10100, Valid, ""),
    (0x10103, Disallowed, ""),
    (0x10107, Valid, ""),
    (0x10134, Disallowed, ""),
    (0x10137, Valid, ""),
    (0x1018F, Disallowed, ""),
    (0x10190, Valid, ""),
    (0x1019D, Disallowed, ""),
    (0x101A0, Valid, ""),
    (0x101A1, Disallowed, ""),
    (0x101D0, Valid, ""),
    (0x101FE, Disallowed, ""),
    (0x10280, Valid, ""),
    (0x1029D, Disallowed, ""),
    (0x102A0, Valid, ""),
    (0x102D1, Disallowed, ""),
    (0x102E0, Valid, ""),
    (0x102FC, Disallowed, ""),
    (0x10300, Valid, ""),
    (0x10324, Disallowed, ""),
    (0x1032D, Valid, ""),
    (0x1034B, Disallowed, ""),
    (0x10350, Valid, ""),
    (0x1037B, Disallowed, ""),
    (0x10380, Valid, ""),
    (0x1039E, Disallowed, ""),
    (0x1039F, Valid, ""),
    (0x103C4, Disallowed, ""),
    (0x103C8, Valid, ""),
    (0x103D6, Disallowed, ""),
    (0x10400, Mapped, "\u{10428}"),
    (0x10401, Mapped, "\u{10429}"),
    (0x10402, Mapped, "\u{1042a}"),
    (0x10403, Mapped, "\u{1042b}"),
    (0x10404, Mapped, "\u{1042c}"),
    (0x10405, Mapped, "\u{1042d}"),
    (0x10406, Mapped, "\u{1042e}"),
    (0x10407, Mapped, "\u{1042f}"),
    (0x10408, Mapped, "\u{10430}"),
    (0x10409, Mapped, "\u{10431}"),
    (0x1040A, Mapped, "\u{10432}"),
    (0x1040B, Mapped, "\u{10433}"),
    (0x1040C, Mapped, "\u{10434}"),
    (0x1040D, Mapped, "\u{10435}"),
    (0x1040E, Mapped, "\u{10436}"),
    (0x1040F, Mapped, "\u{10437}"),
    (0x10410, Mapped, "\u{10438}"),
    (0x10411, Mapped, "\u{10439}"),
    (0x10412, Mapped, "\u{1043a}"),
    (0x10413, Mapped, "\u{1043b}"),
    (0x10414, Mapped, "\u{1043c}"),
    (0x10415, Mapped, "\u{1043d}"),
    (0x10416, Mapped, "\u{1043e}"),
    (0x10417, Mapped, "\u{1043f}"),
    (0x10418, Mapped, "\u{10440}"),
    (0x10419, Mapped, "\u{10441}"),
    (0x1041A, Mapped, "\u{10442}"),
    (0x1041B, Mapped, "\u{10443}"),
    (0x1041C, Mapped, "\u{10444}"),
    (0x1041D, Mapped, "\u{10445}"),
    (0x1041E, Mapped, "\u{10446}"),
    (0x1041F, Mapped, "\u{10447}"),
    (0x10420, Mapped, "\u{10448}"),
    (0x10421, Mapped, "\u{10449}"),
    (0x10422, Mapped, "\u{1044a}"),
    (0x10423, Mapped, "\u{1044b}"),
    (0x10424, Mapped, "\u{1044c}"),
    (0x10425, Mapped, "\u{1044d}"),
    (0x10426, Mapped, "\u{1044e}"),
    (0x10427, Mapped, "\u{1044f}"),
    (0x10428, Valid, ""),
    (0x1049E, Disallowed, ""),
    (0x104A0, Valid, ""),
    (0x104AA, Disallowed, ""),
    (0x104B0, Mapped, "\u{104d8}"),
    (0x104B1, Mapped, "\u{104d9}"),
    (0x104B2, Mapped, "\u{104da}"),
    (0x104B3, Mapped, "\u{104db}"),
    (0x104B4, Mapped, "\u{104dc}"),
    (0x104B5, Mapped, "\u{104dd}"),
    (0x104B6, Mapped, "\u{104de}"),
    (0x104B7, Mapped, "\u{104df}"),
    (0x104B8, Mapped, "\u{104e0}"),
    (0x104B9, Mapped, "\u{104e1}"),
    (0x104BA, Mapped, "\u{104e2}"),
    (0x104BB, Mapped, "\u{104e3}"),
    (0x104BC, Mapped, "\u{104e4}"),
    (0x104BD, Mapped, "\u{104e5}"),
    (0x104BE, Mapped, "\u{104e6}"),
    (0x104BF, Mapped, "\u{104e7}"),
    (0x104C0, Mapped, "\u{104e8}"),
    (0x104C1, Mapped, "\u{104e9}"),
    (0x104C2, Mapped, "\u{104ea}"),
    (0x104C3, Mapped, "\u{104eb}"),
    (0x104C4, Mapped, "\u{104ec}"),
    (0x104C5, Mapped, "\u{104ed}"),
    (0x104C6, Mapped, "\u{104ee}"),
    (0x104C7, Mapped, "\u{104ef}"),
    (0x104C8, Mapped, "\u{104f0}"),
    (0x104C9, Mapped, "\u{104f1}"),
    (0x104CA, Mapped, "\u{104f2}"),
    (0x104CB, Mapped, "\u{104f3}"),
    (0x104CC, Mapped, "\u{104f4}"),
    (0x104CD, Mapped, "\u{104f5}"),
    (0x104CE, Mapped, "\u{104f6}"),
    (0x104CF, Mapped, "\u{104f7}"),
    (0x104D0, Mapped, "\u{104f8}"),
    (0x104D1, Mapped, "\u{104f9}"),
    (0x104D2, Mapped, "\u{104fa}"),
    (0x104D3, Mapped, "\u{104fb}"),
    (0x104D4, Disallowed, ""),
    (0x104D8, Valid, ""),
    (0x104FC, Disallowed, ""),
    (0x10500, Valid, ""),
    (0x10528, Disallowed, ""),
    (0x10530, Valid, ""),
    (0x10564, Disallowed, ""),
    (0x1056F, Valid, ""),
    (0x10570, Mapped, "\u{10597}"),
    (0x10571, Mapped, "\u{10598}"),
    (0x10572, Mapped, "\u{10599}"),
    (0x10573, Mapped, "\u{1059a}"),
    (0x10574, Mapped, "\u{1059b}"),
    (0x10575, Mapped, "\u{1059c}"),
    (0x10576, Mapped, "\u{1059d}"),
    (0x10577, Mapped, "\u{1059e}"),
    (0x10578, Mapped, "\u{1059f}"),
    (0x10579, Mapped, "\u{105a0}"),
    (0x1057A, Mapped, "\u{105a1}"),
    (0x1057B, Disallowed, ""),
    (0x1057C, Mapped, "\u{105a3}"),
    (0x1057D, Mapped, "\u{105a4}"),
    (0x1057E, Mapped, "\u{105a5}"),
    (0x1057F, Mapped, "\u{105a6}"),
    (0x10580, Mapped, "\u{105a7}"),
    (0x10581, Mapped, "\u{105a8}"),
    (0x10582, Mapped, "\u{105a9}"),
    (0x10583, Mapped, "\u{105aa}"),
    (0x10584, Mapped, "\u{105ab}"),
    (0x10585, Mapped, "\u{105ac}"),
    (0x10586, Mapped, "\u{105ad}"),
    (0x10587, Mapped, "\u{105ae}"),
    (0x10588, Mapped, "\u{105af}"),
    (0x10589, Mapped, "\u{105b0}"),
    (0x1058A, Mapped, "\u{105b1}"),
    (0x1058B, Disallowed, ""),
    (0x1058C, Mapped, "\u{105b3}"),
    (0x1058D, Mapped, "\u{105b4}"),
    (0x1058E, Mapped, "\u{105b5}"),
    (0x1058F, Mapped, "\u{105b6}"),
    (0x10590, Mapped, "\u{105b7}"),
    (0x10591, Mapped, "\u{105b8}"),
    (0x10592, Mapped, "\u{105b9}"),
    (0x10593, Disallowed, ""),
    (0x10594, Mapped, "\u{105bb}"),
    (0x10595, Mapped, "\u{105bc}"),
    (0x10596, Disallowed, ""),
    (0x10597, Valid, ""),
    (0x105A2, Disallowed, ""),
    (0x105A3, Valid, ""),
    (0x105B2, Disallowed, ""),
    (0x105B3, Valid, ""),
    (0x105BA, Disallowed, ""),
    (0x105BB, Valid, ""),
    (0x105BD, Disallowed, ""),
    (0x105C0, Valid, ""),
    (0x105F4, Disallowed, ""),
    (0x10600, Valid, ""),
    (0x10737, Disallowed, ""),
    (0x10740, Valid, ""),
    (0x10756, Disallowed, ""),
    (0x10760, Valid, ""),
    (0x10768, Disallowed, ""),
    (0x10780, Valid, ""),
    (0x10781, Mapped, "\u{2d0}"),
    (0x10782, Mapped, "\u{2d1}"),
    (0x10783, Mapped, "\u{e6}"),
    (0x10784, Mapped, "\u{299}"),
    (0x10785, Mapped, "\u{253}"),
    (0x10786, Disallowed, ""),
    (0x10787, Mapped, "\u{2a3}"),
    (0x10788, Mapped, "\u{ab66}"),
    (0x10789, Mapped, "\u{2a5}"),
    (0x1078A, Mapped, "\u{2a4}"),
    (0x1078B, Mapped, "\u{256}"),
    (0x1078C, Mapped, "\u{257}"),
    (0x1078D, Mapped, "\u{1d91}"),
    (0x1078E, Mapped, "\u{258}"),
    (0x1078F, Mapped, "\u{25e}"),
    (0x10790, Mapped, "\u{2a9}"),
    (0x10791, Mapped, "\u{264}"),
    (0x10792, Mapped, "\u{262}"),
    (0x10793, Mapped, "\u{260}"),
    (0x10794, Mapped, "\u{29b}"),
    (0x10795, Mapped, "\u{127}"),
    (0x10796, Mapped, "\u{29c}"),
    (0x10797, Mapped, "\u{267}"),
    (0x10798, Mapped, "\u{284}"),
    (0x10799, Mapped, "\u{2aa}"),
    (0x1079A, Mapped, "\u{2ab}"),
    (0x1079B, Mapped, "\u{26c}"),
    (0x1079C, Mapped, "\u{1df04}"),
    (0x1079D, Mapped, "\u{a78e}"),
    (0x1079E, Mapped, "\u{26e}"),
    (0x1079F, Mapped, "\u{1df05}"),
    (0x107A0, Mapped, "\u{28e}"),
    (0x107A1, Mapped, "\u{1df06}"),
    (0x107A2, Mapped, "\u{f8}"),
    (0x107A3, Mapped, "\u{276}"),
    (0x107A4, Mapped, "\u{277}"),
    (0x107A5, Mapped, "q"),
    (0x107A6, Mapped, "\u{27a}"),
    (0x107A7, Mapped, "\u{1df08}"),
    (0x107A8, Mapped, "\u{27d}"),
    (0x107A9, Mapped, "\u{27e}"),
    (0x107AA, Mapped, "\u{280}"),
    (0x107AB, Mapped, "\u{2a8}"),
    (0x107AC, Mapped, "\u{2a6}"),
    (0x107AD, Mapped, "\u{ab67}"),
    (0x107AE, Mapped, "\u{2a7}"),
    (0x107AF, Mapped, "\u{288}"),
    (0x107B0, Mapped, "\u{2c71}"),
    (0x107B1, Disallowed, ""),
    (0x107B2, Mapped, "\u{28f}"),
    (0x107B3, Mapped, "\u{2a1}"),
    (0x107B4, Mapped, "\u{2a2}"),
    (0x107B5, Mapped, "\u{298}"),
    (0x107B6, Mapped, "\u{1c0}"),
    (0x107B7, Mapped, "\u{1c1}"),
    (0x107B8, Mapped, "\u{1c2}"),
    (0x107B9, Mapped, "\u{1df0a}"),
    (0x107BA, Mapped, "\u{1df1e}"),
    (0x107BB, Disallowed, ""),
    (0x10800, Valid, ""),
    (0x10806, Disallowed, ""),
    (0x10808, Valid, ""),
    (0x10809, Disallowed, ""),
    (0x1080A, Valid, ""),
    (0x10836, Disallowed, ""),
    (0x10837, Valid, ""),
    (0x10839, Disallowed, ""),
    (0x1083C, Valid, ""),
    (0x1083D, Disallowed, ""),
    (0x1083F, Valid, ""),
    (0x10856, Disallowed, ""),
    (0x10857, Valid, ""),
    (0x1089F, Disallowed, ""),
    (0x108A7, Valid, ""),
    (0x108B0, Disallowed, ""),
    (0x108E0, Valid, ""),
    (0x108F3, Disallowed, ""),
    (0x108F4, Valid, ""),
    (0x108F6, Disallowed, ""),
    (0x108FB, Valid, ""),
    (0x1091C, Disallowed, ""),
    (0x1091F, Valid, ""),
    (0x1093A, Disallowed, ""),
    (0x1093F, Valid, ""),
    (0x1095A, Disallowed, ""),
    (0x10980, Valid, ""),
    (0x109B8, Disallowed, ""),
    (0x109BC, Valid, ""),
    (0x109D0, Disallowed, ""),
    (0x109D2, Valid, ""),
    (0x10A04, Disallowed, ""),
    (0x10A05, Valid, ""),
    (0x10A07, Disallowed, ""),
    (0x10A0C, Valid, ""),
    (0x10A14, Disallowed, ""),
    (0x10A15, Valid, ""),
    (0x10A18, Disallowed, ""),
    (0x10A19, Valid, ""),
    (0x10A36, Disallowed, ""),
    (0x10A38, Valid, ""),
    (0x10A3B, Disallowed, ""),
    (0x10A3F, Valid, ""),
    (0x10A49, Disallowed, ""),
    (0x10A50, Valid, ""),
    (0x10A59, Disallowed, ""),
    (0x10A60, Valid, ""),
    (0x10AA0, Disallowed, ""),
    (0x10AC0, Valid, ""),
    (0x10AE7, Disallowed, ""),
    (0x10AEB, Valid, ""),
    (0x10AF7, Disallowed, ""),
    (0x10B00, Valid, ""),
    (0x10B36, Disallowed, ""),
    (0x10B39, Valid, ""),
    (0x10B56, Disallowed, ""),
    (0x10B58, Valid, ""),
    (0x10B73, Disallowed, ""),
    (0x10B78, Valid, ""),
    (0x10B92, Disallowed, ""),
    (0x10B99, Valid, ""),
    (0x10B9D, Disallowed, ""),
    (0x10BA9, Valid, ""),
    (0x10BB0, Disallowed, ""),
    (0x10C00, Valid, ""),
    (0x10C49, Disallowed, ""),
    (0x10C80, Mapped, "\u{10cc0}"),
    (0x10C81, Mapped, "\u{10cc1}"),
    (0x10C82, Mapped, "\u{10cc2}"),
    (0x10C83, Mapped, "\u{10cc3}"),
    (0x10C84, Mapped, "\u{10cc4}"),
    (0x10C85, Mapped, "\u{10cc5}"),
    (0x10C86, Mapped, "\u{10cc6}"),
    (0x10C87, Mapped, "\u{10cc7}"),
    (0x10C88, Mapped, "\u{10cc8}"),
    (0x10C89, Mapped, "\u{10cc9}"),
    (0x10C8A, Mapped, "\u{10cca}"),
    (0x10C8B, Mapped, "\u{10ccb}"),
    (0x10C8C, Mapped, "\u{10ccc}"),
    (0x10C8D, Mapped, "\u{10ccd}"),
    (0x10C8E, Mapped, "\u{10cce}"),
    (0x10C8F, Mapped, "\u{10ccf}"),
    (0x10C90, Mapped, "\u{10cd0}"),
    (0x10C91, Mapped, "\u{10cd1}"),
    (0x10C92, Mapped, "\u{10cd2}"),
    (0x10C93, Mapped, "\u{10cd3}"),
    (0x10C94, Mapped, "\u{10cd4}"),
    (0x10C95, Mapped, "\u{10cd5}"),
    (0x10C96, Mapped, "\u{10cd6}"),
    (0x10C97, Mapped, "\u{10cd7}"),
    (0x10C98, Mapped, "\u{10cd8}"),
    (0x10C99, Mapped, "\u{10cd9}"),
    (0x10C9A, Mapped, "\u{10cda}"),
    (0x10C9B, Mapped, "\u{10cdb}"),
    (0x10C9C, Mapped, "\u{10cdc}"),
    (0x10C9D, Mapped, "\u{10cdd}"),
    (0x10C9E, Mapped, "\u{10cde}"),
    (0x10C9F, Mapped, "\u{10cdf}"),
    (0x10CA0, Mapped, "\u{10ce0}"),
    (0x10CA1, Mapped, "\u{10ce1}"),
    (0x10CA2, Mapped, "\u{10ce2}"),
    (0x10CA3, Mapped, "\u{10ce3}"),
    (0x10CA4, Mapped, "\u{10ce4}"),
    (0x10CA5, Mapped, "\u{10ce5}"),
    (0x10CA6, Mapped, "\u{10ce6}"),
    (0x10CA7, Mapped, "\u{10ce7}"),
    (0x10CA8, Mapped, "\u{10ce8}"),
    (0x10CA9, Mapped, "\u{10ce9}"),
    (0x10CAA, Mapped, "\u{10cea}"),
    (0x10CAB, Mapped, "\u{10ceb}"),
    (0x10CAC, Mapped, "\u{10cec}"),
    (0x10CAD, Mapped, "\u{10ced}"),
    (0x10CAE, Mapped, "\u{10cee}"),
    (0x10CAF, Mapped, "\u{10cef}"),
    (0x10CB0, Mapped, "\u{10cf0}"),
    (0x10CB1, Mapped, "\u{10cf1}"),
    (0x10CB2, Mapped, "\u{10cf2}"),
    (0x10CB3, Disallowed, ""),
    (0x10CC0, Valid, ""),
    (0x10CF3, Disallowed, ""),
    (0x10CFA, Valid, ""),
    (0x10D28, Disallowed, ""),
    (0x10D30, Valid, ""),
    (0x10D3A, Disallowed, ""),
    (0x10D40, Valid, ""),
    (0x10D50, Mapped, "\u{10d70}"),
    (0x10D51, Mapped, "\u{10d71}"),
    (0x10D52, Mapped, "\u{10d72}"),
    (0x10D53, Mapped, "\u{10d73}"),
    (0x10D54, Mapped, "\u{10d74}"),
    (0x10D55, Mapped, "\u{10d75}"),
    (0x10D56, Mapped, "\u{10d76}"),
    (0x10D57, Mapped, "\u{10d77}"),
    (0x10D58, Mapped, "\u{10d78}"),
    (0x10D59, Mapped, "\u{10d79}"),
    (0x10D5A, Mapped, "\u{10d7a}"),
    (0x10D5B, Mapped, "\u{10d7b}"),
    (0x10D5C, Mapped, "\u{10d7c}"),
    (0x10D5D, Mapped, "\u{10d7d}"),
    (0x10D5E, Mapped, "\u{10d7e}"),
    (0x10D5F, Mapped, "\u{10d7f}"),
    (0x10D60, Mapped, "\u{10d80}"),
    (0x10D61, Mapped, "\u{10d81}"),
    (0x10D62, Mapped, "\u{10d82}"),
    (0x10D63, Mapped, "\u{10d83}"),
    (0x10D64, Mapped, "\u{10d84}"),
    (0x10D65, Mapped, "\u{10d85}"),
    (0x10D66, Disallowed, ""),
    (0x10D69, Valid, ""),
    (0x10D86, Disallowed, ""),
    (0x10D8E, Valid, ""),
    (0x10D90, Disallowed, ""),
    (0x10E60, Valid, ""),
    (0x10E7F, Disallowed, ""),
    (0x10E80, Valid, ""),
    (0x10EAA, Disallowed, ""),
    (0x10EAB, Valid, ""),
    (0x10EAE, Disallowed, ""),
    (0x10EB0, Valid, ""),
    (0x10EB2, Disallowed, ""),
    (0x10EC2, Valid, ""),
    (0x10EC8, Disallowed, ""),
    (0x10ED0, Valid, ""),
    (0x10ED9, Disallowed, ""),
    (0x10EFA, Valid, ""),
    (0x10F28, Disallowed, ""),
    (0x10F30, Valid, ""),
    (0x10F5A, Disallowed, ""),
    (0x10F70, Valid, ""),
    (0x10F8A, Disallowed, ""),
    (0x10FB0, Valid, ""),
    (0x10FCC, Disallowed, ""),
    (0x10FE0, Valid, ""),
    (0x10FF7, Disallowed, ""),
    (0x11000, Valid, ""),
    (0x1104E, Disallowed, ""),
    (0x11052, Valid, ""),
    (0x11076, Disallowed, ""),
    (0x1107F, Valid, ""),
    (0x110BD, Disallowed, ""),
    (0x110BE, Valid, ""),
    (0x110C3, Disallowed, ""),
    (0x110D0, Valid, ""),
    (0x110E9, Disallowed, ""),
    (0x110F0, Valid, ""),
    (0x110FA, Disallowed, ""),
    (0x11100, Valid, ""),
    (0x11135, Disallowed, ""),
    (0x11136, Valid, ""),
    (0x11148, Disallowed, ""),
    (0x11150, Valid, ""),
    (0x11177, Disallowed, ""),
    (0x11180, Valid, ""),
    (0x111E0, Disallowed, ""),
    (0x111E1, Valid, ""),
    (0x111F5, Disallowed, ""),
    (0x11200, Valid, ""),
    (0x11212, Disallowed, ""),
    (0x11213, Valid, ""),
    (0x11242, Disallowed, ""),
    (0x11280, Valid, ""),
    (0x11287, Disallowed, ""),
    (0x11288, Valid, ""),
    (0x11289, Disallowed, ""),
    (0x1128A, Valid, ""),
    (0x1128E, Disallowed, ""),
    (0x1128F, Valid, ""),
    (0x1129E, Disallowed, ""),
    (0x1129F, Valid, ""),
    (0x112AA, Disallowed, ""),
    (0x112B0, Valid, ""),
    (0x112EB, Disallowed, ""),
    (0x112F0, Valid, ""),
    (0x112FA, Disallowed, ""),
    (0x11300, Valid, ""),
    (0x11304, Disallowed, ""),
    (0x11305, Valid, ""),
    (0x1130D, Disallowed, ""),
    (0x1130F, Valid, ""),
    (0x11311, Disallowed, ""),
    (0x11313, Valid, ""),
    (0x11329, Disallowed, ""),
    (0x1132A, Valid, ""),
    (0x11331, Disallowed, ""),
    (0x11332, Valid, ""),
    (0x11334, Disallowed, ""),
    (0x11335, Valid, ""),
    (0x1133A, Disallowed, ""),
    (0x1133B, Valid, ""),
    (0x11345, Disallowed, ""),
    (0x11347, Valid, ""),
    (0x11349, Disallowed, ""),
    (0x1134B, Valid, ""),
    (0x1134E, Disallowed, ""),
    (0x11350, Valid, ""),
    (0x11351, Disallowed, ""),
    (0x11357, Valid, ""),
    (0x11358, Disallowed, ""),
    (0x1135D, Valid, ""),
    (0x11364, Disallowed, ""),
    (0x11366, Valid, ""),
    (0x1136D, Disallowed, ""),
    (0x11370, Valid, ""),
    (0x11375, Disallowed, ""),
    (0x11380, Valid, ""),
    (0x1138A, Disallowed, ""),
    (0x1138B, Valid, ""),
    (0x1138C, Disallowed, ""),
    (0x1138E, Valid, ""),
    (0x1138F, Disallowed, ""),
    (0x11390, Valid, ""),
    (0x113B6, Disallowed, ""),
    (0x113B7, Valid, ""),
    (0x113C1, Disallowed, ""),
    (0x113C2, Valid, ""),
    (0x113C3, Disallowed, ""),
    (0x113C5, Valid, ""),
    (0x113C6, Disallowed, ""),
    (0x113C7, Valid, ""),
    (0x113CB, Disallowed, ""),
    (0x113CC, Valid, ""),
    (0x113D6, Disallowed, ""),
    (0x113D7, Valid, ""),
    (0x113D9, Disallowed, ""),
    (0x113E1, Valid, ""),
    (0x113E3, Disallowed, ""),
    (0x11400, Valid, ""),
    (0x1145C, Disallowed, ""),
    (0x1145D, Valid, ""),
    (0x11462, Disallowed, ""),
    (0x11480, Valid, ""),
    (0x114C8, Disallowed, ""),
    (0x114D0, Valid, ""),
    (0x114DA, Disallowed, ""),
    (0x11580, Valid, ""),
    (0x115B6, Disallowed, ""),
    (0x115B8, Valid, ""),
    (0x115DE, Disallowed, ""),
    (0x11600, Valid, ""),
    (0x11645, Disallowed, ""),
    (0x11650, Valid, ""),
    (0x1165A, Disallowed, ""),
    (0x11660, Valid, ""),
    (0x1166D, Disallowed, ""),
    (0x11680, Valid, ""),
    (0x116BA, Disallowed, ""),
    (0x116C0, Valid, ""),
    (0x116CA, Disallowed, ""),
    (0x116D0, Valid, ""),
    (0x116E4, Disallowed, ""),
    (0x11700, Valid, ""),
    (0x1171B, Disallowed, ""),
    (0x1171D, Valid, ""),
    (0x1172C, Disallowed, ""),
    (0x11730, Valid, ""),
    (0x11747, Disallowed, ""),
    (0x11800, Valid, ""),
    (0x1183C, Disallowed, ""),
    (0x118A0, Mapped, "\u{118c0}"),
    (0x118A1, Mapped, "\u{118c1}"),
    (0x118A2, Mapped, "\u{118c2}"),
    (0x118A3, Mapped, "\u{118c3}"),
    (0x118A4, Mapped, "\u{118c4}"),
    (0x118A5, Mapped, "\u{118c5}"),
    (0x118A6, Mapped, "\u{118c6}"),
    (0x118A7, Mapped, "\u{118c7}"),
    (0x118A8, Mapped, "\u{118c8}"),
    (0x118A9, Mapped, "\u{118c9}"),
    (0x118AA, Mapped, "\u{118ca}"),
    (0x118AB, Mapped, "\u{118cb}"),
    (0x118AC, Mapped, "\u{118cc}"),
    (0x118AD, Mapped, "\u{118cd}"),
    (0x118AE, Mapped, "\u{118ce}"),
    (0x118AF, Mapped, "\u{118cf}"),
    (0x118B0, Mapped, "\u{118d0}"),
    (0x118B1, Mapped, "\u{118d1}"),
    (0x118B2, Mapped, "\u{118d2}"),
    (0x118B3, Mapped, "\u{118d3}"),
    (0x118B4, Mapped, "\u{118d4}"),
    (0x118B5, Mapped, "\u{118d5}"),
    (0x118B6, Mapped, "\u{118d6}"),
    (0x118B7, Mapped, "\u{118d7}"),
    (0x118B8, Mapped, "\u{118d8}"),
    (0x118B9, Mapped, "\u{118d9}"),
    (0x118BA, Mapped, "\u{118da}"),
    (0x118BB, Mapped, "\u{118db}"),
    (0x118BC, Mapped, "\u{118dc}"),
    (0x118BD, Mapped, "\u{118dd}"),
    (0x118BE, Mapped, "\u{118de}"),
    (0x118BF, Mapped, "\u{118df}"),
    (0x118C0, Valid, ""),
    (0x118F3, Disallowed, ""),
    (0x118FF, Valid, ""),
    (0x11907, Disallowed, ""),
    (0x11909, Valid, ""),
    (0x1190A, Disallowed, ""),
    (0x1190C, Valid, ""),
    (0x11914, Disallowed, ""),
    (0x11915, Valid, ""),
    (0x11917, Disallowed, ""),
    (0x11918, Valid, ""),
    (0x11936, Disallowed, ""),
    (0x11937, Valid, ""),
    (0x11939, Disallowed, ""),
    (0x1193B, Valid, ""),
    (0x11947, Disallowed, ""),
    (0x11950, Valid, ""),
    (0x1195A, Disallowed, ""),
    (0x119A0, Valid, ""),
    (0x119A8, Disallowed, ""),
    (0x119AA, Valid, ""),
    (0x119D8, Disallowed, ""),
    (0x119DA, Valid, ""),
    (0x119E5, Disallowed, ""),
    (0x11A00, Valid, ""),
    (0x11A48, Disallowed, ""),
    (0x11A50, Valid, ""),
    (0x11AA3, Disallowed, ""),
    (0x11AB0, Valid, ""),
    (0x11AF9, Disallowed, ""),
    (0x11B00, Valid, ""),
    (0x11B0A, Disallowed, ""),
    (0x11B60, Valid, ""),
    (0x11B68, Disallowed, ""),
    (0x11BC0, Valid, ""),
    (0x11BE2, Disallowed, ""),
    (0x11BF0, Valid, ""),
    (0x11BFA, Disallowed, ""),
    (0x11C00, Valid, ""),
    (0x11C09, Disallowed, ""),
    (0x11C0A, Valid, ""),
    (0x11C37, Disallowed, ""),
    (0x11C38, Valid, ""),
    (0x11C46, Disallowed, ""),
    (0x11C50, Valid, ""),
    (0x11C6D, Disallowed, ""),
    (0x11C70, Valid, ""),
    (0x11C90, Disallowed, ""),
    (0x11C92, Valid, ""),
    (0x11CA8, Disallowed, ""),
    (0x11CA9, Valid, ""),
    (0x11CB7, Disallowed, ""),
    (0x11D00, Valid, ""),
    (0x11D07, Disallowed, ""),
    (0x11D08, Valid, ""),
    (0x11D0A, Disallowed, ""),
    (0x11D0B, Valid, ""),
    (0x11D37, Disallowed, ""),
    (0x11D3A, Valid, ""),
    (0x11D3B, Disallowed, ""),
    (0x11D3C, Valid, ""),
    (0x11D3E, Disallowed, ""),
    (0x11D3F, Valid, ""),
    (0x11D48, Disallowed, ""),
    (0x11D50, Valid, ""),
    (0x11D5A, Disallowed, ""),
    (0x11D60, Valid, ""),
    (0x11D66, Disallowed, ""),
    (0x11D67, Valid, ""),
    (0x11D69, Disallowed, ""),
    (0x11D6A, Valid, ""),
    (0x11D8F, Disallowed, ""),
    (0x11D90, Valid, ""),
    (0x11D92, Disallowed, ""),
    (0x11D93, Valid, ""),
    (0x11D99, Disallowed, ""),
    (0x11DA0, Valid, ""),
    (0x11DAA, Disallowed, ""),
    (0x11DB0, Valid, ""),
    (0x11DDC, Disallowed, ""),
    (0x11DE0, Valid, ""),
    (0x11DEA, Disallowed, ""),
    (0x11EE0, Valid, ""),
    (0x11EF9, Disallowed, ""),
    (0x11F00, Valid, ""),
    (0x11F11, Disallowed, ""),
    (0x11F12, Valid, ""),
    (0x11F3B, Disallowed, ""),
    (0x11F3E, Valid, ""),
    (0x11F5B, Disallowed, ""),
    (0x11FB0, Valid, ""),
    (0x11FB1, Disallowed, ""),
    (0x11FC0, Valid, ""),
    (0x11FF2, Disallowed, ""),
    (0x11FFF, Valid, ""),
    (0x1239A, Disallowed, ""),
    (0x12400, Valid, ""),
    (0x1246F, Disallowed, ""),
    (0x12470, Valid, ""),
    (0x12475, Disallowed, ""),
    (0x12480, Valid, ""),
    (0x12544, Disallowed, ""),
    (0x12F90, Valid, ""),
    (0x12FF3, Disallowed, ""),
    (0x13000, Valid, ""),
    (0x13430, Disallowed, ""),
    (0x13440, Valid, ""),
    (0x13456, Disallowed, ""),
    (0x13460, Valid, ""),
    (0x143FB, Disallowed, ""),
    (0x14400, Valid, ""),
    (0x14647, Disallowed, ""),
    (0x16100, Valid, ""),
    (0x1613A, Disallowed, ""),
    (0x16800, Valid, ""),
    (0x16A39, Disallowed, ""),
    (0x16A40, Valid, ""),
    (0x16A5F, Disallowed, ""),
    (0x16A60, Valid, ""),
    (0x16A6A, Disallowed, ""),
    (0x16A6E, Valid, ""),
    (0x16ABF, Disallowed, ""),
    (0x16AC0, Valid, ""),
    (0x16ACA, Disallowed, ""),
    (0x16AD0, Valid, ""),
    (0x16AEE, Disallowed, ""),
    (0x16AF0, Valid, ""),
    (0x16AF6, Disallowed, ""),
    (0x16B00, Valid, ""),
    (0x16B46, Disallowed, ""),
    (0x16B50, Valid, ""),
    (0x16B5A, Disallowed, ""),
    (0x16B5B, Valid, ""),
    (0x16B62, Disallowed, ""),
    (0x16B63, Valid, ""),
    (0x16B78, Disallowed, ""),
    (0x16B7D, Valid, ""),
    (0x16B90, Disallowed, ""),
    (0x16D40, Valid, ""),
    (0x16D7A, Disallowed, ""),
    (0x16E40, Mapped, "\u{16e60}"),
    (0x16E41, Mapped, "\u{16e61}"),
    (0x16E42, Mapped, "\u{16e62}"),
    (0x16E43, Mapped, "\u{16e63}"),
    (0x16E44, Mapped, "\u{16e64}"),
    (0x16E45, Mapped, "\u{16e65}"),
    (0x16E46, Mapped, "\u{16e66}"),
    (0x16E47, Mapped, "\u{16e67}"),
    (0x16E48, Mapped, "\u{16e68}"),
    (0x16E49, Mapped, "\u{16e69}"),
    (0x16E4A, Mapped, "\u{16e6a}"),
    (0x16E4B, Mapped, "\u{16e6b}"),
    (0x16E4C, Mapped, "\u{16e6c}"),
    (0x16E4D, Mapped, "\u{16e6d}"),
    (0x16E4E, Mapped, "\u{16e6e}"),
    (0x16E4F, Mapped, "\u{16e6f}"),
    (0x16E50, Mapped, "\u{16e70}"),
    (0x16E51, Mapped, "\u{16e71}"),
    (0x16E52, Mapped, "\u{16e72}"),
    (0x16E53, Mapped, "\u{16e73}"),
    (0x16E54, Mapped, "\u{16e74}"),
    (0x16E55, Mapped, "\u{16e75}"),
    (0x16E56, Mapped, "\u{16e76}"),
    (0x16E57, Mapped, "\u{16e77}"),
    (0x16E58, Mapped, "\u{16e78}"),
    (0x16E59, Mapped, "\u{16e79}"),
    (0x16E5A, Mapped, "\u{16e7a}"),
    (0x16E5B, Mapped, "\u{16e7b}"),
    (0x16E5C, Mapped, "\u{16e7c}"),
    (0x16E5D, Mapped, "\u{16e7d}"),
    (0x16E5E, Mapped, "\u{16e7e}"),
    (0x16E5F, Mapped, "\u{16e7f}"),
    (0x16E60, Valid, ""),
    (0x16E9B, Disallowed, ""),
    (0x16EA0, Mapped, "\u{16ebb}"),
    (0x16EA1, Mapped, "\u{16ebc}"),
    (0x16EA2, Mapped, "\u{16ebd}"),
    (0x16EA3, Mapped, "\u{16ebe}"),
    (0x16EA4, Mapped, "\u{16ebf}"),
    (0x16EA5, Mapped, "\u{16ec0}"),
    (0x16EA6, Mapped, "\u{16ec1}"),
    (0x16EA7, Mapped, "\u{16ec2}"),
    (0x16EA8, Mapped, "\u{16ec3}"),
    (0x16EA9, Mapped, "\u{16ec4}"),
    (0x16EAA, Mapped, "\u{16ec5}"),
    (0x16EAB, Mapped, "\u{16ec6}"),
    (0x16EAC, Mapped, "\u{16ec7}"),
    (0x16EAD, Mapped, "\u{16ec8}"),
    (0x16EAE, Mapped, "\u{16ec9}"),
    (0x16EAF, Mapped, "\u{16eca}"),
    (0x16EB0, Mapped, "\u{16ecb}"),
    (0x16EB1, Mapped, "\u{16ecc}"),
    (0x16EB2, Mapped, "\u{16ecd}"),
    (0x16EB3, Mapped, "\u{16ece}"),
    (0x16EB4, Mapped, "\u{16ecf}"),
    (0x16EB5, Mapped, "\u{16ed0}"),
    (0x16EB6, Mapped, "\u{16ed1}"),
    (0x16EB7, Mapped, "\u{16ed2}"),
    (0x16EB8, Mapped, "\u{16ed3}"),
    (0x16EB9, Disallowed, ""),
    (0x16EBB, Valid, ""),
    (0x16ED4, Disallowed, ""),
    (0x16F00, Valid, ""),
    (0x16F4B, Disallowed, ""),
    (0x16F4F, Valid, ""),
    (0x16F88, Disallowed, ""),
    (0x16F8F, Valid, ""),
    (0x16FA0, Disallowed, ""),
    (0x16FE0, Valid, ""),
    (0x16FE5, Disallowed, ""),
    (0x16FF0, Valid, ""),
    (0x16FF7, Disallowed, ""),
    (0x17000, Valid, ""),
    (0x18CD6, Disallowed, ""),
    (0x18CFF, Valid, ""),
    (0x18D1F, Disallowed, ""),
    (0x18D80, Valid, ""),
    (0x18DF3, Disallowed, ""),
    (0x1AFF0, Valid, ""),
    (0x1AFF4, Disallowed, ""),
    (0x1AFF5, Valid, ""),
    (0x1AFFC, Disallowed, ""),
    (0x1AFFD, Valid, ""),
    (0x1AFFF, Disallowed, ""),
    (0x1B000, Valid, ""),
    (0x1B123, Disallowed, ""),
    (0x1B132, Valid, ""),
    (0x1B133, Disallowed, ""),
    (0x1B150, Valid, ""),
    (0x1B153, Disallowed, ""),
    (0x1B155, Valid, ""),
    (0x1B156, Disallowed, ""),
    (0x1B164, Valid, ""),
    (0x1B168, Disallowed, ""),
    (0x1B170, Valid, ""),
    (0x1B2FC, Disallowed, ""),
    (0x1BC00, Valid, ""),
    (0x1BC6B, Disallowed, ""),
    (0x1BC70, Valid, ""),
    (0x1BC7D, Disallowed, ""),
    (0x1BC80, Valid, ""),
    (0x1BC89, Disallowed, ""),
    (0x1BC90, Valid, ""),
    (0x1BC9A, Disallowed, ""),
    (0x1BC9C, Valid, ""),
    (0x1BCA0, Ignored, ""),
    (0x1BCA4, Disallowed, ""),
    (0x1CC00, Valid, ""),
    (0x1CCD6, Mapped, "a"),
    (0x1CCD7, Mapped, "b"),
    (0x1CCD8, Mapped, "c"),
    (0x1CCD9, Mapped, "d"),
    (0x1CCDA, Mapped, "e"),
    (0x1CCDB, Mapped, "f"),
    (0x1CCDC, Mapped, "g"),
    (0x1CCDD, Mapped, "h"),
    (0x1CCDE, Mapped, "i"),
    (0x1CCDF, Mapped, "j"),
    (0x1CCE0, Mapped, "k"),
    (0x1CCE1, Mapped, "l"),
    (0x1CCE2, Mapped, "m"),
    (0x1CCE3, Mapped, "n"),
    (0x1CCE4, Mapped, "o"),
    (0x1CCE5, Mapped, "p"),
    (0x1CCE6, Mapped, "q"),
    (0x1CCE7, Mapped, "r"),
    (0x1CCE8, Mapped, "s"),
    (0x1CCE9, Mapped, "t"),
    (0x1CCEA, Mapped, "u"),
    (0x1CCEB, Mapped, "v"),
    (0x1CCEC, Mapped, "w"),
    (0x1CCED, Mapped, "x"),
    (0x1CCEE, Mapped, "y"),
    (0x1CCEF, Mapped, "z"),
    (0x1CCF0, Mapped, "0"),
    (0x1CCF1, Mapped, "1"),
    (0x1CCF2, Mapped, "2"),
    (0x1CCF3, Mapped, "3"),
    (0x1CCF4, Mapped, "4"),
    (0x1CCF5, Mapped, "5"),
    (0x1CCF6, Mapped, "6"),
    (0x1CCF7, Mapped, "7"),
    (0x1CCF8, Mapped, "8"),
    (0x1CCF9, Mapped, "9"),
    (0x1CCFA, Valid, ""),
    (0x1CCFD, Disallowed, ""),
    (0x1CD00, Valid, ""),
    (0x1CEB4, Disallowed, ""),
    (0x1CEBA, Valid, ""),
    (0x1CED1, Disallowed, ""),
    (0x1CEE0, Valid, ""),
    (0x1CEF1, Disallowed, ""),
    (0x1CF00, Valid, ""),
    (0x1CF2E, Disallowed, ""),
    (0x1CF30, Valid, ""),
    (0x1CF47, Disallowed, ""),
    (0x1CF50, Valid, ""),
    (0x1CFC4, Disallowed, ""),
    (0x1D000, Valid, ""),
    (0x1D0F6, Disallowed, ""),
    (0x1D100, Valid, ""),
    (0x1D127, Disallowed, ""),
    (0x1D129, Valid, ""),
    (0x1D15E, Mapped, "\u{1d157}\u{1d165}"),
    (0x1D15F, Mapped, "\u{1d158}\u{1d165}"),
    (0x1D160, Mapped, "\u{1d158}\u{1d165}\u{1d16e}"),
    (0x1D161, Mapped, "\u{1d158}\u{1d165}\u{1d16f}"),
    (0x1D162, Mapped, "\u{1d158}\u{1d165}\u{1d170}"),
    (0x1D163, Mapped, "\u{1d158}\u{1d165}\u{1d171}"),
    (0x1D164, Mapped, "\u{1d158}\u{1d165}\u{1d172}"),
    (0x1D165, Valid, ""),
    (0x1D173, Ignored, ""),
    (0x1D17B, Valid, ""),
    (0x1D1BB, Mapped, "\u{1d1b9}\u{1d165}"),
    (0x1D1BC, Mapped, "\u{1d1ba}\u{1d165}"),
    (0x1D1BD, Mapped, "\u{1d1b9}\u{1d165}\u{1d16e}"),
    (0x1D1BE, Mapped, "\u{1d1ba}\u{1d165}\u{1d16e}"),
    (0x1D1BF, Mapped, "\u{1d1b9}\u{1d165}\u{1d16f}"),
    (0x1D1C0, Mapped, "\u{1d1ba}\u{1d165}\u{1d16f}"),
    (0x1D1C1, Valid, ""),
    (0x1D1EB, Disallowed, ""),
    (0x1D200, Valid, ""),
    (0x1D246, Disallowed, ""),
    (0x1D2C0, Valid, ""),
    (0x1D2D4, Disallowed, ""),
    (0x1D2E0, Valid, ""),
    (0x1D2F4, Disallowed, ""),
    (0x1D300, Valid, ""),
    (0x1D357, Disallowed, ""),
    (0x1D360, Valid, ""),
    (0x1D379, Disallowed, ""),
    (0x1D400, Mapped, "a"),
    (0x1D401, Mapped, "b"),
    (0x1D402, Mapped, "c"),
    (0x1D403, Mapped, "d"),
    (0x1D404, Mapped, "e"),
    (0x1D405, Mapped, "f"),
    (0x1D406, Mapped, "g"),
    (0x1D407, Mapped, "h"),
    (0x1D408, Mapped, "i"),
    (0x1D409, Mapped, "j"),
    (0x1D40A, Mapped, "k"),
    (0x1D40B, Mapped, "l"),
    (0x1D40C, Mapped, "m"),
    (0x1D40D, Mapped, "n"),
    (0x1D40E, Mapped, "o"),
    (0x1D40F, Mapped, "p"),
    (0x1D410, Mapped, "q"),
    (0x1D411, Mapped, "r"),
    (0x1D412, Mapped, "s"),
    (0x1D413, Mapped, "t"),
    (0x1D414, Mapped, "u"),
    (0x1D415, Mapped, "v"),
    (0x1D416, Mapped, "w"),
    (0x1D417, Mapped, "x"),
    (0x1D418, Mapped, "y"),
    (0x1D419, Mapped, "z"),
    (0x1D41A, Mapped, "a"),
    (0x1D41B, Mapped, "b"),
    (0x1D41C, Mapped, "c"),
    (0x1D41D, Mapped, "d"),
    (0x1D41E, Mapped, "e"),
    (0x1D41F, Mapped, "f"),
    (0x1D420, Mapped, "g"),
    (0x1D421, Mapped, "h"),
    (0x1D422, Mapped, "i"),
    (0x1D423, Mapped, "j"),
    (0x1D424, Mapped, "k"),
    (0x1D425, Mapped, "l"),
    (0x1D426, Mapped, "m"),
    (0x1D427, Mapped, "n"),
    (0x1D428, Mapped, "o"),
    (0x1D429, Mapped, "p"),
    (0x1D42A, Mapped, "q"),
    (0x1D42B, Mapped, "r"),
    (0x1D42C, Mapped, "s"),
    (0x1D42D, Mapped, "t"),
    (0x1D42E, Mapped, "u"),
    (0x1D42F, Mapped, "v"),
    (0x1D430, Mapped, "w"),
    (0x1D431, Mapped, "x"),
    (0x1D432, Mapped, "y"),
    (0x1D433, Mapped, "z"),
    (0x1D434, Mapped, "a"),
    (0x1D435, Mapped, "b"),
    (0x1D436, Mapped, "c"),
    (0x1D437, Mapped, "d"),
    (0x1D438, Mapped, "e"),
    (0x1D439, Mapped, "f"),
    (0x1D43A, Mapped, "g"),
    (0x1D43B, Mapped, "h"),
    (0x1D43C, Mapped, "i"),
    (0x1D43D, Mapped, "j"),
    (0x1D43E, Mapped, "k"),
    (0x1D43F, Mapped, "l"),
    (0x1D440, Mapped, "m"),
    (0x1D441, Mapped, "n"),
    (0x1D442, Mapped, "o"),
    (0x1D443, Mapped, "p"),
    (0x1D444, Mapped, "q"),
    (0x1D445, Mapped, "r"),
    (0x1D446, Mapped, "s"),
    (0x1D447, Mapped, "t"),
    (0x1D448, Mapped, "u"),
    (0x1D449, Mapped, "v"),
    (0x1D44A, Mapped, "w"),
    (0x1D44B, Mapped, "x"),
    (0x1D44C, Mapped, "y"),
    (0x1D44D, Mapped, "z"),
    (0x1D44E, Mapped, "a"),
    (0x1D44F, Mapped, "b"),
    (0x1D450, Mapped, "c"),
    (0x1D451, Mapped, "d"),
    (0x1D452, Mapped, "e"),
    (0x1D453, Mapped, "f"),
    (0x1D454, Mapped, "g"),
    (0x1D455, Disallowed, ""),
    (0x1D456, Mapped, "i"),
    (0x1D457, Mapped, "j"),
    (0x1D458, Mapped, "k"),
    (0x1D459, Mapped, "l"),
    (0x1D45A, Mapped, "m"),
    (0x1D45B, Mapped, "n"),
    (0x1D45C, Mapped, "o"),
    (0x1D45D, Mapped, "p"),
    (0x1D45E, Mapped, "q"),
    (0x1D45F, Mapped, "r"),
    (0x1D460, Mapped, "s"),
    (0x1D461, Mapped, "t"),
    (0x1D462, Mapped, "u"),
    (0x1D463, Mapped, "v"),
    (0x1D464, Mapped, "w"),
    (0x1D465, Mapped, "x"),
    (0x1D466, Mapped, "y"),
    (0x1D467, Mapped, "z"),
    (0x1D468, Mapped, "a"),
    (0x1D469, Mapped, "b"),
    (0x1D46A, Mapped, "c"),
    (0x1D46B, Mapped, "d"),
    (0x1D46C, Mapped, "e"),
    (0x1D46D, Mapped, "f"),
    (0x1D46E, Mapped, "g"),
    (0x1D46F, Mapped, "h"),
    (0x1D470, Mapped, "i"),
    (0x1D471, Mapped, "j"),
    (0x1D472, Mapped, "k"),
    (0x1D473, Mapped, "l"),
    (0x1D474, Mapped, "m"),
    (0x1D475, Mapped, "n"),
    (0x1D476, Mapped, "o"),
    (0x1D477, Mapped, "p"),
    (0x1D478, Mapped, "q"),
    (0x1D479, Mapped, "r"),
    (0x1D47A, Mapped, "s"),
    (0x1D47B, Mapped, "t"),
    (0x1D47C, Mapped, "u"),
    (0x1D47D, Mapped, "v"),
    (0x1D47E, Mapped, "w"),
    (0x1D47F, Mapped, "x"),
    (0x1D480, Mapped, "y"),
    (0x1D481, Mapped, "z"),
    (0x1D482, Mapped, "a"),
    (0x1D483, Mapped, "b"),
    (0x1D484, Mapped, "c"),
    (0x1D485, Mapped, "d"),
    (0x1D486, Mapped, "e"),
    (0x1D487, Mapped, "f"),
    (0x1D488, Mapped, "g"),
    (0x1D489, Mapped, "h"),
    (0x1D48A, Mapped, "i"),
    (0x1D48B, Mapped, "j"),
    (0x1D48C, Mapped, "k"),
    (0x1D48D, Mapped, "l"),
    (0x1D48E, Mapped, "m"),
    (0x1D48F, Mapped, "n"),
    (0x1D490, Mapped, "o"),
    (0x1D491, Mapped, "p"),
    (0x1D492, Mapped, "q"),
    (0x1D493, Mapped, "r"),
    (0x1D494, Mapped, "s"),
    (0x1D495, Mapped, "t"),
    (0x1D496, Mapped, "u"),
    (0x1D497, Mapped, "v"),
    (0x1D498, Mapped, "w"),
    (0x1D499, Mapped, "x"),
    (0x1D49A, Mapped, "y"),
    (0x1D49B, Mapped, "z"),
    (0x1D49C, Mapped, "a"),
    (0x1D49D, Disallowed, ""),
    (0x1D49E, Mapped, "c"),
    (0x1D49F, Mapped, "d"),
    (0x1D4A0, Disallowed, ""),
    (0x1D4A2, Mapped, "g"),
    (0x1D4A3, Disallowed, ""),
    (0x1D4A5, Mapped, "j"),
    (0x1D4A6, Mapped, "k"),
    (0x1D4A7, Disallowed, ""),
    (0x1D4A9, Mapped, "n"),
    (0x1D4AA, Mapped, "o"),
    (0x1D4AB, Mapped, "p"),
    (0x1D4AC, Mapped, "q"),
    (0x1D4AD, Disallowed, ""),
    (0x1D4AE, Mapped, "s"),
    (0x1D4AF, Mapped, "t"),
    (0x1D4B0, Mapped, "u"),
    (0x1D4B1, Mapped, "v"),
    (0x1D4B2, Mapped, "w"),
    (0x1D4B3, Mapped, "x"),
    (0x1D4B4, Mapped, "y"),
    (0x1D4B5, Mapped, "z"),
    (0x1D4B6, Mapped, "a"),
    (0x1D4B7, Mapped, "b"),
    (0x1D4B8, Mapped, "c"),
    (0x1D4B9, Mapped, "d"),
    (0x1D4BA, Disallowed, ""),
    (0x1D4BB, Mapped, "f"),
    (0x1D4BC, Disallowed, ""),
    (0x1D4BD, Mapped, "h"),
    (0x1D4BE, Mapped, "i"),
    (0x1D4BF, Mapped, "j"),
    (0x1D4C0, Mapped, "k"),
    (0x1D4C1, Mapped, "l"),
    (0x1D4C2, Mapped, "m"),
    (0x1D4C3, Mapped, "n"),
    (0x1D4C4, Disallowed, ""),
    (0x1D4C5, Mapped, "p"),
    (0x1D4C6, Mapped, "q"),
    (0x1D4C7, Mapped, "r"),
    (0x1D4C8, Mapped, "s"),
    (0x1D4C9, Mapped, "t"),
    (0x1D4CA, Mapped, "u"),
    (0x1D4CB, Mapped, "v"),
    (0x1D4CC, Mapped, "w"),
    (0x1D4CD, Mapped, "x"),
    (0x1D4CE, Mapped, "y"),
    (0x1D4CF, Mapped, "z"),
    (0x1D4D0, Mapped, "a"),
    (0x1D4D1, Mapped, "b"),
    (0x1D4D2, Mapped, "c"),
    (0x1D4D3, Mapped, "d"),
    (0x1D4D4, Mapped, "e"),
    (0x1D4D5, Mapped, "f"),
    (0x1D4D6, Mapped, "g"),
    (0x1D4D7, Mapped, "h"),
    (0x1D4D8, Mapped, "i"),
    (0x1D4D9, Mapped, "j"),
    (0x1D4DA, Mapped, "k"),
    (0x1D4DB, Mapped, "l"),
    (0x1D4DC, Mapped, "m"),
    (0x1D4DD, Mapped, "n"),
    (0x1D4DE, Mapped, "o"),
    (0x1D4DF, Mapped, "p"),
    (0x1D4E0, Mapped, "q"),
    (0x1D4E1, Mapped, "r"),
    (0x1D4E2, Mapped, "s"),
    (0x1D4E3, Mapped, "t"),
    (0x1D4E4, Mapped, "u"),
    (0x1D4E5, Mapped, "v"),
    (0x1D4E6, Mapped, "w"),
    (0x1D4E7, Mapped, "x"),
    (0x1D4E8, Mapped, "y"),
    (0x1D4E9, Mapped, "z"),
    (0x1D4EA, Mapped, "a"),
    (0x1D4EB, Mapped, "b"),
    (0x1D4EC, Mapped, "c"),
    (0x1D4ED, Mapped, "d"),
    (0x1D4EE, Mapped, "e"),
    (0x1D4EF, Mapped, "f"),
    (0x1D4F0, Mapped, "g"),
    (0x1D4F1, Mapped, "h"),
    (0x1D4F2, Mapped, "i"),
    (0x1D4F3, Mapped, "j"),
    (0x1D4F4, Mapped, "k"),
    (0x1D4F5, Mapped, "l"),
    (0x1D4F6, Mapped, "m"),
    (0x1D4F7, Mapped, "n"),
    (0x1D4F8, Mapped, "o"),
    (0x1D4F9, Mapped, "p"),
    (0x1D4FA, Mapped, "q"),
    (0x1D4FB, Mapped, "r"),
    (0x1D4FC, Mapped, "s"),
    (0x1D4FD, Mapped, "t"),
    (0x1D4FE, Mapped, "u"),
    (0x1D4FF, Mapped, "v"),
    (0x1D500, Mapped, "w"),
    (0x1D501, Mapped, "x"),
    (0x1D502, Mapped, "y"),
    (0x1D503, Mapped, "z"),
    (0x1D504, Mapped, "a"),
    (0x1D505, Mapped, "b"),
    (0x1D506, Disallowed, ""),
    (0x1D507, Mapped, "d"),
    (0x1D508, Mapped, "e"),
    (0x1D509, Mapped, "f"),
    (0x1D50A, Mapped, "g"),
    (0x1D50B, Disallowed, ""),
    (0x1D50D, Mapped, "j"),
    (0x1D50E, Mapped, "k"),
    (0x1D50F, Mapped, "l"),
    (0x1D510, Mapped, "m"),
    (0x1D511, Mapped, "n"),
    (0x1D512, Mapped, "o"),
    (0x1D513, Mapped, "p"),
    (0x1D514, Mapped, "q"),
    (0x1D515, Disallowed, ""),
    (0x1D516, Mapped, "s"),
    (0x1D517, Mapped, "t"),
    (0x1D518, Mapped, "u"),
    (0x1D519, Mapped, "v"),
    (0x1D51A, Mapped, "w"),
    (0x1D51B, Mapped, "x"),
    (0x1D51C, Mapped, "y"),
    (0x1D51D, Disallowed, ""),
    (0x1D51E, Mapped, "a"),
    (0x1D51F, Mapped, "b"),
    (0x1D520, Mapped, "c"),
    (0x1D521, Mapped, "d"),
    (0x1D522, Mapped, "e"),
    (0x1D523, Mapped, "f"),
    (0x1D524, Mapped, "g"),
    (0x1D525, Mapped, "h"),
    (0x1D526, Mapped, "i"),
    (0x1D527, Mapped, "j"),
    (0x1D528, Mapped, "k"),
    (0x1D529, Mapped, "l"),
    (0x1D52A, Mapped, "m"),
    (0x1D52B, Mapped, "n"),
    (0x1D52C, Mapped, "o"),
    (0x1D52D, Mapped, "p"),
    (0x1D52E, Mapped, "q"),
    (0x1D52F, Mapped, "r"),
    (0x1D530, Mapped, "s"),
    (0x1D531, Mapped, "t"),
    (0x1D532, Mapped, "u"),
    (0x1D533, Mapped, "v"),
    (0x1D534, Mapped, "w"),
    (0x1D535, Mapped, "x"),
    (0x1D536, Mapped, "y"),
    (0x1D537, Mapped, "z"),
    (0x1D538, Mapped, "a"),
    (0x1D539, Mapped, "b"),
    (0x1D53A, Disallowed, ""),
    (0x1D53B, Mapped, "d"),
    (0x1D53C, Mapped, "e"),
    (0x1D53D, Mapped, "f"),
    (0x1D53E, Mapped, "g"),
    (0x1D53F, Disallowed, ""),
    (0x1D540, Mapped, "i"),
    (0x1D541, Mapped, "j"),
    (0x1D542, Mapped, "k"),
    (0x1D543, Mapped, "l"),
    (0x1D544, Mapped, "m"),
    (0x1D545, Disallowed, ""),
    (0x1D546, Mapped, "o"),
    (0x1D547, Disallowed, ""),
    (0x1D54A, Mapped, "s"),
    (0x1D54B, Mapped, "t"),
    (0x1D54C, Mapped, "u"),
    (0x1D54D, Mapped, "v"),
    (0x1D54E, Mapped, "w"),
    (0x1D54F, Mapped, "x"),
    (0x1D550, Mapped, "y"),
    (0x1D551, Disallowed, ""),
    (0x1D552, Mapped, "a"),
    (0x1D553, Mapped, "b"),
    (0x1D554, Mapped, "c"),
    (0x1D555, Mapped, "d"),
    (0x1D556, Mapped, "e"),
    (0x1D557, Mapped, "f"),
    (0x1D558, Mapped, "g"),
    (0x1D559, Mapped, "h"),
    (0x1D55A, Mapped, "i"),
    (0x1D55B, Mapped, "j"),
    (0x1D55C, Mapped, "k"),
    (0x1D55D, Mapped, "l"),
    (0x1D55E, Mapped, "m"),
    (0x1D55F, Mapped, "n"),
    (0x1D560, Mapped, "o"),
    (0x1D561, Mapped, "p"),
    (0x1D562, Mapped, "q"),
    (0x1D563, Mapped, "r"),
    (0x1D564, Mapped, "s"),
    (0x1D565, Mapped, "t"),
    (0x1D566, Mapped, "u"),
    (0x1D567, Mapped, "v"),
    (0x1D568, Mapped, "w"),
    (0x1D569, Mapped, "x"),
    (0x1D56A, Mapped, "y"),
    (0x1D56B, Mapped, "z"),
    (0x1D56C, Mapped, "a"),
    (0x1D56D, Mapped, "b"),
    (0x1D56E, Mapped, "c"),
    (0x1D56F, Mapped, "d"),
    (0x1D570, Mapped, "e"),
    (0x1D571, Mapped, "f"),
    (0x1D572, Mapped, "g"),
    (0x1D573, Mapped, "h"),
    (0x1D574, Mapped, "i"),
    (0x1D575, Mapped, "j"),
    (0x1D576, Mapped, "k"),
    (0x1D577, Mapped, "l"),
    (0x1D578, Mapped, "m"),
    (0x1D579, Mapped, "n"),
    (0x1D57A, Mapped, "o"),
    (0x1D57B, Mapped, "p"),
    (0x1D57C, Mapped, "q"),
    (0x1D57D, Mapped, "r"),
    (0x1D57E, Mapped, "s"),
    (0x1D57F, Mapped, "t"),
    (0x1D580, Mapped, "u"),
    (0x1D581, Mapped, "v"),
    (0x1D582, Mapped, "w"),
    (0x1D583, Mapped, "x"),
    (0x1D584, Mapped, "y"),
    (0x1D585, Mapped, "z"),
    (0x1D586, Mapped, "a"),
    (0x1D587, Mapped, "b"),
    (0x1D588, Mapped, "c"),
    (0x1D589, Mapped, "d"),
    (0x1D58A, Mapped, "e"),
    (0x1D58B, Mapped, "f"),
    (0x1D58C, Mapped, "g"),
    (0x1D58D, Mapped, "h"),
    (0x1D58E, Mapped, "i"),
    (0x1D58F, Mapped, "j"),
    (0x1D590, Mapped, "k"),
    (0x1D591, Mapped, "l"),
    (0x1D592, Mapped, "m"),
    (0x1D593, Mapped, "n"),
    (0x1D594, Mapped, "o"),
    (0x1D595, Mapped, "p"),
    (0x1D596, Mapped, "q"),
    (0x1D597, Mapped, "r"),
    (0x1D598, Mapped, "s"),
    (0x1D599, Mapped, "t"),
    (0x1D59A, Mapped, "u"),
    (0x1D59B, Mapped, "v"),
    (0x1D59C, Mapped, "w"),
    (0x1D59D, Mapped, "x"),
    (0x1D59E, Mapped, "y"),
    (0x1D59F, Mapped, "z"),
    (0x1D5A0, Mapped, "a"),
    (0x1D5A1, Mapped, "b"),
    (0x1D5A2, Mapped, "c"),
    (0x1D5A3, Mapped, "d"),
    (0x1D5A4, Mapped, "e"),
    (0x1D5A5, Mapped, "f"),
    (0x1D5A6, Mapped, "g"),
    (0x1D5A7, Mapped, "h"),
    (0x1D5A8, Mapped, "i"),
    (0x1D5A9, Mapped, "j"),
    (0x1D5AA, Mapped, "k"),
    (0x1D5AB, Mapped, "l"),
    (0x1D5AC, Mapped, "m"),
    (0x1D5AD, Mapped, "n"),
    (0x1D5AE, Mapped, "o"),
    (0x1D5AF, Mapped, "p"),
    (0x1D5B0, Mapped, "q"),
    (0x1D5B1, Mapped, "r"),
    (0x1D5B2, Mapped, "s"),
    (0x1D5B3, Mapped, "t"),
    (0x1D5B4, Mapped, "u"),
    (0x1D5B5, Mapped, "v"),
    (0x1D5B6, Mapped, "w"),
    (0x1D5B7, Mapped, "x"),
    (0x1D5B8, Mapped, "y"),
    (0x1D5B9, Mapped, "z"),
    (0x1D5BA, Mapped, "a"),
    (0x1D5BB, Mapped, "b"),
    (0x1D5BC, Mapped, "c"),
    (0x1D5BD, Mapped, "d"),
    (0x1D5BE, Mapped, "e"),
    (0x1D5BF, Mapped, "f"),
    (0x1D5C0, Mapped, "g"),
    (0x1D5C1, Mapped, "h"),
    (0x1D5C2, Mapped, "i"),
    (0x1D5C3, Mapped, "j"),
    (0x1D5C4, Mapped, "k"),
    (0x1D5C5, Mapped, "l"),
    (0x1D5C6, Mapped, "m"),
    (0x1D5C7, Mapped, "n"),
    (0x1D5C8, Mapped, "o"),
    (0x1D5C9, Mapped, "p"),
    (0x1D5CA, Mapped, "q"),
    (0x1D5CB, Mapped, "r"),
    (0x1D5CC, Mapped, "s"),
    (0x1D5CD, Mapped, "t"),
    (0x1D5CE, Mapped, "u"),
    (0x1D5CF, Mapped, "v"),
    (0x1D5D0, Mapped, "w"),
    (0x1D5D1, Mapped, "x"),
    (0x1D5D2, Mapped, "y"),
    (0x1D5D3, Mapped, "z"),
    (0x1D5D4, Mapped, "a"),
    (0x1D5D5, Mapped, "b"),
    (0x1D5D6, Mapped, "c"),
    (0x1D5D7, Mapped, "d"),
    (0x1D5D8, Mapped, "e"),
    (0x1D5D9, Mapped, "f"),
    (0x1D5DA, Mapped, "g"),
    (0x1D5DB, Mapped, "h"),
    (0x1D5DC, Mapped, "i"),
    (0x1D5DD, Mapped, "j"),
    (0x1D5DE, Mapped, "k"),
    (0x1D5DF, Mapped, "l"),
    (0x1D5E0, Mapped, "m"),
    (0x1D5E1, Mapped, "n"),
    (0x1D5E2, Mapped, "o"),
    (0x1D5E3, Mapped, "p"),
    (0x1D5E4, Mapped, "q"),
    (0x1D5E5, Mapped, "r"),
    (0x1D5E6, Mapped, "s"),
    (0x1D5E7, Mapped, "t"),
    (0x1D5E8, Mapped, "u"),
    (0x1D5E9, Mapped, "v"),
    (0x1D5EA, Mapped, "w"),
    (0x1D5EB, Mapped, "x"),
    (0x1D5EC, Mapped, "y"),
    (0x1D5ED, Mapped, "z"),
    (0x1D5EE, Mapped, "a"),
    (0x1D5EF, Mapped, "b"),
    (0x1D5F0, Mapped, "c"),
    (0x1D5F1, Mapped, "d"),
    (0x1D5F2, Mapped, "e"),
    (0x1D5F3, Mapped, "f"),
    (0x1D5F4, Mapped, "g"),
    (0x1D5F5, Mapped, "h"),
    (0x1D5F6, Mapped, "i"),
    (0x1D5F7, Mapped, "j"),
    (0x1D5F8, Mapped, "k"),
    (0x1D5F9, Mapped, "l"),
    (0x1D5FA, Mapped, "m"),
    (0x1D5FB, Mapped, "n"),
    (0x1D5FC, Mapped, "o"),
    (0x1D5FD, Mapped, "p"),
    (0x1D5FE, Mapped, "q"),
    (0x1D5FF, Mapped, "r"),
    (0x1D600, Mapped, "s"),
    (0x1D601, Mapped, "t"),
    (0x1D602, Mapped, "u"),
    (0x1D603, Mapped, "v"),
    (0x1D604, Mapped, "w"),
    (0x1D605, Mapped, "x"),
    (0x1D606, Mapped, "y"),
    (0x1D607, Mapped, "z"),
    (0x1D608, Mapped, "a"),
    (0x1D609, Mapped, "b"),
    (0x1D60A, Mapped, "c"),
    (0x1D60B, Mapped, "d"),
    (0x1D60C, Mapped, "e"),
    (0x1D60D, Mapped, "f"),
    (0x1D60E, Mapped, "g"),
    (0x1D60F, Mapped, "h"),
    (0x1D610, Mapped, "i"),
    (0x1D611, Mapped, "j"),
    (0x1D612, Mapped, "k"),
    (0x1D613, Mapped, "l"),
    (0x1D614, Mapped, "m"),
    (0x1D615, Mapped, "n"),
    (0x1D616, Mapped, "o"),
    (0x1D617, Mapped, "p"),
    (0x1D618, Mapped, "q"),
    (0x1D619, Mapped, "r"),
    (0x1D61A, Mapped, "s"),
    (0x1D61B, Mapped, "t"),
    (0x1D61C, Mapped, "u"),
    (0x1D61D, Mapped, "v"),
    (0x1D61E, Mapped, "w"),
    (0x1D61F, Mapped, "x"),
    (0x1D620, Mapped, "y"),
    (0x1D621, Mapped, "z"),
    (0x1D622, Mapped, "a"),
    (0x1D623, Mapped, "b"),
    (0x1D624, Mapped, "c"),
    (0x1D625, Mapped, "d"),
    (0x1D626, Mapped, "e"),
    (0x1D627, Mapped, "f"),
    (0x1D628, Mapped, "g"),
    (0x1D629, Mapped, "h"),
    (0x1D62A, Mapped, "i"),
    (0x1D62B, Mapped, "j"),
    (0x1D62C, Mapped, "k"),
    (0x1D62D, Mapped, "l"),
    (0x1D62E, Mapped, "m"),
    (0x1D62F, Mapped, "n"),
    (0x1D630, Mapped, "o"),
    (0x1D631, Mapped, "p"),
    (0x1D632, Mapped, "q"),
    (0x1D633, Mapped, "r"),
    (0x1D634, Mapped, "s"),
    (0x1D635, Mapped, "t"),
    (0x1D636, Mapped, "u"),
    (0x1D637, Mapped, "v"),
    (0x1D638, Mapped, "w"),
    (0x1D639, Mapped, "x"),
    (0x1D63A, Mapped, "y"),
    (0x1D63B, Mapped, "z"),
    (0x1D63C, Mapped, "a"),
    (0x1D63D, Mapped, "b"),
    (0x1D63E, Mapped, "c"),
    (0x1D63F, Mapped, "d"),
    (0x1D640, Mapped, "e"),
    (0x1D641, Mapped, "f"),
    (0x1D642, Mapped, "g"),
    (0x1D643, Mapped, "h"),
    (0x1D644, Mapped, "i"),
    (0x1D645, Mapped, "j"),
    (0x1D646, Mapped, "k"),
    (0x1D647, Mapped, "l"),
    (0x1D648, Mapped, "m"),
    (0x1D649, Mapped, "n"),
    (0x1D64A, Mapped, "o"),
    (0x1D64B, Mapped, "p"),
    (0x1D64C, Mapped, "q"),
    (0x1D64D, Mapped, "r"),
    (0x1D64E, Mapped, "s"),
    (0x1D64F, Mapped, "t"),
    (0x1D650, Mapped, "u"),
    (0x1D651, Mapped, "v"),
    (0x1D652, Mapped, "w"),
    (0x1D653, Mapped, "x"),
    (0x1D654, Mapped, "y"),
    (0x1D655, Mapped, "z"),
    (0x1D656, Mapped, "a"),
    (0x1D657, Mapped, "b"),
    (0x1D658, Mapped, "c"),
    (0x1D659, Mapped, "d"),
    (0x1D65A, Mapped, "e"),
    (0x1D65B, Mapped, "f"),
    (0x1D65C, Mapped, "g"),
    (0x1D65D, Mapped, "h"),
    (0x1D65E, Mapped, "i"),
    (0x1D65F, Mapped, "j"),
    (0x1D660, Mapped, "k"),
    (0x1D661, Mapped, "l"),
    (0x1D662, Mapped, "m"),
    (0x1D663, Mapped, "n"),
    (0x1D664, Mapped, "o"),
    (0x1D665, Mapped, "p"),
    (0x1D666, Mapped, "q"),
    (0x1D667, Mapped, "r"),
    (0x1D668, Mapped, "s"),
    (0x1D669, Mapped, "t"),
    (0x1D66A, Mapped, "u"),
    (0x1D66B, Mapped, "v"),
    (0x1D66C, Mapped, "w"),
    (0x1D66D, Mapped, "x"),
    (0x1D66E, Mapped, "y"),
    (0x1D66F, Mapped, "z"),
    (0x1D670, Mapped, "a"),
    (0x1D671, Mapped, "b"),
    (0x1D672, Mapped, "c"),
    (0x1D673, Mapped, "d"),
    (0x1D674, Mapped, "e"),
    (0x1D675, Mapped, "f"),
    (0x1D676, Mapped, "g"),
    (0x1D677, Mapped, "h"),
    (0x1D678, Mapped, "i"),
    (0x1D679, Mapped, "j"),
    (0x1D67A, Mapped, "k"),
    (0x1D67B, Mapped, "l"),
    (0x1D67C, Mapped, "m"),
    (0x1D67D, Mapped, "n"),
    (0x1D67E, Mapped, "o"),
    (0x1D67F, Mapped, "p"),
    (0x1D680, Mapped, "q"),
    (0x1D681, Mapped, "r"),
    (0x1D682, Mapped, "s"),
    (0x1D683, Mapped, "t"),
    (0x1D684, Mapped, "u"),
    (0x1D685, Mapped, "v"),
    (0x1D686, Mapped, "w"),
    (0x1D687, Mapped, "x"),
    (0x1D688, Mapped, "y"),
    (0x1D689, Mapped, "z"),
    (0x1D68A, Mapped, "a"),
    (0x1D68B, Mapped, "b"),
    (0x1D68C, Mapped, "c"),
    (0x1D68D, Mapped, "d"),
    (0x1D68E, Mapped, "e"),
    (0x1D68F, Mapped, "f"),
    (0x1D690, Mapped, "g"),
    (0x1D691, Mapped, "h"),
    (0x1D692, Mapped, "i"),
    (0x1D693, Mapped, "j"),
    (0x1D694, Mapped, "k"),
    (0x1D695, Mapped, "l"),
    (0x1D696, Mapped, "m"),
    (0x1D697, Mapped, "n"),
    (0x1D698, Mapped, "o"),
    (0x1D699, Mapped, "p"),
    (0x1D69A, Mapped, "q"),
    (0x1D69B, Mapped, "r"),
    (0x1D69C, Mapped, "s"),
    (0x1D69D, Mapped, "t"),
    (0x1D69E, Mapped, "u"),
    (0x1D69F, Mapped, "v"),
    (0x1D6A0, Mapped, "w"),
    (0x1D6A1, Mapped, "x"),
    (0x1D6A2, Mapped, "y"),
    (0x1D6A3, Mapped, "z"),
    (0x1D6A4, Mapped, "\u{131}"),
    (0x1D6A5, Mapped, "\u{237}"),
    (0x1D6A6, Disallowed, ""),
    (0x1D6A8, Mapped, "\u{3b1}"),
    (0x1D6A9, Mapped, "\u{3b2}"),
    (0x1D6AA, Mapped, "\u{3b3}"),
    (0x1D6AB, Mapped, "\u{3b4}"),
    (0x1D6AC, Mapped, "\u{3b5}"),
    (0x1D6AD, Mapped, "\u{3b6}"),
    (0x1D6AE, Mapped, "\u{3b7}"),
    (0x1D6AF, Mapped, "\u{3b8}"),
    (0x1D6B0, Mapped, "\u{3b9}"),
    (0x1D6B1, Mapped, "\u{3ba}"),
    (0x1D6B2, Mapped, "\u{3bb}"),
    (0x1D6B3, Mapped, "\u{3bc}"),
    (0x1D6B4, Mapped, "\u{3bd}"),
    (0x1D6B5, Mapped, "\u{3be}"),
    (0x1D6B6, Mapped, "\u{3bf}"),
    (0x1D6B7, Mapped, "\u{3c0}"),
    (0x1D6B8, Mapped, "\u{3c1}"),
    (0x1D6B9, Mapped, "\u{3b8}"),
    (0x1D6BA, Mapped, "\u{3c3}"),
    (0x1D6BB, Mapped, "\u{3c4}"),
    (0x1D6BC, Mapped, "\u{3c5}"),
    (0x1D6BD, Mapped, "\u{3c6}"),
    (0x1D6BE, Mapped, "\u{3c7}"),
    (0x1D6BF, Mapped, "\u{3c8}"),
    (0x1D6C0, Mapped, "\u{3c9}"),
    (0x1D6C1, Mapped, "\u{2207}"),
    (0x1D6C2, Mapped, "\u{3b1}"),
    (0x1D6C3, Mapped, "\u{3b2}"),
    (0x1D6C4, Mapped, "\u{3b3}"),
    (0x1D6C5, Mapped, "\u{3b4}"),
    (0x1D6C6, Mapped, "\u{3b5}"),
    (0x1D6C7, Mapped, "\u{3b6}"),
    (0x1D6C8, Mapped, "\u{3b7}"),
    (0x1D6C9, Mapped, "\u{3b8}"),
    (0x1D6CA, Mapped, "\u{3b9}"),
    (0x1D6CB, Mapped, "\u{3ba}"),
    (0x1D6CC, Mapped, "\u{3bb}"),
    (0x1D6CD, Mapped, "\u{3bc}"),
    (0x1D6CE, Mapped, "\u{3bd}"),
    (0x1D6CF, Mapped, "\u{3be}"),
    (0x1D6D0, Mapped, "\u{3bf}"),
    (0x1D6D1, Mapped, "\u{3c0}"),
    (0x1D6D2, Mapped, "\u{3c1}"),
    (0x1D6D3, Mapped, "\u{3c3}"),
    (0x1D6D5, Mapped, "\u{3c4}"),
    (0x1D6D6, Mapped, "\u{3c5}"),
    (0x1D6D7, Mapped, "\u{3c6}"),
    (0x1D6D8, Mapped, "\u{3c7}"),
    (0x1D6D9, Mapped, "\u{3c8}"),
    (0x1D6DA, Mapped, "\u{3c9}"),
    (0x1D6DB, Mapped, "\u{2202}"),
    (0x1D6DC, Mapped, "\u{3b5}"),
    (0x1D6DD, Mapped, "\u{3b8}"),
    (0x1D6DE, Mapped, "\u{3ba}"),
    (0x1D6DF, Mapped, "\u{3c6}"),
    (0x1D6E0, Mapped, "\u{3c1}"),
    (0x1D6E1, Mapped, "\u{3c0}"),
    (0x1D6E2, Mapped, "\u{3b1}"),
    (0x1D6E3, Mapped, "\u{3b2}"),
    (0x1D6E4, Mapped, "\u{3b3}"),
    (0x1D6E5, Mapped, "\u{3b4}"),
    (0x1D6E6, Mapped, "\u{3b5}"),
    (0x1D6E7, Mapped, "\u{3b6}"),
    (0x1D6E8, Mapped, "\u{3b7}"),
    (0x1D6E9, Mapped, "\u{3b8}"),
    (0x1D6EA, Mapped, "\u{3b9}"),
    (0x1D6EB, Mapped, "\u{3ba}"),
    (0x1D6EC, Mapped, "\u{3bb}"),
    (0x1D6ED, Mapped, "\u{3bc}"),
    (0x1D6EE, Mapped, "\u{3bd}"),
    (0x1D6EF, Mapped, "\u{3be}"),
    (0x1D6F0, Mapped, "\u{3bf}"),
    (0x1D6F1, Mapped, "\u{3c0}"),
    (0x1D6F2, Mapped, "\u{3c1}"),
    (0x1D6F3, Mapped, "\u{3b8}"),
    (0x1D6F4, Mapped, "\u{3c3}"),
    (0x1D6F5, Mapped, "\u{3c4}"),
    (0x1D6F6, Mapped, "\u{3c5}"),
    (0x1D6F7, Mapped, "\u{3c6}"),
    (0x1D6F8, Mapped, "\u{3c7}"),
    (0x1D6F9, Mapped, "\u{3c8}"),
    (0x1D6FA, Mapped, "\u{3c9}"),
    (0x1D6FB, Mapped, "\u{2207}"),
    (0x1D6FC, Mapped, "\u{3b1}"),
    (0x1D6FD, Mapped, "\u{3b2}"),
    (0x1D6FE, Mapped, "\u{3b3}"),
    (0x1D6FF, Mapped, "\u{3b4}"),
    (0x1D700, Mapped, "\u{3b5}"),
    (0x1D701, Mapped, "\u{3b6}"),
    (0x1D702, Mapped, "\u{3b7}"),
    (0x1D703, Mapped, "\u{3b8}"),
    (0x1D704, Mapped, "\u{3b9}"),
    (0x1D705, Mapped, "\u{3ba}"),
    (0x1D706, Mapped, "\u{3bb}"),
    (0x1D707, Mapped, "\u{3bc}"),
    (0x1D708, Mapped, "\u{3bd}"),
    (0x1D709, Mapped, "\u{3be}"),
    (0x1D70A, Mapped, "\u{3bf}"),
    (0x1D70B, Mapped, "\u{3c0}"),
    (0x1D70C, Mapped, "\u{3c1}"),
    (0x1D70D, Mapped, "\u{3c3}"),
    (0x1D70F, Mapped, "\u{3c4}"),
    (0x1D710, Mapped, "\u{3c5}"),
    (0x1D711, Mapped, "\u{3c6}"),
    (0x1D712, Mapped, "\u{3c7}"),
    (0x1D713, Mapped, "\u{3c8}"),
    (0x1D714, Mapped, "\u{3c9}"),
    (0x1D715, Mapped, "\u{2202}"),
    (0x1D716, Mapped, "\u{3b5}"),
    (0x1D717, Mapped, "\u{3b8}"),
    (0x1D718, Mapped, "\u{3ba}"),
    (0x1D719, Mapped, "\u{3c6}"),
    (0x1D71A, Mapped, "\u{3c1}"),
    (0x1D71B, Mapped, "\u{3c0}"),
    (0x1D71C, Mapped, "\u{3b1}"),
    (0x1D71D, Mapped, "\u{3b2}"),
    (0x1D71E, Mapped, "\u{3b3}"),
    (0x1D71F, Mapped, "\u{3b4}"),
    (0x1D720, Mapped, "\u{3b5}"),
    (0x1D721, Mapped, "\u{3b6}"),
    (0x1D722, Mapped, "\u{3b7}"),
    (0x1D723, Mapped, "\u{3b8}"),
    (0x1D724, Mapped, "\u{3b9}"),
    (0x1D725, Mapped, "\u{3ba}"),
    (0x1D726, Mapped, "\u{3bb}"),
    (0x1D727, Mapped, "\u{3bc}"),
    (0x1D728, Mapped, "\u{3bd}"),
    (0x1D729, Mapped, "\u{3be}"),
    (0x1D72A, Mapped, "\u{3bf}"),
    (0x1D72B, Mapped, "\u{3c0}"),
    (0x1D72C, Mapped, "\u{3c1}"),
    (0x1D72D, Mapped, "\u{3b8}"),
    (0x1D72E, Mapped, "\u{3c3}"),
    (0x1D72F, Mapped, "\u{3c4}"),
    (0x1D730, Mapped, "\u{3c5}"),
    (0x1D731, Mapped, "\u{3c6}"),
    (0x1D732, Mapped, "\u{3c7}"),
    (0x1D733, Mapped, "\u{3c8}"),
    (0x1D734, Mapped, "\u{3c9}"),
    (0x1D735, Mapped, "\u{2207}"),
    (0x1D736, Mapped, "\u{3b1}"),
    (0x1D737, Mapped, "\u{3b2}"),
    (0x1D738, Mapped, "\u{3b3}"),
    (0x1D739, Mapped, "\u{3b4}"),
    (0x1D73A, Mapped, "\u{3b5}"),
    (0x1D73B, Mapped, "\u{3b6}"),
    (0x1D73C, Mapped, "\u{3b7}"),
    (0x1D73D, Mapped, "\u{3b8}"),
    (0x1D73E, Mapped, "\u{3b9}"),
    (0x1D73F, Mapped, "\u{3ba}"),
    (0x1D740, Mapped, "\u{3bb}"),
    (0x1D741, Mapped, "\u{3bc}"),
    (0x1D742, Mapped, "\u{3bd}"),
    (0x1D743, Mapped, "\u{3be}"),
    (0x1D744, Mapped, "\u{3bf}"),
    (0x1D745, Mapped, "\u{3c0}"),
    (0x1D746, Mapped, "\u{3c1}"),
    (0x1D747, Mapped, "\u{3c3}"),
    (0x1D749, Mapped, "\u{3c4}"),
    (0x1D74A, Mapped, "\u{3c5}"),
    (0x1D74B, Mapped, "\u{3c6}"),
    (0x1D74C, Mapped, "\u{3c7}"),
    (0x1D74D, Mapped, "\u{3c8}"),
    (0x1D74E, Mapped, "\u{3c9}"),
    (0x1D74F, Mapped, "\u{2202}"),
    (0x1D750, Mapped, "\u{3b5}"),
    (0x1D751, Mapped, "\u{3b8}"),
    (0x1D752, Mapped, "\u{3ba}"),
    (0x1D753, Mapped, "\u{3c6}"),
    (0x1D754, Mapped, "\u{3c1}"),
    (0x1D755, Mapped, "\u{3c0}"),
    (0x1D756, Mapped, "\u{3b1}"),
    (0x1D757, Mapped, "\u{3b2}"),
    (0x1D758, Mapped, "\u{3b3}"),
    (0x1D759, Mapped, "\u{3b4}"),
    (0x1D75A, Mapped, "\u{3b5}"),
    (0x1D75B, Mapped, "\u{3b6}"),
    (0x1D75C, Mapped, "\u{3b7}"),
    (0x1D75D, Mapped, "\u{3b8}"),
    (0x1D75E, Mapped, "\u{3b9}"),
    (0x1D75F, Mapped, "\u{3ba}"),
    (0x1D760, Mapped, "\u{3bb}"),
    (0x1D761, Mapped, "\u{3bc}"),
    (0x1D762, Mapped, "\u{3bd}"),
    (0x1D763, Mapped, "\u{3be}"),
    (0x1D764, Mapped, "\u{3bf}"),
    (0x1D765, Mapped, "\u{3c0}"),
    (0x1D766, Mapped, "\u{3c1}"),
    (0x1D767, Mapped, "\u{3b8}"),
    (0x1D768, Mapped, "\u{3c3}"),
    (0x1D769, Mapped, "\u{3c4}"),
    (0x1D76A, Mapped, "\u{3c5}"),
    (0x1D76B, Mapped, "\u{3c6}"),
    (0x1D76C, Mapped, "\u{3c7}"),
    (0x1D76D, Mapped, "\u{3c8}"),
    (0x1D76E, Mapped, "\u{3c9}"),
    (0x1D76F, Mapped, "\u{2207}"),
    (0x1D770, Mapped, "\u{3b1}"),
    (0x1D771, Mapped, "\u{3b2}"),
    (0x1D772, Mapped, "\u{3b3}"),
    (0x1D773, Mapped, "\u{3b4}"),
    (0x1D774, Mapped, "\u{3b5}"),
    (0x1D775, Mapped, "\u{3b6}"),
    (0x1D776, Mapped, "\u{3b7}"),
    (0x1D777, Mapped, "\u{3b8}"),
    (0x1D778, Mapped, "\u{3b9}"),
    (0x1D779, Mapped, "\u{3ba}"),
    (0x1D77A, Mapped, "\u{3bb}"),
    (0x1D77B, Mapped, "\u{3bc}"),
    (0x1D77C, Mapped, "\u{3bd}"),
    (0x1D77D, Mapped, "\u{3be}"),
    (0x1D77E, Mapped, "\u{3bf}"),
    (0x1D77F, Mapped, "\u{3c0}"),
    (0x1D780, Mapped, "\u{3c1}"),
    (0x1D781, Mapped, "\u{3c3}"),
    (0x1D783, Mapped, "\u{3c4}"),
    (0x1D784, Mapped, "\u{3c5}"),
    (0x1D785, Mapped, "\u{3c6}"),
    (0x1D786, Mapped, "\u{3c7}"),
    (0x1D787, Mapped, "\u{3c8}"),
    (0x1D788, Mapped, "\u{3c9}"),
    (0x1D789, Mapped, "\u{2202}"),
    (0x1D78A, Mapped, "\u{3b5}"),
    (0x1D78B, Mapped, "\u{3b8}"),
    (0x1D78C, Mapped, "\u{3ba}"),
    (0x1D78D, Mapped, "\u{3c6}"),
    (0x1D78E, Mapped, "\u{3c1}"),
    (0x1D78F, Mapped, "\u{3c0}"),
    (0x1D790, Mapped, "\u{3b1}"),
    (0x1D791, Mapped, "\u{3b2}"),
    (0x1D792, Mapped, "\u{3b3}"),
    (0x1D793, Mapped, "\u{3b4}"),
    (0x1D794, Mapped, "\u{3b5}"),
    (0x1D795, Mapped, "\u{3b6}"),
    (0x1D796, Mapped, "\u{3b7}"),
    (0x1D797, Mapped, "\u{3b8}"),
    (0x1D798, Mapped, "\u{3b9}"),
    (0x1D799, Mapped, "\u{3ba}"),
    (0x1D79A, Mapped, "\u{3bb}"),
    (0x1D79B, Mapped, "\u{3bc}"),
    (0x1D79C, Mapped, "\u{3bd}"),
    (0x1D79D, Mapped, "\u{3be}"),
    (0x1D79E, Mapped, "\u{3bf}"),
    (0x1D79F, Mapped, "\u{3c0}"),
    (0x1D7A0, Mapped, "\u{3c1}"),
    (0x1D7A1, Mapped, "\u{3b8}"),
    (0x1D7A2, Mapped, "\u{3c3}"),
    (0x1D7A3, Mapped, "\u{3c4}"),
    (0x1D7A4, Mapped, "\u{3c5}"),
    (0x1D7A5, Mapped, "\u{3c6}"),
    (0x1D7A6, Mapped, "\u{3c7}"),
    (0x1D7A7, Mapped, "\u{3c8}"),
    (0x1D7A8, Mapped, "\u{3c9}"),
    (0x1D7A9, Mapped, "\u{2207}"),
    (0x1D7AA, Mapped, "\u{3b1}"),
    (0x1D7AB, Mapped, "\u{3b2}"),
    (0x1D7AC, Mapped, "\u{3b3}"),
    (0x1D7AD, Mapped, "\u{3b4}"),
    (0x1D7AE, Mapped, "\u{3b5}"),
    (0x1D7AF, Mapped, "\u{3b6}"),
    (0x1D7B0, Mapped, "\u{3b7}"),
    (0x1D7B1, Mapped, "\u{3b8}"),
    (0x1D7B2, Mapped, "\u{3b9}"),
    (0x1D7B3, Mapped, "\u{3ba}"),
    (0x1D7B4, Mapped, "\u{3bb}"),
    (0x1D7B5, Mapped, "\u{3bc}"),
    (0x1D7B6, Mapped, "\u{3bd}"),
    (0x1D7B7, Mapped, "\u{3be}"),
    (0x1D7B8, Mapped, "\u{3bf}"),
    (0x1D7B9, Mapped, "\u{3c0}"),
    (0x1D7BA, Mapped, "\u{3c1}"),
    (0x1D7BB, Mapped, "\u{3c3}"),
    (0x1D7BD, Mapped, "\u{3c4}"),
    (0x1D7BE, Mapped, "\u{3c5}"),
    (0x1D7BF, Mapped, "\u{3c6}"),
    (0x1D7C0, Mapped, "\u{3c7}"),
    (0x1D7C1, Mapped, "\u{3c8}"),
    (0x1D7C2, Mapped, "\u{3c9}"),
    (0x1D7C3, Mapped, "\u{2202}"),
    (0x1D7C4, Mapped, "\u{3b5}"),
    (0x1D7C5, Mapped, "\u{3b8}"),
    (0x1D7C6, Mapped, "\u{3ba}"),
    (0x1D7C7, Mapped, "\u{3c6}"),
    (0x1D7C8, Mapped, "\u{3c1}"),
    (0x1D7C9, Mapped, "\u{3c0}"),
    (0x1D7CA, Mapped, "\u{3dd}"),
    (0x1D7CC, Disallowed, ""),
    (0x1D7CE, Mapped, "0"),
    (0x1D7CF, Mapped, "1"),
    (0x1D7D0, Mapped, "2"),
    (0x1D7D1, Mapped, "3"),
    (0x1D7D2, Mapped, "4"),
    (0x1D7D3, Mapped, "5"),
    (0x1D7D4, Mapped, "6"),
    (0x1D7D5, Mapped, "7"),
    (0x1D7D6, Mapped, "8"),
    (0x1D7D7, Mapped, "9"),
    (0x1D7D8, Mapped, "0"),
    (0x1D7D9, Mapped, "1"),
    (0x1D7DA, Mapped, "2"),
    (0x1D7DB, Mapped, "3"),
    (0x1D7DC, Mapped, "4"),
    (0x1D7DD, Mapped, "5"),
    (0x1D7DE, Mapped, "6"),
    (0x1D7DF, Mapped, "7"),
    (0x1D7E0, Mapped, "8"),
    (0x1D7E1, Mapped, "9"),
    (0x1D7E2, Mapped, "0"),
    (0x1D7E3, Mapped, "1"),
    (0x1D7E4, Mapped, "2"),
    (0x1D7E5, Mapped, "3"),
    (0x1D7E6, Mapped, "4"),
    (0x1D7E7, Mapped, "5"),
    (0x1D7E8, Mapped, "6"),
    (0x1D7E9, Mapped, "7"),
    (0x1D7EA, Mapped, "8"),
    (0x1D7EB, Mapped, "9"),
    (0x1D7EC, Mapped, "0"),
    (0x1D7ED, Mapped, "1"),
    (0x1D7EE, Mapped, "2"),
    (0x1D7EF, Mapped, "3"),
    (0x1D7F0, Mapped, "4"),
    (0x1D7F1, Mapped, "5"),
    (0x1D7F2, Mapped, "6"),
    (0x1D7F3, Mapped, "7"),
    (0x1D7F4, Mapped, "8"),
    (0x1D7F5, Mapped, "9"),
    (0x1D7F6, Mapped, "0"),
    (0x1D7F7, Mapped, "1"),
    (0x1D7F8, Mapped, "2"),
    (0x1D7F9, Mapped, "3"),
    (0x1D7FA, Mapped, "4"),
    (0x1D7FB, Mapped, "5"),
    (0x1D7FC, Mapped, "6"),
    (0x1D7FD, Mapped, "7"),
    (0x1D7FE, Mapped, "8"),
    (0x1D7FF, Mapped, "9"),
    (0x1D800, Valid, ""),
    (0x1DA8C, Disallowed, ""),
    (0x1DA9B, Valid, ""),
    (0x1DAA0, Disallowed, ""),
    (0x1DAA1, Valid, ""),
    (0x1DAB0, Disallowed, ""),
    (0x1DF00, Valid, ""),
    (0x1DF1F, Disallowed, ""),
    (0x1DF25, Valid, ""),
    (0x1DF2B, Disallowed, ""),
    (0x1E000, Valid, ""),
    (0x1E007, Disallowed, ""),
    (0x1E008, Valid, ""),
    (0x1E019, Disallowed, ""),
    (0x1E01B, Valid, ""),
    (0x1E022, Disallowed, ""),
    (0x1E023, Valid, ""),
    (0x1E025, Disallowed, ""),
    (0x1E026, Valid, ""),
    (0x1E02B, Disallowed, ""),
    (0x1E030, Mapped, "\u{430}"),
    (0x1E031, Mapped, "\u{431}"),
    (0x1E032, Mapped, "\u{432}"),
    (0x1E033, Mapped, "\u{433}"),
    (0x1E034, Mapped, "\u{434}"),
    (0x1E035, Mapped, "\u{435}"),
    (0x1E036, Mapped, "\u{436}"),
    (0x1E037, Mapped, "\u{437}"),
    (0x1E038, Mapped, "\u{438}"),
    (0x1E039, Mapped, "\u{43a}"),
    (0x1E03A, Mapped, "\u{43b}"),
    (0x1E03B, Mapped, "\u{43c}"),
    (0x1E03C, Mapped, "\u{43e}"),
    (0x1E03D, Mapped, "\u{43f}"),
    (0x1E03E, Mapped, "\u{440}"),
    (0x1E03F, Mapped, "\u{441}"),
    (0x1E040, Mapped, "\u{442}"),
    (0x1E041, Mapped, "\u{443}"),
    (0x1E042, Mapped, "\u{444}"),
    (0x1E043, Mapped, "\u{445}"),
    (0x1E044, Mapped, "\u{446}"),
    (0x1E045, Mapped, "\u{447}"),
    (0x1E046, Mapped, "\u{448}"),
    (0x1E047, Mapped, "\u{44b}"),
    (0x1E048, Mapped, "\u{44d}"),
    (0x1E049, Mapped, "\u{44e}"),
    (0x1E04A, Mapped, "\u{a689}"),
    (0x1E04B, Mapped, "\u{4d9}"),
    (0x1E04C, Mapped, "\u{456}"),
    (0x1E04D, Mapped, "\u{458}"),
    (0x1E04E, Mapped, "\u{4e9}"),
    (0x1E04F, Mapped, "\u{4af}"),
    (0x1E050, Mapped, "\u{4cf}"),
    (0x1E051, Mapped, "\u{430}"),
    (0x1E052, Mapped, "\u{431}"),
    (0x1E053, Mapped, "\u{432}"),
    (0x1E054, Mapped, "\u{433}"),
    (0x1E055, Mapped, "\u{434}"),
    (0x1E056, Mapped, "\u{435}"),
    (0x1E057, Mapped, "\u{436}"),
    (0x1E058, Mapped, "\u{437}"),
    (0x1E059, Mapped, "\u{438}"),
    (0x1E05A, Mapped, "\u{43a}"),
    (0x1E05B, Mapped, "\u{43b}"),
    (0x1E05C, Mapped, "\u{43e}"),
    (0x1E05D, Mapped, "\u{43f}"),
    (0x1E05E, Mapped, "\u{441}"),
    (0x1E05F, Mapped, "\u{443}"),
    (0x1E060, Mapped, "\u{444}"),
    (0x1E061, Mapped, "\u{445}"),
    (0x1E062, Mapped, "\u{446}"),
    (0x1E063, Mapped, "\u{447}"),
    (0x1E064, Mapped, "\u{448}"),
    (0x1E065, Mapped, "\u{44a}"),
    (0x1E066, Mapped, "\u{44b}"),
    (0x1E067, Mapped, "\u{491}"),
    (0x1E068, Mapped, "\u{456}"),
    (0x1E069, Mapped, "\u{455}"),
    (0x1E06A, Mapped, "\u{45f}"),
    (0x1E06B, Mapped, "\u{4ab}"),
    (0x1E06C, Mapped, "\u{a651}"),
    (0x1E06D, Mapped, "\u{4b1}"),
    (0x1E06E, Disallowed, ""),
    (0x1E08F, Valid, ""),
    (0x1E090, Disallowed, ""),
    (0x1E100, Valid, ""),
    (0x1E12D, Disallowed, ""),
    (0x1E130, Valid, ""),
    (0x1E13E, Disallowed, ""),
    (0x1E140, Valid, ""),
    (0x1E14A, Disallowed, ""),
    (0x1E14E, Valid, ""),
    (0x1E150, Disallowed, ""),
    (0x1E290, Valid, ""),
    (0x1E2AF, Disallowed, ""),
    (0x1E2C0, Valid, ""),
    (0x1E2FA, Disallowed, ""),
    (0x1E2FF, Valid, ""),
    (0x1E300, Disallowed, ""),
    (0x1E4D0, Valid, ""),
    (0x1E4FA, Disallowed, ""),
    (0x1E5D0, Valid, ""),
    (0x1E5FB, Disallowed, ""),
    (0x1E5FF, Valid, ""),
    (0x1E600, Disallowed, ""),
    (0x1E6C0, Valid, ""),
    (0x1E6DF, Disallowed, ""),
    (0x1E6E0, Valid, ""),
    (0x1E6F6, Disallowed, ""),
    (0x1E6FE, Valid, ""),
    (0x1E700, Disallowed, ""),
    (0x1E7E0, Valid, ""),
    (0x1E7E7, Disallowed, ""),
    (0x1E7E8, Valid, ""),
    (0x1E7EC, Disallowed, ""),
    (0x1E7ED, Valid, ""),
    (0x1E7EF, Disallowed, ""),
    (0x1E7F0, Valid, ""),
    (0x1E7FF, Disallowed, ""),
    (0x1E800, Valid, ""),
    (0x1E8C5, Disallowed, ""),
    (0x1E8C7, Valid, ""),
    (0x1E8D7, Disallowed, ""),
    (0x1E900, Mapped, "\u{1e922}"),
    (0x1E901, Mapped, "\u{1e923}"),
    (0x1E902, Mapped, "\u{1e924}"),
    (0x1E903, Mapped, "\u{1e925}"),
    (0x1E904, Mapped, "\u{1e926}"),
    (0x1E905, Mapped, "\u{1e927}"),
    (0x1E906, Mapped, "\u{1e928}"),
    (0x1E907, Mapped, "\u{1e929}"),
    (0x1E908, Mapped, "\u{1e92a}"),
    (0x1E909, Mapped, "\u{1e92b}"),
    (0x1E90A, Mapped, "\u{1e92c}"),
    (0x1E90B, Mapped, "\u{1e92d}"),
    (0x1E90C, Mapped, "\u{1e92e}"),
    (0x1E90D, Mapped, "\u{1e92f}"),
    (0x1E90E, Mapped, "\u{1e930}"),
    (0x1E90F, Mapped, "\u{1e931}"),
    (0x1E910, Mapped, "\u{1e932}"),
    (0x1E911, Mapped, "\u{1e933}"),
    (0x1E912, Mapped, "\u{1e934}"),
    (0x1E913, Mapped, "\u{1e935}"),
    (0x1E914, Mapped, "\u{1e936}"),
    (0x1E915, Mapped, "\u{1e937}"),
    (0x1E916, Mapped, "\u{1e938}"),
    (0x1E917, Mapped, "\u{1e939}"),
    (0x1E918, Mapped, "\u{1e93a}"),
    (0x1E919, Mapped, "\u{1e93b}"),
    (0x1E91A, Mapped, "\u{1e93c}"),
    (0x1E91B, Mapped, "\u{1e93d}"),
    (0x1E91C, Mapped, "\u{1e93e}"),
    (0x1E91D, Mapped, "\u{1e93f}"),
    (0x1E91E, Mapped, "\u{1e940}"),
    (0x1E91F, Mapped, "\u{1e941}"),
    (0x1E920, Mapped, "\u{1e942}"),
    (0x1E921, Mapped, "\u{1e943}"),
    (0x1E922, Valid, ""),
    (0x1E94C, Disallowed, ""),
    (0x1E950, Valid, ""),
    (0x1E95A, Disallowed, ""),
    (0x1E95E, Valid, ""),
    (0x1E960, Disallowed, ""),
    (0x1EC71, Valid, ""),
    (0x1ECB5, Disallowed, ""),
    (0x1ED01, Valid, ""),
    (0x1ED3E, Disallowed, ""),
    (0x1EE00, Mapped, "\u{627}"),
    (0x1EE01, Mapped, "\u{628}"),
    (0x1EE02, Mapped, "\u{62c}"),
    (0x1EE03, Mapped, "\u{62f}"),
    (0x1EE04, Disallowed, ""),
    (0x1EE05, Mapped, "\u{648}"),
    (0x1EE06, Mapped, "\u{632}"),
    (0x1EE07, Mapped, "\u{62d}"),
    (0x1EE08, Mapped, "\u{637}"),
    (0x1EE09, Mapped, "\u{64a}"),
    (0x1EE0A, Mapped, "\u{643}"),
    (0x1EE0B, Mapped, "\u{644}"),
    (0x1EE0C, Mapped, "\u{645}"),
    (0x1EE0D, Mapped, "\u{646}"),
    (0x1EE0E, Mapped, "\u{633}"),
    (0x1EE0F, Mapped, "\u{639}"),
    (0x1EE10, Mapped, "\u{641}"),
    (0x1EE11, Mapped, "\u{635}"),
    (0x1EE12, Mapped, "\u{642}"),
    (0x1EE13, Mapped, "\u{631}"),
    (0x1EE14, Mapped, "\u{634}"),
    (0x1EE15, Mapped, "\u{62a}"),
    (0x1EE16, Mapped, "\u{62b}"),
    (0x1EE17, Mapped, "\u{62e}"),
    (0x1EE18, Mapped, "\u{630}"),
    (0x1EE19, Mapped, "\u{636}"),
    (0x1EE1A, Mapped, "\u{638}"),
    (0x1EE1B, Mapped, "\u{63a}"),
    (0x1EE1C, Mapped, "\u{66e}"),
    (0x1EE1D, Mapped, "\u{6ba}"),
    (0x1EE1E, Mapped, "\u{6a1}"),
    (0x1EE1F, Mapped, "\u{66f}"),
    (0x1EE20, Disallowed, ""),
    (0x1EE21, Mapped, "\u{628}"),
    (0x1EE22, Mapped, "\u{62c}"),
    (0x1EE23, Disallowed, ""),
    (0x1EE24, Mapped, "\u{647}"),
    (0x1EE25, Disallowed, ""),
    (0x1EE27, Mapped, "\u{62d}"),
    (0x1EE28, Disallowed, ""),
    (0x1EE29, Mapped, "\u{64a}"),
    (0x1EE2A, Mapped, "\u{643}"),
    (0x1EE2B, Mapped, "\u{644}"),
    (0x1EE2C, Mapped, "\u{645}"),
    (0x1EE2D, Mapped, "\u{646}"),
    (0x1EE2E, Mapped, "\u{633}"),
    (0x1EE2F, Mapped, "\u{639}"),
    (0x1EE30, Mapped, "\u{641}"),
    (0x1EE31, Mapped, "\u{635}"),
    (0x1EE32, Mapped, "\u{642}"),
    (0x1EE33, Disallowed, ""),
    (0x1EE34, Mapped, "\u{634}"),
    (0x1EE35, Mapped, "\u{62a}"),
    (0x1EE36, Mapped, "\u{62b}"),
    (0x1EE37, Mapped, "\u{62e}"),
    (0x1EE38, Disallowed, ""),
    (0x1EE39, Mapped, "\u{636}"),
    (0x1EE3A, Disallowed, ""),
    (0x1EE3B, Mapped, "\u{63a}"),
    (0x1EE3C, Disallowed, ""),
    (0x1EE42, Mapped, "\u{62c}"),
    (0x1EE43, Disallowed, ""),
    (0x1EE47, Mapped, "\u{62d}"),
    (0x1EE48, Disallowed, ""),
    (0x1EE49, Mapped, "\u{64a}"),
    (0x1EE4A, Disallowed, ""),
    (0x1EE4B, Mapped, "\u{644}"),
    (0x1EE4C, Disallowed, ""),
    (0x1EE4D, Mapped, "\u{646}"),
    (0x1EE4E, Mapped, "\u{633}"),
    (0x1EE4F, Mapped, "\u{639}"),
    (0x1EE50, Disallowed, ""),
    (0x1EE51, Mapped, "\u{635}"),
    (0x1EE52, Mapped, "\u{642}"),
    (0x1EE53, Disallowed, ""),
    (0x1EE54, Mapped, "\u{634}"),
    (0x1EE55, Disallowed, ""),
    (0x1EE57, Mapped, "\u{62e}"),
    (0x1EE58, Disallowed, ""),
    (0x1EE59, Mapped, "\u{636}"),
    (0x1EE5A, Disallowed, ""),
    (0x1EE5B, Mapped, "\u{63a}"),
    (0x1EE5C, Disallowed, ""),
    (0x1EE5D, Mapped, "\u{6ba}"),
    (0x1EE5E, Disallowed, ""),
    (0x1EE5F, Mapped, "\u{66f}"),
    (0x1EE60, Disallowed, ""),
    (0x1EE61, Mapped, "\u{628}"),
    (0x1EE62, Mapped, "\u{62c}"),
    (0x1EE63, Disallowed, ""),
    (0x1EE64, Mapped, "\u{647}"),
    (0x1EE65, Disallowed, ""),
    (0x1EE67, Mapped, "\u{62d}"),
    (0x1EE68, Mapped, "\u{637}"),
    (0x1EE69, Mapped, "\u{64a}"),
    (0x1EE6A, Mapped, "\u{643}"),
    (0x1EE6B, Disallowed, ""),
    (0x1EE6C, Mapped, "\u{645}"),
    (0x1EE6D, Mapped, "\u{646}"),
    (0x1EE6E, Mapped, "\u{633}"),
    (0x1EE6F, Mapped, "\u{639}"),
    (0x1EE70, Mapped, "\u{641}"),
    (0x1EE71, Mapped, "\u{635}"),
    (0x1EE72, Mapped, "\u{642}"),
    (0x1EE73, Disallowed, ""),
    (0x1EE74, Mapped, "\u{634}"),
    (0x1EE75, Mapped, "\u{62a}"),
    (0x1EE76, Mapped, "\u{62b}"),
    (0x1EE77, Mapped, "\u{62e}"),
    (0x1EE78, Disallowed, ""),
    (0x1EE79, Mapped, "\u{636}"),
    (0x1EE7A, Mapped, "\u{638}"),
    (0x1EE7B, Mapped, "\u{63a}"),
    (0x1EE7C, Mapped, "\u{66e}"),
    (0x1EE7D, Disallowed, ""),
    (0x1EE7E, Mapped, "\u{6a1}"),
    (0x1EE7F, Disallowed, ""),
    (0x1EE80, Mapped, "\u{627}"),
    (0x1EE81, Mapped, "\u{628}"),
    (0x1EE82, Mapped, "\u{62c}"),
    (0x1EE83, Mapped, "\u{62f}"),
    (0x1EE84, Mapped, "\u{647}"),
    (0x1EE85, Mapped, "\u{648}"),
    (0x1EE86, Mapped, "\u{632}"),
    (0x1EE87, Mapped, "\u{62d}"),
    (0x1EE88, Mapped, "\u{637}"),
    (0x1EE89, Mapped, "\u{64a}"),
    (0x1EE8A, Disallowed, ""),
    (0x1EE8B, Mapped, "\u{644}"),
    (0x1EE8C, Mapped, "\u{645}"),
    (0x1EE8D, Mapped, "\u{646}"),
    (0x1EE8E, Mapped, "\u{633}"),
    (0x1EE8F, Mapped, "\u{639}"),
    (0x1EE90, Mapped, "\u{641}"),
    (0x1EE91, Mapped, "\u{635}"),
    (0x1EE92, Mapped, "\u{642}"),
    (0x1EE93, Mapped, "\u{631}"),
    (0x1EE94, Mapped, "\u{634}"),
    (0x1EE95, Mapped, "\u{62a}"),
    (0x1EE96, Mapped, "\u{62b}"),
    (0x1EE97, Mapped, "\u{62e}"),
    (0x1EE98, Mapped, "\u{630}"),
    (0x1EE99, Mapped, "\u{636}"),
    (0x1EE9A, Mapped, "\u{638}"),
    (0x1EE9B, Mapped, "\u{63a}"),
    (0x1EE9C, Disallowed, ""),
    (0x1EEA1, Mapped, "\u{628}"),
    (0x1EEA2, Mapped, "\u{62c}"),
    (0x1EEA3, Mapped, "\u{62f}"),
    (0x1EEA4, Disallowed, ""),
    (0x1EEA5, Mapped, "\u{648}"),
    (0x1EEA6, Mapped, "\u{632}"),
    (0x1EEA7, Mapped, "\u{62d}"),
    (0x1EEA8, Mapped, "\u{637}"),
    (0x1EEA9, Mapped, "\u{64a}"),
    (0x1EEAA, Disallowed, ""),
    (0x1EEAB, Mapped, "\u{644}"),
    (0x1EEAC, Mapped, "\u{645}"),
    (0x1EEAD, Mapped, "\u{646}"),
    (0x1EEAE, Mapped, "\u{633}"),
    (0x1EEAF, Mapped, "\u{639}"),
    (0x1EEB0, Mapped, "\u{641}"),
    (0x1EEB1, Mapped, "\u{635}"),
    (0x1EEB2, Mapped, "\u{642}"),
    (0x1EEB3, Mapped, "\u{631}"),
    (0x1EEB4, Mapped, "\u{634}"),
    (0x1EEB5, Mapped, "\u{62a}"),
    (0x1EEB6, Mapped, "\u{62b}"),
    (0x1EEB7, Mapped, "\u{62e}"),
    (0x1EEB8, Mapped, "\u{630}"),
    (0x1EEB9, Mapped, "\u{636}"),
    (0x1EEBA, Mapped, "\u{638}"),
    (0x1EEBB, Mapped, "\u{63a}"),
    (0x1EEBC, Disallowed, ""),
    (0x1EEF0, Valid, ""),
    (0x1EEF2, Disallowed, ""),
    (0x1F000, Valid, ""),
    (0x1F02C, Disallowed, ""),
    (0x1F030, Valid, ""),
    (0x1F094, Disallowed, ""),
    (0x1F0A0, Valid, ""),
    (0x1F0AF, Disallowed, ""),
    (0x1F0B1, Valid, ""),
    (0x1F0C0, Disallowed, ""),
    (0x1F0C1, Valid, ""),
    (0x1F0D0, Disallowed, ""),
    (0x1F0D1, Valid, ""),
    (0x1F0F6, Disallowed, ""),
    (0x1F101, Mapped, "0,"),
    (0x1F102, Mapped, "1,"),
    (0x1F103, Mapped, "2,"),
    (0x1F104, Mapped, "3,"),
    (0x1F105, Mapped, "4,"),
    (0x1F106, Mapped, "5,"),
    (0x1F107, Mapped, "6,"),
    (0x1F108, Mapped, "7,"),
    (0x1F109, Mapped, "8,"),
    (0x1F10A, Mapped, "9,"),
    (0x1F10B, Valid, ""),
    (0x1F110, Mapped, "(a)"),
    (0x1F111, Mapped, "(b)"),
    (0x1F112, Mapped, "(c)"),
    (0x1F113, Mapped, "(d)"),
    (0x1F114, Mapped, "(e)"),
    (0x1F115, Mapped, "(f)"),
    (0x1F116, Mapped, "(g)"),
    (0x1F117, Mapped, "(h)"),
    (0x1F118, Mapped, "(i)"),
    (0x1F119, Mapped, "(j)"),
    (0x1F11A, Mapped, "(k)"),
    (0x1F11B, Mapped, "(l)"),
    (0x1F11C, Mapped, "(m)"),
    (0x1F11D, Mapped, "(n)"),
    (0x1F11E, Mapped, "(o)"),
    (0x1F11F, Mapped, "(p)"),
    (0x1F120, Mapped, "(q)"),
    (0x1F121, Mapped, "(r)"),
    (0x1F122, Mapped, "(s)"),
    (0x1F123, Mapped, "(t)"),
    (0x1F124, Mapped, "(u)"),
    (0x1F125, Mapped, "(v)"),
    (0x1F126, Mapped, "(w)"),
    (0x1F127, Mapped, "(x)"),
    (0x1F128, Mapped, "(y)"),
    (0x1F129, Mapped, "(z)"),
    (0x1F12A, Mapped, "\u{3014}s\u{3015}"),
    (0x1F12B, Mapped, "c"),
    (0x1F12C, Mapped, "r"),
    (0x1F12D, Mapped, "cd"),
    (0x1F12E, Mapped, "wz"),
    (0x1F12F, Valid, ""),
    (0x1F130, Mapped, "a"),
    (0x1F131, Mapped, "b"),
    (0x1F132, Mapped, "c"),
    (0x1F133, Mapped, "d"),
    (0x1F134, Mapped, "e"),
    (0x1F135, Mapped, "f"),
    (0x1F136, Mapped, "g"),
    (0x1F137, Mapped, "h"),
    (0x1F138, Mapped, "i"),
    (0x1F139, Mapped, "j"),
    (0x1F13A, Mapped, "k"),
    (0x1F13B, Mapped, "l"),
    (0x1F13C, Mapped, "m"),
    (0x1F13D, Mapped, "n"),
    (0x1F13E, Mapped, "o"),
    (0x1F13F, Mapped, "p"),
    (0x1F140, Mapped, "q"),
    (0x1F141, Mapped, "r"),
    (0x1F142, Mapped, "s"),
    (0x1F143, Mapped, "t"),
    (0x1F144, Mapped, "u"),
    (0x1F145, Mapped, "v"),
    (0x1F146, Mapped, "w"),
    (0x1F147, Mapped, "x"),
    (0x1F148, Mapped, "y"),
    (0x1F149, Mapped, "z"),
    (0x1F14A, Mapped, "hv"),
    (0x1F14B, Mapped, "mv"),
    (0x1F14C, Mapped, "sd"),
    (0x1F14D, Mapped, "ss"),
    (0x1F14E, Mapped, "ppv"),
    (0x1F14F, Mapped, "wc"),
    (0x1F150, Valid, ""),
    (0x1F16A, Mapped, "mc"),
    (0x1F16B, Mapped, "md"),
    (0x1F16C, Mapped, "mr"),
    (0x1F16D, Valid, ""),
    (0x1F190, Mapped, "dj"),
    (0x1F191, Valid, ""),
    (0x1F1AE, Disallowed, ""),
    (0x1F1E6, Valid, ""),
    (0x1F200, Mapped, "\u{307b}\u{304b}"),
    (0x1F201, Mapped, "\u{30b3}\u{30b3}"),
    (0x1F202, Mapped, "\u{30b5}"),
    (0x1F203, Disallowed, ""),
    (0x1F210, Mapped, "\u{624b}"),
    (0x1F211, Mapped, "\u{5b57}"),
    (0x1F212, Mapped, "\u{53cc}"),
    (0x1F213, Mapped, "\u{30c7}"),
    (0x1F214, Mapped, "\u{4e8c}"),
    (0x1F215, Mapped, "\u{591a}"),
    (0x1F216, Mapped, "\u{89e3}"),
    (0x1F217, Mapped, "\u{5929}"),
    (0x1F218, Mapped, "\u{4ea4}"),
    (0x1F219, Mapped, "\u{6620}"),
    (0x1F21A, Mapped, "\u{7121}"),
    (0x1F21B, Mapped, "\u{6599}"),
    (0x1F21C, Mapped, "\u{524d}"),
    (0x1F21D, Mapped, "\u{5f8c}"),
    (0x1F21E, Mapped, "\u{518d}"),
    (0x1F21F, Mapped, "\u{65b0}"),
    (0x1F220, Mapped, "\u{521d}"),
    (0x1F221, Mapped, "\u{7d42}"),
    (0x1F222, Mapped, "\u{751f}"),
    (0x1F223, Mapped, "\u{8ca9}"),
    (0x1F224, Mapped, "\u{58f0}"),
    (0x1F225, Mapped, "\u{5439}"),
    (0x1F226, Mapped, "\u{6f14}"),
    (0x1F227, Mapped, "\u{6295}"),
    (0x1F228, Mapped, "\u{6355}"),
    (0x1F229, Mapped, "\u{4e00}"),
    (0x1F22A, Mapped, "\u{4e09}"),
    (0x1F22B, Mapped, "\u{904a}"),
    (0x1F22C, Mapped, "\u{5de6}"),
    (0x1F22D, Mapped, "\u{4e2d}"),
    (0x1F22E, Mapped, "\u{53f3}"),
    (0x1F22F, Mapped, "\u{6307}"),
    (0x1F230, Mapped, "\u{8d70}"),
    (0x1F231, Mapped, "\u{6253}"),
    (0x1F232, Mapped, "\u{7981}"),
    (0x1F233, Mapped, "\u{7a7a}"),
    (0x1F234, Mapped, "\u{5408}"),
    (0x1F235, Mapped, "\u{6e80}"),
    (0x1F236, Mapped, "\u{6709}"),
    (0x1F237, Mapped, "\u{6708}"),
    (0x1F238, Mapped, "\u{7533}"),
    (0x1F239, Mapped, "\u{5272}"),
    (0x1F23A, Mapped, "\u{55b6}"),
    (0x1F23B, Mapped, "\u{914d}"),
    (0x1F23C, Disallowed, ""),
    (0x1F240, Mapped, "\u{3014}\u{672c}\u{3015}"),
    (0x1F241, Mapped, "\u{3014}\u{4e09}\u{3015}"),
    (0x1F242, Mapped, "\u{3014}\u{4e8c}\u{3015}"),
    (0x1F243, Mapped, "\u{3014}\u{5b89}\u{3015}"),
    (0x1F244, Mapped, "\u{3014}\u{70b9}\u{3015}"),
    (0x1F245, Mapped, "\u{3014}\u{6253}\u{3015}"),
    (0x1F246, Mapped, "\u{3014}\u{76d7}\u{3015}"),
    (0x1F247, Mapped, "\u{3014}\u{52dd}\u{3015}"),
    (0x1F248, Mapped, "\u{3014}\u{6557}\u{3015}"),
    (0x1F249, Disallowed, ""),
    (0x1F250, Mapped, "\u{5f97}"),
    (0x1F251, Mapped, "\u{53ef}"),
    (0x1F252, Disallowed, ""),
    (0x1F260, Valid, ""),
    (0x1F266, Disallowed, ""),
    (0x1F300, Valid, ""),
    (0x1F6D9, Disallowed, ""),
    (0x1F6DC, Valid, ""),
    (0x1F6ED, Disallowed, ""),
    (0x1F6F0, Valid, ""),
    (0x1F6FD, Disallowed, ""),
    (0x1F700, Valid, ""),
    (0x1F7DA, Disallowed, ""),
    (0x1F7E0, Valid, ""),
    (0x1F7EC, Disallowed, ""),
    (0x1F7F0, Valid, ""),
    (0x1F7F1, Disallowed, ""),
    (0x1F800, Valid, ""),
    (0x1F80C, Disallowed, ""),
    (0x1F810, Valid, ""),
    (0x1F848, Disallowed, ""),
    (0x1F850, Valid, ""),
    (0x1F85A, Disallowed, ""),
    (0x1F860, Valid, ""),
    (0x1F888, Disallowed, ""),
    (0x1F890, Valid, ""),
    (0x1F8AE, Disallowed, ""),
    (0x1F8B0, Valid, ""),
    (0x1F8BC, Disallowed, ""),
    (0x1F8C0, Valid, ""),
    (0x1F8C2, Disallowed, ""),
    (0x1F8D0, Valid, ""),
    (0x1F8D9, Disallowed, ""),
    (0x1F900, Valid, ""),
    (0x1FA58, Disallowed, ""),
    (0x1FA60, Valid, ""),
    (0x1FA6E, Disallowed, ""),
    (0x1FA70, Valid, ""),
    (0x1FA7D, Disallowed, ""),
    (0x1FA80, Valid, ""),
    (0x1FA8B, Disallowed, ""),
    (0x1FA8E, Valid, ""),
    (0x1FAC7, Disallowed, ""),
    (0x1FAC8, Valid, ""),
    (0x1FAC9, Disallowed, ""),
    (0x1FACD, Valid, ""),
    (0x1FADD, Disallowed, ""),
    (0x1FADF, Valid, ""),
    (0x1FAEB, Disallowed, ""),
    (0x1FAEF, Valid, ""),
    (0x1FAF9, Disallowed, ""),
    (0x1FB00, Valid, ""),
    (0x1FB93, Disallowed, ""),
    (0x1FB94, Valid, ""),
    (0x1FBF0, Mapped, "0"),
    (0x1FBF1, Mapped, "1"),
    (0x1FBF2, Mapped, "2"),
    (0x1FBF3, Mapped, "3"),
    (0x1FBF4, Mapped, "4"),
    (0x1FBF5, Mapped, "5"),
    (0x1FBF6, Mapped, "6"),
    (0x1FBF7, Mapped, "7"),
    (0x1FBF8, Mapped, "8"),
    (0x1FBF9, Mapped, "9"),
    (0x1FBFA, Valid, ""),
    (0x1FBFB, Disallowed, ""),
    (0x20000, Valid, ""),
    (0x2A6E0, Disallowed, ""),
    (0x2A700, Valid, ""),
    (0x2B81E, Disallowed, ""),
    (0x2B820, Valid, ""),
    (0x2CEAE, Disallowed, ""),
    (0x2CEB0, Valid, ""),
    (0x2EBE1, Disallowed, ""),
    (0x2EBF0, Valid, ""),
    (0x2EE5E, Disallowed, ""),
    (0x2F800, Mapped, "\u{4e3d}"),
    (0x2F801, Mapped, "\u{4e38}"),
    (0x2F802, Mapped, "\u{4e41}"),
    (0x2F803, Mapped, "\u{20122}"),
    (0x2F804, Mapped, "\u{4f60}"),
    (0x2F805, Mapped, "\u{4fae}"),
    (0x2F806, Mapped, "\u{4fbb}"),
    (0x2F807, Mapped, "\u{5002}"),
    (0x2F808, Mapped, "\u{507a}"),
    (0x2F809, Mapped, "\u{5099}"),
    (0x2F80A, Mapped, "\u{50e7}"),
    (0x2F80B, Mapped, "\u{50cf}"),
    (0x2F80C, Mapped, "\u{349e}"),
    (0x2F80D, Mapped, "\u{2063a}"),
    (0x2F80E, Mapped, "\u{514d}"),
    (0x2F80F, Mapped, "\u{5154}"),
    (0x2F810, Mapped, "\u{5164}"),
    (0x2F811, Mapped, "\u{5177}"),
    (0x2F812, Mapped, "\u{2051c}"),
    (0x2F813, Mapped, "\u{34b9}"),
    (0x2F814, Mapped, "\u{5167}"),
    (0x2F815, Mapped, "\u{518d}"),
    (0x2F816, Mapped, "\u{2054b}"),
    (0x2F817, Mapped, "\u{5197}"),
    (0x2F818, Mapped, "\u{51a4}"),
    (0x2F819, Mapped, "\u{4ecc}"),
    (0x2F81A, Mapped, "\u{51ac}"),
    (0x2F81B, Mapped, "\u{51b5}"),
    (0x2F81C, Mapped, "\u{291df}"),
    (0x2F81D, Mapped, "\u{51f5}"),
    (0x2F81E, Mapped, "\u{5203}"),
    (0x2F81F, Mapped, "\u{34df}"),
    (0x2F820, Mapped, "\u{523b}"),
    (0x2F821, Mapped, "\u{5246}"),
    (0x2F822, Mapped, "\u{5272}"),
    (0x2F823, Mapped, "\u{5277}"),
    (0x2F824, Mapped, "\u{3515}"),
    (0x2F825, Mapped, "\u{52c7}"),
    (0x2F826, Mapped, "\u{52c9}"),
    (0x2F827, Mapped, "\u{52e4}"),
    (0x2F828, Mapped, "\u{52fa}"),
    (0x2F829, Mapped, "\u{5305}"),
    (0x2F82A, Mapped, "\u{5306}"),
    (0x2F82B, Mapped, "\u{5317}"),
    (0x2F82C, Mapped, "\u{5349}"),
    (0x2F82D, Mapped, "\u{5351}"),
    (0x2F82E, Mapped, "\u{535a}"),
    (0x2F82F, Mapped, "\u{5373}"),
    (0x2F830, Mapped, "\u{537d}"),
    (0x2F831, Mapped, "\u{537f}"),
    (0x2F834, Mapped, "\u{20a2c}"),
    (0x2F835, Mapped, "\u{7070}"),
    (0x2F836, Mapped, "\u{53ca}"),
    (0x2F837, Mapped, "\u{53df}"),
    (0x2F838, Mapped, "\u{20b63}"),
    (0x2F839, Mapped, "\u{53eb}"),
    (0x2F83A, Mapped, "\u{53f1}"),
    (0x2F83B, Mapped, "\u{5406}"),
    (0x2F83C, Mapped, "\u{549e}"),
    (0x2F83D, Mapped, "\u{5438}"),
    (0x2F83E, Mapped, "\u{5448}"),
    (0x2F83F, Mapped, "\u{5468}"),
    (0x2F840, Mapped, "\u{54a2}"),
    (0x2F841, Mapped, "\u{54f6}"),
    (0x2F842, Mapped, "\u{5510}"),
    (0x2F843, Mapped, "\u{5553}"),
    (0x2F844, Mapped, "\u{5563}"),
    (0x2F845, Mapped, "\u{5584}"),
    (0x2F847, Mapped, "\u{5599}"),
    (0x2F848, Mapped, "\u{55ab}"),
    (0x2F849, Mapped, "\u{55b3}"),
    (0x2F84A, Mapped, "\u{55c2}"),
    (0x2F84B, Mapped, "\u{5716}"),
    (0x2F84C, Mapped, "\u{5606}"),
    (0x2F84D, Mapped, "\u{5717}"),
    (0x2F84E, Mapped, "\u{5651}"),
    (0x2F84F, Mapped, "\u{5674}"),
    (0x2F850, Mapped, "\u{5207}"),
    (0x2F851, Mapped, "\u{58ee}"),
    (0x2F852, Mapped, "\u{57ce}"),
    (0x2F853, Mapped, "\u{57f4}"),
    (0x2F854, Mapped, "\u{580d}"),
    (0x2F855, Mapped, "\u{578b}"),
    (0x2F856, Mapped, "\u{5832}"),
    (0x2F857, Mapped, "\u{5831}"),
    (0x2F858, Mapped, "\u{58ac}"),
    (0x2F859, Mapped, "\u{214e4}"),
    (0x2F85A, Mapped, "\u{58f2}"),
    (0x2F85B, Mapped, "\u{58f7}"),
    (0x2F85C, Mapped, "\u{5906}"),
    (0x2F85D, Mapped, "\u{591a}"),
    (0x2F85E, Mapped, "\u{5922}"),
    (0x2F85F, Mapped, "\u{5962}"),
    (0x2F860, Mapped, "\u{216a8}"),
    (0x2F861, Mapped, "\u{216ea}"),
    (0x2F862, Mapped, "\u{59ec}"),
    (0x2F863, Mapped, "\u{5a1b}"),
    (0x2F864, Mapped, "\u{5a27}"),
    (0x2F865, Mapped, "\u{59d8}"),
    (0x2F866, Mapped, "\u{5a66}"),
    (0x2F867, Mapped, "\u{36ee}"),
    (0x2F868, Mapped, "\u{36fc}"),
    (0x2F869, Mapped, "\u{5b08}"),
    (0x2F86A, Mapped, "\u{5b3e}"),
    (0x2F86C, Mapped, "\u{219c8}"),
    (0x2F86D, Mapped, "\u{5bc3}"),
    (0x2F86E, Mapped, "\u{5bd8}"),
    (0x2F86F, Mapped, "\u{5be7}"),
    (0x2F870, Mapped, "\u{5bf3}"),
    (0x2F871, Mapped, "\u{21b18}"),
    (0x2F872, Mapped, "\u{5bff}"),
    (0x2F873, Mapped, "\u{5c06}"),
    (0x2F874, Mapped, "\u{5f53}"),
    (0x2F875, Mapped, "\u{5c22}"),
    (0x2F876, Mapped, "\u{3781}"),
    (0x2F877, Mapped, "\u{5c60}"),
    (0x2F878, Mapped, "\u{5c6e}"),
    (0x2F879, Mapped, "\u{5cc0}"),
    (0x2F87A, Mapped, "\u{5c8d}"),
    (0x2F87B, Mapped, "\u{21de4}"),
    (0x2F87C, Mapped, "\u{5d43}"),
    (0x2F87D, Mapped, "\u{21de6}"),
    (0x2F87E, Mapped, "\u{5d6e}"),
    (0x2F87F, Mapped, "\u{5d6b}"),
    (0x2F880, Mapped, "\u{5d7c}"),
    (0x2F881, Mapped, "\u{5de1}"),
    (0x2F882, Mapped, "\u{5de2}"),
    (0x2F883, Mapped, "\u{382f}"),
    (0x2F884, Mapped, "\u{5dfd}"),
    (0x2F885, Mapped, "\u{5e28}"),
    (0x2F886, Mapped, "\u{5e3d}"),
    (0x2F887, Mapped, "\u{5e69}"),
    (0x2F888, Mapped, "\u{3862}"),
    (0x2F889, Mapped, "\u{22183}"),
    (0x2F88A, Mapped, "\u{387c}"),
    (0x2F88B, Mapped, "\u{5eb0}"),
    (0x2F88C, Mapped, "\u{5eb3}"),
    (0x2F88D, Mapped, "\u{5eb6}"),
    (0x2F88E, Mapped, "\u{5eca}"),
    (0x2F88F, Mapped, "\u{2a392}"),
    (0x2F890, Mapped, "\u{5efe}"),
    (0x2F891, Mapped, "\u{22331}"),
    (0x2F893, Mapped, "\u{8201}"),
    (0x2F894, Mapped, "\u{5f22}"),
    (0x2F896, Mapped, "\u{38c7}"),
    (0x2F897, Mapped, "\u{232b8}"),
    (0x2F898, Mapped, "\u{261da}"),
    (0x2F899, Mapped, "\u{5f62}"),
    (0x2F89A, Mapped, "\u{5f6b}"),
    (0x2F89B, Mapped, "\u{38e3}"),
    (0x2F89C, Mapped, "\u{5f9a}"),
    (0x2F89D, Mapped, "\u{5fcd}"),
    (0x2F89E, Mapped, "\u{5fd7}"),
    (0x2F89F, Mapped, "\u{5ff9}"),
    (0x2F8A0, Mapped, "\u{6081}"),
    (0x2F8A1, Mapped, "\u{393a}"),
    (0x2F8A2, Mapped, "\u{391c}"),
    (0x2F8A3, Mapped, "\u{6094}"),
    (0x2F8A4, Mapped, "\u{226d4}"),
    (0x2F8A5, Mapped, "\u{60c7}"),
    (0x2F8A6, Mapped, "\u{6148}"),
    (0x2F8A7, Mapped, "\u{614c}"),
    (0x2F8A8, Mapped, "\u{614e}"),
    (0x2F8A9, Mapped, "\u{614c}"),
    (0x2F8AA, Mapped, "\u{617a}"),
    (0x2F8AB, Mapped, "\u{618e}"),
    (0x2F8AC, Mapped, "\u{61b2}"),
    (0x2F8AD, Mapped, "\u{61a4}"),
    (0x2F8AE, Mapped, "\u{61af}"),
    (0x2F8AF, Mapped, "\u{61de}"),
    (0x2F8B0, Mapped, "\u{61f2}"),
    (0x2F8B1, Mapped, "\u{61f6}"),
    (0x2F8B2, Mapped, "\u{6210}"),
    (0x2F8B3, Mapped, "\u{621b}"),
    (0x2F8B4, Mapped, "\u{625d}"),
    (0x2F8B5, Mapped, "\u{62b1}"),
    (0x2F8B6, Mapped, "\u{62d4}"),
    (0x2F8B7, Mapped, "\u{6350}"),
    (0x2F8B8, Mapped, "\u{22b0c}"),
    (0x2F8B9, Mapped, "\u{633d}"),
    (0x2F8BA, Mapped, "\u{62fc}"),
    (0x2F8BB, Mapped, "\u{6368}"),
    (0x2F8BC, Mapped, "\u{6383}"),
    (0x2F8BD, Mapped, "\u{63e4}"),
    (0x2F8BE, Mapped, "\u{22bf1}"),
    (0x2F8BF, Mapped, "\u{6422}"),
    (0x2F8C0, Mapped, "\u{63c5}"),
    (0x2F8C1, Mapped, "\u{63a9}"),
    (0x2F8C2, Mapped, "\u{3a2e}"),
    (0x2F8C3, Mapped, "\u{6469}"),
    (0x2F8C4, Mapped, "\u{647e}"),
    (0x2F8C5, Mapped, "\u{649d}"),
    (0x2F8C6, Mapped, "\u{6477}"),
    (0x2F8C7, Mapped, "\u{3a6c}"),
    (0x2F8C8, Mapped, "\u{654f}"),
    (0x2F8C9, Mapped, "\u{656c}"),
    (0x2F8CA, Mapped, "\u{2300a}"),
    (0x2F8CB, Mapped, "\u{65e3}"),
    (0x2F8CC, Mapped, "\u{66f8}"),
    (0x2F8CD, Mapped, "\u{6649}"),
    (0x2F8CE, Mapped, "\u{3b19}"),
    (0x2F8CF, Mapped, "\u{6691}"),
    (0x2F8D0, Mapped, "\u{3b08}"),
    (0x2F8D1, Mapped, "\u{3ae4}"),
    (0x2F8D2, Mapped, "\u{5192}"),
    (0x2F8D3, Mapped, "\u{5195}"),
    (0x2F8D4, Mapped, "\u{6700}"),
    (0x2F8D5, Mapped, "\u{669c}"),
    (0x2F8D6, Mapped, "\u{80ad}"),
    (0x2F8D7, Mapped, "\u{43d9}"),
    (0x2F8D8, Mapped, "\u{6717}"),
    (0x2F8D9, Mapped, "\u{671b}"),
    (0x2F8DA, Mapped, "\u{6721}"),
    (0x2F8DB, Mapped, "\u{675e}"),
    (0x2F8DC, Mapped, "\u{6753}"),
    (0x2F8DD, Mapped, "\u{233c3}"),
    (0x2F8DE, Mapped, "\u{3b49}"),
    (0x2F8DF, Mapped, "\u{67fa}"),
    (0x2F8E0, Mapped, "\u{6785}"),
    (0x2F8E1, Mapped, "\u{6852}"),
    (0x2F8E2, Mapped, "\u{6885}"),
    (0x2F8E3, Mapped, "\u{2346d}"),
    (0x2F8E4, Mapped, "\u{688e}"),
    (0x2F8E5, Mapped, "\u{681f}"),
    (0x2F8E6, Mapped, "\u{6914}"),
    (0x2F8E7, Mapped, "\u{3b9d}"),
    (0x2F8E8, Mapped, "\u{6942}"),
    (0x2F8E9, Mapped, "\u{69a3}"),
    (0x2F8EA, Mapped, "\u{69ea}"),
    (0x2F8EB, Mapped, "\u{6aa8}"),
    (0x2F8EC, Mapped, "\u{236a3}"),
    (0x2F8ED, Mapped, "\u{6adb}"),
    (0x2F8EE, Mapped, "\u{3c18}"),
    (0x2F8EF, Mapped, "\u{6b21}"),
    (0x2F8F0, Mapped, "\u{238a7}"),
    (0x2F8F1, Mapped, "\u{6b54}"),
    (0x2F8F2, Mapped, "\u{3c4e}"),
    (0x2F8F3, Mapped, "\u{6b72}"),
    (0x2F8F4, Mapped, "\u{6b9f}"),
    (0x2F8F5, Mapped, "\u{6bba}"),
    (0x2F8F6, Mapped, "\u{6bbb}"),
    (0x2F8F7, Mapped, "\u{23a8d}"),
    (0x2F8F8, Mapped, "\u{21d0b}"),
    (0x2F8F9, Mapped, "\u{23afa}"),
    (0x2F8FA, Mapped, "\u{6c4e}"),
    (0x2F8FB, Mapped, "\u{23cbc}"),
    (0x2F8FC, Mapped, "\u{6cbf}"),
    (0x2F8FD, Mapped, "\u{6ccd}"),
    (0x2F8FE, Mapped, "\u{6c67}"),
    (0x2F8FF, Mapped, "\u{6d16}"),
    (0x2F900, Mapped, "\u{6d3e}"),
    (0x2F901, Mapped, "\u{6d77}"),
    (0x2F902, Mapped, "\u{6d41}"),
    (0x2F903, Mapped, "\u{6d69}"),
    (0x2F904, Mapped, "\u{6d78}"),
    (0x2F905, Mapped, "\u{6d85}"),
    (0x2F906, Mapped, "\u{23d1e}"),
    (0x2F907, Mapped, "\u{6d34}"),
    (0x2F908, Mapped, "\u{6e2f}"),
    (0x2F909, Mapped, "\u{6e6e}"),
    (0x2F90A, Mapped, "\u{3d33}"),
    (0x2F90B, Mapped, "\u{6ecb}"),
    (0x2F90C, Mapped, "\u{6ec7}"),
    (0x2F90D, Mapped, "\u{23ed1}"),
    (0x2F90E, Mapped, "\u{6df9}"),
    (0x2F90F, Mapped, "\u{6f6e}"),
    (0x2F910, Mapped, "\u{23f5e}"),
    (0x2F911, Mapped, "\u{23f8e}"),
    (0x2F912, Mapped, "\u{6fc6}"),
    (0x2F913, Mapped, "\u{7039}"),
    (0x2F914, Mapped, "\u{701e}"),
    (0x2F915, Mapped, "\u{701b}"),
    (0x2F916, Mapped, "\u{3d96}"),
    (0x2F917, Mapped, "\u{704a}"),
    (0x2F918, Mapped, "\u{707d}"),
    (0x2F919, Mapped, "\u{7077}"),
    (0x2F91A, Mapped, "\u{70ad}"),
    (0x2F91B, Mapped, "\u{20525}"),
    (0x2F91C, Mapped, "\u{7145}"),
    (0x2F91D, Mapped, "\u{24263}"),
    (0x2F91E, Mapped, "\u{719c}"),
    (0x2F91F, Mapped, "\u{243ab}"),
    (0x2F920, Mapped, "\u{7228}"),
    (0x2F921, Mapped, "\u{7235}"),
    (0x2F922, Mapped, "\u{7250}"),
    (0x2F923, Mapped, "\u{24608}"),
    (0x2F924, Mapped, "\u{7280}"),
    (0x2F925, Mapped, "\u{7295}"),
    (0x2F926, Mapped, "\u{24735}"),
    (0x2F927, Mapped, "\u{24814}"),
    (0x2F928, Mapped, "\u{737a}"),
    (0x2F929, Mapped, "\u{738b}"),
    (0x2F92A, Mapped, "\u{3eac}"),
    (0x2F92B, Mapped, "\u{73a5}"),
    (0x2F92C, Mapped, "\u{3eb8}"),
    (0x2F92E, Mapped, "\u{7447}"),
    (0x2F92F, Mapped, "\u{745c}"),
    (0x2F930, Mapped, "\u{7471}"),
    (0x2F931, Mapped, "\u{7485}"),
    (0x2F932, Mapped, "\u{74ca}"),
    (0x2F933, Mapped, "\u{3f1b}"),
    (0x2F934, Mapped, "\u{7524}"),
    (0x2F935, Mapped, "\u{24c36}"),
    (0x2F936, Mapped, "\u{753e}"),
    (0x2F937, Mapped, "\u{24c92}"),
    (0x2F938, Mapped, "\u{7570}"),
    (0x2F939, Mapped, "\u{2219f}"),
    (0x2F93A, Mapped, "\u{7610}"),
    (0x2F93B, Mapped, "\u{24fa1}"),
    (0x2F93C, Mapped, "\u{24fb8}"),
    (0x2F93D, Mapped, "\u{25044}"),
    (0x2F93E, Mapped, "\u{3ffc}"),
    (0x2F93F, Mapped, "\u{4008}"),
    (0x2F940, Mapped, "\u{76f4}"),
    (0x2F941, Mapped, "\u{250f3}"),
    (0x2F942, Mapped, "\u{250f2}"),
    (0x2F943, Mapped, "\u{25119}"),
    (0x2F944, Mapped, "\u{25133}"),
    (0x2F945, Mapped, "\u{771e}"),
    (0x2F946, Mapped, "\u{771f}"),
    (0x2F948, Mapped, "\u{774a}"),
    (0x2F949, Mapped, "\u{4039}"),
    (0x2F94A, Mapped, "\u{778b}"),
    (0x2F94B, Mapped, "\u{4046}"),
    (0x2F94C, Mapped, "\u{4096}"),
    (0x2F94D, Mapped, "\u{2541d}"),
    (0x2F94E, Mapped, "\u{784e}"),
    (0x2F94F, Mapped, "\u{788c}"),
    (0x2F950, Mapped, "\u{78cc}"),
    (0x2F951, Mapped, "\u{40e3}"),
    (0x2F952, Mapped, "\u{25626}"),
    (0x2F953, Mapped, "\u{7956}"),
    (0x2F954, Mapped, "\u{2569a}"),
    (0x2F955, Mapped, "\u{256c5}"),
    (0x2F956, Mapped, "\u{798f}"),
    (0x2F957, Mapped, "\u{79eb}"),
    (0x2F958, Mapped, "\u{412f}"),
    (0x2F959, Mapped, "\u{7a40}"),
    (0x2F95A, Mapped, "\u{7a4a}"),
    (0x2F95B, Mapped, "\u{7a4f}"),
    (0x2F95C, Mapped, "\u{2597c}"),
    (0x2F95D, Mapped, "\u{25aa7}"),
    (0x2F95F, Mapped, "\u{7aee}"),
    (0x2F960, Mapped, "\u{4202}"),
    (0x2F961, Mapped, "\u{25bab}"),
    (0x2F962, Mapped, "\u{7bc6}"),
    (0x2F963, Mapped, "\u{7bc9}"),
    (0x2F964, Mapped, "\u{4227}"),
    (0x2F965, Mapped, "\u{25c80}"),
    (0x2F966, Mapped, "\u{7cd2}"),
    (0x2F967, Mapped, "\u{42a0}"),
    (0x2F968, Mapped, "\u{7ce8}"),
    (0x2F969, Mapped, "\u{7ce3}"),
    (0x2F96A, Mapped, "\u{7d00}"),
    (0x2F96B, Mapped, "\u{25f86}"),
    (0x2F96C, Mapped, "\u{7d63}"),
    (0x2F96D, Mapped, "\u{4301}"),
    (0x2F96E, Mapped, "\u{7dc7}"),
    (0x2F96F, Mapped, "\u{7e02}"),
    (0x2F970, Mapped, "\u{7e45}"),
    (0x2F971, Mapped, "\u{4334}"),
    (0x2F972, Mapped, "\u{26228}"),
    (0x2F973, Mapped, "\u{26247}"),
    (0x2F974, Mapped, "\u{4359}"),
    (0x2F975, Mapped, "\u{262d9}"),
    (0x2F976, Mapped, "\u{7f7a}"),
    (0x2F977, Mapped, "\u{2633e}"),
    (0x2F978, Mapped, "\u{7f95}"),
    (0x2F979, Mapped, "\u{7ffa}"),
    (0x2F97A, Mapped, "\u{8005}"),
    (0x2F97B, Mapped, "\u{264da}"),
    (0x2F97C, Mapped, "\u{26523}"),
    (0x2F97D, Mapped, "\u{8060}"),
    (0x2F97E, Mapped, "\u{265a8}"),
    (0x2F97F, Mapped, "\u{8070}"),
    (0x2F980, Mapped, "\u{2335f}"),
    (0x2F981, Mapped, "\u{43d5}"),
    (0x2F982, Mapped, "\u{80b2}"),
    (0x2F983, Mapped, "\u{8103}"),
    (0x2F984, Mapped, "\u{440b}"),
    (0x2F985, Mapped, "\u{813e}"),
    (0x2F986, Mapped, "\u{5ab5}"),
    (0x2F987, Mapped, "\u{267a7}"),
    (0x2F988, Mapped, "\u{267b5}"),
    (0x2F989, Mapped, "\u{23393}"),
    (0x2F98A, Mapped, "\u{2339c}"),
    (0x2F98B, Mapped, "\u{8201}"),
    (0x2F98C, Mapped, "\u{8204}"),
    (0x2F98D, Mapped, "\u{8f9e}"),
    (0x2F98E, Mapped, "\u{446b}"),
    (0x2F98F, Mapped, "\u{8291}"),
    (0x2F990, Mapped, "\u{828b}"),
    (0x2F991, Mapped, "\u{829d}"),
    (0x2F992, Mapped, "\u{52b3}"),
    (0x2F993, Mapped, "\u{82b1}"),
    (0x2F994, Mapped, "\u{82b3}"),
    (0x2F995, Mapped, "\u{82bd}"),
    (0x2F996, Mapped, "\u{82e6}"),
    (0x2F997, Mapped, "\u{26b3c}"),
    (0x2F998, Mapped, "\u{82e5}"),
    (0x2F999, Mapped, "\u{831d}"),
    (0x2F99A, Mapped, "\u{8363}"),
    (0x2F99B, Mapped, "\u{83ad}"),
    (0x2F99C, Mapped, "\u{8323}"),
    (0x2F99D, Mapped, "\u{83bd}"),
    (0x2F99E, Mapped, "\u{83e7}"),
    (0x2F99F, Mapped, "\u{8457}"),
    (0x2F9A0, Mapped, "\u{8353}"),
    (0x2F9A1, Mapped, "\u{83ca}"),
    (0x2F9A2, Mapped, "\u{83cc}"),
    (0x2F9A3, Mapped, "\u{83dc}"),
    (0x2F9A4, Mapped, "\u{26c36}"),
    (0x2F9A5, Mapped, "\u{26d6b}"),
    (0x2F9A6, Mapped, "\u{26cd5}"),
    (0x2F9A7, Mapped, "\u{452b}"),
    (0x2F9A8, Mapped, "\u{84f1}"),
    (0x2F9A9, Mapped, "\u{84f3}"),
    (0x2F9AA, Mapped, "\u{8516}"),
    (0x2F9AB, Mapped, "\u{273ca}"),
    (0x2F9AC, Mapped, "\u{8564}"),
    (0x2F9AD, Mapped, "\u{26f2c}"),
    (0x2F9AE, Mapped, "\u{455d}"),
    (0x2F9AF, Mapped, "\u{4561}"),
    (0x2F9B0, Mapped, "\u{26fb1}"),
    (0x2F9B1, Mapped, "\u{270d2}"),
    (0x2F9B2, Mapped, "\u{456b}"),
    (0x2F9B3, Mapped, "\u{8650}"),
    (0x2F9B4, Mapped, "\u{865c}"),
    (0x2F9B5, Mapped, "\u{8667}"),
    (0x2F9B6, Mapped, "\u{8669}"),
    (0x2F9B7, Mapped, "\u{86a9}"),
    (0x2F9B8, Mapped, "\u{8688}"),
    (0x2F9B9, Mapped, "\u{870e}"),
    (0x2F9BA, Mapped, "\u{86e2}"),
    (0x2F9BB, Mapped, "\u{8779}"),
    (0x2F9BC, Mapped, "\u{8728}"),
    (0x2F9BD, Mapped, "\u{876b}"),
    (0x2F9BE, Mapped, "\u{8786}"),
    (0x2F9BF, Mapped, "\u{45d7}"),
    (0x2F9C0, Mapped, "\u{87e1}"),
    (0x2F9C1, Mapped, "\u{8801}"),
    (0x2F9C2, Mapped, "\u{45f9}"),
    (0x2F9C3, Mapped, "\u{8860}"),
    (0x2F9C4, Mapped, "\u{8863}"),
    (0x2F9C5, Mapped, "\u{27667}"),
    (0x2F9C6, Mapped, "\u{88d7}"),
    (0x2F9C7, Mapped, "\u{88de}"),
    (0x2F9C8, Mapped, "\u{4635}"),
    (0x2F9C9, Mapped, "\u{88fa}"),
    (0x2F9CA, Mapped, "\u{34bb}"),
    (0x2F9CB, Mapped, "\u{278ae}"),
    (0x2F9CC, Mapped, "\u{27966}"),
    (0x2F9CD, Mapped, "\u{46be}"),
    (0x2F9CE, Mapped, "\u{46c7}"),
    (0x2F9CF, Mapped, "\u{8aa0}"),
    (0x2F9D0, Mapped, "\u{8aed}"),
    (0x2F9D1, Mapped, "\u{8b8a}"),
    (0x2F9D2, Mapped, "\u{8c55}"),
    (0x2F9D3, Mapped, "\u{27ca8}"),
    (0x2F9D4, Mapped, "\u{8cab}"),
    (0x2F9D5, Mapped, "\u{8cc1}"),
    (0x2F9D6, Mapped, "\u{8d1b}"),
    (0x2F9D7, Mapped, "\u{8d77}"),
    (0x2F9D8, Mapped, "\u{27f2f}"),
    (0x2F9D9, Mapped, "\u{20804}"),
    (0x2F9DA, Mapped, "\u{8dcb}"),
    (0x2F9DB, Mapped, "\u{8dbc}"),
    (0x2F9DC, Mapped, "\u{8df0}"),
    (0x2F9DD, Mapped, "\u{208de}"),
    (0x2F9DE, Mapped, "\u{8ed4}"),
    (0x2F9DF, Mapped, "\u{8f38}"),
    (0x2F9E0, Mapped, "\u{285d2}"),
    (0x2F9E1, Mapped, "\u{285ed}"),
    (0x2F9E2, Mapped, "\u{9094}"),
    (0x2F9E3, Mapped, "\u{90f1}"),
    (0x2F9E4, Mapped, "\u{9111}"),
    (0x2F9E5, Mapped, "\u{2872e}"),
    (0x2F9E6, Mapped, "\u{911b}"),
    (0x2F9E7, Mapped, "\u{9238}"),
    (0x2F9E8, Mapped, "\u{92d7}"),
    (0x2F9E9, Mapped, "\u{92d8}"),
    (0x2F9EA, Mapped, "\u{927c}"),
    (0x2F9EB, Mapped, "\u{93f9}"),
    (0x2F9EC, Mapped, "\u{9415}"),
    (0x2F9ED, Mapped, "\u{28bfa}"),
    (0x2F9EE, Mapped, "\u{958b}"),
    (0x2F9EF, Mapped, "\u{4995}"),
    (0x2F9F0, Mapped, "\u{95b7}"),
    (0x2F9F1, Mapped, "\u{28d77}"),
    (0x2F9F2, Mapped, "\u{49e6}"),
    (0x2F9F3, Mapped, "\u{96c3}"),
    (0x2F9F4, Mapped, "\u{5db2}"),
    (0x2F9F5, Mapped, "\u{9723}"),
    (0x2F9F6, Mapped, "\u{29145}"),
    (0x2F9F7, Mapped, "\u{2921a}"),
    (0x2F9F8, Mapped, "\u{4a6e}"),
    (0x2F9F9, Mapped, "\u{4a76}"),
    (0x2F9FA, Mapped, "\u{97e0}"),
    (0x2F9FB, Mapped, "\u{2940a}"),
    (0x2F9FC, Mapped, "\u{4ab2}"),
    (0x2F9FD, Mapped, "\u{29496}"),
    (0x2F9FE, Mapped, "\u{980b}"),
    (0x2FA00, Mapped, "\u{9829}"),
    (0x2FA01, Mapped, "\u{295b6}"),
    (0x2FA02, Mapped, "\u{98e2}"),
    (0x2FA03, Mapped, "\u{4b33}"),
    (0x2FA04, Mapped, "\u{9929}"),
    (0x2FA05, Mapped, "\u{99a7}"),
    (0x2FA06, Mapped, "\u{99c2}"),
    (0x2FA07, Mapped, "\u{99fe}"),
    (0x2FA08, Mapped, "\u{4bce}"),
    (0x2FA09, Mapped, "\u{29b30}"),
    (0x2FA0A, Mapped, "\u{9b12}"),
    (0x2FA0B, Mapped, "\u{9c40}"),
    (0x2FA0C, Mapped, "\u{9cfd}"),
    (0x2FA0D, Mapped, "\u{4cce}"),
    (0x2FA0E, Mapped, "\u{4ced}"),
    (0x2FA0F, Mapped, "\u{9d67}"),
    (0x2FA10, Mapped, "\u{2a0ce}"),
    (0x2FA11, Mapped, "\u{4cf8}"),
    (0x2FA12, Mapped, "\u{2a105}"),
    (0x2FA13, Mapped, "\u{2a20e}"),
    (0x2FA14, Mapped, "\u{2a291}"),
    (0x2FA15, Mapped, "\u{9ebb}"),
    (0x2FA16, Mapped, "\u{4d56}"),
    (0x2FA17, Mapped, "\u{9ef9}"),
    (0x2FA18, Mapped, "\u{9efe}"),
    (0x2FA19, Mapped, "\u{9f05}"),
    (0x2FA1A, Mapped, "\u{9f0f}"),
    (0x2FA1B, Mapped, "\u{9f16}"),
    (0x2FA1C, Mapped, "\u{9f3b}"),
    (0x2FA1D, Mapped, "\u{2a600}"),
    (0x2FA1E, Disallowed, ""),
    (0x30000, Valid, ""),
    (0x3134B, Disallowed, ""),
    (0x31350, Valid, ""),
    (0x3347A, Disallowed, ""),
    (0xE0100, Ignored, ""),
    (0xE01F0, Disallowed, ""),
];
