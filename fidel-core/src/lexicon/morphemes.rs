//! Suffix and prefix morphemes in source script.
//!
//! Both lists are in priority order: the stripper takes the first entry
//! that matches. Longer and more specific morphemes sit ahead of the
//! shorter ones they contain, but the order is hand-tuned rather than
//! length-sorted and must not be re-sorted.
//!
//! Vowel carriers spell out the vowel a morpheme contributes: `ኧ` (ä),
//! `ኡ` (u), `ኢ` (i), `ኣ` (a), `ኤ` (e), `ዕ`/`እ` (ə), `ኦ` (o). A few entries
//! appear twice; only the first occurrence can ever match.

/// Suffixes, tried from the first entry to the last.
#[rustfmt::skip]
pub const SUFFIXES: &[&str] = &[
    "ኦችኣችኧውንንኣ", "ንኧትኣችኧው", "ኧኝኣንኧትም", "ኦችኣችኧውን", "ኣችኧውንንኣ", "ውኦችኣችን",
    "ኢዕኧልኧሽ", "ኣችኧውኣል", "ኧችኣችህኡ", "ኧችኣችኧው", "ኣልኣልኧች", "ብኣችኧውስ",
    "ኣልኣችህኡ", "ውኦችንንኣ", "ኧኝኣንኧት", "ኦችኣችህኡ", "ኦችኣችኧው", "ኝኣንኧትም",
    "ኣልኧህኡ", "ኣልችህኡ", "ብኣችኧው", "ኣችኧውን", "ኣችህኡን", "ኣችህኡት",
    "ኧኝኣንኣ", "ኧኝኣውም", "ኣችህኡም", "ኦችንንኣ", "ኦችኣችን", "ችኣችህኡ",
    "ችኣችኧው", "ኝኣንኧት", "ዊነታቸው", "ውያንን", "ነታቸው", "ኣውኢው",
    "ኧችኣት", "ኣውኦች", "ኣልኧህ", "ኣልኧሽ", "ኣልኧች", "ኣልኧን",
    "ኣችህኡ", "ውኦችን", "ኣችኧው", "ኦችኡን", "ኧውንኣ", "ኦችኡን",
    "ኦውኦች", "ኧኝኣን", "ኧኝኣው", "ኝኣውኣ", "ብኧትን", "ይኡሽን",
    "ኝኣውን", "ኝኣንኣ", "ኝኣውም", "ችኣችን", "ኦችኡ", "ኦውኣ",
    "ኧችው", "ኧችኡ", "ኤችኡ", "ንኧው", "ንኧት", "ኣልኡ",
    "ኣችን", "ክኡም", "ክኡት", "ክኧው", "ኧችን", "ኧችም",
    "ኧችህ", "ኧችሽ", "ኧችን", "ኧችው", "ይኡሽ", "ይኧው",
    "ኧውኢ", "ኣውኢ", "ብኧት", "ኦችኡ", "ውኦን", "ኧኝኣ",
    "ኝኣው", "ኦችን", "ችኣት", "ውንኣ", "ውኦች", "ኝኣን",
    "ኣውኣ", "ኦችህ", "ኦችሽ", "ኦችኤ", "ዊቷ", "ኢቷ",
    "ኦች", "ኣል", "ኧም", "ሽው", "ክም", "ኧው",
    "ትም", "ውኦ", "ውም", "ውን", "ንም", "ሽን",
    "ኣች", "ኡት", "ኢት", "ክኡ", "ኧች", "ኡን",
    "ንኣ", "ኦቿ", "ችው", "ችኡ", "ችን", "ችም",
    "ችህ", "ችሽ", "ውኢ", "ኝኣ", "ውኣ", "ነት",
    "ህ", "ሽ", "ኡ", "ሽ", "ክ", "ኧ",
    "ን", "ም", "ው", "ዊ", "ች", "ቷ",
];

/// Prefixes, tried from the first entry to the last.
#[rustfmt::skip]
pub const PREFIXES: &[&str] = &[
    "ስልኧምኣይ", "ይኧምኣት", "ዕንድኧ", "ይኧትኧ", "ብኧትኧ", "ዕኧል", "ስልኧ", "ምኧስ",
    "እንደ", "ዕይኧ", "ዕኧስ", "ዕኧት", "ዕኧን", "ዕኧይ", "ይኣል", "ስኣት",
    "ስኣን", "ስኣይ", "ይኣስ", "ስኣል", "ኣል", "ይኧ", "ልኧ", "ክኧ",
    "እን", "ዕን", "ዐል", "ብኧ", "አል", "አስ", "ትኧ", "አት",
    "አይ", "ስ", "ይ", "እ", "በ", "የ", "ለ",
];
