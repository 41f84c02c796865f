//! Abbreviations common in Amharic prose and their expansions.
//!
//! Most keys are built around a slash (`ት/ቤት`) or full stops (`ዓ.ም`), which
//! is why expansion has to run before punctuation stripping.
//!
//! The list is ordered. Keys that overlap (`ዓ.ም` and `ዓ.ም.`) are tried in
//! this order and the first one present wins.

/// `(abbreviation, expansion)` pairs in lookup order.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("ት/ቤት", "ትምህርት ቤት"),
    ("ት/ርት", "ትምህርት"),
    ("ት/ክፍል", "ትምህርት ክፍል"),
    ("ሃ/አለቃ", "ሃምሳ አለቃ"),
    ("ሃ/ስላሴ", "ሃይለ ስላሴ"),
    ("ደ/ዘይት", "ደብረ ዘይት"),
    ("ደ/ታቦር", "ደብረ ታቦር"),
    ("መ/ር", "መምህር"),
    ("መ/ቤት", "መስሪያ ቤት"),
    ("መ/አለቃ", "መቶ አለቃ"),
    ("ክ/ከተማ", "ክፍለ ከተማ"),
    ("ክ/ሀገር", "ክፍለ ሀገር"),
    ("ወ/ሮ", "ወይዘሮ"),
    ("ወ/ሪት", "ወይዘሪት"),
    ("ወ/ስላሴ", "ወልደ ስላሴ"),
    ("ፍ/ስላሴ", "ፍቅረ ስላሴ"),
    ("ፍ/ቤት", "ፍርድ ቤት"),
    ("ጽ/ቤት", "ጽህፈት ቤት"),
    ("ሲ/ር", "ሲስተር"),
    ("ፕ/ር", "ፕሮፌሰር"),
    ("ጠ/ሚንስትር", "ጠቅላይ ሚኒስተር"),
    ("ዶ/ር", "ዶክተር"),
    ("ገ/ግዮርጊስ", "ገብረ ግዮርጊስ"),
    ("ቤ/ክርስትያን", "ቤተ ክርስትያን"),
    ("ም/ስራ", "ምክትል ስራ አስኪያጅ"),
    ("ም/ቤት", "ምክር ቤተ"),
    ("ተ/ሃይማኖት", "ተክለ ሃይማኖት"),
    ("ሚ/ር", "ሚኒስትር"),
    ("ኮ/ል", "ኮሎኔል"),
    ("ሜ/ጀነራል", "ሜጀር ጀነራል"),
    ("ብ/ጀነራል", "ብርጋደር ጀነራል"),
    ("ሌ/ኮለኔል", "ሌተናንት ኮለኔል"),
    ("ሊ/መንበር", "ሊቀ መንበር"),
    ("አ/አ", "አዲስ ኣበባ"),
    ("ር/መምህር", "ርዕሰ መምህር"),
    ("ዓም", "ዓመተ ምህረት"),
    ("ዓ.ም", "ዓመተ ምህረት"),
    ("ዓ.ም.", "ዓመተ ምህረት"),
    ("ዓ.ዓ", "ዓመተ ዓለም"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_non_empty_and_unique() {
        for (i, (key, _)) in ABBREVIATIONS.iter().enumerate() {
            assert!(!key.is_empty());
            assert!(
                ABBREVIATIONS[i + 1..].iter().all(|(other, _)| other != key),
                "duplicate abbreviation {key}"
            );
        }
    }

    #[test]
    fn school_abbreviation_present() {
        assert!(ABBREVIATIONS.contains(&("ት/ቤት", "ትምህርት ቤት")));
    }

    #[test]
    fn shorter_era_key_comes_first() {
        let short = ABBREVIATIONS.iter().position(|(k, _)| *k == "ዓ.ም");
        let long = ABBREVIATIONS.iter().position(|(k, _)| *k == "ዓ.ም.");
        assert!(short.unwrap() < long.unwrap());
    }
}
