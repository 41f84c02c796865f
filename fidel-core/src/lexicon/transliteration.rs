//! Ge'ez syllable to Latin transliteration table.
//!
//! Each consonant series is one row: the seven vowel orders (ä u i a e ə o)
//! followed by the labialized forms where the script has them. Capital
//! letters mark distinct consonants (`T` is ጠ, `t` is ተ), and repeated
//! capitals distinguish the historical doublets (`S` ሠ, `SS` ጸ, `SSS` ፀ).
//!
//! Two encodings are shared: `E` (ኤ, ዐ) and `I` (እ, ዒ). Reverse lookup
//! resolves them to the entry listed first.

/// Latin string standing for "no grapheme".
///
/// Never produced from real text. The cluster-separator infix rule inserts
/// it, and reverse transcoding maps it back to nothing.
pub const PLACEHOLDER: &str = "X";

/// Vowel-carrier grapheme dropped when it only appears as a leftover of
/// character-level reverse lookup.
pub const EPENTHETIC_FILLER: char = 'ኧ';

/// Syllable table, in reverse-lookup priority order.
#[rustfmt::skip]
pub const SYLLABLES: &[(char, &str)] = &[
    ('ሀ', "he"), ('ሁ', "hu"), ('ሂ', "hi"), ('ሃ', "ha"), ('ሄ', "hE"), ('ህ', "h"), ('ሆ', "ho"),
    ('ለ', "le"), ('ሉ', "lu"), ('ሊ', "li"), ('ላ', "la"), ('ሌ', "lE"), ('ል', "l"), ('ሎ', "lo"), ('ሏ', "lWa"),
    ('ሐ', "He"), ('ሑ', "Hu"), ('ሒ', "Hi"), ('ሓ', "Ha"), ('ሔ', "HE"), ('ሕ', "H"), ('ሖ', "Ho"), ('ሗ', "HWa"),
    ('መ', "me"), ('ሙ', "mu"), ('ሚ', "mi"), ('ማ', "ma"), ('ሜ', "mE"), ('ም', "m"), ('ሞ', "mo"), ('ሟ', "mWa"),
    ('ሠ', "Se"), ('ሡ', "Su"), ('ሢ', "Si"), ('ሣ', "Sa"), ('ሤ', "SE"), ('ሥ', "S"), ('ሦ', "So"), ('ሧ', "SWa"),
    ('ረ', "re"), ('ሩ', "ru"), ('ሪ', "ri"), ('ራ', "ra"), ('ሬ', "rE"), ('ር', "r"), ('ሮ', "ro"), ('ሯ', "rWa"),
    ('ሰ', "se"), ('ሱ', "su"), ('ሲ', "si"), ('ሳ', "sa"), ('ሴ', "sE"), ('ስ', "s"), ('ሶ', "so"), ('ሷ', "sWa"),
    ('ሸ', "xe"), ('ሹ', "xu"), ('ሺ', "xi"), ('ሻ', "xa"), ('ሼ', "xE"), ('ሽ', "x"), ('ሾ', "xo"), ('ሿ', "xWa"),
    ('ቀ', "qe"), ('ቁ', "qu"), ('ቂ', "qi"), ('ቃ', "qa"), ('ቄ', "qE"), ('ቅ', "q"), ('ቆ', "qo"),
    ('ቈ', "qWe"), ('ቊ', "qWi"), ('ቋ', "qWa"), ('ቌ', "qWE"), ('ቍ', "qW"),
    ('በ', "be"), ('ቡ', "bu"), ('ቢ', "bi"), ('ባ', "ba"), ('ቤ', "bE"), ('ብ', "b"), ('ቦ', "bo"), ('ቧ', "bWa"),
    ('ቨ', "ve"), ('ቩ', "vu"), ('ቪ', "vi"), ('ቫ', "va"), ('ቬ', "vE"), ('ቭ', "v"), ('ቮ', "vo"), ('ቯ', "vWa"),
    ('ተ', "te"), ('ቱ', "tu"), ('ቲ', "ti"), ('ታ', "ta"), ('ቴ', "tE"), ('ት', "t"), ('ቶ', "to"), ('ቷ', "tWa"),
    ('ቸ', "ce"), ('ቹ', "cu"), ('ቺ', "ci"), ('ቻ', "ca"), ('ቼ', "cE"), ('ች', "c"), ('ቾ', "co"), ('ቿ', "cWa"),
    ('ኀ', "hhe"), ('ኁ', "hhu"), ('ኂ', "hhi"), ('ኃ', "hha"), ('ኄ', "hhE"), ('ኅ', "hh"), ('ኆ', "hho"),
    ('ኈ', "hWe"), ('ኊ', "hWi"), ('ኋ', "hWa"), ('ኌ', "hWE"), ('ኍ', "hW"),
    ('ነ', "ne"), ('ኑ', "nu"), ('ኒ', "ni"), ('ና', "na"), ('ኔ', "nE"), ('ን', "n"), ('ኖ', "no"), ('ኗ', "nWa"),
    ('ኘ', "Ne"), ('ኙ', "Nu"), ('ኚ', "Ni"), ('ኛ', "Na"), ('ኜ', "NE"), ('ኝ', "N"), ('ኞ', "No"), ('ኟ', "NWa"),
    ('አ', "e"), ('ኡ', "u"), ('ኢ', "i"), ('ኣ', "a"), ('ኤ', "E"), ('እ', "I"), ('ኦ', "o"), ('ኧ', "ea"),
    ('ከ', "ke"), ('ኩ', "ku"), ('ኪ', "ki"), ('ካ', "ka"), ('ኬ', "kE"), ('ክ', "k"), ('ኮ', "ko"),
    ('ኰ', "kWe"), ('ኲ', "kWi"), ('ኳ', "kWa"), ('ኴ', "kWE"), ('ኵ', "kW"),
    ('ኸ', "Ke"), ('ኹ', "Ku"), ('ኺ', "Ki"), ('ኻ', "Ka"), ('ኼ', "KE"), ('ኽ', "K"), ('ኾ', "Ko"),
    ('ዀ', "KWe"), ('ዂ', "KWi"), ('ዃ', "KWa"), ('ዄ', "KWE"), ('ዅ', "KW"),
    ('ወ', "we"), ('ዉ', "wu"), ('ዊ', "wi"), ('ዋ', "wa"), ('ዌ', "wE"), ('ው', "w"), ('ዎ', "wo"),
    ('ዐ', "E"), ('ዑ', "U"), ('ዒ', "I"), ('ዓ', "A"), ('ዔ', "EE"), ('ዕ', "II"), ('ዖ', "O"),
    ('ዘ', "ze"), ('ዙ', "zu"), ('ዚ', "zi"), ('ዛ', "za"), ('ዜ', "zE"), ('ዝ', "z"), ('ዞ', "zo"), ('ዟ', "zWa"),
    ('ዠ', "Ze"), ('ዡ', "Zu"), ('ዢ', "Zi"), ('ዣ', "Za"), ('ዤ', "ZE"), ('ዥ', "Z"), ('ዦ', "Zo"), ('ዧ', "ZWa"),
    ('የ', "ye"), ('ዩ', "yu"), ('ዪ', "yi"), ('ያ', "ya"), ('ዬ', "yE"), ('ይ', "y"), ('ዮ', "yo"),
    ('ደ', "de"), ('ዱ', "du"), ('ዲ', "di"), ('ዳ', "da"), ('ዴ', "dE"), ('ድ', "d"), ('ዶ', "do"), ('ዷ', "dWa"),
    ('ጀ', "je"), ('ጁ', "ju"), ('ጂ', "ji"), ('ጃ', "ja"), ('ጄ', "jE"), ('ጅ', "j"), ('ጆ', "jo"), ('ጇ', "jWa"),
    ('ገ', "ge"), ('ጉ', "gu"), ('ጊ', "gi"), ('ጋ', "ga"), ('ጌ', "gE"), ('ግ', "g"), ('ጎ', "go"),
    ('ጐ', "gWe"), ('ጒ', "gWi"), ('ጓ', "gWa"), ('ጔ', "gWE"), ('ጕ', "gW"),
    ('ጠ', "Te"), ('ጡ', "Tu"), ('ጢ', "Ti"), ('ጣ', "Ta"), ('ጤ', "TE"), ('ጥ', "T"), ('ጦ', "To"), ('ጧ', "TWa"),
    ('ጨ', "Ce"), ('ጩ', "Cu"), ('ጪ', "Ci"), ('ጫ', "Ca"), ('ጬ', "CE"), ('ጭ', "C"), ('ጮ', "Co"), ('ጯ', "CWa"),
    ('ጰ', "Pe"), ('ጱ', "Pu"), ('ጲ', "Pi"), ('ጳ', "Pa"), ('ጴ', "PE"), ('ጵ', "P"), ('ጶ', "Po"), ('ጷ', "PWa"),
    ('ጸ', "SSe"), ('ጹ', "SSu"), ('ጺ', "SSi"), ('ጻ', "SSa"), ('ጼ', "SSE"), ('ጽ', "SS"), ('ጾ', "SSo"), ('ጿ', "SSWa"),
    ('ፀ', "SSSe"), ('ፁ', "SSSu"), ('ፂ', "SSSi"), ('ፃ', "SSSa"), ('ፄ', "SSSE"), ('ፅ', "SSS"), ('ፆ', "SSSo"),
    ('ፈ', "fe"), ('ፉ', "fu"), ('ፊ', "fi"), ('ፋ', "fa"), ('ፌ', "fE"), ('ፍ', "f"), ('ፎ', "fo"), ('ፏ', "fWa"),
    ('ፐ', "pe"), ('ፑ', "pu"), ('ፒ', "pi"), ('ፓ', "pa"), ('ፔ', "pE"), ('ፕ', "p"), ('ፖ', "po"), ('ፗ', "pWa"),
];

/// Ethiopic numerals. The tens continue the count after ten rather than
/// carrying their value: ፳ (20) is `"11"`, ፻ (100) is `"19"`.
#[rustfmt::skip]
pub const NUMERALS: &[(char, &str)] = &[
    ('፩', "1"), ('፪', "2"), ('፫', "3"), ('፬', "4"), ('፭', "5"), ('፮', "6"), ('፯', "7"), ('፰', "8"), ('፱', "9"), ('፲', "10"),
    ('፳', "11"), ('፴', "12"), ('፵', "13"), ('፶', "14"), ('፷', "15"), ('፸', "16"), ('፹', "17"), ('፺', "18"), ('፻', "19"),
];
