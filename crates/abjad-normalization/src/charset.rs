//! Declarative character classes for Arabic normalization.
//!
//! Every mapping used by the normalization passes lives here as data, so
//! the passes themselves stay small and each table can be checked on its
//! own.

/// The 28 canonical letters, in abjad order.
pub const CANONICAL_LETTERS: [char; 28] = [
    '\u{0627}', // ا alif
    '\u{0628}', // ب ba
    '\u{062C}', // ج jim
    '\u{062F}', // د dal
    '\u{0647}', // ه ha
    '\u{0648}', // و waw
    '\u{0632}', // ز zay
    '\u{062D}', // ح ḥa
    '\u{0637}', // ط ṭa
    '\u{064A}', // ي ya
    '\u{0643}', // ك kaf
    '\u{0644}', // ل lam
    '\u{0645}', // م mim
    '\u{0646}', // ن nun
    '\u{0633}', // س sin
    '\u{0639}', // ع ʿayn
    '\u{0641}', // ف fa
    '\u{0635}', // ص ṣad
    '\u{0642}', // ق qaf
    '\u{0631}', // ر ra
    '\u{0634}', // ش shin
    '\u{062A}', // ت ta
    '\u{062B}', // ث tha
    '\u{062E}', // خ kha
    '\u{0630}', // ذ dhal
    '\u{0636}', // ض ḍad
    '\u{0638}', // ظ ẓa
    '\u{063A}', // غ ghayn
];

pub const ALIF: char = '\u{0627}';
pub const WAW: char = '\u{0648}';
pub const YA: char = '\u{064A}';
pub const HA: char = '\u{0647}';
pub const TA_MARBUTA: char = '\u{0629}';
pub const ALIF_MAQSURA: char = '\u{0649}';
pub const TATWEEL: char = '\u{0640}';

/// The single-codepoint "Allah" ligature (ﷲ).
pub const ALLAH_LIGATURE: char = '\u{FDF2}';
/// Full spelling the ligature expands to.
pub const ALLAH_SPELLED: &str = "\u{0627}\u{0644}\u{0644}\u{0647}";

/// Hamza-bearing letters and the carrier they fold to.
pub const HAMZA_FORMS: [(char, char); 7] = [
    ('\u{0623}', ALIF), // أ alif with hamza above
    ('\u{0625}', ALIF), // إ alif with hamza below
    ('\u{0622}', ALIF), // آ alif with madda
    ('\u{0671}', ALIF), // ٱ alif wasla
    ('\u{0621}', ALIF), // ء standalone hamza
    ('\u{0624}', WAW),  // ؤ waw with hamza
    ('\u{0626}', YA),   // ئ ya with hamza
];

/// Persian, Urdu and other regional letters folded to their Arabic base.
pub const REGIONAL_VARIANTS: [(char, char); 24] = [
    ('\u{067E}', '\u{0628}'), // پ pe -> ب
    ('\u{0686}', '\u{062C}'), // چ che -> ج
    ('\u{0698}', '\u{0632}'), // ژ zhe -> ز
    ('\u{06AF}', '\u{0643}'), // گ gaf -> ك
    ('\u{06A9}', '\u{0643}'), // ک keheh -> ك
    ('\u{06AA}', '\u{0643}'), // ڪ swash kaf -> ك
    ('\u{06AD}', '\u{0643}'), // ڭ ng -> ك
    ('\u{06CC}', YA),         // ی farsi yeh -> ي
    ('\u{06D0}', YA),         // ې e -> ي
    ('\u{06CD}', YA),         // ۍ yeh with tail -> ي
    ('\u{06D2}', YA),         // ے yeh barree -> ي
    ('\u{06D3}', YA),         // ۓ yeh barree with hamza -> ي
    ('\u{06C1}', HA),         // ہ heh goal -> ه
    ('\u{06C2}', HA),         // ۂ heh goal with hamza -> ه
    ('\u{06BE}', HA),         // ھ heh doachashmee -> ه
    ('\u{06D5}', HA),         // ە ae -> ه
    ('\u{06C0}', HA),         // ۀ heh with yeh above -> ه
    ('\u{06A4}', '\u{0641}'), // ڤ veh -> ف
    ('\u{06A5}', '\u{0641}'), // ڥ -> ف
    ('\u{0679}', '\u{062A}'), // ٹ tteh -> ت
    ('\u{0688}', '\u{062F}'), // ڈ ddal -> د
    ('\u{0691}', '\u{0631}'), // ڑ rreh -> ر
    ('\u{06BA}', '\u{0646}'), // ں noon ghunna -> ن
    ('\u{06C3}', TA_MARBUTA), // ۃ ta marbuta goal -> ة
];

pub fn is_canonical_letter(c: char) -> bool {
    CANONICAL_LETTERS.contains(&c)
}

pub fn hamza_carrier(c: char) -> Option<char> {
    HAMZA_FORMS
        .iter()
        .find(|(form, _)| *form == c)
        .map(|(_, carrier)| *carrier)
}

pub fn is_hamza_form(c: char) -> bool {
    hamza_carrier(c).is_some()
}

pub fn regional_base(c: char) -> Option<char> {
    REGIONAL_VARIANTS
        .iter()
        .find(|(variant, _)| *variant == c)
        .map(|(_, base)| *base)
}

/// Tashkīl, small high signs and Qurʾānic annotation marks.
pub fn is_diacritic(c: char) -> bool {
    matches!(c,
        '\u{0610}'..='\u{061A}' | // honorific and small high signs
        '\u{064B}'..='\u{065F}' | // fathatan .. wavy hamza below
        '\u{0670}' |              // superscript alif
        '\u{06D6}'..='\u{06DC}' | // small high ligatures
        '\u{06DF}'..='\u{06E8}' | // small high/low Qurʾānic marks
        '\u{06EA}'..='\u{06ED}'   // empty centre stops, small low meem
    )
}

/// Arabic presentation-form blocks whose letters decompose under NFKC.
pub fn is_presentation_form(c: char) -> bool {
    matches!(c, '\u{FB50}'..='\u{FDFF}' | '\u{FE70}'..='\u{FEFF}')
}

/// Whole-word ligatures (ﷲ, ﷺ, ...) that must not be spelled out by the
/// generic presentation-form decomposition.
pub fn is_word_ligature(c: char) -> bool {
    matches!(c, '\u{FDF0}'..='\u{FDFF}')
}

/// Any code point of the Arabic script blocks.
pub fn is_arabic_script(c: char) -> bool {
    matches!(c,
        '\u{0600}'..='\u{06FF}' |
        '\u{0750}'..='\u{077F}' |
        '\u{08A0}'..='\u{08FF}' |
        '\u{FB50}'..='\u{FDFF}' |
        '\u{FE70}'..='\u{FEFF}'
    )
}
