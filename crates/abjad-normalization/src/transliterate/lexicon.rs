//! Known Arabic spellings of common religious and proper names.
//!
//! Keys are compact, lower-case ASCII: every romanization is folded the same
//! way before lookup (see `super::compact_key`).

pub(crate) struct LexiconEntry {
    pub arabic: &'static str,
    pub spellings: &'static [&'static str],
    pub alternates: &'static [&'static str],
}

pub(crate) const LEXICON: &[LexiconEntry] = &[
    LexiconEntry {
        arabic: "الله",
        spellings: &["allah", "allaah"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "ال",
        spellings: &["al", "el"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "عبد",
        spellings: &["abd", "abdul", "abdel", "abdou", "abdoul"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "محمد",
        spellings: &[
            "muhammad", "muhammed", "muhamad", "mohammed", "mohamed", "mohammad", "mohamad",
            "mamadou", "mamoudou", "mouhamed",
        ],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "أحمد",
        spellings: &["ahmad", "ahmed", "ahmet", "amadou"],
        alternates: &["احمد"],
    },
    LexiconEntry {
        arabic: "محمود",
        spellings: &["mahmoud", "mahmud", "mahmood"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "مصطفى",
        spellings: &["mustafa", "mustapha", "moustapha", "mostafa", "moustafa"],
        alternates: &["مصطفي"],
    },
    LexiconEntry {
        arabic: "علي",
        spellings: &["ali", "aly"],
        alternates: &["عالي"],
    },
    LexiconEntry {
        arabic: "عمر",
        spellings: &["umar", "omar", "oumar"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "عثمان",
        spellings: &["uthman", "othman", "usman", "ousmane", "osman", "ousman"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "أبو بكر",
        spellings: &["abubakar", "abubakr", "aboubakar", "aboubacar", "abubakari"],
        alternates: &["ابوبكر"],
    },
    LexiconEntry {
        arabic: "حسن",
        spellings: &["hasan", "hassan", "hassane"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "حسين",
        spellings: &["husayn", "hussein", "husein", "hussain", "housseine", "hussen"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "إبراهيم",
        spellings: &["ibrahim", "ibrahima", "brahim", "ebrahim", "ibraheem"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "إسماعيل",
        spellings: &["ismail", "ismael", "ismaila", "ismaeel"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "يوسف",
        spellings: &["yusuf", "yousef", "youssef", "yousouf", "yusef", "youssouf"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "موسى",
        spellings: &["musa", "moussa", "mousa", "moosa"],
        alternates: &["موسي"],
    },
    LexiconEntry {
        arabic: "عيسى",
        spellings: &["isa", "issa", "eisa", "eesa"],
        alternates: &["عيسي"],
    },
    LexiconEntry {
        arabic: "آدم",
        spellings: &["adam", "adama"],
        alternates: &["ادم"],
    },
    LexiconEntry {
        arabic: "نوح",
        spellings: &["nuh", "nooh", "nouh"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "داود",
        spellings: &["dawud", "dawood", "daoud", "daouda", "dawood"],
        alternates: &["داوود"],
    },
    LexiconEntry {
        arabic: "سليمان",
        spellings: &["sulayman", "suleiman", "sulaiman", "souleymane", "souleiman"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "يونس",
        spellings: &["yunus", "younes", "younous", "yunes", "younis"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "يحيى",
        spellings: &["yahya", "yahia", "yahiya"],
        alternates: &["يحيي"],
    },
    LexiconEntry {
        arabic: "زكريا",
        spellings: &["zakariya", "zakaria", "zakariyya", "zakariyah"],
        alternates: &["زكرياء"],
    },
    LexiconEntry {
        arabic: "إدريس",
        spellings: &["idris", "idriss", "idrees"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "إلياس",
        spellings: &["ilyas", "elias", "ilyass", "elyas"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "هارون",
        spellings: &["harun", "haroun", "haroon"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "خالد",
        spellings: &["khalid", "khaled"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "خليل",
        spellings: &["khalil", "khaleel"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "عبد الله",
        spellings: &["abdullah", "abdallah", "abdoulaye", "abdulla", "abdellah"],
        alternates: &["عبدالله"],
    },
    LexiconEntry {
        arabic: "عبد الرحمن",
        spellings: &[
            "abdulrahman", "abdurrahman", "abderrahmane", "abdourahmane", "abdalrahman",
            "abdelrahman",
        ],
        alternates: &["عبدالرحمن"],
    },
    LexiconEntry {
        arabic: "عبد القادر",
        spellings: &["abdulqadir", "abdelkader", "abdoulkader", "abdulkadir", "abdelkadir"],
        alternates: &["عبدالقادر"],
    },
    LexiconEntry {
        arabic: "عبد العزيز",
        spellings: &["abdulaziz", "abdelaziz", "abdoulaziz"],
        alternates: &["عبدالعزيز"],
    },
    LexiconEntry {
        arabic: "جبريل",
        spellings: &["jibril", "jibreel", "djibril", "jibriil"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "بلال",
        spellings: &["bilal", "bilaal"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "حمزة",
        spellings: &["hamza", "hamzah", "hamsa"],
        alternates: &["حمزه"],
    },
    LexiconEntry {
        arabic: "طه",
        spellings: &["taha", "toha"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "ياسين",
        spellings: &["yasin", "yassine", "yaseen", "yassin"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "سعيد",
        spellings: &["said", "saeed", "saaid", "seydou"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "شيخ",
        spellings: &["shaykh", "sheikh", "cheikh", "cheick", "shaikh"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "نور",
        spellings: &["nur", "noor", "nour"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "رحمن",
        spellings: &["rahman", "rahmane"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "رحيم",
        spellings: &["rahim", "raheem"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "كريم",
        spellings: &["karim", "kareem"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "فاطمة",
        spellings: &["fatima", "fatimah", "fatma", "fatoumata", "fatimata", "fatou"],
        alternates: &["فاطمه"],
    },
    LexiconEntry {
        arabic: "عائشة",
        spellings: &["aisha", "aicha", "aishah", "ayesha", "aissatou", "aysha"],
        alternates: &["عايشة", "عائشه"],
    },
    LexiconEntry {
        arabic: "خديجة",
        spellings: &["khadija", "khadijah", "khadidja", "khadidiatou"],
        alternates: &["خديجه"],
    },
    LexiconEntry {
        arabic: "مريم",
        spellings: &["maryam", "mariam", "meryem", "mariama", "maryama"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "زينب",
        spellings: &["zaynab", "zainab", "zeinab", "zeynab"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "آمنة",
        spellings: &["amina", "aminah", "aminata", "amna"],
        alternates: &["امنة", "أمينة"],
    },
    LexiconEntry {
        arabic: "حواء",
        spellings: &["hawa", "hawwa", "awa", "hawaa"],
        alternates: &["حوا"],
    },
    LexiconEntry {
        arabic: "رقية",
        spellings: &["ruqayya", "ruqayyah", "ruqaya", "rokia", "roukia"],
        alternates: &["رقيه"],
    },
    LexiconEntry {
        arabic: "أم كلثوم",
        spellings: &["ummkulthum", "oumkalthoum", "oumoukalsoum", "ummkalthum"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "كلثوم",
        spellings: &["kulthum", "kalsoum", "kalthoum", "koulsoum"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "سارة",
        spellings: &["sara", "sarah"],
        alternates: &["ساره"],
    },
    LexiconEntry {
        arabic: "هاجر",
        spellings: &["hajar", "hagar", "hadjar"],
        alternates: &[],
    },
    LexiconEntry {
        arabic: "جميلة",
        spellings: &["jamila", "jamilah", "djamila"],
        alternates: &["جميله"],
    },
    LexiconEntry {
        arabic: "صفية",
        spellings: &["safiya", "safiyya", "safia", "safiyyah"],
        alternates: &["صفيه"],
    },
    LexiconEntry {
        arabic: "حليمة",
        spellings: &["halima", "halimah", "halimatou"],
        alternates: &["حليمه"],
    },
    LexiconEntry {
        arabic: "ليلى",
        spellings: &["layla", "leila", "laila", "leyla"],
        alternates: &["ليلي"],
    },
    LexiconEntry {
        arabic: "سلمى",
        spellings: &["salma", "selma"],
        alternates: &["سلمي"],
    },
    LexiconEntry {
        arabic: "أسماء",
        spellings: &["asma", "asmaa", "asmau"],
        alternates: &["اسماء"],
    },
];

/// Find the entry whose spellings contain `key`.
pub(crate) fn lookup(key: &str) -> Option<&'static LexiconEntry> {
    if key.is_empty() {
        return None;
    }
    LEXICON
        .iter()
        .find(|entry| entry.spellings.contains(&key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spellings_are_compact_lowercase_ascii() {
        for entry in LEXICON {
            for spelling in entry.spellings {
                assert!(
                    spelling.chars().all(|c| c.is_ascii_lowercase()),
                    "bad spelling key {spelling:?}"
                );
            }
        }
    }

    #[test]
    fn spellings_resolve_to_a_single_entry() {
        for entry in LEXICON {
            for spelling in entry.spellings {
                let found = lookup(spelling).expect("spelling resolves");
                assert_eq!(found.arabic, entry.arabic, "{spelling} is ambiguous");
            }
        }
    }

    #[test]
    fn alternates_differ_from_primary() {
        for entry in LEXICON {
            assert!(!entry.alternates.contains(&entry.arabic));
        }
    }
}
