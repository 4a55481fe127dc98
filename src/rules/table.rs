use once_cell::sync::Lazy;
use regex::Regex;

/// A compiled pattern rule. Every non-overlapping match in the text is
/// replaced; the replacement may reference captured context via `${n}`.
pub struct PatternRule {
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl PatternRule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Failed to compile rule pattern"),
            replacement,
        }
    }
}

/// First pass: artifacts of a UTF-8 → Latin-1 misread, where `ü` ends up as
/// the fraction `1/4` and `ä` as the currency code `EUR`.
///
/// The bare-`EUR` fix captures one character of context on each side so that
/// genuine currency mentions (digits or whitespace around the code) are left
/// alone.
pub static ENCODING_FIXES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        PatternRule::new(r"1/4", "ü"),
        PatternRule::new(r"EUR'", "-"),
        PatternRule::new(r"ä'", "-"),
        PatternRule::new(r"(\w)EUR([A-Za-z-])", "${1}ä${2}"),
    ]
});

/// Second pass: exact phrases where umlauts were hand-typed as ASCII
/// fallbacks (`Ue`, `ae`, `oe`).
///
/// Entries run in declaration order and each sees the output of the ones
/// before it, so the order below is load-bearing. A longer source listed
/// after its own prefix never fires; such entries are kept for the day the
/// prefix entry is narrowed.
pub const DIRECT_REPLACEMENTS: &[(&str, &str)] = &[
    ("vorUebergehend", "vorübergehend"),
    ("vorUebergehenden", "vorübergehenden"),
    ("vorUebergehendem", "vorübergehendem"),
    ("verfUegbar", "verfügbar"),
    ("verfUegbare", "verfügbare"),
    ("verfUegbar.", "verfügbar."),
    ("verfUegbar?", "verfügbar?"),
    ("verfUegbar)", "verfügbar)"),
    ("DUenger", "Dünger"),
    ("DUeng", "Düng"),
    ("BUero", "Büro"),
    ("Ueberwaesserung", "Überwässerung"),
    ("Ueberwaesser", "Überwässer"),
    ("Ueberdueng", "Überdüng"),
    ("Oeffne", "Öffne"),
    ("lschen", "löschen"),
    ("erhoeht", "erhöht"),
    ("Schaedlingsspray", "Schädlingsspray"),
    ("Schaedlingskontrolle", "Schädlingskontrolle"),
    ("Schaedlings", "Schädlings"),
    ("Schaedlinge", "Schädlinge"),
    ("SchAedlinge", "Schädlinge"),
    ("vorraetig", "vorrätig"),
    ("Benoetigt", "Benötigt"),
    ("Fungizid benoetigt", "Fungizid benötigt"),
];

/// Final pass: loose phrase variants the literal table cannot express,
/// matched after all literal substitutions and replaced with the canonical
/// wording.
pub static CLEANUP_FIXES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![PatternRule::new(
        r"Hard Reset \(alle Daten l[öo]schen\)",
        "Hard Reset (alle Daten löschen)",
    )]
});
