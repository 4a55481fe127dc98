//! The ordered mojibake repair rules.
//!
//! Three rule groups run as complete passes over the text, in a fixed
//! order: encoding-artifact patterns, then the literal phrase table, then a
//! cleanup pattern pass for variants the literal table cannot express.

mod table;

pub use table::{PatternRule, CLEANUP_FIXES, DIRECT_REPLACEMENTS, ENCODING_FIXES};

/// Run every rule group over `text` and return the corrected result.
///
/// Later rules see the output of earlier ones. Re-applying the function to
/// its own output is a no-op for the shipped table.
pub fn apply(text: &str) -> String {
    let mut updated = text.to_string();
    for rule in ENCODING_FIXES.iter() {
        updated = rule
            .pattern
            .replace_all(&updated, rule.replacement)
            .into_owned();
    }
    for (source, replacement) in DIRECT_REPLACEMENTS {
        updated = updated.replace(source, replacement);
    }
    for rule in CLEANUP_FIXES.iter() {
        updated = rule
            .pattern
            .replace_all(&updated, rule.replacement)
            .into_owned();
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_passes_through() {
        let text = "The settings panel is already correct.";
        assert_eq!(apply(text), text);
    }

    #[test]
    fn corrected_german_passes_through() {
        let text = "Das Büro ist vorübergehend nicht verfügbar.";
        assert_eq!(apply(text), text);
    }

    #[test]
    fn fraction_artifact_becomes_u_umlaut() {
        assert_eq!(apply("nat1/4rlich"), "natürlich");
    }

    #[test]
    fn currency_artifact_between_letters_becomes_a_umlaut() {
        assert_eq!(apply("BewEURsserung"), "Bewässerung");
    }

    #[test]
    fn free_standing_currency_code_is_preserved() {
        let text = "Preis: 10 EUR pro Monat";
        assert_eq!(apply(text), text);
    }

    #[test]
    fn dash_artifacts_collapse_to_hyphen() {
        assert_eq!(apply("Phase 1 EUR' Aussaat"), "Phase 1 - Aussaat");
        assert_eq!(apply("Phase 2 ä' Pflege"), "Phase 2 - Pflege");
    }

    #[test]
    fn ascii_umlaut_phrases_are_restored() {
        assert_eq!(
            apply("Das BUero ist vorUebergehend nicht verfUegbar."),
            "Das Büro ist vorübergehend nicht verfügbar."
        );
    }

    #[test]
    fn pest_control_phrases_are_restored() {
        assert_eq!(apply("Schaedlingsspray erhoeht"), "Schädlingsspray erhöht");
    }

    #[test]
    fn hard_reset_variants_are_canonicalized() {
        assert_eq!(
            apply("Hard Reset (alle Daten loschen)"),
            "Hard Reset (alle Daten löschen)"
        );
        assert_eq!(
            apply("Hard Reset (alle Daten lschen)"),
            "Hard Reset (alle Daten löschen)"
        );
    }

    #[test]
    fn applying_twice_changes_nothing_more() {
        let inputs = [
            "Das BUero ist vorUebergehend nicht verfUegbar.",
            "nat1/4rlich vorraetig: DUenger, SchAedlinge, Ueberwaesserung",
            "Hard Reset (alle Daten loschen)",
            "Phase 1 EUR' Aussaat, BewEURsserung erhoeht",
        ];
        for input in inputs {
            let once = apply(input);
            assert_eq!(apply(&once), once, "rule table re-matched on {input:?}");
        }
    }

    #[test]
    fn literal_replacements_never_feed_later_sources() {
        for (i, (_, replacement)) in DIRECT_REPLACEMENTS.iter().enumerate() {
            for (source, _) in &DIRECT_REPLACEMENTS[i + 1..] {
                assert!(
                    !replacement.contains(source),
                    "replacement {replacement:?} contains later source {source:?}"
                );
            }
        }
    }
}
