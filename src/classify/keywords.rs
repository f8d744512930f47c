//! Keyword tables and the substring classifier.
//!
//! Matching is literal, case-insensitive substring containment. Keyword
//! sets live here, next to the classifier, rather than in the
//! translation bundles: the wording of a keyword may diverge from the
//! UI strings for the same language.

use tracing::debug;

use crate::classify::Topic;
use crate::locale::Language;

/// Keywords indicating `topic` in `lang`. All entries are stored
/// lowercase; `classify` lowercases the query before matching.
pub fn keywords_for(topic: Topic, lang: Language) -> &'static [&'static str] {
    match (topic, lang) {
        (Topic::Pest, Language::En) => &["pest", "insect", "bug"],
        (Topic::Pest, Language::Hi) => &["कीट", "कीड़"],
        (Topic::Pest, Language::Te) => &["పురుగు", "చీడ"],
        (Topic::Pest, Language::Ta) => &["பூச்சி"],
        (Topic::Pest, Language::Kn) => &["ಕೀಟ"],

        (Topic::Wheat, Language::En) => &["wheat"],
        (Topic::Wheat, Language::Hi) => &["गेहूँ"],
        (Topic::Wheat, Language::Te) => &["గోధుమ"],
        (Topic::Wheat, Language::Ta) => &["கோதுமை"],
        (Topic::Wheat, Language::Kn) => &["ಗೋಧಿ"],

        (Topic::Rice, Language::En) => &["rice", "paddy"],
        (Topic::Rice, Language::Hi) => &["चावल", "धान"],
        (Topic::Rice, Language::Te) => &["వరి"],
        (Topic::Rice, Language::Ta) => &["அரிசி", "நெல்"],
        (Topic::Rice, Language::Kn) => &["ಅಕ್ಕಿ", "ಭತ್ತ"],

        (Topic::Fertilizer, Language::En) => &["fertilizer", "fertiliser", "manure"],
        (Topic::Fertilizer, Language::Hi) => &["खाद", "उर्वरक"],
        (Topic::Fertilizer, Language::Te) => &["ఎరువు"],
        (Topic::Fertilizer, Language::Ta) => &["உரம்"],
        (Topic::Fertilizer, Language::Kn) => &["ಗೊಬ್ಬರ"],

        // The fallback topic matches nothing.
        (Topic::Default, _) => &[],
    }
}

/// Classify a free-text query into a canned-answer topic.
///
/// Topics are tested in [`Topic::PRIORITY`] order and the first match
/// wins; that order is the only disambiguation mechanism. Keywords of
/// the selected language are tried first, then every other language:
/// speech recognition may tag a transcript with the wrong script, so
/// cross-language containment is intentional.
pub fn classify(query: &str, lang: Language) -> Topic {
    let query = query.to_lowercase();
    if query.trim().is_empty() {
        return Topic::Default;
    }

    for topic in Topic::PRIORITY {
        if matches_topic(&query, topic, lang) {
            debug!(%topic, %lang, "query classified");
            return topic;
        }
    }

    Topic::Default
}

fn matches_topic(query: &str, topic: Topic, lang: Language) -> bool {
    let contains_any =
        |l: Language| keywords_for(topic, l).iter().any(|kw| query.contains(kw));

    contains_any(lang)
        || Language::ALL
            .into_iter()
            .filter(|l| *l != lang)
            .any(contains_any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default() {
        for lang in Language::ALL {
            assert_eq!(classify("", lang), Topic::Default);
            assert_eq!(classify("   \t", lang), Topic::Default);
        }
    }

    #[test]
    fn test_unmatched_query_is_default() {
        assert_eq!(classify("xyzzy", Language::En), Topic::Default);
    }

    #[test]
    fn test_case_insensitive() {
        let query = "How to treat PEST in my field?";
        assert_eq!(
            classify(query, Language::En),
            classify(&query.to_uppercase(), Language::En)
        );
        assert_eq!(classify(query, Language::En), Topic::Pest);
    }

    #[test]
    fn test_pest_scenario() {
        assert_eq!(
            classify("How to treat pest in my field?", Language::En),
            Topic::Pest
        );
    }

    #[test]
    fn test_hindi_fertilizer_scenario() {
        assert_eq!(classify("गेहूं के लिए खाद", Language::Hi), Topic::Fertilizer);
    }

    #[test]
    fn test_pest_wins_over_wheat() {
        // Both keyword sets match; pest precedes wheat in priority order.
        assert_eq!(
            classify("pest attack on my wheat crop", Language::En),
            Topic::Pest
        );
    }

    #[test]
    fn test_wheat_wins_over_fertilizer() {
        assert_eq!(
            classify("best fertilizer for wheat", Language::En),
            Topic::Wheat
        );
    }

    #[test]
    fn test_cross_language_match() {
        // Hindi keyword while the UI language is English: the matched
        // topic is still returned.
        assert_eq!(classify("खाद कब डालें", Language::En), Topic::Fertilizer);
        assert_eq!(classify("rice blast disease", Language::Hi), Topic::Rice);
    }

    #[test]
    fn test_keywords_are_stored_lowercase() {
        const ALL_TOPICS: [Topic; 5] = [
            Topic::Pest,
            Topic::Wheat,
            Topic::Rice,
            Topic::Fertilizer,
            Topic::Default,
        ];
        for topic in ALL_TOPICS {
            for lang in Language::ALL {
                for kw in keywords_for(topic, lang) {
                    assert_eq!(*kw, kw.to_lowercase(), "{topic}/{lang} keyword not lowercase");
                    assert!(!kw.trim().is_empty());
                }
            }
        }
    }

    #[test]
    fn test_classification_is_stable() {
        // Same query, same language: same topic every time.
        let query = "which fertilizer for my field";
        let first = classify(query, Language::En);
        assert_eq!(classify(query, Language::En), first);
        assert_eq!(first, Topic::Fertilizer);
    }
}
