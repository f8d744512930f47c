//! Localized UI strings and canned answers.
//!
//! One immutable bundle per language. Answers are struct fields rather
//! than a map so that a missing translation is a compile error.

use serde::Serialize;

use crate::classify::Topic;
use crate::locale::Language;

/// One canned answer per topic.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerSet {
    pub pest: &'static str,
    pub wheat: &'static str,
    pub rice: &'static str,
    pub fertilizer: &'static str,
    pub fallback: &'static str,
}

impl AnswerSet {
    /// Look up the answer for a topic. Total over `Topic`.
    pub fn for_topic(&self, topic: Topic) -> &'static str {
        match topic {
            Topic::Pest => self.pest,
            Topic::Wheat => self.wheat,
            Topic::Rice => self.rice,
            Topic::Fertilizer => self.fertilizer,
            Topic::Default => self.fallback,
        }
    }
}

/// Localized strings for one language.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationBundle {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub submit_label: &'static str,
    pub listen_label: &'static str,
    pub answers: AnswerSet,
}

static EN: TranslationBundle = TranslationBundle {
    title: "KrishiSahay",
    subtitle: "AI Farming Assistant",
    placeholder: "Ask a farming question...",
    submit_label: "Ask",
    listen_label: "🎤 Speak",
    answers: AnswerSet {
        pest: "🪲 Use neem oil spray or organic pesticide.",
        wheat: "🌾 Sow wheat in November and irrigate at crown root initiation.",
        rice: "🍚 Maintain 2-3 cm of standing water in the paddy field.",
        fertilizer: "🌿 Use a balanced NPK fertilizer.",
        fallback: "🤖 Please provide more details.",
    },
};

static HI: TranslationBundle = TranslationBundle {
    title: "कृषिसहाय",
    subtitle: "एआई कृषि सहायक",
    placeholder: "खेती से जुड़ा सवाल पूछें...",
    submit_label: "पूछें",
    listen_label: "🎤 बोलें",
    answers: AnswerSet {
        pest: "🪲 नीम के तेल का छिड़काव या जैविक कीटनाशक का उपयोग करें।",
        wheat: "🌾 गेहूं की बुवाई नवंबर में करें और समय पर सिंचाई करें।",
        rice: "🍚 धान के खेत में 2-3 सेमी पानी बनाए रखें।",
        fertilizer: "🌿 संतुलित NPK उर्वरक का उपयोग करें।",
        fallback: "🤖 कृपया अधिक जानकारी दें।",
    },
};

static TE: TranslationBundle = TranslationBundle {
    title: "కృషిసహాయ్",
    subtitle: "AI వ్యవసాయ సహాయకుడు",
    placeholder: "వ్యవసాయ ప్రశ్న అడగండి...",
    submit_label: "అడగండి",
    listen_label: "🎤 మాట్లాడండి",
    answers: AnswerSet {
        pest: "🪲 వేప నూనె పిచికారీ లేదా సేంద్రియ పురుగుమందు వాడండి.",
        wheat: "🌾 గోధుమను నవంబర్‌లో విత్తండి, సకాలంలో నీరు పెట్టండి.",
        rice: "🍚 వరి పొలంలో 2-3 సెం.మీ నీరు నిలిపి ఉంచండి.",
        fertilizer: "🌿 సమతుల్య NPK ఎరువులు వాడండి.",
        fallback: "🤖 దయచేసి మరిన్ని వివరాలు ఇవ్వండి.",
    },
};

static TA: TranslationBundle = TranslationBundle {
    title: "கிருஷிசஹாய்",
    subtitle: "AI விவசாய உதவியாளர்",
    placeholder: "விவசாயக் கேள்வியைக் கேளுங்கள்...",
    submit_label: "கேளுங்கள்",
    listen_label: "🎤 பேசுங்கள்",
    answers: AnswerSet {
        pest: "🪲 வேப்ப எண்ணெய் தெளிப்பு அல்லது இயற்கை பூச்சிக்கொல்லி பயன்படுத்துங்கள்.",
        wheat: "🌾 கோதுமையை நவம்பரில் விதைத்து சரியான நேரத்தில் நீர் பாய்ச்சவும்.",
        rice: "🍚 நெல் வயலில் 2-3 செ.மீ நீர் நிறுத்தி வைக்கவும்.",
        fertilizer: "🌿 சமச்சீர் NPK உரம் பயன்படுத்துங்கள்.",
        fallback: "🤖 மேலும் விவரங்களைத் தரவும்.",
    },
};

static KN: TranslationBundle = TranslationBundle {
    title: "ಕೃಷಿಸಹಾಯ",
    subtitle: "AI ಕೃಷಿ ಸಹಾಯಕ",
    placeholder: "ಕೃಷಿ ಪ್ರಶ್ನೆ ಕೇಳಿ...",
    submit_label: "ಕೇಳಿ",
    listen_label: "🎤 ಮಾತನಾಡಿ",
    answers: AnswerSet {
        pest: "🪲 ಬೇವಿನ ಎಣ್ಣೆ ಸಿಂಪಡಣೆ ಅಥವಾ ಸಾವಯವ ಕೀಟನಾಶಕ ಬಳಸಿ.",
        wheat: "🌾 ಗೋಧಿಯನ್ನು ನವೆಂಬರ್‌ನಲ್ಲಿ ಬಿತ್ತಿ, ಸಕಾಲದಲ್ಲಿ ನೀರಾವರಿ ಮಾಡಿ.",
        rice: "🍚 ಭತ್ತದ ಗದ್ದೆಯಲ್ಲಿ 2-3 ಸೆಂ.ಮೀ ನೀರು ಇರಿಸಿ.",
        fertilizer: "🌿 ಸಮತೋಲಿತ NPK ಗೊಬ್ಬರ ಬಳಸಿ.",
        fallback: "🤖 ದಯವಿಟ್ಟು ಹೆಚ್ಚಿನ ವಿವರ ನೀಡಿ.",
    },
};

/// Look up the string bundle for a language.
///
/// Total by construction: every `Language` variant has a static bundle,
/// so no configuration error is reachable here.
pub fn bundle_for(lang: Language) -> &'static TranslationBundle {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Te => &TE,
        Language::Ta => &TA,
        Language::Kn => &KN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TOPICS: [Topic; 5] = [
        Topic::Pest,
        Topic::Wheat,
        Topic::Rice,
        Topic::Fertilizer,
        Topic::Default,
    ];

    #[test]
    fn test_every_language_answers_every_topic() {
        for lang in Language::ALL {
            let bundle = bundle_for(lang);
            for topic in ALL_TOPICS {
                assert!(
                    !bundle.answers.for_topic(topic).trim().is_empty(),
                    "missing {topic} answer for {lang}"
                );
            }
        }
    }

    #[test]
    fn test_every_language_has_ui_strings() {
        for lang in Language::ALL {
            let bundle = bundle_for(lang);
            assert!(!bundle.title.is_empty());
            assert!(!bundle.subtitle.is_empty());
            assert!(!bundle.placeholder.is_empty());
            assert!(!bundle.submit_label.is_empty());
            assert!(!bundle.listen_label.is_empty());
        }
    }

    #[test]
    fn test_english_pest_answer() {
        assert_eq!(
            bundle_for(Language::En).answers.for_topic(Topic::Pest),
            "🪲 Use neem oil spray or organic pesticide."
        );
    }

    #[test]
    fn test_hindi_fertilizer_answer() {
        assert_eq!(
            bundle_for(Language::Hi).answers.for_topic(Topic::Fertilizer),
            "🌿 संतुलित NPK उर्वरक का उपयोग करें।"
        );
    }

    #[test]
    fn test_english_fallback_answer() {
        assert_eq!(
            bundle_for(Language::En).answers.for_topic(Topic::Default),
            "🤖 Please provide more details."
        );
    }
}
