//! Supported languages and their speech-engine locales.

use serde::{Deserialize, Serialize};
use std::fmt;

/// UI and voice language supported by the assistant.
///
/// Every per-language table in the crate is keyed by this enum, so a
/// missing entry is a compile error rather than a runtime lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Te,
    Ta,
    Kn,
}

impl Language {
    /// Every supported language, for iterating per-language invariants.
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Hi,
        Language::Te,
        Language::Ta,
        Language::Kn,
    ];

    /// Two-letter code as exchanged with the UI layer.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Te => "te",
            Language::Ta => "ta",
            Language::Kn => "kn",
        }
    }

    /// Parse a two-letter code as produced by [`Language::code`].
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "te" => Some(Language::Te),
            "ta" => Some(Language::Ta),
            "kn" => Some(Language::Kn),
            _ => None,
        }
    }

    /// Locale tag handed to the host speech engines. Recognition and
    /// synthesis both use the Indian variants.
    pub fn recognition_locale(&self) -> &'static str {
        match self {
            Language::En => "en-IN",
            Language::Hi => "hi-IN",
            Language::Te => "te-IN",
            Language::Ta => "ta-IN",
            Language::Kn => "kn-IN",
        }
    }

    /// Native display name for the language selector.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Te => "తెలుగు",
            Language::Ta => "தமிழ்",
            Language::Kn => "ಕನ್ನಡ",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
