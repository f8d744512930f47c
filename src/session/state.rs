//! Session state owned by the interaction session.

use crate::locale::Language;

/// Mutable state of one interaction session.
///
/// Owned exclusively by `InteractionSession` and mutated only by its
/// event handlers. The UI layer re-renders from this on every change.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Currently selected UI/voice language.
    pub language: Language,

    /// Text in the query box, typed or transcribed.
    pub query: String,

    /// Last canned answer. Empty means no response yet.
    pub response: String,

    /// True while a voice-input session is outstanding.
    pub listening: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            language: Language::En,
            query: String::new(),
            response: String::new(),
            listening: false,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
