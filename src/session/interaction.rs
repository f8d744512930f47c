//! Interaction session: wires submit, listen, and language-change
//! events to the classifier, localization table, and speech controllers.
//!
//! Handlers run to completion on one logical thread of control; the
//! only suspended operation is an open recognition session, resumed by
//! [`InteractionSession::poll_recognition`].

use tracing::{debug, info};

use crate::classify::{classify, Topic};
use crate::locale::{bundle_for, Language, TranslationBundle};
use crate::session::state::SessionState;
use crate::speech::{RecognitionError, VoiceInput, VoiceOutput};

pub struct InteractionSession {
    state: SessionState,
    input: VoiceInput,
    output: VoiceOutput,
}

impl InteractionSession {
    pub fn new(input: VoiceInput, output: VoiceOutput) -> Self {
        Self {
            state: SessionState::new(),
            input,
            output,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Bundle for the currently selected language.
    pub fn bundle(&self) -> &'static TranslationBundle {
        bundle_for(self.state.language)
    }

    /// Replace the query text (UI text-field edits).
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.query = text.into();
    }

    /// Switch the UI/voice language.
    ///
    /// Cancels an in-flight recognition first. Query and response are
    /// left as-is; a response in the old language is acceptable until
    /// the next submit.
    pub fn on_language_change(&mut self, lang: Language) {
        if self.input.is_listening() {
            self.input.cancel();
            self.state.listening = false;
        }
        info!(%lang, "language changed");
        self.state.language = lang;
    }

    /// Submit the current query.
    ///
    /// A whitespace-only query is a silent no-op. Otherwise the query is
    /// classified, the localized answer stored and spoken once, and the
    /// query box cleared. Returns the matched topic.
    pub fn on_submit(&mut self) -> Option<Topic> {
        if self.state.query.trim().is_empty() {
            debug!("empty query, ignoring submit");
            return None;
        }

        let topic = classify(&self.state.query, self.state.language);
        let answer = self.bundle().answers.for_topic(topic);
        info!(%topic, lang = %self.state.language, "query answered");

        self.state.response = answer.to_string();
        self.output.speak(answer, self.state.language);
        self.state.query.clear();

        Some(topic)
    }

    /// Start a voice-input session in the current language.
    ///
    /// A no-op while already listening. An immediate host failure is
    /// returned for display and the listening flag stays false.
    pub fn on_start_listening(&mut self) -> Result<(), RecognitionError> {
        if self.input.is_listening() {
            return Ok(());
        }

        self.input.start(self.state.language)?;
        self.state.listening = true;
        Ok(())
    }

    /// Pump the voice input controller.
    ///
    /// A transcript overwrites the query box without auto-submitting. A
    /// failure leaves the query untouched and is returned for display.
    /// Returns `None` while idle or still listening. Either outcome
    /// drops the listening flag.
    pub fn poll_recognition(&mut self) -> Option<Result<(), RecognitionError>> {
        let outcome = self.input.poll()?;
        self.state.listening = false;

        match outcome {
            Ok(transcript) => {
                self.state.query = transcript;
                Some(Ok(()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
