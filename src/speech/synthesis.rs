//! Voice output as fire-and-forget speech synthesis.

use tracing::debug;

use crate::locale::Language;

/// Host speech-synthesis facility.
///
/// Best effort: implementations must not block or fail. Queuing or
/// interruption of overlapping utterances is host-defined and not
/// coordinated here.
pub trait SynthesisHost: Send {
    fn speak(&self, text: &str, locale: &str);
}

/// A host without speech output. Speaking is a silent no-op.
pub struct NullSynthesis;

impl SynthesisHost for NullSynthesis {
    fn speak(&self, _text: &str, _locale: &str) {}
}

/// Synthesis host that prints utterances to stdout, used by the demo
/// binary.
pub struct ConsoleSynthesis;

impl SynthesisHost for ConsoleSynthesis {
    fn speak(&self, text: &str, locale: &str) {
        println!("🔊 [{locale}] {text}");
    }
}

/// Fire-and-forget voice output controller.
pub struct VoiceOutput {
    host: Box<dyn SynthesisHost>,
}

impl VoiceOutput {
    pub fn new(host: impl SynthesisHost + 'static) -> Self {
        Self {
            host: Box::new(host),
        }
    }

    /// Voice output for hosts without speech capability.
    pub fn disabled() -> Self {
        Self::new(NullSynthesis)
    }

    /// Speak `text` in the voice locale for `lang`.
    ///
    /// Completion is not awaited and failures are swallowed by the host.
    pub fn speak(&self, text: &str, lang: Language) {
        let locale = lang.recognition_locale();
        debug!(locale, "speaking response");
        self.host.speak(text, locale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct RecordingHost {
        spoken: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl SynthesisHost for RecordingHost {
        fn speak(&self, text: &str, locale: &str) {
            self.spoken.lock().push((text.to_string(), locale.to_string()));
        }
    }

    #[test]
    fn test_speak_forwards_text_and_locale() {
        let host = RecordingHost::default();
        let output = VoiceOutput::new(host.clone());

        output.speak("🌿 संतुलित NPK उर्वरक का उपयोग करें।", Language::Hi);

        let spoken = host.spoken.lock();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].1, "hi-IN");
        assert!(spoken[0].0.contains("NPK"));
    }

    #[test]
    fn test_disabled_output_is_silent() {
        let output = VoiceOutput::disabled();
        // Must not panic or block.
        output.speak("hello", Language::En);
    }
}
