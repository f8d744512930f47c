//! Speech input and output controllers.
//!
//! This module provides:
//! - Voice input: single-shot, cancellable recognition sessions
//! - Voice output: fire-and-forget synthesis

pub mod recognition;
pub mod synthesis;

// Re-export commonly used types
pub use recognition::{
    ActiveRecognition, ListenState, RecognitionError, RecognitionEvent, RecognitionHost,
    UnavailableRecognition, VoiceInput,
};
pub use synthesis::{ConsoleSynthesis, NullSynthesis, SynthesisHost, VoiceOutput};
