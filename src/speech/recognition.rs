//! Voice input as a single-shot, cancellable recognition session.
//!
//! The host speech-recognition facility sits behind [`RecognitionHost`].
//! One session is opened per listen request; it yields at most one final
//! transcript or error and can be aborted mid-flight. Host events travel
//! over a crossbeam channel and are consumed by polling, so all state
//! transitions happen on the caller's thread of control.

use crossbeam_channel::{Receiver, TryRecvError};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::locale::Language;

/// Why a recognition attempt failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    #[error("microphone permission denied")]
    PermissionDenied,

    #[error("no speech detected")]
    NoSpeechDetected,

    #[error("speech recognition is not available on this host")]
    HostUnavailable,

    #[error("speech recognition failed: {0}")]
    Unknown(String),
}

impl RecognitionError {
    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            RecognitionError::PermissionDenied => {
                "Microphone access was denied. Please allow microphone use.".to_string()
            }
            RecognitionError::NoSpeechDetected => {
                "No speech was detected. Please try again.".to_string()
            }
            RecognitionError::HostUnavailable => {
                "Voice input is not supported here. Please type your question.".to_string()
            }
            RecognitionError::Unknown(_) => {
                "Speech recognition failed. Please try again.".to_string()
            }
        }
    }
}

/// Event reported by an open host recognition session.
#[derive(Debug, Clone)]
pub enum RecognitionEvent {
    /// A transcript. The first one is taken as final; later events from
    /// the same session are discarded.
    Transcript(String),

    /// The session failed.
    Error(RecognitionError),
}

/// Handle to one open host recognition session.
///
/// Hosts construct this from the event receiver and an abort hook that
/// stops the underlying session when the listen is cancelled.
pub struct ActiveRecognition {
    id: Uuid,
    events: Receiver<RecognitionEvent>,
    abort: Option<Box<dyn FnOnce() + Send>>,
}

impl ActiveRecognition {
    pub fn new(events: Receiver<RecognitionEvent>, abort: impl FnOnce() + Send + 'static) -> Self {
        Self {
            id: Uuid::new_v4(),
            events,
            abort: Some(Box::new(abort)),
        }
    }

    /// Session id for log correlation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    fn abort(&mut self) {
        if let Some(abort) = self.abort.take() {
            abort();
        }
    }
}

/// Host speech-recognition facility.
pub trait RecognitionHost: Send {
    /// Open a single-shot recognition session for the given locale tag.
    fn open(&mut self, locale: &str) -> Result<ActiveRecognition, RecognitionError>;
}

/// A host without any recognition capability. Every open attempt fails
/// with [`RecognitionError::HostUnavailable`].
pub struct UnavailableRecognition;

impl RecognitionHost for UnavailableRecognition {
    fn open(&mut self, _locale: &str) -> Result<ActiveRecognition, RecognitionError> {
        Err(RecognitionError::HostUnavailable)
    }
}

/// Listening state of the voice input controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenState {
    /// No recognition session open. Ready to start.
    Idle,
    /// A host recognition session is open, awaiting a transcript.
    Listening,
}

/// Single-shot, cancellable voice input controller.
///
/// At most one host session is open at a time. The controller enforces
/// no timeout of its own; host-level timeouts surface as error events.
pub struct VoiceInput {
    host: Box<dyn RecognitionHost>,
    active: Option<ActiveRecognition>,
}

impl VoiceInput {
    pub fn new(host: impl RecognitionHost + 'static) -> Self {
        Self {
            host: Box::new(host),
            active: None,
        }
    }

    pub fn state(&self) -> ListenState {
        if self.active.is_some() {
            ListenState::Listening
        } else {
            ListenState::Idle
        }
    }

    pub fn is_listening(&self) -> bool {
        self.active.is_some()
    }

    /// Idle -> Listening: open a host session for the language's locale.
    ///
    /// Returns `Ok(false)` without opening a second session when one is
    /// already listening. An immediate host failure leaves the
    /// controller Idle.
    pub fn start(&mut self, lang: Language) -> Result<bool, RecognitionError> {
        if self.active.is_some() {
            debug!("recognition already in progress, ignoring start");
            return Ok(false);
        }

        let locale = lang.recognition_locale();
        let session = self.host.open(locale)?;
        debug!(id = %session.id(), locale, "recognition session opened");
        self.active = Some(session);
        Ok(true)
    }

    /// Consume at most one host event.
    ///
    /// The first transcript or error is final: it closes the session and
    /// returns the controller to Idle. Returns `None` while idle or
    /// still waiting.
    pub fn poll(&mut self) -> Option<Result<String, RecognitionError>> {
        let (id, event) = {
            let session = self.active.as_ref()?;
            (session.id, session.events.try_recv())
        };

        match event {
            Ok(RecognitionEvent::Transcript(text)) => {
                debug!(%id, "recognition resolved");
                self.active = None;
                Some(Ok(text))
            }
            Ok(RecognitionEvent::Error(e)) => {
                warn!(%id, error = %e, "recognition failed");
                self.active = None;
                Some(Err(e))
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // The host dropped the session without reporting anything.
                warn!(%id, "recognition session closed by host");
                self.active = None;
                Some(Err(RecognitionError::Unknown(
                    "host session closed".to_string(),
                )))
            }
        }
    }

    /// Abort the open host session, discarding partial results.
    /// No-op when idle.
    pub fn cancel(&mut self) {
        if let Some(mut session) = self.active.take() {
            debug!(id = %session.id(), "recognition session cancelled");
            session.abort();
        }
    }
}

impl Drop for VoiceInput {
    fn drop(&mut self) {
        // Session teardown while listening must stop the host session.
        self.cancel();
    }
}
