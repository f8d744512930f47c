//! Interaction session and its state.

pub mod interaction;
pub mod state;

pub use interaction::InteractionSession;
pub use state::SessionState;
