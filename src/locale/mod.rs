//! Language selection and localized string tables.

pub mod bundle;
pub mod language;

pub use bundle::{bundle_for, AnswerSet, TranslationBundle};
pub use language::Language;
