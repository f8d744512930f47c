//! Query classification into canned-answer topics.

pub mod keywords;
pub mod topic;

pub use keywords::{classify, keywords_for};
pub use topic::Topic;
