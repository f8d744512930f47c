//! Canned-answer topics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic a query can be classified into.
///
/// `Default` is the fallback; every language carries a non-empty answer
/// for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Pest,
    Wheat,
    Rice,
    Fertilizer,
    Default,
}

impl Topic {
    /// Classification priority. The first matching topic wins; `Default`
    /// is returned only when nothing matches and is never tested itself.
    pub const PRIORITY: [Topic; 4] = [Topic::Pest, Topic::Wheat, Topic::Rice, Topic::Fertilizer];
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::Pest => "pest",
            Topic::Wheat => "wheat",
            Topic::Rice => "rice",
            Topic::Fertilizer => "fertilizer",
            Topic::Default => "default",
        };
        write!(f, "{name}")
    }
}
