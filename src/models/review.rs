//! Review event and required reviewer models.

use serde::{Deserialize, Serialize};

/// Review state GitHub reports for an approving review.
pub const STATE_APPROVED: &str = "APPROVED";

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// A single review submitted on a pull request.
///
/// `state` is kept exactly as GitHub sent it (e.g. `APPROVED`,
/// `CHANGES_REQUESTED`, `COMMENTED`, `DISMISSED`, `PENDING`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewEvent {
    pub author: String,
    pub state: String,
}

impl ReviewEvent {
    pub fn new(author: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            state: state.into(),
        }
    }
}

/// The reviewer whose approval the check requires.
///
/// Always trimmed and non-empty; the original casing is preserved for
/// messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredReviewer(String);

impl RequiredReviewer {
    /// Trim `raw` and wrap it, or return `None` if nothing is left.
    ///
    /// A byte order mark counts as whitespace, so files saved with one
    /// still match.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequiredReviewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
