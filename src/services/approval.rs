//! Required reviewer approval resolution.
//!
//! Reviews arrive oldest first. Only the latest review of each author
//! counts, and authors are matched without regard to case. The review state
//! itself is compared exactly as GitHub reports it.

use std::collections::HashMap;

use crate::models::review::{ReviewEvent, STATE_APPROVED};

/// Latest review state per author, keyed by lower-cased login.
#[derive(Debug, Default)]
pub struct ReviewerStateIndex<'a> {
    latest: HashMap<String, &'a str>,
}

impl<'a> ReviewerStateIndex<'a> {
    /// Fold `events` in order; a later review by the same author replaces
    /// the earlier one.
    pub fn build(events: &'a [ReviewEvent]) -> Self {
        let latest = events.iter().fold(HashMap::new(), |mut latest, event| {
            latest.insert(event.author.to_lowercase(), event.state.as_str());
            latest
        });

        Self { latest }
    }

    /// Latest state recorded for `author`, if they reviewed at all.
    pub fn latest_state(&self, author: &str) -> Option<&'a str> {
        self.latest.get(&author.to_lowercase()).copied()
    }
}

/// Whether `required_reviewer`'s most recent review is an approval.
pub fn is_approved(required_reviewer: &str, events: &[ReviewEvent]) -> bool {
    ReviewerStateIndex::build(events).latest_state(required_reviewer) == Some(STATE_APPROVED)
}
