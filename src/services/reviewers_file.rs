//! Required reviewer lookup from the `REVIEWERS` file.

use std::path::Path;

use crate::error::{AppError, ReviewersFileProblem};
use crate::models::review::RequiredReviewer;

/// File name read from the working directory by default.
pub const DEFAULT_REVIEWERS_FILE: &str = "REVIEWERS";

/// Read the required reviewer from `path`.
///
/// The whole file is the reviewer's login, trimmed of surrounding
/// whitespace. Invalid UTF-8 is replaced rather than rejected.
pub fn read_required_reviewer(path: &Path) -> Result<RequiredReviewer, AppError> {
    let bytes = std::fs::read(path).map_err(|e| {
        log::debug!("Failed to read {}: {}", path.display(), e);
        AppError::reviewers_file(ReviewersFileProblem::Unreadable)
    })?;

    RequiredReviewer::parse(&String::from_utf8_lossy(&bytes))
        .ok_or_else(|| AppError::reviewers_file(ReviewersFileProblem::Empty))
}
