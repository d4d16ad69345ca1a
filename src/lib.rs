//! Required reviewer check - CI gate on a designated reviewer's approval.
//!
//! The check waits, reads the required reviewer from the `REVIEWERS` file,
//! lists the pull request's reviews on GitHub and fails unless that
//! reviewer's latest review is an approval.

pub mod check;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
