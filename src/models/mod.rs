//! Data models for the check.

pub mod review;

pub use review::{RequiredReviewer, ReviewEvent};
