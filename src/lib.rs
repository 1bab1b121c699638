//! Bhagavad Gita reading-plan and recitation-practice library.
//!
//! The scoring module compares a speech-to-text transcript against the
//! expected Roman-script transliteration of a verse; the dataset and
//! progress modules cover the reading plan built on top of it.

pub mod config;
pub mod dataset;
pub mod progress;
pub mod scoring;
pub mod types;
