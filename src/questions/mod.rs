//! Technical question selection and generation.
//!
//! The generator asks the remote model for tech-stack-specific questions and
//! falls back to the static bank when the model is unavailable. Callers get
//! one ordered list of questions either way and cannot tell which source
//! produced it.

pub mod bank;
pub mod generator;

pub use bank::fallback_questions;
pub use generator::QuestionGenerator;
