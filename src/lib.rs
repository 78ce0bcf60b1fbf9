//! TalentScout — conversational hiring intake assistant.

pub mod config;
pub mod error;
pub mod llm;
pub mod questions;
pub mod session;
pub mod validation;

pub use error::{Error, Result};
