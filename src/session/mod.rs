//! Intake session — the conversation core.
//!
//! One `Session` per conversation, owning the candidate profile, the
//! transcript, the technical question set, and the current state. The UI
//! layer feeds raw text in through `submit_input` and renders the transcript
//! back out; it holds no conversation logic of its own.

pub mod machine;
pub mod profile;
pub mod prompts;
pub mod state;
pub mod transcript;

pub use machine::Session;
pub use profile::CandidateProfile;
pub use state::ConversationState;
pub use transcript::{Message, Speaker, Transcript};
