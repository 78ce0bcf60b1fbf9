//! The intake session — owns profile, transcript, question set, and the
//! current conversation state, and drives all transitions.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::questions::QuestionGenerator;
use crate::validation::{is_plausible_name, validate, FieldKind};

use super::profile::CandidateProfile;
use super::prompts;
use super::state::ConversationState;
use super::transcript::Transcript;

/// Commands that end the conversation from any state, case-insensitive.
const EXIT_COMMANDS: [&str; 3] = ["exit", "quit", "bye"];

fn is_exit_command(input: &str) -> bool {
    let lowered = input.to_lowercase();
    EXIT_COMMANDS.contains(&lowered.as_str())
}

/// One candidate's intake conversation.
///
/// A session is created per conversation and never shared: all state lives
/// here and is mutated only through `submit_input`, one input at a time.
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    state: ConversationState,
    profile: CandidateProfile,
    transcript: Transcript,
    questions: Vec<String>,
    generator: QuestionGenerator,
}

impl Session {
    /// Start a new session. The greeting is appended immediately and the
    /// session waits for the candidate's name (Greeting's single outbound
    /// edge is taken at construction).
    pub fn new(generator: QuestionGenerator) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            state: ConversationState::Greeting,
            profile: CandidateProfile::default(),
            transcript: Transcript::new(),
            questions: Vec::new(),
            generator,
        };
        session.transcript.push_assistant(prompts::GREETING);
        session.advance();
        info!(session = %session.id, "Intake session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }

    /// The technical question set, empty until the tech stack is collected.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Process one candidate input.
    ///
    /// Appends the input to the transcript, then either ends the session
    /// (exit command), re-prompts (validation failure), or stores the field
    /// and advances. On an ended session this is a no-op.
    pub async fn submit_input(&mut self, input: &str) {
        if self.is_ended() {
            debug!(session = %self.id, "Input ignored, session already ended");
            return;
        }

        self.transcript.push_user(input);
        let input = input.trim();

        if is_exit_command(input) {
            self.end();
            return;
        }

        use ConversationState::*;
        match self.state {
            // Greeting's outbound edge is taken at construction; no input
            // ever arrives here.
            Greeting => {}

            CollectingName => {
                if !is_plausible_name(input) {
                    self.transcript.push_assistant(prompts::INVALID_NAME);
                    return;
                }
                self.profile.full_name = Some(input.to_string());
                self.prompt_and_advance(prompts::ASK_EMAIL);
            }

            CollectingEmail => {
                if !validate(FieldKind::Email, input) {
                    self.transcript.push_assistant(prompts::INVALID_EMAIL);
                    return;
                }
                self.profile.email = Some(input.to_string());
                self.prompt_and_advance(prompts::ASK_PHONE);
            }

            CollectingPhone => {
                if !validate(FieldKind::Phone, input) {
                    self.transcript.push_assistant(prompts::INVALID_PHONE);
                    return;
                }
                self.profile.phone = Some(input.to_string());
                self.prompt_and_advance(prompts::ASK_EXPERIENCE);
            }

            CollectingExperience => {
                if !validate(FieldKind::Experience, input) {
                    self.transcript.push_assistant(prompts::INVALID_EXPERIENCE);
                    return;
                }
                // validate() just accepted this as a bounded number
                self.profile.experience = input.parse::<f64>().ok();
                self.prompt_and_advance(prompts::ASK_POSITION);
            }

            CollectingPosition => {
                if input.is_empty() {
                    self.transcript.push_assistant(prompts::clarification());
                    return;
                }
                self.profile.position = Some(input.to_string());
                self.prompt_and_advance(prompts::ASK_LOCATION);
            }

            CollectingLocation => {
                if input.is_empty() {
                    self.transcript.push_assistant(prompts::clarification());
                    return;
                }
                self.profile.location = Some(input.to_string());
                self.prompt_and_advance(prompts::ASK_TECH_STACK);
            }

            CollectingTechStack => {
                if input.is_empty() {
                    self.transcript.push_assistant(prompts::clarification());
                    return;
                }
                self.profile.tech_stack = Some(input.to_string());
                self.begin_technical_questions(input).await;
            }

            AskingTechnicalQuestions => {
                // Answer content is counted, never validated or stored.
                self.profile.record_answer();
                if self.profile.all_questions_answered() {
                    self.end();
                } else {
                    let question = &self.questions[self.profile.questions_answered];
                    self.transcript
                        .push_assistant(prompts::next_question(question));
                }
            }

            Ended => {}
        }
    }

    /// Generate the question set and enter the technical phase, or end the
    /// session right away when no questions could be produced.
    async fn begin_technical_questions(&mut self, tech_stack: &str) {
        let questions = self.generator.generate(tech_stack).await;
        self.profile.total_questions = questions.len();
        self.questions = questions;

        if self.questions.is_empty() {
            info!(session = %self.id, "No technical questions for this stack, closing");
            self.end();
            return;
        }

        debug!(session = %self.id, count = self.questions.len(), "Question set ready");
        self.transcript.push_assistant(self.questions.join("\n"));
        self.transcript.push_assistant(prompts::ANSWER_ONE_BY_ONE);
        self.advance();
    }

    fn prompt_and_advance(&mut self, prompt: &str) {
        self.transcript.push_assistant(prompt);
        self.advance();
    }

    /// Move to the next state in the linear progression.
    fn advance(&mut self) {
        match self.state.next() {
            Some(next) => self.transition(next),
            None => warn!(session = %self.id, "No next state from {}", self.state),
        }
    }

    /// Close the conversation with the summary.
    fn end(&mut self) {
        self.transcript
            .push_assistant(self.profile.closing_summary());
        self.transition(ConversationState::Ended);
        info!(session = %self.id, "Intake session ended");
    }

    fn transition(&mut self, target: ConversationState) {
        if !self.state.can_transition_to(target) {
            warn!(session = %self.id, from = %self.state, to = %target, "Invalid transition ignored");
            return;
        }
        debug!(session = %self.id, from = %self.state, to = %target, "State transition");
        self.state = target;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::error::LlmError;
    use crate::llm::{ChatMessage, ChatModel};
    use crate::session::transcript::Speaker;

    use super::*;

    /// Model that either returns canned text or always times out.
    struct CannedModel(Option<&'static str>);

    #[async_trait::async_trait]
    impl ChatModel for CannedModel {
        async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, LlmError> {
            match self.0 {
                Some(text) => Ok(text.to_string()),
                None => Err(LlmError::Timeout(Duration::from_secs(10))),
            }
        }

        fn model_name(&self) -> &str {
            "canned"
        }
    }

    fn session_with(model: CannedModel) -> Session {
        let generator =
            QuestionGenerator::new(Arc::new(model), 1, Duration::from_millis(0));
        Session::new(generator)
    }

    fn offline_session() -> Session {
        session_with(CannedModel(None))
    }

    fn last_assistant(session: &Session) -> &str {
        session
            .transcript()
            .messages()
            .iter()
            .rev()
            .find(|m| m.role == Speaker::Assistant)
            .map(|m| m.content.as_str())
            .unwrap()
    }

    /// Drive a session through the profile-collection states.
    async fn collect_profile(session: &mut Session) {
        session.submit_input("Ada Lovelace").await;
        session.submit_input("ada@example.com").await;
        session.submit_input("+1 555-1234").await;
        session.submit_input("3.5").await;
        session.submit_input("Backend Engineer").await;
        session.submit_input("London").await;
    }

    #[test]
    fn new_session_greets_and_waits_for_name() {
        let session = offline_session();
        assert_eq!(session.state(), ConversationState::CollectingName);
        assert_eq!(session.transcript().len(), 1);
        assert!(last_assistant(&session).contains("What is your full name?"));
        assert!(!session.is_ended());
    }

    #[tokio::test]
    async fn short_name_reprompts_without_advancing() {
        let mut session = offline_session();
        session.submit_input("A").await;
        assert_eq!(session.state(), ConversationState::CollectingName);
        assert!(session.profile().full_name.is_none());
        assert_eq!(last_assistant(&session), prompts::INVALID_NAME);
    }

    #[tokio::test]
    async fn invalid_email_reprompts_without_advancing() {
        let mut session = offline_session();
        session.submit_input("Ada Lovelace").await;
        session.submit_input("not-an-email").await;
        assert_eq!(session.state(), ConversationState::CollectingEmail);
        assert!(session.profile().email.is_none());
        assert_eq!(last_assistant(&session), prompts::INVALID_EMAIL);

        session.submit_input("ada@example.com").await;
        assert_eq!(session.state(), ConversationState::CollectingPhone);
        assert_eq!(session.profile().email.as_deref(), Some("ada@example.com"));
    }

    #[tokio::test]
    async fn experience_is_stored_as_number() {
        let mut session = offline_session();
        session.submit_input("Ada Lovelace").await;
        session.submit_input("ada@example.com").await;
        session.submit_input("+1 555-1234").await;

        session.submit_input("sixty").await;
        assert_eq!(session.state(), ConversationState::CollectingExperience);
        assert_eq!(last_assistant(&session), prompts::INVALID_EXPERIENCE);

        session.submit_input("3.5").await;
        assert_eq!(session.profile().experience, Some(3.5));
        assert_eq!(session.state(), ConversationState::CollectingPosition);
    }

    #[tokio::test]
    async fn blank_free_text_gets_a_clarification() {
        let mut session = offline_session();
        session.submit_input("Ada Lovelace").await;
        session.submit_input("ada@example.com").await;
        session.submit_input("+1 555-1234").await;
        session.submit_input("3.5").await;

        session.submit_input("   ").await;
        assert_eq!(session.state(), ConversationState::CollectingPosition);
        assert!(session.profile().position.is_none());

        session.submit_input("Backend Engineer").await;
        assert_eq!(session.state(), ConversationState::CollectingLocation);
    }

    #[tokio::test]
    async fn fallback_question_flow_runs_to_completion() {
        let mut session = offline_session();
        collect_profile(&mut session).await;
        session.submit_input("Python, MySQL").await;

        assert_eq!(session.state(), ConversationState::AskingTechnicalQuestions);
        assert_eq!(session.profile().total_questions, 10);
        assert_eq!(session.questions().len(), 10);
        assert_eq!(last_assistant(&session), prompts::ANSWER_ONE_BY_ONE);

        // Nine answers step through questions 1..=9
        for answered in 1..10 {
            session.submit_input("my answer").await;
            assert_eq!(session.profile().questions_answered, answered);
            assert!(!session.is_ended());
            assert!(last_assistant(&session).contains(&session.questions()[answered]));
        }

        // The tenth answer ends the conversation
        session.submit_input("final answer").await;
        assert!(session.is_ended());
        assert_eq!(session.profile().questions_answered, 10);
        let summary = last_assistant(&session);
        assert!(summary.contains("Ada Lovelace"));
        assert!(summary.contains("ada@example.com"));
    }

    #[tokio::test]
    async fn remote_questions_flow_uses_generated_set() {
        let mut session = session_with(CannedModel(Some(
            "Python:\n1. What is a decorator?\n2. Explain generators.",
        )));
        collect_profile(&mut session).await;
        session.submit_input("Python").await;

        assert_eq!(session.profile().total_questions, 2);
        assert_eq!(session.questions()[0], "Python: 1. What is a decorator?");

        session.submit_input("an answer").await;
        assert!(last_assistant(&session).contains("Explain generators."));
        session.submit_input("another answer").await;
        assert!(session.is_ended());
    }

    #[tokio::test]
    async fn empty_question_set_ends_immediately() {
        let mut session = offline_session();
        collect_profile(&mut session).await;
        session.submit_input("COBOL").await;

        assert!(session.is_ended());
        assert_eq!(session.profile().total_questions, 0);
        assert!(last_assistant(&session).contains("Thank you for your time"));
    }

    #[tokio::test]
    async fn exit_command_ends_from_any_state() {
        for exit in ["exit", "QUIT", "Bye"] {
            let mut session = offline_session();
            session.submit_input("Ada Lovelace").await;
            session.submit_input(exit).await;
            assert!(session.is_ended(), "{exit} should end the session");
            let summary = last_assistant(&session);
            assert!(summary.contains("Ada Lovelace"));
        }
    }

    #[tokio::test]
    async fn exit_mid_questions_includes_captured_fields() {
        let mut session = offline_session();
        collect_profile(&mut session).await;
        session.submit_input("Python, MySQL").await;
        session.submit_input("first answer").await;
        session.submit_input("exit").await;

        assert!(session.is_ended());
        let summary = last_assistant(&session);
        assert!(summary.contains("Backend Engineer"));
        assert!(summary.contains("3.5 years"));
        assert!(summary.contains("Python, MySQL"));
        assert!(summary.contains("ada@example.com"));
    }

    #[tokio::test]
    async fn ended_session_ignores_input() {
        let mut session = offline_session();
        session.submit_input("exit").await;
        assert!(session.is_ended());

        let len_before = session.transcript().len();
        session.submit_input("hello?").await;
        assert_eq!(session.transcript().len(), len_before);
        assert!(session.is_ended());
    }

    #[tokio::test]
    async fn transcript_is_stable_between_inputs() {
        let mut session = offline_session();
        session.submit_input("Ada Lovelace").await;
        let first: Vec<_> = session.transcript().messages().to_vec();
        let second: Vec<_> = session.transcript().messages().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn exit_commands_are_case_insensitive() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("EXIT"));
        assert!(is_exit_command("Quit"));
        assert!(is_exit_command("bYe"));
        assert!(!is_exit_command("exits"));
        assert!(!is_exit_command("goodbye"));
    }
}
