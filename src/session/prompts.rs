//! Canned assistant wording for the intake flow.

use rand::seq::SliceRandom;

pub const GREETING: &str = "Hello! Welcome to TalentScout, your intelligent hiring assistant.\n\
I'll help gather your details and ask a few technical questions to get started.\n\
You can type 'exit' anytime to end the chat.\n\n\
Let's begin! What is your full name?";

pub const ASK_EMAIL: &str = "Great! What is your email address?";
pub const ASK_PHONE: &str = "What is your phone number?";
pub const ASK_EXPERIENCE: &str = "How many years of experience do you have?";
pub const ASK_POSITION: &str = "Which position(s) are you interested in?";
pub const ASK_LOCATION: &str = "Where are you currently located?";
pub const ASK_TECH_STACK: &str = "Please list your tech stack (e.g., Python, Django, React, \
MySQL, Docker). Be specific about the technologies you're proficient in.";

pub const INVALID_NAME: &str = "Please provide your full name.";
pub const INVALID_EMAIL: &str = "Please provide a valid email address.";
pub const INVALID_PHONE: &str = "Please provide a valid phone number.";
pub const INVALID_EXPERIENCE: &str = "Please provide a valid number of years of experience.";

pub const ANSWER_ONE_BY_ONE: &str = "Please answer these questions one by one. You can start \
with the first question.";

/// Wrap the next technical question after an answer.
pub fn next_question(question: &str) -> String {
    format!("Thank you for your answer. Here's the next question:\n\n{question}")
}

const CLARIFICATIONS: [&str; 4] = [
    "I'm not sure I understand. Could you please rephrase that?",
    "I didn't quite catch that. Could you try again?",
    "I'm having trouble understanding. Could you be more specific?",
    "I'm not sure what you mean. Could you clarify?",
];

/// Pick one of the canned clarification phrases.
///
/// Non-deterministic cosmetic flavor, not logic: used when input carries
/// nothing to act on (e.g. whitespace-only free text).
pub fn clarification() -> &'static str {
    CLARIFICATIONS
        .choose(&mut rand::thread_rng())
        .expect("phrase list is non-empty")
}
