//! Candidate profile built up over the intake conversation.

use serde::{Deserialize, Serialize};

/// Profile fields collected from the candidate.
///
/// Every field starts unset and is written exactly once, by the session,
/// after the corresponding input validates. There is no correction flow.
/// Invariant: `questions_answered <= total_questions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Years of experience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Comma-separated technology list, as typed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    pub questions_answered: usize,
    pub total_questions: usize,
}

impl CandidateProfile {
    /// Record one answered technical question, saturating at the total.
    pub fn record_answer(&mut self) {
        if self.questions_answered < self.total_questions {
            self.questions_answered += 1;
        }
    }

    /// Whether every technical question has been answered.
    pub fn all_questions_answered(&self) -> bool {
        self.questions_answered >= self.total_questions
    }

    /// Render the closing summary shown when the conversation ends.
    ///
    /// References the captured name, position, experience, tech stack, and
    /// email; fields never collected fall back to neutral wording.
    pub fn closing_summary(&self) -> String {
        let name = self.full_name.as_deref().unwrap_or("candidate");
        let position = self.position.as_deref().unwrap_or("not provided");
        let experience = self
            .experience
            .map(|years| years.to_string())
            .unwrap_or_else(|| "not provided".to_string());
        let tech_stack = self.tech_stack.as_deref().unwrap_or("not provided");
        let email = self.email.as_deref().unwrap_or("the email you provide");

        format!(
            "Thank you for your time, {name}!\n\n\
Here's a summary of your information:\n\
- Position: {position}\n\
- Experience: {experience} years\n\
- Tech Stack: {tech_stack}\n\n\
We'll review your responses and contact you at {email} about the next steps \
in the hiring process.\n\n\
Have a great day!"
        )
    }
}
