//! Conversation state machine — tracks which phase of the intake the
//! candidate is in.

use serde::{Deserialize, Serialize};

/// The phases of the intake conversation.
///
/// Progresses linearly: Greeting → CollectingName → CollectingEmail →
/// CollectingPhone → CollectingExperience → CollectingPosition →
/// CollectingLocation → CollectingTechStack → AskingTechnicalQuestions →
/// Ended. `Ended` is additionally reachable from any state via an exit
/// command; no backward edge exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    Greeting,
    CollectingName,
    CollectingEmail,
    CollectingPhone,
    CollectingExperience,
    CollectingPosition,
    CollectingLocation,
    CollectingTechStack,
    AskingTechnicalQuestions,
    Ended,
}

impl ConversationState {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: ConversationState) -> bool {
        if target == ConversationState::Ended {
            // Exit command: any live state can end.
            return !self.is_terminal();
        }
        self.next() == Some(target)
    }

    /// Whether this phase is terminal (the conversation is over).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ended)
    }

    /// Get the next phase in the linear progression, if any.
    pub fn next(&self) -> Option<ConversationState> {
        use ConversationState::*;
        match self {
            Greeting => Some(CollectingName),
            CollectingName => Some(CollectingEmail),
            CollectingEmail => Some(CollectingPhone),
            CollectingPhone => Some(CollectingExperience),
            CollectingExperience => Some(CollectingPosition),
            CollectingPosition => Some(CollectingLocation),
            CollectingLocation => Some(CollectingTechStack),
            CollectingTechStack => Some(AskingTechnicalQuestions),
            AskingTechnicalQuestions => Some(Ended),
            Ended => None,
        }
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::Greeting
    }
}

impl std::fmt::Display for ConversationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Greeting => "greeting",
            Self::CollectingName => "collecting_name",
            Self::CollectingEmail => "collecting_email",
            Self::CollectingPhone => "collecting_phone",
            Self::CollectingExperience => "collecting_experience",
            Self::CollectingPosition => "collecting_position",
            Self::CollectingLocation => "collecting_location",
            Self::CollectingTechStack => "collecting_tech_stack",
            Self::AskingTechnicalQuestions => "asking_technical_questions",
            Self::Ended => "ended",
        };
        write!(f, "{s}")
    }
}
