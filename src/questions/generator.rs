//! Question generation — remote model with static-bank fallback.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::config::AppConfig;
use crate::llm::{call_with_retry, ChatMessage, ChatModel};

use super::bank::fallback_questions;

const INTERVIEWER_PERSONA: &str = "You are a senior technical interviewer with \
expertise in software development and system design.";

/// Build the instructional prompt for a given tech stack.
fn question_prompt(tech_stack: &str) -> String {
    format!(
        "As a technical interviewer, generate 3-5 specific technical interview \
questions for each technology in this stack: {tech_stack}

For each technology:
1. Include questions of varying difficulty (basic to advanced)
2. Focus on practical knowledge and problem-solving
3. Include questions about best practices and common pitfalls
4. Format each question with a clear number and technology label

Example format:
Python:
1. [Question about Python]
2. [Question about Python]

Django:
1. [Question about Django]
2. [Question about Django]"
    )
}

fn is_numbered(line: &str) -> bool {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && matches!(line[digits..].chars().next(), Some('.') | Some(')'))
}

/// Segment generated text into one entry per individual question.
///
/// Numbered lines (`1.`, `2)`) start a question; unindented continuation
/// lines are appended to the question in progress. A bare `Technology:`
/// label line is carried as a prefix onto the questions that follow it, so
/// each entry stands alone when shown one at a time. Preamble lines before
/// the first question are dropped.
fn segment_questions(text: &str) -> Vec<String> {
    fn flush(current: &mut Option<String>, questions: &mut Vec<String>) {
        if let Some(q) = current.take() {
            questions.push(q);
        }
    }

    let mut questions: Vec<String> = Vec::new();
    let mut label: Option<String> = None;
    let mut current: Option<String> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush(&mut current, &mut questions);
            continue;
        }
        if is_numbered(trimmed) {
            flush(&mut current, &mut questions);
            current = Some(match &label {
                Some(l) => format!("{l}: {trimmed}"),
                None => trimmed.to_string(),
            });
        } else if trimmed.ends_with(':') && current.is_none() {
            label = Some(trimmed.trim_end_matches(':').to_string());
        } else if let Some(q) = current.as_mut() {
            q.push(' ');
            q.push_str(trimmed);
        }
    }
    flush(&mut current, &mut questions);

    questions
}

/// Generates the session's technical question set.
///
/// The remote path and the fallback path produce the same shape (an ordered
/// list with one entry per question); downstream code never learns which
/// source was used.
pub struct QuestionGenerator {
    model: Arc<dyn ChatModel>,
    max_attempts: u32,
    retry_delay: Duration,
}

impl QuestionGenerator {
    pub fn new(model: Arc<dyn ChatModel>, max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            model,
            max_attempts,
            retry_delay,
        }
    }

    pub fn from_config(model: Arc<dyn ChatModel>, config: &AppConfig) -> Self {
        Self::new(model, config.max_attempts, config.retry_delay)
    }

    /// Generate questions for a comma-separated tech stack.
    ///
    /// Never fails: when the remote call is unavailable after retries, or
    /// its output yields no parseable questions, the static bank substitutes.
    /// An empty result means no technology was recognized anywhere.
    pub async fn generate(&self, tech_stack: &str) -> Vec<String> {
        let messages = [
            ChatMessage::system(INTERVIEWER_PERSONA),
            ChatMessage::user(question_prompt(tech_stack)),
        ];

        match call_with_retry(
            self.model.as_ref(),
            &messages,
            self.max_attempts,
            self.retry_delay,
        )
        .await
        {
            Ok(text) => {
                let questions = segment_questions(&text);
                if questions.is_empty() {
                    warn!("Model output contained no parseable questions. Using fallback questions.");
                    fallback_questions(tech_stack)
                } else {
                    questions
                }
            }
            Err(e) => {
                warn!(error = %e, "Question generation unavailable. Using fallback questions.");
                fallback_questions(tech_stack)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LlmError;

    use super::*;

    struct CannedModel(Result<&'static str, ()>);

    #[async_trait::async_trait]
    impl ChatModel for CannedModel {
        async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, LlmError> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(LlmError::Timeout(Duration::from_secs(10))),
            }
        }

        fn model_name(&self) -> &str {
            "canned"
        }
    }

    fn generator(model: CannedModel) -> QuestionGenerator {
        QuestionGenerator::new(Arc::new(model), 3, Duration::from_secs(1))
    }

    #[test]
    fn prompt_embeds_tech_stack() {
        let prompt = question_prompt("Python, Django");
        assert!(prompt.contains("this stack: Python, Django"));
        assert!(prompt.contains("best practices and common pitfalls"));
    }

    #[test]
    fn segments_labeled_numbered_output() {
        let text = "Python:\n1. What is a generator?\n2. Explain the GIL,\nand its impact on threading.\n\nDjango:\n1. What is a middleware?";
        let questions = segment_questions(text);
        assert_eq!(
            questions,
            vec![
                "Python: 1. What is a generator?",
                "Python: 2. Explain the GIL, and its impact on threading.",
                "Django: 1. What is a middleware?",
            ]
        );
    }

    #[test]
    fn segments_unlabeled_output_and_drops_preamble() {
        let text = "Here are your questions:\n\n1. First question?\n2. Second question?";
        let questions = segment_questions(text);
        assert_eq!(questions, vec!["1. First question?", "2. Second question?"]);
    }

    #[test]
    fn segments_nothing_from_prose() {
        assert!(segment_questions("I cannot help with that.").is_empty());
        assert!(segment_questions("").is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn remote_failure_falls_back_to_bank() {
        let generator = generator(CannedModel(Err(())));
        let questions = generator.generate("Python, MySQL").await;
        assert_eq!(questions.len(), 10);
        assert!(questions[0].contains("lists and tuples"));
        assert!(questions[5].contains("INNER JOIN"));
    }

    #[tokio::test(start_paused = true)]
    async fn remote_failure_with_unknown_stack_yields_empty() {
        let generator = generator(CannedModel(Err(())));
        let questions = generator.generate("COBOL").await;
        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn remote_success_is_segmented_per_question() {
        let generator = generator(CannedModel(Ok(
            "Rust:\n1. Explain ownership.\n2. What are lifetimes?",
        )));
        let questions = generator.generate("Rust").await;
        assert_eq!(
            questions,
            vec!["Rust: 1. Explain ownership.", "Rust: 2. What are lifetimes?"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unparseable_remote_output_falls_back() {
        let generator = generator(CannedModel(Ok("Sorry, I can't do that.")));
        let questions = generator.generate("Python").await;
        assert_eq!(questions.len(), 5);
    }
}
