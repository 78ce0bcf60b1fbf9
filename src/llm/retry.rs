//! Bounded retry helper for the remote call.

use std::time::Duration;

use tracing::warn;

use crate::error::LlmError;

use super::{ChatMessage, ChatModel};

/// Send `messages` through `model`, retrying up to `max_attempts` times with
/// a flat `delay` between attempts.
///
/// Every failure mode (timeout, transport, bad status, malformed body) is
/// retried the same way; the error from the last attempt is returned once
/// attempts are exhausted. No backoff growth — the delay stays flat.
pub async fn call_with_retry(
    model: &dyn ChatModel,
    messages: &[ChatMessage],
    max_attempts: u32,
    delay: Duration,
) -> Result<String, LlmError> {
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match model.complete(messages).await {
            Ok(content) => return Ok(content),
            Err(e) => {
                warn!(
                    attempt,
                    max_attempts,
                    model = model.model_name(),
                    error = %e,
                    "Chat completion attempt failed"
                );
                last_error = Some(e);
                if attempt < max_attempts {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| LlmError::RequestFailed("no attempts made".to_string())))
}
