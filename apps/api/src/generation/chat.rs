//! Career-coach chat: forwards the conversation to the LLM under a fixed coaching persona.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::prompts::COACH_SYSTEM;
use crate::llm_client::{ChatMessage, LlmClient};

/// Oldest turns beyond this are dropped before the call.
const MAX_HISTORY: usize = 40;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

pub async fn coach_reply(llm: &LlmClient, request: &ChatRequest) -> Result<ChatResponse, AppError> {
    let messages = prepare_history(&request.messages)?;
    let message = llm
        .call_text(&messages, COACH_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Chat failed: {e}")))?;
    Ok(ChatResponse { message })
}

/// Validates roles, drops empty turns and keeps the most recent `MAX_HISTORY`.
/// The model requires the conversation to start with a user turn.
fn prepare_history(messages: &[ChatMessage]) -> Result<Vec<ChatMessage>, AppError> {
    if let Some(bad) = messages
        .iter()
        .find(|m| m.role != "user" && m.role != "assistant")
    {
        return Err(AppError::Validation(format!(
            "unsupported message role '{}'",
            bad.role
        )));
    }

    let turns: Vec<ChatMessage> = messages
        .iter()
        .filter(|m| !m.content.trim().is_empty())
        .cloned()
        .collect();
    let start = turns.len().saturating_sub(MAX_HISTORY);
    let mut recent: Vec<ChatMessage> = turns.into_iter().skip(start).collect();

    while recent.first().is_some_and(|m| m.role != "user") {
        recent.remove(0);
    }
    if recent.is_empty() {
        return Err(AppError::Validation(
            "messages must contain at least one user message".to_string(),
        ));
    }
    Ok(recent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(role: &str, content: &str) -> ChatMessage {
        ChatMessage {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_rejects_unknown_role() {
        let err = prepare_history(&[msg("system", "be nice")]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_rejects_empty_conversation() {
        assert!(prepare_history(&[]).is_err());
        assert!(prepare_history(&[msg("user", "   ")]).is_err());
    }

    #[test]
    fn test_drops_leading_assistant_turns() {
        let history = prepare_history(&[
            msg("assistant", "Hi! How can I help?"),
            msg("user", "Review my summary"),
        ])
        .unwrap();
        assert_eq!(history, vec![msg("user", "Review my summary")]);
    }

    #[test]
    fn test_keeps_most_recent_turns() {
        let messages: Vec<ChatMessage> = (0..50)
            .map(|i| msg(if i % 2 == 0 { "user" } else { "assistant" }, &i.to_string()))
            .collect();
        let history = prepare_history(&messages).unwrap();
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history[0].content, "10");
        assert_eq!(history.last().unwrap().content, "49");
    }
}
