//! Language-model opponent over a streaming chat-completions endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use serde_json::json;
use tracing::{debug, trace};

use super::decision::extract_decision;
use super::sse::{delta_content, SseDecoder, SseEvent};
use super::trait_def::{AiError, OpponentAgent};
use crate::config::ModelEndpoint;
use crate::domain::{CardValue, HAND_SIZE};

/// Receives the response while it streams in.
///
/// Partial output is for display only; the decision is read once the stream
/// has completed.
pub trait StreamObserver: Send + Sync {
    /// Called before each request. A previous stream may have been dropped
    /// mid-way by the session timeout without reaching `on_complete`.
    fn on_start(&self) {}

    /// Called for every token with the text accumulated so far.
    fn on_token(&self, token: &str, accumulated: &str);

    /// Called once with the full response.
    fn on_complete(&self, _full: &str) {}
}

/// Default observer: logs progress at `trace`.
pub struct TracingObserver;

impl StreamObserver for TracingObserver {
    fn on_token(&self, token: &str, accumulated: &str) {
        trace!(token, accumulated_len = accumulated.len(), "opponent token");
    }

    fn on_complete(&self, full: &str) {
        debug!(response_len = full.len(), "opponent response complete");
    }
}

/// Build the instruction sent to the model for one round.
pub fn build_prompt(human_played: CardValue, agent_hand: &[CardValue]) -> String {
    let hand: Vec<&str> = agent_hand.iter().map(|c| c.label()).collect();
    let order: Vec<&str> = CardValue::ALL.iter().map(|c| c.label()).collect();
    format!(
        "You are an AI card-playing bot. At the start of the game you and a human \
         are each dealt {HAND_SIZE} random cards.\n\
         The game has {HAND_SIZE} rounds. In every round the human plays first and \
         you play after.\n\
         Each round is won by the higher card value, ordered {order}. Whoever wins \
         more of the {HAND_SIZE} rounds wins the game.\n\
         Think about strategy so that you win more rounds than the human.\n\
         The human has just played {human_played}.\n\
         The cards in your hand are: {hand}. You must choose one card to play.\n\
         Respond only with JSON in the form {{\"card\": \"A\"}}.",
        order = order.join(" < "),
        hand = hand.join(", "),
    )
}

/// Opponent backed by a hosted language model.
pub struct LlmOpponent {
    client: reqwest::Client,
    endpoint: ModelEndpoint,
    observer: Arc<dyn StreamObserver>,
}

impl LlmOpponent {
    pub const NAME: &'static str = "LlmOpponent";

    pub fn new(endpoint: ModelEndpoint) -> Result<Self, AiError> {
        // No client timeout: the whole decision is bounded by the session.
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AiError::Internal(format!("HTTP client setup failed: {e}")))?;
        Ok(Self {
            client,
            endpoint,
            observer: Arc::new(TracingObserver),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn StreamObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Send `prompt` and return the complete streamed answer.
    async fn stream_completion(&self, prompt: &str) -> Result<String, AiError> {
        let body = json!({
            "model": self.endpoint.model.id,
            "messages": [{ "role": "user", "content": prompt }],
            "stream": true,
        });

        let mut request = self
            .client
            .post(&self.endpoint.url)
            .header("x-model-tag", &self.endpoint.model.tag)
            .json(&body);
        if let Some(key) = &self.endpoint.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AiError::Transport(e.to_string()))?;

        let mut stream = response.bytes_stream();
        let mut decoder = SseDecoder::new();
        let mut full = String::new();

        'read: while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| AiError::Transport(e.to_string()))?;
            for event in decoder.push(&chunk) {
                if !self.absorb(event, &mut full) {
                    break 'read;
                }
            }
        }
        if let Some(event) = decoder.finish() {
            self.absorb(event, &mut full);
        }

        self.observer.on_complete(&full);
        Ok(full)
    }

    /// Append one event's token to `full`; returns false on the terminator.
    fn absorb(&self, event: SseEvent, full: &mut String) -> bool {
        match event {
            SseEvent::Done => false,
            SseEvent::Data(data) => {
                if let Some(token) = delta_content(&data) {
                    full.push_str(&token);
                    self.observer.on_token(&token, full);
                }
                true
            }
        }
    }
}

#[async_trait]
impl OpponentAgent for LlmOpponent {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn decide(
        &self,
        human_played: CardValue,
        agent_hand: &[CardValue],
    ) -> Result<CardValue, AiError> {
        let prompt = build_prompt(human_played, agent_hand);
        debug!(
            model = %self.endpoint.model.id,
            human_played = %human_played,
            hand_size = agent_hand.len(),
            "Requesting opponent decision"
        );

        self.observer.on_start();
        let full = self.stream_completion(&prompt).await?;
        let card = extract_decision(&full).map_err(|e| AiError::Malformed(e.to_string()))?;

        debug!(card = %card, "Opponent decision extracted");
        Ok(card)
    }
}
