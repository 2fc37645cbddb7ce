use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::{CardImage, CardRecognizer, RecognizerError};
use crate::config::ModelEndpoint;
use crate::domain::{parse_card_label, CardValue};

/// Instruction sent alongside every photo.
pub fn recognition_prompt() -> String {
    let labels: Vec<&str> = CardValue::ALL.iter().map(|c| c.label()).collect();
    format!(
        "Identify the poker card in this image, respond with just the card value {}",
        labels.join(", ")
    )
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Recognizer backed by a hosted vision-language model.
pub struct VisionRecognizer {
    client: reqwest::Client,
    endpoint: ModelEndpoint,
}

impl VisionRecognizer {
    pub const NAME: &'static str = "VisionRecognizer";

    pub fn new(endpoint: ModelEndpoint, timeout: Duration) -> Result<Self, RecognizerError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RecognizerError::Transport(format!("HTTP client setup failed: {e}")))?;
        Ok(Self { client, endpoint })
    }

    async fn ask(&self, image: &CardImage) -> Result<String, RecognizerError> {
        let body = json!({
            "model": self.endpoint.model.id,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": recognition_prompt() },
                    { "type": "image_url", "image_url": { "url": image.data_url() } },
                ],
            }],
            "stream": false,
        });

        let mut request = self
            .client
            .post(&self.endpoint.url)
            .header("x-model-tag", &self.endpoint.model.tag)
            .json(&body);
        if let Some(key) = &self.endpoint.api_key {
            request = request.bearer_auth(key);
        }

        let response: CompletionResponse = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| RecognizerError::Transport(e.to_string()))?
            .json()
            .await
            .map_err(|e| RecognizerError::Transport(format!("unexpected response body: {e}")))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| RecognizerError::Transport("response has no message content".into()))
    }
}

#[async_trait]
impl CardRecognizer for VisionRecognizer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn recognize(&self, image: &CardImage) -> Result<CardValue, RecognizerError> {
        debug!(
            model = %self.endpoint.model.id,
            bytes = image.bytes().len(),
            media_type = image.media_type(),
            "Recognizing card image"
        );
        let answer = self.ask(image).await?;
        debug!(answer = %answer.trim(), "Vision model answered");

        parse_card_label(&answer).map_err(|_| RecognizerError::Unrecognized(answer.trim().to_string()))
    }
}
