//! Client for Mistral's chat-completions API.

use reqwest::StatusCode;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, error};

use crate::quiz::QuizPrompt;

/// Public Mistral API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai";
/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "mistral-large-latest";

#[derive(Error, Debug)]
pub enum MistralError {
    #[error("API communication failure: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Unable to parse text from JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Refused to complete request ({status}): {message}")]
    Refusal { status: StatusCode, message: String },

    #[error("Unknown response from Mistral API")]
    Unknown,
}

pub struct MistralClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl MistralClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn build_request_body(&self, prompt: &QuizPrompt) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompt.system },
                { "role": "user", "content": prompt.user },
            ],
        })
    }

    /// Sends the prompt and returns the content of the first choice.
    pub async fn complete(&self, prompt: &QuizPrompt) -> Result<String, MistralError> {
        debug!("Sending chat completion request to Mistral model '{}'", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&self.build_request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        let result: Value = match serde_json::from_str(&text) {
            Ok(result) => result,
            Err(_) if !status.is_success() => {
                error!("Mistral API returned {} with a non-JSON body", status);
                return Err(MistralError::Refusal {
                    status,
                    message: text,
                });
            }
            Err(e) => return Err(MistralError::Json(e)),
        };

        match &result["choices"][0]["message"]["content"] {
            Value::String(content) => Ok(content.to_owned()),
            _ => match refusal_message(&result) {
                Some(message) => Err(MistralError::Refusal { status, message }),
                None => Err(MistralError::Unknown),
            },
        }
    }
}

/// Extracts the human-readable message from a Mistral error body.
fn refusal_message(json: &Value) -> Option<String> {
    [&json["message"], &json["error"]["message"], &json["detail"]]
        .into_iter()
        .find_map(|value| match value {
            Value::String(message) => Some(message.to_owned()),
            _ => None,
        })
}
