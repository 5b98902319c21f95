//! The seam between the `/generate` flow and whichever model provider is configured.

use std::future::Future;

use thiserror::Error;

use crate::config::ModelConfig;
use crate::quiz::QuizPrompt;
use crate::utils::mistral_client::{MistralClient, MistralError};
#[cfg(feature = "ollama")]
use crate::utils::ollama_client::OllamaClient;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Mistral request failed: {0}")]
    Mistral(#[from] MistralError),

    #[cfg(feature = "ollama")]
    #[error("Ollama request failed: {0}")]
    Ollama(#[from] ollama_rs::error::OllamaError),

    #[error("Model returned an empty response")]
    EmptyResponse,
}

/// Something that turns a rendered prompt into generated quiz text.
pub trait QuestionModel {
    fn generate(&self, prompt: &QuizPrompt)
    -> impl Future<Output = Result<String, ModelError>> + Send;
}

/// The configured model provider.
pub enum ModelClient {
    Mistral(MistralClient),
    #[cfg(feature = "ollama")]
    Ollama(OllamaClient),
}

impl ModelClient {
    pub fn from_config(config: &ModelConfig) -> Self {
        match config {
            ModelConfig::Mistral {
                base_url,
                api_key,
                model,
            } => Self::Mistral(MistralClient::new(base_url, api_key, model)),
            #[cfg(feature = "ollama")]
            ModelConfig::Ollama { host, port, model } => {
                Self::Ollama(OllamaClient::new(host, *port, model))
            }
        }
    }
}

impl QuestionModel for ModelClient {
    async fn generate(&self, prompt: &QuizPrompt) -> Result<String, ModelError> {
        match self {
            Self::Mistral(client) => Ok(client.complete(prompt).await?),
            #[cfg(feature = "ollama")]
            Self::Ollama(client) => Ok(client.complete(prompt).await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn prompt() -> QuizPrompt {
        QuizPrompt {
            system: "system".to_string(),
            user: "user".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mistral_provider_is_dispatched() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "Q1: dispatched" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ModelClient::from_config(&ModelConfig::Mistral {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
            model: "mistral-large-latest".to_string(),
        });

        assert_eq!(client.generate(&prompt()).await.unwrap(), "Q1: dispatched");

        server.verify().await;
    }

    #[tokio::test]
    async fn test_provider_error_is_wrapped() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = ModelClient::from_config(&ModelConfig::Mistral {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
            model: "mistral-large-latest".to_string(),
        });

        let err = client.generate(&prompt()).await.unwrap_err();

        assert!(matches!(err, ModelError::Mistral(MistralError::Unknown)));
        assert_eq!(
            err.to_string(),
            "Mistral request failed: Unknown response from Mistral API"
        );
    }
}
