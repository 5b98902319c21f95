use ollama_rs::Ollama;
use ollama_rs::error::OllamaError;
use ollama_rs::generation::chat::ChatMessage;
use ollama_rs::generation::chat::request::ChatMessageRequest;
use tracing::{debug, error, info};

use crate::quiz::QuizPrompt;

pub type OllamaResult<T> = Result<T, OllamaError>;

/// Model used when `DEFAULT_OLLAMA_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "llama3.1";

pub struct OllamaClient {
    client: Ollama,
    model: String,
}

impl OllamaClient {
    /// `host` includes the scheme, e.g. `http://localhost`.
    pub fn new(host: impl Into<String>, port: u16, model: impl Into<String>) -> Self {
        let host = host.into();
        let model = model.into();
        debug!("Creating OllamaClient for {}:{} with model '{}'", host, port, model);
        Self {
            client: Ollama::new(host, port),
            model,
        }
    }

    /// Sends the prompt as a fresh two-message chat; no history is kept between calls.
    pub async fn complete(&self, prompt: &QuizPrompt) -> OllamaResult<String> {
        info!("Sending chat request to Ollama model '{}'", self.model);

        let request = ChatMessageRequest::new(
            self.model.clone(),
            vec![
                ChatMessage::system(prompt.system.clone()),
                ChatMessage::user(prompt.user.clone()),
            ],
        );

        match self.client.send_chat_messages(request).await {
            Ok(response) => {
                debug!("Successfully received response from Ollama model '{}'", self.model);
                Ok(response.message.content)
            }
            Err(e) => {
                error!("Failed to get response from Ollama model '{}': {}", self.model, e);
                Err(e)
            }
        }
    }
}
