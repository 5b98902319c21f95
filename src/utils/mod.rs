//! This module aggregates the model-provider utilities used by the quiz commands.

/// Utilities for interacting with Mistral's chat-completions API.
pub mod mistral_client;
/// The provider-agnostic model seam.
pub mod model;
/// Utilities for interacting with an Ollama server (requires the `ollama` feature).
#[cfg(feature = "ollama")]
pub mod ollama_client;
