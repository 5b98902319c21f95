//! Mock implementations of the model and chat seams
//! This module contains mock objects used by the `/generate` flow tests

use std::future::Future;

use futures::future;
use mockall::predicate::*;
use mockall::*;

use question_maker::CommandResult;
use question_maker::commands::ChatReply;
use question_maker::quiz::QuizPrompt;
use question_maker::utils::mistral_client::MistralError;
use question_maker::utils::model::{ModelError, QuestionModel};

mock! {
    /// Mock question model
    pub Model {}

    impl QuestionModel for Model {
        fn generate(&self, prompt: &QuizPrompt) -> impl Future<Output = Result<String, ModelError>> + Send;
    }
}

mock! {
    /// Mock chat reply target
    pub Reply {}

    impl ChatReply for Reply {
        fn send_text(&mut self, text: String) -> impl Future<Output = CommandResult> + Send;
    }
}

/// A model that answers exactly one prompt with `text`.
pub fn model_answering(text: &str) -> MockModel {
    let text = text.to_string();
    let mut model = MockModel::new();
    model
        .expect_generate()
        .times(1)
        .returning(move |_| Box::pin(future::ready::<Result<String, ModelError>>(Ok(text.clone()))));
    model
}

/// A model that must answer exactly `expected` with `text`.
pub fn model_expecting(expected: QuizPrompt, text: &str) -> MockModel {
    let text = text.to_string();
    let mut model = MockModel::new();
    model
        .expect_generate()
        .withf(move |prompt| *prompt == expected)
        .times(1)
        .returning(move |_| Box::pin(future::ready::<Result<String, ModelError>>(Ok(text.clone()))));
    model
}

/// A model whose single call fails like an unreachable provider.
pub fn model_failing() -> MockModel {
    let mut model = MockModel::new();
    model.expect_generate().times(1).returning(|_| {
        Box::pin(future::ready::<Result<String, ModelError>>(Err(
            ModelError::Mistral(MistralError::Unknown),
        )))
    });
    model
}

/// A model that must never be called.
pub fn model_unused() -> MockModel {
    let mut model = MockModel::new();
    model.expect_generate().never();
    model
}

/// A reply target that accepts exactly `messages`, in order.
pub fn reply_expecting(messages: &[&str]) -> MockReply {
    let mut reply = MockReply::new();
    let mut seq = Sequence::new();
    for message in messages {
        reply
            .expect_send_text()
            .with(eq(message.to_string()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Box::pin(future::ready::<CommandResult>(Ok(()))));
    }
    reply
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_model() {
        let model = model_answering("Q1: ok");

        let result = model
            .generate(&QuizPrompt {
                system: "system".to_string(),
                user: "user".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(result, "Q1: ok");
    }
}
