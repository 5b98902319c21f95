use super::QuizRequest;

/// Sentence the model is told to reply with when the subject or topic is unusable.
pub const VAGUE_REQUEST_REPLY: &str =
    r#"Please provide a specific subject and topic (e.g., "Computer Science, Algorithms")."#;

/// The two-message exchange submitted to the model: instructions first, then the
/// per-request fact sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizPrompt {
    /// System-role instructions.
    pub system: String,
    /// User-role fact sheet.
    pub user: String,
}

impl QuizPrompt {
    /// Renders a request into its prompt. Field values are inserted verbatim.
    pub fn render(request: &QuizRequest) -> Self {
        Self {
            system: system_message(request),
            user: user_message(request),
        }
    }
}

fn system_message(request: &QuizRequest) -> String {
    let n = request.num_questions;
    let ps = request.weights.problem_solving;
    let ar = request.weights.analytical_reasoning;
    let cu = request.weights.conceptual_understanding;
    let fr = request.weights.factual_recall;
    let sum = request.weights.sum();

    format!(
        "You are a question generator bot that creates {n} quiz questions for the user-specified subject, topic and language. \
Use the comment to adjust question style, difficulty, or specific requirements if provided (e.g., 'beginner level', 'multiple-choice only'). \
Generate questions based on these weighted preferences (0=lowest, 10=highest):
- Problem-Solving ({ps}/10): Apply concepts to solve problems (e.g., coding challenges like 'Write a Python function to reverse a string' or math problems like 'Solve 2x + 3 = 7').
- Analytical Reasoning ({ar}/10): Analyze scenarios, identify patterns, or make logical deductions (e.g., 'What is the time complexity of this algorithm?' or 'Predict the outcome of this experiment').
- Conceptual Understanding ({cu}/10): Test comprehension of core concepts via explanation or interpretation (e.g., 'Explain how a hash table works' or 'Why does this chemical reaction occur?').
- Factual Recall ({fr}/10): Specific facts or definitions, used minimally (e.g., 'Define a binary tree' or 'What is the capital of France?').

Guidelines:
1. Generate exactly {n} questions in the user specified language, distributed proportionally based on weights \
(e.g., for weights {ps}:{ar}:{cu}:{fr}, allocate ~{ps}/{sum} Problem-Solving, ~{ar}/{sum} Analytical Reasoning, \
~{cu}/{sum} Conceptual Understanding, ~{fr}/{sum} Factual Recall, where sum is the total weight).
2. Questions must match the subject and topic, targeting intermediate difficulty unless specified in the comment.
3. Each question includes a clear question and concise answer in the specified language (<100 words).
4. Format output as:
   Q1: <question>
   A1: <answer>
   ...
5. If the subject or topic is vague or invalid, return: '{VAGUE_REQUEST_REPLY}'
6. Ensure questions are engaging, concise, and promote learning or practical application."
    )
}

fn user_message(request: &QuizRequest) -> String {
    format!(
        "Subject: {}\nTopic: {}\nLanguage: {}\nComment: {}",
        request.subject, request.topic, request.language, request.comment
    )
}
