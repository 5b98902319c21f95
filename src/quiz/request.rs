//! Parses `/generate` arguments into a [`QuizRequest`].
//!
//! The grammar is positional and comma-delimited:
//!
//! ```text
//! <subject>, <topic>[, <language>[, <count>[, <comment>[, <w1>,<w2>,<w3>,<w4>]]]]
//! ```
//!
//! Only the five shapes above are accepted. Subjects or comments that contain a comma
//! shift every later field and usually end up rejected by the shape check; there is no
//! escaping.

use std::str::FromStr;

use thiserror::Error;

/// Token counts accepted by [`QuizParser::parse`].
const SUPPORTED_SHAPES: [usize; 5] = [2, 3, 4, 5, 9];

/// Language used when the invocation does not name one.
pub const DEFAULT_LANGUAGE: &str = "English";
/// Question count used when the invocation omits it or supplies a non-integer.
pub const DEFAULT_NUM_QUESTIONS: i64 = 5;

/// Errors surfaced to the user when an invocation can't be turned into a request.
///
/// The `Display` text is sent to the chat as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizError {
    /// The argument string doesn't match any supported shape.
    #[error("Please provide a subject and topic (e.g., /generate Computer Science, Algorithms).")]
    InvalidShape,

    /// Four weights were supplied but at least one isn't an integer.
    #[error(
        "Please provide valid weights (e.g., /generate Computer Science, Algorithms, 5, beginner level, 10,8,9,1)."
    )]
    InvalidWeights,
}

/// Relative emphasis (0 = lowest, 10 = highest) for each question category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub problem_solving: i32,
    pub analytical_reasoning: i32,
    pub conceptual_understanding: i32,
    pub factual_recall: i32,
}

impl Weights {
    pub const fn new(
        problem_solving: i32,
        analytical_reasoning: i32,
        conceptual_understanding: i32,
        factual_recall: i32,
    ) -> Self {
        Self {
            problem_solving,
            analytical_reasoning,
            conceptual_understanding,
            factual_recall,
        }
    }

    /// Total of the four weights, used as the denominator of the allocation ratios.
    pub fn sum(&self) -> i64 {
        i64::from(self.problem_solving)
            + i64::from(self.analytical_reasoning)
            + i64::from(self.conceptual_understanding)
            + i64::from(self.factual_recall)
    }

    /// Builds the weight group from exactly four integer tokens.
    ///
    /// The group is all-or-nothing: a wrong token count or any non-integer token
    /// rejects the whole group.
    pub fn from_tokens(tokens: &[&str]) -> Result<Self, QuizError> {
        let [ps, ar, cu, fr] = tokens else {
            return Err(QuizError::InvalidWeights);
        };

        let parse = |token: &str| {
            token
                .trim()
                .parse::<i32>()
                .map_err(|_| QuizError::InvalidWeights)
        };

        Ok(Self::new(parse(*ps)?, parse(*ar)?, parse(*cu)?, parse(*fr)?))
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::new(10, 8, 9, 1)
    }
}

impl FromStr for Weights {
    type Err = QuizError;

    /// Parses `"10,8,9,1"`-style text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s.split(',').collect::<Vec<&str>>();
        Self::from_tokens(&tokens)
    }
}

/// A single, validated `/generate` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub subject: String,
    pub topic: String,
    pub language: String,
    pub num_questions: i64,
    /// Taken verbatim from the invocation, surrounding whitespace included.
    pub comment: String,
    pub weights: Weights,
}

/// Turns raw `/generate` arguments into a [`QuizRequest`].
///
/// The parser holds the default weight table; it carries no other state, so a
/// single instance can be shared by every concurrent invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizParser {
    defaults: Weights,
}

impl QuizParser {
    pub fn new(defaults: Weights) -> Self {
        Self { defaults }
    }

    /// Weights applied when an invocation doesn't supply its own.
    pub fn defaults(&self) -> Weights {
        self.defaults
    }

    /// Parses the argument string following the command keyword.
    ///
    /// A non-integer question count silently falls back to [`DEFAULT_NUM_QUESTIONS`],
    /// while a non-integer weight rejects the invocation.
    pub fn parse(&self, input: &str) -> Result<QuizRequest, QuizError> {
        let tokens = input.trim().split(',').collect::<Vec<&str>>();

        if !SUPPORTED_SHAPES.contains(&tokens.len()) {
            return Err(QuizError::InvalidShape);
        }

        let subject = tokens[0].trim();
        let topic = tokens[1].trim();
        if subject.is_empty() || topic.is_empty() {
            return Err(QuizError::InvalidShape);
        }

        let language = tokens.get(2).map_or(DEFAULT_LANGUAGE, |token| token.trim());

        let num_questions = tokens.get(3).map_or(DEFAULT_NUM_QUESTIONS, |token| {
            token.trim().parse().unwrap_or(DEFAULT_NUM_QUESTIONS)
        });

        let comment = tokens.get(4).copied().unwrap_or_default();

        let weights = match tokens.get(5..) {
            Some(group) if !group.is_empty() => Weights::from_tokens(group)?,
            _ => self.defaults,
        };

        Ok(QuizRequest {
            subject: subject.to_string(),
            topic: topic.to_string(),
            language: language.to_string(),
            num_questions,
            comment: comment.to_string(),
            weights,
        })
    }
}
