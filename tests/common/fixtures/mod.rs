//! Sample `/generate` arguments used across the integration tests

/// Subject and topic only.
pub const SUBJECT_AND_TOPIC: &str = "Computer Science, Algorithms";

/// Language, count and comment.
pub const WITH_COMMENT: &str = "Math, Algebra, Spanish, 3, beginner level";

/// Every field, including the weight group.
pub const WITH_WEIGHTS: &str = "CS, Graphs, English, 5, hard, 10,8,9,1";

/// Three of the four weights, which no shape accepts.
pub const PARTIAL_WEIGHTS: &str = "CS, Graphs, English, 5, hard, 10,8,9";

/// A full shape whose first weight isn't an integer.
pub const BAD_WEIGHT: &str = "CS, Graphs, English, 5, hard, x,8,9,1";

/// Canned model output.
pub const QUESTIONS: &str = "Q1: What is Big-O notation?\nA1: A bound on growth rate.";
