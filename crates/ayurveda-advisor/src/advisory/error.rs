/// Validation failures surfaced to callers. Table lookups never produce these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdvisoryError {
    #[error("questionnaire expects {expected} answers, received {found}")]
    WrongAnswerCount { expected: usize, found: usize },
    #[error("question {question} has invalid answer {value}; expected 0-3")]
    InvalidAnswer { question: usize, value: u8 },
    #[error("please answer all questions (unanswered: {})", join_numbers(.unanswered))]
    IncompleteQuestionnaire { unanswered: Vec<usize> },
    #[error("unknown dosha: {0}")]
    UnknownDosha(String),
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
}

fn join_numbers(numbers: &[usize]) -> String {
    numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
