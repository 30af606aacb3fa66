//! Error types for the quiz core.
//!
//! Every variant here is a contract violation by the caller: a bank whose
//! lists don't line up, or a gesture aimed at a row that no longer exists.
//! None of them are worth retrying.

use thiserror::Error;

/// Errors raised by the question store and the swipe controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The statement and answer lists of a question bank differ in length.
    #[error("question bank has {statements} statements but {answers} answers")]
    Configuration { statements: usize, answers: usize },

    /// A position outside the store's current range.
    #[error("position {position} is out of range for {len} remaining questions")]
    OutOfRange { position: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_sizes() {
        let err = QuizError::Configuration { statements: 3, answers: 2 };
        assert_eq!(err.to_string(), "question bank has 3 statements but 2 answers");

        let err = QuizError::OutOfRange { position: 5, len: 2 };
        assert_eq!(err.to_string(), "position 5 is out of range for 2 remaining questions");
    }
}
