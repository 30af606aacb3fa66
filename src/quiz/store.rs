//! Ordered list of the questions still waiting for an answer.

use crate::error::QuizError;
use crate::models::Question;

/// Holds the remaining questions, addressed by 0-based position.
///
/// Positions are always contiguous: removing a question shifts every later
/// one down by one. Only the controller in this module may remove entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    /// Pair each statement with the answer at the same index.
    pub fn initialize(statements: Vec<String>, answers: Vec<bool>) -> Result<Self, QuizError> {
        if statements.len() != answers.len() {
            return Err(QuizError::Configuration {
                statements: statements.len(),
                answers: answers.len(),
            });
        }

        let questions = statements
            .into_iter()
            .zip(answers)
            .map(|(text, answer)| Question::new(text, answer))
            .collect();

        Ok(Self { questions })
    }

    pub fn get(&self, position: usize) -> Result<&Question, QuizError> {
        self.questions.get(position).ok_or(QuizError::OutOfRange {
            position,
            len: self.questions.len(),
        })
    }

    pub(super) fn remove_at(&mut self, position: usize) -> Result<Question, QuizError> {
        if position >= self.questions.len() {
            return Err(QuizError::OutOfRange {
                position,
                len: self.questions.len(),
            });
        }
        Ok(self.questions.remove(position))
    }

    pub fn size(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
