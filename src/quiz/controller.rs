//! Turns swipe gestures into answers and applies them to the store.

use tracing::debug;

use super::store::QuestionStore;
use crate::error::QuizError;
use crate::models::{GestureEvent, Resolution, SwipeDirection};

/// Owns the question store and is the only thing allowed to change it.
///
/// Each call to [`resolve`](Self::resolve) is a complete transition: read the
/// question, compare answers, then remove it or leave it. Nothing carries over
/// between calls.
#[derive(Debug, Clone)]
pub struct SwipeController {
    store: QuestionStore,
}

impl SwipeController {
    pub fn new(store: QuestionStore) -> Self {
        Self { store }
    }

    /// Read-only view of the remaining questions.
    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    /// Resolve a swipe on the question at `position`.
    ///
    /// A right swipe answers "true", a left swipe "false". A correct answer
    /// removes the question; a wrong one leaves the store as it was. A stale
    /// position is returned as [`QuizError::OutOfRange`] before anything is
    /// touched.
    pub fn resolve(
        &mut self,
        position: usize,
        direction: SwipeDirection,
    ) -> Result<Resolution, QuizError> {
        let expected = self.store.get(position)?.answer();
        let given = direction.asserted_answer();

        debug!(position, direction = direction.name(), expected, given, "resolving swipe");

        if expected == given {
            let question = self.store.remove_at(position)?;
            Ok(Resolution::Correct { position, question })
        } else {
            Ok(Resolution::Incorrect { position })
        }
    }

    pub fn handle(&mut self, event: GestureEvent) -> Result<Resolution, QuizError> {
        self.resolve(event.position, event.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeedbackSignal, ViewUpdate};

    fn controller(items: &[(&str, bool)]) -> SwipeController {
        let statements = items.iter().map(|(s, _)| s.to_string()).collect();
        let answers = items.iter().map(|(_, a)| *a).collect();
        SwipeController::new(QuestionStore::initialize(statements, answers).unwrap())
    }

    fn texts(ctrl: &SwipeController) -> Vec<String> {
        ctrl.store().iter().map(|q| q.text().to_string()).collect()
    }

    #[test]
    fn sky_and_fish_scenario() {
        let mut ctrl = controller(&[("Sky is blue", true), ("Fish fly", false)]);

        let first = ctrl.resolve(0, SwipeDirection::Right).unwrap();
        assert!(first.is_correct());
        assert_eq!(first.feedback(), FeedbackSignal::Correct);
        assert_eq!(first.view_update(), ViewUpdate::RefreshAll);
        assert_eq!(ctrl.store().size(), 1);
        assert_eq!(ctrl.store().get(0).unwrap().text(), "Fish fly");

        let second = ctrl.resolve(0, SwipeDirection::Right).unwrap();
        assert_eq!(second, Resolution::Incorrect { position: 0 });
        assert_eq!(second.view_update(), ViewUpdate::RefreshRow(0));
        assert_eq!(ctrl.store().size(), 1);
    }

    #[test]
    fn stale_position_is_out_of_range() {
        let mut ctrl = controller(&[("Sky is blue", true), ("Fish fly", false)]);

        let err = ctrl.resolve(5, SwipeDirection::Right).unwrap_err();
        assert_eq!(err, QuizError::OutOfRange { position: 5, len: 2 });
        assert_eq!(ctrl.store().size(), 2);

        let err = ctrl.resolve(2, SwipeDirection::Left).unwrap_err();
        assert!(matches!(err, QuizError::OutOfRange { .. }));
        assert_eq!(texts(&ctrl), vec!["Sky is blue", "Fish fly"]);
    }

    #[test]
    fn direction_decides_correctness() {
        let cases = [
            (true, SwipeDirection::Right, true),
            (true, SwipeDirection::Left, false),
            (false, SwipeDirection::Right, false),
            (false, SwipeDirection::Left, true),
        ];

        for (answer, direction, correct) in cases {
            let mut ctrl = controller(&[("statement", answer)]);
            let res = ctrl.resolve(0, direction).unwrap();
            assert_eq!(res.is_correct(), correct, "answer={answer} direction={direction:?}");
        }
    }

    #[test]
    fn correct_answer_removes_only_that_question() {
        let mut ctrl = controller(&[("A", true), ("B", false), ("C", true), ("D", false)]);

        let res = ctrl.resolve(1, SwipeDirection::Left).unwrap();
        match res {
            Resolution::Correct { position, question } => {
                assert_eq!(position, 1);
                assert_eq!(question.text(), "B");
            }
            other => panic!("expected a correct resolution, got {other:?}"),
        }
        assert_eq!(texts(&ctrl), vec!["A", "C", "D"]);
    }

    #[test]
    fn wrong_answer_keeps_the_same_question_in_place() {
        let mut ctrl = controller(&[("A", true), ("B", false), ("C", true)]);
        let before = ctrl.store().get(2).unwrap().clone();

        let res = ctrl.resolve(2, SwipeDirection::Left).unwrap();
        assert_eq!(res.feedback(), FeedbackSignal::Incorrect);
        assert_eq!(ctrl.store().size(), 3);
        assert_eq!(ctrl.store().get(2).unwrap(), &before);
    }

    #[test]
    fn answering_everything_empties_the_store() {
        let mut ctrl = controller(&[("A", true), ("B", false)]);

        ctrl.handle(GestureEvent::new(1, SwipeDirection::Left)).unwrap();
        ctrl.handle(GestureEvent::new(0, SwipeDirection::Right)).unwrap();
        assert!(ctrl.store().is_empty());

        let err = ctrl.handle(GestureEvent::new(0, SwipeDirection::Right)).unwrap_err();
        assert_eq!(err, QuizError::OutOfRange { position: 0, len: 0 });
    }
}
