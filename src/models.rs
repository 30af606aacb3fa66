//! Data models for questions, gestures and their outcomes.

/// A single true/false statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    answer: bool,
}

impl Question {
    pub fn new(text: impl Into<String>, answer: bool) -> Self {
        Self {
            text: text.into(),
            answer,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the statement is true.
    pub fn answer(&self) -> bool {
        self.answer
    }
}

/// Horizontal direction of a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// The answer a swipe in this direction asserts: right is "true", left is "false".
    pub fn asserted_answer(&self) -> bool {
        matches!(self, Self::Right)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// A completed swipe against a row of the question list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureEvent {
    pub position: usize,
    pub direction: SwipeDirection,
}

impl GestureEvent {
    pub fn new(position: usize, direction: SwipeDirection) -> Self {
        Self { position, direction }
    }
}

/// Feedback shown to the user after a swipe is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackSignal {
    Correct,
    Incorrect,
}

impl FeedbackSignal {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Correct => "Correct!",
            Self::Incorrect => "Incorrect!",
        }
    }

    pub fn color_for_theme(&self, theme: &crate::ui::Theme) -> ratatui::style::Color {
        match self {
            Self::Correct => theme.colors.success,
            Self::Incorrect => theme.colors.error,
        }
    }
}

/// What the view has to redraw after a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewUpdate {
    /// A row was removed and every later row shifted up.
    RefreshAll,
    /// Nothing changed; the row at this position snaps back.
    RefreshRow(usize),
}

/// Outcome of resolving one gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The answer was right and the question was removed from the store.
    Correct { position: usize, question: Question },
    /// The answer was wrong; the store is untouched.
    Incorrect { position: usize },
}

impl Resolution {
    pub fn feedback(&self) -> FeedbackSignal {
        match self {
            Self::Correct { .. } => FeedbackSignal::Correct,
            Self::Incorrect { .. } => FeedbackSignal::Incorrect,
        }
    }

    pub fn view_update(&self) -> ViewUpdate {
        match self {
            Self::Correct { .. } => ViewUpdate::RefreshAll,
            Self::Incorrect { position } => ViewUpdate::RefreshRow(*position),
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_asserts_true_and_left_asserts_false() {
        assert!(SwipeDirection::Right.asserted_answer());
        assert!(!SwipeDirection::Left.asserted_answer());
    }

    #[test]
    fn correct_resolution_refreshes_everything() {
        let res = Resolution::Correct {
            position: 1,
            question: Question::new("Sky is blue", true),
        };
        assert_eq!(res.feedback(), FeedbackSignal::Correct);
        assert_eq!(res.view_update(), ViewUpdate::RefreshAll);
    }

    #[test]
    fn incorrect_resolution_refreshes_only_its_row() {
        let res = Resolution::Incorrect { position: 3 };
        assert_eq!(res.feedback(), FeedbackSignal::Incorrect);
        assert_eq!(res.view_update(), ViewUpdate::RefreshRow(3));
        assert!(!res.is_correct());
    }
}
