//! Custom widgets for the quiz TUI.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use super::theme::{icons, Theme};
use crate::models::FeedbackSignal;

// ══════════════════════════════════════════════════════════════════════════
// Header Widget
// ══════════════════════════════════════════════════════════════════════════

/// Bank name with a `remaining / total` counter underneath.
pub struct Header<'a> {
    title: &'a str,
    remaining: usize,
    total: usize,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, remaining: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            title,
            remaining,
            total,
            theme,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).split(area);

        Paragraph::new(Line::from(Span::styled(self.title, self.theme.title())))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        let answered = self.total.saturating_sub(self.remaining);
        let progress = Line::from(vec![
            Span::styled("Remaining: ", self.theme.subtitle()),
            Span::styled(self.remaining.to_string(), self.theme.progress()),
            Span::styled(format!(" / {}", self.total), self.theme.subtitle()),
            Span::styled("   Answered: ", self.theme.subtitle()),
            Span::styled(
                answered.to_string(),
                Style::default().fg(self.theme.colors.success),
            ),
        ]);
        Paragraph::new(progress)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Swipe Legend Widget
// ══════════════════════════════════════════════════════════════════════════

/// Reminds the user which direction means which answer.
pub struct SwipeLegend<'a> {
    theme: &'a Theme,
}

impl<'a> SwipeLegend<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for SwipeLegend<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(format!("{} false", icons::ARROW_LEFT), self.theme.dragging(false)),
            Span::styled("     swipe a question     ", self.theme.key_hint()),
            Span::styled(format!("true {}", icons::ARROW_RIGHT), self.theme.dragging(true)),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Feedback Toast Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct FeedbackToast<'a> {
    signal: FeedbackSignal,
    theme: &'a Theme,
}

impl<'a> FeedbackToast<'a> {
    pub fn new(signal: FeedbackSignal, theme: &'a Theme) -> Self {
        Self { signal, theme }
    }
}

impl Widget for FeedbackToast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let icon = match self.signal {
            FeedbackSignal::Correct => icons::CHECK,
            FeedbackSignal::Incorrect => icons::CROSS,
        };
        let style = Style::default()
            .fg(self.signal.color_for_theme(self.theme))
            .add_modifier(Modifier::BOLD);

        Paragraph::new(Line::from(Span::styled(
            format!("{} {}", icon, self.signal.message()),
            style,
        )))
        .alignment(Alignment::Center)
        .render(area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Key Hints Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct KeyHints<'a> {
    hints: &'a [(&'a str, &'a str)],
    theme: &'a Theme,
}

impl<'a> KeyHints<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = self
            .hints
            .iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(*key, self.theme.key_highlight()),
                    Span::styled(format!(" {} ", desc), self.theme.key_hint()),
                    Span::styled("│ ", Style::default().fg(self.theme.colors.text_dim)),
                ]
            })
            .collect();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Completion Screen Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct CompletionScreen<'a> {
    answered: usize,
    duration_mins: u64,
    theme: &'a Theme,
}

impl<'a> CompletionScreen<'a> {
    pub fn new(answered: usize, duration_mins: u64, theme: &'a Theme) -> Self {
        Self {
            answered,
            duration_mins,
            theme,
        }
    }
}

impl Widget for CompletionScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.colors.success))
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    "ALL ANSWERED",
                    Style::default()
                        .fg(self.theme.colors.success)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]))
            .title_alignment(Alignment::Center);

        let inner = block.inner(area);
        block.render(area, buf);

        let value = Style::default()
            .fg(self.theme.colors.primary)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(self.theme.colors.text_dim);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Every statement sorted!",
                Style::default()
                    .fg(self.theme.colors.success)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Questions answered: ", self.theme.subtitle()),
                Span::styled(self.answered.to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("Time: ", self.theme.subtitle()),
                Span::styled(format!("{} minutes", self.duration_mins), value),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", dim),
                Span::styled("r", self.theme.key_highlight()),
                Span::styled(" to play again or ", dim),
                Span::styled("q", self.theme.key_highlight()),
                Span::styled(" to quit", dim),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Row Helpers
// ══════════════════════════════════════════════════════════════════════════

/// Shift `text` horizontally by `offset` columns, then clip it to `width`.
///
/// Positive offsets pad on the left, negative ones drop leading columns.
/// Clipped text ends in an ellipsis.
pub fn slide_row(text: &str, offset: i32, width: usize) -> String {
    let mut shifted = String::new();
    if offset > 0 {
        shifted.push_str(&" ".repeat(offset as usize));
        shifted.push_str(text);
    } else {
        let mut skip = offset.unsigned_abs() as usize;
        let mut chars = text.chars();
        while skip > 0 {
            match chars.next() {
                Some(c) => skip = skip.saturating_sub(c.width().unwrap_or(0).max(1)),
                None => break,
            }
        }
        shifted.push_str(chars.as_str());
    }
    fit_width(&shifted, width)
}

/// Clip `text` to at most `width` display columns.
pub fn fit_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_width_leaves_short_text_alone() {
        assert_eq!(fit_width("Fish fly", 20), "Fish fly");
        assert_eq!(fit_width("Fish fly", 8), "Fish fly");
    }

    #[test]
    fn fit_width_clips_with_ellipsis() {
        assert_eq!(fit_width("Sky is blue", 6), "Sky i…");
        assert_eq!(fit_width("Sky is blue", 0), "");
    }

    #[test]
    fn fit_width_counts_wide_characters() {
        // Each CJK character is two columns wide.
        assert_eq!(fit_width("日本語です", 5), "日本…");
    }

    #[test]
    fn slide_row_moves_text_both_ways() {
        assert_eq!(slide_row("abc", 2, 10), "  abc");
        assert_eq!(slide_row("abcdef", -2, 10), "cdef");
        assert_eq!(slide_row("abc", -10, 10), "");
        assert_eq!(slide_row("abcdef", 3, 5), "   a…");
    }
}
