//! Main application state and logic.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{block::BorderType, Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::{debug, error, info, warn};

use super::theme::Theme;
use super::widgets::{slide_row, CompletionScreen, FeedbackToast, Header, KeyHints, SwipeLegend};
use crate::bank::QuestionBank;
use crate::config::Config;
use crate::error::QuizError;
use crate::gesture::SwipeTracker;
use crate::models::{FeedbackSignal, GestureEvent, Resolution, SwipeDirection, ViewUpdate};
use crate::quiz::SwipeController;

// ══════════════════════════════════════════════════════════════════════════
// Application State
// ══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Quiz,
    Complete,
}

pub struct App {
    pub screen: Screen,
    pub running: bool,

    // Config and theme
    pub config: Config,
    config_path: PathBuf,
    pub theme: Theme,

    // Quiz
    bank: QuestionBank,
    controller: SwipeController,
    total: usize,
    session_start: Instant,

    // Question list
    list_state: ListState,
    list_area: Option<Rect>, // Inner area of the list from the last frame
    tracker: SwipeTracker,
    drag_position: Option<usize>, // Store position under the press

    // Transient messages
    feedback: Option<(FeedbackSignal, Instant)>,
    status_message: Option<(String, Instant)>,
}

impl App {
    pub fn new(bank: QuestionBank, config: Config, config_path: PathBuf) -> Result<Self, QuizError> {
        let store = bank.to_store()?;
        let total = store.size();
        let theme = Theme::from_name(&config.theme);
        let tracker = SwipeTracker::new(config.swipe_threshold);

        info!(bank = %bank.name, questions = total, "quiz started");

        Ok(Self {
            screen: if total == 0 { Screen::Complete } else { Screen::Quiz },
            running: true,
            config,
            config_path,
            theme,
            bank,
            controller: SwipeController::new(store),
            total,
            session_start: Instant::now(),
            list_state: ListState::default().with_selected(if total == 0 { None } else { Some(0) }),
            list_area: None,
            tracker,
            drag_position: None,
            feedback: None,
            status_message: None,
        })
    }

    pub fn cycle_theme(&mut self) {
        let new_theme_name = self.theme.name.next();
        self.theme = Theme::new(new_theme_name);
        self.config.theme = new_theme_name.as_str().to_string();
        if let Err(err) = self.config.save(&self.config_path) {
            warn!(error = %err, "failed to save config");
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Resolve a gesture and bring the view in line with the outcome.
    ///
    /// A rejected gesture is logged and shown in the status line; the list
    /// is left exactly as it was.
    pub fn apply_gesture(&mut self, event: GestureEvent) -> Option<Resolution> {
        match self.controller.handle(event) {
            Ok(resolution) => {
                if let Resolution::Correct { position, ref question } = resolution {
                    debug!(position, question = question.text(), "question answered");
                    self.follow_removal(position);
                } else {
                    debug!(position = event.position, "wrong answer");
                }
                match resolution.view_update() {
                    ViewUpdate::RefreshAll => self.refresh_list(),
                    ViewUpdate::RefreshRow(position) => self.refresh_row(position),
                }
                self.status_message = None;
                self.feedback = Some((resolution.feedback(), Instant::now()));
                Some(resolution)
            }
            Err(err) => {
                error!(error = %err, position = event.position, "gesture rejected");
                self.cancel_drag();
                self.set_status(format!("Swipe rejected: {}", err));
                None
            }
        }
    }

    pub fn swipe_selected(&mut self, direction: SwipeDirection) {
        if let Some(position) = self.list_state.selected() {
            self.apply_gesture(GestureEvent::new(position, direction));
        }
    }

    /// Rows shifted after a removal: keep the selection inside the list.
    fn refresh_list(&mut self) {
        let remaining = self.controller.store().size();
        if self.controller.store().is_empty() {
            self.list_state.select(None);
            self.screen = Screen::Complete;
            info!(
                answered = self.total,
                secs = self.session_start.elapsed().as_secs(),
                "quiz complete"
            );
        } else if let Some(i) = self.list_state.selected() {
            if i >= remaining {
                self.list_state.select(Some(remaining - 1));
            }
        }
    }

    /// The row stays; drop any drag offset so it snaps back into place.
    fn refresh_row(&mut self, position: usize) {
        if self.drag_position == Some(position) {
            self.cancel_drag();
        }
    }

    /// Keep an in-progress drag on the question it started on after the
    /// question at `removed` leaves the store.
    fn follow_removal(&mut self, removed: usize) {
        match self.drag_position {
            Some(p) if p == removed => {
                info!(position = p, "dragged question was answered, drag cancelled");
                self.cancel_drag();
            }
            Some(p) if p > removed => self.drag_position = Some(p - 1),
            _ => {}
        }
    }

    fn cancel_drag(&mut self) {
        self.tracker.cancel();
        self.drag_position = None;
    }

    pub fn restart(&mut self) {
        match self.bank.to_store() {
            Ok(store) => {
                self.total = store.size();
                self.controller = SwipeController::new(store);
                self.list_state = ListState::default().with_selected(if self.total == 0 { None } else { Some(0) });
                self.cancel_drag();
                self.feedback = None;
                self.session_start = Instant::now();
                self.screen = if self.total == 0 { Screen::Complete } else { Screen::Quiz };
                info!(questions = self.total, "quiz restarted");
            }
            Err(err) => {
                error!(error = %err, "failed to rebuild question store");
                self.set_status(format!("Restart failed: {}", err));
            }
        }
    }

    /// Map a screen row inside the list to a position in the store.
    fn row_to_position(&self, row: u16) -> Option<usize> {
        let area = self.list_area?;
        if row < area.y || row >= area.y + area.height {
            return None;
        }
        let position = self.list_state.offset() + (row - area.y) as usize;
        (position < self.controller.store().size()).then_some(position)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Event Handling
    // ══════════════════════════════════════════════════════════════════════

    pub fn handle_events(&mut self) -> anyhow::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key.code),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match self.screen {
            Screen::Quiz => self.handle_quiz_keys(key),
            Screen::Complete => self.handle_complete_keys(key),
        }
    }

    fn handle_quiz_keys(&mut self, key: KeyCode) {
        let len = self.controller.store().size();
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.list_state.selected().unwrap_or(0);
                let new_i = if i == 0 { len.saturating_sub(1) } else { i - 1 };
                self.list_state.select(Some(new_i));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let i = self.list_state.selected().unwrap_or(0);
                let new_i = if i >= len.saturating_sub(1) { 0 } else { i + 1 };
                self.list_state.select(Some(new_i));
            }
            KeyCode::Left | KeyCode::Char('h') => self.swipe_selected(SwipeDirection::Left),
            KeyCode::Right | KeyCode::Char('l') => self.swipe_selected(SwipeDirection::Right),
            _ => {}
        }
    }

    fn handle_complete_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('r') | KeyCode::Enter => self.restart(),
            KeyCode::Char('t') => self.cycle_theme(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.screen != Screen::Quiz {
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(position) = self.row_to_position(mouse.row) {
                    self.list_state.select(Some(position));
                    self.tracker.press(mouse.column, mouse.row);
                    self.drag_position = Some(position);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.tracker.drag(mouse.column);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let target = self.drag_position.take();
                let direction = self.tracker.release(mouse.column, mouse.row);
                if let (Some(position), Some(direction)) = (target, direction) {
                    self.apply_gesture(GestureEvent::new(position, direction));
                }
            }
            _ => {}
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Rendering
    // ══════════════════════════════════════════════════════════════════════

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Clear with background
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.colors.bg_dark)),
            area,
        );

        match self.screen {
            Screen::Quiz => self.render_quiz(frame, area),
            Screen::Complete => self.render_complete(frame, area),
        }
    }

    fn render_quiz(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3),   // Header
            Constraint::Length(1),   // Spacing
            Constraint::Min(5),      // Question list
            Constraint::Length(1),   // Legend
            Constraint::Length(1),   // Feedback / status
            Constraint::Length(2),   // Hints
        ])
        .split(area);

        let store = self.controller.store();
        frame.render_widget(
            Header::new(&self.bank.name, store.size(), self.total, &self.theme),
            chunks[0],
        );

        let list_area = centered_rect(80, 100, chunks[2]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.list_border())
            .title(" Questions ")
            .title_style(self.theme.highlight());
        let inner = block.inner(list_area);
        // The marker column takes two cells
        let row_width = inner.width.saturating_sub(2) as usize;

        let dragged = self.drag_position;
        let offset = self.tracker.offset();
        let items: Vec<ListItem> = store
            .iter()
            .enumerate()
            .map(|(i, question)| {
                if dragged == Some(i) && offset != 0 {
                    let text = slide_row(question.text(), offset, row_width);
                    ListItem::new(Line::styled(text, self.theme.dragging(offset > 0)))
                } else {
                    let text = slide_row(question.text(), 0, row_width);
                    ListItem::new(Line::styled(text, self.theme.question()))
                }
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.selected())
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, list_area, &mut self.list_state);
        self.list_area = Some(inner);

        frame.render_widget(SwipeLegend::new(&self.theme), chunks[3]);

        let toast_ttl = Duration::from_millis(self.config.feedback_millis);
        if let Some((signal, shown)) = self.feedback {
            if shown.elapsed() < toast_ttl {
                frame.render_widget(FeedbackToast::new(signal, &self.theme), chunks[4]);
            }
        }
        // Errors win over feedback on the same line
        if let Some((ref msg, time)) = self.status_message {
            if time.elapsed().as_secs() < 5 {
                let status = Paragraph::new(msg.as_str())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(self.theme.colors.warning));
                frame.render_widget(Clear, chunks[4]);
                frame.render_widget(status, chunks[4]);
            }
        }

        let theme_hint = format!("[{}]", self.theme.name.display_name());
        let hints_data: [(&str, &str); 5] = [
            ("j/k", "nav"),
            ("h/←", "false"),
            ("l/→", "true"),
            ("t", &theme_hint),
            ("q", "quit"),
        ];
        frame.render_widget(KeyHints::new(&hints_data, &self.theme), chunks[5]);
    }

    fn render_complete(&mut self, frame: &mut Frame, area: Rect) {
        let card_area = centered_rect(50, 40, area);

        let duration_mins = self.session_start.elapsed().as_secs() / 60;

        frame.render_widget(
            CompletionScreen::new(self.total, duration_mins, &self.theme),
            card_area,
        );
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ══════════════════════════════════════════════════════════════════════════

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
