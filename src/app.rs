use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::data::Catalog;
use crate::input::{self, Command, KeyScope};
use crate::models::{AnswerRecord, BadgePolicy, BadgeTier, Direction, GradeTier, Phase, Question};
use crate::session::SessionState;
use crate::ui;

/// Clickable regions the renderer reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Option(usize),
    Next,
    ViewResults,
    Restart,
}

/// Result of feeding one key event to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was bound and consumed.
    Handled,
    /// Not bound in the current phase.
    Ignored,
    Quit,
}

/// Read-only view of the session for rendering.
#[derive(Debug, Clone)]
pub struct QuizView<'a> {
    pub title: &'a str,
    pub phase: Phase,
    pub question: &'a Question,
    pub question_index: usize,
    pub total: usize,
    pub highlighted: Option<usize>,
    pub selected: Option<usize>,
    pub answer: Option<&'a AnswerRecord>,
    pub score: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    pub progress: f64,
    pub percentage: u32,
    pub badge: BadgeTier,
    pub grade: GradeTier,
    pub last_answer_correct: Option<bool>,
    pub questions: &'a [Question],
    pub answers: &'a [AnswerRecord],
    pub summary_scroll: usize,
}

impl QuizView<'_> {
    pub fn question_number(&self) -> usize {
        self.question_index + 1
    }

    pub fn is_last_question(&self) -> bool {
        self.question_number() == self.total
    }
}

/// Owns the catalog and the one live session; sole mutation entry point.
pub struct App {
    catalog: Catalog,
    policy: BadgePolicy,
    state: SessionState,
    scope: KeyScope,
    summary_scroll: usize,
}

impl App {
    pub fn new(catalog: Catalog, policy: BadgePolicy) -> Self {
        tracing::info!(
            title = catalog.title(),
            questions = catalog.len(),
            "quiz session started"
        );
        let state = SessionState::new();
        let scope = KeyScope::install(state.phase());
        Self {
            catalog,
            policy,
            state,
            scope,
            summary_scroll: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn key_scope(&self) -> &KeyScope {
        &self.scope
    }

    pub fn view(&self) -> QuizView<'_> {
        let catalog = &self.catalog;
        let state = &self.state;
        QuizView {
            title: catalog.title(),
            phase: state.phase(),
            question: state.current_question(catalog),
            question_index: state.current_index(),
            total: catalog.len(),
            highlighted: state.highlighted_option(),
            selected: state.selected_option(),
            answer: state.current_answer(),
            score: state.score(),
            current_streak: state.current_streak(),
            max_streak: state.max_streak(),
            progress: state.progress_fraction(catalog),
            percentage: state.percentage(catalog),
            badge: state.badge_tier(catalog, &self.policy),
            grade: state.grade_tier(catalog),
            last_answer_correct: state.last_answer_correct(),
            questions: catalog.questions(),
            answers: state.answers(),
            summary_scroll: self.summary_scroll,
        }
    }

    pub fn confirm_answer(&mut self, option_index: usize) -> bool {
        let changed = self.state.confirm_answer(&self.catalog, option_index);
        self.rescope();
        changed
    }

    pub fn advance(&mut self) -> bool {
        let changed = self.state.advance(&self.catalog);
        self.rescope();
        changed
    }

    pub fn acknowledge_badge(&mut self) -> bool {
        let changed = self.state.acknowledge_badge();
        if changed {
            self.summary_scroll = 0;
        }
        self.rescope();
        changed
    }

    pub fn restart(&mut self) {
        self.state.restart();
        self.summary_scroll = 0;
        self.rescope();
    }

    pub fn set_highlighted(&mut self, option_index: usize) -> bool {
        self.state.set_highlighted(&self.catalog, option_index)
    }

    pub fn move_highlight(&mut self, direction: Direction) -> bool {
        self.state.move_highlight(&self.catalog, direction)
    }

    /// Scroll the review; stops once the last entry reaches the top.
    pub fn scroll_summary_down(&mut self) {
        if self.state.phase() == Phase::Summary {
            let max = ui::max_review_scroll(self.state.answers());
            self.summary_scroll = (self.summary_scroll + 1).min(max);
        }
    }

    pub fn scroll_summary_up(&mut self) {
        self.summary_scroll = self.summary_scroll.saturating_sub(1);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if is_quit_key(key) {
            return KeyOutcome::Quit;
        }

        let Some(action) = input::decode(key) else {
            return KeyOutcome::Ignored;
        };

        match self.scope.dispatch(&self.state, &self.catalog, action) {
            Some(command) => {
                self.execute(command);
                KeyOutcome::Handled
            }
            None => KeyOutcome::Ignored,
        }
    }

    /// Pointer events bypass the router and hit the session directly.
    pub fn click(&mut self, target: PointerTarget) -> bool {
        tracing::debug!(?target, "pointer click");
        match target {
            PointerTarget::Option(index) => self.confirm_answer(index),
            PointerTarget::Next => self.advance(),
            PointerTarget::ViewResults => self.acknowledge_badge(),
            PointerTarget::Restart => {
                self.restart();
                true
            }
        }
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::SetHighlighted(index) => {
                self.set_highlighted(index);
            }
            Command::MoveHighlight(direction) => {
                self.move_highlight(direction);
            }
            Command::ConfirmAnswer(index) => {
                self.confirm_answer(index);
            }
            Command::Advance => {
                self.advance();
            }
            Command::AcknowledgeBadge => {
                self.acknowledge_badge();
            }
        }
    }

    /// Swap the key scope when the phase moved. The old scope drops here.
    fn rescope(&mut self) {
        if !self.scope.is_current(&self.state) {
            self.scope = KeyScope::install(self.state.phase());
        }
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
