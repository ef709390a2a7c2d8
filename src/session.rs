//! Quiz session state machine.
//!
//! [`SessionState`] is the single mutable value of a quiz run. Every
//! operation is synchronous and total: calls that are invalid for the
//! current phase, or that carry an out-of-range option index, are ignored
//! and report `false`. The catalog is passed in by reference and never
//! stored or copied.

use crate::data::Catalog;
use crate::models::{AnswerRecord, BadgePolicy, BadgeTier, Direction, GradeTier, Phase, Question};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    current_index: usize,
    phase: Phase,
    selected_option: Option<usize>,
    highlighted_option: Option<usize>,
    answers: Vec<AnswerRecord>,
    score: usize,
    current_streak: usize,
    max_streak: usize,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn highlighted_option(&self) -> Option<usize> {
        self.highlighted_option
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn current_streak(&self) -> usize {
        self.current_streak
    }

    pub fn max_streak(&self) -> usize {
        self.max_streak
    }

    /// The question on screen, clamped into the catalog.
    pub fn current_question<'c>(&self, catalog: &'c Catalog) -> &'c Question {
        catalog.question_clamped(self.current_index)
    }

    /// Record an answer for the current question and show feedback.
    pub fn confirm_answer(&mut self, catalog: &Catalog, option_index: usize) -> bool {
        if self.phase != Phase::Answering {
            tracing::trace!(phase = self.phase.name(), "confirm ignored outside answering");
            return false;
        }

        let question = self.current_question(catalog);
        if option_index >= question.option_count() {
            tracing::trace!(option_index, "confirm ignored for out-of-range option");
            return false;
        }

        let is_correct = question.is_correct(option_index);
        self.answers.push(AnswerRecord {
            question_id: question.id,
            selected_option_index: option_index,
            is_correct,
        });

        if is_correct {
            self.score += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }

        self.selected_option = Some(option_index);
        self.phase = Phase::Feedback;

        tracing::debug!(
            question_id = question.id,
            option_index,
            is_correct,
            score = self.score,
            streak = self.current_streak,
            "answer confirmed"
        );
        true
    }

    /// Move past the feedback screen to the next question or the badge.
    pub fn advance(&mut self, catalog: &Catalog) -> bool {
        if self.phase != Phase::Feedback {
            tracing::trace!(phase = self.phase.name(), "advance ignored outside feedback");
            return false;
        }

        if self.current_index >= catalog.last_index() {
            self.phase = Phase::BadgeAward;
            tracing::info!(score = self.score, total = catalog.len(), "quiz finished");
        } else {
            self.current_index += 1;
            self.selected_option = None;
            self.highlighted_option = None;
            self.phase = Phase::Answering;
            tracing::debug!(index = self.current_index, "advanced to next question");
        }
        true
    }

    pub fn acknowledge_badge(&mut self) -> bool {
        if self.phase != Phase::BadgeAward {
            tracing::trace!(phase = self.phase.name(), "badge acknowledge ignored");
            return false;
        }
        self.phase = Phase::Summary;
        true
    }

    /// Replace the session with a fresh one. Valid from any phase.
    pub fn restart(&mut self) {
        *self = Self::new();
        tracing::info!("session restarted");
    }

    pub fn set_highlighted(&mut self, catalog: &Catalog, option_index: usize) -> bool {
        if self.phase != Phase::Answering {
            return false;
        }
        if option_index >= self.current_question(catalog).option_count() {
            return false;
        }
        self.highlighted_option = Some(option_index);
        true
    }

    /// Step the highlight cursor. Clamps at both ends, no wraparound.
    pub fn move_highlight(&mut self, catalog: &Catalog, direction: Direction) -> bool {
        if self.phase != Phase::Answering {
            return false;
        }

        let last = self.current_question(catalog).option_count() - 1;
        let next = match (self.highlighted_option, direction) {
            (None, _) => 0,
            (Some(current), Direction::Down) => (current + 1).min(last),
            (Some(current), Direction::Up) => current.saturating_sub(1),
        };
        self.highlighted_option = Some(next);
        true
    }

    /// Completed answers over catalog length; lags the displayed question.
    pub fn progress_fraction(&self, catalog: &Catalog) -> f64 {
        self.answers.len() as f64 / catalog.len() as f64
    }

    pub fn percentage(&self, catalog: &Catalog) -> u32 {
        (100.0 * self.score as f64 / catalog.len() as f64).round() as u32
    }

    pub fn badge_tier(&self, catalog: &Catalog, policy: &BadgePolicy) -> BadgeTier {
        policy.tier(self.score, catalog.len())
    }

    pub fn grade_tier(&self, catalog: &Catalog) -> GradeTier {
        GradeTier::from_percentage(self.percentage(catalog))
    }

    /// Correctness of the most recent answer, if any.
    pub fn last_answer_correct(&self) -> Option<bool> {
        self.answers.last().map(|record| record.is_correct)
    }

    /// The record for the question on screen once it has been answered.
    pub fn current_answer(&self) -> Option<&AnswerRecord> {
        match self.phase {
            Phase::Answering => None,
            _ => self.answers.last(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(state: &mut SessionState, catalog: &Catalog, picks: &[usize]) {
        for &pick in picks {
            assert!(state.confirm_answer(catalog, pick));
            assert!(state.advance(catalog));
        }
    }

    fn recomputed_score(state: &SessionState) -> usize {
        state.answers().iter().filter(|r| r.is_correct).count()
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::new();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.phase(), Phase::Answering);
        assert_eq!(state.selected_option(), None);
        assert_eq!(state.highlighted_option(), None);
        assert!(state.answers().is_empty());
        assert_eq!(state.score(), 0);
        assert_eq!(state.current_streak(), 0);
        assert_eq!(state.max_streak(), 0);
    }

    #[test]
    fn test_mixed_answers_scenario() {
        let catalog = Catalog::sample();
        let mut state = SessionState::new();
        answer_all(&mut state, &catalog, &[1, 1, 2, 0, 2]);

        assert_eq!(state.score(), 4);
        assert_eq!(state.answers().len(), 5);
        assert_eq!(state.current_streak(), 1);
        assert_eq!(state.max_streak(), 3);
        assert_eq!(state.phase(), Phase::BadgeAward);
        assert_eq!(
            state.badge_tier(&catalog, &BadgePolicy::default()),
            BadgeTier::Silver
        );
        assert_eq!(state.percentage(&catalog), 80);
        assert_eq!(state.grade_tier(&catalog), GradeTier::Great);
    }

    #[test]
    fn test_perfect_run_scenario() {
        let catalog = Catalog::sample();
        let mut state = SessionState::new();
        answer_all(&mut state, &catalog, &[1, 1, 2, 2, 2]);

        assert_eq!(state.score(), 5);
        assert_eq!(state.max_streak(), 5);
        assert_eq!(
            state.badge_tier(&catalog, &BadgePolicy::default()),
            BadgeTier::Gold
        );
        assert_eq!(state.percentage(&catalog), 100);
        assert_eq!(state.grade_tier(&catalog), GradeTier::Outstanding);
    }

    #[test]
    fn test_all_wrong_scenario() {
        let catalog = Catalog::sample();
        let mut state = SessionState::new();
        answer_all(&mut state, &catalog, &[0, 0, 0, 0, 0]);

        assert_eq!(state.score(), 0);
        assert_eq!(state.max_streak(), 0);
        assert_eq!(
            state.badge_tier(&catalog, &BadgePolicy::default()),
            BadgeTier::Bronze
        );
        assert_eq!(state.grade_tier(&catalog), GradeTier::KeepPracticing);
    }

    #[test]
    fn test_score_and_streak_invariants_hold_after_every_answer() {
        let catalog = Catalog::sample();
        let mut state = SessionState::new();
        let mut previous_max = 0;
        let mut run = 0;

        for (index, &pick) in [1, 0, 1, 2, 2].iter().enumerate() {
            state.confirm_answer(&catalog, pick);
            let correct = catalog.questions()[index].is_correct(pick);
            run = if correct { run + 1 } else { 0 };

            assert_eq!(state.score(), recomputed_score(&state));
            assert_eq!(state.current_streak(), run);
            assert!(state.max_streak() >= previous_max);
            assert!(state.max_streak() >= state.current_streak());
            previous_max = state.max_streak();

            state.advance(&catalog);
        }
    }

    #[test]
    fn test_confirm_twice_is_ignored() {
        let catalog = Catalog::sample();
        let mut state = SessionState::new();
        assert!(state.confirm_answer(&catalog, 1));
        let snapshot = state.clone();

        assert!(!state.confirm_answer(&catalog, 0));
        assert_eq!(state, snapshot);
        assert_eq!(state.answers().len(), 1);
    }

    #[test]
    fn test_confirm_out_of_range_is_ignored() {
        let catalog = Catalog::sample();
        let mut state = SessionState::new();
        assert!(!state.confirm_answer(&catalog, 4));
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn test_advance_requires_feedback() {
        let catalog = Catalog::sample();
        let mut state = SessionState::new();
        assert!(!state.advance(&catalog));
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn test_advance_clears_selection_and_highlight() {
        let catalog = Catalog::sample();
        let mut state = SessionState::new();
        state.set_highlighted(&catalog, 2);
        state.confirm_answer(&catalog, 2);
        assert_eq!(state.selected_option(), Some(2));
        assert_eq!(state.highlighted_option(), Some(2));

        state.advance(&catalog);
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.phase(), Phase::Answering);
        assert_eq!(state.selected_option(), None);
        assert_eq!(state.highlighted_option(), None);
    }

    #[test]
    fn test_progress_uses_answer_count() {
        let catalog = Catalog::sample();
        let mut state = SessionState::new();
        assert_eq!(state.progress_fraction(&catalog), 0.0);

        state.confirm_answer(&catalog, 1);
        assert_eq!(state.progress_fraction(&catalog), 0.2);
        state.advance(&catalog);

        assert_eq!(state.current_index(), 1);
        assert_eq!(state.progress_fraction(&catalog), 1.0 / 5.0);
    }

    #[test]
    fn test_badge_acknowledge_only_from_badge_phase() {
        let catalog = Catalog::sample();
        let mut state = SessionState::new();
        assert!(!state.acknowledge_badge());

        answer_all(&mut state, &catalog, &[1, 1, 2, 2, 2]);
        assert!(state.acknowledge_badge());
        assert_eq!(state.phase(), Phase::Summary);
        assert!(!state.acknowledge_badge());
        assert!(!state.advance(&catalog));
        assert_eq!(state.phase(), Phase::Summary);
    }

    #[test]
    fn test_restart_from_every_phase_matches_fresh_state() {
        let catalog = Catalog::sample();

        let mut answering = SessionState::new();
        answering.set_highlighted(&catalog, 3);
        answering.restart();
        assert_eq!(answering, SessionState::new());

        let mut feedback = SessionState::new();
        feedback.confirm_answer(&catalog, 1);
        feedback.restart();
        assert_eq!(feedback, SessionState::new());

        let mut badge = SessionState::new();
        answer_all(&mut badge, &catalog, &[1, 1, 2, 0, 2]);
        badge.restart();
        assert_eq!(badge, SessionState::new());

        let mut summary = SessionState::new();
        answer_all(&mut summary, &catalog, &[1, 1, 2, 2, 2]);
        summary.acknowledge_badge();
        summary.restart();
        assert_eq!(summary, SessionState::new());
    }

    #[test]
    fn test_move_highlight_clamps() {
        let catalog = Catalog::sample();
        let mut state = SessionState::new();

        state.move_highlight(&catalog, Direction::Down);
        assert_eq!(state.highlighted_option(), Some(0));
        state.move_highlight(&catalog, Direction::Down);
        assert_eq!(state.highlighted_option(), Some(1));
        state.move_highlight(&catalog, Direction::Up);
        state.move_highlight(&catalog, Direction::Up);
        assert_eq!(state.highlighted_option(), Some(0));

        for _ in 0..10 {
            state.move_highlight(&catalog, Direction::Down);
        }
        assert_eq!(state.highlighted_option(), Some(3));
    }

    #[test]
    fn test_move_up_without_highlight_starts_at_zero() {
        let catalog = Catalog::sample();
        let mut state = SessionState::new();
        state.move_highlight(&catalog, Direction::Up);
        assert_eq!(state.highlighted_option(), Some(0));
    }

    #[test]
    fn test_highlight_never_records_an_answer() {
        let catalog = Catalog::sample();
        let mut state = SessionState::new();
        assert!(state.set_highlighted(&catalog, 1));
        assert!(!state.set_highlighted(&catalog, 9));
        assert_eq!(state.highlighted_option(), Some(1));
        assert!(state.answers().is_empty());
        assert_eq!(state.score(), 0);
        assert_eq!(state.phase(), Phase::Answering);
    }

    #[test]
    fn test_highlight_ignored_during_feedback() {
        let catalog = Catalog::sample();
        let mut state = SessionState::new();
        state.confirm_answer(&catalog, 0);
        assert!(!state.set_highlighted(&catalog, 2));
        assert!(!state.move_highlight(&catalog, Direction::Down));
        assert_eq!(state.highlighted_option(), None);
    }

    #[test]
    fn test_single_question_catalog_goes_straight_to_badge() {
        let catalog = Catalog::new("one", vec![Catalog::sample().questions()[0].clone()]).unwrap();
        let mut state = SessionState::new();
        state.confirm_answer(&catalog, 1);
        state.advance(&catalog);
        assert_eq!(state.phase(), Phase::BadgeAward);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_last_answer_correct() {
        let catalog = Catalog::sample();
        let mut state = SessionState::new();
        assert_eq!(state.last_answer_correct(), None);
        state.confirm_answer(&catalog, 0);
        assert_eq!(state.last_answer_correct(), Some(false));
        assert_eq!(state.current_answer().map(|r| r.question_id), Some(1));
        state.advance(&catalog);
        assert!(state.current_answer().is_none());
    }
}
