//! Mascot speech bubble.
//!
//! The message is a pure function of the rendered session, resolved in two
//! steps: the view is classified into a [`Scene`], then each scene maps to
//! exactly one cue.

use std::borrow::Cow;

use crate::app::QuizView;
use crate::models::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Opening,
    Learning,
    Challenge,
    Mastery,
}

impl Stage {
    fn of(question_index: usize) -> Self {
        match question_index {
            0 => Stage::Opening,
            1..=2 => Stage::Learning,
            3..=4 => Stage::Challenge,
            _ => Stage::Mastery,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreakTier {
    Cold,
    Warm,
    Hot(usize),
}

impl StreakTier {
    fn of(streak: usize) -> Self {
        match streak {
            0..=1 => StreakTier::Cold,
            2 => StreakTier::Warm,
            n => StreakTier::Hot(n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScoreBand {
    Perfect,
    Great,
    Good,
    TryAgain,
}

impl ScoreBand {
    fn of(score: usize, total: usize) -> Self {
        let scaled = score * 100;
        if score == total {
            ScoreBand::Perfect
        } else if scaled >= 80 * total {
            ScoreBand::Great
        } else if scaled >= 60 * total {
            ScoreBand::Good
        } else {
            ScoreBand::TryAgain
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scene {
    Asking { stage: Stage, streak: StreakTier },
    Reacting { stage: Stage, correct: bool },
    Badge,
    Summary(ScoreBand),
}

impl Scene {
    fn of(view: &QuizView<'_>) -> Self {
        let stage = Stage::of(view.question_index);
        match view.phase {
            Phase::Answering => Scene::Asking {
                stage,
                streak: StreakTier::of(view.current_streak),
            },
            Phase::Feedback => Scene::Reacting {
                stage,
                correct: view.last_answer_correct.unwrap_or(false),
            },
            Phase::BadgeAward => Scene::Badge,
            Phase::Summary => Scene::Summary(ScoreBand::of(view.score, view.total)),
        }
    }
}

/// Two-line bilingual message shown next to the mascot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub japanese: Cow<'static, str>,
    pub english: Cow<'static, str>,
}

fn fixed(japanese: &'static str, english: &'static str) -> Cue {
    Cue {
        japanese: Cow::Borrowed(japanese),
        english: Cow::Borrowed(english),
    }
}

pub fn cue(view: &QuizView<'_>) -> Cue {
    use Scene::*;
    use Stage::*;

    match Scene::of(view) {
        Badge => fixed("やった！", "Badge Unlocked!"),

        Summary(ScoreBand::Perfect) => fixed("完璧！", "Perfect Score!"),
        Summary(ScoreBand::Great) => fixed("素晴らしい！", "Great Job!"),
        Summary(ScoreBand::Good) => fixed("頑張った！", "Good Effort!"),
        Summary(ScoreBand::TryAgain) => fixed("次は頑張ろう！", "Let's try again!"),

        Asking { stage: Opening, .. } => fixed("始めよう！", "Let's start!"),
        Asking {
            stage: Learning,
            streak: StreakTier::Cold,
        } => fixed("集中して！", "Focus!"),
        Asking { stage: Learning, .. } => fixed("調子いいね！", "You're on fire!"),
        Asking {
            stage: Challenge,
            streak: StreakTier::Hot(n),
        } => Cue {
            japanese: Cow::Owned(format!("{}連続！", n)),
            english: Cow::Owned(format!("{} streak!", n)),
        },
        Asking { stage: Challenge, .. } => fixed("挑戦！", "Challenge!"),
        Asking { stage: Mastery, .. } => fixed("もう少し！", "Almost there!"),

        Reacting { stage: Opening, correct: true } => fixed("いいね！", "Nice!"),
        Reacting { stage: Opening, correct: false } => fixed("大丈夫！", "It's okay!"),
        Reacting { stage: Learning, correct: true } => fixed("正解！", "Correct!"),
        Reacting { stage: Learning, correct: false } => fixed("復習しよう！", "Let's review!"),
        Reacting { stage: Challenge, correct: true } => fixed("勝利！", "Victory!"),
        Reacting { stage: Challenge, correct: false } => fixed("諦めないで！", "Don't give up!"),
        Reacting { stage: Mastery, correct: true } => fixed("素晴らしい！", "Excellent!"),
        Reacting { stage: Mastery, correct: false } => fixed("良い挑戦！", "Good try!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, PointerTarget};
    use crate::data::Catalog;
    use crate::models::BadgePolicy;

    fn app() -> App {
        App::new(Catalog::sample(), BadgePolicy::default())
    }

    #[test]
    fn test_opening_cues() {
        let mut app = app();
        assert_eq!(cue(&app.view()).english, "Let's start!");
        app.click(PointerTarget::Option(0));
        assert_eq!(cue(&app.view()).english, "It's okay!");
    }

    #[test]
    fn test_learning_stage_reacts_to_streak() {
        let mut app = app();
        app.click(PointerTarget::Option(1));
        app.click(PointerTarget::Next);
        assert_eq!(cue(&app.view()).english, "Focus!");

        app.click(PointerTarget::Option(1));
        app.click(PointerTarget::Next);
        assert_eq!(cue(&app.view()).english, "You're on fire!");
    }

    #[test]
    fn test_challenge_stage_counts_streak() {
        let mut app = app();
        for pick in [1, 1, 2] {
            app.click(PointerTarget::Option(pick));
            app.click(PointerTarget::Next);
        }
        let cue = cue(&app.view());
        assert_eq!(cue.english, "3 streak!");
        assert_eq!(cue.japanese, "3連続！");
    }

    #[test]
    fn test_badge_and_summary_cues() {
        let mut app = app();
        for pick in [1, 1, 2, 0, 2] {
            app.click(PointerTarget::Option(pick));
            app.click(PointerTarget::Next);
        }
        assert_eq!(cue(&app.view()).english, "Badge Unlocked!");
        app.click(PointerTarget::ViewResults);
        assert_eq!(cue(&app.view()).english, "Great Job!");
    }

    #[test]
    fn test_score_band_uses_exact_ratio() {
        assert_eq!(ScoreBand::of(5, 5), ScoreBand::Perfect);
        assert_eq!(ScoreBand::of(4, 5), ScoreBand::Great);
        assert_eq!(ScoreBand::of(3, 5), ScoreBand::Good);
        assert_eq!(ScoreBand::of(2, 5), ScoreBand::TryAgain);
        // 79.5% stays below the great band
        assert_eq!(ScoreBand::of(159, 200), ScoreBand::Good);
    }

    #[test]
    fn test_stage_buckets() {
        assert_eq!(Stage::of(0), Stage::Opening);
        assert_eq!(Stage::of(2), Stage::Learning);
        assert_eq!(Stage::of(4), Stage::Challenge);
        assert_eq!(Stage::of(5), Stage::Mastery);
    }
}
