//! Reward classifications derived from the final score.
//!
//! Badge and grade tiers use independent threshold ladders: the badge is
//! awarded on absolute counts, the grade on a rounded percentage.

/// Badge awarded when the last question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
}

impl BadgeTier {
    pub fn title(self) -> &'static str {
        match self {
            BadgeTier::Gold => "ゴールド Gold Badge",
            BadgeTier::Silver => "シルバー Silver Badge",
            BadgeTier::Bronze => "ブロンズ Bronze Badge",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            BadgeTier::Gold => "Perfect score! Outstanding work! 完璧！",
            BadgeTier::Silver => "Great job! You're doing well!",
            BadgeTier::Bronze => "Good start! Keep practicing!",
        }
    }
}

/// Summary-screen grade, computed from the rounded score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeTier {
    KeepPracticing,
    Good,
    Great,
    Outstanding,
}

impl GradeTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => GradeTier::Outstanding,
            70..=89 => GradeTier::Great,
            50..=69 => GradeTier::Good,
            _ => GradeTier::KeepPracticing,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            GradeTier::Outstanding => "Outstanding!",
            GradeTier::Great => "Great Job!",
            GradeTier::Good => "Good Effort!",
            GradeTier::KeepPracticing => "Keep Practicing!",
        }
    }

    pub fn japanese(self) -> &'static str {
        match self {
            GradeTier::Outstanding => "素晴らしい!",
            GradeTier::Great => "よくできました!",
            GradeTier::Good => "頑張りました!",
            GradeTier::KeepPracticing => "練習しましょう!",
        }
    }
}

/// Minimum score for a silver badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SilverThreshold {
    /// Absolute number of correct answers, independent of catalog length.
    Count(usize),
    /// Percentage of the catalog, rounded up to a whole question.
    ///
    /// Values above 100 are read as 100. `Percent(0)` awards silver to
    /// every run short of gold.
    Percent(u8),
}

impl SilverThreshold {
    pub fn required(self, total: usize) -> usize {
        match self {
            SilverThreshold::Count(count) => count,
            SilverThreshold::Percent(percent) => {
                (usize::from(percent.min(100)) * total).div_ceil(100)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgePolicy {
    pub silver: SilverThreshold,
}

impl Default for BadgePolicy {
    fn default() -> Self {
        Self {
            silver: SilverThreshold::Count(3),
        }
    }
}

impl BadgePolicy {
    pub fn tier(&self, score: usize, total: usize) -> BadgeTier {
        if score == total {
            BadgeTier::Gold
        } else if score >= self.silver.required(total) {
            BadgeTier::Silver
        } else {
            BadgeTier::Bronze
        }
    }
}
