/// Coarse screen state of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for an answer to the current question.
    #[default]
    Answering,
    /// Showing correctness and the explanation for the current question.
    Feedback,
    /// All questions answered; the badge is on screen.
    BadgeAward,
    /// Final review of every answer.
    Summary,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Answering => "answering",
            Phase::Feedback => "feedback",
            Phase::BadgeAward => "badge",
            Phase::Summary => "summary",
        }
    }
}

/// Direction of a highlight move over the option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}
